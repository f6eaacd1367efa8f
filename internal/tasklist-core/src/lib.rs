// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/*!
# Task list core

State, rendering and input routing for a task list made of cards.

- [`TaskListController`] owns the tasks and the pending add-task form.
- [`view`] renders tasks and forms into [`CardNode`]s, a pure function of the
  data and a [`RenderContext`].
- [`TaskContainer`] holds the rendered cards in display order and implements
  [`slint::Model`], so a Slint `for` repeater can show it directly.
- [`EventRouter`] classifies clicks by the [`Role`] of the clicked control and
  calls the controller.

```
use tasklist_core::{EventRouter, NodeKey, RenderContext, Role, TaskListController};

let router = EventRouter::new(TaskListController::new(RenderContext::default()));
let form = router.click_add_task();
router.route_input(NodeKey::Form(form), "Buy milk");
router.click_control(Role::Confirm, NodeKey::Form(form));

assert_eq!(router.controller().tasks()[0].text, "Buy milk");
```
*/

mod callback;
pub use callback::*;

mod container;
pub use container::TaskContainer;

mod controller;
pub use controller::TaskListController;

pub mod model;
pub use model::{FormId, PendingAddForm, Task, TaskId, TaskState, TaskSummary};

mod router;
pub use router::{ClickTarget, Dispatch, EventRouter};

pub mod view;
pub use view::{CardNode, Control, IconKind, NodeKey, RenderContext, Role};
