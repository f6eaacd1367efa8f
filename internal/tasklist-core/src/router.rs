// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Routes pointer input to the controller.
//!
//! All clicks inside the task container go through one handler,
//! [`EventRouter::click`], which looks up the [`Role`] of the clicked control
//! in a dispatch table. The page-level "Add Task" control has its own entry
//! point, [`EventRouter::click_add_task`].

use std::collections::HashMap;
use std::rc::Rc;
use std::str::FromStr;

use crate::controller::TaskListController;
use crate::model::FormId;
use crate::view::{Control, NodeKey, Role};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    Ignored,
}

impl From<bool> for Dispatch {
    fn from(handled: bool) -> Self {
        if handled {
            Dispatch::Handled
        } else {
            Dispatch::Ignored
        }
    }
}

/// The element a click landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Control(Control),
    /// Card background, task text, or anything else without a role.
    Other,
}

type Action = fn(&TaskListController, NodeKey) -> bool;

const ROUTES: &[(Role, Action)] = &[
    (Role::Toggle, toggle),
    (Role::Delete, delete),
    (Role::Cancel, cancel),
    (Role::Confirm, confirm),
];

fn toggle(controller: &TaskListController, key: NodeKey) -> bool {
    match key {
        NodeKey::Task(id) => controller.toggle_task(id).is_some(),
        NodeKey::Form(_) => false,
    }
}

fn delete(controller: &TaskListController, key: NodeKey) -> bool {
    match key {
        NodeKey::Task(id) => controller.remove_task(id),
        NodeKey::Form(_) => false,
    }
}

fn cancel(controller: &TaskListController, key: NodeKey) -> bool {
    match key {
        NodeKey::Form(id) => controller.cancel_add_form(id),
        NodeKey::Task(_) => false,
    }
}

fn confirm(controller: &TaskListController, key: NodeKey) -> bool {
    match key {
        // an empty draft still discards the form, so this counts as handled
        NodeKey::Form(id) if is_pending(controller, id) => {
            controller.confirm_add_form(id);
            true
        }
        _ => false,
    }
}

fn is_pending(controller: &TaskListController, id: FormId) -> bool {
    controller.pending_form().is_some_and(|form| form.id == id)
}

pub struct EventRouter {
    controller: Rc<TaskListController>,
    routes: HashMap<Role, Action>,
}

impl EventRouter {
    pub fn new(controller: Rc<TaskListController>) -> Self {
        Self { controller, routes: ROUTES.iter().copied().collect() }
    }

    pub fn controller(&self) -> &Rc<TaskListController> {
        &self.controller
    }

    /// Handler for every click inside the task container.
    pub fn click(&self, target: ClickTarget) -> Dispatch {
        let ClickTarget::Control(control) = target else {
            log::trace!("click without a control");
            return Dispatch::Ignored;
        };

        // the control must still be on screen and belong to its card
        let rendered = self
            .controller
            .node(control.target)
            .and_then(|node| node.control(control.role))
            .is_some_and(|rendered| rendered == control);
        if !rendered {
            log::trace!("stale {} click on {}", control.role, control.target);
            return Dispatch::Ignored;
        }

        let Some(action) = self.routes.get(&control.role) else {
            return Dispatch::Ignored;
        };

        log::debug!("{} on {}", control.role, control.target);
        action(&self.controller, control.target).into()
    }

    pub fn click_control(&self, role: Role, target: NodeKey) -> Dispatch {
        self.click(ClickTarget::Control(Control { role, target }))
    }

    /// Same as [`Self::click_control`], for a role given as its attribute
    /// string (`toggle`, `delete`, `cancel`, `confirm`).
    pub fn route_attribute(&self, role: &str, target: NodeKey) -> Dispatch {
        match Role::from_str(role) {
            Ok(role) => self.click_control(role, target),
            Err(_) => {
                log::trace!("unknown role {role:?}");
                Dispatch::Ignored
            }
        }
    }

    /// Text typed into the draft field of an add-task form.
    pub fn route_input(&self, target: NodeKey, text: &str) -> Dispatch {
        match target {
            NodeKey::Form(id) => self.controller.edit_draft(id, text).into(),
            NodeKey::Task(_) => Dispatch::Ignored,
        }
    }

    /// Handler for the page-level "Add Task" control.
    pub fn click_add_task(&self) -> FormId {
        self.controller.open_add_form()
    }
}
