// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slint::ModelRc;

use crate::container::TaskContainer;
use crate::model::{FormId, PendingAddForm, Task, TaskId, TaskState, TaskSummary};
use crate::view::{render_add_form, render_task, CardNode, NodeKey, RenderContext};
use crate::Callback;

/// Owns the task list and the pending add-task form, and keeps the visual
/// container in sync with them.
///
/// All operations complete synchronously. Operations on tasks or forms that
/// no longer exist do nothing.
pub struct TaskListController {
    tasks: RefCell<Vec<Task>>,
    pending: RefCell<Option<PendingAddForm>>,
    container: Rc<TaskContainer>,
    render_context: RenderContext,
    next_task_id: Cell<u64>,
    next_form_id: Cell<u64>,
    changed_callback: Rc<Callback<TaskSummary>>,
}

impl TaskListController {
    pub fn new(render_context: RenderContext) -> Rc<Self> {
        Rc::new(Self {
            tasks: RefCell::default(),
            pending: RefCell::default(),
            container: Rc::new(TaskContainer::new()),
            render_context,
            next_task_id: Cell::new(1),
            next_form_id: Cell::new(1),
            changed_callback: Rc::new(Callback::default()),
        })
    }

    pub fn container(&self) -> ModelRc<CardNode> {
        self.container.clone().into()
    }

    /// The rendered card with this key, if it is on screen.
    pub fn node(&self, key: NodeKey) -> Option<CardNode> {
        self.container.node(key)
    }

    pub fn render_context(&self) -> &RenderContext {
        &self.render_context
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    pub fn task(&self, id: TaskId) -> Option<Task> {
        self.tasks.borrow().iter().find(|task| task.id == id).cloned()
    }

    /// `None` for ids that were never issued.
    pub fn task_state(&self, id: TaskId) -> Option<TaskState> {
        match self.task(id) {
            Some(task) => Some(task.state()),
            None if id.0 > 0 && id.0 < self.next_task_id.get() => Some(TaskState::Deleted),
            None => None,
        }
    }

    pub fn summary(&self) -> TaskSummary {
        TaskSummary::from_tasks(self.tasks.borrow().iter())
    }

    pub fn pending_form(&self) -> Option<PendingAddForm> {
        self.pending.borrow().clone()
    }

    pub fn on_changed(&self, mut callback: impl FnMut(TaskSummary) + 'static) {
        self.changed_callback.on(move |summary| {
            callback(*summary);
        });
    }

    /// Appends a new incomplete task. Empty text is rejected.
    pub fn add_task(&self, text: &str) -> Option<TaskId> {
        if text.is_empty() {
            log::trace!("ignoring empty task text");
            return None;
        }

        let id = TaskId(self.next_task_id.get());
        self.next_task_id.set(id.0 + 1);

        let task = Task { id, text: text.into(), completed: false };
        let node = CardNode::Task(render_task(&task, &self.render_context));
        self.tasks.borrow_mut().push(task);
        self.container.push(node);

        log::debug!("added {id}");
        self.notify_changed();
        Some(id)
    }

    pub fn remove_task(&self, id: TaskId) -> bool {
        let removed = {
            let mut tasks = self.tasks.borrow_mut();
            match tasks.iter().position(|task| task.id == id) {
                Some(index) => {
                    tasks.remove(index);
                    true
                }
                None => false,
            }
        };

        if !removed {
            log::trace!("{id} is already gone");
            return false;
        }

        self.container.remove(NodeKey::Task(id));
        log::debug!("removed {id}");
        self.notify_changed();
        true
    }

    /// Flips the completion flag and returns the new state.
    pub fn toggle_task(&self, id: TaskId) -> Option<TaskState> {
        let task = {
            let mut tasks = self.tasks.borrow_mut();
            let task = tasks.iter_mut().find(|task| task.id == id)?;
            task.completed = !task.completed;
            task.clone()
        };

        self.container.replace(CardNode::Task(render_task(&task, &self.render_context)));
        log::debug!("{id} is now {}", task.state());
        self.notify_changed();
        Some(task.state())
    }

    /// Shows the add-task form at the front of the container.
    ///
    /// If a form is already pending it is kept as is, draft included, and its
    /// id is returned.
    pub fn open_add_form(&self) -> FormId {
        if let Some(form) = self.pending.borrow().as_ref() {
            log::debug!("{} is already open", form.id);
            return form.id;
        }

        let id = FormId(self.next_form_id.get());
        self.next_form_id.set(id.0 + 1);

        let form = PendingAddForm::new(id);
        let node = CardNode::AddForm(render_add_form(&form));
        *self.pending.borrow_mut() = Some(form);
        self.container.insert_front(node);

        log::debug!("opened {id}");
        id
    }

    /// Stores the draft text typed into the form.
    ///
    /// The text field already shows what was typed, so the container row is
    /// updated without a change notification.
    pub fn edit_draft(&self, id: FormId, text: &str) -> bool {
        let form = {
            let mut pending = self.pending.borrow_mut();
            match pending.as_mut() {
                Some(form) if form.id == id => {
                    form.draft_text = text.into();
                    form.clone()
                }
                _ => return false,
            }
        };

        self.container.update_quietly(CardNode::AddForm(render_add_form(&form)));
        true
    }

    pub fn cancel_add_form(&self, id: FormId) -> bool {
        if self.take_pending(id).is_none() {
            return false;
        }

        log::debug!("cancelled {id}");
        true
    }

    /// Discards the form and creates a task from its draft.
    ///
    /// Returns the new task, or `None` when the draft was empty or the form is
    /// not the pending one. The draft is not trimmed.
    pub fn confirm_add_form(&self, id: FormId) -> Option<TaskId> {
        let form = self.take_pending(id)?;
        log::debug!("confirmed {id}");
        self.add_task(&form.draft_text)
    }

    fn take_pending(&self, id: FormId) -> Option<PendingAddForm> {
        let form = {
            let mut pending = self.pending.borrow_mut();
            if pending.as_ref().map(|form| form.id) != Some(id) {
                log::trace!("{id} is not the pending form");
                return None;
            }
            pending.take()
        };

        self.container.remove(NodeKey::Form(id));
        form
    }

    fn notify_changed(&self) {
        self.changed_callback.invoke(&self.summary());
    }
}
