// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::fmt;

/// Identifies a task for the lifetime of a session. Ids are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

/// Identifies one opened add-task form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FormId(pub u64);

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "form-{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn state(&self) -> TaskState {
        if self.completed {
            TaskState::Complete
        } else {
            TaskState::Incomplete
        }
    }
}

/// Lifecycle of a task. `Deleted` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum TaskState {
    Incomplete,
    Complete,
    Deleted,
}

/// Unsaved draft of a task, backing the add-task card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingAddForm {
    pub id: FormId,
    pub draft_text: String,
}

impl PendingAddForm {
    pub fn new(id: FormId) -> Self {
        Self { id, draft_text: String::new() }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
}

impl TaskSummary {
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut summary, task| {
            summary.total += 1;
            if task.completed {
                summary.completed += 1;
            }
            summary
        })
    }
}

impl fmt::Display for TaskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.total == 1 { "task" } else { "tasks" };
        write!(f, "{} {}, {} done", self.total, noun, self.completed)
    }
}
