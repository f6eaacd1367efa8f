// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Pure rendering of tasks and add-task forms into card nodes.
//!
//! A card node is everything the visual layer needs to draw one row of the
//! task container. Each interactive control carries a [`Role`] and the
//! [`NodeKey`] of the card it belongs to, so a click can be classified without
//! looking at icons or labels.

use std::fmt;

use crate::model::{FormId, PendingAddForm, Task, TaskId};

pub const ADD_FORM_PLACEHOLDER: &str = "Task name goes here.";
pub const CANCEL_LABEL: &str = "Cancel";
pub const CONFIRM_LABEL: &str = "Add Task";

/// What a control does when clicked. Set once when the control is rendered.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter
)]
#[strum(serialize_all = "kebab-case")]
pub enum Role {
    Toggle,
    Delete,
    Cancel,
    Confirm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum IconKind {
    Unchecked,
    Checked,
    Delete,
}

impl IconKind {
    pub fn file_name(self) -> &'static str {
        match self {
            IconKind::Unchecked => "unchecked.svg",
            IconKind::Checked => "checked.svg",
            IconKind::Delete => "delete.svg",
        }
    }

    pub fn alt_text(self) -> &'static str {
        match self {
            IconKind::Unchecked => "An unfilled circle.",
            IconKind::Checked => "An unfilled circle with a tick mark inside.",
            IconKind::Delete => "A trashcan icon.",
        }
    }
}

/// Style class of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum CardClass {
    TaskIncomplete,
    TaskComplete,
    AddTaskCard,
}

impl CardClass {
    /// Full class list as it is applied to the card element.
    pub fn class_list(self) -> String {
        match self {
            CardClass::AddTaskCard => self.to_string(),
            _ => format!("task-card {self}"),
        }
    }
}

/// Rendering parameters shared by all cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderContext {
    /// Prefix prepended to icon file names, including the trailing separator.
    pub icon_prefix: String,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self { icon_prefix: "icon/".into() }
    }
}

impl RenderContext {
    pub fn new(icon_prefix: impl Into<String>) -> Self {
        Self { icon_prefix: icon_prefix.into() }
    }

    pub fn icon(&self, kind: IconKind) -> Icon {
        let src = format!("{}{}", self.icon_prefix, kind.file_name());
        Icon { kind, src, alt: kind.alt_text() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Icon {
    pub kind: IconKind,
    pub src: String,
    pub alt: &'static str,
}

/// Key of a card node inside the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKey {
    Task(TaskId),
    Form(FormId),
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Task(id) => write!(f, "{id}"),
            NodeKey::Form(id) => write!(f, "{id}"),
        }
    }
}

/// An interactive region of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Control {
    pub role: Role,
    pub target: NodeKey,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconControl {
    pub control: Control,
    pub icon: Icon,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonControl {
    pub control: Control,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskCardNode {
    pub task: TaskId,
    pub class: CardClass,
    pub toggle: IconControl,
    pub text: String,
    pub delete: IconControl,
}

impl TaskCardNode {
    pub fn completed(&self) -> bool {
        self.class == CardClass::TaskComplete
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddFormNode {
    pub form: FormId,
    pub draft_text: String,
    pub placeholder: &'static str,
    pub cancel: ButtonControl,
    pub confirm: ButtonControl,
}

/// One row of the task container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardNode {
    Task(TaskCardNode),
    AddForm(AddFormNode),
}

impl CardNode {
    pub fn key(&self) -> NodeKey {
        match self {
            CardNode::Task(card) => NodeKey::Task(card.task),
            CardNode::AddForm(form) => NodeKey::Form(form.form),
        }
    }

    pub fn class(&self) -> CardClass {
        match self {
            CardNode::Task(card) => card.class,
            CardNode::AddForm(_) => CardClass::AddTaskCard,
        }
    }

    /// The controls of this card, in visual order.
    pub fn controls(&self) -> Vec<Control> {
        match self {
            CardNode::Task(card) => vec![card.toggle.control, card.delete.control],
            CardNode::AddForm(form) => vec![form.cancel.control, form.confirm.control],
        }
    }

    pub fn control(&self, role: Role) -> Option<Control> {
        self.controls().into_iter().find(|control| control.role == role)
    }

    pub fn as_task(&self) -> Option<&TaskCardNode> {
        match self {
            CardNode::Task(card) => Some(card),
            CardNode::AddForm(_) => None,
        }
    }

    pub fn as_add_form(&self) -> Option<&AddFormNode> {
        match self {
            CardNode::AddForm(form) => Some(form),
            CardNode::Task(_) => None,
        }
    }
}

pub fn render_task(task: &Task, ctx: &RenderContext) -> TaskCardNode {
    let key = NodeKey::Task(task.id);
    let (class, status_icon) = if task.completed {
        (CardClass::TaskComplete, IconKind::Checked)
    } else {
        (CardClass::TaskIncomplete, IconKind::Unchecked)
    };

    TaskCardNode {
        task: task.id,
        class,
        toggle: IconControl {
            control: Control { role: Role::Toggle, target: key },
            icon: ctx.icon(status_icon),
        },
        text: task.text.clone(),
        delete: IconControl {
            control: Control { role: Role::Delete, target: key },
            icon: ctx.icon(IconKind::Delete),
        },
    }
}

pub fn render_add_form(form: &PendingAddForm) -> AddFormNode {
    let key = NodeKey::Form(form.id);

    AddFormNode {
        form: form.id,
        draft_text: form.draft_text.clone(),
        placeholder: ADD_FORM_PLACEHOLDER,
        cancel: ButtonControl {
            control: Control { role: Role::Cancel, target: key },
            label: CANCEL_LABEL,
        },
        confirm: ButtonControl {
            control: Control { role: Role::Confirm, target: key },
            label: CONFIRM_LABEL,
        },
    }
}
