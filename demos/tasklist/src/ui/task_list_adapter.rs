// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use slint::*;
use tasklist_core::{CardNode, EventRouter, FormId, NodeKey, Role, TaskId};

use crate::{icons::IconCache, ui};

// one place to implement connection between the task container (view) and the router
pub fn connect(view_handle: &ui::MainWindow, router: Rc<EventRouter>) {
    let adapter = view_handle.global::<ui::TaskListAdapter>();
    let controller = router.controller();

    let icons = Rc::new(IconCache::default());
    adapter.set_cards(
        Rc::new(MapModel::new(controller.container(), move |card| map_card_to_item(card, &icons)))
            .into(),
    );
    adapter.set_summary(controller.summary().to_string().into());

    controller.on_changed({
        let view_handle = view_handle.as_weak();

        move |summary| {
            if let Some(view_handle) = view_handle.upgrade() {
                view_handle.global::<ui::TaskListAdapter>().set_summary(summary.to_string().into());
            }
        }
    });

    adapter.on_control_clicked({
        let router = router.clone();

        move |role, kind, key| {
            let Some(target) = map_node_key(kind, key) else {
                log::trace!("click on unknown card key {key}");
                return;
            };

            router.click_control(map_role(role), target);
        }
    });
}

pub fn map_role(role: ui::ControlRole) -> Role {
    match role {
        ui::ControlRole::Toggle => Role::Toggle,
        ui::ControlRole::Delete => Role::Delete,
        ui::ControlRole::Cancel => Role::Cancel,
        ui::ControlRole::Confirm => Role::Confirm,
    }
}

pub fn map_node_key(kind: ui::CardKind, key: i32) -> Option<NodeKey> {
    let id = u64::try_from(key).ok()?;
    Some(match kind {
        ui::CardKind::Task => NodeKey::Task(TaskId(id)),
        ui::CardKind::AddForm => NodeKey::Form(FormId(id)),
    })
}

fn map_key(id: u64) -> i32 {
    i32::try_from(id).unwrap_or(i32::MAX)
}

// maps a CardNode (data) to a CardItem (ui)
fn map_card_to_item(card: CardNode, icons: &IconCache) -> ui::CardItem {
    match card {
        CardNode::Task(card) => ui::CardItem {
            kind: ui::CardKind::Task,
            key: map_key(card.task.0),
            completed: card.completed(),
            status_icon: icons.get(&card.toggle.icon.src),
            status_alt: card.toggle.icon.alt.into(),
            delete_icon: icons.get(&card.delete.icon.src),
            delete_alt: card.delete.icon.alt.into(),
            text: card.text.into(),
            ..Default::default()
        },
        CardNode::AddForm(form) => ui::CardItem {
            kind: ui::CardKind::AddForm,
            key: map_key(form.form.0),
            text: form.draft_text.into(),
            placeholder: form.placeholder.into(),
            cancel_label: form.cancel.label.into(),
            confirm_label: form.confirm.label.into(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist_core::{view, PendingAddForm, RenderContext, Task};

    #[test]
    fn test_map_task_card() {
        let task = Task { id: TaskId(4), text: "Buy milk".into(), completed: true };
        let card = CardNode::Task(view::render_task(&task, &RenderContext::new("missing/")));

        let item = map_card_to_item(card, &IconCache::default());

        assert_eq!(item.kind, ui::CardKind::Task);
        assert_eq!(item.key, 4);
        assert_eq!(item.text, "Buy milk");
        assert!(item.completed);
        assert_eq!(item.status_alt, "An unfilled circle with a tick mark inside.");
        assert_eq!(item.delete_alt, "A trashcan icon.");
    }

    #[test]
    fn test_map_add_form() {
        let mut form = PendingAddForm::new(FormId(2));
        form.draft_text = "draft".into();
        let card = CardNode::AddForm(view::render_add_form(&form));

        let item = map_card_to_item(card, &IconCache::default());

        assert_eq!(item.kind, ui::CardKind::AddForm);
        assert_eq!(item.key, 2);
        assert_eq!(item.text, "draft");
        assert_eq!(item.placeholder, "Task name goes here.");
        assert_eq!(item.cancel_label, "Cancel");
        assert_eq!(item.confirm_label, "Add Task");
    }

    #[test]
    fn test_map_node_key() {
        assert_eq!(map_node_key(ui::CardKind::Task, 3), Some(NodeKey::Task(TaskId(3))));
        assert_eq!(map_node_key(ui::CardKind::AddForm, 1), Some(NodeKey::Form(FormId(1))));
        assert_eq!(map_node_key(ui::CardKind::Task, -1), None);
    }

    #[test]
    fn test_map_role() {
        assert_eq!(map_role(ui::ControlRole::Toggle), Role::Toggle);
        assert_eq!(map_role(ui::ControlRole::Delete), Role::Delete);
        assert_eq!(map_role(ui::ControlRole::Cancel), Role::Cancel);
        assert_eq!(map_role(ui::ControlRole::Confirm), Role::Confirm);
    }
}
