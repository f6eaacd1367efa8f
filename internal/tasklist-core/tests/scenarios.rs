// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::Model;
use tasklist_core::{
    CardNode, Dispatch, EventRouter, IconKind, NodeKey, RenderContext, Role, TaskListController,
    TaskState,
};

fn router() -> EventRouter {
    EventRouter::new(TaskListController::new(RenderContext::default()))
}

fn create(router: &EventRouter, text: &str) -> Dispatch {
    let form = router.click_add_task();
    router.route_input(NodeKey::Form(form), text);
    router.click_control(Role::Confirm, NodeKey::Form(form))
}

fn cards(router: &EventRouter) -> Vec<CardNode> {
    router.controller().container().iter().collect()
}

fn task_texts(router: &EventRouter) -> Vec<String> {
    cards(router).iter().filter_map(|card| card.as_task()).map(|card| card.text.clone()).collect()
}

#[test]
fn add_buy_milk() {
    let router = router();
    assert_eq!(create(&router, "Buy milk"), Dispatch::Handled);

    let cards = cards(&router);
    assert_eq!(cards.len(), 1);
    let card = cards[0].as_task().unwrap();
    assert_eq!(card.text, "Buy milk");
    assert!(!card.completed());
    assert_eq!(card.toggle.icon.kind, IconKind::Unchecked);
    assert_eq!(router.controller().task_state(card.task), Some(TaskState::Incomplete));
}

#[test]
fn new_tasks_go_after_existing_ones() {
    let router = router();
    create(&router, "first");
    create(&router, "second");

    let form = router.click_add_task();
    assert_eq!(cards(&router)[0].key(), NodeKey::Form(form));

    router.route_input(NodeKey::Form(form), "third");
    router.click_control(Role::Confirm, NodeKey::Form(form));
    assert_eq!(task_texts(&router), vec!["first", "second", "third"]);
}

#[test]
fn confirm_empty_draft() {
    let router = router();
    create(&router, "keep");
    let before = router.controller().tasks();

    let form = router.click_add_task();
    assert_eq!(router.click_control(Role::Confirm, NodeKey::Form(form)), Dispatch::Handled);

    assert_eq!(router.controller().tasks(), before);
    assert!(cards(&router).iter().all(|card| card.as_add_form().is_none()));
}

#[test]
fn whitespace_draft_is_a_task() {
    let router = router();
    create(&router, " ");
    assert_eq!(task_texts(&router), vec![" "]);
}

#[test]
fn cancel_add_form() {
    let router = router();
    let form = router.click_add_task();
    router.route_input(NodeKey::Form(form), "not this one");

    assert_eq!(router.click_control(Role::Cancel, NodeKey::Form(form)), Dispatch::Handled);
    assert!(cards(&router).is_empty());
    assert!(router.controller().tasks().is_empty());
}

#[test]
fn toggle_round_trip() {
    let router = router();
    create(&router, "A");
    let id = router.controller().tasks()[0].id;
    let key = NodeKey::Task(id);

    router.click_control(Role::Toggle, key);
    let card = router.controller().node(key).unwrap();
    let card = card.as_task().unwrap();
    assert_eq!(card.toggle.icon.kind, IconKind::Checked);
    assert_eq!(card.toggle.icon.alt, "An unfilled circle with a tick mark inside.");
    assert_eq!(card.class.class_list(), "task-card task-complete");

    router.click_control(Role::Toggle, key);
    let card = router.controller().node(key).unwrap();
    let card = card.as_task().unwrap();
    assert_eq!(card.toggle.icon.kind, IconKind::Unchecked);
    assert_eq!(card.toggle.icon.alt, "An unfilled circle.");
    assert_eq!(card.class.class_list(), "task-card task-incomplete");
}

#[test]
fn toggle_one_of_two() {
    let router = router();
    create(&router, "A");
    create(&router, "B");
    let tasks = router.controller().tasks();

    router.click_control(Role::Toggle, NodeKey::Task(tasks[0].id));

    let controller = router.controller();
    assert_eq!(controller.task_state(tasks[0].id), Some(TaskState::Complete));
    assert_eq!(controller.task_state(tasks[1].id), Some(TaskState::Incomplete));
    assert_eq!(task_texts(&router), vec!["A", "B"]);
}

#[test]
fn delete_only_task() {
    let router = router();
    create(&router, "X");
    let id = router.controller().tasks()[0].id;

    assert_eq!(router.click_control(Role::Delete, NodeKey::Task(id)), Dispatch::Handled);
    assert!(cards(&router).is_empty());

    // a second click on the same card finds nothing
    assert_eq!(router.click_control(Role::Delete, NodeKey::Task(id)), Dispatch::Ignored);
    assert_eq!(router.click_control(Role::Toggle, NodeKey::Task(id)), Dispatch::Ignored);
    assert_eq!(router.controller().task_state(id), Some(TaskState::Deleted));
}

#[test]
fn single_pending_form() {
    let router = router();
    let form = router.click_add_task();
    router.route_input(NodeKey::Form(form), "draft");

    assert_eq!(router.click_add_task(), form);

    let forms: Vec<_> =
        cards(&router).iter().filter_map(|card| card.as_add_form().cloned()).collect();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].draft_text, "draft");
}

#[test]
fn stale_form_clicks_are_ignored() {
    let router = router();
    let old = router.click_add_task();
    router.click_control(Role::Cancel, NodeKey::Form(old));

    let new = router.click_add_task();
    router.route_input(NodeKey::Form(new), "fresh");

    assert_eq!(router.route_input(NodeKey::Form(old), "stale"), Dispatch::Ignored);
    assert_eq!(router.click_control(Role::Confirm, NodeKey::Form(old)), Dispatch::Ignored);
    assert_eq!(router.controller().pending_form().unwrap().draft_text, "fresh");
}
