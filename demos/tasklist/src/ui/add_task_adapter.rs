// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use slint::*;
use tasklist_core::EventRouter;

use crate::ui;

pub fn connect(view_handle: &ui::MainWindow, router: Rc<EventRouter>) {
    let adapter = view_handle.global::<ui::TaskListAdapter>();

    adapter.on_add_task_clicked({
        let router = router.clone();

        move || {
            router.click_add_task();
        }
    });

    adapter.on_draft_edited(move |key, text| {
        let Some(target) = ui::task_list_adapter::map_node_key(ui::CardKind::AddForm, key) else {
            return;
        };

        router.route_input(target, text.as_str());
    });
}
