// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use clap::Parser;
use slint::ComponentHandle;
use tasklist_core::{EventRouter, TaskListController};

mod icons;
mod settings;
mod ui;

use settings::Settings;
use ui::*;

fn main() -> Result<(), slint::PlatformError> {
    let settings = Settings::parse();

    env_logger::Builder::default().filter_level(settings.log_level()).init();

    let main_window = init(&settings)?;
    main_window.run()
}

fn init(settings: &Settings) -> Result<ui::MainWindow, slint::PlatformError> {
    let view_handle = ui::MainWindow::new()?;

    let controller = TaskListController::new(settings.render_context());
    for text in &settings.tasks {
        controller.add_task(text);
    }
    log::info!("Starting with {}", controller.summary());

    let router = Rc::new(EventRouter::new(controller));
    task_list_adapter::connect(&view_handle, router.clone());
    add_task_adapter::connect(&view_handle, router);

    Ok(view_handle)
}
