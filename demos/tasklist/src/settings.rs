// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use clap::Parser;
use tasklist_core::RenderContext;

#[derive(Parser, Debug)]
#[command(version, about = "Keep track of what is left to do", long_about = None)]
pub struct Settings {
    /// Directory holding unchecked.svg, checked.svg and delete.svg
    #[arg(long, value_name = "DIR", default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/icon"))]
    pub icon_dir: PathBuf,

    /// Task to create at start-up. Can be given several times
    #[arg(long = "task", value_name = "TEXT")]
    pub tasks: Vec<String>,

    /// Log debug messages
    #[arg(short, long)]
    pub verbose: bool,
}

impl Settings {
    pub fn render_context(&self) -> RenderContext {
        let mut prefix = self.icon_dir.to_string_lossy().into_owned();
        if !prefix.ends_with(std::path::MAIN_SEPARATOR) && !prefix.ends_with('/') {
            prefix.push('/');
        }
        RenderContext::new(prefix)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose || cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}
