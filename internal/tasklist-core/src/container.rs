// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;

use slint::{Model, ModelNotify, ModelTracker};

use crate::view::{CardNode, NodeKey};

/// The visual surface: an ordered sequence of card nodes.
///
/// Every mutation emits the matching row notification so views attached to
/// the model only re-render the rows that changed.
#[derive(Default)]
pub struct TaskContainer {
    nodes: RefCell<Vec<CardNode>>,
    notify: ModelNotify,
}

impl TaskContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self, key: NodeKey) -> Option<usize> {
        self.nodes.borrow().iter().position(|node| node.key() == key)
    }

    pub fn node(&self, key: NodeKey) -> Option<CardNode> {
        self.nodes.borrow().iter().find(|node| node.key() == key).cloned()
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.position(key).is_some()
    }

    pub fn insert_front(&self, node: CardNode) {
        self.nodes.borrow_mut().insert(0, node);
        self.notify.row_added(0, 1);
    }

    pub fn push(&self, node: CardNode) {
        let index = {
            let mut nodes = self.nodes.borrow_mut();
            nodes.push(node);
            nodes.len() - 1
        };
        self.notify.row_added(index, 1);
    }

    /// Replaces the node with the same key. Returns false if there is none.
    pub fn replace(&self, node: CardNode) -> bool {
        let Some(index) = self.position(node.key()) else {
            return false;
        };

        self.nodes.borrow_mut()[index] = node;
        self.notify.row_changed(index);
        true
    }

    /// Like [`Self::replace`], but without notifying views. Only for rows whose
    /// view already displays the new content, such as a text field being typed in.
    pub fn update_quietly(&self, node: CardNode) -> bool {
        let Some(index) = self.position(node.key()) else {
            return false;
        };

        self.nodes.borrow_mut()[index] = node;
        true
    }

    pub fn remove(&self, key: NodeKey) -> Option<CardNode> {
        let index = self.position(key)?;
        let node = self.nodes.borrow_mut().remove(index);
        self.notify.row_removed(index, 1);
        Some(node)
    }

    pub fn nodes(&self) -> Vec<CardNode> {
        self.nodes.borrow().clone()
    }
}

impl Model for TaskContainer {
    type Data = CardNode;

    fn row_count(&self) -> usize {
        self.nodes.borrow().len()
    }

    fn row_data(&self, row: usize) -> Option<Self::Data> {
        self.nodes.borrow().get(row).cloned()
    }

    fn model_tracker(&self) -> &dyn ModelTracker {
        &self.notify
    }
}
