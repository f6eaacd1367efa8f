// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::Cell;

type Handler<Arguments, Result> = Cell<Option<Box<dyn FnMut(&Arguments, &mut Result)>>>;

/// A single-slot callback. Registering a new handler replaces the previous one.
pub struct Callback<Arguments: ?Sized, Result = ()> {
    handler: Handler<Arguments, Result>,
}

impl<Arguments: ?Sized, Res> Default for Callback<Arguments, Res> {
    fn default() -> Self {
        Self { handler: Default::default() }
    }
}

impl<Arguments: ?Sized, Result: Default> Callback<Arguments, Result> {
    pub fn on(&self, mut f: impl FnMut(&Arguments) -> Result + 'static) {
        self.handler.set(Some(Box::new(move |a: &Arguments, r: &mut Result| *r = f(a))));
    }

    /// Calls the handler, or returns `Result::default()` if none is set.
    ///
    /// The handler is taken out of the slot while it runs, so invoking the
    /// same callback from inside its own handler is a no-op.
    pub fn invoke(&self, a: &Arguments) -> Result {
        let mut result = Result::default();

        if let Some(mut handler) = self.handler.take() {
            handler(a, &mut result);
            // a handler registered while running wins
            if let Some(replacement) = self.handler.take() {
                self.handler.set(Some(replacement));
            } else {
                self.handler.set(Some(handler));
            }
        }

        result
    }
}
