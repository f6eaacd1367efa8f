// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use slint::Image;

/// Loads icon images by path, once per path.
#[derive(Default)]
pub struct IconCache {
    images: RefCell<HashMap<String, Image>>,
}

impl IconCache {
    /// Returns an empty image if the file cannot be loaded.
    pub fn get(&self, src: &str) -> Image {
        if let Some(image) = self.images.borrow().get(src) {
            return image.clone();
        }

        let image = Image::load_from_path(Path::new(src)).unwrap_or_else(|e| {
            log::warn!("Failed to load icon {src}: {e}");
            Image::default()
        });
        self.images.borrow_mut().insert(src.into(), image.clone());
        image
    }

    #[cfg(test)]
    fn cached(&self) -> usize {
        self.images.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_icon() {
        let icons = IconCache::default();

        let image = icons.get("does/not/exist.svg");
        assert_eq!(image.size(), slint::Image::default().size());

        icons.get("does/not/exist.svg");
        assert_eq!(icons.cached(), 1);
    }
}
