use std::cell::RefCell;

use crate::error::Result;
use crate::theme::ThemeStore;

/// Session-only preference store. Used when browser storage is unavailable
/// so theming keeps working for the lifetime of the page.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_string())),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.get())
    }

    fn save(&self, value: &str) -> Result<()> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}
