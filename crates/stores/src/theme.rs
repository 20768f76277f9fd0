//! The theme store.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use model::Theme;
use model::config::THEME_KEY;

use crate::error::Result;
use crate::persist::{StateStorage, load_snapshot, save_snapshot};

pub struct ThemeStore {
    storage: Arc<dyn StateStorage>,
    theme: Mutex<Theme>,
}

impl ThemeStore {
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        let theme = load_snapshot(storage.as_ref(), THEME_KEY).unwrap_or_default();
        Self {
            storage,
            theme: Mutex::new(theme),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Theme> {
        self.theme.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn theme(&self) -> Theme {
        *self.lock()
    }

    pub fn set(&self, theme: Theme) -> Result<()> {
        *self.lock() = theme;
        save_snapshot(self.storage.as_ref(), THEME_KEY, &theme)
    }

    /// Flip cupcake ⇄ aqua and return the new theme.
    pub fn toggle(&self) -> Result<Theme> {
        let next = self.theme().toggle();
        self.set(next)?;
        Ok(next)
    }
}
