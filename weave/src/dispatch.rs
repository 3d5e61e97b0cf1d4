//! Event dispatch table.
//!
//! Each option key owns one focus handler and one change handler, and the
//! group shares one blur handler. Handlers are kept in a key-indexed table so
//! the same key hands out the same `Arc` on every render; hosts that compare
//! handler identity see no spurious changes.
//!
//! The table is only touched when the key set changes. Surviving keys keep
//! their handlers, new keys get fresh ones, removed keys are dropped.

use std::collections::HashMap;
use std::sync::Arc;

use crate::key::OptionKey;
use crate::notify::Interaction;

/// Invoked when an option gains focus.
pub type FocusHandler = Arc<dyn Fn() + Send + Sync>;

/// Invoked when any option loses focus.
pub type BlurHandler = Arc<dyn Fn() + Send + Sync>;

/// Invoked when the user checks an option.
pub type ChangeHandler = Arc<dyn Fn(Interaction) + Send + Sync>;

/// Key-indexed handler cache.
pub struct HandlerTable {
    keys: Vec<OptionKey>,
    focus: HashMap<OptionKey, FocusHandler>,
    change: HashMap<OptionKey, ChangeHandler>,
    blur: BlurHandler,
}

impl HandlerTable {
    /// Create an empty table around the shared blur handler.
    pub fn new(blur: BlurHandler) -> Self {
        Self {
            keys: Vec::new(),
            focus: HashMap::new(),
            change: HashMap::new(),
            blur,
        }
    }

    /// Bring the table in line with `keys`.
    ///
    /// Returns `false` without doing anything when the key set is unchanged.
    pub fn sync<F, C>(&mut self, keys: &[OptionKey], make_focus: F, make_change: C) -> bool
    where
        F: Fn(&OptionKey) -> FocusHandler,
        C: Fn(&OptionKey) -> ChangeHandler,
    {
        if self.keys.as_slice() == keys {
            return false;
        }

        self.focus.retain(|key, _| keys.contains(key));
        self.change.retain(|key, _| keys.contains(key));
        for key in keys {
            self.focus
                .entry(key.clone())
                .or_insert_with(|| make_focus(key));
            self.change
                .entry(key.clone())
                .or_insert_with(|| make_change(key));
        }
        self.keys = keys.to_vec();
        true
    }

    pub fn focus_handler(&self, key: &OptionKey) -> Option<FocusHandler> {
        self.focus.get(key).cloned()
    }

    pub fn change_handler(&self, key: &OptionKey) -> Option<ChangeHandler> {
        self.change.get(key).cloned()
    }

    pub fn blur_handler(&self) -> BlurHandler {
        Arc::clone(&self.blur)
    }

    /// Number of keys with handlers.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl std::fmt::Debug for HandlerTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerTable")
            .field("keys", &self.keys)
            .finish()
    }
}
