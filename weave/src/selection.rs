//! Selection state: which option is checked and which is focused.

use crate::key::OptionKey;

/// The `(key_checked, key_focused)` pair owned by one choice group.
///
/// Transition methods return `true` when the stored value actually changed,
/// which the owner uses to decide whether a re-render is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    key_checked: Option<OptionKey>,
    key_focused: Option<OptionKey>,
}

impl SelectionState {
    /// Create a state with the given checked key and nothing focused.
    pub fn new(key_checked: Option<OptionKey>) -> Self {
        Self {
            key_checked,
            key_focused: None,
        }
    }

    pub fn key_checked(&self) -> Option<&OptionKey> {
        self.key_checked.as_ref()
    }

    pub fn key_focused(&self) -> Option<&OptionKey> {
        self.key_focused.as_ref()
    }

    pub fn is_checked(&self, key: &OptionKey) -> bool {
        self.key_checked.as_ref() == Some(key)
    }

    pub fn is_focused(&self, key: &OptionKey) -> bool {
        self.key_focused.as_ref() == Some(key)
    }

    /// An option received focus.
    pub fn focus(&mut self, key: OptionKey) -> bool {
        let changed = self.key_focused.as_ref() != Some(&key);
        self.key_focused = Some(key);
        changed
    }

    /// Any option lost focus. Clears focus for the whole group.
    pub fn blur(&mut self) -> bool {
        self.key_focused.take().is_some()
    }

    /// The user checked an option.
    pub fn check(&mut self, key: OptionKey) -> bool {
        self.set_checked(Some(key))
    }

    /// Replace the checked key.
    pub fn set_checked(&mut self, key: Option<OptionKey>) -> bool {
        let changed = self.key_checked != key;
        self.key_checked = key;
        changed
    }
}
