//! Caller notification for selection changes.
//!
//! Two callback styles exist: the current `on_change`, which receives the
//! interaction and a `{ key, text }` pair, and the deprecated `on_changed`,
//! which receives the whole option. The choice between them is made once,
//! when properties are accepted, and stored as a [`Notifier`].

use std::fmt;
use std::sync::Arc;

use crate::key::OptionKey;
use crate::registry::ChoiceOption;

/// Current change callback.
pub type OnChange = Arc<dyn Fn(Interaction, &ChoiceChange) + Send + Sync>;

/// Deprecated change callback. Only called when no [`OnChange`] is set.
pub type OnChanged = Arc<dyn Fn(&ChoiceOption) + Send + Sync>;

/// What kind of user input triggered a change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Interaction {
    /// Click or tap delivered by the host.
    #[default]
    Pointer,
    /// Keyboard navigation.
    Keyboard,
}

/// Payload of a change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceChange {
    /// Key of the option the user chose.
    pub key: OptionKey,
    /// Text of that option.
    pub text: String,
}

impl ChoiceChange {
    pub fn from_option(option: &ChoiceOption) -> Self {
        Self {
            key: option.key.clone(),
            text: option.text.clone(),
        }
    }
}

/// The resolved notification path.
#[derive(Clone, Default)]
pub enum Notifier {
    /// No callback configured.
    #[default]
    Silent,
    /// Modern callback.
    Change(OnChange),
    /// Deprecated callback.
    Legacy(OnChanged),
}

impl Notifier {
    /// Pick the single callback that will fire. `on_change` wins.
    pub fn resolve(on_change: Option<OnChange>, on_changed: Option<OnChanged>) -> Self {
        match (on_change, on_changed) {
            (Some(cb), _) => Notifier::Change(cb),
            (None, Some(cb)) => Notifier::Legacy(cb),
            (None, None) => Notifier::Silent,
        }
    }

    /// Fire the resolved callback for `option`.
    pub fn notify(&self, interaction: Interaction, option: &ChoiceOption) {
        match self {
            Notifier::Change(cb) => cb(interaction, &ChoiceChange::from_option(option)),
            Notifier::Legacy(cb) => cb(option),
            Notifier::Silent => {}
        }
    }

    pub fn is_silent(&self) -> bool {
        matches!(self, Notifier::Silent)
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Notifier::Silent => "Silent",
            Notifier::Change(_) => "Change",
            Notifier::Legacy(_) => "Legacy",
        };
        f.write_str(name)
    }
}
