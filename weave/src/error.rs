//! Error and warning types for choice group properties.

use thiserror::Error;

use crate::key::OptionKey;

/// Properties that cannot be accepted at all.
///
/// Returned by [`ChoiceGroup::new`](crate::ChoiceGroup::new) and
/// [`ChoiceGroup::set_props`](crate::ChoiceGroup::set_props). A rejected
/// update leaves the instance untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropsError {
    /// Two options share the same key.
    #[error("duplicate option key '{key}'")]
    DuplicateKey {
        /// The repeated key.
        key: OptionKey,
    },
}

/// Non-fatal misconfiguration.
///
/// The component keeps working: `default_selected_key` only seeds the initial
/// selection and `selected_key` drives every later update, `on_change` wins
/// over `on_changed`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropsWarning {
    /// Both members of a mutually exclusive pair were supplied.
    #[error("'{prop}' is mutually exclusive with '{other}'")]
    MutuallyExclusive {
        /// The property that drives later updates.
        prop: &'static str,
        /// The property only used for the initial selection.
        other: &'static str,
    },

    /// A deprecated property was supplied.
    #[error("'{prop}' is deprecated, use '{replacement}' instead")]
    Deprecated {
        /// The deprecated property.
        prop: &'static str,
        /// Its replacement.
        replacement: &'static str,
    },

    /// A selection property names a key with no matching option.
    #[error("'{prop}' names key '{key}' which matches no option")]
    UnknownKey {
        /// Which property held the key.
        prop: &'static str,
        /// The unmatched key.
        key: OptionKey,
    },
}
