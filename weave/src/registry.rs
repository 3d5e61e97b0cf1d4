//! Option registry: the ordered, key-unique list of selectable options.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::PropsError;
use crate::key::OptionKey;

/// A single selectable option, as supplied by the caller.
///
/// The component only reads options. Display state (focused, checked,
/// effective disabled, ids) is computed per render into a
/// [`RenderedOption`](crate::RenderedOption).
///
/// # Example
///
/// ```
/// use weave::ChoiceOption;
///
/// let opt = ChoiceOption::new("dark", "Dark").checked();
/// assert!(opt.checked);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChoiceOption {
    /// Unique key within the group.
    pub key: OptionKey,
    /// Display text.
    pub text: String,
    /// Whether this option alone is disabled.
    #[serde(default)]
    pub disabled: bool,
    /// Initial selection hint. Only consulted when no explicit selection exists.
    #[serde(default)]
    pub checked: bool,
    /// Icon name, passed through to the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Image source, passed through to the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,
}

impl ChoiceOption {
    /// Create an enabled, unchecked option.
    pub fn new(key: impl Into<OptionKey>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
            disabled: false,
            checked: false,
            icon: None,
            image_src: None,
        }
    }

    /// Mark the option as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Flag the option as initially checked.
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Set the icon name.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the image source.
    pub fn image_src(mut self, src: impl Into<String>) -> Self {
        self.image_src = Some(src.into());
        self
    }
}

/// Ordered options with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionRegistry {
    options: Vec<ChoiceOption>,
}

impl OptionRegistry {
    /// Build a registry, rejecting duplicate keys.
    pub fn new(options: Vec<ChoiceOption>) -> Result<Self, PropsError> {
        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if !seen.insert(&option.key) {
                return Err(PropsError::DuplicateKey {
                    key: option.key.clone(),
                });
            }
        }
        Ok(Self { options })
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChoiceOption> {
        self.options.iter()
    }

    /// Keys in registry order.
    pub fn keys(&self) -> impl Iterator<Item = &OptionKey> {
        self.options.iter().map(|option| &option.key)
    }

    /// Look up an option by key.
    pub fn get(&self, key: &OptionKey) -> Option<&ChoiceOption> {
        self.options.iter().find(|option| &option.key == key)
    }

    pub fn contains(&self, key: &OptionKey) -> bool {
        self.get(key).is_some()
    }

    /// Position of a key in registry order.
    pub fn position(&self, key: &OptionKey) -> Option<usize> {
        self.options.iter().position(|option| &option.key == key)
    }

    /// Key of the first option flagged `checked`. Earlier options win ties.
    pub fn first_checked(&self) -> Option<&OptionKey> {
        self.options
            .iter()
            .find(|option| option.checked)
            .map(|option| &option.key)
    }

    /// Whether any option carries an icon or image.
    ///
    /// Style resolution uses this to switch to the tiled layout.
    pub fn contains_icon_or_image(&self) -> bool {
        self.options
            .iter()
            .any(|option| option.icon.is_some() || option.image_src.is_some())
    }

    pub fn as_slice(&self) -> &[ChoiceOption] {
        &self.options
    }
}
