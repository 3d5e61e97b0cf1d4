//! Choice group properties.
//!
//! [`ChoiceGroupProps`] is what the host hands the component on construction
//! and on every update. It is validated into [`ResolvedProps`] before the
//! component uses it: keys are checked for uniqueness, misconfiguration is
//! collected as [`PropsWarning`]s and the notification path is resolved.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{PropsError, PropsWarning};
use crate::key::OptionKey;
use crate::notify::{ChoiceChange, Interaction, Notifier, OnChange, OnChanged};
use crate::registry::{ChoiceOption, OptionRegistry};

/// Properties of a choice group.
///
/// # Example
///
/// ```
/// use weave::{ChoiceGroupProps, ChoiceOption};
///
/// let props = ChoiceGroupProps::new()
///     .label("Theme")
///     .option(ChoiceOption::new("light", "Light"))
///     .option(ChoiceOption::new("dark", "Dark"))
///     .default_selected_key("dark")
///     .on_change(|_, change| println!("picked {}", change.key));
/// ```
#[derive(Clone, Default)]
pub struct ChoiceGroupProps {
    /// Options in display order.
    pub options: Vec<ChoiceOption>,
    /// Group label.
    pub label: Option<String>,
    /// Whether the label shows the required marker.
    pub required: bool,
    /// Disables every option.
    pub disabled: bool,
    /// Controlled selection. Supplying it puts the group in controlled mode.
    pub selected_key: Option<OptionKey>,
    /// Initial selection in uncontrolled mode.
    pub default_selected_key: Option<OptionKey>,
    /// Extra element ids that label the group.
    pub aria_labelled_by: Option<String>,
    /// Change callback.
    pub on_change: Option<OnChange>,
    /// Deprecated change callback.
    pub on_changed: Option<OnChanged>,
}

impl ChoiceGroupProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one option.
    pub fn option(mut self, option: ChoiceOption) -> Self {
        self.options.push(option);
        self
    }

    /// Replace all options.
    pub fn options(mut self, options: impl IntoIterator<Item = ChoiceOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Put the group in controlled mode with the given selection.
    pub fn selected_key(mut self, key: impl Into<OptionKey>) -> Self {
        self.selected_key = Some(key.into());
        self
    }

    pub fn default_selected_key(mut self, key: impl Into<OptionKey>) -> Self {
        self.default_selected_key = Some(key.into());
        self
    }

    pub fn aria_labelled_by(mut self, ids: impl Into<String>) -> Self {
        self.aria_labelled_by = Some(ids.into());
        self
    }

    pub fn on_change(
        mut self,
        f: impl Fn(Interaction, &ChoiceChange) + Send + Sync + 'static,
    ) -> Self {
        self.on_change = Some(Arc::new(f));
        self
    }

    /// Deprecated. Use [`on_change`](Self::on_change).
    pub fn on_changed(mut self, f: impl Fn(&ChoiceOption) + Send + Sync + 'static) -> Self {
        self.on_changed = Some(Arc::new(f));
        self
    }

    /// Validate into the form the component works with.
    pub fn resolve(self) -> Result<ResolvedProps, PropsError> {
        let registry = OptionRegistry::new(self.options)?;
        let mut warnings = Vec::new();

        if self.selected_key.is_some() && self.default_selected_key.is_some() {
            warnings.push(PropsWarning::MutuallyExclusive {
                prop: "selected_key",
                other: "default_selected_key",
            });
        }
        if self.on_changed.is_some() {
            warnings.push(PropsWarning::Deprecated {
                prop: "on_changed",
                replacement: "on_change",
            });
        }
        for (prop, key) in [
            ("selected_key", &self.selected_key),
            ("default_selected_key", &self.default_selected_key),
        ] {
            if let Some(key) = key
                && !registry.contains(key)
            {
                warnings.push(PropsWarning::UnknownKey {
                    prop,
                    key: key.clone(),
                });
            }
        }

        Ok(ResolvedProps {
            registry,
            label: self.label,
            required: self.required,
            disabled: self.disabled,
            selected_key: self.selected_key,
            default_selected_key: self.default_selected_key,
            aria_labelled_by: self.aria_labelled_by,
            notifier: Notifier::resolve(self.on_change, self.on_changed),
            warnings,
        })
    }
}

impl fmt::Debug for ChoiceGroupProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoiceGroupProps")
            .field("options", &self.options)
            .field("label", &self.label)
            .field("required", &self.required)
            .field("disabled", &self.disabled)
            .field("selected_key", &self.selected_key)
            .field("default_selected_key", &self.default_selected_key)
            .field("aria_labelled_by", &self.aria_labelled_by)
            .field("on_change", &self.on_change.is_some())
            .field("on_changed", &self.on_changed.is_some())
            .finish()
    }
}

/// Validated properties.
#[derive(Debug, Clone)]
pub struct ResolvedProps {
    pub registry: OptionRegistry,
    pub label: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub selected_key: Option<OptionKey>,
    pub default_selected_key: Option<OptionKey>,
    pub aria_labelled_by: Option<String>,
    pub notifier: Notifier,
    pub warnings: Vec<PropsWarning>,
}

impl ResolvedProps {
    /// Controlled iff the caller supplies `selected_key`.
    pub fn is_controlled(&self) -> bool {
        self.selected_key.is_some()
    }

    /// Whether both props render the same view for the same selection.
    ///
    /// Callbacks are not compared; handlers read them at call time.
    pub fn same_view(&self, other: &ResolvedProps) -> bool {
        self.registry == other.registry
            && self.label == other.label
            && self.required == other.required
            && self.disabled == other.disabled
            && self.aria_labelled_by == other.aria_labelled_by
    }
}

/// Data-only choice group configuration, e.g. loaded from JSON or TOML.
///
/// Callbacks cannot be expressed here; attach them to the
/// [`ChoiceGroupProps`] produced by `From`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChoiceGroupConfig {
    pub options: Vec<ChoiceOption>,
    pub label: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub selected_key: Option<OptionKey>,
    pub default_selected_key: Option<OptionKey>,
    pub aria_labelled_by: Option<String>,
}

impl From<ChoiceGroupConfig> for ChoiceGroupProps {
    fn from(config: ChoiceGroupConfig) -> Self {
        Self {
            options: config.options,
            label: config.label,
            required: config.required,
            disabled: config.disabled,
            selected_key: config.selected_key,
            default_selected_key: config.default_selected_key,
            aria_labelled_by: config.aria_labelled_by,
            on_change: None,
            on_changed: None,
        }
    }
}
