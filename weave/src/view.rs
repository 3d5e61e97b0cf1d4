//! Render pass output and the renderer seam.
//!
//! A [`ChoiceGroupView`] is the complete visual description of one group at
//! one point in time. Hosts turn it into markup, terminal lines or widgets
//! through a [`Renderer`]; this crate ships [`TextRenderer`] for plain text.

use std::fmt;

use crate::dispatch::{BlurHandler, ChangeHandler, FocusHandler};
use crate::key::OptionKey;
use crate::registry::ChoiceOption;
use crate::selection::SelectionState;

/// One option annotated with its display state and handlers.
#[derive(Clone)]
pub struct RenderedOption {
    pub key: OptionKey,
    pub text: String,
    pub icon: Option<String>,
    pub image_src: Option<String>,
    pub focused: bool,
    pub checked: bool,
    /// Own disabled flag or group disabled flag.
    pub disabled: bool,
    /// Element id of the option input.
    pub id: String,
    /// Element id of the option label.
    pub label_id: String,
    pub on_focus: FocusHandler,
    pub on_blur: BlurHandler,
    pub on_change: ChangeHandler,
}

impl RenderedOption {
    /// Annotate `option` without modifying it.
    pub(crate) fn normalize(
        option: &ChoiceOption,
        selection: &SelectionState,
        group_disabled: bool,
        ids: (&str, &str),
        handlers: (FocusHandler, BlurHandler, ChangeHandler),
    ) -> Self {
        let (group_id, label_id) = ids;
        let (on_focus, on_blur, on_change) = handlers;
        Self {
            key: option.key.clone(),
            text: option.text.clone(),
            icon: option.icon.clone(),
            image_src: option.image_src.clone(),
            focused: selection.is_focused(&option.key),
            checked: selection.is_checked(&option.key),
            disabled: option.disabled || group_disabled,
            id: format!("{}-{}", group_id, option.key),
            label_id: format!("{}-{}", label_id, option.key),
            on_focus,
            on_blur,
            on_change,
        }
    }
}

impl fmt::Debug for RenderedOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderedOption")
            .field("key", &self.key)
            .field("text", &self.text)
            .field("icon", &self.icon)
            .field("image_src", &self.image_src)
            .field("focused", &self.focused)
            .field("checked", &self.checked)
            .field("disabled", &self.disabled)
            .field("id", &self.id)
            .field("label_id", &self.label_id)
            .finish_non_exhaustive()
    }
}

/// The group label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelView {
    pub text: String,
    pub required: bool,
    pub id: String,
}

/// Visual description of a whole group.
#[derive(Debug, Clone)]
pub struct ChoiceGroupView {
    pub id: String,
    pub label: Option<LabelView>,
    /// Space-separated ids labelling the group. Empty when there are none.
    pub labelled_by: String,
    /// Lets style resolution pick the tiled layout.
    pub options_contain_icon_or_image: bool,
    pub options: Vec<RenderedOption>,
}

impl ChoiceGroupView {
    /// The checked option, if it is part of the view.
    pub fn checked(&self) -> Option<&RenderedOption> {
        self.options.iter().find(|option| option.checked)
    }

    /// The focused option, if any.
    pub fn focused(&self) -> Option<&RenderedOption> {
        self.options.iter().find(|option| option.focused)
    }

    pub fn option(&self, key: &OptionKey) -> Option<&RenderedOption> {
        self.options.iter().find(|option| &option.key == key)
    }
}

/// Join the label id and caller-supplied ids into one labelled-by string.
pub(crate) fn labelled_by(label: Option<&LabelView>, extra: Option<&str>) -> String {
    let parts: Vec<&str> = label
        .map(|label| label.id.as_str())
        .into_iter()
        .chain(extra.map(str::trim))
        .filter(|part| !part.is_empty())
        .collect();
    parts.join(" ")
}

/// Turns a view into host output.
pub trait Renderer {
    type Output;

    fn render(&mut self, view: &ChoiceGroupView) -> Self::Output;
}

/// Renders a group as plain text lines.
///
/// ```text
/// Theme *
/// > ◉ Light
///   ◯ Dark
///   ◯ High contrast (disabled)
/// ```
#[derive(Debug, Clone)]
pub struct TextRenderer {
    checked_char: char,
    unchecked_char: char,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            checked_char: '◉',
            unchecked_char: '◯',
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom indicator characters.
    pub fn with_indicators(mut self, checked: char, unchecked: char) -> Self {
        self.checked_char = checked;
        self.unchecked_char = unchecked;
        self
    }
}

impl Renderer for TextRenderer {
    type Output = Vec<String>;

    fn render(&mut self, view: &ChoiceGroupView) -> Vec<String> {
        let mut lines = Vec::with_capacity(view.options.len() + 1);

        if let Some(label) = &view.label {
            if label.required {
                lines.push(format!("{} *", label.text));
            } else {
                lines.push(label.text.clone());
            }
        }

        for option in &view.options {
            let cursor = if option.focused { '>' } else { ' ' };
            let indicator = if option.checked {
                self.checked_char
            } else {
                self.unchecked_char
            };
            let mut line = format!("{} {} {}", cursor, indicator, option.text);
            if option.disabled {
                line.push_str(" (disabled)");
            }
            lines.push(line);
        }

        lines
    }
}
