//! Prelude module for convenient imports.
//!
//! ```ignore
//! use weave::prelude::*;
//! ```

// Component and props
pub use crate::choice_group::ChoiceGroup;
pub use crate::key::OptionKey;
pub use crate::props::{ChoiceGroupConfig, ChoiceGroupProps};
pub use crate::registry::ChoiceOption;

// Events
pub use crate::keyboard::{EventResult, NavKey};
pub use crate::notify::{ChoiceChange, Interaction};

// Rendering
pub use crate::view::{ChoiceGroupView, Renderer, TextRenderer};
