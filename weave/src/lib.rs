//! weave: a choice group component.
//!
//! A choice group is a set of mutually exclusive options, rendered as radio
//! buttons by the host. The crate owns the interaction state (which option
//! is checked, which is focused), reconciles it against the properties the
//! host supplies, and hands out stable per-option handlers. Drawing is left
//! to a [`Renderer`].

pub mod choice_group;
pub mod dispatch;
pub mod error;
pub mod focus;
pub mod key;
pub mod keyboard;
pub mod notify;
pub mod prelude;
pub mod props;
pub mod reconcile;
pub mod registry;
pub mod selection;
pub mod view;

pub use choice_group::{ChoiceGroup, ChoiceGroupId};
pub use dispatch::{BlurHandler, ChangeHandler, FocusHandler, HandlerTable};
pub use error::{PropsError, PropsWarning};
pub use focus::FocusTarget;
pub use key::OptionKey;
pub use keyboard::{EventResult, NavKey};
pub use notify::{ChoiceChange, Interaction, Notifier, OnChange, OnChanged};
pub use props::{ChoiceGroupConfig, ChoiceGroupProps, ResolvedProps};
pub use registry::{ChoiceOption, OptionRegistry};
pub use selection::SelectionState;
pub use view::{ChoiceGroupView, LabelView, RenderedOption, Renderer, TextRenderer};
