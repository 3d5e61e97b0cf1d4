//! Controlled/uncontrolled reconciliation of the checked key.

use crate::key::OptionKey;
use crate::props::ResolvedProps;
use crate::selection::SelectionState;

/// The checked key a set of properties implies.
///
/// `selected_key` if present, otherwise the first option flagged `checked`,
/// otherwise nothing.
pub fn implied_key(props: &ResolvedProps) -> Option<OptionKey> {
    props
        .selected_key
        .clone()
        .or_else(|| props.registry.first_checked().cloned())
}

/// Initial selection state for a new instance.
///
/// `default_selected_key` is used verbatim whenever it is present, even when
/// it matches no option or `selected_key` is also set. Later updates follow
/// the implied key.
pub fn seed(props: &ResolvedProps) -> SelectionState {
    let key_checked = match &props.default_selected_key {
        Some(default) => Some(default.clone()),
        None => implied_key(props),
    };
    SelectionState::new(key_checked)
}

/// Apply a property update to `state`.
///
/// Writes the new implied key only when it differs from the old implied key,
/// and returns whether a write happened. Focus is never touched.
pub fn reconcile(old: &ResolvedProps, new: &ResolvedProps, state: &mut SelectionState) -> bool {
    let next = implied_key(new);
    if next == implied_key(old) {
        return false;
    }
    state.set_checked(next);
    true
}
