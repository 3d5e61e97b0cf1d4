//! Imperative focus delegation.

/// Handle to whatever host element can take input focus for a group.
///
/// Hosts install one with
/// [`ChoiceGroup::set_focus_target`](crate::ChoiceGroup::set_focus_target);
/// [`ChoiceGroup::focus`](crate::ChoiceGroup::focus) forwards to it.
pub trait FocusTarget: Send + Sync {
    fn focus(&self);
}

impl<F> FocusTarget for F
where
    F: Fn() + Send + Sync,
{
    fn focus(&self) {
        self()
    }
}
