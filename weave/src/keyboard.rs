//! Keyboard navigation within a group.
//!
//! Arrow keys move through enabled options with wrap-around and check the
//! option they land on, the way native radio groups behave.

/// Navigation keys the group understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Home,
    End,
    /// Space/Enter: check the focused option.
    Select,
}

/// Result of handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Not handled, let the host try other handlers.
    Ignored,
    /// Handled, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Index of the option a movement key lands on.
///
/// `enabled[i]` tells whether option `i` can be reached. `anchor` is the
/// current position, if any. Returns `None` when nothing is enabled or for
/// [`NavKey::Select`].
pub(crate) fn target_index(enabled: &[bool], anchor: Option<usize>, key: NavKey) -> Option<usize> {
    let len = enabled.len();
    if len == 0 {
        return None;
    }

    match key {
        NavKey::Home => enabled.iter().position(|e| *e),
        NavKey::End => enabled.iter().rposition(|e| *e),
        NavKey::Down => {
            let start = anchor.map(|i| i + 1).unwrap_or(0);
            (0..len)
                .map(|step| (start + step) % len)
                .find(|&i| enabled[i])
        }
        NavKey::Up => {
            let start = anchor.unwrap_or(0) + len;
            (1..=len)
                .map(|step| (start - step) % len)
                .find(|&i| enabled[i])
        }
        NavKey::Select => None,
    }
}
