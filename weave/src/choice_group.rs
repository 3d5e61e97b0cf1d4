//! The choice group component.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

use log::{debug, warn};

use crate::dispatch::{BlurHandler, ChangeHandler, FocusHandler, HandlerTable};
use crate::error::{PropsError, PropsWarning};
use crate::focus::FocusTarget;
use crate::key::OptionKey;
use crate::keyboard::{self, EventResult, NavKey};
use crate::notify::Interaction;
use crate::props::{ChoiceGroupProps, ResolvedProps};
use crate::reconcile;
use crate::registry::ChoiceOption;
use crate::selection::SelectionState;
use crate::view::{self, ChoiceGroupView, LabelView, RenderedOption, Renderer};

/// Unique identifier for a ChoiceGroup instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChoiceGroupId(usize);

impl ChoiceGroupId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }

    /// Prefix for per-option label ids.
    pub fn label_prefix(&self) -> String {
        format!("ChoiceGroupLabel{}", self.0)
    }
}

impl fmt::Display for ChoiceGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChoiceGroup{}", self.0)
    }
}

struct Inner {
    props: ResolvedProps,
    selection: SelectionState,
    focus_target: Option<Arc<dyn FocusTarget>>,
}

/// A group of mutually exclusive options.
///
/// The group is controlled when its props carry a `selected_key`: the caller
/// owns the selection, change events only notify. Otherwise the group owns
/// the selection, seeded from `default_selected_key` or the first option
/// flagged `checked`.
///
/// # Example
///
/// ```
/// use weave::{ChoiceGroup, ChoiceGroupProps, ChoiceOption, Interaction, OptionKey};
///
/// let group = ChoiceGroup::new(
///     ChoiceGroupProps::new()
///         .label("Size")
///         .option(ChoiceOption::new("s", "Small"))
///         .option(ChoiceOption::new("m", "Medium").checked()),
/// )
/// .unwrap();
///
/// let view = group.render();
/// (view.options[0].on_change)(Interaction::Pointer);
/// assert_eq!(group.key_checked(), Some(OptionKey::from("s")));
/// ```
pub struct ChoiceGroup {
    id: ChoiceGroupId,
    inner: Arc<RwLock<Inner>>,
    handlers: Arc<RwLock<HandlerTable>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl ChoiceGroup {
    /// Create a group from its initial props.
    pub fn new(props: ChoiceGroupProps) -> Result<Self, PropsError> {
        let props = props.resolve()?;
        let id = ChoiceGroupId::new();
        report_warnings(id, &props.warnings);

        let selection = reconcile::seed(&props);
        debug!(
            "[choice_group] {} created, controlled={} key_checked={:?}",
            id,
            props.is_controlled(),
            selection.key_checked()
        );

        let inner = Arc::new(RwLock::new(Inner {
            props,
            selection,
            focus_target: None,
        }));
        let dirty = Arc::new(AtomicBool::new(false));
        let blur = blur_handler(id, Arc::downgrade(&inner), Arc::clone(&dirty));

        Ok(Self {
            id,
            inner,
            handlers: Arc::new(RwLock::new(HandlerTable::new(blur))),
            dirty,
        })
    }

    pub fn id(&self) -> ChoiceGroupId {
        self.id
    }

    /// Get the ID as a string (the group element id)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Props
    // -------------------------------------------------------------------------

    /// Apply new props from the host.
    ///
    /// The checked key is rewritten only when the key implied by the new
    /// props differs from the one implied by the old props. The group is
    /// marked dirty only when that happens or the rendered props differ.
    /// On error nothing changes.
    pub fn set_props(&self, props: ChoiceGroupProps) -> Result<(), PropsError> {
        let props = props.resolve()?;

        let mut guard = self.write_inner();
        let inner = &mut *guard;
        report_warnings(self.id, new_warnings(&inner.props.warnings, &props.warnings));

        let reconciled = reconcile::reconcile(&inner.props, &props, &mut inner.selection);
        if reconciled {
            debug!(
                "[choice_group] {} reconciled key_checked={:?}",
                self.id,
                inner.selection.key_checked()
            );
        }
        if reconciled || !inner.props.same_view(&props) {
            self.dirty.store(true, Ordering::SeqCst);
        }
        inner.props = props;
        Ok(())
    }

    /// Warnings raised by the currently accepted props.
    pub fn warnings(&self) -> Vec<PropsWarning> {
        self.read_inner().props.warnings.clone()
    }

    pub fn is_controlled(&self) -> bool {
        self.read_inner().props.is_controlled()
    }

    /// Current options in registry order.
    pub fn options(&self) -> Vec<ChoiceOption> {
        self.read_inner().props.registry.as_slice().to_vec()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn key_checked(&self) -> Option<OptionKey> {
        self.read_inner().selection.key_checked().cloned()
    }

    pub fn key_focused(&self) -> Option<OptionKey> {
        self.read_inner().selection.key_focused().cloned()
    }

    /// The option whose key is checked, if it exists in the registry.
    pub fn selected_option(&self) -> Option<ChoiceOption> {
        let guard = self.read_inner();
        guard
            .selection
            .key_checked()
            .and_then(|key| guard.props.registry.get(key))
            .cloned()
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Map the options and selection into a view.
    pub fn render(&self) -> ChoiceGroupView {
        let table = self.synced_handlers();
        let guard = self.read_inner();
        let props = &guard.props;

        let group_id = self.id.to_string();
        let label_prefix = self.id.label_prefix();
        let blur = table.blur_handler();

        let options = props
            .registry
            .iter()
            .filter_map(|option| {
                let on_focus = table.focus_handler(&option.key)?;
                let on_change = table.change_handler(&option.key)?;
                Some(RenderedOption::normalize(
                    option,
                    &guard.selection,
                    props.disabled,
                    (group_id.as_str(), label_prefix.as_str()),
                    (on_focus, Arc::clone(&blur), on_change),
                ))
            })
            .collect();

        let label = props.label.as_ref().map(|text| LabelView {
            text: text.clone(),
            required: props.required,
            id: format!("{}-label", group_id),
        });
        let labelled_by = view::labelled_by(label.as_ref(), props.aria_labelled_by.as_deref());

        ChoiceGroupView {
            id: group_id,
            label,
            labelled_by,
            options_contain_icon_or_image: props.registry.contains_icon_or_image(),
            options,
        }
    }

    /// Render through a host renderer.
    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> R::Output {
        renderer.render(&self.render())
    }

    // -------------------------------------------------------------------------
    // Handlers
    // -------------------------------------------------------------------------

    pub fn focus_handler(&self, key: &OptionKey) -> Option<FocusHandler> {
        self.synced_handlers().focus_handler(key)
    }

    pub fn change_handler(&self, key: &OptionKey) -> Option<ChangeHandler> {
        self.synced_handlers().change_handler(key)
    }

    pub fn blur_handler(&self) -> BlurHandler {
        self.synced_handlers().blur_handler()
    }

    /// Handle a navigation key while the group has focus.
    ///
    /// Movement keys focus and check the next enabled option. `Select`
    /// checks the focused option.
    pub fn handle_key(&self, key: NavKey) -> EventResult {
        let (target, move_focus) = {
            let guard = self.read_inner();
            if guard.props.disabled {
                return EventResult::Ignored;
            }
            let registry = &guard.props.registry;

            match key {
                NavKey::Select => {
                    let focused = guard
                        .selection
                        .key_focused()
                        .and_then(|key| registry.get(key));
                    match focused {
                        Some(option) if !option.disabled => (option.key.clone(), false),
                        _ => return EventResult::Ignored,
                    }
                }
                _ => {
                    let enabled: Vec<bool> = registry.iter().map(|option| !option.disabled).collect();
                    let anchor = guard
                        .selection
                        .key_focused()
                        .or(guard.selection.key_checked())
                        .and_then(|key| registry.position(key));
                    let Some(index) = keyboard::target_index(&enabled, anchor, key) else {
                        return EventResult::Ignored;
                    };
                    (registry.as_slice()[index].key.clone(), true)
                }
            }
        };

        // Handlers take the state lock themselves and may call back into us.
        let (on_focus, on_change) = {
            let table = self.synced_handlers();
            (table.focus_handler(&target), table.change_handler(&target))
        };
        if move_focus && let Some(on_focus) = on_focus {
            on_focus();
        }
        if let Some(on_change) = on_change {
            on_change(Interaction::Keyboard);
        }
        EventResult::Consumed
    }

    // -------------------------------------------------------------------------
    // Focus control
    // -------------------------------------------------------------------------

    /// Install the host handle that [`focus`](Self::focus) delegates to.
    pub fn set_focus_target(&self, target: impl FocusTarget + 'static) {
        self.write_inner().focus_target = Some(Arc::new(target));
    }

    pub fn clear_focus_target(&self) {
        self.write_inner().focus_target = None;
    }

    /// Move input focus into the group. No-op without a focus target.
    pub fn focus(&self) {
        let target = self.read_inner().focus_target.clone();
        if let Some(target) = target {
            target.focus();
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the group needs re-rendering
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn read_inner(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_inner(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock the handler table after aligning it with the current keys.
    fn synced_handlers(&self) -> RwLockWriteGuard<'_, HandlerTable> {
        let keys: Vec<OptionKey> = self.read_inner().props.registry.keys().cloned().collect();
        let mut table = self.handlers.write().unwrap_or_else(PoisonError::into_inner);

        let weak = Arc::downgrade(&self.inner);
        let rebuilt = table.sync(
            &keys,
            |key| focus_handler(self.id, key.clone(), weak.clone(), Arc::clone(&self.dirty)),
            |key| change_handler(self.id, key.clone(), weak.clone(), Arc::clone(&self.dirty)),
        );
        if rebuilt {
            debug!("[choice_group] {} handler table synced for {} keys", self.id, keys.len());
        }
        table
    }
}

impl Clone for ChoiceGroup {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            handlers: Arc::clone(&self.handlers),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl fmt::Debug for ChoiceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_inner();
        f.debug_struct("ChoiceGroup")
            .field("id", &self.id)
            .field("props", &guard.props)
            .field("selection", &guard.selection)
            .finish_non_exhaustive()
    }
}

fn report_warnings(id: ChoiceGroupId, warnings: &[PropsWarning]) {
    for warning in warnings {
        warn!("[choice_group] {}: {}", id, warning);
    }
}

/// Warnings worth logging on an update: none if the set is unchanged.
fn new_warnings<'a>(old: &[PropsWarning], new: &'a [PropsWarning]) -> &'a [PropsWarning] {
    if old == new { &[] } else { new }
}

fn focus_handler(
    id: ChoiceGroupId,
    key: OptionKey,
    weak: Weak<RwLock<Inner>>,
    dirty: Arc<AtomicBool>,
) -> FocusHandler {
    Arc::new(move || {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let mut guard = inner.write().unwrap_or_else(PoisonError::into_inner);
        if guard.selection.focus(key.clone()) {
            debug!("[choice_group] {} focus {}", id, key);
            dirty.store(true, Ordering::SeqCst);
        }
    })
}

fn blur_handler(id: ChoiceGroupId, weak: Weak<RwLock<Inner>>, dirty: Arc<AtomicBool>) -> BlurHandler {
    Arc::new(move || {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let mut guard = inner.write().unwrap_or_else(PoisonError::into_inner);
        if guard.selection.blur() {
            debug!("[choice_group] {} blur", id);
            dirty.store(true, Ordering::SeqCst);
        }
    })
}

fn change_handler(
    id: ChoiceGroupId,
    key: OptionKey,
    weak: Weak<RwLock<Inner>>,
    dirty: Arc<AtomicBool>,
) -> ChangeHandler {
    Arc::new(move |interaction| {
        let Some(inner) = weak.upgrade() else {
            return;
        };

        let (notifier, option) = {
            let mut guard = inner.write().unwrap_or_else(PoisonError::into_inner);
            let Some(option) = guard.props.registry.get(&key).cloned() else {
                debug!("[choice_group] {} change for removed key {}", id, key);
                return;
            };
            // Controlled groups leave the selection to the caller.
            if !guard.props.is_controlled() && guard.selection.check(key.clone()) {
                debug!("[choice_group] {} checked {}", id, key);
                dirty.store(true, Ordering::SeqCst);
            }
            (guard.props.notifier.clone(), option)
        };

        notifier.notify(interaction, &option);
    })
}
