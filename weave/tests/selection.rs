mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use common::{abc, init_logger, Recorder};
use weave::{
    ChoiceChange, ChoiceGroup, ChoiceGroupProps, ChoiceOption, Interaction, OptionKey,
    PropsError, PropsWarning,
};

fn key(k: &str) -> OptionKey {
    OptionKey::from(k)
}

// ============================================================================
// Initial Seeding
// ============================================================================

#[test]
fn test_seed_from_single_checked_option() {
    init_logger();
    let group = ChoiceGroup::new(ChoiceGroupProps::new().options(vec![
        ChoiceOption::new("a", "Alpha"),
        ChoiceOption::new("b", "Bravo").checked(),
    ]))
    .unwrap();

    assert_eq!(group.key_checked(), Some(key("b")));
    assert_eq!(group.key_focused(), None);
}

#[test]
fn test_seed_nothing_checked() {
    let group = ChoiceGroup::new(ChoiceGroupProps::new().options(abc())).unwrap();
    assert_eq!(group.key_checked(), None);
    assert!(group.selected_option().is_none());
}

#[test]
fn test_seed_first_checked_wins() {
    let group = ChoiceGroup::new(ChoiceGroupProps::new().options(vec![
        ChoiceOption::new("a", "Alpha").checked(),
        ChoiceOption::new("b", "Bravo").checked(),
    ]))
    .unwrap();

    assert_eq!(group.key_checked(), Some(key("a")));
}

#[test]
fn test_seed_default_selected_key_verbatim() {
    let group = ChoiceGroup::new(
        ChoiceGroupProps::new()
            .options(vec![ChoiceOption::new("a", "Alpha").checked()])
            .default_selected_key("zzz"),
    )
    .unwrap();

    // Used as-is even though no option matches, and over the checked hint.
    assert_eq!(group.key_checked(), Some(key("zzz")));
    assert!(group.selected_option().is_none());
    assert_eq!(
        group.warnings(),
        vec![PropsWarning::UnknownKey {
            prop: "default_selected_key",
            key: key("zzz"),
        }]
    );
}

#[test]
fn test_default_selected_key_seeds_even_when_controlled() {
    let group = ChoiceGroup::new(
        ChoiceGroupProps::new()
            .options(abc())
            .selected_key("b")
            .default_selected_key("c"),
    )
    .unwrap();

    assert!(group.is_controlled());
    assert_eq!(group.key_checked(), Some(key("c")));

    // From then on the controlled key drives the selection.
    group
        .set_props(
            ChoiceGroupProps::new()
                .options(abc())
                .selected_key("a")
                .default_selected_key("c"),
        )
        .unwrap();
    assert_eq!(group.key_checked(), Some(key("a")));
    assert_eq!(
        group.warnings(),
        vec![PropsWarning::MutuallyExclusive {
            prop: "selected_key",
            other: "default_selected_key",
        }]
    );
}

#[test]
fn test_duplicate_keys_rejected() {
    let mut options = abc();
    options.push(ChoiceOption::new("b", "Bravo again"));

    let result = ChoiceGroup::new(ChoiceGroupProps::new().options(options.clone()));
    assert_eq!(
        result.err(),
        Some(PropsError::DuplicateKey { key: key("b") })
    );

    let group = ChoiceGroup::new(ChoiceGroupProps::new().options(abc()).selected_key("a")).unwrap();
    let result = group.set_props(ChoiceGroupProps::new().options(options).selected_key("c"));
    assert!(result.is_err());
    assert_eq!(group.key_checked(), Some(key("a")));
    assert_eq!(group.options(), abc());
}

// ============================================================================
// Uncontrolled Mode
// ============================================================================

#[test]
fn test_uncontrolled_change_then_focus() {
    init_logger();
    let recorder = Recorder::new();
    let group =
        ChoiceGroup::new(ChoiceGroupProps::new().options(abc()).on_change(recorder.callback()))
            .unwrap();
    assert!(!group.is_controlled());

    let view = group.render();
    (view.options[1].on_change)(Interaction::Pointer);
    assert_eq!(group.key_checked(), Some(key("b")));

    (view.options[2].on_focus)();
    assert_eq!(group.key_focused(), Some(key("c")));
    assert_eq!(group.key_checked(), Some(key("b")));

    assert_eq!(
        recorder.changes(),
        vec![(
            Interaction::Pointer,
            ChoiceChange {
                key: key("b"),
                text: "Bravo".into()
            }
        )]
    );
}

#[test]
fn test_blur_clears_focus_from_any_option() {
    let group = ChoiceGroup::new(ChoiceGroupProps::new().options(abc())).unwrap();
    let view = group.render();

    (view.options[0].on_focus)();
    assert_eq!(group.key_focused(), Some(key("a")));
    (view.options[2].on_blur)();
    assert_eq!(group.key_focused(), None);

    (view.options[1].on_focus)();
    (view.options[0].on_blur)();
    assert_eq!(group.key_focused(), None);
}

// ============================================================================
// Controlled Mode
// ============================================================================

#[test]
fn test_controlled_change_only_notifies() {
    init_logger();
    let recorder = Recorder::new();
    let group = ChoiceGroup::new(
        ChoiceGroupProps::new()
            .options(abc())
            .selected_key("a")
            .on_change(recorder.callback()),
    )
    .unwrap();
    assert!(group.is_controlled());

    group.change_handler(&key("c")).unwrap()(Interaction::Pointer);

    assert_eq!(group.key_checked(), Some(key("a")));
    assert_eq!(
        recorder.changes(),
        vec![(
            Interaction::Pointer,
            ChoiceChange {
                key: key("c"),
                text: "Charlie".into()
            }
        )]
    );
}

#[test]
fn test_controlled_callback_feeds_back_selected_key() {
    let slot: Arc<Mutex<Option<ChoiceGroup>>> = Arc::new(Mutex::new(None));

    let props = {
        let slot = Arc::clone(&slot);
        ChoiceGroupProps::new()
            .options(abc())
            .selected_key("a")
            .on_change(move |_, change| {
                let group = slot.lock().unwrap().clone();
                if let Some(group) = group {
                    group
                        .set_props(
                            ChoiceGroupProps::new()
                                .options(abc())
                                .selected_key(change.key.clone()),
                        )
                        .unwrap();
                }
            })
    };
    let group = ChoiceGroup::new(props).unwrap();
    *slot.lock().unwrap() = Some(group.clone());

    group.change_handler(&key("b")).unwrap()(Interaction::Pointer);
    assert_eq!(group.key_checked(), Some(key("b")));

    slot.lock().unwrap().take();
}

// ============================================================================
// Notification Paths
// ============================================================================

#[test]
fn test_legacy_callback_when_modern_absent() {
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);
    let group = ChoiceGroup::new(
        ChoiceGroupProps::new()
            .options(abc())
            .on_changed(move |option| sink.lock().unwrap().push(option.clone())),
    )
    .unwrap();

    assert_eq!(
        group.warnings(),
        vec![PropsWarning::Deprecated {
            prop: "on_changed",
            replacement: "on_change",
        }]
    );

    group.change_handler(&key("a")).unwrap()(Interaction::Pointer);
    assert_eq!(*received.lock().unwrap(), vec![ChoiceOption::new("a", "Alpha")]);
}

#[test]
fn test_modern_callback_wins_over_legacy() {
    let recorder = Recorder::new();
    let legacy_calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&legacy_calls);

    let group = ChoiceGroup::new(
        ChoiceGroupProps::new()
            .options(abc())
            .on_change(recorder.callback())
            .on_changed(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
    )
    .unwrap();

    group.change_handler(&key("c")).unwrap()(Interaction::Pointer);
    assert_eq!(recorder.keys(), vec![key("c")]);
    assert_eq!(legacy_calls.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_dirty_tracking() {
    let group = ChoiceGroup::new(ChoiceGroupProps::new().options(abc())).unwrap();
    assert!(!group.is_dirty());

    let view = group.render();
    (view.options[0].on_change)(Interaction::Pointer);
    assert!(group.is_dirty());
    group.clear_dirty();

    // Re-checking the same option changes nothing.
    (view.options[0].on_change)(Interaction::Pointer);
    assert!(!group.is_dirty());

    (view.options[0].on_blur)();
    assert!(!group.is_dirty());
}

#[test]
fn test_handlers_are_inert_after_drop() {
    let recorder = Recorder::new();
    let group =
        ChoiceGroup::new(ChoiceGroupProps::new().options(abc()).on_change(recorder.callback()))
            .unwrap();
    let view = group.render();
    drop(group);

    (view.options[0].on_focus)();
    (view.options[0].on_change)(Interaction::Pointer);
    (view.options[0].on_blur)();
    assert!(recorder.changes().is_empty());
}

#[test]
fn test_focus_delegates_to_target() {
    let group = ChoiceGroup::new(ChoiceGroupProps::new().options(abc())).unwrap();

    // No target installed: nothing happens.
    group.focus();

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    group.set_focus_target(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    group.focus();
    group.focus();
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    group.clear_focus_target();
    group.focus();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
