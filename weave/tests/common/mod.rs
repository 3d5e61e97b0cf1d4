#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use simplelog::{Config, LevelFilter, TestLogger};
use weave::{ChoiceChange, ChoiceOption, Interaction, OptionKey};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = TestLogger::init(LevelFilter::Debug, Config::default());
    });
}

/// Three enabled options `a`, `b`, `c`.
pub fn abc() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("a", "Alpha"),
        ChoiceOption::new("b", "Bravo"),
        ChoiceOption::new("c", "Charlie"),
    ]
}

/// Collects change notifications.
#[derive(Clone, Default)]
pub struct Recorder {
    changes: Arc<Mutex<Vec<(Interaction, ChoiceChange)>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callback(&self) -> impl Fn(Interaction, &ChoiceChange) + Send + Sync + use<> {
        let changes = Arc::clone(&self.changes);
        move |interaction: Interaction, change: &ChoiceChange| {
            changes.lock().unwrap().push((interaction, change.clone()));
        }
    }

    pub fn changes(&self) -> Vec<(Interaction, ChoiceChange)> {
        self.changes.lock().unwrap().clone()
    }

    pub fn keys(&self) -> Vec<OptionKey> {
        self.changes().into_iter().map(|(_, c)| c.key).collect()
    }
}
