use std::path::PathBuf;
use std::time::SystemTime;
use serde::{Deserialize, Serialize};

/// Which input of the comparison a file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSide {
    Before,
    After,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputEvent {
    pub path: PathBuf,
    pub side: InputSide,
    pub timestamp: SystemTime,
    /// File content at the time of the event
    pub content: String,
}

impl InputEvent {
    pub fn new(path: PathBuf, side: InputSide, content: String) -> Self {
        Self {
            path,
            side,
            timestamp: SystemTime::now(),
            content,
        }
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    InputChanged(InputEvent),
    InputRemoved(InputSide),
}

/// Latest known contents of both inputs in watch mode
#[derive(Debug, Clone, Default)]
pub struct WatchState {
    pub before: String,
    pub after: String,
    pub comparisons: usize,
}

impl WatchState {
    pub fn new(before: String, after: String) -> Self {
        Self {
            before,
            after,
            comparisons: 0,
        }
    }

    /// Apply an input change; returns true when the text actually changed
    pub fn apply(&mut self, event: InputEvent) -> bool {
        let slot = match event.side {
            InputSide::Before => &mut self.before,
            InputSide::After => &mut self.after,
        };

        if *slot == event.content {
            return false;
        }
        *slot = event.content;
        true
    }

    pub fn compare(&mut self) -> crate::compare::ComparisonResult {
        self.comparisons += 1;
        crate::compare::compare(&self.before, &self.after)
    }
}
