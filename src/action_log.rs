use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

/// User actions taken in the demo window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Cell (x, y) was written; `text` is its new display text
    SetCell { x: i32, y: i32, text: String },
    /// Cell (x, y) was edited in place and re-triggered
    Retrigger { x: i32, y: i32 },
    /// Grid text dump copied to the clipboard
    CopyLayout { width: i32, height: i32 },
}

/// Logged action with timestamp
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedAction {
    /// Milliseconds since start
    pub timestamp_ms: u64,
    pub action: Action,
}

#[derive(Debug, thiserror::Error)]
pub enum ActionLogError {
    #[error("failed to serialize action log: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write action log: {0}")]
    Write(#[from] std::io::Error),
}

/// Action logger
pub struct ActionLog {
    start_time: Instant,
    actions: Vec<LoggedAction>,
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionLog {
    pub fn new() -> Self {
        ActionLog {
            start_time: Instant::now(),
            actions: Vec::new(),
        }
    }

    /// Log an action with current timestamp
    pub fn log(&mut self, action: Action) {
        let timestamp_ms = self.start_time.elapsed().as_millis() as u64;
        self.actions.push(LoggedAction {
            timestamp_ms,
            action,
        });
    }

    pub fn actions(&self) -> &[LoggedAction] {
        &self.actions
    }

    /// Save log to JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ActionLogError> {
        let json = serde_json::to_string_pretty(&self.actions)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        let mut set_count = 0;
        let mut retrigger_count = 0;
        let mut copy_count = 0;

        for logged in &self.actions {
            match logged.action {
                Action::SetCell { .. } => set_count += 1,
                Action::Retrigger { .. } => retrigger_count += 1,
                Action::CopyLayout { .. } => copy_count += 1,
            }
        }

        let duration = self.actions.last().map_or(0, |last| last.timestamp_ms);

        format!(
            "Session Duration: {}ms\n\
             Total Events: {}\n\
             Cell Changes: {} set, {} retriggered\n\
             Clipboard Copies: {}",
            duration,
            self.actions.len(),
            set_count,
            retrigger_count,
            copy_count
        )
    }
}
