use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Clone, Debug)]
pub struct TimelineEntry {
    pub at: DateTime<Utc>,
    pub message: String,
}

/// Timestamped run log, rendered as a bulleted timeline.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("{}", message);
        self.entries.push(TimelineEntry {
            at: Utc::now(),
            message,
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(
                f,
                "  • {}  {}",
                entry.at.format("%H:%M:%S%.3f"),
                entry.message
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_line_per_entry() {
        let mut timeline = Timeline::new();
        timeline.log("first");
        timeline.log("second");

        let rendered = timeline.to_string();
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.contains("first"));
        assert!(rendered.contains("second"));
    }

    #[test]
    fn clear_empties_the_log() {
        let mut timeline = Timeline::new();
        timeline.log("something");
        timeline.clear();
        assert!(timeline.is_empty());
    }
}
