//! Date range formatting shared by every section that shows a start/end pair.
//!
//! An in-progress flag always wins over whatever end date is stored: a job
//! marked current reads "Present" even if an old end date is still on file.

use std::fmt;

/// Separator between the two ends of a range (en dash, padded).
pub const RANGE_SEPARATOR: &str = " – ";

/// What to print in place of the end date for unfinished periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressLabel {
    /// Jobs and studies.
    Present,
    /// Projects.
    Ongoing,
}

impl ProgressLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            ProgressLabel::Present => "Present",
            ProgressLabel::Ongoing => "Ongoing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    start: String,
    end: String,
}

impl DateRange {
    pub fn new(start: &str, end: &str, in_progress: bool, label: ProgressLabel) -> Self {
        let end = if in_progress {
            label.as_str().to_string()
        } else {
            end.trim().to_string()
        };
        Self {
            start: start.trim().to_string(),
            end,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }

    /// Display text, or `None` when neither side has a value.
    pub fn text(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_string())
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start.is_empty(), self.end.is_empty()) {
            (false, false) => write!(f, "{}{}{}", self.start, RANGE_SEPARATOR, self.end),
            (false, true) => f.write_str(&self.start),
            (true, false) => f.write_str(&self.end),
            (true, true) => Ok(()),
        }
    }
}
