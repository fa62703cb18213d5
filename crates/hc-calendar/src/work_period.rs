//! `WorkPeriod` — the working window of one day.

use hc_core::errors::{Error, Result};
use hc_core::Minutes;
use hc_time::WorkTime;

/// Either a non-working day, or a start and end time with `end > start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WorkPeriod {
    /// No working hours.
    #[default]
    NonWorking,
    /// Working from `start` until `end`.
    Working {
        /// Opening time.
        start: WorkTime,
        /// Closing time.
        end: WorkTime,
    },
}

impl WorkPeriod {
    /// A working window.
    ///
    /// # Errors
    /// [`Error::InvalidWorkPeriod`] unless `end` is after `start`.
    pub fn new(start: WorkTime, end: WorkTime) -> Result<Self> {
        hc_core::ensure!(
            end > start,
            Error::InvalidWorkPeriod {
                start: start.to_string(),
                end: end.to_string(),
            }
        );
        Ok(WorkPeriod::Working { start, end })
    }

    /// Return `true` unless this is [`WorkPeriod::NonWorking`].
    pub fn is_working(&self) -> bool {
        matches!(self, WorkPeriod::Working { .. })
    }

    /// `(start, end)` of a working window.
    pub fn bounds(&self) -> Option<(WorkTime, WorkTime)> {
        match *self {
            WorkPeriod::Working { start, end } => Some((start, end)),
            WorkPeriod::NonWorking => None,
        }
    }

    /// Opening time.
    pub fn start(&self) -> Option<WorkTime> {
        self.bounds().map(|(start, _)| start)
    }

    /// Closing time.
    pub fn end(&self) -> Option<WorkTime> {
        self.bounds().map(|(_, end)| end)
    }

    /// Return `true` if `time` lies within the window, both ends included.
    pub fn includes(&self, time: WorkTime) -> bool {
        self.bounds()
            .is_some_and(|(start, end)| start <= time && time <= end)
    }

    /// Length of the window in minutes; zero when non-working.
    pub fn total_minutes(&self) -> Minutes {
        self.bounds().map_or(0, |(start, end)| end.minutes_since(start))
    }
}

impl std::fmt::Display for WorkPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkPeriod::Working { start, end } => write!(f, "{start} - {end}"),
            WorkPeriod::NonWorking => f.write_str("non-working"),
        }
    }
}
