//! Error types for holiday-calendar-rs.
//!
//! All failures in this workspace are deterministic validation failures
//! raised where bad data enters: rule construction, calendar construction
//! or a query call.  Each variant carries the offending field and value so
//! that the caller can correct the input.

use thiserror::Error;

/// The top-level error type used throughout holiday-calendar-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A holiday rule is malformed: missing mandatory field, conflicting
    /// occurrence specifications, out-of-range month or day, or an
    /// unresolved formula reference.
    #[error("invalid holiday rule '{rule}': {field} = {value}: {reason}")]
    InvalidRule {
        /// Name of the rule being built (`"<unnamed>"` if missing).
        rule: String,
        /// The offending field.
        field: &'static str,
        /// The offending value, as supplied.
        value: String,
        /// What is wrong with it.
        reason: String,
    },

    /// An ordinal-weekday expression such as `first_monday` could not be
    /// parsed.
    #[error("invalid ordinal weekday expression '{expression}': {reason}")]
    InvalidExpression {
        /// The expression, as supplied.
        expression: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A weekday in a shift set is neither a weekday name nor a number 0–6.
    #[error("invalid shift day in {field}: {value}")]
    InvalidShiftDay {
        /// `shift_earlier_on` or `shift_later_on`.
        field: &'static str,
        /// The offending token.
        value: String,
    },

    /// A range query was given a start that is not before its end.
    #[error("invalid range: start {start} is not before end {end}")]
    InvalidRange {
        /// The start of the range.
        start: String,
        /// The end of the range.
        end: String,
    },

    /// A weekend-day specification names an unknown weekday.
    #[error("unknown weekday: {value}")]
    UnknownWeekday {
        /// The offending token.
        value: String,
    },

    /// A time of day is out of range.
    #[error("invalid time: {field} = {value}")]
    InvalidTime {
        /// `hour` or `minute`.
        field: &'static str,
        /// The offending value.
        value: u32,
    },

    /// A working period does not end strictly after it starts.
    #[error("invalid working period: end {end} is not after start {start}")]
    InvalidWorkPeriod {
        /// Start of the period.
        start: String,
        /// End of the period.
        end: String,
    },

    /// Date-related error (construction or arithmetic out of range).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout holiday-calendar-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` early if `$cond` is false.
///
/// # Example
/// ```
/// use hc_core::{ensure, errors::Error};
/// fn positive(x: i32) -> hc_core::errors::Result<i32> {
///     ensure!(x > 0, Error::InvalidArgument(format!("x must be positive, got {x}")));
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_field_and_value() {
        let err = Error::InvalidRule {
            rule: "Christmas Day".into(),
            field: "month",
            value: "33".into(),
            reason: "must be in 1..=12 or an English month name".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Christmas Day"));
        assert!(msg.contains("month = 33"));

        let err = Error::InvalidShiftDay {
            field: "shift_later_on",
            value: "9".into(),
        };
        assert_eq!(err.to_string(), "invalid shift day in shift_later_on: 9");
    }

    #[test]
    fn ensure_returns_early() {
        fn check(n: u32) -> Result<u32> {
            ensure!(n < 24, Error::InvalidTime { field: "hour", value: n });
            Ok(n)
        }
        assert_eq!(check(9), Ok(9));
        assert_eq!(
            check(25),
            Err(Error::InvalidTime {
                field: "hour",
                value: 25
            })
        );
    }
}
