use super::Duration;
use super::convert;
use crate::error::{DurationError, Result};
use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use dashu::integer::IBig;

/// Every input shape a [`Duration`] can be built from.
#[derive(Debug, Clone)]
pub enum TimeInput {
    /// Zero duration
    Empty,
    Duration(Duration),
    /// Wall-clock time of day; only hours, minutes and seconds are read
    TimeOfDay(NaiveTime),
    /// Signed count of whole seconds
    Seconds(IBig),
    /// `-?H:MM:SS`, `-?H:MM` or a `-?` prefixed run of digits (seconds)
    Text(String),
}

impl TimeInput {
    /// Normalize into a canonical [`Duration`].
    pub fn resolve(self) -> Result<Duration> {
        match self {
            TimeInput::Empty => Ok(Duration::zero()),
            TimeInput::Duration(duration) => Ok(duration),
            TimeInput::TimeOfDay(time) => {
                let seconds =
                    IBig::from(time.hour() * 3600 + time.minute() * 60 + time.second());
                Ok(Duration::from_seconds(seconds))
            }
            TimeInput::Seconds(seconds) => Ok(Duration::from_seconds(seconds)),
            TimeInput::Text(text) => resolve_text(&text),
        }
    }
}

fn resolve_text(text: &str) -> Result<Duration> {
    if text.is_empty() {
        return Ok(Duration::zero());
    }

    if convert::is_whole_seconds(text) {
        let seconds: IBig = text
            .parse()
            .map_err(|_| DurationError::invalid_format(text))?;
        return Ok(Duration::from_seconds(seconds));
    }

    let full = if convert::is_hours_minutes(text) {
        format!("{}:00", text)
    } else {
        text.to_string()
    };

    match convert::text_to_seconds(&full) {
        Ok(seconds) => {
            tracing::trace!(input = text, "normalized duration text");
            Ok(Duration::from_seconds(seconds))
        }
        Err(_) => {
            tracing::debug!(input = text, "rejected duration input");
            Err(DurationError::invalid_format(text))
        }
    }
}

impl From<()> for TimeInput {
    fn from(_: ()) -> Self {
        TimeInput::Empty
    }
}

impl<T: Into<TimeInput>> From<Option<T>> for TimeInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(TimeInput::Empty, Into::into)
    }
}

impl From<Duration> for TimeInput {
    fn from(value: Duration) -> Self {
        TimeInput::Duration(value)
    }
}

impl From<&Duration> for TimeInput {
    fn from(value: &Duration) -> Self {
        TimeInput::Duration(value.clone())
    }
}

impl From<NaiveTime> for TimeInput {
    fn from(value: NaiveTime) -> Self {
        TimeInput::TimeOfDay(value)
    }
}

impl From<NaiveDateTime> for TimeInput {
    fn from(value: NaiveDateTime) -> Self {
        TimeInput::TimeOfDay(value.time())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimeInput {
    fn from(value: DateTime<Tz>) -> Self {
        TimeInput::TimeOfDay(value.time())
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for TimeInput {
    fn from(value: &DateTime<Tz>) -> Self {
        TimeInput::TimeOfDay(value.time())
    }
}

impl From<IBig> for TimeInput {
    fn from(value: IBig) -> Self {
        TimeInput::Seconds(value)
    }
}

impl From<&IBig> for TimeInput {
    fn from(value: &IBig) -> Self {
        TimeInput::Seconds(value.clone())
    }
}

macro_rules! seconds_input {
    ($($int:ty),*) => {
        $(
            impl From<$int> for TimeInput {
                fn from(value: $int) -> Self {
                    TimeInput::Seconds(IBig::from(value))
                }
            }
        )*
    };
}

seconds_input!(i32, i64, i128, u32, u64, u128);

impl From<&str> for TimeInput {
    fn from(value: &str) -> Self {
        TimeInput::Text(value.to_string())
    }
}

impl From<String> for TimeInput {
    fn from(value: String) -> Self {
        TimeInput::Text(value)
    }
}

impl From<&String> for TimeInput {
    fn from(value: &String) -> Self {
        TimeInput::Text(value.clone())
    }
}
