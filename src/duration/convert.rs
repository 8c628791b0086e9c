//! Conversions between total seconds and canonical `[-]H:MM:SS` text.

use crate::error::{DurationError, Result};
use dashu::integer::IBig;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

const SECS_IN_MINUTE: u32 = 60;
const SECS_IN_HOUR: u32 = 3600;

static CANONICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+:[0-5][0-9]:[0-5][0-9]$").unwrap());
static HOURS_MINUTES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+:[0-5][0-9]$").unwrap());
static WHOLE_SECONDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").unwrap());

/// Strict check for the canonical `-?H:MM:SS` shape. `H:MM` is not accepted here.
pub fn is_time_format_valid(text: &str) -> bool {
    CANONICAL.is_match(text)
}

pub(crate) fn is_hours_minutes(text: &str) -> bool {
    HOURS_MINUTES.is_match(text)
}

pub(crate) fn is_whole_seconds(text: &str) -> bool {
    WHOLE_SECONDS.is_match(text)
}

/// Split form of a duration. Only built by [`Components::from_seconds`] or by parsing
/// canonical text, so minutes and seconds are always in `0..60`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    negative: bool,
    hours: IBig,
    minutes: IBig,
    seconds: IBig,
}

impl Components {
    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    pub fn hours(&self) -> &IBig {
        &self.hours
    }

    pub fn minutes(&self) -> &IBig {
        &self.minutes
    }

    pub fn seconds(&self) -> &IBig {
        &self.seconds
    }

    pub fn from_seconds(total: &IBig) -> Self {
        let negative = *total < IBig::ZERO;
        let magnitude = if negative { -total } else { total.clone() };

        let hour = IBig::from(SECS_IN_HOUR);
        let minute = IBig::from(SECS_IN_MINUTE);

        Self {
            negative,
            hours: &magnitude / &hour,
            minutes: (&magnitude % &hour) / &minute,
            seconds: &magnitude % &minute,
        }
    }

    pub fn total_seconds(&self) -> IBig {
        let total = &self.hours * IBig::from(SECS_IN_HOUR)
            + &self.minutes * IBig::from(SECS_IN_MINUTE)
            + &self.seconds;
        if self.negative { -total } else { total }
    }

    fn is_zero(&self) -> bool {
        self.hours == IBig::ZERO && self.minutes == IBig::ZERO && self.seconds == IBig::ZERO
    }

    /// Canonical text: hours padded to at least two digits, zero never signed.
    pub fn render(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}:{}:{}",
            sign,
            pad2(&self.hours),
            pad2(&self.minutes),
            pad2(&self.seconds)
        )
    }
}

impl FromStr for Components {
    type Err = DurationError;

    fn from_str(text: &str) -> Result<Self> {
        if !is_time_format_valid(text) {
            return Err(DurationError::invalid_format(text));
        }

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let mut fields = unsigned.split(':').map(IBig::from_str);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(Ok(hours)), Some(Ok(minutes)), Some(Ok(seconds))) => Ok(Self {
                negative,
                hours,
                minutes,
                seconds,
            }),
            _ => Err(DurationError::invalid_format(text)),
        }
    }
}

fn pad2(value: &IBig) -> String {
    let digits = value.to_string();
    if digits.len() < 2 {
        format!("0{}", digits)
    } else {
        digits
    }
}

pub fn seconds_to_text(total: &IBig) -> String {
    Components::from_seconds(total).render()
}

/// Fails with `InvalidFormat` unless `text` passes [`is_time_format_valid`].
pub fn text_to_seconds(text: &str) -> Result<IBig> {
    Ok(text.parse::<Components>()?.total_seconds())
}
