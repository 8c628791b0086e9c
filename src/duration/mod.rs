//! Signed `H:MM:SS` elapsed-time value with unbounded hours.
//!
//! A [`Duration`] keeps its total seconds as an arbitrary-precision integer next to the
//! canonical text, so neither ever has to be re-derived.
//!
//! ```
//! use hms_duration::Duration;
//!
//! let total = Duration::new("1:30").unwrap().sum(30).unwrap();
//! assert_eq!(total.to_string(), "01:30:30");
//! ```

pub mod convert;
pub mod input;
mod serialization;

pub use convert::Components;
pub use input::TimeInput;

use crate::error::{DurationError, Result};
use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use dashu::integer::IBig;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Duration {
    text: String,
    seconds: IBig,
}

impl Duration {
    /// Build from any accepted input shape, see [`TimeInput`].
    pub fn new(input: impl Into<TimeInput>) -> Result<Self> {
        input.into().resolve()
    }

    pub fn zero() -> Self {
        Self::from_seconds(IBig::ZERO)
    }

    pub fn from_seconds(seconds: impl Into<IBig>) -> Self {
        let seconds = seconds.into();
        Self {
            text: convert::seconds_to_text(&seconds),
            seconds,
        }
    }

    pub fn sum(&self, other: impl Into<TimeInput>) -> Result<Self> {
        let other = Self::new(other)?;
        Ok(self + &other)
    }

    pub fn difference(&self, other: impl Into<TimeInput>) -> Result<Self> {
        let other = Self::new(other)?;
        Ok(self - &other)
    }

    pub fn negate(&self) -> Self {
        Self::from_seconds(-&self.seconds)
    }

    /// Same as [`Duration::negate`].
    pub fn negated(&self) -> Self {
        self.negate()
    }

    /// Three-way comparison against anything [`Duration::new`] accepts.
    pub fn compare(&self, other: impl Into<TimeInput>) -> Result<Ordering> {
        let other = Self::new(other)?;
        Ok(self.cmp(&other))
    }

    pub fn is_greater_than(&self, other: impl Into<TimeInput>) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    pub fn is_greater_or_equal(&self, other: impl Into<TimeInput>) -> Result<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    pub fn is_less_than(&self, other: impl Into<TimeInput>) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn is_less_or_equal(&self, other: impl Into<TimeInput>) -> Result<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    pub fn is_equal_to(&self, other: impl Into<TimeInput>) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    pub fn total_seconds(&self) -> &IBig {
        &self.seconds
    }

    pub fn is_negative(&self) -> bool {
        self.seconds < IBig::ZERO
    }

    /// Canonical `[-]H:MM:SS` form.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn components(&self) -> Components {
        Components::from_seconds(&self.seconds)
    }

    pub fn is_time_format_valid(text: &str) -> bool {
        convert::is_time_format_valid(text)
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Duration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Duration {
    type Error = DurationError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Duration {
    type Error = DurationError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<IBig> for Duration {
    fn from(seconds: IBig) -> Self {
        Self::from_seconds(seconds)
    }
}

macro_rules! seconds_duration {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Duration {
                fn from(seconds: $int) -> Self {
                    Self::from_seconds(seconds)
                }
            }
        )*
    };
}

seconds_duration!(i32, i64, i128, u32, u64, u128);

impl From<NaiveTime> for Duration {
    fn from(time: NaiveTime) -> Self {
        Self::from_seconds(time.num_seconds_from_midnight())
    }
}

impl From<NaiveDateTime> for Duration {
    fn from(value: NaiveDateTime) -> Self {
        Self::from(value.time())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Duration {
    fn from(value: DateTime<Tz>) -> Self {
        Self::from(value.time())
    }
}

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.seconds == other.seconds
    }
}

impl Eq for Duration {}

impl Hash for Duration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.seconds.hash(state);
    }
}

impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Duration {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seconds.cmp(&other.seconds)
    }
}

impl Add<&Duration> for &Duration {
    type Output = Duration;

    fn add(self, rhs: &Duration) -> Duration {
        Duration::from_seconds(&self.seconds + &rhs.seconds)
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration::from_seconds(self.seconds + rhs.seconds)
    }
}

impl Sub<&Duration> for &Duration {
    type Output = Duration;

    fn sub(self, rhs: &Duration) -> Duration {
        Duration::from_seconds(&self.seconds - &rhs.seconds)
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration::from_seconds(self.seconds - rhs.seconds)
    }
}

impl Neg for &Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        self.negate()
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration::from_seconds(-self.seconds)
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Self {
        Duration::from_seconds(iter.map(|d| d.seconds).fold(IBig::ZERO, |acc, s| acc + s))
    }
}

impl<'a> Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Duration>>(iter: I) -> Self {
        Duration::from_seconds(iter.fold(IBig::ZERO, |acc, d| acc + &d.seconds))
    }
}
