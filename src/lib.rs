pub mod commands;
pub mod config;
pub mod duration;
pub mod error;

pub use duration::{Components, Duration, TimeInput};
pub use error::DurationError;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
