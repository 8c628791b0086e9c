use crate::OutputFormat;
use crate::config::OutputConfig;
use crate::duration::Duration;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Serialize)]
pub struct Report {
    pub text: String,
    /// Decimal string, hours are unbounded
    pub seconds: String,
}

impl From<&Duration> for Report {
    fn from(duration: &Duration) -> Self {
        Self {
            text: duration.to_string(),
            seconds: duration.total_seconds().to_string(),
        }
    }
}

fn parse(value: &str) -> Result<Duration> {
    Duration::new(value).with_context(|| format!("Failed to parse duration '{}'", value))
}

fn emit(output: &OutputConfig, duration: &Duration) -> Result<()> {
    match output.format {
        OutputFormat::Json => {
            let json = serde_json::to_string(&Report::from(duration))
                .context("Failed to serialize result")?;
            println!("{}", json);
        }
        OutputFormat::Text if output.show_seconds => {
            println!("{} ({}s)", duration, duration.total_seconds());
        }
        OutputFormat::Text => println!("{}", duration),
    }
    Ok(())
}

pub fn show(output: &OutputConfig, value: &str) -> Result<()> {
    emit(output, &parse(value)?)
}

pub fn sum(output: &OutputConfig, values: &[String]) -> Result<()> {
    let total = values
        .iter()
        .map(|v| parse(v))
        .collect::<Result<Vec<_>>>()?
        .iter()
        .sum::<Duration>();
    tracing::debug!(count = values.len(), total = %total, "summed durations");
    emit(output, &total)
}

pub fn diff(output: &OutputConfig, left: &str, right: &str) -> Result<()> {
    let result = parse(left)?.difference(parse(right)?)?;
    emit(output, &result)
}

pub fn neg(output: &OutputConfig, value: &str) -> Result<()> {
    emit(output, &parse(value)?.negated())
}

pub fn ordering_label(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Greater => "greater",
        Ordering::Less => "less",
        Ordering::Equal => "equal",
    }
}

pub fn compare(output: &OutputConfig, left: &str, right: &str) -> Result<()> {
    let left = parse(left)?;
    let right = parse(right)?;
    let label = ordering_label(left.compare(&right)?);

    match output.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "ordering": label,
                "left": Report::from(&left),
                "right": Report::from(&right),
            });
            println!("{}", json);
        }
        OutputFormat::Text => println!("{}", label),
    }
    Ok(())
}

/// Strict `H:MM:SS` check. Fails (non-zero exit) when the text is not canonical.
pub fn validate(output: &OutputConfig, text: &str) -> Result<()> {
    let valid = Duration::is_time_format_valid(text);

    match output.format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "valid": valid })),
        OutputFormat::Text => println!("{}", if valid { "valid" } else { "invalid" }),
    }

    if !valid {
        anyhow::bail!("'{}' is not in H:MM:SS form", text);
    }
    Ok(())
}

/// Time of day of `at` (RFC 3339) or of the local clock.
pub fn clock(output: &OutputConfig, at: Option<&str>) -> Result<()> {
    let duration = match at {
        Some(stamp) => {
            let parsed = DateTime::parse_from_rfc3339(stamp)
                .with_context(|| format!("Failed to parse datetime: {}", stamp))?;
            Duration::new(parsed)?
        }
        None => Duration::new(Local::now())?,
    };
    emit(output, &duration)
}
