//! Error types for the chart pipeline, config loading and history storage.

use std::path::PathBuf;

use thiserror::Error;

use saju_base::ChartError;
use saju_calendar::CalendarError;

/// Summary attached to every wrapped derivation failure.
pub const COMPUTATION_SUMMARY: &str = "사주 계산 중 오류가 발생했습니다";

/// Errors from computing a chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SajuError {
    /// Out-of-range year or invalid date, surfaced unchanged.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    /// Any other derivation failure, with the original cause attached.
    #[error("{summary}: {source}")]
    Computation {
        summary: &'static str,
        #[source]
        source: ChartError,
    },
}

impl From<ChartError> for SajuError {
    fn from(e: ChartError) -> Self {
        match e {
            ChartError::Calendar(c) => Self::Calendar(c),
            other => Self::Computation { summary: COMPUTATION_SUMMARY, source: other },
        }
    }
}

/// Errors from loading an engine config file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config {path}: history_limit must be in 1..={max}, got {limit}")]
    HistoryLimit { path: PathBuf, limit: usize, max: usize },
}

/// Errors from a history storage backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::{Branch, Stem};

    #[test]
    fn calendar_errors_pass_through_verbatim() {
        let e: SajuError = ChartError::Calendar(CalendarError::OutOfRange { year: 1800 }).into();
        assert_eq!(e, SajuError::Calendar(CalendarError::OutOfRange { year: 1800 }));
        assert!(e.to_string().contains("1800"));
    }

    #[test]
    fn other_errors_are_wrapped() {
        let e: SajuError = ChartError::PolarityMismatch { stem: Stem::Gap, branch: Branch::Chuk }.into();
        assert!(matches!(e, SajuError::Computation { .. }));
        assert!(e.to_string().starts_with(COMPUTATION_SUMMARY));
        assert!(std::error::Error::source(&e).is_some());
    }
}
