//! Error types for chart derivation.

use thiserror::Error;

use saju_calendar::CalendarError;

use crate::branch::Branch;
use crate::stem::Stem;

/// Errors from building pillars or deriving a chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Underlying calendar conversion or validation failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    /// Stem and branch of differing polarity never share a cycle index.
    #[error("{stem}{branch} is not a sexagenary pair (polarity mismatch)")]
    PolarityMismatch { stem: Stem, branch: Branch },
}
