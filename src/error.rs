use thiserror::Error;

/// Errors raised while building a carpet plot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarpetError {
    /// The time range resolves to zero or fewer days (`to` precedes `from`).
    #[error("negative time range: from {from} ms to {to} ms")]
    InvalidRange { from: i64, to: i64 },

    #[error("invalid color scheme: {0}")]
    InvalidColorScheme(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid time zone: {0}")]
    InvalidTimeZone(String),

    /// The frame lacks a usable time field and/or number field.
    #[error("missing field (needs time field: {needs_time}, needs number field: {needs_number})")]
    MissingField { needs_time: bool, needs_number: bool },

    #[error("no series")]
    NoSeries,

    #[error("time and value fields differ in length ({times} vs {values})")]
    LengthMismatch { times: usize, values: usize },
}

pub type Result<T> = std::result::Result<T, CarpetError>;
