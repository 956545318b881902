use natcat_core::{ConfigError, FeedError, ValidationError, ZoneCatalogError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Usage(String),

    #[error("feed error [{}]: {}", .0.code(), .0.message())]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Zones(#[from] ZoneCatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Usage(_) => 2,
            Self::Feed(_) => 3,
            Self::Serialization(_) => 4,
            Self::Config(_) => 6,
            Self::Zones(ZoneCatalogError::Io { .. }) => 10,
            Self::Zones(_) => 6,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_error_category() {
        assert_eq!(
            CliError::from(ValidationError::EmptyField { field: "id" }).exit_code(),
            2
        );
        assert_eq!(CliError::from(FeedError::unavailable("down")).exit_code(), 3);
        assert_eq!(
            CliError::from(ZoneCatalogError::DuplicateId { id: "T001".into() }).exit_code(),
            6
        );
        let missing = ZoneCatalogError::Io {
            path: String::from("book.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(CliError::from(missing).exit_code(), 10);
    }

    #[test]
    fn feed_errors_carry_their_code() {
        let rendered = CliError::from(FeedError::rate_limited("slow down")).to_string();
        assert!(rendered.contains("feed.rate_limited"));
        assert!(rendered.contains("slow down"));
    }
}
