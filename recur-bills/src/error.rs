use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListError {
    #[error("User ID is required")]
    MissingUser,
    #[error("No recurring bills found for user {0}")]
    NoBillsFound(String),
    #[error("bill source failed: {0}")]
    Source(#[from] anyhow::Error),
}

impl ListError {
    /// Message safe to show a caller; source failures stay generic.
    pub fn message(&self) -> &'static str {
        match self {
            ListError::MissingUser => "User ID is required",
            ListError::NoBillsFound(_) => "No recurring bills found",
            ListError::Source(_) => "An error occurred",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_errors_stay_generic() {
        let err = ListError::from(anyhow::anyhow!("connection refused"));
        assert_eq!(err.message(), "An error occurred");
        assert!(err.to_string().contains("connection refused"));
    }
}
