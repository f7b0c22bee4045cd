use thiserror::Error;

/// Batch-level failure of the resolution pipeline.
///
/// Per-title lookup errors never surface here; they are isolated into
/// [`QueryOutcome::Failed`](crate::QueryOutcome::Failed).
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Resolution task aborted: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Errors that can occur when submitting records to the persistence endpoint.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("No records to save")]
    EmptyCollection,

    #[error("Server rejected the request ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },

    #[error("No response from server: {0}")]
    NoResponse(String),

    #[error("Request could not be sent: {0}")]
    Unsendable(String),
}

impl SaveError {
    /// Message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            SaveError::EmptyCollection => "No movie data to save.".to_string(),
            SaveError::Rejected { message, .. } => format!(
                "Error saving data: {}",
                message.as_deref().unwrap_or("Please try again.")
            ),
            SaveError::NoResponse(_) => {
                "No response from the server. Please check your connection.".to_string()
            }
            SaveError::Unsendable(_) => "An unexpected error occurred. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let rejected = SaveError::Rejected {
            status: 400,
            message: Some("Invalid payload".to_string()),
        };
        assert_eq!(rejected.user_message(), "Error saving data: Invalid payload");

        let rejected = SaveError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(rejected.user_message(), "Error saving data: Please try again.");

        assert_eq!(
            SaveError::NoResponse("timed out".into()).user_message(),
            "No response from the server. Please check your connection."
        );
        assert_eq!(
            SaveError::Unsendable("bad url".into()).user_message(),
            "An unexpected error occurred. Please try again."
        );
        assert_eq!(SaveError::EmptyCollection.user_message(), "No movie data to save.");
    }
}
