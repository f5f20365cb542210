use thiserror::Error;

/// Errors surfaced by the analysis workflow.
///
/// Transport failures and unparseable bodies stay distinct variants so the
/// caller can tell them apart in logs, but both collapse to the same generic
/// user-facing message: the service is the source of truth for validation
/// detail, and the client does not second-guess it.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Nothing was selected for submission. No request is made.
    #[error("no input provided")]
    NoInput,

    /// The request could not be completed: connection failure or a
    /// non-success status from the service.
    #[error("analysis failed")]
    Request(#[source] reqwest::Error),

    /// The service answered, but the body did not parse as a result.
    #[error("analysis failed")]
    MalformedResponse(#[source] reqwest::Error),
}

impl AnalysisError {
    /// The message shown to the user, matching the two recoverable states the
    /// UI distinguishes: missing input vs. a failed analysis.
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalysisError::NoInput => "Please enter text or upload a file.",
            AnalysisError::Request(_) | AnalysisError::MalformedResponse(_) => "Analysis failed.",
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AnalysisError::MalformedResponse(err)
        } else {
            AnalysisError::Request(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_input_has_its_own_message() {
        assert_eq!(
            AnalysisError::NoInput.user_message(),
            "Please enter text or upload a file."
        );
    }

    #[test]
    fn display_matches_error_kind() {
        assert_eq!(AnalysisError::NoInput.to_string(), "no input provided");
    }
}
