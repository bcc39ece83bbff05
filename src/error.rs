use thiserror::Error;

use crate::content::ContentError;

/// Failures that stop the server from starting.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Couldn't read leptos configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_error_passes_through() {
        let err = SiteError::from(ContentError::NotFound("profile.json".to_string()));
        assert_eq!(err.to_string(), "Content file not found: profile.json");
    }
}
