use thiserror::Error;

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Failure to obtain contribution data from the remote source.
///
/// Callers see a single error kind; the variants are diagnostic detail for
/// logging. Cache faults never produce a `FetchError`; they degrade to
/// misses inside the cache layer.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Remote returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Truncate a response body to avoid logging excessive data.
    /// The cut is walked back to a char boundary so multi-byte UTF-8
    /// bodies never panic the slice.
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut cut = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..cut],
            body.len()
        )
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        FetchError::Status {
            status,
            body: Self::truncate_body(body),
        }
    }

    /// The HTTP status carried by this error, if it was a status failure.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_truncates_long_bodies() {
        let body = "x".repeat(2000);
        let err = FetchError::from_status(reqwest::StatusCode::NOT_FOUND, &body);
        match err {
            FetchError::Status { status, body } => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
                assert!(body.len() < 600);
                assert!(body.contains("truncated"));
            }
            _ => panic!("expected status variant"),
        }
    }

    #[test]
    fn test_from_status_cuts_multibyte_bodies_at_char_boundary() {
        // 200 euro signs is 600 bytes with a char straddling byte 500.
        let body = "\u{20ac}".repeat(200);
        let err = FetchError::from_status(reqwest::StatusCode::NOT_FOUND, &body);
        match err {
            FetchError::Status { body, .. } => {
                assert!(body.contains("truncated, 600 total bytes"));
                assert!(body.starts_with('\u{20ac}'));
            }
            _ => panic!("expected status variant"),
        }
    }

    #[test]
    fn test_status_accessor() {
        let err = FetchError::from_status(reqwest::StatusCode::NOT_FOUND, "no such user");
        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));

        let parse_err = serde_json::from_str::<u32>("oops").unwrap_err();
        assert_eq!(FetchError::from(parse_err).status(), None);
    }
}
