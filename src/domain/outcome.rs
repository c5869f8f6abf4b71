use std::collections::HashMap;

use crate::fetcher::FetchError;

/// Locator → outcome, one entry per distinct locator.
pub type ResultSet = HashMap<String, Outcome>;

/// Terminal result of fetching a single locator.
#[derive(Debug)]
pub enum Outcome {
    /// 2xx response, full body
    Success(Vec<u8>),
    /// Anything else
    Failure(FetchError),
}

impl Outcome {
    /// Body bytes, if any were retrieved.
    ///
    /// Status failures still expose the response body so callers can
    /// inspect the server's error text.
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            Outcome::Success(body) => Some(body),
            Outcome::Failure(FetchError::Status { body, .. }) => Some(body),
            Outcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(e) => Some(e),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// HTTP status for status failures, `None` otherwise
    pub fn status(&self) -> Option<u16> {
        match self {
            Outcome::Failure(FetchError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }

    pub fn into_result(self) -> std::result::Result<Vec<u8>, FetchError> {
        match self {
            Outcome::Success(body) => Ok(body),
            Outcome::Failure(e) => Err(e),
        }
    }
}

impl From<std::result::Result<Vec<u8>, FetchError>> for Outcome {
    fn from(result: std::result::Result<Vec<u8>, FetchError>) -> Self {
        match result {
            Ok(body) => Outcome::Success(body),
            Err(e) => Outcome::Failure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_has_payload_and_no_error() {
        let outcome = Outcome::Success(b"hello".to_vec());
        assert_eq!(outcome.payload(), Some(&b"hello"[..]));
        assert!(outcome.error().is_none());
        assert!(outcome.is_success());
        assert_eq!(outcome.status(), None);
    }

    #[test]
    fn test_status_failure_keeps_body() {
        let outcome = Outcome::Failure(FetchError::Status {
            status: 400,
            body: b"Bad request".to_vec(),
        });
        assert_eq!(outcome.payload(), Some(&b"Bad request"[..]));
        assert_eq!(outcome.status(), Some(400));
        assert!(!outcome.is_success());
        assert_eq!(outcome.error().unwrap().to_string(), "Status code: 400");
    }

    #[test]
    fn test_task_failure_has_no_payload() {
        let outcome = Outcome::Failure(FetchError::Task("worker panicked".into()));
        assert!(outcome.payload().is_none());
        assert!(outcome.error().is_some());
    }

    #[test]
    fn test_into_result() {
        assert_eq!(
            Outcome::Success(b"ok".to_vec()).into_result().unwrap(),
            b"ok".to_vec()
        );
        let err = Outcome::Failure(FetchError::Task("gone".into()))
            .into_result()
            .unwrap_err();
        assert!(matches!(err, FetchError::Task(_)));
    }

    #[test]
    fn test_from_result() {
        let outcome: Outcome = Ok(b"body".to_vec()).into();
        assert!(outcome.is_success());

        let outcome: Outcome = Err(FetchError::Status {
            status: 503,
            body: Vec::new(),
        })
        .into();
        assert_eq!(outcome.status(), Some(503));
    }
}
