use thiserror::Error;

/// Failure class of a search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Transport failure, no HTTP response.
    Network,
    /// Non-2xx status.
    Http,
    /// Body does not match the expected schema.
    Decode,
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchErrorKind::Network => write!(f, "network"),
            FetchErrorKind::Http => write!(f, "http"),
            FetchErrorKind::Decode => write!(f, "decode"),
        }
    }
}

/// Error returned by a search client.
///
/// Cloneable so the query cache can keep it next to the entry it belongs to.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} error: {detail}")]
pub struct FetchError {
    pub kind: FetchErrorKind,
    /// HTTP status for `Http` errors.
    pub status: Option<u16>,
    pub detail: String,
}

const MAX_DETAIL_LEN: usize = 200;

impl FetchError {
    pub fn network(err: reqwest::Error) -> Self {
        Self {
            kind: FetchErrorKind::Network,
            status: None,
            detail: err.to_string(),
        }
    }

    pub fn http(status: u16, body: &str) -> Self {
        let body = body.trim();
        let detail = if body.is_empty() {
            format!("status {}", status)
        } else {
            let snippet: String = body.chars().take(MAX_DETAIL_LEN).collect();
            format!("status {}: {}", status, snippet)
        };
        Self {
            kind: FetchErrorKind::Http,
            status: Some(status),
            detail,
        }
    }

    pub fn decode(err: serde_json::Error) -> Self {
        Self {
            kind: FetchErrorKind::Decode,
            status: None,
            detail: err.to_string(),
        }
    }

    /// Message shown in the error banner. All kinds look the same to the user.
    pub fn user_message(&self) -> &'static str {
        "There was an error, please try again..."
    }
}
