use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Routing service answered with status {status:?} and code {code:?}")]
    BadStatus {
        status: Option<u16>,
        code: Option<String>,
    },

    #[error("Routing service returned no route")]
    EmptyRoute,

    #[error("Deserialization error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RouteError {
    /// The upstream HTTP status, when the failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            RouteError::Network(err) => err.status().map(|status| status.as_u16()),
            RouteError::BadStatus { status, .. } => *status,
            RouteError::EmptyRoute | RouteError::Decode(_) => None,
        }
    }
}
