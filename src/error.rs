use strum::IntoStaticStr;

// -- Status codes

pub mod codes {
    pub const UNAUTHORIZED: u16 = 401;
}

// -- Error type

/// Reasons the `Authorization` header could not yield an API key.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, IntoStaticStr, thiserror::Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}

impl ApiKeyError {
    /// HTTP status the request-handling layer should reply with.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiKeyError::NoAuthHeader | ApiKeyError::MalformedHeader => codes::UNAUTHORIZED,
        }
    }

    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}
