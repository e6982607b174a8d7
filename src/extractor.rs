use crate::headers::HeaderMap;
use crate::{ApiKeyError, BlankKeyPolicy, ExtractorOptions};
use tracing::instrument;

pub const AUTHORIZATION_HEADER: &str = "authorization";
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Extracts the key from an `Authorization: ApiKey <key>` header.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiKeyExtractor {
    options: ExtractorOptions,
}

// --- Bound checks
const fn is_send_sync<T: Send + Sync>() {}
const _: () = is_send_sync::<ApiKeyExtractor>();

// Macro used for rejection logs
macro_rules! trace_rejection {
    ($err:expr) => {
        tracing::trace!(error.kind = $err.kind(), "Rejecting authorization header")
    };
}

impl ApiKeyExtractor {
    pub fn new(options: ExtractorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    /// Returns the trimmed key following the `ApiKey` scheme token.
    ///
    /// With [`BlankKeyPolicy::Accept`] a header of exactly `"ApiKey "` yields an empty key.
    #[instrument(level = "trace", skip_all)]
    pub fn extract<H>(&self, headers: &H) -> Result<String, ApiKeyError>
    where
        H: HeaderMap + ?Sized,
    {
        let value = match headers.extract(AUTHORIZATION_HEADER) {
            Ok(Some(value)) if !value.is_empty() => value,
            Ok(_) => {
                trace_rejection!(ApiKeyError::NoAuthHeader);
                return Err(ApiKeyError::NoAuthHeader);
            }
            Err(e) => {
                tracing::debug!("Cannot read '{AUTHORIZATION_HEADER}' header: {e:?}");
                trace_rejection!(ApiKeyError::MalformedHeader);
                return Err(ApiKeyError::MalformedHeader);
            }
        };

        let rest = match value.split_once(' ') {
            Some((scheme, rest)) if scheme == API_KEY_SCHEME => rest,
            _ => {
                trace_rejection!(ApiKeyError::MalformedHeader);
                return Err(ApiKeyError::MalformedHeader);
            }
        };

        let key = rest.trim();
        if key.is_empty() && self.options.blank_key == BlankKeyPolicy::Reject {
            trace_rejection!(ApiKeyError::MalformedHeader);
            return Err(ApiKeyError::MalformedHeader);
        }

        Ok(key.to_owned())
    }
}
