mod error;
mod extractor;
mod headers;

use std::borrow::Cow;

pub use error::{codes, ApiKeyError};
pub use extractor::{ApiKeyExtractor, API_KEY_SCHEME, AUTHORIZATION_HEADER};
pub use headers::HeaderMap;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Header {
    pub key: Cow<'static, str>,
    pub value: Cow<'static, str>,
}

/// What to do when the scheme is valid but nothing but whitespace follows it.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum BlankKeyPolicy {
    /// Return an empty key, e.g. `"ApiKey "` yields `Ok("")`.
    #[default]
    Accept,
    /// Treat a blank key as [`ApiKeyError::MalformedHeader`].
    Reject,
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ExtractorOptions {
    pub blank_key: BlankKeyPolicy,
}

/// Extracts the API key from the `Authorization` header using the default options.
///
/// ```
/// use api_key_extractor::{extract_api_key, ApiKeyError};
///
/// let headers = vec![("Authorization".to_owned(), "ApiKey my-secret-key".to_owned())];
/// assert_eq!(extract_api_key(&headers).unwrap(), "my-secret-key");
///
/// let headers: Vec<(String, String)> = vec![];
/// assert_eq!(extract_api_key(&headers), Err(ApiKeyError::NoAuthHeader));
/// ```
pub fn extract_api_key<H>(headers: &H) -> Result<String, ApiKeyError>
where
    H: HeaderMap + ?Sized,
{
    ApiKeyExtractor::default().extract(headers)
}
