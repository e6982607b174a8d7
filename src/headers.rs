use crate::Header;
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;

/// Read-only view over the headers of a request.
///
/// Lookups are case-insensitive. When a name carries several values, the first one is returned.
pub trait HeaderMap {
    type Error: fmt::Debug;

    fn extract(&self, name: &str) -> Result<Option<&str>, Self::Error>;
}

impl<H: HeaderMap + ?Sized> HeaderMap for &H {
    type Error = H::Error;

    fn extract(&self, name: &str) -> Result<Option<&str>, Self::Error> {
        (**self).extract(name)
    }
}

impl HeaderMap for Vec<(String, String)> {
    type Error = Infallible;

    fn extract(&self, name: &str) -> Result<Option<&str>, Self::Error> {
        for (k, v) in self {
            if k.eq_ignore_ascii_case(name) {
                return Ok(Some(v));
            }
        }
        Ok(None)
    }
}

impl<'a> HeaderMap for [(&'a str, &'a str)] {
    type Error = Infallible;

    fn extract(&self, name: &str) -> Result<Option<&str>, Self::Error> {
        Ok(self
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v))
    }
}

impl<'a, const N: usize> HeaderMap for [(&'a str, &'a str); N] {
    type Error = Infallible;

    fn extract(&self, name: &str) -> Result<Option<&str>, Self::Error> {
        self.as_slice().extract(name)
    }
}

impl HeaderMap for Vec<Header> {
    type Error = Infallible;

    fn extract(&self, name: &str) -> Result<Option<&str>, Self::Error> {
        Ok(self
            .iter()
            .find(|h| h.key.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_ref()))
    }
}

// Name -> values, the shape most HTTP stacks hand out.
// Iteration order is random, so among keys differing only in case the smallest one (byte order) wins.
impl HeaderMap for HashMap<String, Vec<String>> {
    type Error = Infallible;

    fn extract(&self, name: &str) -> Result<Option<&str>, Self::Error> {
        Ok(self
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(name))
            .min_by(|(a, _), (b, _)| a.cmp(b))
            .and_then(|(_, values)| values.first())
            .map(String::as_str))
    }
}

#[cfg(feature = "http")]
impl HeaderMap for http::HeaderMap {
    type Error = http::header::ToStrError;

    fn extract(&self, name: &str) -> Result<Option<&str>, Self::Error> {
        self.get(name).map(|hv| hv.to_str()).transpose()
    }
}
