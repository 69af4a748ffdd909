//! Block-explorer link builders.
//!
//! DESIGN
//! ======
//! Links are assembled segment by segment on a parsed base URL, so
//! caller-supplied values (transaction hashes in particular) are
//! percent-encoded and cannot break out of their path segment.

#[cfg(test)]
#[path = "explorer_test.rs"]
mod explorer_test;

use url::Url;

/// Explorer used when no other base is configured.
pub const SEPOLIA_EXPLORER_URL: &str = "https://sepolia.etherscan.io";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("invalid explorer url: {0}")]
    Parse(#[from] url::ParseError),
    #[error("explorer url cannot carry a path: {0}")]
    CannotBeABase(String),
}

/// Base URL of a block explorer with account and transaction pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Explorer {
    base: Url,
}

impl Explorer {
    /// Parse an explorer base such as `https://sepolia.etherscan.io`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError`] if `base` is not an absolute URL that can
    /// carry path segments.
    pub fn new(base: &str) -> Result<Self, LinkError> {
        let base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(LinkError::CannotBeABase(base.into()));
        }
        Ok(Self { base })
    }

    /// Account page: `{base}/address/{address}`.
    pub fn address_url(&self, address: &str) -> String {
        self.page("address", address)
    }

    /// Transaction page: `{base}/tx/{hash}`. The hash is not validated.
    pub fn tx_url(&self, hash: &str) -> String {
        self.page("tx", hash)
    }

    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    fn page(&self, kind: &str, value: &str) -> String {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        // Infallible: cannot-be-a-base URLs are rejected in `new`.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(kind).push(value);
        }
        url.into()
    }
}
