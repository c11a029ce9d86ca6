//! Hypermedia links carried in Horizon response envelopes.

use serde::{Deserialize, Serialize};

/// A navigable reference to a related resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URL. Contains `{?...}` placeholders when `templated`.
    pub href: String,
    /// Whether `href` is an RFC 6570 template rather than a plain URL.
    ///
    /// Templated links must not be dereferenced directly.
    #[serde(default)]
    pub templated: bool,
}

impl Link {
    /// Whether this link can be fetched as-is.
    pub fn is_dereferenceable(&self) -> bool {
        !self.templated
    }
}
