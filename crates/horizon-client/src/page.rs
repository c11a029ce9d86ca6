//! Cursor-based pagination over listed collections.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use horizon_resources::Link;

use crate::client::HorizonClient;
use crate::error::HorizonError;

/// The `_links`/`_embedded` envelope Horizon wraps every list in.
#[derive(Debug, Deserialize)]
pub(crate) struct PageEnvelope<T> {
    #[serde(rename = "_links")]
    pub(crate) links: PageLinks,
    #[serde(rename = "_embedded")]
    pub(crate) embedded: Embedded<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageLinks {
    #[serde(rename = "self", default)]
    pub(crate) self_link: Option<Link>,
    #[serde(default)]
    pub(crate) next: Option<Link>,
    #[serde(default)]
    pub(crate) prev: Option<Link>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Embedded<T> {
    pub(crate) records: Vec<T>,
}

/// One fetched slice of an ordered, cursor-addressable collection.
///
/// Records are kept in server order and never re-sorted locally;
/// direction is purely a property of the links the server handed back.
/// A page can re-issue requests through its navigation links, yielding
/// a fresh `Page` each time.
#[derive(Debug)]
pub struct Page<T> {
    records: Vec<T>,
    self_link: Option<Link>,
    next_link: Option<Link>,
    prev_link: Option<Link>,
    client: HorizonClient,
}

impl<T> Page<T> {
    pub(crate) fn new(envelope: PageEnvelope<T>, client: HorizonClient) -> Self {
        Self {
            records: envelope.embedded.records,
            self_link: envelope.links.self_link,
            next_link: envelope.links.next,
            prev_link: envelope.links.prev,
            client,
        }
    }

    /// The records of this page, in server order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Consume the page, keeping only its records.
    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    /// The link this page was fetched from.
    pub fn self_link(&self) -> Option<&Link> {
        self.self_link.as_ref()
    }

    /// The link to the following page, when the server provided one.
    pub fn next_link(&self) -> Option<&Link> {
        self.next_link.as_ref()
    }

    /// The link to the preceding page, when the server provided one.
    pub fn prev_link(&self) -> Option<&Link> {
        self.prev_link.as_ref()
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Fetch the following page.
    ///
    /// The stored `next` href is requested verbatim: cursor, order, and
    /// limit are already encoded in it. Returns
    /// [`HorizonError::NoSuchPage`] when the link is absent or
    /// templated.
    pub async fn next(&self) -> Result<Page<T>, HorizonError> {
        self.follow(self.next_link.as_ref()).await
    }

    /// Fetch the preceding page. Same link semantics as [`Page::next`].
    pub async fn prev(&self) -> Result<Page<T>, HorizonError> {
        self.follow(self.prev_link.as_ref()).await
    }

    async fn follow(&self, link: Option<&Link>) -> Result<Page<T>, HorizonError> {
        let link = link
            .filter(|l| l.is_dereferenceable())
            .ok_or(HorizonError::NoSuchPage)?;
        self.client.get_page(&link.href).await
    }
}
