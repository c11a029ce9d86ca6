//! Client configuration and list query parameters.

/// Configuration for a [`HorizonClient`](crate::HorizonClient).
#[derive(Debug, Clone)]
pub struct HorizonConfig {
    /// Base URL of the Horizon server
    /// (e.g. `https://horizon-testnet.stellar.org`).
    pub base_url: String,
    /// Optional Bearer token for authenticated deployments.
    pub auth_token: Option<String>,
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            base_url: "https://horizon-testnet.stellar.org".to_string(),
            auth_token: None,
        }
    }
}

/// Sort order of a listed collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Oldest first.
    #[default]
    Asc,
    /// Newest first.
    Desc,
}

impl Order {
    /// The query parameter value for this order.
    pub fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

/// Cursor, order, and limit parameters shared by every list endpoint.
///
/// Values are rendered into the query string exactly once, here; pages
/// fetched through navigation links never re-derive them.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    cursor: Option<String>,
    order: Option<Order>,
    limit: Option<u32>,
}

impl ListParams {
    /// Parameters with server-side defaults for everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start listing after this cursor.
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Sort order of the collection.
    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Maximum number of records per page.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render as a query string, without the leading `?`. Empty when no
    /// parameter is set.
    pub(crate) fn query_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(cursor) = &self.cursor {
            parts.push(format!("cursor={cursor}"));
        }
        if let Some(order) = self.order {
            parts.push(format!("order={}", order.as_str()));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit={limit}"));
        }
        parts.join("&")
    }
}
