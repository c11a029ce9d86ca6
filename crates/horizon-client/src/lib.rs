#![deny(missing_docs)]

//! # horizon-client
//!
//! Async HTTP client for the Horizon API: typed endpoint calls, a
//! closed error taxonomy, and cursor-based pagination that walks
//! collections through the server's own navigation links.
//!
//! # Example
//!
//! ```no_run
//! use horizon_client::{HorizonClient, HorizonConfig, ListParams, Order};
//!
//! # async fn example() -> Result<(), horizon_client::HorizonError> {
//! let client = HorizonClient::new(HorizonConfig::default());
//!
//! let page = client
//!     .operations(&ListParams::new().order(Order::Desc).limit(10))
//!     .await?;
//! for op in page.records() {
//!     println!("{} {}", op.id(), op.base().type_name);
//! }
//!
//! // Walk forward; the next href is requested verbatim.
//! let following = page.next().await?;
//! assert!(following.records().len() <= 10);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod page;
pub mod types;

pub use client::HorizonClient;
pub use error::{HorizonError, HttpErrorKind, Problem};
pub use page::Page;
pub use types::{HorizonConfig, ListParams, Order};

#[cfg(test)]
mod tests;
