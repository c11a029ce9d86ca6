#![deny(missing_docs)]

//! Horizon client SDK - complete SDK.
//!
//! Re-exports all Horizon SDK components for convenient single-crate
//! usage.

pub use horizon_client as client;
pub use horizon_resources as resources;
pub use horizon_stream as stream;
pub use horizon_submit as submit;
