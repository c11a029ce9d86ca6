#![deny(missing_docs)]

//! # horizon-resources
//!
//! Typed models for Horizon API resources and the polymorphic JSON
//! decoding that turns raw response bodies into them.
//!
//! Operations and effects are heterogeneous families: the concrete
//! shape of a payload is selected by its `type_i` discriminator. This
//! crate decodes them in two passes (peek the discriminator, then parse
//! the full payload against the registered variant schema) and keeps
//! the discriminator registry a static table, so supporting a new
//! resource kind is a data addition rather than a dispatch change.
//!
//! # Example
//!
//! ```
//! use horizon_resources::{decode_operation, Operation};
//!
//! let raw = br#"{
//!     "id": "120192344791343105",
//!     "paging_token": "120192344791343105",
//!     "type_i": 1,
//!     "type": "payment",
//!     "from": "GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7",
//!     "to": "GBVFTZL5HIPT4PFQVTZVIWR77V7LWYCXU4CLYWWHHOEXB64XPG5LDMTU",
//!     "asset_type": "native",
//!     "amount": "100.0"
//! }"#;
//!
//! let op = decode_operation(raw).unwrap();
//! assert!(matches!(op, Operation::Payment(_)));
//! ```

pub mod account;
pub mod asset;
pub mod effect;
pub mod link;
pub mod operation;
pub mod transaction;

mod decode;
mod error;

pub use account::Account;
pub use asset::{Asset, AssetAmount};
pub use effect::{decode_effect, Effect, EffectKind};
pub use error::DecodeError;
pub use link::Link;
pub use operation::{decode_operation, Operation, OperationKind};
pub use transaction::Transaction;

#[cfg(test)]
mod tests;
