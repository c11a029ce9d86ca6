#![deny(missing_docs)]

//! # horizon-stream
//!
//! Server-Sent-Events streaming client for Horizon collection
//! endpoints: framed event parsing, cursor resumption, and automatic
//! reconnection.
//!
//! A [`StreamItem`] owns one long-lived connection. Every received
//! frame advances the in-memory resumption cursor, so a dropped
//! connection reconnects exactly where it left off rather than at
//! `now`. One malformed frame is reported and skipped; it never takes
//! the stream down.
//!
//! # Example
//!
//! ```no_run
//! use horizon_client::{HorizonClient, HorizonConfig};
//! use horizon_stream::{stream_operations, StreamEvent};
//!
//! # async fn example() {
//! let client = HorizonClient::new(HorizonConfig::default());
//! let mut stream = stream_operations(&client, None);
//!
//! while let Some(event) = stream.recv().await {
//!     match event {
//!         StreamEvent::Open => println!("listening"),
//!         StreamEvent::Resource(op) => println!("operation {}", op.id()),
//!         StreamEvent::Error(e) => eprintln!("non-fatal: {e}"),
//!     }
//! }
//! # }
//! ```

pub mod error;
pub mod sse;
pub mod stream;

pub use error::StreamError;
pub use sse::{SseFrame, SseParser};
pub use stream::{
    stream_effects, stream_operations, stream_transactions, StreamEvent, StreamItem,
    StreamOptions, StreamRequest, CURSOR_NOW,
};

#[cfg(test)]
mod tests;
