//! Long-lived streaming subscriptions over collection endpoints.

use std::time::Duration;

use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use horizon_client::HorizonClient;
use horizon_resources::{Effect, Operation, Transaction};

use crate::error::StreamError;
use crate::sse::SseParser;

/// Sentinel cursor meaning "only events after the moment of connection".
///
/// Only valid as the *initial* cursor: once an event arrives, its id is
/// the resumption cursor and reconnects never fall back to `now`.
pub const CURSOR_NOW: &str = "now";

/// Capacity of the event channel between the connection task and the
/// subscriber.
const EVENT_BUFFER: usize = 64;

/// One decoded unit received from an open stream.
#[derive(Debug)]
pub enum StreamEvent<T> {
    /// The stream is open and listening. Emitted exactly once.
    Open,
    /// One decoded resource.
    Resource(T),
    /// A non-fatal error; the stream keeps running.
    Error(StreamError),
}

/// Where to attach a stream: an endpoint path plus pre-encoded query
/// parameters, excluding `cursor`, which the stream manages itself.
#[derive(Debug, Clone)]
pub struct StreamRequest {
    path: String,
    params: Vec<(String, String)>,
    cursor: String,
}

impl StreamRequest {
    /// A request against the given endpoint path, starting at
    /// [`CURSOR_NOW`].
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
            cursor: CURSOR_NOW.to_string(),
        }
    }

    /// Add a pre-encoded query parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Start from this cursor instead of [`CURSOR_NOW`].
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = cursor.into();
        self
    }
}

/// Tuning knobs for an open stream.
#[derive(Debug, Clone)]
pub struct StreamOptions {
    /// Pause between a dropped connection and the next attempt.
    pub reconnect_delay: Duration,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            reconnect_delay: Duration::from_secs(1),
        }
    }
}

/// A live subscription to a streamed collection.
///
/// Each item owns exactly one transport connection at a time and one
/// receive loop; events are delivered to the single consumer in the
/// order received. Independent items share no mutable state.
#[derive(Debug)]
pub struct StreamItem<T> {
    events: mpsc::Receiver<StreamEvent<T>>,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl<T> StreamItem<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Open a stream against a collection endpoint.
    ///
    /// The connection (and any reconnection) happens on a background
    /// task; the returned item is the subscriber half.
    pub fn open(client: HorizonClient, request: StreamRequest, options: StreamOptions) -> Self {
        let (events_tx, events_rx) = mpsc::channel(EVENT_BUFFER);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(run(client, request, options, events_tx, shutdown_rx));
        Self {
            events: events_rx,
            shutdown: shutdown_tx,
            task,
        }
    }

    /// Receive the next event. Returns `None` once the stream has
    /// terminated.
    pub async fn recv(&mut self) -> Option<StreamEvent<T>> {
        self.events.recv().await
    }

    /// Close the stream.
    ///
    /// Signals the connection task and waits for it to terminate, so
    /// when this returns no further event can be observed and no
    /// reconnect attempt can re-open the stream - including a reconnect
    /// that was in flight when `close` was called.
    pub async fn close(mut self) {
        let _ = self.shutdown.send(true);
        self.events.close();
        if let Err(join_err) = (&mut self.task).await {
            if join_err.is_panic() {
                warn!("stream task panicked during close");
            }
        }
    }
}

impl<T> Drop for StreamItem<T> {
    fn drop(&mut self) {
        // A dropped-without-close item must not leave the loop running.
        let _ = self.shutdown.send(true);
        self.task.abort();
    }
}

/// Stream the operations collection.
pub fn stream_operations(
    client: &HorizonClient,
    cursor: Option<&str>,
) -> StreamItem<Operation> {
    open_collection(client, "operations", cursor)
}

/// Stream the effects collection.
pub fn stream_effects(client: &HorizonClient, cursor: Option<&str>) -> StreamItem<Effect> {
    open_collection(client, "effects", cursor)
}

/// Stream the transactions collection.
pub fn stream_transactions(
    client: &HorizonClient,
    cursor: Option<&str>,
) -> StreamItem<Transaction> {
    open_collection(client, "transactions", cursor)
}

fn open_collection<T>(client: &HorizonClient, path: &str, cursor: Option<&str>) -> StreamItem<T>
where
    T: DeserializeOwned + Send + 'static,
{
    let mut request = StreamRequest::new(path);
    if let Some(cursor) = cursor {
        request = request.cursor(cursor);
    }
    StreamItem::open(client.clone(), request, StreamOptions::default())
}

fn stream_url(client: &HorizonClient, request: &StreamRequest, cursor: &str) -> String {
    let mut url = client.endpoint(&request.path);
    url.push_str("?cursor=");
    url.push_str(cursor);
    for (name, value) in &request.params {
        url.push('&');
        url.push_str(name);
        url.push('=');
        url.push_str(value);
    }
    url
}

/// The connection loop: connect, parse frames, decode resources, and
/// reconnect with the last seen cursor until shut down.
async fn run<T>(
    client: HorizonClient,
    request: StreamRequest,
    options: StreamOptions,
    events: mpsc::Sender<StreamEvent<T>>,
    mut shutdown: watch::Receiver<bool>,
) where
    T: DeserializeOwned,
{
    let mut cursor = request.cursor.clone();
    let mut opened = false;

    loop {
        if *shutdown.borrow() {
            return;
        }

        let url = stream_url(&client, &request, &cursor);
        debug!(url, "stream connecting");

        match client.get_stream(&url).await {
            Ok(resp) => {
                let mut parser = SseParser::new();
                let mut body = Box::pin(resp.bytes_stream());
                loop {
                    let chunk = tokio::select! {
                        _ = shutdown.changed() => return,
                        chunk = body.next() => chunk,
                    };
                    // End of body: the server closed; reconnect.
                    let Some(chunk) = chunk else { break };
                    let chunk = match chunk {
                        Ok(chunk) => chunk,
                        Err(e) => {
                            warn!(error = %e, "stream transport dropped");
                            let event = StreamEvent::Error(StreamError::Transport(e.to_string()));
                            if events.send(event).await.is_err() {
                                return;
                            }
                            break;
                        }
                    };
                    for frame in parser.push(&chunk) {
                        // The frame id becomes the resumption cursor
                        // before its payload is even looked at.
                        if let Some(id) = &frame.id {
                            cursor = id.clone();
                        }
                        if frame.data.is_empty() {
                            continue;
                        }
                        if !opened {
                            opened = true;
                            if events.send(StreamEvent::Open).await.is_err() {
                                return;
                            }
                        }
                        if frame.is_control() {
                            continue;
                        }
                        let event = match serde_json::from_str::<T>(&frame.data) {
                            Ok(resource) => StreamEvent::Resource(resource),
                            Err(e) => StreamEvent::Error(StreamError::Decode(e.into())),
                        };
                        if events.send(event).await.is_err() {
                            return;
                        }
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "stream connect failed");
                let event = StreamEvent::Error(StreamError::Transport(e.to_string()));
                if events.send(event).await.is_err() {
                    return;
                }
            }
        }

        tokio::select! {
            _ = shutdown.changed() => return,
            _ = tokio::time::sleep(options.reconnect_delay) => {}
        }
    }
}
