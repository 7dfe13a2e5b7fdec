//! # Render Actor
//!
//! This module defines the `RenderActor`, the server half of the render
//! service. It owns a [`HalSerializer`] and processes requests sequentially,
//! giving each one a fresh [`JsonSink`](crate::sink::JsonSink).

use crate::client::RenderClient;
use crate::engine::HalSerializer;
use crate::message::RenderRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that renders resources on behalf of any number of clients.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `RenderActor::new()` to get the `actor` and its `client`.
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Clone the client wherever documents are needed.
///
/// ```rust
/// use hal_framework::{HalSerializer, RenderActor, Resource};
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = RenderActor::new(HalSerializer::default(), 10);
///     tokio::spawn(actor.run());
///
///     let json = client.render(Resource::new()).await.unwrap();
///     assert_eq!(json, "{}");
/// }
/// ```
pub struct RenderActor {
    receiver: mpsc::Receiver<RenderRequest>,
    serializer: HalSerializer,
    rendered: u64,
}

impl RenderActor {
    /// Creates a new `RenderActor` and its associated `RenderClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full,
    /// client calls wait until there is space.
    pub fn new(serializer: HalSerializer, buffer_size: usize) -> (Self, RenderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            serializer,
            rendered: 0,
        };
        (actor, RenderClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!(media_type = self.serializer.media_type(), "Render actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RenderRequest::Render {
                    resource,
                    respond_to,
                } => {
                    debug!(depth = resource.depth(), "Render");
                    let result = self.serializer.to_string(&resource);
                    match &result {
                        Ok(json) => {
                            self.rendered += 1;
                            info!(bytes = json.len(), "Rendered");
                        }
                        Err(e) => warn!(error = %e, "Render failed"),
                    }
                    let _ = respond_to.send(result);
                }
                RenderRequest::Parse {
                    document,
                    respond_to,
                } => {
                    debug!(bytes = document.len(), "Parse");
                    let result = self.serializer.from_str(&document);
                    if let Err(e) = &result {
                        warn!(error = %e, "Parse refused");
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(rendered = self.rendered, "Shutdown");
    }
}
