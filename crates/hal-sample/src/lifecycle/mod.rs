//! # System Lifecycle
//!
//! Starts the render actor, hands out its client, and shuts it down cleanly.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - Wait for the actor task to finish
//!
//! Clones of the client handed out elsewhere keep the actor alive; drop them
//! before calling [`RenderSystem::shutdown`].

use hal_framework::{HalSerializer, RenderActor, RenderClient, WriterOptions};
use tracing::{error, info};

const BUFFER_SIZE: usize = 32;

pub struct RenderSystem {
    /// Client for the render actor
    pub client: RenderClient,
    handle: tokio::task::JoinHandle<()>,
}

impl RenderSystem {
    /// Spawns a render actor using `options` for every document.
    pub fn new(options: WriterOptions) -> Self {
        let (actor, client) = RenderActor::new(HalSerializer::new(options), BUFFER_SIZE);
        let handle = tokio::spawn(actor.run());
        Self { client, handle }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down render system");
        drop(self.client);
        if let Err(e) = self.handle.await {
            error!(error = %e, "Render actor task failed");
            return Err(e.to_string());
        }
        info!("Render system shut down");
        Ok(())
    }
}

impl Default for RenderSystem {
    fn default() -> Self {
        Self::new(WriterOptions::default())
    }
}
