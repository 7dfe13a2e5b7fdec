//! # Render Messages
//!
//! Requests sent from a [`RenderClient`](crate::client::RenderClient) to the
//! [`RenderActor`](crate::actor::RenderActor).

use crate::error::HalError;
use crate::model::Resource;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the render actor.
pub type Response<T> = oneshot::Sender<Result<T, HalError>>;

/// Work the render actor knows how to do.
///
/// Every request carries its own reply channel, so the caller that sent it is
/// the only one that sees the result.
#[derive(Debug)]
pub enum RenderRequest {
    /// Render a resource to compact JSON text.
    Render {
        resource: Box<Resource>,
        respond_to: Response<String>,
    },
    /// Read a document back into a resource. Always answered with
    /// [`HalError::Unsupported`] by the built-in converters.
    Parse {
        document: String,
        respond_to: Response<Resource>,
    },
}
