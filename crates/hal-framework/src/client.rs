//! # Render Client
//!
//! The async handle for talking to a [`RenderActor`](crate::actor::RenderActor).

use crate::error::HalError;
use crate::message::RenderRequest;
use crate::model::Resource;
use tokio::sync::{mpsc, oneshot};

/// A cloneable client for a running render actor.
///
/// Holds only the sender half of the request channel, so clones are cheap and
/// can be handed to as many tasks as needed. The actor shuts down once every
/// clone is dropped.
#[derive(Clone, Debug)]
pub struct RenderClient {
    sender: mpsc::Sender<RenderRequest>,
}

impl RenderClient {
    pub fn new(sender: mpsc::Sender<RenderRequest>) -> Self {
        Self { sender }
    }

    pub async fn render(&self, resource: Resource) -> Result<String, HalError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RenderRequest::Render {
                resource: Box::new(resource),
                respond_to,
            })
            .await
            .map_err(|_| HalError::ActorClosed)?;
        response.await.map_err(|_| HalError::ActorDropped)?
    }

    pub async fn parse(&self, document: impl Into<String>) -> Result<Resource, HalError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RenderRequest::Parse {
                document: document.into(),
                respond_to,
            })
            .await
            .map_err(|_| HalError::ActorClosed)?;
        response.await.map_err(|_| HalError::ActorDropped)?
    }
}
