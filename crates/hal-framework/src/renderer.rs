//! # DocumentRenderer Trait
//!
//! A common async interface over "something that turns resources into
//! documents", so application code can take the actor client in production and
//! a [`MockRenderer`](crate::mock::MockRenderer) in tests.

use crate::client::RenderClient;
use crate::engine::HalSerializer;
use crate::error::HalError;
use crate::model::Resource;
use async_trait::async_trait;

#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    /// Renders one resource to JSON text.
    async fn render(&self, resource: Resource) -> Result<String, HalError>;

    /// Renders resources in order, stopping at the first failure.
    #[tracing::instrument(skip(self, resources), fields(count = resources.len()))]
    async fn render_all(&self, resources: Vec<Resource>) -> Result<Vec<String>, HalError> {
        tracing::debug!("Rendering batch");
        let mut documents = Vec::with_capacity(resources.len());
        for resource in resources {
            documents.push(self.render(resource).await?);
        }
        Ok(documents)
    }
}

#[async_trait]
impl DocumentRenderer for RenderClient {
    async fn render(&self, resource: Resource) -> Result<String, HalError> {
        RenderClient::render(self, resource).await
    }
}

/// Renders inline on the calling task.
#[async_trait]
impl DocumentRenderer for HalSerializer {
    async fn render(&self, resource: Resource) -> Result<String, HalError> {
        self.to_string(&resource)
    }
}
