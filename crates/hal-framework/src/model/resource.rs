//! # Resources
//!
//! A [`Resource`] is the unit the writer renders: links, its own state, and
//! any related resources embedded under named relations. Resources nest
//! through [`EmbeddedResource`] and form a tree.
//!
//! State is held as a [`serde_json::Value`] so the writer can branch on its
//! shape with a plain `match`. Use [`ResourceBuilder::state`] to turn any
//! `Serialize` type into that value.

use super::link::{Link, LinkCollection};
use crate::engine::to_token;
use crate::error::HalError;
use serde::Serialize;
use serde_json::Value;

/// A hypermedia resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource {
    pub links: LinkCollection,
    pub state: Option<Value>,
    pub embedded_resources: Vec<EmbeddedResource>,
}

impl Resource {
    /// An empty resource. Renders as `{}`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ResourceBuilder {
        ResourceBuilder::default()
    }

    /// Number of resource levels in this tree, counting `self` as 1.
    pub fn depth(&self) -> usize {
        1 + self
            .embedded_resources
            .iter()
            .flat_map(|rel| rel.resources.iter())
            .map(Resource::depth)
            .max()
            .unwrap_or(0)
    }
}

/// A named relation holding zero or more related resources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbeddedResource {
    pub name: String,
    pub resources: Vec<Resource>,
}

impl EmbeddedResource {
    pub fn new(name: impl Into<String>, resources: Vec<Resource>) -> Self {
        Self {
            name: name.into(),
            resources,
        }
    }

    pub fn single(name: impl Into<String>, resource: Resource) -> Self {
        Self::new(name, vec![resource])
    }
}

/// Fluent construction of [`Resource`] values.
///
/// # Example
/// ```
/// use hal_framework::model::Resource;
/// use serde_json::json;
///
/// let order = Resource::builder()
///     .self_link("/orders/1")
///     .state(&json!({ "total": 30.0 }))?
///     .embed("customer", Resource::builder().self_link("/users/7").build())
///     .build();
///
/// assert_eq!(order.embedded_resources.len(), 1);
/// # Ok::<(), hal_framework::HalError>(())
/// ```
#[derive(Debug, Default)]
pub struct ResourceBuilder {
    resource: Resource,
}

impl ResourceBuilder {
    pub fn link(mut self, rel: impl Into<String>, link: Link) -> Self {
        self.resource.links.add(rel, link);
        self
    }

    pub fn self_link(self, href: impl Into<String>) -> Self {
        self.link("self", Link::new(href))
    }

    /// Sets the state from any serializable value.
    pub fn state<T: Serialize + ?Sized>(mut self, state: &T) -> Result<Self, HalError> {
        self.resource.state = Some(to_token(state)?);
        Ok(self)
    }

    /// Sets an already-converted state token.
    pub fn state_value(mut self, state: Value) -> Self {
        self.resource.state = Some(state);
        self
    }

    pub fn embed(mut self, name: impl Into<String>, resource: Resource) -> Self {
        self.resource
            .embedded_resources
            .push(EmbeddedResource::single(name, resource));
        self
    }

    pub fn embed_many(mut self, name: impl Into<String>, resources: Vec<Resource>) -> Self {
        self.resource
            .embedded_resources
            .push(EmbeddedResource::new(name, resources));
        self
    }

    pub fn build(self) -> Resource {
        self.resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_keeps_state_field_order() {
        #[derive(Serialize)]
        struct Item {
            zeta: u32,
            alpha: &'static str,
        }

        let resource = Resource::builder()
            .state(&Item { zeta: 1, alpha: "a" })
            .unwrap()
            .build();
        let keys: Vec<&String> = resource
            .state
            .as_ref()
            .and_then(Value::as_object)
            .map(|m| m.keys().collect())
            .unwrap_or_default();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_depth_counts_nested_levels() {
        let leaf = Resource::builder().state_value(json!({"n": 3})).build();
        let middle = Resource::builder().embed("leaf", leaf).build();
        let root = Resource::builder()
            .embed_many("middles", vec![middle, Resource::new()])
            .build();
        assert_eq!(root.depth(), 3);
        assert_eq!(Resource::new().depth(), 1);
    }
}
