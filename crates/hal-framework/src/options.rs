//! # Writer Options
//!
//! Knobs for the edge cases of the resource layout. Every default reproduces
//! the established wire format, so `WriterOptions::default()` is what callers
//! get unless they opt in to something else.
//!
//! Options deserialize from JSON, with missing fields falling back to their
//! defaults:
//!
//! ```
//! use hal_framework::options::{EmptyRelationPolicy, WriterOptions};
//!
//! let options: WriterOptions =
//!     serde_json::from_str(r#"{ "empty_relations": "omit", "max_depth": 8 }"#)?;
//! assert_eq!(options.empty_relations, EmptyRelationPolicy::Omit);
//! assert_eq!(options.max_depth, Some(8));
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// What to write for an embedded relation that holds no resources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyRelationPolicy {
    /// Write the relation name and no value.
    #[default]
    Dangling,
    /// Skip the relation entirely.
    Omit,
    /// Write the relation as `[]`.
    EmptyArray,
}

/// What to do with a state value that is not a JSON object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonObjectStatePolicy {
    /// Write the token verbatim at the current position.
    #[default]
    Raw,
    /// Write the token as the value of a `state` property.
    Wrap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Deepest resource nesting allowed, counting the top-level resource as 1.
    /// `None` leaves recursion uncapped.
    pub max_depth: Option<usize>,
    pub empty_relations: EmptyRelationPolicy,
    pub non_object_state: NonObjectStatePolicy,
}

impl WriterOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_empty_relations(mut self, policy: EmptyRelationPolicy) -> Self {
        self.empty_relations = policy;
        self
    }

    pub fn with_non_object_state(mut self, policy: NonObjectStatePolicy) -> Self {
        self.non_object_state = policy;
        self
    }
}
