//! Represents a customer order.
//!
//! An order is rendered with its customer embedded as a single resource and
//! the ordered products embedded as a relation. Its own state is the
//! [`OrderSummary`], not the full struct: the line items travel as embedded
//! resources instead of state fields.

use crate::model::{ProductId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders. Serializes as the bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Created,
    Shipped,
    Cancelled,
}

/// One product line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub lines: Vec<OrderLine>,
    pub total: f64,
    pub status: OrderStatus,
}

/// The state fields of an order resource.
#[derive(Debug, Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub total: f64,
    pub status: OrderStatus,
    pub item_count: u32,
}

impl Order {
    /// Creates a new Order in the `Created` state.
    pub fn new(id: impl Into<OrderId>, user_id: UserId, lines: Vec<OrderLine>, total: f64) -> Self {
        Self {
            id: id.into(),
            user_id,
            lines,
            total,
            status: OrderStatus::Created,
        }
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            id: self.id,
            total: self.total,
            status: self.status,
            item_count: self.lines.iter().map(|line| line.quantity).sum(),
        }
    }
}
