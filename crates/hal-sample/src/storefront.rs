//! # Storefront
//!
//! A small in-memory shop that answers with HAL documents. It owns its users,
//! products and orders, and hands every document it builds to a
//! [`DocumentRenderer`], which is the render actor's client in the running
//! app and a [`MockRenderer`](hal_framework::mock::MockRenderer) in tests.

use crate::error::StorefrontError;
use crate::model::{Order, OrderId, OrderLine, OrderStatus, Product, ProductId, User, UserId};
use crate::resources::{catalog_resource, order_resource, user_resource};
use hal_framework::DocumentRenderer;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

pub const PAGE_SIZE: usize = 10;

pub struct Storefront<R: DocumentRenderer> {
    renderer: R,
    users: BTreeMap<UserId, User>,
    products: BTreeMap<ProductId, Product>,
    orders: BTreeMap<OrderId, Order>,
    next_order_id: u32,
}

impl<R: DocumentRenderer> Storefront<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            users: BTreeMap::new(),
            products: BTreeMap::new(),
            orders: BTreeMap::new(),
            next_order_id: 1,
        }
    }

    pub fn add_user(&mut self, user: User) {
        debug!(user_id = %user.id, "Add user");
        self.users.insert(user.id, user);
    }

    pub fn add_product(&mut self, product: Product) {
        debug!(product_id = %product.id, "Add product");
        self.products.insert(product.id, product);
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Validates the customer and stock, reserves the stock and records the
    /// order. Nothing is reserved if any line fails.
    pub fn place_order(
        &mut self,
        user_id: UserId,
        lines: Vec<OrderLine>,
    ) -> Result<OrderId, StorefrontError> {
        if lines.is_empty() {
            return Err(StorefrontError::EmptyOrder);
        }
        if !self.users.contains_key(&user_id) {
            warn!(%user_id, "Order for unknown user");
            return Err(StorefrontError::UserNotFound(user_id));
        }

        // Lines may repeat a product, so stock is checked against the sum.
        let mut requested: BTreeMap<ProductId, u32> = BTreeMap::new();
        for line in &lines {
            let entry = requested.entry(line.product_id).or_default();
            *entry = entry.saturating_add(line.quantity);
        }

        let mut total = 0.0;
        for (&product_id, &quantity) in &requested {
            let product = self
                .products
                .get(&product_id)
                .ok_or(StorefrontError::ProductNotFound(product_id))?;
            if !product.in_stock() || product.quantity < quantity {
                return Err(StorefrontError::InsufficientStock {
                    product_id,
                    requested: quantity,
                    available: product.quantity,
                });
            }
            total += product.price * f64::from(quantity);
        }

        for (product_id, quantity) in &requested {
            if let Some(product) = self.products.get_mut(product_id) {
                product.quantity -= quantity;
            }
        }

        let id = OrderId(self.next_order_id);
        self.next_order_id += 1;
        self.orders.insert(id, Order::new(id, user_id, lines, total));
        info!(order_id = %id, %user_id, total, "Order placed");
        Ok(id)
    }

    /// Marks a created order as shipped.
    pub fn ship_order(&mut self, id: OrderId) -> Result<(), StorefrontError> {
        let order = self.open_order(id)?;
        order.status = OrderStatus::Shipped;
        info!(order_id = %id, "Order shipped");
        Ok(())
    }

    /// Cancels a created order and returns its stock.
    pub fn cancel_order(&mut self, id: OrderId) -> Result<(), StorefrontError> {
        let order = self.open_order(id)?;
        order.status = OrderStatus::Cancelled;
        let lines = order.lines.clone();
        for line in &lines {
            if let Some(product) = self.products.get_mut(&line.product_id) {
                product.quantity = product.quantity.saturating_add(line.quantity);
            }
        }
        info!(order_id = %id, "Order cancelled");
        Ok(())
    }

    pub fn order_status(&self, id: OrderId) -> Option<OrderStatus> {
        self.orders.get(&id).map(|order| order.status)
    }

    fn open_order(&mut self, id: OrderId) -> Result<&mut Order, StorefrontError> {
        let order = self
            .orders
            .get_mut(&id)
            .ok_or(StorefrontError::OrderNotFound(id))?;
        if order.status != OrderStatus::Created {
            warn!(order_id = %id, status = ?order.status, "Order is no longer open");
            return Err(StorefrontError::OrderClosed {
                order_id: id,
                status: order.status,
            });
        }
        Ok(order)
    }

    pub async fn user_document(&self, id: UserId) -> Result<String, StorefrontError> {
        let user = self.users.get(&id).ok_or(StorefrontError::UserNotFound(id))?;
        Ok(self.renderer.render(user_resource(user)?).await?)
    }

    pub async fn order_document(&self, id: OrderId) -> Result<String, StorefrontError> {
        let order = self.orders.get(&id).ok_or(StorefrontError::OrderNotFound(id))?;
        let customer = self
            .users
            .get(&order.user_id)
            .ok_or(StorefrontError::UserNotFound(order.user_id))?;
        let products = order
            .lines
            .iter()
            .map(|line| {
                self.products
                    .get(&line.product_id)
                    .cloned()
                    .ok_or(StorefrontError::ProductNotFound(line.product_id))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let resource = order_resource(order, customer, &products)?;
        Ok(self.renderer.render(resource).await?)
    }

    pub async fn catalog_document(&self, page: usize) -> Result<String, StorefrontError> {
        let products: Vec<Product> = self.products.values().cloned().collect();
        let resource = catalog_resource(&products, page, PAGE_SIZE)?;
        Ok(self.renderer.render(resource).await?)
    }
}
