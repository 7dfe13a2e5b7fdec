//! # Domain → Resource Mapping
//!
//! Turns storefront models into [`Resource`] trees. Each function adds the
//! links a client needs to navigate from that document, uses the model (or a
//! summary of it) as state, and embeds related resources.

use crate::model::{Order, Product, User};
use hal_framework::{HalError, Link, Resource};
use serde_json::json;

pub fn user_href(user: &User) -> String {
    format!("/users/{}", user.id.0)
}

pub fn product_href(product: &Product) -> String {
    format!("/products/{}", product.id.0)
}

pub fn user_resource(user: &User) -> Result<Resource, HalError> {
    Ok(Resource::builder()
        .self_link(user_href(user))
        .link("orders", Link::templated(format!("{}/orders{{?status}}", user_href(user))))
        .state(user)?
        .build())
}

/// A product. Only products in stock carry a `buy` link.
pub fn product_resource(product: &Product) -> Result<Resource, HalError> {
    let mut builder = Resource::builder().self_link(product_href(product));
    if product.in_stock() {
        builder = builder.link(
            "buy",
            Link::templated(format!("/orders?product={}{{&quantity}}", product.id.0)),
        );
    }
    Ok(builder.state(product)?.build())
}

/// An order with its customer and products embedded.
///
/// `products` are the products referenced by the order lines, in line order.
/// An order with a single line embeds its product as an object, like the
/// customer.
pub fn order_resource(
    order: &Order,
    customer: &User,
    products: &[Product],
) -> Result<Resource, HalError> {
    let mut builder = Resource::builder()
        .self_link(format!("/orders/{}", order.id.0))
        .link("customer", Link::new(user_href(customer)).with_title(&customer.name));
    for product in products {
        builder = builder.link("item", Link::new(product_href(product)).with_title(&product.name));
    }

    let embedded = products
        .iter()
        .map(product_resource)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(builder
        .state(&order.summary())?
        .embed("customer", user_resource(customer)?)
        .embed_many("products", embedded)
        .build())
}

/// One page of the product catalog. `page` is 1-based.
///
/// A page past the end still renders; its `products` relation is simply
/// empty.
pub fn catalog_resource(
    products: &[Product],
    page: usize,
    per_page: usize,
) -> Result<Resource, HalError> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let start = (page - 1).saturating_mul(per_page);
    let items: &[Product] = products.get(start..).unwrap_or(&[]);
    let items = &items[..items.len().min(per_page)];

    let mut builder = Resource::builder()
        .self_link(format!("/products?page={page}"))
        .link("find", Link::templated("/products{?name}"));
    if start + items.len() < products.len() {
        builder = builder.link("next", Link::new(format!("/products?page={}", page + 1)));
    }
    if page > 1 {
        builder = builder.link("prev", Link::new(format!("/products?page={}", page - 1)));
    }

    let embedded = items
        .iter()
        .map(product_resource)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(builder
        .state(&json!({
            "page": page,
            "count": items.len(),
            "total": products.len(),
        }))?
        .embed_many("products", embedded)
        .build())
}
