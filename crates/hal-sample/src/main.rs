//! # HAL Storefront Sample
//!
//! Demonstrates the render pipeline end to end:
//! 1.  Starting the [`RenderSystem`].
//! 2.  Filling a [`Storefront`] with a [`User`] and some [`Product`]s.
//! 3.  Placing an [`Order`](hal_sample::model::Order) and printing its HAL document.

use hal_framework::tracing::setup_tracing;
use hal_sample::lifecycle::RenderSystem;
use hal_sample::model::{OrderLine, Product, ProductId, User, UserId};
use hal_sample::storefront::Storefront;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting storefront");

    let system = RenderSystem::default();
    let mut shop = Storefront::new(system.client.clone());

    shop.add_user(User::new(1, "Alice", "alice@example.com"));
    shop.add_product(Product::new(1, "Widget", 25.0, 100));
    shop.add_product(Product::new(2, "Gadget", 40.0, 3));

    let order_id = shop
        .place_order(
            UserId(1),
            vec![
                OrderLine {
                    product_id: ProductId(1),
                    quantity: 2,
                },
                OrderLine {
                    product_id: ProductId(2),
                    quantity: 1,
                },
            ],
        )
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("documents");
    let documents = async {
        let user = shop.user_document(UserId(1)).await?;
        let order = shop.order_document(order_id).await?;
        let catalog = shop.catalog_document(1).await?;
        Ok::<_, hal_sample::error::StorefrontError>(vec![user, order, catalog])
    }
    .instrument(span)
    .await;

    match documents {
        Ok(documents) => {
            for document in documents {
                println!("{document}");
            }
        }
        Err(e) => error!(error = %e, "Rendering failed"),
    }

    drop(shop);
    system.shutdown().await?;

    info!("Storefront finished");
    Ok(())
}
