use hal_framework::mock::MockRenderer;
use hal_framework::HalError;
use hal_sample::error::StorefrontError;
use hal_sample::model::{OrderId, User, UserId};
use hal_sample::storefront::Storefront;
use serde_json::json;

/// Storefront logic with the renderer mocked out: checks which resource is
/// handed over without spawning the render actor.
#[tokio::test]
async fn test_user_document_hands_user_resource_to_renderer() {
    let mock = MockRenderer::new();
    mock.expect_render().return_ok("rendered");

    let mut shop = Storefront::new(mock.clone());
    shop.add_user(User::new(3, "Bob", "bob@example.com"));

    let doc = shop.user_document(UserId(3)).await.unwrap();
    assert_eq!(doc, "rendered");

    let received = mock.received();
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0].state,
        Some(json!({ "id": 3, "name": "Bob", "email": "bob@example.com" }))
    );
    assert_eq!(
        received[0].links.get("self").map(|l| l[0].href.as_str()),
        Some("/users/3")
    );
    mock.verify();
}

#[tokio::test]
async fn test_renderer_errors_propagate() {
    let mock = MockRenderer::new();
    mock.expect_render().return_err(HalError::ActorClosed);

    let mut shop = Storefront::new(mock.clone());
    shop.add_user(User::new(1, "Alice", "alice@example.com"));

    let result = shop.user_document(UserId(1)).await;
    assert!(matches!(
        result,
        Err(StorefrontError::Render(HalError::ActorClosed))
    ));
}

#[tokio::test]
async fn test_missing_documents_never_reach_renderer() {
    let mock = MockRenderer::new();
    let shop = Storefront::new(mock.clone());

    assert!(matches!(
        shop.user_document(UserId(1)).await,
        Err(StorefrontError::UserNotFound(UserId(1)))
    ));
    assert!(matches!(
        shop.order_document(OrderId(1)).await,
        Err(StorefrontError::OrderNotFound(OrderId(1)))
    ));
    assert!(mock.received().is_empty());
}
