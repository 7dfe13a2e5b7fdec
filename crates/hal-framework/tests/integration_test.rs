use hal_framework::mock::{RecordingSink, SinkEvent};
use hal_framework::{
    DocumentRenderer, EmbeddedResource, HalError, HalSerializer, Link, RenderActor, RenderKind,
    Resource,
};
use serde::Serialize;
use serde_json::{json, Value};

// --- Test Resources ---

#[derive(Serialize)]
struct Product {
    id: u32,
    name: String,
}

fn product(id: u32) -> Resource {
    Resource::builder()
        .self_link(format!("/products/{id}"))
        .state(&Product {
            id,
            name: format!("Product {id}"),
        })
        .expect("state should serialize")
        .build()
}

fn render(resource: &Resource) -> Result<String, HalError> {
    HalSerializer::default().to_string(resource)
}

#[test]
fn test_empty_resource_renders_empty_object() {
    assert_eq!(render(&Resource::new()).unwrap(), "{}");

    // An explicitly empty relation list is the same as none at all.
    let resource = Resource {
        embedded_resources: Vec::new(),
        ..Resource::default()
    };
    assert_eq!(render(&resource).unwrap(), "{}");
}

#[test]
fn test_state_is_flattened_in_source_order() {
    let resource = Resource::builder()
        .state_value(json!({ "a": 1, "b": "x" }))
        .build();
    assert_eq!(render(&resource).unwrap(), r#"{"a":1,"b":"x"}"#);

    let resource = Resource::builder()
        .state_value(json!({ "b": "x", "a": 1 }))
        .build();
    assert_eq!(render(&resource).unwrap(), r#"{"b":"x","a":1}"#);
}

#[test]
fn test_links_come_before_state() {
    let resource = Resource::builder()
        .self_link("/users/1")
        .state_value(json!({ "name": "Alice" }))
        .build();
    assert_eq!(
        render(&resource).unwrap(),
        r#"{"_links":{"self":{"href":"/users/1"}},"name":"Alice"}"#
    );
}

#[test]
fn test_single_resource_relation_is_an_object() {
    let resource = Resource::builder()
        .embed_many("items", vec![product(1)])
        .build();
    let value: Value = serde_json::from_str(&render(&resource).unwrap()).unwrap();

    assert!(value["_embedded"]["items"].is_object());
    assert_eq!(value["_embedded"]["items"]["id"], 1);
}

#[test]
fn test_plural_relation_is_an_array_in_source_order() {
    let resource = Resource::builder()
        .embed_many("items", vec![product(3), product(1), product(2)])
        .build();
    let value = HalSerializer::default().to_value(&resource).unwrap();

    let items = value["_embedded"]["items"].as_array().expect("array");
    let ids: Vec<u64> = items.iter().filter_map(|i| i["id"].as_u64()).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn test_empty_relation_writes_name_without_value() {
    let resource = Resource {
        embedded_resources: vec![EmbeddedResource::new("none", Vec::new())],
        ..Resource::default()
    };

    let mut sink = RecordingSink::new();
    HalSerializer::default()
        .write_resource(&mut sink, &resource)
        .unwrap();
    assert_eq!(
        sink.into_events(),
        vec![
            SinkEvent::BeginObject,
            SinkEvent::PropertyName("_embedded".into()),
            SinkEvent::BeginObject,
            SinkEvent::PropertyName("none".into()),
            SinkEvent::EndObject,
            SinkEvent::EndObject,
        ]
    );

    // The JSON sink closes a trailing dangling name with null...
    assert_eq!(render(&resource).unwrap(), r#"{"_embedded":{"none":null}}"#);

    // ...and refuses one that is followed by another relation.
    let resource = Resource::builder()
        .embed_many("none", vec![])
        .embed("one", product(1))
        .build();
    assert!(matches!(
        render(&resource),
        Err(HalError::InvalidToken { .. })
    ));
}

#[test]
fn test_scalar_state_is_refused_by_json_sink() {
    let resource = Resource::builder().state_value(json!(42)).build();
    let err = render(&resource).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Token Integer in state Object would result in an invalid JSON document"
    );
}

#[test]
fn test_rendering_twice_is_byte_identical() {
    let resource = Resource::builder()
        .self_link("/orders/1")
        .link("item", Link::new("/products/1"))
        .link("item", Link::new("/products/2"))
        .state_value(json!({ "total": 12.5 }))
        .embed_many("items", vec![product(1), product(2)])
        .build();

    let serializer = HalSerializer::default();
    let first = serializer.to_string(&resource).unwrap();
    let second = serializer.to_string(&resource).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_nesting_depth_matches_embedding_depth() {
    let third = Resource::builder().state_value(json!({ "level": 3 })).build();
    let second = Resource::builder()
        .state_value(json!({ "level": 2 }))
        .embed("child", third)
        .build();
    let first = Resource::builder()
        .state_value(json!({ "level": 1 }))
        .embed("child", second)
        .build();

    let value = HalSerializer::default().to_value(&first).unwrap();
    assert_eq!(value["level"], 1);
    assert_eq!(value["_embedded"]["child"]["level"], 2);
    assert_eq!(value["_embedded"]["child"]["_embedded"]["child"]["level"], 3);
    assert!(value["_embedded"]["child"]["_embedded"]["child"]
        .get("_embedded")
        .is_none());
}

#[test]
fn test_reading_is_unsupported() {
    let serializer = HalSerializer::default();
    let document = serializer.to_string(&product(1)).unwrap();

    assert!(matches!(
        serializer.from_str(&document),
        Err(HalError::Unsupported(RenderKind::Resource))
    ));
}

#[tokio::test]
async fn test_render_actor_round_trip() {
    let (actor, client) = RenderActor::new(HalSerializer::default(), 10);
    let handle = tokio::spawn(actor.run());

    let json = client.render(product(7)).await.unwrap();
    assert_eq!(
        json,
        r#"{"_links":{"self":{"href":"/products/7"}},"id":7,"name":"Product 7"}"#
    );

    let err = client.render(Resource::builder().state_value(json!("x")).build()).await;
    assert!(matches!(err, Err(HalError::InvalidToken { .. })));

    let parsed = client.parse(json).await;
    assert!(matches!(parsed, Err(HalError::Unsupported(_))));

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_concurrent_clients_get_their_own_documents() {
    let (actor, client) = RenderActor::new(HalSerializer::default(), 4);
    let handle = tokio::spawn(actor.run());

    let tasks: Vec<_> = (1..=8)
        .map(|id| {
            let client = client.clone();
            tokio::spawn(async move { (id, client.render(product(id)).await) })
        })
        .collect();

    for task in tasks {
        let (id, result) = task.await.unwrap();
        let value: Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(value["id"], id);
    }

    let docs = client
        .render_all(vec![product(1), product(2)])
        .await
        .unwrap();
    assert_eq!(docs.len(), 2);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_closed_actor_reports_error() {
    let (actor, client) = RenderActor::new(HalSerializer::default(), 1);
    drop(actor);

    assert!(matches!(
        client.render(Resource::new()).await,
        Err(HalError::ActorClosed)
    ));
}
