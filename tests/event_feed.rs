use fake::faker::address::en::CityName;
use fake::faker::lorem::en::{Sentence, Word};
use fake::Fake;
use reqwest::Client;
use serde_json::json;
use smart_companion::error::ClientError;
use smart_companion::models::Event;
use smart_companion::services::EventFeedClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn feed_returning(template: ResponseTemplate) -> (MockServer, EventFeedClient) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events.json"))
        .respond_with(template)
        .expect(1)
        .mount(&server)
        .await;
    let client = EventFeedClient::new(Client::new(), server.uri());
    (server, client)
}

#[tokio::test]
async fn single_event_with_absent_fields() {
    let (_server, client) =
        feed_returning(ResponseTemplate::new(200).set_body_json(json!([{"id": "1", "title": "Gala"}]))).await;

    let events = client.fetch_events().await.unwrap();

    assert_eq!(
        events,
        vec![Event {
            id: Some("1".to_string()),
            title: Some("Gala".to_string()),
            ..Default::default()
        }]
    );
    assert!(events[0].description.is_none());
    assert!(events[0].image_url.is_none());
}

#[tokio::test]
async fn order_and_nulls_are_preserved() {
    let events: Vec<Event> = (0..8)
        .map(|i| Event {
            id: Some(format!("evt-{}", i)),
            title: Some(Sentence(1..4).fake()),
            description: if i % 2 == 0 { Some(Sentence(3..8).fake()) } else { None },
            date: None,
            location: Some(CityName().fake()),
            image_url: if i % 3 == 0 { Some(format!("https://img.example/{}.png", Word().fake::<String>())) } else { None },
        })
        .collect();

    let (_server, client) = feed_returning(ResponseTemplate::new(200).set_body_json(&events)).await;

    assert_eq!(client.fetch_events().await.unwrap(), events);
}

#[tokio::test]
async fn unknown_fields_are_ignored() {
    let body = json!([
        {"id": "a", "title": "Forum", "category": "career", "imageUrl": "https://x/a.png", "seats": 40},
        {"location": "Amphi A"}
    ]);
    let (_server, client) = feed_returning(ResponseTemplate::new(200).set_body_json(body)).await;

    let events = client.fetch_events().await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].image_url.as_deref(), Some("https://x/a.png"));
    assert_eq!(events[1].location.as_deref(), Some("Amphi A"));
    assert!(events[1].id.is_none());
}

#[tokio::test]
async fn null_feed_is_empty() {
    let (_server, client) =
        feed_returning(ResponseTemplate::new(200).set_body_raw("null", "application/json")).await;
    assert!(client.fetch_events().await.unwrap().is_empty());
}

#[tokio::test]
async fn non_success_status_is_a_server_error() {
    let (_server, client) =
        feed_returning(ResponseTemplate::new(404).set_body_string("{\"error\":\"not found\"}")).await;

    let err = client.fetch_events().await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    match err {
        ClientError::Server { body, .. } => assert!(body.contains("not found")),
        other => panic!("expected server error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let (_server, client) =
        feed_returning(ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html")).await;
    assert!(matches!(client.fetch_events().await.unwrap_err(), ClientError::Parse(_)));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let client = EventFeedClient::new(Client::new(), "http://127.0.0.1:1");
    let err = client.fetch_events().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)), "got {:?}", err);
    assert!(err.to_string().starts_with("Network error"));
}

#[tokio::test]
async fn trailing_slash_in_base_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = EventFeedClient::new(Client::new(), format!("{}/", server.uri()));
    assert!(client.fetch_events().await.unwrap().is_empty());
}
