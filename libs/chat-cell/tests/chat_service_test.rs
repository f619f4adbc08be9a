// libs/chat-cell/tests/chat_service_test.rs

use assert_matches::assert_matches;
use serde_json::json;
use tempfile::TempDir;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use chat_cell::error::ChatError;
use chat_cell::models::{Attachment, OutgoingMessage};
use chat_cell::services::ChatService;
use shared_utils::test_utils::TestConfig;

fn service_for(server: &MockServer, uploads: &TempDir) -> ChatService {
    let config = TestConfig {
        store_url: server.uri(),
        uploads_dir: uploads.path().to_string_lossy().into_owned(),
        ..TestConfig::default()
    };
    ChatService::new(&config.to_app_config())
}

fn stored_message(id: &Uuid, message: Option<&str>, file: Option<&str>) -> serde_json::Value {
    json!({
        "id": id,
        "sender": "P100",
        "receiver": "D1",
        "message": message,
        "file": file,
        "timestamp": "2024-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn text_only_message_is_persisted_with_server_timestamp() {
    let server = MockServer::start().await;
    let uploads = TempDir::new().unwrap();
    let id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/rest/v1/chat_messages"))
        .and(body_partial_json(json!({
            "sender": "P100",
            "receiver": "D1",
            "message": "See you at ten"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!([stored_message(&id, Some("See you at ten"), None)])),
        )
        .mount(&server)
        .await;

    let service = service_for(&server, &uploads);
    let message = service
        .send(OutgoingMessage {
            sender: "P100".to_string(),
            receiver: "D1".to_string(),
            message: Some("See you at ten".to_string()),
            attachment: None,
        })
        .await
        .unwrap();

    assert_eq!(message.id, id);
    assert_eq!(message.message.as_deref(), Some("See you at ten"));
    assert_eq!(message.file, None);
}

#[tokio::test]
async fn message_without_text_or_file_is_rejected() {
    let server = MockServer::start().await;
    let uploads = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/rest/v1/chat_messages"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_for(&server, &uploads);
    let err = service
        .send(OutgoingMessage {
            sender: "P100".to_string(),
            receiver: "D1".to_string(),
            message: Some("   ".to_string()),
            attachment: None,
        })
        .await
        .unwrap_err();

    assert_matches!(err, ChatError::Validation(_));
}

#[tokio::test]
async fn attachment_bytes_land_in_the_uploads_dir_and_path_is_recorded() {
    let server = MockServer::start().await;
    let uploads = TempDir::new().unwrap();
    let id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/rest/v1/chat_messages"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!([stored_message(&id, None, Some("/uploads/scan.png"))])),
        )
        .mount(&server)
        .await;

    let service = service_for(&server, &uploads);
    let message = service
        .send(OutgoingMessage {
            sender: "P100".to_string(),
            receiver: "D1".to_string(),
            message: None,
            attachment: Some(Attachment {
                file_name: "scan.png".to_string(),
                bytes: vec![0x89, 0x50, 0x4e, 0x47],
            }),
        })
        .await
        .unwrap();

    assert!(message.file.is_some());

    // Exactly one file was written, keeping the original extension
    let entries: Vec<_> = std::fs::read_dir(uploads.path())
        .unwrap()
        .map(|e| e.unwrap())
        .collect();
    assert_eq!(entries.len(), 1);

    let written = &entries[0];
    assert_eq!(
        written.path().extension().and_then(|e| e.to_str()),
        Some("png")
    );
    assert_eq!(
        std::fs::read(written.path()).unwrap(),
        vec![0x89, 0x50, 0x4e, 0x47]
    );
}

#[tokio::test]
async fn conversation_listing_matches_sender_or_receiver() {
    let server = MockServer::start().await;
    let uploads = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/rest/v1/chat_messages"))
        .and(query_param("or", "(sender.eq.P100,receiver.eq.P100)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            stored_message(&Uuid::new_v4(), Some("hello"), None),
            stored_message(&Uuid::new_v4(), None, Some("/uploads/scan.png"))
        ])))
        .mount(&server)
        .await;

    let service = service_for(&server, &uploads);
    let messages = service.list_by_participant("P100").await.unwrap();

    assert_eq!(messages.len(), 2);
}

#[tokio::test]
async fn blank_sender_is_rejected() {
    let server = MockServer::start().await;
    let uploads = TempDir::new().unwrap();

    let service = service_for(&server, &uploads);
    let err = service
        .send(OutgoingMessage {
            sender: "".to_string(),
            receiver: "D1".to_string(),
            message: Some("hi".to_string()),
            attachment: None,
        })
        .await
        .unwrap_err();

    assert_matches!(err, ChatError::Validation(_));
}
