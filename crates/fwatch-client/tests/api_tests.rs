//! Results, report, and chat endpoint tests against a mock analysis service.

use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fwatch_client::{AnalysisClient, ChatSession, ClientConfig, ClientError};
use fwatch_models::{JobId, JobStatus, Sender};

fn test_client(server: &MockServer) -> Arc<AnalysisClient> {
    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .with_poll_interval(Duration::from_millis(100));
    Arc::new(AnalysisClient::new(config).unwrap())
}

fn results_body() -> serde_json::Value {
    serde_json::json!({
        "status": "completed",
        "results": {
            "output_video_path": "static/processed_videos/match_processed_1714.mp4",
            "total_frames": 80,
            "sequence_length": 40,
            "threshold": 0.8,
            "output_frame_rate": 30,
            "processing_time_seconds": 12.5,
            "total_segments": 2,
            "fight_segments": 1,
            "predictions": [
                {
                    "chunk_start_frame": 0,
                    "chunk_end_frame": 39,
                    "start_time": "00:00",
                    "end_time": "00:01",
                    "fight_probability": 0.42,
                    "fight_detected": false
                },
                {
                    "chunk_start_frame": 40,
                    "chunk_end_frame": 79,
                    "start_time": "00:01",
                    "end_time": "00:02",
                    "fight_probability": 0.91,
                    "fight_detected": true
                }
            ],
            "error": null
        },
        "report": "<h2>Security Assessment Report</h2>"
    })
}

#[tokio::test]
async fn test_results_document_for_completed_job() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/results/job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let document = client.results(&JobId::from("job-1")).await.unwrap();

    assert_eq!(document.status, JobStatus::Completed);
    assert_eq!(document.results.predictions.len(), 2);
    assert_eq!(document.results.incident_count(), 1);
    assert_eq!(document.results.predictions[1].start_frame, 40);
    assert!(document.report.contains("Security Assessment"));
}

#[tokio::test]
async fn test_results_before_completion_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/results/job-1"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "status": "processing",
            "error": "Processing not complete"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.results(&JobId::from("job-1")).await.unwrap_err();

    assert_eq!(err.to_string(), "Processing not complete");
}

#[tokio::test]
async fn test_regenerate_report_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/regenerate-report/job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "report": "<h2>Fresh Report</h2>"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let report = client
        .regenerate_report(&JobId::from("job-1"))
        .await
        .unwrap();

    assert_eq!(report, "<h2>Fresh Report</h2>");
}

#[tokio::test]
async fn test_regenerate_report_error_is_retryable_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/regenerate-report/job-1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "status": "error",
            "error": "Error regenerating report: upstream timeout"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .regenerate_report(&JobId::from("job-1"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Rejected(_)));
    assert!(err.to_string().contains("upstream timeout"));
}

#[tokio::test]
async fn test_chat_roundtrip_appends_both_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat/job-1"))
        .and(body_json(serde_json::json!({
            "message": "Who started the fight?"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "response": "The incident begins at 00:01 near the north stand."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut session = ChatSession::new(client, JobId::from("job-1"));

    let reply = session.send("Who started the fight?").await.unwrap();
    assert!(reply.contains("00:01"));

    let messages = session.transcript().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[0].text, "Who started the fight?");
    assert_eq!(messages[1].sender, Sender::Bot);
}

#[tokio::test]
async fn test_chat_error_keeps_user_message_for_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat/job-1"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "status": "error",
            "error": "Processing not complete"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut session = ChatSession::new(client, JobId::from("job-1"));

    let err = session.send("Anything yet?").await.unwrap_err();
    assert_eq!(err.to_string(), "Processing not complete");

    // The user's message stays; no bot entry was recorded.
    let messages = session.transcript().messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender, Sender::User);
}

#[tokio::test]
async fn test_chat_empty_message_never_reaches_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat/job-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut session = ChatSession::new(client, JobId::from("job-1"));

    let err = session.send("   ").await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert!(session.transcript().is_empty());
}
