use std::path::PathBuf;
use std::time::{Duration, Instant};

use goemotions::{
    Dashboard, DashboardConfig, HateCategory, InferenceError, PipelineError, ScoreError,
};
use serde_json::{json, Value};
use tokio_test::assert_ok;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn emotion_body() -> Value {
    json!([[
        {"label": "joy", "score": 0.5},
        {"label": "surprise", "score": 0.3},
        {"label": "neutral", "score": 0.1},
        {"label": "sadness", "score": 0.05},
        {"label": "fear", "score": 0.05}
    ]])
}

fn hate_body() -> Value {
    json!([[
        {"label": "LABEL_0", "score": 0.1},
        {"label": "LABEL_2", "score": 0.75},
        {"label": "LABEL_1", "score": 0.1},
        {"label": "LABEL_3", "score": 0.05}
    ]])
}

async fn mount(server: &MockServer, model: &str, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(format!("/models/{}", model)))
        .respond_with(template)
        .mount(server)
        .await;
}

fn dashboard(server: &MockServer) -> Dashboard {
    let mut config = DashboardConfig::default().with_api_key("hf_test_key");
    config.emotion.url = format!("{}/models/emotion", server.uri());
    config.hate.url = format!("{}/models/hate", server.uri());
    config.assets_dir = PathBuf::from("img");
    Dashboard::new(config).unwrap()
}

#[tokio::test]
async fn test_end_to_end_submission() {
    let server = MockServer::start().await;
    mount(&server, "emotion", ResponseTemplate::new(200).set_body_json(emotion_body())).await;
    mount(&server, "hate", ResponseTemplate::new(200).set_body_json(hate_body())).await;

    let submission = dashboard(&server)
        .submit("  I can't wait to see my best friend tomorrow.  ")
        .await
        .unwrap();

    assert_eq!(submission.text, "  I can't wait to see my best friend tomorrow.  ");

    let labels: Vec<&str> = submission.emotions.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["joy", "surprise", "neutral", "sadness"]);
    assert!((submission.emotions.total() - 100.0).abs() < 1e-6);
    assert!(submission.emotions.get("fear").is_none());

    let hate = submission.hate.expect("hate verdict");
    assert_eq!(hate.category, HateCategory::Offensive);
    assert_eq!(hate.code, "LABEL_2");
    assert_eq!(hate.image, PathBuf::from("img/Offensive.png"));
}

#[tokio::test]
async fn test_text_sent_as_entered() {
    let server = MockServer::start().await;
    let text = "  I'm feeling so lonely and sad today.\n";
    for (model, body) in [("emotion", emotion_body()), ("hate", hate_body())] {
        Mock::given(method("POST"))
            .and(path(format!("/models/{}", model)))
            .and(body_partial_json(json!({ "inputs": text })))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
    }

    let submission = dashboard(&server).submit(text).await.unwrap();
    assert_eq!(submission.text, text);
}

#[tokio::test]
async fn test_hate_failure_fails_submission() {
    let server = MockServer::start().await;
    mount(&server, "emotion", ResponseTemplate::new(200).set_body_json(emotion_body())).await;
    mount(
        &server,
        "hate",
        ResponseTemplate::new(500).set_body_json(json!({"error": "internal"})),
    )
    .await;

    let err = dashboard(&server).submit("I'm feeling so stressed about work.").await.unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Inference(InferenceError::Service { .. })
    ));
}

#[tokio::test]
async fn test_emotion_failure_fails_submission() {
    let server = MockServer::start().await;
    mount(&server, "emotion", ResponseTemplate::new(403).set_body_string("forbidden")).await;
    mount(&server, "hate", ResponseTemplate::new(200).set_body_json(hate_body())).await;

    let err = dashboard(&server).submit("hello").await.unwrap_err();
    assert!(matches!(err, PipelineError::Inference(InferenceError::Auth(_))));
}

#[tokio::test]
async fn test_unknown_hate_code() {
    let server = MockServer::start().await;
    mount(&server, "emotion", ResponseTemplate::new(200).set_body_json(emotion_body())).await;
    mount(
        &server,
        "hate",
        ResponseTemplate::new(200).set_body_json(json!([[{"label": "LABEL_9", "score": 0.9}]])),
    )
    .await;

    let err = dashboard(&server).submit("hello").await.unwrap_err();
    match err {
        PipelineError::UnknownLabel(e) => assert_eq!(e.0, "LABEL_9"),
        other => panic!("expected UnknownLabel, got {:?}", other),
    }
}

#[tokio::test]
async fn test_too_few_emotions() {
    let server = MockServer::start().await;
    mount(
        &server,
        "emotion",
        ResponseTemplate::new(200).set_body_json(json!([[
            {"label": "joy", "score": 0.9},
            {"label": "neutral", "score": 0.1}
        ]])),
    )
    .await;
    mount(&server, "hate", ResponseTemplate::new(200).set_body_json(hate_body())).await;

    let err = dashboard(&server).submit("hello").await.unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Score(ScoreError::InsufficientData { needed: 4, got: 2 })
    ));
}

#[tokio::test]
async fn test_hate_branch_disabled() {
    let server = MockServer::start().await;
    mount(&server, "emotion", ResponseTemplate::new(200).set_body_json(emotion_body())).await;
    Mock::given(method("POST"))
        .and(path("/models/hate"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = DashboardConfig::default()
        .with_api_key("hf_test_key")
        .with_hate_speech(false);
    config.emotion.url = format!("{}/models/emotion", server.uri());
    config.hate.url = format!("{}/models/hate", server.uri());
    let submission = Dashboard::new(config).unwrap().submit("hello").await.unwrap();

    assert!(submission.hate.is_none());
    assert_eq!(submission.emotions.len(), 4);
}

#[tokio::test]
async fn test_calls_run_concurrently() {
    let server = MockServer::start().await;
    let delay = Duration::from_millis(600);
    mount(
        &server,
        "emotion",
        ResponseTemplate::new(200).set_body_json(emotion_body()).set_delay(delay),
    )
    .await;
    mount(
        &server,
        "hate",
        ResponseTemplate::new(200).set_body_json(hate_body()).set_delay(delay),
    )
    .await;

    let dashboard = dashboard(&server);
    let start = Instant::now();
    dashboard.submit("hello").await.unwrap();
    let elapsed = start.elapsed();

    assert!(elapsed >= delay);
    assert!(elapsed < delay * 2, "calls ran sequentially: {:?}", elapsed);
}

#[tokio::test]
async fn test_dashboard_ready_after_failure() {
    let server = MockServer::start().await;
    mount(&server, "emotion", ResponseTemplate::new(200).set_body_json(emotion_body())).await;
    mount(&server, "hate", ResponseTemplate::new(200).set_body_json(hate_body())).await;

    let dashboard = dashboard(&server);
    assert!(matches!(dashboard.submit("   ").await, Err(PipelineError::EmptyInput)));
    assert_ok!(dashboard.submit("I'm so excited for my vacation next week!").await);
}
