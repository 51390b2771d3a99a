use anyhow::Result;
use aqua_advisor::domain::model::ResponseOrigin;
use aqua_advisor::utils::error::ErrorCategory;
use aqua_advisor::{AdvisorError, AiServiceClient, FishEntry, LayoutRequest, Unit};
use httpmock::prelude::*;
use std::time::Duration;

fn layout() -> LayoutRequest {
    LayoutRequest {
        owner_email: "user@example.com".to_string(),
        tank_name: "Community Tank".to_string(),
        tank_length: 36.0,
        tank_width: 18.0,
        tank_height: 16.0,
        water_type: "freshwater".to_string(),
        fish_data: vec![
            FishEntry::new("Neon Tetra", 10),
            FishEntry::new("Corydoras", 6),
        ],
        comments: Some("Heavily planted".to_string()),
        unit: Unit::Inch,
    }
}

fn client(server: &MockServer) -> Result<AiServiceClient> {
    Ok(AiServiceClient::new(&server.base_url(), Duration::from_secs(2))?)
}

#[tokio::test]
async fn test_success_is_marked_remote() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/evaluate")
            .json_body_partial(r#"{"tank_name": "Community Tank", "unit": "inch"}"#);
        then.status(200).json_body(serde_json::json!({
            "status": "success",
            "response": "🔵 Tank Volume Assessment\n- 44.9 gallons"
        }));
    });

    let result = client(&server)?.evaluate(&layout()).await?;

    api_mock.assert();
    assert_eq!(result.origin, ResponseOrigin::Remote);
    assert!(result.response.contains("44.9 gallons"));
    Ok(())
}

#[tokio::test]
async fn test_bad_request_detail_becomes_validation_error() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/evaluate");
        then.status(400).json_body(serde_json::json!({
            "detail": "Fish data cannot be empty"
        }));
    });

    let err = client(&server)?.evaluate(&layout()).await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Validation);
    assert_eq!(err.status_code(), 400);
    assert!(err.to_string().contains("Fish data cannot be empty"));
    Ok(())
}

#[tokio::test]
async fn test_unavailable_becomes_provider_error() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/evaluate");
        then.status(503).json_body(serde_json::json!({
            "detail": "AI service temporarily unavailable"
        }));
    });

    let err = client(&server)?.evaluate(&layout()).await.unwrap_err();

    assert!(err.is_provider_failure());
    assert_eq!(err.status_code(), 503);
    Ok(())
}

#[tokio::test]
async fn test_server_error_hides_details() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/evaluate");
        then.status(500).body("Traceback (most recent call last): ...");
    });

    let err = client(&server)?.evaluate(&layout()).await.unwrap_err();

    assert!(matches!(err, AdvisorError::ServiceError { .. }));
    assert_eq!(err.status_code(), 500);
    assert_eq!(err.to_error_response().detail, "An unexpected error occurred");
    Ok(())
}

#[test]
fn test_rejects_invalid_base_url() {
    assert!(AiServiceClient::new("not a url", Duration::from_secs(1)).is_err());
}
