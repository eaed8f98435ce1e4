use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use serde_json::{json, Value};
use tracing::debug;

use super::{page, ApiError, AppState, ScanParams};
use crate::scanner::ScanReport;

pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<ScanParams>,
) -> Result<Html<String>, ApiError> {
    let request = params.resolve(state.scanner.config())?;

    let Some(event) = request.event.as_deref() else {
        return Ok(Html(page::render(&request, None)));
    };

    let opportunities = state
        .scanner
        .with_thresholds(request.min_profit, request.min_roi)
        .scan(event, request.region.as_ref())
        .await;

    Ok(Html(page::render(&request, Some(opportunities.as_slice()))))
}

pub async fn opportunities(
    State(state): State<AppState>,
    Query(params): Query<ScanParams>,
) -> Result<Json<ScanReport>, ApiError> {
    let request = params.resolve(state.scanner.config())?;
    let event = request
        .event
        .as_deref()
        .ok_or_else(|| ApiError::BadRequest("event is required".into()))?;

    debug!(event, "API scan requested");
    let report = state
        .scanner
        .with_thresholds(request.min_profit, request.min_roi)
        .scan_report(event, request.region.as_ref())
        .await;

    Ok(Json(report))
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    use crate::domain::DetectorConfig;
    use crate::scanner::ArbitrageScanner;
    use crate::source::SampleSource;
    use crate::web::router;

    fn app() -> Router {
        router(ArbitrageScanner::new(
            DetectorConfig::default(),
            vec![
                Arc::new(SampleSource::new("ticketmaster")),
                Arc::new(SampleSource::new("stubhub")),
            ],
        ))
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn home_renders_form() {
        let (status, body) = get("/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("TicketFinder"));
    }

    #[tokio::test]
    async fn home_with_event_renders_results() {
        let (status, body) = get("/?event=Taylor+Swift").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Found 3 opportunity(s)"));
    }

    #[tokio::test]
    async fn home_strict_threshold_renders_empty_message() {
        let (status, body) = get("/?event=Taylor+Swift&min_profit=1000").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No opportunities found"));
    }

    #[tokio::test]
    async fn home_rejects_bad_state() {
        let (status, _) = get("/?event=x&state=NYC").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn api_requires_event() {
        let (status, body) = get("/api/opportunities").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("event is required"));
    }

    #[tokio::test]
    async fn api_returns_report() {
        let (status, body) = get("/api/opportunities?event=Taylor%20Swift&state=ny").await;
        assert_eq!(status, StatusCode::OK);

        let report: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(report["query"], "Taylor Swift");
        assert_eq!(report["region"], "NY");
        assert_eq!(report["count"], 1);
        assert_eq!(report["opportunities"][0]["estimated_profit"], 76.38);
    }

    #[tokio::test]
    async fn health_reports_version() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["status"], "healthy");
        assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    }
}
