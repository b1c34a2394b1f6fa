use crate::infra::{collect_input, AppState, NightlyInputs};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use somnia::analysis::{AnalysisProvider, AnalysisSource, SleepInput, SleepReport};
use somnia::error::AppError;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SleepReportResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) source: AnalysisSource,
    /// The validated input the engine actually scored, after clamping.
    pub(crate) input: SleepInput,
    pub(crate) report: SleepReport,
}

pub(crate) fn with_routes<P>(provider: Arc<P>) -> Router
where
    P: AnalysisProvider + 'static,
{
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/sleep/report", post(sleep_report_endpoint::<P>))
        .with_state(provider)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn sleep_report_endpoint<P>(
    State(provider): State<Arc<P>>,
    Json(payload): Json<NightlyInputs>,
) -> Result<Json<SleepReportResponse>, AppError>
where
    P: AnalysisProvider + 'static,
{
    let input = collect_input(&payload);
    debug!(source = provider.source().label(), "scoring sleep input");

    let report = provider.analyze(&input)?;

    Ok(Json(SleepReportResponse {
        generated_at: Utc::now(),
        source: provider.source(),
        input,
        report,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use somnia::analysis::{AnalysisError, LocalAnalysisProvider};
    use tower::ServiceExt;

    struct UnreachableBackend;

    impl AnalysisProvider for UnreachableBackend {
        fn analyze(&self, _input: &SleepInput) -> Result<SleepReport, AnalysisError> {
            Err(AnalysisError::Unavailable(
                "generative backend timed out".to_string(),
            ))
        }

        fn source(&self) -> AnalysisSource {
            AnalysisSource::Remote
        }
    }

    fn report_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/sleep/report")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    fn restful_payload() -> Value {
        json!({
            "duration": 7.0,
            "latency": 10,
            "awakenings": 0,
            "stressLevel": 3,
            "caffeineIntake": "none",
            "blueLightExposure": 0,
            "consistency": 10,
            "environment": { "noise": 1, "light": 1, "temperature": "optimal" }
        })
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    #[tokio::test]
    async fn report_endpoint_scores_a_valid_payload() {
        let app = with_routes(Arc::new(LocalAnalysisProvider));

        let response = app
            .oneshot(report_request(restful_payload()))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["source"], "local");
        assert_eq!(body["report"]["score"], 98);
        assert_eq!(body["report"]["qualityLabel"], "Excellent");
        assert_eq!(body["report"]["breakdown"]["lifestyle"], 88);
        assert_eq!(
            body["report"]["scientificInsights"]
                .as_array()
                .map(|entries| entries.len()),
            Some(3)
        );
    }

    #[tokio::test]
    async fn report_endpoint_clamps_and_defaults_hostile_fields() {
        let app = with_routes(Arc::new(LocalAnalysisProvider));
        let payload = json!({
            "duration": -4.0,
            "latency": 9999,
            "awakenings": -3,
            "stressLevel": 50,
            "caffeineIntake": "espresso storm",
            "blueLightExposure": 100,
            "consistency": 0,
            "environment": { "noise": 99, "light": -1, "temperature": "tropical" }
        });

        let response = app
            .oneshot(report_request(payload))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        // Echoed input reflects the collector's clamping.
        assert_eq!(body["input"]["duration"], 3.0);
        assert_eq!(body["input"]["latency"], 300);
        assert_eq!(body["input"]["caffeineIntake"], "none");
        assert_eq!(body["input"]["environment"]["temperature"], "optimal");
        assert!(body["report"]["score"].as_u64().expect("score") <= 100);
    }

    #[tokio::test]
    async fn backend_failure_maps_to_a_retryable_bad_gateway() {
        let app = with_routes(Arc::new(UnreachableBackend));

        let response = app
            .oneshot(report_request(restful_payload()))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["retryable"], true);
        assert!(body["error"]
            .as_str()
            .expect("error message")
            .contains("unavailable"));
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let app = with_routes(Arc::new(LocalAnalysisProvider));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }
}
