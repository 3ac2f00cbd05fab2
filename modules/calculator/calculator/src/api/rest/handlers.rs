//! REST handlers for the calculator module

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};

use crate::domain::Service;

use super::dto::{EvaluateRequest, EvaluateResponse, HistoryEntryDto, MessageResponse};
use super::error::{ApiError, ErrorResponse};

/// Handler for POST /calculate
///
/// Normalizes the body, evaluates it and returns the result.
///
/// # Errors
/// Returns `ApiError` for a malformed body or a rejected evaluation.
#[utoipa::path(
    post,
    path = "/calculate",
    tag = "calculator",
    request_body(content = EvaluateRequest, description = "Operation and operands"),
    responses(
        (status = 200, description = "Result of the operation", body = EvaluateResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
    )
)]
pub async fn calculate(
    Extension(service): Extension<Arc<Service>>,
    body: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<EvaluateResponse>, ApiError> {
    let Json(req) = body?;
    let cmd = req.normalize()?;
    let result = service.evaluate(cmd.operation, &cmd.operands)?;
    Ok(Json(EvaluateResponse { result }))
}

/// Handler for GET /history
#[utoipa::path(
    get,
    path = "/history",
    tag = "calculator",
    responses(
        (status = 200, description = "History, oldest first", body = [HistoryEntryDto]),
    )
)]
pub async fn get_history(
    Extension(service): Extension<Arc<Service>>,
) -> Json<Vec<HistoryEntryDto>> {
    Json(service.history().into_iter().map(Into::into).collect())
}

/// Handler for DELETE /history
#[utoipa::path(
    delete,
    path = "/history",
    tag = "calculator",
    responses(
        (status = 200, description = "History cleared", body = MessageResponse),
    )
)]
pub async fn clear_history(Extension(service): Extension<Arc<Service>>) -> Json<MessageResponse> {
    service.clear_history();
    Json(MessageResponse {
        message: "History cleared".to_owned(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::CalculatorConfig;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::{get, post};
    use serde_json::{Value, json};
    use tower::ServiceExt as _;

    fn create_test_router(service: Arc<Service>) -> Router {
        Router::new()
            .route("/calculate", post(calculate))
            .route("/history", get(get_history).delete(clear_history))
            .layer(Extension(service))
    }

    fn new_service() -> Arc<Service> {
        Arc::new(Service::new(&CalculatorConfig::default()))
    }

    async fn call(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn calculate_returns_result_and_records_history() {
        let service = new_service();
        let app = create_test_router(Arc::clone(&service));

        let (status, json) = call(
            app.clone(),
            "POST",
            "/calculate",
            Some(json!({"operation": "add", "operands": [5, 3]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"result": 8.0}));

        let (status, json) = call(app, "GET", "/history", None).await;
        assert_eq!(status, StatusCode::OK);
        let entries = json.as_array().expect("array");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["operation"], "add");
        assert_eq!(entries[0]["a"], 5.0);
        assert_eq!(entries[0]["b"], 3.0);
        assert_eq!(entries[0]["result"], 8.0);
        assert!(entries[0]["timestamp"].is_string());
    }

    #[tokio::test]
    async fn calculate_accepts_legacy_shape() {
        let app = create_test_router(new_service());

        let (status, json) = call(
            app,
            "POST",
            "/calculate",
            Some(json!({"operation": "sqrt", "a": 9})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"], 3.0);
    }

    #[tokio::test]
    async fn division_by_zero_is_client_error_and_not_recorded() {
        let service = new_service();
        let app = create_test_router(Arc::clone(&service));

        let (status, json) = call(
            app,
            "POST",
            "/calculate",
            Some(json!({"operation": "divide", "operands": [10, 0]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "DIVISION_BY_ZERO");
        assert!(json["error"].is_string());
        assert!(service.history().is_empty());
    }

    #[tokio::test]
    async fn unknown_operation_is_client_error() {
        let app = create_test_router(new_service());

        let (status, json) = call(
            app,
            "POST",
            "/calculate",
            Some(json!({"operation": "bogus", "operands": [1, 2]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "UNKNOWN_OPERATION");
    }

    #[tokio::test]
    async fn wrong_arity_and_bad_operand_are_distinguished() {
        let app = create_test_router(new_service());

        let (_, json) = call(
            app.clone(),
            "POST",
            "/calculate",
            Some(json!({"operation": "sqrt", "operands": [4, 4]})),
        )
        .await;
        assert_eq!(json["code"], "INVALID_ARITY");

        let (_, json) = call(
            app,
            "POST",
            "/calculate",
            Some(json!({"operation": "add", "operands": [1, "two"]})),
        )
        .await;
        assert_eq!(json["code"], "INVALID_OPERAND");
    }

    #[tokio::test]
    async fn malformed_body_is_invalid_request() {
        let app = create_test_router(new_service());

        let request = Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn missing_operation_is_invalid_request() {
        let app = create_test_router(new_service());

        let (status, json) = call(
            app,
            "POST",
            "/calculate",
            Some(json!({"operands": [1, 2]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn clear_history_confirms_and_empties() {
        let service = new_service();
        let app = create_test_router(Arc::clone(&service));

        for body in [
            json!({"operation": "add", "operands": [1, 2]}),
            json!({"operation": "power", "operands": [2, 3]}),
            json!({"operation": "sqrt", "operands": [16]}),
        ] {
            let (status, _) = call(app.clone(), "POST", "/calculate", Some(body)).await;
            assert_eq!(status, StatusCode::OK);
        }
        assert_eq!(service.history().len(), 3);

        let (status, json) = call(app.clone(), "DELETE", "/history", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "History cleared");

        let (_, json) = call(app, "GET", "/history", None).await;
        assert_eq!(json, json!([]));
    }

    async fn post_raw(app: Router, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn out_of_range_operand_is_invalid_operand() {
        let service = new_service();
        let app = create_test_router(Arc::clone(&service));

        let (status, json) =
            post_raw(app.clone(), r#"{"operation": "add", "operands": [1e400, 1]}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_OPERAND");

        let (status, json) = post_raw(app, r#"{"operation": "add", "a": 1e400, "b": 1}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_OPERAND");

        assert!(service.history().is_empty());
    }

    #[tokio::test]
    async fn non_finite_result_is_returned_as_null_and_recorded() {
        let service = new_service();
        let app = create_test_router(Arc::clone(&service));

        for (operation, operands) in [("power", json!([-8, 0.5])), ("multiply", json!([1e300, 1e300]))] {
            let (status, json) = call(
                app.clone(),
                "POST",
                "/calculate",
                Some(json!({"operation": operation, "operands": operands})),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(json, json!({"result": null}));
        }

        let (_, json) = call(app, "GET", "/history", None).await;
        let entries = json.as_array().expect("array");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["operation"], "power");
        assert!(entries[0]["result"].is_null());
        assert_eq!(entries[1]["operation"], "multiply");
        assert!(entries[1]["result"].is_null());

        let recorded = service.history();
        assert!(recorded[0].result.is_nan());
        assert!(recorded[1].result.is_infinite());
    }
}
