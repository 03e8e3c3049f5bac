use axum::{
    extract::State,
    routing::{get, post},
    Router,
    Json,
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::controller::LanguagePairController;
use crate::language::LanguageCode;
use crate::messages::LanguageEntry;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // WebSocket
        .route("/client-ws", get(crate::websocket::websocket_handler))

        // Health check
        .route("/api/health", get(health_check))

        // REST API routes
        .route("/api/languages", get(get_languages))
        .route("/api/resolve", post(resolve_languages))
        .route("/api/translate", post(translate_text))
}

#[derive(Debug, Deserialize)]
struct ResolvePayload {
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TranslatePayload {
    text: String,
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
}

/// A throwaway controller with the given field texts; missing fields keep defaults
fn controller_for(from: Option<String>, to: Option<String>) -> LanguagePairController {
    let mut controller = LanguagePairController::new();
    if let Some(from) = from {
        controller.set_from_text(from);
    }
    if let Some(to) = to {
        controller.set_to_text(to);
    }
    controller
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let engine_healthy = state.engine_service.health_check().await.unwrap_or(false);
    Json(json!({
        "status": "ok",
        "engine_service": engine_healthy,
        "clients": state
            .client_contexts
            .iter()
            .map(|entry| entry.value().client_uid.clone())
            .collect::<Vec<_>>()
    }))
}

async fn get_languages() -> Json<Vec<LanguageEntry>> {
    Json(
        LanguageCode::all()
            .map(|code| LanguageEntry {
                code,
                name: code.display_name().to_string(),
            })
            .collect(),
    )
}

async fn resolve_languages(Json(payload): Json<ResolvePayload>) -> Json<Value> {
    let selection = controller_for(payload.from, payload.to).selection();
    Json(json!({
        "source": selection.source,
        "target": selection.target
    }))
}

async fn translate_text(
    State(state): State<AppState>,
    Json(payload): Json<TranslatePayload>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let request = controller_for(payload.from, payload.to).build_request(&payload.text);

    let result = match state
        .translator
        .download_model_if_needed(&request.selection, &state.config.translator_config.download_conditions)
        .await
    {
        Ok(()) => state.translator.translate(&request).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(translated_text) => Ok(Json(json!({
            "text": request.text,
            "source": request.source(),
            "target": request.target(),
            "translated_text": translated_text
        }))),
        Err(e) => {
            warn!("Translation request failed: {}", e);
            Err((StatusCode::BAD_GATEWAY, Json(json!({"error": e.to_string()}))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asr::{SpeechCaptureRequest, SpeechRecognitionInterface};
    use crate::config_manager::Config;
    use crate::controller::{LanguageSelection, TranslationRequest};
    use crate::engine_service::EngineServiceClient;
    use crate::error::{TranslatorError, TranslatorResult};
    use crate::translate::{DownloadConditions, TranslatorInterface};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct EchoTranslator {
        fail_with: Option<String>,
    }

    #[async_trait]
    impl TranslatorInterface for EchoTranslator {
        async fn download_model_if_needed(
            &self,
            _selection: &LanguageSelection,
            _conditions: &DownloadConditions,
        ) -> TranslatorResult<()> {
            Ok(())
        }

        async fn translate(&self, request: &TranslationRequest) -> TranslatorResult<String> {
            match &self.fail_with {
                Some(msg) => Err(TranslatorError::Translation(msg.clone())),
                None => Ok(request.text.to_uppercase()),
            }
        }
    }

    struct NoSpeech;

    #[async_trait]
    impl SpeechRecognitionInterface for NoSpeech {
        async fn is_available(&self) -> bool {
            false
        }

        async fn recognize(
            &self,
            _request: &SpeechCaptureRequest,
        ) -> TranslatorResult<Option<Vec<String>>> {
            Ok(None)
        }
    }

    fn app(fail_with: Option<&str>) -> Router {
        let state = AppState::with_services(
            Config::default(),
            Arc::new(EngineServiceClient::new("http://127.0.0.1:9".to_string())),
            Arc::new(EchoTranslator {
                fail_with: fail_with.map(String::from),
            }),
            Arc::new(NoSpeech),
        );
        create_routes().with_state(state)
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn languages_lists_supported_names() {
        let response = app(None)
            .oneshot(Request::builder().uri("/api/languages").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            json!([{"code": "en", "name": "English"}, {"code": "vi", "name": "Vietnamese"}])
        );
    }

    #[tokio::test]
    async fn resolve_applies_field_defaults() {
        let (status, value) =
            post_json(app(None), "/api/resolve", json!({"from": "", "to": "Frnech"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value, json!({"source": "en", "target": "vi"}));

        let (_, value) = post_json(
            app(None),
            "/api/resolve",
            json!({"from": "Vietnamese", "to": "English"}),
        )
        .await;
        assert_eq!(value, json!({"source": "vi", "target": "en"}));
    }

    #[tokio::test]
    async fn translate_with_default_selection() {
        let (status, value) = post_json(app(None), "/api/translate", json!({"text": "hello"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            value,
            json!({"text": "hello", "source": "en", "target": "vi", "translated_text": "HELLO"})
        );
    }

    #[tokio::test]
    async fn translate_failure_maps_to_bad_gateway() {
        let (status, value) =
            post_json(app(Some("engine offline")), "/api/translate", json!({"text": "hi"})).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(value, json!({"error": "engine offline"}));
    }
}
