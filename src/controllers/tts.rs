use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    domain::tts::{TtsResponse, TtsService, TtsServiceApi, Voice},
    error::{AppError, AppResult},
};

/// Query parameters for GET /tts
#[derive(Debug, Deserialize)]
pub struct TtsParams {
    pub text: Option<String>,
    pub voice: Option<String>,
}

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// GET /tts - Convert text to speech
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Query(params): Query<TtsParams>,
    ) -> AppResult<Json<TtsResponse>> {
        // Validate input
        let text = params
            .text
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::BadRequest("Missing text or voice parameter".to_string()))?;

        let voice_id = params
            .voice
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::BadRequest("Missing text or voice parameter".to_string()))?;

        let voice = Voice::from_id(&voice_id)
            .ok_or_else(|| AppError::BadRequest("Invalid voice parameter".to_string()))?;

        // Synthesize speech using service
        let outcome = controller
            .tts_service
            .synthesize(&text, voice)
            .await
            .map_err(AppError::from)?;

        Ok(Json(TtsResponse {
            error: false,
            s3url: outcome.url,
            duration: outcome.duration_seconds,
        }))
    }
}
