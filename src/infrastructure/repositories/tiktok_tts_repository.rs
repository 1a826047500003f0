use super::tts_repository::{ProviderError, TtsRepository};
use crate::domain::tts::Voice;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Deserialize;

const BASE_URL: &str = "https://api16-normal-v6.tiktokv.com/media/api/text/speech/invoke";

/// The endpoint only answers requests that look like the mobile app.
const USER_AGENT: &str = "com.zhiliaoapp.musically/2022600030 (Linux; U; Android 7.1.2; es_ES; SM-G988N; Build/NRD90M;tt-ok/3.12.13.1)";

#[derive(Debug, Deserialize)]
struct SpeechInvokeResponse {
    status_code: i64,
    #[serde(default)]
    data: Option<SpeechInvokeData>,
}

#[derive(Debug, Deserialize)]
struct SpeechInvokeData {
    #[serde(default)]
    v_str: Option<String>,
}

/// TikTok implementation of the TTS repository
pub struct TikTokTtsRepository {
    http_client: reqwest::Client,
    base_url: String,
}

impl TikTokTtsRepository {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    fn status_error(status_code: i64) -> ProviderError {
        match status_code {
            1 => ProviderError::InvalidSessionId,
            2 => ProviderError::TextTooLong,
            4 => ProviderError::InvalidSpeaker,
            5 => ProviderError::NoSessionId,
            other => ProviderError::Unknown(other),
        }
    }

    /// Turn the provider response into MP3 bytes, mapping non-zero status
    /// codes to their error variants and decoding the base64 payload.
    fn decode_payload(response: SpeechInvokeResponse) -> Result<Vec<u8>, ProviderError> {
        if response.status_code != 0 {
            return Err(Self::status_error(response.status_code));
        }

        let encoded = response
            .data
            .and_then(|d| d.v_str)
            .ok_or(ProviderError::MissingPayload)?;

        Ok(BASE64.decode(encoded.as_bytes())?)
    }
}

impl Default for TikTokTtsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TtsRepository for TikTokTtsRepository {
    async fn synthesize(
        &self,
        text: &str,
        voice: Voice,
        session_id: &str,
    ) -> Result<Vec<u8>, ProviderError> {
        let url = format!(
            "{}/?text_speaker={}&req_text={}&speaker_map_type=0&aid=1233",
            self.base_url,
            voice.as_str(),
            urlencoding::encode(text)
        );

        tracing::info!(
            voice = %voice,
            text_length = text.len(),
            "Calling TikTok speech invoke endpoint"
        );

        let response = self
            .http_client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .header("Cookie", format!("sessionid={}", session_id))
            .send()
            .await?
            .json::<SpeechInvokeResponse>()
            .await?;

        let audio = Self::decode_payload(response).map_err(|e| {
            tracing::error!(error = %e, voice = %voice, "TikTok TTS synthesis failed");
            e
        })?;

        tracing::debug!(audio_size = audio.len(), "TikTok TTS audio decoded");

        Ok(audio)
    }
}
