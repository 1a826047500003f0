pub mod error;
pub mod service;
pub mod voice;

pub use error::TtsServiceError;
pub use service::{fingerprint, TtsService, TtsServiceApi, TtsSynthesisOutcome};
pub use voice::Voice;

use serde::{Deserialize, Serialize};

/// Response for GET /tts
#[derive(Debug, Serialize, Deserialize)]
pub struct TtsResponse {
    pub error: bool,
    pub s3url: String,
    pub duration: f64,
}
