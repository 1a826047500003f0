use super::duration_probe::{DurationProbe, ProbeError};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// ffprobe implementation of the duration probe
///
/// Spawns the configured binary as a subprocess and awaits its exit without
/// blocking the runtime.
pub struct FfprobeDurationProbe {
    ffprobe_path: String,
}

impl FfprobeDurationProbe {
    pub fn new(ffprobe_path: String) -> Self {
        Self { ffprobe_path }
    }
}

#[async_trait]
impl DurationProbe for FfprobeDurationProbe {
    async fn duration_seconds(&self, path: &Path) -> Result<f64, ProbeError> {
        let output = Command::new(&self.ffprobe_path)
            .arg("-v")
            .arg("error")
            .arg("-show_entries")
            .arg("format=duration")
            .arg("-of")
            .arg("default=noprint_wrappers=1:nokey=1")
            .arg("-i")
            .arg(path)
            .output()
            .await
            .map_err(ProbeError::Spawn)?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

            tracing::error!(code, stderr = %stderr, path = %path.display(), "ffprobe failed");

            return Err(ProbeError::NonZeroExit { code, stderr });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let value = stdout.trim();

        value
            .parse::<f64>()
            .map_err(|_| ProbeError::InvalidDuration(value.to_string()))
    }
}
