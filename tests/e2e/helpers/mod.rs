use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use tiktok_tts_proxy::controllers::tts::TtsController;
use tiktok_tts_proxy::domain::tts::TtsService;
use tiktok_tts_proxy::infrastructure::config::{Config, Environment, LogFormat};
use tiktok_tts_proxy::infrastructure::http::build_router;
use tiktok_tts_proxy::infrastructure::repositories::CacheRepository;

pub mod api_client;
pub mod fakes;

use api_client::TestClient;
use fakes::{FakeTtsRepository, FixedDurationProbe, InMemoryAudioStorage, InMemoryCacheRepository};

pub const FAKE_AUDIO: &[u8] = b"ID3\x03fake mp3 payload";
pub const DEFAULT_PROBE_DURATION: f64 = 2.5;

pub struct TestContext {
    pub client: TestClient,
    pub cache: Arc<InMemoryCacheRepository>,
    pub storage: Arc<InMemoryAudioStorage>,
    pub provider: Arc<FakeTtsRepository>,
}

impl TestContext {
    pub async fn new() -> Self {
        TestContextBuilder::new().start().await
    }

    /// Wait for the fire-and-forget cache write to land
    pub async fn wait_for_cache_entry(&self, key: &str) -> String {
        for _ in 0..100 {
            if let Some(value) = self.cache.get_sync(key) {
                return value;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("cache entry for {key} never appeared");
    }
}

pub struct TestContextBuilder {
    provider: FakeTtsRepository,
    probe_duration: f64,
    session_id: Option<String>,
}

impl TestContextBuilder {
    pub fn new() -> Self {
        Self {
            provider: FakeTtsRepository::succeeding(FAKE_AUDIO.to_vec()),
            probe_duration: DEFAULT_PROBE_DURATION,
            session_id: Some("test-session-id".to_string()),
        }
    }

    pub fn provider(mut self, provider: FakeTtsRepository) -> Self {
        self.provider = provider;
        self
    }

    pub fn probe_duration(mut self, duration: f64) -> Self {
        self.probe_duration = duration;
        self
    }

    pub fn without_session_id(mut self) -> Self {
        self.session_id = None;
        self
    }

    pub async fn start(self) -> TestContext {
        let config = test_config();

        let cache = Arc::new(InMemoryCacheRepository::new());
        let storage = Arc::new(InMemoryAudioStorage::new());
        let provider = Arc::new(self.provider);
        let probe = Arc::new(FixedDurationProbe {
            duration: self.probe_duration,
        });

        let tts_service = Arc::new(TtsService::new(
            cache.clone(),
            storage.clone(),
            provider.clone(),
            probe,
            self.session_id,
            unique_temp_dir(),
        ));
        let tts_controller = Arc::new(TtsController::new(tts_service));

        let app = build_router(
            &config,
            cache.clone() as Arc<dyn CacheRepository>,
            tts_controller,
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestContext {
            client: TestClient::new(&format!("http://{addr}")),
            cache,
            storage,
            provider,
        }
    }
}

fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        redis_url: "redis://localhost:6379".to_string(),
        minio_address: "localhost".to_string(),
        minio_port: 9000,
        minio_access_key: "test-access-key".to_string(),
        minio_secret_key: "test-secret-key".to_string(),
        minio_bucket: "tiktoktts".to_string(),
        tiktok_session_id: Some("test-session-id".to_string()),
        ffprobe_path: "ffprobe".to_string(),
        temp_dir: unique_temp_dir(),
        environment: Environment::Development,
        log_format: LogFormat::Pretty,
    }
}

fn unique_temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("tiktok-tts-proxy-test-{}", uuid::Uuid::new_v4()))
}
