use std::sync::Arc;
use tiktok_tts_proxy::controllers::tts::TtsController;
use tiktok_tts_proxy::domain::tts::TtsService;
use tiktok_tts_proxy::infrastructure::config::{Config, LogFormat};
use tiktok_tts_proxy::infrastructure::http::start_http_server;
use tiktok_tts_proxy::infrastructure::repositories::{
    AudioStorageRepository, CacheRepository, FfprobeDurationProbe, RedisCacheRepository,
    S3AudioStorageRepository, TikTokTtsRepository,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting TikTok TTS proxy on {}:{}",
        config.host,
        config.port
    );

    if config
        .tiktok_session_id
        .as_deref()
        .map_or(true, str::is_empty)
    {
        tracing::warn!(
            "TIKTOK_SESSION_ID is not set; synthesis requests will fail until it is configured"
        );
    }

    // Redis cache client
    let cache_repo: Arc<dyn CacheRepository> =
        Arc::new(RedisCacheRepository::new(&config.redis_url)?);
    tracing::info!(redis_url = %config.redis_url, "Redis cache client created");

    // S3 client against the MinIO endpoint
    let endpoint_url = format!("http://{}:{}", config.minio_address, config.minio_port);
    tracing::info!(
        endpoint = %endpoint_url,
        bucket = %config.minio_bucket,
        "Initializing object storage client"
    );

    let credentials = aws_sdk_s3::config::Credentials::new(
        config.minio_access_key.clone(),
        config.minio_secret_key.clone(),
        None,
        None,
        "minio",
    );
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&endpoint_url)
        .load()
        .await;
    let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
        .force_path_style(true)
        .build();
    let s3_client = aws_sdk_s3::Client::from_conf(s3_config);

    let storage_repo = Arc::new(S3AudioStorageRepository::new(
        s3_client,
        config.minio_bucket.clone(),
        config.minio_address.clone(),
        config.minio_port,
    ));

    // Create the bucket if needed and make it publicly readable; a policy
    // failure is fatal at startup
    storage_repo.ensure_bucket().await?;
    tracing::info!("Object storage ready");

    let tts_repo = Arc::new(TikTokTtsRepository::new());
    let duration_probe = Arc::new(FfprobeDurationProbe::new(config.ffprobe_path.clone()));

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    let tts_service = Arc::new(TtsService::new(
        cache_repo.clone(),
        storage_repo,
        tts_repo,
        duration_probe,
        config.tiktok_session_id.clone(),
        config.temp_dir.clone(),
    ));

    let tts_controller = Arc::new(TtsController::new(tts_service));

    // Start HTTP server with all routes
    start_http_server(config, cache_repo, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tiktok_tts_proxy=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tiktok_tts_proxy=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
