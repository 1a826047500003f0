pub mod audio_storage_repository;
pub mod cache_repository;
pub mod duration_probe;
pub mod ffprobe_duration_probe;
pub mod redis_cache_repository;
pub mod s3_audio_storage_repository;
pub mod tiktok_tts_repository;
pub mod tts_repository;

pub use audio_storage_repository::{AudioStorageRepository, ObjectStat, StorageError};
pub use cache_repository::{CacheError, CacheRepository};
pub use duration_probe::{DurationProbe, ProbeError};
pub use ffprobe_duration_probe::FfprobeDurationProbe;
pub use redis_cache_repository::RedisCacheRepository;
pub use s3_audio_storage_repository::S3AudioStorageRepository;
pub use tiktok_tts_repository::TikTokTtsRepository;
pub use tts_repository::{ProviderError, TtsRepository};
