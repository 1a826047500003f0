// End-to-end tests for the TTS proxy API
//
// These tests run the real router against a server bound to an ephemeral
// port. The external collaborators (Redis, MinIO, the TikTok endpoint and
// ffprobe) are replaced with in-memory fakes, so each test owns its full
// world and tests run in parallel without any shared infrastructure.

mod helpers;
mod test_health;
