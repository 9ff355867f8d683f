use std::time::Duration;

/// 4K output, supersampled.
pub const DEFAULT_MAX_RENDER_PIXELS: u64 = 3840 * 2160 * 4;
const DEFAULT_MAX_WORKERS: usize = 4;
const DEFAULT_SPAWN_RETRIES: u32 = 3;
const DEFAULT_SPAWN_BACKOFF: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of requests that may render concurrently.
    pub worker_count: usize,
    /// Largest render grid, in pixels, a request may ask for.
    pub max_render_pixels: u64,
    /// Extra attempts per worker thread if spawning fails.
    pub spawn_retries: u32,
    /// Delay before the first retry; doubled on each further attempt.
    pub spawn_backoff: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let worker_count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(DEFAULT_MAX_WORKERS);

        Self {
            worker_count,
            max_render_pixels: DEFAULT_MAX_RENDER_PIXELS,
            spawn_retries: DEFAULT_SPAWN_RETRIES,
            spawn_backoff: DEFAULT_SPAWN_BACKOFF,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count.max(1);
        self
    }

    #[must_use]
    pub fn with_max_render_pixels(mut self, max_render_pixels: u64) -> Self {
        self.max_render_pixels = max_render_pixels;
        self
    }

    #[must_use]
    pub fn with_spawn_retries(mut self, spawn_retries: u32, spawn_backoff: Duration) -> Self {
        self.spawn_retries = spawn_retries;
        self.spawn_backoff = spawn_backoff;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_at_least_one_bounded_worker() {
        let config = EngineConfig::default();

        assert!(config.worker_count >= 1);
        assert!(config.worker_count <= DEFAULT_MAX_WORKERS);
        assert_eq!(config.max_render_pixels, 33_177_600);
    }

    #[test]
    fn test_zero_workers_is_normalised_to_one() {
        assert_eq!(EngineConfig::default().with_worker_count(0).worker_count, 1);
        assert_eq!(EngineConfig::default().with_worker_count(3).worker_count, 3);
    }
}
