use std::env;
use std::path::PathBuf;
use std::time::Duration;

use pokedex_catalog::DEFAULT_BASE_URL;

/// Client settings
///
/// Build with [`ClientConfig::default`] and the `with_*` methods, or overlay
/// `POKEDEX_*` environment variables with [`ClientConfig::from_env`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Catalog root, without a trailing slash
    pub base_url: String,
    /// Language code used when picking localized names and text
    pub language: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Directory for the persisted response cache; memory-only when `None`
    pub cache_dir: Option<PathBuf>,
    /// Moves fetched concurrently while building the move index
    pub move_batch_size: usize,
    /// Pause between move batches
    pub move_batch_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            language: "es".to_string(),
            timeout: Duration::from_secs(15),
            cache_dir: None,
            move_batch_size: 15,
            move_batch_delay: Duration::from_millis(200),
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with `POKEDEX_BASE_URL`, `POKEDEX_LANGUAGE`,
    /// `POKEDEX_TIMEOUT_SECS` and `POKEDEX_CACHE_DIR`
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("POKEDEX_BASE_URL") {
            config = config.with_base_url(url);
        }
        if let Ok(language) = env::var("POKEDEX_LANGUAGE") {
            config = config.with_language(language);
        }
        if let Some(secs) = env::var("POKEDEX_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Ok(dir) = env::var("POKEDEX_CACHE_DIR")
            && !dir.is_empty()
        {
            config = config.with_cache_dir(dir);
        }
        config
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    pub fn with_move_batching(mut self, size: usize, delay: Duration) -> Self {
        self.move_batch_size = size.max(1);
        self.move_batch_delay = delay;
        self
    }

    /// Absolute url of a catalog path such as `pokemon/25`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
