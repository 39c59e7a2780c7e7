mod cache;
mod config;
mod dex;
mod error;
mod evolution;
mod matchup;
mod profile;

use std::sync::Arc;

use pokedex_catalog::{Ability, EvolutionChain, Item, Move, Pokemon, Species, TypeResource};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use cache::{Cache, FileCache, MemoryCache, NoCache};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use evolution::EvolutionView;
pub use matchup::PokemonMatchups;
pub use profile::{AbilityInfo, Profile};

pub use pokedex_catalog;
pub use pokedex_core;

/// Async PokeAPI client
///
/// Every successful response body is kept in the configured [`Cache`], so
/// repeated lookups of the same resource never hit the network twice.
/// Cloning is cheap and clones share the cache.
#[derive(Clone)]
pub struct PokedexClient {
    http: reqwest::Client,
    cache: Arc<dyn Cache>,
    config: Arc<ClientConfig>,
}

impl PokedexClient {
    /// Client with the default configuration and a memory cache
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Client with a file cache when `config.cache_dir` is set, a memory
    /// cache otherwise
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let cache: Arc<dyn Cache> = match &config.cache_dir {
            Some(dir) => Arc::new(FileCache::new(dir)),
            None => Arc::new(MemoryCache::new()),
        };
        Self::with_cache(config, cache)
    }

    pub fn with_cache(config: ClientConfig, cache: Arc<dyn Cache>) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            cache,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn language(&self) -> &str {
        &self.config.language
    }

    /// GET `url` as JSON, answering from the cache when possible
    pub async fn fetch_json(&self, url: &str) -> Result<Value> {
        if let Some(value) = self.cache_get(url).await {
            tracing::debug!(url = %url, "Cache hit");
            return Ok(value);
        }

        tracing::debug!(url = %url, "Fetching");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let value: Value = response.json().await?;
        self.cache_set(url, &value).await;
        Ok(value)
    }

    // Cache implementations may touch the filesystem, so they run on the
    // blocking pool rather than a runtime worker.
    async fn cache_get(&self, key: &str) -> Option<Value> {
        let cache = Arc::clone(&self.cache);
        let key = key.to_string();
        match tokio::task::spawn_blocking(move || cache.get(&key)).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Cache lookup task failed");
                None
            }
        }
    }

    async fn cache_set(&self, key: &str, value: &Value) {
        let cache = Arc::clone(&self.cache);
        let key = key.to_string();
        let value = value.clone();
        if let Err(e) = tokio::task::spawn_blocking(move || cache.set(&key, &value)).await {
            tracing::warn!(error = %e, "Cache store task failed");
        }
    }

    /// GET `url` and decode it as a catalog document
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let value = self.fetch_json(url).await?;
        Ok(pokedex_catalog::decode(&value)?)
    }

    async fn fetch_named<T: DeserializeOwned>(&self, resource: &str, query: &str) -> Result<T> {
        let query = normalize_query(query)?;
        self.fetch(&self.config.url(&format!("{resource}/{query}"))).await
    }

    pub async fn pokemon(&self, query: &str) -> Result<Pokemon> {
        self.fetch_named("pokemon", query).await
    }

    pub async fn species(&self, query: &str) -> Result<Species> {
        self.fetch_named("pokemon-species", query).await
    }

    /// Fetch a chain by the absolute url a species links to
    pub async fn evolution_chain(&self, url: &str) -> Result<EvolutionChain> {
        self.fetch(url).await
    }

    pub async fn item(&self, query: &str) -> Result<Item> {
        self.fetch_named("item", query).await
    }

    pub async fn ability(&self, query: &str) -> Result<Ability> {
        self.fetch_named("ability", query).await
    }

    pub async fn type_resource(&self, query: &str) -> Result<TypeResource> {
        self.fetch_named("type", query).await
    }

    pub async fn move_resource(&self, query: &str) -> Result<Move> {
        self.fetch_named("move", query).await
    }

    /// Look up a pokemon, falling back to the species' default form
    ///
    /// Species names such as `deoxys` have no pokemon of the same name. Numeric
    /// queries never fall back. A failed species lookup returns its own error;
    /// a species without a default variety returns the first error.
    pub async fn pokemon_smart(&self, query: &str) -> Result<Pokemon> {
        let query = normalize_query(query)?;
        let err = match self.pokemon(&query).await {
            Ok(pokemon) => return Ok(pokemon),
            Err(e) => e,
        };
        if query.chars().all(|c| c.is_ascii_digit()) {
            return Err(err);
        }

        tracing::debug!(query = %query, error = %err, "Falling back to species lookup");
        let species = self.species(&query).await?;
        match species.default_variety() {
            Some(variety) => self.pokemon(variety).await,
            None => Err(err),
        }
    }
}

/// Trim and lowercase a user query
pub fn normalize_query(query: &str) -> Result<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Err(ClientError::EmptyQuery);
    }
    Ok(query)
}
