use futures_util::future::try_join_all;
use pokedex_catalog::{Move, NamedResource, ResourceList};
use pokedex_core::{DexEntry, MoveSummary, dex_entries};

use crate::{PokedexClient, Result};

/// Page size large enough to list every resource in one request
const LIST_LIMIT: u32 = 2000;

impl PokedexClient {
    async fn list(&self, resource: &str) -> Result<ResourceList> {
        self.fetch(&self.config.url(&format!("{resource}?limit={LIST_LIMIT}&offset=0")))
            .await
    }

    /// Every pokemon as `(id, name)`, in catalog order
    pub async fn dex_list(&self) -> Result<Vec<DexEntry>> {
        let list = self.list("pokemon").await?;
        Ok(dex_entries(&list))
    }

    /// One summary row per move, sorted by id
    ///
    /// Moves are fetched `move_batch_size` at a time with a pause between
    /// batches. Any move that fails to load fails the whole index.
    pub async fn moves_index(&self) -> Result<Vec<MoveSummary>> {
        let list = self.list("move").await?;
        let total = list.results.len();
        let batch_size = self.config.move_batch_size.max(1);
        let lang = self.language();

        let mut rows = Vec::with_capacity(total);
        for (i, batch) in list.results.chunks(batch_size).enumerate() {
            let moves = try_join_all(batch.iter().map(|r| self.move_by_ref(r))).await?;
            rows.extend(moves.iter().map(|m| MoveSummary::from_move(m, lang)));

            let done = (i * batch_size + batch.len()).min(total);
            tracing::info!(done, total, "Move index progress");
            if done < total && !self.config.move_batch_delay.is_zero() {
                tokio::time::sleep(self.config.move_batch_delay).await;
            }
        }

        rows.sort_by_key(|row| row.id);
        Ok(rows)
    }

    async fn move_by_ref(&self, resource: &NamedResource) -> Result<Move> {
        if resource.url.is_empty() {
            self.move_resource(&resource.name).await
        } else {
            self.fetch(&resource.url).await
        }
    }
}
