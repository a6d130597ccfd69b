use std::sync::Arc;

use common::asset::AssetService;
use common::storage::DocumentStore;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub assets: AssetService,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, config: AppConfig) -> Self {
        let assets =
            AssetService::new(Arc::clone(&store)).with_chunk_size(config.storage.stream_chunk_size);
        Self {
            store,
            assets,
            config,
        }
    }
}
