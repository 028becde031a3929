use archive::{ArchiveConfig, DrawRangeFetcher, LoteriasCaixaClient};
use std::sync::Arc;

pub type Fetcher = DrawRangeFetcher<LoteriasCaixaClient>;

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<Fetcher>,
}

impl AppState {
    pub fn new(config: ArchiveConfig) -> archive::Result<Self> {
        let client = LoteriasCaixaClient::new(&config)?;
        Ok(Self {
            fetcher: Arc::new(DrawRangeFetcher::new(client, config)),
        })
    }
}
