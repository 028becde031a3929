use serde::de::DeserializeOwned;

use super::models::{ApiDraw, LatestResponse};
use crate::config::ArchiveConfig;
use crate::error::{ArchiveError, Result};
use crate::traits::DrawArchive;

pub struct LoteriasCaixaClient {
    base_url: String,
    client: reqwest::Client,
}

impl LoteriasCaixaClient {
    pub fn new(config: &ArchiveConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("lotofacil/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub async fn fetch_latest(&self) -> Result<ApiDraw> {
        let response: LatestResponse = self.get_json(&self.base_url).await?;
        response.into_latest().ok_or(ArchiveError::EmptyResponse)
    }

    pub async fn fetch_draw(&self, contest: u32) -> Result<ApiDraw> {
        let url = format!("{}/{}", self.base_url, contest);
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArchiveError::StatusError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait::async_trait]
impl DrawArchive for LoteriasCaixaClient {
    async fn latest(&self) -> Result<ApiDraw> {
        self.fetch_latest().await
    }

    async fn by_sequence(&self, sequence: u32) -> Result<ApiDraw> {
        self.fetch_draw(sequence).await
    }

    fn name(&self) -> &'static str {
        "loteriascaixa"
    }
}
