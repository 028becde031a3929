use crate::Result;
use crate::sources::loteriascaixa::ApiDraw;

/// Remote store of past draws, addressed by contest number.
#[async_trait::async_trait]
pub trait DrawArchive: Send + Sync {
    async fn latest(&self) -> Result<ApiDraw>;

    async fn by_sequence(&self, sequence: u32) -> Result<ApiDraw>;

    fn name(&self) -> &'static str;
}
