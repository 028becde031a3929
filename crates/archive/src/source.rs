use engine::Draw;
use tracing::{debug, warn};

use crate::Result;
use crate::sources::loteriascaixa::normalize;
use crate::synthetic::{synthetic_draw, today};
use crate::traits::DrawArchive;

/// Fetches single draws and swaps in synthetic ones when the archive fails.
pub struct DrawSource<A> {
    archive: A,
}

impl<A: DrawArchive> DrawSource<A> {
    pub fn new(archive: A) -> Self {
        Self { archive }
    }

    pub fn archive(&self) -> &A {
        &self.archive
    }

    pub async fn try_fetch_latest(&self) -> Result<Draw> {
        let record = self.archive.latest().await?;
        debug!("{}: latest contest is {}", self.archive.name(), record.contest);
        normalize(record)
    }

    pub async fn try_fetch_by_sequence(&self, sequence: u32) -> Result<Draw> {
        let record = self.archive.by_sequence(sequence).await?;
        normalize(record)
    }

    /// Never fails; a synthetic draw dated today is returned on any error.
    pub async fn fetch_latest(&self) -> Draw {
        match self.try_fetch_latest().await {
            Ok(draw) => draw,
            Err(e) => {
                warn!("Latest draw fetch failed, using synthetic draw: {}", e);
                fallback_draw(None)
            }
        }
    }

    /// Never fails; a synthetic draw numbered `sequence` is returned on any error.
    pub async fn fetch_by_sequence(&self, sequence: u32) -> Draw {
        match self.try_fetch_by_sequence(sequence).await {
            Ok(draw) => draw,
            Err(e) => {
                warn!(
                    "Fetch of draw {} failed, using synthetic draw: {}",
                    sequence, e
                );
                fallback_draw(Some(sequence))
            }
        }
    }
}

fn fallback_draw(sequence: Option<u32>) -> Draw {
    synthetic_draw(sequence, today(), &mut rand::rng())
}
