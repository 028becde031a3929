pub mod config;
pub mod error;
pub mod range;
pub mod source;
pub mod sources;
pub mod synthetic;
pub mod traits;

#[cfg(test)]
mod testing;

pub use config::ArchiveConfig;
pub use error::{ArchiveError, Result};
pub use range::{DateRangeQuery, DrawRangeFetcher};
pub use source::DrawSource;
pub use traits::DrawArchive;

pub use sources::loteriascaixa::LoteriasCaixaClient;
