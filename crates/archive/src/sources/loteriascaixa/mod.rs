mod client;
mod models;
mod transformer;

pub use client::LoteriasCaixaClient;
pub use models::*;
pub use transformer::{normalize, parse_draw_date};
