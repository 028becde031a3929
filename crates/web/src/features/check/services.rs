use archive::DateRangeQuery;
use engine::Combination;
use engine::dto::check::{CheckRangeResponse, ManualCheckResponse};
use engine::services::check::{check_manual, statistics, summarize_draws};

use crate::state::Fetcher;

/// Scores every game against each draw dated within `query`.
pub async fn check_range(
    fetcher: &Fetcher,
    games: &[Combination],
    query: DateRangeQuery,
) -> CheckRangeResponse {
    let draws = fetcher.fetch_range(query).await;
    let summaries = summarize_draws(games, &draws);

    CheckRangeResponse {
        statistics: statistics(&summaries),
        summaries,
    }
}

pub fn check_against(games: &[Combination], drawn: &[u8]) -> ManualCheckResponse {
    ManualCheckResponse {
        results: check_manual(games, drawn),
    }
}
