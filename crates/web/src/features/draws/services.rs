use archive::DateRangeQuery;
use engine::Draw;
use engine::dto::draws::DrawListResponse;

use crate::state::Fetcher;

pub async fn latest_draw(fetcher: &Fetcher) -> Draw {
    fetcher.source().fetch_latest().await
}

pub async fn draw_by_sequence(fetcher: &Fetcher, sequence: u32) -> Draw {
    fetcher.source().fetch_by_sequence(sequence).await
}

pub async fn draws_in_range(fetcher: &Fetcher, query: DateRangeQuery) -> DrawListResponse {
    DrawListResponse::new(fetcher.fetch_range(query).await)
}

pub async fn recent_draws(fetcher: &Fetcher, count: usize) -> DrawListResponse {
    DrawListResponse::new(fetcher.fetch_recent(count).await)
}
