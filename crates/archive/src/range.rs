use chrono::NaiveDate;
use engine::Draw;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::Result;
use crate::config::ArchiveConfig;
use crate::source::DrawSource;
use crate::synthetic::synthetic_range;
use crate::traits::DrawArchive;

/// Inclusive calendar range. `start > end` is not rejected; it simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRangeQuery {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days_newest_first(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let start = self.start;
        std::iter::successors(Some(self.end), |day| day.pred_opt())
            .take_while(move |day| *day >= start)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkDecision {
    /// Within the range.
    Include,
    /// Newer than the range; keep walking back.
    Skip,
    /// Older than the range; everything further back is older still.
    Stop,
}

pub fn classify(date: NaiveDate, query: &DateRangeQuery) -> WalkDecision {
    if date < query.start {
        WalkDecision::Stop
    } else if date <= query.end {
        WalkDecision::Include
    } else {
        WalkDecision::Skip
    }
}

/// Cursor walking back one contest at a time from a known contest number.
/// Waits `delay` before every fetch so calls are never back to back.
pub struct DrawWalk<'a, A> {
    source: &'a DrawSource<A>,
    cursor: u32,
    steps: usize,
    max_steps: usize,
    delay: Duration,
}

impl<'a, A: DrawArchive> DrawWalk<'a, A> {
    pub fn new(source: &'a DrawSource<A>, from_sequence: u32, max_steps: usize, delay: Duration) -> Self {
        Self {
            source,
            cursor: from_sequence,
            steps: 0,
            max_steps,
            delay,
        }
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Fetches the contest before the last one visited. `Ok(None)` once the step cap is
    /// reached or contest 1 has been visited.
    pub async fn next_draw(&mut self) -> Result<Option<Draw>> {
        if self.steps >= self.max_steps || self.cursor <= 1 {
            return Ok(None);
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.cursor -= 1;
        self.steps += 1;
        debug!("Walk step {}: fetching contest {}", self.steps, self.cursor);

        self.source.try_fetch_by_sequence(self.cursor).await.map(Some)
    }
}

/// Collects draws by date, walking back from the latest contest.
pub struct DrawRangeFetcher<A> {
    source: DrawSource<A>,
    config: ArchiveConfig,
}

impl<A: DrawArchive> DrawRangeFetcher<A> {
    pub fn new(archive: A, config: ArchiveConfig) -> Self {
        Self {
            source: DrawSource::new(archive),
            config,
        }
    }

    pub fn source(&self) -> &DrawSource<A> {
        &self.source
    }

    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    /// Draws dated within `query`, newest first.
    ///
    /// Only walks backwards from the latest contest, so a range starting after the latest
    /// draw is empty. If the archive cannot be reached at all, a synthetic range is returned.
    pub async fn fetch_range(&self, query: DateRangeQuery) -> Vec<Draw> {
        info!("Fetching draws from {} to {}", query.start, query.end);

        let latest = match self.source.try_fetch_latest().await {
            Ok(draw) => draw,
            Err(e) => {
                warn!("Archive unavailable ({}), generating synthetic draws", e);
                return self.synthetic_fallback(&query);
            }
        };

        let latest_sequence = latest.sequence;
        let mut draws = Vec::new();
        match classify(latest.date, &query) {
            WalkDecision::Stop => {
                info!(
                    "Latest draw {} ({}) is older than the range start",
                    latest.sequence, latest.date
                );
                return draws;
            }
            WalkDecision::Include => draws.push(latest),
            WalkDecision::Skip => {}
        }

        let mut walk = DrawWalk::new(
            &self.source,
            latest_sequence,
            self.config.max_walk_steps,
            self.config.request_delay,
        );

        loop {
            let draw = match walk.next_draw().await {
                Ok(Some(draw)) => draw,
                Ok(None) => {
                    debug!("Walk ended after {} steps", walk.steps());
                    break;
                }
                Err(e) if draws.is_empty() => {
                    warn!(
                        "Walk failed after {} steps with nothing collected ({}), generating synthetic draws",
                        walk.steps(),
                        e
                    );
                    return self.synthetic_fallback(&query);
                }
                Err(e) => {
                    warn!("Walk stopped after {} steps: {}", walk.steps(), e);
                    break;
                }
            };

            match classify(draw.date, &query) {
                WalkDecision::Stop => break,
                WalkDecision::Include => draws.push(draw),
                WalkDecision::Skip => continue,
            }
        }

        info!("Found {} draws in range", draws.len());
        draws
    }

    /// The latest draw followed by up to `count - 1` earlier ones, newest first.
    /// Individual failures are replaced by synthetic draws.
    pub async fn fetch_recent(&self, count: usize) -> Vec<Draw> {
        if count == 0 {
            return Vec::new();
        }

        let latest = self.source.fetch_latest().await;
        let mut sequence = latest.sequence;
        let mut draws = vec![latest];

        let wanted = count.min(self.config.max_walk_steps + 1);
        while draws.len() < wanted && sequence > 1 {
            if !self.config.request_delay.is_zero() {
                tokio::time::sleep(self.config.request_delay).await;
            }
            sequence -= 1;
            draws.push(self.source.fetch_by_sequence(sequence).await);
        }

        draws
    }

    /// Bounded by the same budget as a real walk: the latest draw plus `max_walk_steps`.
    fn synthetic_fallback(&self, query: &DateRangeQuery) -> Vec<Draw> {
        synthetic_range(
            query,
            self.config.synthetic_omit_probability,
            self.config.max_walk_steps.saturating_add(1),
            &mut rand::rng(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeArchive;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    fn config() -> ArchiveConfig {
        ArchiveConfig {
            request_delay: Duration::ZERO,
            ..Default::default()
        }
    }

    /// Contests 100..=129, one per day from March 1st to March 30th.
    fn march_archive() -> FakeArchive {
        FakeArchive::new().with_daily_draws(100, date(3, 1), 30)
    }

    #[test]
    fn test_classify() {
        let query = DateRangeQuery::new(date(3, 10), date(3, 20));
        assert_eq!(classify(date(3, 9), &query), WalkDecision::Stop);
        assert_eq!(classify(date(3, 10), &query), WalkDecision::Include);
        assert_eq!(classify(date(3, 20), &query), WalkDecision::Include);
        assert_eq!(classify(date(3, 21), &query), WalkDecision::Skip);
    }

    #[test]
    fn test_classify_inverted_query_never_includes() {
        let query = DateRangeQuery::new(date(3, 20), date(3, 10));
        assert_eq!(classify(date(3, 15), &query), WalkDecision::Stop);
        assert_eq!(classify(date(3, 25), &query), WalkDecision::Skip);
    }

    #[test]
    fn test_days_newest_first() {
        let query = DateRangeQuery::new(date(2, 27), date(3, 2));
        let days: Vec<NaiveDate> = query.days_newest_first().collect();
        assert_eq!(
            days,
            vec![date(3, 2), date(3, 1), date(2, 28), date(2, 27)]
        );
        assert_eq!(
            DateRangeQuery::new(date(3, 2), date(3, 1))
                .days_newest_first()
                .count(),
            0
        );
    }

    #[tokio::test]
    async fn test_range_in_the_middle() {
        let fetcher = DrawRangeFetcher::new(march_archive(), config());
        let query = DateRangeQuery::new(date(3, 10), date(3, 15));

        let draws = fetcher.fetch_range(query).await;

        let sequences: Vec<u32> = draws.iter().map(|d| d.sequence).collect();
        assert_eq!(sequences, vec![114, 113, 112, 111, 110, 109]);
        assert!(draws.iter().all(|d| query.contains(d.date)));
        assert!(draws.iter().all(|d| !d.is_synthetic));
    }

    #[tokio::test]
    async fn test_range_including_latest() {
        let fetcher = DrawRangeFetcher::new(march_archive(), config());
        let draws = fetcher
            .fetch_range(DateRangeQuery::new(date(3, 28), date(4, 30)))
            .await;

        let sequences: Vec<u32> = draws.iter().map(|d| d.sequence).collect();
        assert_eq!(sequences, vec![129, 128, 127]);
    }

    #[tokio::test]
    async fn test_range_after_latest_is_empty() {
        let archive = march_archive();
        let fetcher = DrawRangeFetcher::new(archive, config());

        let draws = fetcher
            .fetch_range(DateRangeQuery::new(date(4, 1), date(4, 30)))
            .await;

        assert!(draws.is_empty());
        assert_eq!(fetcher.source().archive().calls(), 1);
    }

    #[tokio::test]
    async fn test_walk_respects_step_cap() {
        let config = ArchiveConfig {
            max_walk_steps: 5,
            ..config()
        };
        let fetcher = DrawRangeFetcher::new(march_archive(), config);

        let draws = fetcher
            .fetch_range(DateRangeQuery::new(date(1, 1), date(12, 31)))
            .await;

        assert_eq!(draws.len(), 6);
        assert_eq!(fetcher.source().archive().calls(), 6);
    }

    #[tokio::test]
    async fn test_walk_stops_at_first_contest() {
        let archive = FakeArchive::new().with_daily_draws(1, date(3, 1), 3);
        let fetcher = DrawRangeFetcher::new(archive, config());

        let draws = fetcher
            .fetch_range(DateRangeQuery::new(date(1, 1), date(12, 31)))
            .await;

        let sequences: Vec<u32> = draws.iter().map(|d| d.sequence).collect();
        assert_eq!(sequences, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_gap_mid_walk_returns_partial_results() {
        // contest 125 is missing from the archive
        let archive = FakeArchive::new()
            .with_daily_draws(126, date(3, 27), 4)
            .with_daily_draws(100, date(3, 1), 25);
        let fetcher = DrawRangeFetcher::new(archive, config());

        let draws = fetcher
            .fetch_range(DateRangeQuery::new(date(3, 1), date(3, 31)))
            .await;

        let sequences: Vec<u32> = draws.iter().map(|d| d.sequence).collect();
        assert_eq!(sequences, vec![129, 128, 127, 126]);
    }

    #[tokio::test]
    async fn test_unreachable_archive_gives_synthetic_range() {
        let config = ArchiveConfig {
            synthetic_omit_probability: 0.2,
            ..config()
        };
        let fetcher = DrawRangeFetcher::new(FakeArchive::new(), config);
        let query = DateRangeQuery::new(date(3, 1), date(3, 10));

        let draws = fetcher.fetch_range(query).await;

        assert!(draws.len() <= 10);
        assert!(draws.iter().all(|d| d.is_synthetic));
        assert!(draws.iter().all(|d| query.contains(d.date)));
        let mut days: Vec<NaiveDate> = draws.iter().map(|d| d.date).collect();
        days.dedup();
        assert_eq!(days.len(), draws.len());
    }

    #[tokio::test]
    async fn test_failure_before_anything_collected_gives_synthetic_range() {
        // latest (129) is newer than the range and 128 is missing
        let archive = FakeArchive::new()
            .with_draw(129, "30/03/2025")
            .with_daily_draws(100, date(3, 1), 28);
        let config = ArchiveConfig {
            synthetic_omit_probability: 0.0,
            ..config()
        };
        let fetcher = DrawRangeFetcher::new(archive, config);
        let query = DateRangeQuery::new(date(3, 1), date(3, 10));

        let draws = fetcher.fetch_range(query).await;

        assert_eq!(draws.len(), 10);
        assert!(draws.iter().all(|d| d.is_synthetic));
    }

    #[tokio::test]
    async fn test_fetch_recent() {
        let fetcher = DrawRangeFetcher::new(march_archive(), config());

        let draws = fetcher.fetch_recent(4).await;
        let sequences: Vec<u32> = draws.iter().map(|d| d.sequence).collect();
        assert_eq!(sequences, vec![129, 128, 127, 126]);

        assert!(fetcher.fetch_recent(0).await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_recent_fills_gaps_with_synthetic_draws() {
        let archive = FakeArchive::new()
            .with_draw(10, "10/03/2025")
            .with_draw(8, "08/03/2025");
        let fetcher = DrawRangeFetcher::new(archive, config());

        let draws = fetcher.fetch_recent(3).await;
        assert_eq!(draws.len(), 3);
        assert!(!draws[0].is_synthetic);
        assert!(draws[1].is_synthetic);
        assert_eq!(draws[1].sequence, 9);
        assert!(!draws[2].is_synthetic);
    }

    #[tokio::test(start_paused = true)]
    async fn test_walk_waits_between_fetches() {
        let config = ArchiveConfig {
            request_delay: Duration::from_millis(200),
            ..Default::default()
        };
        let fetcher = DrawRangeFetcher::new(march_archive(), config);
        let started = tokio::time::Instant::now();

        let draws = fetcher
            .fetch_range(DateRangeQuery::new(date(3, 27), date(3, 30)))
            .await;

        assert_eq!(draws.len(), 4);
        // four walk steps: 128, 127, 126 and 125, which ends the walk
        assert!(started.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test]
    async fn test_synthetic_fallback_is_capped_by_walk_budget() {
        let config = ArchiveConfig {
            max_walk_steps: 20,
            synthetic_omit_probability: 0.0,
            ..config()
        };
        let fetcher = DrawRangeFetcher::new(FakeArchive::new(), config);
        let start = NaiveDate::from_ymd_opt(1000, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2999, 12, 31).unwrap();

        let draws = fetcher.fetch_range(DateRangeQuery::new(start, end)).await;

        assert_eq!(draws.len(), 21);
        assert_eq!(draws[0].date, end);
        assert!(draws.iter().all(|d| d.is_synthetic));
        assert_eq!(fetcher.source().archive().calls(), 1);
    }
}
