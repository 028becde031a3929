use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::sources::loteriascaixa::ApiDraw;
use crate::traits::DrawArchive;
use crate::{ArchiveError, Result};

/// In-memory archive. Missing contests answer 404; the highest contest is the latest.
#[derive(Default)]
pub struct FakeArchive {
    records: BTreeMap<u32, ApiDraw>,
    calls: AtomicUsize,
}

impl FakeArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draw(self, contest: u32, date: &str) -> Self {
        let numbers = (1..=15).map(|n| format!("{:02}", n)).collect();
        self.with_record(ApiDraw {
            contest,
            date: date.to_string(),
            numbers,
            prizes: Vec::new(),
            location: None,
        })
    }

    pub fn with_record(mut self, record: ApiDraw) -> Self {
        self.records.insert(record.contest, record);
        self
    }

    /// Adds one draw per day, `first_contest` on `first_day`, counting up.
    pub fn with_daily_draws(mut self, first_contest: u32, first_day: chrono::NaiveDate, count: u32) -> Self {
        for offset in 0..count {
            let day = first_day + chrono::Days::new(offset as u64);
            self = self.with_draw(first_contest + offset, &day.format("%d/%m/%Y").to_string());
        }
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn not_found(contest: u32) -> ArchiveError {
        ArchiveError::StatusError {
            status: 404,
            url: format!("fake://{}", contest),
        }
    }
}

#[async_trait::async_trait]
impl DrawArchive for FakeArchive {
    async fn latest(&self) -> Result<ApiDraw> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .values()
            .next_back()
            .cloned()
            .ok_or(ArchiveError::EmptyResponse)
    }

    async fn by_sequence(&self, sequence: u32) -> Result<ApiDraw> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .get(&sequence)
            .cloned()
            .ok_or_else(|| Self::not_found(sequence))
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
