use chrono::NaiveDate;
use engine::{Draw, PrizeTier};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::warn;

use super::models::{ApiAmount, ApiDraw, ApiPrize};
use crate::{ArchiveError, Result};

/// Maps an archive record onto the internal draw shape.
pub fn normalize(record: ApiDraw) -> Result<Draw> {
    let date = parse_draw_date(&record.date)?;

    let numbers = record
        .numbers
        .iter()
        .map(|n| {
            n.trim().parse::<u8>().map_err(|_| {
                ArchiveError::NormalizationError(format!(
                    "contest {}: invalid number '{}'",
                    record.contest, n
                ))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let prize_tiers = record
        .prizes
        .iter()
        .filter_map(|prize| convert_prize(record.contest, prize))
        .collect();

    Ok(Draw::new(record.contest, date, numbers, prize_tiers)?)
}

/// Accepts `DD/MM/YYYY` as published, and ISO dates.
pub fn parse_draw_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .map_err(|_| ArchiveError::NormalizationError(format!("invalid date '{}'", value)))
}

fn convert_prize(contest: u32, prize: &ApiPrize) -> Option<PrizeTier> {
    let payout = match prize.amount.as_ref().map(parse_amount) {
        Some(Some(payout)) => payout,
        Some(None) | None => {
            warn!(
                "Contest {}: dropping prize tier {:?} with unreadable amount {:?}",
                contest, prize.tier, prize.amount
            );
            return None;
        }
    };

    Some(PrizeTier {
        tier: prize.tier,
        description: prize.description.clone(),
        winners: prize.winners,
        payout,
    })
}

/// Rounds to cents. Text may use `1234.56` or the Brazilian `1.234,56`.
fn parse_amount(amount: &ApiAmount) -> Option<Decimal> {
    let value = match amount {
        ApiAmount::Number(n) => Decimal::from_f64_retain(*n)?,
        ApiAmount::Text(s) => {
            let s = s.trim().trim_start_matches("R$").trim();
            Decimal::from_str(s)
                .or_else(|_| Decimal::from_str(&s.replace('.', "").replace(',', ".")))
                .ok()?
        }
    };
    Some(value.round_dp(2))
}
