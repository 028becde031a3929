use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::Draw;

#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct DrawRangeParams {
    /// First day of the range (YYYY-MM-DD)
    pub start: NaiveDate,
    /// Last day of the range, inclusive (YYYY-MM-DD)
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct RecentDrawsParams {
    #[serde(default = "default_count")]
    #[validate(range(min = 1, max = 50, message = "count must be between 1 and 50"))]
    pub count: usize,
}

fn default_count() -> usize {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DrawListResponse {
    pub draws: Vec<Draw>,
    /// How many of the draws were generated locally.
    pub synthetic_count: usize,
}

impl DrawListResponse {
    pub fn new(draws: Vec<Draw>) -> Self {
        let synthetic_count = draws.iter().filter(|d| d.is_synthetic).count();
        Self {
            draws,
            synthetic_count,
        }
    }
}
