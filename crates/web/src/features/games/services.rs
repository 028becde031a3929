use engine::dto::games::{GenerateGamesRequest, GeneratedGame};
use engine::{Result, generate};

/// Generates `quantity` games sharing the request's size, fixed numbers and strategy.
pub fn generate_games(request: &GenerateGamesRequest) -> Result<Vec<GeneratedGame>> {
    let fixed = request.fixed_numbers()?;
    fixed.ensure_fits(request.size)?;

    Ok((0..request.quantity)
        .map(|_| {
            GeneratedGame::new(
                generate(request.size, &fixed, request.strategy),
                request.strategy,
            )
        })
        .collect())
}
