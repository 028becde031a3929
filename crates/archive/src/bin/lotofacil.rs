use archive::{ArchiveConfig, DateRangeQuery, DrawRangeFetcher, LoteriasCaixaClient};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use engine::models::{MAX_GAME_SIZE, MIN_GAME_SIZE, format_numbers};
use engine::services::check::{DrawSummary, statistics, summarize_draws};
use engine::services::games_file::{format_games, parse_games};
use engine::{Combination, Draw, EngineError, FixedNumbers, Strategy};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lotofacil")]
#[command(about = "Lotofácil game generator and result checker", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    archive: ArchiveArgs,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(clap::Args)]
struct ArchiveArgs {
    #[arg(long, env = "LOTOFACIL_API_URL", default_value = archive::config::DEFAULT_BASE_URL)]
    api_url: String,

    /// Pause between archive calls, in milliseconds
    #[arg(long, env = "LOTOFACIL_REQUEST_DELAY_MS", default_value_t = 200)]
    request_delay_ms: u64,

    /// Maximum number of draws fetched while walking back through history
    #[arg(long, env = "LOTOFACIL_MAX_WALK_STEPS", default_value_t = 500)]
    max_walk_steps: usize,

    #[arg(long, env = "LOTOFACIL_TIMEOUT_SECS", default_value_t = 15)]
    timeout_secs: u64,
}

impl ArchiveArgs {
    fn to_config(&self) -> ArchiveConfig {
        ArchiveConfig {
            base_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            request_delay: Duration::from_millis(self.request_delay_ms),
            max_walk_steps: self.max_walk_steps,
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate games
    Generate {
        #[arg(short, long, default_value_t = 1)]
        games: usize,

        #[arg(short, long, default_value_t = MIN_GAME_SIZE)]
        size: usize,

        /// Comma separated numbers every game must contain
        #[arg(short, long, default_value = "")]
        fixed: String,

        #[arg(long, default_value = "random")]
        strategy: Strategy,

        /// Write the games file here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    #[command(flatten)]
    Archive(ArchiveCommand),
}

/// Subcommands that talk to the draw archive.
#[derive(Subcommand)]
enum ArchiveCommand {
    /// Show the latest draw
    Latest,
    /// Show one draw by contest number
    Draw { sequence: u32 },
    /// Show the latest draws
    Recent {
        #[arg(short, long, default_value_t = 10)]
        count: usize,
    },
    /// Show every draw between two dates
    Range {
        #[arg(long)]
        start: NaiveDate,

        #[arg(long)]
        end: NaiveDate,
    },
    /// Check a games file against the draws between two dates
    Check {
        file: PathBuf,

        #[arg(long)]
        start: NaiveDate,

        #[arg(long)]
        end: NaiveDate,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "lotofacil={},archive={},engine={}",
                    log_level, log_level, log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Generate {
            games,
            size,
            fixed,
            strategy,
            output,
        } => handle_generate(games, size, &fixed, strategy, output).await,
        Commands::Archive(command) => handle_archive(command, &cli.archive).await,
    }
}

async fn handle_archive(
    command: ArchiveCommand,
    args: &ArchiveArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.to_config();
    let fetcher = DrawRangeFetcher::new(LoteriasCaixaClient::new(&config)?, config);

    match command {
        ArchiveCommand::Latest => {
            let draw = fetcher.source().fetch_latest().await;
            print_draw(&draw);
        }
        ArchiveCommand::Draw { sequence } => {
            let draw = fetcher.source().fetch_by_sequence(sequence).await;
            print_draw(&draw);
        }
        ArchiveCommand::Recent { count } => {
            for draw in fetcher.fetch_recent(count).await {
                print_draw(&draw);
            }
        }
        ArchiveCommand::Range { start, end } => {
            let draws = fetcher.fetch_range(DateRangeQuery::new(start, end)).await;
            if draws.is_empty() {
                tracing::warn!("No draws between {} and {}", start, end);
            }
            for draw in &draws {
                print_draw(draw);
            }
        }
        ArchiveCommand::Check { file, start, end } => {
            handle_check(&fetcher, file, DateRangeQuery::new(start, end)).await?;
        }
    }

    Ok(())
}

async fn handle_generate(
    count: usize,
    size: usize,
    fixed: &str,
    strategy: Strategy,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    if !(MIN_GAME_SIZE..=MAX_GAME_SIZE).contains(&size) {
        return Err(EngineError::InvalidSize(size).into());
    }
    let fixed = FixedNumbers::parse(fixed)?;
    fixed.ensure_fits(size)?;

    tracing::info!(
        "Generating {} game(s) of {} numbers with strategy '{}'",
        count,
        size,
        strategy
    );

    let games: Vec<Combination> = (0..count)
        .map(|_| engine::generate(size, &fixed, strategy))
        .collect();
    let text = format_games(&games, strategy.as_str());

    match output {
        Some(path) => {
            tokio::fs::write(&path, text).await?;
            tracing::info!("Saved {} game(s) to {}", games.len(), path.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}

async fn handle_check(
    fetcher: &DrawRangeFetcher<LoteriasCaixaClient>,
    file: PathBuf,
    query: DateRangeQuery,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Loading games from: {}", file.display());
    let content = tokio::fs::read_to_string(&file).await?;
    let games = parse_games(&content);

    if games.is_empty() {
        return Err(format!("No valid games found in {}", file.display()).into());
    }
    tracing::info!("Loaded {} game(s)", games.len());

    let draws = fetcher.fetch_range(query).await;
    if draws.is_empty() {
        tracing::warn!("No draws between {} and {}", query.start, query.end);
        return Ok(());
    }

    let summaries = summarize_draws(&games, &draws);
    for summary in &summaries {
        print_summary(summary);
    }

    let stats = statistics(&summaries);
    println!();
    println!("Draws checked:        {}", summaries.len());
    println!("Combinations checked: {}", stats.combinations_checked);
    println!("Winning combinations: {}", stats.winning_combinations);
    println!("Total payout:         R$ {:.2}", stats.total_payout);
    for (hits, count) in &stats.hit_distribution {
        println!("  {} hits: {}", hits, count);
    }

    Ok(())
}

fn print_draw(draw: &Draw) {
    let marker = if draw.is_synthetic { " (synthetic)" } else { "" };
    println!(
        "Contest {} - {}{}: [{}]",
        draw.sequence,
        draw.date.format("%d/%m/%Y"),
        marker,
        format_numbers(&draw.numbers)
    );
}

fn print_summary(summary: &DrawSummary) {
    let marker = if summary.is_synthetic { " (synthetic)" } else { "" };
    println!(
        "Contest {} - {}{}: [{}] best {} hits, {} winning, R$ {:.2}",
        summary.sequence,
        summary.date.format("%d/%m/%Y"),
        marker,
        format_numbers(&summary.drawn),
        summary.best_hits,
        summary.winning_count,
        summary.total_payout
    );
    for result in summary.results.iter().filter(|r| r.hits >= 11) {
        println!(
            "    {} {} hits R$ {:.2}",
            result.combination, result.hits, result.payout
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_is_parsed_apart_from_archive_commands() {
        let cli = Cli::try_parse_from([
            "lotofacil", "generate", "--games", "3", "--size", "17", "--fixed", "1,2",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Generate { games: 3, size: 17, .. }
        ));

        let cli = Cli::try_parse_from([
            "lotofacil", "range", "--start", "2025-03-01", "--end", "2025-03-10",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Archive(ArchiveCommand::Range { .. })
        ));

        let cli = Cli::try_parse_from(["lotofacil", "draw", "3300"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Archive(ArchiveCommand::Draw { sequence: 3300 })
        ));
    }
}
