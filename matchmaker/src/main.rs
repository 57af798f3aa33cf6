use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use matchmaker::config::{Config, LogFormat, LoggingConfig};
use matchmaker::models::{sample_directory, UserDirectory};
use matchmaker::services::{MatchRun, MatchmakingService};

#[derive(Parser)]
#[command(name = "matchmaker")]
#[command(about = "Score how similar users are from their memos and task histories")]
struct Args {
    /// JSON file with `memos` and `task_histories`; defaults to the built-in sample
    #[arg(long)]
    input: Option<PathBuf>,

    /// Decimal places kept in scores
    #[arg(long)]
    precision: Option<u32>,

    /// Leave out entries scoring below this value
    #[arg(long)]
    min_score: Option<f64>,

    /// Print this user's ranked matches instead of the full matrix
    #[arg(long)]
    user: Option<String>,

    /// Limit the ranked matches printed with --user
    #[arg(long, requires = "user")]
    top: Option<usize>,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.input {
            config.input.path = Some(path.display().to_string());
        }
        if let Some(precision) = self.precision {
            config.scoring.precision = precision;
        }
        if let Some(min_score) = self.min_score {
            config.scoring.min_score = min_score;
        }
    }
}

/// The document printed on stdout: a user's ranked matches with `--user`,
/// the full score matrix otherwise.
fn render(service: &MatchmakingService, run: &MatchRun, args: &Args) -> anyhow::Result<String> {
    let output = match &args.user {
        Some(user) => {
            let matches = service.top_matches(run, user, args.top)?;
            serde_json::to_string_pretty(&matches)?
        }
        None => run.scores.to_json_pretty()?,
    };
    Ok(output)
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "matchmaker=info".into());

    // stdout carries the score document only
    match logging.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    init_tracing(&LoggingConfig::from_env());

    let mut config = Config::from_env();
    args.apply(&mut config);
    config.validate()?;

    let directory = match &config.input.path {
        Some(path) => {
            tracing::info!("Loading user directory from {}...", path);
            UserDirectory::load(path)
                .with_context(|| format!("failed to load user directory from {path}"))?
        }
        None => sample_directory(),
    };

    let service = MatchmakingService::new(config.scoring.clone());
    let run = service.run(&directory);

    println!("{}", render(&service, &run, &args)?);

    Ok(())
}
