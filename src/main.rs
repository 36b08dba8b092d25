use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use matchanalyzer::models::{AnalysisReport, Competition, MatchCount, MatchupSelection};
use matchanalyzer::render::{format_markdown, format_text};
use matchanalyzer::web::{self, AppState};
use matchanalyzer::{
    AnalysisPipeline, ClaudeProvider, Config, FootballDataClient, MatchDataSource,
    PipelineConfig,
};

#[derive(Parser, Debug)]
#[command(name = "matchanalyzer")]
#[command(version = "0.1.0")]
#[command(about = "Compare the recent form of two football teams")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the analysis form over HTTP
    Serve {
        /// Address to bind (overrides BIND_ADDR)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// List the teams of a competition
    Teams {
        /// Competition code (PL, BL1, SA, PD, FL1, CL)
        #[arg(short, long)]
        league: String,
    },

    /// Compare two teams from the command line
    Compare {
        #[arg(long)]
        league_a: String,
        #[arg(long)]
        team_a: u64,
        #[arg(long)]
        league_b: String,
        #[arg(long)]
        team_b: u64,

        /// Number of recent matches to analyze (3-10)
        #[arg(short, long)]
        matches: Option<u32>,

        /// Output format (json, text, markdown)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("matchanalyzer=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Both keys are required before anything else runs
    let config = Config::from_env()?;

    let football = FootballDataClient::from_config(&config)?;

    match args.command {
        Command::Teams { league } => {
            let competition = Competition::from_code(&league)?;
            let teams = football.list_teams(competition).await?;
            println!("{}", competition);
            for team in teams {
                println!("  {:>6}  {}", team.id, team.name);
            }
        }
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.bind_addr.clone());
            let pipeline = build_pipeline(&config, football)?;
            web::serve(Arc::new(AppState::new(pipeline)), &bind).await?;
        }
        Command::Compare {
            league_a,
            team_a,
            league_b,
            team_b,
            matches,
            format,
            output,
        } => {
            let selection = MatchupSelection {
                competition_a: Competition::from_code(&league_a)?,
                team_a,
                competition_b: Competition::from_code(&league_b)?,
                team_b,
                match_count: matches.map(MatchCount::new).transpose()?,
            };
            let pipeline = build_pipeline(&config, football)?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
            spinner.set_message("Fetching matches and generating analysis...");
            spinner.enable_steady_tick(Duration::from_millis(120));

            let result = pipeline.analyze(&selection).await;
            spinner.finish_and_clear();

            let report = result.map_err(|e| anyhow::anyhow!(e.user_message()))?;
            output_report(&report, &format, output.as_deref())?;
        }
    }

    Ok(())
}

fn build_pipeline(config: &Config, football: FootballDataClient) -> anyhow::Result<AnalysisPipeline> {
    let llm = ClaudeProvider::from_config(config)?;
    Ok(AnalysisPipeline::new(football, llm, PipelineConfig::from(config)))
}

fn output_report(report: &AnalysisReport, format: &str, path: Option<&str>) -> anyhow::Result<()> {
    let output = match format {
        "json" => serde_json::to_string_pretty(report)?,
        "markdown" => format_markdown(report),
        _ => format_text(report),
    };

    if let Some(path) = path {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}
