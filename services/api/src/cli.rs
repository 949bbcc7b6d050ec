use crate::infra::{load_advisor, CatalogArgs};
use crate::prompt::collect_preferences;
use crate::render::{write_recommendations, write_shortlist};
use crate::server;
use card_advisor::advisor::RecommendationsResponse;
use card_advisor::config::AppConfig;
use card_advisor::error::AppError;
use card_advisor::preferences::PreferenceForm;
use card_advisor::telemetry;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "card-advisor",
    about = "Recommend credit cards from a static catalog based on a short questionnaire",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank the catalog for answers given as flags
    Recommend(RecommendArgs),
    /// Ask the questionnaire interactively and print recommendations
    Interview(InterviewArgs),
    /// Filter the catalog with the strict/relaxed shortlist
    Shortlist(RecommendArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured card dataset
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
}

/// Questionnaire answers passed on the command line. Values are validated together so every
/// problem is reported at once.
#[derive(Args, Debug)]
pub(crate) struct PreferenceArgs {
    /// Where you spend the most: groceries, shopping, travel, dining or fuel
    #[arg(long)]
    category: String,
    /// Whether you pay bills on-time or delay
    #[arg(long)]
    repayment: String,
    /// Highest annual fee you accept
    #[arg(long)]
    fee_comfort: String,
    /// Preferred reward: cashback, travel or shopping
    #[arg(long)]
    reward: String,
    /// Lowest credit limit you accept
    #[arg(long)]
    min_credit_limit: String,
    /// Whether you travel or shop internationally (yes/no)
    #[arg(long, default_value = "no")]
    international: String,
    /// Whether you want EMI conversion (yes/no)
    #[arg(long, default_value = "no")]
    emi: String,
    /// Digital-first or branch banking
    #[arg(long, default_value = "digital")]
    channel: String,
}

impl PreferenceArgs {
    fn to_form(&self) -> PreferenceForm {
        PreferenceForm {
            spending_category: Some(self.category.clone()),
            repayment_behavior: Some(self.repayment.clone()),
            fee_comfort: Some(self.fee_comfort.clone()),
            reward_type: Some(self.reward.clone()),
            min_credit_limit: Some(self.min_credit_limit.clone()),
            intl: Some(self.international.clone()),
            emi: Some(self.emi.clone()),
            digital_pref: Some(self.channel.clone()),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    #[command(flatten)]
    preferences: PreferenceArgs,
    #[command(flatten)]
    catalog: CatalogArgs,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct InterviewArgs {
    #[command(flatten)]
    catalog: CatalogArgs,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Interview(args) => run_interview(args),
        Command::Shortlist(args) => run_shortlist(args),
    }
}

fn load_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let config = load_config()?;
    let (advisor, limit) = load_advisor(&config, &args.catalog)?;
    let recommendations = advisor.recommend_form(&args.preferences.to_form(), limit)?;

    let mut out = std::io::stdout().lock();
    if args.json {
        let response = RecommendationsResponse {
            max_score: advisor.max_score(),
            recommendations,
        };
        let body = serde_json::to_string_pretty(&response).map_err(std::io::Error::from)?;
        writeln!(out, "{body}")?;
    } else {
        write_recommendations(&mut out, &recommendations)?;
    }
    Ok(())
}

fn run_shortlist(args: RecommendArgs) -> Result<(), AppError> {
    let config = load_config()?;
    let (advisor, limit) = load_advisor(&config, &args.catalog)?;
    let shortlist = advisor.shortlist_form(&args.preferences.to_form(), limit)?;

    let mut out = std::io::stdout().lock();
    if args.json {
        let body = serde_json::to_string_pretty(&shortlist).map_err(std::io::Error::from)?;
        writeln!(out, "{body}")?;
    } else {
        write_shortlist(&mut out, &shortlist)?;
    }
    Ok(())
}

fn run_interview(args: InterviewArgs) -> Result<(), AppError> {
    let config = load_config()?;
    let (advisor, limit) = load_advisor(&config, &args.catalog)?;

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout().lock();
    let preferences = collect_preferences(&mut input, &mut out)?;
    let recommendations = advisor.recommend(&preferences, limit)?;

    writeln!(out)?;
    write_recommendations(&mut out, &recommendations)?;
    Ok(())
}
