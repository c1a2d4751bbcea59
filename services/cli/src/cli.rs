use crate::commands::{run_check_password, run_report, run_score, run_share, ReportArgs, ScoreArgs};
use crate::wizard::{run_wizard, WizardArgs};
use clap::{Parser, Subcommand};
use trustscore::config::AppConfig;
use trustscore::error::AppError;
use trustscore::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Human Digital Trust Score",
    about = "Score your digital footprint, check breaches, and export a private report",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk through the questionnaire interactively (default command)
    Wizard(WizardArgs),
    /// Score a profile read from a JSON file
    Score(ScoreArgs),
    /// Look up a password read from stdin against known breaches
    CheckPassword,
    /// Export the masked PDF report for a profile read from a JSON file
    Report(ReportArgs),
    /// Print a share link and copy it to the clipboard
    Share,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Wizard(WizardArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Wizard(args) => run_wizard(args, &config).await,
        Command::Score(args) => run_score(args),
        Command::CheckPassword => run_check_password(&config).await,
        Command::Report(args) => run_report(args, &config),
        Command::Share => run_share(&config),
    }
}
