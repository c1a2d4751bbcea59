use crate::infra::{load_profile, ArboardClipboard, Osc52Clipboard};
use chrono::Local;
use clap::{Args, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use trustscore::config::AppConfig;
use trustscore::error::AppError;
use trustscore::workflows::questionnaire::breach::PwnedPasswordsClient;
use trustscore::workflows::questionnaire::report::{ReportExporter, ReportSnapshot};
use trustscore::workflows::questionnaire::scoring::group_thousands;
use trustscore::workflows::questionnaire::share::{copy_share_link, share_link, CopiedVia};
use trustscore::workflows::questionnaire::{
    compute_score, EmailBreachStatus, ProfileInput, ScoreResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum EmailBreachArg {
    Safe,
    Breached,
}

impl From<EmailBreachArg> for EmailBreachStatus {
    fn from(value: EmailBreachArg) -> Self {
        match value {
            EmailBreachArg::Safe => EmailBreachStatus::Safe,
            EmailBreachArg::Breached => EmailBreachStatus::Breached,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ProfileArgs {
    /// Profile JSON file with any of: name, email, phone, linkedin, github,
    /// twitter, password, mfa_enabled, job_title, company
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Outcome of an email breach check; unchecked when omitted
    #[arg(long, value_enum)]
    pub(crate) email_breach: Option<EmailBreachArg>,
    /// Number of breaches the password appears in; unchecked when omitted
    #[arg(long)]
    pub(crate) password_breaches: Option<u64>,
}

impl ProfileArgs {
    fn evaluate(&self) -> Result<(ProfileInput, ScoreResult), AppError> {
        let profile = load_profile(&self.profile)?;
        let email_breach = self
            .email_breach
            .map_or(EmailBreachStatus::Unchecked, EmailBreachStatus::from);
        let result = compute_score(&profile, email_breach, self.password_breaches);
        Ok((profile, result))
    }
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Print the full result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Destination file; defaults to TRUST_REPORT_PATH
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let (_, result) = args.profile.evaluate()?;
    let mut stdout = io::stdout().lock();

    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &result)?;
        writeln!(stdout)?;
    } else {
        render_result(&mut stdout, &result)?;
    }
    Ok(())
}

pub(crate) async fn run_check_password(config: &AppConfig) -> Result<(), AppError> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']);

    let client = PwnedPasswordsClient::new(config.breach.api_url.as_str(), config.breach.timeout)?;
    let count = client.breach_count(password).await?;
    println!("{}", password_verdict(count));
    Ok(())
}

pub(crate) fn run_report(args: ReportArgs, config: &AppConfig) -> Result<(), AppError> {
    let (profile, result) = args.profile.evaluate()?;
    let path = args
        .out
        .unwrap_or_else(|| config.export.report_path.clone());

    let snapshot = ReportSnapshot::capture(&profile, &result, Local::now().date_naive());
    let exporter: ReportExporter = ReportExporter::default();
    let bytes = exporter.export_to(&snapshot, &path)?;

    println!("Report saved to {} ({bytes} bytes)", path.display());
    Ok(())
}

pub(crate) fn run_share(config: &AppConfig) -> Result<(), AppError> {
    let link = share_link(&config.export.share_base_url, &mut rand::rng());
    println!("{link}");
    announce_copy(&link);
    Ok(())
}

pub(crate) fn announce_copy(link: &str) {
    let mut system = ArboardClipboard;
    let mut terminal = Osc52Clipboard::new(io::stdout());
    match copy_share_link(&mut system, &mut terminal, link) {
        Ok(CopiedVia::Primary) => println!("Share link copied to clipboard."),
        Ok(CopiedVia::Fallback) => println!("Share link sent to the terminal clipboard."),
        Err(err) => {
            tracing::warn!(error = %err, "share link not copied");
            println!("Copy the link above manually.");
        }
    }
}

pub(crate) fn password_verdict(count: u64) -> String {
    if count == 0 {
        "Password not found in known breaches.".to_string()
    } else {
        format!("Password found in {} breaches.", group_thousands(count))
    }
}

pub(crate) fn render_result<W: Write>(out: &mut W, result: &ScoreResult) -> io::Result<()> {
    writeln!(out, "Trust score: {}", result.score_label())?;
    writeln!(out, "{}", result.risk_label())?;
    writeln!(
        out,
        "Average user: {}/100 (you: {})",
        result.comparison.average, result.comparison.yours
    )?;

    writeln!(out, "\nInsights")?;
    for insight in &result.insights {
        writeln!(out, "[{}] {}", insight.tone.marker(), insight.text)?;
    }

    writeln!(out, "\nRecommendations")?;
    for recommendation in &result.recommendations {
        writeln!(out, "- {}", recommendation.text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_groups_thousands() {
        assert_eq!(password_verdict(0), "Password not found in known breaches.");
        assert_eq!(
            password_verdict(3_861_493),
            "Password found in 3,861,493 breaches."
        );
    }

    #[test]
    fn renders_score_insights_and_recommendations() {
        let profile = ProfileInput {
            phone: "12345678".to_string(),
            ..ProfileInput::default()
        };
        let result = compute_score(&profile, EmailBreachStatus::Unchecked, None);

        let mut out = Vec::new();
        render_result(&mut out, &result).expect("render to memory");
        let text = String::from_utf8(out).expect("utf8");

        assert!(text.starts_with("Trust score: 60/100\nRisk: MEDIUM\n"));
        assert!(text.contains("[+] Valid phone"));
        assert!(text.contains("[!] LinkedIn missing"));
        assert!(text.contains("- Enable MFA / 2FA on key accounts (+10)."));
    }
}
