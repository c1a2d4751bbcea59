use crate::commands::{announce_copy, password_verdict, render_result};
use crate::infra::TerminalGauge;
use chrono::Local;
use clap::Args;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::sync::PoisonError;
use tokio::task::JoinHandle;
use trustscore::config::AppConfig;
use trustscore::error::AppError;
use trustscore::workflows::questionnaire::breach::{PwnedPasswordsClient, SimulatedEmailCheck};
use trustscore::workflows::questionnaire::domain::ProfileField;
use trustscore::workflows::questionnaire::gauge::{GaugeAnimator, GaugeGeometry};
use trustscore::workflows::questionnaire::report::ReportExporter;
use trustscore::workflows::questionnaire::share::share_link;
use trustscore::workflows::questionnaire::validation::phone_status;
use trustscore::workflows::questionnaire::{
    EmailBreachStatus, QuestionnaireSession, StepStatus, WizardStep,
};

#[derive(Args, Debug, Default)]
pub(crate) struct WizardArgs {
    /// Seed for the simulated email breach check (random when omitted)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Skip the report export and share prompts at the end
    #[arg(long)]
    pub(crate) no_export: bool,
}

pub(crate) async fn run_wizard(args: WizardArgs, config: &AppConfig) -> Result<(), AppError> {
    let delay = config.breach.email_check_delay;
    let mut email_check = BackgroundEmailCheck::new(match args.seed {
        Some(seed) => SimulatedEmailCheck::seeded(seed, delay),
        None => SimulatedEmailCheck::new(delay),
    });
    let client = PwnedPasswordsClient::new(config.breach.api_url.as_str(), config.breach.timeout)?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let mut session = QuestionnaireSession::new();

    if !fill_questionnaire(&mut session, &mut prompter, &mut email_check, &client).await? {
        prompter.say("\nQuestionnaire closed before results.")?;
        return Ok(());
    }
    let Some(result) = session.result().cloned() else {
        return Ok(());
    };

    let mut animator =
        GaugeAnimator::new(TerminalGauge::new(io::stdout()), GaugeGeometry::default());
    if let Err(err) = animator.animate(result.score).join().await {
        tracing::warn!(error = %err, "gauge animation aborted");
    }
    animator
        .surface()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .finish();
    render_result(&mut io::stdout().lock(), &result)?;

    if args.no_export {
        return Ok(());
    }

    if prompter.confirm("\nExport a PDF report?")? {
        let path = &config.export.report_path;
        if let Some(snapshot) = session.report_snapshot(Local::now().date_naive()) {
            let exporter: ReportExporter = ReportExporter::default();
            match exporter.export_to(&snapshot, path) {
                Ok(_) => prompter.say(&format!("Report saved to {}", path.display()))?,
                Err(err) => prompter.say(&format!("Export failed: {err}"))?,
            }
        }
    }

    if prompter.confirm("Create a share link?")? {
        let link = share_link(&config.export.share_base_url, &mut rand::rng());
        prompter.say(&link)?;
        announce_copy(&link);
    }
    Ok(())
}

/// Walks every step until results are computed. Returns `false` if input ran out first.
pub(crate) async fn fill_questionnaire<R, W, G>(
    session: &mut QuestionnaireSession,
    prompter: &mut Prompter<R, W>,
    email_check: &mut BackgroundEmailCheck<G>,
    client: &PwnedPasswordsClient,
) -> Result<bool, AppError>
where
    R: BufRead,
    W: Write,
    G: Rng + Send + 'static,
{
    loop {
        if let Some(status) = email_check.collect_if_finished(session).await {
            prompter.say(status.label())?;
        }
        let step = session.current_step();
        prompter.say(&format!("\n{}", progress_line(session)))?;

        match step {
            WizardStep::Identity => {
                let Some(name) = prompter.ask(ProfileField::Name.label())? else {
                    return Ok(false);
                };
                let Some(email) = prompter.ask(ProfileField::Email.label())? else {
                    return Ok(false);
                };
                let Some(phone) = prompter.ask("Phone (8-15 digits)")? else {
                    return Ok(false);
                };
                session.update_profile(|profile| {
                    profile.name = name;
                    profile.email = email;
                    profile.phone = phone;
                });

                if let Some(status) = phone_status(&session.profile().phone) {
                    prompter.say(status.message())?;
                }
                if email_check.start(session).await {
                    prompter.say("Checking email against known breaches in the background...")?;
                }
            }
            WizardStep::Social => {
                for field in [ProfileField::LinkedIn, ProfileField::GitHub, ProfileField::Twitter] {
                    let Some(value) = prompter.ask(&format!("{} (optional)", field.label()))?
                    else {
                        return Ok(false);
                    };
                    session.update_profile(|profile| match field {
                        ProfileField::LinkedIn => profile.linkedin = value,
                        ProfileField::GitHub => profile.github = value,
                        _ => profile.twitter = value,
                    });
                }
            }
            WizardStep::Security => {
                let Some(password) = prompter.ask("Sample password (optional, input is visible)")?
                else {
                    return Ok(false);
                };
                let mfa_enabled = prompter.confirm("Is MFA / 2FA enabled on your key accounts?")?;
                session.update_profile(|profile| {
                    profile.password = password;
                    profile.mfa_enabled = mfa_enabled;
                });

                if !session.profile().password.is_empty()
                    && prompter.confirm(
                        "Check it against known breaches? Only a 5-character hash prefix is sent.",
                    )?
                {
                    match session.check_password(client).await {
                        Ok(count) => prompter.say(&password_verdict(count))?,
                        Err(err) => prompter.say(&format!("Breach check failed: {err}"))?,
                    }
                }
            }
            WizardStep::Credibility => {
                let Some(job_title) = prompter.ask(ProfileField::JobTitle.label())? else {
                    return Ok(false);
                };
                let Some(company) =
                    prompter.ask(&format!("{} (optional)", ProfileField::Company.label()))?
                else {
                    return Ok(false);
                };
                session.update_profile(|profile| {
                    profile.job_title = job_title;
                    profile.company = company;
                });
                if let Some(status) = email_check.collect(session).await {
                    prompter.say(status.label())?;
                }

                match session.show_results() {
                    Ok(_) => return Ok(true),
                    Err(err) => {
                        prompter.say(&err.to_string())?;
                        continue;
                    }
                }
            }
            WizardStep::Results => return Ok(session.result().is_some()),
        }

        if let Err(err) = session.next_step() {
            prompter.say(&err.to_string())?;
        }
    }
}

fn progress_line(session: &QuestionnaireSession) -> String {
    session
        .wizard()
        .progress()
        .into_iter()
        .map(|(step, status)| match status {
            StepStatus::Completed => format!("[x] {}", step.label()),
            StepStatus::Active => format!("[>] {}", step.label()),
            StepStatus::Pending => format!("[ ] {}", step.label()),
        })
        .collect::<Vec<_>>()
        .join("  ")
}

type EmailCheckTask<G> = JoinHandle<(SimulatedEmailCheck<G>, String, EmailBreachStatus)>;

/// Runs the simulated email check on the runtime so prompts keep flowing.
pub(crate) struct BackgroundEmailCheck<G> {
    idle: Option<SimulatedEmailCheck<G>>,
    running: Option<EmailCheckTask<G>>,
}

impl<G: Rng + Send + 'static> BackgroundEmailCheck<G> {
    pub(crate) fn new(checker: SimulatedEmailCheck<G>) -> Self {
        Self {
            idle: Some(checker),
            running: None,
        }
    }

    /// Spawns a check for the session's email unless it is already known.
    /// A check still in flight is collected first.
    pub(crate) async fn start(&mut self, session: &mut QuestionnaireSession) -> bool {
        self.collect(session).await;
        let Some(email) = session.pending_email_check() else {
            return false;
        };
        let Some(mut checker) = self.idle.take() else {
            return false;
        };

        self.running = Some(tokio::spawn(async move {
            let status = checker.check(&email).await;
            (checker, email, status)
        }));
        true
    }

    pub(crate) async fn collect_if_finished(
        &mut self,
        session: &mut QuestionnaireSession,
    ) -> Option<EmailBreachStatus> {
        if self.running.as_ref().is_some_and(JoinHandle::is_finished) {
            self.collect(session).await
        } else {
            None
        }
    }

    /// Waits for the check in flight. `None` if nothing ran or the email changed meanwhile.
    pub(crate) async fn collect(
        &mut self,
        session: &mut QuestionnaireSession,
    ) -> Option<EmailBreachStatus> {
        let task = self.running.take()?;
        match task.await {
            Ok((checker, email, status)) => {
                self.idle = Some(checker);
                session.record_email_check(email, status).then_some(status)
            }
            Err(err) => {
                tracing::warn!(error = %err, "email breach check aborted");
                None
            }
        }
    }
}

/// Line-oriented prompts over any reader/writer pair.
pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub(crate) fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// `None` once input is exhausted.
    pub(crate) fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Anything but an explicit yes counts as no, including end of input.
    pub(crate) fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.ask(&format!("{question} [y/N]"))?;
        Ok(answer.is_some_and(|value| {
            matches!(value.trim().to_ascii_lowercase().as_str(), "y" | "yes")
        }))
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}
