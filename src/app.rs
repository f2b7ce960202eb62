use crate::cli::Cli;
use crate::config::Config;
use crate::google::{CalendarClient, GoogleAuth, TasksClient};
use crate::llm::{OpenAiProvider, Provider, build_http_client};
use crate::prompt::{GREETING, Prompts};
use crate::session::{Console, Session, SessionSettings};
use anyhow::{Result, bail};
use std::sync::Arc;
use tokio::io::BufReader;

/// Resolve configuration in precedence order: file, then environment, then CLI.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_or_init_at(path)?,
        None => Config::load_or_init()?,
    };
    config.apply_env_overrides();
    cli.apply_to(&mut config);
    config.validate()?;
    Ok(config)
}

/// Build every collaborator and run the interactive session on stdin.
pub async fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    if config.api_key.is_none() {
        bail!("The OPENAI_API_KEY environment variable (or api_key in config.toml) must be set.");
    }

    let prompts = Prompts::render(&config.time_zone, cli.reference_date())?;

    let provider: Arc<dyn Provider> = Arc::new(OpenAiProvider::with_base_url(
        config.api_key.as_deref(),
        &config.llm.base_url,
    ));

    let http = build_http_client();
    let auth = Arc::new(GoogleAuth::load(&config.token_path(), http.clone())?);
    let calendar = Arc::new(CalendarClient::new(
        Arc::clone(&auth),
        http.clone(),
        &config.google.calendar_base_url,
        &config.google.calendar_id,
    ));
    let tasks = Arc::new(TasksClient::new(
        auth,
        http,
        &config.google.tasks_base_url,
        &config.google.tasklist_id,
    ));

    tracing::info!(
        model = %config.model,
        history_size = config.history_size,
        reminder_interval = config.reminder_interval,
        "session starting"
    );

    let mut session = Session::new(
        &prompts,
        SessionSettings::from_config(&config),
        provider,
        calendar,
        tasks,
    );
    let mut console = Console::stdio();
    console.banner(GREETING);
    session.run(BufReader::new(tokio::io::stdin()), &mut console).await
}
