//! Decision Console - terminal client for the decision support backend
//!
//! This is the main entry point for the decision-console binary. The
//! console seeds entity stores, renders the task, process, and impact
//! boards, keeps them fresh on an interval in watch mode, and drives the
//! decision review workflow against the backend.

mod api;
mod cli;
mod config;
mod dashboard;
mod entities;
mod error;
mod fixtures;
mod logging;
mod refresh;
mod store;
mod version;

use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::api::DecisionClient;
use crate::cli::{Cli, Commands};
use crate::config::{ConsoleConfig, RefreshSettings};
use crate::entities::{Persona, ProcessInstance, Prompt, Team, Tool, UserTask};
use crate::error::{Error, Result};
use crate::logging::LogGuards;
use crate::refresh::RefreshHandle;
use crate::store::confirm::ConfirmGate;
use crate::store::view::FilterCriteria;
use crate::store::EntityStore;

fn main() -> Result<()> {
    // Parse CLI arguments first (before logging, so we know verbosity)
    let cli = Cli::parse();

    // For commands that don't need full logging, use simple setup
    match &cli.command {
        Commands::Version => {
            version::print_version();
            return Ok(());
        }
        Commands::Config { subcommand } => {
            // Config commands use minimal logging
            logging::init_simple(tracing::Level::WARN)?;
            return handle_config_command(subcommand.clone());
        }
        Commands::Run { .. } => {}
    }

    // Load configuration for the run command
    let opts = match &cli.command {
        Commands::Run {
            config,
            project,
            watch,
            submit,
            note,
            export,
        } => RunOptions {
            config_path: config.clone(),
            project: project.clone(),
            watch: *watch,
            submit: *submit,
            note: note.clone(),
            export: export.clone(),
        },
        _ => unreachable!(),
    };

    // Load config (or use defaults)
    let config = match ConsoleConfig::load(opts.config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            // Use formatted error for terminal
            eprint!("{}", e.format_for_terminal());
            std::process::exit(e.exit_code());
        }
    };

    // Initialize logging with config settings
    // The guards must be kept alive for the lifetime of the program
    let _log_guards = init_logging_from_config(&config, cli.verbose, cli.quiet)?;

    // Log version info at startup
    let build = version::build_info();
    info!(version = %build.version, "Starting Decision Console");

    run_console(config, opts)
}

/// Options carried from the `run` command line into the console.
#[derive(Debug, Default)]
struct RunOptions {
    config_path: Option<String>,
    project: Option<String>,
    watch: bool,
    submit: bool,
    note: Option<String>,
    export: Option<String>,
}

/// Initialize logging from configuration
fn init_logging_from_config(config: &ConsoleConfig, verbose: u8, quiet: bool) -> Result<LogGuards> {
    logging::init_logging(&config.logging, verbose, quiet)
}

/// Run the console
fn run_console(config: ConsoleConfig, opts: RunOptions) -> Result<()> {
    info!(
        backend_url = %config.backend.base_url,
        auto_refresh = config.refresh.auto_refresh,
        interval_secs = config.refresh.interval_secs,
        "Configuration loaded"
    );

    // Ensure the data directory exists
    ensure_data_dir(&config)?;

    // Build and run the tokio runtime
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(num_cpus::get().min(4))
        .thread_name("decision-console")
        .build()
        .map_err(|e| Error::Internal(format!("Failed to create async runtime: {}", e)))?;

    runtime.block_on(async_console_main(config, opts))
}

/// Ensure the data directory exists
fn ensure_data_dir(config: &ConsoleConfig) -> Result<()> {
    let path = config.data_dir();
    if !path.exists() {
        std::fs::create_dir_all(&path).map_err(|e| Error::IoWrite {
            path: path.clone(),
            source: e,
        })?;
        info!(path = %path.display(), "Created data directory");
    }
    Ok(())
}

/// Async console main
async fn async_console_main(config: ConsoleConfig, opts: RunOptions) -> Result<()> {
    // Seed the stores so every board renders without a backend
    let tasks = Arc::new(RwLock::new(EntityStore::seeded(fixtures::seed_tasks())));
    let instances = Arc::new(RwLock::new(EntityStore::seeded(fixtures::seed_instances())));
    let context = ContextStores::seeded();
    let definitions = fixtures::seed_definitions();
    let impacted = fixtures::seed_impacted_tasks();
    let threads = fixtures::seed_threads();

    render_boards(&tasks, &instances, &context, &definitions, threads.len(), &impacted);

    // Project actions against the backend
    if let Some(ref project_id) = opts.project {
        let client = DecisionClient::new(
            &config.backend.base_url,
            config.backend.request_timeout_secs,
        )?;
        if let Some(ref note) = opts.note {
            post_chat_note(&client, project_id, note).await;
        }
        if opts.submit {
            submit_project_for_approval(&client, project_id).await?;
        }
        if let Some(ref export_path) = opts.export {
            export_white_paper(&client, project_id, Path::new(export_path)).await?;
        }
        render_decision_review(&client, project_id).await;
    }

    if !opts.watch {
        return Ok(());
    }

    let refreshers = start_refreshers(&config.refresh, &tasks, &instances);

    let shutdown_signal = tokio::signal::ctrl_c();
    tokio::pin!(shutdown_signal);

    let interval = Duration::from_secs(config.refresh.interval_secs);
    let mut redraw_timer = tokio::time::interval(interval);
    redraw_timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    // The first tick fires immediately and we already rendered
    redraw_timer.tick().await;

    info!("Watch mode started");

    loop {
        tokio::select! {
            // Ctrl+C shutdown
            _ = &mut shutdown_signal => {
                info!("Shutdown signal received");
                break;
            }

            _ = redraw_timer.tick() => {
                render_boards(&tasks, &instances, &context, &definitions, threads.len(), &impacted);
            }
        }
    }

    // Stop refreshers; in-flight fetch results are discarded
    for handle in refreshers {
        handle.shutdown().await;
    }

    info!("Console shutting down");
    Ok(())
}

/// Start the store refresh loops, honoring the configured toggle. With
/// auto refresh off the boards still redraw, from whatever the stores
/// currently hold.
///
/// Store fetches are placeholders until the engine endpoints land; they
/// re-apply the seed data the way the backend would serve it.
fn start_refreshers(
    settings: &RefreshSettings,
    tasks: &Arc<RwLock<EntityStore<UserTask>>>,
    instances: &Arc<RwLock<EntityStore<ProcessInstance>>>,
) -> Vec<RefreshHandle> {
    if !settings.auto_refresh {
        info!("Auto refresh is disabled; stores will not be refetched");
        return Vec::new();
    }

    let interval = Duration::from_secs(settings.interval_secs);
    vec![
        refresh::spawn_refresh(Arc::clone(tasks), interval, || async {
            Ok(fixtures::seed_tasks())
        }),
        refresh::spawn_refresh(Arc::clone(instances), interval, || async {
            Ok(fixtures::seed_instances())
        }),
    ]
}

/// The four context stores behind the configuration screen.
struct ContextStores {
    personas: EntityStore<Persona>,
    prompts: EntityStore<Prompt>,
    tools: EntityStore<Tool>,
    teams: EntityStore<Team>,
}

impl ContextStores {
    fn seeded() -> Self {
        Self {
            personas: EntityStore::seeded(fixtures::seed_personas()),
            prompts: EntityStore::seeded(fixtures::seed_prompts()),
            tools: EntityStore::seeded(fixtures::seed_tools()),
            teams: EntityStore::seeded(fixtures::seed_teams()),
        }
    }
}

/// Render all boards from the current store contents
fn render_boards(
    tasks: &Arc<RwLock<EntityStore<UserTask>>>,
    instances: &Arc<RwLock<EntityStore<ProcessInstance>>>,
    context: &ContextStores,
    definitions: &[entities::ProcessDefinition],
    thread_count: usize,
    impacted: &[entities::ImpactedTask],
) {
    let now = Utc::now();

    let task_board = {
        let store = tasks.read();
        dashboard::render_task_board(store.list(), &FilterCriteria::new(), now)
    };
    let process_board = {
        let store = instances.read();
        dashboard::render_process_board(definitions, store.list(), now)
    };
    let context_board = dashboard::render_context_board(
        &context.personas,
        &context.prompts,
        &context.tools,
        &context.teams,
    );
    let metrics = entities::AnalysisMetrics::summarize(thread_count, impacted);
    let impact_report = dashboard::render_impact_report(&metrics, impacted);

    println!("{}", task_board);
    println!("{}", process_board);
    println!("{}", context_board);
    println!("{}", impact_report);
}

/// Submit the project's current white paper for approval, generating one
/// first if the backend has none yet. Submission is irreversible, so it
/// goes through the confirmation gate before anything is sent.
async fn submit_project_for_approval(client: &DecisionClient, project_id: &str) -> Result<()> {
    if !confirm_submission(project_id)? {
        println!("Submission cancelled.");
        return Ok(());
    }

    let paper = match client.fetch_white_paper(project_id).await {
        Ok(paper) => paper,
        Err(Error::ApiStatus { status: 404, .. }) => {
            info!(project = %project_id, "No white paper yet, generating one");
            client.generate_white_paper(project_id).await?
        }
        Err(e) => return Err(e),
    };

    let request = api::ApprovalRequest {
        project_id: project_id.to_string(),
        white_paper_id: paper.project_id,
        submitted_by: cli::default_operator_name(),
        submitted_at: Utc::now().to_rfc3339(),
        comments: None,
    };
    let decision = client.submit_for_approval(&request).await?;
    info!(
        project = %project_id,
        approval_id = %decision.approval_id,
        status = %decision.status,
        "Submitted for approval"
    );
    println!(
        "Submitted for approval: {} ({})",
        decision.approval_id, decision.status
    );
    Ok(())
}

/// Ask the operator to confirm the submission on stdin. The protected
/// action only runs through the gate's confirm, so an empty or negative
/// answer can never submit.
fn confirm_submission(project_id: &str) -> Result<bool> {
    let mut confirmed = false;
    let mut gate = ConfirmGate::new();
    gate.open(
        format!(
            "Submit the white paper for {} for approval? [y/N] ",
            project_id
        ),
        || confirmed = true,
    );

    if let Some(prompt) = gate.prompt() {
        print!("{}", prompt);
        std::io::stdout().flush()?;
    }

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => {
            gate.confirm();
        }
        _ => gate.cancel(),
    }
    drop(gate);

    Ok(confirmed)
}

/// Post a note to the project's advisory chat as the local operator.
async fn post_chat_note(client: &DecisionClient, project_id: &str, content: &str) {
    let message = api::NewChatMessage {
        sender: api::ChatSender::User,
        sender_name: cli::default_operator_name(),
        content: content.to_string(),
        project_id: project_id.to_string(),
    };
    match client.send_chat_message(project_id, &message).await {
        Ok(sent) => println!("Posted note {} to the advisory chat", sent.id),
        Err(e) => {
            warn!(project = %project_id, error = %e, "Could not post chat note");
        }
    }
}

/// Export the project's white paper as PDF to the given path.
async fn export_white_paper(client: &DecisionClient, project_id: &str, path: &Path) -> Result<()> {
    let bytes = client.export_pdf(project_id).await?;
    std::fs::write(path, &bytes).map_err(|e| Error::IoWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    println!(
        "Exported white paper to {} ({} bytes)",
        path.display(),
        bytes.len()
    );
    Ok(())
}

/// Fetch and render the decision review for one project
async fn render_decision_review(client: &DecisionClient, project_id: &str) {
    match client.fetch_summary(project_id).await {
        Ok(summary) => {
            println!("Decision Review: {}", summary.project_name);
            println!("  Decision: {}", summary.decision);
            println!("  Process:  {}", summary.process_name);
            println!("  Status:   {}", summary.status);
            println!("  Participants: {}", summary.participants.join(", "));
            for finding in &summary.key_findings {
                println!("  Finding: {}", finding);
            }
            for risk in &summary.risks {
                println!("  Risk: {}", risk);
            }
        }
        Err(e) => {
            warn!(project = %project_id, error = %e, "Could not fetch decision summary");
        }
    }

    match client.fetch_approval_status(project_id).await {
        Ok(approval) => {
            println!("  Approval: {}", approval.status);
            for comment in &approval.comments {
                println!("    Comment: {}", comment);
            }
        }
        Err(e) => {
            warn!(project = %project_id, error = %e, "Could not fetch approval status");
        }
    }

    match client.fetch_chat(project_id).await {
        Ok(messages) if !messages.is_empty() => {
            println!("  Advisory chat:");
            for message in &messages {
                println!("    {}: {}", message.sender_name, message.content);
            }
        }
        Ok(_) => {}
        Err(e) => {
            warn!(project = %project_id, error = %e, "Could not fetch chat messages");
        }
    }
    println!();
}

/// Handle configuration subcommands
fn handle_config_command(subcommand: cli::ConfigSubcommand) -> Result<()> {
    use cli::ConfigSubcommand;

    match subcommand {
        ConfigSubcommand::Show { config } => {
            let cfg = ConsoleConfig::load(config.as_deref())?;
            println!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigSubcommand::Init { path, force } => {
            config::init_config(path.as_deref(), force)?;
        }
        ConfigSubcommand::Validate { config } => {
            let path = config.as_deref();
            match ConsoleConfig::load(path) {
                Ok(_) => {
                    println!("Configuration is valid.");
                }
                Err(e) => {
                    eprint!("{}", e.format_for_terminal());
                    std::process::exit(e.exit_code());
                }
            }
        }
    }

    Ok(())
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
