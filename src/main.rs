use anyhow::Context;
use clap::Parser;
use cli::{AddArgs, Cli, Commands};
use display::{load_notice, products_table, skipped_notice, stat_cards};
use prompt::{run_questionnaire, Prompter, TerminalPrompter};
use state::AppState;
use std::io::{self, Write};

mod cli;
mod display;
mod prompt;
mod shell;
mod state;

/// The main entry point for the Nova inventory tool.
fn main() -> anyhow::Result<()> {
    // A .env file is optional; NOVA_* variables may also come from the shell.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = configuration::load_config(cli.config.as_deref())
        .context("failed to load configuration")?;
    if let Some(file) = cli.file {
        config.storage.path = file;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    let _log_guard = configuration::init_logging(&config.logging)?;
    tracing::info!(path = %config.storage.path.display(), "Nova starting.");

    let outcome = database::load(&config.storage.path);
    if let Some(notice) = load_notice(&outcome, &config.storage.path) {
        eprintln!("{notice}");
    }
    let mut state = AppState::from_outcome(config, outcome);

    let mut out = io::stdout();
    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let mut prompter = TerminalPrompter::new(io::stdin().lock(), io::stdout());
            shell::run_shell(&mut state, &mut prompter)?;
        }
        Commands::Add(args) => {
            let mut prompter = TerminalPrompter::new(io::stdin().lock(), io::stdout());
            handle_add(&mut state, args, &mut prompter, &mut out)?;
        }
        Commands::List => handle_list(&state, &mut out)?,
        Commands::Remove { row } => handle_remove(&mut state, row, &mut out)?,
        Commands::Report { json } => handle_report(&state, json, &mut out)?,
    }

    Ok(())
}

// ==============================================================================
// One-shot Commands
// ==============================================================================

/// Adds one product, asking for whatever the flags left out, then syncs.
fn handle_add(
    state: &mut AppState,
    args: AddArgs,
    prompter: &mut impl Prompter,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let entry = state.config().entry.clone();

    let Some(draft) = run_questionnaire(prompter, &entry, args) else {
        writeln!(out, "Entry cancelled.")?;
        return Ok(());
    };

    let id = state.add(draft).context("product not added")?;
    state.sync()?;
    tracing::info!(%id, "Product added from the command line.");

    print_report(state, out)
}

fn handle_list(state: &AppState, out: &mut impl Write) -> anyhow::Result<()> {
    if state.rows().is_empty() {
        writeln!(out, "The inventory is empty.")?;
    } else {
        writeln!(out, "{}", products_table(state.rows(), state.report()))?;
    }
    print_report(state, out)
}

/// Removes the product at `row` and syncs. A row that does not exist is not an error.
fn handle_remove(state: &mut AppState, row: usize, out: &mut impl Write) -> anyhow::Result<()> {
    match state.remove_at(row) {
        Some(removed) => {
            state.sync()?;
            writeln!(out, "Removed '{}'.", removed.name())?;
            print_report(state, out)?;
        }
        None => writeln!(out, "There is no row {row}; nothing removed.")?,
    }
    Ok(())
}

fn handle_report(state: &AppState, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(state.report())?)?;
        Ok(())
    } else {
        print_report(state, out)
    }
}

fn print_report(state: &AppState, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(
        out,
        "{}",
        stat_cards(state.report(), &state.config().display.currency_suffix)
    )?;
    if let Some(notice) = skipped_notice(state.report()) {
        writeln!(out, "{notice}")?;
    }
    Ok(())
}
