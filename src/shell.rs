use crate::cli::AddArgs;
use crate::display::{products_table, skipped_notice, stat_cards};
use crate::prompt::{run_questionnaire, Prompter};
use crate::state::AppState;

enum MenuAction {
    Create,
    Sync,
    Remove,
    List,
    Report,
    Quit,
}

impl MenuAction {
    fn parse(answer: &str) -> Option<Self> {
        match answer.to_ascii_lowercase().as_str() {
            "1" | "create" | "add" => Some(MenuAction::Create),
            "2" | "sync" | "save" => Some(MenuAction::Sync),
            "3" | "remove" | "delete" => Some(MenuAction::Remove),
            "4" | "list" => Some(MenuAction::List),
            "5" | "report" => Some(MenuAction::Report),
            "0" | "quit" | "exit" => Some(MenuAction::Quit),
            _ => None,
        }
    }
}

const MENU: &str = "[1] Create product  [2] Sync database  [3] Remove item  [4] List  [5] Report  [0] Quit";

/// The interactive menu. Returns when the user quits or closes the input.
pub fn run_shell(state: &mut AppState, prompter: &mut impl Prompter) -> anyhow::Result<()> {
    prompter.say(&state.config().display.title);
    show_list(state, prompter);

    loop {
        prompter.say(MENU);
        let Some(answer) = prompter.ask(">") else {
            break;
        };
        let Some(action) = MenuAction::parse(&answer) else {
            if !answer.is_empty() {
                prompter.say(&format!("Unknown choice '{answer}'."));
            }
            continue;
        };

        match action {
            MenuAction::Create => create_product(state, prompter),
            MenuAction::Sync => sync(state, prompter),
            MenuAction::Remove => remove_item(state, prompter),
            MenuAction::List => show_list(state, prompter),
            MenuAction::Report => show_report(state, prompter),
            MenuAction::Quit => break,
        }
    }

    if state.has_unsaved_changes() {
        let answer = prompter.ask("Unsaved changes. Sync before quitting? [y/N]");
        let confirmed = answer
            .as_deref()
            .is_some_and(|a| a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes"));
        if confirmed {
            sync(state, prompter);
        } else {
            tracing::info!("Quitting with unsaved changes discarded.");
        }
    }
    Ok(())
}

fn create_product(state: &mut AppState, prompter: &mut impl Prompter) {
    let entry = state.config().entry.clone();
    let Some(draft) = run_questionnaire(prompter, &entry, AddArgs::default()) else {
        prompter.say("Entry cancelled.");
        return;
    };

    match state.add(draft) {
        Ok(id) => {
            tracing::info!(%id, "Product created from the shell.");
            show_report(state, prompter);
        }
        Err(e) => prompter.say(&format!("Product not added: {e:#}")),
    }
}

fn sync(state: &mut AppState, prompter: &mut impl Prompter) {
    match state.sync() {
        Ok(()) => prompter.say(&format!(
            "Saved {} products to {}.",
            state.rows().len(),
            state.config().storage.path.display()
        )),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Sync failed.");
            prompter.say(&format!("Sync failed: {e:#}"));
        }
    }
}

fn remove_item(state: &mut AppState, prompter: &mut impl Prompter) {
    if state.rows().is_empty() {
        prompter.say("There is nothing to remove.");
        return;
    }
    let Some(answer) = prompter.ask("Row to remove:") else {
        return;
    };
    let Ok(position) = answer.parse::<usize>() else {
        prompter.say(&format!("'{answer}' is not a row number."));
        return;
    };

    match state.remove_at(position) {
        Some(row) => {
            prompter.say(&format!("Removed '{}'.", row.name()));
            show_report(state, prompter);
        }
        None => prompter.say(&format!("There is no row {position}.")),
    }
}

fn show_list(state: &AppState, prompter: &mut impl Prompter) {
    if state.rows().is_empty() {
        prompter.say("The inventory is empty.");
    } else {
        prompter.say(&products_table(state.rows(), state.report()).to_string());
    }
    show_report(state, prompter);
}

fn show_report(state: &AppState, prompter: &mut impl Prompter) {
    prompter.say(&stat_cards(state.report(), &state.config().display.currency_suffix).to_string());
    if let Some(notice) = skipped_notice(state.report()) {
        prompter.say(&notice);
    }
}
