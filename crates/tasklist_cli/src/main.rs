use clap::{CommandFactory, Parser};
use std::io::{self, BufRead};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tasklist_cli::cli::{self, Cli, Command, TabCommand};
use tasklist_core::config::{self, Config, Palette};
use tasklist_core::error::AppError;
use tasklist_core::filter::{Tab, visible_tasks};
use tasklist_core::model::Task;
use tasklist_core::store::TaskStore;

/// One interactive session: the in-memory store plus the persisted display
/// config. Task data dies with the session; the theme does not.
struct Session {
    store: TaskStore,
    config: Config,
}

impl Session {
    fn start() -> Self {
        let load = config::load_config_with_fallback();
        if let Some(err) = load.error {
            eprintln!("WARNING: {err}");
        }

        Self {
            store: TaskStore::with_system_services(),
            config: load.config,
        }
    }

    fn palette(&self) -> Palette {
        config::palette_for_theme(self.config.theme)
    }
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Task")]
    text: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created")]
    created: String,
}

fn status_label(task: &Task) -> &'static str {
    if task.completed { "done" } else { "active" }
}

fn print_tasks_plain(tasks: &[Task], palette: &Palette) {
    if tasks.is_empty() {
        println!("No tasks.");
        return;
    }

    let rows: Vec<TaskRow> = tasks
        .iter()
        .map(|task| TaskRow {
            id: task.id,
            text: palette.accentize(&task.text),
            status: status_label(task).to_string(),
            created: palette.mutedize(&format!(
                "{} at {}",
                task.created_date, task.created_time
            )),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{table}");
}

fn print_tasks_json(tasks: &[Task]) -> Result<(), AppError> {
    let payload = serde_json::to_value(tasks).map_err(|err| AppError::data(err.to_string()))?;
    println!("{payload}");
    Ok(())
}

fn print_task_json(task: &Task) -> Result<(), AppError> {
    let payload = serde_json::to_value(task).map_err(|err| AppError::data(err.to_string()))?;
    println!("{payload}");
    Ok(())
}

fn require_task(store: &TaskStore, id: u32) -> Result<(), AppError> {
    if store.tasks().iter().any(|task| task.id == id) {
        Ok(())
    } else {
        Err(AppError::not_found(id))
    }
}

fn print_help() {
    let mut cmd = Cli::command();
    let help = cmd.render_help();
    println!("{help}");
}

fn run_command(session: &mut Session, cli: Cli) -> Result<(), AppError> {
    let palette = session.palette();

    match cli.command {
        Command::Add { text } => {
            let text = match text {
                Some(value) if !value.trim().is_empty() => value,
                _ => return Err(AppError::validation("task text is required")),
            };

            let tasks = session.store.add(&text);
            if let Some(task) = tasks.last() {
                if cli.json {
                    print_task_json(task)?;
                } else {
                    println!("Added task: {} ({})", palette.accentize(&task.text), task.id);
                }
            }
        }
        Command::Edit { id, new_text } => {
            if new_text.trim().is_empty() {
                return Err(AppError::validation("task text is required"));
            }

            require_task(&session.store, id)?;
            session.store.update(id, &new_text);
            if let Some(task) = session.store.tasks().iter().find(|task| task.id == id) {
                if cli.json {
                    print_task_json(task)?;
                } else {
                    println!(
                        "Updated task: {} ({})",
                        palette.accentize(&task.text),
                        task.id
                    );
                }
            }
        }
        Command::Done { id } => {
            require_task(&session.store, id)?;
            session.store.complete(id);
            if let Some(task) = session.store.tasks().iter().find(|task| task.id == id) {
                if cli.json {
                    print_task_json(task)?;
                } else {
                    println!(
                        "Completed task: {} ({})",
                        palette.accentize(&task.text),
                        task.id
                    );
                }
            }
        }
        Command::Delete { id } => {
            require_task(&session.store, id)?;
            let removed = session
                .store
                .tasks()
                .iter()
                .find(|task| task.id == id)
                .cloned();
            session.store.remove(id);
            if let Some(task) = removed {
                if cli.json {
                    print_task_json(&task)?;
                } else {
                    println!(
                        "Deleted task: {} ({})",
                        palette.accentize(&task.text),
                        task.id
                    );
                }
            }
        }
        Command::Clear => {
            let removed = session.store.tasks().len();
            session.store.delete_all();
            if cli.json {
                println!("{}", serde_json::json!({ "deleted": removed }));
            } else {
                println!("Deleted all tasks ({removed})");
            }
        }
        Command::List { tab } => {
            let tab = tab.unwrap_or(TabCommand::Active).tab();
            let visible = visible_tasks(session.store.tasks(), tab, "");
            if cli.json {
                print_tasks_json(&visible)?;
            } else {
                print_tasks_plain(&visible, &palette);
            }
        }
        Command::Search { query } => {
            if query.trim().is_empty() {
                return Err(AppError::validation("search text is required"));
            }

            // Search mode is independent of any tab selection.
            let visible = visible_tasks(session.store.tasks(), Tab::All, &query);
            if cli.json {
                print_tasks_json(&visible)?;
            } else {
                print_tasks_plain(&visible, &palette);
            }
        }
        Command::Theme { name } => {
            let theme = config::canonical_theme(&name)
                .ok_or_else(|| AppError::validation(format!("unknown theme '{name}'")))?;
            session.config.theme = theme;
            config::save_config(&session.config)?;
            if cli.json {
                println!("{}", serde_json::json!({ "theme": theme.name() }));
            } else {
                println!("Theme set to {}", theme.name());
            }
        }
    }

    Ok(())
}

fn run_interactive() -> Result<(), AppError> {
    let mut session = Session::start();

    for line in io::stdin().lock().lines() {
        let line = line.map_err(|err| AppError::io(err.to_string()))?;
        let line = line.trim();

        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        if line == "help" || line == "?" {
            print_help();
            continue;
        }

        match cli::parse_line(line) {
            Ok(Some(parsed)) => {
                if let Err(err) = run_command(&mut session, parsed) {
                    eprintln!("ERROR: {err}");
                }
            }
            Ok(None) => {}
            Err(err) => eprintln!("ERROR: {err}"),
        }
    }

    Ok(())
}

fn main() {
    let mut args = std::env::args_os();
    args.next();
    if args.next().is_none() {
        if let Err(err) = run_interactive() {
            eprintln!("ERROR: {err}");
            std::process::exit(1);
        }
        return;
    }

    // One-shot mode runs a single command against a fresh session; task
    // data does not survive the process, so this is mostly useful for
    // --help, --version, and theme changes.
    let cli = Cli::parse();
    let mut session = Session::start();
    if let Err(err) = run_command(&mut session, cli) {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
