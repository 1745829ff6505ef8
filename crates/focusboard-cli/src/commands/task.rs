use clap::Subcommand;
use focusboard_core::host::persist_hook;
use focusboard_core::storage::{load_or_default, TASKS_KEY};
use focusboard_core::{Config, TaskList, Watched};
use tracing::info;

use super::{open_store, resolve_id};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task at the end of the list
    Add {
        /// Task text
        text: Vec<String>,
    },
    /// List tasks in order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Toggle a task's completed flag
    Toggle {
        /// Task ID (or unique prefix)
        id: String,
    },
    /// Delete a task
    Remove {
        /// Task ID (or unique prefix)
        id: String,
    },
    /// Drag a task: lift it at FROM and glide through each TO in turn (zero-based)
    Move {
        from: usize,
        #[arg(required = true)]
        to: Vec<usize>,
    },
    /// List completed tasks
    Completed {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: TaskAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let db = open_store(config)?;
    let mut tasks = Watched::new(load_or_default::<TaskList>(&*db, TASKS_KEY));
    tasks.subscribe(persist_hook(db.clone(), TASKS_KEY, |t: &TaskList| t.clone()));

    match action {
        TaskAction::Add { text } => {
            let text = text.join(" ");
            let id = tasks
                .update(|t| t.add(&text))
                .ok_or("task text must not be empty")?;
            info!(%id, "task added");
            println!("{id}");
        }
        TaskAction::List { json } => print_tasks(tasks.get(), json, false)?,
        TaskAction::Completed { json } => print_tasks(tasks.get(), json, true)?,
        TaskAction::Toggle { id } => {
            let id = resolve_id(tasks.get().list().iter(), &id)?;
            tasks.update(|t| t.toggle(&id));
            print_tasks(tasks.get(), false, false)?;
        }
        TaskAction::Remove { id } => {
            let id = resolve_id(tasks.get().list().iter(), &id)?;
            tasks.update(|t| t.remove(&id));
            print_tasks(tasks.get(), false, false)?;
        }
        TaskAction::Move { from, to } => {
            let len = tasks.get().list().len();
            if from >= len {
                return Err(format!("no task at index {from} (list has {len})").into());
            }
            // Each step is saved as it happens, like a live drag.
            tasks.update(|t| t.list_mut().begin_drag(from));
            for target in to {
                tasks.update(|t| {
                    let list = t.list_mut();
                    list.hover(target);
                    list.resolve()
                });
            }
            tasks.update(|t| t.list_mut().end_drag());
            print_tasks(tasks.get(), false, false)?;
        }
    }
    Ok(())
}

fn print_tasks(
    tasks: &TaskList,
    json: bool,
    completed_only: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let items: Vec<_> = tasks
        .list()
        .iter()
        .filter(|t| !completed_only || t.payload.completed)
        .collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }
    if items.is_empty() {
        println!("No tasks.");
        return Ok(());
    }
    for (index, task) in items.iter().enumerate() {
        let mark = if task.payload.completed { "x" } else { " " };
        let short_id: String = task.id.chars().take(8).collect();
        println!("{index:>2}. [{mark}] {}  ({short_id})", task.payload.text);
    }
    if !completed_only {
        println!("{} open", tasks.pending_count());
    }
    Ok(())
}
