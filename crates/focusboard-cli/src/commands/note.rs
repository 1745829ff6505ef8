use clap::Subcommand;
use focusboard_core::host::persist_hook;
use focusboard_core::storage::{load_or_default, NOTES_KEY};
use focusboard_core::{Config, NoteBoard, Watched};

use super::{open_store, resolve_id};

#[derive(Subcommand)]
pub enum NoteAction {
    /// Add a sticky note
    Add {
        content: Vec<String>,
    },
    /// List notes, pinned first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Pin or unpin a note
    Pin {
        /// Note ID (or unique prefix)
        id: String,
    },
    /// Delete a note
    Remove {
        /// Note ID (or unique prefix)
        id: String,
    },
}

pub fn run(action: NoteAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let db = open_store(config)?;
    let mut board = Watched::new(load_or_default::<NoteBoard>(&*db, NOTES_KEY));
    board.subscribe(persist_hook(db.clone(), NOTES_KEY, |b: &NoteBoard| b.clone()));

    match action {
        NoteAction::Add { content } => {
            let content = content.join(" ");
            let id = board
                .update(|b| b.add(&content))
                .ok_or("note must not be empty")?;
            println!("{id}");
        }
        NoteAction::List { json } => {
            let notes = board.get().sorted();
            if json {
                println!("{}", serde_json::to_string_pretty(&notes)?);
            } else if notes.is_empty() {
                println!("No notes.");
            } else {
                for note in notes {
                    let pin = if note.payload.is_pinned { "*" } else { " " };
                    let short_id: String = note.id.chars().take(8).collect();
                    println!("{pin} {}  ({short_id})", note.payload.content);
                }
            }
        }
        NoteAction::Pin { id } => {
            let id = resolve_id(board.get().sorted().into_iter(), &id)?;
            board.update(|b| b.toggle_pin(&id));
        }
        NoteAction::Remove { id } => {
            let id = resolve_id(board.get().sorted().into_iter(), &id)?;
            board.update(|b| b.remove(&id));
        }
    }
    Ok(())
}
