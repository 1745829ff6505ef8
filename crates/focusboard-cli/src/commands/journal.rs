use chrono::NaiveDate;
use clap::Subcommand;
use focusboard_core::host::persist_hook;
use focusboard_core::journal::QUESTIONS;
use focusboard_core::storage::{
    answers_key, load_or_default, load_record, JOURNAL_KEY, QUESTIONS_VISIBLE_KEY, TASKS_KEY,
};
use focusboard_core::{Config, DayAnswers, Journal, JournalEntry, TaskList, Watched};
use tracing::info;

use super::open_store;

#[derive(Subcommand)]
pub enum JournalAction {
    /// Show the questions with the day's current answers
    Questions,
    /// Answer a question (by id or number) with an option (by text or number)
    Answer { question: String, choice: String },
    /// Save the day's entry with a snapshot of completed tasks
    Save,
    /// Show the saved entry for the day
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List saved days, newest first
    History {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or hide questions and answers
    ToggleQuestions,
}

pub fn run(
    action: JournalAction,
    date: NaiveDate,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = open_store(config)?;

    let key = answers_key(date);
    let mut answers = Watched::new(load_or_default::<DayAnswers>(&*db, &key));
    answers.subscribe(persist_hook(db.clone(), key, |a: &DayAnswers| a.clone()));

    let mut journal = Watched::new(load_or_default::<Journal>(&*db, JOURNAL_KEY));
    journal.subscribe(persist_hook(db.clone(), JOURNAL_KEY, |j: &Journal| j.clone()));

    let mut visible = Watched::new(load_record::<bool>(&*db, QUESTIONS_VISIBLE_KEY).unwrap_or(true));
    visible.subscribe(persist_hook(db.clone(), QUESTIONS_VISIBLE_KEY, |v: &bool| *v));

    match action {
        JournalAction::Questions => {
            if !*visible.get() {
                println!("Questions hidden.");
                return Ok(());
            }
            let day = answers.get();
            for (n, q) in QUESTIONS.iter().enumerate() {
                println!("{}. {}  ({})", n + 1, q.text, q.id);
                for (i, option) in q.options.iter().enumerate() {
                    let mark = if day.get(q.id) == Some(*option) { "x" } else { " " };
                    println!("   [{mark}] {}. {option}", i + 1);
                }
            }
            if !day.is_complete() {
                println!("Unanswered: {}", day.missing().join(", "));
            }
        }
        JournalAction::Answer { question, choice } => {
            let picked = answers.update(|a| a.answer(&question, &choice))?;
            println!("{picked}");
        }
        JournalAction::Save => {
            let tasks = load_or_default::<TaskList>(&*db, TASKS_KEY);
            let entry = journal.update(|j| j.save(date, answers.get(), &tasks).cloned())?;
            info!(%date, completed = entry.completed_tasks.len(), "journal saved");
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        JournalAction::Show { json } => {
            let entry = journal
                .get()
                .entry(date)
                .ok_or_else(|| format!("no journal entry for {date}"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(entry)?);
            } else {
                print_entry(entry, *visible.get());
            }
        }
        JournalAction::History { json } => {
            let history = journal.get().history();
            if json {
                println!("{}", serde_json::to_string_pretty(&history)?);
            } else if history.is_empty() {
                println!("No journal entries yet.");
            } else {
                for entry in history {
                    println!("{}", entry.date.format("%m/%d/%Y"));
                }
            }
        }
        JournalAction::ToggleQuestions => {
            visible.update(|v| *v = !*v);
            println!("{}", if *visible.get() { "shown" } else { "hidden" });
        }
    }
    Ok(())
}

fn print_entry(entry: &JournalEntry, visible: bool) {
    println!("{}", entry.date.format("%m/%d/%Y"));
    if visible {
        for answer in &entry.answers {
            println!("  {}  {}", answer.question, answer.answer);
        }
    }
    if !entry.completed_tasks.is_empty() {
        println!("Completed tasks:");
        for task in &entry.completed_tasks {
            println!("  [x] {}", task.text);
        }
    }
}
