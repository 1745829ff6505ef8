//! Daily journal.
//!
//! Six fixed multiple-choice questions, answered at most once per day.
//! Answers picked so far live in a per-day [`DayAnswers`] record; saving
//! turns them into a [`JournalEntry`] together with a snapshot of the tasks
//! completed at that moment. Saving again on the same day replaces the
//! entry.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;
use crate::list::TaskList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub options: [&'static str; 3],
}

pub static QUESTIONS: [Question; 6] = [
    Question {
        id: "q1",
        text: "How do you feel today?",
        options: ["Energized", "Calm", "Tired"],
    },
    Question {
        id: "q3",
        text: "What area do you want to focus on today?",
        options: ["Work/Productivity", "Self-care", "Relationships"],
    },
    Question {
        id: "q4",
        text: "How was your sleep quality?",
        options: ["Excellent", "Average", "Poor"],
    },
    Question {
        id: "q5",
        text: "How will you take care of yourself today?",
        options: ["Physical exercise", "Healthy eating", "Rest time"],
    },
    Question {
        id: "q8",
        text: "What's your main goal for today?",
        options: ["Complete pending tasks", "Learn something new", "Find balance"],
    },
    Question {
        id: "q9",
        text: "How do you see yourself at the end of the day?",
        options: ["Accomplished", "Peaceful", "Tired but satisfied"],
    },
];

/// Look a question up by id (`q4`) or by its 1-based position (`3`).
pub fn find_question(key: &str) -> Option<&'static Question> {
    if let Some(q) = QUESTIONS.iter().find(|q| q.id == key) {
        return Some(q);
    }
    let position: usize = key.parse().ok()?;
    position.checked_sub(1).and_then(|i| QUESTIONS.get(i))
}

impl Question {
    /// Resolve a choice given as option text (case-insensitive) or as a
    /// 1-based option number.
    pub fn option(&self, choice: &str) -> Option<&'static str> {
        let choice = choice.trim();
        if let Some(option) = self
            .options
            .iter()
            .find(|option| option.eq_ignore_ascii_case(choice))
            .copied()
        {
            return Some(option);
        }
        let number: usize = choice.parse().ok()?;
        number
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .copied()
    }
}

/// Answers picked for one day, keyed by question id.
///
/// Stored as `{"q1": "Calm", "q4": "Average"}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayAnswers {
    answers: BTreeMap<String, String>,
}

impl DayAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the answer to one question, replacing any earlier pick.
    ///
    /// # Errors
    /// Returns an error if the question or the choice is unknown.
    pub fn answer(&mut self, question: &str, choice: &str) -> Result<&'static str, ValidationError> {
        let q = find_question(question).ok_or_else(|| ValidationError::InvalidValue {
            field: "question".into(),
            message: format!("no question '{question}'"),
        })?;
        let option = q.option(choice).ok_or_else(|| ValidationError::InvalidValue {
            field: q.id.into(),
            message: format!("'{choice}' is not one of: {}", q.options.join(", ")),
        })?;
        self.answers.insert(q.id.to_string(), option.to_string());
        Ok(option)
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    /// Ids of unanswered questions, in question order.
    pub fn missing(&self) -> Vec<&'static str> {
        QUESTIONS
            .iter()
            .filter(|q| !self.answers.contains_key(q.id))
            .map(|q| q.id)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTask {
    pub id: String,
    pub text: String,
}

/// One saved day. `date` is stored as `yyyy-MM-dd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub completed_tasks: Vec<CompletedTask>,
}

/// All saved days, stored in save order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, date: NaiveDate) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    pub fn is_saved(&self, date: NaiveDate) -> bool {
        self.entry(date).is_some()
    }

    /// Save the entry for `date` from its answers and the tasks completed now.
    ///
    /// # Errors
    /// Returns [`ValidationError::IncompleteJournal`] unless every question
    /// has an answer. Nothing is saved in that case.
    pub fn save(
        &mut self,
        date: NaiveDate,
        answers: &DayAnswers,
        tasks: &TaskList,
    ) -> Result<&JournalEntry, ValidationError> {
        let missing = answers.missing();
        if !missing.is_empty() {
            return Err(ValidationError::IncompleteJournal {
                missing: missing.into_iter().map(String::from).collect(),
            });
        }

        let entry = JournalEntry {
            date,
            answers: QUESTIONS
                .iter()
                .map(|q| Answer {
                    question_id: q.id.to_string(),
                    question: q.text.to_string(),
                    answer: answers.get(q.id).unwrap_or_default().to_string(),
                })
                .collect(),
            completed_tasks: tasks
                .completed()
                .into_iter()
                .map(|t| CompletedTask {
                    id: t.id.clone(),
                    text: t.payload.text.clone(),
                })
                .collect(),
        };

        let index = match self.entries.iter().position(|e| e.date == date) {
            Some(index) => {
                debug!(%date, "journal entry replaced");
                self.entries[index] = entry;
                index
            }
            None => {
                debug!(%date, "journal entry added");
                self.entries.push(entry);
                self.entries.len() - 1
            }
        };
        Ok(&self.entries[index])
    }

    /// Saved days, newest first.
    pub fn history(&self) -> Vec<&JournalEntry> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }
}
