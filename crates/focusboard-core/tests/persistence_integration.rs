//! Integration tests for widget records flowing through change hooks into storage.

use std::rc::Rc;

use chrono::NaiveDate;
use focusboard_core::host::persist_hook;
use focusboard_core::storage::{
    answers_key, load_or_default, load_record, JOURNAL_KEY, NOTES_KEY, SETTINGS_KEY, TASKS_KEY,
};
use focusboard_core::{
    Database, DayAnswers, Journal, NoteBoard, Preset, Store, TaskList, TimerEngine,
    TimerSettings, Watched,
};

#[test]
fn timer_settings_persist_only_when_settings_change() {
    let db = Rc::new(Database::open_memory().unwrap());
    let mut timer = Watched::new(TimerEngine::default());
    timer.subscribe(persist_hook(db.clone(), SETTINGS_KEY, |e: &TimerEngine| {
        *e.settings()
    }));

    timer.update(|e| e.start());
    assert!(db.load_raw(SETTINGS_KEY).unwrap().is_some());

    timer
        .update(|e| e.apply_settings(TimerSettings::from_preset(Preset::Long)))
        .unwrap();
    let stored: TimerSettings = load_record(&*db, SETTINGS_KEY).unwrap();
    assert_eq!(stored, TimerSettings::from_preset(Preset::Long));

    // Ticks change the engine but not the record.
    db.save_raw(SETTINGS_KEY, "\"sentinel\"").unwrap();
    timer.update(|e| e.start());
    timer.update(|e| e.tick());
    assert_eq!(
        db.load_raw(SETTINGS_KEY).unwrap().as_deref(),
        Some("\"sentinel\"")
    );
}

#[test]
fn tasks_rehydrate_in_dragged_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("focusboard.db");

    let ids = {
        let db = Rc::new(Database::open_at(&path).unwrap());
        let mut tasks = Watched::new(TaskList::new());
        tasks.subscribe(persist_hook(db.clone(), TASKS_KEY, |t: &TaskList| t.clone()));

        let a = tasks.update(|t| t.add("a")).unwrap();
        let b = tasks.update(|t| t.add("b")).unwrap();
        let c = tasks.update(|t| t.add("c")).unwrap();
        tasks.update(|t| t.list_mut().begin_drag(2));
        tasks.update(|t| t.list_mut().hover(0));
        tasks.update(|t| t.list_mut().resolve());
        tasks.update(|t| t.list_mut().end_drag());
        tasks.update(|t| t.toggle(&a));
        vec![c, a, b]
    };

    let db = Database::open_at(&path).unwrap();
    let restored: TaskList = load_or_default(&db, TASKS_KEY);
    let order: Vec<String> = restored.list().iter().map(|t| t.id.clone()).collect();
    assert_eq!(order, ids);
    assert_eq!(restored.completed().len(), 1);
}

#[test]
fn corrupt_records_fall_back_to_empty_widgets() {
    let db = Database::open_memory().unwrap();
    db.save_raw(TASKS_KEY, "[{\"id\": 1}").unwrap();
    db.save_raw(NOTES_KEY, "{}").unwrap();
    db.save_raw(SETTINGS_KEY, "null").unwrap();

    let tasks: TaskList = load_or_default(&db, TASKS_KEY);
    let notes: NoteBoard = load_or_default(&db, NOTES_KEY);
    let settings: TimerSettings = load_or_default(&db, SETTINGS_KEY);
    assert!(tasks.list().is_empty());
    assert!(notes.is_empty());
    assert_eq!(settings, TimerSettings::default());
}

#[test]
fn repeated_task_ids_load_once() {
    let db = Database::open_memory().unwrap();
    db.save_raw(
        TASKS_KEY,
        r#"[{"id":"1","text":"a"},{"id":"1","text":"b"},{"id":"2","text":"c"}]"#,
    )
    .unwrap();

    let mut tasks: TaskList = load_or_default(&db, TASKS_KEY);
    assert_eq!(tasks.list().len(), 2);
    assert_eq!(tasks.list().get("1").unwrap().payload.text, "a");

    assert!(tasks.remove("1").is_some());
    assert!(tasks.list().get("1").is_none());
    assert_eq!(tasks.list().ids(), ["2"]);
}

#[test]
fn journal_answers_are_kept_per_day_and_saved_entries_reload() {
    let db = Rc::new(Database::open_memory().unwrap());
    let monday = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    let tuesday = monday.succ_opt().unwrap();

    let mut answers = Watched::new(DayAnswers::new());
    answers.subscribe(persist_hook(db.clone(), answers_key(monday), |a: &DayAnswers| a.clone()));
    for (n, question) in ["1", "2", "3", "4", "5", "6"].into_iter().enumerate() {
        let choice = if n % 2 == 0 { "1" } else { "2" };
        answers.update(|a| a.answer(question, choice)).unwrap();
    }

    let mut journal = Watched::new(Journal::new());
    journal.subscribe(persist_hook(db.clone(), JOURNAL_KEY, |j: &Journal| j.clone()));
    journal
        .update(|j| j.save(monday, answers.get(), &TaskList::new()).map(|_| ()))
        .unwrap();

    let stored: DayAnswers = load_or_default(&*db, &answers_key(monday));
    assert!(stored.is_complete());
    assert!(load_record::<DayAnswers>(&*db, &answers_key(tuesday)).is_none());

    let reloaded: Journal = load_or_default(&*db, JOURNAL_KEY);
    assert_eq!(reloaded, *journal.get());
    assert_eq!(reloaded.entry(monday).unwrap().answers[1].answer, "Self-care");
}
