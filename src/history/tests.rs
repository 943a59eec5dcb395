use super::*;
use tempfile::TempDir;

fn open_temp() -> (TempDir, HistoryLog) {
    let dir = TempDir::new().unwrap();
    let log = HistoryLog::open(&dir.path().join("nested").join("history.db")).unwrap();
    (dir, log)
}

#[test]
fn test_record_and_read_back() {
    let (_dir, log) = open_temp();

    log.record(
        &Utterance::new("Abre Notepad"),
        &IntentMatch::new(Intent::OpenApp, Some("notepad".to_string())),
        &ActionResult::ok("Opening notepad"),
    )
    .unwrap();

    let entries = log.recent(10).unwrap();
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.utterance, "abre notepad");
    assert_eq!(entry.intent, Intent::OpenApp);
    assert_eq!(entry.argument.as_deref(), Some("notepad"));
    assert_eq!(entry.result_text, "Opening notepad");
    assert!(entry.success);
}

#[test]
fn test_recent_is_newest_first_and_limited() {
    let (_dir, log) = open_temp();

    for text in ["ayuda", "hola", "salir"] {
        log.record(
            &Utterance::new(text),
            &IntentMatch::unknown(),
            &ActionResult::ok(text).with_success(false),
        )
        .unwrap();
    }

    let entries = log.recent(2).unwrap();
    let texts: Vec<_> = entries.iter().map(|e| e.utterance.as_str()).collect();
    assert_eq!(texts, ["salir", "hola"]);
    assert!(!entries[0].success);
    assert_eq!(entries[0].argument, None);
    assert_eq!(log.count().unwrap(), 3);
}

#[test]
fn test_history_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.db");

    {
        let log = HistoryLog::open(&path).unwrap();
        log.record(
            &Utterance::new("salir"),
            &IntentMatch::new(Intent::Exit, None),
            &ActionResult::exit(),
        )
        .unwrap();
    }

    let log = HistoryLog::open(&path).unwrap();
    let entries = log.recent(5).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].intent, Intent::Exit);
}

#[test]
fn test_clear() {
    let (_dir, log) = open_temp();
    log.record(
        &Utterance::new("ayuda"),
        &IntentMatch::new(Intent::Help, None),
        &ActionResult::ok("help"),
    )
    .unwrap();

    assert_eq!(log.clear().unwrap(), 1);
    assert!(log.recent(10).unwrap().is_empty());
}
