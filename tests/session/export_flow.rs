use super::session_harness::{
    self, EXPORT, REMINDER, RecordingCreators, SYSTEM, ScriptedProvider, contents, event, todo,
};
use daybook::session::Action;

const ICS: &str = "BEGIN:VCALENDAR\nBEGIN:VEVENT\nSUMMARY:Dentist\nEND:VEVENT\nEND:VCALENDAR";

#[tokio::test]
async fn saved_event_is_created_and_exported() {
    let dir = tempfile::tempdir().unwrap();
    let export_path = dir.path().join("events.ics");
    let reply = event("Booked your dentist visit.", "Dentist", "Yes");
    let provider = ScriptedProvider::replying(&[&reply, ICS]);
    let creators = RecordingCreators::new();
    let mut session = session_harness::session(&provider, &creators, 8, 100, &export_path);
    let mut console = session_harness::console();

    let outcome = session
        .run_turn("dentist tomorrow at 9, save it", &mut console)
        .await
        .unwrap();

    assert_eq!(outcome.action, Action::Event);
    assert_eq!(outcome.exported.as_deref(), Some(export_path.as_path()));

    let events = creators.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].summary.as_deref(), Some("Dentist"));

    let requests = provider.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(contents(&requests[1]), vec![SYSTEM, reply.as_str(), EXPORT]);

    assert_eq!(std::fs::read_to_string(&export_path).unwrap(), ICS);
    assert_eq!(session.log().last().content, reply);
    assert!(session_harness::stdout(&console).contains("Booked your dentist visit."));
}

#[tokio::test]
async fn unsaved_event_is_not_exported() {
    let dir = tempfile::tempdir().unwrap();
    let export_path = dir.path().join("events.ics");
    let provider = ScriptedProvider::replying(&[&event("Booked.", "Dentist", "No")]);
    let creators = RecordingCreators::new();
    let mut session = session_harness::session(&provider, &creators, 8, 100, &export_path);
    let mut console = session_harness::console();

    let outcome = session.run_turn("dentist", &mut console).await.unwrap();

    assert_eq!(outcome.exported, None);
    assert_eq!(creators.events().len(), 1);
    assert_eq!(provider.requests().len(), 1);
    assert!(!export_path.exists());
}

#[tokio::test]
async fn missing_save_flag_means_no_export() {
    let dir = tempfile::tempdir().unwrap();
    let export_path = dir.path().join("events.ics");
    let reply = serde_json::json!({
        "action": "Event",
        "dialog": "Booked.",
        "response": { "summary": "Dentist" },
    })
    .to_string();
    let provider = ScriptedProvider::replying(&[&reply]);
    let creators = RecordingCreators::new();
    let mut session = session_harness::session(&provider, &creators, 8, 100, &export_path);
    let mut console = session_harness::console();

    session.run_turn("dentist", &mut console).await.unwrap();

    assert_eq!(provider.requests().len(), 1);
    assert!(!export_path.exists());
}

#[tokio::test]
async fn unrecognised_save_flag_still_creates_event() {
    let dir = tempfile::tempdir().unwrap();
    let export_path = dir.path().join("events.ics");
    let provider = ScriptedProvider::replying(&[&event("Booked.", "Dentist", "yes")]);
    let creators = RecordingCreators::new();
    let mut session = session_harness::session(&provider, &creators, 8, 100, &export_path);
    let mut console = session_harness::console();

    let outcome = session.run_turn("dentist", &mut console).await.unwrap();

    assert_eq!(outcome.action, Action::Event);
    assert_eq!(outcome.exported, None);
    assert_eq!(creators.events().len(), 1);
    assert_eq!(provider.requests().len(), 1);
    assert_eq!(session_harness::stdout(&console), "Booked.\n");
    assert!(!export_path.exists());
}

#[tokio::test]
async fn numeric_color_and_attendee_details_reach_calendar() {
    let dir = tempfile::tempdir().unwrap();
    let reply = serde_json::json!({
        "action": "Event",
        "dialog": "Invited Ann.",
        "response": {
            "summary": "Planning",
            "colorId": 6,
            "attendees": [{"email": "ann@example.com", "displayName": "Ann"}],
        },
    })
    .to_string();
    let provider = ScriptedProvider::replying(&[&reply]);
    let creators = RecordingCreators::new();
    let mut session = session_harness::session(
        &provider,
        &creators,
        8,
        100,
        &dir.path().join("events.ics"),
    );
    let mut console = session_harness::console();

    session.run_turn("planning with ann", &mut console).await.unwrap();

    let events = creators.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].color_id.as_deref(), Some("6"));
    assert_eq!(events[0].attendees[0].extra["displayName"], "Ann");
}

#[tokio::test]
async fn save_flag_on_todo_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let export_path = dir.path().join("events.ics");
    let reply = serde_json::json!({
        "action": "Todo",
        "dialog": "Noted.",
        "save": "Yes",
        "response": { "title": "Buy milk" },
    })
    .to_string();
    let provider = ScriptedProvider::replying(&[&reply]);
    let creators = RecordingCreators::new();
    let mut session = session_harness::session(&provider, &creators, 8, 100, &export_path);
    let mut console = session_harness::console();

    let outcome = session.run_turn("buy milk", &mut console).await.unwrap();

    assert_eq!(outcome.action, Action::Todo);
    assert_eq!(outcome.exported, None);
    assert_eq!(provider.requests().len(), 1);
    assert!(!export_path.exists());
}

#[tokio::test]
async fn export_overwrites_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let export_path = dir.path().join("events.ics");
    std::fs::write(&export_path, "stale contents").unwrap();

    let provider = ScriptedProvider::replying(&[
        &event("First.", "Dentist", "Yes"),
        "FIRST ICS",
        &event("Second.", "Barber", "Yes"),
        "SECOND ICS",
    ]);
    let creators = RecordingCreators::new();
    let mut session = session_harness::session(&provider, &creators, 8, 100, &export_path);
    let mut console = session_harness::console();

    session.run_turn("dentist", &mut console).await.unwrap();
    assert_eq!(std::fs::read_to_string(&export_path).unwrap(), "FIRST ICS");

    session.run_turn("barber", &mut console).await.unwrap();
    assert_eq!(std::fs::read_to_string(&export_path).unwrap(), "SECOND ICS");
    assert_eq!(creators.events().len(), 2);
}

#[tokio::test]
async fn export_query_counts_towards_reminder_interval() {
    let dir = tempfile::tempdir().unwrap();
    let export_path = dir.path().join("events.ics");
    let reply = event("Booked.", "Dentist", "Yes");
    let provider = ScriptedProvider::replying(&[&reply, ICS]);
    let creators = RecordingCreators::new();
    let mut session = session_harness::session(&provider, &creators, 8, 2, &export_path);
    let mut console = session_harness::console();

    session.run_turn("dentist", &mut console).await.unwrap();

    let requests = provider.requests();
    assert_eq!(
        contents(&requests[1]),
        vec![SYSTEM, reply.as_str(), EXPORT, REMINDER]
    );
    assert_eq!(session.gateway().reminders().counter(), 0);
    assert!(
        session
            .log()
            .snapshot()
            .iter()
            .all(|m| m.content != REMINDER && m.content != ICS)
    );
}

#[tokio::test]
async fn failed_export_keeps_event_and_dialog() {
    let dir = tempfile::tempdir().unwrap();
    let export_path = dir.path().join("events.ics");
    let provider = ScriptedProvider::new(vec![
        Ok(event("Booked.", "Dentist", "Yes")),
        Err(anyhow::anyhow!("rate limited")),
    ]);
    let creators = RecordingCreators::new();
    let mut session = session_harness::session(&provider, &creators, 8, 100, &export_path);
    let mut console = session_harness::console();

    let outcome = session.run_turn("dentist", &mut console).await.unwrap();

    assert_eq!(outcome.exported, None);
    assert_eq!(creators.events().len(), 1);
    assert_eq!(session_harness::stdout(&console), "Booked.\n");
    let stderr = session_harness::stderr(&console);
    assert!(stderr.contains("export request failed"));
    assert!(stderr.contains("rate limited"));
    assert!(!export_path.exists());
}

#[tokio::test]
async fn unwritable_export_path_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let export_path = dir.path().join("missing").join("events.ics");
    let provider = ScriptedProvider::replying(&[&event("Booked.", "Dentist", "Yes"), ICS]);
    let creators = RecordingCreators::new();
    let mut session = session_harness::session(&provider, &creators, 8, 100, &export_path);
    let mut console = session_harness::console();

    let outcome = session.run_turn("dentist", &mut console).await.unwrap();

    assert_eq!(outcome.exported, None);
    assert!(session_harness::stderr(&console).contains("failed to write export file"));
    assert_eq!(session_harness::stdout(&console), "Booked.\n");
}

#[tokio::test]
async fn todo_reply_never_reaches_calendar() {
    let dir = tempfile::tempdir().unwrap();
    let provider = ScriptedProvider::replying(&[&todo("Noted.", "Pay rent")]);
    let creators = RecordingCreators::new();
    let mut session = session_harness::session(
        &provider,
        &creators,
        8,
        100,
        &dir.path().join("events.ics"),
    );
    let mut console = session_harness::console();

    session.run_turn("pay rent", &mut console).await.unwrap();
    assert!(creators.events().is_empty());
}
