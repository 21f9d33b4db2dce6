use taskpad_core::{
    EventOutcome, FixedClock, HostEvent, Key, ListBody, QueueNotifier, TaskAction,
    TaskListController, TaskListOptions, TaskRow, EMPTY_STATE_TITLE,
};

fn new_list() -> TaskListController<QueueNotifier, FixedClock> {
    TaskListController::with_parts(
        QueueNotifier::new(),
        FixedClock::new(1_700_000_000_000),
        TaskListOptions::default(),
    )
}

#[test]
fn empty_list_renders_placeholder_without_header_or_progress() {
    let list = new_list();
    let view = list.view();

    assert!(view.is_empty());
    assert_eq!(view.body, ListBody::Empty);
    assert!(view.rows().is_empty());
    assert_eq!(view.header, None);
    assert_eq!(view.progress, None);
    assert_eq!(EMPTY_STATE_TITLE, "No tasks yet");
}

#[test]
fn rows_follow_list_order_with_header_and_progress() {
    let mut list = new_list();
    list.handle(HostEvent::DraftChanged("one".to_string()));
    list.handle(HostEvent::SubmitClicked);
    list.handle(HostEvent::DraftChanged("two".to_string()));
    list.handle(HostEvent::KeyPressed(Key::Enter));
    list.handle(HostEvent::DraftChanged("three".to_string()));
    list.handle(HostEvent::KeyPressed(Key::Enter));

    let first = TaskRow::new(&list.tasks()[2]).toggle();
    list.handle(HostEvent::Row(first));

    let view = list.view();
    let texts: Vec<&str> = view.rows().iter().map(|row| row.text.as_str()).collect();
    assert_eq!(texts, vec!["three", "two", "one"]);
    assert!(view.rows()[2].completed);

    let header = view.header.clone().expect("non-empty list has a header");
    assert_eq!(header.label(), "1 of 3 tasks completed");

    let progress = view.progress.clone().expect("non-empty list has progress");
    assert_eq!(progress.percent, 33);
    assert_eq!(progress.label(), "33%");
    assert!((progress.ratio - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn draft_is_bound_into_view() {
    let mut list = new_list();
    assert_eq!(
        list.handle(HostEvent::DraftChanged("half typed".to_string())),
        EventOutcome::DraftUpdated
    );
    assert_eq!(list.view().draft_text, "half typed");
}

#[test]
fn row_delete_action_goes_through_controller() {
    let mut list = new_list();
    list.set_draft("remove me");
    list.add_task();
    let id = list.tasks()[0].id();

    let action = TaskRow::new(&list.tasks()[0]).delete();
    assert_eq!(action, TaskAction::Delete(id));
    assert!(matches!(list.dispatch(action), EventOutcome::Delete(_)));
    assert!(list.view().is_empty());
}

#[test]
fn view_serializes_for_hosts() {
    let mut list = new_list();
    let empty = serde_json::to_value(list.view()).expect("serialize empty view");
    assert_eq!(empty["body"]["kind"], "empty");
    assert!(empty["progress"].is_null());

    list.set_draft("ship it");
    list.add_task();
    let json = serde_json::to_value(list.view()).expect("serialize view");
    assert_eq!(json["body"]["kind"], "rows");
    assert_eq!(json["body"]["rows"][0]["text"], "ship it");
    assert_eq!(json["body"]["rows"][0]["completed"], false);
    assert_eq!(json["header"]["total_count"], 1);
    assert_eq!(json["progress"]["percent"], 0);
}
