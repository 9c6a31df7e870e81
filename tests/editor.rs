use std::path::PathBuf;

use pretty_assertions::assert_eq;

use clienthub::app::editor::EditorState;
use clienthub::app::App;
use clienthub::{Client, ValidationError};

fn app_with(clients: Vec<Client>) -> App {
    App::new(clients, PathBuf::from("clients.json"))
}

#[test]
fn commit_create_appends_to_the_end() {
    let mut app = app_with(Vec::new());

    app.start_create();
    let form = app.form_mut().expect("editing");
    form.set("name", "Beta");
    form.set("download", "https://b");

    app.commit_edit().expect("valid record");
    assert_eq!(app.clients, vec![Client::new("Beta", "https://b")]);
    assert_eq!(app.editor, EditorState::Idle);
}

#[test]
fn rejected_update_leaves_list_and_editing_state_unchanged() {
    let mut app = app_with(vec![Client::new("Alpha", "http://a")]);

    app.start_edit(0);
    app.form_mut().expect("editing").set("download", "ftp://a");

    assert_eq!(app.commit_edit(), Err(ValidationError::DownloadScheme));
    assert_eq!(app.clients, vec![Client::new("Alpha", "http://a")]);
    assert!(app.editor.is_editing());
}

#[test]
fn commit_update_replaces_in_place() {
    let mut app = app_with(vec![
        Client::new("Alpha", "http://a"),
        Client::new("Beta", "http://b"),
    ]);

    app.start_edit(0);
    app.form_mut().expect("editing").set("name", "Alpha II");
    app.commit_edit().expect("valid record");

    assert_eq!(app.clients[0], Client::new("Alpha II", "http://a"));
    assert_eq!(app.clients[1], Client::new("Beta", "http://b"));
}

#[test]
fn rejected_create_reports_the_first_failing_rule() {
    let mut app = app_with(Vec::new());

    app.start_create();
    app.form_mut().expect("editing").set("download", "ftp://a");

    assert_eq!(app.commit_edit(), Err(ValidationError::NameRequired));
    assert!(app.clients.is_empty());
}

#[test]
fn form_values_are_trimmed_and_empties_dropped() {
    let mut app = app_with(Vec::new());

    app.start_create();
    let form = app.form_mut().expect("editing");
    form.set("name", "  Gamma  ");
    form.set("download", " https://g ");
    form.set("short", "   ");

    app.commit_edit().expect("valid record");
    let client = &app.clients[0];
    assert_eq!(client.name, "Gamma");
    assert_eq!(client.download, "https://g");
    assert_eq!(client.short, None);
}

#[test]
fn cancel_discards_the_form() {
    let mut app = app_with(vec![Client::new("Alpha", "http://a")]);

    app.start_edit(0);
    app.form_mut().expect("editing").set("name", "Changed");
    app.cancel_edit();

    assert_eq!(app.editor, EditorState::Idle);
    assert_eq!(app.clients[0].name, "Alpha");
}

#[test]
fn delete_shifts_later_records_down() {
    let mut app = app_with(vec![
        Client::new("A", "http://a"),
        Client::new("B", "http://b"),
        Client::new("C", "http://c"),
    ]);

    app.delete(1);
    let names: Vec<&str> = app.clients.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[test]
fn move_up_then_down_restores_order() {
    let original = vec![
        Client::new("A", "http://a"),
        Client::new("B", "http://b"),
        Client::new("C", "http://c"),
    ];
    let mut app = app_with(original.clone());

    app.move_record_up(1);
    let names: Vec<&str> = app.clients.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["B", "A", "C"]);

    app.move_record_down(0);
    assert_eq!(app.clients, original);
}

#[test]
fn moves_at_the_boundaries_are_no_ops() {
    let original = vec![Client::new("A", "http://a"), Client::new("B", "http://b")];
    let mut app = app_with(original.clone());

    app.move_record_up(0);
    app.move_record_down(1);
    assert_eq!(app.clients, original);
}

#[test]
fn reset_yields_an_empty_list_in_idle() {
    let mut app = app_with(vec![Client::new("A", "http://a")]);
    app.start_edit(0);

    app.reset_list();
    assert!(app.clients.is_empty());
    assert_eq!(app.editor, EditorState::Idle);
}
