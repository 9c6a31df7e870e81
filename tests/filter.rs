use std::path::PathBuf;

use clienthub::app::App;
use clienthub::Client;

fn sample() -> Vec<Client> {
    let mut alpha = Client::new("Alpha", "http://a");
    alpha.short = Some("Lightweight launcher".to_string());
    let mut beta = Client::new("Beta", "http://b");
    beta.description = Some("A performance focused client".to_string());
    let gamma = Client::new("Gamma", "http://g");
    vec![alpha, beta, gamma]
}

fn app_searching(query: &str) -> App {
    let mut app = App::new(sample(), PathBuf::from("clients.json"));
    app.search_input = query.to_string();
    app.refresh_filter();
    app
}

#[test]
fn empty_query_yields_the_full_list_in_order() {
    let app = app_searching("");
    assert_eq!(app.filtered_indices, vec![0, 1, 2]);
}

#[test]
fn unmatched_query_yields_nothing() {
    let app = app_searching("zzz nothing");
    assert!(app.filtered_indices.is_empty());
    assert_eq!(app.current_index(), None);
}

#[test]
fn query_matches_name_short_and_description_case_insensitively() {
    assert_eq!(app_searching("ALPHA").filtered_indices, vec![0]);
    assert_eq!(app_searching("launcher").filtered_indices, vec![0]);
    assert_eq!(app_searching("performance").filtered_indices, vec![1]);
    // "a" appears in every record's name.
    assert_eq!(app_searching("a").filtered_indices, vec![0, 1, 2]);
}

#[test]
fn admin_tab_ignores_the_search_filter() {
    use clienthub::app::state::TAB_ADMIN;

    let mut app = app_searching("performance");
    assert_eq!(app.filtered_indices, vec![1]);

    app.selected_tab = TAB_ADMIN;
    app.refresh_filter();
    assert_eq!(app.filtered_indices, vec![0, 1, 2]);
}
