use pretty_assertions::assert_eq;

use clienthub::catalog::loader::{load_clients, parse_clients, save_clients, to_json_pretty};
use clienthub::Client;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn sample() -> Vec<Client> {
    let mut alpha = Client::new("Alpha", "https://example.com/alpha.zip");
    alpha.short = Some("A client".to_string());
    alpha.version = Some("1.2".to_string());
    alpha.youtube = Some("https://youtu.be/abc123".to_string());
    let beta = Client::new("Beta", "http://example.com/beta.zip");
    vec![alpha, beta]
}

#[test]
fn export_then_import_yields_an_identical_list() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("clients.json");

    let clients = sample();
    save_clients(&path, &clients)?;
    let reloaded = load_clients(&path)?;
    assert_eq!(reloaded, clients);
    Ok(())
}

#[test]
fn export_is_pretty_printed_with_two_space_indent() -> Result<()> {
    let text = to_json_pretty(&sample())?;
    assert!(text.starts_with("[\n  {\n    \"name\": \"Alpha\""));
    Ok(())
}

#[test]
fn absent_optional_fields_are_omitted_entirely() -> Result<()> {
    let text = to_json_pretty(&[Client::new("Beta", "https://b")])?;
    assert!(!text.contains("\"short\""));
    assert!(!text.contains("\"website\""));
    assert!(!text.contains("null"));
    Ok(())
}

#[test]
fn a_non_array_document_is_a_shape_error() {
    assert!(parse_clients("{\"name\": \"Alpha\"}").is_err());
    assert!(parse_clients("not json at all").is_err());
}

#[test]
fn records_missing_required_fields_are_a_shape_error() {
    assert!(parse_clients("[{\"name\": \"Alpha\"}]").is_err());
    assert!(parse_clients("[{\"download\": \"http://a\"}]").is_err());
    assert!(parse_clients("[42]").is_err());
}

#[test]
fn a_failed_load_leaves_the_previous_list_in_place() -> Result<()> {
    use clienthub::app::App;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("clients.json");
    std::fs::write(&path, "{ not an array }")?;

    let mut app = App::new(sample(), path.clone());
    // The reload path only replaces the list on a successful parse.
    if let Ok(clients) = load_clients(&path) {
        app.replace_all(clients);
    }
    assert_eq!(app.clients, sample());
    Ok(())
}

#[test]
fn unknown_fields_in_the_document_are_tolerated() -> Result<()> {
    let clients =
        parse_clients("[{\"name\": \"A\", \"download\": \"http://a\", \"extra\": \"x\"}]")?;
    assert_eq!(clients, vec![Client::new("A", "http://a")]);
    Ok(())
}
