use clienthub::{validate, Client, ValidationError};

fn valid_client() -> Client {
    Client::new("Alpha", "https://example.com/alpha.zip")
}

#[test]
fn missing_name_is_rejected_first() {
    let mut client = valid_client();
    client.name = String::new();
    assert_eq!(validate(&client), Err(ValidationError::NameRequired));

    // The name rule wins even when later rules would also fail.
    client.download = "ftp://example.com".to_string();
    assert_eq!(validate(&client), Err(ValidationError::NameRequired));
}

#[test]
fn missing_download_is_rejected() {
    let mut client = valid_client();
    client.download = String::new();
    assert_eq!(validate(&client), Err(ValidationError::DownloadRequired));
}

#[test]
fn non_http_download_is_rejected() {
    let mut client = valid_client();
    client.download = "ftp://example.com/alpha.zip".to_string();
    assert_eq!(validate(&client), Err(ValidationError::DownloadScheme));
}

#[test]
fn non_http_website_is_rejected() {
    let mut client = valid_client();
    client.website = Some("gopher://example.com".to_string());
    assert_eq!(validate(&client), Err(ValidationError::WebsiteScheme));
}

#[test]
fn valid_records_are_accepted() {
    assert_eq!(validate(&valid_client()), Ok(()));

    let mut full = valid_client();
    full.short = Some("a client".to_string());
    full.website = Some("http://example.com".to_string());
    full.youtube = Some("not even a url".to_string());
    full.discord = Some("also unchecked".to_string());
    assert_eq!(validate(&full), Ok(()));
}

#[test]
fn plain_http_scheme_is_accepted() {
    let mut client = valid_client();
    client.download = "http://example.com/alpha.zip".to_string();
    assert_eq!(validate(&client), Ok(()));
}
