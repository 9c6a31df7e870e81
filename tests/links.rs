use clienthub::utils::youtube::{embed_url, extract_youtube_id};

#[test]
fn short_link_uses_the_path() {
    assert_eq!(
        extract_youtube_id("https://youtu.be/abc123"),
        Some("abc123".to_string())
    );
}

#[test]
fn watch_url_uses_the_v_parameter() {
    assert_eq!(
        extract_youtube_id("https://www.youtube.com/watch?v=xyz789"),
        Some("xyz789".to_string())
    );
    assert_eq!(
        extract_youtube_id("https://www.youtube.com/watch?feature=share&v=xyz789"),
        Some("xyz789".to_string())
    );
}

#[test]
fn embed_url_uses_the_last_path_segment() {
    assert_eq!(
        extract_youtube_id("https://www.youtube.com/embed/id42"),
        Some("id42".to_string())
    );
    assert_eq!(
        extract_youtube_id("https://www.youtube.com/embed/id42/"),
        Some("id42".to_string())
    );
}

#[test]
fn unusable_input_yields_none() {
    assert_eq!(extract_youtube_id("not a url"), None);
    assert_eq!(extract_youtube_id("https://example.com"), None);
    assert_eq!(extract_youtube_id(""), None);
}

#[test]
fn embed_url_points_at_the_embed_endpoint() {
    assert_eq!(embed_url("abc"), "https://www.youtube.com/embed/abc");
}
