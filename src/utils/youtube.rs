/// Extracts a YouTube video ID from the common URL shapes: `youtu.be/<id>`,
/// a `v=<id>` query parameter, or the last path segment of an embed URL.
/// Returns None when nothing usable can be pulled out.
pub fn extract_youtube_id(url: &str) -> Option<String> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;

    let (host_and_path, query) = match rest.split_once('?') {
        Some((before, after)) => (before, Some(after)),
        None => (rest, None),
    };
    let (host, path) = match host_and_path.split_once('/') {
        Some((host, path)) => (host, path),
        None => (host_and_path, ""),
    };

    if host.contains("youtu.be") {
        let id = path.trim_matches('/');
        return non_empty(id);
    }

    if let Some(query) = query {
        for pair in query.split('&') {
            if let Some(id) = pair.strip_prefix("v=") {
                return non_empty(id);
            }
        }
    }

    path.split('/').rev().find_map(|segment| non_empty(segment))
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}
