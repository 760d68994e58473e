//! Deduplication keys derived from hit URLs.
//!
//! The key is the network location followed by the path with trailing
//! slashes removed. Scheme, query and fragment are dropped. Host and path
//! keep their original case, so `http://Ex.com/a` and `http://ex.com/a`
//! are different keys while `http://ex.com/a` and `https://ex.com/a` are
//! the same key.
//!
//! For web schemes (and scheme-less links) `;params` on the last path
//! segment are dropped as well, so `http://ex.com/a;jsessionid=1` keys as
//! `ex.com/a`. Parameters on earlier segments stay in the path.
//!
//! Splitting is done on the raw string rather than through [`url::Url`],
//! which would lower-case the host and rewrite the path.

/// Schemes whose last path segment may carry `;params`.
const PARAM_SCHEMES: &[&str] = &[
    "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu", "sip",
    "sips", "mms", "sftp", "tel",
];

/// Compute the deduplication key for `href`.
///
/// Returns an empty string for an empty `href` or one with neither a
/// network location nor a path.
///
/// # Examples
///
/// ```
/// use research_search::orchestrator::url_normalize::normalized_key;
///
/// assert_eq!(normalized_key("https://ex.com/a/?q=1#top"), "ex.com/a");
/// assert_eq!(normalized_key("http://ex.com/a;v=2"), "ex.com/a");
/// ```
pub fn normalized_key(href: &str) -> String {
    let cleaned: String = href
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let (netloc, path) = split_netloc_path(&cleaned);
    format!("{netloc}{}", path.trim_end_matches('/'))
}

/// Split into `(netloc, path)`, discarding scheme, query, fragment and,
/// where the scheme allows them, last-segment params.
fn split_netloc_path(url: &str) -> (&str, &str) {
    let (scheme, rest) = split_scheme(url);

    let (netloc, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            (&after[..end], &after[end..])
        }
        None => ("", rest),
    };

    let path_end = rest.find(['?', '#']).unwrap_or(rest.len());
    let path = &rest[..path_end];

    let takes_params = match scheme {
        Some(scheme) => PARAM_SCHEMES.iter().any(|s| s.eq_ignore_ascii_case(scheme)),
        None => true,
    };
    if takes_params {
        (netloc, strip_params(path))
    } else {
        (netloc, path)
    }
}

/// Cut the last path segment at its first `;`.
fn strip_params(path: &str) -> &str {
    let last_segment = path.rfind('/').map_or(0, |slash| slash + 1);
    match path[last_segment..].find(';') {
        Some(semi) => &path[..last_segment + semi],
        None => path,
    }
}

/// Separate a leading `scheme:` if the prefix is a syntactically valid
/// scheme.
fn split_scheme(url: &str) -> (Option<&str>, &str) {
    let Some(colon) = url.find(':') else {
        return (None, url);
    };
    let scheme = &url[..colon];
    let starts_alpha = scheme.starts_with(|c: char| c.is_ascii_alphabetic());
    let valid_chars = scheme
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if starts_alpha && valid_chars {
        (Some(scheme), &url[colon + 1..])
    } else {
        (None, url)
    }
}
