//! Parsing of OAuth redirect callbacks out of the entry URL's query string.
//!
//! The backend completes the provider handshake server-side and redirects
//! the browser back with `?github=connected|error` / `?linkedin=...`.
//! Unrecognized values are ignored and left in place.

use super::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackOutcome {
    Connected,
    Error,
}

/// Recognized callback parameters found in a URL, one slot per platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub github: Option<CallbackOutcome>,
    pub linkedin: Option<CallbackOutcome>,
}

impl CallbackParams {
    pub fn is_empty(&self) -> bool {
        self.github.is_none() && self.linkedin.is_none()
    }

    pub fn outcome(&self, platform: Platform) -> Option<CallbackOutcome> {
        match platform {
            Platform::Github => self.github,
            Platform::Linkedin => self.linkedin,
        }
    }
}

fn parse_outcome(value: &str) -> Option<CallbackOutcome> {
    match value {
        "connected" => Some(CallbackOutcome::Connected),
        "error" => Some(CallbackOutcome::Error),
        _ => None,
    }
}

fn split_url(url: &str) -> (&str, Option<&str>, Option<&str>) {
    let (rest, fragment) = match url.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (url, None),
    };
    match rest.split_once('?') {
        Some((base, query)) => (base, Some(query), fragment),
        None => (rest, None, fragment),
    }
}

/// Extracts the recognized callback parameters from `url`.
pub fn parse_callback(url: &str) -> CallbackParams {
    let (_, query, _) = split_url(url);
    let mut params = CallbackParams::default();

    for pair in query.unwrap_or_default().split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "github" => params.github = params.github.or_else(|| parse_outcome(value)),
            "linkedin" => params.linkedin = params.linkedin.or_else(|| parse_outcome(value)),
            _ => {}
        }
    }
    params
}

/// Returns `url` with the recognized callback parameters removed. Other
/// query parameters and the fragment survive untouched.
pub fn strip_callback_params(url: &str) -> String {
    let (base, query, fragment) = split_url(url);

    let kept: Vec<&str> = query
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            !(matches!(key, "github" | "linkedin") && parse_outcome(value).is_some())
        })
        .collect();

    let mut out = base.to_string();
    if !kept.is_empty() {
        out.push('?');
        out.push_str(&kept.join("&"));
    }
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}
