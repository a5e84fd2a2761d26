//! Filename derivation for downloaded resumes from the
//! `content-disposition` response header.

pub const DEFAULT_FILENAME: &str = "resume.pdf";

/// Pulls the quoted filename out of a `content-disposition` header value,
/// e.g. `attachment; filename="jane_doe_resume.pdf"`. Falls back to
/// [`DEFAULT_FILENAME`] when the header is absent or unparsable.
pub fn filename_from_disposition(header: Option<&str>) -> String {
    header
        .and_then(extract_quoted_filename)
        .unwrap_or(DEFAULT_FILENAME)
        .to_string()
}

fn extract_quoted_filename(header: &str) -> Option<&str> {
    let rest = header.split_once("filename=\"")?.1;
    let name = rest.split_once('"')?.0;
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
