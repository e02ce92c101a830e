// src/core/sanitize.rs

/// Longest title fragment kept in a file name (in chars).
const MAX_STEM_CHARS: usize = 150;

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Make a paper title safe to use as a file name on every platform.
///
/// Drops characters Windows or Unix reject (`\ / : * ? " < > |` and control
/// chars), collapses whitespace, trims trailing dots/spaces and caps length.
pub fn sanitize_filename(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| !matches!(c, '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    let mut out: String = normalize_ws(&kept).chars().take(MAX_STEM_CHARS).collect();
    while out.ends_with(['.', ' ']) {
        out.pop();
    }
    if out.is_empty() { s!("untitled") } else { out }
}

/// `{date}_{title}.pdf`
pub fn pdf_file_name(date: &str, title: &str) -> String {
    join!(date, "_", &sanitize_filename(title), ".pdf")
}
