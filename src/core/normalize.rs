// src/core/normalize.rs
//
// Input Normalizer: pasted text → one InputLine per line.
// Never fails; lines that don't yield an id just carry a status.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::VIDEO_ID_LEN;
use crate::config::options::InputMode;
use crate::data::InputLine;

/// First 11-char id token after `v=` or `/`. Leftmost match wins.
static URL_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("static regex")
});

pub fn normalize(text: &str, mode: InputMode) -> Vec<InputLine> {
    text.split('\n').map(|line| normalize_line(line, mode)).collect()
}

pub fn normalize_line(line: &str, mode: InputMode) -> InputLine {
    let line = line.trim();
    if line.is_empty() {
        return InputLine::blank();
    }

    let id = match mode {
        InputMode::Urls => id_from_url(line),
        InputMode::Ids => is_video_id(line).then_some(line),
    };

    match id {
        Some(id) => InputLine::pending(line, id),
        None => InputLine::invalid(line),
    }
}

pub fn id_from_url(url: &str) -> Option<&str> {
    URL_ID
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

#[inline]
fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Exactly 11 of `[0-9A-Za-z_-]`.
pub fn is_video_id(s: &str) -> bool {
    s.len() == VIDEO_ID_LEN && s.chars().all(is_id_char)
}
