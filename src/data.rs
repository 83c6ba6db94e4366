// src/data.rs
//
// Row types shared by the normalizer, the extractor and the front ends.
//
// - InputLine: one pasted line, classified once by the normalizer.
// - ExtractionResult: what the extractor got for one id. Made once, never changed.
// - ResultRow: a line plus at most one result. This is what the table and the
//              export show.

use crate::config::consts::{HEADERS, NOT_AVAILABLE};
use crate::core::Failure;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStatus {
    /// Has an id; waiting for the extractor
    Pending,
    Blank,
    InvalidFormat,
}

impl LineStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LineStatus::Pending => "Pending",
            LineStatus::Blank => "Blank line",
            LineStatus::InvalidFormat => "Invalid video ID format",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputLine {
    /// Trimmed source text
    pub raw: String,
    pub video_id: Option<String>,
    pub status: LineStatus,
}

impl InputLine {
    pub fn blank() -> Self {
        Self { raw: s!(), video_id: None, status: LineStatus::Blank }
    }
    pub fn invalid(raw: &str) -> Self {
        Self { raw: s!(raw), video_id: None, status: LineStatus::InvalidFormat }
    }
    pub fn pending(raw: &str, video_id: &str) -> Self {
        Self { raw: s!(raw), video_id: Some(s!(video_id)), status: LineStatus::Pending }
    }
    pub fn is_pending(&self) -> bool {
        self.status == LineStatus::Pending && self.video_id.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractionResult {
    pub video_id: String,
    pub outcome: Result<u64, Failure>,
}

impl ExtractionResult {
    pub fn new(video_id: &str, outcome: Result<u64, Failure>) -> Self {
        Self { video_id: s!(video_id), outcome }
    }

    pub fn views(&self) -> Option<u64> {
        self.outcome.as_ref().ok().copied()
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.outcome.as_ref().err()
    }

    pub fn status_label(&self) -> String {
        match &self.outcome {
            Ok(_) => s!("Success"),
            Err(f) => f.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub input: InputLine,
    result: Option<ExtractionResult>,
}

impl ResultRow {
    pub fn new(input: InputLine) -> Self {
        Self { input, result: None }
    }

    pub fn result(&self) -> Option<&ExtractionResult> {
        self.result.as_ref()
    }

    /// Still waiting for its one result.
    pub fn is_pending(&self) -> bool {
        self.input.is_pending() && self.result.is_none()
    }

    /// Record the result. Only the first result for a pending line is kept.
    pub fn attach(&mut self, result: ExtractionResult) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.result = Some(result);
        true
    }

    pub fn views_cell(&self) -> String {
        match self.result.as_ref().and_then(|r| r.views()) {
            Some(v) => v.to_string(),
            None => s!(NOT_AVAILABLE),
        }
    }

    pub fn status_label(&self) -> String {
        match &self.result {
            Some(r) => r.status_label(),
            None => s!(self.input.status.label()),
        }
    }

    /// [Input, Video ID, Views, Status]
    pub fn cells(&self) -> Vec<String> {
        cells![
            self.input.raw.as_str(),
            self.input.video_id.as_deref().unwrap_or(""),
            self.views_cell(),
            self.status_label(),
        ]
    }
}

pub fn rows_from_lines(lines: Vec<InputLine>) -> Vec<ResultRow> {
    lines.into_iter().map(ResultRow::new).collect()
}

pub fn headers() -> Vec<String> {
    HEADERS.iter().map(|h| s!(*h)).collect()
}

pub fn table_cells(rows: &[ResultRow]) -> Vec<Vec<String>> {
    rows.iter().map(ResultRow::cells).collect()
}

/// Progress counters over a row list.
/// Blank and invalid lines count as processed failures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub total: usize,
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub pending: usize,
}

impl Tally {
    pub fn of(rows: &[ResultRow]) -> Self {
        let total = rows.len();
        let pending = rows.iter().filter(|r| r.is_pending()).count();
        let succeeded = rows
            .iter()
            .filter(|r| r.result().is_some_and(ExtractionResult::is_success))
            .count();
        let processed = total - pending;
        Self { total, processed, succeeded, failed: processed - succeeded, pending }
    }

    pub fn fraction(&self) -> f32 {
        if self.total == 0 { 0.0 } else { self.processed as f32 / self.total as f32 }
    }
}
