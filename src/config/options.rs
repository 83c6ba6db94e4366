// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::consts::*;

/// Upper bound for a single pause; keeps `Duration::from_secs_f64` in range.
const MAX_DELAY_SECS: f64 = 3600.0;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// How each input line is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    /// Line must be exactly one video id.
    #[default]
    Ids,
    /// Line is a URL; the id is pulled out of it.
    Urls,
}

impl InputMode {
    pub fn from_urls_flag(urls: bool) -> Self {
        if urls { InputMode::Urls } else { InputMode::Ids }
    }
    pub fn is_urls(self) -> bool { matches!(self, InputMode::Urls) }
}

/// Uniform pause taken before every request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min_secs: f64,
    pub max_secs: f64,
}

impl Default for DelayRange {
    fn default() -> Self {
        Self { min_secs: DELAY_MIN_SECS, max_secs: DELAY_MAX_SECS }
    }
}

impl DelayRange {
    pub fn new(min_secs: f64, max_secs: f64) -> Result<Self, String> {
        if !min_secs.is_finite() || !max_secs.is_finite() || min_secs < 0.0 {
            return Err(format!("Invalid delay range: {min_secs}..{max_secs}"));
        }
        if min_secs > max_secs {
            return Err(format!("Delay min ({min_secs}) is above max ({max_secs})"));
        }
        Ok(Self { min_secs, max_secs })
    }

    /// No pause at all. Tests and local runs.
    pub fn none() -> Self {
        Self { min_secs: 0.0, max_secs: 0.0 }
    }

    /// Bounds after clamping whatever came in from settings or the UI.
    pub fn bounds(&self) -> (f64, f64) {
        let fix = |v: f64| if v.is_finite() { v.clamp(0.0, MAX_DELAY_SECS) } else { 0.0 };
        let lo = fix(self.min_secs);
        let hi = fix(self.max_secs).max(lo);
        (lo, hi)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let (lo, hi) = self.bounds();
        if hi <= lo {
            return Duration::from_secs_f64(lo);
        }
        Duration::from_secs_f64(rng.random_range(lo..=hi))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    pub input_mode: InputMode,
    /// Client-identity pool. Empty means the built-in list.
    pub user_agents: Vec<String>,
    /// Page URL template; `{id}` is replaced by the video id.
    pub watch_url: String,
    pub timeout_secs: u64,
    pub delay: DelayRange,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            input_mode: InputMode::Ids,
            user_agents: USER_AGENTS.iter().map(|ua| s!(*ua)).collect(),
            watch_url: s!(WATCH_URL),
            timeout_secs: REQUEST_TIMEOUT_SECS,
            delay: DelayRange::default(),
        }
    }
}

impl ScrapeOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn pick_user_agent<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self.user_agents.choose(rng) {
            Some(ua) => ua.clone(),
            None => s!(*USER_AGENTS.choose(rng).unwrap_or(&USER_AGENTS[0])),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// "<dir>/<stem>.<ext>", the extension always following the format.
    pub fn out_path(&self) -> PathBuf {
        self.out_path
            .dir
            .join(format!("{}.{}", self.out_path.file_stem, self.format.ext()))
    }

    /// Parse text from the GUI or CLI into dir + stem. Ignores pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_string_lossy().into_owned();
        }
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct OutputPath {
    dir: PathBuf,
    file_stem: String, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: s!(DEFAULT_FILE),
        }
    }
}
