// src/config/consts.rs

// Net config
pub const WATCH_URL: &str = "https://www.youtube.com/watch?v={id}";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const REFERER: &str = "https://www.google.com/";

// Identity pool, one picked per request
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/113.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.4 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/112.0",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/113.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/113.0.0.0 Safari/537.36 Edg/113.0.1774.42",
];

// Pacing: uniform pause before every request
pub const DELAY_MIN_SECS: f64 = 2.0;
pub const DELAY_MAX_SECS: f64 = 5.0;

// Identifiers
pub const VIDEO_ID_LEN: usize = 11;

// Local state
pub const STORE_DIR: &str = ".store";
pub const SETTINGS_FILE: &str = "settings.toml";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "youtube_views";
pub const HEADERS: [&str; 4] = ["Input", "Video ID", "Views", "Status"];
pub const NOT_AVAILABLE: &str = "N/A";
