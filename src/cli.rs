// src/cli.rs
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, eyre};

use crate::{
    config::consts::{DELAY_MAX_SECS, DELAY_MIN_SECS, REQUEST_TIMEOUT_SECS},
    config::options::{AppOptions, DelayRange, ExportFormat, InputMode},
    core::{HttpSource, normalize::normalize},
    data::{ExtractionResult, InputLine, Tally},
    file,
    progress::Progress,
    scrape::{self, Extractor},
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Fetch public view counts for a list of YouTube ids or URLs")]
pub struct Args {
    /// File with one id or URL per line; `-` or nothing reads stdin
    pub input: Option<PathBuf>,

    /// Lines are full video URLs instead of bare ids
    #[arg(long)]
    pub urls: bool,

    /// Output file; the extension follows --format
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Leave the header row out
    #[arg(long)]
    pub no_headers: bool,

    /// Print the table to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Shortest pause before each request, seconds
    #[arg(long, value_name = "SECS", default_value_t = DELAY_MIN_SECS)]
    pub min_delay: f64,

    /// Longest pause before each request, seconds
    #[arg(long, value_name = "SECS", default_value_t = DELAY_MAX_SECS)]
    pub max_delay: f64,

    /// Per-request timeout, seconds
    #[arg(long, value_name = "SECS", default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// User-Agent to rotate through (repeatable); replaces the built-in pool
    #[arg(long = "user-agent", value_name = "UA")]
    pub user_agents: Vec<String>,

    /// Page URL template, `{id}` is replaced by the video id
    #[arg(long, value_name = "URL")]
    pub watch_url: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

impl Args {
    pub fn to_options(&self) -> Result<AppOptions> {
        let mut options = AppOptions::default();

        let scrape = &mut options.scrape;
        scrape.input_mode = InputMode::from_urls_flag(self.urls);
        scrape.delay = DelayRange::new(self.min_delay, self.max_delay).map_err(|e| eyre!(e))?;
        scrape.timeout_secs = self.timeout;
        if !self.user_agents.is_empty() {
            scrape.user_agents = self.user_agents.clone();
        }
        if let Some(url) = &self.watch_url {
            if !url.contains("{id}") {
                return Err(eyre!("--watch-url must contain {{id}}: {url}"));
            }
            scrape.watch_url = url.clone();
        }

        let export = &mut options.export;
        export.format = self.format.into();
        export.include_headers = !self.no_headers;
        if let Some(out) = &self.out {
            export.set_path(out);
        }

        Ok(options)
    }
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    let options = args.to_options()?;
    let text = read_input(args.input.as_deref())?;

    let lines = input_lines(&text, options.scrape.input_mode);
    logf!("CLI: {} line(s), mode={:?}", lines.len(), options.scrape.input_mode);

    let source = HttpSource::new(&options.scrape)?;
    let mut extractor = Extractor::new(source, options.scrape.clone());
    let mut progress = CliProgress::default();
    let rows = scrape::run(lines, &mut extractor, Some(&mut progress), None);

    if args.stdout {
        print!("{}", file::export_string(&options.export, &rows));
    } else {
        let path = file::write_export(&options.export, &rows).map_err(|e| eyre!("Export failed: {e}"))?;
        logf!("Export: OK → {}", path.display());
        eprintln!("Wrote {}", path.display());
    }

    let t = Tally::of(&rows);
    eprintln!("Done: {} ok, {} failed, {} line(s)", t.succeeded, t.failed, t.total);
    Ok(())
}

/// One InputLine per line of a text file. The final newline ends the last
/// line; it does not start an extra blank one.
fn input_lines(text: &str, mode: InputMode) -> Vec<InputLine> {
    let text = text
        .strip_suffix('\n')
        .map(|t| t.strip_suffix('\r').unwrap_or(t))
        .unwrap_or(text);
    normalize(text, mode)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).wrap_err_with(|| format!("Reading {}", p.display()))
        }
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).wrap_err("Reading stdin")?;
            Ok(text)
        }
    }
}

/// Progress lines on stderr; stdout stays clean for --stdout.
#[derive(Default)]
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        if total == 0 {
            eprintln!("No valid ids to fetch");
        }
    }
    fn item_started(&mut self, _row: usize, video_id: &str) {
        eprint!("[{}/{}] {} … ", self.done + 1, self.total, video_id);
    }
    fn item_done(&mut self, _row: usize, result: &ExtractionResult) {
        self.done += 1;
        match result.views() {
            Some(v) => eprintln!("{v}"),
            None => eprintln!("{}", result.status_label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LineStatus;

    #[test]
    fn flags_map_onto_options() {
        let args = Args::parse_from([
            "cli", "ids.txt", "--urls", "-o", "reports/run.txt", "--format", "tsv",
            "--no-headers", "--min-delay", "0.5", "--max-delay", "1",
            "--user-agent", "ua-1", "--user-agent", "ua-2", "--timeout", "3",
        ]);
        let o = args.to_options().unwrap();
        assert_eq!(o.scrape.input_mode, InputMode::Urls);
        assert_eq!(o.scrape.delay, DelayRange { min_secs: 0.5, max_secs: 1.0 });
        assert_eq!(o.scrape.user_agents, vec![s!("ua-1"), s!("ua-2")]);
        assert_eq!(o.scrape.timeout_secs, 3);
        assert_eq!(o.export.format, ExportFormat::Tsv);
        assert!(!o.export.include_headers);
        assert_eq!(o.export.out_path(), PathBuf::from("reports").join("run.tsv"));
    }

    #[test]
    fn defaults_match_builtin_options() {
        let o = Args::parse_from(["cli"]).to_options().unwrap();
        assert_eq!(o, AppOptions::default());
    }

    #[test]
    fn final_newline_adds_no_row() {
        let lines = input_lines("dQw4w9WgXcQ\n9bZkp7q19f0\n", InputMode::Ids);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(InputLine::is_pending));

        assert_eq!(input_lines("dQw4w9WgXcQ\r\n9bZkp7q19f0\r\n", InputMode::Ids).len(), 2);
        assert_eq!(input_lines("dQw4w9WgXcQ", InputMode::Ids).len(), 1);

        // inner and deliberate trailing blanks still count
        let lines = input_lines("dQw4w9WgXcQ\n\n9bZkp7q19f0\n\n", InputMode::Ids);
        let statuses: Vec<LineStatus> = lines.iter().map(|l| l.status).collect();
        assert_eq!(
            statuses,
            vec![LineStatus::Pending, LineStatus::Blank, LineStatus::Pending, LineStatus::Blank]
        );
    }

    #[test]
    fn inverted_delay_and_bad_template_rejected() {
        let args = Args::parse_from(["cli", "--min-delay", "3", "--max-delay", "1"]);
        assert!(args.to_options().is_err());
        let args = Args::parse_from(["cli", "--watch-url", "http://localhost/watch"]);
        assert!(args.to_options().is_err());
    }
}
