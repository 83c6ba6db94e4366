// src/scrape.rs
//
// View-Count Extractor + the sequential run loop.
// One id at a time: random pause, random identity, one fetch, pattern chain.

use std::{
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{
    config::options::ScrapeOptions,
    core::{PageSource, extract},
    data::{self, ExtractionResult, InputLine, ResultRow},
    progress::Progress,
};

pub struct Extractor<S: PageSource> {
    source: S,
    options: ScrapeOptions,
    rng: StdRng,
}

impl<S: PageSource> Extractor<S> {
    pub fn new(source: S, options: ScrapeOptions) -> Self {
        Self::with_rng(source, options, StdRng::from_os_rng())
    }

    /// Fixed RNG so identity/pause picks are reproducible.
    pub fn with_rng(source: S, options: ScrapeOptions, rng: StdRng) -> Self {
        Self { source, options, rng }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn options(&self) -> &ScrapeOptions {
        &self.options
    }

    /// Pause, fetch, extract. Always yields a result; failures are in `outcome`.
    pub fn views_for(&mut self, video_id: &str) -> ExtractionResult {
        let pause = self.options.delay.sample(&mut self.rng);
        let user_agent = self.options.pick_user_agent(&mut self.rng);
        logd!("Extract: {} pause={:?} ua={}", video_id, pause, user_agent);
        thread::sleep(pause);

        let outcome = self
            .source
            .fetch_page(video_id, &user_agent)
            .and_then(|body| extract::extract_view_count(&body));

        match &outcome {
            Ok(v) => logf!("Extract: {} views={}", video_id, v),
            Err(e) => loge!("Extract: {} failed kind={}: {}", video_id, e.kind(), e),
        }
        ExtractionResult::new(video_id, outcome)
    }
}

/// Run every pending line through the extractor, in order.
///
/// Blank and malformed lines are carried through untouched and never fetched.
/// A set `stop` flag ends the run between items; unreached rows stay Pending.
pub fn run<S: PageSource>(
    lines: Vec<InputLine>,
    extractor: &mut Extractor<S>,
    mut progress: Option<&mut dyn Progress>,
    stop: Option<&AtomicBool>,
) -> Vec<ResultRow> {
    let mut rows = data::rows_from_lines(lines);
    let todo: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_pending())
        .map(|(i, _)| i)
        .collect();

    logf!("Scrape: Begin rows={} to_fetch={}", rows.len(), todo.len());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(todo.len());
    }

    let mut stopped = false;
    for ix in todo {
        if stop.is_some_and(|s| s.load(Ordering::Relaxed)) {
            logf!("Scrape: Stop requested before row {}", ix);
            if let Some(p) = progress.as_deref_mut() {
                p.log("Stopped");
            }
            stopped = true;
            break;
        }
        let Some(video_id) = rows[ix].input.video_id.clone() else { continue };

        if let Some(p) = progress.as_deref_mut() {
            p.item_started(ix, &video_id);
        }
        let result = extractor.views_for(&video_id);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(ix, &result);
        }
        rows[ix].attach(result);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish(stopped);
    }
    let tally = data::Tally::of(&rows);
    logf!(
        "Scrape: Done ok={} failed={} pending={} stopped={}",
        tally.succeeded, tally.failed, tally.pending, stopped
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::{DelayRange, InputMode};
    use crate::core::{Failure, normalize::normalize};
    use crate::progress::NullProgress;

    /// Same page for every id.
    struct Fixed(&'static str);

    impl PageSource for Fixed {
        fn fetch_page(&self, _video_id: &str, user_agent: &str) -> Result<String, Failure> {
            assert!(!user_agent.is_empty());
            Ok(s!(self.0))
        }
    }

    fn extractor(body: &'static str) -> Extractor<Fixed> {
        let opts = ScrapeOptions { delay: DelayRange::none(), ..ScrapeOptions::default() };
        Extractor::with_rng(Fixed(body), opts, StdRng::seed_from_u64(11))
    }

    #[test]
    fn views_for_runs_the_pattern_chain() {
        let mut ex = extractor(r#"<script>{"viewCount":"4,200"}</script>"#);
        assert_eq!(ex.options().delay, DelayRange::none());
        let r = ex.views_for("dQw4w9WgXcQ");
        assert_eq!(r.video_id, "dQw4w9WgXcQ");
        assert_eq!(r.views(), Some(4200));
    }

    #[test]
    fn page_without_count_is_an_extraction_failure() {
        let mut ex = extractor("<html></html>");
        let r = ex.views_for("dQw4w9WgXcQ");
        assert_eq!(r.failure(), Some(&Failure::ExtractionFailed));
    }

    #[test]
    fn every_line_keeps_its_row() {
        let mut ex = extractor(r#"{"viewCount":"7"}"#);
        let lines = normalize("dQw4w9WgXcQ\n\nbad\n", InputMode::Ids);
        let mut null = NullProgress;
        let rows = run(lines, &mut ex, Some(&mut null), None);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].views_cell(), "7");
        assert!(rows[1..].iter().all(|r| r.result().is_none()));
    }
}
