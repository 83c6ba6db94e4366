// src/core/net.rs
//
// One GET per video watch page, dressed up as a browser.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, REFERER, USER_AGENT};

use crate::config::consts;
use crate::config::options::ScrapeOptions;

use super::error::{Failure, error_chain};

/// Where pages come from. The HTTP client in production; fakes in tests.
pub trait PageSource {
    /// Body of the watch page for `video_id` on a 2xx answer, a categorized failure otherwise.
    fn fetch_page(&self, video_id: &str, user_agent: &str) -> Result<String, Failure>;
}

pub struct HttpSource {
    client: Client,
    watch_url: String,
}

impl HttpSource {
    pub fn new(opts: &ScrapeOptions) -> Result<Self, Failure> {
        let mut builder = Client::builder().timeout(opts.timeout());
        // local targets never go through a system proxy
        if is_loopback(&opts.watch_url) {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| Failure::Unexpected(error_chain(&e)))?;
        Ok(Self { client, watch_url: opts.watch_url.clone() })
    }

    pub fn url_for(&self, video_id: &str) -> String {
        self.watch_url.replace("{id}", video_id)
    }
}

fn is_loopback(template: &str) -> bool {
    reqwest::Url::parse(&template.replace("{id}", "x"))
        .ok()
        .and_then(|u| u.host_str().map(|h| matches!(h, "localhost" | "127.0.0.1" | "[::1]")))
        .unwrap_or(false)
}

impl PageSource for HttpSource {
    fn fetch_page(&self, video_id: &str, user_agent: &str) -> Result<String, Failure> {
        let url = self.url_for(video_id);
        logd!("Net: GET {}", url);

        let resp = self
            .client
            .get(&url)
            .header(USER_AGENT, user_agent)
            .header(ACCEPT_LANGUAGE, consts::ACCEPT_LANGUAGE)
            .header(ACCEPT, consts::ACCEPT)
            .header(REFERER, consts::REFERER)
            .send()?
            .error_for_status()?;

        Ok(resp.text()?)
    }
}
