// tests/http_source.rs
//
// HttpSource + extractor against a tiny local HTTP server.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

use rand::SeedableRng;
use rand::rngs::StdRng;

use yt_views::config::options::{DelayRange, InputMode, ScrapeOptions};
use yt_views::core::normalize::normalize;
use yt_views::core::{Failure, HttpSource, PageSource};
use yt_views::scrape::{self, Extractor};

const FOUND: &str = "okVideo0001";
const MISSING: &str = "goneVideo01";
const BARE: &str = "bareVideo01";

/// Request heads seen by the server, one string per request.
type Seen = Arc<Mutex<Vec<String>>>;

fn serve() -> (String, Seen) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    let seen: Seen = Arc::default();
    let log = Arc::clone(&seen);

    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            handle(stream, &log);
        }
    });

    (format!("http://{addr}/watch?v={{id}}"), seen)
}

fn handle(mut stream: TcpStream, seen: &Seen) {
    let mut head = String::new();
    let mut reader = BufReader::new(stream.try_clone().expect("clone"));
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
            break;
        }
        head.push_str(&line);
    }
    seen.lock().unwrap().push(head.clone());

    let (status, body) = if head.contains(FOUND) {
        ("200 OK", r#"<html><head><script nonce="x">var ytInitialData = {"viewCount":{"videoViewCountRenderer":{"viewCount":{"simpleText":"1,234 views"}}}};</script></head></html>"#)
    } else if head.contains(BARE) {
        ("200 OK", "<html><body>nothing to see</body></html>")
    } else {
        ("404 Not Found", "not found")
    };
    let resp = format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(resp.as_bytes());
}

fn options(watch_url: String) -> ScrapeOptions {
    ScrapeOptions {
        watch_url,
        timeout_secs: 5,
        delay: DelayRange::none(),
        user_agents: vec!["test-agent/1.0".into()],
        ..ScrapeOptions::default()
    }
}

#[test]
fn found_page_yields_count() {
    let (url, _) = serve();
    let source = HttpSource::new(&options(url)).unwrap();
    let body = source.fetch_page(FOUND, "test-agent/1.0").unwrap();
    assert_eq!(yt_views::core::extract::extract_view_count(&body), Ok(1234));
}

#[test]
fn not_found_is_an_http_failure() {
    let (url, _) = serve();
    let source = HttpSource::new(&options(url)).unwrap();
    let err = source.fetch_page(MISSING, "test-agent/1.0").unwrap_err();
    assert_eq!(err.http_status(), Some(404));
    assert!(err.to_string().starts_with("HTTP error: "), "{err}");
}

#[test]
fn unreachable_host_is_a_request_failure() {
    // bind then drop: nothing listens on this port any more
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let source = HttpSource::new(&options(format!("http://127.0.0.1:{port}/watch?v={{id}}"))).unwrap();
    let err = source.fetch_page(FOUND, "test-agent/1.0").unwrap_err();
    assert!(matches!(err, Failure::Request(_)), "{err:?}");
}

#[test]
fn browser_headers_are_sent() {
    let (url, seen) = serve();
    let source = HttpSource::new(&options(url)).unwrap();
    source.fetch_page(FOUND, "test-agent/1.0").unwrap();

    let head = seen.lock().unwrap()[0].to_ascii_lowercase();
    assert!(head.starts_with(&format!("get /watch?v={}", FOUND.to_ascii_lowercase())), "{head}");
    assert!(head.contains("user-agent: test-agent/1.0"));
    assert!(head.contains("accept-language: en-us,en;q=0.9"));
    assert!(head.contains("referer: https://www.google.com/"));
}

#[test]
fn whole_run_survives_404_and_missing_counts() {
    let (url, seen) = serve();
    let source = HttpSource::new(&options(url.clone())).unwrap();
    let mut ex = Extractor::with_rng(source, options(url), StdRng::seed_from_u64(9));

    let text = format!("{MISSING}\n\n{BARE}\nnope\n{FOUND}");
    let rows = scrape::run(normalize(&text, InputMode::Ids), &mut ex, None, None);

    let labels: Vec<String> = rows.iter().map(|r| r.status_label()).collect();
    assert!(labels[0].starts_with("HTTP error: "));
    assert_eq!(labels[1], "Blank line");
    assert_eq!(labels[2], "Could not extract view count");
    assert_eq!(labels[3], "Invalid video ID format");
    assert_eq!(labels[4], "Success");
    assert_eq!(rows[4].views_cell(), "1234");

    // blank and invalid lines never hit the server
    assert_eq!(seen.lock().unwrap().len(), 3);
}
