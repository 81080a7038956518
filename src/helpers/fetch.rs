use crate::error::MergeSheetError;
use log::info;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Timeout applied to every remote request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Not an http(s) URL: '{0}'")]
    UrlSchemeError(String),

    #[error("Fetching '{url}' failed with HTTP status {status}")]
    HttpStatusError { url: String, status: u16 },

    #[error("No data from remote file: '{0}'")]
    RemoteFileNoDataError(String),

    #[error("Received an HTML page instead of spreadsheet data from '{0}'")]
    HtmlResponseError(String),
}

/// Downloads a remote file into memory.
///
/// The URL scheme is validated before any request is issued; non-success
/// statuses, empty bodies, and HTML bodies (sign-in pages returned for
/// private documents) are rejected.
pub(crate) fn fetch_bytes(url: &str) -> Result<Vec<u8>, MergeSheetError> {
    if !is_http_url(url) {
        Err(FetchError::UrlSchemeError(url.to_owned()))?;
    }

    info!("fetching '{}'", url);
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        Err(FetchError::HttpStatusError {
            url: url.to_owned(),
            status: status.as_u16(),
        })?;
    }

    let bytes = response.bytes()?.to_vec();
    if bytes.is_empty() {
        Err(FetchError::RemoteFileNoDataError(url.to_owned()))?;
    }
    if looks_like_html(&bytes) {
        Err(FetchError::HtmlResponseError(url.to_owned()))?;
    }
    Ok(bytes)
}

/// Checks if a string is an http or https URL.
pub(crate) fn is_http_url(value: &str) -> bool {
    if let Ok(url) = Url::parse(value) {
        matches!(url.scheme(), "http" | "https")
    } else {
        false
    }
}

/// Detects HTML documents served in place of CSV data.
fn looks_like_html(bytes: &[u8]) -> bool {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(256)]);
    let head = head.trim_start().as_bytes();
    head.len() >= 5
        && (head[..9.min(head.len())].eq_ignore_ascii_case(b"<!doctype")
            || head[..5].eq_ignore_ascii_case(b"<html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_http_url() {
        // Local paths are not URLs
        assert!(!is_http_url("test.csv"));
        assert!(!is_http_url("/path/to/test.csv"));
        assert!(!is_http_url("./relative/test.csv"));

        // Remote URLs
        assert!(is_http_url("http://example.com/test.csv"));
        assert!(is_http_url("https://docs.google.com/spreadsheets/d/ABC/export?format=csv"));

        // Non-http schemes are rejected
        assert!(!is_http_url("file:///path/to/test.csv"));
        assert!(!is_http_url("s3://bucket/test.csv"));
    }

    #[test]
    fn test_looks_like_html() {
        assert!(looks_like_html(b"<!DOCTYPE html><html><head>"));
        assert!(looks_like_html(b"\n  <html lang=\"en\">"));
        assert!(looks_like_html(b"<HTML><BODY>sign in</BODY>"));

        assert!(!looks_like_html(b"Date,Name,Mobile Number\n"));
        assert!(!looks_like_html(b""));
        assert!(!looks_like_html(b"<ht"));
    }
}
