//! HTTP client seam for the fetch engine.
//!
//! The engine only depends on [`HttpClient`], so tests can inject stubs
//! and failure simulators; [`CurlClient`] is the production implementation.

use std::time::Duration;

/// Desktop-browser User-Agent the image host expects.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/122 Safari/537.36";

/// Error from a single GET attempt, shaped for retry classification.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("timed out")]
    Timeout,
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("HTTP {0}")]
    Status(u32),
    #[error("{0}")]
    Other(String),
}

/// Blocking GET returning the whole response body.
pub trait HttpClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, HttpError>;
}

/// libcurl-backed client with per-attempt timeouts and browser-style headers.
pub struct CurlClient {
    timeout: Duration,
}

impl CurlClient {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

fn map_curl_error(e: curl::Error) -> HttpError {
    if e.is_operation_timedout() {
        return HttpError::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return HttpError::Connection(e.to_string());
    }
    HttpError::Other(e.to_string())
}

impl HttpClient for CurlClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(map_curl_error)?;
        easy.follow_location(true).map_err(map_curl_error)?;
        easy.max_redirections(10).map_err(map_curl_error)?;
        easy.useragent(USER_AGENT).map_err(map_curl_error)?;
        easy.connect_timeout(self.timeout).map_err(map_curl_error)?;
        easy.timeout(self.timeout).map_err(map_curl_error)?;

        let mut list = curl::easy::List::new();
        list.append("Accept: image/*,application/octet-stream;q=0.9,*/*;q=0.8")
            .map_err(map_curl_error)?;
        list.append("Accept-Language: es-ES,es;q=0.9,en;q=0.8")
            .map_err(map_curl_error)?;
        easy.http_headers(list).map_err(map_curl_error)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(map_curl_error)?;
            transfer.perform().map_err(map_curl_error)?;
        }

        let code = easy.response_code().map_err(map_curl_error)?;
        if !(200..300).contains(&code) {
            return Err(HttpError::Status(code));
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(HttpError::Timeout.to_string(), "timed out");
        assert_eq!(HttpError::Status(503).to_string(), "HTTP 503");
        assert_eq!(
            HttpError::Connection("reset".into()).to_string(),
            "connection failed: reset"
        );
    }
}
