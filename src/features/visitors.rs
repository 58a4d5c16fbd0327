//! Visitor counter
//!
//! Reports a page visit to the remote counting service and formats the
//! returned counts as `today/total`. Unrelated to conversion; any failure
//! is logged and shown as [`VISITOR_ERROR_TEXT`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::constants::{VISITOR_API_BASE, VISITOR_ERROR_TEXT};
use crate::utils::error::{KaengError, KaengResult};

/// Body of `POST {base}/visit`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitPayload {
    pub domain: String,
    pub timezone: String,
    pub page_path: String,
    pub page_title: String,
    #[serde(default)]
    pub referrer: String,
}

/// Counts as sent by the service, any JSON number
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisitCounts {
    pub today: f64,
    pub total: f64,
}

impl VisitCounts {
    /// Parse the service response
    ///
    /// `todayCount` and `totalCount` count when they are JSON numbers of any
    /// kind; missing or mistyped fields read as 0.
    pub fn from_response(body: &str) -> KaengResult<Self> {
        let data: Value = serde_json::from_str(body)
            .map_err(|e| KaengError::telemetry(format!("invalid response: {}", e)))?;
        let count = |field: &str| data.get(field).and_then(Value::as_f64).unwrap_or(0.0);
        Ok(Self {
            today: count("todayCount"),
            total: count("totalCount"),
        })
    }
}

impl fmt::Display for VisitCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", Count(self.today), Count(self.total))
    }
}

/// Whole numbers print without a fraction (`3`, not `3.0`)
struct Count(f64);

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 && self.0.abs() < 1e15 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// HTTP boundary of the visitor counter
pub trait VisitTransport {
    /// POST a JSON body and return the response body
    ///
    /// Non-success statuses are errors.
    fn post_json(&self, url: &str, body: &str) -> KaengResult<String>;
}

impl<T: VisitTransport + ?Sized> VisitTransport for &T {
    fn post_json(&self, url: &str, body: &str) -> KaengResult<String> {
        (**self).post_json(url, body)
    }
}

/// Visitor counter client
pub struct VisitorCounter<T: VisitTransport> {
    transport: T,
    base_url: String,
}

impl<T: VisitTransport> VisitorCounter<T> {
    pub fn new(transport: T) -> Self {
        Self::with_base_url(transport, VISITOR_API_BASE)
    }

    pub fn with_base_url(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn visit_url(&self) -> String {
        format!("{}/visit", self.base_url)
    }

    pub fn report(&self, payload: &VisitPayload) -> KaengResult<VisitCounts> {
        let body = serde_json::to_string(payload)
            .map_err(|e| KaengError::telemetry(e.to_string()))?;
        let response = self.transport.post_json(&self.visit_url(), &body)?;
        VisitCounts::from_response(&response)
    }

    /// Counts as `today/total`, or the error text if anything failed
    pub fn display_text(&self, payload: &VisitPayload) -> String {
        match self.report(payload) {
            Ok(counts) => counts.to_string(),
            Err(err) => {
                log::error!("Failed to update visitor count: {}", err);
                VISITOR_ERROR_TEXT.to_string()
            }
        }
    }
}

/// Blocking HTTP transport
#[cfg(all(feature = "telemetry", not(target_arch = "wasm32")))]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

#[cfg(all(feature = "telemetry", not(target_arch = "wasm32")))]
impl HttpTransport {
    pub fn new(timeout: std::time::Duration) -> KaengResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("kaeng/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| KaengError::telemetry(e.to_string()))?;
        Ok(Self { client })
    }
}

#[cfg(all(feature = "telemetry", not(target_arch = "wasm32")))]
impl VisitTransport for HttpTransport {
    fn post_json(&self, url: &str, body: &str) -> KaengResult<String> {
        let resp = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .map_err(|e| KaengError::telemetry(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(KaengError::telemetry(format!(
                "Visitor API error: {}",
                status.as_u16()
            )));
        }
        resp.text().map_err(|e| KaengError::telemetry(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FakeTransport {
        response: KaengResult<String>,
        seen: Mutex<Vec<(String, String)>>,
    }

    impl FakeTransport {
        fn new(response: KaengResult<String>) -> Self {
            Self {
                response,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl VisitTransport for FakeTransport {
        fn post_json(&self, url: &str, body: &str) -> KaengResult<String> {
            self.seen
                .lock()
                .unwrap()
                .push((url.to_string(), body.to_string()));
            self.response.clone()
        }
    }

    fn payload() -> VisitPayload {
        VisitPayload {
            domain: "localhost".to_string(),
            timezone: "Asia/Tbilisi".to_string(),
            page_path: "/".to_string(),
            page_title: "Ka ⇄ Eng".to_string(),
            referrer: String::new(),
        }
    }

    #[test]
    fn test_counts_parse() {
        let counts = VisitCounts::from_response(r#"{"todayCount": 3, "totalCount": 120}"#).unwrap();
        assert_eq!(counts, VisitCounts { today: 3.0, total: 120.0 });
        assert_eq!(counts.to_string(), "3/120");
    }

    #[test]
    fn test_counts_accept_any_json_number() {
        let counts =
            VisitCounts::from_response(r#"{"todayCount": 3.0, "totalCount": 120.0}"#).unwrap();
        assert_eq!(counts.to_string(), "3/120");

        let counts = VisitCounts::from_response(r#"{"todayCount": -1, "totalCount": 2.5}"#).unwrap();
        assert_eq!(counts, VisitCounts { today: -1.0, total: 2.5 });
        assert_eq!(counts.to_string(), "-1/2.5");
    }

    #[test]
    fn test_counts_non_numbers_are_zero() {
        let counts =
            VisitCounts::from_response(r#"{"todayCount": "3", "totalCount": null}"#).unwrap();
        assert_eq!(counts.to_string(), "0/0");
        assert!(VisitCounts::from_response("not json").is_err());
    }

    #[test]
    fn test_report_posts_payload() {
        let transport = FakeTransport::new(Ok(r#"{"todayCount":1,"totalCount":2}"#.to_string()));
        let counter = VisitorCounter::with_base_url(&transport, "https://counter.test/");
        assert_eq!(counter.display_text(&payload()), "1/2");

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].0, "https://counter.test/visit");
        let sent: VisitPayload = serde_json::from_str(&seen[0].1).unwrap();
        assert_eq!(sent, payload());
    }

    #[test]
    fn test_failure_shows_error_text() {
        let transport = FakeTransport::new(Err(KaengError::telemetry("Visitor API error: 500")));
        let counter = VisitorCounter::new(&transport);
        assert_eq!(counter.visit_url(), "https://visitor.6developer.com/visit");
        assert_eq!(counter.display_text(&payload()), VISITOR_ERROR_TEXT);
    }
}
