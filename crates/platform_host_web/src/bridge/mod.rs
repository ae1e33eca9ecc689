//! Browser capability bridge used by the `platform_host_web` service adapters.
//!
//! Domains are thin: external navigation and plain-text HTTP GET. Target selection lives in
//! [`interop`].

mod interop;

/// Status code and body of a completed HTTP GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body decoded as text.
    pub body: String,
}

impl TextResponse {
    /// Returns whether the status is in the `2xx` range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub async fn open_external_url(url: &str) -> Result<(), String> {
    interop::open_external_url(url).await
}

pub async fn fetch_text(url: &str) -> Result<TextResponse, String> {
    interop::fetch_text(url).await
}
