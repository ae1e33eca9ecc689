//! Shared transport interop for browser bridge domains.
//!
//! Routes calls to target-specific implementations behind a uniform API.

use super::TextResponse;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn open_external_url(url: &str) -> Result<(), String> {
    imp::open_external_url(url).await
}

pub async fn fetch_text(url: &str) -> Result<TextResponse, String> {
    imp::fetch_text(url).await
}
