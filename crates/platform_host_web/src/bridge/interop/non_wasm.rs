use super::*;

fn unsupported() -> String {
    "Browser fetch APIs are only available when compiled for wasm32".to_string()
}

pub async fn open_external_url(_url: &str) -> Result<(), String> {
    Ok(())
}

pub async fn fetch_text(_url: &str) -> Result<TextResponse, String> {
    Err(unsupported())
}
