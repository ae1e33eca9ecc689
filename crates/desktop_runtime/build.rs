use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const DESKTOP_CONFIG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Size {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowEntry {
    id: String,
    title: String,
    icon: String,
    content: String,
    #[serde(default)]
    initially_open: bool,
    default_position: Point,
    default_size: Size,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct IconEntry {
    id: String,
    icon: String,
    label: String,
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopConfigFile {
    schema_version: u32,
    #[serde(default)]
    windows: Vec<WindowEntry>,
    #[serde(default)]
    icons: Vec<IconEntry>,
}

fn validate(config: &DesktopConfigFile, path: &str) {
    if config.schema_version != DESKTOP_CONFIG_SCHEMA_VERSION {
        panic!(
            "desktop config schema mismatch in {path}: expected {DESKTOP_CONFIG_SCHEMA_VERSION} found {}",
            config.schema_version
        );
    }

    let mut window_ids = HashSet::new();
    for window in &config.windows {
        if window.id.trim().is_empty() {
            panic!("window with empty id in {path}");
        }
        if !window_ids.insert(window.id.as_str()) {
            panic!("duplicate window id `{}` in {path}", window.id);
        }
    }

    let mut icon_ids = HashSet::new();
    for icon in &config.icons {
        if !icon_ids.insert(icon.id.as_str()) {
            panic!("duplicate icon id `{}` in {path}", icon.id);
        }
        match icon.kind.as_str() {
            "window" if !window_ids.contains(icon.id.as_str()) => {
                panic!("icon `{}` targets unknown window in {path}", icon.id)
            }
            "window" => {}
            "external" if icon.url.as_deref().map_or(true, str::is_empty) => {
                panic!("external icon `{}` has no url in {path}", icon.id)
            }
            "external" => {}
            other => panic!("icon `{}` has unknown kind `{other}` in {path}", icon.id),
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: DesktopConfigFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&config, &path.display().to_string());

    let json = serde_json::to_string_pretty(&config).expect("serialize desktop config");
    let generated = format!(
        "/// Build-time validated desktop configuration JSON.\n\
pub const DESKTOP_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
