//! Shared test utilities: site builders, small decks and temp configs.

#![allow(dead_code, unused_imports)]

use erocras::confessions::Confession;
use erocras::config::Config;
use erocras::submit::MemorySink;
use erocras::ui::app::Site;
use erocras::ui::nav::MemoryAddressBar;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// A deck of `len` short confessions (`text-i`, `tag-i`, `author-i`).
pub fn small_deck(len: usize) -> Vec<Confession> {
    (0..len)
        .map(|i| Confession::new(format!("text-{i}"), format!("tag-{i}"), format!("author-{i}")))
        .collect()
}

pub fn config_with_deck(len: usize) -> Config {
    Config {
        confessions: small_deck(len),
        ..Config::default()
    }
}

/// Site handles: the site plus shared views of its address bar and sink.
pub struct Harness {
    pub site: Site,
    pub bar: MemoryAddressBar,
    pub sink: MemorySink,
}

pub fn make_site(config: Config, address: &str) -> Harness {
    let bar = MemoryAddressBar::new(address);
    let sink = MemorySink::new();
    let site = Site::new(config, Box::new(bar.clone()), Box::new(sink.clone()))
        .expect("Failed to build site");
    Harness { site, bar, sink }
}

pub fn default_site() -> Harness {
    make_site(Config::default(), "/")
}

/// Create a temporary config file with the given TOML body.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
