use arc_swap::{ArcSwap, Guard};
use lazy_static::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Half width used by segments that don't specify one, in road units (10cm).
/// 1.6 matches a 32cm wide track.
pub const DEFAULT_WIDTH: f32 = 1.6;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Half width given to segments that omit `width`
    pub default_width: f32,
    /// Also write logs to `logs/`
    pub log_to_file: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_WIDTH,
            log_to_file: false,
        }
    }
}

lazy_static! {
    static ref CONFIG: ArcSwap<Config> = ArcSwap::from_pointee(Config::default());
    static ref CONFIG_ID: AtomicUsize = AtomicUsize::new(0);
}

pub fn config() -> Guard<Arc<Config>> {
    CONFIG.load()
}

/// Bumped every time the config is replaced
pub fn config_id() -> usize {
    CONFIG_ID.load(Ordering::Relaxed)
}

pub fn update_config(new_config: Config) {
    CONFIG_ID.fetch_add(1, Ordering::Relaxed);
    CONFIG.store(Arc::new(new_config));
}

/// Reads the config at `path` without logging nor making it current.
/// Used to set up the logger before the config is loaded for real.
pub fn peek_config(path: impl AsRef<Path>) -> Config {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

/// Reads the config at `path` and makes it current.
/// A missing or unreadable file falls back to the defaults.
pub fn load_config(path: impl AsRef<Path>) -> Config {
    let path = path.as_ref();
    let mut c = crate::unwrap_or!(crate::saveload::load_json::<Config>(path), {
        log::warn!("no usable config at {}, using defaults", path.display());
        Config::default()
    });
    if !(c.default_width > 0.0) {
        log::warn!(
            "default_width must be positive, got {}. using {}",
            c.default_width,
            DEFAULT_WIDTH
        );
        c.default_width = DEFAULT_WIDTH;
    }
    update_config(c.clone());
    c
}
