//! Viewer configuration loading and resolution
//!
//! Each path is resolved with the following priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing or malformed config file is not an error; the defaults apply.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable overriding the video directory.
pub const ENV_VIDEO_DIR: &str = "DQV_VIDEO_DIR";
/// Environment variable overriding the annotation file path.
pub const ENV_ANNOTATION_FILE: &str = "DQV_ANNOTATION_FILE";

const DEFAULT_VIDEO_DIR: &str = "videos";
const DEFAULT_ANNOTATION_FILE: &str = "desire_oriented_vqa.json";

/// Resolved viewer configuration.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Directory containing `{identifier}.mp4` / `{identifier}.srt` files.
    pub video_dir: PathBuf,
    /// Path to the annotation JSON document.
    pub annotation_file: PathBuf,
}

/// Optional settings loaded from the TOML config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub video_dir: Option<PathBuf>,
    #[serde(default)]
    pub annotation_file: Option<PathBuf>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Load from the platform config file location, or defaults when the
    /// location cannot be determined.
    pub fn load_default() -> Self {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from a specific path. A missing file yields defaults silently
    /// (the normal case); a malformed file yields defaults with a warning.
    pub fn load_from(path: &Path) -> Self {
        let Ok(text) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring malformed config file {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

/// Platform config file location: `<config dir>/dqv/config.toml`.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dqv").join("config.toml"))
}

/// Resolve the viewer configuration from CLI arguments, environment,
/// config file, and compiled defaults, in that order per field.
pub fn resolve_viewer_config(
    cli_video_dir: Option<PathBuf>,
    cli_annotation_file: Option<PathBuf>,
    file: &TomlConfig,
) -> ViewerConfig {
    ViewerConfig {
        video_dir: resolve_path(
            cli_video_dir,
            ENV_VIDEO_DIR,
            file.video_dir.as_deref(),
            DEFAULT_VIDEO_DIR,
        ),
        annotation_file: resolve_path(
            cli_annotation_file,
            ENV_ANNOTATION_FILE,
            file.annotation_file.as_deref(),
            DEFAULT_ANNOTATION_FILE,
        ),
    }
}

fn resolve_path(
    cli_arg: Option<PathBuf>,
    env_var_name: &str,
    file_value: Option<&Path>,
    default: &str,
) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path;
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Some(path) = file_value {
        return path.to_path_buf();
    }

    // Priority 4: Compiled default
    PathBuf::from(default)
}
