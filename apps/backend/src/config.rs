//! Service configuration read from the environment.

use std::path::PathBuf;

use anyhow::Context;
use notes_core::CueConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Largest accepted upload, in bytes.
    pub max_upload_bytes: usize,
    /// Optional JSON file overriding the default cue lists.
    pub cues_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            cues_path: None,
        }
    }
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// Env vars (all optional):
    /// - HOST: bind address (default 0.0.0.0)
    /// - PORT: bind port (default 8000)
    /// - MAX_UPLOAD_BYTES: upload size limit (default 10 MiB)
    /// - CUES_PATH: JSON file with cue list overrides
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {:?}", v))?,
            None => defaults.port,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("MAX_UPLOAD_BYTES must be a byte count, got {:?}", v))?,
            None => defaults.max_upload_bytes,
        };
        if max_upload_bytes == 0 {
            anyhow::bail!("MAX_UPLOAD_BYTES must be greater than zero");
        }

        Ok(Self {
            host: lookup("HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port,
            max_upload_bytes,
            cues_path: lookup("CUES_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Load the cue lists, falling back to the built-in defaults.
    pub fn load_cues(&self) -> anyhow::Result<CueConfig> {
        let Some(path) = &self.cues_path else {
            return Ok(CueConfig::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read cue file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse cue file {}", path.display()))
    }
}
