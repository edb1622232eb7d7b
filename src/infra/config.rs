// ============================================================
// Layer 6 — Application Configuration
// ============================================================
// Every tunable of the service in one serialisable struct.
//
// Sources, lowest to highest precedence:
//   1. AppConfig::default()
//   2. environment variables (a `.env` file is loaded first)
//   3. command-line flags (applied by the CLI layer)
//
// | field             | env var             | default                |
// |-------------------|---------------------|------------------------|
// | docs_dir          | DOCS_DIR            | data                   |
// | bind_addr         | BIND_ADDR           | 0.0.0.0:8000           |
// | window_size       | CHUNK_SIZE          | 500                    |
// | overlap           | CHUNK_OVERLAP       | 50                     |
// | max_context_chars | MAX_CONTEXT_CHARS   | 4000                   |
// | openai_api_key    | OPENAI_API_KEY      | (none)                 |
// | openai_model      | OPENAI_MODEL        | gpt-4o-mini            |
// | openai_base_url   | OPENAI_BASE_URL     | https://api.openai.com |
// | temperature       | OPENAI_TEMPERATURE  | 0.2                    |
// | max_tokens        | OPENAI_MAX_TOKENS   | 800                    |
// | max_upload_bytes  | MAX_UPLOAD_BYTES    | 50 MiB                 |
//
// A value that is set but does not parse is an error; it never
// silently falls back to the default.

use std::{env, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::data::{selector::ContextSelector, segmenter::Segmenter};
use crate::domain::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub docs_dir:          String,
    pub bind_addr:         String,
    pub window_size:       usize,
    pub overlap:           usize,
    pub max_context_chars: usize,
    #[serde(skip_serializing)]
    pub openai_api_key:    Option<String>,
    pub openai_model:      String,
    pub openai_base_url:   String,
    pub temperature:       f32,
    pub max_tokens:        u32,
    pub max_upload_bytes:  usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            docs_dir:          "data".to_string(),
            bind_addr:         "0.0.0.0:8000".to_string(),
            window_size:       500,
            overlap:           50,
            max_context_chars: 4000,
            openai_api_key:    None,
            openai_model:      "gpt-4o-mini".to_string(),
            openai_base_url:   "https://api.openai.com".to_string(),
            temperature:       0.2,
            max_tokens:        800,
            max_upload_bytes:  50 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> CoreResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(v) = get("DOCS_DIR") {
            cfg.docs_dir = v;
        }
        if let Some(v) = get("BIND_ADDR") {
            cfg.bind_addr = v;
        }
        if let Some(v) = get("OPENAI_MODEL") {
            cfg.openai_model = v;
        }
        if let Some(v) = get("OPENAI_BASE_URL") {
            cfg.openai_base_url = v.trim_end_matches('/').to_string();
        }
        cfg.openai_api_key = get("OPENAI_API_KEY");

        parse_into(&get, "CHUNK_SIZE", &mut cfg.window_size)?;
        parse_into(&get, "CHUNK_OVERLAP", &mut cfg.overlap)?;
        parse_into(&get, "MAX_CONTEXT_CHARS", &mut cfg.max_context_chars)?;
        parse_into(&get, "OPENAI_TEMPERATURE", &mut cfg.temperature)?;
        parse_into(&get, "OPENAI_MAX_TOKENS", &mut cfg.max_tokens)?;
        parse_into(&get, "MAX_UPLOAD_BYTES", &mut cfg.max_upload_bytes)?;

        Ok(cfg)
    }

    /// Check the chunking and selection bounds together.
    pub fn validate(&self) -> CoreResult<()> {
        self.segmenter()?;
        self.selector()?;
        if self.max_upload_bytes == 0 {
            return Err(CoreError::configuration("max upload bytes must be positive"));
        }
        Ok(())
    }

    pub fn segmenter(&self) -> CoreResult<Segmenter> {
        Segmenter::new(self.window_size, self.overlap)
    }

    pub fn selector(&self) -> CoreResult<ContextSelector> {
        ContextSelector::new(self.max_context_chars)
    }

    pub fn api_key_configured(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

fn parse_into<T, G>(get: &G, key: &str, slot: &mut T) -> CoreResult<()>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    if let Some(raw) = get(key) {
        *slot = raw
            .trim()
            .parse()
            .map_err(|e| CoreError::configuration(format!("{key}='{raw}': {e}")))?;
    }
    Ok(())
}
