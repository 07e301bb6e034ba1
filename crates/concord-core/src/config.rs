use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;

/// Top-level configuration for the Concord pipeline.
///
/// Loaded from a TOML file; every section has serde defaults so a partial
/// (or absent) file still yields a runnable configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConcordConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub encoder: EncoderConfig,
}

impl ConcordConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ConcordConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Pipeline behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Logical key under which the context memory stores the input text.
    pub memory_key: String,
    /// Literal substring that flags a sentence as cause-effect.
    /// Matching is case-insensitive; this is a lexical trigger, not inference.
    pub cause_marker: String,
    /// Number of components of the first quantized embedding included in
    /// the output preview. Truncated to the embedding dimension when smaller.
    pub preview_components: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            memory_key: "paragraph_context".to_string(),
            cause_marker: "because".to_string(),
            preview_components: 10,
        }
    }
}

/// Concept encoder settings.
///
/// When both paths are set, the application loads the ONNX
/// sentence-transformer backend; otherwise it falls back to the
/// deterministic mock encoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Path to the sentence-transformer ONNX export.
    pub model_path: Option<PathBuf>,
    /// Path to the HuggingFace fast-tokenizer file.
    pub tokenizer_path: Option<PathBuf>,
}
