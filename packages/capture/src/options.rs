use serde::{Deserialize, Serialize};
use std::path::Path;
use stylecopy_compiler_html::PrettyOptions;
use stylecopy_extractor::DEFAULT_ROOT_CLASS;

pub const DEFAULT_CONFIG_NAME: &str = "stylecopy.config.json";

/// Capture configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureOptions {
    /// Class name of the captured root; descendants get `{rootClass}-c{n}`
    #[serde(default = "default_root_class")]
    pub root_class: String,

    /// Elements whose id starts with this prefix are left out with their subtree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_id_prefix: Option<String>,

    /// Indentation unit of the pretty-printed markup
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Text shorter than this stays on its element's line
    #[serde(default = "default_inline_text_limit")]
    pub inline_text_limit: usize,
}

fn default_root_class() -> String {
    DEFAULT_ROOT_CLASS.to_string()
}

fn default_indent() -> String {
    "  ".to_string()
}

fn default_inline_text_limit() -> usize {
    80
}

impl CaptureOptions {
    /// Load `stylecopy.config.json` from a directory
    pub fn load(cwd: impl AsRef<Path>) -> anyhow::Result<Self> {
        Self::load_file(cwd.as_ref().join(DEFAULT_CONFIG_NAME))
    }

    /// Load a config file, falling back to defaults when it does not exist
    pub fn load_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let options: CaptureOptions = serde_json::from_str(&content)?;
            Ok(options)
        } else {
            Ok(CaptureOptions::default())
        }
    }

    pub fn pretty_options(&self) -> PrettyOptions {
        PrettyOptions {
            indent: self.indent.clone(),
            inline_text_limit: self.inline_text_limit,
        }
    }
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            root_class: default_root_class(),
            ignore_id_prefix: None,
            indent: default_indent(),
            inline_text_limit: default_inline_text_limit(),
        }
    }
}
