use std::fs;
use std::path::Path;

use crate::model::labels::LabelConfig;

/// Name of the label configuration file inside the data directory
pub const LABEL_CONFIG_FILE: &str = "labels_config.json";

/// Read the label configuration. The file is optional input: if it is
/// missing or unreadable the built-in defaults apply.
pub fn load_label_config(dir: &Path) -> LabelConfig {
    let path = dir.join(LABEL_CONFIG_FILE);
    let Ok(content) = fs::read_to_string(&path) else {
        return LabelConfig::default();
    };
    serde_json::from_str(&content).unwrap_or_default()
}
