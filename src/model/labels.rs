use serde::{Deserialize, Serialize};

/// Label configuration from labels_config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    #[serde(default)]
    pub default_labels: Vec<LabelDefault>,
    #[serde(default = "default_true")]
    pub auto_generate_colors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelDefault {
    pub name: String,
    pub color: String,
}

fn default_true() -> bool {
    true
}

impl Default for LabelConfig {
    fn default() -> Self {
        LabelConfig {
            default_labels: vec![
                LabelDefault { name: "urgent".into(), color: "#FF4444".into() },
                LabelDefault { name: "work".into(), color: "#4488FF".into() },
                LabelDefault { name: "personal".into(), color: "#44FF88".into() },
                LabelDefault { name: "home".into(), color: "#FFD700".into() },
                LabelDefault { name: "health".into(), color: "#CC66FF".into() },
            ],
            auto_generate_colors: true,
        }
    }
}

/// Color for labels that are neither configured nor auto-registered
/// (auto-generation turned off in the config)
pub const FALLBACK_LABEL_COLOR: &str = "#888888";

/// Derive a display color from a label name. Pure function of the text, so
/// the same unseen label maps to the same color within and across runs.
pub fn derive_color(label: &str) -> String {
    // FNV-1a over the label bytes, folded into a hue
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for b in label.bytes() {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    let hue = (hash % 360) as f64;
    hsl_to_hex(hue, 0.62, 0.55)
}

/// Convert an HSL triple (h in degrees, s and l in 0..1) to "#RRGGBB"
fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let to_byte = |v: f64| ((v + m) * 255.0).round() as u8;
    format!("#{:02X}{:02X}{:02X}", to_byte(r1), to_byte(g1), to_byte(b1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_five_labels() {
        let config = LabelConfig::default();
        assert_eq!(config.default_labels.len(), 5);
        assert!(config.auto_generate_colors);
        let urgent = config
            .default_labels
            .iter()
            .find(|d| d.name == "urgent")
            .unwrap();
        assert_eq!(urgent.color, "#FF4444");
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: LabelConfig = serde_json::from_str("{}").unwrap();
        assert!(config.default_labels.is_empty());
        assert!(config.auto_generate_colors);

        let config: LabelConfig =
            serde_json::from_str(r#"{"auto_generate_colors": false}"#).unwrap();
        assert!(!config.auto_generate_colors);
    }

    #[test]
    fn test_derive_color_is_stable() {
        let first = derive_color("deep-work");
        let second = derive_color("deep-work");
        assert_eq!(first, second);
    }

    #[test]
    fn test_derive_color_is_a_hex_string() {
        for label in ["a", "errands", "deep-work", "äöü"] {
            let color = derive_color(label);
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(u32::from_str_radix(&color[1..], 16).is_ok());
        }
    }

    #[test]
    fn test_derive_color_varies_with_content() {
        // Not a guarantee in general, but these two must not collide for the
        // derivation to be useful at all.
        assert_ne!(derive_color("work"), derive_color("home"));
    }

    #[test]
    fn test_hsl_to_hex_primaries() {
        assert_eq!(hsl_to_hex(0.0, 1.0, 0.5), "#FF0000");
        assert_eq!(hsl_to_hex(120.0, 1.0, 0.5), "#00FF00");
        assert_eq!(hsl_to_hex(240.0, 1.0, 0.5), "#0000FF");
    }
}
