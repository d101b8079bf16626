use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::board::CRITERIA;
use crate::renderer::layout::Layout;
use crate::types::Color;

/// Immutable session configuration, read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub title: String,
    /// Labels for the competitors, in slot order. Slots past the end of this
    /// list are named `Team N`.
    pub team_names: Vec<String>,
    pub team_count: usize,
    pub criteria: [String; CRITERIA],
    /// Canvas size in terminal cells.
    pub width: u16,
    pub height: u16,
    pub fps: u32,
    /// How long status messages stay up, in seconds.
    pub message_secs: f64,
    /// Row the ambient drift decoration travels along.
    pub drift_lane: f64,
    pub drift_scale: f64,
    /// Multiplier applied to frame time before it reaches the drift effect.
    pub drift_slowdown: f64,
    pub assets: AssetConfig,
    pub key_bindings: KeyBindings,
    pub log_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSpec {
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_asset_color")]
    pub color: Color,
}

fn default_asset_color() -> Color {
    Color::WHITE
}

impl AssetSpec {
    fn new(path: &str, color: Color) -> Self {
        AssetSpec { path: Some(path.into()), color }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub background: AssetSpec,
    pub drift: AssetSpec,
    pub pop: AssetSpec,
    pub slide: AssetSpec,
    pub fall: AssetSpec,
}

impl Default for AssetConfig {
    fn default() -> Self {
        AssetConfig {
            background: AssetSpec::new("assets/background.txt", Color::Rgb { r: 40, g: 70, b: 120 }),
            drift: AssetSpec::new("assets/cloud.txt", Color::GRAY),
            pop: AssetSpec::new("assets/pop.txt", Color::GOLD),
            slide: AssetSpec::new("assets/slide.txt", Color::WHITE),
            fall: AssetSpec::new("assets/fall.txt", Color::CORAL),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub edit: String,
    pub quit: String,
    pub commit: String,
    pub cancel: String,
    pub delete: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            edit: "i".into(),
            quit: "Esc".into(),
            commit: "Enter".into(),
            cancel: "Esc".into(),
            delete: "Backspace".into(),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            title: "Leaderboard".into(),
            team_names: ["Alfa", "Beta", "Gamma", "Delta", "Epsilon"]
                .map(String::from)
                .to_vec(),
            team_count: 5,
            criteria: std::array::from_fn(|i| format!("Criterion {}", i + 1)),
            width: 120,
            height: 36,
            fps: 60,
            message_secs: 2.0,
            drift_lane: 24.0,
            drift_scale: 0.5,
            drift_slowdown: 0.5,
            assets: AssetConfig::default(),
            key_bindings: KeyBindings::default(),
            log_file: PathBuf::from("leaderboard.log"),
        }
    }
}

impl BoardConfig {
    /// Read a config file. Missing fields take their defaults; a missing or
    /// malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: BoardConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.team_count > 0, "team_count must be at least 1");
        ensure!(self.fps > 0, "fps must be at least 1");
        ensure!(
            self.width > 0 && self.height > 0,
            "canvas size {}x{} is empty",
            self.width,
            self.height,
        );
        let capacity = Layout::compute(self.width, self.height, CRITERIA).row_capacity();
        ensure!(
            self.team_count <= capacity,
            "team_count {} does not fit a {}x{} canvas (at most {capacity})",
            self.team_count,
            self.width,
            self.height,
        );
        Ok(())
    }

    /// Display label for the competitor in `slot` (1-based).
    pub fn team_label(&self, slot: usize) -> String {
        self.team_names
            .get(slot.wrapping_sub(1))
            .cloned()
            .unwrap_or_else(|| format!("Team {slot}"))
    }
}

/// Check whether a crossterm `KeyEvent` matches a binding string from config.
pub fn matches_binding(binding: &str, event: &KeyEvent) -> bool {
    if let Some(rest) = binding.strip_prefix("Ctrl-") {
        if !event.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        return rest
            .chars()
            .next()
            .is_some_and(|c| event.code == KeyCode::Char(c.to_ascii_lowercase()));
    }

    // Plain bindings never fire while Ctrl or Alt is held.
    if event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return false;
    }

    match binding {
        "Enter" => event.code == KeyCode::Enter,
        "Esc" => event.code == KeyCode::Esc,
        "Backspace" => event.code == KeyCode::Backspace,
        "Delete" => event.code == KeyCode::Delete,
        "Tab" => event.code == KeyCode::Tab,
        "Space" => event.code == KeyCode::Char(' '),
        s => {
            if let Some(rest) = s.strip_prefix('F') {
                if let Ok(n) = rest.parse::<u8>() {
                    return event.code == KeyCode::F(n);
                }
            }
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => event.code == KeyCode::Char(c),
                _ => false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn plain_char_binding() {
        assert!(matches_binding("i", &key(KeyCode::Char('i'), KeyModifiers::NONE)));
        assert!(!matches_binding("i", &key(KeyCode::Char('i'), KeyModifiers::ALT)));
        assert!(!matches_binding("i", &key(KeyCode::Char('j'), KeyModifiers::NONE)));
    }

    #[test]
    fn named_and_function_keys() {
        assert!(matches_binding("Esc", &key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(matches_binding("F5", &key(KeyCode::F(5), KeyModifiers::NONE)));
        assert!(!matches_binding("F5", &key(KeyCode::Char('F'), KeyModifiers::NONE)));
    }

    #[test]
    fn ctrl_binding_requires_modifier() {
        assert!(matches_binding("Ctrl-c", &key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!matches_binding("Ctrl-c", &key(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: BoardConfig =
            serde_json::from_str(r#"{ "title": "Finals", "team_count": 3 }"#).unwrap();
        assert_eq!(config.title, "Finals");
        assert_eq!(config.team_count, 3);
        assert_eq!(config.fps, 60);
        assert_eq!(config.key_bindings.edit, "i");
    }

    #[test]
    fn default_config_is_valid() {
        assert!(BoardConfig::default().validate().is_ok());
    }

    #[test]
    fn teams_that_would_overlap_the_entry_box_are_rejected() {
        let config: BoardConfig = serde_json::from_str(r#"{ "team_count": 8 }"#).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("team_count 8"), "{err}");

        let six = BoardConfig { team_count: 6, ..BoardConfig::default() };
        assert!(six.validate().is_err());

        // A taller canvas makes room.
        let tall = BoardConfig { team_count: 8, height: 48, ..BoardConfig::default() };
        assert!(tall.validate().is_ok());
    }

    #[test]
    fn team_label_falls_back_past_list() {
        let config = BoardConfig {
            team_names: vec!["Only".into()],
            ..BoardConfig::default()
        };
        assert_eq!(config.team_label(1), "Only");
        assert_eq!(config.team_label(2), "Team 2");
    }
}
