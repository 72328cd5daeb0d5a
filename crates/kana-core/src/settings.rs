//! Global settings loaded from TOML: default width scopes and named presets.
//!
//! - `init_custom(toml_content)` installs parsed settings before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::{ConversionRequest, ConvertTarget, Transform};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Install custom settings. Fails with [`SettingsError::AlreadyInitialized`]
/// once `settings()` has been called or another custom TOML won the race.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    let parsed = parse_settings_toml(&toml_content)?;
    INSTANCE
        .set(parsed)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton. Falls back to the
/// embedded defaults when no custom TOML was installed.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        // checked by build.rs and the parse_default_toml test
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("embedded settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Deserialize)]
struct RawSettings {
    defaults: RawDefaults,
    #[serde(default)]
    presets: BTreeMap<String, RawPreset>,
}

#[derive(Debug, Deserialize)]
struct RawDefaults {
    narrow: Vec<String>,
    wide: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawPreset {
    #[serde(default)]
    description: String,
    steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
struct RawStep {
    kind: StepKind,
    targets: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum StepKind {
    Upper,
    Lower,
    Hiragana,
    Katakana,
    Wide,
    Narrow,
}

#[derive(Debug, Clone)]
pub struct Preset {
    pub description: String,
    pub request: ConversionRequest,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub narrow_target: ConvertTarget,
    pub wide_target: ConvertTarget,
    presets: BTreeMap<String, Preset>,
}

impl Settings {
    pub fn preset(&self, name: &str) -> Result<&Preset, SettingsError> {
        self.presets
            .get(name)
            .ok_or_else(|| SettingsError::UnknownPreset(name.to_string()))
    }

    /// Presets in name order.
    pub fn presets(&self) -> impl Iterator<Item = (&str, &Preset)> {
        self.presets.iter().map(|(k, v)| (k.as_str(), v))
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let raw: RawSettings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;

    let narrow_target = parse_targets("defaults.narrow", &raw.defaults.narrow)?;
    let wide_target = parse_targets("defaults.wide", &raw.defaults.wide)?;

    let mut presets = BTreeMap::new();
    for (name, preset) in raw.presets {
        let field = format!("presets.{name}.steps");
        if preset.steps.is_empty() {
            return Err(invalid(&field, "must not be empty"));
        }
        let request = preset
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                parse_step(&format!("{field}[{i}]"), step, narrow_target, wide_target)
            })
            .collect::<Result<ConversionRequest, _>>()?;
        presets.insert(
            name,
            Preset {
                description: preset.description,
                request,
            },
        );
    }

    Ok(Settings {
        narrow_target,
        wide_target,
        presets,
    })
}

fn parse_step(
    field: &str,
    step: &RawStep,
    narrow_default: ConvertTarget,
    wide_default: ConvertTarget,
) -> Result<Transform, SettingsError> {
    let targets = step
        .targets
        .as_deref()
        .map(|names| parse_targets(&format!("{field}.targets"), names))
        .transpose()?;
    let plain = |t: Transform| match targets {
        Some(_) => Err(invalid(field, "targets are only allowed on wide/narrow steps")),
        None => Ok(t),
    };
    match step.kind {
        StepKind::Upper => plain(Transform::UpperCase),
        StepKind::Lower => plain(Transform::LowerCase),
        StepKind::Hiragana => plain(Transform::Hiragana),
        StepKind::Katakana => plain(Transform::Katakana),
        StepKind::Wide => Ok(Transform::Wide(targets.unwrap_or(wide_default))),
        StepKind::Narrow => Ok(Transform::Narrow(targets.unwrap_or(narrow_default))),
    }
}

fn parse_targets(field: &str, names: &[String]) -> Result<ConvertTarget, SettingsError> {
    if names.is_empty() {
        return Err(invalid(field, "must name at least one group"));
    }
    ConvertTarget::from_names(names)
        .map_err(|name| invalid(field, &format!("unknown group \"{name}\"")))
}

fn invalid(field: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.narrow_target, ConvertTarget::ALL);
        assert_eq!(s.wide_target, ConvertTarget::ALL);
        let names: Vec<&str> = s.presets().map(|(n, _)| n).collect();
        assert!(names.contains(&"halfwidth"));
        assert!(names.contains(&"search_key"));
    }

    #[test]
    fn preset_steps_resolve() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        let ascii = s.preset("ascii").unwrap();
        assert_eq!(
            ascii.request.steps(),
            &[Transform::Narrow(
                ConvertTarget::NUMBER | ConvertTarget::SYMBOL | ConvertTarget::ALPHABET
            )]
        );
        let half = s.preset("halfwidth").unwrap();
        assert_eq!(half.request.steps(), &[Transform::Narrow(ConvertTarget::ALL)]);
    }

    #[test]
    fn steps_without_targets_use_defaults() {
        let toml = r#"
[defaults]
narrow = ["number"]
wide = ["katakana", "symbol"]

[presets.p]
steps = [{ kind = "narrow" }, { kind = "wide" }]
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(
            s.preset("p").unwrap().request.steps(),
            &[
                Transform::Narrow(ConvertTarget::NUMBER),
                Transform::Wide(ConvertTarget::KATAKANA | ConvertTarget::SYMBOL),
            ]
        );
    }

    #[test]
    fn error_unknown_preset() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert!(matches!(
            s.preset("nope"),
            Err(SettingsError::UnknownPreset(_))
        ));
    }

    #[test]
    fn error_empty_steps() {
        let toml = "[defaults]\nnarrow = [\"all\"]\nwide = [\"all\"]\n[presets.x]\nsteps = []\n";
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "presets.x.steps")
        );
    }

    #[test]
    fn error_targets_on_case_step() {
        let toml = r#"
[defaults]
narrow = ["all"]
wide = ["all"]

[presets.x]
steps = [{ kind = "upper", targets = ["alphabet"] }]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn error_unknown_group() {
        let toml = "[defaults]\nnarrow = [\"kanji\"]\nwide = [\"all\"]\n";
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, ref reason } if field == "defaults.narrow" && reason.contains("kanji"))
        );
    }

    #[test]
    fn error_empty_group_list() {
        let toml = "[defaults]\nnarrow = []\nwide = [\"all\"]\n";
        assert!(matches!(
            parse_settings_toml(toml),
            Err(SettingsError::InvalidValue { .. })
        ));
    }

    #[test]
    fn error_unknown_kind() {
        let toml = r#"
[defaults]
narrow = ["all"]
wide = ["all"]

[presets.x]
steps = [{ kind = "romaji" }]
"#;
        assert!(matches!(
            parse_settings_toml(toml),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
