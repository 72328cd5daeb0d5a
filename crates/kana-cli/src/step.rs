//! `--step` argument parsing: `upper`, `lower`, `hiragana`, `katakana`,
//! `wide[:targets]`, `narrow[:targets]` with comma-separated target groups.

use kana_core::settings::Settings;
use kana_core::{ConversionRequest, ConvertTarget, Transform};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StepParseError {
    #[error("unknown step \"{0}\" (expected upper, lower, hiragana, katakana, wide or narrow)")]
    UnknownKind(String),
    #[error("unknown target group \"{name}\" in step \"{step}\"")]
    UnknownTarget { step: String, name: String },
    #[error("step \"{0}\" does not take targets")]
    TargetsNotAllowed(String),
    #[error("step \"{0}\" has an empty target list")]
    EmptyTargets(String),
}

/// Parse one step. Width steps without an explicit list take their targets
/// from `settings` defaults.
pub fn parse_step(arg: &str, settings: &Settings) -> Result<Transform, StepParseError> {
    let arg = arg.trim();
    let (kind, targets) = match arg.split_once(':') {
        Some((kind, list)) => (kind, Some(parse_targets(arg, list)?)),
        None => (arg, None),
    };
    let plain = |t: Transform| match targets {
        Some(_) => Err(StepParseError::TargetsNotAllowed(arg.to_string())),
        None => Ok(t),
    };
    match kind {
        "upper" => plain(Transform::UpperCase),
        "lower" => plain(Transform::LowerCase),
        "hiragana" => plain(Transform::Hiragana),
        "katakana" => plain(Transform::Katakana),
        "wide" => Ok(Transform::Wide(targets.unwrap_or(settings.wide_target))),
        "narrow" => Ok(Transform::Narrow(targets.unwrap_or(settings.narrow_target))),
        _ => Err(StepParseError::UnknownKind(kind.to_string())),
    }
}

pub fn parse_steps<S: AsRef<str>>(
    args: &[S],
    settings: &Settings,
) -> Result<ConversionRequest, StepParseError> {
    args
        .iter()
        .map(|s| parse_step(s.as_ref(), settings))
        .collect()
}

fn parse_targets(arg: &str, list: &str) -> Result<ConvertTarget, StepParseError> {
    let names: Vec<&str> = list
        .split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .collect();
    if names.is_empty() {
        return Err(StepParseError::EmptyTargets(arg.to_string()));
    }
    ConvertTarget::from_names(&names).map_err(|name| StepParseError::UnknownTarget {
        step: arg.to_string(),
        name,
    })
}
