use std::io::{self, BufRead, BufWriter, Write};

use kana_core::engine::convert_str;
use kana_core::settings::{self, Settings, SettingsError};
use kana_core::ConversionRequest;

use crate::step::{parse_step, StepParseError};

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error(transparent)]
    Preset(#[from] SettingsError),
    #[error(transparent)]
    Step(#[from] StepParseError),
    #[error("nothing to do: give --preset and/or at least one --step")]
    Empty,
}

/// Preset steps first, then the `--step` args in command-line order.
pub fn build_request(
    settings: &Settings,
    preset: Option<&str>,
    steps: &[String],
) -> Result<ConversionRequest, RequestError> {
    let mut request = match preset {
        Some(name) => settings.preset(name)?.request.clone(),
        None => ConversionRequest::new(),
    };
    for arg in steps {
        request = request.then(parse_step(arg, settings)?);
    }
    if request.is_empty() {
        return Err(RequestError::Empty);
    }
    Ok(request)
}

pub fn convert_cmd(preset: Option<&str>, steps: &[String], text: Option<&str>) {
    let request = die!(
        build_request(settings::settings(), preset, steps),
        "Error: {}"
    );

    if let Some(text) = text {
        println!("{}", convert_str(text, &request));
        return;
    }

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    for line in stdin.lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        die!(
            writeln!(out, "{}", convert_str(&line, &request)),
            "Error writing output: {}"
        );
    }
    die!(out.flush(), "Error writing output: {}");
}
