use std::fs;

use kana_core::settings;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: defaults.narrow={}, defaults.wide={}, presets={}",
        s.narrow_target,
        s.wide_target,
        s.presets().count()
    );
}

pub fn presets_list() {
    for (name, preset) in settings::settings().presets() {
        let steps: Vec<String> = preset.request.steps().iter().map(|t| t.to_string()).collect();
        println!("{name}\t{}\t{}", steps.join(" > "), preset.description);
    }
}
