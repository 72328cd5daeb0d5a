fn main() {
    println!("cargo:rerun-if-changed=src/default_settings.toml");
    // Presets are parsed lazily at runtime; catch syntax errors here instead.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
