use std::fs;
use std::process;

use ku_engine::settings;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: server.bind={}, source.urls={}, source.patterns={}, source.timeout_secs={}",
        s.server.bind,
        s.source.urls.len(),
        s.source.patterns.len(),
        s.source.timeout_secs
    );
}
