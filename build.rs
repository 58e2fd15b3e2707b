use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

const KEYS: [&str; 4] = ["SERVER_URL", "CLIENT_URL", "SECURITY_KEY", "ENABLE_LOGGING"];
const URL_KEYS: [&str; 2] = ["SERVER_URL", "CLIENT_URL"];

/// `KEY=VALUE` pairs of a .env file; comments, blanks and unknown keys are skipped
fn parse_dotenv(contents: &str) -> HashMap<&'static str, String> {
    let mut vars = HashMap::new();
    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            println!("cargo:warning=.env: ignoring malformed line `{}`", line);
            continue;
        };
        match KEYS.iter().find(|k| **k == key.trim()) {
            Some(known) => {
                vars.insert(*known, value.trim().trim_matches('"').to_string());
            }
            None => println!("cargo:warning=.env: unknown key `{}`", key.trim()),
        }
    }
    vars
}

// Forwards .env entries to rustc so `option_env!` sees them (see src/config.rs),
// then warns about settings the admin panel cannot work without.
fn main() {
    let env_file = Path::new(".env");
    let dotenv = if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");
        fs::read_to_string(env_file)
            .map(|contents| parse_dotenv(&contents))
            .unwrap_or_default()
    } else {
        println!("cargo:warning=No .env file found. Copy .env.example to .env and set SERVER_URL, CLIENT_URL and SECURITY_KEY.");
        HashMap::new()
    };

    for key in KEYS {
        println!("cargo:rerun-if-env-changed={}", key);

        // Real environment wins over .env
        let effective = match env::var(key) {
            Ok(value) => Some(value),
            Err(_) => dotenv.get(key).map(|value| {
                println!("cargo:rustc-env={}={}", key, value);
                value.clone()
            }),
        };

        match (key, effective.as_deref().map(str::trim)) {
            ("SECURITY_KEY", None | Some("")) => {
                println!("cargo:warning=SECURITY_KEY is empty: only an empty key would log in, and the login form rejects empty input.");
            }
            (url, Some(value)) if URL_KEYS.contains(&url) => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    println!("cargo:warning={} must be an http(s) URL, got `{}`", url, value);
                }
            }
            (url, None) if URL_KEYS.contains(&url) => {
                println!("cargo:warning={} not set, using the localhost default", url);
            }
            _ => {}
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
