// build.rs - TOML-driven constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    input: InputLimits,
    lexical: LexicalLimits,
    dictionary: DictionaryLimits,
    session: SessionSettings,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct InputLimits {
    max_file_size: u64,
    max_input_size: usize,
}

#[derive(serde::Deserialize)]
struct LexicalLimits {
    max_token_count: usize,
}

#[derive(serde::Deserialize)]
struct DictionaryLimits {
    max_entries: usize,
    max_description_length: usize,
}

#[derive(serde::Deserialize)]
struct SessionSettings {
    debounce_delay_ms: u64,
    poll_interval_ms: u64,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    max_log_message_length: usize,
    max_context_entries: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=LEXDOC_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=LEXDOC_CONFIG_DIR");

    let profile = env::var("LEXDOC_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("LEXDOC_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Workspace root is the parent of lexdoc_analyzer
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_limits(&config, &profile);
    generate_constants(&config, &profile);

    // Embedded dictionaries are compiled in with include_str!
    println!("cargo:rerun-if-changed=dictionaries/python.md");
    println!("cargo:rerun-if-changed=dictionaries/c.md");
}

fn validate_limits(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_INPUT_SIZE: usize = 1_000_000_000;
    const ABSOLUTE_MAX_DEBOUNCE_MS: u64 = 60_000;

    if config.input.max_input_size == 0 || config.input.max_input_size > ABSOLUTE_MAX_INPUT_SIZE {
        panic!("LIMITS: max_input_size must be in 1..={}", ABSOLUTE_MAX_INPUT_SIZE);
    }

    if config.input.max_file_size as usize > config.input.max_input_size {
        panic!("LIMITS: max_file_size cannot exceed max_input_size");
    }

    if config.lexical.max_token_count == 0 {
        panic!("LIMITS: max_token_count cannot be zero");
    }

    if config.dictionary.max_entries == 0 || config.dictionary.max_description_length == 0 {
        panic!("LIMITS: dictionary limits cannot be zero");
    }

    if config.session.debounce_delay_ms > ABSOLUTE_MAX_DEBOUNCE_MS {
        panic!("LIMITS: debounce_delay_ms exceeds {}", ABSOLUTE_MAX_DEBOUNCE_MS);
    }

    if config.session.poll_interval_ms == 0 {
        panic!("LIMITS: poll_interval_ms cannot be zero");
    }

    if config.logging.max_log_message_length < 64 {
        panic!("LIMITS: max_log_message_length too small (min: 64)");
    }

    if profile == "production" && config.input.max_input_size > 50_000_000 {
        panic!("PRODUCTION: max_input_size too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod input {{
        pub const MAX_FILE_SIZE: u64 = {};
        pub const MAX_INPUT_SIZE: usize = {};
    }}

    pub mod lexical {{
        pub const MAX_TOKEN_COUNT: usize = {};
    }}

    pub mod dictionary {{
        pub const MAX_ENTRIES: usize = {};
        pub const MAX_DESCRIPTION_LENGTH: usize = {};
    }}

    pub mod session {{
        pub const DEBOUNCE_DELAY_MS: u64 = {};
        pub const POLL_INTERVAL_MS: u64 = {};
    }}

    pub mod logging {{
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
        pub const MAX_CONTEXT_ENTRIES: usize = {};
    }}
}}
"#,
        profile,
        config.input.max_file_size,
        config.input.max_input_size,
        config.lexical.max_token_count,
        config.dictionary.max_entries,
        config.dictionary.max_description_length,
        config.session.debounce_delay_ms,
        config.session.poll_interval_ms,
        config.logging.max_log_message_length,
        config.logging.max_context_entries,
    );

    fs::write(output_path, constants_code).unwrap();
}
