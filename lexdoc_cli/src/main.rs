//! # lexdoc CLI
//!
//! Analyze, hover and look up tokens against the embedded Python and C
//! references, and generate JSON or HTML from reference markdown.

mod cli;
mod commands;
mod error;
mod watch;

use clap::Parser;
use cli::{Cli, Command};
use commands::Context;
use error::CliError;
use lexdoc_analyzer::config::{build_info, AnalyzerPreferences};
use lexdoc_analyzer::{log_debug, logging};
use log::LevelFilter;
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logger(cli.verbose)?;

    let preferences = match &cli.config {
        Some(path) => AnalyzerPreferences::load(path)?,
        None => AnalyzerPreferences::default(),
    };
    logging::set_log_format(preferences.log_format);
    log_debug!("lexdoc starting",
        "version" => env!("CARGO_PKG_VERSION"),
        "limits" => build_info::source_info()
    );
    let ctx = Context { preferences };

    if let Err(e) = run(&ctx, cli.command) {
        eprintln!("{}", e.report());
        std::process::exit(1);
    }
    Ok(())
}

/// `RUST_LOG` wins unless `-v` asks for more
fn init_logger(verbose: u8) -> Result<(), log::SetLoggerError> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        _ => {
            builder.filter_level(LevelFilter::Debug);
        }
    }
    builder.try_init()
}

fn run(ctx: &Context, command: Command) -> Result<(), CliError> {
    let output = match command {
        Command::Analyze {
            file,
            language,
            dictionary,
            format,
            groups,
        } => commands::analyze(
            ctx,
            &file,
            language.map(Into::into),
            dictionary.as_deref(),
            format,
            groups,
        )?,
        Command::Hover {
            file,
            line,
            column,
            language,
            dictionary,
            format,
        } => commands::hover(
            ctx,
            &file,
            line,
            column,
            language.map(Into::into),
            dictionary.as_deref(),
            format,
        )?,
        Command::Lookup {
            token,
            language,
            dictionary,
        } => commands::lookup(ctx, &token, language.into(), dictionary.as_deref())?,
        Command::Generate {
            source,
            out_dir,
            title,
            definitions_out,
            dictionary_out,
        } => commands::generate_files(
            &source,
            &out_dir,
            title.as_deref(),
            &definitions_out,
            &dictionary_out,
        )?,
        Command::Docs {
            language,
            dictionary,
            output,
        } => commands::docs(language.into(), dictionary.as_deref(), output.as_deref())?,
        Command::Watch {
            file,
            language,
            dictionary,
        } => {
            return watch::run(ctx, &file, language.map(Into::into), dictionary.as_deref());
        }
    };

    println!("{}", output);
    Ok(())
}
