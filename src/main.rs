//! w3c-validate CLI binary entry point.
//! Resolves config, validates each document in turn and prints the panel.

use clap::Parser;
use owo_colors::OwoColorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use w3c_validate::cli::{Cli, Commands};
use w3c_validate::config::{self, Overrides};
use w3c_validate::document::Document;
use w3c_validate::error::AppResult;
use w3c_validate::output;
use w3c_validate::run;
use w3c_validate::validator::{JigsawCssValidator, NuHtmlValidator};

fn init_logging() {
    let filter = EnvFilter::try_from_env("W3C_VALIDATE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn error_prefix() -> String {
    if std::env::var_os("NO_COLOR").is_none() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

fn note_prefix() -> String {
    if std::env::var_os("NO_COLOR").is_none() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

fn run_validate(
    paths: &[String],
    grammar: Option<&str>,
    overrides: &Overrides<'_>,
) -> AppResult<ExitCode> {
    let eff = config::resolve_effective(overrides)?;
    if !eff.config_found {
        tracing::debug!(root = %eff.repo_root.display(), "no w3c-validation config found; using defaults");
    }
    let files = run::expand_paths(paths)?;
    if files.is_empty() {
        eprintln!("{} No document to validate.", note_prefix());
    }

    let markup = NuHtmlValidator::new(eff.html_url.clone(), eff.timeout);
    let style = JigsawCssValidator::new(eff.css_url.clone(), eff.timeout);
    let verdict = run::validate_files(
        &files,
        &eff.repo_root,
        grammar,
        eff.style.clone(),
        &markup,
        &style,
        |doc, entries, status| output::print_panel(doc.path(), entries, status, &eff.output),
    )?;
    Ok(verdict.exit_code())
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Commands::Validate {
            paths,
            repo_root,
            grammar,
            profile,
            media,
            report_type,
            output,
        } => {
            let overrides = Overrides {
                repo_root: repo_root.as_deref(),
                output: output.as_deref(),
                profile: profile.as_deref(),
                media: media.as_deref(),
                report_type: report_type.as_deref(),
            };
            match run_validate(&paths, grammar.as_deref(), &overrides) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("{} {}", error_prefix(), e);
                    e.exit_code()
                }
            }
        }
    }
}
