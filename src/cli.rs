//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "w3c-validate",
    version,
    about = "Validate HTML and CSS against the W3C services",
    long_about = "w3c-validate — send HTML or CSS documents to the W3C validators and print a counted, line-anchored report.\n\nConfiguration precedence: CLI > w3c-validation.toml > defaults.",
    after_help = "Examples:\n  w3c-validate validate index.html\n  w3c-validate validate 'site/**/*.css' --report-type all\n  w3c-validate validate page.php --grammar text.html.php --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current w3c-validate version.")]
    Version,
    /// Validate documents
    #[command(
        about = "Validate documents",
        long_about = "Validate each matched file in turn. HTML-family files go to the Nu HTML checker, CSS-family files to the CSS validator; other files are skipped.",
        after_help = "Examples:\n  w3c-validate validate index.html about.html\n  w3c-validate validate 'css/*.css' --profile css21 --media screen"
    )]
    Validate {
        #[arg(help = "Files or glob patterns to validate")]
        paths: Vec<String>,
        #[arg(long, help = "Project root used for config discovery (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Grammar scope override, e.g. text.html.basic or source.css")]
        grammar: Option<String>,
        #[arg(long, help = "CSS profile forwarded to the validator (default: css3)")]
        profile: Option<String>,
        #[arg(long, help = "CSS media forwarded to the validator (default: all)")]
        media: Option<String>,
        #[arg(
            long,
            help = "CSS report type: all|most important|no warnings|default"
        )]
        report_type: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
