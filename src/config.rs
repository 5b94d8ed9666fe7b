//! Configuration discovery and effective settings resolution.
//!
//! Reads `w3c-validation.toml|yaml|yml` from the project root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `output`: `human`
//! - `css.profile`: `css3`
//! - `css.media`: `all`
//! - `css.report_type`: `default`
//! - `service.html_url` / `service.css_url`: the public W3C services
//! - `service.timeout_secs`: none
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{AppError, AppResult};
use crate::validator::{ReportType, StyleOptions, DEFAULT_CSS_URL, DEFAULT_HTML_URL};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_NAMES: [&str; 3] = [
    "w3c-validation.toml",
    "w3c-validation.yaml",
    "w3c-validation.yml",
];

#[derive(Debug, Default, Deserialize, Clone)]
/// CSS validation options under `[css]`.
pub struct CssCfg {
    pub profile: Option<String>,
    pub media: Option<String>,
    pub report_type: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Validator endpoints under `[service]`.
pub struct ServiceCfg {
    pub html_url: Option<String>,
    pub css_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `w3c-validation.toml|yaml`.
pub struct ValidationConfig {
    pub output: Option<String>,
    #[serde(default)]
    pub css: Option<CssCfg>,
    #[serde(default)]
    pub service: Option<ServiceCfg>,
}

#[derive(Debug, Clone, Default)]
/// CLI-provided overrides; `None` defers to the config file.
pub struct Overrides<'a> {
    pub repo_root: Option<&'a str>,
    pub output: Option<&'a str>,
    pub profile: Option<&'a str>,
    pub media: Option<&'a str>,
    pub report_type: Option<&'a str>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_found: bool,
    pub output: String,
    pub style: StyleOptions,
    pub html_url: String,
    pub css_url: String,
    pub timeout: Option<Duration>,
}

/// Walk upward from `start` to detect the project root.
///
/// Stops when a config file or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `ValidationConfig` from the first config file present in `root`.
pub fn load_config(root: &Path) -> AppResult<Option<ValidationConfig>> {
    for name in CONFIG_NAMES {
        let path = root.join(name);
        if !path.exists() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|source| AppError::ReadConfig {
            path: path.clone(),
            source,
        })?;
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<ValidationConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<ValidationConfig>(&s).map_err(|e| e.to_string())
        };
        return parsed
            .map(Some)
            .map_err(|message| AppError::ParseConfig { path, message });
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &Overrides<'_>) -> AppResult<Effective> {
    let start = PathBuf::from(cli.repo_root.unwrap_or("."));
    let start = fs::canonicalize(&start).unwrap_or(start);
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();
    let css = cfg.css.unwrap_or_default();
    let service = cfg.service.unwrap_or_default();

    let output = cli
        .output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    if output != "human" && output != "json" {
        return Err(AppError::UnknownOutput(output));
    }

    let defaults = StyleOptions::default();
    let style = StyleOptions {
        profile: cli
            .profile
            .map(|s| s.to_string())
            .or(css.profile)
            .unwrap_or(defaults.profile),
        medium: cli
            .media
            .map(|s| s.to_string())
            .or(css.media)
            .unwrap_or(defaults.medium),
        report_type: cli
            .report_type
            .map(|s| s.to_string())
            .or(css.report_type)
            .map(|s| ReportType::parse(&s))
            .unwrap_or(defaults.report_type),
    };

    Ok(Effective {
        repo_root,
        config_found,
        output,
        style,
        html_url: service
            .html_url
            .unwrap_or_else(|| DEFAULT_HTML_URL.to_string()),
        css_url: service.css_url.unwrap_or_else(|| DEFAULT_CSS_URL.to_string()),
        timeout: service.timeout_secs.map(Duration::from_secs),
    })
}
