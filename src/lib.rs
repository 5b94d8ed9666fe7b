//! w3c-validate core library.
//!
//! This crate validates HTML and CSS documents against the W3C services and
//! turns their two different result shapes into one counted, line-anchored
//! report.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `document`: The document abstraction and its file-backed implementation.
//! - `target`: Content-type classification for validator selection.
//! - `validator`: Validator traits and the W3C HTTP clients.
//! - `models`: Unified diagnostics and raw validator response schemas.
//! - `normalize`: Raw results to `Diagnostic`s.
//! - `report`: Report entries and the report builder.
//! - `sink`: The report sink and the in-memory panel.
//! - `dispatch`: One validation run end to end, guarded by invocation tokens.
//! - `run`: Path expansion, sequential runs over files and the exit verdict.
//! - `output`: Human/JSON printers for the panel.
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod models;
pub mod normalize;
pub mod output;
pub mod report;
pub mod run;
pub mod sink;
pub mod target;
pub mod validator;
