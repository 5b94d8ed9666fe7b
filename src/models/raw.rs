//! Raw response schemas of the two W3C services.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
/// Nu HTML checker response. `messages` is absent when the checker
/// answered with something other than a validation result.
pub struct MarkupResponse {
    #[serde(default)]
    pub messages: Option<Vec<RawMarkupMessage>>,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
/// One entry of the Nu checker's flat message list.
pub struct RawMarkupMessage {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "lastLine", default)]
    pub last_line: Option<u32>,
    #[serde(rename = "lastColumn", default)]
    pub last_column: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
/// Envelope of the CSS validator's JSON output.
pub struct StyleResponse {
    #[serde(default)]
    pub cssvalidation: Option<StyleResult>,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
/// CSS validator result: errors and warnings are reported separately.
pub struct StyleResult {
    #[serde(default)]
    pub errors: Option<Vec<RawStyleMessage>>,
    #[serde(default)]
    pub warnings: Option<Vec<RawStyleMessage>>,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct RawStyleMessage {
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}
