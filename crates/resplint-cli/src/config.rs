//! `resplint.json` configuration.
//!
//! ```jsonc
//! {
//!   "rules": { "LA0005": { "severity": "error" } },
//!   "attribute": { "name": "ProducesResponseTypeAttribute", "namespace": "Microsoft.AspNetCore.Mvc" },
//!   "analyzeGeneratedCode": false,
//!   "files": { "include": ["**/*.json"], "exclude": ["**/obj/**"] }
//! }
//! ```
//!
//! Comments and trailing commas are accepted.

use anyhow::{Context, Result, bail};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use resplint_analyzer::rules::get_rule;
use resplint_analyzer::{AnalyzerOptions, RuleSeverity};

use crate::args::CliArgs;

pub const CONFIG_FILE_NAME: &str = "resplint.json";

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResplintConfig {
    #[serde(default)]
    pub rules: FxHashMap<String, RuleConfig>,
    #[serde(default)]
    pub attribute: Option<AttributeConfig>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub analyze_generated_code: Option<bool>,
    #[serde(default)]
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RuleConfig {
    #[serde(default)]
    pub severity: Option<RuleSeverity>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttributeConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilesConfig {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Accept `true` as well as `"true"` for boolean options.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

pub fn parse_config(source: &str) -> Result<ResplintConfig> {
    let normalized = normalize_jsonc(source);
    let config: ResplintConfig =
        serde_json::from_str(&normalized).context("failed to parse resplint.json")?;
    for code in config.rules.keys() {
        if get_rule(code).is_none() {
            bail!("unknown rule '{code}' in resplint.json");
        }
    }
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<ResplintConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to load config: {}", path.display()))
}

/// `--config` when given (a directory means `<dir>/resplint.json`), otherwise
/// `resplint.json` in `cwd` if it exists.
pub fn resolve_config_path(cwd: &Path, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(explicit) = explicit else {
        let candidate = cwd.join(CONFIG_FILE_NAME);
        return Ok(candidate.is_file().then_some(candidate));
    };

    let mut candidate = if explicit.is_absolute() {
        explicit.to_path_buf()
    } else {
        cwd.join(explicit)
    };
    if candidate.is_dir() {
        candidate = candidate.join(CONFIG_FILE_NAME);
    }
    if !candidate.is_file() {
        bail!("config not found at {}", candidate.display());
    }
    Ok(Some(candidate))
}

/// Merge file settings and command-line overrides into analyzer options.
pub fn resolve_options(config: &ResplintConfig, args: &CliArgs) -> AnalyzerOptions {
    let mut options = AnalyzerOptions::default();

    if let Some(attribute) = &config.attribute {
        if let Some(name) = &attribute.name {
            options.attribute_name = name.clone();
        }
        if let Some(namespace) = &attribute.namespace {
            options.attribute_namespace = namespace.clone();
        }
    }
    for (code, rule) in &config.rules {
        if let Some(severity) = rule.severity {
            options.set_severity(code, severity);
        }
    }
    if let Some(analyze) = config.analyze_generated_code {
        options.analyze_generated_code = analyze;
    }

    if let Some(analyze) = args.analyze_generated_code {
        options.analyze_generated_code = analyze;
    }
    if let Some(severity) = args.severity {
        options.set_severity(
            resplint_analyzer::rules::rule_codes::REDUNDANT_PRODUCES_RESPONSE_TYPE_ATTRIBUTE,
            severity.into(),
        );
    }

    options
}

/// Include/exclude globs: command-line patterns replace the file's.
pub fn resolve_files(config: &ResplintConfig, args: &CliArgs) -> FilesConfig {
    FilesConfig {
        include: if args.include.is_empty() {
            config.files.include.clone()
        } else {
            args.include.clone()
        },
        exclude: if args.exclude.is_empty() {
            config.files.exclude.clone()
        } else {
            args.exclude.clone()
        },
    }
}

/// Drop `//` and `/* */` comments and trailing commas so `serde_json` can
/// read a JSONC config. Newlines inside comments are kept so parse errors
/// still report source line numbers.
fn normalize_jsonc(input: &str) -> String {
    #[derive(Clone, Copy)]
    enum State {
        Code,
        Str,
        StrEscape,
        LineComment,
        BlockComment,
    }

    let mut out = String::with_capacity(input.len());
    let mut state = State::Code;
    // Byte offset in `out` of a comma followed so far only by whitespace.
    let mut trailing_comma: Option<usize> = None;
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        state = match state {
            State::Str => {
                out.push(ch);
                match ch {
                    '\\' => State::StrEscape,
                    '"' => State::Code,
                    _ => State::Str,
                }
            }
            State::StrEscape => {
                out.push(ch);
                State::Str
            }
            State::LineComment => {
                if ch == '\n' {
                    out.push(ch);
                    State::Code
                } else {
                    State::LineComment
                }
            }
            State::BlockComment => {
                if ch == '*' && chars.next_if_eq(&'/').is_some() {
                    State::Code
                } else {
                    if ch == '\n' {
                        out.push(ch);
                    }
                    State::BlockComment
                }
            }
            State::Code => match ch {
                '/' if chars.next_if_eq(&'/').is_some() => State::LineComment,
                '/' if chars.next_if_eq(&'*').is_some() => State::BlockComment,
                _ => {
                    match ch {
                        '}' | ']' => {
                            if let Some(at) = trailing_comma.take() {
                                out.remove(at);
                            }
                        }
                        ',' => trailing_comma = Some(out.len()),
                        _ if ch.is_whitespace() => {}
                        _ => trailing_comma = None,
                    }
                    out.push(ch);
                    if ch == '"' { State::Str } else { State::Code }
                }
            },
        };
    }

    out
}
