//! String options parsing.
//!
//! Parses option strings like `fullHeight=false&valign=bottom` into a typed
//! [`Config`]. Every key is optional; omitted keys keep their defaults.
//! Nothing here fails: unparseable values keep the default and produce a
//! [`ParseWarning`].
//!
//! # Example
//!
//! ```
//! use fullsize::options;
//! use fullsize::{HAlign, VAlign};
//!
//! let result = options::parse("fullHeight=false&valign=bottom&halign=sideways");
//!
//! assert!(!result.config.full_height);
//! assert_eq!(result.config.valign, VAlign::Bottom);
//! // Unknown keyword: center is kept, with a warning.
//! assert_eq!(result.config.halign, HAlign::Center);
//! assert_eq!(result.warnings.len(), 1);
//! ```
//!
//! # Keys
//!
//! | Key | Aliases | Values |
//! |---|---|---|
//! | `fullWidth` | `full_width`, `full-width` | `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off` |
//! | `fullHeight` | `full_height`, `full-height` | as above |
//! | `constrainProportions` | `constrain_proportions`, `constrain-proportions`, `constrain` | as above |
//! | `valign` | | `top`, `center`, `bottom` |
//! | `halign` | | `left`, `center`, `right` |
//! | `viewport` | | ancestor selector, passed through verbatim |
//!
//! Keys are matched case-insensitively.

use alloc::string::String;
use alloc::vec::Vec;

use crate::align::{HAlign, VAlign};
use crate::config::Config;

/// Result of parsing an options string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Parsed configuration, defaults filled in.
    pub config: Config,
    /// Ancestor selector from the `viewport` key, if present.
    pub viewport: Option<String>,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from options parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: &'static str, value: String },
    /// A key was not recognized.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed; the default
    /// was kept.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse an options string (with or without leading `?`).
pub fn parse(options: &str) -> ParseResult {
    let mut parsed = Parsed::default();
    let mut warnings = Vec::new();

    for pair in split_options(options) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key);
        let value = percent_decode(raw_value);
        dispatch_key(&key.to_ascii_lowercase(), &key, value, &mut parsed, &mut warnings);
    }

    let defaults = Config::new();
    ParseResult {
        config: Config {
            full_width: parsed.full_width.unwrap_or(defaults.full_width),
            full_height: parsed.full_height.unwrap_or(defaults.full_height),
            valign: parsed.valign.unwrap_or(defaults.valign),
            halign: parsed.halign.unwrap_or(defaults.halign),
            constrain_proportions: parsed
                .constrain_proportions
                .unwrap_or(defaults.constrain_proportions),
        },
        viewport: parsed.viewport,
        warnings,
    }
}

/// Fields seen so far; `None` means "not given".
#[derive(Default)]
struct Parsed {
    full_width: Option<bool>,
    full_height: Option<bool>,
    valign: Option<VAlign>,
    halign: Option<HAlign>,
    constrain_proportions: Option<bool>,
    viewport: Option<String>,
}

fn dispatch_key(
    key: &str,
    original_key: &str,
    value: String,
    parsed: &mut Parsed,
    warnings: &mut Vec<ParseWarning>,
) {
    match key {
        "fullwidth" | "full_width" | "full-width" => set_or_warn(
            &mut parsed.full_width,
            parse_bool(&value),
            "fullWidth",
            value,
            BOOL_REASON,
            warnings,
        ),
        "fullheight" | "full_height" | "full-height" => set_or_warn(
            &mut parsed.full_height,
            parse_bool(&value),
            "fullHeight",
            value,
            BOOL_REASON,
            warnings,
        ),
        "constrainproportions" | "constrain_proportions" | "constrain-proportions"
        | "constrain" => set_or_warn(
            &mut parsed.constrain_proportions,
            parse_bool(&value),
            "constrainProportions",
            value,
            BOOL_REASON,
            warnings,
        ),
        "valign" => set_or_warn(
            &mut parsed.valign,
            VAlign::from_keyword(&value),
            "valign",
            value,
            "expected top, center, or bottom",
            warnings,
        ),
        "halign" => set_or_warn(
            &mut parsed.halign,
            HAlign::from_keyword(&value),
            "halign",
            value,
            "expected left, center, or right",
            warnings,
        ),
        "viewport" => {
            let selector = value.trim();
            let selector = (!selector.is_empty()).then(|| String::from(selector));
            set_or_warn(
                &mut parsed.viewport,
                selector,
                "viewport",
                value,
                "empty selector",
                warnings,
            );
        }
        _ => {
            log::warn!(target: "fullsize::options", "unrecognized option {original_key:?}");
            warnings.push(ParseWarning::KeyNotRecognized {
                key: String::from(original_key),
                value,
            });
        }
    }
}

const BOOL_REASON: &str = "expected true/false, 1/0, yes/no, or on/off";

fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &'static str,
    value: String,
    reason: &'static str,
    warnings: &mut Vec<ParseWarning>,
) {
    match parsed {
        Some(v) => {
            if field.is_some() {
                warnings.push(ParseWarning::DuplicateKey { key, value });
            }
            *field = Some(v);
        }
        None => {
            log::warn!(target: "fullsize::options", "invalid {key} {value:?}, keeping default");
            warnings.push(ParseWarning::ValueInvalid { key, value, reason });
        }
    }
}

// ---- Value parsers ----

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ---- Tokenizer ----

/// Split on '&', also accepting ';' so attribute-style `a=1; b=2` works.
fn split_options(options: &str) -> impl Iterator<Item = &str> {
    let options = options.strip_prefix('?').unwrap_or(options);
    options
        .split(['&', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '=' (or ':').
fn split_pair(pair: &str) -> (&str, &str) {
    match pair.find(['=', ':']) {
        Some(pos) => (pair[..pos].trim(), pair[pos + 1..].trim()),
        None => (pair, ""),
    }
}

/// Percent-decode a component. Also handles '+' as space.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    out.push(hi << 4 | lo);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
