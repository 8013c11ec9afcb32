//! Region declaration and cue setting grammars
//!
//! Both grammars split their input into whitespace-separated `key<sep>value`
//! tokens. Unknown keys are skipped so newer attributes pass through older
//! readers; tokens without a separator and non-numeric integers fail.

use std::sync::Arc;

use log::debug;

use super::ParseError;
use crate::model::{Region, StyleAttributes};
use crate::utils::IdMap;

/// Separator between a region setting key and value
const REGION_SEPARATOR: char = '=';
/// Separator between a cue setting key and value
const CUE_SEPARATOR: char = ':';

/// Parse the part of a `Region:` line after the prefix
///
/// # Errors
///
/// Returns [`ParseError::MalformedRegionAttribute`] for a token without `=`
/// and [`ParseError::InvalidIntegerAttribute`] for a non-numeric `lines`.
pub fn parse_region(declaration: &str, line: usize) -> Result<Region, ParseError> {
    let mut region = Region::default();
    let mut style = StyleAttributes::default();

    for token in declaration.split_whitespace() {
        let (key, value) = token.split_once(REGION_SEPARATOR).ok_or_else(|| {
            ParseError::MalformedRegionAttribute {
                line,
                token: token.to_string(),
            }
        })?;

        match key {
            "id" => region.id = value.to_string(),
            "lines" => {
                let lines = value
                    .parse()
                    .map_err(|_| ParseError::InvalidIntegerAttribute {
                        line,
                        key: key.to_string(),
                        value: value.to_string(),
                    })?;
                style.lines = Some(lines);
            }
            "regionanchor" => style.region_anchor = Some(value.to_string()),
            "scroll" => style.scroll = Some(value.to_string()),
            "viewportanchor" => style.viewport_anchor = Some(value.to_string()),
            "width" => style.width = Some(value.to_string()),
            _ => debug!("line {line}: ignoring unknown region attribute '{key}'"),
        }
    }

    region.style = style.normalized();
    Ok(region)
}

/// Settings found after the end timestamp of a timing line
#[derive(Debug, Default)]
pub struct CueSettings {
    /// Inline cue style
    pub style: StyleAttributes,
    /// Region resolved from a `region:` setting
    pub region: Option<Arc<Region>>,
}

/// Parse cue setting tokens, resolving `region:` against known regions
///
/// # Errors
///
/// Returns [`ParseError::MalformedStyleAttribute`] for a token without `:`
/// and [`ParseError::UnknownRegionReference`] for an undeclared region.
pub fn parse_cue_settings<'a, I>(
    tokens: I,
    regions: &IdMap<Arc<Region>>,
    line: usize,
) -> Result<CueSettings, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut settings = CueSettings::default();

    for token in tokens.into_iter().filter(|token| !token.is_empty()) {
        let (key, value) = token.split_once(CUE_SEPARATOR).ok_or_else(|| {
            ParseError::MalformedStyleAttribute {
                line,
                token: token.to_string(),
            }
        })?;

        match key {
            "align" => settings.style.align = Some(value.to_string()),
            "line" => settings.style.line = Some(value.to_string()),
            "position" => settings.style.position = Some(value.to_string()),
            "region" => {
                let region =
                    regions
                        .get(value)
                        .ok_or_else(|| ParseError::UnknownRegionReference {
                            line,
                            region: value.to_string(),
                        })?;
                settings.region = Some(Arc::clone(region));
            }
            "size" => settings.style.size = Some(value.to_string()),
            "vertical" => settings.style.vertical = Some(value.to_string()),
            _ => debug!("line {line}: ignoring unknown cue setting '{key}'"),
        }
    }

    settings.style = settings.style.normalized();
    Ok(settings)
}
