//! Reader for catalog markup.
//!
//! The grammar lives in `catalog.pest`. Reading produces an [`Element`] tree
//! with lower-cased tag and attribute names, decoded character entities and
//! the line/column of every element, ready for [`crate::tag::FromTag`].

use std::borrow::Cow;

use lazy_static::lazy_static;
use pest::Parser;
use pest::error::LineColLocation;
use pest::iterators::Pair;
use pest_derive::Parser;
use regex::{Captures, Regex};

use crate::error::{CatalogError, Result};
use crate::tag::Element;

#[derive(Parser)]
#[grammar = "catalog.pest"]
struct MarkupParser;

lazy_static! {
    static ref ENTITY: Regex = Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").unwrap();
}

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// Parses a whole document and returns its root element.
pub fn parse(document: &str) -> Result<Element> {
    let mut pairs = MarkupParser::parse(Rule::document, document).map_err(markup_error)?;
    let root = pairs
        .next()
        .and_then(|doc| doc.into_inner().find(|p| p.as_rule() == Rule::element))
        .ok_or_else(|| CatalogError::Markup {
            message: "document has no root element".to_string(),
            line: None,
            col: None,
        })?;
    Ok(build(root))
}

fn markup_error(e: pest::error::Error<Rule>) -> CatalogError {
    let (line, col) = match e.line_col {
        LineColLocation::Pos((line, col)) => (line, col),
        LineColLocation::Span((line, col), _) => (line, col),
    };
    CatalogError::Markup {
        message: e.variant.message().into_owned(),
        line: Some(line),
        col: Some(col),
    }
}

fn build(pair: Pair<Rule>) -> Element {
    let (line, col) = pair.as_span().start_pos().line_col();
    let mut inner = pair.into_inner();
    let kind = inner
        .next()
        .map(|name| name.as_str().to_ascii_lowercase())
        .unwrap_or_default();
    let mut element = Element::new(kind).at(line, col);
    let mut text: Option<String> = None;
    for part in inner {
        match part.as_rule() {
            Rule::attribute => {
                let mut name_value = part.into_inner();
                let name = name_value
                    .next()
                    .map(|n| n.as_str().to_ascii_lowercase())
                    .unwrap_or_default();
                let value = name_value
                    .next()
                    .map(|v| unescape(v.as_str()).into_owned())
                    .unwrap_or_default();
                element = element.with_attribute(name, value);
            }
            Rule::element => element = element.with_child(build(part)),
            Rule::text => text
                .get_or_insert_with(String::new)
                .push_str(&unescape(part.as_str())),
            Rule::cdata => {
                let raw = part.as_str();
                text.get_or_insert_with(String::new)
                    .push_str(&raw[CDATA_OPEN.len()..raw.len() - CDATA_CLOSE.len()]);
            }
            _ => (),
        }
    }
    if let Some(text) = text {
        element = element.with_text(text);
    }
    element
}

/// Decodes the predefined entities and numeric character references.
/// Unknown entities are left as they are.
pub fn unescape(raw: &str) -> Cow<'_, str> {
    ENTITY.replace_all(raw, |caps: &Captures| {
        let entity = &caps[1];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some('\u{a0}'),
            _ if entity.starts_with("#x") || entity.starts_with("#X") => {
                u32::from_str_radix(&entity[2..], 16).ok().and_then(char::from_u32)
            }
            _ if entity.starts_with('#') => {
                entity[1..].parse::<u32>().ok().and_then(char::from_u32)
            }
            _ => None,
        };
        match decoded {
            Some(c) => c.to_string(),
            None => caps[0].to_string(),
        }
    })
}
