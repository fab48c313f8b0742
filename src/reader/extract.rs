//! Scalar field extraction.
//!
//! Every mapping rule funnels through these helpers: locate at most one
//! match for a path expression, coerce its text into the target type, and
//! substitute the caller's default when the field is absent or unparsable.
//! Dates are the deliberate exception — they carry no default and fail the
//! whole load instead.

use chrono::NaiveDate;
use roxmltree::Node;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::xpath::{self, Matched, Namespaces, XPathError};
use crate::core::ReaderError;

/// Concatenated text of all descendant text nodes, trimmed.
///
/// Whitespace-only text nodes (indentation between child elements) are
/// skipped; the legacy DOM this mapping was written against discarded
/// insignificant whitespace before concatenating.
pub(crate) fn inner_text(node: Node<'_, '_>) -> String {
    let mut out = String::new();
    for text in node.descendants().filter(|n| n.is_text()) {
        if let Some(t) = text.text() {
            if !t.trim().is_empty() {
                out.push_str(t);
            }
        }
    }
    out.trim().to_string()
}

/// Extract a string field. No match and malformed path expressions read as
/// an absent field and yield `default`; a matched but empty element yields
/// the empty string. Hard evaluation failures propagate.
pub(crate) fn node_as_string(
    node: Node<'_, '_>,
    path: &str,
    ns: &Namespaces,
    default: &str,
) -> Result<String, ReaderError> {
    match xpath::select_one(node, path, ns) {
        Ok(Some(Matched::Element(el))) => Ok(inner_text(el)),
        Ok(Some(Matched::Attribute(value))) => Ok(value.to_string()),
        Ok(None) => Ok(default.to_string()),
        Err(XPathError::Expression(_)) => Ok(default.to_string()),
        Err(err @ XPathError::Evaluation(_)) => Err(err.into()),
    }
}

/// Extract a boolean field. Empty or absent yields `default`; `"true"`
/// (case-insensitive) and `"1"` yield true, anything else false.
pub(crate) fn node_as_bool(
    node: Node<'_, '_>,
    path: &str,
    ns: &Namespaces,
    default: bool,
) -> Result<bool, ReaderError> {
    let value = node_as_string(node, path, ns, "")?;
    if value.is_empty() {
        return Ok(default);
    }
    let trimmed = value.trim();
    Ok(trimmed.eq_ignore_ascii_case("true") || trimmed == "1")
}

/// Extract an integer field; parse failure silently yields `default`.
pub(crate) fn node_as_int(
    node: Node<'_, '_>,
    path: &str,
    ns: &Namespaces,
    default: i32,
) -> Result<i32, ReaderError> {
    let value = node_as_string(node, path, ns, "")?;
    Ok(value.trim().parse().unwrap_or(default))
}

/// Extract a decimal field; parse failure silently yields `default`.
/// Parsing is culture-invariant: `.` is the only decimal separator.
pub(crate) fn node_as_decimal(
    node: Node<'_, '_>,
    path: &str,
    ns: &Namespaces,
    default: Decimal,
) -> Result<Decimal, ReaderError> {
    let value = node_as_string(node, path, ns, "")?;
    Ok(Decimal::from_str(value.trim()).unwrap_or(default))
}

/// Extract a date field. There is no default: a missing element, a
/// `format` other than `"102"`, or text that is not an 8-digit `YYYYMMDD`
/// calendar date each abort the load.
pub(crate) fn node_as_date(
    node: Node<'_, '_>,
    path: &str,
    ns: &Namespaces,
) -> Result<NaiveDate, ReaderError> {
    let matched = xpath::select_one(node, path, ns)?;
    let el = match matched {
        Some(Matched::Element(el)) => el,
        Some(Matched::Attribute(_)) => {
            return Err(ReaderError::PathEvaluation(format!(
                "date path '{path}' selects an attribute"
            )));
        }
        None => {
            return Err(ReaderError::MalformedDate(format!(
                "no date element at '{path}'"
            )));
        }
    };

    // 1.x writers put the format attribute on the DateTimeString child of
    // the matched wrapper element; accept it in either place.
    let format = el
        .attribute("format")
        .or_else(|| {
            el.children()
                .find(|n| n.is_element())
                .and_then(|c| c.attribute("format"))
        })
        .unwrap_or("102");
    if format != "102" {
        return Err(ReaderError::UnsupportedDateFormat(format.to_string()));
    }

    let value = inner_text(el);
    let malformed = || {
        ReaderError::MalformedDate(format!("expected 8-digit YYYYMMDD value, got '{value}'"))
    };
    if value.len() != 8 {
        return Err(malformed());
    }
    let year: i32 = value.get(0..4).and_then(|s| s.parse().ok()).ok_or_else(malformed)?;
    let month: u32 = value.get(4..6).and_then(|s| s.parse().ok()).ok_or_else(malformed)?;
    let day: u32 = value.get(6..8).and_then(|s| s.parse().ok()).ok_or_else(malformed)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}
