//! Minimal namespace-aware path evaluation over a `roxmltree` DOM.
//!
//! The mapping rules address fields with small path expressions in the
//! shape the legacy CII mapping used them: `//rsm:HeaderExchangedDocument/ID`,
//! `ID/@schemeID`, `CategoryTradeTax/TypeCode`. This module parses and
//! evaluates them relative to a context node.
//!
//! Supported syntax:
//!
//! - `A/B/C` — child steps relative to the context node.
//! - `//A/B` — the first step searches the context node's descendants in
//!   document order; the remaining steps are child steps.
//! - A final `@name` step selects an attribute of the matched element.
//! - A step may carry a prefix (`rsm:Name`), resolved against the
//!   [`Namespaces`] bindings. Unprefixed steps match on local name only.

use roxmltree::Node;

use crate::core::ReaderError;

/// Failure while parsing or evaluating a path expression.
///
/// The two variants carry different policies at the extraction boundary:
/// `Expression` failures are recoverable and read as "no match" (the
/// caller's default is substituted), `Evaluation` failures propagate and
/// abort the load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum XPathError {
    /// The expression itself is malformed: empty expression or step,
    /// misplaced `@`, unbound namespace prefix.
    Expression(String),
    /// Evaluation reached a state the engine cannot honor, e.g. an
    /// attribute step where an element set is required.
    Evaluation(String),
}

impl std::fmt::Display for XPathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expression(msg) => write!(f, "invalid path expression: {msg}"),
            Self::Evaluation(msg) => write!(f, "path evaluation error: {msg}"),
        }
    }
}

impl From<XPathError> for ReaderError {
    fn from(e: XPathError) -> Self {
        ReaderError::PathEvaluation(e.to_string())
    }
}

/// Prefix bindings used to match qualified steps.
#[derive(Debug, Clone, Default)]
pub(crate) struct Namespaces {
    bindings: Vec<(String, String)>,
}

impl Namespaces {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Bind `prefix` to a namespace URI. Later bindings win.
    pub(crate) fn bind(&mut self, prefix: &str, uri: &str) {
        self.bindings.push((prefix.to_string(), uri.to_string()));
    }

    fn lookup(&self, prefix: &str) -> Option<&str> {
        self.bindings
            .iter()
            .rev()
            .find(|(p, _)| p == prefix)
            .map(|(_, uri)| uri.as_str())
    }
}

/// A single path match: an element node or an attribute's value.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Matched<'a, 'input> {
    Element(Node<'a, 'input>),
    Attribute(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    prefix: Option<String>,
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PathExpr {
    from_descendants: bool,
    steps: Vec<Step>,
    attribute: Option<String>,
}

impl PathExpr {
    fn parse(expr: &str) -> Result<Self, XPathError> {
        if expr.is_empty() {
            return Err(XPathError::Expression("empty expression".into()));
        }
        let (from_descendants, rest) = match expr.strip_prefix("//") {
            Some(rest) => (true, rest),
            None if expr.starts_with('/') => {
                return Err(XPathError::Expression(format!(
                    "absolute path '{expr}' is not supported"
                )));
            }
            None => (false, expr),
        };

        let mut steps = Vec::new();
        let mut attribute = None;
        let parts: Vec<&str> = rest.split('/').collect();
        let last = parts.len() - 1;
        for (i, part) in parts.iter().enumerate() {
            if let Some(attr) = part.strip_prefix('@') {
                if i != last {
                    return Err(XPathError::Expression(format!(
                        "attribute step '@{attr}' must be the final step in '{expr}'"
                    )));
                }
                if attr.is_empty() {
                    return Err(XPathError::Expression(format!(
                        "empty attribute name in '{expr}'"
                    )));
                }
                attribute = Some(attr.to_string());
            } else {
                if part.is_empty() {
                    return Err(XPathError::Expression(format!("empty step in '{expr}'")));
                }
                let step = match part.split_once(':') {
                    Some((prefix, name)) => {
                        if prefix.is_empty() || name.is_empty() {
                            return Err(XPathError::Expression(format!(
                                "malformed qualified step '{part}' in '{expr}'"
                            )));
                        }
                        Step {
                            prefix: Some(prefix.to_string()),
                            name: name.to_string(),
                        }
                    }
                    None => Step {
                        prefix: None,
                        name: part.to_string(),
                    },
                };
                steps.push(step);
            }
        }
        Ok(Self {
            from_descendants,
            steps,
            attribute,
        })
    }
}

fn step_matches(node: Node<'_, '_>, step: &Step, ns: &Namespaces) -> Result<bool, XPathError> {
    if !node.is_element() || node.tag_name().name() != step.name {
        return Ok(false);
    }
    match &step.prefix {
        // Unprefixed steps match on local name in any namespace; the legacy
        // paths were written without prefixes against fully qualified input.
        None => Ok(true),
        Some(prefix) => {
            let uri = ns.lookup(prefix).ok_or_else(|| {
                XPathError::Expression(format!("unbound namespace prefix '{prefix}'"))
            })?;
            Ok(node.tag_name().namespace() == Some(uri))
        }
    }
}

fn walk<'a, 'input>(
    node: Node<'a, 'input>,
    steps: &[Step],
    ns: &Namespaces,
    out: &mut Vec<Node<'a, 'input>>,
    all: bool,
) -> Result<(), XPathError> {
    match steps.split_first() {
        None => out.push(node),
        Some((step, rest)) => {
            for child in node.children() {
                if step_matches(child, step, ns)? {
                    walk(child, rest, ns, out, all)?;
                    if !all && !out.is_empty() {
                        return Ok(());
                    }
                }
            }
        }
    }
    Ok(())
}

fn collect<'a, 'input>(
    context: Node<'a, 'input>,
    path: &PathExpr,
    ns: &Namespaces,
    all: bool,
) -> Result<Vec<Node<'a, 'input>>, XPathError> {
    let mut out = Vec::new();
    let Some((first, rest)) = path.steps.split_first() else {
        // Attribute-only expression: the context node itself is the target.
        out.push(context);
        return Ok(out);
    };
    if path.from_descendants {
        for node in context.descendants() {
            if step_matches(node, first, ns)? {
                walk(node, rest, ns, &mut out, all)?;
                if !all && !out.is_empty() {
                    break;
                }
            }
        }
    } else {
        for node in context.children() {
            if step_matches(node, first, ns)? {
                walk(node, rest, ns, &mut out, all)?;
                if !all && !out.is_empty() {
                    break;
                }
            }
        }
    }
    Ok(out)
}

/// Evaluate `expr` relative to `node` and return the first match in
/// document order, or `None`. A matched element with empty content is a
/// match, not `None`; a present final attribute step with no such
/// attribute on the matched element is `None`.
pub(crate) fn select_one<'a, 'input>(
    node: Node<'a, 'input>,
    expr: &str,
    ns: &Namespaces,
) -> Result<Option<Matched<'a, 'input>>, XPathError> {
    let path = PathExpr::parse(expr)?;
    let nodes = collect(node, &path, ns, false)?;
    let Some(first) = nodes.first().copied() else {
        return Ok(None);
    };
    match &path.attribute {
        Some(attr) => Ok(first.attribute(attr.as_str()).map(Matched::Attribute)),
        None => Ok(Some(Matched::Element(first))),
    }
}

/// Evaluate `expr` relative to `node` and return every matching element in
/// document order. Attribute steps are a hard error here: repeated-entity
/// assembly iterates elements.
pub(crate) fn select_all<'a, 'input>(
    node: Node<'a, 'input>,
    expr: &str,
    ns: &Namespaces,
) -> Result<Vec<Node<'a, 'input>>, XPathError> {
    let path = PathExpr::parse(expr)?;
    if path.attribute.is_some() {
        return Err(XPathError::Evaluation(format!(
            "expected an element set, got an attribute step in '{expr}'"
        )));
    }
    collect(node, &path, ns, true)
}
