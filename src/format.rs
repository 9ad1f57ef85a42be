//! Presentation helpers over a [`ValidationResult`].

use std::collections::HashMap;

use crate::error::{Failure, PathSegment, ValidationResult};

/// Flat failure structure, useful for form validation.
///
/// - `form_errors`: failures recorded with the root identifier
/// - `field_errors`: messages grouped by top-level field name
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct FlatResult {
    pub form_errors: Vec<String>,
    pub field_errors: HashMap<String, Vec<String>>,
}

/// Flatten a [`ValidationResult`] into a simple field-based structure.
///
/// # Example
/// ```
/// use fluent_rules::prelude::*;
///
/// let mut result = ValidationResult::new();
/// string::min_length(3).apply(Some("ab"), &mut result, &Identifier::field("name"));
///
/// let flat = flatten_result(&result);
/// assert!(flat.form_errors.is_empty());
/// assert_eq!(flat.field_errors["name"].len(), 1);
/// ```
pub fn flatten_result(result: &ValidationResult) -> FlatResult {
    let mut flat = FlatResult::default();

    for failure in &result.failures {
        match failure.identifier().segments().first() {
            None => flat.form_errors.push(failure.message().to_string()),
            Some(segment) => {
                let key = match segment {
                    PathSegment::Field(name) => name.clone(),
                    PathSegment::Index(idx) => idx.to_string(),
                };
                flat.field_errors
                    .entry(key)
                    .or_default()
                    .push(failure.message().to_string());
            }
        }
    }

    flat
}

/// Tree-based failure structure, mirrors the shape of the identifiers.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct FailureTree {
    pub errors: Vec<String>,
    pub properties: HashMap<String, FailureTree>,
    pub items: Vec<Option<FailureTree>>,
}

impl FailureTree {
    fn descend(&mut self, segment: &PathSegment) -> &mut FailureTree {
        match segment {
            PathSegment::Field(name) => self.properties.entry(name.clone()).or_default(),
            PathSegment::Index(idx) => {
                if self.items.len() <= *idx {
                    self.items.resize_with(idx + 1, || None);
                }
                self.items[*idx].get_or_insert_with(FailureTree::default)
            }
        }
    }
}

/// Arrange the failures of a result into a tree keyed by identifier segments.
pub fn treeify_result(result: &ValidationResult) -> FailureTree {
    let mut root = FailureTree::default();

    for failure in &result.failures {
        let node = failure
            .identifier()
            .segments()
            .iter()
            .fold(&mut root, |node, segment| node.descend(segment));
        node.errors.push(failure.message().to_string());
    }

    root
}

fn pretty_lines(failure: &Failure) -> [String; 2] {
    let location = if failure.identifier().is_root() {
        String::from("value")
    } else {
        failure.identifier().to_string()
    };
    [
        format!("✖ {}", failure.message()),
        format!("  → at {} ({})", location, failure.code()),
    ]
}

/// Render a result as human-readable text.
///
/// # Example output
/// ```text
/// ✖ String must be at least 3 characters long
///   → at name (string.min_length)
/// ✖ Value must not be null
///   → at email (object.not_null)
/// ```
pub fn prettify_result(result: &ValidationResult) -> String {
    result
        .failures
        .iter()
        .flat_map(pretty_lines)
        .collect::<Vec<_>>()
        .join("\n")
}
