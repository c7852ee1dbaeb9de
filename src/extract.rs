//! Attribute extractors: decode the four binding attribute families from
//! one element's raw tag text.
//!
//! Extraction is fixed-pattern matching over the tag text, not attribute
//! parsing: each family is located by its own pattern, so attribute order
//! within the tag never matters. Malformed values never fail extraction;
//! anything that doesn't match its full pattern is simply not decoded.

use regex::Regex;

use crate::types::{TargetRef, ValueRef};

/// Compiled patterns for the four attribute families plus the `id`
/// attribute used by selectors. Compiled once per scan and threaded
/// through the pipeline stages.
pub struct AttributePatterns {
    action: Regex,
    controller: Regex,
    id: Regex,
    target_plural: Regex,
    target_single: Regex,
    value: Regex,
}

impl AttributePatterns {
    /// Compile the fixed attribute patterns.
    ///
    /// # Panics
    ///
    /// Panics if a hardcoded pattern is invalid (compile-time invariant).
    pub fn compile() -> Self {
        return Self {
            action: Regex::new(r#"data-action=["']([^"']+)["']"#).expect("valid regex"),
            controller: Regex::new(r#"data-controller=["']([^"']+)["']"#).expect("valid regex"),
            id: Regex::new(r#"id=["']([^"']+)["']"#).expect("valid regex"),
            target_plural: Regex::new(r#"data-([^-\s]+)-targets=["']([^"']+)["']"#)
                .expect("valid regex"),
            target_single: Regex::new(r#"data-([^-\s]+)-target=["']([^"']+)["']"#)
                .expect("valid regex"),
            value: Regex::new(r#"data-([^-\s]+)-([^-\s]+(?:-[^-\s]+)*)-value=["']([^"']+)["']"#)
                .expect("valid regex"),
        };
    }

    /// Raw action strings from `data-action`, split on whitespace with
    /// empty tokens dropped. Order and duplicates are preserved. Malformed
    /// actions are kept verbatim; the lint pass flags them, extraction
    /// does not.
    pub fn actions(&self, tag: &str) -> Vec<String> {
        return self
            .action
            .captures(tag)
            .and_then(|cap| return cap.get(1))
            .map(|m| return split_tokens(m.as_str()))
            .unwrap_or_default();
    }

    /// Controller names from `data-controller`, same tokenization as
    /// `actions`. Absent attribute yields an empty list.
    pub fn controllers(&self, tag: &str) -> Vec<String> {
        return self
            .controller
            .captures(tag)
            .and_then(|cap| return cap.get(1))
            .map(|m| return split_tokens(m.as_str()))
            .unwrap_or_default();
    }

    /// The element's `id` attribute value, for selector suffixes.
    pub fn id_attribute(&self, tag: &str) -> Option<String> {
        return self
            .id
            .captures(tag)
            .and_then(|cap| return cap.get(1))
            .map(|m| return m.as_str().to_string());
    }

    /// Target declarations from both attribute shapes: singular
    /// `data-<controller>-target="name"` (one target per match) and plural
    /// `data-<controller>-targets="a b c"` (one per whitespace-delimited
    /// name). Singular matches precede plural matches; each group keeps
    /// document order.
    pub fn targets(&self, tag: &str) -> Vec<TargetRef> {
        let mut targets = Vec::new();

        for cap in self.target_single.captures_iter(tag) {
            let (Some(controller), Some(name)) = (cap.get(1), cap.get(2)) else {
                continue;
            };
            targets.push(TargetRef {
                controller: normalize_controller(controller.as_str()),
                name: name.as_str().to_string(),
            });
        }

        for cap in self.target_plural.captures_iter(tag) {
            let (Some(controller), Some(names)) = (cap.get(1), cap.get(2)) else {
                continue;
            };
            let controller = normalize_controller(controller.as_str());
            for name in names.as_str().split_whitespace() {
                targets.push(TargetRef {
                    controller: controller.clone(),
                    name: name.to_string(),
                });
            }
        }

        return targets;
    }

    /// Value declarations from `data-<controller>-<name>-value="raw"`.
    /// The name segment may contain internal dashes and is converted to
    /// camel case; the raw value is kept verbatim.
    pub fn values(&self, tag: &str) -> Vec<ValueRef> {
        let mut values = Vec::new();

        for cap in self.value.captures_iter(tag) {
            let (Some(controller), Some(name), Some(raw)) = (cap.get(1), cap.get(2), cap.get(3))
            else {
                continue;
            };
            values.push(ValueRef {
                controller: normalize_controller(controller.as_str()),
                name: camel_case(name.as_str()),
                value: raw.as_str().to_string(),
            });
        }

        return values;
    }
}

/// Convert a dash-separated name to camel case: first segment unchanged,
/// each later segment gets its first letter capitalized, all concatenated.
/// `fade-ms` becomes `fadeMs`; a name with no dash is returned as-is.
pub fn camel_case(name: &str) -> String {
    let mut parts = name.split('-');
    let mut out = String::from(parts.next().unwrap_or(""));

    for part in parts {
        let mut chars = part.chars();
        if let Some(head) = chars.next() {
            out.extend(head.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    return out;
}

/// Normalize a controller attribute segment: underscores become dashes.
fn normalize_controller(segment: &str) -> String {
    return segment.replace('_', "-");
}

/// Split a quoted attribute value on whitespace, dropping empty tokens.
fn split_tokens(value: &str) -> Vec<String> {
    return value.split_whitespace().map(String::from).collect();
}
