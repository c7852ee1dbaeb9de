/// Core domain types for the controller/binding cross-reference graph.
use std::fmt;

use serde::{Deserialize, Serialize};

/// One discovered behavior module, prior to aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerDescriptor {
    /// Canonical dash-separated controller name (`message-form`).
    pub name: String,
    /// Path of the defining file, relative to the scan root.
    pub module_path: String,
}

/// A controller descriptor enriched with usage statistics folded in
/// from the binding set. `actions`, `targets`, and `values` are
/// deduplicated and sorted ascending; that ordering is required for
/// deterministic artifacts across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedController {
    /// Canonical dash-separated controller name.
    pub name: String,
    /// Path of the defining file, relative to the scan root.
    #[serde(rename = "module")]
    pub module_path: String,
    /// Number of bindings whose controller list names this controller.
    #[serde(rename = "elements")]
    pub element_count: usize,
    /// Method names wired to this controller via canonical actions.
    pub actions: Vec<String>,
    /// Target names declared for this controller.
    pub targets: Vec<String>,
    /// Value names declared for this controller.
    pub values: Vec<String>,
}

/// One template element observed to carry at least one `data-` attribute.
/// Field order is the artifact's key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// Sequential identifier, `el_0001` onward, unique within one scan.
    pub id: String,
    /// Human-readable locator: `path:line <tag prefix...#id>`.
    pub selector: String,
    /// Controller names from `data-controller`, document order,
    /// duplicates preserved.
    pub controllers: Vec<String>,
    /// Raw action strings from `data-action`, document order.
    pub actions: Vec<String>,
    /// Decoded target declarations.
    pub targets: Vec<TargetRef>,
    /// Decoded value declarations.
    pub values: Vec<ValueRef>,
    /// Set iff the element names a controller but declares no actions,
    /// targets, or values. Absent from the artifact rather than `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broken: Option<bool>,
}

/// A named sub-element role declared on an element for a specific controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRef {
    /// Normalized (dash-separated) controller name.
    pub controller: String,
    /// Target name, verbatim from the attribute value.
    pub name: String,
}

/// A named, typed parameter declared on an element for a specific controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRef {
    /// Normalized (dash-separated) controller name.
    pub controller: String,
    /// Value name, converted from dash-separated to camel-case.
    pub name: String,
    /// Raw attribute string value.
    pub value: String,
}

/// Severity of a lint finding. Declaration order is ascending severity,
/// which `Ord` relies on for threshold comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintLevel {
    /// Advisory; never a defect on its own.
    Info,
    /// Likely defect, scan still completes.
    Warn,
    /// Reserved for future rules; none of the fixed rules produce it.
    Error,
}

impl fmt::Display for LintLevel {
    /// Uppercase label used by the lint report (`[WARN]`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            LintLevel::Info => write!(f, "INFO"),
            LintLevel::Warn => write!(f, "WARN"),
            LintLevel::Error => write!(f, "ERROR"),
        };
    }
}

/// One detected consistency problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintFinding {
    /// Severity of the finding.
    pub level: LintLevel,
    /// Human-readable category (`Unknown controller`).
    pub title: String,
    /// Specific message naming the offending item.
    pub detail: String,
    /// Optional remediation suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Locator of the triggering binding, normally its selector.
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Provenance block of a scan artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanMeta {
    /// Scan root as given on the command line.
    pub root: String,
    /// RFC 3339 UTC timestamp of the scan.
    pub generated_at: String,
}

/// The complete output of one scan, and the single persisted artifact.
/// `bindings` and `lint` derive from template content alone and
/// `controllers` derives from inventory plus `bindings`, so the record
/// is self-consistent for a given source tree snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Scan provenance.
    pub meta: ScanMeta,
    /// Aggregated controller inventory.
    pub controllers: Vec<AggregatedController>,
    /// All discovered template bindings, in discovery order.
    pub bindings: Vec<Binding>,
    /// Findings from the fixed lint rule set.
    pub lint: Vec<LintFinding>,
}
