//! Static analysis and line-based patching for WordPress plugin sources.
//!
//! The crate has two halves. The analysis side parses each PHP file of a
//! plugin, runs a set of independent detector rules over text and syntax
//! tree, and aggregates typed [`model::Issue`]s in deterministic order. The
//! patch side applies planner-supplied line edits to a file, bottom-up, so
//! all line numbers stay anchored to the original text.

/// Core data model: plugins, files, and typed issues
pub mod model;

/// PHP parser adapter over tree-sitter
pub mod parser;

/// Independent detector rules and the deprecation lookup table
pub mod rules;

/// Orchestrates rules over plugins and aggregates issues
pub mod analyzer;

/// Line-based patch applicator and modification plans
pub mod patch;

// Re-export the types most callers need
pub use analyzer::Analyzer;
pub use model::{Issue, IssueCategory, IssueSeverity, IssueSource, Plugin, PluginFile};
pub use parser::ParseError;
pub use patch::{apply_patch, apply_plan, ChangeInstruction, ChangeKind, FileModificationPlan};
pub use rules::{DeprecatedFunctions, Rule};
