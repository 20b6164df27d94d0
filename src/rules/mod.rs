//! Detector rules run by the analyzer.
//!
//! Each rule is an independent pure check over one file: it may read the
//! file text or parse it, but it never depends on another rule's output.
use std::collections::HashSet;

use crate::model::{Issue, Plugin, PluginFile};

pub mod deprecated;
pub mod syntax;
pub mod unescaped_output;
mod wordpress;

pub use deprecated::DeprecatedFunctionRule;
pub use syntax::SyntaxRule;
pub use unescaped_output::UnescapedOutputRule;

/// One independent detector. Implementations must be pure: same file in,
/// same issues out, in a deterministic order.
pub trait Rule: Send + Sync {
    fn check(&self, file: &PluginFile, plugin: &Plugin) -> Vec<Issue>;
    fn rule_id(&self) -> &'static str;
}

/// Immutable lookup table of deprecated API names, injected into the rule
/// engine so tests can run with custom sets.
#[derive(Debug, Clone)]
pub struct DeprecatedFunctions {
    names: HashSet<String>,
}

impl DeprecatedFunctions {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for DeprecatedFunctions {
    /// The built-in WordPress deprecation list.
    fn default() -> Self {
        Self::new(wordpress::DEPRECATED_FUNCTIONS.iter().copied())
    }
}
