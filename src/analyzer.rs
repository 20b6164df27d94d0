//! Analysis orchestrator: runs the rule set over every PHP file of every
//! plugin, in order, and aggregates the findings.
//!
//! The issue sequence is deterministic: plugin order, then file order, then
//! rule order within the file. Callers relying on stable output (tests, the
//! results UI) get byte-identical sequences for identical input.
use crate::model::{Issue, Plugin};
use crate::rules::{
    DeprecatedFunctionRule, DeprecatedFunctions, Rule, SyntaxRule, UnescapedOutputRule,
};

pub struct Analyzer {
    syntax: SyntaxRule,
    unescaped_output: UnescapedOutputRule,
    deprecated: DeprecatedFunctionRule,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(DeprecatedFunctions::default())
    }
}

impl Analyzer {
    pub fn new(deprecated: DeprecatedFunctions) -> Self {
        Self {
            syntax: SyntaxRule,
            unescaped_output: UnescapedOutputRule,
            deprecated: DeprecatedFunctionRule::new(deprecated),
        }
    }

    /// Analyze all `.php` files (case-insensitive extension) across the given
    /// plugins. Non-PHP files are left to external collaborators.
    ///
    /// Per file: a syntax failure yields that single issue and gates every
    /// other rule; otherwise the text heuristic runs first, then the AST
    /// rules. The text rule needs no AST, so only the syntax gate can skip
    /// it.
    pub fn analyze(&self, plugins: &[Plugin]) -> Vec<Issue> {
        let mut all_issues = Vec::new();

        for plugin in plugins {
            for file in &plugin.files {
                if !file.is_php() {
                    continue;
                }

                let syntax_issues = self.syntax.check(file, plugin);
                if !syntax_issues.is_empty() {
                    all_issues.extend(syntax_issues);
                    continue;
                }

                all_issues.extend(self.unescaped_output.check(file, plugin));
                all_issues.extend(self.deprecated.check(file, plugin));
            }
        }

        all_issues
    }
}
