//! AST walk flagging calls to deprecated WordPress functions.
use crate::model::{Issue, IssueCategory, IssueSeverity, IssueSource, Plugin, PluginFile};
use crate::parser;
use crate::rules::{DeprecatedFunctions, Rule};

/// Flags bare-name calls to functions in the injected deprecation table.
/// Only runs on files that already passed the syntax gate; a parse failure
/// here is an anomaly that is logged and contributes no issues.
pub struct DeprecatedFunctionRule {
    functions: DeprecatedFunctions,
}

impl DeprecatedFunctionRule {
    pub fn new(functions: DeprecatedFunctions) -> Self {
        Self { functions }
    }
}

impl Rule for DeprecatedFunctionRule {
    fn check(&self, file: &PluginFile, plugin: &Plugin) -> Vec<Issue> {
        let tree = match parser::parse(&file.code, &file.name) {
            Ok(tree) => tree,
            Err(err) => {
                tracing::error!(
                    file = %file.name,
                    error = %err,
                    "parser failed after syntax check passed"
                );
                return Vec::new();
            }
        };

        let mut issues = Vec::new();
        // Pre-order depth-first walk; every reachable node is visited exactly
        // once, so issue order matches source order.
        let mut cursor = tree.root_node().walk();
        'walk: loop {
            let node = cursor.node();
            if let Some(name) = parser::bare_callee(node, &file.code) {
                if self.functions.contains(name) {
                    issues.push(self.issue_for(name, file, plugin));
                }
            }
            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    break 'walk;
                }
            }
        }
        issues
    }

    fn rule_id(&self) -> &'static str {
        "deprecated-function"
    }
}

impl DeprecatedFunctionRule {
    fn issue_for(&self, name: &str, file: &PluginFile, plugin: &Plugin) -> Issue {
        Issue {
            plugin_name: plugin.name.clone(),
            file_name: file.name.clone(),
            category: IssueCategory::BestPractices,
            severity: IssueSeverity::Warning,
            description: format!("Usage of deprecated WordPress function: {name}()"),
            impact: "Using outdated functions can lead to bugs or break your site in future \
                     WordPress versions."
                .to_string(),
            suggestion: format!(
                "Replace {name}() with its modern equivalent. Check the official WordPress \
                 developer documentation for the recommended alternative."
            ),
            source: IssueSource::LocalScanner,
        }
    }
}
