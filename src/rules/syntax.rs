//! Syntax gate: a file that does not parse yields exactly one Critical
//! code-quality issue and nothing else.
use crate::model::{Issue, IssueCategory, IssueSeverity, IssueSource, Plugin, PluginFile};
use crate::parser;
use crate::rules::Rule;

pub struct SyntaxRule;

impl Rule for SyntaxRule {
    fn check(&self, file: &PluginFile, plugin: &Plugin) -> Vec<Issue> {
        match parser::parse(&file.code, &file.name) {
            Ok(_) => Vec::new(),
            Err(err) => vec![Issue {
                plugin_name: plugin.name.clone(),
                file_name: file.name.clone(),
                category: IssueCategory::CodeQuality,
                severity: IssueSeverity::Critical,
                description: format!("PHP Syntax Error: {}", err.message),
                impact: "This is a fatal error that will crash your website.".to_string(),
                suggestion: format!(
                    "Check the code around line {}, column {} for mistakes like missing \
                     semicolons, incorrect variable names, or mismatched brackets.",
                    err.line, err.column
                ),
                source: IssueSource::LocalScanner,
            }],
        }
    }

    fn rule_id(&self) -> &'static str {
        "php-syntax"
    }
}
