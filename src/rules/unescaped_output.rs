//! Line-pattern heuristic for unescaped superglobal output (XSS).
//!
//! Deliberately shallow: a single-line regex, not data-flow analysis. A line
//! that also calls `wp_verify_nonce` is assumed to be a nonce check and is
//! skipped to cut false positives.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Issue, IssueCategory, IssueSeverity, IssueSource, Plugin, PluginFile};
use crate::rules::Rule;

static UNESCAPED_OUTPUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(echo|print|printf|=>)\s*\$_(GET|POST|REQUEST)\[")
        .unwrap_or_else(|e| panic!("invalid unescaped-output pattern: {e}"))
});

pub struct UnescapedOutputRule;

impl Rule for UnescapedOutputRule {
    fn check(&self, file: &PluginFile, plugin: &Plugin) -> Vec<Issue> {
        let mut issues = Vec::new();
        for (index, line) in file.code.split('\n').enumerate() {
            if !UNESCAPED_OUTPUT.is_match(line) || line.contains("wp_verify_nonce") {
                continue;
            }
            issues.push(Issue {
                plugin_name: plugin.name.clone(),
                file_name: file.name.clone(),
                category: IssueCategory::Security,
                severity: IssueSeverity::Critical,
                description: format!(
                    "Potential Cross-Site Scripting (XSS) vulnerability on line {}.",
                    index + 1
                ),
                impact: "This could allow an attacker to inject malicious scripts into your \
                         website, potentially stealing user data or defacing the site."
                    .to_string(),
                suggestion: "Always escape output. Sanitize and validate all user input. Use \
                             WordPress escaping functions like esc_html(), esc_attr(), or \
                             esc_url() on the variable from $_GET or $_POST before echoing it. \
                             For example: echo esc_html( $_POST['user_input'] );"
                    .to_string(),
                source: IssueSource::LocalScanner,
            });
        }
        issues
    }

    fn rule_id(&self) -> &'static str {
        "unescaped-output"
    }
}
