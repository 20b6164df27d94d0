//! Core data model shared by the analyzer, the patch applicator, and the
//! JSON boundary to the surrounding application.
use serde::{Deserialize, Serialize};

/// A single source file inside a plugin. Immutable while being analyzed;
/// `modified` is flipped by the patch layer once a fix has been applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginFile {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub modified: bool,
}

impl PluginFile {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            modified: false,
        }
    }

    /// Case-insensitive extension check used by the analyzer to select files.
    pub fn is_php(&self) -> bool {
        self.name.to_lowercase().ends_with(".php")
    }
}

/// One unit of review scope. Multiple plugins can be reviewed together so
/// interoperability findings can name the plugin they belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plugin {
    pub name: String,
    pub files: Vec<PluginFile>,
}

impl Plugin {
    pub fn new(name: impl Into<String>, files: Vec<PluginFile>) -> Self {
        Self {
            name: name.into(),
            files,
        }
    }
}

/// Finding category. Serialized with the human-readable labels the results
/// UI groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueCategory {
    Security,
    Performance,
    #[serde(rename = "Best Practices")]
    BestPractices,
    Interoperability,
    #[serde(rename = "Code Quality")]
    CodeQuality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueSeverity {
    Critical,
    Warning,
    Info,
}

/// Where a finding came from: this crate's scanner or the external AI pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueSource {
    #[serde(rename = "Local Scanner")]
    LocalScanner,
    #[serde(rename = "AI Analysis")]
    ExternalAnalysis,
}

/// One finding emitted by analysis. Immutable value object; a review run
/// produces these in discovery order (plugin order, file order, rule order).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub plugin_name: String,
    pub file_name: String,
    pub category: IssueCategory,
    pub severity: IssueSeverity,
    pub description: String,
    pub impact: String,
    pub suggestion: String,
    pub source: IssueSource,
}

impl std::fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Security => write!(f, "Security"),
            Self::Performance => write!(f, "Performance"),
            Self::BestPractices => write!(f, "Best Practices"),
            Self::Interoperability => write!(f, "Interoperability"),
            Self::CodeQuality => write!(f, "Code Quality"),
        }
    }
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "Critical"),
            Self::Warning => write!(f, "Warning"),
            Self::Info => write!(f, "Info"),
        }
    }
}
