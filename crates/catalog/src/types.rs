use serde::Serialize;

/// Checklist grouping for a document.
///
/// Categories are the join key between documents and analyses: an analysis
/// applies to a document when the document's category is in the analysis's
/// applicability set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    Identity,
    Student,
    Applications,
    Financial,
    Work,
    Family,
    Background,
    Residence,
}

/// Review state of a document in the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    Verified,
    Uploaded,
    Pending,
}

/// One document in the static pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRecord {
    /// Unique id, e.g. "i-20"
    pub id: &'static str,

    /// Full display title
    pub title: &'static str,

    /// Issuing agency or institution
    pub source: &'static str,

    /// Display due date, if the document has a deadline
    pub due: Option<&'static str>,

    pub description: &'static str,

    pub status: DocumentStatus,

    pub category: Category,
}

/// AI-analysis concept linking a set of document categories to one review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRecord {
    pub id: &'static str,

    pub label: &'static str,

    pub description: &'static str,

    /// Document categories this analysis consumes
    pub applicable_categories: &'static [Category],
}

/// Source-of-law citation backing one or more analyses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalReferenceRecord {
    pub id: &'static str,

    /// Citation label, e.g. "INA § 316"
    pub label: &'static str,

    pub subtitle: &'static str,

    pub description: &'static str,

    /// Analyses this reference is cited from
    pub applicable_analysis_ids: &'static [&'static str],
}
