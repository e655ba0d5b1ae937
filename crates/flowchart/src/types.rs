use legol_catalog::{AnalysisRecord, Category, DocumentStatus, LegalReferenceRecord};
use serde::Serialize;

/// Display status of a document node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Verified,
    Uploaded,
    Pending,
}

impl From<DocumentStatus> for NodeStatus {
    fn from(status: DocumentStatus) -> Self {
        match status {
            DocumentStatus::Verified => NodeStatus::Verified,
            DocumentStatus::Uploaded => NodeStatus::Uploaded,
            DocumentStatus::Pending => NodeStatus::Pending,
        }
    }
}

/// Document projected into a graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentNode {
    pub id: &'static str,

    /// Cleaned display label (parenthetical stripped, word-boundary truncated)
    pub label: String,

    pub category: Category,

    pub status: NodeStatus,
}

/// Directed edge between two nodes of the same snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub from: &'static str,
    pub to: &'static str,
}

/// Derived three-tier graph: documents feed analyses, analyses cite legal
/// references. Rebuilt from scratch whenever the suggestion state changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowchartGraph {
    pub documents: Vec<DocumentNode>,
    pub analyses: Vec<&'static AnalysisRecord>,
    pub legal_texts: Vec<&'static LegalReferenceRecord>,
    pub connections: Vec<Connection>,
}

impl FlowchartGraph {
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Ids across all three tiers, in column order.
    pub fn node_ids(&self) -> Vec<&'static str> {
        self.documents
            .iter()
            .map(|d| d.id)
            .chain(self.analyses.iter().map(|a| a.id))
            .chain(self.legal_texts.iter().map(|l| l.id))
            .collect()
    }
}
