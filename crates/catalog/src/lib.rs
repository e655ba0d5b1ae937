//! # Document Catalog
//!
//! Static knowledge base for the document advisor: the document pool, the
//! AI-analysis and legal-reference catalogs, and the keyword index that maps
//! conversation content to documents.
//!
//! Everything here is immutable, bundled data. Records are selected and
//! filtered at runtime, never created or destroyed.

mod types;
mod documents;
mod analyses;
mod legal;
mod keywords;

pub use types::{AnalysisRecord, Category, DocumentRecord, DocumentStatus, LegalReferenceRecord};
pub use documents::{document_by_id, documents_by_ids, DOCUMENTS};
pub use analyses::{analysis_by_id, ANALYSES};
pub use legal::{legal_reference_by_id, LEGAL_REFERENCES};
pub use keywords::{KeywordEntry, DEFAULT_SUGGESTED_IDS, KEYWORD_INDEX};
