use crate::types::AnalysisRecord;
use crate::types::Category::{
    Applications, Background, Family, Financial, Identity, Residence, Work,
};

/// AI-analysis concepts. An analysis joins to every suggested document whose
/// category appears in its applicability set.
pub static ANALYSES: &[AnalysisRecord] = &[
    AnalysisRecord {
        id: "identity-verification",
        label: "Identity Verification",
        description: "Cross-references identity documents for authenticity and consistency",
        applicable_categories: &[Identity],
    },
    AnalysisRecord {
        id: "eligibility-check",
        label: "Eligibility Assessment",
        description: "Evaluates applicant qualifications against statutory requirements",
        applicable_categories: &[Applications, Family],
    },
    AnalysisRecord {
        id: "financial-review",
        label: "Financial Review",
        description: "Analyzes financial standing and tax compliance history",
        applicable_categories: &[Financial, Work],
    },
    AnalysisRecord {
        id: "background-analysis",
        label: "Background Analysis",
        description: "Reviews criminal history and moral character requirements",
        applicable_categories: &[Background],
    },
    AnalysisRecord {
        id: "residency-proof",
        label: "Residency Verification",
        description: "Confirms continuous residency and physical presence",
        applicable_categories: &[Residence, Financial],
    },
];

/// Look up an analysis by id.
pub fn analysis_by_id(id: &str) -> Option<&'static AnalysisRecord> {
    ANALYSES.iter().find(|a| a.id == id)
}
