use crate::types::LegalReferenceRecord;

/// Source-of-law citations. A reference joins to every selected analysis
/// whose id appears in its applicability set.
pub static LEGAL_REFERENCES: &[LegalReferenceRecord] = &[
    LegalReferenceRecord {
        id: "ina-316",
        label: "INA § 316",
        subtitle: "General Naturalization Requirements",
        description:
            "Residency, physical presence, and good moral character requirements for naturalization.",
        applicable_analysis_ids: &[
            "identity-verification",
            "eligibility-check",
            "financial-review",
            "residency-proof",
        ],
    },
    LegalReferenceRecord {
        id: "ina-312",
        label: "INA § 312",
        subtitle: "English & Civics Requirements",
        description: "Language proficiency and knowledge of US history and government.",
        applicable_analysis_ids: &["eligibility-check"],
    },
    LegalReferenceRecord {
        id: "ina-101",
        label: "INA § 101(f)",
        subtitle: "Good Moral Character",
        description:
            "Statutory bars and conditions defining good moral character for immigration purposes.",
        applicable_analysis_ids: &["financial-review", "background-analysis"],
    },
    LegalReferenceRecord {
        id: "8cfr-316",
        label: "8 CFR § 316.2",
        subtitle: "Continuous Residence",
        description: "Regulatory definition of continuous residence and exceptions for breaks.",
        applicable_analysis_ids: &["residency-proof"],
    },
    LegalReferenceRecord {
        id: "8cfr-319",
        label: "8 CFR § 319.1",
        subtitle: "Spouse of US Citizen",
        description: "Reduced residency requirements for applicants married to US citizens.",
        applicable_analysis_ids: &["eligibility-check"],
    },
    LegalReferenceRecord {
        id: "uscis-policy",
        label: "USCIS Policy Manual",
        subtitle: "Vol. 12, Part D",
        description: "General eligibility requirements including age, residency, and moral character.",
        applicable_analysis_ids: &["background-analysis"],
    },
];

/// Look up a legal reference by id.
pub fn legal_reference_by_id(id: &str) -> Option<&'static LegalReferenceRecord> {
    LEGAL_REFERENCES.iter().find(|l| l.id == id)
}
