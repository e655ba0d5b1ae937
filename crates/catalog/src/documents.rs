use crate::types::DocumentRecord;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::types::Category::{
    Applications, Background, Family, Financial, Identity, Residence, Student, Work,
};
use crate::types::DocumentStatus::{Pending, Uploaded, Verified};

/// Every document the system knows about.
pub static DOCUMENTS: &[DocumentRecord] = &[
    // Identity
    DocumentRecord {
        id: "birth-cert",
        title: "Birth Certificate (Original)",
        source: "Vital Records Office",
        due: Some("Feb 1, 2026"),
        description: "Original or certified copy of birth certificate",
        status: Verified,
        category: Identity,
    },
    DocumentRecord {
        id: "passport",
        title: "Passport Copy",
        source: "Department of State",
        due: None,
        description: "Valid passport identification page copy",
        status: Verified,
        category: Identity,
    },
    DocumentRecord {
        id: "ssn-card",
        title: "Social Security Card",
        source: "SSA",
        due: None,
        description: "Original Social Security card or replacement letter",
        status: Pending,
        category: Identity,
    },
    // Student / visa
    DocumentRecord {
        id: "i-20",
        title: "Form I-20 (Certificate of Eligibility)",
        source: "University DSO",
        due: Some("Feb 15, 2026"),
        description: "SEVIS certificate of eligibility for F-1 status",
        status: Uploaded,
        category: Student,
    },
    DocumentRecord {
        id: "ds-160",
        title: "DS-160 Visa Application",
        source: "U.S. Embassy / Consulate",
        due: None,
        description: "Online non-immigrant visa application confirmation",
        status: Pending,
        category: Student,
    },
    DocumentRecord {
        id: "sevis-receipt",
        title: "SEVIS I-901 Fee Receipt",
        source: "ICE / SEVP",
        due: Some("Feb 10, 2026"),
        description: "Payment confirmation for the I-901 SEVIS fee",
        status: Uploaded,
        category: Student,
    },
    DocumentRecord {
        id: "i-94",
        title: "I-94 Arrival / Departure Record",
        source: "CBP",
        due: None,
        description: "Electronic record of arrival and authorized stay",
        status: Verified,
        category: Student,
    },
    DocumentRecord {
        id: "enrollment-verify",
        title: "Enrollment Verification Letter",
        source: "University Registrar",
        due: None,
        description: "Official letter confirming full-time enrollment status",
        status: Pending,
        category: Student,
    },
    DocumentRecord {
        id: "transcript",
        title: "Academic Transcript",
        source: "University Registrar",
        due: None,
        description: "Official academic transcript with current GPA",
        status: Pending,
        category: Student,
    },
    // Applications
    DocumentRecord {
        id: "n400",
        title: "Form N-400 (Naturalization)",
        source: "USCIS",
        due: Some("Feb 7, 2026"),
        description: "Application for naturalization form",
        status: Uploaded,
        category: Applications,
    },
    DocumentRecord {
        id: "i-765",
        title: "Form I-765 (EAD Application)",
        source: "USCIS",
        due: None,
        description: "Application for employment authorization document",
        status: Pending,
        category: Applications,
    },
    DocumentRecord {
        id: "i-485",
        title: "Form I-485 (Adjustment of Status)",
        source: "USCIS",
        due: None,
        description: "Application to register permanent residence",
        status: Pending,
        category: Applications,
    },
    DocumentRecord {
        id: "i-130",
        title: "Form I-130 (Relative Petition)",
        source: "USCIS",
        due: None,
        description: "Petition for alien relative",
        status: Pending,
        category: Applications,
    },
    DocumentRecord {
        id: "i-129",
        title: "Form I-129 (Worker Petition)",
        source: "USCIS",
        due: None,
        description: "Petition for a non-immigrant worker (H-1B, L-1, etc.)",
        status: Pending,
        category: Applications,
    },
    // Financial
    DocumentRecord {
        id: "tax-returns",
        title: "Tax Returns (Last 5 Years)",
        source: "IRS",
        due: Some("Feb 14, 2026"),
        description: "Federal tax return transcripts for the last 5 years",
        status: Uploaded,
        category: Financial,
    },
    DocumentRecord {
        id: "bank-statement",
        title: "Bank Statement / Financial Proof",
        source: "Financial Institution",
        due: None,
        description: "Recent bank statements showing sufficient funds",
        status: Pending,
        category: Financial,
    },
    DocumentRecord {
        id: "scholarship-letter",
        title: "Scholarship Award Letter",
        source: "University Financial Aid",
        due: None,
        description: "Official letter confirming scholarship or financial aid",
        status: Pending,
        category: Financial,
    },
    DocumentRecord {
        id: "affidavit-support",
        title: "Affidavit of Support (I-134)",
        source: "Sponsor",
        due: None,
        description: "Financial sponsor affidavit guaranteeing support",
        status: Pending,
        category: Financial,
    },
    // Work
    DocumentRecord {
        id: "employment-letter",
        title: "Employment Verification Letter",
        source: "Current Employer",
        due: Some("Feb 10, 2026"),
        description: "Letter confirming current employment status",
        status: Uploaded,
        category: Work,
    },
    DocumentRecord {
        id: "ead-card",
        title: "EAD Card (Employment Auth.)",
        source: "USCIS",
        due: None,
        description: "Employment Authorization Document card",
        status: Pending,
        category: Work,
    },
    DocumentRecord {
        id: "cpt-letter",
        title: "CPT Authorization Letter",
        source: "University DSO",
        due: None,
        description: "Curricular Practical Training authorization for off-campus work",
        status: Pending,
        category: Work,
    },
    DocumentRecord {
        id: "opt-ead",
        title: "OPT EAD Card",
        source: "USCIS",
        due: None,
        description: "Optional Practical Training employment authorization",
        status: Pending,
        category: Work,
    },
    // Family
    DocumentRecord {
        id: "marriage-cert",
        title: "Marriage Certificate",
        source: "County Clerk",
        due: None,
        description: "Certified copy of marriage certificate",
        status: Verified,
        category: Family,
    },
    // Background
    DocumentRecord {
        id: "background-check",
        title: "FBI Background Check",
        source: "FBI",
        due: Some("Mar 1, 2026"),
        description: "Criminal background check clearance",
        status: Uploaded,
        category: Background,
    },
    // Residence
    DocumentRecord {
        id: "lease-agreement",
        title: "Lease Agreement",
        source: "Landlord / Property Management",
        due: None,
        description: "Current residential lease or mortgage statement",
        status: Verified,
        category: Residence,
    },
];

static DOC_INDEX: Lazy<HashMap<&'static str, &'static DocumentRecord>> =
    Lazy::new(|| DOCUMENTS.iter().map(|doc| (doc.id, doc)).collect());

/// Look up a document by id.
pub fn document_by_id(id: &str) -> Option<&'static DocumentRecord> {
    DOC_INDEX.get(id).copied()
}

/// Resolve a set of ids to catalog records. Unknown ids are skipped.
pub fn documents_by_ids<'a, I>(ids: I) -> Vec<&'static DocumentRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    ids.into_iter().filter_map(document_by_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, DocumentStatus};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn document_ids_are_unique() {
        let ids: HashSet<&str> = DOCUMENTS.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), DOCUMENTS.len());
    }

    #[test]
    fn lookup_by_id() {
        let doc = document_by_id("i-20").expect("i-20 in pool");
        assert_eq!(doc.category, Category::Student);
        assert_eq!(doc.status, DocumentStatus::Uploaded);
        assert_eq!(document_by_id("no-such-doc"), None);
    }

    #[test]
    fn unknown_ids_are_skipped() {
        let docs = documents_by_ids(["passport", "bogus", "marriage-cert"]);
        let ids: Vec<&str> = docs.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["passport", "marriage-cert"]);
    }

    #[test]
    fn every_category_is_represented() {
        let present: HashSet<Category> = DOCUMENTS.iter().map(|d| d.category).collect();
        assert_eq!(present.len(), 8);
    }
}
