/// One keyword-index entry: if any keyword occurs in the conversation corpus,
/// every listed document is surfaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    /// Lowercase needles matched as plain substrings
    pub keywords: &'static [&'static str],

    /// Documents surfaced on a match
    pub doc_ids: &'static [&'static str],
}

/// Keyword → document mapping used to surface documents from conversation.
pub static KEYWORD_INDEX: &[KeywordEntry] = &[
    KeywordEntry {
        keywords: &[
            "visa", "f-1", "f1", "student visa", "entry", "consulate", "embassy", "ds-160",
            "ds160",
        ],
        doc_ids: &["ds-160", "i-20", "passport", "sevis-receipt", "i-94"],
    },
    KeywordEntry {
        keywords: &["i-20", "i20", "sevis", "dso", "transfer", "program"],
        doc_ids: &["i-20", "sevis-receipt", "enrollment-verify"],
    },
    KeywordEntry {
        keywords: &[
            "work", "job", "employ", "opt", "cpt", "ead", "h-1b", "h1b", "labor", "internship",
            "practical",
        ],
        doc_ids: &[
            "employment-letter",
            "ead-card",
            "cpt-letter",
            "opt-ead",
            "i-765",
            "i-129",
        ],
    },
    KeywordEntry {
        keywords: &["tax", "irs", "income", "w-2", "w2", "1040"],
        doc_ids: &["tax-returns"],
    },
    KeywordEntry {
        keywords: &[
            "financial",
            "bank",
            "funds",
            "tuition",
            "afford",
            "money",
            "sponsor",
            "support",
            "scholarship",
        ],
        doc_ids: &[
            "bank-statement",
            "scholarship-letter",
            "affidavit-support",
            "tax-returns",
        ],
    },
    KeywordEntry {
        keywords: &["naturalization", "citizen", "n-400", "n400", "oath"],
        doc_ids: &[
            "n400",
            "birth-cert",
            "background-check",
            "tax-returns",
            "lease-agreement",
        ],
    },
    KeywordEntry {
        keywords: &[
            "green card",
            "permanent resid",
            "i-485",
            "i485",
            "adjustment",
            "i-130",
            "i130",
        ],
        doc_ids: &["i-485", "i-130", "birth-cert", "passport", "marriage-cert"],
    },
    KeywordEntry {
        keywords: &["marriage", "spouse", "married", "family", "petition"],
        doc_ids: &["marriage-cert", "i-130", "birth-cert"],
    },
    KeywordEntry {
        keywords: &["background", "criminal", "fbi", "moral character", "arrest"],
        doc_ids: &["background-check"],
    },
    KeywordEntry {
        keywords: &["residenc", "lease", "rent", "address", "housing", "landlord"],
        doc_ids: &["lease-agreement"],
    },
    KeywordEntry {
        keywords: &["identity", "id", "birth certificate", "ssn", "social security"],
        doc_ids: &["birth-cert", "passport", "ssn-card"],
    },
    KeywordEntry {
        keywords: &["enroll", "full-time", "registrar", "gpa", "transcript", "academic"],
        doc_ids: &["enrollment-verify", "transcript"],
    },
    KeywordEntry {
        keywords: &[
            "travel", "reentry", "departure", "arrive", "arrival", "i-94", "i94", "cbp",
        ],
        doc_ids: &["i-94", "passport", "i-20"],
    },
];

/// Common documents every session surfaces regardless of transcript content.
pub static DEFAULT_SUGGESTED_IDS: &[&str] = &[
    "passport",
    "i-20",
    "i-94",
    "sevis-receipt",
    "ds-160",
    "bank-statement",
];
