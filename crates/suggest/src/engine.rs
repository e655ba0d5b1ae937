use crate::message::ConversationMessage;
use legol_catalog::{
    documents_by_ids, DocumentRecord, KeywordEntry, DEFAULT_SUGGESTED_IDS, KEYWORD_INDEX,
};
use std::collections::BTreeSet;

/// Surfaces checklist documents from transcript content.
///
/// Matching is a case-insensitive substring scan over the concatenated text
/// of every message, both roles. It is coarse by design: there is no
/// tokenization, stemming, or negation handling, so a keyword occurring
/// inside an unrelated longer token still triggers its entry.
pub struct SuggestionEngine {
    index: &'static [KeywordEntry],
    defaults: &'static [&'static str],
}

impl SuggestionEngine {
    /// Engine over the bundled keyword index and default id set.
    pub fn new() -> Self {
        Self {
            index: KEYWORD_INDEX,
            defaults: DEFAULT_SUGGESTED_IDS,
        }
    }

    /// Engine over a caller-provided read-only index.
    pub fn with_index(
        index: &'static [KeywordEntry],
        defaults: &'static [&'static str],
    ) -> Self {
        Self { index, defaults }
    }

    /// Derive the suggested document ids for a transcript.
    ///
    /// Transcripts holding at most the seeded greeting return the default
    /// set unchanged. The defaults are always unioned in, so the result is
    /// never empty.
    pub fn suggest(&self, messages: &[ConversationMessage]) -> BTreeSet<&'static str> {
        let mut ids: BTreeSet<&'static str> = self.defaults.iter().copied().collect();
        if messages.len() <= 1 {
            return ids;
        }

        let corpus = messages
            .iter()
            .map(|m| m.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        for entry in self.index {
            if entry.keywords.iter().any(|kw| corpus.contains(kw)) {
                ids.extend(entry.doc_ids.iter().copied());
            }
        }

        ids
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Suggest over the bundled index and project the ids onto catalog records.
pub fn suggest_documents(messages: &[ConversationMessage]) -> Vec<&'static DocumentRecord> {
    let ids = SuggestionEngine::new().suggest(messages);
    documents_by_ids(ids)
}
