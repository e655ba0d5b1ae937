use crate::persist::PersistedSession;
use crate::timeline::{TimelineCache, TimelineItem};
use legol_catalog::{document_by_id, documents_by_ids, DocumentRecord};
use legol_flowchart::{assemble, FlowchartGraph};
use legol_suggest::{ConversationMessage, Role, SuggestionEngine};
use std::collections::BTreeSet;

/// Greeting seeded as the first transcript message.
pub const GREETING: &str = "Hello! I'm your LEGOL immigration assistant. I can help answer \
     questions about dual citizenship, work visas, document requirements, and more. How can I \
     assist you today?";

pub const DEFAULT_STUDENT_COUNTRY: &str = "Singapore";
pub const DEFAULT_INSTITUTION: &str = "Carnegie Mellon University";

/// Canonical per-session state: the transcript, the user-context selectors,
/// and the derived suggestion set.
///
/// All mutation happens on the single event thread driving the session, so
/// the store is a plain value. Appending a message recomputes the suggestion
/// set synchronously before returning; the flowchart is derived on every
/// read from the current suggestions and never cached on its own.
pub struct SessionStore {
    engine: SuggestionEngine,
    messages: Vec<ConversationMessage>,
    student_country: String,
    institution: String,
    topic: Option<String>,
    suggested_ids: BTreeSet<&'static str>,
    timeline: Option<TimelineCache>,
}

impl SessionStore {
    /// Freshly seeded session: one assistant greeting, default selectors,
    /// default suggestions, no timeline cache.
    pub fn new() -> Self {
        let engine = SuggestionEngine::new();
        let messages = vec![ConversationMessage::assistant(GREETING)];
        let suggested_ids = engine.suggest(&messages);
        Self {
            engine,
            messages,
            student_country: DEFAULT_STUDENT_COUNTRY.to_string(),
            institution: DEFAULT_INSTITUTION.to_string(),
            topic: None,
            suggested_ids,
            timeline: None,
        }
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Append one message and refresh the derived suggestion set.
    pub fn append_message(&mut self, role: Role, text: impl Into<String>) {
        self.messages.push(ConversationMessage {
            role,
            text: text.into(),
        });
        self.suggested_ids = self.engine.suggest(&self.messages);
        log::debug!(
            "transcript at {} messages, {} suggested documents",
            self.messages.len(),
            self.suggested_ids.len()
        );
    }

    /// Reset the transcript to the seeded greeting and drop derived caches.
    /// Context selectors keep their current values.
    pub fn clear(&mut self) {
        self.messages = vec![ConversationMessage::assistant(GREETING)];
        self.suggested_ids = self.engine.suggest(&self.messages);
        self.timeline = None;
    }

    pub fn student_country(&self) -> &str {
        &self.student_country
    }

    pub fn set_student_country(&mut self, country: impl Into<String>) {
        self.student_country = country.into();
    }

    pub fn institution(&self) -> &str {
        &self.institution
    }

    pub fn set_institution(&mut self, institution: impl Into<String>) {
        self.institution = institution.into();
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn set_topic(&mut self, topic: Option<String>) {
        self.topic = topic;
    }

    /// Current suggested document ids.
    pub fn suggested_ids(&self) -> &BTreeSet<&'static str> {
        &self.suggested_ids
    }

    /// Catalog records for the current suggestions.
    pub fn suggested_documents(&self) -> Vec<&'static DocumentRecord> {
        documents_by_ids(self.suggested_ids.iter().copied())
    }

    /// Flowchart over the current suggestions, rebuilt on every call.
    pub fn flowchart(&self) -> FlowchartGraph {
        assemble(&self.suggested_documents())
    }

    /// Cached timeline items, if still valid for the current message count.
    pub fn cached_timeline(&self) -> Option<&[TimelineItem]> {
        self.timeline
            .as_ref()
            .and_then(|cache| cache.get(self.messages.len()))
    }

    /// Record timeline items fetched for the current transcript.
    pub fn store_timeline(&mut self, items: Vec<TimelineItem>) {
        self.timeline = Some(TimelineCache::new(self.messages.len(), items));
    }

    pub fn invalidate_timeline(&mut self) {
        self.timeline = None;
    }

    /// Snapshot for persistence.
    pub fn to_persisted(&self) -> PersistedSession {
        PersistedSession {
            messages: self.messages.clone(),
            student_country: self.student_country.clone(),
            institution: self.institution.clone(),
            topic: self.topic.clone(),
            suggested_doc_ids: self.suggested_ids.iter().map(|id| (*id).to_string()).collect(),
            timeline: self.timeline.clone(),
        }
    }

    /// Rebuild a store from a persisted record.
    ///
    /// Restored suggestion ids are validated against the catalog; unknown
    /// ids are discarded. If nothing usable was persisted the set is
    /// recomputed from the restored transcript. An empty transcript is
    /// reseeded with the greeting.
    pub fn from_persisted(record: PersistedSession) -> Self {
        let engine = SuggestionEngine::new();
        let messages = if record.messages.is_empty() {
            vec![ConversationMessage::assistant(GREETING)]
        } else {
            record.messages
        };

        let restored: BTreeSet<&'static str> = record
            .suggested_doc_ids
            .iter()
            .filter_map(|id| document_by_id(id))
            .map(|doc| doc.id)
            .collect();
        let suggested_ids = if restored.is_empty() {
            engine.suggest(&messages)
        } else {
            restored
        };

        Self {
            engine,
            messages,
            student_country: record.student_country,
            institution: record.institution,
            topic: record.topic,
            suggested_ids,
            timeline: record.timeline,
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legol_catalog::DEFAULT_SUGGESTED_IDS;
    use pretty_assertions::assert_eq;

    fn defaults() -> BTreeSet<&'static str> {
        DEFAULT_SUGGESTED_IDS.iter().copied().collect()
    }

    #[test]
    fn seeded_store_starts_at_defaults() {
        let store = SessionStore::new();
        assert_eq!(store.message_count(), 1);
        assert_eq!(store.messages()[0].role, Role::Assistant);
        assert_eq!(store.suggested_ids(), &defaults());
        assert_eq!(store.student_country(), DEFAULT_STUDENT_COUNTRY);
        assert_eq!(store.institution(), DEFAULT_INSTITUTION);
        assert_eq!(store.topic(), None);
    }

    #[test]
    fn append_refreshes_suggestions() {
        let mut store = SessionStore::new();
        store.append_message(Role::User, "Do I qualify for OPT work authorization?");
        assert!(store.suggested_ids().contains("opt-ead"));
        assert!(store.suggested_ids().contains("i-765"));
    }

    #[test]
    fn clear_reseeds_and_keeps_selectors() {
        let mut store = SessionStore::new();
        store.set_student_country("India");
        store.append_message(Role::User, "marriage green card");
        store.store_timeline(vec![]);
        store.clear();

        assert_eq!(store.message_count(), 1);
        assert_eq!(store.suggested_ids(), &defaults());
        assert!(store.cached_timeline().is_none());
        assert_eq!(store.student_country(), "India");
    }

    #[test]
    fn flowchart_tracks_current_suggestions() {
        let mut store = SessionStore::new();
        let before = store.flowchart();
        assert!(!before.documents.iter().any(|d| d.id == "background-check"));

        store.append_message(Role::User, "Do I need an FBI background check?");
        let after = store.flowchart();
        assert!(after.documents.iter().any(|d| d.id == "background-check"));
        assert!(after.analyses.iter().any(|a| a.id == "background-analysis"));
    }

    #[test]
    fn timeline_cache_invalidates_on_append() {
        let mut store = SessionStore::new();
        store.append_message(Role::User, "What are my deadlines?");
        store.store_timeline(vec![TimelineItem {
            title: "SEVIS fee".to_string(),
            description: "Pay the I-901 fee".to_string(),
            related_documents: vec!["sevis-receipt".to_string()],
            due_date: Some("Feb 10, 2026".to_string()),
        }]);
        assert!(store.cached_timeline().is_some());

        store.append_message(Role::Assistant, "Here is your timeline.");
        assert!(store.cached_timeline().is_none());
    }

    #[test]
    fn restore_discards_unknown_suggestion_ids() {
        let mut record = SessionStore::new().to_persisted();
        record.suggested_doc_ids = vec!["passport".to_string(), "bogus-doc".to_string()];
        let store = SessionStore::from_persisted(record);
        assert_eq!(
            store.suggested_ids().iter().copied().collect::<Vec<_>>(),
            vec!["passport"]
        );
    }

    #[test]
    fn restore_recomputes_when_no_ids_were_persisted() {
        let mut store = SessionStore::new();
        store.append_message(Role::User, "visa interview at the embassy");
        let mut record = store.to_persisted();
        record.suggested_doc_ids.clear();

        let restored = SessionStore::from_persisted(record);
        assert!(restored.suggested_ids().contains("ds-160"));
        assert_eq!(restored.suggested_ids(), store.suggested_ids());
    }

    #[test]
    fn restore_reseeds_an_empty_transcript() {
        let mut record = SessionStore::new().to_persisted();
        record.messages.clear();
        record.suggested_doc_ids.clear();
        let store = SessionStore::from_persisted(record);
        assert_eq!(store.message_count(), 1);
        assert_eq!(store.suggested_ids(), &defaults());
    }
}
