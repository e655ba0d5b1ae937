use serde::{Deserialize, Serialize};

/// One milestone extracted from the transcript by the external timeline
/// endpoint. The core never computes these; it only caches them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub title: String,

    pub description: String,

    /// Ids of checklist documents this milestone depends on
    #[serde(default)]
    pub related_documents: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Timeline results memoized against the transcript length they were
/// computed for. The message count is the sole invalidation token: a cached
/// value is readable exactly while the live count matches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineCache {
    message_count: usize,
    items: Vec<TimelineItem>,
}

impl TimelineCache {
    pub fn new(message_count: usize, items: Vec<TimelineItem>) -> Self {
        Self {
            message_count,
            items,
        }
    }

    /// The items, if they are still valid for `current_count` messages.
    pub fn get(&self, current_count: usize) -> Option<&[TimelineItem]> {
        (self.message_count == current_count).then(|| self.items.as_slice())
    }

    pub fn message_count(&self) -> usize {
        self.message_count
    }
}
