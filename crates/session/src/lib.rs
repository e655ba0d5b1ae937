//! # Conversation State Store
//!
//! Owns the canonical transcript and user-context selectors for one session,
//! derives suggestion state and the flowchart from them, and persists the
//! whole record across restarts. Derivations are synchronous: every append
//! recomputes the suggestion set before returning, and the flowchart is
//! re-derived on each read rather than cached.

mod error;
mod persist;
mod store;
mod timeline;

pub use error::{Result, SessionError};
pub use persist::{PersistedSession, SessionStorage, SESSION_FILE_NAME};
pub use store::{SessionStore, DEFAULT_INSTITUTION, DEFAULT_STUDENT_COUNTRY, GREETING};
pub use timeline::{TimelineCache, TimelineItem};
