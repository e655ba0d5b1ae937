//! # Flowchart Assembler
//!
//! Derives the three-tier document flowchart from a set of suggested
//! documents.
//!
//! ## Architecture
//!
//! ```text
//! &[DocumentRecord]
//!     │
//!     ├──> Assembler (category join rules)
//!     │      ├─ Project documents to graph nodes
//!     │      ├─ Select analyses intersecting present categories
//!     │      ├─ Select legal references citing selected analyses
//!     │      └─ Emit document→analysis and analysis→legal connections
//!     │
//!     ├──> FlowchartGraph (plain snapshot)
//!     │      ├─ documents / analyses / legal_texts
//!     │      └─ connections (directed, always routed through an analysis)
//!     │
//!     └──> FlowchartIndex (petgraph)
//!            ├─ Direct-neighbor lookups for detail views
//!            └─ Two-round neighborhood expansion for highlighting
//! ```

mod assembler;
mod index;
mod types;

pub use assembler::{assemble, display_label};
pub use index::{FlowchartIndex, NodeKind};
pub use types::{Connection, DocumentNode, FlowchartGraph, NodeStatus};
