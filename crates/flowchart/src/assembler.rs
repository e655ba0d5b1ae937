use crate::types::{Connection, DocumentNode, FlowchartGraph};
use legol_catalog::{Category, DocumentRecord, ANALYSES, LEGAL_REFERENCES};
use std::collections::HashSet;

/// Longest node label before word-boundary truncation kicks in.
const MAX_LABEL_CHARS: usize = 28;

/// Build the flowchart for a set of suggested documents.
///
/// Analyses are selected by category intersection with the input documents,
/// legal references by analysis-id intersection with the selected analyses.
/// Connections are only emitted document→analysis and analysis→legal; a
/// document never links to a legal reference directly. The output is
/// deterministic: documents keep input order, analyses and legal references
/// keep catalog order. An empty input yields an empty graph.
pub fn assemble(suggested: &[&'static DocumentRecord]) -> FlowchartGraph {
    let documents: Vec<DocumentNode> = suggested
        .iter()
        .map(|doc| DocumentNode {
            id: doc.id,
            label: display_label(doc.title),
            category: doc.category,
            status: doc.status.into(),
        })
        .collect();

    let present: HashSet<Category> = documents.iter().map(|node| node.category).collect();

    let analyses: Vec<_> = ANALYSES
        .iter()
        .filter(|analysis| {
            analysis
                .applicable_categories
                .iter()
                .any(|category| present.contains(category))
        })
        .collect();

    let selected_ids: HashSet<&str> = analyses.iter().map(|a| a.id).collect();

    let legal_texts: Vec<_> = LEGAL_REFERENCES
        .iter()
        .filter(|legal| {
            legal
                .applicable_analysis_ids
                .iter()
                .any(|id| selected_ids.contains(id))
        })
        .collect();

    let mut connections = Vec::new();
    for document in &documents {
        for analysis in &analyses {
            if analysis.applicable_categories.contains(&document.category) {
                connections.push(Connection {
                    from: document.id,
                    to: analysis.id,
                });
            }
        }
    }
    for analysis in &analyses {
        for legal in &legal_texts {
            if legal.applicable_analysis_ids.contains(&analysis.id) {
                connections.push(Connection {
                    from: analysis.id,
                    to: legal.id,
                });
            }
        }
    }

    FlowchartGraph {
        documents,
        analyses,
        legal_texts,
        connections,
    }
}

/// Clean a document title for node display: drop a trailing parenthetical,
/// then truncate at a word boundary if the remainder is still too long.
pub fn display_label(title: &str) -> String {
    let base = match title.rfind(" (") {
        Some(idx) if title.ends_with(')') => title[..idx].trim_end(),
        _ => title,
    };

    if base.chars().count() <= MAX_LABEL_CHARS {
        return base.to_string();
    }

    let mut cut = base;
    while cut.chars().count() > MAX_LABEL_CHARS {
        match cut.rfind(' ') {
            Some(idx) => cut = cut[..idx].trim_end(),
            None => return base.chars().take(MAX_LABEL_CHARS).collect(),
        }
    }
    cut.to_string()
}
