//! Grouping questions under article sections

use crate::api::QuizDocument;

/// Question indices shown under each section, in document order.
///
/// A question with no section is listed under every section. Duplicate
/// section names each get their own (identical) group.
pub fn group_by_section(doc: &QuizDocument) -> Vec<(&str, Vec<usize>)> {
    doc.sections
        .iter()
        .map(|section| {
            let indices = doc
                .quiz
                .iter()
                .enumerate()
                .filter(|(_, q)| q.section().is_none_or(|s| s == section.as_str()))
                .map(|(i, _)| i)
                .collect();
            (section.as_str(), indices)
        })
        .collect()
}
