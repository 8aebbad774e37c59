use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A generated meditation script.
///
/// `content` is the full script text and may embed inline pause directives
/// of the form `[PAUSE n]` (n in seconds). `timing_markers` maps section
/// names ("intro", "body", "closing") to the model's timing annotations.
/// Both fields must be present in the model's reply for the parse to succeed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeditationScript {
    pub content: String,
    pub timing_markers: HashMap<String, String>,
}

impl MeditationScript {
    /// Two-line textual rendering for terminal output. Markers are printed
    /// in sorted key order so the output is deterministic.
    pub fn render(&self) -> String {
        let mut markers: Vec<(&String, &String)> = self.timing_markers.iter().collect();
        markers.sort_by_key(|(name, _)| name.as_str());
        let markers = markers
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Content: {}\nTimingMarkers: {{{}}}", self.content, markers)
    }
}
