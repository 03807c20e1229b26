use humanize_core::HumanizationStrength;

/// The clause text for a given strength level.
pub fn clause(strength: HumanizationStrength) -> &'static str {
    match strength {
        HumanizationStrength::Light => {
            "Touch the text lightly: make minimal wording changes and keep \
             the existing sentences and their order intact."
        }
        HumanizationStrength::Medium => {
            "Apply a moderate rework: rephrase sentences freely and adjust \
             their flow, without rebuilding the whole piece."
        }
        HumanizationStrength::Strong => {
            "Rework the text thoroughly: restructure sentences and paragraphs, \
             replace stock phrasing, and rebuild transitions while keeping the meaning."
        }
    }
}

/// Append the strength clause selected by `strength`.
pub fn append_clause(prompt: &mut String, strength: HumanizationStrength) {
    prompt.push(' ');
    prompt.push_str(clause(strength));
}
