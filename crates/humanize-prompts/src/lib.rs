pub mod strength;
pub mod style;

use humanize_core::HumanizationStrength;

/// The fixed opening of every rewrite instruction, identical for all
/// configurations. Tests assert it as a verbatim prefix.
pub const BASE_DIRECTIVE: &str =
    "You are a writing assistant that rewrites AI-generated text so it reads \
     naturally. Vary sentence structure and length, use contractions where \
     they fit, prefer plain everyday wording, and avoid robotic phrasing or \
     repetitive transitions.";

/// Assemble the system instruction for a rewrite call.
///
/// Pure function of its inputs: base directive, then the style clause,
/// then exactly one strength clause.
pub fn build_instruction(preserve_style: bool, strength: HumanizationStrength) -> String {
    let mut prompt = String::new();
    prompt.push_str(BASE_DIRECTIVE);
    style::append_clause(&mut prompt, preserve_style);
    strength::append_clause(&mut prompt, strength);
    prompt
}
