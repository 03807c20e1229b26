/// Append the style clause: keep the author's voice, or allow reshaping.
pub fn append_clause(prompt: &mut String, preserve_style: bool) {
    if preserve_style {
        prompt.push_str(
            " Preserve the original tone and paragraph structure; \
             keep the author's voice recognizable while you smooth out the wording.",
        );
    } else {
        prompt.push_str(
            " You may reorganize sentences and paragraphs and shift the tone \
             wherever that makes the text read more naturally.",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserve_clause_content() {
        let mut out = String::new();
        append_clause(&mut out, true);
        assert!(out.contains("Preserve the original tone"));
        assert!(!out.contains("reorganize"));
    }

    #[test]
    fn free_clause_content() {
        let mut out = String::new();
        append_clause(&mut out, false);
        assert!(out.contains("reorganize sentences"));
        assert!(!out.contains("Preserve the original tone"));
    }
}
