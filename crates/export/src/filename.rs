//! Export filename rules.

/// Sanitize a character name for use in a filename.
///
/// Every run of whitespace collapses to a single underscore; an empty name
/// falls back to the literal `character`.
pub fn sanitize_character_name(name: &str) -> String {
    if name.is_empty() {
        return "character".to_string();
    }
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(ch);
            in_whitespace = false;
        }
    }
    out
}

/// `<sanitized name>-TANGENT-Sheet.pdf`
pub fn pdf_filename(name: &str) -> String {
    format!("{}-TANGENT-Sheet.pdf", sanitize_character_name(name))
}

/// `<sanitized name>-TANGENT-Sheet.md`
pub fn markdown_filename(name: &str) -> String {
    format!("{}-TANGENT-Sheet.md", sanitize_character_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_runs_become_single_underscore() {
        assert_eq!(sanitize_character_name("Jax Vex"), "Jax_Vex");
        assert_eq!(sanitize_character_name("Jax   Vex"), "Jax_Vex");
        assert_eq!(sanitize_character_name("Jax\t Vex Jr"), "Jax_Vex_Jr");
    }

    #[test]
    fn test_empty_name_falls_back_to_character() {
        assert_eq!(sanitize_character_name(""), "character");
        assert_eq!(markdown_filename(""), "character-TANGENT-Sheet.md");
    }

    #[test]
    fn test_filename_patterns() {
        assert_eq!(pdf_filename("Jax Vex"), "Jax_Vex-TANGENT-Sheet.pdf");
        assert_eq!(markdown_filename("Jax Vex"), "Jax_Vex-TANGENT-Sheet.md");
    }
}
