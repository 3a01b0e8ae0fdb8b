/// Placeholder for values that slugify to nothing.
pub const FALLBACK_SLUG: &str = "unknown";

/// URL-safe slug for author/category/title links: lowercased, non-word
/// characters dropped, whitespace/underscore/hyphen runs collapsed to single
/// hyphens, edges trimmed. Degenerate inputs fall back to the first few word
/// characters, then to a fixed placeholder.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace() || *c == '-')
        .collect();

    let mut slug = String::with_capacity(kept.len());
    let mut pending_hyphen = false;
    for c in kept.chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            pending_hyphen = !slug.is_empty();
        } else {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            slug.push(c);
        }
    }

    if slug.len() >= 2 {
        return slug;
    }

    let compact: String = lowered.chars().filter(|c| is_word_char(*c)).take(10).collect();
    if compact.is_empty() {
        FALLBACK_SLUG.to_owned()
    } else {
        compact
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
