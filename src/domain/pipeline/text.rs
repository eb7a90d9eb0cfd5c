//! Small text helpers shared by the pipeline stages.

/// Whitespace, including the ASCII file/group/record/unit separators (U+001C..=U+001F).
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strip leading and trailing [`is_space`] characters.
pub fn trim_space(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// True when `s` is empty or made only of [`is_space`] characters.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(is_space)
}

/// Words separated by runs of [`is_space`] characters.
pub fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(is_space).filter(|w| !w.is_empty())
}

/// Split raw text on `.` into trimmed, non-empty sentences (original order).
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split('.')
        .map(trim_space)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Length in characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// If `s` is longer than `limit` characters, keep the first `keep` characters and append "...".
pub fn truncate_with_ellipsis(s: &str, limit: usize, keep: usize) -> String {
    if char_len(s) > limit {
        let mut out: String = s.chars().take(keep).collect();
        out.push_str("...");
        out
    } else {
        s.to_string()
    }
}

/// Uppercase the first character, lowercase the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
