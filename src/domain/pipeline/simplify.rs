//! Text simplification: long sentences are cut into short word chunks.

use super::text::words;

const MAX_SENTENCES: usize = 5;
const MAX_FRAGMENTS: usize = 6;
const LONG_SENTENCE_WORDS: usize = 15;
const CHUNK_WORDS: usize = 12;

/// Build the simplified text from the first sentences of the input.
pub fn simplify_text(sentences: &[String]) -> String {
    let mut fragments: Vec<String> = Vec::new();
    for sentence in sentences.iter().take(MAX_SENTENCES) {
        let sentence_words: Vec<&str> = words(sentence).collect();
        if sentence_words.len() > LONG_SENTENCE_WORDS {
            fragments.extend(sentence_words.chunks(CHUNK_WORDS).map(|chunk| chunk.join(" ")));
        } else {
            fragments.push(sentence.clone());
        }
    }
    fragments.truncate(MAX_FRAGMENTS);

    let mut simplified = fragments.join(". ");
    simplified.push('.');
    simplified
}
