use fake::Fake;
use fake::faker::lorem::raw::Sentence;
use fake::locales::{EN, PT_BR};
use rand::Rng;

use super::adapter::localized;
use super::locales::LocaleKey;

const WORDS_PER_SENTENCE: std::ops::Range<usize> = 3..10;

/// Whole sentences joined by spaces, never longer than `max_chars`.
///
/// Stops at the first sentence that would overflow. When not even the first
/// sentence fits, it is cut at a word boundary and closed with a period.
pub(crate) fn bounded_text<R: Rng + ?Sized>(
    locale: LocaleKey,
    max_chars: usize,
    rng: &mut R,
) -> String {
    if max_chars == 0 {
        return String::new();
    }

    let mut text = String::new();
    let mut len = 0;
    loop {
        let sentence = localized!(locale, rng, Sentence, WORDS_PER_SENTENCE);
        let sentence_len = sentence.chars().count();
        let separator = usize::from(!text.is_empty());
        if len + separator + sentence_len > max_chars {
            if text.is_empty() {
                return truncate_sentence(&sentence, max_chars);
            }
            return text;
        }
        if separator == 1 {
            text.push(' ');
        }
        text.push_str(&sentence);
        len += separator + sentence_len;
    }
}

fn truncate_sentence(sentence: &str, max_chars: usize) -> String {
    let budget = max_chars.saturating_sub(1);
    let head: String = sentence.chars().take(budget).collect();
    let head = match head.rfind(' ') {
        Some(idx) if idx > 0 => head[..idx].to_string(),
        _ => head,
    };
    let head = head.trim_end_matches(['.', ',', ' ']);
    if head.is_empty() {
        return sentence.chars().take(max_chars).collect();
    }
    format!("{head}.")
}
