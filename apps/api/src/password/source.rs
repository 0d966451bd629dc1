//! Source text strategies — where the mnemonic sentence comes from.
//!
//! `network_sentence` derives tokens from a randomly chosen headline and may
//! fail. `synthetic_sentence` composes a grammatical-looking sentence from the
//! fixed word pools and only fails if the sampler contract is broken.

use std::borrow::Cow;
use std::sync::OnceLock;

use rand::{CryptoRng, RngCore};
use regex::Regex;
use tracing::{debug, info};
use unicode_segmentation::UnicodeSegmentation;

use crate::headline_client::{Headline, HeadlineError, HeadlineProvider};
use crate::models::password::{SourceStrategy, SourceText};
use crate::password::error::PasswordError;
use crate::password::sampler::UniformSampler;
use crate::password::word_pools::{
    ADJECTIVES, DIGITS, NOUNS, PREPOSITIONS, SPECIAL_CHARACTERS, VERBS,
};

/// Sentences of this many characters or fewer are bylines, timestamps and
/// similar fragments.
const MIN_SENTENCE_CHARS: usize = 20;

// ────────────────────────────────────────────────────────────────────────────
// Network strategy
// ────────────────────────────────────────────────────────────────────────────

/// Builds a token sequence from one uniformly chosen headline.
///
/// Whole sentences are appended until at least `min_words` tokens are
/// collected or the headline runs out; a special character always closes the
/// sequence.
pub async fn network_sentence<R>(
    provider: &dyn HeadlineProvider,
    sampler: &mut UniformSampler<R>,
    min_words: usize,
) -> Result<SourceText, PasswordError>
where
    R: RngCore + CryptoRng + Send,
{
    let headlines = provider.fetch_headlines().await?;
    if headlines.is_empty() {
        return Err(HeadlineError::Empty.into());
    }
    let headline = sampler.pick(&headlines)?;

    let preview: String = headline.title.chars().take(30).collect();
    info!("Selected headline \"{preview}...\" from {} items", headlines.len());

    let text = headline_text(headline);
    let sentences = usable_sentences(&text);
    if sentences.is_empty() {
        return Err(PasswordError::NoUsableSentence);
    }

    let (mut tokens, used) = collect_tokens(&sentences, min_words);
    if tokens.is_empty() {
        return Err(PasswordError::NoUsableSentence);
    }
    debug!(
        "Collected {} tokens from {} of {} sentences",
        tokens.len(),
        used,
        sentences.len()
    );

    tokens.push(sampler.pick(SPECIAL_CHARACTERS)?.to_string());

    Ok(SourceText {
        tokens,
        sentence: sentences[..used].join(" "),
        strategy: SourceStrategy::Network,
    })
}

/// Title and description as plain text.
fn headline_text(headline: &Headline) -> String {
    let raw = format!(
        "{}. {}",
        headline.title,
        headline.description.as_deref().unwrap_or_default()
    );
    decode_entities(&strip_markup(&raw))
}

fn markup_tags() -> Option<&'static Regex> {
    static TAGS: OnceLock<Option<Regex>> = OnceLock::new();
    TAGS.get_or_init(|| Regex::new(r"<[^>]*>?").ok()).as_ref()
}

fn strip_markup(text: &str) -> Cow<'_, str> {
    match markup_tags() {
        Some(tags) => tags.replace_all(text, ""),
        None => Cow::Borrowed(text),
    }
}

/// Decodes the handful of entities feed descriptions actually use.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Splits text on Unicode sentence boundaries and drops short fragments.
fn usable_sentences(text: &str) -> Vec<String> {
    text.split_sentence_bounds()
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}

/// Appends whole sentences until `min_words` tokens are reached.
///
/// Returns the tokens and the number of sentences consumed. Only words that
/// start with an ASCII letter become tokens.
fn collect_tokens(sentences: &[String], min_words: usize) -> (Vec<String>, usize) {
    let mut tokens = Vec::new();
    let mut used = 0;

    for sentence in sentences {
        if tokens.len() >= min_words {
            break;
        }
        tokens.extend(
            sentence
                .split_whitespace()
                .filter(|w| w.starts_with(|c: char| c.is_ascii_alphabetic()))
                .map(str::to_string),
        );
        used += 1;
    }

    (tokens, used)
}

// ────────────────────────────────────────────────────────────────────────────
// Synthetic strategy
// ────────────────────────────────────────────────────────────────────────────

/// Composes an 8-token sentence such as `Big panda eats in 5 red fish!`.
///
/// Slots: adjective, noun, verb, preposition, digit, lowercased adjective,
/// noun, special character. See `word_pools::synthetic_entropy_bits` for the
/// resulting entropy.
pub fn synthetic_sentence<R>(sampler: &mut UniformSampler<R>) -> Result<SourceText, PasswordError>
where
    R: RngCore + CryptoRng,
{
    let tokens: Vec<String> = vec![
        sampler.pick(ADJECTIVES)?.to_string(),
        sampler.pick(NOUNS)?.to_string(),
        sampler.pick(VERBS)?.to_string(),
        sampler.pick(PREPOSITIONS)?.to_string(),
        sampler.pick(DIGITS)?.to_string(),
        sampler.pick(ADJECTIVES)?.to_lowercase(),
        sampler.pick(NOUNS)?.to_string(),
        sampler.pick(SPECIAL_CHARACTERS)?.to_string(),
    ];

    let sentence = format!("{}{}", tokens[..7].join(" "), tokens[7]);

    Ok(SourceText {
        tokens,
        sentence,
        strategy: SourceStrategy::Synthetic,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::test_support::FakeHeadlines;

    fn headline(title: &str, description: Option<&str>) -> Headline {
        Headline {
            title: title.to_string(),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_markup_pattern_compiles() {
        assert!(markup_tags().is_some());
    }

    #[test]
    fn test_strip_markup_removes_tags() {
        let text = r#"<a href="https://example.com">Rust 2.0</a> ships <b>today</b>"#;
        assert_eq!(strip_markup(text), "Rust 2.0 ships today");
    }

    #[test]
    fn test_strip_markup_removes_unterminated_tag() {
        assert_eq!(strip_markup("Markets rally <font"), "Markets rally ");
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(
            decode_entities("Q&amp;A&nbsp;with &quot;Ferris&quot; &amp;lt;"),
            "Q&A with \"Ferris\" &lt;"
        );
    }

    #[test]
    fn test_headline_text_joins_title_and_description() {
        let h = headline("Title here", Some("<p>Body text</p>"));
        assert_eq!(headline_text(&h), "Title here. Body text");
    }

    #[test]
    fn test_headline_text_without_description() {
        let h = headline("Only a title", None);
        assert_eq!(headline_text(&h), "Only a title. ");
    }

    #[test]
    fn test_usable_sentences_drops_short_fragments() {
        let text = "By Staff. Engineers unveiled a faster compiler today. Exactly twenty chars.";
        // "Exactly twenty chars." is 21 chars and survives; "By Staff." does not.
        let sentences = usable_sentences(text);
        assert_eq!(
            sentences,
            vec![
                "Engineers unveiled a faster compiler today.".to_string(),
                "Exactly twenty chars.".to_string(),
            ]
        );
    }

    #[test]
    fn test_usable_sentences_boundary_is_exclusive() {
        // 20 characters exactly is discarded.
        let twenty = "abcdefghij abcdefgh.";
        assert_eq!(twenty.chars().count(), 20);
        assert!(usable_sentences(twenty).is_empty());
    }

    #[test]
    fn test_collect_tokens_keeps_whole_sentences() {
        let sentences = vec![
            "Alpha beta gamma delta.".to_string(),
            "Epsilon zeta eta theta iota.".to_string(),
            "Kappa lambda mu.".to_string(),
        ];
        let (tokens, used) = collect_tokens(&sentences, 6);
        // First sentence gives 4 (< 6), second is added whole, third is not needed.
        assert_eq!(used, 2);
        assert_eq!(tokens.len(), 9);
        assert_eq!(tokens.last().map(String::as_str), Some("iota."));
    }

    #[test]
    fn test_collect_tokens_stops_when_sentences_run_out() {
        let sentences = vec!["Only four words here.".to_string()];
        let (tokens, used) = collect_tokens(&sentences, 50);
        assert_eq!(used, 1);
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_collect_tokens_filters_non_letter_words() {
        let sentences = vec!["In 2024 prices rose — \"sharply\" again.".to_string()];
        let (tokens, _) = collect_tokens(&sentences, 10);
        assert_eq!(tokens, vec!["In", "prices", "rose", "again."]);
    }

    #[tokio::test]
    async fn test_network_sentence_builds_tokens_and_sentence() {
        let provider = FakeHeadlines::with_items(vec![headline(
            "Scientists map the deep ocean floor",
            Some("<p>The survey used autonomous submarines. Results surprised everyone.</p>"),
        )]);
        let mut sampler = UniformSampler::os();

        let source = network_sentence(&provider, &mut sampler, 8).await.unwrap();

        assert_eq!(source.strategy, SourceStrategy::Network);
        assert_eq!(
            source.sentence,
            "Scientists map the deep ocean floor. The survey used autonomous submarines."
        );
        // 6 + 5 words, the third sentence is not needed, plus the special char.
        assert_eq!(source.tokens.len(), 12);
        assert_eq!(source.tokens[0], "Scientists");
        let special = source.tokens.last().unwrap();
        assert!(SPECIAL_CHARACTERS.contains(&special.as_str()));
    }

    #[tokio::test]
    async fn test_network_sentence_unavailable_provider() {
        let provider = FakeHeadlines::unreachable();
        let mut sampler = UniformSampler::os();

        let result = network_sentence(&provider, &mut sampler, 8).await;
        assert!(matches!(result, Err(PasswordError::SourceUnavailable(_))));
    }

    #[tokio::test]
    async fn test_network_sentence_empty_feed() {
        let provider = FakeHeadlines::empty_feed();
        let mut sampler = UniformSampler::os();

        let result = network_sentence(&provider, &mut sampler, 8).await;
        assert!(matches!(
            result,
            Err(PasswordError::SourceUnavailable(HeadlineError::Empty))
        ));
    }

    #[tokio::test]
    async fn test_network_sentence_empty_item_list() {
        let provider = FakeHeadlines::with_items(vec![]);
        let mut sampler = UniformSampler::os();

        let result = network_sentence(&provider, &mut sampler, 8).await;
        assert!(matches!(
            result,
            Err(PasswordError::SourceUnavailable(HeadlineError::Empty))
        ));
    }

    #[tokio::test]
    async fn test_network_sentence_only_short_fragments() {
        let provider = FakeHeadlines::with_items(vec![headline("Short", Some("Tiny."))]);
        let mut sampler = UniformSampler::os();

        let result = network_sentence(&provider, &mut sampler, 8).await;
        assert!(matches!(result, Err(PasswordError::NoUsableSentence)));
    }

    #[tokio::test]
    async fn test_network_sentence_without_letter_words() {
        let provider = FakeHeadlines::with_items(vec![headline(
            "2024 — 1,000,000 — 3.14 — 42",
            None,
        )]);
        let mut sampler = UniformSampler::os();

        let result = network_sentence(&provider, &mut sampler, 8).await;
        assert!(matches!(result, Err(PasswordError::NoUsableSentence)));
    }

    #[test]
    fn test_synthetic_sentence_shape() {
        let mut sampler = UniformSampler::os();
        for _ in 0..50 {
            let source = synthetic_sentence(&mut sampler).unwrap();
            assert_eq!(source.strategy, SourceStrategy::Synthetic);
            assert_eq!(source.tokens.len(), 8);
            assert!(ADJECTIVES.contains(&source.tokens[0].as_str()));
            assert!(NOUNS.contains(&source.tokens[1].as_str()));
            assert!(VERBS.contains(&source.tokens[2].as_str()));
            assert!(PREPOSITIONS.contains(&source.tokens[3].as_str()));
            assert!(DIGITS.contains(&source.tokens[4].as_str()));
            assert!(ADJECTIVES
                .iter()
                .any(|a| a.to_lowercase() == source.tokens[5]));
            assert!(NOUNS.contains(&source.tokens[6].as_str()));
            assert!(SPECIAL_CHARACTERS.contains(&source.tokens[7].as_str()));
            assert!(source.sentence.ends_with(source.tokens[7].as_str()));
            assert!(source.sentence.starts_with(source.tokens[0].as_str()));
        }
    }
}
