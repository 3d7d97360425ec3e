use history_core::{
    ContextWindow, LearningEngine, UpdateOperation, HIGH_FREQUENCY, LOW_FREQUENCY, MAX_WORD_LENGTH,
};
use proptest::prelude::*;

const T: u64 = 1_700_000_000;

fn unigram(word: &str, frequency: i32) -> UpdateOperation {
    UpdateOperation::Unigram { word: word.into(), frequency, timestamp: T }
}

fn ngram(context: ContextWindow, word: &str, frequency: i32) -> UpdateOperation {
    UpdateOperation::Ngram { context, word: word.into(), frequency, timestamp: T }
}

#[test]
fn empty_context_records_unigram_only() {
    let ops = LearningEngine::new().ingest(&ContextWindow::empty(), "cat", true, T);
    assert_eq!(ops, vec![unigram("cat", HIGH_FREQUENCY)]);
}

#[test]
fn previous_word_records_bigram_at_same_frequency() {
    let ctx = ContextWindow::from_words(["the"]);
    let ops = LearningEngine::new().ingest(&ctx, "cat", true, T);
    assert_eq!(ops, vec![unigram("cat", HIGH_FREQUENCY), ngram(ctx, "cat", HIGH_FREQUENCY)]);
}

#[test]
fn sentence_start_bigram_is_under_weighted() {
    let ctx = ContextWindow::new(["the"], true);
    let ops = LearningEngine::new().ingest(&ctx, "cat", true, T);
    assert_eq!(ops, vec![unigram("cat", HIGH_FREQUENCY), ngram(ctx, "cat", LOW_FREQUENCY)]);
}

#[test]
fn word_never_predicts_itself() {
    let ctx = ContextWindow::from_words(["cat"]);
    let ops = LearningEngine::new().ingest(&ctx, "cat", false, T);
    assert_eq!(ops, vec![unigram("cat", LOW_FREQUENCY)]);
}

#[test]
fn word_one_past_the_limit_is_dropped() {
    let word = "a".repeat(MAX_WORD_LENGTH + 1);
    for ctx in [
        ContextWindow::empty(),
        ContextWindow::beginning_of_sentence(),
        ContextWindow::from_words(["the"]),
    ] {
        assert!(LearningEngine::new().ingest(&ctx, &word, true, T).is_empty());
    }
}

#[test]
fn word_at_the_limit_is_kept() {
    let word = "a".repeat(MAX_WORD_LENGTH);
    assert_eq!(LearningEngine::new().ingest(&ContextWindow::empty(), &word, true, T).len(), 1);
}

#[test]
fn bare_sentence_start_records_unigram_only() {
    let ops = LearningEngine::new().ingest(&ContextWindow::beginning_of_sentence(), "hello", false, T);
    assert_eq!(ops, vec![unigram("hello", LOW_FREQUENCY)]);
}

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

fn context() -> impl Strategy<Value = ContextWindow> {
    (prop::collection::vec(word(), 0..4), any::<bool>())
        .prop_map(|(words, bos)| ContextWindow::new(words, bos))
}

proptest! {
    #[test]
    fn over_length_words_produce_nothing(
        ctx in context(),
        long in "[a-z]{49,80}",
        trusted in any::<bool>(),
    ) {
        prop_assert!(LearningEngine::new().ingest(&ctx, &long, trusted, T).is_empty());
    }

    #[test]
    fn unigram_comes_first_with_trust_frequency(
        ctx in context(),
        w in word(),
        trusted in any::<bool>(),
    ) {
        let ops = LearningEngine::new().ingest(&ctx, &w, trusted, T);
        let expected = if trusted { HIGH_FREQUENCY } else { LOW_FREQUENCY };
        prop_assert_eq!(&ops[0], &unigram(&w, expected));
        prop_assert!(ops.len() <= 2);
    }

    #[test]
    fn sentence_start_ngrams_are_always_low(
        words in prop::collection::vec(word(), 1..4),
        w in word(),
        trusted in any::<bool>(),
    ) {
        let ctx = ContextWindow::new(words, true);
        for op in LearningEngine::new().ingest(&ctx, &w, trusted, T).iter().filter(|op| op.is_ngram()) {
            prop_assert_eq!(op.frequency(), LOW_FREQUENCY);
        }
    }

    #[test]
    fn nearest_word_equal_to_word_suppresses_ngrams(
        rest in prop::collection::vec(word(), 0..3),
        w in word(),
        bos in any::<bool>(),
    ) {
        let mut words = vec![w.clone()];
        words.extend(rest);
        let ctx = ContextWindow::new(words, bos);
        let ops = LearningEngine::new().ingest(&ctx, &w, true, T);
        prop_assert!(ops.iter().all(|op| !op.is_ngram()));
    }

    #[test]
    fn trim_never_exceeds_k(ctx in context(), k in 0usize..6) {
        let trimmed = ctx.trim(k);
        prop_assert!(trimmed.len() <= k);
        prop_assert_eq!(trimmed.is_sentence_start(), ctx.is_sentence_start());
        if k >= ctx.len() {
            prop_assert_eq!(trimmed, ctx);
        }
    }
}
