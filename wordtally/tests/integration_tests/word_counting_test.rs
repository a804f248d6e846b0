// tests/integration_tests/word_counting_test.rs
use super::common::SAMPLE_TEXT;
use wordtally::{FrequencyEntry, analyze_file, analyze_text, tokenize};

#[test]
fn test_sample_text_counts() {
    let stats = analyze_text(SAMPLE_TEXT);

    assert_eq!(stats.total, 20, "Every word is counted, duplicates included");
    assert_eq!(stats.unique, 15, "Case and punctuation do not split words");
    assert_eq!(
        stats.frequency.first(),
        Some(&FrequencyEntry::new("hello", 2)),
        "Ties keep first-seen order"
    );
    assert!(
        stats.words().any(|word| word == "lets"),
        "Apostrophes are removed from contractions"
    );
}

#[test]
fn test_counting_properties_hold() {
    let texts = [
        "",
        "   \n\t ",
        "?!... ,,, ---",
        "one",
        "The the THE the.",
        SAMPLE_TEXT,
        "Ünïcödé WORDS stay, only ASCII punctuation goes: «quoted»",
    ];

    for text in texts {
        let stats = analyze_text(text);
        let sum: usize = stats.frequency.iter().map(|entry| entry.count).sum();

        assert!(stats.total >= stats.unique, "total >= unique for {text:?}");
        assert_eq!(sum, stats.total, "frequency sums to total for {text:?}");
        assert_eq!(stats.unique, stats.frequency.len());

        let tokens = tokenize(text);
        assert_eq!(tokenize(&tokens.join(" ")), tokens, "idempotent for {text:?}");
    }
}

#[test]
fn test_empty_input_yields_zero_counts() {
    let result = analyze_file("empty.txt", "");
    assert_eq!(result.total_word_count, 0);
    assert_eq!(result.unique_word_count, 0);
    assert!(result.frequency.is_empty());
}

#[test]
fn test_frequency_is_descending() {
    let stats = analyze_text("c b a b c c d");
    let counts: Vec<usize> = stats.frequency.iter().map(|entry| entry.count).collect();
    assert_eq!(counts, vec![3, 2, 1, 1]);

    let words: Vec<&str> = stats.words().collect();
    assert_eq!(words, vec!["c", "b", "a", "d"]);
}
