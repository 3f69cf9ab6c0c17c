//! Embedded English stopword table

use std::collections::HashSet;

/// Standard general-purpose English stopword list
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "can", "will", "just",
    "should", "now",
];

/// Build an owned stopword set from the embedded table
pub fn stopword_set() -> HashSet<String> {
    ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_words_present() {
        let set = stopword_set();
        assert!(set.contains("the"));
        assert!(set.contains("should"));
        assert!(set.contains("through"));
        assert!(!set.contains("customer"));
        assert!(!set.contains("machine"));
    }

    #[test]
    fn test_table_is_lowercase_and_unique() {
        let set = stopword_set();
        assert_eq!(set.len(), ENGLISH_STOPWORDS.len());
        for word in ENGLISH_STOPWORDS {
            assert_eq!(*word, word.to_lowercase());
        }
    }
}
