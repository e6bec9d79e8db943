/// High-frequency, low-information English words dropped from keywords.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "her", "was", "one", "our",
    "out", "day", "get", "has", "him", "his", "how", "man", "new", "now", "old", "see", "two",
    "way", "who", "boy", "did", "its", "let", "put", "say", "she", "too", "use", "this", "that",
    "with", "have", "from", "they", "been", "what", "when", "your", "more", "will", "just", "than",
    "into",
];
