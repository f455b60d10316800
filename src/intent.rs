//! Intent classification for spoken utterances.
//!
//! Pure string processing with no I/O: the webhook handler normalizes the raw
//! utterance, calls [`classify`] and dispatches on the returned [`Intent`].
//! There is no tokenizer and no NLU here, only prefix matching against the
//! fixed verb forms the skill understands.

/// Verb prefixes that make an utterance a read-only "announce the list" query.
const LIST_PREFIXES: [&str; 6] = [
    "перечисли",
    "перечислить",
    "огласи",
    "огласить",
    "скажи что",
    "сказать что",
];

/// Verb forms stripped from an "add" command before splitting item names.
const ADD_VERBS: [&str; 2] = ["добавь", "добавить"];

/// Delimiter between item names within one "add" command.
///
/// Splitting is literal: an item name that itself contains " и " as a
/// substring is split into two items. Known limitation of the voice grammar.
const ITEM_DELIMITER: &str = " и ";

/// What the user asked the skill to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Empty utterance, or an "add" command with nothing left after the verb:
    /// prompt the user and keep the session open.
    Greet,
    /// Announce the unpurchased items. Read-only.
    ListItems,
    /// Add the named items. Names are kept as spoken (lowercased, trimmed,
    /// not yet capitalized for storage).
    AddItems(Vec<String>),
}

/// Classify a raw utterance into an [`Intent`].
///
/// Matching is case-insensitive and whitespace-trimmed. Any utterance that is
/// neither empty nor a list query is treated as an "add" command.
///
/// # Examples
///
/// ```
/// use pokupki::intent::{Intent, classify};
///
/// assert_eq!(classify(""), Intent::Greet);
/// assert_eq!(classify("Перечисли список"), Intent::ListItems);
/// assert_eq!(
///     classify("добавь молоко и хлеб"),
///     Intent::AddItems(vec!["молоко".to_string(), "хлеб".to_string()])
/// );
/// ```
#[must_use]
pub fn classify(utterance: &str) -> Intent {
    let phrase = utterance.trim().to_lowercase();

    if phrase.is_empty() {
        return Intent::Greet;
    }

    if LIST_PREFIXES.iter().any(|p| phrase.starts_with(p)) {
        return Intent::ListItems;
    }

    let names = split_item_names(&phrase);
    if names.is_empty() {
        // "добавь" with nothing after it: re-prompt instead of storing
        // an empty name.
        Intent::Greet
    } else {
        Intent::AddItems(names)
    }
}

/// Strip the add verb and split the remainder into item names.
fn split_item_names(phrase: &str) -> Vec<String> {
    let mut remainder = phrase.to_string();
    for verb in ADD_VERBS {
        remainder = remainder.replacen(verb, "", 1);
    }

    remainder
        .split(ITEM_DELIMITER)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Uppercase the first character of an item name for storage.
///
/// Unicode-aware: "молоко" becomes "Молоко".
#[must_use]
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
