//! Picks an emoji to show next to an expense based on its name.

/// Emoji shown when no keyword matches.
pub const DEFAULT_EMOJI: &str = "💸";

/// Keyword groups, checked in order. The first group with a keyword equal to
/// one of the words in the (lower-cased) expense name wins. A trailing "s" on a
/// word is ignored, so "coffees" still matches "coffee".
const KEYWORD_EMOJIS: &[(&[&str], &str)] = &[
    (&["coffee", "latte", "espresso", "cappuccino"], "☕"),
    (&["pizza"], "🍕"),
    (
        &["lunch", "dinner", "breakfast", "food", "burger", "meal", "snack"],
        "🍔",
    ),
    (&["grocery", "groceries", "supermarket", "market"], "🛒"),
    (
        &["bus", "train", "taxi", "uber", "fuel", "gas", "petrol", "parking"],
        "🚌",
    ),
    (
        &["rent", "bill", "electric", "electricity", "water", "internet", "phone"],
        "🧾",
    ),
    (&["movie", "cinema", "game", "concert", "netflix", "music"], "🎬"),
    (&["clothes", "shoe", "shopping", "shirt"], "🛍️"),
    (&["doctor", "pharmacy", "medicine", "gym", "health"], "💊"),
    (&["flight", "hotel", "travel", "trip"], "✈️"),
    (&["pet", "dog", "cat", "vet"], "🐾"),
    (&["gift", "present", "birthday"], "🎁"),
    (&["book", "course", "school", "tuition"], "📚"),
];

fn matches_keyword(word: &str, keyword: &str) -> bool {
    word == keyword || word.strip_suffix('s') == Some(keyword)
}

/// Get the emoji for an expense called `name`.
pub fn expense_emoji(name: &str) -> &'static str {
    let name = name.to_lowercase();
    let words: Vec<&str> = name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect();

    KEYWORD_EMOJIS
        .iter()
        .find(|(keywords, _)| {
            keywords
                .iter()
                .any(|keyword| words.iter().any(|word| matches_keyword(word, keyword)))
        })
        .map(|(_, emoji)| *emoji)
        .unwrap_or(DEFAULT_EMOJI)
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_EMOJI, expense_emoji};

    #[test]
    fn matches_keyword_case_insensitively() {
        assert_eq!(expense_emoji("Morning COFFEE"), "☕");
    }

    #[test]
    fn first_matching_group_wins() {
        // "pizza lunch" matches both the pizza and meal groups.
        assert_eq!(expense_emoji("pizza lunch"), "🍕");
    }

    #[test]
    fn keywords_inside_longer_words_do_not_match() {
        for name in ["Vacation", "Business lunch", "Parents"] {
            assert_ne!(expense_emoji(name), "🐾", "{name}");
            assert_ne!(expense_emoji(name), "🚌", "{name}");
            assert_ne!(expense_emoji(name), "🧾", "{name}");
        }
        assert_eq!(expense_emoji("Business lunch"), "🍔");
    }

    #[test]
    fn words_are_split_on_punctuation() {
        assert_eq!(expense_emoji("bus/train pass"), "🚌");
        assert_eq!(expense_emoji("Weekly groceries"), "🛒");
        assert_eq!(expense_emoji("2 coffees"), "☕");
    }

    #[test]
    fn unknown_names_get_default() {
        assert_eq!(expense_emoji("Widget"), DEFAULT_EMOJI);
    }
}
