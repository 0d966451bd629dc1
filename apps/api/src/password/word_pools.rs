//! Fixed word-class pools for synthetic sentences, and the character
//! alphabets used for special tokens and padding.

/// Capitalised so a sentence can open with one; lowercased when used mid-sentence.
pub const ADJECTIVES: &[&str] = &[
    "Big", "Brave", "Bright", "Calm", "Clever", "Cold", "Crisp", "Dark", "Eager", "Fancy",
    "Fast", "Gentle", "Giant", "Glad", "Golden", "Happy", "Humble", "Jolly", "Keen", "Kind",
    "Lazy", "Little", "Lucky", "Mighty", "Noble", "Odd", "Proud", "Quick", "Quiet", "Rapid",
    "Red", "Shiny", "Silent", "Silver", "Sleepy", "Smart", "Swift", "Tiny", "Vivid", "Wild",
];

pub const NOUNS: &[&str] = &[
    "apple", "badger", "banjo", "cactus", "camel", "cloud", "comet", "dragon", "eagle", "falcon",
    "fish", "forest", "garden", "giraffe", "harbor", "island", "jungle", "kettle", "koala",
    "lemon", "lion", "mango", "meadow", "monkey", "ocean", "otter", "panda", "parrot", "piano",
    "planet", "rabbit", "river", "rocket", "tiger", "tractor", "turtle", "violin", "walrus",
    "whale", "zebra",
];

pub const VERBS: &[&str] = &[
    "builds", "carries", "chases", "climbs", "dances", "digs", "draws", "dreams", "drinks",
    "eats", "finds", "flies", "follows", "grabs", "hides", "hugs", "jumps", "kicks", "likes",
    "lifts", "makes", "paints", "plays", "pulls", "pushes", "reads", "rides", "runs", "sees",
    "sings", "sleeps", "swims", "throws", "visits", "walks", "watches", "wins", "writes",
];

pub const PREPOSITIONS: &[&str] = &[
    "above", "across", "after", "against", "along", "among", "around", "at", "before",
    "behind", "below", "beneath", "beside", "beyond", "by", "near", "in", "inside", "into",
    "on", "onto", "over", "past", "through", "toward", "under", "upon", "with", "within",
];

pub const DIGITS: &[&str] = &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

pub const SPECIAL_CHARACTERS: &[&str] = &["!", "@", "#", "$", "%", "^", "&", "*"];

/// Upper-case, lower-case and digit alphabets, in that order.
pub const PADDING_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j',
    'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1',
    '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Entropy of one synthetic sentence in bits.
///
/// The template draws, in order, an adjective, noun, verb, preposition,
/// digit, adjective, noun and special character. Nothing else is random, so
/// this is the ceiling on what a synthetic-sourced password can carry.
pub fn synthetic_entropy_bits() -> f64 {
    [
        ADJECTIVES.len(),
        NOUNS.len(),
        VERBS.len(),
        PREPOSITIONS.len(),
        DIGITS.len(),
        ADJECTIVES.len(),
        NOUNS.len(),
        SPECIAL_CHARACTERS.len(),
    ]
    .iter()
    .map(|&n| (n as f64).log2())
    .sum()
}
