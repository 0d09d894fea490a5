//! English pluralization for type names.
//!
//! Only the last word of a compound name is inflected, so `SalesPerson`
//! becomes `SalesPeople` and `IPAddress` becomes `IPAddresses`. Inputs that
//! already read as plural are returned unchanged.

const UNCOUNTABLE: &[&str] = &[
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "hardware",
    "information",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
    "staff",
    "traffic",
];

// (singular, plural)
const IRREGULAR: &[(&str, &str)] = &[
    ("alias", "aliases"),
    ("analysis", "analyses"),
    ("atlas", "atlases"),
    ("axis", "axes"),
    ("basis", "bases"),
    ("canvas", "canvases"),
    ("child", "children"),
    ("criterion", "criteria"),
    ("datum", "data"),
    ("foot", "feet"),
    ("gas", "gases"),
    ("goose", "geese"),
    ("index", "indices"),
    ("lens", "lenses"),
    ("man", "men"),
    ("matrix", "matrices"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("quiz", "quizzes"),
    ("tooth", "teeth"),
    ("vertex", "vertices"),
    ("woman", "women"),
];

const F_TO_VES: &[&str] = &[
    "calf", "elf", "half", "leaf", "loaf", "self", "sheaf", "shelf", "thief", "wolf",
];

const FE_TO_VES: &[&str] = &["knife", "life", "wife"];

const O_TO_OES: &[&str] = &["echo", "hero", "potato", "tomato", "veto"];

/// Pluralize the last word of `name`, preserving the casing of the rest.
#[must_use]
pub fn pluralize(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let start = last_word_start(name);
    let (head, word) = name.split_at(start);

    // acronyms: `API` -> `APIs`
    if word.len() > 1 && word.chars().all(|c| c.is_ascii_uppercase()) {
        return format!("{name}s");
    }

    let lower = word.to_ascii_lowercase();
    let plural = pluralize_word(&lower);

    format!("{head}{}", restore_case(word, &plural))
}

fn pluralize_word(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == word) {
        return (*plural).to_string();
    }
    if IRREGULAR.iter().any(|(_, plural)| *plural == word) {
        return word.to_string();
    }

    if word.ends_with('s') {
        if word.ends_with("ss") || word.ends_with("us") {
            return format!("{word}es");
        }
        if let Some(stem) = word.strip_suffix("is") {
            return format!("{stem}es");
        }

        // `widgets`, `policies`, `boxes`
        return word.to_string();
    }

    if word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
        || O_TO_OES.contains(&word)
    {
        return format!("{word}es");
    }

    if let Some(stem) = word.strip_suffix('y')
        && !stem.ends_with(is_vowel)
        && !stem.is_empty()
    {
        return format!("{stem}ies");
    }

    if FE_TO_VES.contains(&word)
        && let Some(stem) = word.strip_suffix("fe")
    {
        return format!("{stem}ves");
    }
    if F_TO_VES.contains(&word)
        && let Some(stem) = word.strip_suffix('f')
    {
        return format!("{stem}ves");
    }

    format!("{word}s")
}

const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

// Byte offset where the last word of a Pascal, camel or snake name begins.
fn last_word_start(name: &str) -> usize {
    let chars: Vec<(usize, char)> = name.char_indices().collect();
    let mut start = 0;

    for (i, &(offset, c)) in chars.iter().enumerate().skip(1) {
        let prev = chars[i - 1].1;
        let next = chars.get(i + 1).map(|&(_, n)| n);

        let separator = matches!(prev, '_' | '-' | ' ');
        let lower_to_upper =
            c.is_ascii_uppercase() && (prev.is_ascii_lowercase() || prev.is_ascii_digit());
        let acronym_end = c.is_ascii_uppercase()
            && prev.is_ascii_uppercase()
            && next.is_some_and(|n| n.is_ascii_lowercase());

        if separator || lower_to_upper || acronym_end {
            start = offset;
        }
    }

    start
}

// Carry the capitalization of the original word over to its plural.
fn restore_case(original: &str, plural: &str) -> String {
    let mut chars = plural.chars();
    match (original.chars().next(), chars.next()) {
        (Some(first), Some(p)) if first.is_ascii_uppercase() => {
            format!("{}{}", p.to_ascii_uppercase(), chars.as_str())
        }
        _ => plural.to_string(),
    }
}
