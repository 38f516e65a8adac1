//! Pure display helpers for species records.
//!
//! The engine returns data, never rendered output; these helpers are what
//! the presentation layer formats that data with. They have no state and
//! no side effects.

/// Official artwork base URL; images are keyed by the 3-digit padded id.
const ARTWORK_BASE: &str = "https://assets.pokemon.com/assets/cms2/img/pokedex/full";

/// Static type-effectiveness chart: type name -> types it is weak to.
const TYPE_WEAKNESSES: &[(&str, &[&str])] = &[
    ("normal", &["fighting"]),
    ("fire", &["water", "ground", "rock"]),
    ("water", &["electric", "grass"]),
    ("electric", &["ground"]),
    ("grass", &["fire", "ice", "poison", "flying", "bug"]),
    ("ice", &["fire", "fighting", "rock", "steel"]),
    ("fighting", &["flying", "psychic", "fairy"]),
    ("poison", &["ground", "psychic"]),
    ("ground", &["water", "grass", "ice"]),
    ("flying", &["electric", "ice", "rock"]),
    ("psychic", &["bug", "ghost", "dark"]),
    ("bug", &["fire", "flying", "rock"]),
    ("rock", &["water", "grass", "fighting", "ground", "steel"]),
    ("ghost", &["ghost", "dark"]),
    ("dragon", &["ice", "dragon", "fairy"]),
    ("dark", &["fighting", "bug", "fairy"]),
    ("steel", &["fire", "fighting", "ground"]),
    ("fairy", &["poison", "steel"]),
];

/// Title-case a species, type, or stat name for display.
///
/// Splits on spaces and hyphens, capitalizes each part, and joins with
/// spaces: `"mr-mime"` -> `"Mr Mime"`. The stat name `"hp"` is rendered as
/// `"HP"` rather than `"Hp"`.
pub fn capitalize_words(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            word.split('-')
                .map(capitalize_part)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_part(part: &str) -> String {
    if part.eq_ignore_ascii_case("hp") {
        return "HP".to_string();
    }
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// 3-digit zero-padded dex number, e.g. `1` -> `"001"`.
pub fn padded_id(id: u32) -> String {
    format!("{:03}", id)
}

/// Official artwork URL for a species id.
pub fn artwork_url(id: u32) -> String {
    format!("{}/{}.png", ARTWORK_BASE, padded_id(id))
}

/// Weaknesses for a species given its types, deduplicated in first-seen
/// order across the ordered type list. Unknown type names contribute
/// nothing.
pub fn weaknesses_for<S: AsRef<str>>(types: &[S]) -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for type_name in types {
        let Some((_, weaknesses)) = TYPE_WEAKNESSES
            .iter()
            .find(|(name, _)| *name == type_name.as_ref())
        else {
            continue;
        };
        for &weakness in *weaknesses {
            if !seen.contains(&weakness) {
                seen.push(weakness);
            }
        }
    }
    seen
}
