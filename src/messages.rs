// Reply text catalog for mention responses.

use std::collections::HashMap;

use lazy_static::lazy_static;
use rand::Rng;

static FUNGI_MESSAGES: &[&str] = &[
    "gm $fungi fam! 🍄 Keep spreading those spores! 🌿",
    "another beautiful day in the $fungi garden 🍄✨",
    "$fungi squad, let's grow together! 🍄🌱",
    "spreading some $fungi love your way! 🍄🌾",
];

static JELLI_MESSAGES: &[&str] = &[
    "floating through the $jelli seas! 🌊🪼",
    "glowing with $jelli vibes today! 🪼✨",
    "who's ready for some $jelli time? 🌊🪼",
    "making waves in the $jelli universe! 🪼💫",
];

static PEPI_MESSAGES: &[&str] = &[
    "hopping around with $pepi! 🐸🌿",
    "$pepi fam, let's make today count! 🐸💫",
    "spreading that $pepi energy! 🐸🍃",
    "another amazing day for $pepi! 🐸🌱",
];

static FROGGI_MESSAGES: &[&str] = &[
    "splashing in the $froggi pond! 🐸💦",
    "$froggi fam, let's make today ribbit! 🐸🌿",
    "leaping through lily pads with $froggi! 🐸🍃",
    "another day in the $froggi pond! 🐸💫",
];

static TRUFFI_MESSAGES: &[&str] = &[
    "reaching for the moon with $truffi! 🌕✨",
    "$truffi crew, let's shoot for the stars! 🌕💫",
    "spreading that $truffi moonlight! 🌕🚀",
    "another lunar day for $truffi! 🌕✨",
];

lazy_static! {
    static ref TOKEN_MESSAGES: HashMap<&'static str, &'static [&'static str]> = {
        let mut catalog = HashMap::new();
        catalog.insert("FUNGI", FUNGI_MESSAGES);
        catalog.insert("JELLI", JELLI_MESSAGES);
        catalog.insert("PEPI", PEPI_MESSAGES);
        catalog.insert("FROGGI", FROGGI_MESSAGES);
        catalog.insert("TRUFFI", TRUFFI_MESSAGES);
        catalog
    };
}

/// Picks a random reply line for the project, keyed by upper-cased name.
pub fn get_token_message(token_name: &str, rng: &mut impl Rng) -> Option<&'static str> {
    let messages = TOKEN_MESSAGES.get(token_name.to_uppercase().as_str())?;
    Some(messages[rng.gen_range(0..messages.len())])
}
