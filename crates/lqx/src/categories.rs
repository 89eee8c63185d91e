//! 🏷️ Category Normalizer — free text in, canonical badge out.
//!
//! Rate lists are typed by humans. "IMFL WHISKY", "Whiskey (Premium)",
//! "BEER STRONG", "cl", "Liquor", null. The list view wants twelve tidy
//! buckets. This module is the sorting hat.
//!
//! The rules are a static ordered table of `(needle, bucket)` pairs. First
//! match wins, so the order IS the tie-break: "Rum & Gin" is Rum because rum
//! is checked first. Reorder the table and you reorder the world. 🦆

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 🎯 The fixed canonical set (superset of every state's list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Canonical {
    Whisky,
    Beer,
    Rum,
    Vodka,
    Wine,
    Gin,
    Cl,
    Brandy,
    Tequila,
    Liqueur,
    Lab,
    Other,
}

impl Canonical {
    pub const ALL: [Canonical; 12] = [
        Canonical::Whisky,
        Canonical::Beer,
        Canonical::Rum,
        Canonical::Vodka,
        Canonical::Wine,
        Canonical::Gin,
        Canonical::Cl,
        Canonical::Brandy,
        Canonical::Tequila,
        Canonical::Liqueur,
        Canonical::Lab,
        Canonical::Other,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Canonical::Whisky => "Whisky",
            Canonical::Beer => "Beer",
            Canonical::Rum => "Rum",
            Canonical::Vodka => "Vodka",
            Canonical::Wine => "Wine",
            Canonical::Gin => "Gin",
            Canonical::Cl => "CL",
            Canonical::Brandy => "Brandy",
            Canonical::Tequila => "Tequila",
            Canonical::Liqueur => "Liqueur",
            Canonical::Lab => "LAB",
            Canonical::Other => "Other",
        }
    }
}

/// 🏷️ A normalized category.
///
/// Almost always `Canonical`. `Unlisted` holds the capitalized fallback for
/// text no rule recognizes ("cider" → "Cider"), so unknown categories still
/// render as something a human would write instead of collapsing to "Other".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Canonical(Canonical),
    Unlisted(String),
}

impl Category {
    /// Exact, case-sensitive lookup. Canonical names map back to `Canonical`
    /// so `"Other"` never turns into `Unlisted("Other")`.
    pub fn from_name(name: &str) -> Self {
        Canonical::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .map(Category::Canonical)
            .unwrap_or_else(|| Category::Unlisted(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Canonical(c) => c.name(),
            Category::Unlisted(name) => name,
        }
    }
}

impl From<Canonical> for Category {
    fn from(c: Canonical) -> Self {
        Category::Canonical(c)
    }
}

impl PartialEq<str> for Category {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Category {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from_name(s))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Category::from_name(&name))
    }
}

/// 🔍 How a rule looks at the lower-cased, trimmed input.
#[derive(Debug, Clone, Copy)]
enum Needle {
    /// any of these fragments appears somewhere
    Contains(&'static [&'static str]),
    /// the whole input is exactly this
    Exactly(&'static str),
}

impl Needle {
    fn matches(self, lowered: &str) -> bool {
        match self {
            Needle::Contains(fragments) => fragments.iter().any(|f| lowered.contains(f)),
            Needle::Exactly(word) => lowered == word,
        }
    }
}

// 📜 Order matters. First match wins.
const RULES: &[(Needle, Canonical)] = &[
    (Needle::Contains(&["whisky", "whiskey"]), Canonical::Whisky),
    (Needle::Contains(&["beer"]), Canonical::Beer),
    (Needle::Contains(&["rum"]), Canonical::Rum),
    (Needle::Contains(&["vodka"]), Canonical::Vodka),
    (Needle::Contains(&["wine"]), Canonical::Wine),
    (Needle::Contains(&["gin"]), Canonical::Gin),
    (Needle::Exactly("cl"), Canonical::Cl),
    (Needle::Contains(&["brandy", "cognac"]), Canonical::Brandy),
    (Needle::Contains(&["tequila"]), Canonical::Tequila),
    (Needle::Contains(&["liqueur", "liquor"]), Canonical::Liqueur),
    (Needle::Exactly("lab"), Canonical::Lab),
];

/// 🏷️ Map a raw category string onto the canonical set.
///
/// - `None`, empty, or whitespace-only → `Other`
/// - first matching rule → its canonical bucket
/// - nothing matched → trimmed input, first letter upper-cased, rest lower-cased
///
/// Pure and deterministic. Same input, same badge, every time.
pub fn normalize_category(raw: Option<&str>) -> Category {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Canonical::Other.into();
    }

    let lowered = trimmed.to_lowercase();
    if let Some((_, bucket)) = RULES.iter().find(|(needle, _)| needle.matches(&lowered)) {
        return (*bucket).into();
    }

    Category::from_name(&capitalize(trimmed))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_one_where_the_documented_examples_hold() {
        assert_eq!(normalize_category(Some("Whisky (Premium)")), "Whisky");
        assert_eq!(normalize_category(Some("CL")), "CL");
        assert_eq!(normalize_category(None), "Other");
        assert_eq!(normalize_category(Some("Cider")), "Cider");
    }

    #[test]
    fn the_one_where_spelling_and_shouting_dont_matter() {
        assert_eq!(normalize_category(Some("IMFL WHISKEY")), Category::from(Canonical::Whisky));
        assert_eq!(normalize_category(Some("BEER STRONG")), Category::from(Canonical::Beer));
        assert_eq!(normalize_category(Some("Dark Rum")), Category::from(Canonical::Rum));
        assert_eq!(normalize_category(Some("sparkling WINE")), Category::from(Canonical::Wine));
        assert_eq!(normalize_category(Some("VS Cognac")), Category::from(Canonical::Brandy));
        assert_eq!(normalize_category(Some("Tequila Blanco")), Category::from(Canonical::Tequila));
        assert_eq!(normalize_category(Some("Liquor")), Category::from(Canonical::Liqueur));
        assert_eq!(normalize_category(Some("  lab ")), Category::from(Canonical::Lab));
    }

    #[test]
    fn the_one_where_first_rule_wins_the_tie() {
        // 🧪 both rum and gin appear; rum sits higher in the table
        assert_eq!(normalize_category(Some("Rum & Gin Combo")), "Rum");
        // 🧪 "ginger" contains "gin". the table does not care about your feelings.
        assert_eq!(normalize_category(Some("Ginger Beer")), "Beer");
        assert_eq!(normalize_category(Some("Ginger Liqueur")), "Gin");
    }

    #[test]
    fn the_one_where_cl_and_lab_must_be_the_whole_word() {
        assert_eq!(normalize_category(Some("cl")), "CL");
        assert_eq!(normalize_category(Some("Clear Spirit")), "Clear spirit");
        assert_eq!(normalize_category(Some("Lab")), "LAB");
        assert_eq!(normalize_category(Some("Labrador Special")), "Labrador special");
    }

    #[test]
    fn the_one_where_nothing_collapses_to_other_except_nothing() {
        assert_eq!(normalize_category(Some("")), Category::from(Canonical::Other));
        assert_eq!(normalize_category(Some("   ")), Category::from(Canonical::Other));
        assert_eq!(
            normalize_category(Some("cIDER drink")),
            Category::Unlisted("Cider drink".into())
        );
        // 🧪 a literal "other" comes back as the canonical Other, not an impostor
        assert_eq!(normalize_category(Some("OTHER")), Category::from(Canonical::Other));
    }

    #[test]
    fn the_one_where_names_round_trip_through_from_name() {
        for canonical in Canonical::ALL {
            assert_eq!(Category::from_name(canonical.name()), Category::Canonical(canonical));
        }
        // case-sensitive on purpose: categories are already canonical by the time we filter
        assert_eq!(Category::from_name("whisky"), Category::Unlisted("whisky".into()));
    }
}
