use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Один из 14 аллергенов, которые обязательно указывать в карте.
///
/// Набор закрыт и вшит в сборку. Порядок вариантов задаёт порядок легенды.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllergenTag {
    Gluten,
    Lacteos,
    Huevo,
    Pescado,
    Mariscos,
    Cacahuetes,
    FrutosSecos,
    Soja,
    Apio,
    Mostaza,
    Sesamo,
    Sulfitos,
    Moluscos,
    Altramuces,
}

impl AllergenTag {
    pub const ALL: [AllergenTag; 14] = [
        AllergenTag::Gluten,
        AllergenTag::Lacteos,
        AllergenTag::Huevo,
        AllergenTag::Pescado,
        AllergenTag::Mariscos,
        AllergenTag::Cacahuetes,
        AllergenTag::FrutosSecos,
        AllergenTag::Soja,
        AllergenTag::Apio,
        AllergenTag::Mostaza,
        AllergenTag::Sesamo,
        AllergenTag::Sulfitos,
        AllergenTag::Moluscos,
        AllergenTag::Altramuces,
    ];

    /// Normalized key as it appears in the raw allergen text.
    pub fn key(&self) -> &'static str {
        match self {
            AllergenTag::Gluten => "gluten",
            AllergenTag::Lacteos => "lacteos",
            AllergenTag::Huevo => "huevo",
            AllergenTag::Pescado => "pescado",
            AllergenTag::Mariscos => "mariscos",
            AllergenTag::Cacahuetes => "cacahuetes",
            AllergenTag::FrutosSecos => "frutos_secos",
            AllergenTag::Soja => "soja",
            AllergenTag::Apio => "apio",
            AllergenTag::Mostaza => "mostaza",
            AllergenTag::Sesamo => "sesamo",
            AllergenTag::Sulfitos => "sulfitos",
            AllergenTag::Moluscos => "moluscos",
            AllergenTag::Altramuces => "altramuces",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AllergenTag::Gluten => "🌾",
            AllergenTag::Lacteos => "🥛",
            AllergenTag::Huevo => "🥚",
            AllergenTag::Pescado => "🐟",
            AllergenTag::Mariscos => "🦐",
            AllergenTag::Cacahuetes => "🥜",
            AllergenTag::FrutosSecos => "🌰",
            AllergenTag::Soja => "🫘",
            AllergenTag::Apio => "🌿",
            AllergenTag::Mostaza => "🌱",
            AllergenTag::Sesamo => "⚪",
            AllergenTag::Sulfitos => "🍷",
            AllergenTag::Moluscos => "🐚",
            AllergenTag::Altramuces => "🌼",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AllergenTag::Gluten => "Gluten",
            AllergenTag::Lacteos => "Lácteos",
            AllergenTag::Huevo => "Huevo",
            AllergenTag::Pescado => "Pescado",
            AllergenTag::Mariscos => "Mariscos",
            AllergenTag::Cacahuetes => "Cacahuetes",
            AllergenTag::FrutosSecos => "Frutos secos",
            AllergenTag::Soja => "Soja",
            AllergenTag::Apio => "Apio",
            AllergenTag::Mostaza => "Mostaza",
            AllergenTag::Sesamo => "Sésamo",
            AllergenTag::Sulfitos => "Sulfitos",
            AllergenTag::Moluscos => "Moluscos",
            AllergenTag::Altramuces => "Altramuces",
        }
    }

    /// Exact lookup of an already normalized key.
    pub fn from_key(key: &str) -> Option<Self> {
        ALLERGEN_INDEX.get(key).copied()
    }
}

/// Индекс ключ → аллерген, строится один раз на процесс.
static ALLERGEN_INDEX: Lazy<HashMap<&'static str, AllergenTag>> =
    Lazy::new(|| AllergenTag::ALL.iter().map(|tag| (tag.key(), *tag)).collect());

impl fmt::Display for AllergenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAllergen(pub String);

impl fmt::Display for UnknownAllergen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown allergen: {}", self.0)
    }
}

impl std::error::Error for UnknownAllergen {}

impl FromStr for AllergenTag {
    type Err = UnknownAllergen;

    /// Parses a single fragment with the same normalization as the raw text parser.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = super::parser::normalize_fragment(s);
        AllergenTag::from_key(&key).ok_or_else(|| UnknownAllergen(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_fourteen_distinct_keys() {
        assert_eq!(ALLERGEN_INDEX.len(), 14);
        for tag in AllergenTag::ALL {
            assert_eq!(AllergenTag::from_key(tag.key()), Some(tag));
        }
    }

    #[test]
    fn test_serde_uses_key() {
        let json = serde_json::to_string(&AllergenTag::FrutosSecos).unwrap();
        assert_eq!(json, "\"frutos_secos\"");
        let back: AllergenTag = serde_json::from_str("\"lacteos\"").unwrap();
        assert_eq!(back, AllergenTag::Lacteos);
    }

    #[test]
    fn test_from_str_normalizes() {
        assert_eq!("Frutos Secos".parse::<AllergenTag>(), Ok(AllergenTag::FrutosSecos));
        assert_eq!(" SOJA ".parse::<AllergenTag>(), Ok(AllergenTag::Soja));
        assert_eq!(
            "marciano".parse::<AllergenTag>(),
            Err(UnknownAllergen("marciano".to_string()))
        );
    }

    #[test]
    fn test_display_is_label() {
        assert_eq!(AllergenTag::Sesamo.to_string(), "Sésamo");
    }
}
