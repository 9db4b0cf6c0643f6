use super::aggregate::AllergenTag;

const DELIMITERS: [char; 3] = [',', ';', '/'];

/// Extracts known allergens from free text such as `"Gluten, frutos secos / soja"`.
///
/// Unknown fragments are dropped silently. Repeated allergens are kept as
/// many times as they appear.
pub fn parse_allergens(raw: Option<&str>) -> Vec<AllergenTag> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(DELIMITERS)
        .filter_map(|fragment| AllergenTag::from_key(&normalize_fragment(fragment)))
        .collect()
}

/// trim + lowercase + whitespace runs → `_`
pub(crate) fn normalize_fragment(fragment: &str) -> String {
    fragment
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_or_empty_input() {
        assert!(parse_allergens(None).is_empty());
        assert!(parse_allergens(Some("")).is_empty());
        assert!(parse_allergens(Some("  ,; / ")).is_empty());
    }

    #[test]
    fn test_all_three_delimiters() {
        assert_eq!(
            parse_allergens(Some("gluten;huevo/soja,apio")),
            vec![
                AllergenTag::Gluten,
                AllergenTag::Huevo,
                AllergenTag::Soja,
                AllergenTag::Apio
            ]
        );
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        for raw in ["Frutos Secos", "frutos   secos", " FRUTOS_SECOS ", "frutos\tSecos"] {
            assert_eq!(
                parse_allergens(Some(raw)),
                vec![AllergenTag::FrutosSecos],
                "input {raw:?}"
            );
        }
        assert_eq!(
            parse_allergens(Some("  GLUTEN  ,   Lacteos ")),
            vec![AllergenTag::Gluten, AllergenTag::Lacteos]
        );
    }

    #[test]
    fn test_unknown_fragment_dropped() {
        assert_eq!(
            parse_allergens(Some("gluten, marciano, lacteos")),
            vec![AllergenTag::Gluten, AllergenTag::Lacteos]
        );
    }

    #[test]
    fn test_keeps_input_order_and_duplicates() {
        assert_eq!(
            parse_allergens(Some("sulfitos, gluten, gluten")),
            vec![
                AllergenTag::Sulfitos,
                AllergenTag::Gluten,
                AllergenTag::Gluten
            ]
        );
    }

    #[test]
    fn test_accented_label_is_not_a_key() {
        // Только ключи таблицы, не подписи.
        assert!(parse_allergens(Some("Lácteos, Sésamo")).is_empty());
    }

    #[test]
    fn test_normalize_fragment() {
        assert_eq!(normalize_fragment("  Frutos   Secos "), "frutos_secos");
        assert_eq!(normalize_fragment(""), "");
    }
}
