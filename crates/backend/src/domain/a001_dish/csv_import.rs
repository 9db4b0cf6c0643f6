use contracts::domain::a001_dish::aggregate::DishRecord;

use super::error::MenuError;

/// Accepted header names per field, compared case-insensitively.
const NAME_COLUMNS: &[&str] = &["name", "nombre"];
const PRICE_COLUMNS: &[&str] = &["price", "precio"];
const DESCRIPTION_COLUMNS: &[&str] = &["description", "descripcion", "descripción"];
const CATEGORY_COLUMNS: &[&str] = &["category", "categoria", "categoría"];
const PHOTO_COLUMNS: &[&str] = &["photourl", "photo_url", "photo", "foto"];
const ALLERGEN_COLUMNS: &[&str] = &[
    "allergensraw",
    "allergens_raw",
    "allergens",
    "alergenos",
    "alérgenos",
];

/// Column positions resolved once from the header row.
#[derive(Debug, Clone, Copy)]
struct Columns {
    name: usize,
    price: usize,
    description: Option<usize>,
    category: Option<usize>,
    photo_url: Option<usize>,
    allergens_raw: Option<usize>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, MenuError> {
        let find = |aliases: &[&str]| {
            headers.iter().position(|h| {
                let h = h.trim().to_lowercase();
                aliases.iter().any(|a| *a == h)
            })
        };

        Ok(Self {
            name: find(NAME_COLUMNS).ok_or(MenuError::MissingColumn("name"))?,
            price: find(PRICE_COLUMNS).ok_or(MenuError::MissingColumn("price"))?,
            description: find(DESCRIPTION_COLUMNS),
            category: find(CATEGORY_COLUMNS),
            photo_url: find(PHOTO_COLUMNS),
            allergens_raw: find(ALLERGEN_COLUMNS),
        })
    }
}

/// Parse dish rows from a spreadsheet CSV export.
///
/// Cells are trimmed and empty cells become absent fields. Rows without a
/// dish name and rows the reader cannot decode are skipped with a warning.
pub fn parse_menu_csv(csv_text: &str) -> Result<Vec<DishRecord>, MenuError> {
    // Strip UTF-8 BOM if present
    let text = csv_text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = Columns::resolve(&headers)?;

    let mut dishes = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Skipping malformed menu row {}: {}", row + 1, e);
                continue;
            }
        };

        let cell = |index: Option<usize>| -> Option<String> {
            index
                .and_then(|i| record.get(i))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let Some(name) = cell(Some(columns.name)) else {
            tracing::warn!("Skipping menu row {} without a dish name", row + 1);
            continue;
        };

        dishes.push(DishRecord {
            name,
            price: cell(Some(columns.price)).unwrap_or_default(),
            description: cell(columns.description),
            category: cell(columns.category),
            photo_url: cell(columns.photo_url),
            allergens_raw: cell(columns.allergens_raw),
        });
    }

    Ok(dishes)
}
