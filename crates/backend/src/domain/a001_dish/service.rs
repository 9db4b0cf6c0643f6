use contracts::projections::p900_carta::dto::MenuResponse;

use super::csv_import::parse_menu_csv;
use super::error::MenuError;
use crate::shared::config::{MenuConfig, MenuSource};

/// Reads the configured source and builds the payload for the carta.
///
/// The source is read on every call so edits to the spreadsheet show up on
/// the next page load.
pub async fn load_menu(config: &MenuConfig) -> Result<MenuResponse, MenuError> {
    let csv_text = read_source(&config.source()).await?;
    let dishes = parse_menu_csv(&csv_text)?;

    tracing::info!("Loaded {} dishes from {}", dishes.len(), config.source);

    Ok(MenuResponse {
        restaurant_name: config.restaurant_name.clone(),
        logo_url: config.logo_url(),
        dishes,
    })
}

async fn read_source(source: &MenuSource) -> Result<String, MenuError> {
    match source {
        MenuSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| MenuError::Read {
                    path: path.clone(),
                    source,
                })
        }
        MenuSource::Url(url) => {
            let text = reqwest::get(url)
                .await?
                .error_for_status()?
                .text()
                .await?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(path: &std::path::Path) -> MenuConfig {
        MenuConfig {
            source: path.display().to_string(),
            restaurant_name: "Casa Pepe".to_string(),
            logo_url: Some("https://example.com/logo.png".to_string()),
        }
    }

    #[tokio::test]
    async fn test_load_menu_from_file() {
        let path = std::env::temp_dir().join(format!("carta-{}.csv", std::process::id()));
        std::fs::write(
            &path,
            "nombre,precio,categoria,alergenos\nTarta,4€,Postres,gluten/lacteos\nSopa,5€,,\n",
        )
        .unwrap();

        let menu = load_menu(&config_for(&path)).await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(menu.restaurant_name, "Casa Pepe");
        assert_eq!(menu.logo_url.as_deref(), Some("https://example.com/logo.png"));
        assert_eq!(menu.dishes.len(), 2);
        assert_eq!(menu.categories().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let path = std::env::temp_dir().join("carta-does-not-exist.csv");
        let err = load_menu(&config_for(&path)).await.unwrap_err();
        assert!(matches!(err, MenuError::Read { .. }));
    }
}
