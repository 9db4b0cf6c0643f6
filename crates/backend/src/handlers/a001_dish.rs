use axum::Json;
use contracts::projections::p900_carta::dto::MenuResponse;

use crate::domain::a001_dish::{service, MenuError};
use crate::shared::config;

/// GET /api/menu
pub async fn get_menu() -> Result<Json<MenuResponse>, MenuError> {
    let config = config::get()?;
    let menu = service::load_menu(&config.menu).await?;
    Ok(Json(menu))
}
