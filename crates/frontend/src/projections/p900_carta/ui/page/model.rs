use contracts::projections::p900_carta::MenuResponse;
use gloo_net::http::Request;

const MENU_URL: &str = "/api/menu";

/// Fetch the dishes and header settings of the carta
pub async fn fetch_menu() -> Result<MenuResponse, String> {
    let response = Request::get(MENU_URL)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(format!("HTTP {}: {}", response.status(), body));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
