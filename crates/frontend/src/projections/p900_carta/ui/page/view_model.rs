use super::model;
use contracts::projections::p900_carta::MenuResponse;
use leptos::prelude::*;

/// ViewModel for the page that loads the carta
#[derive(Clone, Copy)]
pub struct CartaPageViewModel {
    pub menu: RwSignal<Option<MenuResponse>>,
    pub error: RwSignal<Option<String>>,
}

impl CartaPageViewModel {
    pub fn new() -> Self {
        Self {
            menu: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.menu.with(Option::is_none) && self.error.with(Option::is_none)
    }

    pub fn load(&self) {
        let menu = self.menu;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_menu().await {
                Ok(payload) => {
                    log::info!(
                        "carta loaded: {} dishes for '{}'",
                        payload.dishes.len(),
                        payload.restaurant_name
                    );
                    error.set(None);
                    menu.set(Some(payload));
                }
                Err(e) => {
                    log::error!("carta load failed: {}", e);
                    error.set(Some(format!("No se pudo cargar la carta: {}", e)));
                }
            }
        });
    }
}

impl Default for CartaPageViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_until_menu_or_error() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = CartaPageViewModel::new();
            assert!(vm.is_loading());

            vm.error.set(Some("HTTP 502".to_string()));
            assert!(!vm.is_loading());

            let vm = CartaPageViewModel::new();
            vm.menu.set(Some(MenuResponse::default()));
            assert!(!vm.is_loading());
        });
    }
}
