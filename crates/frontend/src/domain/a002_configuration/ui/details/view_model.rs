use super::state::{CatalogStatus, ConfiguratorState, SelectionChange, SizeOption};
use crate::domain::a001_cabinet::api as cabinet_api;
use crate::domain::a002_configuration::api as configuration_api;
use leptos::prelude::*;

/// ViewModel for the cabinet configurator form
#[derive(Clone, Copy)]
pub struct ConfiguratorViewModel {
    pub state: RwSignal<ConfiguratorState>,
}

impl ConfiguratorViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ConfiguratorState::new()),
        }
    }

    /// Fetch the catalog once; there is no retry
    pub fn load_catalog(&self) {
        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            let result = cabinet_api::fetch_cabinets().await;
            match &result {
                Ok(catalog) => log::info!("Loaded {} cabinet definitions", catalog.len()),
                Err(e) => log::error!("Catalog load failed: {}", e),
            }
            state.update(|s| s.catalog_loaded(result));
        });
    }

    pub fn select(&self, change: SelectionChange) {
        self.state.update(|s| s.apply(change));
    }

    /// Submit the current selection; no-op unless the form is complete
    pub fn save_command(&self) {
        let Some(dto) = self.state.try_update(|s| s.begin_save()).flatten() else {
            return;
        };

        log::info!(
            "Saving configuration for cabinet {} ({})",
            dto.cabinet_code,
            dto.size.key()
        );
        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            let result = configuration_api::save_configuration(&dto).await;
            match &result {
                Ok(saved) => log::info!("Configuration saved with id {}", saved.id),
                Err(e) => log::warn!("Configuration save failed: {}", e),
            }
            state.update(|s| s.finish_save(result));
        });
    }

    // Derived signals. Memos keep unrelated edits from re-rendering the form.

    pub fn status(&self) -> Memo<CatalogStatus> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.status.clone()))
    }

    pub fn cabinet_options(&self) -> Memo<Vec<(String, String)>> {
        let state = self.state;
        Memo::new(move |_| {
            state.with(|s| {
                s.catalog
                    .iter()
                    .map(|c| (c.code.clone(), c.name.clone()))
                    .collect()
            })
        })
    }

    pub fn size_options(&self) -> Memo<Vec<SizeOption>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.available_sizes()))
    }

    pub fn material_options(&self) -> Memo<Vec<String>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.material_options()))
    }

    pub fn color_options(&self) -> Memo<Vec<String>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.color_options()))
    }

    pub fn has_active_module(&self) -> Memo<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.active_module().is_some()))
    }

    pub fn can_save(&self) -> Memo<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.can_save()))
    }

    pub fn saving(&self) -> Memo<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.saving))
    }

    pub fn saved_id(&self) -> Memo<Option<String>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.saved_id.clone()))
    }

    pub fn save_error(&self) -> Memo<Option<String>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.save_error.clone()))
    }

    pub fn field(&self, read: fn(&ConfiguratorState) -> String) -> Memo<String> {
        let state = self.state;
        Memo::new(move |_| state.with(read))
    }

    pub fn cabinet_name(&self) -> Memo<Option<String>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.active_cabinet().map(|c| c.name.clone())))
    }

    pub fn size_label(&self) -> Memo<Option<String>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.active_module().map(|m| m.size.label())))
    }

    pub fn selection_summary(&self) -> Memo<Option<String>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.selection_summary()))
    }
}
