//! Configurator state and its transition rules
//!
//! Every mutation goes through [`ConfiguratorState::apply`],
//! [`ConfiguratorState::catalog_loaded`], [`ConfiguratorState::begin_save`] or
//! [`ConfiguratorState::finish_save`]. Derived values are recomputed from the
//! current state on demand.

use contracts::domain::a001_cabinet::aggregate::{CabinetDefinition, ModuleSize, ModuleVariant};
use contracts::domain::a002_configuration::aggregate::{
    ConfigurationForm, SaveConfigurationDto, SavedConfiguration,
};

use crate::shared::error::ConfiguratorError;

/// Catalog loading phase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// In-progress user choices; empty string means "not selected"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub cabinet_code: String,
    pub size_key: String,
    pub material: String,
    pub color: String,
    pub customer: String,
    pub notes: String,
}

/// A single user edit of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Cabinet(String),
    Size(String),
    Material(String),
    Color(String),
    Customer(String),
    Notes(String),
}

/// Entry of the size select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeOption {
    pub key: String,
    pub label: String,
    pub size: ModuleSize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfiguratorState {
    pub status: CatalogStatus,
    pub catalog: Vec<CabinetDefinition>,
    pub selection: SelectionState,
    pub saving: bool,
    pub save_error: Option<String>,
    pub saved_id: Option<String>,
}

impl ConfiguratorState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------

    /// Store the catalog fetch outcome; the first cabinet becomes the default selection
    pub fn catalog_loaded(&mut self, result: Result<Vec<CabinetDefinition>, ConfiguratorError>) {
        match result {
            Ok(catalog) => {
                let first_code = catalog.first().map(|c| c.code.clone());
                self.catalog = catalog;
                self.status = CatalogStatus::Ready;
                if let Some(code) = first_code {
                    self.apply(SelectionChange::Cabinet(code));
                }
            }
            Err(e) => {
                self.status = CatalogStatus::Failed(e.to_string());
            }
        }
    }

    // ------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------

    pub fn active_cabinet(&self) -> Option<&CabinetDefinition> {
        let code = &self.selection.cabinet_code;
        if code.is_empty() {
            return None;
        }
        self.catalog.iter().find(|c| &c.code == code)
    }

    pub fn available_sizes(&self) -> Vec<SizeOption> {
        self.active_cabinet()
            .map(|cabinet| {
                cabinet
                    .modules
                    .iter()
                    .map(|m| SizeOption {
                        key: m.size.key(),
                        label: m.size.label(),
                        size: m.size,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn active_module(&self) -> Option<&ModuleVariant> {
        self.active_cabinet()
            .and_then(|cabinet| cabinet.module_by_key(&self.selection.size_key))
    }

    pub fn material_options(&self) -> Vec<String> {
        self.active_module()
            .map(|m| m.materials.clone())
            .unwrap_or_default()
    }

    pub fn color_options(&self) -> Vec<String> {
        self.active_module()
            .map(|m| m.colors.clone())
            .unwrap_or_default()
    }

    pub fn can_save(&self) -> bool {
        self.active_cabinet().is_some()
            && self.active_module().is_some()
            && !self.selection.material.is_empty()
            && !self.selection.color.is_empty()
    }

    /// "MDF in White" once both material and color are chosen
    pub fn selection_summary(&self) -> Option<String> {
        let s = &self.selection;
        if s.material.is_empty() || s.color.is_empty() {
            None
        } else {
            Some(format!("{} in {}", s.material, s.color))
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Apply a user edit, clearing every field downstream of the edited one.
    ///
    /// Values outside the current option lists are rejected and leave the
    /// state untouched; an empty value always means "clear".
    pub fn apply(&mut self, change: SelectionChange) {
        match change {
            SelectionChange::Cabinet(code) => {
                if !code.is_empty() && !self.catalog.iter().any(|c| c.code == code) {
                    log::warn!("Ignoring unknown cabinet code '{}'", code);
                    return;
                }
                self.selection.cabinet_code = code;
                self.clear_from_size();
            }
            SelectionChange::Size(key) => {
                let known = self
                    .active_cabinet()
                    .map_or(false, |c| c.module_by_key(&key).is_some());
                if !key.is_empty() && !known {
                    log::warn!("Ignoring size '{}' not offered by the active cabinet", key);
                    return;
                }
                self.selection.size_key = key;
                self.clear_from_material();
            }
            SelectionChange::Material(material) => {
                let allowed = self
                    .active_module()
                    .map_or(false, |m| m.allows_material(&material));
                if !material.is_empty() && !allowed {
                    log::warn!("Ignoring material '{}' not offered by the active module", material);
                    return;
                }
                self.selection.material = material;
                self.saved_id = None;
            }
            SelectionChange::Color(color) => {
                let allowed = self
                    .active_module()
                    .map_or(false, |m| m.allows_color(&color));
                if !color.is_empty() && !allowed {
                    log::warn!("Ignoring color '{}' not offered by the active module", color);
                    return;
                }
                self.selection.color = color;
                self.saved_id = None;
            }
            SelectionChange::Customer(customer) => self.selection.customer = customer,
            SelectionChange::Notes(notes) => self.selection.notes = notes,
        }
    }

    fn clear_from_size(&mut self) {
        self.selection.size_key.clear();
        self.clear_from_material();
    }

    fn clear_from_material(&mut self) {
        self.selection.material.clear();
        self.selection.color.clear();
        self.saved_id = None;
    }

    /// Enter the saving phase and build the request body.
    ///
    /// Returns `None` and leaves the state untouched when the selection is
    /// incomplete or a save is already in flight.
    pub fn begin_save(&mut self) -> Option<SaveConfigurationDto> {
        if self.saving || !self.can_save() {
            return None;
        }
        let cabinet = self.active_cabinet()?;
        let module = self.active_module()?;
        let s = &self.selection;
        let dto = SaveConfigurationDto::from_form(&ConfigurationForm {
            customer: &s.customer,
            cabinet_code: &cabinet.code,
            size: module.size,
            material: &s.material,
            color: &s.color,
            notes: &s.notes,
        });

        self.saving = true;
        self.save_error = None;
        self.saved_id = None;
        Some(dto)
    }

    /// Leave the saving phase with the request outcome
    pub fn finish_save(&mut self, result: Result<SavedConfiguration, ConfiguratorError>) {
        match result {
            Ok(saved) => self.saved_id = Some(saved.id),
            Err(e) => {
                self.saved_id = None;
                self.save_error = Some(e.to_string());
            }
        }
        self.saving = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Vec<CabinetDefinition> {
        serde_json::from_value(json!([
            {
                "code": "A",
                "name": "Base",
                "modules": [
                    {"size": {"width": 600, "height": 720, "depth": 580}, "materials": ["MDF"], "colors": ["White"]}
                ]
            },
            {
                "code": "W",
                "name": "Wall",
                "modules": [
                    {"size": {"width": 400, "height": 360, "depth": 320}, "materials": ["MDF", "Oak"], "colors": ["White", "Black"]},
                    {"size": {"width": 800, "height": 360, "depth": 320}, "materials": ["Oak"], "colors": ["Natural"]}
                ]
            }
        ]))
        .unwrap()
    }

    fn loaded() -> ConfiguratorState {
        let mut state = ConfiguratorState::new();
        state.catalog_loaded(Ok(catalog()));
        state
    }

    fn ready_to_save() -> ConfiguratorState {
        let mut state = loaded();
        state.apply(SelectionChange::Size("600x720x580".into()));
        state.apply(SelectionChange::Material("MDF".into()));
        state.apply(SelectionChange::Color("White".into()));
        state
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = ConfiguratorState::new();
        assert_eq!(state.status, CatalogStatus::Loading);
        assert!(!state.can_save());
        assert!(!state.saving);
    }

    #[test]
    fn test_first_cabinet_selected_after_load() {
        let state = loaded();
        assert_eq!(state.status, CatalogStatus::Ready);
        assert_eq!(state.selection.cabinet_code, "A");
        assert_eq!(state.active_cabinet().unwrap().name, "Base");
    }

    #[test]
    fn test_empty_catalog_leaves_everything_empty() {
        let mut state = ConfiguratorState::new();
        state.catalog_loaded(Ok(Vec::new()));
        assert_eq!(state.status, CatalogStatus::Ready);
        assert_eq!(state.selection, SelectionState::default());
        assert!(state.active_cabinet().is_none());
        assert!(state.available_sizes().is_empty());
        assert!(state.material_options().is_empty());
        assert!(!state.can_save());
    }

    #[test]
    fn test_load_failure_keeps_message() {
        let mut state = ConfiguratorState::new();
        state.catalog_loaded(Err(ConfiguratorError::Load("Failed to load catalog".into())));
        assert_eq!(
            state.status,
            CatalogStatus::Failed("Failed to load catalog".to_string())
        );
        assert!(state.catalog.is_empty());
    }

    #[test]
    fn test_scenario_single_module_enables_save() {
        let mut state = loaded();
        let sizes = state.available_sizes();
        assert_eq!(sizes.len(), 1);
        assert_eq!(sizes[0].label, "600×720×580 mm");
        assert!(state.material_options().is_empty());

        state.apply(SelectionChange::Size(sizes[0].key.clone()));
        assert_eq!(state.material_options(), vec!["MDF"]);
        assert_eq!(state.color_options(), vec!["White"]);
        assert!(!state.can_save());

        state.apply(SelectionChange::Material("MDF".into()));
        assert!(!state.can_save());
        state.apply(SelectionChange::Color("White".into()));
        assert!(state.can_save());
        assert_eq!(state.selection_summary().as_deref(), Some("MDF in White"));
    }

    #[test]
    fn test_cabinet_change_clears_downstream() {
        let mut state = ready_to_save();
        state.saved_id = Some("abc123".into());

        state.apply(SelectionChange::Cabinet("W".into()));
        assert_eq!(state.selection.cabinet_code, "W");
        assert_eq!(state.selection.size_key, "");
        assert_eq!(state.selection.material, "");
        assert_eq!(state.selection.color, "");
        assert_eq!(state.saved_id, None);
        assert_eq!(state.available_sizes().len(), 2);
    }

    #[test]
    fn test_reselecting_same_cabinet_still_resets() {
        let mut state = ready_to_save();
        state.apply(SelectionChange::Cabinet("A".into()));
        assert_eq!(state.selection.size_key, "");
        assert!(!state.can_save());
    }

    #[test]
    fn test_size_change_clears_material_and_color() {
        let mut state = loaded();
        state.apply(SelectionChange::Cabinet("W".into()));
        state.apply(SelectionChange::Size("400x360x320".into()));
        state.apply(SelectionChange::Material("Oak".into()));
        state.apply(SelectionChange::Color("Black".into()));
        state.saved_id = Some("abc123".into());

        state.apply(SelectionChange::Size("800x360x320".into()));
        assert_eq!(state.selection.cabinet_code, "W");
        assert_eq!(state.selection.size_key, "800x360x320");
        assert_eq!(state.selection.material, "");
        assert_eq!(state.selection.color, "");
        assert_eq!(state.saved_id, None);
        assert_eq!(state.material_options(), vec!["Oak"]);
    }

    #[test]
    fn test_material_change_keeps_other_fields() {
        let mut state = loaded();
        state.apply(SelectionChange::Cabinet("W".into()));
        state.apply(SelectionChange::Size("400x360x320".into()));
        state.apply(SelectionChange::Color("Black".into()));
        state.apply(SelectionChange::Customer("ACME".into()));

        state.apply(SelectionChange::Material("Oak".into()));
        assert_eq!(state.selection.size_key, "400x360x320");
        assert_eq!(state.selection.color, "Black");
        assert_eq!(state.selection.customer, "ACME");

        state.apply(SelectionChange::Color("White".into()));
        assert_eq!(state.selection.material, "Oak");
    }

    #[test]
    fn test_free_text_does_not_cascade() {
        let mut state = ready_to_save();
        state.saved_id = Some("abc123".into());
        state.apply(SelectionChange::Customer("ACME Kitchens".into()));
        state.apply(SelectionChange::Notes("rush order".into()));
        assert!(state.can_save());
        assert_eq!(state.saved_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_values_outside_option_lists_are_rejected() {
        let mut state = ready_to_save();
        let before = state.clone();

        state.apply(SelectionChange::Cabinet("ZZ".into()));
        state.apply(SelectionChange::Size("1x1x1".into()));
        state.apply(SelectionChange::Material("Oak".into()));
        state.apply(SelectionChange::Color("Black".into()));
        assert_eq!(state, before);
    }

    #[test]
    fn test_material_requires_active_module() {
        let mut state = loaded();
        state.apply(SelectionChange::Material("MDF".into()));
        assert_eq!(state.selection.material, "");
    }

    #[test]
    fn test_can_save_requires_every_field() {
        let full = ready_to_save();
        assert!(full.can_save());

        let mut no_color = full.clone();
        no_color.apply(SelectionChange::Color(String::new()));
        assert!(!no_color.can_save());

        let mut no_material = full.clone();
        no_material.apply(SelectionChange::Material(String::new()));
        assert!(!no_material.can_save());

        let mut no_size = full.clone();
        no_size.apply(SelectionChange::Size(String::new()));
        assert!(!no_size.can_save());

        let mut no_cabinet = full;
        no_cabinet.apply(SelectionChange::Cabinet(String::new()));
        assert!(!no_cabinet.can_save());
    }

    #[test]
    fn test_begin_save_builds_request() {
        let mut state = ready_to_save();
        state.save_error = Some("previous".into());

        let dto = state.begin_save().unwrap();
        assert!(state.saving);
        assert_eq!(state.save_error, None);
        assert_eq!(state.saved_id, None);
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "customer": null,
                "cabinet_code": "A",
                "size": {"width": 600, "height": 720, "depth": 580},
                "material": "MDF",
                "color": "White",
                "notes": null
            })
        );
    }

    #[test]
    fn test_begin_save_keeps_free_text_fields_apart() {
        let mut state = loaded();
        state.apply(SelectionChange::Cabinet("W".into()));
        state.apply(SelectionChange::Size("400x360x320".into()));
        state.apply(SelectionChange::Material("Oak".into()));
        state.apply(SelectionChange::Color("Black".into()));
        state.apply(SelectionChange::Customer("ACME Kitchens".into()));
        state.apply(SelectionChange::Notes("rush order".into()));

        let dto = state.begin_save().unwrap();
        assert_eq!(dto.customer.as_deref(), Some("ACME Kitchens"));
        assert_eq!(dto.notes.as_deref(), Some("rush order"));
        assert_eq!(dto.material, "Oak");
        assert_eq!(dto.color, "Black");
        assert_eq!(dto.cabinet_code, "W");
        assert_eq!(dto.size, ModuleSize::new(400, 360, 320));
    }

    #[test]
    fn test_begin_save_is_noop_when_incomplete() {
        let mut state = loaded();
        state.save_error = Some("previous".into());
        let before = state.clone();
        assert!(state.begin_save().is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_begin_save_refuses_overlapping_requests() {
        let mut state = ready_to_save();
        assert!(state.begin_save().is_some());
        assert!(state.begin_save().is_none());
        assert!(state.saving);
    }

    #[test]
    fn test_save_success_stores_id() {
        let mut state = ready_to_save();
        state.begin_save().unwrap();
        state.finish_save(Ok(SavedConfiguration {
            id: "abc123".into(),
        }));
        assert!(!state.saving);
        assert_eq!(state.saved_id.as_deref(), Some("abc123"));
        assert_eq!(state.save_error, None);
    }

    #[test]
    fn test_save_failure_keeps_form_and_allows_retry() {
        let mut state = ready_to_save();
        state.begin_save().unwrap();
        state.finish_save(Err(ConfiguratorError::Save("Invalid material".into())));
        assert!(!state.saving);
        assert_eq!(state.saved_id, None);
        assert_eq!(state.save_error.as_deref(), Some("Invalid material"));
        assert_eq!(state.status, CatalogStatus::Ready);

        assert!(state.begin_save().is_some());
        assert_eq!(state.save_error, None);
    }
}
