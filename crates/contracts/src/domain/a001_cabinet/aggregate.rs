use serde::{Deserialize, Serialize};

// ============================================================================
// Module size
// ============================================================================

/// Outer dimensions of a cabinet module, in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleSize {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl ModuleSize {
    pub fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Composite key used to identify a module inside its cabinet: `600x720x580`
    pub fn key(&self) -> String {
        format!("{}x{}x{}", self.width, self.height, self.depth)
    }

    /// Human readable label: `600×720×580 mm`
    pub fn label(&self) -> String {
        format!("{}×{}×{} mm", self.width, self.height, self.depth)
    }
}

// ============================================================================
// Module variant
// ============================================================================

/// One size option of a cabinet with the materials and colors it comes in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleVariant {
    pub size: ModuleSize,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
}

impl ModuleVariant {
    pub fn allows_material(&self, material: &str) -> bool {
        self.materials.iter().any(|m| m == material)
    }

    pub fn allows_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }
}

// ============================================================================
// Cabinet definition
// ============================================================================

/// Catalog entry returned by `GET /api/cabinets`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CabinetDefinition {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub modules: Vec<ModuleVariant>,
}

impl CabinetDefinition {
    /// Find the module whose composite size key equals `size_key`
    pub fn module_by_key(&self, size_key: &str) -> Option<&ModuleVariant> {
        if size_key.is_empty() {
            return None;
        }
        self.modules.iter().find(|m| m.size.key() == size_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_cabinet() -> CabinetDefinition {
        serde_json::from_str(
            r#"{
                "code": "A",
                "name": "Base",
                "modules": [
                    {"size": {"width": 600, "height": 720, "depth": 580}, "materials": ["MDF"], "colors": ["White"]},
                    {"size": {"width": 400, "height": 720, "depth": 580}, "materials": ["MDF", "Oak"], "colors": ["White", "Black"]}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_size_key_and_label() {
        let size = ModuleSize::new(600, 720, 580);
        assert_eq!(size.key(), "600x720x580");
        assert_eq!(size.label(), "600×720×580 mm");
    }

    #[test]
    fn test_module_by_key() {
        let cabinet = base_cabinet();
        let module = cabinet.module_by_key("400x720x580").unwrap();
        assert_eq!(module.materials, vec!["MDF", "Oak"]);
        assert!(cabinet.module_by_key("").is_none());
        assert!(cabinet.module_by_key("1x1x1").is_none());
    }

    #[test]
    fn test_allowed_sets() {
        let cabinet = base_cabinet();
        let module = &cabinet.modules[0];
        assert!(module.allows_material("MDF"));
        assert!(!module.allows_material("Oak"));
        assert!(module.allows_color("White"));
        assert!(!module.allows_color("Black"));
    }

    #[test]
    fn test_modules_default_to_empty() {
        let cabinet: CabinetDefinition =
            serde_json::from_str(r#"{"code": "B", "name": "Wall"}"#).unwrap();
        assert!(cabinet.modules.is_empty());
    }
}
