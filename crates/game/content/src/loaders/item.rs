//! Item catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::ItemTemplate;
use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<(String, ItemTemplate)>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// Returns `(key, template)` pairs in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<(String, ItemTemplate)>> {
        let content = read_file(path)?;
        let catalog: ItemCatalog = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse item catalog {}: {}", path.display(), e)
        })?;

        info!(
            target: "corridor::content",
            path = %path.display(),
            count = catalog.items.len(),
            "loaded item catalog"
        );
        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corridor_core::{EquipmentType, WeaponTraits};
    use std::io::Write;

    #[test]
    fn omitted_fields_take_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(
                items: [
                    ("bfg", (
                        name: "BFG",
                        gear: Some((
                            equipment_type: Gun,
                            bonus: (ranged: 9999),
                            traits: "FULLY_ACCURATE | UNJAMMABLE",
                            durability: 9999,
                            max_ammo: 9999,
                        )),
                    )),
                    ("fists", (
                        name: "Fists",
                        gear: Some((equipment_type: Melee)),
                    )),
                    ("stimpak", (name: "Stimpak", consumable: Some((1)))),
                ],
            )"#
        )
        .unwrap();

        let items = ItemLoader::load(file.path()).unwrap();
        assert_eq!(items.len(), 3);

        let bfg = items[0].1.gear.as_ref().unwrap();
        assert_eq!(bfg.equipment_type, EquipmentType::Gun);
        assert_eq!(bfg.bonus.ranged, 9999);
        assert_eq!(bfg.traits, WeaponTraits::all());

        let fists = items[1].1.gear.as_ref().unwrap();
        assert_eq!(fists.durability, 255);
        assert_eq!(fists.max_ammo, 255);
        assert!(fists.traits.is_empty());

        assert!(items[2].1.gear.is_none());
        assert!(items[2].1.consumable.is_some());
    }

    #[test]
    fn parse_errors_name_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(items: [(\"knife\", (name: 4))])").unwrap();

        let err = ItemLoader::load(file.path()).unwrap_err().to_string();
        assert!(err.starts_with("Failed to parse item catalog"));
        assert!(err.contains(&file.path().display().to_string()));
    }
}
