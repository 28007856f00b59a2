//! Tile type registry, grouped by the content pack that registered each type.

use std::collections::HashMap;
use std::fmt;

use tile_display::TileTypeId;

/// Pack name of the bundled add-on content.
pub const EXTRAS_PACK: &str = "Silicate Extras";

/// A registered tile type.
#[derive(Debug, Clone, PartialEq)]
pub struct TileKind {
    pub id: TileTypeId,
    /// Raw identifier, e.g. `StoneBlock`.
    pub name: String,
    /// `None` for base-game types.
    pub pack: Option<String>,
    pub frame_important: bool,
    /// Base sRGB color of the generated sprite sheet.
    pub color: [u8; 3],
    /// Divides mining damage; 1.0 breaks in the default number of hits.
    pub hardness: f32,
}

/// Registration request for a tile type.
#[derive(Debug, Clone)]
pub struct TileDef {
    name: String,
    pack: Option<String>,
    frame_important: bool,
    color: [u8; 3],
    hardness: f32,
}

impl TileDef {
    pub fn new(name: &str, color: [u8; 3]) -> Self {
        Self {
            name: name.to_string(),
            pack: None,
            frame_important: false,
            color,
            hardness: 1.0,
        }
    }

    pub fn in_pack(mut self, pack: &str) -> Self {
        self.pack = Some(pack.to_string());
        self
    }

    pub fn frame_important(mut self) -> Self {
        self.frame_important = true;
        self
    }

    pub fn hardness(mut self, hardness: f32) -> Self {
        self.hardness = hardness;
        self
    }
}

/// Errors from registering tile types.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// A type with this identifier already exists.
    DuplicateName(String),
    /// Identifiers must be non-empty.
    EmptyName,
    /// Hardness must be a positive, finite number.
    InvalidHardness { name: String, hardness: f32 },
    /// Every `TileTypeId` is taken.
    Full,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateName(name) => {
                write!(f, "Tile type '{name}' is already registered")
            }
            RegistryError::EmptyName => write!(f, "Tile type name must not be empty"),
            RegistryError::InvalidHardness { name, hardness } => {
                write!(f, "Tile type '{name}' has invalid hardness {hardness}")
            }
            RegistryError::Full => write!(f, "No tile type ids left"),
        }
    }
}

impl std::error::Error for RegistryError {}

#[derive(Debug, Default)]
pub struct ContentRegistry {
    kinds: Vec<TileKind>,
    by_name: HashMap<String, TileTypeId>,
}

impl ContentRegistry {
    pub fn register(&mut self, def: TileDef) -> Result<TileTypeId, RegistryError> {
        if def.name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.by_name.contains_key(&def.name) {
            return Err(RegistryError::DuplicateName(def.name));
        }
        if !(def.hardness.is_finite() && def.hardness > 0.0) {
            return Err(RegistryError::InvalidHardness {
                name: def.name,
                hardness: def.hardness,
            });
        }
        let id = u16::try_from(self.kinds.len())
            .map(TileTypeId)
            .map_err(|_| RegistryError::Full)?;

        self.by_name.insert(def.name.clone(), id);
        self.kinds.push(TileKind {
            id,
            name: def.name,
            pack: def.pack,
            frame_important: def.frame_important,
            color: def.color,
            hardness: def.hardness,
        });
        Ok(id)
    }

    pub fn get(&self, id: TileTypeId) -> Option<&TileKind> {
        self.kinds.get(usize::from(id.0))
    }

    pub fn id_of(&self, name: &str) -> Option<TileTypeId> {
        self.by_name.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TileKind> {
        self.kinds.iter()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Register the base-game tiles followed by the bundled add-on pack.
    pub fn register_defaults(&mut self) -> Result<(), RegistryError> {
        let defs = [
            TileDef::new("DirtBlock", [151, 107, 75]),
            TileDef::new("StoneBlock", [128, 128, 128]).hardness(2.0),
            TileDef::new("Grass", [28, 216, 94]),
            TileDef::new("CopperOre", [150, 67, 22]).hardness(2.5),
            TileDef::new("IronOre", [140, 101, 80]).hardness(3.0),
            TileDef::new("TNT", [200, 40, 40]),
            TileDef::new("Torches", [253, 221, 3]).frame_important(),
            TileDef::new("SilicateCrystal", [120, 200, 230])
                .in_pack(EXTRAS_PACK)
                .hardness(4.0),
            TileDef::new("QuartzGlass", [225, 225, 240])
                .in_pack(EXTRAS_PACK)
                .hardness(1.5),
        ];
        for def in defs {
            self.register(def)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_assigns_sequential_ids() {
        let mut registry = ContentRegistry::default();
        let dirt = registry.register(TileDef::new("DirtBlock", [0, 0, 0])).unwrap();
        let stone = registry.register(TileDef::new("StoneBlock", [0, 0, 0])).unwrap();
        assert_eq!(dirt, TileTypeId(0));
        assert_eq!(stone, TileTypeId(1));
        assert_eq!(registry.id_of("StoneBlock"), Some(stone));
        assert_eq!(registry.get(stone).map(|k| k.name.as_str()), Some("StoneBlock"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = ContentRegistry::default();
        registry.register(TileDef::new("DirtBlock", [0, 0, 0])).unwrap();
        let err = registry
            .register(TileDef::new("DirtBlock", [1, 1, 1]).in_pack(EXTRAS_PACK))
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("DirtBlock".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut registry = ContentRegistry::default();
        assert_eq!(
            registry.register(TileDef::new("", [0, 0, 0])),
            Err(RegistryError::EmptyName)
        );
    }

    #[test]
    fn test_bad_hardness_rejected() {
        let mut registry = ContentRegistry::default();
        let err = registry
            .register(TileDef::new("Mud", [0, 0, 0]).hardness(0.0))
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidHardness { .. }));
    }

    #[test]
    fn test_defaults_split_base_and_pack() {
        let mut registry = ContentRegistry::default();
        registry.register_defaults().unwrap();

        let stone = registry.id_of("StoneBlock").unwrap();
        assert_eq!(registry.get(stone).unwrap().pack, None);

        let crystal = registry.id_of("SilicateCrystal").unwrap();
        assert_eq!(
            registry.get(crystal).unwrap().pack.as_deref(),
            Some(EXTRAS_PACK)
        );

        let torch = registry.id_of("Torches").unwrap();
        assert!(registry.get(torch).unwrap().frame_important);
    }

    #[test]
    fn test_registry_error_display() {
        let msg = format!("{}", RegistryError::DuplicateName("TNT".to_string()));
        assert!(msg.contains("TNT"), "got: {msg}");
        assert!(msg.contains("already registered"), "got: {msg}");
    }
}
