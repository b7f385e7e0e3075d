//! Static body templates.
//!
//! Two layouts are embedded, loaded from JSON at startup and never mutated:
//! `v1` is the classic tight layout, `v2` spreads the planets out and adds an
//! asteroid belt between Mars and Jupiter.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::body::BodyId;
use crate::error::{CatalogError, CatalogResult};

const CATALOG_V1_JSON: &str = include_str!("../data/catalog-v1.json");
const CATALOG_V2_JSON: &str = include_str!("../data/catalog-v2.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogVersion {
    V1,
    #[default]
    V2,
}

impl CatalogVersion {
    fn json(self) -> &'static str {
        match self {
            CatalogVersion::V1 => CATALOG_V1_JSON,
            CatalogVersion::V2 => CATALOG_V2_JSON,
        }
    }
}

/// Immutable template for one planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Orbit radius in world units.
    pub distance: f32,
    /// Visual radius in world units.
    pub size: f32,
    /// Packed `0xRRGGBB`.
    pub color: u32,
    /// Default angular speed, radians per 1/60 s.
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunSpec {
    pub size: f32,
    pub color: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeltSpec {
    pub inner: f32,
    pub outer: f32,
    pub count: usize,
    /// Full vertical spread of the belt.
    pub thickness: f32,
    pub speed: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub color: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub version: CatalogVersion,
    pub sun: SunSpec,
    pub planets: Vec<CatalogEntry>,
    #[serde(default)]
    pub belt: Option<BeltSpec>,
}

impl Catalog {
    /// Load one of the embedded catalogs.
    pub fn load(version: CatalogVersion) -> CatalogResult<Self> {
        Self::from_json(version.json())
    }

    /// Parse and validate a catalog.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> CatalogResult<()> {
        if self.planets.is_empty() {
            return Err(CatalogError::Empty);
        }
        positive("Sun", "size", self.sun.size)?;

        let mut seen = HashSet::new();
        for entry in &self.planets {
            if !seen.insert(entry.name.as_str()) {
                return Err(CatalogError::DuplicateName(entry.name.clone()));
            }
            positive(&entry.name, "distance", entry.distance)?;
            positive(&entry.name, "size", entry.size)?;
        }

        if let Some(belt) = &self.belt {
            if belt.inner <= 0.0 || belt.outer <= belt.inner {
                return Err(CatalogError::BeltRange { inner: belt.inner, outer: belt.outer });
            }
            positive("belt", "min_size", belt.min_size)?;
            positive("belt", "max_size", belt.max_size)?;
            if belt.min_size > belt.max_size {
                return Err(CatalogError::BeltSizeRange { min: belt.min_size, max: belt.max_size });
            }
        }
        Ok(())
    }

    pub fn get(&self, id: BodyId) -> Option<&CatalogEntry> {
        self.planets.get(id.0)
    }

    pub fn index_of(&self, name: &str) -> Option<BodyId> {
        self.planets.iter().position(|e| e.name == name).map(BodyId)
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn positive(name: &str, field: &'static str, value: f32) -> CatalogResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(CatalogError::NonPositive { name: name.to_string(), field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalogs_load() {
        let v1 = Catalog::load(CatalogVersion::V1).expect("v1 should load");
        let v2 = Catalog::load(CatalogVersion::V2).expect("v2 should load");
        assert_eq!(v1.len(), 8);
        assert_eq!(v2.len(), 8);
        assert_eq!(v1.version, CatalogVersion::V1);
        assert!(v1.belt.is_none());
        assert_eq!(v2.belt.map(|b| b.count), Some(300));
    }

    #[test]
    fn v2_layout_values() {
        let v2 = Catalog::load(CatalogVersion::V2).unwrap();
        let earth = v2.get(v2.index_of("Earth").unwrap()).unwrap();
        assert_eq!(earth.distance, 27.0);
        assert_eq!(earth.speed, 0.01);
        assert_eq!(earth.color, 0x3399ff);

        let mars = v2.get(v2.index_of("Mars").unwrap()).unwrap();
        assert_eq!(mars.distance, 35.0);
        assert_eq!(mars.size, 2.8);
    }

    #[test]
    fn v1_matches_classic_layout() {
        let v1 = Catalog::load(CatalogVersion::V1).unwrap();
        let names: Vec<&str> = v1.planets.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            ["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
        assert_eq!(v1.planets[7].distance, 70.0);
        assert_eq!(v1.sun.size, 6.0);
        assert_eq!(v1.sun.color, 0xffff00);
    }

    #[test]
    fn rejects_bad_catalogs() {
        let empty = r#"{"version":"v1","sun":{"size":6,"color":0},"planets":[]}"#;
        assert!(matches!(Catalog::from_json(empty), Err(CatalogError::Empty)));

        let dup = r#"{"version":"v1","sun":{"size":6,"color":0},"planets":[
            {"name":"A","distance":1,"size":1,"color":0,"speed":0.01},
            {"name":"A","distance":2,"size":1,"color":0,"speed":0.01}]}"#;
        assert!(matches!(Catalog::from_json(dup), Err(CatalogError::DuplicateName(n)) if n == "A"));

        let zero = r#"{"version":"v1","sun":{"size":6,"color":0},"planets":[
            {"name":"A","distance":0,"size":1,"color":0,"speed":0.01}]}"#;
        assert!(matches!(
            Catalog::from_json(zero),
            Err(CatalogError::NonPositive { field: "distance", .. })
        ));

        let belt = r#"{"version":"v2","sun":{"size":6,"color":0},"planets":[
            {"name":"A","distance":1,"size":1,"color":0,"speed":0.01}],
            "belt":{"inner":10,"outer":5,"count":1,"thickness":1,"speed":0.1,
                    "min_size":0.1,"max_size":0.2,"color":0}}"#;
        assert!(matches!(Catalog::from_json(belt), Err(CatalogError::BeltRange { .. })));

        let sizes = r#"{"version":"v2","sun":{"size":6,"color":0},"planets":[
            {"name":"A","distance":1,"size":1,"color":0,"speed":0.01}],
            "belt":{"inner":5,"outer":10,"count":1,"thickness":1,"speed":0.1,
                    "min_size":0.4,"max_size":0.2,"color":0}}"#;
        assert!(matches!(
            Catalog::from_json(sizes),
            Err(CatalogError::BeltSizeRange { min, max }) if min == 0.4 && max == 0.2
        ));

        let tiny = sizes.replace("\"min_size\":0.4", "\"min_size\":0");
        assert!(matches!(
            Catalog::from_json(&tiny),
            Err(CatalogError::NonPositive { field: "min_size", .. })
        ));

        assert!(matches!(Catalog::from_json("not json"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn json_round_trip_keeps_layout() {
        let v2 = Catalog::load(CatalogVersion::V2).unwrap();
        let json = v2.to_json().unwrap();
        assert!(json.contains("\"Neptune\""));
        assert_eq!(Catalog::from_json(&json).unwrap(), v2);
    }
}
