use serde::{Deserialize, Serialize};

/// layers of a rendered map, declared in drawing order. later layers draw on top.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MapLayer {
    BoundingBox,
    Demand,
    Boundary,
    Existing,
    Selected,
}

impl MapLayer {
    pub const PROPERTY: &'static str = "layer";

    pub fn as_str(&self) -> &'static str {
        match self {
            MapLayer::BoundingBox => "bbox",
            MapLayer::Demand => "demand",
            MapLayer::Boundary => "boundary",
            MapLayer::Existing => "existing",
            MapLayer::Selected => "selected",
        }
    }
}

impl std::fmt::Display for MapLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
