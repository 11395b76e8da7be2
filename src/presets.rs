// src/presets.rs

use crate::error::{FixtureError, Result};
use crate::generator::ScanRange;
use crate::geometry::{parse_points, Polygon};
use crate::number::parse_scalar;

pub const DEFAULT_PRESET: &str = "default";

/// A polygon used by the scanner tests, with the scan range its fixtures cover.
#[derive(Clone, Copy, Debug)]
pub struct Preset {
    pub name: &'static str,
    pub vertices: &'static str,
    pub min: &'static str,
    pub max: &'static str,
    pub step: &'static str,
}

impl Preset {
    pub fn polygon(&self) -> Result<Polygon> {
        Polygon::from_points(&parse_points(self.vertices)?)
    }

    pub fn range(&self) -> Result<ScanRange> {
        ScanRange::new(
            parse_scalar(self.min)?,
            parse_scalar(self.max)?,
            parse_scalar(self.step)?,
        )
    }
}

const fn preset(
    name: &'static str,
    vertices: &'static str,
    min: &'static str,
    max: &'static str,
    step: &'static str,
) -> Preset {
    Preset { name, vertices, min, max, step }
}

pub const PRESETS: &[Preset] = &[
    preset(
        DEFAULT_PRESET,
        "(1,3) (1,2) (5,2) (5,5) (2,5) (2,1) (3,1) (3,4) (4,4) (4,3) (1,3)",
        "1", "5", "0.5",
    ),
    preset("concave-1", "(0,0) (10,10) (20,0) (20,20) (0,20)", "0", "20", "1"),
    preset("concave-2", "(0,3) (3,3) (3,0) (1,2) (1,1) (0,0)", "0", "3", "0.5"),
    preset(
        "concave-3",
        "(0,0) (2,0) (3,1) (3,0) (6,0) (6,2) (5,2) (5,1) (4,1) (4,2) (2,2) (1,1) (0,2)",
        "0", "2", "0.2",
    ),
    preset("corner-a", "(2,2.5) (11,2.5) (11,3.25) (8,3.1) (5,3) (2,3)", "1.5", "5.5", "0.25"),
    preset("corner-b", "(12,2.5) (21,2.5) (21,3.2) (18,3.125) (15,3) (12,3)", "1.5", "5.5", "0.25"),
    preset("corner-c", "(2,3.4) (8,3.6) (8,4) (5,3.875) (2,4)", "1.5", "5.5", "0.25"),
    preset("corner-d", "(12,3.3) (18,3.6) (18,4) (15,3.87) (12,4)", "1.5", "5.5", "0.25"),
    preset("corner-e", "(3,4.4) (4,4.75) (6,4.6) (6,5) (2,5)", "1.5", "5.5", "0.25"),
    preset("corner-f", "(13,4.3) (14,4.75) (16,4.6) (16,5) (12,5)", "1.5", "5.5", "0.25"),
    preset("corner-g", "(2,2.25) (6,1.87) (10,2.25)", "1.5", "5.5", "0.25"),
    preset("corner-h", "(14,1.88) (16,1.75) (16,2.25) (14,2.11)", "1.5", "5.5", "0.25"),
];

pub fn find(name: &str) -> Result<&'static Preset> {
    PRESETS
        .iter()
        .find(|preset| preset.name == name)
        .ok_or_else(|| FixtureError::UnknownPreset(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_builds() {
        for preset in PRESETS {
            let polygon = preset.polygon().unwrap();
            assert!(polygon.count() >= 3, "{}", preset.name);
            assert!(!preset.range().unwrap().is_empty(), "{}", preset.name);
        }
    }

    #[test]
    fn default_preset_drops_its_closing_vertex() {
        let polygon = find(DEFAULT_PRESET).unwrap().polygon().unwrap();
        assert_eq!(polygon.count(), 10);
        assert_eq!(find(DEFAULT_PRESET).unwrap().range().unwrap().len(), 9);
    }

    #[test]
    fn unknown_preset_is_an_error() {
        assert!(matches!(find("nope"), Err(FixtureError::UnknownPreset(name)) if name == "nope"));
    }
}
