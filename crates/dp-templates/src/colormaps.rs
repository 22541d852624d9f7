//! Named color maps
//!
//! Every base map is also registered reversed under `<name>_r`.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::TemplateError;

/// Name of the color map offered first in the picker
pub const DEFAULT_COLORMAP: &str = "curl";

/// Suffix marking a reversed map
pub const REVERSED_SUFFIX: &str = "_r";

/// An ordered sequence of colors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorMap {
    pub name: String,
    pub colors: Vec<String>,
}

impl ColorMap {
    pub fn new(name: impl Into<String>, colors: Vec<String>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// The same colors in reverse order, named `<name>_r`
    pub fn reversed(&self) -> Self {
        let name = match self.name.strip_suffix(REVERSED_SUFFIX) {
            Some(base) => base.to_string(),
            None => format!("{}{}", self.name, REVERSED_SUFFIX),
        };
        Self {
            name,
            colors: self.colors.iter().rev().cloned().collect(),
        }
    }

    /// Evenly spaced `(fraction, color)` stops covering [0, 1]
    pub fn stops(&self) -> Vec<(f64, String)> {
        match self.colors.len() {
            0 => Vec::new(),
            1 => vec![(0.0, self.colors[0].clone()), (1.0, self.colors[0].clone())],
            n => {
                let last = (n - 1) as f64;
                self.colors
                    .iter()
                    .enumerate()
                    .map(|(i, color)| (i as f64 / last, color.clone()))
                    .collect()
            }
        }
    }

    /// Check that the map has colors and that every color parses
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.colors.is_empty() {
            return Err(TemplateError::EmptyColorMap(self.name.clone()));
        }
        match self.colors.iter().find(|c| parse_color(c).is_none()) {
            Some(color) => Err(TemplateError::InvalidColor {
                name: self.name.clone(),
                color: color.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Parse `rgb(r, g, b)` or `#rrggbb` into channel values
pub fn parse_color(color: &str) -> Option<[u8; 3]> {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some([channel(0)?, channel(2)?, channel(4)?]);
    }

    let inner = color.strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(|p| p.trim().parse::<u8>().ok());
    let rgb = [parts.next()??, parts.next()??, parts.next()??];
    match parts.next() {
        None => Some(rgb),
        Some(_) => None,
    }
}

macro_rules! rgb_list {
    ($(($r:literal, $g:literal, $b:literal)),* $(,)?) => {
        &[$(concat!("rgb(", $r, ", ", $g, ", ", $b, ")")),*]
    };
}

// cmocean
const ALGAE: &[&str] = rgb_list![
    (214, 249, 207), (186, 228, 174), (156, 209, 143), (124, 191, 115),
    (85, 174, 91), (37, 157, 81), (7, 138, 78), (13, 117, 71),
    (23, 95, 61), (25, 75, 49), (23, 55, 35), (17, 36, 20),
];
const BALANCE: &[&str] = rgb_list![
    (23, 28, 66), (41, 58, 143), (11, 102, 189), (69, 144, 185),
    (142, 181, 194), (210, 216, 219), (230, 210, 204), (213, 157, 137),
    (196, 101, 72), (172, 43, 36), (120, 14, 40), (60, 9, 17),
];
const CURL: &[&str] = rgb_list![
    (20, 29, 67), (28, 72, 93), (18, 115, 117), (63, 156, 129),
    (153, 189, 156), (223, 225, 211), (241, 218, 206), (224, 160, 137),
    (203, 101, 99), (164, 54, 96), (111, 23, 91), (51, 13, 53),
];
const DEEP: &[&str] = rgb_list![
    (253, 253, 204), (206, 236, 179), (156, 219, 165), (111, 201, 163),
    (86, 177, 163), (76, 153, 160), (68, 130, 155), (62, 108, 150),
    (62, 82, 143), (64, 60, 115), (54, 43, 77), (39, 26, 44),
];
const MATTER: &[&str] = rgb_list![
    (253, 237, 176), (250, 205, 145), (246, 173, 119), (240, 142, 98),
    (231, 109, 84), (216, 80, 83), (195, 56, 90), (168, 40, 96),
    (138, 29, 99), (107, 24, 93), (76, 21, 80), (47, 15, 61),
];
const ICE: &[&str] = rgb_list![
    (3, 5, 18), (25, 25, 51), (44, 42, 87), (58, 60, 125),
    (62, 83, 160), (62, 109, 178), (72, 134, 187), (89, 159, 196),
    (114, 184, 205), (149, 207, 216), (192, 229, 232), (234, 252, 253),
];
const OXY: &[&str] = rgb_list![
    (63, 5, 5), (101, 6, 13), (138, 17, 9), (96, 95, 95),
    (119, 118, 118), (142, 141, 141), (166, 166, 165), (193, 192, 191),
    (222, 222, 220), (239, 248, 90), (230, 210, 41), (220, 174, 25),
];
const THERMAL: &[&str] = rgb_list![
    (3, 35, 51), (13, 48, 100), (53, 50, 155), (93, 62, 153),
    (126, 77, 143), (158, 89, 135), (193, 100, 121), (225, 113, 97),
    (246, 139, 69), (251, 173, 60), (246, 211, 70), (231, 250, 90),
];

// diverging
const TROPIC: &[&str] = rgb_list![
    (0, 155, 158), (66, 183, 185), (167, 211, 212), (241, 241, 241),
    (228, 193, 217), (214, 145, 193), (199, 93, 171),
];

// carto
const TEMPS: &[&str] = rgb_list![
    (0, 147, 146), (57, 177, 133), (156, 203, 134), (233, 226, 156),
    (238, 180, 121), (232, 132, 113), (207, 89, 126),
];
const BURG: &[&str] = rgb_list![
    (255, 198, 196), (244, 163, 168), (227, 129, 145), (204, 96, 125),
    (173, 70, 108), (139, 48, 88), (103, 32, 68),
];
const DARKMINT: &[&str] = rgb_list![
    (210, 251, 212), (165, 219, 194), (123, 188, 176), (85, 156, 158),
    (58, 124, 137), (35, 93, 114), (18, 63, 90),
];
const SUNSETDARK: &[&str] = rgb_list![
    (252, 222, 156), (250, 164, 118), (240, 116, 110), (227, 79, 111),
    (220, 57, 119), (185, 37, 122), (124, 29, 111),
];

const BASE_MAPS: &[(&str, &[&str])] = &[
    ("algae", ALGAE),
    ("balance", BALANCE),
    ("curl", CURL),
    ("deep", DEEP),
    ("matter", MATTER),
    ("ice", ICE),
    ("oxy", OXY),
    ("thermal", THERMAL),
    ("diverging: Tropic", TROPIC),
    ("temps", TEMPS),
    ("burg", BURG),
    ("darkmint", DARKMINT),
    ("sunsetdark", SUNSETDARK),
];

static COLORMAPS: Lazy<IndexMap<String, ColorMap>> = Lazy::new(|| {
    let mut maps = IndexMap::new();
    for (name, colors) in BASE_MAPS {
        let map = ColorMap::new(*name, colors.iter().map(|c| c.to_string()).collect());
        let reversed = map.reversed();
        maps.insert(map.name.clone(), map);
        maps.insert(reversed.name.clone(), reversed);
    }
    tracing::debug!("Registered {} color maps", maps.len());
    maps
});

/// Look up a color map by name, including `_r` variants
pub fn get(name: &str) -> Result<&'static ColorMap, TemplateError> {
    COLORMAPS
        .get(name)
        .ok_or_else(|| TemplateError::UnknownColorMap(name.to_string()))
}

/// All registered names, each base map followed by its reversed variant
pub fn names() -> Vec<&'static str> {
    COLORMAPS.keys().map(String::as_str).collect()
}

/// Names offered in a picker: reversed variants are left out
pub fn base_names() -> Vec<&'static str> {
    names()
        .into_iter()
        .filter(|name| !name.ends_with(REVERSED_SUFFIX))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue() {
        let base = base_names();
        assert_eq!(base.len(), BASE_MAPS.len());
        assert_eq!(names().len(), 2 * BASE_MAPS.len());
        assert!(base.contains(&DEFAULT_COLORMAP));
        assert!(get("burg_r").is_ok());
        assert!(matches!(get("viridis"), Err(TemplateError::UnknownColorMap(_))));
    }

    #[test]
    fn test_reversed_variant() {
        let curl = get("curl").unwrap();
        let curl_r = get("curl_r").unwrap();
        assert_eq!(curl_r.colors.first(), curl.colors.last());
        assert_eq!(curl_r.reversed(), *curl);
    }

    #[test]
    fn test_every_map_is_valid() {
        for name in names() {
            assert!(get(name).unwrap().validate().is_ok(), "{name}");
        }
    }

    #[test]
    fn test_stops_are_evenly_spaced() {
        let map = ColorMap::new("three", vec!["#000000".into(), "#808080".into(), "#ffffff".into()]);
        let stops = map.stops();
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].0, 0.0);
        assert_eq!(stops[1].0, 0.5);
        assert_eq!(stops[2], (1.0, "#ffffff".to_string()));
    }

    #[test]
    fn test_validation() {
        assert_eq!(parse_color("rgb(1, 2, 3)"), Some([1, 2, 3]));
        assert_eq!(parse_color("#ff0080"), Some([255, 0, 128]));
        assert_eq!(parse_color("rgb(1, 2)"), None);
        assert_eq!(parse_color("rgb(1, 2, 300)"), None);

        let empty = ColorMap::new("empty", Vec::new());
        assert!(matches!(empty.validate(), Err(TemplateError::EmptyColorMap(_))));
        let bad = ColorMap::new("bad", vec!["blue".into()]);
        assert!(matches!(bad.validate(), Err(TemplateError::InvalidColor { .. })));
    }
}
