//! Built-in tag keys and exceptions for the incorrect-tag rule.

use std::collections::{HashMap, HashSet};

/// Tag keys whose values are expected to follow the canonical format.
#[rustfmt::skip]
pub const DEFAULT_TAGS_TO_CHECK: &[&str] = &[
    "abutters", "access", "admin_level", "aerialway", "aeroway", "amenity",
    "barrier", "bicycle", "boat", "border_type", "boundary", "bridge", "building",
    "construction", "covered", "craft", "crossing", "cutting",
    "disused", "drive_in", "drive_through",
    "electrified", "embankment", "emergency",
    "fenced", "foot", "ford",
    "geological", "goods",
    "hgv", "highway", "historic",
    "internet_access",
    "landuse", "lanes", "leisure",
    "man_made", "military", "mooring", "motorboat", "mountain_pass",
    "natural", "noexit",
    "office",
    "power", "public_transport",
    "railway", "route",
    "sac_scale", "service", "shop", "smoothness", "sport", "surface",
    "tactile_paving", "toll", "tourism", "tracktype", "traffic_calming",
    "trail_visibility", "tunnel",
    "usage",
    "vehicle",
    "wall", "waterway", "wheelchair", "wood",
];

/// Established values that break the format but are accepted for their key.
///
/// `type` is not in [`DEFAULT_TAGS_TO_CHECK`]; its entries only matter when a
/// configuration adds it to the checked keys.
pub const DEFAULT_EXCEPTIONS: &[(&str, &[&str])] = &[
    (
        "type",
        &[
            "associatedStreet",
            "turnlanes:lengths",
            "turnlanes:turns",
            "restriction:hgv",
            "restriction:caravan",
            "restriction:motorcar",
            "restriction:bus",
            "restriction:agricultural",
            "restriction:bicycle",
            "restriction:hazmat",
            "TMC",
        ],
    ),
    ("service", &["drive-through"]),
    ("aerialway", &["j-bar", "t-bar"]),
    (
        "surface",
        &[
            "concrete:plates",
            "concrete:lanes",
            "paving_stones:20",
            "paving_stones:30",
            "paving_stones:50",
            "cobblestone:10",
            "cobblestone:20",
            "cobblestone:flattened",
        ],
    ),
    ("shop", &["e-cigarette"]),
    ("barrier", &["full-height_turnstile"]),
    ("man_made", &["MDF"]),
];

/// Lead-in for an instruction naming one offending tag.
pub const INSTRUCTION_SINGULAR: &str = "Concerns tag ";

/// Lead-in for an instruction naming several offending tags.
pub const INSTRUCTION_PLURAL: &str = "Concerns tags ";

pub fn default_tags_to_check() -> HashSet<String> {
    DEFAULT_TAGS_TO_CHECK.iter().map(|s| s.to_string()).collect()
}

pub fn default_exceptions() -> HashMap<String, HashSet<String>> {
    DEFAULT_EXCEPTIONS
        .iter()
        .map(|(key, values)| {
            let values = values.iter().map(|v| v.to_string()).collect();
            (key.to_string(), values)
        })
        .collect()
}
