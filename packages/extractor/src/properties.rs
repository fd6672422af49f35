//! The properties read from the host for every captured element

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyCategory {
    Layout,
    Box,
    Flex,
    Grid,
    Text,
    Background,
    Border,
    Effects,
}

pub const LAYOUT_PROPERTIES: &[&str] = &[
    "display", "position", "top", "right", "bottom", "left", "z-index", "float", "clear",
    "overflow", "overflow-x", "overflow-y", "visibility", "box-sizing",
];

pub const BOX_PROPERTIES: &[&str] = &[
    "width", "height", "min-width", "max-width", "min-height", "max-height",
    "padding", "padding-top", "padding-right", "padding-bottom", "padding-left",
    "margin", "margin-top", "margin-right", "margin-bottom", "margin-left",
];

pub const FLEX_PROPERTIES: &[&str] = &[
    "flex", "flex-direction", "flex-wrap", "flex-flow", "justify-content", "align-items",
    "align-content", "align-self", "flex-grow", "flex-shrink", "flex-basis", "gap", "row-gap",
    "column-gap", "order",
];

pub const GRID_PROPERTIES: &[&str] = &[
    "grid-template-columns", "grid-template-rows", "grid-template-areas", "grid-column",
    "grid-row", "grid-area", "justify-items", "place-items", "place-content",
];

/// Inherited text properties; these take part in parent elision
pub const TEXT_PROPERTIES: &[&str] = &[
    "font-family", "font-size", "font-weight", "font-style", "font-variant", "line-height",
    "letter-spacing", "word-spacing", "text-align", "text-decoration", "text-transform",
    "text-overflow", "white-space", "color",
];

pub const BACKGROUND_PROPERTIES: &[&str] = &[
    "background-color", "background-image", "background-size", "background-position",
    "background-repeat",
];

pub const BORDER_PROPERTIES: &[&str] = &[
    "border", "border-top", "border-right", "border-bottom", "border-left", "border-width",
    "border-style", "border-color", "border-radius", "outline",
];

pub const EFFECT_PROPERTIES: &[&str] = &[
    "box-shadow", "text-shadow", "opacity", "transform", "transition", "cursor",
    "pointer-events", "list-style", "table-layout", "border-collapse", "border-spacing",
    "vertical-align",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrackedProperty {
    pub name: &'static str,
    pub category: PropertyCategory,
}

/// All tracked properties in output order
pub static TRACKED_PROPERTIES: Lazy<Vec<TrackedProperty>> = Lazy::new(|| {
    let groups: [(&[&'static str], PropertyCategory); 8] = [
        (LAYOUT_PROPERTIES, PropertyCategory::Layout),
        (BOX_PROPERTIES, PropertyCategory::Box),
        (FLEX_PROPERTIES, PropertyCategory::Flex),
        (GRID_PROPERTIES, PropertyCategory::Grid),
        (TEXT_PROPERTIES, PropertyCategory::Text),
        (BACKGROUND_PROPERTIES, PropertyCategory::Background),
        (BORDER_PROPERTIES, PropertyCategory::Border),
        (EFFECT_PROPERTIES, PropertyCategory::Effects),
    ];
    groups
        .iter()
        .flat_map(|(names, category)| {
            names.iter().map(move |name| TrackedProperty {
                name: *name,
                category: *category,
            })
        })
        .collect()
});

pub fn tracked_properties() -> &'static [TrackedProperty] {
    &TRACKED_PROPERTIES
}

pub fn category_of(property: &str) -> Option<PropertyCategory> {
    TRACKED_PROPERTIES
        .iter()
        .find(|tracked| tracked.name == property)
        .map(|tracked| tracked.category)
}

pub fn is_text_property(property: &str) -> bool {
    TEXT_PROPERTIES.contains(&property)
}
