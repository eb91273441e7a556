/// Dataset location relative to the page when the map surface does not override it.
pub const DEFAULT_DATA_URL: &str = "./data.json";

/// Attribute on the map surface that overrides [`DEFAULT_DATA_URL`].
pub const DATA_SOURCE_ATTR: &str = "data-source";

pub const MAP_SURFACE_SELECTOR: &str = ".map-svg";
pub const SHAPE_SELECTOR: &str = "path[name], path[class]";

pub const TOOLTIP_SELECTOR: &str = ".map-tooltip";
pub const TOOLTIP_OPEN_CLASS: &str = "show";
pub const TOOLTIP_NAME_ID: &str = "wmcName";
pub const TOOLTIP_COUNT_ID: &str = "wmcCount";
pub const TOOLTIP_FLAG_ID: &str = "wmcFlag";
pub const TOOLTIP_LABEL_ID: &str = "wmcLabel";

pub const HIGHLIGHT_FILL: &str = "#bfc8d2";
pub const RESET_FILL: &str = "inherit";

pub fn data_source_url(attr: Option<String>) -> String {
    attr.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_DATA_URL.to_string())
}

/// Selector for a content slot inside the tooltip panel.
pub fn tooltip_slot_selector(id: &str) -> String {
    format!("{TOOLTIP_SELECTOR} #{id}")
}

pub fn px(value: f64) -> String {
    format!("{value}px")
}
