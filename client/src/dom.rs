use pinmap_shared::geometry::MARKER_SIZE;
use pinmap_shared::{BBox, CountryShape, Marker, TooltipState};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, SvgGraphicsElement};

use crate::config::{
    self, SHAPE_SELECTOR, TOOLTIP_COUNT_ID, TOOLTIP_FLAG_ID, TOOLTIP_LABEL_ID, TOOLTIP_NAME_ID,
    TOOLTIP_OPEN_CLASS, TOOLTIP_SELECTOR,
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// A country `<path>` from the host document.
pub struct DomShape {
    element: SvgGraphicsElement,
}

impl DomShape {
    pub fn set_fill(&self, fill: &str) {
        let _ = self.element.style().set_property("fill", fill);
    }
}

impl CountryShape for DomShape {
    fn name_attr(&self) -> Option<String> {
        self.element.get_attribute("name")
    }

    fn class_attr(&self) -> Option<String> {
        self.element.get_attribute("class")
    }

    fn measured_width(&self) -> f64 {
        self.element.get_bounding_client_rect().width()
    }

    fn local_bbox(&self) -> BBox {
        self.element
            .get_b_box()
            .map(|rect| {
                BBox::new(
                    f64::from(rect.x()),
                    f64::from(rect.y()),
                    f64::from(rect.width()),
                    f64::from(rect.height()),
                )
            })
            .unwrap_or_default()
    }
}

pub fn collect_shapes(document: &Document) -> Vec<DomShape> {
    let Ok(nodes) = document.query_selector_all(SHAPE_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<SvgGraphicsElement>().ok())
        .map(|element| DomShape { element })
        .collect()
}

/// The fixed tooltip panel and its four content slots.
pub struct TooltipPanel {
    root: HtmlElement,
    name: Element,
    count: Element,
    flag: HtmlImageElement,
    label: Element,
}

impl TooltipPanel {
    pub fn find(document: &Document) -> Option<Self> {
        let root = document
            .query_selector(TOOLTIP_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let Some(root) = root else {
            web_sys::console::warn_1(&format!("Tooltip panel {TOOLTIP_SELECTOR} not found").into());
            return None;
        };

        let name = find_slot(document, TOOLTIP_NAME_ID)?;
        let count = find_slot(document, TOOLTIP_COUNT_ID)?;
        let flag = find_slot(document, TOOLTIP_FLAG_ID)?
            .dyn_into::<HtmlImageElement>()
            .ok()?;
        let label = find_slot(document, TOOLTIP_LABEL_ID)?;

        Some(Self {
            root,
            name,
            count,
            flag,
            label,
        })
    }

    pub fn render(&self, state: &TooltipState) {
        if let Some(record) = &state.content {
            self.name.set_text_content(Some(record.name.as_str()));
            self.count.set_text_content(Some(record.count.to_string().as_str()));
            self.label.set_text_content(Some(record.label.as_str()));
            self.flag.set_src(&record.image_url);
        }

        let _ = self
            .root
            .class_list()
            .toggle_with_force(TOOLTIP_OPEN_CLASS, state.is_open);

        if state.is_open {
            let style = self.root.style();
            let _ = style.set_property("left", &config::px(state.position.x));
            let _ = style.set_property("top", &config::px(state.position.y));
        }
    }
}

fn find_slot(document: &Document, id: &str) -> Option<Element> {
    let slot = document
        .query_selector(&config::tooltip_slot_selector(id))
        .ok()
        .flatten();
    if slot.is_none() {
        web_sys::console::warn_1(&format!("Tooltip slot #{id} not found").into());
    }
    slot
}

/// `<foreignObject><span class="map-pin"/></foreignObject>` for one marker, not yet attached.
pub struct MarkerNode {
    pub holder: Element,
    pub pin: Element,
}

pub fn create_marker(document: &Document, marker: &Marker) -> Result<MarkerNode, JsValue> {
    let holder = document.create_element_ns(Some(SVG_NS), "foreignObject")?;
    holder.set_attribute("x", &marker.position.x.to_string())?;
    holder.set_attribute("y", &marker.position.y.to_string())?;
    holder.set_attribute("width", &MARKER_SIZE.to_string())?;
    holder.set_attribute("height", &MARKER_SIZE.to_string())?;

    let pin = document.create_element("span")?;
    pin.set_class_name(&marker.class_name());
    pin.set_attribute("data-name", &marker.name)?;
    pin.set_attribute("data-count", &marker.count.to_string())?;

    holder.append_child(&pin)?;
    Ok(MarkerNode { holder, pin })
}

/// Markers go at the top level of the surface so they paint above every shape.
pub fn attach_marker(surface: &Element, node: &MarkerNode) -> Result<(), JsValue> {
    surface.append_child(&node.holder).map(|_| ())
}

pub fn is_marker(target: Option<&Element>) -> bool {
    target.is_some_and(|el| el.class_list().contains(pinmap_shared::marker::MARKER_CLASS))
}
