use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use pinmap_shared::{ClickTarget, PinMap};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, EventTarget, MouseEvent};

use crate::config::{self, DATA_SOURCE_ATTR, HIGHLIGHT_FILL, MAP_SURFACE_SELECTOR, RESET_FILL};
use crate::dom::{self, DomShape, TooltipPanel};
use crate::events;
use crate::loader;
use crate::mount;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum LoadStatus {
    Loading,
    Ready,
    Failed,
}

impl LoadStatus {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }
}

/// Click listener that detaches itself when dropped.
struct ClickBinding {
    target: EventTarget,
    handler: Closure<dyn Fn(MouseEvent)>,
}

impl ClickBinding {
    fn attach(target: EventTarget, handler: Closure<dyn Fn(MouseEvent)>) -> Option<Self> {
        target
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { target, handler })
    }
}

impl Drop for ClickBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("click", self.handler.as_ref().unchecked_ref());
    }
}

thread_local! {
    static MARKER_CLICK_BINDINGS: RefCell<Vec<ClickBinding>> = const { RefCell::new(Vec::new()) };
    static DOCUMENT_CLICK_BINDING: RefCell<Option<ClickBinding>> = const { RefCell::new(None) };
}

/// Interactive state plus the DOM nodes it is mirrored into.
struct Session {
    map: PinMap,
    shapes: Vec<DomShape>,
    pins: Vec<Element>,
    panel: Option<TooltipPanel>,
}

impl Session {
    fn render(&self) {
        if let Some(panel) = &self.panel {
            panel.render(self.map.tooltip().state());
        }

        for (pin, marker) in self.pins.iter().zip(self.map.markers()) {
            pin.set_class_name(&marker.class_name());
        }

        let highlighted = self.map.tooltip().highlighted_shape();
        for (index, shape) in self.shapes.iter().enumerate() {
            if highlighted == Some(index) {
                shape.set_fill(HIGHLIGHT_FILL);
            } else {
                shape.set_fill(RESET_FILL);
            }
        }
    }
}

/// Load the dataset, place markers and wire up the click handlers.
/// Returns the number of markers placed.
async fn bootstrap() -> Result<usize, String> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Err("document is unavailable".into());
    };
    let surface = document.query_selector(MAP_SURFACE_SELECTOR).ok().flatten();
    let url = config::data_source_url(
        surface
            .as_ref()
            .and_then(|el| el.get_attribute(DATA_SOURCE_ATTR)),
    );

    let dataset = loader::fetch_dataset(&url)
        .await
        .map_err(|e| e.to_string())?;

    let Some(surface) = surface else {
        web_sys::console::warn_1(
            &format!("Map surface {MAP_SURFACE_SELECTOR} not found; no markers placed").into(),
        );
        return Ok(0);
    };

    let shapes = dom::collect_shapes(&document);
    let map = PinMap::build(dataset, &shapes);

    let markers = map.markers();
    let nodes = mount::mount_all(
        markers.len(),
        |i| {
            dom::create_marker(&document, &markers[i])
                .map_err(|e| format!("failed to create marker for {}: {e:?}", markers[i].name))
        },
        |node: &dom::MarkerNode| {
            dom::attach_marker(&surface, node)
                .map_err(|e| format!("failed to attach marker: {e:?}"))
        },
        |node: &dom::MarkerNode| node.holder.remove(),
    )?;
    let pins: Vec<Element> = nodes.into_iter().map(|node| node.pin).collect();

    web_sys::console::info_1(
        &format!(
            "map data loaded: {} countries, {} shapes, {} markers",
            map.dataset().len(),
            shapes.len(),
            pins.len()
        )
        .into(),
    );

    let placed = pins.len();
    let session = Rc::new(RefCell::new(Session {
        map,
        shapes,
        pins,
        panel: TooltipPanel::find(&document),
    }));

    bind_marker_clicks(&session);
    bind_document_click(&document, &session);

    Ok(placed)
}

fn bind_marker_clicks(session: &Rc<RefCell<Session>>) {
    let pins: Vec<Element> = session.borrow().pins.clone();
    let bindings: Vec<ClickBinding> = pins
        .into_iter()
        .enumerate()
        .filter_map(|(index, pin)| {
            let session = Rc::clone(session);
            let handler = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                let at = events::page_point(&e);
                let mut session = session.borrow_mut();
                if session.map.click_marker(index, at).changed() {
                    session.render();
                }
            });
            ClickBinding::attach(pin.into(), handler)
        })
        .collect();

    MARKER_CLICK_BINDINGS.with(|slot| *slot.borrow_mut() = bindings);
}

/// One outside-click listener for the whole document, however many markers exist.
fn bind_document_click(document: &web_sys::Document, session: &Rc<RefCell<Session>>) {
    DOCUMENT_CLICK_BINDING.with(|slot| {
        slot.borrow_mut().take();
    });

    let session = Rc::clone(session);
    let handler = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
        let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
        let target = if dom::is_marker(target.as_ref()) {
            ClickTarget::Marker
        } else {
            ClickTarget::Elsewhere
        };
        let mut session = session.borrow_mut();
        if session.map.click_document(target).changed() {
            session.render();
        }
    });

    let target: &EventTarget = document.as_ref();
    if let Some(binding) = ClickBinding::attach(target.clone(), handler) {
        DOCUMENT_CLICK_BINDING.with(|slot| *slot.borrow_mut() = Some(binding));
    }
}

#[component]
pub fn App() -> impl IntoView {
    let status = RwSignal::new(LoadStatus::Loading);

    wasm_bindgen_futures::spawn_local(async move {
        match bootstrap().await {
            Ok(_) => status.set(LoadStatus::Ready),
            Err(e) => {
                web_sys::console::error_1(&format!("Map initialization failed: {e}").into());
                status.set(LoadStatus::Failed);
            }
        }
    });

    view! {
        <span class="map-pins-status" hidden=true data-status=move || status.get().as_str()></span>
    }
}
