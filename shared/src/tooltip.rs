use crate::dataset::Dataset;
use crate::geometry::Point;
use crate::marker::Marker;
use crate::record::CountryRecord;

/// Contents and placement of the shared detail panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub is_open: bool,
    /// Page coordinates of the click that opened the panel.
    pub position: Point,
    /// Last record shown. Kept after closing.
    pub content: Option<CountryRecord>,
}

/// Where a document-level click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Marker,
    Elsewhere,
}

/// Outcome of feeding an event to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
    Ignored,
}

impl Transition {
    pub const fn changed(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Two-state machine driving the tooltip, marker visibility and the shape highlight.
///
/// While open, exactly the clicked marker is hidden and only its shape is
/// highlighted. While closed, every marker is visible and nothing is highlighted.
#[derive(Debug, Clone, Default)]
pub struct TooltipController {
    state: TooltipState,
    highlighted: Option<usize>,
}

impl TooltipController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Shape index carrying the highlight fill, if any.
    pub fn highlighted_shape(&self) -> Option<usize> {
        self.highlighted
    }

    /// Marker click at page coordinates `at`. Valid from both states.
    ///
    /// A marker whose country has no record leaves everything untouched.
    pub fn open(
        &mut self,
        dataset: &Dataset,
        markers: &mut [Marker],
        marker_index: usize,
        at: Point,
    ) -> Transition {
        let Some(marker) = markers.get(marker_index) else {
            return Transition::Ignored;
        };
        let Some(record) = dataset.find_by_name(&marker.name) else {
            return Transition::Ignored;
        };
        let shape_index = marker.shape_index;

        self.state.content = Some(record.clone());
        self.state.position = at;
        self.state.is_open = true;

        show_all(markers);
        markers[marker_index].hidden = true;
        self.highlighted = Some(shape_index);

        Transition::Opened
    }

    /// Return to the closed state. Safe to call when already closed.
    pub fn close(&mut self, markers: &mut [Marker]) -> Transition {
        self.state.is_open = false;
        show_all(markers);
        self.highlighted = None;
        Transition::Closed
    }

    /// Document-level click. Clicks on markers are left to the marker handler.
    pub fn handle_document_click(
        &mut self,
        target: ClickTarget,
        markers: &mut [Marker],
    ) -> Transition {
        match target {
            ClickTarget::Marker => Transition::Ignored,
            ClickTarget::Elsewhere => self.close(markers),
        }
    }
}

fn show_all(markers: &mut [Marker]) {
    for marker in markers.iter_mut() {
        marker.hidden = false;
    }
}
