use crate::dataset::Dataset;
use crate::geometry::Point;
use crate::rank::{Rank, apply_top_three};
use crate::selection::{CountryShape, SelectedShape};

pub const MARKER_CLASS: &str = "map-pin";
pub const HIDDEN_CLASS: &str = "hide";

/// Interactive pin bound to one country record.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Country name exactly as carried by the source shape.
    pub name: String,
    /// Count copied from the record at placement.
    pub count: i64,
    /// Top-left of the marker in local map coordinates.
    pub position: Point,
    /// Index of the source shape, used for highlighting.
    pub shape_index: usize,
    pub hidden: bool,
    pub rank: Rank,
}

impl Marker {
    /// Full `class` attribute for the marker node.
    pub fn class_name(&self) -> String {
        let mut class = String::from(MARKER_CLASS);
        if let Some(rank) = self.rank.css_class() {
            class.push(' ');
            class.push_str(rank);
        }
        if self.hidden {
            class.push(' ');
            class.push_str(HIDDEN_CLASS);
        }
        class
    }
}

/// Build one marker per selected shape, anchored inside its bounding box, then rank them.
///
/// Shapes are matched to records case-insensitively; a selection with no record
/// or no shape behind it is skipped.
pub fn place_markers<S: CountryShape>(
    selected: &[SelectedShape],
    shapes: &[S],
    dataset: &Dataset,
) -> Vec<Marker> {
    let mut markers: Vec<Marker> = selected
        .iter()
        .filter_map(|selection| {
            let shape = shapes.get(selection.shape_index)?;
            let record = dataset.find_by_name(&selection.name)?;
            Some(Marker {
                name: selection.name.clone(),
                count: record.count,
                position: shape.local_bbox().anchor(),
                shape_index: selection.shape_index,
                hidden: false,
                rank: Rank::None,
            })
        })
        .collect();

    apply_top_three(&mut markers, dataset);
    markers
}
