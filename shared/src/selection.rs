use std::collections::HashMap;

use crate::dataset::Dataset;
use crate::geometry::BBox;
use crate::record::name_key;

/// A country region supplied by the host document.
///
/// Several shapes may carry the same country name (islands, exclaves).
pub trait CountryShape {
    /// Primary identifying attribute.
    fn name_attr(&self) -> Option<String>;

    /// Fallback identifying attribute, consulted only when `name_attr` is absent.
    fn class_attr(&self) -> Option<String>;

    /// Rendered width. Measured on every call.
    fn measured_width(&self) -> f64;

    /// Bounding box in the map surface's local coordinate space.
    fn local_bbox(&self) -> BBox;

    fn country_name(&self) -> Option<String> {
        self.name_attr().or_else(|| self.class_attr())
    }
}

/// The dominant shape chosen for one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedShape {
    /// Lowercased country name.
    pub key: String,
    /// Name exactly as carried by the chosen shape.
    pub name: String,
    pub shape_index: usize,
}

/// Pick the widest shape per country present in `dataset`, in first-seen order.
///
/// Shapes whose name has no record are skipped. Ties keep the earlier shape.
pub fn select_largest_per_country<S: CountryShape>(
    shapes: &[S],
    dataset: &Dataset,
) -> Vec<SelectedShape> {
    let mut selected: Vec<SelectedShape> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for (index, shape) in shapes.iter().enumerate() {
        let Some(name) = shape.country_name() else {
            continue;
        };
        if !dataset.contains_name(&name) {
            continue;
        }

        let key = name_key(&name);
        match slots.get(&key).copied() {
            None => {
                slots.insert(key.clone(), selected.len());
                selected.push(SelectedShape {
                    key,
                    name,
                    shape_index: index,
                });
            }
            Some(slot) => {
                let current = &mut selected[slot];
                let current_width = shapes[current.shape_index].measured_width();
                if shape.measured_width() > current_width {
                    current.name = name;
                    current.shape_index = index;
                }
            }
        }
    }

    selected
}
