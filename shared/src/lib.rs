pub mod dataset;
pub mod error;
pub mod geometry;
pub mod map;
pub mod marker;
pub mod rank;
pub mod record;
pub mod selection;
pub mod tooltip;

#[cfg(test)]
pub(crate) mod testing;

pub use dataset::Dataset;
pub use error::LoadError;
pub use geometry::{BBox, Point};
pub use map::PinMap;
pub use marker::{Marker, place_markers};
pub use rank::{Rank, apply_top_three};
pub use record::CountryRecord;
pub use selection::{CountryShape, SelectedShape, select_largest_per_country};
pub use tooltip::{ClickTarget, TooltipController, TooltipState, Transition};
