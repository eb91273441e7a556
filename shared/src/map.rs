use crate::dataset::Dataset;
use crate::geometry::Point;
use crate::marker::{Marker, place_markers};
use crate::selection::{CountryShape, select_largest_per_country};
use crate::tooltip::{ClickTarget, TooltipController, Transition};

/// Everything the interactive layer needs once the dataset has loaded.
#[derive(Debug, Clone)]
pub struct PinMap {
    dataset: Dataset,
    markers: Vec<Marker>,
    tooltip: TooltipController,
}

impl PinMap {
    /// Select dominant shapes, place and rank markers. Starts with the tooltip closed.
    pub fn build<S: CountryShape>(dataset: Dataset, shapes: &[S]) -> Self {
        let selected = select_largest_per_country(shapes, &dataset);
        let markers = place_markers(&selected, shapes, &dataset);
        Self {
            dataset,
            markers,
            tooltip: TooltipController::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn tooltip(&self) -> &TooltipController {
        &self.tooltip
    }

    pub fn click_marker(&mut self, marker_index: usize, at: Point) -> Transition {
        self.tooltip
            .open(&self.dataset, &mut self.markers, marker_index, at)
    }

    pub fn click_document(&mut self, target: ClickTarget) -> Transition {
        self.tooltip
            .handle_document_click(target, &mut self.markers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BBox;
    use crate::rank::Rank;
    use crate::testing::{FakeShape, dataset};

    fn world() -> (Dataset, Vec<FakeShape>) {
        let data = dataset(&[("France", 12), ("Spain", 3), ("Italy", 7), ("Chad", 1)]);
        let shapes = vec![
            FakeShape::named("France", 80.0).at(BBox::new(90.0, 30.0, 80.0, 60.0)),
            FakeShape::named("France", 5.0).at(BBox::new(400.0, 400.0, 5.0, 5.0)),
            FakeShape::named("Spain", 60.0),
            FakeShape::named("Italy", 20.0),
            FakeShape::named("Italy", 45.0),
            FakeShape::classed("Greenland", 300.0),
        ];
        (data, shapes)
    }

    #[test]
    fn builds_one_ranked_marker_per_country_with_shapes() {
        let (data, shapes) = world();
        let map = PinMap::build(data, &shapes);

        let placed: Vec<(&str, usize, Rank)> = map
            .markers()
            .iter()
            .map(|m| (m.name.as_str(), m.shape_index, m.rank))
            .collect();
        assert_eq!(
            placed,
            vec![
                ("France", 0, Rank::Highest),
                ("Spain", 2, Rank::High),
                ("Italy", 4, Rank::Higher),
            ]
        );
        assert!(!map.tooltip().is_open());
    }

    #[test]
    fn click_then_outside_click_round_trip() {
        let (data, shapes) = world();
        let mut map = PinMap::build(data, &shapes);

        assert_eq!(
            map.click_marker(0, Point::new(200.0, 150.0)),
            Transition::Opened
        );
        let state = map.tooltip().state();
        assert!(state.is_open);
        assert_eq!(state.position, Point::new(200.0, 150.0));
        assert_eq!(
            state.content.as_ref().map(|c| c.name.as_str()),
            Some("France")
        );
        assert!(map.markers()[0].hidden);
        assert_eq!(map.tooltip().highlighted_shape(), Some(0));

        assert_eq!(
            map.click_document(ClickTarget::Elsewhere),
            Transition::Closed
        );
        assert!(!map.tooltip().is_open());
        assert!(map.markers().iter().all(|m| !m.hidden));
        assert_eq!(map.tooltip().highlighted_shape(), None);
    }

    #[test]
    fn at_most_one_marker_hidden_across_clicks() {
        let (data, shapes) = world();
        let mut map = PinMap::build(data, &shapes);

        for (index, x) in [(0, 1.0), (2, 2.0), (1, 3.0), (2, 4.0)] {
            map.click_marker(index, Point::new(x, x));
            map.click_document(ClickTarget::Marker);
            let hidden: Vec<usize> = map
                .markers()
                .iter()
                .enumerate()
                .filter(|(_, m)| m.hidden)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(hidden, vec![index]);
        }
    }
}
