use crate::dataset::Dataset;
use crate::marker::Marker;

/// Number of distinct top counts that receive emphasis.
pub const TOP_RANKS: usize = 3;

/// Emphasis level of a marker. Ordered from no emphasis to the maximum count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Rank {
    #[default]
    None,
    High,
    Higher,
    Highest,
}

impl Rank {
    pub const fn css_class(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::High => Some("map-pin--high"),
            Self::Higher => Some("map-pin--higher"),
            Self::Highest => Some("map-pin--highest"),
        }
    }

    /// Rank of `count` given the ascending top counts from [`Dataset::top_counts`].
    ///
    /// Slots bind positionally: index 0 is `High`, 1 `Higher`, 2 `Highest`.
    pub fn for_count(count: i64, top: &[i64]) -> Self {
        match top.iter().position(|value| *value == count) {
            Some(0) => Self::High,
            Some(1) => Self::Higher,
            Some(2) => Self::Highest,
            _ => Self::None,
        }
    }
}

/// Tag every marker whose count is one of the top three distinct counts.
pub fn apply_top_three(markers: &mut [Marker], dataset: &Dataset) {
    let top = dataset.top_counts(TOP_RANKS);
    for marker in markers.iter_mut() {
        marker.rank = Rank::for_count(marker.count, &top);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::testing::dataset;

    fn marker(name: &str, count: i64) -> Marker {
        Marker {
            name: name.to_string(),
            count,
            position: Point::default(),
            shape_index: 0,
            hidden: false,
            rank: Rank::None,
        }
    }

    #[test]
    fn assigns_ranks_for_duplicate_counts() {
        let data = dataset(&[("A", 3), ("B", 3), ("C", 5), ("D", 5), ("E", 9)]);
        let mut markers: Vec<Marker> = data
            .records()
            .iter()
            .map(|r| marker(&r.name, r.count))
            .collect();
        apply_top_three(&mut markers, &data);

        let ranks: Vec<Rank> = markers.iter().map(|m| m.rank).collect();
        assert_eq!(
            ranks,
            vec![
                Rank::High,
                Rank::High,
                Rank::Higher,
                Rank::Higher,
                Rank::Highest
            ]
        );
    }

    #[test]
    fn counts_below_top_three_get_no_rank() {
        let data = dataset(&[("A", 1), ("B", 2), ("C", 3), ("D", 4)]);
        let mut markers = vec![marker("A", 1), marker("D", 4)];
        apply_top_three(&mut markers, &data);
        assert_eq!(markers[0].rank, Rank::None);
        assert_eq!(markers[1].rank, Rank::Highest);
    }

    #[test]
    fn fewer_distinct_counts_fill_lowest_slots_first() {
        let data = dataset(&[("A", 5), ("B", 9)]);
        let mut markers = vec![marker("A", 5), marker("B", 9)];
        apply_top_three(&mut markers, &data);
        assert_eq!(markers[0].rank, Rank::High);
        assert_eq!(markers[1].rank, Rank::Higher);
    }

    #[test]
    fn ranks_are_monotonic_in_count() {
        let data = dataset(&[("A", 10), ("B", 70), ("C", 30), ("D", 70), ("E", 50), ("F", 2)]);
        let top = data.top_counts(TOP_RANKS);
        for a in data.records() {
            for b in data.records() {
                let (ra, rb) = (Rank::for_count(a.count, &top), Rank::for_count(b.count, &top));
                if a.count > b.count && ra != Rank::None && rb != Rank::None {
                    assert!(ra > rb, "{} ({ra:?}) should outrank {} ({rb:?})", a.name, b.name);
                }
            }
        }
    }

    #[test]
    fn css_classes() {
        assert_eq!(Rank::None.css_class(), None);
        assert_eq!(Rank::High.css_class(), Some("map-pin--high"));
        assert_eq!(Rank::Highest.css_class(), Some("map-pin--highest"));
    }
}
