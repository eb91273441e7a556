use crate::dataset::Dataset;
use crate::geometry::BBox;
use crate::record::CountryRecord;
use crate::selection::CountryShape;

#[derive(Debug, Clone)]
pub struct FakeShape {
    pub name: Option<String>,
    pub class: Option<String>,
    pub width: f64,
    pub bbox: BBox,
}

impl FakeShape {
    pub fn named(name: &str, width: f64) -> Self {
        Self {
            name: Some(name.to_string()),
            class: None,
            width,
            bbox: BBox::new(0.0, 0.0, width, width / 2.0),
        }
    }

    pub fn classed(class: &str, width: f64) -> Self {
        Self {
            name: None,
            class: Some(class.to_string()),
            width,
            bbox: BBox::new(0.0, 0.0, width, width / 2.0),
        }
    }

    pub fn unnamed(width: f64) -> Self {
        Self {
            name: None,
            class: None,
            width,
            bbox: BBox::new(0.0, 0.0, width, width),
        }
    }

    pub fn at(mut self, bbox: BBox) -> Self {
        self.bbox = bbox;
        self
    }
}

impl CountryShape for FakeShape {
    fn name_attr(&self) -> Option<String> {
        self.name.clone()
    }

    fn class_attr(&self) -> Option<String> {
        self.class.clone()
    }

    fn measured_width(&self) -> f64 {
        self.width
    }

    fn local_bbox(&self) -> BBox {
        self.bbox
    }
}

pub fn dataset(entries: &[(&str, i64)]) -> Dataset {
    Dataset::new(
        entries
            .iter()
            .map(|(name, count)| CountryRecord {
                name: name.to_string(),
                image_url: format!("/flags/{}.svg", name.to_lowercase()),
                count: *count,
                label: "projects".to_string(),
            })
            .collect(),
    )
}
