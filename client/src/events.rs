use js_sys::Reflect;
use pinmap_shared::Point;
use wasm_bindgen::JsValue;
use web_sys::MouseEvent;

/// Page coordinates of a click, keeping sub-pixel precision when the browser reports it.
pub fn page_point(e: &MouseEvent) -> Point {
    Point::new(
        coordinate(read_f64(e, "pageX"), e.page_x()),
        coordinate(read_f64(e, "pageY"), e.page_y()),
    )
}

fn read_f64(e: &MouseEvent, key: &str) -> Option<f64> {
    let target: &JsValue = e.as_ref();
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_f64())
}

fn coordinate(precise: Option<f64>, whole: i32) -> f64 {
    precise
        .filter(|value| value.is_finite())
        .unwrap_or_else(|| f64::from(whole))
}

#[cfg(test)]
mod tests {
    use super::coordinate;

    #[test]
    fn keeps_fractional_page_coordinates() {
        assert_eq!(coordinate(Some(200.75), 200), 200.75);
    }

    #[test]
    fn falls_back_to_whole_pixels() {
        assert_eq!(coordinate(None, 150), 150.0);
        assert_eq!(coordinate(Some(f64::NAN), 150), 150.0);
    }
}
