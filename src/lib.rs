//! Bounding boxes for arbitrarily nested GeoJSON geometry trees.
//!
//! Boxes are planar `[min_lng, min_lat, max_lng, max_lat]` rectangles. Nothing here unwraps
//! antimeridian crossings or accounts for the curvature of the earth.
//!
//! ```
//! use geobbox::{Bounded, BoundingBox, GeometryTree};
//!
//! let tree = GeometryTree::from_json_str(
//!     r#"{"type": "MultiPoint", "coordinates": [[-3, 1], [2, 4]]}"#,
//! )
//! .unwrap()
//! .unwrap();
//! assert_eq!(tree.bbox(), Some(BoundingBox::new(-3.0, 1.0, 2.0, 4.0)));
//! ```
#[macro_use]
extern crate log;

mod bounded;
mod bounds;
mod error;
mod lng_lat;
#[cfg(test)]
mod relative_eq;
mod sample;
#[cfg(test)]
mod test_data;
mod tree;

pub use bounded::{from_geometry_tree, Bounded};
pub use bounds::{center, expand, has_area, merge, merge_all, with_area_or_none, BoundingBox};
pub use error::{Error, Result};
pub use lng_lat::{LngLat, Position};
pub use sample::{from_coordinates, MAX_SAMPLED_POSITIONS};
pub use tree::GeometryTree;

#[cfg(test)]
fn ensure_logging() {
    use std::io::Write;

    let debug = true;
    let result = if debug {
        env_logger::builder()
            .is_test(true)
            .format(|buf, record| {
                let file = record.file().unwrap_or("?");
                let line = record
                    .line()
                    .map(|line| line.to_string())
                    .unwrap_or("?".to_string());
                let file_location = format!("{file}:{line:3}");
                let module = record.module_path().unwrap_or("?");
                writeln!(
                    buf,
                    "[ {log_level} {module} {file_location} ] {args}",
                    log_level = record.level(),
                    args = record.args()
                )
            })
            .try_init()
    } else {
        env_logger::try_init()
    };
    if let Err(e) = result {
        eprintln!("Error setting up logging: {e:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> GeometryTree {
        GeometryTree::from_json_value(value).unwrap()
    }

    #[test]
    fn search_results_extent() {
        ensure_logging();
        // Several independently fetched responses, each already carrying its own bbox, plus one
        // that doesn't.
        let responses = [
            tree(json!({
                "type": "FeatureCollection",
                "bbox": [13.3, 52.4, 13.5, 52.6],
                "features": []
            })),
            tree(json!({
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "geometry": { "type": "Point", "coordinates": [2.35, 48.85] },
                        "properties": { "name": "Paris" }
                    }
                ]
            })),
            tree(json!([])),
        ];

        let extent = merge_all(responses.iter().map(Bounded::bbox)).unwrap();
        assert_eq!(extent, BoundingBox::new(2.35, 48.85, 13.5, 52.6));
        assert!(has_area(Some(&extent)));
        approx::assert_relative_eq!(
            center(&extent),
            LngLat::new(7.925, 50.725),
            epsilon = 1e-9
        );
    }

    #[test]
    fn route_extent() {
        ensure_logging();
        let route: Vec<Vec<f64>> = (0..150_000)
            .map(|idx| {
                let t = idx as f64 / 149_999.0;
                vec![-122.4 + t * 0.5, 37.7 + t * 0.3]
            })
            .collect();
        let bbox = from_coordinates(&route).unwrap();
        assert!(bbox.contains(&LngLat::from_position(&route[0]).unwrap()));
        assert!(bbox.contains(&LngLat::from_position(&route[149_999]).unwrap()));
        assert!(with_area_or_none(Some(bbox)).is_some());
    }

    #[test]
    fn lone_point_has_no_area() {
        let bbox = tree(json!({ "type": "Point", "coordinates": [5, 5] })).bbox();
        assert_eq!(bbox, Some(BoundingBox::new(5.0, 5.0, 5.0, 5.0)));
        assert_eq!(with_area_or_none(bbox), None);
    }

    #[test]
    fn expand_then_merge() {
        let a = expand(&[1.0, 1.0], None);
        let a = expand(&[2.0, 3.0], a.as_ref());
        let b = expand(&[-1.0, 0.5], None);
        assert_eq!(merge(a, b), Some(BoundingBox::new(-1.0, 0.5, 2.0, 3.0)));
    }
}
