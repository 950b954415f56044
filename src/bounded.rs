use crate::bounds::{expand, merge_all};
use crate::sample::from_coordinates;
use crate::BoundingBox;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};

/// Something whose bounding box can be computed from its (possibly nested) geometry.
pub trait Bounded {
    /// A box supplied with the data itself, e.g. a GeoJSON `bbox` member.
    ///
    /// When present (with at least four components) it is trusted as-is and nothing beneath this
    /// node is visited.
    fn precomputed_bbox(&self) -> Option<&[f64]> {
        None
    }

    /// The box computed from this node's own geometry or children.
    fn derive_bbox(&self) -> Option<BoundingBox>;

    fn bbox(&self) -> Option<BoundingBox> {
        match self.precomputed_bbox().and_then(BoundingBox::from_slice) {
            Some(bbox) => Some(bbox),
            None => self.derive_bbox(),
        }
    }
}

/// The bounding box of `tree`, or `None` if it contains no positions.
pub fn from_geometry_tree<T: Bounded + ?Sized>(tree: &T) -> Option<BoundingBox> {
    tree.bbox()
}

impl Bounded for Value {
    fn derive_bbox(&self) -> Option<BoundingBox> {
        match self {
            Value::Point(position) => expand(position, None),
            Value::LineString(positions) | Value::MultiPoint(positions) => {
                from_coordinates(positions)
            }
            Value::MultiLineString(line_strings) | Value::Polygon(line_strings) => {
                merge_all(line_strings.iter().map(|ring| from_coordinates(ring)))
            }
            Value::MultiPolygon(polygons) => merge_all(
                polygons
                    .iter()
                    .flatten()
                    .map(|ring| from_coordinates(ring)),
            ),
            Value::GeometryCollection(geometries) => {
                merge_all(geometries.iter().map(Bounded::bbox))
            }
        }
    }
}

impl Bounded for Geometry {
    fn precomputed_bbox(&self) -> Option<&[f64]> {
        self.bbox.as_deref()
    }

    fn derive_bbox(&self) -> Option<BoundingBox> {
        self.value.derive_bbox()
    }
}

impl Bounded for Feature {
    fn precomputed_bbox(&self) -> Option<&[f64]> {
        self.bbox.as_deref()
    }

    fn derive_bbox(&self) -> Option<BoundingBox> {
        self.geometry.as_ref().and_then(Bounded::bbox)
    }
}

impl Bounded for FeatureCollection {
    fn precomputed_bbox(&self) -> Option<&[f64]> {
        self.bbox.as_deref()
    }

    fn derive_bbox(&self) -> Option<BoundingBox> {
        merge_all(self.features.iter().map(Bounded::bbox))
    }
}

impl Bounded for GeoJson {
    fn precomputed_bbox(&self) -> Option<&[f64]> {
        match self {
            GeoJson::Geometry(geometry) => geometry.precomputed_bbox(),
            GeoJson::Feature(feature) => feature.precomputed_bbox(),
            GeoJson::FeatureCollection(feature_collection) => {
                feature_collection.precomputed_bbox()
            }
        }
    }

    fn derive_bbox(&self) -> Option<BoundingBox> {
        match self {
            GeoJson::Geometry(geometry) => geometry.derive_bbox(),
            GeoJson::Feature(feature) => feature.derive_bbox(),
            GeoJson::FeatureCollection(feature_collection) => feature_collection.derive_bbox(),
        }
    }
}

impl<T: Bounded> Bounded for [T] {
    fn derive_bbox(&self) -> Option<BoundingBox> {
        merge_all(self.iter().map(Bounded::bbox))
    }
}
