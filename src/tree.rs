use crate::bounded::Bounded;
use crate::bounds::merge_all;
use crate::{BoundingBox, Result};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue};
use std::io::Read;

/// Input to the extractor, classified once up front so the recursion never has to guess at
/// the shape of what it's looking at.
#[derive(Debug, Clone)]
pub enum GeometryTree {
    /// A raw `[min_lng, min_lat, max_lng, max_lat, ..]` array. Fewer than four numbers bound
    /// nothing.
    Bounds(Vec<f64>),
    Node(GeoJson),
    Nodes(Vec<GeometryTree>),
}

impl GeometryTree {
    /// Classifies untyped JSON.
    ///
    /// - An array starting with a number is a raw bbox.
    /// - Any other array is a list of trees. Elements which can't be classified are dropped.
    /// - A `Feature`, `FeatureCollection` or `GeometryCollection` object becomes its own `bbox`
    ///   if it carries one, otherwise a list of its classified members.
    /// - Any other object is parsed as a GeoJSON geometry. If that fails, but the object carries
    ///   its own `bbox`, that box is used, since it would have short-circuited the geometry.
    ///
    /// Returns `None` for anything else.
    pub fn from_json_value(value: JsonValue) -> Option<Self> {
        match value {
            JsonValue::Array(elements) => {
                if matches!(elements.first(), Some(JsonValue::Number(_))) {
                    numbers(&elements).map(Self::Bounds)
                } else {
                    let nodes = elements
                        .into_iter()
                        .filter_map(Self::from_json_value)
                        .collect();
                    Some(Self::Nodes(nodes))
                }
            }
            JsonValue::Object(object) => Self::from_json_object(object),
            other => {
                debug!("ignoring unrecognized geometry tree: {other}");
                None
            }
        }
    }

    fn from_json_object(mut object: JsonObject) -> Option<Self> {
        let own_bbox = match object.get("bbox") {
            Some(JsonValue::Array(elements)) => {
                numbers(elements).filter(|bbox| bbox.len() >= 4)
            }
            _ => None,
        };

        // Branching nodes are split up here, so that one bad member only loses its own box.
        let (member, is_collection) = match object.get("type").and_then(JsonValue::as_str) {
            Some("FeatureCollection") => ("features", true),
            Some("GeometryCollection") => ("geometries", true),
            Some("Feature") => ("geometry", false),
            _ => {
                return match GeoJson::from_json_value(JsonValue::Object(object)) {
                    Ok(geojson) => Some(Self::Node(geojson)),
                    Err(e) => {
                        debug!("unable to parse GeoJSON object: {e}");
                        own_bbox.map(Self::Bounds)
                    }
                }
            }
        };
        if let Some(bbox) = own_bbox {
            return Some(Self::Bounds(bbox));
        }

        let nodes = match object.remove(member) {
            None | Some(JsonValue::Null) => vec![],
            Some(JsonValue::Array(elements)) if is_collection => elements
                .into_iter()
                .filter_map(Self::from_json_value)
                .collect(),
            Some(other) => Self::from_json_value(other).into_iter().collect(),
        };
        Some(Self::Nodes(nodes))
    }

    /// Returns `Ok(None)` for well formed JSON which isn't a geometry tree.
    pub fn from_json_str(json: &str) -> Result<Option<Self>> {
        let value: JsonValue = serde_json::from_str(json)?;
        Ok(Self::from_json_value(value))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Option<Self>> {
        let value: JsonValue = serde_json::from_reader(reader)?;
        Ok(Self::from_json_value(value))
    }
}

fn numbers(elements: &[JsonValue]) -> Option<Vec<f64>> {
    elements.iter().map(JsonValue::as_f64).collect()
}

impl Bounded for GeometryTree {
    fn precomputed_bbox(&self) -> Option<&[f64]> {
        match self {
            GeometryTree::Node(geojson) => geojson.precomputed_bbox(),
            GeometryTree::Bounds(_) | GeometryTree::Nodes(_) => None,
        }
    }

    fn derive_bbox(&self) -> Option<BoundingBox> {
        match self {
            GeometryTree::Bounds(components) => BoundingBox::from_slice(components),
            GeometryTree::Node(geojson) => geojson.derive_bbox(),
            GeometryTree::Nodes(nodes) => merge_all(nodes.iter().map(Bounded::bbox)),
        }
    }
}

impl From<BoundingBox> for GeometryTree {
    fn from(value: BoundingBox) -> Self {
        Self::Bounds(value.to_vec())
    }
}

impl From<GeoJson> for GeometryTree {
    fn from(value: GeoJson) -> Self {
        Self::Node(value)
    }
}

impl From<Geometry> for GeometryTree {
    fn from(value: Geometry) -> Self {
        Self::Node(GeoJson::Geometry(value))
    }
}

impl From<Feature> for GeometryTree {
    fn from(value: Feature) -> Self {
        Self::Node(GeoJson::Feature(value))
    }
}

impl From<FeatureCollection> for GeometryTree {
    fn from(value: FeatureCollection) -> Self {
        Self::Node(GeoJson::FeatureCollection(value))
    }
}

impl<T: Into<GeometryTree>> FromIterator<T> for GeometryTree {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Nodes(iter.into_iter().map(Into::into).collect())
    }
}
