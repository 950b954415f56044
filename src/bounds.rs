use crate::LngLat;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Debug, Formatter};

/// An axis aligned box: `[min_lng, min_lat, max_lng, max_lat]`.
///
/// Boxes copied through from input data may carry more than four components (e.g. elevation
/// bounds). Those trailing components are kept verbatim, but only the first four ever take part
/// in any arithmetic. Boxes computed by this crate always have exactly four components.
#[derive(Clone, PartialEq)]
pub struct BoundingBox {
    min: LngLat,
    max: LngLat,
    trailing: Vec<f64>,
}

impl Debug for BoundingBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RECT({:?}, {:?})", self.min, self.max)?;
        if !self.trailing.is_empty() {
            write!(f, " {:?}", self.trailing)?;
        }
        Ok(())
    }
}

impl BoundingBox {
    pub fn new(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Self {
        Self {
            min: LngLat::new(min_lng, min_lat),
            max: LngLat::new(max_lng, max_lat),
            trailing: vec![],
        }
    }

    /// The zero width, zero height box containing only `point`.
    pub fn from_point(point: LngLat) -> Self {
        Self {
            min: point,
            max: point,
            trailing: vec![],
        }
    }

    /// Copies a GeoJSON style `bbox` array as-is. The components are not re-validated.
    ///
    /// Returns `None` when there are fewer than four components.
    pub fn from_slice(components: &[f64]) -> Option<Self> {
        match components {
            [min_lng, min_lat, max_lng, max_lat, trailing @ ..] => Some(Self {
                min: LngLat::new(*min_lng, *min_lat),
                max: LngLat::new(*max_lng, *max_lat),
                trailing: trailing.to_vec(),
            }),
            _ => None,
        }
    }

    pub fn min(&self) -> &LngLat {
        &self.min
    }

    pub fn max(&self) -> &LngLat {
        &self.max
    }

    /// Components beyond the first four, only ever present on pass-through boxes.
    pub fn trailing(&self) -> &[f64] {
        &self.trailing
    }

    pub fn component_count(&self) -> usize {
        4 + self.trailing.len()
    }

    pub fn width(&self) -> f64 {
        self.max.lng() - self.min.lng()
    }

    pub fn height(&self) -> f64 {
        self.max.lat() - self.min.lat()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        let mut components = Vec::with_capacity(self.component_count());
        components.extend([
            self.min.lng(),
            self.min.lat(),
            self.max.lng(),
            self.max.lat(),
        ]);
        components.extend_from_slice(&self.trailing);
        components
    }

    pub fn contains(&self, point: &LngLat) -> bool {
        point.lng() >= self.min.lng()
            && point.lng() <= self.max.lng()
            && point.lat() >= self.min.lat()
            && point.lat() <= self.max.lat()
    }

    /// The smallest box containing both `self` and `point`.
    pub fn extended_to_point(&self, point: &LngLat) -> Self {
        Self::new(
            self.min.lng().min(point.lng()),
            self.min.lat().min(point.lat()),
            self.max.lng().max(point.lng()),
            self.max.lat().max(point.lat()),
        )
    }

    /// The smallest box containing both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> Self {
        Self::new(
            self.min.lng().min(other.min.lng()),
            self.min.lat().min(other.min.lat()),
            self.max.lng().max(other.max.lng()),
            self.max.lat().max(other.max.lat()),
        )
    }

    /// Whether the box has both nonzero width and nonzero height.
    ///
    /// Boxes around a single point, or around a perfectly horizontal or vertical line, have no area.
    pub fn has_area(&self) -> bool {
        self.max.lng() != self.min.lng() && self.max.lat() != self.min.lat()
    }

    pub fn center(&self) -> LngLat {
        LngLat::new(
            (self.min.lng() + self.max.lng()) / 2.0,
            (self.min.lat() + self.max.lat()) / 2.0,
        )
    }
}

impl From<BoundingBox> for geojson::Bbox {
    fn from(value: BoundingBox) -> Self {
        value.to_vec()
    }
}

impl Serialize for BoundingBox {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq_serializer = serializer.serialize_seq(Some(self.component_count()))?;
        for component in [
            self.min.lng(),
            self.min.lat(),
            self.max.lng(),
            self.max.lat(),
        ] {
            seq_serializer.serialize_element(&component)?;
        }
        for component in &self.trailing {
            seq_serializer.serialize_element(component)?;
        }
        seq_serializer.end()
    }
}

impl<'de> Deserialize<'de> for BoundingBox {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let components: Vec<f64> = Vec::deserialize(deserializer)?;
        Self::from_slice(&components).ok_or_else(|| {
            <D::Error as serde::de::Error>::invalid_length(
                components.len(),
                &"at least 4 components",
            )
        })
    }
}

/// Grows `bbox` to contain `point`, or starts a new degenerate box at `point` if there is no
/// `bbox` yet.
///
/// Returns `None` if `point` has fewer than two components.
pub fn expand(point: &[f64], bbox: Option<&BoundingBox>) -> Option<BoundingBox> {
    let point = LngLat::from_position(point)?;
    Some(match bbox {
        Some(bbox) => bbox.extended_to_point(&point),
        None => BoundingBox::from_point(point),
    })
}

/// The smallest box containing both inputs. A missing box is ignored, so merging with `None`
/// returns the other box untouched.
pub fn merge(a: Option<BoundingBox>, b: Option<BoundingBox>) -> Option<BoundingBox> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.union(&b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Folds `boxes` together with [`merge`], seeded with the first box.
///
/// Returns `None` for an empty input, or when every box is `None`.
pub fn merge_all<I>(boxes: I) -> Option<BoundingBox>
where
    I: IntoIterator<Item = Option<BoundingBox>>,
{
    boxes.into_iter().reduce(merge).flatten()
}

pub fn has_area(bbox: Option<&BoundingBox>) -> bool {
    bbox.is_some_and(BoundingBox::has_area)
}

/// Passes `bbox` through only if it [has area](BoundingBox::has_area).
pub fn with_area_or_none(bbox: Option<BoundingBox>) -> Option<BoundingBox> {
    bbox.filter(BoundingBox::has_area)
}

pub fn center(bbox: &BoundingBox) -> LngLat {
    bbox.center()
}
