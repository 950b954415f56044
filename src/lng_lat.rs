use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Debug, Formatter};

/// A longitude/latitude pair in degrees.
#[derive(Clone, Copy, PartialEq)]
pub struct LngLat {
    lng: f64,
    lat: f64,
}
pub type Position = LngLat;

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Reads the first two components of a GeoJSON position. Any elevation is ignored.
    ///
    /// Returns `None` when there are fewer than two components.
    pub fn from_position(position: &[f64]) -> Option<Self> {
        match position {
            [lng, lat, ..] => Some(Self::new(*lng, *lat)),
            _ => None,
        }
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }
}

impl Debug for LngLat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.lng, self.lat)
    }
}

impl From<LngLat> for geojson::Position {
    fn from(value: LngLat) -> Self {
        vec![value.lng, value.lat]
    }
}

impl Serialize for LngLat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.lng, self.lat).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LngLat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (lng, lat) = <(f64, f64)>::deserialize(deserializer)?;
        Ok(Self::new(lng, lat))
    }
}
