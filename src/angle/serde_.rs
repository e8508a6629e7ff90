//! Serde support: an [`Angle`] serializes as its bare degree value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Angle;

impl Serialize for Angle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.degrees())
    }
}

impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Angle::from_degrees)
    }
}
