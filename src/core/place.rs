//! # Places
//!
//! A `Place` is an immutable record of one vacation destination. Places are
//! built from the detail screen's `PlaceForm`, whose fields are raw text the
//! user typed. Numeric fields are coerced, never rejected: anything that
//! doesn't parse becomes zero.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque reference to an image (URL, content URI, asset path...).
/// The core never loads or validates it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceRef(pub String);

impl ResourceRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Place {
    /// Lookup key for updates. Not unique: duplicates are allowed on insert.
    pub name: String,
    pub lodging_cost_clp: f64,
    pub comments: String,
    pub photos: Vec<ResourceRef>,
    pub reference_image: ResourceRef,
    pub latitude: f64,
    pub longitude: f64,
    pub visit_order: i32,
}

impl Place {
    /// Lodging cost in US dollars at `rate` pesos per dollar.
    /// `None` until a positive rate is known.
    pub fn lodging_cost_usd(&self, rate: f64) -> Option<f64> {
        (rate > 0.0).then(|| self.lodging_cost_clp / rate)
    }

    /// Unnamed marker used by the map preview.
    pub fn at_coordinates(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ..Default::default()
        }
    }
}

/// Parses a decimal the way the detail screen does: trimmed, and `0.0`
/// for anything unparsable (including empty input).
pub fn parse_f64_or_default(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

/// Integer counterpart of [`parse_f64_or_default`].
pub fn parse_i32_or_default(text: &str) -> i32 {
    text.trim().parse::<i32>().unwrap_or(0)
}

/// Raw text of the detail screen's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceForm {
    pub name: String,
    pub visit_order: String,
    pub comments: String,
    pub latitude: String,
    pub longitude: String,
    pub reference_image_url: String,
    pub lodging_price: String,
}

impl PlaceForm {
    /// Prefills the form from the selected place, or leaves it blank.
    pub fn from_place(place: Option<&Place>) -> Self {
        match place {
            Some(p) => Self {
                name: p.name.clone(),
                visit_order: p.visit_order.to_string(),
                comments: p.comments.clone(),
                latitude: p.latitude.to_string(),
                longitude: p.longitude.to_string(),
                reference_image_url: p.reference_image.to_string(),
                lodging_price: p.lodging_cost_clp.to_string(),
            },
            None => Self::default(),
        }
    }

    /// Builds the place to save. The reference image doubles as the only photo.
    pub fn to_place(&self) -> Place {
        let reference_image = ResourceRef::new(self.reference_image_url.clone());
        Place {
            name: self.name.clone(),
            lodging_cost_clp: parse_f64_or_default(&self.lodging_price),
            comments: self.comments.clone(),
            photos: vec![reference_image.clone()],
            reference_image,
            latitude: parse_f64_or_default(&self.latitude),
            longitude: parse_f64_or_default(&self.longitude),
            visit_order: parse_i32_or_default(&self.visit_order),
        }
    }
}
