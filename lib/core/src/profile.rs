use crate::lenient;
use serde::{Deserialize, Serialize};

/// The four continuous taste dimensions compared by distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TasteDimension {
    Body,
    Complexity,
    Sourness,
    Sweetness,
}

impl TasteDimension {
    pub const ALL: [TasteDimension; 4] = [
        TasteDimension::Body,
        TasteDimension::Complexity,
        TasteDimension::Sourness,
        TasteDimension::Sweetness,
    ];
}

/// Taste shape of a cocktail.
///
/// Taste dimensions are on a 0-5 scale. `booziness` is only meaningful as
/// zero versus non-zero: zero marks a mocktail. Every field is optional so
/// that partially filled catalog entries still load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlavorProfile {
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub body: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub complexity: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub sourness: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub sweetness: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub booziness: Option<f64>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub bubbles: Option<bool>,
}

impl FlavorProfile {
    /// Create a complete profile with unknown bubbles
    pub fn new(body: f64, complexity: f64, sourness: f64, sweetness: f64, booziness: f64) -> Self {
        Self {
            body: Some(body),
            complexity: Some(complexity),
            sourness: Some(sourness),
            sweetness: Some(sweetness),
            booziness: Some(booziness),
            bubbles: None,
        }
    }

    #[must_use]
    pub fn with_bubbles(mut self, bubbles: bool) -> Self {
        self.bubbles = Some(bubbles);
        self
    }

    /// Value of a single taste dimension
    pub fn get(&self, dimension: TasteDimension) -> Option<f64> {
        match dimension {
            TasteDimension::Body => self.body,
            TasteDimension::Complexity => self.complexity,
            TasteDimension::Sourness => self.sourness,
            TasteDimension::Sweetness => self.sweetness,
        }
    }

    /// A mocktail has booziness of exactly zero. Unknown booziness counts
    /// as alcoholic.
    pub fn is_mocktail(&self) -> bool {
        self.booziness == Some(0.0)
    }

    /// True when every taste dimension and booziness is present
    pub fn is_complete(&self) -> bool {
        TasteDimension::ALL.iter().all(|d| self.get(*d).is_some()) && self.booziness.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mocktail_classification() {
        assert!(FlavorProfile::new(2.0, 1.0, 3.0, 4.0, 0.0).is_mocktail());
        assert!(!FlavorProfile::new(2.0, 1.0, 3.0, 4.0, 40.0).is_mocktail());
        assert!(!FlavorProfile::default().is_mocktail());
    }

    #[test]
    fn test_partial_profile_loads() {
        let profile: FlavorProfile = serde_json::from_value(json!({
            "body": 3,
            "sourness": "4",
            "sweetness": "very",
            "booziness": 0,
            "bubbles": true
        }))
        .unwrap();

        assert_eq!(profile.body, Some(3.0));
        assert_eq!(profile.complexity, None);
        assert_eq!(profile.sourness, Some(4.0));
        assert_eq!(profile.sweetness, None);
        assert_eq!(profile.bubbles, Some(true));
        assert!(profile.is_mocktail());
        assert!(!profile.is_complete());
    }

    #[test]
    fn test_dimension_lookup() {
        let profile = FlavorProfile::new(1.0, 2.0, 3.0, 4.0, 10.0).with_bubbles(false);
        let values: Vec<_> = TasteDimension::ALL.iter().map(|d| profile.get(*d)).collect();
        assert_eq!(values, vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
        assert!(profile.is_complete());
    }
}
