//! Distance weights configuration
//!
//! Defines how much each attribute category contributes to the total
//! distance between two cocktails, plus the two fixed constants used for
//! malformed data and for alcoholic/mocktail mismatches.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Weight of the flavor profile term (taste dimensions plus bubbles)
pub const TASTE_WEIGHT: f64 = 3.0;
/// Weight of the flavor descriptor set term
pub const DESCRIPTOR_WEIGHT: f64 = 2.5;
/// Weight of the base spirit set term
pub const BASE_SPIRIT_WEIGHT: f64 = 2.0;
/// Weight of the liqueur set term
pub const LIQUEUR_WEIGHT: f64 = 1.5;
/// Weight of the remaining ingredient set term
pub const INGREDIENT_WEIGHT: f64 = 1.0;
/// Raw distance substituted for a missing list or taste dimension
pub const MALFORMED_SET_PENALTY: f64 = 5.0;
/// Distance between an alcoholic cocktail and a mocktail
pub const MOCKTAIL_MISMATCH_DISTANCE: f64 = 1000.0;

/// The weighted terms of the aggregate distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    /// Taste dimensions and bubbles
    Taste,
    Descriptors,
    BaseSpirits,
    Liqueurs,
    Ingredients,
}

impl Component {
    pub const ALL: [Component; 5] = [
        Component::Taste,
        Component::Descriptors,
        Component::BaseSpirits,
        Component::Liqueurs,
        Component::Ingredients,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Taste => "taste",
            Component::Descriptors => "descriptors",
            Component::BaseSpirits => "base_spirits",
            Component::Liqueurs => "liqueurs",
            Component::Ingredients => "ingredients",
        }
    }
}

/// Weights and constants for the aggregate distance.
///
/// Every field has a default, so a JSON document only needs the values it
/// changes, e.g. `{"liqueurs": 2.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceWeights {
    pub taste: f64,
    pub descriptors: f64,
    pub base_spirits: f64,
    pub liqueurs: f64,
    pub ingredients: f64,
    /// Raw distance for a malformed category, applied before weighting
    pub malformed_penalty: f64,
    /// Returned as-is when exactly one side is a mocktail
    pub mocktail_mismatch: f64,
}

impl Default for DistanceWeights {
    fn default() -> Self {
        Self {
            taste: TASTE_WEIGHT,
            descriptors: DESCRIPTOR_WEIGHT,
            base_spirits: BASE_SPIRIT_WEIGHT,
            liqueurs: LIQUEUR_WEIGHT,
            ingredients: INGREDIENT_WEIGHT,
            malformed_penalty: MALFORMED_SET_PENALTY,
            mocktail_mismatch: MOCKTAIL_MISMATCH_DISTANCE,
        }
    }
}

impl DistanceWeights {
    /// Parse weights from JSON and validate them
    pub fn from_json_str(json: &str) -> Result<Self, WeightsError> {
        let weights: DistanceWeights =
            serde_json::from_str(json).map_err(|e| WeightsError::Parse(e.to_string()))?;
        weights.validate()?;
        Ok(weights)
    }

    /// Weight of a single component
    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::Taste => self.taste,
            Component::Descriptors => self.descriptors,
            Component::BaseSpirits => self.base_spirits,
            Component::Liqueurs => self.liqueurs,
            Component::Ingredients => self.ingredients,
        }
    }

    /// Replace the weight of a single component
    pub fn set(&mut self, component: Component, weight: f64) {
        match component {
            Component::Taste => self.taste = weight,
            Component::Descriptors => self.descriptors = weight,
            Component::BaseSpirits => self.base_spirits = weight,
            Component::Liqueurs => self.liqueurs = weight,
            Component::Ingredients => self.ingredients = weight,
        }
    }

    /// Apply per-component overrides, clamping negatives to zero
    ///
    /// Non-finite overrides are ignored and the current weight is kept.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &HashMap<Component, f64>) -> Self {
        for (component, weight) in overrides {
            if !weight.is_finite() {
                warn!("Ignoring non-finite weight override for {}", component.as_str());
                continue;
            }
            self.set(*component, weight.max(0.0));
        }
        self
    }

    /// Validate the weights
    /// - All weights and constants must be finite and non-negative
    /// - The mismatch sentinel must be positive so mismatches sort last
    pub fn validate(&self) -> Result<(), WeightsError> {
        for component in Component::ALL {
            let weight = self.get(component);
            if !weight.is_finite() {
                return Err(WeightsError::NonFinite(component.as_str().to_string()));
            }
            if weight < 0.0 {
                return Err(WeightsError::NegativeWeight(component.as_str().to_string()));
            }
        }

        if !self.malformed_penalty.is_finite() || self.malformed_penalty < 0.0 {
            return Err(WeightsError::InvalidPenalty(self.malformed_penalty));
        }

        if !self.mocktail_mismatch.is_finite() || self.mocktail_mismatch <= 0.0 {
            return Err(WeightsError::InvalidMismatchDistance(self.mocktail_mismatch));
        }

        Ok(())
    }
}

/// Errors that can occur while loading or validating weights
#[derive(Debug, Clone, thiserror::Error)]
pub enum WeightsError {
    #[error("Weight for '{0}' is negative")]
    NegativeWeight(String),

    #[error("Weight for '{0}' is not a finite number")]
    NonFinite(String),

    #[error("Malformed penalty must be a non-negative finite number, got {0}")]
    InvalidPenalty(f64),

    #[error("Mocktail mismatch distance must be a positive finite number, got {0}")]
    InvalidMismatchDistance(f64),

    #[error("Invalid weights document: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = DistanceWeights::default();
        assert_eq!(weights.taste, 3.0);
        assert_eq!(weights.descriptors, 2.5);
        assert_eq!(weights.base_spirits, 2.0);
        assert_eq!(weights.liqueurs, 1.5);
        assert_eq!(weights.ingredients, 1.0);
        assert_eq!(weights.malformed_penalty, 5.0);
        assert_eq!(weights.mocktail_mismatch, 1000.0);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let weights = DistanceWeights::from_json_str(r#"{"liqueurs": 2.0}"#).unwrap();
        assert_eq!(weights.liqueurs, 2.0);
        assert_eq!(weights.taste, TASTE_WEIGHT);
        assert_eq!(weights.mocktail_mismatch, MOCKTAIL_MISMATCH_DISTANCE);
    }

    #[test]
    fn test_negative_weight_error() {
        assert!(matches!(
            DistanceWeights::from_json_str(r#"{"descriptors": -1.0}"#),
            Err(WeightsError::NegativeWeight(ref name)) if name == "descriptors"
        ));
    }

    #[test]
    fn test_invalid_constants() {
        let weights = DistanceWeights {
            mocktail_mismatch: 0.0,
            ..DistanceWeights::default()
        };
        assert!(matches!(
            weights.validate(),
            Err(WeightsError::InvalidMismatchDistance(_))
        ));

        let weights = DistanceWeights {
            malformed_penalty: f64::INFINITY,
            ..DistanceWeights::default()
        };
        assert!(matches!(weights.validate(), Err(WeightsError::InvalidPenalty(_))));

        let weights = DistanceWeights {
            taste: f64::NAN,
            ..DistanceWeights::default()
        };
        assert!(matches!(weights.validate(), Err(WeightsError::NonFinite(_))));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            DistanceWeights::from_json_str(r#"{"taste": "heavy"}"#),
            Err(WeightsError::Parse(_))
        ));
    }

    #[test]
    fn test_overrides_clamp_negative() {
        let overrides = HashMap::from([
            (Component::Liqueurs, 4.0),
            (Component::Ingredients, -2.0),
        ]);
        let weights = DistanceWeights::default().with_overrides(&overrides);
        assert_eq!(weights.liqueurs, 4.0);
        assert_eq!(weights.ingredients, 0.0);
        assert_eq!(weights.taste, TASTE_WEIGHT);
    }

    #[test]
    fn test_overrides_ignore_non_finite() {
        let overrides = HashMap::from([
            (Component::Taste, f64::INFINITY),
            (Component::Descriptors, f64::NAN),
            (Component::BaseSpirits, f64::NEG_INFINITY),
            (Component::Liqueurs, 4.0),
        ]);
        let weights = DistanceWeights::default().with_overrides(&overrides);
        assert_eq!(weights.taste, TASTE_WEIGHT);
        assert_eq!(weights.descriptors, DESCRIPTOR_WEIGHT);
        assert_eq!(weights.base_spirits, BASE_SPIRIT_WEIGHT);
        assert_eq!(weights.liqueurs, 4.0);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_component_serde_names() {
        let json = serde_json::to_string(&Component::BaseSpirits).unwrap();
        assert_eq!(json, "\"base_spirits\"");
        for component in Component::ALL {
            let json = serde_json::to_string(&component).unwrap();
            assert_eq!(json, format!("\"{}\"", component.as_str()));
        }
    }
}
