//! Preference queries for the explorer
//!
//! An explorer query is a synthetic target built from slider values and
//! selected ingredients or descriptors. It converts into a cocktail-shaped
//! record with a blank name, so it can be ranked with the same distance
//! function as a real catalog entry and never excludes anything by name.

use serde::{Deserialize, Serialize};
use shaker_core::{Cocktail, FlavorProfile, Ingredient, LocalizedText};

/// Lower bound of a taste slider
pub const SLIDER_MIN: f64 = 0.0;
/// Upper bound of a taste slider
pub const SLIDER_MAX: f64 = 5.0;

/// User-selected preferences.
///
/// Missing sliders default to 0. `booziness` of `Some(0.0)` asks for
/// mocktails; `None` leaves booziness unspecified, which ranks alcoholic
/// drinks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerQuery {
    pub body: f64,
    pub complexity: f64,
    pub sourness: f64,
    pub sweetness: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booziness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bubbles: Option<bool>,
    pub base_spirits: Vec<String>,
    pub liqueurs: Vec<String>,
    pub ingredients: Vec<String>,
    pub descriptors: Vec<String>,
}

impl ExplorerQuery {
    /// Create a query from the four taste sliders
    pub fn new(body: f64, complexity: f64, sourness: f64, sweetness: f64) -> Self {
        Self {
            body,
            complexity,
            sourness,
            sweetness,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn booziness(mut self, booziness: f64) -> Self {
        self.booziness = Some(booziness);
        self
    }

    /// Ask for non-alcoholic drinks only
    #[must_use]
    pub fn mocktail(self) -> Self {
        self.booziness(0.0)
    }

    #[must_use]
    pub fn bubbles(mut self, bubbles: bool) -> Self {
        self.bubbles = Some(bubbles);
        self
    }

    #[must_use]
    pub fn base_spirit(mut self, name: impl Into<String>) -> Self {
        self.base_spirits.push(name.into());
        self
    }

    #[must_use]
    pub fn liqueur(mut self, name: impl Into<String>) -> Self {
        self.liqueurs.push(name.into());
        self
    }

    #[must_use]
    pub fn ingredient(mut self, name: impl Into<String>) -> Self {
        self.ingredients.push(name.into());
        self
    }

    #[must_use]
    pub fn descriptor(mut self, name: impl Into<String>) -> Self {
        self.descriptors.push(name.into());
        self
    }

    /// The target profile, with taste sliders clamped to the 0-5 scale
    pub fn to_profile(&self) -> FlavorProfile {
        FlavorProfile {
            body: Some(clamp_slider(self.body)),
            complexity: Some(clamp_slider(self.complexity)),
            sourness: Some(clamp_slider(self.sourness)),
            sweetness: Some(clamp_slider(self.sweetness)),
            booziness: self.booziness.filter(|b| b.is_finite()).map(|b| b.max(0.0)),
            bubbles: self.bubbles,
        }
    }

    /// Convert into a nameless cocktail for ranking
    pub fn to_cocktail(&self) -> Cocktail {
        Cocktail {
            name: LocalizedText::default(),
            flavor_profile: self.to_profile(),
            flavor_descriptors: Some(self.descriptors.iter().map(LocalizedText::new).collect()),
            base_spirits: Some(self.base_spirits.iter().map(Ingredient::plain).collect()),
            liqueurs: Some(self.liqueurs.iter().map(Ingredient::plain).collect()),
            ingredients: Some(self.ingredients.iter().map(Ingredient::plain).collect()),
        }
    }
}

fn clamp_slider(value: f64) -> f64 {
    if value.is_nan() {
        SLIDER_MIN
    } else {
        value.clamp(SLIDER_MIN, SLIDER_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_to_cocktail() {
        let query = ExplorerQuery::new(3.0, 2.0, 4.0, 1.0)
            .bubbles(true)
            .base_spirit("Gin")
            .liqueur("Chartreuse")
            .ingredient("Lime")
            .descriptor("Herbal");

        let cocktail = query.to_cocktail();
        assert!(cocktail.name.is_blank());
        assert!(!cocktail.is_mocktail());
        assert_eq!(cocktail.flavor_profile.body, Some(3.0));
        assert_eq!(cocktail.flavor_profile.bubbles, Some(true));
        assert_eq!(cocktail.base_spirits, Some(vec![Ingredient::plain("Gin")]));
        assert_eq!(
            cocktail.flavor_descriptors,
            Some(vec![LocalizedText::new("Herbal")])
        );
    }

    #[test]
    fn test_mocktail_query() {
        let query = ExplorerQuery::new(1.0, 1.0, 1.0, 1.0).mocktail();
        assert!(query.to_cocktail().is_mocktail());
    }

    #[test]
    fn test_sliders_are_clamped() {
        let query = ExplorerQuery::new(-2.0, 9.0, f64::NAN, 2.5).booziness(-3.0);
        let profile = query.to_profile();
        assert_eq!(profile.body, Some(0.0));
        assert_eq!(profile.complexity, Some(5.0));
        assert_eq!(profile.sourness, Some(0.0));
        assert_eq!(profile.sweetness, Some(2.5));
        assert!(profile.is_mocktail());
    }

    #[test]
    fn test_deserialize_partial_query() {
        let query: ExplorerQuery = serde_json::from_value(json!({
            "sourness": 4,
            "base_spirits": ["Tequila"]
        }))
        .unwrap();

        assert_eq!(query.sourness, 4.0);
        assert_eq!(query.body, 0.0);
        assert_eq!(query.booziness, None);
        assert_eq!(query.base_spirits, vec!["Tequila".to_string()]);
        assert!(query.liqueurs.is_empty());
    }
}
