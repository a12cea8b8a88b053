//! Weighted aggregate distance between two cocktails
//!
//! Combines the per-attribute distances into one scalar. Alcoholic and
//! non-alcoholic drinks never match: a mismatch short-circuits to the
//! configured sentinel distance.

use crate::distance::{profile_distance, set_distance};
use crate::weights::{Component, DistanceWeights};
use serde::Serialize;
use shaker_core::Cocktail;
use std::collections::{BTreeMap, HashMap};

/// A total distance with its per-component weighted contributions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceBreakdown {
    /// Sum of all weighted contributions, or the mismatch sentinel
    pub total: f64,
    /// True when one side is a mocktail and the other is not
    pub mocktail_mismatch: bool,
    /// Weighted contribution per component; empty on a mocktail mismatch
    pub components: BTreeMap<Component, f64>,
}

impl DistanceBreakdown {
    fn mismatch(sentinel: f64) -> Self {
        Self {
            total: sentinel,
            mocktail_mismatch: true,
            components: BTreeMap::new(),
        }
    }

    /// Weighted contribution of one component (0.0 on a mismatch)
    pub fn get(&self, component: Component) -> f64 {
        self.components.get(&component).copied().unwrap_or(0.0)
    }

    /// The component contributing most to the total, if any contributes
    pub fn dominant_component(&self) -> Option<Component> {
        self.components
            .iter()
            .filter(|(_, value)| **value > 0.0)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(component, _)| *component)
    }
}

/// Computes the weighted distance between cocktails
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scorer {
    weights: DistanceWeights,
}

impl Scorer {
    /// Create a scorer with the given weights
    pub fn new(weights: DistanceWeights) -> Self {
        Self { weights }
    }

    /// Get a reference to the weights
    pub fn weights(&self) -> &DistanceWeights {
        &self.weights
    }

    /// Total distance between two cocktails. Lower is more similar.
    pub fn distance(&self, a: &Cocktail, b: &Cocktail) -> f64 {
        self.breakdown(a, b).total
    }

    /// Total distance plus the weighted contribution of every component
    pub fn breakdown(&self, a: &Cocktail, b: &Cocktail) -> DistanceBreakdown {
        if a.is_mocktail() != b.is_mocktail() {
            return DistanceBreakdown::mismatch(self.weights.mocktail_mismatch);
        }

        let penalty = self.weights.malformed_penalty;
        let mut components = BTreeMap::new();
        let mut total = 0.0;

        for component in Component::ALL {
            let raw = match component {
                Component::Taste => profile_distance(&a.flavor_profile, &b.flavor_profile, penalty),
                Component::Descriptors => set_distance(
                    a.flavor_descriptors.as_deref(),
                    b.flavor_descriptors.as_deref(),
                    penalty,
                ),
                Component::BaseSpirits => {
                    set_distance(a.base_spirits.as_deref(), b.base_spirits.as_deref(), penalty)
                }
                Component::Liqueurs => {
                    set_distance(a.liqueurs.as_deref(), b.liqueurs.as_deref(), penalty)
                }
                Component::Ingredients => {
                    set_distance(a.ingredients.as_deref(), b.ingredients.as_deref(), penalty)
                }
            };

            let weighted = raw * self.weights.get(component);
            components.insert(component, weighted);
            total += weighted;
        }

        DistanceBreakdown {
            total,
            mocktail_mismatch: false,
            components,
        }
    }

    /// Create a new scorer with custom weight overrides
    ///
    /// Overrides replace the weights of the listed components. Other
    /// components keep their current weights. Negative overrides are
    /// clamped to zero and non-finite ones are ignored.
    pub fn with_weights(&self, overrides: &HashMap<Component, f64>) -> Scorer {
        Scorer::new(self.weights.with_overrides(overrides))
    }
}
