//! Per-attribute distance functions
//!
//! Each function returns a non-negative dissimilarity where 0.0 means
//! identical. All of them are symmetric in their two arguments.

use ahash::AHashSet;
use shaker_core::{FlavorProfile, Ingredient, LocalizedText, TasteDimension};

/// Items that can be compared by a canonical, case-folded name
pub trait CanonicalName {
    /// The comparison key, or `None` when the item has no usable name
    fn canonical_name(&self) -> Option<String>;
}

impl CanonicalName for Ingredient {
    fn canonical_name(&self) -> Option<String> {
        match self {
            Ingredient::Plain(name) => normalize(name),
            Ingredient::Structured(s) => normalize(&s.name.en),
        }
    }
}

impl CanonicalName for LocalizedText {
    fn canonical_name(&self) -> Option<String> {
        normalize(&self.en)
    }
}

impl CanonicalName for str {
    fn canonical_name(&self) -> Option<String> {
        normalize(self)
    }
}

impl CanonicalName for String {
    fn canonical_name(&self) -> Option<String> {
        normalize(self)
    }
}

impl<T: CanonicalName + ?Sized> CanonicalName for &T {
    fn canonical_name(&self) -> Option<String> {
        (**self).canonical_name()
    }
}

fn normalize(name: &str) -> Option<String> {
    let key = name.trim().to_lowercase();
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// Collect the canonical keys of a list, dropping unnamed items
pub fn canonical_set<T: CanonicalName>(items: &[T]) -> AHashSet<String> {
    items.iter().filter_map(|item| item.canonical_name()).collect()
}

/// Size of the symmetric difference between two name sets.
///
/// If either side is missing (`None`), returns `penalty` so that one
/// malformed record still gets a finite, comparable distance.
pub fn set_distance<A, B>(a: Option<&[A]>, b: Option<&[B]>, penalty: f64) -> f64
where
    A: CanonicalName,
    B: CanonicalName,
{
    match (a, b) {
        (Some(a), Some(b)) => {
            let set_a = canonical_set(a);
            let set_b = canonical_set(b);
            set_a.symmetric_difference(&set_b).count() as f64
        }
        _ => penalty,
    }
}

/// Sum of absolute differences over body, complexity, sourness and sweetness.
///
/// Not normalized: both profiles are expected on the same 0-5 scale. A
/// dimension missing on either side contributes `penalty`.
pub fn taste_distance(a: &FlavorProfile, b: &FlavorProfile, penalty: f64) -> f64 {
    TasteDimension::ALL
        .iter()
        .map(|dim| match (a.get(*dim), b.get(*dim)) {
            (Some(x), Some(y)) => (x - y).abs(),
            _ => penalty,
        })
        .sum()
}

/// 1.0 when both bubble flags are known and differ, otherwise 0.0.
/// Unknown never penalizes.
pub fn bubble_distance(a: &FlavorProfile, b: &FlavorProfile) -> f64 {
    match (a.bubbles, b.bubbles) {
        (Some(x), Some(y)) if x != y => 1.0,
        _ => 0.0,
    }
}

/// Full flavor profile comparison: taste dimensions plus bubbles
pub fn profile_distance(a: &FlavorProfile, b: &FlavorProfile, penalty: f64) -> f64 {
    taste_distance(a, b, penalty) + bubble_distance(a, b)
}
