use crate::ingredient::Ingredient;
use crate::lenient;
use crate::profile::FlavorProfile;
use crate::text::LocalizedText;
use serde::{Deserialize, Serialize};

/// A cocktail from the catalog.
///
/// List fields are `None` when the source record is missing them or holds
/// something other than a list. Distance treats `None` as malformed and
/// penalizes it, while an empty list is a legitimate "no entries".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cocktail {
    pub name: LocalizedText,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub flavor_profile: FlavorProfile,
    #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
    pub flavor_descriptors: Option<Vec<LocalizedText>>,
    #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
    pub base_spirits: Option<Vec<Ingredient>>,
    #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
    pub liqueurs: Option<Vec<Ingredient>>,
    #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<Ingredient>>,
}

impl Cocktail {
    /// Create a cocktail with an empty profile and empty ingredient lists
    pub fn new(name: impl Into<LocalizedText>) -> Self {
        Self {
            name: name.into(),
            flavor_profile: FlavorProfile::default(),
            flavor_descriptors: Some(Vec::new()),
            base_spirits: Some(Vec::new()),
            liqueurs: Some(Vec::new()),
            ingredients: Some(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_profile(mut self, profile: FlavorProfile) -> Self {
        self.flavor_profile = profile;
        self
    }

    #[must_use]
    pub fn with_descriptors<I, T>(mut self, descriptors: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<LocalizedText>,
    {
        self.flavor_descriptors = Some(descriptors.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_base_spirits<I, T>(mut self, spirits: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Ingredient>,
    {
        self.base_spirits = Some(spirits.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_liqueurs<I, T>(mut self, liqueurs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Ingredient>,
    {
        self.liqueurs = Some(liqueurs.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_ingredients<I, T>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Ingredient>,
    {
        self.ingredients = Some(ingredients.into_iter().map(Into::into).collect());
        self
    }

    #[inline]
    pub fn is_mocktail(&self) -> bool {
        self.flavor_profile.is_mocktail()
    }

    /// True when the cocktail has a name and every list field is present
    pub fn is_well_formed(&self) -> bool {
        !self.name.is_blank()
            && self.flavor_descriptors.is_some()
            && self.base_spirits.is_some()
            && self.liqueurs.is_some()
            && self.ingredients.is_some()
    }
}
