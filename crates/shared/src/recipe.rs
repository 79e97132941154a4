use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{AsRefStr, Display, EnumString};

/// One candidate dish as returned by a recipe search.
///
/// Dietary flags are tri-state: `None` means the provider did not say,
/// which is not the same as `Some(false)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cheap: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dairy_free: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gluten_free: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ketogenic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vegan: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vegetarian: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub very_healthy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub very_popular: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whole30: Option<bool>,
}

impl Recipe {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn ready_in(mut self, minutes: u32) -> Self {
        self.ready_in_minutes = Some(minutes);
        self
    }

    /// Identity of this recipe: the numeric id when present, the title otherwise.
    pub fn key(&self) -> RecipeKey {
        match self.id {
            Some(id) => RecipeKey::Id(id),
            None => RecipeKey::Title(self.title.clone()),
        }
    }

    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            title: self.title.clone(),
            ready_in_minutes: self.ready_in_minutes,
            servings: self.servings,
        }
    }

    /// Badges in display order. Only flags explicitly set to `true` produce one.
    pub fn dietary_badges(&self) -> Vec<DietaryBadge> {
        [
            (self.vegan, DietaryBadge::Vegan),
            (self.vegetarian, DietaryBadge::Vegetarian),
            (self.gluten_free, DietaryBadge::GlutenFree),
            (self.dairy_free, DietaryBadge::DairyFree),
        ]
        .into_iter()
        .filter_map(|(flag, badge)| (flag == Some(true)).then_some(badge))
        .collect()
    }

    pub fn health_band(&self) -> Option<HealthBand> {
        let score = self.health_score?;
        Some(if score >= 80.0 {
            HealthBand::High
        } else if score >= 60.0 {
            HealthBand::Medium
        } else {
            HealthBand::Low
        })
    }
}

/// Identity rule for a recipe. The two schemes never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecipeKey {
    Id(u64),
    Title(String),
}

impl fmt::Display for RecipeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeKey::Id(id) => write!(f, "#{id}"),
            RecipeKey::Title(title) => write!(f, "\"{title}\""),
        }
    }
}

/// The slice of a recipe that is handed to the language model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum DietaryBadge {
    Vegan,
    Vegetarian,
    #[strum(serialize = "Gluten-Free")]
    GlutenFree,
    #[strum(serialize = "Dairy-Free")]
    DairyFree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum HealthBand {
    High,
    Medium,
    Low,
}
