//! Recommendation text for a set of candidate recipes.
//!
//! Two paths produce the suggestion shown next to the recipe cards:
//! - [`prompt`] builds the system and user messages for the language model,
//!   enriched with [`tips`].
//! - [`fallback`] composes a recommendation locally when the model is unavailable.

pub mod fallback;
pub mod prompt;
mod random;
pub mod tips;

pub use fallback::{FallbackContext, generate_smart_recommendation};
pub use prompt::{
    AiRecommendationContext, CookingTimePreference, NutritionalFocus, generate_dynamic_prompt,
    generate_enhanced_user_prompt, generate_user_prompt,
};
pub use random::{RandomSource, StdRandom};
pub use tips::{RecipeType, RecipeTypeContext, contextual_cooking_tip, preparation_order_tip};
