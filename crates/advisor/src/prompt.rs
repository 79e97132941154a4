//! System and user messages for the language-model recommendation.

use smart_recipe_shared::{
    Cuisine, RecipeSummary,
    ingredients::{AROMATICS, FRESH_HERBS, PROTEINS, VEGETABLES, any_in_group},
};
use strum::{AsRefStr, Display, EnumString};

use crate::tips::{RecipeTypeContext, contextual_cooking_tip};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum CookingTimePreference {
    Quick,
    Moderate,
    #[default]
    Any,
}

impl CookingTimePreference {
    /// Unrecognized values mean no preference.
    pub fn parse_or_any(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    fn context(self) -> &'static str {
        match self {
            CookingTimePreference::Quick => {
                "User prefers quick meals under 30 minutes - focus on efficient cooking methods"
            }
            CookingTimePreference::Moderate => {
                "User doesn't mind spending moderate time cooking - can include techniques that build flavor"
            }
            CookingTimePreference::Any => {
                "User is flexible with cooking time - can suggest both quick and elaborate preparations"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum NutritionalFocus {
    Balanced,
    HighProtein,
    LowCarb,
    Vegetarian,
    #[default]
    Any,
}

impl NutritionalFocus {
    /// Unrecognized values mean no focus.
    pub fn parse_or_any(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    fn context(self) -> &'static str {
        match self {
            NutritionalFocus::Balanced => {
                "Focus on recipes with a good balance of macronutrients - protein, carbs, and healthy fats."
            }
            NutritionalFocus::HighProtein => {
                "Prioritize recipes rich in protein sources like lean meats, fish, legumes, or tofu."
            }
            NutritionalFocus::LowCarb => {
                "Focus on recipes that are lower in carbohydrates, emphasizing vegetables and proteins."
            }
            NutritionalFocus::Vegetarian => {
                "Focus on plant-based recipes that are nutritionally complete with protein from various sources."
            }
            NutritionalFocus::Any => {
                "No specific nutritional focus - recommend based on flavor and cooking techniques."
            }
        }
    }
}

/// Everything the prompt builder knows about one request.
#[derive(Debug, Clone, Default)]
pub struct AiRecommendationContext {
    pub ingredients: Vec<String>,
    pub cuisine: Option<String>,
    pub recipes: Vec<RecipeSummary>,
    pub dietary_preferences: Vec<String>,
    pub cooking_time_preference: Option<CookingTimePreference>,
    pub nutritional_focus: Option<NutritionalFocus>,
}

const PERSONA: &str = "You are an expert chef and nutritionist with deep knowledge of various cuisines and cooking techniques.
Based on the available ingredients and recipe options, provide personalized recommendations that consider:
1. Flavor compatibility of ingredients
2. Nutritional balance and health benefits
3. Cooking techniques that enhance the ingredients
4. Cuisine-specific preparation methods
5. Practical cooking tips for better results
6. Nutritional insights about the recommended dish

Keep your response under 150 words, be encouraging, and provide actionable advice.";

const GENERIC_CUISINE_CONTEXT: &str =
    "Focus on techniques that enhance the natural flavors of the ingredients.";
const GENERIC_INGREDIENT_INSIGHT: &str =
    "Focus on techniques that bring out the best in these ingredients.";

const CLOSING_QUESTION: &str =
    "Which recipe would you recommend and what specific tips can you provide to make it exceptional?";

fn cuisine_context(cuisine: Option<Cuisine>) -> &'static str {
    match cuisine {
        Some(Cuisine::Italian) => {
            "Italian cuisine emphasizes fresh ingredients, olive oil, herbs like basil and oregano, and proper pasta cooking techniques."
        }
        Some(Cuisine::Indian) => {
            "Indian cuisine uses complex spice blends, ghee, and techniques like tempering (tadka) for deep flavor development."
        }
        Some(Cuisine::Chinese) => {
            "Chinese cuisine focuses on balance, wok cooking techniques, and the interplay of sweet, sour, salty, and bitter flavors."
        }
        Some(Cuisine::Mexican) => {
            "Mexican cuisine features chiles, cilantro, lime, and techniques like roasting and slow-cooking for depth."
        }
        Some(Cuisine::Mediterranean) => {
            "Mediterranean cuisine highlights olive oil, fresh herbs, garlic, and simple preparations that let ingredients shine."
        }
        Some(Cuisine::Thai) => {
            "Thai cuisine balances sweet, sour, salty, and spicy flavors with fresh herbs and aromatic ingredients."
        }
        Some(Cuisine::Pakistani) => {
            "Pakistani cuisine uses aromatic spices, ghee, and techniques like dum (slow steaming) for rich flavors."
        }
        Some(Cuisine::American) => {
            "American cuisine is diverse, often featuring grilling, smoking, and comfort food preparations."
        }
        None => GENERIC_CUISINE_CONTEXT,
    }
}

/// Ingredient groups and their hints, in output order.
const INGREDIENT_INSIGHTS: &[(&[&str], &str)] = &[
    (
        PROTEINS,
        "Protein present - consider marination techniques and proper cooking temperatures",
    ),
    (
        AROMATICS,
        "Aromatics available - focus on proper sautéing techniques for flavor base",
    ),
    (
        FRESH_HERBS,
        "Fresh herbs available - add at the end to preserve flavor and aroma",
    ),
    (
        VEGETABLES,
        "Fresh vegetables - consider cooking methods that preserve texture and nutrients",
    ),
];

fn ingredient_insights(ingredients: &[String]) -> String {
    let insights: Vec<&str> = INGREDIENT_INSIGHTS
        .iter()
        .filter(|(group, _)| any_in_group(ingredients, group))
        .map(|(_, insight)| *insight)
        .collect();

    if insights.is_empty() {
        GENERIC_INGREDIENT_INSIGHT.to_owned()
    } else {
        insights.join(". ")
    }
}

/// Build the system message. Pure function of the context.
pub fn generate_dynamic_prompt(context: &AiRecommendationContext) -> String {
    let mut prompt = PERSONA.to_owned();

    if let Some(cuisine) = context.cuisine.as_deref() {
        prompt.push_str("\n\nCuisine Context: ");
        prompt.push_str(cuisine_context(Cuisine::recognize(cuisine)));
    }

    if !context.ingredients.is_empty() {
        prompt.push_str("\n\nIngredient Insights: ");
        prompt.push_str(&ingredient_insights(&context.ingredients));
    }

    if !context.dietary_preferences.is_empty() {
        prompt.push_str(&format!(
            "\n\nDietary Considerations: User prefers {} options.",
            context.dietary_preferences.join(", ")
        ));
    }

    if let Some(preference) = context.cooking_time_preference {
        prompt.push_str("\n\nTime Preference: ");
        prompt.push_str(preference.context());
    }

    if let Some(focus) = context
        .nutritional_focus
        .filter(|focus| *focus != NutritionalFocus::Any)
    {
        prompt.push_str("\n\nNutritional Focus: ");
        prompt.push_str(focus.context());
    }

    prompt
}

fn recipe_listing(context: &AiRecommendationContext) -> String {
    let mut prompt = format!("I have these ingredients: {}", context.ingredients.join(", "));

    if let Some(cuisine) = context.cuisine.as_deref() {
        prompt.push_str(&format!(" and I'd like to make {cuisine} cuisine"));
    }

    prompt.push_str(". Here are the recipe options I found:\n");

    for (index, recipe) in context.recipes.iter().enumerate() {
        prompt.push_str(&format!("{}. {}", index + 1, recipe.title));
        if let Some(minutes) = recipe.ready_in_minutes {
            prompt.push_str(&format!(" ({minutes} minutes)"));
        }
        prompt.push('\n');
    }

    prompt
}

/// Build the user message, with a cooking tip for the first recipe.
/// Deterministic: identical input yields identical text.
pub fn generate_enhanced_user_prompt(context: &AiRecommendationContext) -> String {
    let mut prompt = recipe_listing(context);

    if let Some(first) = context.recipes.first() {
        let tip = contextual_cooking_tip(&RecipeTypeContext {
            recipe_title: &first.title,
            ingredients: &context.ingredients,
            cuisine: context.cuisine.as_deref(),
        });
        prompt.push_str("\n\nAdditional context: ");
        prompt.push_str(&tip);
    }

    prompt.push_str("\n\n");
    prompt.push_str(CLOSING_QUESTION);
    prompt
}

/// Build the user message without the contextual tip.
pub fn generate_user_prompt(context: &AiRecommendationContext) -> String {
    let mut prompt = recipe_listing(context);
    prompt.push('\n');
    prompt.push_str(CLOSING_QUESTION);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferences_parse_with_any_fallback() {
        assert_eq!(CookingTimePreference::parse_or_any("quick"), CookingTimePreference::Quick);
        assert_eq!(CookingTimePreference::parse_or_any("slow"), CookingTimePreference::Any);
        assert_eq!(NutritionalFocus::parse_or_any("high-protein"), NutritionalFocus::HighProtein);
        assert_eq!(NutritionalFocus::parse_or_any("keto"), NutritionalFocus::Any);
    }

    #[test]
    fn ingredient_insights_join_matching_groups() {
        let ingredients = vec!["Chicken".to_owned(), "basil".to_owned()];
        assert_eq!(
            ingredient_insights(&ingredients),
            "Protein present - consider marination techniques and proper cooking temperatures. \
             Fresh herbs available - add at the end to preserve flavor and aroma"
        );
    }

    #[test]
    fn onion_counts_as_aromatic_and_vegetable() {
        let insights = ingredient_insights(&["onion".to_owned()]);
        assert!(insights.starts_with("Aromatics available"));
        assert!(insights.ends_with("preserve texture and nutrients"));
    }

    #[test]
    fn unmatched_ingredients_get_generic_insight() {
        assert_eq!(ingredient_insights(&["flour".to_owned()]), GENERIC_INGREDIENT_INSIGHT);
    }
}
