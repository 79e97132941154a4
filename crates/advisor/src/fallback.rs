//! Local recommendation used when the language model is unavailable.
//!
//! Recipe selection is deterministic: recipes are sorted into category
//! buckets and the first non-empty bucket in [`SELECTION_PRIORITY`] supplies
//! the recommendation. Only the supplementary tips are drawn from a
//! [`RandomSource`].

use smart_recipe_shared::{
    Cuisine, Recipe,
    ingredients::{
        COMPLEX_CARBS, HEALTHY_FATS, NUTRITION_PROTEINS, NUTRITION_VEGETABLES, any_in_group,
        count_in_group,
    },
};
use strum::{AsRefStr, Display, IntoStaticStr};

use crate::random::{RandomSource, pick};

#[derive(Debug, Clone, Copy)]
pub struct FallbackContext<'a> {
    pub recipes: &'a [Recipe],
    pub ingredients: &'a [String],
    pub cuisine: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredRecipe<'a> {
    pub recipe: &'a Recipe,
    pub match_score: f64,
}

/// Category buckets. Each bucket keeps the input order of the recipes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeCategories<'a> {
    pub healthy: Vec<&'a Recipe>,
    pub quick: Vec<&'a Recipe>,
    pub cuisine_specific: Vec<&'a Recipe>,
    pub ingredient_match: Vec<ScoredRecipe<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    CuisineSpecific,
    Healthy,
    Quick,
    IngredientMatch,
}

/// Buckets consulted by [`generate_recommendation`], highest priority first.
/// When all are empty the first search result is recommended.
pub const SELECTION_PRIORITY: [Category; 4] = [
    Category::CuisineSpecific,
    Category::Healthy,
    Category::Quick,
    Category::IngredientMatch,
];

const HEALTH_KEYWORDS: &[&str] = &[
    "salad", "grilled", "baked", "steamed", "fresh", "vegetable", "light", "healthy",
];
const QUICK_KEYWORDS: &[&str] = &[
    "easy", "quick", "simple", "fast", "15-minute", "30-minute", "ready",
];
const QUICK_MINUTES: u32 = 30;
const LONG_MINUTES: u32 = 60;
const MATCH_THRESHOLD: f64 = 0.5;

fn cuisine_keywords(cuisine: Option<Cuisine>) -> &'static [&'static str] {
    match cuisine {
        Some(Cuisine::Italian) => &["pasta", "pizza", "risotto", "lasagna", "gnocchi", "bruschetta"],
        Some(Cuisine::Indian) => &["curry", "tikka", "biryani", "masala", "naan", "samosa", "korma"],
        Some(Cuisine::Chinese) => &[
            "stir-fry", "fried rice", "noodles", "dumplings", "wok", "sweet and sour",
        ],
        Some(Cuisine::Mexican) => &["taco", "burrito", "quesadilla", "enchilada", "salsa", "guacamole"],
        Some(Cuisine::Mediterranean) => &["hummus", "falafel", "tabbouleh", "gyro", "kebab", "tzatziki"],
        Some(Cuisine::Thai) => &["curry", "pad thai", "stir-fry", "coconut", "lemongrass", "basil"],
        Some(Cuisine::Pakistani) => &["karahi", "biryani", "korma", "kebab", "naan", "haleem"],
        Some(Cuisine::American) => &["burger", "bbq", "grilled", "sandwich", "fries", "mac and cheese"],
        None => &[],
    }
}

fn contains_any(title: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| title.contains(keyword))
}

/// Share of `ingredients` that match the title, in `[0, 1]`.
///
/// An ingredient matches when it is a substring of the lowercased title, or
/// when the first word of the title is a substring of the ingredient.
/// `ingredients` must already be lowercased. An empty list scores `0.0`.
pub fn ingredient_match_score(title: &str, ingredients: &[String]) -> f64 {
    if ingredients.is_empty() {
        return 0.0;
    }

    let title = title.to_lowercase();
    let first_word = title.split(' ').next().unwrap_or_default();
    let matched = ingredients
        .iter()
        .filter(|ingredient| title.contains(ingredient.as_str()) || ingredient.contains(first_word))
        .count();

    matched as f64 / ingredients.len() as f64
}

/// Sort recipes into category buckets in a single pass.
/// A recipe may land in several buckets.
pub fn analyze_recipes<'a>(
    recipes: &'a [Recipe],
    ingredients: &[String],
    cuisine: Option<&str>,
) -> RecipeCategories<'a> {
    let ingredients: Vec<String> = ingredients
        .iter()
        .map(|ingredient| ingredient.trim().to_lowercase())
        .collect();
    let cuisine_words = cuisine.map(|name| cuisine_keywords(Cuisine::recognize(name)));
    let mut categories = RecipeCategories::default();

    for recipe in recipes {
        let title = recipe.title.to_lowercase();

        if contains_any(&title, HEALTH_KEYWORDS) {
            categories.healthy.push(recipe);
        }

        let quick_by_time = recipe
            .ready_in_minutes
            .is_some_and(|minutes| minutes <= QUICK_MINUTES);
        if contains_any(&title, QUICK_KEYWORDS) || quick_by_time {
            categories.quick.push(recipe);
        }

        if let Some(words) = cuisine_words
            && contains_any(&title, words)
        {
            categories.cuisine_specific.push(recipe);
        }

        let match_score = ingredient_match_score(&recipe.title, &ingredients);
        if match_score > MATCH_THRESHOLD {
            categories.ingredient_match.push(ScoredRecipe {
                recipe,
                match_score,
            });
        }
    }

    categories
}

impl<'a> RecipeCategories<'a> {
    /// First recipe of the bucket. The ingredient bucket yields its best
    /// score, earliest recipe first on ties.
    pub fn best(&self, category: Category) -> Option<&'a Recipe> {
        match category {
            Category::CuisineSpecific => self.cuisine_specific.first().copied(),
            Category::Healthy => self.healthy.first().copied(),
            Category::Quick => self.quick.first().copied(),
            Category::IngredientMatch => self
                .ingredient_match
                .iter()
                .fold(None::<&ScoredRecipe<'a>>, |best, candidate| match best {
                    Some(best) if best.match_score >= candidate.match_score => Some(best),
                    _ => Some(candidate),
                })
                .map(|scored| scored.recipe),
        }
    }

    /// The selected recipe and the bucket it came from, `None` for the
    /// first-result fallback.
    pub fn select(&self) -> Option<(Category, &'a Recipe)> {
        SELECTION_PRIORITY
            .iter()
            .find_map(|category| self.best(*category).map(|recipe| (*category, recipe)))
    }
}

const HEALTH_TIPS: &[&str] = &[
    "Add extra vegetables to boost nutrition without compromising flavor!",
    "Consider using less salt and more herbs for a healthier seasoning approach.",
    "Grilling or baking instead of frying can make this even healthier!",
    "Add a side salad to complete this nutritious meal.",
];

const QUICK_TIPS: &[&str] = &[
    "Prep all your ingredients before you start cooking for even faster results!",
    "A hot pan is your best friend for quick cooking - get it properly heated first.",
    "Cut ingredients uniformly for even cooking in less time.",
    "Multitask by prepping the next ingredient while one is cooking.",
];

const GENERAL_TIPS: &[&str] = &[
    "Taste as you go and adjust seasoning gradually - you can always add more!",
    "Fresh herbs at the end of cooking brighten flavors dramatically.",
    "A squeeze of lemon or lime can brighten almost any dish.",
    "Don't crowd the pan - cook in batches if needed for better browning.",
    "Let meat rest after cooking to redistribute juices for maximum flavor.",
];

const INGREDIENT_TIPS: &[(&str, &str)] = &[
    ("chicken", "Let chicken rest for 5 minutes after cooking to keep it juicy!"),
    (
        "tomatoes",
        "Use ripe tomatoes for the best flavor, or canned when fresh aren't available.",
    ),
    (
        "garlic",
        "Sauté garlic slowly over medium heat to prevent burning and develop sweetness.",
    ),
    (
        "onion",
        "Caramelize onions slowly for deep, sweet flavor that enhances any dish.",
    ),
    (
        "rice",
        "Rinse rice before cooking and let it rest covered for 10 minutes after cooking.",
    ),
    ("pasta", "Save some pasta water to add to your sauce for perfect consistency!"),
];

const SUBSTITUTIONS: &[(&str, &[&str])] = &[
    ("chicken", &["tofu", "paneer", "chickpeas", "white beans"]),
    ("beef", &["mushrooms", "lentils", "black beans", "portobello"]),
    (
        "tomatoes",
        &["red bell peppers", "canned tomatoes", "tomato paste", "paprika"],
    ),
    ("onions", &["shallots", "leeks", "green onions", "fennel"]),
    ("garlic", &["garlic powder", "shallots", "onion powder", "ginger"]),
    ("rice", &["quinoa", "couscous", "pasta", "potatoes"]),
    ("pasta", &["rice", "potatoes", "bread", "polenta"]),
];

/// Nutritional insights, first matching rule wins.
enum NutritionRule {
    Any(&'static [&'static str]),
    AtLeast(usize, &'static [&'static str]),
}

const NUTRITION_INSIGHTS: &[(NutritionRule, &str)] = &[
    (
        NutritionRule::Any(NUTRITION_PROTEINS),
        "This dish provides good protein for muscle maintenance and satiety.",
    ),
    (
        NutritionRule::AtLeast(3, NUTRITION_VEGETABLES),
        "Packed with vegetables, this meal provides essential vitamins and fiber.",
    ),
    (
        NutritionRule::Any(HEALTHY_FATS),
        "Contains healthy fats that support heart health and brain function.",
    ),
    (
        NutritionRule::Any(COMPLEX_CARBS),
        "Provides complex carbohydrates for sustained energy throughout the day.",
    ),
];

const BALANCED_INSIGHT: &str = "This recipe offers a good balance of nutrients for a healthy meal.";

pub fn nutritional_insight(ingredients: &[String]) -> &'static str {
    NUTRITION_INSIGHTS
        .iter()
        .find(|(rule, _)| match rule {
            NutritionRule::Any(group) => any_in_group(ingredients, group),
            NutritionRule::AtLeast(count, group) => count_in_group(ingredients, group) >= *count,
        })
        .map(|(_, insight)| *insight)
        .unwrap_or(BALANCED_INSIGHT)
}

fn cuisine_tip(cuisine: Option<&str>, rng: &mut dyn RandomSource) -> &'static str {
    match cuisine.and_then(Cuisine::recognize) {
        Some(Cuisine::Italian) => {
            "For authentic Italian flavor, use high-quality olive oil and fresh herbs. Don't overcook your pasta!"
        }
        Some(Cuisine::Indian) => {
            "Toast your spices before adding them to release their aromas. Ghee adds authentic flavor!"
        }
        Some(Cuisine::Chinese) => {
            "Heat your wok until it smoking hot before adding ingredients for perfect stir-fry results!"
        }
        Some(Cuisine::Mexican) => {
            "Fresh lime juice and cilantro at the end brighten all the flavors. Don't skip the chiles!"
        }
        Some(Cuisine::Mediterranean) => {
            "Extra virgin olive oil and fresh herbs are key. Let ingredients shine simply!"
        }
        Some(Cuisine::Thai) => {
            "Balance is crucial - sweet, sour, salty, and spicy. Fish sauce adds authentic umami!"
        }
        Some(Cuisine::Pakistani) => {
            "Garam masala at the end adds aromatic finish. Slow cooking develops deep flavors!"
        }
        Some(Cuisine::American) => {
            "Don't be afraid to season generously. American cuisine loves bold flavors!"
        }
        None => pick(rng, GENERAL_TIPS),
    }
}

/// Tip for the first ingredient, in input order, that has one.
fn ingredient_tip(ingredients: &[String], rng: &mut dyn RandomSource) -> &'static str {
    ingredients
        .iter()
        .find_map(|ingredient| {
            let ingredient = ingredient.to_lowercase();
            INGREDIENT_TIPS
                .iter()
                .find(|(name, _)| *name == ingredient)
                .map(|(_, tip)| *tip)
        })
        .unwrap_or_else(|| pick(rng, GENERAL_TIPS))
}

fn time_remark(recipe: &Recipe) -> Option<&'static str> {
    match recipe.ready_in_minutes? {
        minutes if minutes <= QUICK_MINUTES => Some("This quick recipe is perfect for busy days!"),
        minutes if minutes > LONG_MINUTES => {
            Some("Take your time with this recipe - good things come to those who wait!")
        }
        _ => None,
    }
}

/// Compose the recommendation sentence for the selected recipe.
///
/// Returns `None` only when there is nothing to recommend.
pub fn generate_recommendation(
    categories: &RecipeCategories<'_>,
    ingredients: &[String],
    cuisine: Option<&str>,
    all_recipes: &[Recipe],
    rng: &mut dyn RandomSource,
) -> Option<String> {
    let selected = categories.select();
    let recipe = selected
        .map(|(_, recipe)| recipe)
        .or_else(|| all_recipes.first())?;

    let (reason, tip) = match selected.map(|(category, _)| category) {
        Some(Category::CuisineSpecific) => (
            format!(
                "This {} dish perfectly matches your preference! ",
                cuisine.unwrap_or_default()
            ),
            cuisine_tip(cuisine, rng),
        ),
        Some(Category::Healthy) => (
            "This looks like a nutritious choice! ".to_owned(),
            pick(rng, HEALTH_TIPS),
        ),
        Some(Category::Quick) => (
            "Perfect for a quick and delicious meal! ".to_owned(),
            pick(rng, QUICK_TIPS),
        ),
        Some(Category::IngredientMatch) => (
            "This recipe makes great use of your ingredients! ".to_owned(),
            ingredient_tip(ingredients, rng),
        ),
        None => (
            "This looks like a delicious option! ".to_owned(),
            pick(rng, GENERAL_TIPS),
        ),
    };

    tracing::debug!(
        recipe = %recipe.title,
        category = selected
            .map(|(category, _)| <&'static str>::from(category))
            .unwrap_or("first-result"),
        "fallback recommendation selected"
    );

    let mut tip = tip.to_owned();
    if let Some(remark) = time_remark(recipe) {
        tip.push(' ');
        tip.push_str(remark);
    }
    tip.push(' ');
    tip.push_str(nutritional_insight(ingredients));

    Some(format!(
        "{reason}I recommend \"{}\" - it looks delicious and should work well with your ingredients. {tip}",
        recipe.title
    ))
}

/// Substitution hints for the ingredients that have known alternatives.
pub fn ingredient_substitutions(ingredients: &[String]) -> String {
    let suggestions: Vec<String> = ingredients
        .iter()
        .filter_map(|ingredient| {
            let lower = ingredient.to_lowercase();
            SUBSTITUTIONS
                .iter()
                .find(|(name, _)| *name == lower)
                .map(|(_, alternatives)| format!("{ingredient} → {}", alternatives.join(" or ")))
        })
        .collect();

    if suggestions.is_empty() {
        "try adding common ingredients like eggs, flour, or herbs".to_owned()
    } else {
        suggestions.join(", ")
    }
}

fn no_recipes_recommendation(ingredients: &[String], cuisine: Option<&str>) -> String {
    let cuisine_hint = cuisine
        .map(|cuisine| format!("Try searching for {cuisine} recipes with these ingredients or "))
        .unwrap_or_default();

    format!(
        "No recipes found with those exact ingredients. {cuisine_hint}try these alternatives: {}. \
         Also, consider adding common pantry items like onions, garlic, or olive oil to expand your options!",
        ingredient_substitutions(ingredients)
    )
}

/// Recommendation text produced without the language model.
pub fn generate_smart_recommendation(
    context: &FallbackContext<'_>,
    rng: &mut dyn RandomSource,
) -> String {
    let categories = analyze_recipes(context.recipes, context.ingredients, context.cuisine);

    generate_recommendation(
        &categories,
        context.ingredients,
        context.cuisine,
        context.recipes,
        rng,
    )
    .unwrap_or_else(|| no_recipes_recommendation(context.ingredients, context.cuisine))
}
