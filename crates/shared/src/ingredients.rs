//! Ingredient normalization and the fixed ingredient groups shared by the
//! prompt builder, the cooking tips and the fallback scorer.
//!
//! Group membership is an exact, case-insensitive comparison against the whole
//! ingredient name ("olive oil" is a healthy fat, "extra virgin olive oil" is not).

pub const PROTEINS: &[&str] = &["chicken", "beef", "pork", "fish", "tofu"];
pub const AROMATICS: &[&str] = &["garlic", "onion", "ginger", "shallots"];
pub const FRESH_HERBS: &[&str] = &["basil", "cilantro", "parsley", "mint"];
pub const VEGETABLES: &[&str] = &[
    "tomato", "pepper", "onion", "carrot", "broccoli", "spinach", "mushroom",
];

/// Proteins that mark a dish as protein-based when classifying recipe types.
pub const MAIN_PROTEINS: &[&str] = &["chicken", "beef", "pork", "lamb", "fish", "salmon", "cod"];
/// Vegetables counted when deciding whether a dish is vegetable-led.
pub const DISH_VEGETABLES: &[&str] = &[
    "tomato", "onion", "pepper", "zucchini", "eggplant", "spinach", "broccoli",
];
pub const SPICES: &[&str] = &["cumin", "coriander", "turmeric", "paprika"];

/// Groups used by the nutritional insight of the fallback recommendation.
pub const NUTRITION_PROTEINS: &[&str] = &["chicken", "beef", "fish", "tofu", "beans", "lentils"];
pub const NUTRITION_VEGETABLES: &[&str] = &[
    "tomato", "spinach", "broccoli", "pepper", "carrot", "onion", "mushroom",
];
pub const HEALTHY_FATS: &[&str] = &["avocado", "olive oil", "nuts", "salmon"];
pub const COMPLEX_CARBS: &[&str] = &["rice", "quinoa", "pasta", "potatoes", "sweet potatoes"];

/// Split a comma separated ingredient string into trimmed, non-empty names,
/// keeping the order the user typed them in.
pub fn normalize_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|ingredient| !ingredient.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn is_in_group(ingredient: &str, group: &[&str]) -> bool {
    let ingredient = ingredient.to_lowercase();
    group.iter().any(|member| *member == ingredient)
}

pub fn any_in_group<S: AsRef<str>>(ingredients: &[S], group: &[&str]) -> bool {
    ingredients
        .iter()
        .any(|ingredient| is_in_group(ingredient.as_ref(), group))
}

/// Number of entries in `ingredients` that belong to `group`, repeats included.
pub fn entries_in_group<S: AsRef<str>>(ingredients: &[S], group: &[&str]) -> usize {
    ingredients
        .iter()
        .filter(|ingredient| is_in_group(ingredient.as_ref(), group))
        .count()
}

/// Number of distinct members of `group` present in `ingredients`.
pub fn count_in_group<S: AsRef<str>>(ingredients: &[S], group: &[&str]) -> usize {
    group
        .iter()
        .filter(|member| {
            ingredients
                .iter()
                .any(|ingredient| ingredient.as_ref().to_lowercase() == **member)
        })
        .count()
}
