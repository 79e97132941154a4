//! Cooking tips keyed by recipe type, cuisine and ingredients.

use smart_recipe_shared::{
    Cuisine,
    ingredients::{
        AROMATICS, DISH_VEGETABLES, FRESH_HERBS, MAIN_PROTEINS, SPICES, any_in_group,
        entries_in_group,
    },
};
use strum::{AsRefStr, Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum RecipeType {
    Grilled,
    StirFry,
    Curry,
    Roasted,
    Soup,
    Pasta,
    RiceDish,
    Salad,
    Sauted,
    VegetableDish,
    Baked,
    ProteinDish,
    General,
}

impl RecipeType {
    pub fn tip(self) -> &'static str {
        match self {
            RecipeType::Grilled => {
                "For perfect grilling, preheat your grill to medium-high and oil the grates to prevent sticking."
            }
            RecipeType::StirFry => {
                "Keep ingredients moving in the wok and cook on high heat for the best texture and flavor."
            }
            RecipeType::Curry => {
                "Build layers of flavor by toasting spices first, then aromatics, before adding liquids."
            }
            RecipeType::Roasted => {
                "Use high heat (400-425°F) for caramelization and do not overcrowd the pan."
            }
            RecipeType::Soup => {
                "Start with a good flavor base and simmer slowly to develop deep flavors."
            }
            RecipeType::Pasta => {
                "Cook pasta in well-salted water and save some pasta water to adjust sauce consistency."
            }
            RecipeType::RiceDish => {
                "Rinse rice until water runs clear and let it rest covered for 10 minutes after cooking."
            }
            RecipeType::Salad => {
                "Dress salad just before serving and use a balance of acidic and sweet elements."
            }
            RecipeType::Sauted => {
                "Use medium-high heat and do not overcrowd the pan for proper browning."
            }
            RecipeType::VegetableDish => {
                "Cook vegetables quickly to preserve nutrients and vibrant colors."
            }
            RecipeType::Baked => {
                "Measure ingredients precisely and follow temperature instructions for best results."
            }
            RecipeType::ProteinDish => {
                "Let protein rest after cooking to redistribute juices for maximum flavor."
            }
            RecipeType::General => {
                "Taste as you go and adjust seasoning gradually for the best results."
            }
        }
    }
}

/// Title keyword rule: the first rule with a keyword contained in the title wins.
type TitleRule = (&'static [&'static str], RecipeType);

const PROTEIN_TITLE_RULES: &[TitleRule] = &[
    (&["grill", "bbq"], RecipeType::Grilled),
    (&["stir", "wok"], RecipeType::StirFry),
    (&["curry", "stew"], RecipeType::Curry),
    (&["roast", "baked"], RecipeType::Roasted),
    (&["soup"], RecipeType::Soup),
];

const VEGETABLE_TITLE_RULES: &[TitleRule] = &[
    (&["salad"], RecipeType::Salad),
    (&["soup"], RecipeType::Soup),
    (&["stir", "sauté"], RecipeType::Sauted),
];

const PASTA_TITLES: &[&str] = &["pasta", "spaghetti", "lasagna"];
const PASTA_INGREDIENTS: &[&str] = &["pasta", "spaghetti"];
const RICE_TITLES: &[&str] = &["rice", "risotto", "pilaf"];
const RICE_INGREDIENTS: &[&str] = &["rice"];
const BAKED_TITLES: &[&str] = &["bread", "cake", "pie", "baked"];

fn title_has_any(title: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| title.contains(keyword))
}

fn first_title_rule(title: &str, rules: &[TitleRule]) -> Option<RecipeType> {
    rules
        .iter()
        .find(|(keywords, _)| title_has_any(title, keywords))
        .map(|(_, recipe_type)| *recipe_type)
}

/// Classify a dish from its title and the available ingredients.
///
/// Checked in order: protein-based dishes, pasta, rice, vegetable-led dishes,
/// baked goods, then [`RecipeType::General`].
pub fn determine_recipe_type<S: AsRef<str>>(title: &str, ingredients: &[S]) -> RecipeType {
    let title = title.to_lowercase();

    if any_in_group(ingredients, MAIN_PROTEINS) {
        return first_title_rule(&title, PROTEIN_TITLE_RULES).unwrap_or(RecipeType::ProteinDish);
    }

    if title_has_any(&title, PASTA_TITLES) || any_in_group(ingredients, PASTA_INGREDIENTS) {
        return RecipeType::Pasta;
    }

    if title_has_any(&title, RICE_TITLES) || any_in_group(ingredients, RICE_INGREDIENTS) {
        return RecipeType::RiceDish;
    }

    if entries_in_group(ingredients, DISH_VEGETABLES) >= 2 {
        return first_title_rule(&title, VEGETABLE_TITLE_RULES)
            .unwrap_or(RecipeType::VegetableDish);
    }

    if title_has_any(&title, BAKED_TITLES) {
        return RecipeType::Baked;
    }

    RecipeType::General
}

/// Cuisine specific advice for a recipe type, falling back to the cuisine's
/// general advice. American dishes have no extra advice.
pub fn cuisine_cooking_tip(cuisine: Cuisine, recipe_type: RecipeType) -> Option<&'static str> {
    let tips: &[(RecipeType, &str)] = match cuisine {
        Cuisine::Italian => &[
            (
                RecipeType::Pasta,
                "Use high-quality olive oil and finish with fresh herbs for authentic flavor.",
            ),
            (
                RecipeType::General,
                "Let ingredients shine with simple preparations and high-quality olive oil.",
            ),
        ],
        Cuisine::Indian => &[
            (
                RecipeType::Curry,
                "Toast whole spices before grinding for maximum flavor, and use ghee for richness.",
            ),
            (
                RecipeType::RiceDish,
                "Soak basmati rice for 30 minutes before cooking for fluffy, separate grains.",
            ),
            (
                RecipeType::General,
                "Build flavor layers with spices, and finish with garam masala for aromatic complexity.",
            ),
        ],
        Cuisine::Chinese => &[
            (
                RecipeType::StirFry,
                "Heat your wok until smoking before adding oil for the perfect sear.",
            ),
            (
                RecipeType::RiceDish,
                "Use day-old rice for fried rice to prevent sogginess.",
            ),
            (
                RecipeType::General,
                "Balance flavors and textures, and use high heat for quick cooking.",
            ),
        ],
        Cuisine::Mexican => &[
            (
                RecipeType::General,
                "Fresh lime juice and cilantro at the end brighten all flavors.",
            ),
            (
                RecipeType::VegetableDish,
                "Roast vegetables with chiles and lime for authentic Mexican flavor.",
            ),
        ],
        Cuisine::Mediterranean => &[
            (
                RecipeType::General,
                "Extra virgin olive oil and fresh herbs are essential for authentic flavor.",
            ),
            (
                RecipeType::VegetableDish,
                "Grill vegetables with olive oil and herbs for Mediterranean perfection.",
            ),
        ],
        Cuisine::Thai => &[
            (
                RecipeType::Curry,
                "Balance sweet, sour, salty, and spicy flavors with fish sauce and lime.",
            ),
            (
                RecipeType::General,
                "Fresh herbs and aromatics are key - add them at the end for maximum flavor.",
            ),
        ],
        Cuisine::Pakistani => &[
            (
                RecipeType::Curry,
                "Slow-cook with ghee and whole spices for deep, authentic flavors.",
            ),
            (
                RecipeType::RiceDish,
                "Layer rice and curry for dum cooking to infuse flavors throughout.",
            ),
            (
                RecipeType::General,
                "Garam masala at the end adds aromatic finish to any dish.",
            ),
        ],
        Cuisine::American => &[],
    };

    let lookup = |wanted: RecipeType| {
        tips.iter()
            .find(|(recipe_type, _)| *recipe_type == wanted)
            .map(|(_, tip)| *tip)
    };

    lookup(recipe_type).or_else(|| lookup(RecipeType::General))
}

/// Ingredient triggered technique tips, highest priority first.
const TECHNIQUE_TIPS: &[(&[&str], &str)] = &[
    (
        &["chicken"],
        "Brine chicken for extra moisture and flavor before cooking.",
    ),
    (
        &["beef"],
        "Season beef generously and let it come to room temperature before cooking.",
    ),
    (
        &["fish"],
        "Cook fish quickly over high heat and avoid overcooking for the best texture.",
    ),
    (
        &["tomatoes"],
        "Use ripe tomatoes and remove seeds for less watery results in cooked dishes.",
    ),
    (
        &["garlic"],
        "Sauté garlic slowly over medium heat to prevent burning and develop sweetness.",
    ),
    (
        &["onion"],
        "Caramelize onions slowly for deep, sweet flavor that enhances any dish.",
    ),
    (
        FRESH_HERBS,
        "Add fresh herbs at the end of cooking to preserve their bright flavors.",
    ),
    (
        SPICES,
        "Toast spices briefly in oil before adding other ingredients to release their aromas.",
    ),
];

pub fn technique_tip<S: AsRef<str>>(ingredients: &[S]) -> Option<&'static str> {
    TECHNIQUE_TIPS
        .iter()
        .find(|(group, _)| any_in_group(ingredients, group))
        .map(|(_, tip)| *tip)
}

#[derive(Debug, Clone, Default)]
pub struct RecipeTypeContext<'a> {
    pub recipe_title: &'a str,
    pub ingredients: &'a [String],
    pub cuisine: Option<&'a str>,
}

/// Base tip for the recipe type, followed by the cuisine tip and the
/// technique tip when they apply. Deterministic.
pub fn contextual_cooking_tip(context: &RecipeTypeContext<'_>) -> String {
    let recipe_type = determine_recipe_type(context.recipe_title, context.ingredients);
    let mut tip = recipe_type.tip().to_owned();

    if let Some(cuisine_tip) = context
        .cuisine
        .and_then(Cuisine::recognize)
        .and_then(|cuisine| cuisine_cooking_tip(cuisine, recipe_type))
    {
        tip.push(' ');
        tip.push_str(cuisine_tip);
    }

    if let Some(technique) = technique_tip(context.ingredients) {
        tip.push(' ');
        tip.push_str(technique);
    }

    tip
}

const HARD_VEGETABLES: &[&str] = &["carrots", "potatoes", "sweet potatoes", "winter squash"];
const PREP_PROTEINS: &[&str] = &["chicken", "beef", "pork", "fish", "tofu", "tempeh"];
const SOFT_VEGETABLES: &[&str] = &["zucchini", "bell peppers", "mushrooms", "spinach", "tomatoes"];
const PREP_HERBS: &[&str] = &["basil", "cilantro", "parsley", "mint", "dill"];

const PREPARATION_ORDER: &[(&[&str], &str)] = &[
    (AROMATICS, "aromatics (garlic, onions, etc.)"),
    (HARD_VEGETABLES, "hard vegetables"),
    (PREP_PROTEINS, "protein"),
    (SOFT_VEGETABLES, "soft vegetables"),
    (PREP_HERBS, "fresh herbs (at the end)"),
];

pub fn preparation_order_tip<S: AsRef<str>>(ingredients: &[S]) -> String {
    let steps: Vec<&str> = PREPARATION_ORDER
        .iter()
        .filter(|(group, _)| any_in_group(ingredients, group))
        .map(|(_, step)| *step)
        .collect();

    let order = if steps.is_empty() {
        "ingredients as needed".to_owned()
    } else {
        steps.join(" → ")
    };

    format!("For best results, prepare ingredients in this order: {order}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn protein_title_keywords_take_priority() {
        let chicken = ["chicken"];
        assert_eq!(determine_recipe_type("BBQ Chicken", &chicken), RecipeType::Grilled);
        assert_eq!(determine_recipe_type("Chicken Wok", &chicken), RecipeType::StirFry);
        assert_eq!(determine_recipe_type("Chicken Stew", &chicken), RecipeType::Curry);
        assert_eq!(determine_recipe_type("Chicken Soup", &chicken), RecipeType::Soup);
        assert_eq!(determine_recipe_type("Chicken Pasta", &chicken), RecipeType::ProteinDish);
    }

    #[test]
    fn pasta_is_checked_before_rice() {
        assert_eq!(determine_recipe_type("Rice Pasta Bake", &["rice"]), RecipeType::Pasta);
        assert_eq!(determine_recipe_type("Mushroom Risotto", &["butter"]), RecipeType::RiceDish);
        assert_eq!(determine_recipe_type("Anything", &["Spaghetti"]), RecipeType::Pasta);
    }

    #[test]
    fn vegetable_dishes_need_two_vegetables() {
        let two = ["tomato", "spinach"];
        assert_eq!(determine_recipe_type("Summer Salad", &two), RecipeType::Salad);
        assert_eq!(determine_recipe_type("Quick Stir Fry", &two), RecipeType::Sauted);
        assert_eq!(determine_recipe_type("Tray", &two), RecipeType::VegetableDish);
        assert_eq!(determine_recipe_type("Summer Salad", &["tomato"]), RecipeType::General);
    }

    #[test]
    fn repeated_vegetable_entries_both_count() {
        assert_eq!(
            determine_recipe_type("Tray", &["tomato", "Tomato"]),
            RecipeType::VegetableDish
        );
    }

    #[test]
    fn baked_goods_and_general() {
        assert_eq!(determine_recipe_type("Banana Bread", &["banana"]), RecipeType::Baked);
        assert_eq!(determine_recipe_type("Omelette", &["eggs"]), RecipeType::General);
    }

    #[test]
    fn recipe_type_renders_kebab_case() {
        assert_eq!(RecipeType::RiceDish.to_string(), "rice-dish");
        assert_eq!(RecipeType::StirFry.as_ref(), "stir-fry");
    }

    #[test]
    fn cuisine_tip_falls_back_to_general_entry() {
        assert_eq!(
            cuisine_cooking_tip(Cuisine::Italian, RecipeType::Soup),
            Some("Let ingredients shine with simple preparations and high-quality olive oil.")
        );
        assert_eq!(
            cuisine_cooking_tip(Cuisine::Chinese, RecipeType::StirFry),
            Some("Heat your wok until smoking before adding oil for the perfect sear.")
        );
        assert_eq!(cuisine_cooking_tip(Cuisine::American, RecipeType::Grilled), None);
    }

    #[test]
    fn technique_tip_uses_first_matching_group() {
        assert_eq!(
            technique_tip(&["garlic", "Beef"]),
            Some("Season beef generously and let it come to room temperature before cooking.")
        );
        assert_eq!(
            technique_tip(&["paprika", "mint"]),
            Some("Add fresh herbs at the end of cooking to preserve their bright flavors.")
        );
        assert_eq!(technique_tip(&["eggs"]), None);
    }

    #[test]
    fn contextual_tip_concatenates_parts() {
        let ingredients = owned(&["chicken", "garlic"]);
        let tip = contextual_cooking_tip(&RecipeTypeContext {
            recipe_title: "Chicken Curry",
            ingredients: &ingredients,
            cuisine: Some("Indian"),
        });

        assert_eq!(
            tip,
            "Build layers of flavor by toasting spices first, then aromatics, before adding liquids. \
             Toast whole spices before grinding for maximum flavor, and use ghee for richness. \
             Brine chicken for extra moisture and flavor before cooking."
        );
    }

    #[test]
    fn contextual_tip_ignores_unknown_cuisine() {
        let ingredients = owned(&["eggs"]);
        let tip = contextual_cooking_tip(&RecipeTypeContext {
            recipe_title: "Omelette",
            ingredients: &ingredients,
            cuisine: Some("korean"),
        });

        assert_eq!(tip, RecipeType::General.tip());
    }

    #[test]
    fn preparation_order_lists_present_groups() {
        assert_eq!(
            preparation_order_tip(&["basil", "garlic", "chicken"]),
            "For best results, prepare ingredients in this order: \
             aromatics (garlic, onions, etc.) → protein → fresh herbs (at the end)."
        );
        assert_eq!(
            preparation_order_tip(&["flour"]),
            "For best results, prepare ingredients in this order: ingredients as needed."
        );
    }
}
