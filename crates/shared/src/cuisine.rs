use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Cuisines with dedicated knowledge tables.
///
/// Free-text cuisine names that do not parse into one of these are still
/// accepted by callers; every lookup keyed by `Option<Cuisine>` treats `None`
/// as the generic fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, VariantArray)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Cuisine {
    Italian,
    Indian,
    Chinese,
    Mexican,
    Mediterranean,
    Thai,
    Pakistani,
    American,
}

impl Cuisine {
    /// Case-insensitive match of a user-supplied cuisine name.
    pub fn recognize(name: &str) -> Option<Cuisine> {
        name.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_known_names_in_any_case() {
        assert_eq!(Cuisine::recognize("italian"), Some(Cuisine::Italian));
        assert_eq!(Cuisine::recognize("THAI"), Some(Cuisine::Thai));
        assert_eq!(Cuisine::recognize("Mediterranean"), Some(Cuisine::Mediterranean));
    }

    #[test]
    fn unknown_names_fall_through() {
        assert_eq!(Cuisine::recognize("korean"), None);
        assert_eq!(Cuisine::recognize(""), None);
    }

    #[test]
    fn eight_cuisines_render_lowercase() {
        assert_eq!(Cuisine::VARIANTS.len(), 8);
        assert_eq!(Cuisine::Pakistani.to_string(), "pakistani");
    }
}
