use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, EnumVariantNames};

/// Navigation destinations reachable from the bottom bar.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumVariantNames, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Screen {
    #[default]
    Weather,
    News,
    Favorites,
}

impl Screen {
    pub fn parse(s: String) -> Option<Screen> {
        return Screen::iter().find(|e| e.to_string() == s);
    }

    pub fn title(&self) -> &'static str {
        return match self {
            Screen::Weather => "Weather",
            Screen::News => "News",
            Screen::Favorites => "Favorites",
        };
    }

    /// The screen after this one in bottom bar order, wrapping around.
    pub fn next(&self) -> Screen {
        let screens = Screen::iter().collect::<Vec<_>>();
        let idx = screens.iter().position(|e| e == self).unwrap_or(0);
        return screens[(idx + 1) % screens.len()];
    }
}
