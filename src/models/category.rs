/// Closed set of spending categories. Expenses and budgets are always
/// keyed by one of these; anything unrecognized lands in the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Rent,
    Food,
    Travel,
    Miscellaneous,
}

impl Category {
    /// Display order for budgets and sidebar cards.
    pub const ALL: [Category; 4] = [
        Self::Rent,
        Self::Food,
        Self::Travel,
        Self::Miscellaneous,
    ];

    pub const FALLBACK: Category = Self::Miscellaneous;

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Rent => "🏠",
            Self::Food => "🍔",
            Self::Travel => "✈️",
            Self::Miscellaneous => "📦",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rent => write!(f, "Rent"),
            Self::Food => write!(f, "Food"),
            Self::Travel => write!(f, "Travel"),
            Self::Miscellaneous => write!(f, "Miscellaneous"),
        }
    }
}
