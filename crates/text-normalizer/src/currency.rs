//! Currency symbols and the noun forms used to read amounts aloud.

/// Declined noun forms for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inflection {
    /// Main unit after a count of exactly one ("рубль").
    pub one: &'static str,
    /// Main unit after any other count, and in the zero phrase ("рубля").
    pub few: &'static str,
    /// Minor unit after a count of exactly one ("копейка").
    pub minor_one: &'static str,
    /// Minor unit after any other count ("копейки").
    pub minor_few: &'static str,
}

impl Inflection {
    /// Noun for an integer count given as a digit string without leading zeros.
    pub fn unit_for(&self, count: &str) -> &'static str {
        if count == "1" { self.one } else { self.few }
    }

    /// Noun for a minor-unit count given as a digit string without leading zeros.
    pub fn minor_unit_for(&self, count: &str) -> &'static str {
        if count == "1" {
            self.minor_one
        } else {
            self.minor_few
        }
    }
}

/// Immutable mapping from currency symbol to its inflection.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyTable {
    entries: &'static [(char, Inflection)],
}

impl CurrencyTable {
    /// Build a table over a static list of entries.
    pub const fn new(entries: &'static [(char, Inflection)]) -> Self {
        Self { entries }
    }

    /// The built-in Russian table.
    pub const fn russian() -> Self {
        Self::new(RU_CURRENCIES)
    }

    /// Look up the inflection for a currency symbol.
    pub fn get(&self, symbol: char) -> Option<&Inflection> {
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, inflection)| inflection)
    }

    /// All symbols present in the table.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|(s, _)| *s)
    }
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self::russian()
    }
}

/// Symbols the currency pattern recognizes.
///
/// `£` has a table entry but is not listed here, so pound amounts are never
/// expanded as currency.
pub const DETECTED_SYMBOLS: [char; 4] = ['₽', '$', '€', '¥'];

const RU_CURRENCIES: &[(char, Inflection)] = &[
    (
        '$',
        Inflection {
            one: "доллар",
            few: "доллара",
            minor_one: "цент",
            minor_few: "цента",
        },
    ),
    (
        '€',
        Inflection {
            one: "евро",
            few: "евро",
            minor_one: "евроцент",
            minor_few: "евроцента",
        },
    ),
    (
        '£',
        Inflection {
            one: "фунт стерлингов",
            few: "фунта стерлингов",
            minor_one: "пенни",
            minor_few: "пенса",
        },
    ),
    (
        '¥',
        Inflection {
            one: "йена",
            few: "йены",
            minor_one: "сень",
            minor_few: "сена",
        },
    ),
    (
        '₽',
        Inflection {
            one: "рубль",
            few: "рубля",
            minor_one: "копейка",
            minor_few: "копейки",
        },
    ),
];
