//! Number to words conversion for Russian.

use numnorm_core::{NormError, NormResult, NumeralConverter};

/// Russian numeral converter backed by the tables in this module.
#[derive(Debug, Clone, Copy, Default)]
pub struct RussianNumerals;

impl NumeralConverter for RussianNumerals {
    fn cardinal(&self, num: i64) -> NormResult<String> {
        Ok(num_to_words_ru(num))
    }

    fn ordinal(&self, num: i64) -> NormResult<String> {
        let Ok(num) = u64::try_from(num) else {
            return Err(NormError::unsupported_numeral(format!(
                "no ordinal form for negative number {num}"
            )));
        };
        Ok(ordinal_to_words_ru(num))
    }
}

// ============================================================================
// Cardinal tables
// ============================================================================

const RU_ONES: [&str; 20] = [
    "",
    "один",
    "два",
    "три",
    "четыре",
    "пять",
    "шесть",
    "семь",
    "восемь",
    "девять",
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];

const RU_ONES_FEM: [&str; 3] = ["", "одна", "две"];

const RU_TENS: [&str; 10] = [
    "",
    "",
    "двадцать",
    "тридцать",
    "сорок",
    "пятьдесят",
    "шестьдесят",
    "семьдесят",
    "восемьдесят",
    "девяносто",
];

const RU_HUNDREDS: [&str; 10] = [
    "",
    "сто",
    "двести",
    "триста",
    "четыреста",
    "пятьсот",
    "шестьсот",
    "семьсот",
    "восемьсот",
    "девятьсот",
];

// ============================================================================
// Ordinal tables (masculine nominative)
// ============================================================================

const RU_ORD_ONES: [&str; 20] = [
    "",
    "первый",
    "второй",
    "третий",
    "четвёртый",
    "пятый",
    "шестой",
    "седьмой",
    "восьмой",
    "девятый",
    "десятый",
    "одиннадцатый",
    "двенадцатый",
    "тринадцатый",
    "четырнадцатый",
    "пятнадцатый",
    "шестнадцатый",
    "семнадцатый",
    "восемнадцатый",
    "девятнадцатый",
];

const RU_ORD_TENS: [&str; 10] = [
    "",
    "",
    "двадцатый",
    "тридцатый",
    "сороковой",
    "пятидесятый",
    "шестидесятый",
    "семидесятый",
    "восьмидесятый",
    "девяностый",
];

const RU_ORD_HUNDREDS: [&str; 10] = [
    "",
    "сотый",
    "двухсотый",
    "трёхсотый",
    "четырёхсотый",
    "пятисотый",
    "шестисотый",
    "семисотый",
    "восьмисотый",
    "девятисотый",
];

// Combining stems used to build compound ordinals ("двухтысячный", "девяностотысячный").
const RU_ONES_GEN: [&str; 20] = [
    "",
    "одно",
    "двух",
    "трёх",
    "четырёх",
    "пяти",
    "шести",
    "семи",
    "восьми",
    "девяти",
    "десяти",
    "одиннадцати",
    "двенадцати",
    "тринадцати",
    "четырнадцати",
    "пятнадцати",
    "шестнадцати",
    "семнадцати",
    "восемнадцати",
    "девятнадцати",
];

const RU_TENS_GEN: [&str; 10] = [
    "",
    "",
    "двадцати",
    "тридцати",
    "сорока",
    "пятидесяти",
    "шестидесяти",
    "семидесяти",
    "восьмидесяти",
    "девяносто",
];

const RU_HUNDREDS_GEN: [&str; 10] = [
    "",
    "сто",
    "двухсот",
    "трёхсот",
    "четырёхсот",
    "пятисот",
    "шестисот",
    "семисот",
    "восьмисот",
    "девятисот",
];

/// A power-of-thousand scale word and its declension.
struct Scale {
    one: &'static str,
    few: &'static str,
    many: &'static str,
    /// Thousands agree in feminine gender ("одна тысяча", "две тысячи").
    feminine: bool,
}

/// Scales above the units group; index 0 is thousands.
const RU_SCALES: [Scale; 6] = [
    Scale {
        one: "тысяча",
        few: "тысячи",
        many: "тысяч",
        feminine: true,
    },
    Scale {
        one: "миллион",
        few: "миллиона",
        many: "миллионов",
        feminine: false,
    },
    Scale {
        one: "миллиард",
        few: "миллиарда",
        many: "миллиардов",
        feminine: false,
    },
    Scale {
        one: "триллион",
        few: "триллиона",
        many: "триллионов",
        feminine: false,
    },
    Scale {
        one: "квадриллион",
        few: "квадриллиона",
        many: "квадриллионов",
        feminine: false,
    },
    Scale {
        one: "квинтиллион",
        few: "квинтиллиона",
        many: "квинтиллионов",
        feminine: false,
    },
];

impl Scale {
    /// Pick the form agreeing with `n` (one / two-to-four / many).
    fn form(&self, n: u64) -> &'static str {
        let n = n % 100;
        if (11..=19).contains(&n) {
            return self.many;
        }
        match n % 10 {
            1 => self.one,
            2..=4 => self.few,
            _ => self.many,
        }
    }

    /// Ordinal adjective of the scale word itself ("тысячный").
    fn ordinal(&self) -> String {
        let stem = self.one.strip_suffix('а').unwrap_or(self.one);
        format!("{stem}ный")
    }
}

/// Split a number into groups of three digits, least significant first.
fn triads(mut n: u64) -> Vec<u64> {
    let mut groups = Vec::new();
    while n > 0 {
        groups.push(n % 1000);
        n /= 1000;
    }
    groups
}

/// Convert hundreds part (0-999) to Russian words.
fn hundreds_to_words_ru(n: u64, feminine: bool) -> Vec<&'static str> {
    let n = n as usize;
    let mut parts = Vec::new();

    let h = n / 100;
    if h > 0 {
        parts.push(RU_HUNDREDS[h]);
    }

    let remainder = n % 100;
    if remainder > 0 {
        let ones = if remainder < 20 {
            remainder
        } else {
            parts.push(RU_TENS[remainder / 10]);
            remainder % 10
        };
        if ones > 0 {
            if feminine && ones <= 2 {
                parts.push(RU_ONES_FEM[ones]);
            } else {
                parts.push(RU_ONES[ones]);
            }
        }
    }

    parts
}

/// Words for one scaled group ("двадцать одна тысяча").
fn group_to_words_ru(value: u64, scale_idx: usize) -> Vec<&'static str> {
    match scale_idx.checked_sub(1).map(|i| &RU_SCALES[i]) {
        None => hundreds_to_words_ru(value, false),
        Some(scale) => {
            let mut words = hundreds_to_words_ru(value, scale.feminine);
            words.push(scale.form(value));
            words
        }
    }
}

/// Convert a number to Russian words.
pub fn num_to_words_ru(num: i64) -> String {
    if num == 0 {
        return "ноль".to_string();
    }

    let mut parts = Vec::new();
    if num < 0 {
        parts.push("минус");
    }

    let groups = triads(num.unsigned_abs());
    for (idx, &value) in groups.iter().enumerate().rev() {
        if value > 0 {
            parts.extend(group_to_words_ru(value, idx));
        }
    }

    parts.join(" ")
}

/// Ordinal words for the units group (1-999), inflecting only the last word.
fn hundreds_to_ordinal_ru(n: u64) -> Vec<&'static str> {
    let n = n as usize;
    let h = n / 100;
    let remainder = n % 100;

    if remainder == 0 {
        return vec![RU_ORD_HUNDREDS[h]];
    }

    let mut parts = Vec::new();
    if h > 0 {
        parts.push(RU_HUNDREDS[h]);
    }
    if remainder < 20 {
        parts.push(RU_ORD_ONES[remainder]);
    } else if remainder % 10 == 0 {
        parts.push(RU_ORD_TENS[remainder / 10]);
    } else {
        parts.push(RU_TENS[remainder / 10]);
        parts.push(RU_ORD_ONES[remainder % 10]);
    }
    parts
}

/// Genitive combining stem for a group multiplier ("двухсот", "двадцатиодно").
fn hundreds_to_genitive_stem(n: u64) -> String {
    let n = n as usize;
    let mut stem = String::from(RU_HUNDREDS_GEN[n / 100]);

    let remainder = n % 100;
    if remainder < 20 {
        stem.push_str(RU_ONES_GEN[remainder]);
    } else {
        stem.push_str(RU_TENS_GEN[remainder / 10]);
        stem.push_str(RU_ONES_GEN[remainder % 10]);
    }
    stem
}

/// Convert a number to a Russian ordinal (masculine nominative).
pub fn ordinal_to_words_ru(num: u64) -> String {
    if num == 0 {
        return "нулевой".to_string();
    }

    let groups = triads(num);
    let lowest = groups.iter().position(|&g| g > 0).unwrap_or(0);
    let highest = groups.len() - 1;

    let mut parts: Vec<String> = Vec::new();
    for idx in (lowest + 1..=highest).rev() {
        let value = groups[idx];
        if value == 0 {
            continue;
        }
        let mut words = group_to_words_ru(value, idx);
        // "тысяча первый", not "одна тысяча первый"
        if idx == highest && value == 1 {
            words.remove(0);
        }
        parts.extend(words.into_iter().map(str::to_string));
    }

    let value = groups[lowest];
    if lowest == 0 {
        parts.extend(hundreds_to_ordinal_ru(value).into_iter().map(str::to_string));
    } else {
        let scale = &RU_SCALES[lowest - 1];
        let prefix = if value == 1 {
            String::new()
        } else {
            hundreds_to_genitive_stem(value)
        };
        parts.push(format!("{prefix}{}", scale.ordinal()));
    }

    parts.join(" ")
}
