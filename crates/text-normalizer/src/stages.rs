//! Normalization stages, applied in a fixed order by the [`Normalizer`].
//!
//! [`Normalizer`]: crate::Normalizer

use std::sync::Arc;

use numnorm_core::{NormError, NormResult, NumeralConverter};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

use crate::currency::{CurrencyTable, Inflection};

static COMMA_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9][0-9,]+[0-9]").unwrap());
static CURRENCY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([₽$€¥])([0-9,.]*[0-9]+)").unwrap());
static DECIMAL_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+),([0-9]+)").unwrap());
// Longer suffixes first so "5-ее" consumes the whole ending.
static ORDINAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)-?(?:ая|ое|ий|ее|ые|их|ие|го|й|я|е)").unwrap()
});
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?[0-9]+").unwrap());

/// Spoken word for a decimal comma.
const DECIMAL_COMMA_WORD: &str = "запятая";
/// Spoken word for a zero amount of money.
const ZERO_WORD: &str = "ноль";

/// A single pass of the normalization pipeline.
pub trait Stage: Send + Sync + std::fmt::Debug {
    /// Get the stage name.
    fn name(&self) -> &str;

    /// Apply the stage to the input text.
    fn apply(&self, input: &str) -> NormResult<String>;
}

/// Create the default stage pipeline around a numeral converter.
pub fn default_stages(numerals: Arc<dyn NumeralConverter>) -> Vec<Box<dyn Stage>> {
    vec![
        Box::new(CommaGroupingStage),
        Box::new(CurrencyStage::default()),
        Box::new(DecimalPointStage),
        Box::new(OrdinalStage::new(Arc::clone(&numerals))),
        Box::new(CardinalStage::new(numerals)),
    ]
}

/// Replace every match of `re`, failing on the first replacement that fails.
fn try_replace_all(
    re: &Regex,
    input: &str,
    mut replace: impl FnMut(&Captures<'_>) -> NormResult<String>,
) -> NormResult<String> {
    let mut result = String::with_capacity(input.len());
    let mut last = 0;
    let mut count = 0usize;

    for caps in re.captures_iter(input) {
        let whole = caps.get(0).expect("group 0 always participates in a match");
        result.push_str(&input[last..whole.start()]);
        result.push_str(&replace(&caps)?);
        last = whole.end();
        count += 1;
    }
    result.push_str(&input[last..]);

    trace!(pattern = re.as_str(), replacements = count, "replaced matches");
    Ok(result)
}

/// Parse a matched digit run for the numeral converter.
fn parse_integer(digits: &str) -> NormResult<i64> {
    digits
        .parse()
        .map_err(|_| NormError::number_out_of_range(digits))
}

/// Remove thousands separators from digit runs ("1,234" -> "1234").
///
/// Any comma inside a run of three or more characters is dropped, including
/// one meant as a decimal separator ("12,34" -> "1234").
#[derive(Debug)]
pub struct CommaGroupingStage;

impl Stage for CommaGroupingStage {
    fn name(&self) -> &str {
        "comma_grouping"
    }

    fn apply(&self, input: &str) -> NormResult<String> {
        let result =
            COMMA_NUMBER_RE.replace_all(input, |caps: &Captures<'_>| caps[0].replace(',', ""));
        Ok(result.into_owned())
    }
}

/// Expand a currency symbol and amount into counts and inflected unit nouns.
#[derive(Debug, Default)]
pub struct CurrencyStage {
    table: CurrencyTable,
}

impl CurrencyStage {
    /// Create a currency stage over the given inflection table.
    pub fn new(table: CurrencyTable) -> Self {
        Self { table }
    }
}

impl Stage for CurrencyStage {
    fn name(&self) -> &str {
        "currency"
    }

    fn apply(&self, input: &str) -> NormResult<String> {
        let result = CURRENCY_RE.replace_all(input, |caps: &Captures<'_>| {
            let inflection = caps[1].chars().next().and_then(|s| self.table.get(s));
            match inflection {
                Some(inflection) => expand_currency(&caps[2], inflection),
                None => caps[0].to_string(),
            }
        });
        Ok(result.into_owned())
    }
}

/// Spell a currency amount as counts followed by unit nouns.
///
/// Counts stay as digits for the cardinal stage. An amount with more than one
/// decimal point is echoed back with the plural unit.
///
/// ```
/// use text_normalizer::{CurrencyTable, expand_currency};
///
/// let table = CurrencyTable::russian();
/// let ruble = table.get('₽').unwrap();
/// assert_eq!(expand_currency("1.50", ruble), "1 рубль 50 копейки");
/// assert_eq!(expand_currency("1.2.3", ruble), "1.2.3 рубля");
/// ```
pub fn expand_currency(amount: &str, inflection: &Inflection) -> String {
    let cleaned = amount.replace(',', "");
    let parts: Vec<&str> = cleaned.split('.').collect();
    if parts.len() > 2 {
        return format!("{amount} {}", inflection.few);
    }

    let mut text = Vec::new();

    let integer = parts[0].trim_start_matches('0');
    if !integer.is_empty() {
        text.push(format!("{integer} {}", inflection.unit_for(integer)));
    }

    let fraction = parts.get(1).map_or("", |p| p.trim_start_matches('0'));
    if !fraction.is_empty() {
        text.push(format!("{fraction} {}", inflection.minor_unit_for(fraction)));
    }

    if text.is_empty() {
        return format!("{ZERO_WORD} {}", inflection.few);
    }
    text.join(" ")
}

/// Read a decimal comma aloud ("3,14" -> "3 запятая 14").
#[derive(Debug)]
pub struct DecimalPointStage;

impl Stage for DecimalPointStage {
    fn name(&self) -> &str {
        "decimal_point"
    }

    fn apply(&self, input: &str) -> NormResult<String> {
        let replacement = format!("${{1}} {DECIMAL_COMMA_WORD} ${{2}}");
        Ok(DECIMAL_NUMBER_RE
            .replace_all(input, replacement.as_str())
            .into_owned())
    }
}

/// Replace digits with an ordinal suffix ("5-й") by the ordinal word.
#[derive(Debug)]
pub struct OrdinalStage {
    numerals: Arc<dyn NumeralConverter>,
}

impl OrdinalStage {
    /// Create an ordinal stage backed by the given converter.
    pub fn new(numerals: Arc<dyn NumeralConverter>) -> Self {
        Self { numerals }
    }
}

impl Stage for OrdinalStage {
    fn name(&self) -> &str {
        "ordinal"
    }

    fn apply(&self, input: &str) -> NormResult<String> {
        try_replace_all(&ORDINAL_RE, input, |caps| {
            let num = parse_integer(&caps[1])?;
            self.numerals.ordinal(num)
        })
    }
}

/// Replace every remaining integer by its cardinal words.
#[derive(Debug)]
pub struct CardinalStage {
    numerals: Arc<dyn NumeralConverter>,
}

impl CardinalStage {
    /// Create a cardinal stage backed by the given converter.
    pub fn new(numerals: Arc<dyn NumeralConverter>) -> Self {
        Self { numerals }
    }
}

impl Stage for CardinalStage {
    fn name(&self) -> &str {
        "cardinal"
    }

    fn apply(&self, input: &str) -> NormResult<String> {
        try_replace_all(&NUMBER_RE, input, |caps| {
            let num = parse_integer(&caps[0])?;
            self.numerals.cardinal(num)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::DETECTED_SYMBOLS;
    use crate::num2words::RussianNumerals;

    fn numerals() -> Arc<dyn NumeralConverter> {
        Arc::new(RussianNumerals)
    }

    #[test]
    fn test_comma_grouping_stage() {
        let stage = CommaGroupingStage;
        assert_eq!(stage.apply("1,234").unwrap(), "1234");
        assert_eq!(stage.apply("1,234,567 человек").unwrap(), "1234567 человек");
        assert_eq!(stage.apply("12,34").unwrap(), "1234");
        // Separator commas after a digit are left alone.
        assert_eq!(stage.apply("1, 2, 3").unwrap(), "1, 2, 3");
    }

    #[test]
    fn test_currency_stage_units() {
        let stage = CurrencyStage::default();
        assert_eq!(stage.apply("$0").unwrap(), "ноль доллара");
        assert_eq!(stage.apply("$1").unwrap(), "1 доллар");
        assert_eq!(stage.apply("$2").unwrap(), "2 доллара");
        assert_eq!(stage.apply("$5").unwrap(), "5 доллара");
        assert_eq!(stage.apply("₽1").unwrap(), "1 рубль");
        assert_eq!(stage.apply("€3").unwrap(), "3 евро");
        assert_eq!(stage.apply("¥1").unwrap(), "1 йена");
    }

    #[test]
    fn test_currency_stage_minor_units() {
        let stage = CurrencyStage::default();
        assert_eq!(stage.apply("$1.01").unwrap(), "1 доллар 1 цент");
        assert_eq!(stage.apply("$1.02").unwrap(), "1 доллар 2 цента");
        assert_eq!(stage.apply("$1.25").unwrap(), "1 доллар 25 цента");
        assert_eq!(stage.apply("₽0.50").unwrap(), "50 копейки");
        assert_eq!(stage.apply("$.01").unwrap(), "1 цент");
        assert_eq!(stage.apply("$0.00").unwrap(), "ноль доллара");
        // The fraction is read as written, not padded to two digits.
        assert_eq!(stage.apply("$1.5").unwrap(), "1 доллар 5 цента");
    }

    #[test]
    fn test_currency_stage_malformed_amount() {
        let stage = CurrencyStage::default();
        assert_eq!(stage.apply("$1.2.3").unwrap(), "1.2.3 доллара");
        assert_eq!(stage.apply("₽1,0.2.3").unwrap(), "1,0.2.3 рубля");
    }

    #[test]
    fn test_currency_stage_in_context() {
        let stage = CurrencyStage::default();
        assert_eq!(
            stage.apply("Кофе стоит $3.50, чай ₽120.").unwrap(),
            "Кофе стоит 3 доллара 50 цента, чай 120 рубля."
        );
        assert_eq!(stage.apply("$007").unwrap(), "7 доллара");
        assert_eq!(stage.apply("£5").unwrap(), "£5");
        assert_eq!(stage.apply("$ 5").unwrap(), "$ 5");
    }

    #[test]
    fn test_currency_pattern_covers_detected_symbols() {
        for symbol in DETECTED_SYMBOLS {
            assert!(CURRENCY_RE.is_match(&format!("{symbol}1")), "{symbol}");
        }
    }

    #[test]
    fn test_currency_stage_with_partial_table() {
        const ONLY_RUBLE: &[(char, Inflection)] = &[(
            '₽',
            Inflection {
                one: "рубль",
                few: "рубля",
                minor_one: "копейка",
                minor_few: "копейки",
            },
        )];
        let stage = CurrencyStage::new(CurrencyTable::new(ONLY_RUBLE));
        assert_eq!(stage.apply("₽2 и $2").unwrap(), "2 рубля и $2");
    }

    #[test]
    fn test_decimal_point_stage() {
        let stage = DecimalPointStage;
        assert_eq!(stage.apply("3,14").unwrap(), "3 запятая 14");
        assert_eq!(stage.apply("было 0,5 литра").unwrap(), "было 0 запятая 5 литра");
        assert_eq!(stage.apply("a, b").unwrap(), "a, b");
    }

    #[test]
    fn test_ordinal_stage() {
        let stage = OrdinalStage::new(numerals());
        assert_eq!(stage.apply("5-й").unwrap(), "пятый");
        assert_eq!(stage.apply("1-я комната").unwrap(), "первый комната");
        assert_eq!(stage.apply("21-го числа").unwrap(), "двадцать первый числа");
        assert_eq!(stage.apply("3ий").unwrap(), "третий");
        assert_eq!(stage.apply("5-ее").unwrap(), "пятый");
        assert_eq!(stage.apply("42").unwrap(), "42");
    }

    #[test]
    fn test_ordinal_stage_out_of_range() {
        let stage = OrdinalStage::new(numerals());
        let err = stage.apply("99999999999999999999-й").unwrap_err();
        assert!(matches!(err, NormError::NumberOutOfRange(_)));
    }

    #[test]
    fn test_cardinal_stage() {
        let stage = CardinalStage::new(numerals());
        assert_eq!(stage.apply("42").unwrap(), "сорок два");
        assert_eq!(stage.apply("-15 градусов").unwrap(), "минус пятнадцать градусов");
        assert_eq!(stage.apply("от 3 до 7").unwrap(), "от три до семь");
        assert_eq!(stage.apply("без чисел").unwrap(), "без чисел");
    }

    #[test]
    fn test_cardinal_stage_out_of_range() {
        let stage = CardinalStage::new(numerals());
        let err = stage.apply("ровно 99999999999999999999").unwrap_err();
        assert!(matches!(err, NormError::NumberOutOfRange(ref d) if d == "99999999999999999999"));
    }

    #[test]
    fn test_default_stage_order() {
        let names: Vec<String> = default_stages(numerals())
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(
            names,
            ["comma_grouping", "currency", "decimal_point", "ordinal", "cardinal"]
        );
    }
}
