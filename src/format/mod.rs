//! Text rendering of projection figures

mod locale;

pub use locale::{Language, NumberLocale, EN_US, ES_CL};

use crate::input::InterestMode;
use crate::projection::ProjectionResult;

/// Most fraction digits shown in an amount
const AMOUNT_FRACTION_DIGITS: i32 = 3;

/// Render an amount with at most three fraction digits, trailing fractional
/// zeros dropped and thousands grouped: `1126.83` is `1.126,83` in es-CL.
pub fn format_amount(value: f64, locale: &NumberLocale) -> String {
    let factor = 10_f64.powi(AMOUNT_FRACTION_DIGITS);
    let rounded = (value * factor).round() / factor;
    let text = format!("{:.*}", AMOUNT_FRACTION_DIGITS as usize, rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if rounded < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part, locale.thousands_separator));
    if !frac_part.is_empty() {
        out.push(locale.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(int_part: &str, sep: char) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        let pos_from_end = len - i;
        out.push(ch);
        if pos_from_end > 1 && pos_from_end % 3 == 1 {
            out.push(sep);
        }
    }
    out
}

/// Compact y-axis label: the value truncated to whole units, then shown
/// in millions (`$1.5M`), thousands (`$12.3k`) or as is (`$950`).
/// Tenths round half away from zero, so 1250 is `$1.3k`.
pub fn format_axis_label(value: f64) -> String {
    let whole = value.trunc();
    if whole >= 1_000_000.0 {
        let tenths = (whole / 100_000.0).round();
        format!("${:.1}M", tenths / 10.0)
    } else if whole >= 1_000.0 {
        let tenths = (whole / 100.0).round();
        format!("${:.1}k", tenths / 10.0)
    } else {
        format!("${}", whole as i64)
    }
}

/// Fixed message shown for any rejected input
pub fn invalid_input_message(language: Language) -> &'static str {
    match language {
        Language::Spanish => "Por favor ingresa valores válidos.",
        Language::English => "Please enter valid values.",
    }
}

/// Two-line summary of interest earned and final total
pub fn result_text(result: &ProjectionResult, language: Language) -> String {
    let locale = language.number_locale();
    let interest = format_amount(result.interest(), locale);
    let total = format_amount(result.total(), locale);

    match language {
        Language::Spanish => {
            let kind = match result.mode() {
                InterestMode::Simple => "simple",
                InterestMode::Compound => "compuesto",
            };
            format!("Interés {}: ${}\nTotal acumulado: ${}", kind, interest, total)
        }
        Language::English => {
            let kind = match result.mode() {
                InterestMode::Simple => "Simple",
                InterestMode::Compound => "Compound",
            };
            format!("{} interest: ${}\nTotal accumulated: ${}", kind, interest, total)
        }
    }
}
