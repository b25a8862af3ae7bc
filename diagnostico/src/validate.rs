//! Field validation rules for the contact step.

use std::sync::LazyLock;

use diagnostico_types::{CountryCode, PhoneRule, digits_only};
use regex::Regex;

use crate::catalog::{self, DEFAULT_PREFIX, FALLBACK_PHONE_RULE, FREE_EMAIL_DOMAINS};

static EMAIL_SHAPE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r".+@.+\..+").ok());

/// Check that a text field holds more than one character after trimming.
pub fn has_min_length(text: &str) -> bool {
    text.trim().chars().count() > 1
}

/// Check for the basic `text@text.text` shape.
pub fn is_email_shaped(email: &str) -> bool {
    EMAIL_SHAPE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Check that an email does not belong to a consumer mailbox provider.
///
/// The domain is whatever follows the last `@`, trimmed and lower-cased.
/// Anything not on the blocklist passes, typos included.
pub fn is_corporate_email(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    let domain = domain.trim().to_lowercase();
    !domain.is_empty() && !FREE_EMAIL_DOMAINS.contains(&domain.as_str())
}

/// The phone rule for a country.
pub fn phone_rule(country: CountryCode) -> PhoneRule {
    catalog::country(country).map_or(FALLBACK_PHONE_RULE, |c| c.phone_rule)
}

/// The dialing prefix for a country.
pub fn phone_prefix(country: CountryCode) -> &'static str {
    catalog::country(country).map_or(DEFAULT_PREFIX, |c| c.prefix)
}

/// Check the digit count of a local number against the country rule.
pub fn is_phone_valid(local: &str, country: CountryCode) -> bool {
    phone_rule(country).accepts(digits_only(local).len())
}

/// The number as it will be submitted: prefix, then a space and the local
/// digits if there are any.
pub fn full_phone(local: &str, country: CountryCode) -> String {
    let prefix = phone_prefix(country);
    let digits = digits_only(local);
    if digits.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix} {digits}")
    }
}

/// Guidance shown when the local number does not satisfy the country rule.
pub fn phone_requirement_text(country: CountryCode) -> String {
    requirement_text(catalog::country(country).map(|c| &c.phone_rule))
}

fn requirement_text(rule: Option<&PhoneRule>) -> String {
    let Some(rule) = rule else {
        return "Ingresa al menos 8 dígitos del número local.".to_string();
    };
    let max = rule
        .max
        .map(|max| format!(" (máx. {max})"))
        .unwrap_or_default();
    let note = rule.note.map(|note| format!(" · {note}")).unwrap_or_default();
    format!("Ingresa {} dígitos{max} del número local{note}.", rule.min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern_compiles() {
        assert!(EMAIL_SHAPE.is_some());
    }

    #[test]
    fn phone_validity_per_country() {
        let cases = [
            (CountryCode::GT, 8),
            (CountryCode::SV, 8),
            (CountryCode::HN, 8),
            (CountryCode::PA, 8),
            (CountryCode::DO, 10),
            (CountryCode::EC, 9),
        ];
        for (country, min) in cases {
            let short = "1".repeat(min - 1);
            let exact = "1".repeat(min);
            let long = "1".repeat(min + 6);
            assert!(!is_phone_valid(&short, country), "{country} accepted {short}");
            assert!(is_phone_valid(&exact, country), "{country} rejected {exact}");
            assert!(is_phone_valid(&long, country), "{country} rejected {long}");
        }
    }

    #[test]
    fn ecuador_needs_nine_digits() {
        assert!(!is_phone_valid("12345678", CountryCode::EC));
        assert!(is_phone_valid("123456789", CountryCode::EC));
    }

    #[test]
    fn phone_validity_counts_digits_only() {
        assert!(is_phone_valid("1234-5678", CountryCode::GT));
        assert!(!is_phone_valid("1234-567x", CountryCode::GT));
    }

    #[test]
    fn fallback_rule_needs_eight_digits() {
        assert!(!FALLBACK_PHONE_RULE.accepts(7));
        assert!(FALLBACK_PHONE_RULE.accepts(8));
        assert_eq!(
            requirement_text(None),
            "Ingresa al menos 8 dígitos del número local."
        );
    }

    #[test]
    fn corporate_email() {
        assert!(!is_corporate_email("x@gmail.com"));
        assert!(!is_corporate_email("X@GMAIL.COM"));
        assert!(!is_corporate_email("x@ gmail.com "));
        assert!(is_corporate_email("x@acme.co"));
        assert!(is_corporate_email("x@gmial.com"));
    }

    #[test]
    fn email_without_at_is_never_corporate() {
        assert!(!is_corporate_email("acme.co"));
        assert!(!is_corporate_email("ana@"));
    }

    #[test]
    fn corporate_check_uses_last_at() {
        assert!(!is_corporate_email("ana@acme.co@gmail.com"));
        assert!(is_corporate_email("ana@gmail.com@acme.co"));
    }

    #[test]
    fn email_shape() {
        assert!(is_email_shaped("ana@empresa.com"));
        assert!(!is_email_shaped("ana@empresa"));
        assert!(!is_email_shaped("@empresa.com"));
        assert!(!is_email_shaped("ana.empresa.com"));
    }

    #[test]
    fn full_phone_formatting() {
        assert_eq!(full_phone("", CountryCode::GT), "+502");
        assert_eq!(full_phone("12345678", CountryCode::GT), "+502 12345678");
        assert_eq!(full_phone("809 555 0100", CountryCode::DO), "+1 8095550100");
    }

    #[test]
    fn requirement_text_includes_note() {
        assert_eq!(
            phone_requirement_text(CountryCode::EC),
            "Ingresa 9 dígitos del número local · Usa tu número móvil (9 dígitos)."
        );
        assert_eq!(
            phone_requirement_text(CountryCode::GT),
            "Ingresa 8 dígitos del número local."
        );
        assert_eq!(
            requirement_text(Some(&PhoneRule::at_least(8).at_most(10))),
            "Ingresa 8 dígitos (máx. 10) del número local."
        );
    }

    #[test]
    fn min_length_trims() {
        assert!(!has_min_length(" a "));
        assert!(has_min_length("Al"));
        assert!(has_min_length("Ñu"));
        assert!(!has_min_length(""));
    }
}
