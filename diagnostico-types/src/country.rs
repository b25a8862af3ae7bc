use std::fmt;
use std::str::FromStr;

/// ISO code of a country the form accepts phone numbers for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CountryCode {
    #[default]
    GT,
    SV,
    HN,
    PA,
    DO,
    EC,
}

impl CountryCode {
    /// All codes in display order.
    pub const ALL: [CountryCode; 6] = [
        CountryCode::GT,
        CountryCode::SV,
        CountryCode::HN,
        CountryCode::PA,
        CountryCode::DO,
        CountryCode::EC,
    ];

    /// The two-letter code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GT => "GT",
            Self::SV => "SV",
            Self::HN => "HN",
            Self::PA => "PA",
            Self::DO => "DO",
            Self::EC => "EC",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown country code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown country code: {0}")]
pub struct UnknownCountry(pub String);

impl FromStr for CountryCode {
    type Err = UnknownCountry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCountry(s.to_string()))
    }
}

/// Digit-count rule for local phone numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneRule {
    /// Minimum number of digits.
    pub min: usize,

    /// Maximum number of digits, if bounded.
    pub max: Option<usize>,

    /// Extra guidance shown next to the requirement.
    pub note: Option<&'static str>,
}

impl PhoneRule {
    /// A rule with only a lower bound.
    pub const fn at_least(min: usize) -> Self {
        Self {
            min,
            max: None,
            note: None,
        }
    }

    /// Add an upper bound.
    pub const fn at_most(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Add a guidance note.
    pub const fn with_note(mut self, note: &'static str) -> Self {
        self.note = Some(note);
        self
    }

    /// Check a digit count against the rule.
    pub fn accepts(&self, digits: usize) -> bool {
        digits >= self.min && self.max.is_none_or(|max| digits <= max)
    }
}

/// A row of the country table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: CountryCode,
    pub label: &'static str,
    pub prefix: &'static str,
    pub phone_rule: PhoneRule,
}
