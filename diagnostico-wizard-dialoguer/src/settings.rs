use diagnostico::{CountryCode, UnknownCountry, Utms};
use url::Url;

pub const ENV_PRIVACY_URL: &str = "DIAGNOSTICO_PRIVACY_URL";
pub const ENV_DEFAULT_COUNTRY: &str = "DIAGNOSTICO_DEFAULT_COUNTRY";

/// Error type for CLI settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("landing URL '{value}' is not valid: {source}")]
    InvalidLandingUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{ENV_PRIVACY_URL} is not a valid URL: {0}")]
    InvalidPrivacyUrl(#[source] url::ParseError),

    #[error("{ENV_DEFAULT_COUNTRY}: {0}")]
    InvalidCountry(#[from] UnknownCountry),
}

/// Settings of the CLI that are not about the gateway.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Tracking parameters taken from the landing URL.
    pub utms: Utms,

    /// Privacy policy link shown with the consent text.
    pub privacy_url: Option<Url>,

    /// Country preselected in the contact step, e.g. `PA`.
    pub default_country: Option<CountryCode>,
}

impl Settings {
    /// Read settings from the process arguments and environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_parts(
            std::env::args().nth(1).as_deref(),
            |var| std::env::var(var).ok(),
        )
    }

    /// Build settings from an optional landing URL and a variable lookup.
    ///
    /// Only the landing URL's `utm_*` query parameters are kept.
    pub fn from_parts(
        landing_url: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        let utms = match landing_url.map(str::trim).filter(|s| !s.is_empty()) {
            Some(value) => {
                let url = Url::parse(value).map_err(|source| SettingsError::InvalidLandingUrl {
                    value: value.to_string(),
                    source,
                })?;
                Utms::from_query_pairs(url.query_pairs())
            }
            None => Utms::default(),
        };

        let privacy_url = lookup(ENV_PRIVACY_URL)
            .filter(|v| !v.trim().is_empty())
            .map(|v| Url::parse(v.trim()))
            .transpose()
            .map_err(SettingsError::InvalidPrivacyUrl)?;

        let default_country = lookup(ENV_DEFAULT_COUNTRY)
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.parse::<CountryCode>())
            .transpose()?;

        Ok(Self {
            utms,
            privacy_url,
            default_country,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utms_come_from_landing_url() {
        let settings = Settings::from_parts(
            Some("https://grupoinforum.com/diagnostico?utm_source=linkedin&utm_campaign=q3&ref=x&utm_term="),
            |_| None,
        )
        .unwrap();
        assert_eq!(settings.utms.get("utm_source"), Some("linkedin"));
        assert_eq!(settings.utms.get("utm_campaign"), Some("q3"));
        assert_eq!(settings.utms.len(), 2);
        assert_eq!(settings.privacy_url, None);
    }

    #[test]
    fn no_landing_url_means_no_utms() {
        let settings = Settings::from_parts(None, |_| None).unwrap();
        assert!(settings.utms.is_empty());
    }

    #[test]
    fn privacy_url_from_environment() {
        let settings = Settings::from_parts(None, |var| {
            (var == ENV_PRIVACY_URL).then(|| "https://grupoinforum.com/privacidad".to_string())
        })
        .unwrap();
        assert_eq!(
            settings.privacy_url.map(String::from).as_deref(),
            Some("https://grupoinforum.com/privacidad")
        );
    }

    #[test]
    fn default_country_from_environment() {
        let settings = Settings::from_parts(None, |var| {
            (var == ENV_DEFAULT_COUNTRY).then(|| " ec ".to_string())
        })
        .unwrap();
        assert_eq!(settings.default_country, Some(CountryCode::EC));

        let err = Settings::from_parts(None, |var| {
            (var == ENV_DEFAULT_COUNTRY).then(|| "MX".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, SettingsError::InvalidCountry(UnknownCountry(code)) if code == "MX"));
    }

    #[test]
    fn invalid_urls_are_rejected() {
        let err = Settings::from_parts(Some("not a url"), |_| None).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidLandingUrl { .. }));

        let err = Settings::from_parts(None, |var| {
            (var == ENV_PRIVACY_URL).then(|| "nope".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, SettingsError::InvalidPrivacyUrl(_)));
    }
}
