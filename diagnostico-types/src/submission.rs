use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Answer;

/// Attribution query parameters forwarded with a submission.
pub const UTM_KEYS: [&str; 5] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_content",
    "utm_term",
];

/// The attribution parameters present on the landing URL.
///
/// Only known `utm_*` keys with a non-empty value are kept; absent ones are
/// omitted rather than sent empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Utms(BTreeMap<String, String>);

impl Utms {
    /// Create an empty set of parameters.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Collect the attribution parameters from query pairs.
    ///
    /// The first occurrence of a key wins.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut utms = Self::new();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            if value.is_empty() || !UTM_KEYS.contains(&key) || utms.0.contains_key(key) {
                continue;
            }
            utms.0.insert(key.to_string(), value.to_string());
        }
        utms
    }

    /// Get a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Get the number of parameters present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no parameter is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The answers section of a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAnswers {
    pub utms: Utms,
    pub items: Vec<Answer>,
}

/// The payload handed to the submission gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub company: String,
    pub role: String,
    pub email: String,

    /// Display label of the selected country, not its code.
    pub country: String,

    /// Dialing prefix followed by the local digits.
    pub phone: String,

    pub answers: SubmissionAnswers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_present_utm_keys() {
        let utms = Utms::from_query_pairs([
            ("utm_source", "linkedin"),
            ("utm_medium", ""),
            ("gclid", "abc"),
            ("utm_campaign", "erp-2025"),
            ("utm_source", "ignored"),
        ]);

        assert_eq!(utms.len(), 2);
        assert_eq!(utms.get("utm_source"), Some("linkedin"));
        assert_eq!(utms.get("utm_campaign"), Some("erp-2025"));
        assert_eq!(utms.get("utm_medium"), None);
        assert_eq!(utms.get("gclid"), None);
    }

    #[test]
    fn wire_shape() {
        let submission = Submission {
            name: "Ana".to_string(),
            company: "Empresa".to_string(),
            role: "Gerente".to_string(),
            email: "ana@empresa.com".to_string(),
            country: "Panamá".to_string(),
            phone: "+507 12345678".to_string(),
            answers: SubmissionAnswers {
                utms: Utms::from_query_pairs([("utm_term", "erp")]),
                items: vec![Answer::new("erp", "sapb1")],
            },
        };

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ana",
                "company": "Empresa",
                "role": "Gerente",
                "email": "ana@empresa.com",
                "country": "Panamá",
                "phone": "+507 12345678",
                "answers": {
                    "utms": { "utm_term": "erp" },
                    "items": [{ "id": "erp", "value": "sapb1" }]
                }
            })
        );
    }
}
