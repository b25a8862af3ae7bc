use serde::{Deserialize, Serialize};

/// The recorded answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Identifier of the answered question.
    #[serde(rename = "id")]
    pub question_id: String,

    /// Value of the selected option.
    pub value: String,

    /// Free-text supplement, if the user typed one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_text: Option<String>,
}

impl Answer {
    /// Create an answer without a supplement.
    pub fn new(question_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
            extra_text: None,
        }
    }

    /// Attach a free-text supplement.
    pub fn with_extra_text(mut self, text: impl Into<String>) -> Self {
        self.extra_text = Some(text.into());
        self
    }
}

/// Answers keyed by question identifier.
///
/// Keeps the order in which questions were first answered; re-selecting an
/// option overwrites the existing entry in place instead of appending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    items: Vec<Answer>,
}

impl Answers {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Get the answer for a question.
    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.items.iter().find(|a| a.question_id == question_id)
    }

    /// Get a mutable reference to the answer for a question.
    pub fn get_mut(&mut self, question_id: &str) -> Option<&mut Answer> {
        self.items.iter_mut().find(|a| a.question_id == question_id)
    }

    /// Check if a question has an answer.
    pub fn contains(&self, question_id: &str) -> bool {
        self.get(question_id).is_some()
    }

    /// Record the selected option for a question.
    ///
    /// An existing supplement is kept even when the value changes.
    pub fn select(&mut self, question_id: &str, value: &str) {
        match self.get_mut(question_id) {
            Some(existing) => existing.value = value.to_string(),
            None => self.items.push(Answer::new(question_id, value)),
        }
    }

    /// Iterate over the answers in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.items.iter()
    }

    /// Get the number of answered questions.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing was answered yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clone the answers into a list for the submission payload.
    pub fn to_vec(&self) -> Vec<Answer> {
        self.items.clone()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = &'a Answer;
    type IntoIter = std::slice::Iter<'a, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_overwrites_in_place() {
        let mut answers = Answers::new();
        answers.select("industria", "retail");
        answers.select("erp", "sapb1");
        answers.select("industria", "servicios");

        assert_eq!(answers.len(), 2);
        let order: Vec<_> = answers.iter().map(|a| a.question_id.as_str()).collect();
        assert_eq!(order, vec!["industria", "erp"]);
        assert_eq!(answers.get("industria").map(|a| a.value.as_str()), Some("servicios"));
    }

    #[test]
    fn select_keeps_supplement() {
        let mut answers = Answers::new();
        answers.select("erp", "erp_otro");
        if let Some(answer) = answers.get_mut("erp") {
            answer.extra_text = Some("Odoo".to_string());
        }
        answers.select("erp", "sapb1");

        assert_eq!(
            answers.get("erp").and_then(|a| a.extra_text.as_deref()),
            Some("Odoo")
        );
    }

    #[test]
    fn wire_shape() {
        let plain = serde_json::to_value(Answer::new("erp", "sapb1")).unwrap();
        assert_eq!(plain, serde_json::json!({ "id": "erp", "value": "sapb1" }));

        let with_text =
            serde_json::to_value(Answer::new("busca", "sistema").with_extra_text("CRM")).unwrap();
        assert_eq!(
            with_text,
            serde_json::json!({ "id": "busca", "value": "sistema", "extraText": "CRM" })
        );
    }
}
