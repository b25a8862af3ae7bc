/// A single qualification question.
///
/// Questions are static configuration: the wizard ships a fixed set and
/// users cannot add to it. Every question is single-choice and must be
/// answered before leaving the questions step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Stable identifier, also used as the answer key on the wire.
    id: &'static str,

    /// The prompt text shown to the user.
    prompt: &'static str,

    /// The options to choose exactly one from, in display order.
    options: &'static [QuestionOption],
}

impl Question {
    /// Create a question.
    pub const fn new(
        id: &'static str,
        prompt: &'static str,
        options: &'static [QuestionOption],
    ) -> Self {
        Self {
            id,
            prompt,
            options,
        }
    }

    /// Get the question identifier.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    /// Get the options in display order.
    pub fn options(&self) -> &'static [QuestionOption] {
        self.options
    }

    /// Look up an option by its value.
    pub fn option(&self, value: &str) -> Option<&'static QuestionOption> {
        self.options.iter().find(|option| option.value() == value)
    }

    /// Position of an option in the display order.
    pub fn option_index(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|option| option.value() == value)
    }
}

/// One selectable option of a [`Question`].
///
/// Options either stand on their own or ask the user to elaborate in a
/// free-text supplement ("Otro (especificar)").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionOption {
    /// A plain option; selecting it needs no further input.
    Plain {
        value: &'static str,
        label: &'static str,
    },

    /// An option that discloses a free-text supplement input when selected.
    FreeText {
        value: &'static str,
        label: &'static str,
    },
}

impl QuestionOption {
    /// Create a plain option.
    pub const fn plain(value: &'static str, label: &'static str) -> Self {
        Self::Plain { value, label }
    }

    /// Create an option that asks for a free-text supplement.
    pub const fn free_text(value: &'static str, label: &'static str) -> Self {
        Self::FreeText { value, label }
    }

    /// The value recorded in the answer.
    pub fn value(&self) -> &'static str {
        match self {
            Self::Plain { value, .. } | Self::FreeText { value, .. } => value,
        }
    }

    /// The label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Plain { label, .. } | Self::FreeText { label, .. } => label,
        }
    }

    /// Check if selecting this option discloses the free-text input.
    pub fn requires_text(&self) -> bool {
        matches!(self, Self::FreeText { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: &[QuestionOption] = &[
        QuestionOption::plain("sapb1", "SAP Business One"),
        QuestionOption::free_text("erp_otro", "Otro (especificar)"),
    ];

    #[test]
    fn option_lookup() {
        let question = Question::new("erp", "¿Qué ERP?", OPTIONS);

        assert_eq!(question.option("sapb1").map(|o| o.label()), Some("SAP Business One"));
        assert_eq!(question.option_index("erp_otro"), Some(1));
        assert!(question.option("missing").is_none());
    }

    #[test]
    fn free_text_disclosure() {
        assert!(!OPTIONS[0].requires_text());
        assert!(OPTIONS[1].requires_text());
    }
}
