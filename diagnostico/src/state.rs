//! The wizard state machine.
//!
//! [`WizardState`] owns everything one session mutates. It only changes
//! through [`WizardState::apply`], which takes one [`Command`] and may hand
//! back an [`Effect`] for the driver to perform.

use diagnostico_types::{
    Answers, ContactField, ContactForm, CountryCode, GatewayError, QuestionOption, Submission,
    SubmissionAnswers, Utms,
};
use tracing::{debug, info, warn};

use crate::catalog::{
    self, CONSENT_REQUIRED_MESSAGE, EMAIL_HINT, INCOMPLETE_DATA_MESSAGE, QUESTIONS, SUCCESS_VIEW,
};
use crate::validate;

/// The three pages of the wizard, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Qualification questions.
    #[default]
    Questions,
    /// Contact and company details.
    Contact,
    /// Consent and submission.
    Consent,
}

impl Step {
    /// Number of steps.
    pub const COUNT: u8 = 3;

    /// One-based position of the step.
    pub fn number(self) -> u8 {
        match self {
            Self::Questions => 1,
            Self::Contact => 2,
            Self::Consent => 3,
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::Questions => Some(Self::Contact),
            Self::Contact => Some(Self::Consent),
            Self::Consent => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            Self::Questions => None,
            Self::Contact => Some(Self::Questions),
            Self::Consent => Some(Self::Contact),
        }
    }
}

/// A user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Choose an option for a question, replacing any earlier choice.
    SelectAnswer { question: String, option: String },

    /// Edit the free-text supplement of an answered question.
    SetExtraText { question: String, text: String },

    /// Edit a contact text field.
    SetField { field: ContactField, value: String },

    /// Pick the country that drives the phone rule.
    SetCountry(CountryCode),

    /// Tick or untick the consent checkbox.
    SetConsent(bool),

    /// Move to the next step if its gate holds.
    Advance,

    /// Move to the previous step.
    Retreat,

    /// Submit from the last step.
    Submit,

    /// Report the outcome of the gateway call started by `Submit`.
    SubmissionSettled(Result<(), GatewayError>),
}

impl Command {
    /// Shorthand for [`Command::SelectAnswer`].
    pub fn select(question: impl Into<String>, option: impl Into<String>) -> Self {
        Self::SelectAnswer {
            question: question.into(),
            option: option.into(),
        }
    }

    /// Shorthand for [`Command::SetExtraText`].
    pub fn extra_text(question: impl Into<String>, text: impl Into<String>) -> Self {
        Self::SetExtraText {
            question: question.into(),
            text: text.into(),
        }
    }

    /// Shorthand for [`Command::SetField`].
    pub fn field(field: ContactField, value: impl Into<String>) -> Self {
        Self::SetField {
            field,
            value: value.into(),
        }
    }
}

/// Work the state machine asks its driver to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,

    /// Send this payload to the gateway, then apply
    /// [`Command::SubmissionSettled`] with the outcome.
    Submit(Submission),
}

/// A link offered on the thank-you screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutboundLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// What the thank-you screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultView {
    pub title: &'static str,
    pub message: &'static str,
    pub links: &'static [OutboundLink],
}

/// The state of one wizard session.
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    step: Step,
    answers: Answers,
    form: ContactForm,
    utms: Utms,
    submitting: bool,
    error: Option<String>,
    result: Option<ResultView>,
}

impl WizardState {
    /// Start a session on the first step with an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session carrying the attribution parameters of the landing URL.
    pub fn with_utms(utms: Utms) -> Self {
        Self {
            utms,
            ..Self::default()
        }
    }

    /// Apply one command.
    ///
    /// Commands whose preconditions do not hold are ignored. Once the
    /// session reached its result every command is ignored.
    pub fn apply(&mut self, command: Command) -> Effect {
        if self.result.is_some() {
            debug!(?command, "session already complete, ignoring command");
            return Effect::None;
        }

        match command {
            Command::SelectAnswer { question, option } => self.select_answer(&question, &option),
            Command::SetExtraText { question, text } => self.set_extra_text(&question, text),
            Command::SetField { field, value } => self.form.set(field, &value),
            Command::SetCountry(country) => self.form.country = country,
            Command::SetConsent(consent) => self.form.consent = consent,
            Command::Advance => self.advance(),
            Command::Retreat => self.retreat(),
            Command::Submit => return self.begin_submit(),
            Command::SubmissionSettled(outcome) => self.settle(outcome),
        }
        Effect::None
    }

    fn select_answer(&mut self, question_id: &str, value: &str) {
        let Some(question) = catalog::question(question_id) else {
            warn!(question = question_id, "ignoring answer to unknown question");
            return;
        };
        let Some(option) = question.option(value) else {
            warn!(question = question_id, option = value, "ignoring unknown option");
            return;
        };
        self.answers.select(question.id(), option.value());
    }

    fn set_extra_text(&mut self, question_id: &str, text: String) {
        match self.answers.get_mut(question_id) {
            Some(answer) => answer.extra_text = Some(text),
            None => debug!(question = question_id, "no answer yet, ignoring supplement"),
        }
    }

    fn advance(&mut self) {
        if !self.can_advance() {
            debug!(step = ?self.step, "gate closed, not advancing");
            return;
        }
        if let Some(next) = self.step.next() {
            debug!(from = ?self.step, to = ?next, "advancing");
            self.step = next;
        }
    }

    fn retreat(&mut self) {
        if let Some(previous) = self.step.previous() {
            debug!(from = ?self.step, to = ?previous, "retreating");
            self.step = previous;
        }
    }

    fn begin_submit(&mut self) -> Effect {
        if self.step != Step::Consent {
            debug!(step = ?self.step, "submit outside the consent step, ignoring");
            return Effect::None;
        }
        if self.submitting {
            debug!("submission already in flight, ignoring");
            return Effect::None;
        }

        self.error = None;
        if !self.form.consent {
            self.error = Some(CONSENT_REQUIRED_MESSAGE.to_string());
            return Effect::None;
        }
        if !self.questions_complete() || !self.contact_valid() {
            warn!("earlier step no longer valid, refusing to submit");
            self.error = Some(INCOMPLETE_DATA_MESSAGE.to_string());
            return Effect::None;
        }

        self.submitting = true;
        info!(company = %self.form.company, "submitting diagnostico");
        Effect::Submit(self.submission())
    }

    fn settle(&mut self, outcome: Result<(), GatewayError>) {
        if !self.submitting {
            warn!("submission outcome without a submission in flight, ignoring");
            return;
        }
        self.submitting = false;

        match outcome {
            Ok(()) => {
                info!(company = %self.form.company, "diagnostico submitted");
                self.result = Some(SUCCESS_VIEW);
            }
            Err(err) => {
                warn!(error = %err, "submission failed");
                self.error = Some(err.user_message());
            }
        }
    }

    // === Accessors ===

    /// The current step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Answers recorded so far.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// The contact form.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Attribution parameters of the session.
    pub fn utms(&self) -> &Utms {
        &self.utms
    }

    /// Check if a submission is waiting for the gateway.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The last user-visible error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The thank-you screen, once the submission succeeded.
    pub fn result(&self) -> Option<&ResultView> {
        self.result.as_ref()
    }

    /// Check if the session reached its result.
    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    // === Derived values ===

    /// Progress shown in the bar, in percent.
    pub fn progress_pct(&self) -> f64 {
        f64::from(self.step.number()) / f64::from(Step::COUNT) * 100.0
    }

    /// The option currently selected for a question.
    pub fn selected_option(&self, question_id: &str) -> Option<&'static QuestionOption> {
        let question = catalog::question(question_id)?;
        let answer = self.answers.get(question_id)?;
        question.option(&answer.value)
    }

    /// Check if the free-text input of a question should be visible.
    pub fn should_show_extra_input(&self, question_id: &str) -> bool {
        self.selected_option(question_id)
            .is_some_and(QuestionOption::requires_text)
    }

    /// Gate of the questions step.
    pub fn questions_complete(&self) -> bool {
        QUESTIONS.iter().all(|q| self.answers.contains(q.id()))
    }

    /// Gate of the contact step.
    pub fn contact_valid(&self) -> bool {
        let form = &self.form;
        validate::has_min_length(&form.name)
            && validate::has_min_length(&form.company)
            && validate::has_min_length(&form.role)
            && validate::is_email_shaped(&form.email)
            && validate::is_corporate_email(&form.email)
            && self.phone_valid()
    }

    /// Check if [`Command::Advance`] would move forward.
    pub fn can_advance(&self) -> bool {
        match self.step {
            Step::Questions => self.questions_complete(),
            Step::Contact => self.contact_valid(),
            Step::Consent => false,
        }
    }

    /// Check if [`Command::Retreat`] would move back.
    pub fn can_retreat(&self) -> bool {
        self.step.previous().is_some()
    }

    /// Check if the submit control should be enabled.
    ///
    /// Agrees with [`Command::Submit`]: true exactly when submitting would
    /// produce [`Effect::Submit`].
    pub fn can_submit(&self) -> bool {
        self.step == Step::Consent
            && self.form.consent
            && !self.submitting
            && self.questions_complete()
            && self.contact_valid()
    }

    /// Check the local phone number against the selected country.
    pub fn phone_valid(&self) -> bool {
        validate::is_phone_valid(&self.form.phone_local, self.form.country)
    }

    /// Dialing prefix of the selected country.
    pub fn phone_prefix(&self) -> &'static str {
        validate::phone_prefix(self.form.country)
    }

    /// The phone number as it will be submitted.
    pub fn full_phone(&self) -> String {
        validate::full_phone(&self.form.phone_local, self.form.country)
    }

    /// Display label of the selected country.
    pub fn country_label(&self) -> &'static str {
        catalog::country(self.form.country).map_or(self.form.country.as_str(), |c| c.label)
    }

    /// Inline guidance for a non-corporate email.
    pub fn email_hint(&self) -> Option<&'static str> {
        let email = &self.form.email;
        (!email.is_empty() && !validate::is_corporate_email(email)).then_some(EMAIL_HINT)
    }

    /// Inline guidance for a phone number out of range.
    pub fn phone_hint(&self) -> Option<String> {
        (!self.form.phone_local.is_empty() && !self.phone_valid())
            .then(|| validate::phone_requirement_text(self.form.country))
    }

    /// Assemble the submission payload from the current state.
    pub fn submission(&self) -> Submission {
        let form = &self.form;
        Submission {
            name: form.name.clone(),
            company: form.company.clone(),
            role: form.role.clone(),
            email: form.email.clone(),
            country: self.country_label().to_string(),
            phone: self.full_phone(),
            answers: SubmissionAnswers {
                utms: self.utms.clone(),
                items: self.answers.to_vec(),
            },
        }
    }
}
