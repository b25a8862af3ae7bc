//! Dialoguer front-end driving the diagnostico wizard.

use diagnostico::catalog::{COUNTRIES, CONSENT_TEXT, PRIVACY_POLICY_LABEL, QUESTIONS};
use diagnostico::{
    Command, ContactField, Question, ResultView, Step, SubmissionGateway, Wizard, WizardState,
};
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Input, Select};
use thiserror::Error;

/// Error type for the Dialoguer front-end.
#[derive(Debug, Error)]
pub enum FrontendError {
    /// User cancelled the wizard (e.g., pressed Ctrl+C or Escape).
    #[error("Wizard cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn prompt_error(err: dialoguer::Error) -> FrontendError {
    if is_cancelled(&err) {
        FrontendError::Cancelled
    } else {
        FrontendError::Dialoguer(err)
    }
}

/// What the user can do at the bottom of the contact step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContactAction {
    Next,
    Edit,
    Back,
}

impl ContactAction {
    fn label(self) -> &'static str {
        match self {
            Self::Next => "Siguiente",
            Self::Edit => "Corregir datos",
            Self::Back => "Atrás",
        }
    }
}

/// The actions on offer; "Siguiente" only appears once the gate holds.
fn contact_actions(state: &WizardState) -> Vec<ContactAction> {
    let mut actions = Vec::with_capacity(3);
    if state.can_advance() {
        actions.push(ContactAction::Next);
    }
    actions.push(ContactAction::Edit);
    actions.push(ContactAction::Back);
    actions
}

fn progress_line(state: &WizardState) -> String {
    format!(
        "Paso {} de {} · {:.0}%",
        state.step().number(),
        Step::COUNT,
        state.progress_pct()
    )
}

fn consent_line(privacy_url: Option<&str>) -> String {
    match privacy_url {
        Some(url) => format!("{CONSENT_TEXT} {PRIVACY_POLICY_LABEL} ({url})"),
        None => format!("{CONSENT_TEXT} {PRIVACY_POLICY_LABEL}"),
    }
}

/// Dialoguer front-end for the diagnostico wizard.
///
/// Presents the three steps as CLI prompts. Gates are shown the way a form
/// disables its buttons: the "next" action is only offered once the current
/// step is valid, and inline guidance explains what is missing.
#[derive(Debug, Default, Clone)]
pub struct DialoguerFrontend {
    /// Use colorful theme for prompts.
    colorful: bool,

    /// Link to the privacy policy shown next to the consent checkbox.
    privacy_url: Option<String>,
}

impl DialoguerFrontend {
    /// Create a front-end with the default (colorful) theme.
    pub fn new() -> Self {
        Self {
            colorful: true,
            privacy_url: None,
        }
    }

    /// Create a front-end with plain (no color) theme.
    pub fn plain() -> Self {
        Self {
            colorful: false,
            privacy_url: None,
        }
    }

    /// Link the privacy policy; without a URL it is named in plain text.
    pub fn with_privacy_url(mut self, url: Option<String>) -> Self {
        self.privacy_url = url;
        self
    }

    /// Run the wizard until the submission succeeds.
    ///
    /// Gateway failures are shown and the user may retry; only cancellation
    /// and terminal errors end the run early.
    pub async fn run<G: SubmissionGateway>(
        &self,
        wizard: &mut Wizard<G>,
    ) -> Result<ResultView, FrontendError> {
        loop {
            if let Some(view) = wizard.state().result().copied() {
                show_result(&view);
                return Ok(view);
            }

            println!();
            println!("{}", progress_line(wizard.state()));
            match wizard.state().step() {
                Step::Questions => self.questions_step(wizard).await?,
                Step::Contact => self.contact_step(wizard).await?,
                Step::Consent => self.consent_step(wizard).await?,
            }
        }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    fn select(
        &self,
        prompt: &str,
        items: &[&str],
        default: usize,
    ) -> Result<usize, FrontendError> {
        let theme = self.theme();
        Select::with_theme(&*theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn input(&self, prompt: &str, initial: &str) -> Result<String, FrontendError> {
        let theme = self.theme();
        Input::<String>::with_theme(&*theme)
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, FrontendError> {
        let theme = self.theme();
        Confirm::with_theme(&*theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    async fn questions_step<G: SubmissionGateway>(
        &self,
        wizard: &mut Wizard<G>,
    ) -> Result<(), FrontendError> {
        for question in QUESTIONS {
            self.ask_question(wizard, question).await?;
        }
        wizard.dispatch(Command::Advance).await;
        Ok(())
    }

    async fn ask_question<G: SubmissionGateway>(
        &self,
        wizard: &mut Wizard<G>,
        question: &Question,
    ) -> Result<(), FrontendError> {
        let items: Vec<&str> = question.options().iter().map(|o| o.label()).collect();
        let default = wizard
            .state()
            .selected_option(question.id())
            .and_then(|o| question.option_index(o.value()))
            .unwrap_or(0);

        let selection = self.select(question.prompt(), &items, default)?;
        let Some(option) = question.options().get(selection) else {
            return Ok(());
        };
        wizard
            .dispatch(Command::select(question.id(), option.value()))
            .await;

        // Follow-up text for "Otro (especificar)" style options
        if wizard.state().should_show_extra_input(question.id()) {
            let current = wizard
                .state()
                .answers()
                .get(question.id())
                .and_then(|a| a.extra_text.clone())
                .unwrap_or_default();
            let text = self.input("Especifica", &current)?;
            wizard
                .dispatch(Command::extra_text(question.id(), text))
                .await;
        }
        Ok(())
    }

    async fn contact_step<G: SubmissionGateway>(
        &self,
        wizard: &mut Wizard<G>,
    ) -> Result<(), FrontendError> {
        self.edit_contact(wizard).await?;

        loop {
            let state = wizard.state();
            if let Some(hint) = state.email_hint() {
                println!("{hint}");
            }
            match state.phone_hint() {
                Some(hint) => println!("{hint}"),
                None => println!("Se enviará como: {}", state.full_phone()),
            }

            let actions = contact_actions(state);
            let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
            let choice = self.select("¿Qué deseas hacer?", &labels, 0)?;

            match actions.get(choice) {
                Some(ContactAction::Next) => {
                    wizard.dispatch(Command::Advance).await;
                    return Ok(());
                }
                Some(ContactAction::Back) => {
                    wizard.dispatch(Command::Retreat).await;
                    return Ok(());
                }
                Some(ContactAction::Edit) | None => self.edit_contact(wizard).await?,
            }
        }
    }

    async fn edit_contact<G: SubmissionGateway>(
        &self,
        wizard: &mut Wizard<G>,
    ) -> Result<(), FrontendError> {
        let fields = [
            (ContactField::Name, "Nombre completo"),
            (ContactField::Company, "Empresa"),
            (ContactField::Role, "Cargo en la empresa"),
            (ContactField::Email, "Correo empresarial"),
        ];
        for (field, prompt) in fields {
            let value = self.input(prompt, wizard.state().form().get(field))?;
            wizard.dispatch(Command::field(field, value)).await;
        }

        let labels: Vec<&str> = COUNTRIES.iter().map(|c| c.label).collect();
        let current = wizard.state().form().country;
        let default = COUNTRIES
            .iter()
            .position(|c| c.code == current)
            .unwrap_or(0);
        let selection = self.select("País", &labels, default)?;
        if let Some(country) = COUNTRIES.get(selection) {
            wizard.dispatch(Command::SetCountry(country.code)).await;
        }

        let prompt = format!("Teléfono {} (solo dígitos)", wizard.state().phone_prefix());
        let phone = self.input(&prompt, &wizard.state().form().phone_local)?;
        wizard.dispatch(Command::field(ContactField::Phone, phone)).await;
        Ok(())
    }

    async fn consent_step<G: SubmissionGateway>(
        &self,
        wizard: &mut Wizard<G>,
    ) -> Result<(), FrontendError> {
        println!("{}", consent_line(self.privacy_url.as_deref()));
        let consent = self.confirm("¿Aceptas?", wizard.state().form().consent)?;
        wizard.dispatch(Command::SetConsent(consent)).await;

        let choice = self.select("¿Qué deseas hacer?", &["Enviar formulario", "Atrás"], 0)?;
        if choice == 1 {
            wizard.dispatch(Command::Retreat).await;
            return Ok(());
        }

        if wizard.state().can_submit() {
            println!("Enviando...");
        }
        let state = wizard.dispatch(Command::Submit).await;
        if let Some(error) = state.error() {
            println!("{error}");
        }
        Ok(())
    }
}

fn show_result(view: &ResultView) {
    println!();
    println!("{}", view.title);
    println!();
    println!("{}", view.message);
    println!();
    for link in view.links {
        println!("{}: {}", link.label, link.url);
    }
}
