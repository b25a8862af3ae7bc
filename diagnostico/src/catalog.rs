//! Static configuration of the diagnostico: questions, countries, copy.

use diagnostico_types::{Country, CountryCode, PhoneRule, Question, QuestionOption};

use crate::state::{OutboundLink, ResultView};

pub const QUESTIONS: &[Question] = &[
    Question::new(
        "industria",
        "¿En qué industria opera la compañía?",
        &[
            QuestionOption::plain("produccion", "Producción"),
            QuestionOption::plain("distribucion", "Distribución"),
            QuestionOption::plain("retail", "Retail"),
            QuestionOption::plain("servicios", "Servicios"),
            QuestionOption::plain("inmobiliaria_desarrollo", "Inmobiliaria y Desarrollo"),
            QuestionOption::plain("restaurante", "Restaurante"),
            QuestionOption::free_text("otro", "Otro (especificar)"),
        ],
    ),
    Question::new(
        "erp",
        "¿Qué sistema empresarial (ERP) utiliza actualmente su empresa?",
        &[
            QuestionOption::plain("sapb1", "SAP Business One"),
            QuestionOption::plain("sistema_propio", "Sistema Propio"),
            QuestionOption::free_text("erp_otro", "Otro (especificar)"),
        ],
    ),
    Question::new(
        "busca",
        "¿Estás buscando un sistema o un servicio en particular?",
        &[
            QuestionOption::free_text("sistema", "Sistema (especificar)"),
            QuestionOption::free_text("servicio", "Servicio (especificar)"),
        ],
    ),
];

pub const COUNTRIES: &[Country] = &[
    Country {
        code: CountryCode::GT,
        label: "Guatemala",
        prefix: "+502",
        phone_rule: PhoneRule::at_least(8),
    },
    Country {
        code: CountryCode::SV,
        label: "El Salvador",
        prefix: "+503",
        phone_rule: PhoneRule::at_least(8),
    },
    Country {
        code: CountryCode::HN,
        label: "Honduras",
        prefix: "+504",
        phone_rule: PhoneRule::at_least(8),
    },
    Country {
        code: CountryCode::PA,
        label: "Panamá",
        prefix: "+507",
        phone_rule: PhoneRule::at_least(8),
    },
    Country {
        code: CountryCode::DO,
        label: "República Dominicana",
        prefix: "+1",
        phone_rule: PhoneRule::at_least(10),
    },
    Country {
        code: CountryCode::EC,
        label: "Ecuador",
        prefix: "+593",
        phone_rule: PhoneRule::at_least(9).with_note("Usa tu número móvil (9 dígitos)"),
    },
];

/// Prefix used when a country is missing from [`COUNTRIES`].
pub const DEFAULT_PREFIX: &str = "+502";

/// Rule used when a country is missing from [`COUNTRIES`].
pub const FALLBACK_PHONE_RULE: PhoneRule = PhoneRule::at_least(8);

/// Consumer mailbox providers that do not count as corporate email.
pub const FREE_EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "hotmail.com",
    "outlook.com",
    "yahoo.com",
    "icloud.com",
    "proton.me",
    "aol.com",
    "live.com",
    "msn.com",
];

pub const EMAIL_HINT: &str = "Usa un correo corporativo (no gmail/hotmail/outlook/yahoo, etc.).";

pub const CONSENT_REQUIRED_MESSAGE: &str = "Debes aceptar el consentimiento para continuar.";

/// Shown when an earlier step stopped being valid after it was passed.
pub const INCOMPLETE_DATA_MESSAGE: &str = "Revisa los datos de contacto.";

pub const CONSENT_TEXT: &str = "Autorizo a Grupo Inforum a contactarme respecto a esta \
    evaluación y servicios relacionados. He leído la";

pub const PRIVACY_POLICY_LABEL: &str = "Política de Privacidad";

pub const SUCCESS_VIEW: ResultView = ResultView {
    title: "Formulario enviado",
    message: "Gracias por compartirnos esta información. Nuestro equipo revisará tus \
        respuestas y te contactará para acompañarte en los siguientes pasos.",
    links: &[
        OutboundLink {
            label: "Visita nuestro website",
            url: "https://www.grupoinforum.com",
        },
        OutboundLink {
            label: "Ir a WhatsApp",
            url: "https://wa.me/50242170962?text=Hola%2C%20vengo%20del%20formulario%20de%20software%20de%20gesti%C3%B3n",
        },
    ],
};

/// Look up a question by identifier.
pub fn question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id() == id)
}

/// Look up a row of the country table.
pub fn country(code: CountryCode) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code == code)
}
