//! Core types for the diagnostico crate.
//!
//! This crate provides the presentation-agnostic building blocks of the
//! lead-qualification wizard:
//! - `Question` and `QuestionOption` - Static single-choice questions
//! - `Answer` and `Answers` - Recorded selections and free-text supplements
//! - `Country`, `CountryCode` and `PhoneRule` - Per-country phone rules
//! - `ContactForm` - Contact and company details
//! - `Submission` and `Utms` - The payload sent to the gateway
//! - `SubmissionGateway` trait - For implementing submission endpoints

mod question;
pub use question::{Question, QuestionOption};

mod answer;
pub use answer::{Answer, Answers};

mod country;
pub use country::{Country, CountryCode, PhoneRule, UnknownCountry};

mod contact;
pub use contact::{ContactField, ContactForm, digits_only};

mod submission;
pub use submission::{Submission, SubmissionAnswers, UTM_KEYS, Utms};

mod error;
pub use error::{GENERIC_FAILURE_MESSAGE, GatewayError};

mod traits;
pub use traits::SubmissionGateway;
