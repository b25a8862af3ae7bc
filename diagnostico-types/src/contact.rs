use crate::CountryCode;

/// Contact and company details collected on the second step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub company: String,
    pub role: String,
    pub email: String,
    pub country: CountryCode,

    /// Local part of the phone number, digits only, without the prefix.
    pub phone_local: String,

    pub consent: bool,
}

impl ContactForm {
    /// Update one text field.
    ///
    /// Phone input is reduced to its ASCII digits before it is stored.
    pub fn set(&mut self, field: ContactField, value: &str) {
        match field {
            ContactField::Name => self.name = value.to_string(),
            ContactField::Company => self.company = value.to_string(),
            ContactField::Role => self.role = value.to_string(),
            ContactField::Email => self.email = value.to_string(),
            ContactField::Phone => self.phone_local = digits_only(value),
        }
    }

    /// Read one text field.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Company => &self.company,
            ContactField::Role => &self.role,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone_local,
        }
    }
}

/// The free-form text fields of a [`ContactForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Company,
    Role,
    Email,
    Phone,
}

/// Strip every character that is not an ASCII digit.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}
