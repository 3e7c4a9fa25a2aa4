//! Form state controller
//!
//! Holds the candidate's registration number and date of birth plus the
//! transient error/submitting flags. All mutation goes through the setters
//! here; the submission handler is the only other writer.

use serde::{Deserialize, Serialize};

/// One component of the date of birth triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DobField {
    Day,
    Month,
    Year,
}

impl DobField {
    /// Parse the field from its lowercase name
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "day" => Some(DobField::Day),
            "month" => Some(DobField::Month),
            "year" => Some(DobField::Year),
            _ => None,
        }
    }
}

/// Date of birth as entered, one string per dropdown.
///
/// No calendar check: `31` / `2` / `2001` is a perfectly good value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOfBirth {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl DateOfBirth {
    pub fn new(day: impl Into<String>, month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }

    /// Copy of `self` with one field replaced
    pub fn with_field(&self, field: DobField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        match field {
            DobField::Day => next.day = value.into(),
            DobField::Month => next.month = value.into(),
            DobField::Year => next.year = value.into(),
        }
        next
    }

    pub fn get(&self, field: DobField) -> &str {
        match field {
            DobField::Day => &self.day,
            DobField::Month => &self.month,
            DobField::Year => &self.year,
        }
    }
}

/// The four inputs the candidate fills in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    RegistrationNumber,
    Dob(DobField),
}

impl FormField {
    /// The `name` attribute the control carries in the rendered form
    pub fn input_name(&self) -> &'static str {
        match self {
            FormField::RegistrationNumber => "registration_number",
            FormField::Dob(DobField::Day) => "dob_day",
            FormField::Dob(DobField::Month) => "dob_month",
            FormField::Dob(DobField::Year) => "dob_year",
        }
    }

    /// Inverse of [`FormField::input_name`]
    pub fn from_input_name(name: &str) -> Option<Self> {
        match name {
            "registration_number" => Some(FormField::RegistrationNumber),
            _ => name
                .strip_prefix("dob_")
                .and_then(DobField::parse)
                .map(FormField::Dob),
        }
    }
}

/// Login form state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub registration_number: String,
    pub date_of_birth: DateOfBirth,
    /// Empty means no error banner
    pub error_message: String,
    pub is_submitting: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the registration number verbatim
    pub fn set_registration_number(&mut self, value: impl Into<String>) {
        self.registration_number = value.into();
    }

    /// Replace one date of birth component, keeping the other two
    pub fn set_date_of_birth(&mut self, field: DobField, value: impl Into<String>) {
        self.date_of_birth = self.date_of_birth.with_field(field, value);
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
    }

    /// Route a value to whichever input it belongs to
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        match field {
            FormField::RegistrationNumber => self.set_registration_number(value),
            FormField::Dob(dob) => self.set_date_of_birth(dob, value),
        }
    }

    /// Reset the four inputs; error and submitting flags are left alone
    pub fn clear_inputs(&mut self) {
        self.registration_number.clear();
        self.date_of_birth = DateOfBirth::default();
    }

    /// Inputs that are still empty, in form order
    pub fn missing_fields(&self) -> Vec<FormField> {
        let mut missing = Vec::new();
        if self.registration_number.is_empty() {
            missing.push(FormField::RegistrationNumber);
        }
        for field in [DobField::Day, DobField::Month, DobField::Year] {
            if self.date_of_birth.get(field).is_empty() {
                missing.push(FormField::Dob(field));
            }
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_with_field_leaves_others_untouched() {
        let dob = DateOfBirth::new("15", "8", "2001");
        let next = dob.with_field(DobField::Month, "9");
        assert_eq!(next, DateOfBirth::new("15", "9", "2001"));
        assert_eq!(dob, DateOfBirth::new("15", "8", "2001"));
    }

    #[test]
    fn test_set_date_of_birth_merges() {
        let mut state = FormState::new();
        state.set_date_of_birth(DobField::Day, "31");
        state.set_date_of_birth(DobField::Year, "1990");
        assert_eq!(state.date_of_birth, DateOfBirth::new("31", "", "1990"));
    }

    #[test]
    fn test_registration_number_overwritten_verbatim() {
        let mut state = FormState::new();
        state.set_registration_number("UP1");
        state.set_registration_number("  up 2 ");
        assert_eq!(state.registration_number, "  up 2 ");
    }

    #[test]
    fn test_set_error_empty_clears_banner() {
        let mut state = FormState::new();
        state.set_error("File not found");
        assert!(state.has_error());
        state.set_error("");
        assert!(!state.has_error());
    }

    #[test]
    fn test_missing_fields_order() {
        let mut state = FormState::new();
        state.set_date_of_birth(DobField::Month, "2");
        assert_eq!(
            state.missing_fields(),
            vec![
                FormField::RegistrationNumber,
                FormField::Dob(DobField::Day),
                FormField::Dob(DobField::Year),
            ]
        );
    }

    #[test]
    fn test_impossible_date_counts_as_complete() {
        let mut state = FormState::new();
        state.set_registration_number("UP1");
        state.set_date_of_birth(DobField::Day, "31");
        state.set_date_of_birth(DobField::Month, "2");
        state.set_date_of_birth(DobField::Year, "2001");
        assert!(state.is_complete());
    }

    #[test]
    fn test_clear_inputs_keeps_flags() {
        let mut state = FormState {
            registration_number: "UP1".into(),
            date_of_birth: DateOfBirth::new("1", "1", "2000"),
            error_message: "x".into(),
            is_submitting: true,
        };
        state.clear_inputs();
        assert_eq!(state.registration_number, "");
        assert_eq!(state.date_of_birth, DateOfBirth::default());
        assert_eq!(state.error_message, "x");
        assert!(state.is_submitting);
    }

    #[test]
    fn test_input_name_mapping() {
        for field in [
            FormField::RegistrationNumber,
            FormField::Dob(DobField::Day),
            FormField::Dob(DobField::Month),
            FormField::Dob(DobField::Year),
        ] {
            assert_eq!(FormField::from_input_name(field.input_name()), Some(field));
        }
        assert_eq!(FormField::from_input_name("dob_week"), None);
        assert_eq!(FormField::from_input_name("email"), None);
    }

    #[test]
    fn test_set_field_routes() {
        let mut state = FormState::new();
        state.set_field(FormField::RegistrationNumber, "UP5");
        state.set_field(FormField::Dob(DobField::Year), "1999");
        assert_eq!(state.registration_number, "UP5");
        assert_eq!(state.date_of_birth.year, "1999");
    }
}
