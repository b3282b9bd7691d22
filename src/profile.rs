use once_cell::sync::Lazy;
use regex::Regex;

// Contact and email checks mirror the form rules: digits only for the
// contact number, and a deliberately loose shape for the email (anything
// tighter rejects real addresses more often than it catches typos).
static CONTACT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{7,15}$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    /// Parse a single-choice selection from the input surface.
    /// Empty or unrecognised input means no option was selected.
    pub fn from_input(value: &str) -> Option<Gender> {
        match value.trim().to_ascii_lowercase().as_str() {
            "female" => Some(Gender::Female),
            "male" => Some(Gender::Male),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// Identification committed after the Info screen validates.
/// Immutable until a restart clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub contact: String,
    pub email: String,
}

/// Raw field values as submitted, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub contact: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    Gender,
    Contact,
    Email,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Contact => "contact",
            Field::Email => "email",
        }
    }
}

/// One field-scoped validation message. Every submit re-validates from
/// scratch, so stale messages never survive a retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

const MIN_AGE: u8 = 10;
const MAX_AGE: u8 = 120;

impl InfoForm {
    /// Check all five fields at once and commit a [`UserProfile`] only when
    /// every one of them passes. Each invalid field contributes exactly one
    /// message, in form order.
    pub fn validate(&self) -> Result<UserProfile, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError {
                field: Field::Name,
                message: "Name is required.",
            });
        }

        let age = self
            .age
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|age| (MIN_AGE..=MAX_AGE).contains(age));
        if age.is_none() {
            errors.push(FieldError {
                field: Field::Age,
                message: "Please enter a valid age between 10 and 120.",
            });
        }

        let gender = Gender::from_input(&self.gender);
        if gender.is_none() {
            errors.push(FieldError {
                field: Field::Gender,
                message: "Please select a gender.",
            });
        }

        let contact = self.contact.trim();
        if !CONTACT_RE.is_match(contact) {
            errors.push(FieldError {
                field: Field::Contact,
                message: "Please enter a valid contact number (only digits, 7-15 characters).",
            });
        }

        let email = self.email.trim();
        if !EMAIL_RE.is_match(email) {
            errors.push(FieldError {
                field: Field::Email,
                message: "Please enter a valid email address.",
            });
        }

        match (errors.is_empty(), age, gender) {
            (true, Some(age), Some(gender)) => Ok(UserProfile {
                name: name.to_string(),
                age,
                gender,
                contact: contact.to_string(),
                email: email.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn valid_form() -> InfoForm {
        InfoForm {
            name: "Asha".to_string(),
            age: "25".to_string(),
            gender: "male".to_string(),
            contact: "1234567".to_string(),
            email: "a@b.co".to_string(),
        }
    }

    #[test]
    fn test_valid_form_commits_profile() {
        let profile = valid_form().validate().unwrap();
        assert_eq!(profile.name, "Asha");
        assert_eq!(profile.age, 25);
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.contact, "1234567");
        assert_eq!(profile.email, "a@b.co");
    }

    #[test]
    fn test_name_is_trimmed() {
        let mut form = valid_form();
        form.name = "  Asha  ".to_string();
        assert_eq!(form.validate().unwrap().name, "Asha");
    }

    #[test]
    fn test_empty_name_fails_alone() {
        let mut form = valid_form();
        form.name = String::new();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Name);
    }

    #[test]
    fn test_whitespace_name_fails() {
        let mut form = valid_form();
        form.name = "   ".to_string();
        assert_eq!(form.validate().unwrap_err()[0].field, Field::Name);
    }

    #[test]
    fn test_age_boundaries_inclusive() {
        for age in ["10", "120"] {
            let mut form = valid_form();
            form.age = age.to_string();
            assert!(form.validate().is_ok(), "age {age} should pass");
        }
        for age in ["9", "121", "", "abc", "-3"] {
            let mut form = valid_form();
            form.age = age.to_string();
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.len(), 1, "age {age:?} should fail");
            assert_eq!(errors[0].field, Field::Age);
        }
    }

    #[test]
    fn test_gender_requires_selection() {
        let mut form = valid_form();
        form.gender = String::new();
        assert_eq!(form.validate().unwrap_err()[0].field, Field::Gender);

        form.gender = "unknown".to_string();
        assert_eq!(form.validate().unwrap_err()[0].field, Field::Gender);

        form.gender = "Female".to_string();
        assert_eq!(form.validate().unwrap().gender, Gender::Female);
    }

    #[test]
    fn test_contact_digits_only_7_to_15() {
        let cases = [
            ("1234567", true),
            ("123456789012345", true),
            ("123456", false),
            ("1234567890123456", false),
            ("12345a7", false),
            ("+1234567", false),
            ("123 4567", false),
        ];
        for (contact, expected) in cases {
            let mut form = valid_form();
            form.contact = contact.to_string();
            assert_eq!(form.validate().is_ok(), expected, "contact {contact:?}");
        }
    }

    #[test]
    fn test_email_minimal_pattern() {
        let cases = [
            ("a@b.co", true),
            ("first.last@example.org", true),
            ("a@b", false),
            ("@b.co", false),
            ("a@.", false),
            ("a b@c.d", false),
            ("", false),
        ];
        for (email, expected) in cases {
            let mut form = valid_form();
            form.email = email.to_string();
            assert_eq!(form.validate().is_ok(), expected, "email {email:?}");
        }
    }

    #[test]
    fn test_one_error_per_invalid_field() {
        let form = InfoForm::default();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Name,
                Field::Age,
                Field::Gender,
                Field::Contact,
                Field::Email
            ]
        );
    }
}
