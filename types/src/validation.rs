//! Signup form validation.
//!
//! The signup form is the one non-trivial client-side validation state
//! machine: every input event re-evaluates the full predicate set and
//! toggles submit enablement. Enablement is a pure function of the current
//! field values, so it lives here rather than in the UI layer.

/// The four independent password predicates. All must hold before the
/// signup submit control enables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: bool,
    pub has_letter: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl PasswordPolicy {
    pub fn all_met(&self) -> bool {
        self.min_length && self.has_letter && self.has_digit && self.has_symbol
    }
}

/// Evaluate all four predicates against a candidate password.
pub fn password_policy(password: &str) -> PasswordPolicy {
    PasswordPolicy {
        min_length: password.chars().count() >= 8,
        has_letter: password.chars().any(|c| c.is_alphabetic()),
        has_digit: password.chars().any(|c| c.is_ascii_digit()),
        has_symbol: password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace()),
    }
}

/// Derive the account username from the name and SAP id fields:
/// lowercased alphanumeric first-name token followed by the SAP id.
pub fn derive_username(name: &str, sap_id: &str) -> String {
    let first = name
        .split_whitespace()
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect::<String>();
    format!("{first}{}", sap_id.trim())
}

/// Current signup field values. The UI mirrors its input signals into this
/// struct and asks it whether submission is allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub sap_id: String,
    pub gender: String,
    pub password: String,
}

impl SignupForm {
    /// A very light email shape check; the backend stays authoritative.
    fn email_plausible(&self) -> bool {
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && domain.contains('.'),
            None => false,
        }
    }

    fn required_fields_present(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.sap_id.trim().is_empty()
            && !self.gender.trim().is_empty()
            && self.email_plausible()
    }

    /// Submit enablement: all required fields present and valid, and all
    /// four password predicates satisfied.
    pub fn submit_enabled(&self) -> bool {
        self.required_fields_present() && password_policy(&self.password).all_met()
    }

    pub fn derived_username(&self) -> String {
        derive_username(&self.name, &self.sap_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            name: "Asha Rao".into(),
            email: "asha@example.edu".into(),
            sap_id: "50012345".into(),
            gender: "female".into(),
            password: "tr4vel!pass".into(),
        }
    }

    #[test]
    fn policy_predicates_are_independent() {
        let p = password_policy("tr4vel!pass");
        assert!(p.all_met());

        assert!(!password_policy("tr4!pas").min_length); // 7 chars
        assert!(!password_policy("12345678!").has_letter);
        assert!(!password_policy("travelpass!").has_digit);
        assert!(!password_policy("tr4velpass").has_symbol);
    }

    #[test]
    fn enablement_is_pure_and_idempotent() {
        let form = valid_form();
        assert!(form.submit_enabled());
        // Re-evaluating with unchanged input yields the same answer.
        assert_eq!(form.submit_enabled(), form.submit_enabled());
    }

    #[test]
    fn breaking_any_single_predicate_disables_submit() {
        let mut form = valid_form();
        form.password = "trvel!pass".into(); // digit removed
        assert!(!form.submit_enabled());

        let mut form = valid_form();
        form.password = "tr4velpass".into(); // symbol removed
        assert!(!form.submit_enabled());

        let mut form = valid_form();
        form.password = "tr4!pas".into(); // too short
        assert!(!form.submit_enabled());
    }

    #[test]
    fn missing_required_field_disables_submit() {
        let mut form = valid_form();
        form.name = "   ".into();
        assert!(!form.submit_enabled());

        let mut form = valid_form();
        form.email = "not-an-email".into();
        assert!(!form.submit_enabled());

        let mut form = valid_form();
        form.email = "asha@host".into(); // domain without a dot
        assert!(!form.submit_enabled());
    }

    #[test]
    fn username_derivation() {
        assert_eq!(derive_username("Asha Rao", "50012345"), "asha50012345");
        assert_eq!(derive_username("  D'Angelo Smith ", "77"), "dangelo77");
        assert_eq!(derive_username("", "123"), "123");
    }
}
