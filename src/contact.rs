use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ECMAScript's `\s` set, which differs from the Unicode `White_Space` set the `regex`
/// crate uses for `\s` (it has U+FEFF, lacks U+0085).
const JS_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// One or more non-space non-`@` characters, `@`, the same again, `.`, the same again.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{JS_WHITESPACE}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern should compile")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Name used for the `id` and `name` attributes of the matching input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The text currently held by the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Replaces the value of one field. Never validates.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Completeness first, then the email format. Fields are not trimmed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if Field::ALL.iter().any(|f| self.get(*f).is_empty()) {
            return Err(ValidationError::MissingRequiredField);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::MalformedEmail);
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field")]
    MissingRequiredField,
    #[error("malformed email")]
    MalformedEmail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: Variant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }

    pub fn sent() -> Self {
        Self::new(
            "Message Sent!",
            "Thank you for reaching out. I'll get back to you soon.",
        )
    }
}

impl From<ValidationError> for Notification {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingRequiredField => Notification::destructive(
                "Validation Error",
                "Please fill in all required fields.",
            ),
            ValidationError::MalformedEmail => Notification::destructive(
                "Invalid Email",
                "Please enter a valid email address.",
            ),
        }
    }
}

/// Anything that can show a [`Notification`] to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub state: ContactSubmission,
    pub result: Result<(), ValidationError>,
}

impl SubmitOutcome {
    pub fn notification(&self) -> Notification {
        match self.result {
            Ok(()) => Notification::sent(),
            Err(e) => e.into(),
        }
    }
}

/// Validates the whole submission at once.
///
/// A rejected submission is handed back untouched so the user can correct it; an
/// accepted one comes back cleared, ready for the next message. Nothing leaves the
/// client either way.
pub fn submit(state: ContactSubmission) -> SubmitOutcome {
    match state.validate() {
        Ok(()) => SubmitOutcome {
            state: ContactSubmission::default(),
            result: Ok(()),
        },
        Err(e) => SubmitOutcome {
            state,
            result: Err(e),
        },
    }
}

/// Runs [`submit`] against `state` in place and reports the outcome through `notifier`
/// exactly once.
pub fn submit_with<N>(state: &mut ContactSubmission, notifier: &N) -> Result<(), ValidationError>
where
    N: Notifier + ?Sized,
{
    let outcome = submit(std::mem::take(state));
    notifier.notify(outcome.notification());
    if outcome.result.is_ok() {
        log::info!("contact form submission acknowledged");
    }
    *state = outcome.state;
    outcome.result
}

/// Contact form handler owning its state and the notifier it reports to.
pub struct ContactForm<N> {
    state: ContactSubmission,
    notifier: N,
}

impl<N: Notifier> ContactForm<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            state: ContactSubmission::default(),
            notifier,
        }
    }

    pub fn state(&self) -> &ContactSubmission {
        &self.state
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.state.update_field(field, value);
    }

    pub fn submit(&mut self) -> Result<(), ValidationError> {
        submit_with(&mut self.state, &self.notifier)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use mockall::predicate::eq;
    use proptest::prelude::*;

    use super::*;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Notification>>>);

    impl Notifier for Recorder {
        fn notify(&self, notification: Notification) {
            self.0.borrow_mut().push(notification);
        }
    }

    #[test]
    fn test_scenario_missing_name() {
        let outcome = submit(ContactSubmission::new("", "a@b.com", "hi"));
        assert_eq!(outcome.result, Err(ValidationError::MissingRequiredField));
        assert_eq!(outcome.state, ContactSubmission::new("", "a@b.com", "hi"));
    }

    #[test]
    fn test_scenario_not_an_email() {
        let outcome = submit(ContactSubmission::new("Jo", "not-an-email", "hi"));
        assert_eq!(outcome.result, Err(ValidationError::MalformedEmail));
        assert_eq!(outcome.state.email, "not-an-email");
    }

    #[test]
    fn test_scenario_success_resets() {
        let outcome = submit(ContactSubmission::new("Jo", "jo@x.io", "hello"));
        assert_eq!(outcome.result, Ok(()));
        assert_eq!(outcome.state, ContactSubmission::new("", "", ""));
        assert!(outcome.state.is_empty());
    }

    #[test]
    fn test_scenario_double_at() {
        let outcome = submit(ContactSubmission::new("Jo", "jo@@x.io", "hi"));
        assert_eq!(outcome.result, Err(ValidationError::MalformedEmail));
    }

    #[test]
    fn test_completeness_checked_before_format() {
        let outcome = submit(ContactSubmission::new("Jo", "not-an-email", ""));
        assert_eq!(outcome.result, Err(ValidationError::MissingRequiredField));
    }

    #[test]
    fn test_whitespace_only_fields_are_not_missing() {
        let outcome = submit(ContactSubmission::new("  ", "jo@x.io", " "));
        assert_eq!(outcome.result, Ok(()));
    }

    #[test]
    fn test_email_pattern() {
        for ok in [
            "a@b.co",
            "first.last@sub.example.org",
            "x+y@z.io",
            "ü@ö.de",
            "jo\u{85}x@y.io",
        ] {
            assert!(is_valid_email(ok), "{ok} should be accepted");
        }
        for bad in [
            "",
            "plain",
            "@x.io",
            "jo@",
            "jo@x",
            "jo@x.",
            "jo@.io",
            "jo x@y.io",
            "jo@y.io ",
            "jo@@x.io",
            "jo@x@y.io",
            "jo\u{FEFF}x@y.io",
            "jo@y\u{A0}z.io",
            "jo@y.i\u{3000}o",
            "jo\tx@y.io",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_update_field_touches_one_field() {
        let mut state = ContactSubmission::new("Jo", "jo@x.io", "hello");
        state.update_field(Field::Email, "new@x.io");
        assert_eq!(state, ContactSubmission::new("Jo", "new@x.io", "hello"));
        state.update_field(Field::Message, "");
        assert_eq!(state.get(Field::Message), "");
        assert_eq!(state.get(Field::Name), "Jo");
    }

    #[test]
    fn test_field_names() {
        let names = Field::ALL.map(|f| f.to_string());
        assert_eq!(names, ["name", "email", "message"]);
    }

    #[test]
    fn test_email_round_trip_table() {
        let cases = [
            ("jo@x.io", true),
            ("a.b@c.d.e", true),
            ("jo\u{85}x@y.io", true),
            ("", false),
            ("jo@x", false),
            ("jo@@x.io", false),
            ("jo @x.io", false),
            ("jo\u{FEFF}x@y.io", false),
        ];
        for (email, accepted) in cases {
            let mut form = ContactForm::new(Recorder::default());
            form.update_field(Field::Name, "Jo");
            form.update_field(Field::Message, "hello");
            form.update_field(Field::Email, email);
            assert_eq!(form.submit().is_ok(), accepted, "{email:?}");
        }
    }

    #[test]
    fn test_notifications() {
        let n = Notification::from(ValidationError::MissingRequiredField);
        assert_eq!(n.title, "Validation Error");
        assert_eq!(n.description, "Please fill in all required fields.");
        assert!(n.is_destructive());

        let n = Notification::from(ValidationError::MalformedEmail);
        assert_eq!(n.title, "Invalid Email");
        assert_eq!(n.description, "Please enter a valid email address.");
        assert!(n.is_destructive());

        let n = Notification::sent();
        assert_eq!(n.title, "Message Sent!");
        assert_eq!(n.variant, Variant::Default);
    }

    #[test]
    fn test_submit_with_notifies_exactly_once() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(eq(Notification::from(ValidationError::MalformedEmail)))
            .times(1)
            .return_const(());

        let mut state = ContactSubmission::new("Jo", "jo.x.io", "hi");
        let res = submit_with(&mut state, &notifier);
        assert_eq!(res, Err(ValidationError::MalformedEmail));
        assert_eq!(state, ContactSubmission::new("Jo", "jo.x.io", "hi"));
    }

    #[test]
    fn test_submit_with_success_notifies_and_clears() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(eq(Notification::sent()))
            .times(1)
            .return_const(());

        let mut state = ContactSubmission::new("Jo", "jo@x.io", "hello");
        assert_eq!(submit_with(&mut state, &notifier), Ok(()));
        assert!(state.is_empty());
    }

    #[test]
    fn test_contact_form_lifecycle() {
        let recorder = Recorder::default();
        let mut form = ContactForm::new(recorder.clone());

        assert_eq!(form.submit(), Err(ValidationError::MissingRequiredField));

        form.update_field(Field::Name, "Jo");
        form.update_field(Field::Email, "jo");
        form.update_field(Field::Message, "hello");
        assert_eq!(form.submit(), Err(ValidationError::MalformedEmail));
        assert_eq!(form.state().email, "jo");

        form.update_field(Field::Email, "jo@x.io");
        assert_eq!(form.submit(), Ok(()));
        assert!(form.state().is_empty());

        let titles = recorder
            .0
            .borrow()
            .iter()
            .map(|n| n.title.clone())
            .collect::<Vec<_>>();
        assert_eq!(titles, ["Validation Error", "Invalid Email", "Message Sent!"]);
    }

    fn arb_valid_email() -> impl Strategy<Value = String> {
        "[a-z0-9._%+-]{1,12}@[a-z0-9-]{1,12}\\.[a-z]{2,6}"
    }

    fn arb_text() -> impl Strategy<Value = String> {
        ".{1,40}"
    }

    proptest! {
        #[test]
        fn prop_any_empty_field_is_missing(
            name in arb_text(),
            email in arb_valid_email(),
            message in arb_text(),
            blank in 0usize..3,
        ) {
            let mut state = ContactSubmission::new(name, email, message);
            state.update_field(Field::ALL[blank], "");
            let outcome = submit(state.clone());
            prop_assert_eq!(outcome.result, Err(ValidationError::MissingRequiredField));
            prop_assert_eq!(outcome.state, state);
        }

        #[test]
        fn prop_email_without_at_is_malformed(
            name in arb_text(),
            email in "[a-z0-9. ]{1,30}",
            message in arb_text(),
        ) {
            let state = ContactSubmission::new(name, email, message);
            let first = submit(state.clone());
            prop_assert_eq!(first.result, Err(ValidationError::MalformedEmail));
            prop_assert_eq!(&first.state, &state);

            let second = submit(first.state);
            prop_assert_eq!(second.result, Err(ValidationError::MalformedEmail));
            prop_assert_eq!(second.state, state);
        }

        #[test]
        fn prop_valid_submission_resets(
            name in arb_text(),
            email in arb_valid_email(),
            message in arb_text(),
        ) {
            let outcome = submit(ContactSubmission::new(name, email, message));
            prop_assert_eq!(outcome.result, Ok(()));
            prop_assert!(outcome.state.is_empty());
        }

        #[test]
        fn prop_email_round_trip(
            (email, expected) in prop_oneof![
                arb_valid_email().prop_map(|e| (e, true)),
                "[a-z0-9.]{0,20}".prop_map(|e| (e, false)),
                "[a-z]{1,8}@@[a-z]{1,8}\\.[a-z]{2,4}".prop_map(|e| (e, false)),
                "[a-z]{1,8}@[a-z]{1,8}".prop_map(|e| (e, false)),
                "[a-z]{1,8} [a-z]{0,4}@[a-z]{1,8}\\.[a-z]{2,4}".prop_map(|e| (e, false)),
            ],
        ) {
            let mut state = ContactSubmission::new("Jo", "", "hello");
            state.update_field(Field::Email, email.clone());
            let expected = match (expected, email.is_empty()) {
                (true, _) => Ok(()),
                (false, true) => Err(ValidationError::MissingRequiredField),
                (false, false) => Err(ValidationError::MalformedEmail),
            };
            prop_assert_eq!(submit(state).result, expected);
        }
    }
}
