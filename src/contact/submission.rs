use chrono::{DateTime, Local};

use crate::config;
use crate::contact::validation::{validate_all, Field, FieldError, FieldValue};

const NOT_FILLED: &str = "Tidak diisi";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Validating,
    Submitting,
    Succeeded,
}

/// Snapshot of the contact form at submit time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
    pub newsletter: bool,
    pub privacy: bool,
}

impl FormValues {
    pub fn value_of(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Name => FieldValue::Text(&self.name),
            Field::Email => FieldValue::Text(&self.email),
            Field::Subject => FieldValue::Text(&self.subject),
            Field::Message => FieldValue::Text(&self.message),
            Field::Privacy => FieldValue::Checked(self.privacy),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

fn or_not_filled(value: &str) -> &str {
    if value.is_empty() {
        NOT_FILLED
    } else {
        value
    }
}

/// Matches the `id-ID` locale rendering, e.g. `5/3/2026, 14.07.09`.
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format("%-d/%-m/%Y, %H.%M.%S").to_string()
}

impl MailDraft {
    pub fn compose(values: &FormValues, to: &str, at: &DateTime<Local>) -> Self {
        let body = format!(
            "Nama: {name}\n\
             Email: {email}\n\
             Telepon: {phone}\n\
             Perusahaan: {company}\n\
             Subjek: {subject}\n\
             \n\
             Pesan:\n\
             {message}\n\
             \n\
             Newsletter: {newsletter}\n\
             Waktu: {time}",
            name = values.name,
            email = values.email,
            phone = or_not_filled(&values.phone),
            company = or_not_filled(&values.company),
            subject = values.subject,
            message = values.message,
            newsletter = if values.newsletter { "Ya" } else { "Tidak" },
            time = format_timestamp(at),
        );

        MailDraft {
            to: to.to_string(),
            subject: format!("{} - {}", values.subject, values.name),
            body: body.trim().to_string(),
        }
    }

    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

/// What happens after a successful validation, in order, each after its own delay.
#[derive(Clone, Debug, PartialEq)]
pub enum HandoffStep {
    RevealSuccess,
    OpenMailClient(String),
}

pub fn handoff_plan(draft: &MailDraft) -> Vec<(u32, HandoffStep)> {
    vec![
        (config::SUBMIT_DELAY_MS, HandoffStep::RevealSuccess),
        (
            config::MAIL_HANDOFF_DELAY_MS,
            HandoffStep::OpenMailClient(draft.mailto_uri()),
        ),
    ]
}

/// Submission lifecycle of one form instance.
#[derive(Debug)]
pub struct Submission {
    phase: SubmissionPhase,
}

impl Default for Submission {
    fn default() -> Self {
        Self {
            phase: SubmissionPhase::Idle,
        }
    }
}

impl Submission {
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Validates all fields. On success moves to `Submitting` and returns the
    /// outcome of every field plus the draft; on failure returns to `Idle`.
    pub fn begin(
        &mut self,
        values: &FormValues,
        at: &DateTime<Local>,
    ) -> (Vec<(Field, Result<(), FieldError>)>, Option<MailDraft>) {
        if self.phase != SubmissionPhase::Idle {
            return (Vec::new(), None);
        }

        self.phase = SubmissionPhase::Validating;
        let outcomes = validate_all(|field| values.value_of(field));
        let is_form_valid = outcomes.iter().all(|(_, outcome)| outcome.is_ok());

        if !is_form_valid {
            self.phase = SubmissionPhase::Idle;
            return (outcomes, None);
        }

        self.phase = SubmissionPhase::Submitting;
        let draft = MailDraft::compose(values, config::get_contact_recipient(), at);
        (outcomes, Some(draft))
    }

    pub fn finish(&mut self) {
        if self.phase == SubmissionPhase::Submitting {
            self.phase = SubmissionPhase::Succeeded;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_values() -> FormValues {
        FormValues {
            name: "Siti Aminah".to_string(),
            email: "siti@example.co.id".to_string(),
            subject: "Konsultasi".to_string(),
            message: "Saya ingin membuat kebun hidroponik di rumah.".to_string(),
            privacy: true,
            ..FormValues::default()
        }
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 5, 14, 7, 9).unwrap()
    }

    #[test]
    fn valid_form_moves_to_submitting_then_succeeded() {
        let mut submission = Submission::default();
        let (outcomes, draft) = submission.begin(&valid_values(), &fixed_time());

        assert!(outcomes.iter().all(|(_, outcome)| outcome.is_ok()));
        assert!(draft.is_some());
        assert_eq!(submission.phase(), SubmissionPhase::Submitting);

        submission.finish();
        assert_eq!(submission.phase(), SubmissionPhase::Succeeded);
    }

    #[test]
    fn missing_field_keeps_form_idle() {
        let mut submission = Submission::default();
        let values = FormValues {
            subject: String::new(),
            ..valid_values()
        };
        let (outcomes, draft) = submission.begin(&values, &fixed_time());

        assert!(draft.is_none());
        assert_eq!(submission.phase(), SubmissionPhase::Idle);
        let errors: Vec<&FieldError> = outcomes
            .iter()
            .filter_map(|(_, outcome)| outcome.as_ref().err())
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Silakan pilih subjek");
    }

    #[test]
    fn finish_without_submitting_is_ignored() {
        let mut submission = Submission::default();
        submission.finish();
        assert_eq!(submission.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn second_submit_while_busy_is_ignored() {
        let mut submission = Submission::default();
        submission.begin(&valid_values(), &fixed_time());
        let (outcomes, draft) = submission.begin(&valid_values(), &fixed_time());
        assert!(outcomes.is_empty());
        assert!(draft.is_none());
        assert_eq!(submission.phase(), SubmissionPhase::Submitting);
    }

    #[test]
    fn success_is_revealed_after_submit_delay() {
        let draft = MailDraft::compose(&valid_values(), "farm@example.com", &fixed_time());
        let plan = handoff_plan(&draft);
        assert_eq!(plan[0], (2_000, HandoffStep::RevealSuccess));
        assert_eq!(plan[1].0, 1_000);
        assert!(matches!(&plan[1].1, HandoffStep::OpenMailClient(uri) if uri.starts_with("mailto:farm@example.com?subject=")));
    }

    #[test]
    fn draft_body_fills_defaults() {
        let draft = MailDraft::compose(&valid_values(), "farm@example.com", &fixed_time());
        assert_eq!(draft.subject, "Konsultasi - Siti Aminah");
        assert_eq!(
            draft.body,
            "Nama: Siti Aminah\n\
             Email: siti@example.co.id\n\
             Telepon: Tidak diisi\n\
             Perusahaan: Tidak diisi\n\
             Subjek: Konsultasi\n\
             \n\
             Pesan:\n\
             Saya ingin membuat kebun hidroponik di rumah.\n\
             \n\
             Newsletter: Tidak\n\
             Waktu: 5/3/2026, 14.07.09"
        );
    }

    #[test]
    fn mailto_is_escaped() {
        let values = FormValues {
            phone: "0812".to_string(),
            newsletter: true,
            ..valid_values()
        };
        let uri = MailDraft::compose(&values, "farm@example.com", &fixed_time()).mailto_uri();
        assert!(uri.starts_with("mailto:farm@example.com?subject=Konsultasi%20-%20Siti%20Aminah&body="));
        assert!(uri.contains("Telepon%3A%200812%0A"));
        assert!(uri.contains("Newsletter%3A%20Ya"));
        assert!(!uri.contains('\n'));
        assert!(!uri.contains(' '));
    }
}
