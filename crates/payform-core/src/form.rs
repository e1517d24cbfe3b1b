//! Payment form state controller.
//!
//! [`PaymentForm`] owns the displayed field values and the error set produced
//! by the last submit attempt.
//!
//! ## Invariants
//!
//! - Stored values are always the output of the field's formatter
//! - An error exists only for fields that failed the most recent submit
//! - Changing a field clears its error immediately

use serde::Serialize;

use crate::calendar::YearMonth;
use crate::error::{FieldError, PayformResult};
use crate::field::Field;
use crate::format::{digits, format_field};
use crate::validate::validate_field;

/// Displayed values of the three inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub card_number: String,
    pub expiration: String,
    pub cvv: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::CardNumber => &self.card_number,
            Field::Expiration => &self.expiration,
            Field::Cvv => &self.cvv,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::CardNumber => &mut self.card_number,
            Field::Expiration => &mut self.expiration,
            Field::Cvv => &mut self.cvv,
        }
    }
}

/// Per-field validation failures from the last submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub card_number: Option<FieldError>,
    pub expiration: Option<FieldError>,
    pub cvv: Option<FieldError>,
}

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        *self.slot(field)
    }

    pub fn set(&mut self, field: Field, error: FieldError) {
        *self.slot_mut(field) = Some(error);
    }

    /// Remove the error for `field`, returning whether one was present.
    pub fn clear(&mut self, field: Field) -> bool {
        self.slot_mut(field).take().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Present errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|err| (field, err)))
    }

    fn slot(&self, field: Field) -> &Option<FieldError> {
        match field {
            Field::CardNumber => &self.card_number,
            Field::Expiration => &self.expiration,
            Field::Cvv => &self.cvv,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<FieldError> {
        match field {
            Field::CardNumber => &mut self.card_number,
            Field::Expiration => &mut self.expiration,
            Field::Cvv => &mut self.cvv,
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field validated; carries the submitted values
    Submitted(FormData),
    /// At least one field failed; the same errors are now stored on the form
    Rejected(FormErrors),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

/// Log payload for an accepted submit. The card number is masked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub card_number: String,
    pub expiration: String,
    pub cvv_digits: usize,
}

impl Submission {
    pub fn from_data(data: &FormData) -> Self {
        let card_digits = digits(&data.card_number);
        let last_four = &card_digits[card_digits.len().saturating_sub(4)..];
        Self {
            card_number: format!("**** **** **** {last_four}"),
            expiration: data.expiration.clone(),
            cvv_digits: digits(&data.cvv).len(),
        }
    }

    pub fn to_json(&self) -> PayformResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Form state: current values plus the errors of the last submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentForm {
    data: FormData,
    errors: FormErrors,
}

impl PaymentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn value(&self, field: Field) -> &str {
        self.data.get(field)
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    /// Handle a keystroke: format, store, and drop the field's error.
    ///
    /// Returns the stored display value.
    pub fn input(&mut self, field: Field, raw: &str) -> &str {
        let formatted = format_field(field, raw);
        if self.errors.clear(field) {
            tracing::trace!(field = %field, "cleared field error on input");
        }
        let slot = self.data.slot_mut(field);
        *slot = formatted;
        slot
    }

    /// Validate every field and replace the error set with the result.
    ///
    /// On success the payload is logged and returned; nothing is sent anywhere.
    pub fn submit(&mut self, today: YearMonth) -> SubmitOutcome {
        let errors = self.collect_errors(today);
        self.errors = errors;

        if !errors.is_empty() {
            let failed: Vec<&str> = errors.iter().map(|(field, _)| field.id()).collect();
            tracing::debug!(?failed, "payment form rejected");
            return SubmitOutcome::Rejected(errors);
        }

        match Submission::from_data(&self.data).to_json() {
            Ok(payload) => tracing::info!(%payload, "payment form submitted"),
            Err(e) => tracing::warn!("Failed to encode submission payload: {}", e),
        }
        SubmitOutcome::Submitted(self.data.clone())
    }

    /// Whether the submit button should be enabled.
    ///
    /// Requires every field non-empty and valid under the submit validators.
    /// Does not touch the stored errors.
    pub fn can_submit(&self, today: YearMonth) -> bool {
        Field::ALL.into_iter().all(|field| {
            let value = self.value(field);
            !value.trim().is_empty() && validate_field(field, value, today).is_ok()
        })
    }

    /// Clear every value and error.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn collect_errors(&self, today: YearMonth) -> FormErrors {
        let mut errors = FormErrors::default();
        for field in Field::ALL {
            if let Err(err) = validate_field(field, self.value(field), today) {
                errors.set(field, err);
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_subscriber::layer::{Context, Layer};
    use tracing_subscriber::prelude::*;

    /// Counts every event that reaches the subscriber.
    struct EventCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for EventCounter {
        fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn today() -> YearMonth {
        YearMonth::new(2026, 10).unwrap()
    }

    fn filled() -> PaymentForm {
        let mut form = PaymentForm::new();
        form.input(Field::CardNumber, "4111111111111111");
        form.input(Field::Expiration, "122030");
        form.input(Field::Cvv, "123");
        form
    }

    #[test]
    fn input_stores_formatted_value() {
        let mut form = PaymentForm::new();
        assert_eq!(form.input(Field::CardNumber, "41111111"), "4111 1111");
        assert_eq!(form.value(Field::CardNumber), "4111 1111");
        assert_eq!(form.input(Field::Expiration, "0631"), "06/31");
        assert_eq!(form.data().expiration, "06/31");
    }

    #[test]
    fn submit_empty_form_rejects_all_fields() {
        let mut form = PaymentForm::new();
        let outcome = form.submit(today());

        let SubmitOutcome::Rejected(errors) = outcome else {
            panic!("empty form must not submit");
        };
        assert_eq!(errors.len(), 3);
        assert_eq!(form.errors(), &errors);
        assert_eq!(
            form.error(Field::Expiration),
            Some(FieldError::ExpirationFormat)
        );
    }

    #[test]
    fn input_clears_only_that_fields_error() {
        let mut form = PaymentForm::new();
        form.submit(today());

        form.input(Field::Cvv, "1");
        assert!(form.error(Field::Cvv).is_none());
        assert!(form.error(Field::CardNumber).is_some());
        assert!(form.error(Field::Expiration).is_some());
    }

    #[test]
    fn submit_replaces_previous_errors() {
        let mut form = PaymentForm::new();
        form.submit(today());
        form.input(Field::CardNumber, "4111111111111111");
        form.input(Field::Cvv, "123");
        form.input(Field::Expiration, "01/2020");

        let outcome = form.submit(today());
        assert!(!outcome.is_submitted());
        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.error(Field::Expiration), Some(FieldError::Expired));
    }

    #[test]
    fn valid_submit_returns_data_and_clears_errors() {
        let mut form = filled();
        let outcome = form.submit(today());

        assert_eq!(outcome, SubmitOutcome::Submitted(form.data().clone()));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn can_submit_tracks_validity() {
        let mut form = filled();
        assert!(form.can_submit(today()));

        form.input(Field::Cvv, "12");
        assert!(!form.can_submit(today()));

        form.input(Field::Cvv, "1234");
        assert!(form.can_submit(today()));

        form.input(Field::Expiration, "092026");
        assert!(!form.can_submit(today()));
    }

    #[test]
    fn can_submit_does_not_record_errors() {
        let form = PaymentForm::new();
        assert!(!form.can_submit(today()));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn submission_masks_card_number() {
        let form = filled();
        let submission = Submission::from_data(form.data());
        assert_eq!(submission.card_number, "**** **** **** 1111");
        assert_eq!(submission.cvv_digits, 3);

        let json = submission.to_json().unwrap();
        assert!(json.contains("\"cardNumber\":\"**** **** **** 1111\""));
        assert!(json.contains("\"expiration\":\"12/2030\""));
        assert!(!json.contains("4111"));
    }

    #[test]
    fn form_data_serializes_camel_case() {
        let json = serde_json::to_string(filled().data()).unwrap();
        assert_eq!(
            json,
            r#"{"cardNumber":"4111 1111 1111 1111","expiration":"12/2030","cvv":"123"}"#
        );
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = filled();
        form.input(Field::Cvv, "");
        form.submit(today());
        form.reset();
        assert_eq!(form, PaymentForm::new());
    }

    #[test]
    fn each_submit_attempt_logs_one_event() {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(EventCounter(count.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let mut form = filled();
            assert!(form.submit(today()).is_submitted());
            assert_eq!(count.load(Ordering::SeqCst), 1);

            form.input(Field::Cvv, "");
            assert!(!form.submit(today()).is_submitted());
        });

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
