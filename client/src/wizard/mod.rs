//! Multi-step form wizard controller
//!
//! One generic controller drives all of the stepped forms (inward,
//! programmer, QA). A form describes its steps and their validation rules;
//! the controller owns the step index, the field error map and the
//! submitting guard, and enforces the gate semantics:
//!
//! - "Next" advances only when the active step validates; otherwise the
//!   step stays put and the error map is replaced.
//! - "Back" below step 1 means "leave the wizard", which is the parent
//!   view's decision, so it is reported rather than acted on.
//! - Submission re-validates every step, then issues the assembled payload
//!   at most once until the in-flight call completes.

mod inward;
mod program;
mod qa;

pub use inward::InwardForm;
pub use program::ProgramForm;
pub use qa::QaForm;

use std::collections::BTreeMap;
use std::future::Future;

use crate::error::{AppError, AppResult};

/// Ordered field -> message map for one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// Record a failed field check; `Ok` leaves the map untouched
    pub fn check(&mut self, field: &str, result: Result<(), &'static str>) {
        if let Err(message) = result {
            self.push(field, message);
        }
    }

    pub fn extend(&mut self, other: FieldErrors) {
        self.errors.extend(other.errors);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// One aggregate line for the notification area
    ///
    /// The UI shows a single toast per validation pass, not one per field.
    pub fn summary(&self) -> Option<String> {
        let mut fields = self.errors.iter();
        let (field, message) = fields.next()?;
        if self.errors.len() == 1 {
            Some(format!("{field}: {message}"))
        } else {
            Some(format!("{} fields need attention", self.errors.len()))
        }
    }
}

/// A form driven by the wizard controller
pub trait SteppedForm {
    /// Typed payload produced at submission
    type Payload;

    /// Total number of steps (1-based indexing)
    fn step_count(&self) -> u8;

    /// Validate the fields registered for one step
    fn validate_step(&self, step: u8) -> FieldErrors;

    /// Validate every step, front to back
    fn validate_all(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for step in 1..=self.step_count() {
            errors.extend(self.validate_step(step));
        }
        errors
    }

    /// Build the typed request payload from the accumulated state
    ///
    /// Only called after `validate_all` passes; any remaining conversion
    /// failure is reported through the same error map.
    fn assemble(&self) -> Result<Self::Payload, FieldErrors>;
}

/// Result of a "Next" action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Now on this step
    Advanced(u8),
    /// Stayed put; the wizard's error map holds the reasons
    Rejected,
}

/// Result of a "Back" action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// Now on this step
    MovedTo(u8),
    /// Back from step 1 leaves the wizard; the parent view takes over
    Exited,
}

/// Why a submission could not start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    NotOnFinalStep,
    Invalid,
    InFlight,
}

impl From<SubmitBlocked> for AppError {
    fn from(blocked: SubmitBlocked) -> Self {
        match blocked {
            SubmitBlocked::InFlight => AppError::SubmissionInFlight,
            SubmitBlocked::NotOnFinalStep => AppError::Validation {
                field: "form".to_string(),
                message: "Submission is only available from the final step".to_string(),
            },
            SubmitBlocked::Invalid => AppError::Validation {
                field: "form".to_string(),
                message: "The form has validation errors".to_string(),
            },
        }
    }
}

/// Wizard controller over a stepped form
#[derive(Debug)]
pub struct Wizard<F: SteppedForm> {
    form: F,
    step: u8,
    errors: FieldErrors,
    submitting: bool,
}

impl<F: SteppedForm + Default> Wizard<F> {
    /// Start at step 1 with an empty form
    pub fn new() -> Self {
        Self::with_form(F::default())
    }
}

impl<F: SteppedForm + Default> Default for Wizard<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: SteppedForm> Wizard<F> {
    /// Start at step 1 with an externally-seeded form
    pub fn with_form(form: F) -> Self {
        Self {
            form,
            step: 1,
            errors: FieldErrors::new(),
            submitting: false,
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Try to advance to the next step
    ///
    /// Repeated calls on an invalid step are idempotent: the step index
    /// stays put and the error map is replaced with the same failures.
    pub fn next(&mut self) -> StepOutcome {
        let errors = self.form.validate_step(self.step);
        if !errors.is_empty() {
            tracing::debug!(step = self.step, fields = errors.len(), "step gate rejected");
            self.errors = errors;
            return StepOutcome::Rejected;
        }
        self.errors.clear();
        if self.step < self.form.step_count() {
            self.step += 1;
            tracing::debug!(step = self.step, "advanced");
        }
        StepOutcome::Advanced(self.step)
    }

    /// Move one step back, or report that the wizard was left
    pub fn back(&mut self) -> BackOutcome {
        if self.step > 1 {
            self.step -= 1;
            BackOutcome::MovedTo(self.step)
        } else {
            BackOutcome::Exited
        }
    }

    /// Gate for opening the confirmation dialog
    ///
    /// Re-validates every step as a defense against stale or bypassed
    /// per-step checks.
    pub fn request_confirmation(&mut self) -> Result<(), SubmitBlocked> {
        if self.step != self.form.step_count() {
            return Err(SubmitBlocked::NotOnFinalStep);
        }
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        let errors = self.form.validate_all();
        if !errors.is_empty() {
            self.errors = errors;
            return Err(SubmitBlocked::Invalid);
        }
        Ok(())
    }

    /// Arm the submitting guard and hand back the payload to send
    ///
    /// At most one payload is issued per confirmation: while a submission
    /// is in flight every further call is rejected with `InFlight`.
    pub fn begin_submit(&mut self) -> Result<F::Payload, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        if self.step != self.form.step_count() {
            return Err(SubmitBlocked::NotOnFinalStep);
        }
        let errors = self.form.validate_all();
        if !errors.is_empty() {
            self.errors = errors;
            return Err(SubmitBlocked::Invalid);
        }
        match self.form.assemble() {
            Ok(payload) => {
                self.submitting = true;
                tracing::debug!("submission armed");
                Ok(payload)
            }
            Err(errors) => {
                self.errors = errors;
                Err(SubmitBlocked::Invalid)
            }
        }
    }

    /// Record a failed submission: clear the guard, keep the payload so the
    /// user does not re-enter anything, stay on the terminal step
    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }
}

impl<F: SteppedForm + Default> Wizard<F> {
    /// Record a successful submission: back to step 1 with an empty form
    pub fn submit_succeeded(&mut self) {
        self.form = F::default();
        self.step = 1;
        self.errors.clear();
        self.submitting = false;
    }

    /// Abandon the wizard; accumulated state is discarded
    pub fn cancel(&mut self) {
        self.submit_succeeded();
    }

    /// Drive a full confirmed submission through `send`
    ///
    /// Convenience over `begin_submit`/`submit_failed`/`submit_succeeded`
    /// for callers that hold the wizard across the await point.
    pub async fn submit_with<Fut, T>(
        &mut self,
        send: impl FnOnce(F::Payload) -> Fut,
    ) -> AppResult<T>
    where
        Fut: Future<Output = AppResult<T>>,
    {
        let payload = self.begin_submit().map_err(AppError::from)?;
        match send(payload).await {
            Ok(value) => {
                self.submit_succeeded();
                Ok(value)
            }
            Err(err) => {
                self.submit_failed();
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two-step form: step 1 needs a name, step 2 needs a positive amount
    #[derive(Debug, Default)]
    struct TestForm {
        name: String,
        amount: String,
    }

    impl SteppedForm for TestForm {
        type Payload = (String, u32);

        fn step_count(&self) -> u8 {
            2
        }

        fn validate_step(&self, step: u8) -> FieldErrors {
            let mut errors = FieldErrors::new();
            match step {
                1 => errors.check("name", shared::validate_required(&self.name)),
                2 => errors.check("amount", shared::validate_quantity(&self.amount)),
                _ => {}
            }
            errors
        }

        fn assemble(&self) -> Result<Self::Payload, FieldErrors> {
            match self.amount.parse() {
                Ok(amount) => Ok((self.name.clone(), amount)),
                Err(_) => {
                    let mut errors = FieldErrors::new();
                    errors.push("amount", "Must be a whole number");
                    Err(errors)
                }
            }
        }
    }

    fn valid_wizard() -> Wizard<TestForm> {
        let mut wizard = Wizard::<TestForm>::new();
        wizard.form_mut().name = "deburr".to_string();
        wizard.form_mut().amount = "3".to_string();
        wizard
    }

    #[test]
    fn test_next_blocked_until_step_is_valid() {
        let mut wizard = Wizard::<TestForm>::new();
        assert_eq!(wizard.next(), StepOutcome::Rejected);
        assert_eq!(wizard.step(), 1);
        assert_eq!(wizard.errors().get("name"), Some("Required"));

        wizard.form_mut().name = "deburr".to_string();
        assert_eq!(wizard.next(), StepOutcome::Advanced(2));
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_repeated_next_is_idempotent() {
        let mut wizard = Wizard::<TestForm>::new();
        for _ in 0..5 {
            assert_eq!(wizard.next(), StepOutcome::Rejected);
            assert_eq!(wizard.step(), 1);
            assert_eq!(wizard.errors().len(), 1);
        }
    }

    #[test]
    fn test_back_from_first_step_exits() {
        let mut wizard = valid_wizard();
        assert_eq!(wizard.back(), BackOutcome::Exited);
        wizard.next();
        assert_eq!(wizard.back(), BackOutcome::MovedTo(1));
    }

    #[test]
    fn test_submit_only_from_final_step() {
        let mut wizard = valid_wizard();
        assert_eq!(wizard.begin_submit(), Err(SubmitBlocked::NotOnFinalStep));
    }

    #[test]
    fn test_submit_revalidates_all_steps() {
        let mut wizard = valid_wizard();
        wizard.next();
        // Invalidate a step-1 field after passing its gate
        wizard.form_mut().name = String::new();
        assert_eq!(wizard.request_confirmation(), Err(SubmitBlocked::Invalid));
        assert_eq!(wizard.errors().get("name"), Some("Required"));
    }

    #[test]
    fn test_double_submit_issues_one_payload() {
        let mut wizard = valid_wizard();
        wizard.next();
        assert!(wizard.request_confirmation().is_ok());
        assert!(wizard.begin_submit().is_ok());
        // Second trigger while in flight is a no-op
        assert_eq!(wizard.begin_submit(), Err(SubmitBlocked::InFlight));
        assert!(wizard.is_submitting());
    }

    #[test]
    fn test_failed_submit_keeps_payload() {
        let mut wizard = valid_wizard();
        wizard.next();
        let payload = wizard.begin_submit().unwrap();
        assert_eq!(payload, ("deburr".to_string(), 3));
        wizard.submit_failed();
        assert!(!wizard.is_submitting());
        assert_eq!(wizard.form().name, "deburr");
        // Manual retry is allowed once the flag clears
        assert!(wizard.begin_submit().is_ok());
    }

    #[test]
    fn test_successful_submit_resets() {
        let mut wizard = valid_wizard();
        wizard.next();
        wizard.begin_submit().unwrap();
        wizard.submit_succeeded();
        assert_eq!(wizard.step(), 1);
        assert!(wizard.form().name.is_empty());
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn test_submit_with_drives_the_guard() {
        let mut wizard = valid_wizard();
        wizard.next();
        let sent = tokio_test::block_on(
            wizard.submit_with(|payload| async move { Ok(payload.1) }),
        )
        .unwrap();
        assert_eq!(sent, 3);
        assert_eq!(wizard.step(), 1);
    }

    #[test]
    fn test_submit_with_clears_guard_on_failure() {
        let mut wizard = valid_wizard();
        wizard.next();
        let result: AppResult<u32> = tokio_test::block_on(
            wizard.submit_with(|_| async move { Err(AppError::NotFound("Intake".to_string())) }),
        );
        assert!(result.is_err());
        assert!(!wizard.is_submitting());
        assert_eq!(wizard.form().name, "deburr");
    }

    #[test]
    fn test_error_summary_is_a_single_aggregate_line() {
        let mut errors = FieldErrors::new();
        assert!(errors.summary().is_none());
        errors.push("name", "Required");
        assert_eq!(errors.summary().as_deref(), Some("name: Required"));
        errors.push("amount", "Must be at least 1");
        assert_eq!(errors.summary().as_deref(), Some("2 fields need attention"));
    }
}
