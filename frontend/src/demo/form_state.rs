use crate::demo::validator::{FormField, FormInput, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// Everything the demo dialog shows for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub input: FormInput,
    pub errors: ValidationErrors,
    pub phase: SubmissionPhase,
}

impl FormState {
    pub fn edit(&mut self, field: FormField, value: String) {
        self.input.set(field, value);
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.phase == SubmissionPhase::Success
    }

    pub fn reset(&mut self) {
        *self = FormState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::validator::validate;

    #[test]
    fn starts_idle_and_empty() {
        let state = FormState::default();
        assert_eq!(state.phase, SubmissionPhase::Idle);
        assert!(state.errors.is_empty());
        assert_eq!(state.input, FormInput::default());
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = FormState::default();
        state.edit(FormField::Name, "A".to_string());
        state.errors = validate(&state.input);
        state.phase = SubmissionPhase::Success;

        state.reset();

        assert_eq!(state, FormState::default());
        assert!(!state.is_success());
        assert!(!state.is_submitting());
    }
}
