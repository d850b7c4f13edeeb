use log::info;

use crate::demo::form_state::SubmissionPhase;
use crate::demo::lifecycle::{AutoCloseScheduler, DialogLifecycle};
use crate::demo::message::{compose_uri, ContactSettings, MailComposer};
use crate::demo::validator::{validate, FormInput, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Rejected(ValidationErrors),
    Accepted,
}

/// Runs submit attempts of the demo form against the active dialog session.
pub struct SubmissionController<M> {
    composer: M,
    settings: ContactSettings,
}

impl<M: MailComposer> SubmissionController<M> {
    pub fn new(composer: M, settings: ContactSettings) -> Self {
        Self { composer, settings }
    }

    pub fn submit<S: AutoCloseScheduler>(
        &mut self,
        dialog: &mut DialogLifecycle<S>,
        input: FormInput,
    ) -> Outcome {
        {
            let state = dialog.state_mut();
            state.phase = SubmissionPhase::Submitting;
            state.errors = ValidationErrors::default();
        }

        let errors = validate(&input);
        if !errors.is_empty() {
            let fields: Vec<_> = errors.fields().map(|f| f.as_str()).collect();
            info!("Demo request rejected, invalid fields: {}", fields.join(", "));
            let state = dialog.state_mut();
            state.input = input;
            state.errors = errors.clone();
            state.phase = SubmissionPhase::Idle;
            return Outcome::Rejected(errors);
        }

        let uri = compose_uri(&input, &self.settings);
        self.composer.compose(&uri);
        info!("Demo request accepted for session {}", dialog.session().0);

        {
            let state = dialog.state_mut();
            state.input = FormInput::default();
            state.phase = SubmissionPhase::Success;
        }
        dialog.schedule_auto_close(self.settings.auto_close_ms);
        Outcome::Accepted
    }
}
