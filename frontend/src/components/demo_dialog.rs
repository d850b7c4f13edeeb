use log::info;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::demo::controller::SubmissionController;
use crate::demo::lifecycle::{DialogLifecycle, SessionId, TimeoutScheduler};
use crate::demo::message::{BrowserMailComposer, ContactSettings};
use crate::demo::validator::{DemoRole, FormField};

#[derive(Properties, PartialEq)]
pub struct DemoDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

pub enum DemoDialogMsg {
    Edit(FormField, String),
    Submit,
    AutoCloseElapsed(SessionId),
    Dismiss,
}

/// The "Request a Demo" modal.
pub struct DemoDialog {
    dialog: DialogLifecycle<TimeoutScheduler>,
    controller: SubmissionController<BrowserMailComposer>,
}

impl Component for DemoDialog {
    type Message = DemoDialogMsg;
    type Properties = DemoDialogProps;

    fn create(ctx: &Context<Self>) -> Self {
        let scheduler = TimeoutScheduler::new(ctx.link().callback(DemoDialogMsg::AutoCloseElapsed));
        let mut dialog = DialogLifecycle::new(scheduler);
        dialog.set_open(ctx.props().open);

        Self {
            dialog,
            controller: SubmissionController::new(BrowserMailComposer, ContactSettings::default()),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.dialog.set_open(ctx.props().open);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DemoDialogMsg::Edit(field, value) => {
                self.dialog.state_mut().edit(field, value);
                true
            }
            DemoDialogMsg::Submit => {
                let state = self.dialog.state();
                if !self.dialog.is_open() || state.is_submitting() || state.is_success() {
                    return false;
                }
                let input = state.input.clone();
                self.controller.submit(&mut self.dialog, input);
                true
            }
            DemoDialogMsg::AutoCloseElapsed(session) => {
                if self.dialog.auto_close_elapsed(session) {
                    ctx.props().on_close.emit(());
                }
                true
            }
            DemoDialogMsg::Dismiss => {
                info!("Demo dialog dismissed");
                self.dialog.close();
                ctx.props().on_close.emit(());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.dialog.is_open() {
            return html! {};
        }

        let dismiss = ctx.link().callback(|_: MouseEvent| DemoDialogMsg::Dismiss);
        let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div class="demo-overlay" onclick={dismiss.clone()}>
                <style>{DEMO_DIALOG_CSS}</style>
                <div class="demo-dialog" role="dialog" aria-modal="true" onclick={stop}>
                    <button class="demo-close" aria-label="Close" onclick={dismiss}>{"✕"}</button>
                    if self.dialog.state().is_success() {
                        { self.view_success() }
                    } else {
                        { self.view_form(ctx) }
                    }
                </div>
            </div>
        }
    }
}

impl DemoDialog {
    fn view_success(&self) -> Html {
        html! {
            <div class="demo-success">
                <div class="demo-success-icon">{"✓"}</div>
                <h2>{"Thank you!"}</h2>
                <p>{"Your email client should open with your demo request. Send it and we'll be in touch shortly."}</p>
            </div>
        }
    }

    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let state = self.dialog.state();
        let submitting = state.is_submitting();
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            DemoDialogMsg::Submit
        });
        let on_role = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            DemoDialogMsg::Edit(FormField::Role, select.value())
        });
        let on_message = ctx.link().callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            DemoDialogMsg::Edit(FormField::Message, area.value())
        });

        html! {
            <form class="demo-form" {onsubmit} novalidate={true}>
                <h2>{"Request a Demo"}</h2>
                <p class="demo-intro">{"See how Tether turns referral chaos into revenue."}</p>
                { self.view_text_input(ctx, FormField::Name, "Name", "text", "Jane Doe") }
                { self.view_text_input(ctx, FormField::Email, "Email", "email", "jane@practice.com") }
                { self.view_text_input(ctx, FormField::PracticeName, "Practice name", "text", "Forefront Dermatology") }
                <label class="demo-field">
                    <span>{"Role"}</span>
                    <select
                        class={classes!(state.errors.contains(FormField::Role).then(|| "invalid"))}
                        onchange={on_role}
                    >
                        <option value="" selected={state.input.role.is_empty()}>{"Select your role"}</option>
                        { for DemoRole::ALL.iter().map(|role| html! {
                            <option value={role.label()} selected={state.input.role == role.label()}>
                                {role.label()}
                            </option>
                        }) }
                    </select>
                    { self.view_error(FormField::Role) }
                </label>
                <label class="demo-field">
                    <span>{"Message (optional)"}</span>
                    <textarea
                        rows="3"
                        placeholder="Best time to connect, questions, ..."
                        value={state.input.message.clone()}
                        oninput={on_message}
                    />
                </label>
                <button type="submit" class="demo-submit" disabled={submitting}>
                    { if submitting { "Sending..." } else { "Request Demo" } }
                </button>
            </form>
        }
    }

    fn view_text_input(
        &self,
        ctx: &Context<Self>,
        field: FormField,
        label: &'static str,
        kind: &'static str,
        placeholder: &'static str,
    ) -> Html {
        let state = self.dialog.state();
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            DemoDialogMsg::Edit(field, input.value())
        });

        html! {
            <label class="demo-field">
                <span>{label}</span>
                <input
                    type={kind}
                    name={field.as_str()}
                    placeholder={placeholder}
                    class={classes!(state.errors.contains(field).then(|| "invalid"))}
                    value={state.input.get(field).to_string()}
                    {oninput}
                />
                { self.view_error(field) }
            </label>
        }
    }

    fn view_error(&self, field: FormField) -> Html {
        match self.dialog.state().errors.message(field) {
            Some(message) => html! { <p class="demo-error">{message}</p> },
            None => html! {},
        }
    }
}

const DEMO_DIALOG_CSS: &str = r#"
    .demo-overlay {
        position: fixed;
        inset: 0;
        z-index: 100;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1.5rem;
        background: rgba(5, 8, 22, 0.75);
        backdrop-filter: blur(8px);
    }
    .demo-dialog {
        position: relative;
        width: 100%;
        max-width: 520px;
        max-height: 90vh;
        overflow-y: auto;
        background: #10153a;
        border: 1px solid rgba(59, 130, 246, 0.3);
        border-radius: 24px;
        padding: 2.5rem;
        box-shadow: 0 24px 64px rgba(0, 0, 0, 0.5);
        color: #fff;
    }
    .demo-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        background: none;
        border: none;
        color: #9ca3af;
        font-size: 1.2rem;
        cursor: pointer;
    }
    .demo-form h2, .demo-success h2 {
        font-weight: 300;
        font-size: 2rem;
        margin-bottom: 0.5rem;
    }
    .demo-intro {
        color: #9ca3af;
        margin-bottom: 1.5rem;
    }
    .demo-field {
        display: flex;
        flex-direction: column;
        gap: 0.4rem;
        margin-bottom: 1rem;
        font-size: 0.9rem;
        color: #d1d5db;
    }
    .demo-field input, .demo-field select, .demo-field textarea {
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 12px;
        padding: 0.75rem 1rem;
        color: #fff;
        font-size: 1rem;
    }
    .demo-field .invalid {
        border-color: #f87171;
    }
    .demo-error {
        color: #f87171;
        font-size: 0.8rem;
    }
    .demo-submit {
        width: 100%;
        margin-top: 0.5rem;
        padding: 1rem;
        border: none;
        border-radius: 999px;
        background: linear-gradient(to right, #3b82f6, #2563eb);
        color: #fff;
        font-size: 1rem;
        cursor: pointer;
    }
    .demo-submit:disabled {
        opacity: 0.6;
        cursor: not-allowed;
    }
    .demo-success {
        text-align: center;
        padding: 2rem 0;
    }
    .demo-success-icon {
        font-size: 3rem;
        color: #60a5fa;
        margin-bottom: 1rem;
    }
    .demo-success p {
        color: #9ca3af;
    }
"#;
