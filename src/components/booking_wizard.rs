use chrono::NaiveDate;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::booking::{
    notify_me, ModelChoice, NotifyState, Riders, ScooterModel, SubmitError, TourRoute, Wizard, WizardState,
};
use crate::config;
use crate::i18n::Translator;

#[derive(Properties, PartialEq)]
pub struct BookingWizardProps {
    pub translator: Translator,
}

pub enum BookingMsg {
    SelectModel(ScooterModel),
    Next,
    Back,
    SetStartDate(String),
    SetEndDate(String),
    SetRiders(String),
    SetRoute(String),
    SetName(String),
    SetEmail(String),
    SetPhone(String),
    SetMessage(String),
    Submit,
    Submitted(Result<(), SubmitError>),
    BookAnother,
    SetNotifyEmail(String),
    SendNotify,
    CancelNotify,
}

pub struct BookingWizard {
    wizard: Wizard,
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

impl Component for BookingWizard {
    type Message = BookingMsg;
    type Properties = BookingWizardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            wizard: Wizard::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            BookingMsg::SelectModel(model) => {
                self.wizard.select_model(model) != ModelChoice::Ignored
            }
            BookingMsg::Next => self.wizard.next(),
            BookingMsg::Back => self.wizard.back(),
            BookingMsg::SetStartDate(value) => {
                self.wizard.edit(|draft| draft.set_start_date(parse_date(&value)))
            }
            BookingMsg::SetEndDate(value) => {
                self.wizard.edit(|draft| draft.set_end_date(parse_date(&value)))
            }
            BookingMsg::SetRiders(value) => {
                match value.parse::<u8>().ok().and_then(Riders::from_count) {
                    Some(riders) => self.wizard.edit(|draft| draft.riders = riders),
                    None => false,
                }
            }
            BookingMsg::SetRoute(value) => {
                self.wizard.edit(|draft| draft.route = TourRoute::from_id(&value))
            }
            BookingMsg::SetName(value) => self.wizard.edit(|draft| draft.contact.name = value),
            BookingMsg::SetEmail(value) => self.wizard.edit(|draft| draft.contact.email = value),
            BookingMsg::SetPhone(value) => self.wizard.edit(|draft| draft.contact.phone = value),
            BookingMsg::SetMessage(value) => {
                self.wizard.edit(|draft| draft.contact.message = value)
            }
            BookingMsg::Submit => match self.wizard.begin_submit() {
                Some(request) => {
                    let sink = config::booking_sink();
                    ctx.link().send_future(async move {
                        BookingMsg::Submitted(sink.submit(&request).await)
                    });
                    true
                }
                None => false,
            },
            BookingMsg::Submitted(outcome) => {
                self.wizard.finish_submit(outcome);
                true
            }
            BookingMsg::BookAnother => self.wizard.book_another(),
            BookingMsg::SetNotifyEmail(email) => {
                self.wizard.set_notify_email(email);
                true
            }
            BookingMsg::SendNotify => match self.wizard.take_notify_request() {
                Some(request) => {
                    notify_me(request);
                    true
                }
                None => false,
            },
            BookingMsg::CancelNotify => {
                self.wizard.cancel_notify();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let t = &ctx.props().translator;
        let state = self.wizard.state();

        let body = match state {
            WizardState::SelectModel => self.view_model_step(ctx),
            WizardState::RentalDetails => self.view_details_step(ctx),
            WizardState::PersonalInfo | WizardState::Submitting => self.view_personal_step(ctx),
            WizardState::Succeeded => self.view_success(ctx),
        };

        html! {
            <div class="booking-wizard">
                <h2>{t.t("booking.title")}</h2>
                {
                    if let Some(step) = state.step() {
                        html! {
                            <div class="wizard-steps">
                                { for (1..=3u8).map(|n| html! {
                                    <span class={classes!("wizard-step", (n == step).then(|| "active"), (n < step).then(|| "done"))}>
                                        {format!("{} {}", t.t("booking.step"), n)}
                                    </span>
                                }) }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                { body }
                <style>
                    {r#"
                    .booking-wizard {
                        max-width: 760px;
                        margin: 0 auto;
                        padding: 2rem;
                        background: rgba(255, 255, 255, 0.95);
                        border-radius: 16px;
                        box-shadow: 0 12px 32px rgba(0, 0, 0, 0.12);
                    }
                    .wizard-steps {
                        display: flex;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .wizard-step {
                        flex: 1;
                        text-align: center;
                        padding: 0.5rem;
                        border-bottom: 3px solid #ddd;
                        color: #888;
                    }
                    .wizard-step.active {
                        border-color: #0b7a75;
                        color: #0b7a75;
                        font-weight: bold;
                    }
                    .wizard-step.done {
                        border-color: #8cc7c4;
                    }
                    .model-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                        gap: 1rem;
                    }
                    .model-card {
                        border: 2px solid #eee;
                        border-radius: 12px;
                        padding: 1rem;
                        background: #fff;
                        cursor: pointer;
                        text-align: left;
                    }
                    .model-card.selected {
                        border-color: #0b7a75;
                    }
                    .model-card.unavailable {
                        opacity: 0.6;
                    }
                    .badge {
                        display: inline-block;
                        background: #f4b400;
                        color: #222;
                        border-radius: 8px;
                        padding: 0.1rem 0.5rem;
                        font-size: 0.8rem;
                    }
                    .wizard-field {
                        display: flex;
                        flex-direction: column;
                        margin-bottom: 1rem;
                    }
                    .wizard-actions {
                        display: flex;
                        justify-content: space-between;
                        margin-top: 1.5rem;
                    }
                    .wizard-error {
                        background: #fdecea;
                        color: #a12622;
                        padding: 0.75rem 1rem;
                        border-radius: 8px;
                        margin-top: 1rem;
                    }
                    .wizard-summary {
                        background: #f3f8f8;
                        border-radius: 8px;
                        padding: 1rem;
                        margin-top: 1rem;
                    }
                    "#}
                </style>
            </div>
        }
    }
}

impl BookingWizard {
    fn view_model_step(&self, ctx: &Context<Self>) -> Html {
        let t = &ctx.props().translator;
        let link = ctx.link();
        let selected = self.wizard.draft().model();

        html! {
            <>
                <h3>{t.t("booking.steps.model.title")}</h3>
                <div class="model-grid">
                    { for ScooterModel::ALL.into_iter().map(|model| {
                        let onclick = link.callback(move |_: MouseEvent| BookingMsg::SelectModel(model));
                        html! {
                            <button
                                class={classes!(
                                    "model-card",
                                    (model == selected).then(|| "selected"),
                                    (!model.is_available()).then(|| "unavailable")
                                )}
                                {onclick}
                            >
                                <img src={model.image()} alt={t.t(&model.name_key())} />
                                <h4>{t.t(&model.name_key())}</h4>
                                {
                                    if model.is_available() {
                                        html! { <p>{format!("€{} {}", model.base_price(), t.t("fleet.per_day"))}</p> }
                                    } else {
                                        html! { <span class="badge">{t.t("fleet.coming_soon")}</span> }
                                    }
                                }
                            </button>
                        }
                    }) }
                </div>
                { self.view_notify(ctx) }
                <div class="wizard-actions">
                    <span></span>
                    <button
                        class="wizard-next"
                        disabled={!self.wizard.can_continue()}
                        onclick={link.callback(|_: MouseEvent| BookingMsg::Next)}
                    >
                        {t.t("booking.actions.continue")}
                    </button>
                </div>
            </>
        }
    }

    fn view_notify(&self, ctx: &Context<Self>) -> Html {
        let t = &ctx.props().translator;
        let link = ctx.link();

        let form = match self.wizard.notify_state() {
            NotifyState::Closed => return html! {},
            NotifyState::Sent(_) => {
                return html! { <p class="notify-thanks">{t.t("booking.notify.thanks")}</p> };
            }
            NotifyState::Open(form) => form,
        };

        html! {
            <div class="notify-form">
                <h4>{format!("{}: {}", t.t("booking.notify.title"), t.t(&form.model.name_key()))}</h4>
                <p>{t.t("booking.notify.body")}</p>
                <input
                    type="email"
                    placeholder={t.t("booking.notify.email")}
                    value={form.email.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        BookingMsg::SetNotifyEmail(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <button onclick={link.callback(|_: MouseEvent| BookingMsg::SendNotify)}>
                    {t.t("booking.notify.submit")}
                </button>
                <button class="link-button" onclick={link.callback(|_: MouseEvent| BookingMsg::CancelNotify)}>
                    {t.t("booking.notify.cancel")}
                </button>
            </div>
        }
    }

    fn view_details_step(&self, ctx: &Context<Self>) -> Html {
        let t = &ctx.props().translator;
        let link = ctx.link();
        let draft = self.wizard.draft();
        let route_id = draft.route.map(|r| r.id()).unwrap_or_default();

        html! {
            <>
                <h3>{t.t("booking.steps.details.title")}</h3>
                <label class="wizard-field">
                    {t.t("booking.fields.start_date")}
                    <input
                        type="date"
                        value={date_value(draft.start_date())}
                        onchange={link.callback(|e: Event| {
                            BookingMsg::SetStartDate(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </label>
                <label class="wizard-field">
                    {t.t("booking.fields.end_date")}
                    <input
                        type="date"
                        min={date_value(draft.start_date())}
                        value={date_value(draft.end_date())}
                        onchange={link.callback(|e: Event| {
                            BookingMsg::SetEndDate(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </label>
                <label class="wizard-field">
                    {t.t("booking.fields.riders")}
                    <select onchange={link.callback(|e: Event| {
                        BookingMsg::SetRiders(e.target_unchecked_into::<HtmlSelectElement>().value())
                    })}>
                        <option value="1" selected={draft.riders == Riders::One}>{t.t("booking.riders.one")}</option>
                        <option value="2" selected={draft.riders == Riders::Two}>{t.t("booking.riders.two")}</option>
                    </select>
                </label>
                <label class="wizard-field">
                    {t.t("booking.fields.route")}
                    <select onchange={link.callback(|e: Event| {
                        BookingMsg::SetRoute(e.target_unchecked_into::<HtmlSelectElement>().value())
                    })}>
                        <option value="" selected={route_id.is_empty()}>{t.t("booking.fields.route_none")}</option>
                        { for TourRoute::ALL.into_iter().map(|route| html! {
                            <option value={route.id()} selected={route.id() == route_id}>{t.t(&route.name_key())}</option>
                        }) }
                    </select>
                </label>
                { self.view_summary(ctx) }
                <div class="wizard-actions">
                    <button class="wizard-back" onclick={link.callback(|_: MouseEvent| BookingMsg::Back)}>
                        {t.t("booking.actions.back")}
                    </button>
                    <button
                        class="wizard-next"
                        disabled={!self.wizard.can_continue()}
                        onclick={link.callback(|_: MouseEvent| BookingMsg::Next)}
                    >
                        {t.t("booking.actions.continue")}
                    </button>
                </div>
            </>
        }
    }

    fn view_personal_step(&self, ctx: &Context<Self>) -> Html {
        let t = &ctx.props().translator;
        let link = ctx.link();
        let contact = &self.wizard.draft().contact;
        let submitting = self.wizard.is_submitting();

        let text_input = |label: &str, kind: &'static str, value: &str, to_msg: fn(String) -> BookingMsg| {
            html! {
                <label class="wizard-field">
                    {t.t(label)}
                    <input
                        type={kind}
                        required={true}
                        disabled={submitting}
                        value={value.to_string()}
                        oninput={link.callback(move |e: InputEvent| {
                            to_msg(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </label>
            }
        };

        html! {
            <>
                <h3>{t.t("booking.steps.personal.title")}</h3>
                { text_input("booking.fields.name", "text", &contact.name, BookingMsg::SetName) }
                { text_input("booking.fields.email", "email", &contact.email, BookingMsg::SetEmail) }
                { text_input("booking.fields.phone", "tel", &contact.phone, BookingMsg::SetPhone) }
                <label class="wizard-field">
                    {t.t("booking.fields.message")}
                    <textarea
                        disabled={submitting}
                        value={contact.message.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            BookingMsg::SetMessage(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                        })}
                    />
                </label>
                { self.view_summary(ctx) }
                {
                    if self.wizard.last_error().is_some() {
                        html! { <div class="wizard-error">{t.t("booking.error.submit")}</div> }
                    } else {
                        html! {}
                    }
                }
                <div class="wizard-actions">
                    <button
                        class="wizard-back"
                        disabled={submitting}
                        onclick={link.callback(|_: MouseEvent| BookingMsg::Back)}
                    >
                        {t.t("booking.actions.back")}
                    </button>
                    <button
                        class="wizard-submit"
                        disabled={!self.wizard.can_submit()}
                        onclick={link.callback(|_: MouseEvent| BookingMsg::Submit)}
                    >
                        {
                            if submitting {
                                t.t("booking.actions.submitting")
                            } else {
                                t.t("booking.actions.complete")
                            }
                        }
                    </button>
                </div>
            </>
        }
    }

    fn view_summary(&self, ctx: &Context<Self>) -> Html {
        let t = &ctx.props().translator;
        let draft = self.wizard.draft();

        html! {
            <div class="wizard-summary">
                <strong>{t.t("booking.summary.title")}</strong>
                <p>{t.t(&draft.model().name_key())}</p>
                <p>{format!("{}: {}", t.t("booking.summary.days"), draft.rental_days())}</p>
                <p>{format!("{}: €{}", t.t("booking.summary.price"), draft.rental_price())}</p>
                {
                    if draft.riders == Riders::Two {
                        html! { <small>{t.t("booking.summary.extra_rider")}</small> }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }

    fn view_success(&self, ctx: &Context<Self>) -> Html {
        let t = &ctx.props().translator;
        html! {
            <div class="wizard-success">
                <h3>{t.t("booking.success.title")}</h3>
                <p>{t.t("booking.success.body")}</p>
                <button onclick={ctx.link().callback(|_: MouseEvent| BookingMsg::BookAnother)}>
                    {t.t("booking.success.another")}
                </button>
            </div>
        }
    }
}
