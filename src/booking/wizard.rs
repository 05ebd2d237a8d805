use log::{info, warn};

use super::draft::BookingDraft;
use super::model::ScooterModel;
use super::submit::{BookingRequest, NotifyRequest, SubmitError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardState {
    #[default]
    SelectModel,
    RentalDetails,
    PersonalInfo,
    Submitting,
    Succeeded,
}

impl WizardState {
    /// Visible step number. Submitting still shows step 3.
    pub fn step(self) -> Option<u8> {
        match self {
            WizardState::SelectModel => Some(1),
            WizardState::RentalDetails => Some(2),
            WizardState::PersonalInfo | WizardState::Submitting => Some(3),
            WizardState::Succeeded => None,
        }
    }

    fn is_editable(self) -> bool {
        matches!(
            self,
            WizardState::SelectModel | WizardState::RentalDetails | WizardState::PersonalInfo
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelChoice {
    Selected,
    /// The model isn't bookable yet; the notify-me form opened instead.
    NotifyRequested,
    Ignored,
}

/// The notify-me form. Lives beside the draft and never touches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyForm {
    pub model: ScooterModel,
    pub email: String,
}

/// Notify-me side flow on step 1.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NotifyState {
    #[default]
    Closed,
    Open(NotifyForm),
    Sent(ScooterModel),
}

/// Three-step booking flow: model, rental details, contact details.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Wizard {
    state: WizardState,
    draft: BookingDraft,
    last_error: Option<SubmitError>,
    notify: NotifyState,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn last_error(&self) -> Option<&SubmitError> {
        self.last_error.as_ref()
    }

    pub fn notify_state(&self) -> &NotifyState {
        &self.notify
    }

    pub fn notify_form(&self) -> Option<&NotifyForm> {
        match &self.notify {
            NotifyState::Open(form) => Some(form),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.state == WizardState::Submitting
    }

    /// Applies an edit to the draft. Ignored once submission has started.
    pub fn edit(&mut self, apply: impl FnOnce(&mut BookingDraft)) -> bool {
        if !self.state.is_editable() {
            return false;
        }
        apply(&mut self.draft);
        true
    }

    pub fn select_model(&mut self, model: ScooterModel) -> ModelChoice {
        if self.state != WizardState::SelectModel {
            return ModelChoice::Ignored;
        }
        if self.draft.select_model(model) {
            self.notify = NotifyState::Closed;
            ModelChoice::Selected
        } else {
            info!("{} is not bookable yet, opening notify form", model.id());
            self.notify = NotifyState::Open(NotifyForm { model, email: String::new() });
            ModelChoice::NotifyRequested
        }
    }

    pub fn set_notify_email(&mut self, email: String) {
        if let NotifyState::Open(form) = &mut self.notify {
            form.email = email;
        }
    }

    /// Marks the notify form as sent and hands back the request, if the
    /// email looks usable. An unusable email keeps the form open.
    pub fn take_notify_request(&mut self) -> Option<NotifyRequest> {
        let form = self.notify_form()?;
        let email = form.email.trim();
        if !email.contains('@') {
            return None;
        }
        let request = NotifyRequest { model: form.model, email: email.to_string() };
        self.notify = NotifyState::Sent(request.model);
        Some(request)
    }

    pub fn cancel_notify(&mut self) {
        self.notify = NotifyState::Closed;
    }

    pub fn can_continue(&self) -> bool {
        match self.state {
            WizardState::SelectModel => self.draft.model().is_available(),
            WizardState::RentalDetails => self.draft.has_dates(),
            _ => false,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.state == WizardState::PersonalInfo
            && self.draft.model().is_available()
            && self.draft.has_dates()
            && self.draft.contact.is_complete()
    }

    pub fn next(&mut self) -> bool {
        if !self.can_continue() {
            return false;
        }
        let from = self.state;
        self.state = match from {
            WizardState::SelectModel => WizardState::RentalDetails,
            WizardState::RentalDetails => WizardState::PersonalInfo,
            other => other,
        };
        info!("Booking step {:?} -> {:?}", from, self.state);
        true
    }

    pub fn back(&mut self) -> bool {
        let to = match self.state {
            WizardState::RentalDetails => WizardState::SelectModel,
            WizardState::PersonalInfo => WizardState::RentalDetails,
            _ => return false,
        };
        self.state = to;
        self.last_error = None;
        true
    }

    /// Moves to `Submitting` and returns what to send. `None` means nothing
    /// happened: wrong step, missing fields, or already in flight.
    pub fn begin_submit(&mut self) -> Option<BookingRequest> {
        if !self.can_submit() {
            return None;
        }
        let request = BookingRequest::from_draft(&self.draft)?;
        self.state = WizardState::Submitting;
        self.last_error = None;
        info!("Submitting booking: {} days, €{}", request.rental_days, request.rental_price);
        Some(request)
    }

    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        if self.state != WizardState::Submitting {
            warn!("Submission result arrived outside of a submission, ignoring");
            return;
        }
        match outcome {
            Ok(()) => {
                info!("Booking submitted");
                self.state = WizardState::Succeeded;
                self.draft = BookingDraft::default();
            }
            Err(e) => {
                warn!("Booking submission failed: {}", e);
                self.state = WizardState::PersonalInfo;
                self.last_error = Some(e);
            }
        }
    }

    pub fn book_another(&mut self) -> bool {
        if self.state != WizardState::Succeeded {
            return false;
        }
        *self = Self::new();
        true
    }
}
