//! Reservation flow: the scooter catalog, the form draft with its derived
//! days and price, and the step-by-step wizard around it.

mod draft;
mod model;
mod submit;
mod wizard;

pub use model::{Riders, ScooterModel, TourRoute};
pub use submit::{notify_me, BookingSink, SubmitError};
pub use wizard::{ModelChoice, NotifyState, Wizard, WizardState};
