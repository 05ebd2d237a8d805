use chrono::NaiveDate;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;

use super::draft::BookingDraft;
use super::model::{Riders, ScooterModel, TourRoute};
use crate::config;

/// Everything the booking service receives, prices included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRequest {
    pub model: ScooterModel,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub riders: Riders,
    pub route: Option<TourRoute>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub rental_days: u32,
    pub rental_price: u32,
}

impl BookingRequest {
    /// `None` until both dates are chosen.
    pub fn from_draft(draft: &BookingDraft) -> Option<Self> {
        Some(Self {
            model: draft.model(),
            start_date: draft.start_date()?,
            end_date: draft.end_date()?,
            riders: draft.riders,
            route: draft.route,
            name: draft.contact.name.trim().to_string(),
            email: draft.contact.email.trim().to_string(),
            phone: draft.contact.phone.trim().to_string(),
            message: draft.contact.message.trim().to_string(),
            rental_days: draft.rental_days(),
            rental_price: draft.rental_price(),
        })
    }
}

/// "Tell me when it arrives" for a model that can't be booked yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotifyRequest {
    pub model: ScooterModel,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("could not reach the booking service: {0}")]
    Network(String),
    #[error("booking service rejected the request (status {status})")]
    Rejected { status: u16 },
    #[error("could not encode the request: {0}")]
    Encode(String),
}

/// Where finished bookings go.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingSink {
    /// Answers with success after a delay. Nothing leaves the browser.
    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    Simulated { delay_ms: u32 },
    /// POSTs the booking as JSON; any non-2xx status is a failure.
    #[cfg_attr(debug_assertions, allow(dead_code))]
    Http { endpoint: String },
}

impl BookingSink {
    pub async fn submit(&self, booking: &BookingRequest) -> Result<(), SubmitError> {
        match self {
            BookingSink::Simulated { delay_ms } => {
                TimeoutFuture::new(*delay_ms).await;
                info!(
                    "Simulated booking accepted: {} for {} days, €{}",
                    booking.model.id(),
                    booking.rental_days,
                    booking.rental_price
                );
                Ok(())
            }
            BookingSink::Http { endpoint } => post_json(endpoint, booking).await,
        }
    }
}

async fn post_json<T: Serialize>(endpoint: &str, body: &T) -> Result<(), SubmitError> {
    let response = Request::post(endpoint)
        .json(body)
        .map_err(|e| SubmitError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    check_status(response.status())
}

fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected { status })
    }
}

/// Fire-and-forget; failures are only logged.
pub fn notify_me(request: NotifyRequest) {
    spawn_local(async move {
        match post_json(&config::notify_endpoint(), &request).await {
            Ok(()) => info!("Notify request stored for {}", request.model.id()),
            Err(e) => warn!("Notify request for {} failed: {}", request.model.id(), e),
        }
    });
}
