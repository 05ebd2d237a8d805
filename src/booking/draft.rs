use chrono::NaiveDate;

use super::model::{Riders, ScooterModel, TourRoute};

/// Free-text contact fields. Everything but `message` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactDetails {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.phone.trim().is_empty()
            && self.email.trim().contains('@')
    }
}

/// Form state of one reservation in progress.
///
/// Model and dates are private: a model that isn't in the fleet yet can't be
/// picked, and the return date never precedes the pick-up date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    model: ScooterModel,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    pub riders: Riders,
    pub route: Option<TourRoute>,
    pub contact: ContactDetails,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            model: ScooterModel::default(),
            start_date: None,
            end_date: None,
            riders: Riders::default(),
            route: None,
            contact: ContactDetails::default(),
        }
    }
}

impl BookingDraft {
    pub fn model(&self) -> ScooterModel {
        self.model
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Returns false, leaving the draft alone, for unavailable models.
    pub fn select_model(&mut self, model: ScooterModel) -> bool {
        if !model.is_available() {
            return false;
        }
        self.model = model;
        true
    }

    /// Moving the pick-up past the return date drags the return date along.
    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                self.end_date = Some(start);
            }
        }
    }

    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.end_date = match (self.start_date, date) {
            (Some(start), Some(end)) if end < start => Some(start),
            _ => date,
        };
    }

    pub fn has_dates(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_some()
    }

    /// Whole days between pick-up and return, at least one. Zero until both
    /// dates are chosen.
    pub fn rental_days(&self) -> u32 {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => {
                let days = (end - start).num_days().max(1);
                u32::try_from(days).unwrap_or(u32::MAX)
            }
            _ => 0,
        }
    }

    pub fn daily_rate(&self) -> u32 {
        self.model.base_price() + self.riders.extra_fee()
    }

    pub fn rental_price(&self) -> u32 {
        self.daily_rate().saturating_mul(self.rental_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft_with_dates(start: NaiveDate, end: NaiveDate) -> BookingDraft {
        let mut draft = BookingDraft::default();
        draft.set_start_date(Some(start));
        draft.set_end_date(Some(end));
        draft
    }

    #[test]
    fn same_day_rental_counts_as_one_day() {
        let draft = draft_with_dates(date(2025, 6, 1), date(2025, 6, 1));
        assert_eq!(draft.rental_days(), 1);
    }

    #[test]
    fn counts_nights_between_dates() {
        let draft = draft_with_dates(date(2025, 6, 1), date(2025, 6, 4));
        assert_eq!(draft.rental_days(), 3);
    }

    #[test]
    fn prices_one_and_two_riders() {
        let mut draft = draft_with_dates(date(2025, 6, 1), date(2025, 6, 4));
        assert_eq!(draft.model(), ScooterModel::Primavera);
        assert_eq!(draft.rental_price(), 237);

        draft.riders = Riders::Two;
        assert_eq!(draft.rental_price(), 282);
    }

    #[test]
    fn price_follows_model_change() {
        let mut draft = draft_with_dates(date(2025, 6, 1), date(2025, 6, 3));
        assert!(draft.select_model(ScooterModel::Gts));
        assert_eq!(draft.rental_price(), 198);
    }

    #[test]
    fn missing_date_means_zero() {
        let mut draft = BookingDraft::default();
        draft.set_start_date(Some(date(2025, 6, 1)));
        assert_eq!(draft.rental_days(), 0);
        assert_eq!(draft.rental_price(), 0);

        let mut draft = BookingDraft::default();
        draft.set_end_date(Some(date(2025, 6, 1)));
        assert_eq!(draft.rental_days(), 0);
        assert_eq!(draft.rental_price(), 0);
    }

    #[test]
    fn later_start_pushes_end_forward() {
        let mut draft = draft_with_dates(date(2025, 6, 1), date(2025, 6, 4));
        draft.set_start_date(Some(date(2025, 6, 10)));
        assert_eq!(draft.end_date(), Some(date(2025, 6, 10)));
        assert_eq!(draft.rental_days(), 1);
    }

    #[test]
    fn earlier_start_keeps_end() {
        let mut draft = draft_with_dates(date(2025, 6, 5), date(2025, 6, 8));
        draft.set_start_date(Some(date(2025, 6, 2)));
        assert_eq!(draft.end_date(), Some(date(2025, 6, 8)));
    }

    #[test]
    fn end_before_start_is_clamped() {
        let draft = draft_with_dates(date(2025, 6, 5), date(2025, 6, 1));
        assert_eq!(draft.end_date(), Some(date(2025, 6, 5)));
    }

    #[test]
    fn clearing_dates() {
        let mut draft = draft_with_dates(date(2025, 6, 5), date(2025, 6, 7));
        draft.set_end_date(None);
        assert!(!draft.has_dates());
        assert_eq!(draft.start_date(), Some(date(2025, 6, 5)));
    }

    #[test]
    fn unavailable_model_is_rejected() {
        let mut draft = BookingDraft::default();
        assert!(!draft.select_model(ScooterModel::Elettrica));
        assert_eq!(draft.model(), ScooterModel::Primavera);
    }

    #[test]
    fn contact_requires_name_email_phone() {
        let mut contact = ContactDetails {
            name: "Giulia Rossi".into(),
            email: "giulia@example.com".into(),
            phone: "+39 333 1234567".into(),
            message: String::new(),
        };
        assert!(contact.is_complete());

        contact.email = "giulia.example.com".into();
        assert!(!contact.is_complete());

        contact.email = "giulia@example.com".into();
        contact.phone = "   ".into();
        assert!(!contact.is_complete());
    }
}
