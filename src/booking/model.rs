use serde::Serialize;

/// Per-day surcharge when a passenger rides along.
pub const EXTRA_RIDER_FEE: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScooterModel {
    #[default]
    Primavera,
    Gts,
    Liberty,
    Elettrica,
}

impl ScooterModel {
    pub const ALL: [ScooterModel; 4] = [
        ScooterModel::Primavera,
        ScooterModel::Gts,
        ScooterModel::Liberty,
        ScooterModel::Elettrica,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ScooterModel::Primavera => "primavera",
            ScooterModel::Gts => "gts",
            ScooterModel::Liberty => "liberty",
            ScooterModel::Elettrica => "elettrica",
        }
    }

    /// Daily rate in euros.
    pub fn base_price(self) -> u32 {
        match self {
            ScooterModel::Primavera => 79,
            ScooterModel::Gts => 99,
            ScooterModel::Liberty => 69,
            ScooterModel::Elettrica => 89,
        }
    }

    /// Models not yet in the fleet can be shown but not booked.
    pub fn is_available(self) -> bool {
        !matches!(self, ScooterModel::Elettrica)
    }

    pub fn name_key(self) -> String {
        format!("models.{}.name", self.id())
    }

    pub fn description_key(self) -> String {
        format!("models.{}.description", self.id())
    }

    pub fn image(self) -> String {
        format!("/assets/scooters/{}.jpg", self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Riders {
    #[default]
    One,
    Two,
}

impl Riders {
    pub fn count(self) -> u8 {
        match self {
            Riders::One => 1,
            Riders::Two => 2,
        }
    }

    pub fn from_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(Riders::One),
            2 => Some(Riders::Two),
            _ => None,
        }
    }

    pub fn extra_fee(self) -> u32 {
        match self {
            Riders::One => 0,
            Riders::Two => EXTRA_RIDER_FEE,
        }
    }
}

impl Serialize for Riders {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.count())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TourRoute {
    Coast,
    Hills,
    Lakes,
    City,
}

impl TourRoute {
    pub const ALL: [TourRoute; 4] = [TourRoute::Coast, TourRoute::Hills, TourRoute::Lakes, TourRoute::City];

    pub fn id(self) -> &'static str {
        match self {
            TourRoute::Coast => "coast",
            TourRoute::Hills => "hills",
            TourRoute::Lakes => "lakes",
            TourRoute::City => "city",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.id() == id)
    }

    pub fn name_key(self) -> String {
        format!("routes.{}", self.id())
    }
}
