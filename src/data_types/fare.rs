use std::{fmt::Display, str::FromStr};

use serde_derive::{Deserialize, Serialize};

use crate::error::FareError;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Local,
    Airport,
    Outstation,
}

impl ServiceType {
    pub const ALL: [ServiceType; 3] = [
        ServiceType::Local,
        ServiceType::Airport,
        ServiceType::Outstation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Local => "local",
            ServiceType::Airport => "airport",
            ServiceType::Outstation => "outstation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Local => "Local",
            ServiceType::Airport => "Airport",
            ServiceType::Outstation => "Outstation",
        }
    }
}

impl FromStr for ServiceType {
    type Err = FareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceType::ALL
            .into_iter()
            .find(|service| service.as_str() == s.trim())
            .ok_or_else(|| FareError::InvalidInput(format!("unknown service type '{}'", s)))
    }
}

impl Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Vehicle class
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Hatchback,
    Sedan,
    Suv,
    PremiumSuv,
}

impl Segment {
    pub const ALL: [Segment; 4] = [
        Segment::Hatchback,
        Segment::Sedan,
        Segment::Suv,
        Segment::PremiumSuv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Hatchback => "hatchback",
            Segment::Sedan => "sedan",
            Segment::Suv => "suv",
            Segment::PremiumSuv => "premium_suv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Segment::Hatchback => "Hatchback",
            Segment::Sedan => "Sedan",
            Segment::Suv => "SUV",
            Segment::PremiumSuv => "Premium SUV",
        }
    }

    /// Segment a fleet car model is rented under, e.g. "Toyota Etios" -> sedan
    pub fn for_car_model(model: &str) -> Segment {
        let model = model.to_lowercase();

        if model.contains("etios") || model.contains("ciaz") {
            Segment::Sedan
        } else if model.contains("swift") {
            Segment::Hatchback
        } else if model.contains("ertiga") {
            Segment::Suv
        } else {
            Segment::PremiumSuv
        }
    }
}

impl FromStr for Segment {
    type Err = FareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Segment::ALL
            .into_iter()
            .find(|segment| segment.as_str() == s.trim())
            .ok_or_else(|| FareError::InvalidInput(format!("unknown segment '{}'", s)))
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FareRequest {
    pub service_type: ServiceType,
    pub segment: Segment,
    pub distance_km: f64,
    /// Local hire only. Defaults to the table's base duration.
    pub duration_hr: Option<f64>,
    /// Outstation only. Defaults to 1.
    pub days: Option<u32>,
}

impl FareRequest {
    pub fn new(service_type: ServiceType, segment: Segment, distance_km: f64) -> Self {
        Self {
            service_type,
            segment,
            distance_km,
            duration_hr: None,
            days: None,
        }
    }

    pub fn with_duration_hr(mut self, duration_hr: f64) -> Self {
        self.duration_hr = Some(duration_hr);
        self
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = Some(days);
        self
    }

    /// Builds a request from untyped form values
    pub fn parse(
        service_type: &str,
        segment: &str,
        distance_km: f64,
        duration_hr: Option<f64>,
        days: Option<u32>,
    ) -> Result<Self, FareError> {
        Ok(Self {
            service_type: service_type.parse()?,
            segment: segment.parse()?,
            distance_km,
            duration_hr,
            days,
        })
    }
}

/// Estimate request as posted by the quick-estimate form
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EstimateQuery {
    pub service_type: String,
    pub segment: String,
    #[serde(default)]
    pub distance_km: f64,
    pub duration_hr: Option<f64>,
    pub days: Option<u32>,
}

impl TryFrom<EstimateQuery> for FareRequest {
    type Error = FareError;

    fn try_from(query: EstimateQuery) -> Result<Self, Self::Error> {
        FareRequest::parse(
            &query.service_type,
            &query.segment,
            query.distance_km,
            query.duration_hr,
            query.days,
        )
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FareResult {
    pub total_amount: f64,
    pub breakdown_text: String,
}
