use std::{collections::BTreeMap, path::Path};

use serde_derive::{Deserialize, Serialize};

use crate::{
    data_types::fare::{Segment, ServiceType},
    error::{ConfigError, FareError},
};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LocalRate {
    pub base: f64,
    pub extra_per_km: f64,
    pub extra_per_hr: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AirportRate {
    pub pickup_fare: f64,
    pub drop_fare: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutstationRate {
    pub per_km: f64,
    pub min_km_per_day: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct LocalRates {
    pub base_distance_km: f64,
    pub base_duration_hr: f64,
    pub per_segment: BTreeMap<Segment, LocalRate>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AirportRates {
    pub per_segment: BTreeMap<Segment, AirportRate>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct OutstationRates {
    pub per_segment: BTreeMap<Segment, OutstationRate>,
}

/// Read-only price list. Built only through validation, so every service
/// block carries a rate for every segment.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RateTable {
    pub local: LocalRates,
    pub airport: AirportRates,
    pub outstation: OutstationRates,
}

// On-disk shape, keyed by free-form segment names until validated.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRateTable {
    local: RawLocalRates,
    airport: RawPerSegment<AirportRate>,
    outstation: RawPerSegment<OutstationRate>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLocalRates {
    base_distance_km: f64,
    base_duration_hr: f64,
    per_segment: BTreeMap<String, LocalRate>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPerSegment<R> {
    per_segment: BTreeMap<String, R>,
}

trait RateFields {
    fn fields(&self) -> Vec<(&'static str, f64)>;
}

impl RateFields for LocalRate {
    fn fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("base", self.base),
            ("extra_per_km", self.extra_per_km),
            ("extra_per_hr", self.extra_per_hr),
        ]
    }
}

impl RateFields for AirportRate {
    fn fields(&self) -> Vec<(&'static str, f64)> {
        vec![("pickup_fare", self.pickup_fare), ("drop_fare", self.drop_fare)]
    }
}

impl RateFields for OutstationRate {
    fn fields(&self) -> Vec<(&'static str, f64)> {
        vec![("per_km", self.per_km), ("min_km_per_day", self.min_km_per_day)]
    }
}

fn check_value(field: String, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidRate { field, value })
    }
}

fn validate_segments<R: RateFields>(
    service: ServiceType,
    raw: BTreeMap<String, R>,
) -> Result<BTreeMap<Segment, R>, ConfigError> {
    let mut rates = BTreeMap::new();

    for (key, rate) in raw {
        let segment: Segment = key.parse().map_err(|_| ConfigError::UnknownSegment {
            service: service.as_str(),
            key: key.clone(),
        })?;

        for (name, value) in rate.fields() {
            check_value(format!("{}.{}.{}", service, segment, name), value)?;
        }

        rates.insert(segment, rate);
    }

    if let Some(missing) = Segment::ALL.iter().find(|s| !rates.contains_key(*s)) {
        return Err(ConfigError::MissingRate {
            service: service.as_str(),
            segment: missing.as_str(),
        });
    }

    Ok(rates)
}

fn missing_rate(service: ServiceType, segment: Segment) -> FareError {
    FareError::InvalidInput(format!(
        "no {} rate for segment '{}'",
        service, segment
    ))
}

impl RateTable {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::NotFound(path.to_path_buf()))?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawRateTable =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(Self {
            local: LocalRates {
                base_distance_km: check_value(
                    "local.base_distance_km".to_string(),
                    raw.local.base_distance_km,
                )?,
                base_duration_hr: check_value(
                    "local.base_duration_hr".to_string(),
                    raw.local.base_duration_hr,
                )?,
                per_segment: validate_segments(ServiceType::Local, raw.local.per_segment)?,
            },
            airport: AirportRates {
                per_segment: validate_segments(ServiceType::Airport, raw.airport.per_segment)?,
            },
            outstation: OutstationRates {
                per_segment: validate_segments(
                    ServiceType::Outstation,
                    raw.outstation.per_segment,
                )?,
            },
        })
    }

    pub fn local_rate(&self, segment: Segment) -> Result<&LocalRate, FareError> {
        self.local
            .per_segment
            .get(&segment)
            .ok_or_else(|| missing_rate(ServiceType::Local, segment))
    }

    pub fn airport_rate(&self, segment: Segment) -> Result<&AirportRate, FareError> {
        self.airport
            .per_segment
            .get(&segment)
            .ok_or_else(|| missing_rate(ServiceType::Airport, segment))
    }

    pub fn outstation_rate(&self, segment: Segment) -> Result<&OutstationRate, FareError> {
        self.outstation
            .per_segment
            .get(&segment)
            .ok_or_else(|| missing_rate(ServiceType::Outstation, segment))
    }
}

impl Default for RateTable {
    /// The published INR price list
    fn default() -> Self {
        let local = [(1000., 12., 120.), (1800., 14., 140.), (2400., 18., 180.), (3000., 22., 250.)];
        let airport = [(1200., 1100.), (1500., 1200.), (2000., 1800.), (2400., 2200.)];
        let outstation = [12., 14., 18., 22.];

        Self {
            local: LocalRates {
                base_distance_km: 80.,
                base_duration_hr: 8.,
                per_segment: Segment::ALL
                    .into_iter()
                    .zip(local)
                    .map(|(segment, (base, extra_per_km, extra_per_hr))| {
                        (segment, LocalRate { base, extra_per_km, extra_per_hr })
                    })
                    .collect(),
            },
            airport: AirportRates {
                per_segment: Segment::ALL
                    .into_iter()
                    .zip(airport)
                    .map(|(segment, (pickup_fare, drop_fare))| {
                        (segment, AirportRate { pickup_fare, drop_fare })
                    })
                    .collect(),
            },
            outstation: OutstationRates {
                per_segment: Segment::ALL
                    .into_iter()
                    .zip(outstation)
                    .map(|(segment, per_km)| {
                        (segment, OutstationRate { per_km, min_km_per_day: 300. })
                    })
                    .collect(),
            },
        }
    }
}
