use serde_derive::{Deserialize, Serialize};

use crate::{
    data_types::fare::ServiceType,
    error::{Error, Result},
};

const BUSINESS_NAME: &str = "RADHA TRAVELS";

/// Booking form as submitted
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct BookingRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub service: Option<String>,
    pub car: Option<String>,
    pub pickup: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub days: Option<u32>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Booking {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub service: ServiceType,
    pub car: Option<String>,
    pub pickup: String,
    pub date: String,
    pub time: String,
    pub days: Option<u32>,
    pub notes: Option<String>,
}

fn field(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "-")
        .map(str::to_string)
}

fn is_phone_number(phone: &str) -> bool {
    phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
}

// "premium_suv" -> "Premium Suv"
fn title_case(text: &str) -> String {
    text.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl BookingRequest {
    pub fn validate(&self) -> Result<Booking> {
        let name = field(&self.name);
        let phone = field(&self.phone).filter(|phone| is_phone_number(phone));
        let service = field(&self.service).and_then(|s| s.parse::<ServiceType>().ok());

        let (name, phone, service) = match (name, phone, service) {
            (Some(name), Some(phone), Some(service)) => (name, phone, service),
            _ => {
                return Err(Error::Validation(
                    "Please enter name, a valid 10-digit phone, and select service.".to_string(),
                ))
            }
        };

        let (pickup, date, time) = match (field(&self.pickup), field(&self.date), field(&self.time)) {
            (Some(pickup), Some(date), Some(time)) => (pickup, date, time),
            _ => {
                return Err(Error::Validation(
                    "Please fill pickup, date and time.".to_string(),
                ))
            }
        };

        let days = match service {
            ServiceType::Outstation => match self.days {
                Some(days) if days >= 1 => Some(days),
                _ => {
                    return Err(Error::Validation(
                        "Please enter a valid number of days for outstation.".to_string(),
                    ))
                }
            },
            _ => None,
        };

        Ok(Booking {
            name,
            phone,
            email: field(&self.email),
            service,
            car: field(&self.car),
            pickup,
            date,
            time,
            days,
            notes: field(&self.notes),
        })
    }
}

impl Booking {
    /// Plain-text booking notice for the office
    pub fn message(&self) -> String {
        let mut lines = vec![
            format!("*New Booking – {}*", BUSINESS_NAME),
            format!("Name: {}", self.name),
            format!("Phone: {}", self.phone),
            format!("Email: {}", self.email.as_deref().unwrap_or("-")),
            format!("Service: {}", self.service.label()),
            format!(
                "Car: {}",
                self.car.as_deref().map(title_case).unwrap_or_else(|| "-".to_string())
            ),
            format!("Pickup: {}", self.pickup),
            format!("Date: {} {}", self.date, self.time),
        ];

        if let Some(days) = self.days {
            lines.push(format!("Days: {}", days));
        }
        if let Some(notes) = &self.notes {
            lines.push(format!("Notes: {}", notes));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BookingRequest {
        BookingRequest {
            name: Some("Meera".to_string()),
            phone: Some("9876543210".to_string()),
            service: Some("outstation".to_string()),
            car: Some("premium_suv".to_string()),
            pickup: Some("MG Road".to_string()),
            date: Some("2024-06-01".to_string()),
            time: Some("06:30".to_string()),
            days: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn outstation_booking_message() {
        let booking = request().validate().unwrap();

        assert_eq!(
            booking.message(),
            "*New Booking – RADHA TRAVELS*\n\
             Name: Meera\n\
             Phone: 9876543210\n\
             Email: -\n\
             Service: Outstation\n\
             Car: Premium Suv\n\
             Pickup: MG Road\n\
             Date: 2024-06-01 06:30\n\
             Days: 2"
        );
    }

    #[test]
    fn notes_are_included_and_days_dropped_for_local() {
        let booking = BookingRequest {
            service: Some("local".to_string()),
            notes: Some("Child seat please".to_string()),
            ..request()
        }
        .validate()
        .unwrap();

        assert_eq!(booking.days, None);
        assert!(booking.message().ends_with("Notes: Child seat please"));
    }

    #[test]
    fn phone_must_be_ten_digits() {
        for phone in ["98765", "98765432101", "98765-4321"] {
            let result = BookingRequest {
                phone: Some(phone.to_string()),
                ..request()
            }
            .validate();
            assert!(matches!(result, Err(Error::Validation(_))));
        }
    }

    #[test]
    fn unknown_service_is_rejected() {
        let result = BookingRequest {
            service: Some("helicopter".to_string()),
            ..request()
        }
        .validate();
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn pickup_date_and_time_are_required() {
        let result = BookingRequest {
            time: Some("-".to_string()),
            ..request()
        }
        .validate();

        match result {
            Err(Error::Validation(message)) => {
                assert_eq!(message, "Please fill pickup, date and time.")
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn outstation_needs_a_day_count() {
        for days in [None, Some(0)] {
            let result = BookingRequest { days, ..request() }.validate();
            assert!(matches!(result, Err(Error::Validation(_))));
        }
    }
}
