use serde_derive::Serialize;

use crate::{
    data_types::{fare::Segment, rates::RateTable},
    pricing::format::AmountFormatter,
};

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RateCardRow {
    pub service: String,
    pub rate: String,
}

/// Published tariff for one vehicle segment, shown in the fleet popup
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RateCard {
    pub segment: Segment,
    pub label: &'static str,
    pub rows: Vec<RateCardRow>,
}

pub fn rate_card(segment: Segment, table: &RateTable, fmt: &dyn AmountFormatter) -> RateCard {
    let mut rows = Vec::new();

    if let Some(local) = table.local.per_segment.get(&segment) {
        rows.push(RateCardRow {
            service: format!(
                "Local ({}Hr / {}Km)",
                table.local.base_duration_hr, table.local.base_distance_km
            ),
            rate: format!(
                "{} + {}/km + {}/hr",
                fmt.format(local.base),
                fmt.format(local.extra_per_km),
                fmt.format(local.extra_per_hr)
            ),
        });
    }

    if let Some(outstation) = table.outstation.per_segment.get(&segment) {
        rows.push(RateCardRow {
            service: "Outstation".to_string(),
            rate: format!(
                "{}/km (Min. {} km/day)",
                fmt.format(outstation.per_km),
                outstation.min_km_per_day
            ),
        });
    }

    if let Some(airport) = table.airport.per_segment.get(&segment) {
        rows.push(RateCardRow {
            service: "Airport".to_string(),
            rate: format!(
                "Pickup {} / Drop {}",
                fmt.format(airport.pickup_fare),
                fmt.format(airport.drop_fare)
            ),
        });
    }

    RateCard {
        segment,
        label: segment.label(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::format::Inr;

    #[test]
    fn sedan_card_lists_all_services() {
        let card = rate_card(Segment::Sedan, &RateTable::default(), &Inr);

        assert_eq!(card.label, "Sedan");
        assert_eq!(
            card.rows,
            vec![
                RateCardRow {
                    service: "Local (8Hr / 80Km)".to_string(),
                    rate: "₹1,800 + ₹14/km + ₹140/hr".to_string(),
                },
                RateCardRow {
                    service: "Outstation".to_string(),
                    rate: "₹14/km (Min. 300 km/day)".to_string(),
                },
                RateCardRow {
                    service: "Airport".to_string(),
                    rate: "Pickup ₹1,500 / Drop ₹1,200".to_string(),
                },
            ]
        );
    }
}
