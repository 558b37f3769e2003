use crate::{
    data_types::{
        fare::{FareRequest, FareResult, ServiceType},
        rates::RateTable,
    },
    error::FareError,
    pricing::format::{AmountFormatter, Passthrough},
};

/// Prices a trip against the rate table, breakdown figures rendered as plain numbers.
pub fn estimate(request: &FareRequest, table: &RateTable) -> Result<FareResult, FareError> {
    estimate_with(request, table, &Passthrough)
}

/// Prices a trip, rendering breakdown money figures with `formatter`.
pub fn estimate_with(
    request: &FareRequest,
    table: &RateTable,
    formatter: &dyn AmountFormatter,
) -> Result<FareResult, FareError> {
    check_quantity("distance", request.distance_km)?;

    match request.service_type {
        ServiceType::Local => local(request, table, formatter),
        ServiceType::Airport => airport(request, table, formatter),
        ServiceType::Outstation => outstation(request, table, formatter),
    }
}

fn check_quantity(name: &str, value: f64) -> Result<f64, FareError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(FareError::InvalidInput(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )))
    }
}

fn local(
    request: &FareRequest,
    table: &RateTable,
    fmt: &dyn AmountFormatter,
) -> Result<FareResult, FareError> {
    let rate = table.local_rate(request.segment)?;
    let duration_hr = check_quantity(
        "duration",
        request.duration_hr.unwrap_or(table.local.base_duration_hr),
    )?;

    let extra_km = (request.distance_km - table.local.base_distance_km).max(0.0);
    let extra_hr = (duration_hr - table.local.base_duration_hr).max(0.0);
    let km_charge = extra_km * rate.extra_per_km;
    let hr_charge = extra_hr * rate.extra_per_hr;

    Ok(FareResult {
        total_amount: rate.base + km_charge + hr_charge,
        breakdown_text: format!(
            "Base {} + {} km × {} ({}) + {} hr × {} ({})",
            fmt.format(rate.base),
            extra_km,
            fmt.format(rate.extra_per_km),
            fmt.format(km_charge),
            extra_hr,
            fmt.format(rate.extra_per_hr),
            fmt.format(hr_charge),
        ),
    })
}

// Quoted "from" price is the midpoint of the pickup and drop fares.
fn airport(
    request: &FareRequest,
    table: &RateTable,
    fmt: &dyn AmountFormatter,
) -> Result<FareResult, FareError> {
    let rate = table.airport_rate(request.segment)?;

    Ok(FareResult {
        total_amount: ((rate.pickup_fare + rate.drop_fare) / 2.0).round(),
        breakdown_text: format!(
            "Pickup {} | Drop {}",
            fmt.format(rate.pickup_fare),
            fmt.format(rate.drop_fare)
        ),
    })
}

fn outstation(
    request: &FareRequest,
    table: &RateTable,
    fmt: &dyn AmountFormatter,
) -> Result<FareResult, FareError> {
    let rate = table.outstation_rate(request.segment)?;
    let days = request.days.unwrap_or(1);
    if days < 1 {
        return Err(FareError::InvalidInput(
            "outstation trips need at least 1 day".to_string(),
        ));
    }

    let minimum_km = rate.min_km_per_day * f64::from(days);
    let chargeable_km = request.distance_km.max(minimum_km);

    Ok(FareResult {
        total_amount: chargeable_km * rate.per_km,
        breakdown_text: format!(
            "Chargeable: {} km × {}/km (min {} km/day × {} days)",
            chargeable_km,
            fmt.format(rate.per_km),
            rate.min_km_per_day,
            days
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{data_types::fare::Segment, pricing::format::Inr};

    fn table() -> RateTable {
        RateTable::default()
    }

    #[test]
    fn local_within_base_allowance_costs_base_fare() {
        let table = table();

        for segment in Segment::ALL {
            let base = table.local_rate(segment).unwrap().base;
            for (km, hr) in [(0.0, 0.0), (40.0, 4.0), (80.0, 8.0), (79.5, 7.9)] {
                let request = FareRequest::new(ServiceType::Local, segment, km).with_duration_hr(hr);
                assert_eq!(estimate(&request, &table).unwrap().total_amount, base);
            }
        }
    }

    #[test]
    fn local_sedan_over_allowance() {
        let request =
            FareRequest::new(ServiceType::Local, Segment::Sedan, 100.0).with_duration_hr(10.0);
        let result = estimate(&request, &table()).unwrap();

        assert_eq!(result.total_amount, 2360.0);
        assert_eq!(
            result.breakdown_text,
            "Base 1800 + 20 km × 14 (280) + 2 hr × 140 (280)"
        );
    }

    #[test]
    fn local_extras_are_additive_and_independent() {
        let table = table();
        let rate = *table.local_rate(Segment::Suv).unwrap();
        let price = |km: f64, hr: f64| {
            let request = FareRequest::new(ServiceType::Local, Segment::Suv, km).with_duration_hr(hr);
            estimate(&request, &table).unwrap().total_amount
        };

        let start = price(90.0, 9.0);
        assert_eq!(price(91.0, 9.0) - start, rate.extra_per_km);
        assert_eq!(price(90.0, 10.0) - start, rate.extra_per_hr);
        assert_eq!(price(91.0, 10.0) - start, rate.extra_per_km + rate.extra_per_hr);
    }

    #[test]
    fn local_duration_defaults_to_base_hours() {
        let request = FareRequest::new(ServiceType::Local, Segment::Hatchback, 80.0);
        assert_eq!(estimate(&request, &table()).unwrap().total_amount, 1000.0);
    }

    #[test]
    fn airport_quotes_midpoint_and_lists_both_fares() {
        let table = table();

        for segment in Segment::ALL {
            let rate = table.airport_rate(segment).unwrap();
            let request = FareRequest::new(ServiceType::Airport, segment, 0.0);
            let result = estimate(&request, &table).unwrap();

            assert_eq!(
                result.total_amount,
                ((rate.pickup_fare + rate.drop_fare) / 2.0).round()
            );
            assert!(result.breakdown_text.contains(&rate.pickup_fare.to_string()));
            assert!(result.breakdown_text.contains(&rate.drop_fare.to_string()));
        }
    }

    #[test]
    fn airport_hatchback() {
        let request = FareRequest::new(ServiceType::Airport, Segment::Hatchback, 12.0);
        let result = estimate(&request, &table()).unwrap();

        assert_eq!(result.total_amount, 1150.0);
        assert_eq!(result.breakdown_text, "Pickup 1200 | Drop 1100");
    }

    #[test]
    fn outstation_bills_at_least_daily_minimum() {
        let table = table();
        let rate = *table.outstation_rate(Segment::Sedan).unwrap();

        for days in 1..=3u32 {
            let minimum = rate.min_km_per_day * f64::from(days);
            for km in [0.0, minimum - 1.0, minimum, minimum + 125.0] {
                let request = FareRequest::new(ServiceType::Outstation, Segment::Sedan, km)
                    .with_days(days);
                let expected = km.max(minimum) * rate.per_km;
                assert_eq!(estimate(&request, &table).unwrap().total_amount, expected);
            }
        }
    }

    #[test]
    fn outstation_suv_single_day_minimum() {
        let request = FareRequest::new(ServiceType::Outstation, Segment::Suv, 250.0).with_days(1);
        let result = estimate(&request, &table()).unwrap();

        assert_eq!(result.total_amount, 5400.0);
        assert_eq!(
            result.breakdown_text,
            "Chargeable: 300 km × 18/km (min 300 km/day × 1 days)"
        );
    }

    #[test]
    fn outstation_days_default_to_one() {
        let request = FareRequest::new(ServiceType::Outstation, Segment::Hatchback, 100.0);
        assert_eq!(estimate(&request, &table()).unwrap().total_amount, 3600.0);
    }

    #[test]
    fn outstation_zero_days_is_rejected() {
        let request = FareRequest::new(ServiceType::Outstation, Segment::Suv, 400.0).with_days(0);
        assert!(matches!(
            estimate(&request, &table()),
            Err(FareError::InvalidInput(_))
        ));
    }

    #[test]
    fn negative_or_nan_quantities_are_rejected() {
        let table = table();
        let negative = FareRequest::new(ServiceType::Airport, Segment::Suv, -1.0);
        let nan_hours =
            FareRequest::new(ServiceType::Local, Segment::Suv, 10.0).with_duration_hr(f64::NAN);

        assert!(estimate(&negative, &table).is_err());
        assert!(estimate(&nan_hours, &table).is_err());
    }

    #[test]
    fn unknown_service_type_yields_no_result() {
        let err = FareRequest::parse("train", "sedan", 100.0, None, None).unwrap_err();
        assert!(matches!(err, FareError::InvalidInput(_)));
    }

    #[test]
    fn caller_formatter_is_used_in_breakdown() {
        let request =
            FareRequest::new(ServiceType::Local, Segment::PremiumSuv, 130.0).with_duration_hr(8.0);
        let result = estimate_with(&request, &table(), &Inr).unwrap();

        assert_eq!(result.total_amount, 4100.0);
        assert_eq!(
            result.breakdown_text,
            "Base ₹3,000 + 50 km × ₹22 (₹1,100) + 0 hr × ₹250 (₹0)"
        );
    }
}
