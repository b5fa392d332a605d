//! End-to-end valuation scenarios exercising the public API: period
//! resolution into cash flows, discounting, and rate solving together.

use approx::assert_relative_eq;

use tenor_core::prelude::*;

#[test]
fn investment_round_trip_through_period_strings() {
    // Build the stream entirely from human-entered dates.
    let flows: CashFlowSeries = vec![
        CashFlow::from_periods(-1000.0, &["2020-01-01"]).unwrap(),
        CashFlow::from_periods(400.0, &["2021-01-01"]).unwrap(),
        CashFlow::from_periods(400.0, &["2022-01-01"]).unwrap(),
        CashFlow::from_periods(400.0, &["2023-01-01"]).unwrap(),
    ]
    .into();

    let rate = internal_rate_of_return(&flows).unwrap();

    // The solved rate zeroes the stream's value at its own anchor.
    let anchor = flows.first().unwrap().instant();
    assert!(net_present_value(&flows, &rate, anchor).abs() < 1e-6);

    // Day strings resolve to noon, exactly one calendar year apart, so the
    // spacing stays integral and the rate is economically sensible.
    assert!(rate.to_annual_effective() > 0.09 && rate.to_annual_effective() < 0.11);
}

#[test]
fn npv_matches_closed_form() {
    let t0 = Instant::from_ymd(2020, 1, 1).unwrap();
    let flows: CashFlowSeries = vec![
        CashFlow::new(-1000.0, t0),
        CashFlow::new(400.0, Instant::from_ymd(2021, 1, 1).unwrap()),
        CashFlow::new(400.0, Instant::from_ymd(2022, 1, 1).unwrap()),
        CashFlow::new(400.0, Instant::from_ymd(2023, 1, 1).unwrap()),
    ]
    .into();

    let npv = net_present_value(&flows, &Rate::continuous(0.10), t0);
    assert_relative_eq!(npv, -14.245443281736357, epsilon = 1e-9);
}

#[test]
fn one_year_growth_solves_to_log_rate() {
    let flows: CashFlowSeries = vec![
        CashFlow::from_periods(-100.0, &["2020-01-01"]).unwrap(),
        CashFlow::from_periods(110.0, &["2021-01-01"]).unwrap(),
    ]
    .into();

    let rate = internal_rate_of_return(&flows).unwrap();
    assert_relative_eq!(rate.to_continuous(), 0.09531017980432486, epsilon = 1e-9);
}

#[test]
fn all_positive_stream_has_no_rate() {
    let flows: CashFlowSeries = vec![
        CashFlow::from_periods(10.0, &["2020-01-01"]).unwrap(),
        CashFlow::from_periods(10.0, &["2021-01-01"]).unwrap(),
    ]
    .into();

    assert!(matches!(
        internal_rate_of_return(&flows),
        Err(TenorError::UnbracketableRoot { .. })
    ));
}

#[test]
fn empty_stream_is_rejected() {
    assert!(matches!(
        internal_rate_of_return(&CashFlowSeries::new()),
        Err(TenorError::EmptyCashFlows)
    ));
}

#[test]
fn sorting_orders_flows_without_losing_values() {
    let mut flows: CashFlowSeries = vec![
        CashFlow::from_periods(3.0, &["2026"]).unwrap(),
        CashFlow::from_periods(1.0, &["2024"]).unwrap(),
        CashFlow::from_periods(2.0, &["2025"]).unwrap(),
    ]
    .into();

    flows.sort_by_instant();

    let values: Vec<f64> = flows.iter().map(|cf| cf.value()).collect();
    assert_eq!(values, vec![1.0, 2.0, 3.0]);
    let instants: Vec<Instant> = flows.iter().map(|cf| cf.instant()).collect();
    assert!(instants.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn valuation_date_from_period_range() {
    // A flow known only to have landed somewhere in a date range.
    let flow = CashFlow::from_periods(250.0, &["2020-10-15", "2021-10-14"]).unwrap();
    let lower = resolve_instant(&["2020-10-15"]).unwrap();
    let upper = resolve_instant(&["2021-10-14"]).unwrap();
    assert!(flow.instant() > lower && flow.instant() < upper);

    // Valuing before the range discounts, valuing after compounds.
    let rate = Rate::periodic_effective(0.01, 12.0);
    let before = present_value(&flow, &rate, Instant::from_ymd(2020, 1, 1).unwrap());
    let after = present_value(&flow, &rate, Instant::from_ymd(2023, 1, 1).unwrap());
    assert!(before < 250.0);
    assert!(after > 250.0);
}

#[test]
fn solved_rate_converts_to_any_convention() {
    let flows: CashFlowSeries = vec![
        CashFlow::from_periods(-100.0, &["2020-01-01"]).unwrap(),
        CashFlow::from_periods(110.0, &["2021-01-01"]).unwrap(),
    ]
    .into();

    let solved = internal_rate_of_return(&flows).unwrap();

    // Re-express the answer as a monthly-compounded nominal rate; both
    // spellings must describe the same growth.
    let monthly = Rate::periodic_effective(
        (1.0f64 + solved.to_annual_effective()).powf(1.0 / 12.0) - 1.0,
        12.0,
    );
    assert_relative_eq!(
        monthly.to_continuous(),
        solved.to_continuous(),
        max_relative = 1e-9
    );
}
