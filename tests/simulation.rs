use br_precatorio::comparison::{MAX_ANNUAL_RATE_PCT, MAX_FACE_VALUE, MAX_PERIOD_YEARS};
use br_precatorio::{AcquisitionInput, Benchmark, CostKind, SimulatorConfig, simulate};
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_json_output_shape() {
    let input = AcquisitionInput::new(dec!(100000), dec!(14.75), 5).unwrap();
    let simulation = simulate(&input, &SimulatorConfig::default()).unwrap();
    let json = serde_json::to_value(&simulation).unwrap();

    assert_eq!(json["acquisition"]["input"]["period_years"], 5);
    assert_eq!(json["acquisition"]["total_cost"], "64000.00");
    assert_eq!(json["acquisition"]["cost_breakdown"]["entries"][0]["kind"], "acquisition");
    assert_eq!(json["acquisition"]["cost_breakdown"]["entries"][4]["kind"], "deed");
    assert_eq!(json["comparison"]["rows"].as_array().unwrap().len(), 4);
    assert_eq!(json["comparison"]["rows"][0]["benchmark"], "precatorio");
    assert_eq!(json["comparison"]["rows"][3]["benchmark"], "tesouro_selic");
}

#[test]
fn test_simulation_round_trips_through_json() {
    let input = AcquisitionInput::new(dec!(350000), dec!(10.5), 7).unwrap();
    let simulation = simulate(&input, &SimulatorConfig::default()).unwrap();

    let raw = serde_json::to_string(&simulation).unwrap();
    let parsed: br_precatorio::Simulation = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, simulation);
}

#[rstest]
#[case(dec!(10000), dec!(14.75), 1)]
#[case(dec!(100000), dec!(14.75), 5)]
#[case(dec!(1000000), dec!(10.5), 3)]
#[case(dec!(5000000), dec!(0), 10)]
fn test_simulations_are_consistent(
    #[case] face_value: Decimal,
    #[case] rate_pct: Decimal,
    #[case] years: u32,
) {
    let input = AcquisitionInput::new(face_value, rate_pct, years).unwrap();
    let simulation = simulate(&input, &SimulatorConfig::default()).unwrap();
    let acquisition = &simulation.acquisition;

    assert_eq!(acquisition.total_cost, acquisition.cost_breakdown.total());
    assert_eq!(acquisition.gross_profit, acquisition.future_value - acquisition.total_cost);
    assert!(acquisition.future_value >= face_value);
    assert!(
        acquisition
            .cost_breakdown
            .get(CostKind::Deed)
            .is_some_and(|deed| deed >= dec!(2500))
    );

    for row in &simulation.comparison.rows {
        assert_eq!(row.principal, acquisition.total_cost);
        assert_eq!(row.profit, row.future_value - row.principal);
    }

    let selic = simulation.comparison.get(Benchmark::TesouroSelic).unwrap();
    let cdb = simulation.comparison.get(Benchmark::Cdb).unwrap();
    assert!(cdb.future_value <= selic.future_value);
}

#[test]
fn test_largest_accepted_inputs_do_not_overflow() {
    let config = SimulatorConfig::from_json_str(
        r#"{ "costs": { "acquisition_rate": "1", "intermediation_rate": "1", "monitoring_rate": "1", "deed_rate": "1" },
             "benchmarks": { "savings_annual_rate": "1", "cdb_cdi_share": "2" } }"#,
    )
    .unwrap();
    let input = AcquisitionInput::new(MAX_FACE_VALUE, MAX_ANNUAL_RATE_PCT, MAX_PERIOD_YEARS).unwrap();

    let simulation = simulate(&input, &config).unwrap();
    assert!(simulation.comparison.rows.iter().all(|row| row.future_value > row.principal));
}

#[test]
fn test_tiny_cost_with_large_face_value_does_not_overflow() {
    let config = SimulatorConfig::from_json_str(
        r#"{ "costs": { "acquisition_rate": "0", "intermediation_rate": "0", "monitoring_rate": "0",
                        "deed_rate": "0", "deed_minimum": "0.01", "habilitation_fee": "0" } }"#,
    )
    .unwrap();
    let input = AcquisitionInput::new(MAX_FACE_VALUE, MAX_ANNUAL_RATE_PCT, MAX_PERIOD_YEARS).unwrap();

    let simulation = simulate(&input, &config).unwrap();
    assert_eq!(simulation.acquisition.total_cost, dec!(0.01));
    assert!(simulation.acquisition.annualized_return_pct > dec!(1000));
}
