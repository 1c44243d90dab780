//! End-to-end resolution scenarios over the weather components

use std::{collections::BTreeMap, sync::Arc};

use wireup_di::{ComponentSpec, GraphBuilder, Value};
use wireup_weather::{
    MockWeatherFactory, OpenWeatherMapFactory, ReportGenerator, ReportGeneratorFactory,
    SharedWeatherApi, WeatherError,
};

fn weather_builder() -> GraphBuilder {
    GraphBuilder::new()
        .register(OpenWeatherMapFactory)
        .register(MockWeatherFactory)
        .register(ReportGeneratorFactory)
}

fn mock_spec(temp: f64, conditions: &str) -> ComponentSpec {
    ComponentSpec::new("mock_weather_api")
        .with_arg("temp", temp)
        .with_arg("conditions", conditions)
}

fn report_spec(reference: &str) -> ComponentSpec {
    ComponentSpec::new("report_generator").with_arg("weather_api", Value::reference(reference))
}

#[test]
fn resolves_regardless_of_declaration_order() {
    let report_first = weather_builder()
        .with_spec("report_generator", report_spec("weather_api"))
        .with_spec("weather_api", mock_spec(72.0, "clear"))
        .build();
    assert!(report_first.contains("weather_api"));
    assert!(report_first.contains("report_generator"));

    let weather_first = weather_builder()
        .with_spec("weather_api", mock_spec(72.0, "clear"))
        .with_spec("report_generator", report_spec("weather_api"))
        .build();
    assert!(weather_first.contains("weather_api"));
    assert!(weather_first.contains("report_generator"));
}

#[test]
fn the_injected_handle_is_the_registered_instance() {
    let registry = weather_builder()
        .with_spec("report_generator", report_spec("weather_api"))
        .with_spec("weather_api", mock_spec(72.0, "clear"))
        .build();

    let api = registry.extract::<SharedWeatherApi>("weather_api").unwrap();
    let report = registry
        .extract::<Arc<ReportGenerator>>("report_generator")
        .unwrap();
    assert!(Arc::ptr_eq(&api, report.weather_api()));
}

#[test]
fn two_dependents_share_one_instance() {
    let registry = weather_builder()
        .with_spec("morning_report", report_spec("weather_api"))
        .with_spec("evening_report", report_spec("weather_api"))
        .with_spec("weather_api", mock_spec(11.0, "drizzle"))
        .build();

    let morning = registry
        .extract::<Arc<ReportGenerator>>("morning_report")
        .unwrap();
    let evening = registry
        .extract::<Arc<ReportGenerator>>("evening_report")
        .unwrap();
    assert!(Arc::ptr_eq(morning.weather_api(), evening.weather_api()));
}

#[test]
fn the_mock_report_embeds_the_canned_data() {
    let registry = weather_builder()
        .with_spec("report_generator", report_spec("weather_api"))
        .with_spec("weather_api", mock_spec(72.0, "clear"))
        .build();

    let report = registry
        .extract::<Arc<ReportGenerator>>("report_generator")
        .unwrap();
    assert_eq!(
        report.create_daily_report("Pittsburgh").unwrap(),
        "Weather in Pittsburgh: 72°C, clear",
    );
}

#[test]
fn the_live_client_rejects_queries_until_wired() {
    let registry = weather_builder()
        .with_spec("report_generator", report_spec("weather_api"))
        .with_spec(
            "weather_api",
            ComponentSpec::new("open_weather_map").with_arg("api_key", "abc123"),
        )
        .build();

    let report = registry
        .extract::<Arc<ReportGenerator>>("report_generator")
        .unwrap();
    assert_eq!(
        report.create_daily_report("Pittsburgh").unwrap_err(),
        WeatherError::Unimplemented {
            provider: "OpenWeatherMap",
        },
    );
}

#[test]
fn a_typoed_reference_drops_the_dependent_without_failing_the_run() {
    let registry = weather_builder()
        .with_spec("weather_api", mock_spec(10.0, "fog"))
        .with_spec("report_generator", report_spec("weather_apj"))
        .build();

    assert!(registry.contains("weather_api"));
    assert!(!registry.contains("report_generator"));
}

#[test]
fn try_build_names_the_leftovers() {
    let error = weather_builder()
        .with_spec("report_generator", report_spec("nowhere"))
        .try_build()
        .unwrap_err();

    assert_eq!(error.entries.len(), 1);
    assert_eq!(error.entries[0].name, "report_generator");
}

#[test]
fn mutually_referencing_reports_are_both_dropped() {
    let registry = weather_builder()
        .with_spec("x", report_spec("y"))
        .with_spec("y", report_spec("x"))
        .build();

    assert!(registry.is_empty());
}

#[test]
fn reassignment_re_resolves_against_the_current_registry() {
    let registry = weather_builder()
        .with_spec("weather_api", mock_spec(72.0, "clear"))
        .with_spec("backup_api", mock_spec(5.0, "sleet"))
        .build();

    let mut report =
        ReportGenerator::new(registry.extract::<SharedWeatherApi>("weather_api").unwrap());
    assert_eq!(
        report.create_daily_report("Oslo").unwrap(),
        "Weather in Oslo: 72°C, clear",
    );

    report
        .assign_weather_api(&Value::reference("backup_api"), &registry)
        .unwrap();
    assert_eq!(
        report.create_daily_report("Oslo").unwrap(),
        "Weather in Oslo: 5°C, sleet",
    );

    // A rejected reassignment keeps the resolved handle
    assert!(report
        .assign_weather_api(&Value::reference("missing"), &registry)
        .is_err());
    assert_eq!(
        report.create_daily_report("Oslo").unwrap(),
        "Weather in Oslo: 5°C, sleet",
    );
}

#[test]
fn the_full_mapping_loads_from_toml() {
    let config = r#"
        [weather_api]
        kind = "mock_weather_api"
        args = { temp = 72.0, conditions = "clear" }

        [report_generator]
        kind = "report_generator"
        args = { weather_api = { ref = "weather_api" } }
    "#;

    let specs: BTreeMap<String, ComponentSpec> = toml::from_str(config).expect("should parse");
    let registry = weather_builder().with_specs(specs).build();

    let report = registry
        .extract::<Arc<ReportGenerator>>("report_generator")
        .unwrap();
    assert_eq!(
        report.create_daily_report("Pittsburgh").unwrap(),
        "Weather in Pittsburgh: 72°C, clear",
    );
}
