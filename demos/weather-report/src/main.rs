//! Application driver: loads a specification mapping, resolves the object
//! graph, and prints a daily report.
//!
//! Swapping `mock_weather_api` for `open_weather_map` in the mapping changes
//! which variant the report generator receives; nothing else moves.

use std::{collections::BTreeMap, sync::Arc};

use wireup_di::{ComponentSpec, DynError, GraphBuilder};
use wireup_weather::{
    MockWeatherFactory, OpenWeatherMapFactory, ReportGenerator, ReportGeneratorFactory,
    SharedWeatherApi,
};

/// Stand-in for the configuration layer; a real deployment would merge this
/// mapping from config files and overrides.
const SPECS: &str = r#"
[weather_api]
kind = "mock_weather_api"
args = { temp = 72.0, conditions = "clear" }

[report_generator]
kind = "report_generator"
args = { weather_api = { ref = "weather_api" } }
"#;

fn main() -> Result<(), DynError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let specs: BTreeMap<String, ComponentSpec> = toml::from_str(SPECS)?;

    let registry = GraphBuilder::new()
        .register(OpenWeatherMapFactory)
        .register(MockWeatherFactory)
        .register(ReportGeneratorFactory)
        .with_specs(specs)
        .build();

    // Names missing after resolution are the driver's problem to surface;
    // `extract` fails loudly on them.
    let weather_api = registry.extract::<SharedWeatherApi>("weather_api")?;
    let report_generator = registry.extract::<Arc<ReportGenerator>>("report_generator")?;

    // Both ends of the reference hold the same instance
    assert!(Arc::ptr_eq(&weather_api, report_generator.weather_api()));

    println!("{}", report_generator.create_daily_report("Pittsburgh")?);
    Ok(())
}
