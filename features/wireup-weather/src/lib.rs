//! Weather components for the wireup object graph.
//!
//! The crate defines one capability - answering current-weather queries -
//! with two interchangeable variants behind it, plus a report generator that
//! consumes the capability without ever learning which variant the registry
//! bound under the name it references.
//!
//! Wireup Weather consists of the following components:
//!
//! 1. Capability - the [WeatherApi] contract and its injectable handle
//! 2. Variants - the live [OpenWeatherMapClient] and the canned [MockWeatherApi]
//! 3. Report - the [ReportGenerator] consuming whichever variant was bound
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use wireup_di::{ComponentSpec, GraphBuilder, Value};
//! use wireup_weather::{MockWeatherFactory, ReportGenerator, ReportGeneratorFactory};
//!
//! let registry = GraphBuilder::new()
//!     .register(MockWeatherFactory)
//!     .register(ReportGeneratorFactory)
//!     .with_spec(
//!         "report_generator",
//!         ComponentSpec::new("report_generator")
//!             .with_arg("weather_api", Value::reference("weather_api")),
//!     )
//!     .with_spec(
//!         "weather_api",
//!         ComponentSpec::new("mock_weather_api")
//!             .with_arg("temp", 21.5)
//!             .with_arg("conditions", "overcast"),
//!     )
//!     .build();
//!
//! let report = registry
//!     .extract::<Arc<ReportGenerator>>("report_generator")
//!     .unwrap();
//! assert_eq!(
//!     report.create_daily_report("Graz").unwrap(),
//!     "Weather in Graz: 21.5°C, overcast",
//! );
//! ```

pub mod capability;
pub mod errors;
pub mod mock;
pub mod openweather;
pub mod report;

pub use capability::{SharedWeatherApi, WeatherApi, WeatherObservation};
pub use errors::WeatherError;
pub use mock::{MockWeatherApi, MockWeatherFactory};
pub use openweather::{OpenWeatherMapClient, OpenWeatherMapFactory};
pub use report::{ReportGenerator, ReportGeneratorFactory};
