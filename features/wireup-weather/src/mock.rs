use std::sync::Arc;

use wireup_di::{
    errors::ValidationError,
    factories::{BuildContext, ComponentFactory},
    resolver,
    spec::Value,
};

use crate::{
    capability::{SharedWeatherApi, WeatherApi, WeatherObservation},
    errors::WeatherError,
};

/// Test double: answers every query with fixed canned conditions
#[derive(Debug, Clone, PartialEq)]
pub struct MockWeatherApi {
    temp: f64,
    conditions: String,
}

impl MockWeatherApi {
    pub fn new(temp: f64, conditions: impl Into<String>) -> Self {
        MockWeatherApi {
            temp,
            conditions: conditions.into(),
        }
    }

    fn from_args(ctx: &BuildContext<'_>) -> Result<Self, ValidationError> {
        let mut mock = MockWeatherApi {
            temp: 0.0,
            conditions: String::new(),
        };
        mock.assign_temp(ctx.args.required("temp")?)?;
        mock.assign_conditions(ctx.args.required("conditions")?)?;
        Ok(mock)
    }

    /// Validated assignment; a rejected value keeps the previous temperature
    pub fn assign_temp(&mut self, value: &Value) -> Result<(), ValidationError> {
        self.temp = resolver::float_arg("temp", value)?;
        Ok(())
    }

    /// Validated assignment; a rejected value keeps the previous conditions
    pub fn assign_conditions(&mut self, value: &Value) -> Result<(), ValidationError> {
        self.conditions = resolver::str_arg("conditions", value)?;
        Ok(())
    }
}

impl WeatherApi for MockWeatherApi {
    fn current_weather(&self, _city: &str) -> Result<WeatherObservation, WeatherError> {
        Ok(WeatherObservation {
            temp: self.temp,
            conditions: self.conditions.clone(),
        })
    }
}

/// Factory for kind `mock_weather_api`
pub struct MockWeatherFactory;

impl ComponentFactory for MockWeatherFactory {
    type Provides = SharedWeatherApi;
    const KIND: &'static str = "mock_weather_api";

    fn construct(&self, ctx: &BuildContext<'_>) -> Result<SharedWeatherApi, ValidationError> {
        Ok(Arc::new(MockWeatherApi::from_args(ctx)?))
    }
}
