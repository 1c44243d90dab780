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

/// Live variant backed by the OpenWeatherMap HTTP API.
///
/// Only the construction and validation surface is wired; queries fail until
/// the HTTP integration lands.
#[derive(Debug, Clone)]
pub struct OpenWeatherMapClient {
    api_key: String,
}

impl OpenWeatherMapClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ValidationError> {
        let mut client = OpenWeatherMapClient {
            api_key: String::new(),
        };
        client.assign_api_key(&Value::Str(api_key.into()))?;
        Ok(client)
    }

    fn from_args(ctx: &BuildContext<'_>) -> Result<Self, ValidationError> {
        let mut client = OpenWeatherMapClient {
            api_key: String::new(),
        };
        client.assign_api_key(ctx.args.required("api_key")?)?;
        Ok(client)
    }

    /// Validated assignment; a rejected value leaves the previous key in place
    pub fn assign_api_key(&mut self, value: &Value) -> Result<(), ValidationError> {
        let api_key = resolver::str_arg("api_key", value)?;
        if api_key.is_empty() {
            return Err(ValidationError::Invalid {
                argument: "api_key",
                reason: "must not be empty",
            });
        }

        self.api_key = api_key;
        Ok(())
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl WeatherApi for OpenWeatherMapClient {
    fn current_weather(&self, _city: &str) -> Result<WeatherObservation, WeatherError> {
        Err(WeatherError::Unimplemented {
            provider: "OpenWeatherMap",
        })
    }
}

/// Factory for kind `open_weather_map`
pub struct OpenWeatherMapFactory;

impl ComponentFactory for OpenWeatherMapFactory {
    type Provides = SharedWeatherApi;
    const KIND: &'static str = "open_weather_map";

    fn construct(&self, ctx: &BuildContext<'_>) -> Result<SharedWeatherApi, ValidationError> {
        Ok(Arc::new(OpenWeatherMapClient::from_args(ctx)?))
    }
}
