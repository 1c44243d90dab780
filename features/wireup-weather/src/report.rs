use std::sync::Arc;

use wireup_di::{
    errors::ValidationError,
    factories::{BuildContext, ComponentFactory},
    registry::Registry,
    resolver,
    spec::Value,
};

use crate::{capability::SharedWeatherApi, errors::WeatherError};

/// Builds human-readable daily reports on top of whatever weather capability
/// was bound under the referenced name.
pub struct ReportGenerator {
    weather_api: SharedWeatherApi,
}

impl ReportGenerator {
    pub fn new(weather_api: SharedWeatherApi) -> Self {
        ReportGenerator { weather_api }
    }

    fn from_args(ctx: &BuildContext<'_>) -> Result<Self, ValidationError> {
        let weather_api = resolver::injected::<SharedWeatherApi>(
            "weather_api",
            ctx.args.required("weather_api")?,
            ctx.registry,
        )?;
        Ok(ReportGenerator { weather_api })
    }

    /// Validated reassignment, resolved against the registry's current
    /// contents; a rejected value keeps the previous handle.
    pub fn assign_weather_api(
        &mut self,
        value: &Value,
        registry: &Registry,
    ) -> Result<(), ValidationError> {
        self.weather_api = resolver::injected::<SharedWeatherApi>("weather_api", value, registry)?;
        Ok(())
    }

    pub fn weather_api(&self) -> &SharedWeatherApi {
        &self.weather_api
    }

    pub fn create_daily_report(&self, city: &str) -> Result<String, WeatherError> {
        let weather = self.weather_api.current_weather(city)?;
        Ok(format!(
            "Weather in {city}: {temp}°C, {conditions}",
            temp = weather.temp,
            conditions = weather.conditions,
        ))
    }
}

/// Factory for kind `report_generator`
pub struct ReportGeneratorFactory;

impl ComponentFactory for ReportGeneratorFactory {
    type Provides = Arc<ReportGenerator>;
    const KIND: &'static str = "report_generator";

    fn construct(&self, ctx: &BuildContext<'_>) -> Result<Arc<ReportGenerator>, ValidationError> {
        Ok(Arc::new(ReportGenerator::from_args(ctx)?))
    }
}
