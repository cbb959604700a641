use serde::{Deserialize, Deserializer, de::DeserializeOwned};

/// Response of the OpenWeather "current weather" endpoint.
///
/// Every field tolerates being absent, `null` or of the wrong type and falls
/// back to its default, so upstream schema drift never fails a lookup.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurrentWeather {
    #[serde(deserialize_with = "lenient")]
    pub coord: Coord,
    #[serde(deserialize_with = "lenient")]
    pub weather: Vec<Condition>,
    #[serde(deserialize_with = "lenient")]
    pub base: String,
    #[serde(deserialize_with = "lenient")]
    pub main: Readings,
    #[serde(deserialize_with = "lenient")]
    pub visibility: i64,
    #[serde(deserialize_with = "lenient")]
    pub wind: Wind,
    #[serde(deserialize_with = "lenient")]
    pub clouds: Clouds,
    #[serde(deserialize_with = "lenient")]
    pub dt: i64,
    #[serde(deserialize_with = "lenient")]
    pub sys: Sys,
    #[serde(deserialize_with = "lenient")]
    pub timezone: i64,
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub cod: i64,
}

impl CurrentWeather {
    /// The first reported condition; the provider lists the dominant one first.
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Coord {
    #[serde(deserialize_with = "lenient")]
    pub lon: f64,
    #[serde(deserialize_with = "lenient")]
    pub lat: f64,
}

/// One weather-condition entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Condition {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(deserialize_with = "lenient")]
    pub main: String,
    #[serde(deserialize_with = "lenient")]
    pub description: String,
    #[serde(deserialize_with = "lenient")]
    pub icon: String,
}

/// Temperatures in degrees Celsius (metric units), pressure and humidity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Readings {
    #[serde(deserialize_with = "lenient")]
    pub temp: f64,
    #[serde(deserialize_with = "lenient")]
    pub pressure: f64,
    #[serde(deserialize_with = "lenient")]
    pub humidity: i64,
    #[serde(deserialize_with = "lenient")]
    pub temp_min: f64,
    #[serde(deserialize_with = "lenient")]
    pub temp_max: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Wind {
    #[serde(deserialize_with = "lenient")]
    pub speed: f64,
    #[serde(deserialize_with = "lenient")]
    pub deg: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Clouds {
    #[serde(deserialize_with = "lenient")]
    pub all: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Sys {
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub kind: i64,
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(deserialize_with = "lenient")]
    pub message: f64,
    #[serde(deserialize_with = "lenient")]
    pub country: String,
    #[serde(deserialize_with = "lenient")]
    pub sunrise: i64,
    #[serde(deserialize_with = "lenient")]
    pub sunset: i64,
}

/// Decode a field, substituting the default for any value of the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_payload() {
        let body = json!({
            "coord": {"lon": -0.13, "lat": 51.51},
            "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
            "base": "stations",
            "main": {"temp": 10.5, "pressure": 1012, "humidity": 81, "temp_min": 8.0, "temp_max": 12.0},
            "visibility": 10000,
            "wind": {"speed": 4.1, "deg": 80},
            "clouds": {"all": 0},
            "dt": 1_700_000_000,
            "sys": {"type": 1, "id": 1414, "message": 0.0, "country": "GB", "sunrise": 1, "sunset": 2},
            "timezone": 0,
            "id": 2643743,
            "name": "London",
            "cod": 200
        });

        let w: CurrentWeather = serde_json::from_value(body).unwrap();

        assert_eq!(w.name, "London");
        assert_eq!(w.main.temp, 10.5);
        assert_eq!(w.main.temp_max, 12.0);
        assert_eq!(w.main.temp_min, 8.0);
        assert_eq!(w.main.pressure, 1012.0);
        assert_eq!(w.sys.kind, 1);
        assert_eq!(w.sys.country, "GB");
        assert_eq!(w.wind.deg, 80);

        let cond = w.primary_condition().expect("one condition");
        assert_eq!(cond.icon, "01d");
        assert_eq!(cond.description, "clear sky");
        assert_eq!(w.dt, 1_700_000_000);
    }

    #[test]
    fn missing_fields_default() {
        let w: CurrentWeather = serde_json::from_str(r#"{"name": "Oslo"}"#).unwrap();

        assert_eq!(w.name, "Oslo");
        assert_eq!(w.main, Readings::default());
        assert!(w.weather.is_empty());
        assert!(w.primary_condition().is_none());
        assert_eq!(w.dt, 0);
    }

    #[test]
    fn mistyped_fields_default_without_failing_siblings() {
        let body = r#"{
            "name": 42,
            "main": {"temp": "warm", "temp_max": 3.5, "temp_min": null},
            "weather": [{"icon": 1, "description": "fog"}],
            "wind": "calm",
            "cod": "404"
        }"#;

        let w: CurrentWeather = serde_json::from_str(body).unwrap();

        assert_eq!(w.name, "");
        assert_eq!(w.main.temp, 0.0);
        assert_eq!(w.main.temp_max, 3.5);
        assert_eq!(w.main.temp_min, 0.0);
        assert_eq!(w.weather[0].icon, "");
        assert_eq!(w.weather[0].description, "fog");
        assert_eq!(w.wind, Wind::default());
        assert_eq!(w.cod, 0);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let w: CurrentWeather =
            serde_json::from_str(r#"{"name": "Rome", "rain": {"1h": 0.2}}"#).unwrap();
        assert_eq!(w.name, "Rome");
    }
}
