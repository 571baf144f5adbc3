use serde::Deserialize;

/// Sensor readings returned by `/air-data/latest`. Fields missing from the
/// body decode to zero.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Readings {
    pub score: f64,

    pub dew_point: f64,

    pub temp: f64,

    #[serde(rename = "humid")]
    pub humidity: f64,

    #[serde(rename = "abs_humid")]
    pub absolute_humidity: f64,

    pub co2: f64,

    pub co2_est: f64,

    pub co2_est_baseline: f64,

    pub voc: f64,

    pub voc_baseline: f64,

    pub voc_h2_raw: f64,

    pub voc_ethanol_raw: f64,

    pub pm25: f64,

    pub pm10_est: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_body() {
        let body = r#"{"score":85,"dew_point":12.3,"temp":21.5,"humid":40.2,"abs_humid":7.1,"co2":612,"co2_est":600,"co2_est_baseline":4200,"voc":250,"voc_baseline":18000,"voc_h2_raw":12500,"voc_ethanol_raw":18800,"pm25":3,"pm10_est":5}"#;

        let readings: Readings = serde_json::from_str(body).unwrap();

        assert_eq!(readings.score, 85.0);
        assert_eq!(readings.dew_point, 12.3);
        assert_eq!(readings.temp, 21.5);
        assert_eq!(readings.humidity, 40.2);
        assert_eq!(readings.absolute_humidity, 7.1);
        assert_eq!(readings.co2, 612.0);
        assert_eq!(readings.co2_est, 600.0);
        assert_eq!(readings.co2_est_baseline, 4200.0);
        assert_eq!(readings.voc, 250.0);
        assert_eq!(readings.voc_baseline, 18000.0);
        assert_eq!(readings.voc_h2_raw, 12500.0);
        assert_eq!(readings.voc_ethanol_raw, 18800.0);
        assert_eq!(readings.pm25, 3.0);
        assert_eq!(readings.pm10_est, 5.0);
    }

    #[test]
    fn missing_fields_decode_to_zero() {
        let readings: Readings = serde_json::from_str(r#"{"temp":20.1}"#).unwrap();

        assert_eq!(readings.temp, 20.1);
        assert_eq!(readings.score, 0.0);
        assert_eq!(readings.co2, 0.0);
    }

    #[test]
    fn default_is_all_zeroes() {
        assert_eq!(
            Readings::default(),
            serde_json::from_str::<Readings>("{}").unwrap()
        );
    }
}
