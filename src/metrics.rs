use prometheus::core::{Collector as _, Desc};
use prometheus::{GaugeVec, Opts, Registry};

use crate::awair::{DeviceConfig, Readings};

const NAMESPACE: &str = "awair";

/// The fixed gauge families exposed for one device: fourteen numeric gauges
/// labeled by `device_uuid`, plus one informational gauge.
pub struct DeviceMetrics {
    score: GaugeVec,
    dew_point: GaugeVec,
    temp: GaugeVec,
    humidity: GaugeVec,
    absolute_humidity: GaugeVec,
    co2: GaugeVec,
    co2_est: GaugeVec,
    co2_est_baseline: GaugeVec,
    voc: GaugeVec,
    voc_baseline: GaugeVec,
    voc_h2_raw: GaugeVec,
    voc_ethanol_raw: GaugeVec,
    pm25: GaugeVec,
    pm10: GaugeVec,
    device_info: GaugeVec,
}

fn reading_gauge(name: &str, help: &str) -> Result<GaugeVec, prometheus::Error> {
    GaugeVec::new(Opts::new(name, help).namespace(NAMESPACE), &["device_uuid"])
}

impl DeviceMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        Ok(Self {
            score: reading_gauge("score", "Awair Score (0-100)")?,
            dew_point: reading_gauge(
                "dew_point",
                "The temperature at which water will condense and form into dew (ºC)",
            )?,
            temp: reading_gauge("temp", "Dry bulb temperature (ºC)")?,
            humidity: reading_gauge("humidity", "Relative Humidity (%)")?,
            absolute_humidity: reading_gauge("absolute_humidity", "Absolute Humidity (g/m³)")?,
            co2: reading_gauge("co2", "Carbon Dioxide (ppm)")?,
            co2_est: reading_gauge(
                "co2_est",
                "Estimated Carbon Dioxide (ppm - calculated by the TVOC sensor)",
            )?,
            co2_est_baseline: reading_gauge(
                "co2_est_baseline",
                "A unitless value that represents the baseline from which the TVOC sensor partially derives its estimated (e)CO₂ output.",
            )?,
            voc: reading_gauge("voc", "Total Volatile Organic Compounds (ppb)")?,
            voc_baseline: reading_gauge(
                "voc_baseline",
                "A unitless value that represents the baseline from which the TVOC sensor partially derives its TVOC output.",
            )?,
            voc_h2_raw: reading_gauge(
                "voc_h2_raw",
                "A unitless value that represents the Hydrogen gas signal from which the TVOC sensor partially derives its TVOC output.",
            )?,
            voc_ethanol_raw: reading_gauge(
                "voc_ethanol_raw",
                "A unitless value that represents the Ethanol gas signal from which the TVOC sensor partially derives its TVOC output.",
            )?,
            pm25: reading_gauge(
                "pm25",
                "Particulate matter less than 2.5 microns in diameter (µg/m³)",
            )?,
            pm10: reading_gauge(
                "pm10",
                "Estimated particulate matter less than 10 microns in diameter (µg/m³ - calculated by the PM2.5 sensor)",
            )?,
            device_info: GaugeVec::new(
                Opts::new("device_info", "Info about the Awair device").namespace(NAMESPACE),
                &["device_uuid", "firmware_version", "voc_feature_set"],
            )?,
        })
    }

    pub fn register(&self, registry: &Registry) -> Result<(), prometheus::Error> {
        for gauge in self.reading_gauges() {
            registry.register(Box::new(gauge.clone()))?;
        }
        registry.register(Box::new(self.device_info.clone()))
    }

    /// Enumerates the fifteen descriptors, numeric gauges first, independent
    /// of any collection cycle.
    pub fn describe(&self) -> Vec<&Desc> {
        let mut descs = Vec::with_capacity(15);
        for gauge in self.reading_gauges() {
            descs.extend(gauge.desc());
        }
        descs.extend(self.device_info.desc());
        descs
    }

    /// Records one collection cycle. A missing record collapses to its
    /// zero-valued default here, at the emission boundary: absent readings
    /// emit zeroes, an absent configuration emits empty label values. Every
    /// family is reset first so each cycle leaves exactly one series per
    /// family, even when label values change between cycles.
    pub fn record(&self, readings: Option<&Readings>, config: Option<&DeviceConfig>) {
        let values = readings.cloned().unwrap_or_default();
        let device_uuid = config.map(|c| c.device_uuid.as_str()).unwrap_or("");

        for gauge in self.reading_gauges() {
            gauge.reset();
        }

        self.score.with_label_values(&[device_uuid]).set(values.score);
        self.dew_point
            .with_label_values(&[device_uuid])
            .set(values.dew_point);
        self.temp.with_label_values(&[device_uuid]).set(values.temp);
        self.humidity
            .with_label_values(&[device_uuid])
            .set(values.humidity);
        self.absolute_humidity
            .with_label_values(&[device_uuid])
            .set(values.absolute_humidity);
        self.co2.with_label_values(&[device_uuid]).set(values.co2);
        self.co2_est
            .with_label_values(&[device_uuid])
            .set(values.co2_est);
        self.co2_est_baseline
            .with_label_values(&[device_uuid])
            .set(values.co2_est_baseline);
        self.voc.with_label_values(&[device_uuid]).set(values.voc);
        self.voc_baseline
            .with_label_values(&[device_uuid])
            .set(values.voc_baseline);
        self.voc_h2_raw
            .with_label_values(&[device_uuid])
            .set(values.voc_h2_raw);
        self.voc_ethanol_raw
            .with_label_values(&[device_uuid])
            .set(values.voc_ethanol_raw);
        self.pm25.with_label_values(&[device_uuid]).set(values.pm25);
        self.pm10
            .with_label_values(&[device_uuid])
            .set(values.pm10_est);

        let firmware_version = config.map(|c| c.fw_version.as_str()).unwrap_or("");
        let voc_feature_set = config
            .map(|c| c.voc_feature_set.to_string())
            .unwrap_or_default();

        self.device_info.reset();
        self.device_info
            .with_label_values(&[device_uuid, firmware_version, voc_feature_set.as_str()])
            .set(1.0);
    }

    fn reading_gauges(&self) -> [&GaugeVec; 14] {
        [
            &self.score,
            &self.dew_point,
            &self.temp,
            &self.humidity,
            &self.absolute_humidity,
            &self.co2,
            &self.co2_est,
            &self.co2_est_baseline,
            &self.voc,
            &self.voc_baseline,
            &self.voc_h2_raw,
            &self.voc_ethanol_raw,
            &self.pm25,
            &self.pm10,
        ]
    }
}
