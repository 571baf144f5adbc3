use serde::Deserialize;

/// Device configuration returned by `/settings/config/data`. Fields missing
/// from the body decode to their zero value.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    pub device_uuid: String,

    pub wifi_mac: String,

    pub ssid: String,

    pub ip: String,

    pub netmask: String,

    pub gateway: String,

    pub fw_version: String,

    pub timezone: String,

    pub display: String,

    pub led: LedSettings,

    pub voc_feature_set: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LedSettings {
    #[serde(rename = "Mode")]
    pub mode: String,

    #[serde(rename = "Brightness")]
    pub brightness: u32,
}
