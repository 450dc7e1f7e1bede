use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Device {
    #[serde(deserialize_with = "super::text")]
    pub dev_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DeviceList {
    #[serde(default)]
    pub list: Vec<Device>,
}
