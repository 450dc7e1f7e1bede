use serde::Deserialize;

/* Shared by the `real` and `real_battery` services */
#[derive(Debug, Deserialize)]
pub struct DataItem {
    pub data_name: String,
    #[serde(deserialize_with = "super::text")]
    pub data_value: String,
    #[serde(default, deserialize_with = "super::text")]
    pub data_unit: String,
}

#[derive(Debug, Deserialize)]
pub struct RealData {
    #[serde(default)]
    pub list: Vec<DataItem>,
}
