use serde::Deserialize;

/* One PV string */
#[derive(Debug, Deserialize)]
pub struct StringItem {
    pub name: String,
    #[serde(deserialize_with = "super::text")]
    pub voltage: String,
    #[serde(default, deserialize_with = "super::text")]
    pub voltage_unit: String,
    #[serde(deserialize_with = "super::text")]
    pub current: String,
    #[serde(default, deserialize_with = "super::text")]
    pub current_unit: String,
}

#[derive(Debug, Deserialize)]
pub struct Direct {
    #[serde(default)]
    pub list: Vec<StringItem>,
}
