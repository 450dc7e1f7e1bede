use super::endpoint;
use super::error::Error;
use super::i18n::lookup_or_default;
use super::request::Request;
use super::response::connect::Connect;
use super::response::device_list::DeviceList;
use super::response::direct::{Direct, StringItem};
use super::response::real::{DataItem, RealData};
use crate::model::{InverterReading, SessionState, Strings};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

const COMMON_PREFIX: &str = "I18N_COMMON_";
const PREFIX: &str = "I18N_";

/// One request/response round trip of the overview exchange, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Connect,
    DeviceList,
    Real,
    RealBattery,
    Direct,
}

pub const STAGES: [Stage; 5] = [
    Stage::Connect,
    Stage::DeviceList,
    Stage::Real,
    Stage::RealBattery,
    Stage::Direct,
];

#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Continue(SessionState),
    Stop,
}

pub type Entries = Vec<(String, InverterReading)>;

impl Stage {
    pub fn service(self) -> &'static str {
        match self {
            Stage::Connect => endpoint::CONNECT,
            Stage::DeviceList => endpoint::DEVICE_LIST,
            Stage::Real => endpoint::REAL,
            Stage::RealBattery => endpoint::REAL_BATTERY,
            Stage::Direct => endpoint::DIRECT,
        }
    }

    pub fn request<'a>(self, lang: &'a str, state: &'a SessionState) -> Request<'a> {
        let request = Request::new(lang, &state.token, self.service());
        match self {
            Stage::Connect => request,
            Stage::DeviceList => Request {
                device_type: Some("0"),
                is_check_token: Some("0"),
                ..request
            },
            Stage::Real | Stage::RealBattery | Stage::Direct => match state.dev_id.as_deref() {
                Some(dev_id) => request.dev_id(dev_id),
                None => request,
            },
        }
    }

    /// Consume the payload of a successful response.
    pub fn apply(
        self,
        data: &Value,
        state: SessionState,
        strings: &Strings,
    ) -> Result<(Step, Entries), Error> {
        match self {
            Stage::Connect => {
                let connect: Connect = decode(data)?;
                let next = SessionState {
                    token: connect.token,
                    ..state
                };
                Ok((Step::Continue(next), Vec::new()))
            }
            Stage::DeviceList => {
                let devices: DeviceList = decode(data)?;
                match devices.list.into_iter().next() {
                    Some(device) => {
                        log::debug!("using device {}", device.dev_id);
                        let next = SessionState {
                            dev_id: Some(device.dev_id),
                            ..state
                        };
                        Ok((Step::Continue(next), Vec::new()))
                    }
                    None => {
                        log::warn!("inverter reported no devices");
                        Ok((Step::Stop, Vec::new()))
                    }
                }
            }
            Stage::Real => {
                let real: RealData = decode(data)?;
                let entries = real
                    .list
                    .into_iter()
                    .map(|item| data_reading(item, strings, true))
                    .collect();
                Ok((Step::Continue(state), entries))
            }
            Stage::RealBattery => {
                let battery: RealData = decode(data)?;
                let entries = battery
                    .list
                    .into_iter()
                    .map(|item| data_reading(item, strings, false))
                    .collect();
                Ok((Step::Continue(state), entries))
            }
            Stage::Direct => {
                let direct: Direct = decode(data)?;
                let entries = direct
                    .list
                    .into_iter()
                    .flat_map(|item| string_readings(item, strings))
                    .collect();
                Ok((Step::Continue(state), entries))
            }
        }
    }
}

fn decode<T: DeserializeOwned>(data: &Value) -> Result<T, Error> {
    T::deserialize(data).map_err(|e| Error::InvalidResponse(data.to_string(), e.to_string()))
}

/// `I18N_COMMON_PV_POWER` -> `pv_power`, `I18N_GRID_FREQUENCY` -> `grid_frequency`
pub fn identifier(name: &str) -> String {
    name.strip_prefix(COMMON_PREFIX)
        .or_else(|| name.strip_prefix(PREFIX))
        .unwrap_or(name)
        .to_lowercase()
}

fn data_reading(item: DataItem, strings: &Strings, translate_value: bool) -> (String, InverterReading) {
    let value = if translate_value {
        lookup_or_default(strings, &item.data_value).to_string()
    } else {
        item.data_value
    };
    let reading = InverterReading {
        description: lookup_or_default(strings, &item.data_name).to_string(),
        value,
        unit: item.data_unit,
        name: item.data_name,
    };
    (identifier(&reading.name), reading)
}

/// Display label of a PV string. Numbered names such as `I18N_COMMON_STRING_1` are rendered
/// through the template stored under the name without its trailing index.
pub fn string_label(name: &str, strings: &Strings) -> String {
    if !name.starts_with(COMMON_PREFIX) {
        return name.to_string();
    }

    let mut chars = name.chars();
    let index = chars.next_back().map(String::from).unwrap_or_default();
    let key = chars.as_str();

    match strings.get(key) {
        Some(template) => template.replace("{0}", &index).replacen("{}", &index, 1),
        None => {
            log::warn!("no string template {} for {}", key, name);
            name.to_string()
        }
    }
}

fn string_readings(item: StringItem, strings: &Strings) -> Entries {
    let label = string_label(&item.name, strings);
    let voltage = format!("{} Voltage", label);
    let current = format!("{} Current", label);

    vec![
        (
            voltage.to_lowercase().replace(' ', "_"),
            InverterReading {
                name: item.name.clone(),
                description: voltage,
                value: item.voltage,
                unit: item.voltage_unit,
            },
        ),
        (
            current.to_lowercase().replace(' ', "_"),
            InverterReading {
                name: item.name,
                description: current,
                value: item.current,
                unit: item.current_unit,
            },
        ),
    ]
}
