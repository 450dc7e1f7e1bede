use indexmap::IndexMap;
use std::collections::HashMap;

/// Locale string table, `key=value` lines of an i18n properties document.
pub type Strings = HashMap<String, String>;

/// Readings keyed by identifier, in the order the inverter reported them.
pub type Readings = IndexMap<String, InverterReading>;

pub const DEFAULT_PORT: u16 = 8082;
pub const DEFAULT_LOCALE: &str = "en_US";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InverterReading {
    /// Raw vendor identifier, e.g. `I18N_COMMON_PV_POWER`
    pub name: String,
    pub description: String,
    pub value: String,
    pub unit: String,
}

#[derive(Debug, Clone)]
pub struct Api {
    pub host: String,
    pub port: u16,
    pub locale: String,
}

impl Api {
    pub fn ws_url(&self, path: &str) -> String {
        format!("ws://{}:{}{}", self.host, self.port, path)
    }

    pub fn http_url(&self) -> String {
        format!("http://{}", self.host)
    }
}

/// State carried between the steps of one websocket exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: String,
    pub dev_id: Option<String>,
}
