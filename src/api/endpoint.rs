pub type Endpoint = str;

pub const OVERVIEW: &Endpoint = "/ws/home/overview";
pub const I18N: &Endpoint = "/i18n";

pub const FALLBACK_LOCALE: &str = "en_US";

pub type Service = str;

pub const CONNECT: &Service = "connect";
pub const DEVICE_LIST: &Service = "devicelist";
pub const REAL: &Service = "real";
pub const REAL_BATTERY: &Service = "real_battery";
pub const DIRECT: &Service = "direct";
