pub mod connect;
pub mod device_list;
pub mod direct;
pub mod real;

use num_derive::FromPrimitive;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum ResultCode {
    Success = 1,
}

const SUCCESS_MSG: &str = "success";

/* Every websocket response is wrapped in this envelope */
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub result_code: i64,
    #[serde(default)]
    pub result_msg: String,
    #[serde(default)]
    pub result_data: Value,
}

impl Envelope {
    pub fn result_code(&self) -> Option<ResultCode> {
        num::FromPrimitive::from_i64(self.result_code)
    }

    pub fn is_success(&self) -> bool {
        self.result_code() == Some(ResultCode::Success) && self.result_msg == SUCCESS_MSG
    }
}

/// The inverter is not consistent about quoting; accept strings, numbers and null as text.
pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        Value::Null => Ok(String::new()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod test {
    use super::connect::Connect;
    use super::device_list::DeviceList;
    use super::direct::Direct;
    use super::real::RealData;
    use super::{Envelope, ResultCode};
    use std::fs;
    use std::path::PathBuf;

    fn read_resource(filename: &str) -> String {
        let mut d = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        d.push(format!("resources/test/{}", filename));
        fs::read_to_string(d.as_path()).unwrap()
    }

    fn data<T: serde::de::DeserializeOwned>(filename: &str) -> T {
        let envelope: Envelope = serde_json::from_str(&read_resource(filename)).unwrap();
        assert!(envelope.is_success());
        serde_json::from_value(envelope.result_data).unwrap()
    }

    #[test]
    fn connect() {
        let output: Connect = data("connect.json");
        assert_eq!("T", output.token);
    }

    #[test]
    fn connect_failure() {
        let input = read_resource("connect_failure.json");
        let output: Envelope = serde_json::from_str(&input).unwrap();
        assert_eq!(106, output.result_code);
        assert_eq!(None, output.result_code());
        assert!(!output.is_success());
    }

    #[test]
    fn success_code_with_other_message() {
        let output: Envelope = serde_json::from_str(
            r#"{"result_code":1,"result_msg":"fail","result_data":{"token":"T"}}"#,
        )
        .unwrap();
        assert_eq!(Some(ResultCode::Success), output.result_code());
        assert!(!output.is_success());
    }

    #[test]
    fn device_list() {
        let output: DeviceList = data("devicelist.json");
        assert_eq!(2, output.list.len());
        assert_eq!("1", output.list[0].dev_id);
        assert_eq!("2", output.list[1].dev_id);
    }

    #[test]
    fn real() {
        let output: RealData = data("real.json");
        assert_eq!("I18N_COMMON_PV_POWER", output.list[0].data_name);
        assert_eq!("1234", output.list[0].data_value);
        assert_eq!("W", output.list[0].data_unit);
        assert_eq!("", output.list[1].data_unit);
    }

    #[test]
    fn real_battery() {
        let output: RealData = data("real_battery.json");
        assert_eq!("I18N_COMMON_BATTERY_SOC", output.list[0].data_name);
        assert_eq!("87.0", output.list[0].data_value);
        assert_eq!("%", output.list[0].data_unit);
    }

    #[test]
    fn direct() {
        let output: Direct = data("direct.json");
        assert_eq!("I18N_COMMON_STRING_1", output.list[0].name);
        assert_eq!("350.2", output.list[0].voltage);
        assert_eq!("8.1", output.list[0].current);
        assert_eq!("A", output.list[0].current_unit);
    }

    #[test]
    #[should_panic]
    fn invalid_json() {
        let input = read_resource("invalid_json.json");
        let _output: Envelope = serde_json::from_str(&input).unwrap();
    }
}
