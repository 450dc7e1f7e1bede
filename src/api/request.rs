use serde::Serialize;

/// Request envelope shared by every websocket service.
#[derive(Debug, Serialize)]
pub struct Request<'a> {
    pub lang: &'a str,
    pub token: &'a str,
    pub service: &'a str,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub device_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_check_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_id: Option<&'a str>,
}

impl<'a> Request<'a> {
    pub fn new(lang: &'a str, token: &'a str, service: &'a str) -> Self {
        Request {
            lang,
            token,
            service,
            device_type: None,
            is_check_token: None,
            dev_id: None,
        }
    }

    pub fn dev_id(mut self, dev_id: &'a str) -> Self {
        self.dev_id = Some(dev_id);
        self
    }
}
