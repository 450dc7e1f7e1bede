use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Connect {
    pub token: String,
}
