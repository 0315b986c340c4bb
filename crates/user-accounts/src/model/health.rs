use serde::{Deserialize, Serialize};

/// Status of one subsystem at the moment of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub service: String,
    pub status: String,
    pub time: String,
}

impl Health {
    pub const OK: &'static str = "OK";
    pub const ERR: &'static str = "err";

    pub fn new(service: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            status: status.into(),
            time: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Self::OK
    }
}
