use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HttpsServerConfig {
    pub enabled: bool,
    pub bind_address: String,
    pub ssl_cert: String,
    pub ssl_key: String,
    pub threads: Option<u64>,
    pub keep_alive: Option<u64>,
    pub request_timeout: Option<u64>,
    pub disconnect_timeout: Option<u64>
}
