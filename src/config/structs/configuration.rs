use serde::{Deserialize, Serialize};
use crate::config::structs::https_server_config::HttpsServerConfig;
use crate::config::structs::reloader_config::ReloaderConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub reloader: ReloaderConfig,
    #[serde(default)]
    pub https_server: Vec<HttpsServerConfig>
}
