use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::https_server_config::HttpsServerConfig;
use crate::config::structs::reloader_config::ReloaderConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            reloader: ReloaderConfig::default(),
            https_server: vec!(
                HttpsServerConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:8443"),
                    ssl_cert: String::from("cert.pem"),
                    ssl_key: String::from("key.pem"),
                    threads: Some(available_parallelism().map(|n| n.get() as u64).unwrap_or(1)),
                    keep_alive: Some(60),
                    request_timeout: Some(15),
                    disconnect_timeout: Some(15)
                }
            )
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                let config_toml = match toml::to_string(&Configuration::init()) {
                    Ok(data) => data,
                    Err(e) => {
                        eprintln!("{e}");
                        return Err(CustomError::new("could not serialize the default configuration"));
                    }
                };
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit the {path} file, exiting now...");
                        Err(CustomError::new(&format!("create {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(e) = config.validate() {
            eprintln!("{e}");
            return Err(CustomError::new(&e.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!("Unknown log level: '{}'", self.log_level)));
        }
        if self.reloader.resubscribe_attempts == 0 {
            return Err(ConfigurationError::ValidationError(String::from("reloader.resubscribe_attempts must be at least 1")));
        }
        if self.reloader.notification_buffer == 0 {
            return Err(ConfigurationError::ValidationError(String::from("reloader.notification_buffer must be at least 1")));
        }
        for server in self.https_server.iter().filter(|server| server.enabled) {
            if server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::ValidationError(format!("[HTTPS] Invalid bind address: '{}'", server.bind_address)));
            }
            if server.ssl_cert.is_empty() || server.ssl_key.is_empty() {
                return Err(ConfigurationError::ValidationError(format!("[HTTPS {}] No SSL key or SSL certificate given", server.bind_address)));
            }
        }
        Ok(())
    }
}
