use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::announce_config::AnnounceConfig;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::channels_config::ChannelsConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::http_config::HttpConfig;
use crate::config::structs::http_timeout_config::HttpTimeoutConfig;
use crate::config::structs::intervals_config::IntervalsConfig;
use std::fs::File;
use std::io::Write;

impl Configuration {
    #[tracing::instrument(level = "debug")]
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_flushes: true,
            record_announces: false,
            enable_scrape: true,
            enable_metrics: true,
            admin_token: String::from("MyAdminToken"),
            database: DatabaseConfig {
                dsn: String::from(""),
                username: String::from("swarmtrack"),
                password: String::from(""),
                proto: String::from("tcp"),
                addr: String::from("127.0.0.1:3306"),
                database: String::from("swarmtrack"),
                deadlock_pause: 1,
                deadlock_retries: 20,
            },
            channels: ChannelsConfig {
                torrents: 5000,
                users: 5000,
                transfer_history: 5000,
                transfer_ips: 5000,
                snatches: 25,
            },
            intervals: IntervalsConfig {
                announce: 1800,
                min_announce: 900,
                announce_drift: 300,
                peer_inactivity: 3900,
                scrape: 900,
                database_reload: 45,
                database_serialize: 68,
                purge_inactive_peers: 120,
                flush: 5,
            },
            http: HttpConfig {
                addr: String::from("0.0.0.0:34000"),
                proxy_header: String::from("X-Real-IP"),
                timeout: HttpTimeoutConfig {
                    read: 20,
                    write: 20,
                    idle: 60,
                },
            },
            announce: AnnounceConfig {
                strict_port: false,
                numwant: 25,
                max_numwant: 50,
            },
            cache: CacheConfig {
                torrents: String::from("torrent-cache.bin"),
                users: String::from("user-cache.bin"),
            },
        }
    }

    #[tracing::instrument(level = "debug")]
    pub fn load(data: &[u8]) -> Result<Configuration, serde_json::Error> {
        serde_json::from_slice(data)
    }

    #[tracing::instrument(level = "debug")]
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

    #[tracing::instrument(level = "debug")]
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

    #[tracing::instrument(level = "debug")]
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config;
        match Configuration::load_file(path) {
            Ok(c) => { config = c; }
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");
                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create config file automatically"));
                }
                eprintln!("Creating config file..");
                let config_json = serde_json::to_string_pretty(&Configuration::init()).unwrap();
                return match Configuration::save_file(path, config_json) {
                    Ok(_) => {
                        eprintln!("Please edit the {path} in the root folder, exiting now...");
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                };
            }
        }
        Self::validate(&config)?;
        Ok(config)
    }

    #[tracing::instrument(level = "debug")]
    pub fn validate(config: &Configuration) -> Result<(), CustomError> {
        if config.announce.max_numwant == 0 {
            return Err(CustomError::new("announce.max_numwant must be at least 1"));
        }
        if config.announce.numwant > config.announce.max_numwant {
            return Err(CustomError::new("announce.numwant must not exceed announce.max_numwant"));
        }
        if config.intervals.min_announce > config.intervals.announce {
            return Err(CustomError::new("intervals.min_announce must not exceed intervals.announce"));
        }
        if config.http.timeout.write == 0 {
            return Err(CustomError::new("http.timeout.write must be at least 1 second"));
        }
        if config.database.deadlock_retries == 0 {
            return Err(CustomError::new("database.deadlock_retries must be at least 1"));
        }
        Ok(())
    }

    /// The DSN handed to sqlx: either the configured `dsn` verbatim or one
    /// composed from the individual fields.
    #[tracing::instrument(level = "debug")]
    pub fn build_dsn(&self) -> String {
        if !self.database.dsn.is_empty() {
            return self.database.dsn.clone();
        }
        match self.database.proto.as_str() {
            "unix" => format!(
                "mysql://{}:{}@localhost/{}?socket={}",
                self.database.username,
                self.database.password,
                self.database.database,
                self.database.addr
            ),
            _ => format!(
                "mysql://{}:{}@{}/{}",
                self.database.username,
                self.database.password,
                self.database.addr,
                self.database.database
            ),
        }
    }
}
