use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub static_dir: String,
    pub teacher_rps: u32,
    pub public_rps: u32,
    pub default_teacher_name: String,
    pub default_teacher_code: String,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "./public".to_string()),
            teacher_rps: get_env_parse_or("TEACHER_RPS", 50)?,
            public_rps: get_env_parse_or("PUBLIC_RPS", 100)?,
            default_teacher_name: env::var("DEFAULT_TEACHER_NAME")
                .unwrap_or_else(|_| "أحمد".to_string()),
            default_teacher_code: env::var("DEFAULT_TEACHER_CODE")
                .unwrap_or_else(|_| "TCH123".to_string()),
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
