//! Server Configuration
//!
//! Settings come from the environment first and can be overridden on the command line:
//!
//! | Variable        | Flag        | Default            |
//! |-----------------|-------------|--------------------|
//! | `HOST`          | `--host`    | `0.0.0.0`          |
//! | `PORT`          | `--port`    | `8000`             |
//! | `REVIEWS_CSV`   | `--data`    | `data/reviews.csv` |
//! | `VADER_LEXICON` | `--lexicon` | built-in lexicon   |

use anyhow::{anyhow, Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATA_PATH: &str = "data/reviews.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub data_path: PathBuf,
    pub lexicon_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Reads the process environment and arguments.
    pub fn load() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_sources(|key| std::env::var(key).ok(), &args)
    }

    /// Builds a config from an environment lookup and command-line arguments
    /// (program name excluded). Flags win over variables.
    pub fn from_sources<F>(env: F, args: &[String]) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut host = env("HOST");
        let mut port = env("PORT");
        let mut data_path = env("REVIEWS_CSV");
        let mut lexicon_path = env("VADER_LEXICON");

        let mut i = 0;
        while i < args.len() {
            let slot = match args[i].as_str() {
                "--host" => &mut host,
                "--port" => &mut port,
                "--data" => &mut data_path,
                "--lexicon" => &mut lexicon_path,
                other => return Err(anyhow!("unknown argument: {}", other)),
            };
            let value = args
                .get(i + 1)
                .ok_or_else(|| anyhow!("{} requires a value", args[i]))?;
            *slot = Some(value.clone());
            i += 2;
        }

        let host: IpAddr = host
            .as_deref()
            .unwrap_or(DEFAULT_HOST)
            .parse()
            .context("invalid host")?;
        let port: u16 = match port {
            Some(p) => p.parse().with_context(|| format!("invalid port '{}'", p))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            data_path: data_path
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            lexicon_path: lexicon_path.map(PathBuf::from),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_sources(env_of(&[]), &[]).unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8000");
        assert_eq!(config.data_path, PathBuf::from("data/reviews.csv"));
        assert!(config.lexicon_path.is_none());
    }

    #[test]
    fn test_env_port() {
        let config = ServerConfig::from_sources(env_of(&[("PORT", "9100")]), &[]).unwrap();
        assert_eq!(config.port, 9100);
    }

    #[test]
    fn test_flags_override_env() {
        let config = ServerConfig::from_sources(
            env_of(&[("PORT", "9100"), ("REVIEWS_CSV", "env.csv")]),
            &args(&["--port", "9200", "--data", "flag.csv", "--host", "127.0.0.1"]),
        )
        .unwrap();

        assert_eq!(config.port, 9200);
        assert_eq!(config.data_path, PathBuf::from("flag.csv"));
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9200");
    }

    #[test]
    fn test_lexicon_path() {
        let config =
            ServerConfig::from_sources(env_of(&[("VADER_LEXICON", "vader.txt")]), &[]).unwrap();
        assert_eq!(config.lexicon_path, Some(PathBuf::from("vader.txt")));
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_sources(env_of(&[("PORT", "eighty")]), &[]).unwrap_err();
        assert!(err.to_string().contains("eighty"));
    }

    #[test]
    fn test_flag_without_value() {
        assert!(ServerConfig::from_sources(env_of(&[]), &args(&["--port"])).is_err());
    }

    #[test]
    fn test_unknown_flag() {
        assert!(ServerConfig::from_sources(env_of(&[]), &args(&["--verbose"])).is_err());
    }
}
