//! Layered configuration: defaults, then a TOML file named by
//! `TWENTYONE_CONFIG`, then `TWENTYONE_*` environment variables. Command-line
//! flags are applied last by the command handlers via [`Config::with_overrides`].

use serde::{Deserialize, Serialize};
use std::fs;
use twentyone_engine::bookie::{
    Bookie, DEFAULT_MAX_BALANCE, DEFAULT_MIN_BALANCE, DEFAULT_START,
};
use twentyone_engine::errors::GameError;

pub const CONFIG_ENV: &str = "TWENTYONE_CONFIG";
pub const SEED_ENV: &str = "TWENTYONE_SEED";
pub const START_ENV: &str = "TWENTYONE_START";
pub const MIN_ENV: &str = "TWENTYONE_MIN";
pub const MAX_ENV: &str = "TWENTYONE_MAX";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_balance: i64,
    pub min_balance: i64,
    pub max_balance: i64,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_balance: ValueSource,
    pub min_balance: ValueSource,
    pub max_balance: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_balance: ValueSource::Default,
            min_balance: ValueSource::Default,
            max_balance: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_START,
            min_balance: DEFAULT_MIN_BALANCE,
            max_balance: DEFAULT_MAX_BALANCE,
            seed: None,
        }
    }
}

impl Config {
    /// Apply command-line flags on top of the resolved configuration.
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        start: Option<i64>,
        min: Option<i64>,
        max: Option<i64>,
    ) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(v) = start {
            self.starting_balance = v;
        }
        if let Some(v) = min {
            self.min_balance = v;
        }
        if let Some(v) = max {
            self.max_balance = v;
        }
        self
    }

    pub fn bookie(&self) -> Result<Bookie, GameError> {
        Bookie::new(self.starting_balance, self.min_balance, self.max_balance)
    }

    /// Check the bounds of a fully layered configuration.
    ///
    /// Only meaningful once flags are applied: a file or env bound may be
    /// inverted on its own and still be fixed by a flag.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_balance >= self.max_balance {
            return Err(ConfigError::Invalid(
                "Invalid configuration: min_balance must be below max_balance".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let file: Option<FileConfig> = match std::env::var(CONFIG_ENV) {
        Ok(path) if !path.is_empty() => {
            let s = fs::read_to_string(path)?;
            Some(toml::from_str(&s)?)
        }
        _ => None,
    };
    resolve(file, |key| std::env::var(key).ok())
}

fn resolve<F>(file: Option<FileConfig>, env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(f) = file {
        if let Some(v) = f.starting_balance {
            cfg.starting_balance = v;
            sources.starting_balance = ValueSource::File;
        }
        if let Some(v) = f.min_balance {
            cfg.min_balance = v;
            sources.min_balance = ValueSource::File;
        }
        if let Some(v) = f.max_balance {
            cfg.max_balance = v;
            sources.max_balance = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(seed) = env(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(start) = env(START_ENV)
        && !start.is_empty()
    {
        cfg.starting_balance = start
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting balance".into()))?;
        sources.starting_balance = ValueSource::Env;
    }
    if let Some(min) = env(MIN_ENV)
        && !min.is_empty()
    {
        cfg.min_balance = min
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid min balance".into()))?;
        sources.min_balance = ValueSource::Env;
    }
    if let Some(max) = env(MAX_ENV)
        && !max.is_empty()
    {
        cfg.max_balance = max
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid max balance".into()))?;
        sources.max_balance = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_balance: Option<i64>,
    #[serde(default)]
    min_balance: Option<i64>,
    #[serde(default)]
    max_balance: Option<i64>,
    #[serde(default)]
    seed: Option<u64>,
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
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_match_classic_bankroll() {
        let r = resolve(None, env_of(&[])).unwrap();
        assert_eq!(r.config, Config::default());
        assert_eq!(r.config.starting_balance, 5);
        assert_eq!(r.sources.seed, ValueSource::Default);
    }

    #[test]
    fn env_overrides_file() {
        let file: FileConfig = toml::from_str("seed = 1\nmax_balance = 20").unwrap();
        let r = resolve(Some(file), env_of(&[(SEED_ENV, "9")])).unwrap();
        assert_eq!(r.config.seed, Some(9));
        assert_eq!(r.sources.seed, ValueSource::Env);
        assert_eq!(r.config.max_balance, 20);
        assert_eq!(r.sources.max_balance, ValueSource::File);
        assert_eq!(r.sources.min_balance, ValueSource::Default);
    }

    #[test]
    fn rejects_unparseable_env() {
        let err = resolve(None, env_of(&[(START_ENV, "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_inverted_bounds() {
        let r = resolve(None, env_of(&[(MIN_ENV, "10"), (MAX_ENV, "10")])).unwrap();
        let err = r.config.validate().unwrap_err();
        assert!(err.to_string().contains("min_balance"));
    }

    #[test]
    fn flag_can_repair_env_bound() {
        let r = resolve(None, env_of(&[(MAX_ENV, "0")])).unwrap();
        assert!(r.config.validate().is_err());
        let cfg = r.config.with_overrides(None, None, None, Some(20));
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.bookie().unwrap().max_balance(), 20);
    }

    #[test]
    fn flags_win_over_everything() {
        let cfg = Config::default().with_overrides(Some(3), Some(2), Some(-1), None);
        assert_eq!(cfg.seed, Some(3));
        assert_eq!(cfg.starting_balance, 2);
        assert_eq!(cfg.min_balance, -1);
        assert_eq!(cfg.bookie().unwrap().balance(), 2);
    }
}
