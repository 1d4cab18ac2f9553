use serde::{Deserialize, Serialize};
use std::fs;
use std::str::FromStr;

use pokerbots_ai::is_known_policy;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub seed: Option<u64>,
    pub rounds: u32,
    pub p1: String,
    pub p2: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub seed: ValueSource,
    pub rounds: ValueSource,
    pub p1: ValueSource,
    pub p2: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            seed: ValueSource::Default,
            rounds: ValueSource::Default,
            p1: ValueSource::Default,
            p2: ValueSource::Default,
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
            starting_stack: pokerbots_engine::game::STARTING_STACK,
            small_blind: pokerbots_engine::game::SMALL_BLIND,
            seed: None,
            rounds: 100,
            p1: "random".into(),
            p2: "random".into(),
        }
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
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Defaults, then the TOML file named by `POKERBOTS_CONFIG`, then
/// `POKERBOTS_*` variables. Command-line flags are applied by the caller.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("POKERBOTS_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.rounds {
            cfg.rounds = v;
            sources.rounds = ValueSource::File;
        }
        if let Some(v) = f.p1 {
            cfg.p1 = v;
            sources.p1 = ValueSource::File;
        }
        if let Some(v) = f.p2 {
            cfg.p2 = v;
            sources.p2 = ValueSource::File;
        }
    }

    if let Some(v) = env_value("POKERBOTS_STARTING_STACK", "starting stack")? {
        cfg.starting_stack = v;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(v) = env_value("POKERBOTS_SMALL_BLIND", "small blind")? {
        cfg.small_blind = v;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(v) = env_value("POKERBOTS_SEED", "seed")? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value("POKERBOTS_ROUNDS", "rounds")? {
        cfg.rounds = v;
        sources.rounds = ValueSource::Env;
    }
    if let Some(v) = env_value::<String>("POKERBOTS_P1", "p1")? {
        cfg.p1 = v;
        sources.p1 = ValueSource::Env;
    }
    if let Some(v) = env_value::<String>("POKERBOTS_P2", "p2")? {
        cfg.p2 = v;
        sources.p2 = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    rounds: Option<u32>,
    #[serde(default)]
    p1: Option<String>,
    #[serde(default)]
    p2: Option<String>,
}

fn env_value<T: FromStr>(key: &str, label: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", label, v))),
        _ => Ok(None),
    }
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    if cfg.small_blind == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: small_blind must be >0".into(),
        ));
    }
    if cfg.starting_stack.checked_mul(2).is_none() {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: starting_stack must be <={}",
            u32::MAX / 2
        )));
    }
    if cfg.small_blind.checked_mul(2).is_none() {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: small_blind must be <={}",
            u32::MAX / 2
        )));
    }
    if cfg.rounds == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: rounds must be >=1".into(),
        ));
    }
    for name in [&cfg.p1, &cfg.p2] {
        if !is_known_policy(name) {
            return Err(ConfigError::Invalid(format!(
                "Invalid configuration: unknown policy '{}'",
                name
            )));
        }
    }
    Ok(())
}
