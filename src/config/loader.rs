//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::RosterConfig;
use super::secret_string;
use crate::domain::errors::RosterError;
use crate::domain::result::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static ENV_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is a valid regex")
});

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into RosterConfig
/// 4. Applies environment variable overrides (ROSTER_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns `RosterError::Configuration` if the file is missing or
/// unreadable, a referenced variable is unset, the TOML is malformed, or
/// validation fails.
///
/// # Examples
///
/// ```no_run
/// use roster::config::loader::load_config;
///
/// let config = load_config("roster.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<RosterConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(RosterError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        RosterError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents, |key| std::env::var(key).ok())
}

/// Parses configuration text, resolving variables through `lookup`
///
/// `lookup` serves both `${VAR}` placeholders and `ROSTER_*` overrides.
pub fn parse_config<F>(contents: &str, lookup: F) -> Result<RosterConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let contents = substitute_env_vars(contents, &lookup)?;

    let mut config: RosterConfig = toml::from_str(&contents)
        .map_err(|e| RosterError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config, &lookup)?;

    config.validate().map_err(|e| {
        RosterError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes `${VAR_NAME}` placeholders outside comment lines
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars<F>(input: &str, lookup: &F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut missing_vars: Vec<String> = Vec::new();

    let lines: Vec<String> = input
        .lines()
        .map(|line| {
            if line.trim_start().starts_with('#') {
                return line.to_string();
            }

            ENV_PLACEHOLDER
                .replace_all(line, |caps: &regex::Captures<'_>| {
                    let var_name = &caps[1];
                    lookup(var_name).unwrap_or_else(|| {
                        if !missing_vars.iter().any(|v| v == var_name) {
                            missing_vars.push(var_name.to_string());
                        }
                        caps[0].to_string()
                    })
                })
                .into_owned()
        })
        .collect();

    if !missing_vars.is_empty() {
        return Err(RosterError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Applies environment variable overrides using the ROSTER_* prefix
///
/// Variables follow the pattern `ROSTER_<SECTION>_<KEY>`, for example
/// `ROSTER_SQLITE_URL`. Backend sections named by an override are created
/// when absent.
fn apply_env_overrides<F>(config: &mut RosterConfig, lookup: &F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("ROSTER_STORE_BACKEND") {
        config.store_backend = val.parse().map_err(RosterError::Configuration)?;
    }

    if let Some(val) = lookup("ROSTER_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Some(val) = lookup("ROSTER_FILE_PATH") {
        config.file.get_or_insert_with(Default::default).path = val.into();
    }

    if let Some(val) = lookup("ROSTER_POSTGRESQL_CONNECTION_STRING") {
        match config.postgresql {
            Some(ref mut pg) => pg.connection_string = secret_string(val),
            None => {
                config.postgresql = Some(toml::from_str(&format!(
                    "connection_string = {}",
                    toml::Value::String(val)
                ))?)
            }
        }
    }

    if let Some(ref mut pg) = config.postgresql {
        if let Some(val) = lookup("ROSTER_POSTGRESQL_MAX_CONNECTIONS") {
            pg.max_connections = parse_override("ROSTER_POSTGRESQL_MAX_CONNECTIONS", &val)?;
        }
    }

    if let Some(val) = lookup("ROSTER_SQLITE_URL") {
        match config.sqlite {
            Some(ref mut sqlite) => sqlite.url = val,
            None => {
                config.sqlite = Some(toml::from_str(&format!(
                    "url = {}",
                    toml::Value::String(val)
                ))?)
            }
        }
    }

    if let Some(val) = lookup("ROSTER_QUERY_DEFAULT_PAGE_SIZE") {
        config.query.default_page_size = parse_override("ROSTER_QUERY_DEFAULT_PAGE_SIZE", &val)?;
    }

    if let Some(val) = lookup("ROSTER_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_override("ROSTER_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Some(val) = lookup("ROSTER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

fn parse_override<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        RosterError::Configuration(format!("Invalid value '{value}' for {name}"))
    })
}
