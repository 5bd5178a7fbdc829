/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// Blank values count as missing, so `GROWGURU_NEWS_URL=` in a `.env` file
/// falls back to the default instead of producing an empty URL.
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the environment variable is missing, blank or unparsable
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match read_non_blank(env_var) {
        Some(val) => val.parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}: {} ({:?}), using default", env_var, val, e);
            default
        }),
        None => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found, blank or invalid
///
/// # Arguments
/// * `env_var` - Name of the environment variable
///
/// # Returns
/// Parsed value if found and valid, None otherwise
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    read_non_blank(env_var).and_then(|val| val.parse::<T>().ok())
}

fn read_non_blank(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
