use crate::catalog::{Paginator, SortOrder, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::{env, fmt::Display, num::NonZeroUsize, str::FromStr};
use thiserror::Error;
use tracing::{info, warn};

pub const PAGE_SIZE_VAR: &str = "CATALOG_PAGE_SIZE";
pub const ACTOR_BUFFER_VAR: &str = "CATALOG_ACTOR_BUFFER";
pub const DEFAULT_SORT_VAR: &str = "CATALOG_DEFAULT_SORT";

const DEFAULT_ACTOR_BUFFER: NonZeroUsize = match NonZeroUsize::new(32) {
    Some(size) => size,
    None => unreachable!(),
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for a catalog system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Products per dashboard page.
    pub page_size: NonZeroUsize,
    /// Request channel capacity of the product actor.
    pub actor_buffer: NonZeroUsize,
    pub default_sort: SortOrder,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            actor_buffer: DEFAULT_ACTOR_BUFFER,
            default_sort: SortOrder::Ascending,
        }
    }
}

impl CatalogConfig {
    /// Read `CATALOG_*` variables, falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            page_size: try_load(&lookup, PAGE_SIZE_VAR, defaults.page_size)?,
            actor_buffer: try_load(&lookup, ACTOR_BUFFER_VAR, defaults.actor_buffer)?,
            default_sort: try_load(&lookup, DEFAULT_SORT_VAR, defaults.default_sort)?,
        })
    }

    pub fn paginator(&self) -> Paginator {
        Paginator::new(self.page_size)
    }
}

fn try_load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return Ok(default);
    };
    raw.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }
    })
}
