use crate::base58_check::{prefix, Decoder, Prefix};
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, env, error, fmt};

pub const PREFIXES_VARIABLE: &str = "BASE58_CHECK_PREFIXES";
pub const FALLBACK_PREFIX_LEN_VARIABLE: &str = "BASE58_CHECK_FALLBACK_PREFIX_LEN";

#[derive(Debug)]
pub enum Error {
    InvalidVariable { key: &'static str, value: String },
    InvalidJson(serde_json::Error),
    EmptyPrefix { name: String },
    ZeroFallbackPrefixLen,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidVariable { key, value } => write!(f, "Invalid {} {}", key, value),
            Error::InvalidJson(error) => write!(f, "Invalid configuration: {}", error),
            Error::EmptyPrefix { name } => write!(f, "Prefix {} has no bytes", name),
            Error::ZeroFallbackPrefixLen => write!(f, "Fallback prefix length must be at least 1"),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::InvalidJson(error)
    }
}

const fn default_fallback_prefix_len() -> usize {
    1
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    prefixes: Cow<'static, [Prefix]>,
    #[serde(default = "default_fallback_prefix_len")]
    fallback_prefix_len: usize,
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn var_map<T, E>(key: &'static str, f: impl FnOnce(&str) -> Result<T, E>, default: T) -> Result<T, Error> {
    match var(key) {
        Some(value) => f(&value).map_err(|_| Error::InvalidVariable { key, value }),
        None => Ok(default),
    }
}

impl Configuration {
    pub const BITCOIN: Configuration = Configuration {
        prefixes: Cow::Borrowed(prefix::BITCOIN),
        fallback_prefix_len: default_fallback_prefix_len(),
    };

    pub fn new(prefixes: Vec<Prefix>, fallback_prefix_len: usize) -> Result<Self, Error> {
        Self {
            prefixes: Cow::Owned(prefixes),
            fallback_prefix_len,
        }
        .validate()
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        let configuration: Self = serde_json::from_str(json)?;
        configuration.validate()
    }

    /// Reads `BASE58_CHECK_PREFIXES` (a JSON array of prefixes) and
    /// `BASE58_CHECK_FALLBACK_PREFIX_LEN`; unset variables keep the Bitcoin defaults.
    pub fn from_env() -> Result<Self, Error> {
        let prefixes = match var(PREFIXES_VARIABLE) {
            Some(json) => Cow::Owned(serde_json::from_str::<Vec<Prefix>>(&json)?),
            None => Cow::Borrowed(prefix::BITCOIN),
        };
        let fallback_prefix_len = var_map(FALLBACK_PREFIX_LEN_VARIABLE, |len| len.parse(), default_fallback_prefix_len())?;
        Self {
            prefixes,
            fallback_prefix_len,
        }
        .validate()
    }

    fn validate(self) -> Result<Self, Error> {
        if self.fallback_prefix_len == 0 {
            return Err(Error::ZeroFallbackPrefixLen);
        }
        if let Some(prefix) = self.prefixes.iter().find(|prefix| prefix.is_empty()) {
            return Err(Error::EmptyPrefix {
                name: prefix.name().to_string(),
            });
        }
        Ok(self)
    }

    pub fn prefixes(&self) -> &[Prefix] {
        &self.prefixes
    }

    pub fn fallback_prefix_len(&self) -> usize {
        self.fallback_prefix_len
    }

    /// Fewest prefix bytes any decoded body can be split at.
    pub fn min_prefix_len(&self) -> usize {
        self.prefixes
            .iter()
            .map(|prefix| prefix.len())
            .fold(self.fallback_prefix_len, usize::min)
    }

    /// Longest known prefix that `body` starts with.
    pub fn match_prefix(&self, body: &[u8]) -> Option<&Prefix> {
        self.prefixes
            .iter()
            .filter(|prefix| body.starts_with(prefix.bytes()))
            .max_by_key(|prefix| prefix.len())
    }

    pub fn decoder(&self) -> Decoder<'_> {
        Decoder::new(self)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::BITCOIN
    }
}
