//! Platform domain types

use std::fmt;
use std::str::FromStr;

use crate::error::{PrepareError, platform};

/// Mobile platform a native build targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    /// Value passed to the bundler's `--platform` argument
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = PrepareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            _ => Err(platform::not_supported(s)),
        }
    }
}
