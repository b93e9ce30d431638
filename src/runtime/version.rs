//! Runtime version numbers

use std::fmt;
use std::str::FromStr;

/// A `major.minor.patch` version as printed by `node --version`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = String;

    /// Accepts `v18.2.0`, `18.2.0`, `18.2` and `18`; pre-release and build
    /// suffixes are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let core = trimmed
            .strip_prefix('v')
            .unwrap_or(trimmed)
            .split(['-', '+'])
            .next()
            .unwrap_or_default();

        let mut numbers = [0u64; 3];
        let mut count = 0;
        for part in core.split('.') {
            if count == numbers.len() {
                return Err(format!("too many components in version '{trimmed}'"));
            }
            numbers[count] = part
                .parse()
                .map_err(|_| format!("invalid version '{trimmed}'"))?;
            count += 1;
        }

        Ok(Self::new(numbers[0], numbers[1], numbers[2]))
    }
}
