//! Syslog severities carried in the GELF `level` field.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GelfLevel {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    #[default]
    Informational,
    Debug,
}

impl GelfLevel {
    /// Numeric syslog code written to the wire.
    pub fn code(self) -> u8 {
        match self {
            GelfLevel::Emergency => 0,
            GelfLevel::Alert => 1,
            GelfLevel::Critical => 2,
            GelfLevel::Error => 3,
            GelfLevel::Warning => 4,
            GelfLevel::Notice => 5,
            GelfLevel::Informational => 6,
            GelfLevel::Debug => 7,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Emergency),
            1 => Some(Self::Alert),
            2 => Some(Self::Critical),
            3 => Some(Self::Error),
            4 => Some(Self::Warning),
            5 => Some(Self::Notice),
            6 => Some(Self::Informational),
            7 => Some(Self::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for GelfLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GelfLevel::Emergency => "EMERGENCY",
            GelfLevel::Alert => "ALERT",
            GelfLevel::Critical => "CRITICAL",
            GelfLevel::Error => "ERROR",
            GelfLevel::Warning => "WARNING",
            GelfLevel::Notice => "NOTICE",
            GelfLevel::Informational => "INFO",
            GelfLevel::Debug => "DEBUG",
        };
        f.write_str(s)
    }
}

impl FromStr for GelfLevel {
    type Err = ();

    /// Accepts syslog names (case-insensitive) or the numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<u8>() {
            return Self::from_code(code).ok_or(());
        }
        match s.to_ascii_uppercase().as_str() {
            "EMERGENCY" | "EMERG" => Ok(Self::Emergency),
            "ALERT" => Ok(Self::Alert),
            "CRITICAL" | "CRIT" => Ok(Self::Critical),
            "ERROR" | "ERR" => Ok(Self::Error),
            "WARNING" | "WARN" => Ok(Self::Warning),
            "NOTICE" => Ok(Self::Notice),
            "INFO" | "INFORMATIONAL" => Ok(Self::Informational),
            "DEBUG" => Ok(Self::Debug),
            _ => Err(()),
        }
    }
}

impl Serialize for GelfLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}
