/// Serde helper functions for custom serialization/deserialization
use serde::{Deserialize, Deserializer, Serializer};
use std::time::SystemTime;

use super::timespec::{from_timespec, to_timespec};

const MICROS_PER_SEC: i64 = 1_000_000;

fn to_micros(time: &SystemTime) -> i64 {
    let (sec, nsec) = to_timespec(*time);
    sec.saturating_mul(MICROS_PER_SEC)
        .saturating_add(nsec / 1_000)
}

fn from_micros(micros: i64) -> SystemTime {
    let sec = micros.div_euclid(MICROS_PER_SEC);
    let nsec = micros.rem_euclid(MICROS_PER_SEC) * 1_000;
    from_timespec(sec, nsec)
}

/// Serialize SystemTime as signed microseconds since UNIX epoch
///
/// Signed so that pre-epoch timestamps read from a stat structure survive.
pub mod system_time_micros {
    use super::*;

    pub fn serialize<S>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(to_micros(time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SystemTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = i64::deserialize(deserializer)?;
        Ok(from_micros(micros))
    }
}

/// Serialize Option<SystemTime> as Option<microseconds>
pub mod optional_system_time_micros {
    use super::*;

    pub fn serialize<S>(time: &Option<SystemTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_some(&to_micros(t)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SystemTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt = Option::<i64>::deserialize(deserializer)?;
        Ok(opt.map(from_micros))
    }
}

/// Skip serializing if Option is None
pub fn is_none<T>(value: &Option<T>) -> bool {
    value.is_none()
}

/// Skip serializing if value is zero
pub fn is_zero_u64(value: &u64) -> bool {
    *value == 0
}

/// Skip serializing if value is zero
pub fn is_zero_u32(value: &u32) -> bool {
    *value == 0
}
