//! Snowflake ID - 64-bit time-ordered identifier used for every row
//!
//! Layout:
//! - Bits 63-22: milliseconds since [`Snowflake::EPOCH`]
//! - Bits 21-12: worker ID (0-1023)
//! - Bits 11-0:  per-millisecond sequence (0-4095)
//!
//! IDs sort by creation time, which is what "newest first" listings rely on.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Time-ordered 64-bit identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Custom epoch: 2025-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_735_689_600_000;

    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Milliseconds since the Unix epoch at which this ID was minted
    #[inline]
    pub fn timestamp(&self) -> i64 {
        (self.0 >> 22) + Self::EPOCH
    }

    #[inline]
    pub fn worker_id(&self) -> u16 {
        ((self.0 >> 12) & 0x3FF) as u16
    }

    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        s.trim()
            .parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .map(Snowflake)
            .ok_or(SnowflakeParseError::InvalidFormat)
    }
}

/// Error when parsing a Snowflake from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid id format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snowflake::parse(s)
    }
}

// Serialized as a string so browsers never round it through a double
impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

// Accepts either `"123"` or `123`; QR payloads and form fields send both
impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct SnowflakeVisitor;

        impl Visitor<'_> for SnowflakeVisitor {
            type Value = Snowflake;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer id")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Snowflake, E> {
                Ok(Snowflake(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Snowflake, E> {
                i64::try_from(value)
                    .map(Snowflake)
                    .map_err(|_| de::Error::custom("id out of range"))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Snowflake, E> {
                Snowflake::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(SnowflakeVisitor)
    }
}

/// Lock-free Snowflake generator, up to 4096 IDs per millisecond per worker
pub struct SnowflakeGenerator {
    worker_id: u16,
    /// `last_timestamp << 12 | sequence`, swapped as one word
    state: AtomicI64,
}

impl SnowflakeGenerator {
    const SEQUENCE_MASK: i64 = 0xFFF;

    /// # Panics
    /// Panics if `worker_id >= 1024`
    pub fn new(worker_id: u16) -> Self {
        assert!(worker_id < 1024, "Worker ID must be < 1024");
        Self {
            worker_id,
            state: AtomicI64::new(0),
        }
    }

    pub fn generate(&self) -> Snowflake {
        loop {
            let now = Self::now_millis();
            let prev = self.state.load(Ordering::Acquire);
            let last = prev >> 12;
            let last_seq = prev & Self::SEQUENCE_MASK;

            // A clock that went backwards keeps minting on the last timestamp
            let (timestamp, sequence) = if now > last {
                (now, 0)
            } else if last_seq < Self::SEQUENCE_MASK {
                (last, last_seq + 1)
            } else {
                std::hint::spin_loop();
                continue;
            };

            if self
                .state
                .compare_exchange(
                    prev,
                    (timestamp << 12) | sequence,
                    Ordering::AcqRel,
                    Ordering::Relaxed,
                )
                .is_ok()
            {
                let id = ((timestamp - Snowflake::EPOCH) << 22)
                    | (i64::from(self.worker_id) << 12)
                    | sequence;
                return Snowflake::new(id);
            }
        }
    }

    #[inline]
    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}
