//! Serial numbers.
//!
//! DNS uses 32 bit serial numbers in places that are conceptually the
//! modulus of a larger number space: the SOA serial and the inception and
//! expiration times of RRSIG records. RFC 1982 defines arithmetic and
//! comparison for these values; this module provides the [`Serial`] type
//! implementing those rules atop a native `u32`.

use super::wire::WireError;
use chrono::{NaiveDateTime, TimeZone, Utc};
use core::cmp::Ordering;
use core::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

//------------ Serial --------------------------------------------------------

/// A serial number.
///
/// Serial numbers are compared using the sequence space arithmetic of
/// RFC 1982: a value is considered larger than another if the distance
/// going forward from the other is less than half the number space. This
/// yields only a partial ordering -- two values exactly half the space
/// apart compare as neither smaller nor greater -- so the type implements
/// [`PartialOrd`] but not [`Ord`].
///
/// RRSIG records carry their validity window as serial numbers holding
/// seconds since the Unix epoch, presented in zone files as
/// `YYYYMMDDHHmmSS` in UTC. The [`rrsig_from_str`][Self::rrsig_from_str]
/// and [`rrsig_time`][Self::rrsig_time] methods convert between the two.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Serial(pub u32);

impl Serial {
    /// Returns a serial number for the current Unix time.
    pub fn now() -> Self {
        let now = SystemTime::now();
        let value = match now.duration_since(UNIX_EPOCH) {
            Ok(value) => value.as_secs(),
            Err(_) => 0,
        };
        Serial(value as u32)
    }

    /// Creates a serial number from a raw integer.
    pub const fn from_int(value: u32) -> Self {
        Serial(value)
    }

    /// Returns the serial number as a raw integer.
    pub const fn into_int(self) -> u32 {
        self.0
    }

    /// Adds `other` to `self`, wrapping around the number space.
    ///
    /// RFC 1982 only defines addition of values up to `2^31 - 1`.
    ///
    /// # Panics
    ///
    /// Panics if `other` is larger than `2^31 - 1`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: u32) -> Self {
        assert!(other <= 0x7FFF_FFFF);
        Serial(self.0.wrapping_add(other))
    }

    /// Parses the RRSIG presentation format `YYYYMMDDHHmmSS` in UTC.
    pub fn rrsig_from_str(s: &str) -> Result<Self, WireError> {
        let time = NaiveDateTime::parse_from_str(s, "%Y%m%d%H%M%S")
            .map_err(|_| WireError::Form("invalid RRSIG timestamp"))?;
        Ok(Serial(time.and_utc().timestamp() as u32))
    }

    /// Formats the value as an RRSIG timestamp, `YYYYMMDDHHmmSS` in UTC.
    pub fn rrsig_time(self) -> String {
        match Utc.timestamp_opt(i64::from(self.0), 0).single() {
            Some(time) => time.format("%Y%m%d%H%M%S").to_string(),
            None => self.0.to_string(),
        }
    }
}

//--- From

impl From<u32> for Serial {
    fn from(value: u32) -> Self {
        Serial(value)
    }
}

impl From<Serial> for u32 {
    fn from(value: Serial) -> Self {
        value.0
    }
}

//--- PartialOrd

impl PartialOrd for Serial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.0.cmp(&other.0) {
            Ordering::Equal => Some(Ordering::Equal),
            Ordering::Less => {
                let diff = other.0 - self.0;
                match diff.cmp(&0x8000_0000) {
                    Ordering::Less => Some(Ordering::Less),
                    Ordering::Greater => Some(Ordering::Greater),
                    Ordering::Equal => None,
                }
            }
            Ordering::Greater => {
                let diff = self.0 - other.0;
                match diff.cmp(&0x8000_0000) {
                    Ordering::Less => Some(Ordering::Greater),
                    Ordering::Greater => Some(Ordering::Less),
                    Ordering::Equal => None,
                }
            }
        }
    }
}

//--- Display

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

//============ Test ==========================================================
