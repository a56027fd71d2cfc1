//! Projection of absolute instants into a fixed local time zone.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// Maps an absolute instant to wall-clock time in a target zone.
///
/// Implementations must be pure: the same instant always projects to the same
/// local time.
pub trait TimeZoneProjector {
    fn project(&self, instant: DateTime<Utc>) -> DateTime<Tz>;
}

impl<F> TimeZoneProjector for F
where
    F: Fn(DateTime<Utc>) -> DateTime<Tz>,
{
    fn project(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        self(instant)
    }
}

/// Projector backed by an IANA zone from the tz database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneProjector {
    zone: Tz,
}

impl ZoneProjector {
    /// Resolve a zone name such as `America/Los_Angeles`.
    pub fn new(zone_name: &str) -> Result<Self> {
        let zone: Tz = zone_name
            .trim()
            .parse()
            .map_err(|e| Error::Projection(format!("unknown time zone {:?}: {}", zone_name, e)))?;
        Ok(Self { zone })
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }
}

impl From<Tz> for ZoneProjector {
    fn from(zone: Tz) -> Self {
        Self { zone }
    }
}

impl TimeZoneProjector for ZoneProjector {
    fn project(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.zone)
    }
}
