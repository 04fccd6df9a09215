//! Service status resolver.
//!
//! Opening hours form the half-open window `[open, close)` within one day.
//! Windows that cross midnight (close before open) are not supported and
//! always resolve as closed.

use std::fmt;

use serde::Serialize;

use crate::clock::WallClock;
use crate::snapshot::{Service, ServiceCategory};

/// The time worth showing next to a service's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Boundary {
    /// Open now; closes at this time.
    Until(WallClock),
    /// Closed now; opens at this time.
    Opens(WallClock),
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Until(t) => write!(f, "Until {}", t.to_12h()),
            Self::Opens(t) => write!(f, "Opens {}", t.to_12h()),
        }
    }
}

impl From<Boundary> for String {
    fn from(value: Boundary) -> Self {
        value.to_string()
    }
}

/// Result of [`resolve_service`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus<'a> {
    #[serde(flatten)]
    pub service: &'a Service,
    pub category: ServiceCategory,
    pub is_open: bool,
    pub boundary: Boundary,
}

impl ServiceStatus<'_> {
    /// `Open` or `Closed`.
    pub fn label(&self) -> &'static str {
        if self.is_open {
            "Open"
        } else {
            "Closed"
        }
    }
}

/// Whether `service` is open at `minute_of_day`.
pub fn resolve_service(service: &Service, minute_of_day: u16) -> ServiceStatus<'_> {
    let open = service.open_time.minutes();
    let close = service.close_time.minutes();
    let is_open = open <= minute_of_day && minute_of_day < close;

    let boundary = if is_open {
        Boundary::Until(service.close_time)
    } else {
        Boundary::Opens(service.open_time)
    };

    ServiceStatus {
        service,
        category: service.category(),
        is_open,
        boundary,
    }
}
