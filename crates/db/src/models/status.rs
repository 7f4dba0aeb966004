//! Text-backed enums stored in `TEXT` columns.
//!
//! Each variant is persisted as its lowercase name, which is also the value
//! accepted in forms and query strings. The table carries matching `CHECK`
//! constraints.

use std::fmt;
use std::str::FromStr;

use materials_core::error::CoreError;

macro_rules! define_text_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize, sqlx::Type,
        )]
        #[serde(rename_all = "lowercase")]
        #[sqlx(rename_all = "lowercase")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// The stored / wire value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $val ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $( $val => Ok($name::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        "Invalid {} '{}'. Must be one of: {}",
                        $field,
                        other,
                        [$( $val ),+].join(", ")
                    ))),
                }
            }
        }
    };
}

define_text_enum! {
    /// Lifecycle label of a material request.
    ///
    /// Transitions are unrestricted: any status may be set from any other.
    RequestStatus ("status") {
        Pending = "pending",
        Approved = "approved",
        Ordered = "ordered",
        Received = "received",
        Rejected = "rejected",
    }
}

define_text_enum! {
    /// Priority label, informational only.
    Urgency ("urgency") {
        Low = "low",
        Normal = "normal",
        High = "high",
    }
}

impl Default for RequestStatus {
    fn default() -> Self {
        RequestStatus::Pending
    }
}

impl Default for Urgency {
    fn default() -> Self {
        Urgency::Normal
    }
}

impl RequestStatus {
    /// Korean display label used by the HTML views.
    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "대기중",
            RequestStatus::Approved => "승인됨",
            RequestStatus::Ordered => "발주됨",
            RequestStatus::Received => "입고됨",
            RequestStatus::Rejected => "반려됨",
        }
    }
}

impl Urgency {
    /// Korean display label used by the HTML views.
    pub fn label(self) -> &'static str {
        match self {
            Urgency::Low => "낮음",
            Urgency::Normal => "보통",
            Urgency::High => "긴급",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn status_round_trips_through_str() {
        for status in RequestStatus::ALL {
            assert_eq!(status.as_str().parse::<RequestStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn status_rejects_unknown_value() {
        let err = "bogus".parse::<RequestStatus>().unwrap_err();
        assert_matches!(&err, CoreError::Validation(msg) if msg.contains("bogus"));
    }

    #[test]
    fn status_is_case_sensitive() {
        assert!("Approved".parse::<RequestStatus>().is_err());
    }

    #[test]
    fn there_are_exactly_five_statuses() {
        assert_eq!(RequestStatus::ALL.len(), 5);
        assert_eq!(RequestStatus::default(), RequestStatus::Pending);
    }

    #[test]
    fn urgency_defaults_to_normal() {
        assert_eq!(Urgency::default(), Urgency::Normal);
        assert_eq!("high".parse::<Urgency>().unwrap(), Urgency::High);
        assert!("critical".parse::<Urgency>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::Received).unwrap(),
            "\"received\""
        );
        let urgency: Urgency = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(urgency, Urgency::Low);
    }
}
