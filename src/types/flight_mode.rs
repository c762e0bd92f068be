use num_enum::FromPrimitive;
use serde::{Deserialize, Serialize};

/// Flight modes distinguishable by the LED indicator.
///
/// External components (RC mapper, GCS link) report the active mode
/// as a raw discriminant, so the conversion from `u8` is total and
/// folds every unassigned value into [`FlightMode::Unknown`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromPrimitive,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FlightMode {
    Stabilized1 = 0,
    Stabilized2 = 1,
    Stabilized3 = 2,
    Stabilized4 = 3,
    Stabilized5 = 4,
    Stabilized6 = 5,
    PositionHold = 6,
    ReturnToBase = 7,
    Land = 8,
    PathPlanner = 9,
    Poi = 10,

    /// Fallback for modes this firmware revision does not know about.
    #[num_enum(default)]
    Unknown = 255,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_decode_is_total() {
        assert_eq!(FlightMode::from(0u8), FlightMode::Stabilized1);
        assert_eq!(FlightMode::from(7u8), FlightMode::ReturnToBase);
        assert_eq!(FlightMode::from(10u8), FlightMode::Poi);
        assert_eq!(FlightMode::from(11u8), FlightMode::Unknown);
        assert_eq!(FlightMode::from(0x7fu8), FlightMode::Unknown);
    }
}
