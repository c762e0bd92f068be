use serde::{Deserialize, Serialize};

use super::{alarm::AlarmSeverity, flight_mode::FlightMode, notification::Notification};

/// Arming state of the vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArmedState {
    #[default]
    Disarmed,
    Arming,
    Armed,
}

impl ArmedState {
    /// The indicator treats `Arming` as not-disarmed, the operator
    /// should already see the armed-style mode pattern.
    pub fn is_disarmed(self) -> bool {
        matches!(self, ArmedState::Disarmed)
    }
}

/// Flight mode and arming state, as published by the control stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlightStatus {
    pub mode: FlightMode,
    pub armed: ArmedState,
}

impl Default for FlightStatus {
    fn default() -> Self {
        Self {
            mode: FlightMode::Stabilized1,
            armed: ArmedState::Disarmed,
        }
    }
}

/// The most recently sampled status values consumed by the phase
/// scheduler. Fields read as their neutral defaults until the
/// producing side has published anything.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusSnapshot {
    /// Highest severity across all active alarms.
    pub alarm: AlarmSeverity,

    /// Current flight mode and arming state.
    pub status: FlightStatus,

    /// Notification waiting to be displayed, if any.
    pub notification: Option<Notification>,
}
