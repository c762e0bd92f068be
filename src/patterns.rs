//! The blink-code table.
//!
//! Each status value maps to one 16-bit on/off pattern per LED
//! channel. Patterns are played least-significant-bit first, one bit
//! per tick, so a pattern is fully played after 16 ticks. These codes
//! are what the operator reads off the airframe, so the exact bit
//! values are part of the external protocol and must not change.

use crate::types::{alarm::AlarmSeverity, flight_mode::FlightMode, notification::Notification};

/// One 16-bit on/off pattern per LED channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedPattern {
    pub red: u16,
    pub blue: u16,
}

impl LedPattern {
    /// Both channels dark for the full window.
    pub const OFF: Self = Self { red: 0, blue: 0 };

    pub const fn new(red: u16, blue: u16) -> Self {
        Self { red, blue }
    }
}

/// Alarm blink codes. Rising severity maps to increasingly dense
/// bursts on the red channel, the blue channel stays dark.
pub const fn alarm_pattern(severity: AlarmSeverity) -> LedPattern {
    match severity {
        AlarmSeverity::Ok => LedPattern::OFF,
        AlarmSeverity::Warning => LedPattern::new(0x40, 0),
        AlarmSeverity::Error => LedPattern::new(0x220, 0),
        AlarmSeverity::Critical => LedPattern::new(0x7ffe, 0),
    }
}

/// Notification blink codes. `Ok` is blue-dominant, `NotOk` is
/// red-heavy with a short blue pulse, `DrawAttention` alternates
/// both channels and doubles as the catch-all code.
pub const fn notify_pattern(notification: Option<Notification>) -> LedPattern {
    match notification {
        None => LedPattern::OFF,
        Some(Notification::Ok) => LedPattern::new(0xf, 0x93f),
        Some(Notification::NotOk) => LedPattern::new(0x186f, 0x3f),
        Some(Notification::DrawAttention) => LedPattern::new(0xaaaa, 0x5555),
    }
}

/// Flight mode blink codes.
///
/// Disarmed stabilization modes show 1/2/3 widely spaced blue pulses
/// for the three stabilization tiers with red silent; armed modes use
/// the tighter single-width pulse groups. The red channel joins in for
/// the autonomous modes (hold/return/land/planner/poi) so armed
/// autonomous flight is visually distinct from manual flight.
pub const fn flight_mode_pattern(mode: FlightMode, armed: bool) -> LedPattern {
    if armed {
        match mode {
            FlightMode::Stabilized1 => LedPattern::new(0x0, 0x1),
            FlightMode::Stabilized2 => LedPattern::new(0x0, 0x21),
            FlightMode::Stabilized3 => LedPattern::new(0x0, 0x421),
            FlightMode::Stabilized4 => LedPattern::new(0x1, 0x1),
            FlightMode::Stabilized5 => LedPattern::new(0x1, 0x21),
            FlightMode::Stabilized6 => LedPattern::new(0x1, 0x421),
            FlightMode::PositionHold => LedPattern::new(0x400, 0x421),
            FlightMode::ReturnToBase => LedPattern::new(0x1100, 0x1111),
            FlightMode::Land => LedPattern::new(0x1100, 0x1111),
            FlightMode::PathPlanner => LedPattern::new(0x400, 0x421),
            FlightMode::Poi => LedPattern::new(0x400, 0x421),
            FlightMode::Unknown => LedPattern::new(0x400, 0x1),
        }
    } else {
        match mode {
            FlightMode::Stabilized1 => LedPattern::new(0x0, 0x3),
            FlightMode::Stabilized2 => LedPattern::new(0x0, 0x63),
            FlightMode::Stabilized3 => LedPattern::new(0x0, 0xc63),
            FlightMode::Stabilized4 => LedPattern::new(0x3, 0x3),
            FlightMode::Stabilized5 => LedPattern::new(0x3, 0x63),
            FlightMode::Stabilized6 => LedPattern::new(0x3, 0xc63),
            FlightMode::PositionHold => LedPattern::new(0xc00, 0xc63),
            FlightMode::ReturnToBase => LedPattern::new(0x3300, 0x3333),
            FlightMode::Land => LedPattern::new(0x3300, 0x3333),
            FlightMode::PathPlanner => LedPattern::new(0xc00, 0xc63),
            FlightMode::Poi => LedPattern::new(0xc00, 0xc63),
            FlightMode::Unknown => LedPattern::new(0xc00, 0x3),
        }
    }
}

/// Steady "alive" pulse train, shown while disarmed with nothing
/// else to report. Blue only.
pub const fn heartbeat_pattern() -> LedPattern {
    LedPattern::new(0, 0x1fff)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SEVERITIES: [AlarmSeverity; 4] = [
        AlarmSeverity::Ok,
        AlarmSeverity::Warning,
        AlarmSeverity::Error,
        AlarmSeverity::Critical,
    ];

    const ALL_NOTIFICATIONS: [Notification; 3] = [
        Notification::Ok,
        Notification::NotOk,
        Notification::DrawAttention,
    ];

    #[test]
    fn alarm_uses_red_channel_only() {
        assert_eq!(alarm_pattern(AlarmSeverity::Ok), LedPattern::OFF);
        for severity in ALL_SEVERITIES {
            let pattern = alarm_pattern(severity);
            assert_eq!(pattern.blue, 0);
            if severity > AlarmSeverity::Ok {
                assert_ne!(pattern.red, 0);
            }
        }
    }

    #[test]
    fn higher_severity_blinks_more() {
        let warning = alarm_pattern(AlarmSeverity::Warning).red.count_ones();
        let error = alarm_pattern(AlarmSeverity::Error).red.count_ones();
        let critical = alarm_pattern(AlarmSeverity::Critical).red.count_ones();
        assert!(warning < error);
        assert!(error < critical);
    }

    #[test]
    fn notifications_are_visible() {
        assert_eq!(notify_pattern(None), LedPattern::OFF);
        for notification in ALL_NOTIFICATIONS {
            let pattern = notify_pattern(Some(notification));
            assert!(pattern.red != 0 || pattern.blue != 0);
        }
    }

    #[test]
    fn draw_attention_alternates_channels() {
        let pattern = notify_pattern(Some(Notification::DrawAttention));
        assert_eq!(pattern.red, 0xaaaa);
        assert_eq!(pattern.blue, 0x5555);
        // The channels never light up on the same tick
        assert_eq!(pattern.red & pattern.blue, 0);
    }

    #[test]
    fn stabilization_tiers_encode_pulse_count() {
        for armed in [false, true] {
            let one = flight_mode_pattern(FlightMode::Stabilized1, armed);
            let two = flight_mode_pattern(FlightMode::Stabilized2, armed);
            let three = flight_mode_pattern(FlightMode::Stabilized3, armed);
            assert_eq!(one.red, 0);
            assert_eq!(two.red, 0);
            assert_eq!(three.red, 0);
            assert!(one.blue.count_ones() < two.blue.count_ones());
            assert!(two.blue.count_ones() < three.blue.count_ones());
        }
    }

    #[test]
    fn autonomous_modes_activate_red_when_armed() {
        for mode in [
            FlightMode::PositionHold,
            FlightMode::ReturnToBase,
            FlightMode::Land,
            FlightMode::PathPlanner,
            FlightMode::Poi,
        ] {
            assert_ne!(flight_mode_pattern(mode, true).red, 0);
        }
    }

    #[test]
    fn unrecognized_mode_uses_fallback_pattern() {
        let mode = FlightMode::from(0x7fu8);
        assert_eq!(flight_mode_pattern(mode, true), LedPattern::new(0x400, 0x1));
        assert_eq!(flight_mode_pattern(mode, false), LedPattern::new(0xc00, 0x3));
    }

    #[test]
    fn heartbeat_is_blue_only() {
        let pattern = heartbeat_pattern();
        assert_eq!(pattern.red, 0);
        assert_eq!(pattern.blue, 0x1fff);
    }
}
