use serde::{Deserialize, Serialize};

/// Severity of a system alarm. Severities are ordered, so the
/// highest active one can be picked with a plain `max`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmSeverity {
    /// No alarm active.
    #[default]
    Ok,

    /// Degraded but flyable, e.g. low battery or poor link quality.
    Warning,

    /// A subsystem is not working, the vehicle should land.
    Error,

    /// The vehicle is not safe to fly.
    Critical,
}

/// Subsystems which can raise an alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmSource {
    System,
    Sensors,
    Receiver,
    Battery,
    Attitude,
    Navigation,
}

impl AlarmSource {
    pub const COUNT: usize = 6;

    const fn index(self) -> usize {
        self as usize
    }
}

/// Per-subsystem alarm severities. The indicator only ever displays
/// the highest active severity, see [`Self::highest`].
#[derive(Debug, Clone, Copy)]
pub struct AlarmRegistry {
    severities: [AlarmSeverity; AlarmSource::COUNT],
}

impl AlarmRegistry {
    pub const fn new() -> Self {
        Self {
            severities: [AlarmSeverity::Ok; AlarmSource::COUNT],
        }
    }

    /// Set the severity of a single alarm source.
    pub fn set(&mut self, source: AlarmSource, severity: AlarmSeverity) {
        self.severities[source.index()] = severity;
    }

    pub fn get(&self, source: AlarmSource) -> AlarmSeverity {
        self.severities[source.index()]
    }

    /// Highest severity across all alarm sources.
    pub fn highest(&self) -> AlarmSeverity {
        let mut highest = AlarmSeverity::Ok;
        for &severity in &self.severities {
            highest = highest.max(severity);
        }
        highest
    }
}

impl Default for AlarmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_are_ordered() {
        assert!(AlarmSeverity::Ok < AlarmSeverity::Warning);
        assert!(AlarmSeverity::Warning < AlarmSeverity::Error);
        assert!(AlarmSeverity::Error < AlarmSeverity::Critical);
    }

    #[test]
    fn registry_tracks_highest_severity() {
        let mut registry = AlarmRegistry::new();
        assert_eq!(registry.highest(), AlarmSeverity::Ok);

        registry.set(AlarmSource::Battery, AlarmSeverity::Warning);
        registry.set(AlarmSource::Receiver, AlarmSeverity::Critical);
        registry.set(AlarmSource::Sensors, AlarmSeverity::Error);
        assert_eq!(registry.highest(), AlarmSeverity::Critical);

        // Clearing the worst alarm reveals the next-worst one
        registry.set(AlarmSource::Receiver, AlarmSeverity::Ok);
        assert_eq!(registry.highest(), AlarmSeverity::Error);
        assert_eq!(registry.get(AlarmSource::Battery), AlarmSeverity::Warning);
    }
}
