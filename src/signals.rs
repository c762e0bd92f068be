//! Static signals connecting the status-producing tasks to the LED
//! indicator task. Producers only ever send, so none of these calls
//! can block the control loops.

use core::cell::RefCell;

use embassy_sync::{
    blocking_mutex::{raw::CriticalSectionRawMutex, Mutex},
    channel::Channel,
    watch::Watch,
};

use crate::{
    consts::NOTIFY_QUEUE_DEPTH,
    types::{
        alarm::{AlarmRegistry, AlarmSeverity, AlarmSource},
        notification::Notification,
        status::FlightStatus,
    },
};

type M = CriticalSectionRawMutex;

/// Queue of notifications awaiting display.
pub type NotifyQueue = Channel<M, Notification, NOTIFY_QUEUE_DEPTH>;

/// Highest active alarm severity, as published by [`report_alarm`].
pub static SYSTEM_ALARM: Watch<M, AlarmSeverity, 4> = Watch::new();

/// Current flight mode and arming state of the vehicle.
pub static FLIGHT_STATUS: Watch<M, FlightStatus, 4> = Watch::new();

/// Pending one-shot notifications. The indicator pulls at most one
/// at a time, use [`notify`] to push.
pub static NOTIFY_QUEUE: NotifyQueue = Channel::new();

static ALARM_REGISTRY: Mutex<M, RefCell<AlarmRegistry>> =
    Mutex::new(RefCell::new(AlarmRegistry::new()));

/// Update one subsystem's alarm severity and publish the new highest
/// active severity to [`SYSTEM_ALARM`].
pub fn report_alarm(source: AlarmSource, severity: AlarmSeverity) {
    let highest = ALARM_REGISTRY.lock(|registry| {
        let mut registry = registry.borrow_mut();
        registry.set(source, severity);
        registry.highest()
    });
    SYSTEM_ALARM.sender().send(highest);
}

/// Queue a notification for display. When the queue is full the
/// oldest entry is dropped, the newest notification wins.
pub fn notify(notification: Notification) {
    if NOTIFY_QUEUE.try_send(notification).is_err() {
        let dropped = NOTIFY_QUEUE.try_receive().ok();
        warn!("Notification queue full, dropped {:?}", dropped);
        let _ = NOTIFY_QUEUE.try_send(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_alarm_publishes_highest_severity() {
        let mut receiver = SYSTEM_ALARM.receiver().unwrap();

        report_alarm(AlarmSource::Battery, AlarmSeverity::Warning);
        assert_eq!(receiver.try_changed(), Some(AlarmSeverity::Warning));

        report_alarm(AlarmSource::Sensors, AlarmSeverity::Error);
        assert_eq!(receiver.try_changed(), Some(AlarmSeverity::Error));

        // A lesser alarm does not mask the more severe one
        report_alarm(AlarmSource::Receiver, AlarmSeverity::Warning);
        assert_eq!(receiver.try_changed(), Some(AlarmSeverity::Error));

        report_alarm(AlarmSource::Sensors, AlarmSeverity::Ok);
        assert_eq!(receiver.try_changed(), Some(AlarmSeverity::Warning));
    }

    #[test]
    fn notify_drops_oldest_when_full() {
        while NOTIFY_QUEUE.try_receive().is_ok() {}

        for _ in 0..NOTIFY_QUEUE_DEPTH {
            notify(Notification::Ok);
        }
        notify(Notification::NotOk);

        let mut last = None;
        let mut count = 0;
        while let Ok(notification) = NOTIFY_QUEUE.try_receive() {
            last = Some(notification);
            count += 1;
        }
        assert_eq!(count, NOTIFY_QUEUE_DEPTH);
        assert_eq!(last, Some(Notification::NotOk));
    }
}
