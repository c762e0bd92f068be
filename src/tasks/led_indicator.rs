//! Onboard LED indicator task.
//!
//! Encodes alarm severity, flight mode, arming state and one-shot
//! notifications as timed blink sequences on a red/blue LED pair.
//! The output is divided into three phases, shown with this priority:
//!
//! - Notification
//! - Alarm
//! - Flight mode / heartbeat
//!
//! A phase owns the LEDs for one 16-tick pattern window, then the
//! phases rotate. Phases with nothing to show are skipped within the
//! same tick, and a fresh notification or a flight mode change
//! preempts whatever is currently playing.

use embassy_futures::select::{select3, Either3};
use embassy_time::{Duration, Ticker};

use crate::{
    consts::LED_BLINK_PERIOD_MS,
    hw_abstraction::{LedChannels, LedOutput, StatusLeds},
    patterns::{
        alarm_pattern, flight_mode_pattern, heartbeat_pattern, notify_pattern, LedPattern,
    },
    signals as s,
    signals::NotifyQueue,
    types::{
        alarm::AlarmSeverity,
        flight_mode::FlightMode,
        notification::Notification,
        status::{FlightStatus, StatusSnapshot},
    },
};

/// Owner of the LED output during one pattern window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Phase {
    Notify,
    Alarm,
    FlightMode,
}

impl Phase {
    const fn next(self) -> Self {
        match self {
            Phase::Notify => Phase::Alarm,
            Phase::Alarm => Phase::FlightMode,
            Phase::FlightMode => Phase::Notify,
        }
    }
}

/// Configuration for the indicator task.
#[derive(Debug, Clone)]
pub struct IndicatorConfig {
    pub tick_period_ms: u16,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: LED_BLINK_PERIOD_MS,
        }
    }
}

/// The phase scheduler. All blink state lives here and is only ever
/// mutated by [`Self::on_tick`] and [`Self::update_status`].
pub struct LedIndicator {
    name: &'static str,
    channels: LedChannels,
    snapshot: StatusSnapshot,
    started: bool,
    phase: Phase,
    cycle_count: u8,
    pattern: LedPattern,
    running_notification: Option<Notification>,
    last_flight_mode: Option<FlightMode>,
    force_show_flight_mode: bool,
}

impl LedIndicator {
    pub fn new(channels: LedChannels) -> Self {
        Self {
            name: "led_indicator",
            channels,
            snapshot: StatusSnapshot::default(),
            started: false,
            phase: Phase::Notify,
            cycle_count: 0,
            pattern: LedPattern::OFF,
            running_notification: None,
            last_flight_mode: None,
            force_show_flight_mode: false,
        }
    }

    /// Overwrite the stored status values. The first call marks the
    /// subsystem as started and enables the tick function.
    pub fn update_status(
        &mut self,
        alarm: AlarmSeverity,
        status: FlightStatus,
        queue: &NotifyQueue,
    ) {
        self.started = true;
        self.snapshot.alarm = alarm;
        self.snapshot.status = status;
        self.poll_notification(queue);
    }

    /// Pull the next queued notification, but only once the pending
    /// slot is free. A pending notification is held until the
    /// scheduler has latched it for display.
    pub fn poll_notification(&mut self, queue: &NotifyQueue) {
        if self.snapshot.notification.is_none() {
            self.snapshot.notification = queue.try_receive().ok();
            if let Some(notification) = self.snapshot.notification {
                debug!("[{}] Pending notification: {:?}", self.name, notification);
            }
        }
    }

    /// Advance the scheduler by one tick and return the on/off
    /// decision for both channels.
    ///
    /// Calling this before the first status update is a no-op with
    /// both channels off.
    pub fn on_tick(&mut self) -> LedOutput {
        if !self.started {
            return LedOutput::OFF;
        }

        self.cycle_count += 1;

        // Notifications are modal, they preempt whatever is showing
        if self.phase != Phase::Notify && self.snapshot.notification.is_some() {
            self.running_notification = self.snapshot.notification.take();
            self.phase = Phase::Notify;
            self.cycle_count = 0;
        } else if self.last_flight_mode != Some(self.snapshot.status.mode) {
            // A mode change restarts the flight mode phase so the
            // operator sees the new mode immediately, armed or not
            self.phase = Phase::FlightMode;
            self.last_flight_mode = Some(self.snapshot.status.mode);
            self.cycle_count = 0;
            self.force_show_flight_mode = true;
            info!(
                "[{}] Showing flight mode {:?}",
                self.name, self.snapshot.status.mode
            );
        }

        // A pattern has fully played, stop the LEDs and rotate to the
        // next phase. A notification that was just shown is consumed.
        if self.cycle_count & 0x10 != 0 {
            self.cycle_count = 0;
            self.pattern = LedPattern::OFF;
            self.force_show_flight_mode = false;
            if self.phase == Phase::Notify {
                self.running_notification = None;
            }
            self.phase = self.phase.next();
        }

        // Select the content of a freshly started window. Phases with
        // nothing to show fall through to the next one within the
        // same tick, there are no dead windows.
        if self.phase == Phase::Notify && self.cycle_count == 0 {
            match self.running_notification {
                Some(notification) => self.pattern = notify_pattern(Some(notification)),
                None => self.phase = Phase::Alarm,
            }
        }

        if self.phase == Phase::Alarm && self.cycle_count == 0 {
            if self.channels.contains(LedChannels::RED) && self.snapshot.alarm > AlarmSeverity::Ok
            {
                self.pattern = alarm_pattern(self.snapshot.alarm);
            } else {
                self.phase = Phase::FlightMode;
            }
        }

        if self.phase == Phase::FlightMode && self.cycle_count == 0 {
            let armed = !self.snapshot.status.armed.is_disarmed();
            self.pattern = if self.force_show_flight_mode || armed {
                flight_mode_pattern(self.snapshot.status.mode, armed)
            } else {
                heartbeat_pattern()
            };
        }

        // Emit the lowest bit of each channel and shift both patterns
        let output = LedOutput {
            red: self.pattern.red & 0x1 != 0,
            blue: self.pattern.blue & 0x1 != 0,
        };
        self.pattern.red >>= 1;
        self.pattern.blue >>= 1;
        output
    }
}

/// Entry point for the LED indicator task. Wrap this in an
/// `#[embassy_executor::task]` with the board's concrete
/// [`StatusLeds`] implementation.
pub async fn run(mut leds: impl StatusLeds, config: IndicatorConfig) -> ! {
    const ID: &str = "led_indicator";
    info!("{}: Task started", ID);

    // Input channels
    let mut rcv_system_alarm = s::SYSTEM_ALARM.receiver().unwrap();
    let mut rcv_flight_status = s::FLIGHT_STATUS.receiver().unwrap();

    let mut indicator = LedIndicator::new(leds.channels());
    let mut alarm = AlarmSeverity::default();
    let mut status = FlightStatus::default();

    let mut ticker = Ticker::every(Duration::from_millis(config.tick_period_ms as u64));

    loop {
        match select3(
            rcv_system_alarm.changed(),
            rcv_flight_status.changed(),
            ticker.next(),
        )
        .await
        {
            Either3::First(new_alarm) => {
                alarm = new_alarm;
                indicator.update_status(alarm, status, &s::NOTIFY_QUEUE);
            }
            Either3::Second(new_status) => {
                status = new_status;
                indicator.update_status(alarm, status, &s::NOTIFY_QUEUE);
            }
            Either3::Third(()) => {
                indicator.poll_notification(&s::NOTIFY_QUEUE);
                leds.apply(indicator.on_tick());
            }
        }
    }
}
