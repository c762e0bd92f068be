//! Host demo for the LED indicator.
//!
//! Runs the indicator task on the std executor, feeds it a scripted
//! flight and renders the two LED channels on the console.

use embassy_executor::Executor;
use embassy_time::Timer;
use static_cell::StaticCell;

use statusled::{
    hw_abstraction::{LedChannels, StatusLeds},
    signals::{self, notify, report_alarm},
    tasks::led_indicator::{self, IndicatorConfig},
    types::{
        alarm::{AlarmSeverity, AlarmSource},
        flight_mode::FlightMode,
        notification::Notification,
        status::{ArmedState, FlightStatus},
    },
};

static EXECUTOR: StaticCell<Executor> = StaticCell::new();

/// Renders the LED pair as a console line whenever a channel changes.
struct ConsoleLeds {
    red: bool,
    blue: bool,
}

impl ConsoleLeds {
    fn new() -> Self {
        Self {
            red: false,
            blue: false,
        }
    }

    fn render(&self) {
        log::info!(
            "[{}] [{}]",
            if self.red { "R" } else { " " },
            if self.blue { "B" } else { " " },
        );
    }
}

impl StatusLeds for ConsoleLeds {
    fn channels(&self) -> LedChannels {
        LedChannels::all()
    }

    fn set_red(&mut self, on: bool) {
        if self.red != on {
            self.red = on;
            self.render();
        }
    }

    fn set_blue(&mut self, on: bool) {
        if self.blue != on {
            self.blue = on;
            self.render();
        }
    }
}

#[embassy_executor::task]
async fn indicator() -> ! {
    led_indicator::run(ConsoleLeds::new(), IndicatorConfig::default()).await
}

#[embassy_executor::task]
async fn scripted_flight() {
    fn send_status(mode: FlightMode, armed: ArmedState) {
        signals::FLIGHT_STATUS.sender().send(FlightStatus { mode, armed });
    }

    log::info!("Vehicle booted, disarmed in Stabilized1");
    send_status(FlightMode::Stabilized1, ArmedState::Disarmed);

    Timer::after_secs(3).await;
    log::info!("Sensor calibration finished");
    notify(Notification::Ok);

    Timer::after_secs(3).await;
    log::info!("Arming vehicle");
    send_status(FlightMode::Stabilized1, ArmedState::Armed);

    Timer::after_secs(3).await;
    log::info!("Switching to position hold");
    send_status(FlightMode::PositionHold, ArmedState::Armed);

    Timer::after_secs(3).await;
    log::info!("Battery running low");
    report_alarm(AlarmSource::Battery, AlarmSeverity::Warning);

    Timer::after_secs(3).await;
    log::info!("RC link lost, returning to base");
    report_alarm(AlarmSource::Receiver, AlarmSeverity::Critical);
    notify(Notification::NotOk);
    send_status(FlightMode::ReturnToBase, ArmedState::Armed);

    Timer::after_secs(5).await;
    log::info!("Landed, link restored, disarming");
    report_alarm(AlarmSource::Receiver, AlarmSeverity::Ok);
    send_status(FlightMode::Land, ArmedState::Disarmed);

    Timer::after_secs(3).await;
    // A mode id this firmware does not know about falls back to the
    // single-pulse pattern
    log::info!("GCS commanded an unsupported mode");
    send_status(FlightMode::from(0x1fu8), ArmedState::Disarmed);
    notify(Notification::DrawAttention);

    log::info!("Scenario finished, heartbeat continues");
}

fn main() -> ! {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .format_timestamp_millis()
        .init();

    let executor = EXECUTOR.init(Executor::new());
    executor.run(|spawner| {
        spawner.spawn(indicator()).unwrap();
        spawner.spawn(scripted_flight()).unwrap();
    })
}
