use bitflags::bitflags;
use embedded_hal::digital::OutputPin;

bitflags! {
    /// Which indicator LED channels the board actually has. The
    /// scheduler skips the alarm phase entirely on boards without a
    /// red channel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LedChannels: u8 {
        /// Red alarm LED
        const RED = 1 << 0;

        /// Blue heartbeat LED
        const BLUE = 1 << 1;
    }
}

/// Per-tick on/off decision for both channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedOutput {
    pub red: bool,
    pub blue: bool,
}

impl LedOutput {
    pub const OFF: Self = Self {
        red: false,
        blue: false,
    };
}

/// Seam to the physical indicator LEDs. Implementations must be
/// immediate and non-blocking, the scheduler calls this every tick.
pub trait StatusLeds {
    /// Channels this implementation can actually drive.
    fn channels(&self) -> LedChannels;

    fn set_red(&mut self, on: bool);

    fn set_blue(&mut self, on: bool);

    fn apply(&mut self, output: LedOutput) {
        self.set_red(output.red);
        self.set_blue(output.blue);
    }
}

/// Two discrete LEDs driven through `embedded-hal` output pins.
/// Boards with only one of the two channels pass `None` for the
/// other, the scheduler adapts through [`StatusLeds::channels`].
pub struct DualLed<R, B> {
    red: Option<R>,
    blue: Option<B>,
}

impl<R: OutputPin, B: OutputPin> DualLed<R, B> {
    pub fn new(red: Option<R>, blue: Option<B>) -> Self {
        Self { red, blue }
    }
}

impl<R: OutputPin, B: OutputPin> StatusLeds for DualLed<R, B> {
    fn channels(&self) -> LedChannels {
        let mut channels = LedChannels::empty();
        channels.set(LedChannels::RED, self.red.is_some());
        channels.set(LedChannels::BLUE, self.blue.is_some());
        channels
    }

    fn set_red(&mut self, on: bool) {
        if let Some(pin) = &mut self.red {
            // Indicator output is best effort, pin errors are dropped
            let _ = pin.set_state(on.into());
        }
    }

    fn set_blue(&mut self, on: bool) {
        if let Some(pin) = &mut self.blue {
            let _ = pin.set_state(on.into());
        }
    }
}

/// Null object for boards with no indicator LEDs at all.
pub struct NullLeds;

impl StatusLeds for NullLeds {
    fn channels(&self) -> LedChannels {
        LedChannels::empty()
    }

    fn set_red(&mut self, _on: bool) {}

    fn set_blue(&mut self, _on: bool) {}
}
