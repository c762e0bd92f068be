/// Period between LED pattern ticks [ms]
pub const LED_BLINK_PERIOD_MS: u16 = 50;

/// Number of ticks needed to fully play one blink pattern
pub const PATTERN_TICKS: u8 = 16;

/// Capacity of the pending notification queue
pub const NOTIFY_QUEUE_DEPTH: usize = 4;
