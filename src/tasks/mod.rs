pub mod led_indicator;
