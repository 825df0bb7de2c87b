// src/link/adapter.rs

//! Adapter from embedded-hal v1 traits to [`SensorLine`] + [`SensorTimer`].

use crate::common::{
    hal_traits::{SensorLine, SensorTimer},
    types::{Level, LineMode},
};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

/// Wraps an open-drain pin and a delay provider.
///
/// The pin must be configured open-drain with a pull-up (external, or the
/// sensor module's own). "Input" mode is then just a released line: driving
/// it high lets the sensor pull it low, so no runtime direction switch is
/// needed.
#[derive(Debug)]
pub struct HalLine<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> HalLine<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    pub fn new(pin: P, delay: D) -> Self {
        HalLine { pin, delay }
    }

    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

impl<P, D> SensorTimer for HalLine<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

impl<P, D> SensorLine for HalLine<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    type Error = <P as ErrorType>::Error;

    fn set_mode(&mut self, mode: LineMode) -> Result<(), Self::Error> {
        match mode {
            LineMode::Input => self.pin.set_high(),
            LineMode::Output => Ok(()),
        }
    }

    fn write_level(&mut self, level: Level) -> Result<(), Self::Error> {
        match level {
            Level::Low => self.pin.set_low(),
            Level::High => self.pin.set_high(),
        }
    }

    fn read_level(&mut self) -> Result<Level, Self::Error> {
        self.pin.is_high().map(Level::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::LinkError;
    use crate::link::SyncLink;
    use core::convert::Infallible;

    // --- Mock open-drain pin with a pull-up and no sensor ---
    #[derive(Debug, Default)]
    struct MockOpenDrainPin {
        driven_low: bool,
        low_writes: u32,
        high_writes: u32,
    }

    impl ErrorType for MockOpenDrainPin {
        type Error = Infallible;
    }

    impl OutputPin for MockOpenDrainPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.driven_low = true;
            self.low_writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.driven_low = false;
            self.high_writes += 1;
            Ok(())
        }
    }

    impl InputPin for MockOpenDrainPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.driven_low)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(self.driven_low)
        }
    }

    #[derive(Debug, Default)]
    struct MockDelay {
        elapsed_ns: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.elapsed_ns += u64::from(ns);
        }
    }

    #[test]
    fn test_line_levels_follow_pin() {
        let mut line = HalLine::new(MockOpenDrainPin::default(), MockDelay::default());
        line.set_mode(LineMode::Output).unwrap();
        line.write_level(Level::Low).unwrap();
        assert_eq!(line.read_level().unwrap(), Level::Low);

        line.set_mode(LineMode::Input).unwrap();
        assert_eq!(line.read_level().unwrap(), Level::High);
    }

    #[test]
    fn test_delays_forward_to_hal() {
        let mut line = HalLine::new(MockOpenDrainPin::default(), MockDelay::default());
        line.delay_us(30);
        line.delay_ms(5);
        let (_, delay) = line.release();
        assert_eq!(delay.elapsed_ns, 30_000 + 5_000_000);
    }

    #[test]
    fn test_full_cycle_without_sensor() {
        let line = HalLine::new(MockOpenDrainPin::default(), MockDelay::default());
        let mut link = SyncLink::new(line);
        assert_eq!(link.acquire_reading(), Err(LinkError::NoResponse));

        let (pin, delay) = link.release().release();
        assert_eq!(pin.low_writes, 1);
        // Release high, then Input mode releases again
        assert_eq!(pin.high_writes, 2);
        assert!(!pin.driven_low);
        // 5 ms start pulse, 30 us release, 40 us to the first ack sample
        assert_eq!(delay.elapsed_ns, 5_070_000);
    }
}
