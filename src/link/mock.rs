// src/link/mock.rs

//! Scripted sensor for driver tests.
//!
//! Keeps a virtual microsecond clock that only moves when the driver delays.
//! Once the host releases the line, the line follows a waveform of
//! (level, duration) segments measured from the release; past the last
//! segment the pull-up holds the line high.

use crate::common::{
    hal_traits::{SensorLine, SensorTimer},
    timing,
    types::{Level, LineMode},
};

const MAX_SEGMENTS: usize = 96;
const FOREVER_US: u32 = u32::MAX;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct MockPinError;

#[derive(Debug, Clone)]
pub(crate) struct MockSensor {
    now_us: u64,
    mode: LineMode,
    driven: Level,
    released_at: Option<u64>,
    low_started_at: Option<u64>,
    high_started_at: Option<u64>,
    start_low_us: u64,
    start_release_us: u64,
    segments: [(Level, u32); MAX_SEGMENTS],
    segment_count: usize,
    fail_reads: bool,
    cycles: u32,
}

impl MockSensor {
    fn empty() -> Self {
        MockSensor {
            now_us: 0,
            mode: LineMode::Input,
            driven: Level::High,
            released_at: None,
            low_started_at: None,
            high_started_at: None,
            start_low_us: 0,
            start_release_us: 0,
            segments: [(Level::High, 0); MAX_SEGMENTS],
            segment_count: 0,
            fail_reads: false,
            cycles: 0,
        }
    }

    /// No sensor on the line: only the pull-up.
    pub(crate) fn silent() -> Self {
        Self::empty()
    }

    /// A healthy sensor sending `frame` with nominal pulse widths.
    pub(crate) fn responding(frame: [u8; 5]) -> Self {
        let mut mock = Self::empty();
        mock.load_frame(frame);
        mock
    }

    /// A healthy sensor with explicit high-pulse widths for each of the 40 bits.
    pub(crate) fn from_pulse_widths(widths: &[u32; 40]) -> Self {
        let mut mock = Self::empty();
        mock.push_ack();
        for width in widths {
            mock.push(Level::Low, timing::BIT_LOW.as_micros() as u32);
            mock.push(Level::High, *width);
        }
        mock.push(Level::Low, timing::BIT_LOW.as_micros() as u32);
        mock
    }

    /// Sensor pulls low after release and never lets go.
    pub(crate) fn stuck_low_after_release() -> Self {
        let mut mock = Self::empty();
        mock.push(Level::Low, FOREVER_US);
        mock
    }

    /// Sensor acknowledges, then never starts the first bit.
    pub(crate) fn stuck_high_after_ack() -> Self {
        let mut mock = Self::empty();
        mock.push(Level::Low, timing::ACK_LOW.as_micros() as u32);
        mock.push(Level::High, FOREVER_US);
        mock
    }

    /// Sends `bits_sent` bits of `frame`, then holds the next bit high forever.
    pub(crate) fn stuck_high_after_bits(frame: [u8; 5], bits_sent: usize) -> Self {
        let mut mock = Self::empty();
        mock.push_ack();
        mock.push_bits(frame, bits_sent);
        mock.push(Level::Low, timing::BIT_LOW.as_micros() as u32);
        mock.push(Level::High, FOREVER_US);
        mock
    }

    /// Sends `bits_sent` bits of `frame`, then holds the line low forever.
    pub(crate) fn stuck_low_after_bits(frame: [u8; 5], bits_sent: usize) -> Self {
        let mut mock = Self::empty();
        mock.push_ack();
        mock.push_bits(frame, bits_sent);
        mock.push(Level::Low, FOREVER_US);
        mock
    }

    /// Every line read fails.
    pub(crate) fn failing_reads() -> Self {
        let mut mock = Self::empty();
        mock.fail_reads = true;
        mock
    }

    /// Replaces the waveform with a full, nominal transmission of `frame`.
    pub(crate) fn load_frame(&mut self, frame: [u8; 5]) {
        self.segment_count = 0;
        self.push_ack();
        self.push_bits(frame, 40);
        self.push(Level::Low, timing::BIT_LOW.as_micros() as u32);
    }

    /// Removes the sensor from the line.
    pub(crate) fn go_silent(&mut self) {
        self.segment_count = 0;
    }

    pub(crate) fn now_us(&self) -> u64 {
        self.now_us
    }

    pub(crate) fn mode(&self) -> LineMode {
        self.mode
    }

    /// Length of the most recent host low pulse.
    pub(crate) fn start_low_us(&self) -> u64 {
        self.start_low_us
    }

    /// Time the host drove the line high before the most recent release.
    pub(crate) fn start_release_us(&self) -> u64 {
        self.start_release_us
    }

    /// Completed start pulses, i.e. acquisition attempts.
    pub(crate) fn cycles(&self) -> u32 {
        self.cycles
    }

    pub(crate) fn advance(&mut self, us: u64) {
        self.now_us = self.now_us.saturating_add(us);
    }

    fn push(&mut self, level: Level, duration_us: u32) {
        assert!(self.segment_count < MAX_SEGMENTS, "waveform too long");
        self.segments[self.segment_count] = (level, duration_us);
        self.segment_count += 1;
    }

    fn push_ack(&mut self) {
        self.push(Level::Low, timing::ACK_LOW.as_micros() as u32);
        self.push(Level::High, timing::ACK_HIGH.as_micros() as u32);
    }

    fn push_bits(&mut self, frame: [u8; 5], count: usize) {
        for i in 0..count {
            let bit = (frame[i / 8] >> (7 - (i % 8))) & 1;
            let width = if bit == 1 { timing::BIT_ONE_HIGH } else { timing::BIT_ZERO_HIGH };
            self.push(Level::Low, timing::BIT_LOW.as_micros() as u32);
            self.push(Level::High, width.as_micros() as u32);
        }
    }

    fn level_now(&self) -> Level {
        if self.mode == LineMode::Output {
            return self.driven;
        }
        let Some(released_at) = self.released_at else {
            return Level::High;
        };
        let elapsed = self.now_us - released_at;
        let mut segment_end: u64 = 0;
        for &(level, duration) in &self.segments[..self.segment_count] {
            segment_end += u64::from(duration);
            if elapsed < segment_end {
                return level;
            }
        }
        Level::High
    }
}

impl SensorTimer for MockSensor {
    fn delay_us(&mut self, us: u32) {
        self.advance(u64::from(us));
    }
}

impl SensorLine for MockSensor {
    type Error = MockPinError;

    fn set_mode(&mut self, mode: LineMode) -> Result<(), Self::Error> {
        if mode == LineMode::Input && self.mode == LineMode::Output {
            self.released_at = Some(self.now_us);
            if let Some(high_at) = self.high_started_at.take() {
                self.start_release_us = self.now_us - high_at;
            }
        }
        self.mode = mode;
        Ok(())
    }

    fn write_level(&mut self, level: Level) -> Result<(), Self::Error> {
        match level {
            Level::Low => self.low_started_at = Some(self.now_us),
            Level::High => {
                if let Some(low_at) = self.low_started_at.take() {
                    self.start_low_us = self.now_us - low_at;
                    self.cycles += 1;
                }
                self.high_started_at = Some(self.now_us);
            }
        }
        self.driven = level;
        Ok(())
    }

    fn read_level(&mut self) -> Result<Level, Self::Error> {
        if self.fail_reads {
            return Err(MockPinError);
        }
        Ok(self.level_now())
    }
}
