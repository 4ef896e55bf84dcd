//! Protocol controller for the 1.9" e-ink segment display
//!
//! Holds the frame buffer and the session state, and sequences the
//! controller commands for reset, waveform loading, temperature
//! compensation, refresh and sleep.
//!
//! Setting values only touches the frame buffer (plus a possible frame-time
//! update for a new temperature band). Nothing reaches the panel until
//! [`SegmentDisplay::update`] is called; every refresh ends with the
//! controller back in sleep.
//!
//! ```rust,ignore
//! let mut display = SegmentDisplay::new(i2c, rst, busy, delay, DisplayConfig::default())?;
//! display.init()?;
//! display.set_temperature(21.5, None)?;
//! display.set_humidity(48.0);
//! display.update()?;
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::i2c::I2c;

use inkseg_core::encoder::{self, Encoding, Quantity};
use inkseg_core::state::{DeviceState, Event};
use inkseg_core::{
    DisplayConfig, FrameBuffer, Icon, RefreshMode, TemperatureBand, TemperatureUnit, Waveform,
};

use crate::cmd;
use crate::error::Error;
use crate::interface::Interface;

/// Wait after power on and after enabling the temperature sensor
const POWER_SETTLE_MS: u32 = 10;

/// Wait between the reset pulse and power on
const RESET_SETTLE_MS: u32 = 100;

/// How long the all-black frame stays up during cleaning
const CLEAN_HOLD_MS: u32 = 1_000;

/// Pause after a maintenance flush
const FLUSH_SETTLE_MS: u32 = 100;

/// Screen select byte sent after the frame data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Screen {
    /// Show the frame content
    #[default]
    Normal = 0x00,
    /// Drive every segment black
    Black = 0x03,
}

/// Segment display driver
pub struct SegmentDisplay<I2C, RST, BSY, D> {
    interface: Interface<I2C, RST, BSY, D>,
    frame: FrameBuffer,
    config: DisplayConfig,
    state: DeviceState,
    mode: RefreshMode,
    /// Table currently loaded in the controller
    waveform: Option<Waveform>,
    unit: TemperatureUnit,
    /// Band whose frame time is programmed
    band: Option<TemperatureBand>,
}

impl<I2C, RST, BSY, D> SegmentDisplay<I2C, RST, BSY, D>
where
    I2C: I2c,
    RST: OutputPin,
    BSY: InputPin,
    D: DelayNs,
{
    /// Create the driver
    ///
    /// Drives the reset line low; the controller stays untouched until
    /// [`Self::init`].
    pub fn new(
        i2c: I2C,
        rst: RST,
        busy: BSY,
        delay: D,
        config: DisplayConfig,
    ) -> Result<Self, Error<I2C::Error>> {
        let interface = Interface::new(i2c, rst, busy, delay)?;
        Ok(Self {
            interface,
            frame: FrameBuffer::new(),
            config,
            state: DeviceState::Reset,
            mode: config.refresh,
            waveform: None,
            unit: config.unit,
            band: None,
        })
    }

    /// Reset and power up the controller, then load the refresh waveform
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        #[cfg(feature = "defmt")]
        defmt::info!("segment display init ({})", self.mode);

        self.transition(Event::HardReset);
        // Frame time and waveform are back at their defaults after a reset
        self.band = None;
        self.waveform = None;

        self.interface.hard_reset()?;
        self.interface.delay_ms(RESET_SETTLE_MS);

        self.interface.command(cmd::POWER_ON)?;
        self.interface.delay_ms(POWER_SETTLE_MS);
        self.interface.commands(&[cmd::BOOSTER, cmd::TSON])?;
        self.interface.delay_ms(POWER_SETTLE_MS);

        self.load_waveform(self.mode.waveform())?;
        self.transition(Event::PoweredOn);
        Ok(())
    }

    /// Select full (`true`) or partial refresh
    pub fn set_update_mode(&mut self, full: bool) -> Result<(), Error<I2C::Error>> {
        self.set_refresh_mode(RefreshMode::from_full(full))
    }

    /// Select the refresh mode
    ///
    /// Before `init` the mode is only recorded; `init` loads it.
    pub fn set_refresh_mode(&mut self, mode: RefreshMode) -> Result<(), Error<I2C::Error>> {
        self.mode = mode;
        if self.state.is_initialized() {
            self.load_waveform(mode.waveform())?;
        }
        Ok(())
    }

    /// Show a temperature
    ///
    /// Readings outside -99.9..=199.9 show "Err". `unit` defaults to the
    /// current unit. A reading outside the programmed temperature band
    /// reprograms the controller's frame time first. The frame buffer is
    /// updated even when that fails; the error is returned afterwards.
    pub fn set_temperature(
        &mut self,
        value: f32,
        unit: Option<TemperatureUnit>,
    ) -> Result<Encoding, Error<I2C::Error>> {
        let (compensated, encoding) = match Quantity::Temperature.checked_tenths(value) {
            Some(tenths) => (
                self.compensate(tenths),
                encoder::encode_tenths(&mut self.frame, Quantity::Temperature, tenths),
            ),
            None => (
                Ok(()),
                encoder::encode(&mut self.frame, Quantity::Temperature, value),
            ),
        };

        self.finish_temperature(encoding, unit);
        compensated.map(|()| encoding)
    }

    /// Show a temperature given in tenths of a degree
    pub fn set_temperature_tenths(
        &mut self,
        tenths: i32,
        unit: Option<TemperatureUnit>,
    ) -> Result<Encoding, Error<I2C::Error>> {
        let (min, max) = Quantity::Temperature.bounds_tenths();
        let compensated = if (min..=max).contains(&tenths) {
            self.compensate(tenths)
        } else {
            Ok(())
        };
        let encoding = encoder::encode_tenths(&mut self.frame, Quantity::Temperature, tenths);

        self.finish_temperature(encoding, unit);
        compensated.map(|()| encoding)
    }

    fn finish_temperature(&mut self, encoding: Encoding, unit: Option<TemperatureUnit>) {
        if encoding == Encoding::OutOfRange {
            #[cfg(feature = "defmt")]
            defmt::warn!("temperature out of range");
        }
        self.set_unit(unit.unwrap_or(self.unit));
    }

    /// Show a relative humidity
    ///
    /// Readings outside 0.0..=99.9 show "Err". The percent sign is lit either
    /// way.
    pub fn set_humidity(&mut self, value: f32) -> Encoding {
        let encoding = encoder::encode(&mut self.frame, Quantity::Humidity, value);
        self.finish_humidity(encoding)
    }

    /// Show a relative humidity given in tenths of a percent
    pub fn set_humidity_tenths(&mut self, tenths: i32) -> Encoding {
        let encoding = encoder::encode_tenths(&mut self.frame, Quantity::Humidity, tenths);
        self.finish_humidity(encoding)
    }

    fn finish_humidity(&mut self, encoding: Encoding) -> Encoding {
        if encoding == Encoding::OutOfRange {
            #[cfg(feature = "defmt")]
            defmt::warn!("humidity out of range");
        }
        Icon::Percent.apply(&mut self.frame, true);
        encoding
    }

    /// Switch the temperature unit symbol
    pub fn set_unit(&mut self, unit: TemperatureUnit) {
        unit.apply(&mut self.frame);
        self.unit = unit;
    }

    /// Show or hide the bluetooth symbol
    pub fn show_bluetooth(&mut self, visible: bool) {
        Icon::Bluetooth.apply(&mut self.frame, visible);
    }

    /// Show or hide the power symbol
    pub fn show_power(&mut self, visible: bool) {
        Icon::Power.apply(&mut self.frame, visible);
    }

    /// Send the frame buffer to the panel
    ///
    /// Blocks until the refresh completes and leaves the controller asleep.
    pub fn update(&mut self) -> Result<(), Error<I2C::Error>> {
        self.update_with(None, Screen::Normal)
    }

    /// Send `frame` (or the driver's own buffer) to the panel
    pub fn update_with(
        &mut self,
        frame: Option<&FrameBuffer>,
        screen: Screen,
    ) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;

        let frame = frame.copied().unwrap_or(self.frame);

        #[cfg(feature = "defmt")]
        defmt::debug!("refresh {:02x} ({})", frame.as_bytes(), screen);

        self.transition(Event::RefreshStarted);
        self.interface.commands(&[
            cmd::CLOSE_SLEEP,
            cmd::POWER_ON,
            cmd::RAM_ADDRESS,
            cmd::RAM1_ON,
            cmd::RAM1_OFF,
        ])?;

        for &byte in frame.as_bytes() {
            self.interface.data(byte)?;
        }
        self.interface.data(screen as u8)?;

        self.interface
            .commands(&[cmd::RAM2_ON, cmd::RAM2_OFF, cmd::PANEL_ON])?;
        self.wait_until_idle()?;
        self.interface
            .commands(&[cmd::PANEL_OFF, cmd::HV_OFF, cmd::SLEEP_IN])?;

        self.transition(Event::RefreshFinished);
        Ok(())
    }

    /// Flush ghosting: full black with the GC waveform, then white
    ///
    /// The frame buffer is kept; the selected refresh waveform is restored
    /// afterwards.
    pub fn clean(&mut self) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;

        #[cfg(feature = "defmt")]
        defmt::info!("cleaning panel");

        self.load_waveform(Waveform::GhostClear)?;
        self.update_with(Some(&FrameBuffer::all_on()), Screen::Black)?;
        self.interface.delay_ms(CLEAN_HOLD_MS);
        self.update_with(Some(&FrameBuffer::new()), Screen::Normal)?;
        self.interface.delay_ms(FLUSH_SETTLE_MS);

        self.load_waveform(self.mode.waveform())
    }

    /// Blank the panel with the boot waveform
    ///
    /// The frame buffer is kept; the selected refresh waveform is restored
    /// afterwards.
    pub fn clear(&mut self) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;

        #[cfg(feature = "defmt")]
        defmt::info!("clearing panel");

        self.load_waveform(Waveform::Boot)?;
        self.update_with(Some(&FrameBuffer::new()), Screen::Normal)?;
        self.interface.delay_ms(FLUSH_SETTLE_MS);

        self.load_waveform(self.mode.waveform())
    }

    /// Put the controller into deep sleep
    pub fn sleep(&mut self) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("entering deep sleep");

        self.interface.command(cmd::HV_OFF)?;
        self.wait_until_idle()?;
        self.interface.command(cmd::SLEEP_IN)?;

        self.transition(Event::SleepEntered);
        Ok(())
    }

    /// Current frame buffer
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Controller state as tracked by the driver
    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Selected refresh mode
    pub fn refresh_mode(&self) -> RefreshMode {
        self.mode
    }

    /// Waveform table loaded in the controller, if any
    pub fn waveform(&self) -> Option<Waveform> {
        self.waveform
    }

    /// Current temperature unit
    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Temperature band whose frame time is programmed
    pub fn band(&self) -> Option<TemperatureBand> {
        self.band
    }

    /// Driver configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Give back the bus, pins and delay
    pub fn release(self) -> (I2C, RST, BSY, D) {
        self.interface.release()
    }

    /// Reprogram the frame time once `tenths` has left the programmed band
    ///
    /// Readings within [`inkseg_core::band::HYSTERESIS_TENTHS`] of the band
    /// keep it. Skipped before `init`; the reset clears the programmed band anyway.
    fn compensate(&mut self, tenths: i32) -> Result<(), Error<I2C::Error>> {
        if !self.state.is_initialized() {
            return Ok(());
        }

        if self.band.is_some_and(|band| band.holds(tenths)) {
            return Ok(());
        }
        let band = TemperatureBand::from_tenths(tenths);

        #[cfg(feature = "defmt")]
        defmt::debug!("temperature band {} -> {}", self.band, band);

        self.interface.commands(&band.setup())?;
        self.wait_until_idle()?;
        self.interface
            .commands(&[cmd::FRAME_TIME, band.frame_time()])?;

        self.band = Some(band);
        Ok(())
    }

    fn load_waveform(&mut self, waveform: Waveform) -> Result<(), Error<I2C::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("loading waveform {}", waveform);

        self.interface.commands(waveform.commands())?;
        self.waveform = Some(waveform);
        Ok(())
    }

    fn wait_until_idle(&mut self) -> Result<(), Error<I2C::Error>> {
        let result = self.interface.wait_until_idle(self.config.busy_timeout_ms);
        if let Err(Error::BusyTimeout) = result {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "busy line stuck for {} ms in {}",
                self.config.busy_timeout_ms,
                self.state
            );

            self.transition(Event::BusyTimeout);
            self.band = None;
            self.waveform = None;
        }
        result
    }

    fn ensure_initialized(&self) -> Result<(), Error<I2C::Error>> {
        if self.state.is_initialized() {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    fn transition(&mut self, event: Event) {
        self.state = self.state.transition(event);
    }
}
