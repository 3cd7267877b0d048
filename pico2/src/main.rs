//! Light and color monitoring node firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Reads ambient light (BH1750) and surface color (TCS34725) every 100 ms,
//! names the color, drives the 5x5 WS2812 matrix at a brightness that
//! follows the room light, beeps on low light or a strong red, and shows
//! one of three screens on the SSD1306 OLED.
//!
//! # Tasks
//!
//! - Main: sampling loop (sensors, decision, buzzer, matrix, OLED, console)
//! - `button_task` x3: wait for a falling edge, queue a timestamped edge
//! - `navigation_task`: debounce queued edges into the shared screen cell
//! - `demo_sensors_task` (`demo-sensors` feature): synthetic sensor values
//!
//! # Button Controls
//!
//! - **A**: Menu -> Status
//! - **B**: Menu -> Values
//! - **Joystick**: Status/Values -> Menu

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]

use defmt::{debug, info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input as GpioInput, Pull};
use embassy_rp::peripherals::{I2C0, PIO0};
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::{bind_interrupts, i2c};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Instant, Timer};
use lumicolor_common::config::{SAMPLE_PERIOD_MS, STARTUP_DELAY_MS};
use lumicolor_common::navigation::EdgeOutcome;
use lumicolor_common::render;
use lumicolor_common::{ButtonEdge, Input, NavigationCell, evaluate_cycle};
use lumicolor_pico2::config::{BUZZER_TONE_HZ, DISPLAY_I2C_HZ, EDGE_QUEUE_DEPTH};
use lumicolor_pico2::display;
use lumicolor_pico2::drivers::buzzer::BuzzerTiming;
use lumicolor_pico2::drivers::matrix;
use lumicolor_pico2::error::Error;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"lumicolor"),
    embassy_rp::binary_info::rp_program_description!(c"Light and color monitoring node (BitDogLab)"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

// =============================================================================
// Navigation (shared between the edge consumer and the sampling loop)
// =============================================================================

/// Current screen and debounce clock.
static NAVIGATION: NavigationCell = NavigationCell::new();

/// Edges from the GPIO tasks, in arrival order.
static BUTTON_EDGES: Channel<CriticalSectionRawMutex, ButtonEdge, EDGE_QUEUE_DEPTH> = Channel::new();

fn uptime_ms() -> u32 { Instant::now().as_millis() as u32 }

/// One instance per button. Buttons are active-low with pull-ups.
#[embassy_executor::task(pool_size = 3)]
async fn button_task(
    mut pin: GpioInput<'static>,
    input: Input,
) {
    info!("Button task started: {}", input);

    loop {
        pin.wait_for_falling_edge().await;
        let edge = ButtonEdge::new(input, uptime_ms());
        if BUTTON_EDGES.try_send(edge).is_err() {
            warn!("Edge queue full, dropped {}", input);
        }
    }
}

/// Applies queued edges to the navigation cell.
#[embassy_executor::task]
async fn navigation_task() {
    info!("Navigation task started");

    loop {
        let edge = BUTTON_EDGES.receive().await;
        match NAVIGATION.on_edge(edge) {
            EdgeOutcome::Moved(screen) => info!("{} -> {}", edge.input, screen),
            EdgeOutcome::Ignored => debug!("{} ignored on {}", edge.input, NAVIGATION.screen()),
            EdgeOutcome::Bounced => debug!("{} bounced at {} ms", edge.input, edge.at_ms),
        }
    }
}

// =============================================================================
// Demo Sensor Values (generated by separate async task)
// =============================================================================

#[cfg(feature = "demo-sensors")]
mod demo_source {
    use defmt::info;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use embassy_sync::watch::{DynSender, Watch};
    use embassy_time::{Instant, Timer};
    use lumicolor_common::RawSample;
    use lumicolor_pico2::config::DEMO_UPDATE_MS;
    use lumicolor_pico2::demo;

    /// Latest synthetic sample. The demo task writes, the sampling loop reads.
    pub static DEMO_SAMPLES: Watch<CriticalSectionRawMutex, RawSample, 1> = Watch::new();

    #[embassy_executor::task]
    pub async fn demo_sensors_task(
        sender: DynSender<'static, RawSample>,
        start_time: Instant,
    ) {
        info!("Demo sensor task started");

        loop {
            sender.send(demo::sample_at(start_time.elapsed().as_millis() as u32));
            Timer::after_millis(DEMO_UPDATE_MS).await;
        }
    }
}

/// Log a recoverable fault.
fn warn_fault(error: impl Into<Error>) {
    warn!("{}", error.into());
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Lumicolor starting, settling for {} ms", STARTUP_DELAY_MS);
    Timer::after_millis(STARTUP_DELAY_MS).await;

    // OLED on I2C1 (SDA=14, SCL=15)
    let mut display_config = i2c::Config::default();
    display_config.frequency = DISPLAY_I2C_HZ;
    let display_bus = i2c::I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, display_config);
    let mut oled = match display::init(display_bus) {
        Ok(oled) => {
            info!("Display initialized");
            Some(oled)
        }
        Err(e) => {
            warn_fault(e);
            None
        }
    };

    // Sensors on I2C0 (SDA=0, SCL=1)
    #[cfg(not(feature = "demo-sensors"))]
    let mut sensors = {
        use lumicolor_pico2::Sensors;
        use lumicolor_pico2::config::SENSOR_I2C_HZ;

        let mut sensor_config = i2c::Config::default();
        sensor_config.frequency = SENSOR_I2C_HZ;
        let sensor_bus = i2c::I2c::new_async(p.I2C0, p.PIN_1, p.PIN_0, Irqs, sensor_config);
        let mut sensors = Sensors::new(sensor_bus);
        match sensors.init(&mut embassy_time::Delay).await {
            Ok(()) => info!("Sensors initialized"),
            Err(e) => warn_fault(e),
        }
        sensors
    };

    #[cfg(feature = "demo-sensors")]
    let mut demo_samples = {
        use demo_source::{DEMO_SAMPLES, demo_sensors_task};

        spawner.spawn(demo_sensors_task(DEMO_SAMPLES.dyn_sender(), Instant::now()).unwrap());
        info!("Demo sensor task spawned");
        DEMO_SAMPLES.anon_receiver()
    };

    // Buzzer on GPIO10 (PWM slice 5, channel A)
    let clk_sys_hz = embassy_rp::clocks::clk_sys_freq();
    let timing = BuzzerTiming::for_tone(clk_sys_hz, BUZZER_TONE_HZ);
    let mut buzzer_config = PwmConfig::default();
    buzzer_config.divider = timing.divider.into();
    buzzer_config.top = timing.top;
    buzzer_config.compare_a = timing.level(false);
    let mut buzzer = Pwm::new_output_a(p.PWM_SLICE5, p.PIN_10, buzzer_config.clone());
    info!("Buzzer: div={} top={} ({} Hz)", timing.divider, timing.top, timing.tone_hz(clk_sys_hz));

    // WS2812 matrix on GPIO7 via PIO0
    let Pio { mut common, sm0, .. } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let mut leds = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_7, &program);
    leds.write(&matrix::DARK_FRAME).await;
    info!("LED matrix initialized");

    // Buttons (active-low with internal pull-up)
    let button_a = GpioInput::new(p.PIN_5, Pull::Up);
    let button_b = GpioInput::new(p.PIN_6, Pull::Up);
    let joystick = GpioInput::new(p.PIN_22, Pull::Up);

    spawner.spawn(navigation_task().unwrap());
    spawner.spawn(button_task(button_a, Input::A).unwrap());
    spawner.spawn(button_task(button_b, Input::B).unwrap());
    spawner.spawn(button_task(joystick, Input::Joystick).unwrap());
    info!("Button tasks spawned");

    info!("Main loop starting");

    let mut buzzer_on = false;

    loop {
        let now_ms = uptime_ms();

        #[cfg(not(feature = "demo-sensors"))]
        let sample = {
            let readout = sensors.read().await;
            for fault in readout.faults() {
                warn_fault(fault);
            }
            readout.sample
        };
        #[cfg(feature = "demo-sensors")]
        let sample = demo_samples.try_get().unwrap_or_default();

        let decision = evaluate_cycle(sample, now_ms);
        debug!("{}", decision);

        // Buzzer follows the blink phase
        if decision.alert.blink_phase != buzzer_on {
            buzzer_on = decision.alert.blink_phase;
            buzzer_config.compare_a = timing.level(buzzer_on);
            buzzer.set_config(&buzzer_config);
        }

        leds.write(&matrix::frame(decision.output)).await;

        let screen = NAVIGATION.screen();
        let lines = render::select(screen, &decision);

        if let Some(oled) = oled.as_mut()
            && let Err(e) = display::present(oled, screen, &lines)
        {
            warn_fault(e);
        }

        // Console mirror of the screen
        info!("{}", screen.console_banner());
        for line in &lines {
            info!("{}", line.as_str());
        }
        info!("{}", screen.console_footer());

        Timer::after_millis(SAMPLE_PERIOD_MS).await;
    }
}
