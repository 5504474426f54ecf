#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(feature = "std"), no_main)]
#![feature(type_alias_impl_trait)]

use bsp::*;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use embedded_hal::digital::v2::OutputPin;

#[path = "../../../bsp/src/fmt.rs"]
mod fmt;

#[cfg(feature = "defmt")]
use {defmt_rtt as _, panic_probe as _};

struct SketchConfig {
    led_pin: usize,
    baud: u32,
    on: Duration,
    off: Duration,
    ready_poll: Duration,
}

impl SketchConfig {
    fn default() -> Self {
        Self {
            led_pin: 22,
            baud: 9_600,
            on: Duration::from_millis(50),
            off: Duration::from_millis(100),
            ready_poll: Duration::from_millis(10),
        }
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    #[cfg(feature = "std")]
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .parse_default_env()
        .format_timestamp_nanos()
        .init();

    let cfg = SketchConfig::default();
    Board::init();

    let mut console = fmt::unwrap!(console::take(console::Config::default().baud(cfg.baud)));
    while !console.is_ready() {
        Timer::after(cfg.ready_poll).await;
    }

    fmt::info!("console ready, running probes");
    fmt::unwrap!(typed_probe::run(
        &mut console,
        &typed_probe::Config::default()
    ));

    let mut led = match gpio::find_by_number(cfg.led_pin, gpio::Config::default()) {
        Some(l) => l,
        None => {
            fmt::error!("board doesn't have gpio{} defined", cfg.led_pin);
            return;
        }
    };
    loop {
        let _ = led.set_high();
        Timer::after(cfg.on).await;
        let _ = led.set_low();
        Timer::after(cfg.off).await;
    }
}

#[cfg(not(feature = "defmt"))]
#[cfg(not(feature = "std"))]
mod nondefmt {
    use core::panic::PanicInfo;
    #[panic_handler]
    fn panic(_info: &PanicInfo) -> ! {
        loop {}
    }
}
