//! STM32F103C8 "blue pill".
//!
//! Console on USART1 (PA9 tx, PA10 rx). gpio22 is the on-board led on PC13.
use crate::console::{self, GenericConsole};
use crate::{fmt, gpio};
use cortex_m::interrupt;
use embassy_stm32::dma::NoDma;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::{bind_interrupts, peripherals, time, usart, Config};

bind_interrupts!(struct Irqs {
    USART1 => usart::InterruptHandler<peripherals::USART1>;
});

const LED_PIN: usize = 22;

pub type Console = UartConsole;
pub type Led = Output<'static, peripherals::PC13>;

impl super::GenericBoard for super::Board {
    fn init() {
        let mut config = Config::default();
        config.rcc.hclk = Some(time::mhz(72));
        config.rcc.sys_ck = Some(time::mhz(72));
        config.rcc.hse = Some(time::mhz(8));
        config.rcc.pclk1 = Some(time::mhz(36));
        config.rcc.pclk2 = Some(time::mhz(72));
        #[cfg(feature = "defmt")]
        {
            config.enable_debug_during_sleep = true;
        }
        #[cfg(not(feature = "defmt"))]
        {
            config.enable_debug_during_sleep = false;
        }

        let _ = embassy_stm32::init(config);

        console::bind_console(console_init);
        gpio::bind_gpio(LED_PIN, led_init);

        unsafe { interrupt::enable() };
    }
}

fn console_init(cfg: console::Config) -> Console {
    let mut uc = usart::Config::default();
    uc.baudrate = cfg.baud;

    let p = unsafe { embassy_stm32::Peripherals::steal() };
    let port = fmt::unwrap!(usart::Uart::new(
        p.USART1, p.PA10, p.PA9, Irqs, NoDma, NoDma, uc
    ));
    UartConsole(port)
}

fn led_init(cfg: gpio::Config) -> Led {
    let p = unsafe { embassy_stm32::Peripherals::steal() };
    let level = if cfg.initial_high {
        Level::High
    } else {
        Level::Low
    };
    Output::new(p.PC13, level, Speed::Low)
}

/// Blocking USART console. `\n` goes out as `\r\n`.
pub struct UartConsole(usart::Uart<'static, peripherals::USART1, NoDma, NoDma>);

impl core::fmt::Write for UartConsole {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for (i, line) in s.split('\n').enumerate() {
            if i > 0 {
                self.0
                    .blocking_write(b"\r\n")
                    .map_err(|_| core::fmt::Error)?;
            }
            self.0
                .blocking_write(line.as_bytes())
                .map_err(|_| core::fmt::Error)?;
        }
        Ok(())
    }
}

impl GenericConsole for UartConsole {
    fn is_ready(&self) -> bool {
        true
    }
}

