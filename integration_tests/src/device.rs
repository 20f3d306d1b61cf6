//! Device setup for hardware tests.

use std::time::Duration;

use anyhow::Result;
use lora_mode_controller::gpio::{GpioController, Level, SysfsGpio};
use lora_mode_controller::module::HostLoraModule;
use lora_mode_controller::serial::SerialSettings;
use lora_mode_controller::ModePins;

/// Find candidate UART ports for the module.
/// On-board UARTs and USB adapters are both accepted.
pub fn find_uart_ports() -> Result<Vec<String>> {
    let ports = serialport::available_ports()?;

    Ok(ports
        .into_iter()
        .map(|info| info.port_name)
        .filter(|name| {
            name.contains("ttyS") || name.contains("ttyUSB") || name.contains("ttyAMA")
        })
        .collect())
}

/// Resolve a port argument - returns the port path if not "auto", otherwise auto-detects.
pub fn resolve_port(port_arg: &str) -> Result<String> {
    if port_arg != "auto" {
        return Ok(port_arg.to_string());
    }

    match find_uart_ports()?.into_iter().next() {
        Some(port) => Ok(port),
        None => anyhow::bail!("No UART found - pass --port explicitly"),
    }
}

/// Build the controller under test. Nothing touches the hardware until init().
pub fn build_module(port: &str, baud: u32, timeout_ms: u64, pins: ModePins) -> HostLoraModule {
    let settings = SerialSettings::new(port, baud, Duration::from_millis(timeout_ms));
    HostLoraModule::host(settings).with_pins(pins)
}

/// Read MD0/MD1 straight from sysfs, bypassing any controller.
pub fn read_pins(pins: ModePins) -> Result<(Level, Level)> {
    let mut gpio = SysfsGpio::new();
    let md0 = gpio.get_value(pins.md0)?;
    let md1 = gpio.get_value(pins.md1)?;
    Ok((md0, md1))
}
