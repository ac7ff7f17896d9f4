use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use plotlink_trace::{Renderer, Series, TextEvent};
use plotlink_transport::{SerialPortInfo, SerialPortType};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct RefreshOutput {
    event: &'static str,
    slot: usize,
    samples: usize,
    last_x: Option<f64>,
    last_y: Option<f64>,
}

#[derive(Serialize)]
struct TextOutput<'a> {
    event: &'static str,
    id: u8,
    message: &'a str,
}

/// Stand-in for the plotting collaborator: prints one line per refresh
/// instead of drawing. A real renderer would redraw the named panel.
pub struct ConsoleRenderer {
    format: OutputFormat,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Renderer for ConsoleRenderer {
    fn refresh(&mut self, slot: usize, series: &Series) {
        let (last_x, last_y) = match series.last() {
            Some((x, y)) => (Some(x), Some(y)),
            None => (None, None),
        };
        match self.format {
            OutputFormat::Json => {
                let out = RefreshOutput {
                    event: "refresh",
                    slot,
                    samples: series.len(),
                    last_x,
                    last_y,
                };
                println!(
                    "{}",
                    serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
                );
            }
            OutputFormat::Pretty => {
                println!(
                    "refresh slot={} samples={} last={}",
                    slot,
                    series.len(),
                    match series.last() {
                        Some((x, y)) => format!("({x}, {y})"),
                        None => "none".to_string(),
                    }
                );
            }
        }
    }
}

pub fn print_text_event(event: &TextEvent, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let message = event.message_lossy();
            let out = TextOutput {
                event: "text",
                id: event.id,
                message: &message,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Pretty => {
            println!("text id={} message={}", event.id, event.message_lossy());
        }
    }
}

#[derive(Serialize)]
struct PortOutput<'a> {
    name: &'a str,
    kind: &'static str,
}

fn port_kind(port_type: &SerialPortType) -> &'static str {
    match port_type {
        SerialPortType::UsbPort(_) => "usb",
        SerialPortType::PciPort => "pci",
        SerialPortType::BluetoothPort => "bluetooth",
        SerialPortType::Unknown => "unknown",
    }
}

pub fn print_ports(ports: &[SerialPortInfo], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for port in ports {
                let out = PortOutput {
                    name: &port.port_name,
                    kind: port_kind(&port.port_type),
                };
                println!(
                    "{}",
                    serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
                );
            }
        }
        OutputFormat::Pretty => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PORT", "TYPE"]);
            for port in ports {
                table.add_row(vec![
                    port.port_name.clone(),
                    port_kind(&port.port_type).to_string(),
                ]);
            }
            println!("{table}");
        }
    }
}
