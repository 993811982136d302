//! Shared fixtures: a temporary site root with a catalog document.

#![allow(dead_code)]

use std::path::Path;

use serde_json::json;
use tempfile::TempDir;

use elecdex::catalog::{Catalog, Item};

pub fn catalog_json() -> serde_json::Value {
    json!({
        "items": [
            {
                "name": "Arduino Uno",
                "category": "Microcontrollers",
                "description": "ATmega328P development board",
                "keywords": ["avr", "usb", "atmega"],
                "links": {
                    "documentation": "https://docs.arduino.cc/hardware/uno-rev3",
                    "datasheet": "https://example.com/atmega328p.pdf"
                }
            },
            {
                "name": "ESP32",
                "category": "Microcontrollers",
                "description": "Wi-Fi and Bluetooth SoC",
                "keywords": ["wifi", "bluetooth", "espressif"]
            },
            {
                "name": "LED",
                "category": "Components",
                "description": "Light emitting diode",
                "keywords": ["diode", "light"],
                "links": { "tutorial": "https://example.com/led-basics" }
            },
            {
                "name": "Resistor",
                "category": "Components",
                "description": "Limits current in a circuit",
                "keywords": ["ohm"]
            },
            {
                "name": "Capacitor",
                "category": "Components",
                "description": "Stores charge",
                "keywords": ["farad"]
            },
            {
                "name": "I2C",
                "category": "Protocols",
                "description": "Two-wire serial bus",
                "keywords": ["twi", "sda", "scl"]
            },
            {
                "name": "SPI",
                "category": "Protocols",
                "description": "Four-wire synchronous serial bus",
                "keywords": ["mosi", "miso"]
            },
            {
                "name": "UART",
                "category": "Protocols",
                "description": "Asynchronous serial link",
                "keywords": ["serial", "rx", "tx"]
            },
            {
                "name": "Ohm's Law",
                "category": "Topics",
                "description": "V = I * R",
                "keywords": ["voltage", "current"]
            },
            {
                "name": "Multimeter",
                "category": "Tools",
                "description": "Measures voltage, current and resistance",
                "icon": "🔍"
            },
            {
                "name": "Oscilloscope",
                "category": "Tools",
                "description": "Plots signals over time",
                "keywords": ["scope"]
            }
        ]
    })
}

pub fn write_catalog(root: &Path, document: &str) {
    let data = root.join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("electronics.json"), document).unwrap();
}

/// A temporary site root holding the sample catalog.
pub fn site() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_catalog(dir.path(), &catalog_json().to_string());
    dir
}

pub fn sample_items() -> Vec<Item> {
    serde_json::from_value::<elecdex::catalog::CatalogDocument>(catalog_json())
        .unwrap()
        .items
}

pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_items())
}
