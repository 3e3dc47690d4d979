//! Static board catalogue.
//!
//! Boards are not persisted; tasks refer to them by [`BoardId`] string.

use serde::Serialize;

use crate::error::ValidationError;
use crate::types::BoardId;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoardSpecs {
    pub microcontroller: &'static str,
    pub operating_voltage: &'static str,
    pub input_voltage: &'static str,
    #[serde(rename = "digitalIO")]
    pub digital_io: &'static str,
    pub analog_input: &'static str,
    pub flash_memory: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Board {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub specs: BoardSpecs,
}

pub const BOARDS: &[Board] = &[
    Board {
        id: "uno",
        name: "Arduino Uno",
        description: "The standard and most popular board for beginners. Robust and versatile.",
        image: "https://picsum.photos/seed/arduino-uno/400/300",
        specs: BoardSpecs {
            microcontroller: "ATmega328P",
            operating_voltage: "5V",
            input_voltage: "7-12V",
            digital_io: "14 (of which 6 provide PWM output)",
            analog_input: "6",
            flash_memory: "32 KB",
        },
    },
    Board {
        id: "nano",
        name: "Arduino Nano",
        description: "A small, complete, and breadboard-friendly board based on the ATmega328.",
        image: "https://picsum.photos/seed/arduino-nano/400/300",
        specs: BoardSpecs {
            microcontroller: "ATmega328",
            operating_voltage: "5V",
            input_voltage: "7-12V",
            digital_io: "14",
            analog_input: "8",
            flash_memory: "32 KB",
        },
    },
    Board {
        id: "mega",
        name: "Arduino Mega 2560",
        description: "Designed for more complex projects with more pins and more memory.",
        image: "https://picsum.photos/seed/arduino-mega/400/300",
        specs: BoardSpecs {
            microcontroller: "ATmega2560",
            operating_voltage: "5V",
            input_voltage: "7-12V",
            digital_io: "54 (of which 15 provide PWM output)",
            analog_input: "16",
            flash_memory: "256 KB",
        },
    },
    Board {
        id: "leonardo",
        name: "Arduino Leonardo",
        description: "A board that has built-in USB communication, allowing it to act as a keyboard or mouse.",
        image: "https://picsum.photos/seed/arduino-leo/400/300",
        specs: BoardSpecs {
            microcontroller: "ATmega32u4",
            operating_voltage: "5V",
            input_voltage: "7-12V",
            digital_io: "20",
            analog_input: "12",
            flash_memory: "32 KB",
        },
    },
];

/// Look up a board by id.
pub fn find(id: &BoardId) -> Option<&'static Board> {
    BOARDS.iter().find(|b| b.id == id.as_str())
}

/// Like [`find`], but unknown ids are a validation error.
pub fn require(id: &BoardId) -> Result<&'static Board, ValidationError> {
    find(id).ok_or_else(|| ValidationError::UnknownBoard(id.to_string()))
}
