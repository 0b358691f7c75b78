//! # Instruction set of the PCD8544
//!
//! Every command the controller understands, as an enum that encodes itself
//! to the wire byte. The bit layouts follow the datasheet table one to one:
//! <https://www.sparkfun.com/datasheets/LCD/Monochrome/Nokia5110.pdf>
//!
//! The controller has two instruction sets, selected by the H bit of the
//! function-set command. Addressing and display-mode commands live in the
//! *basic* set; the analog tuning registers (operating voltage, bias,
//! temperature coefficient) live in the *extended* set. Sending an extended
//! opcode while the controller is in basic mode silently hits the wrong
//! register, which is why [`Instruction::extended`] exists: the driver uses
//! it to bracket extended opcodes with the right function-set bytes.
//!
//! A word on the three tuning registers, since getting them wrong can leave
//! the glass blank or permanently damage it:
//!
//! ## Operating voltage (contrast)
//! `SetContrast` programs V_OP, the voltage applied to the LCD segments.
//! More voltage means darker pixels. The usable range is narrow; values
//! around 60..70 suit most Nokia 5110 boards. The controller adds
//! temperature compensation on top, so do not run V_OP near the maximum in
//! cold environments.
//!
//! ## Temperature coefficient
//! LCD fluid gets less conductive as it cools, so the controller raises the
//! segment voltage by a configurable amount per degree below room
//! temperature. `TC2` is what essentially all 5110 example code settles on.
//!
//! ## Bias
//! The multiplex drive waveform needs a bias voltage ratio matching the
//! muxing of the glass. The common 5110 glass is multiplexed 1:48; the
//! widely used init value in the wild is the 1:40 setting, and both work on
//! real panels.

/// How much the segment voltage rises per degree Kelvin below room
/// temperature. The controller measures temperature itself; this only
/// selects the compensation slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TemperatureCoefficient {
    /// 1 mV/K
    TC0 = 0b00,
    /// 9 mV/K
    TC1 = 0b01,
    /// 17 mV/K, the usual choice for 5110 glass
    TC2 = 0b10,
    /// 24 mV/K
    TC3 = 0b11,
}

/// Bias voltage ratio for the multiplex drive waveform, named after the
/// multiplex ratio of the glass it suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BiasMode {
    /// for glass multiplexed 1:100
    Bias1To100 = 0,
    /// for glass multiplexed 1:80
    Bias1To80 = 1,
    /// for glass multiplexed 1:65
    Bias1To65 = 2,
    /// for glass multiplexed 1:48, the ratio of the Nokia 5110 glass
    Bias1To48 = 3,
    /// for glass multiplexed 1:40 or 1:34
    Bias1To40 = 4,
    /// for glass multiplexed 1:24
    Bias1To24 = 5,
    /// for glass multiplexed 1:18 or 1:16
    Bias1To18 = 6,
    /// for glass multiplexed 1:10, 1:9 or 1:8
    Bias1To10 = 7,
}

/// What the panel shows, independent of the DDRAM contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DisplayMode {
    /// All pixels off, DDRAM untouched.
    Blank = 0b000,
    /// Show the DDRAM contents, a set bit is a dark pixel.
    Normal = 0b100,
    /// All pixels on, DDRAM untouched.
    AllOn = 0b001,
    /// Show the DDRAM contents inverted.
    Inverse = 0b101,
}

/// Direction the controller's address counter advances after each data
/// byte. This driver always selects [`Horizontal`](AddressingMode::Horizontal)
/// at init and mirrors that rule in its cursor bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// Column advances first, wrapping into the next bank.
    Horizontal,
    /// Bank advances first, wrapping into the next column.
    Vertical,
}

/// One PCD8544 command, basic or extended instruction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// No operation.
    Nop,

    /// Power-down bit, addressing mode and instruction set selection.
    /// Valid in both instruction sets.
    FunctionSet {
        /// true puts the controller in standby, DDRAM is retained
        power_down: bool,
        /// address counter advance rule for data writes
        addressing: AddressingMode,
        /// true selects the extended instruction set
        extended: bool,
    },

    /// Display mode (basic set).
    SetDisplayMode(DisplayMode),

    /// DDRAM column address, 0..=83 (basic set).
    SetXAddress(u8),

    /// DDRAM bank address, 0..=5 (basic set).
    SetYAddress(u8),

    /// Temperature compensation slope (extended set).
    SetTemperatureCoefficient(TemperatureCoefficient),

    /// Bias voltage ratio (extended set).
    SetBias(BiasMode),

    /// Operating voltage V_OP, 7 bits, 0..=127 (extended set).
    SetContrast(u8),
}

impl Instruction {
    /// Encode to the wire byte. Binary literals mirror the datasheet table.
    pub fn byte(self) -> u8 {
        match self {
            Instruction::Nop => 0b0000_0000,
            Instruction::FunctionSet {
                power_down,
                addressing,
                extended,
            } => {
                let v = matches!(addressing, AddressingMode::Vertical);
                0b0010_0000 | ((power_down as u8) << 2) | ((v as u8) << 1) | extended as u8
            }
            Instruction::SetDisplayMode(mode) => 0b0000_1000 | mode as u8,
            Instruction::SetXAddress(x) => {
                assert!(x < crate::WIDTH);
                0b1000_0000 | x
            }
            Instruction::SetYAddress(y) => {
                assert!(y < crate::DDRAM_BANKS);
                0b0100_0000 | y
            }
            Instruction::SetTemperatureCoefficient(tc) => 0b0000_0100 | tc as u8,
            Instruction::SetBias(bias) => 0b0001_0000 | bias as u8,
            Instruction::SetContrast(vop) => {
                assert!(vop < 0b1000_0000);
                0b1000_0000 | vop
            }
        }
    }

    /// Whether this opcode is only valid in the extended instruction set.
    ///
    /// `Nop` and `FunctionSet` are accepted in both sets and report `false`.
    pub fn extended(&self) -> bool {
        match self {
            Instruction::Nop => false,
            Instruction::FunctionSet { .. } => false,
            Instruction::SetDisplayMode(_) => false,
            Instruction::SetXAddress(_) => false,
            Instruction::SetYAddress(_) => false,
            Instruction::SetTemperatureCoefficient(_) => true,
            Instruction::SetBias(_) => true,
            Instruction::SetContrast(_) => true,
        }
    }
}

/// Pulls the instruction enums and their variants into scope.
pub mod prelude {
    pub use super::{
        AddressingMode, AddressingMode::*, BiasMode, BiasMode::*, DisplayMode, DisplayMode::*,
        Instruction, Instruction::*, TemperatureCoefficient, TemperatureCoefficient::*,
    };
}
