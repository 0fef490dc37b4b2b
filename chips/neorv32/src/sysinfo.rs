// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! NEORV32 system information memory (SYSINFO).
//!
//! A read-only register block describing the current SoC build: clock
//! frequency, user-defined build ID and the set of hardware modules that
//! were actually synthesized. Peripheral drivers consult this block to
//! find out whether "their" unit exists before touching its registers.

use tock_registers::interfaces::Readable;
use tock_registers::registers::ReadOnly;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const SYSINFO_BASE: StaticRef<SysInfoRegisters> =
    unsafe { StaticRef::new(0xFFFF_FFE0 as *const SysInfoRegisters) };

register_structs! {
    pub SysInfoRegisters {
        // Processor clock frequency in Hz.
        (0x000 => clk: ReadOnly<u32>),
        // User-defined build ID (USER_CODE generic).
        (0x004 => custom_id: ReadOnly<u32>),
        // SoC configuration: which modules exist in this bitstream.
        (0x008 => soc: ReadOnly<u32, SOC::Register>),
        // Cache configuration.
        (0x00C => cache: ReadOnly<u32>),
        (0x010 => @END),
    }
}

register_bitfields![u32,
    SOC [
        /// Bootloader implemented
        BOOTLOADER OFFSET(0) NUMBITS(1) [],
        /// External bus interface implemented
        MEM_EXT OFFSET(1) NUMBITS(1) [],
        /// Internal instruction memory implemented
        MEM_INT_IMEM OFFSET(2) NUMBITS(1) [],
        /// Internal data memory implemented
        MEM_INT_DMEM OFFSET(3) NUMBITS(1) [],
        /// External bus uses big-endian byte order
        MEM_EXT_ENDIAN OFFSET(4) NUMBITS(1) [],
        /// Instruction cache implemented
        ICACHE OFFSET(5) NUMBITS(1) [],
        /// On-chip debugger implemented
        OCD OFFSET(14) NUMBITS(1) [],
        /// General purpose IO port implemented
        IO_GPIO OFFSET(16) NUMBITS(1) [],
        /// Machine system timer implemented
        IO_MTIME OFFSET(17) NUMBITS(1) [],
        /// Primary UART implemented
        IO_UART0 OFFSET(18) NUMBITS(1) [],
        /// SPI controller implemented
        IO_SPI OFFSET(19) NUMBITS(1) [],
        /// TWI controller implemented
        IO_TWI OFFSET(20) NUMBITS(1) [],
        /// PWM controller implemented
        IO_PWM OFFSET(21) NUMBITS(1) [],
        /// Watchdog timer implemented
        IO_WDT OFFSET(22) NUMBITS(1) [],
        /// Custom functions subsystem implemented
        IO_CFS OFFSET(23) NUMBITS(1) [],
        /// True random number generator implemented
        IO_TRNG OFFSET(24) NUMBITS(1) [],
        /// Stream link interface implemented
        IO_SLINK OFFSET(25) NUMBITS(1) [],
        /// Secondary UART implemented
        IO_UART1 OFFSET(26) NUMBITS(1) [],
        /// Smart LED interface implemented
        IO_NEOLED OFFSET(27) NUMBITS(1) [],
        /// External interrupt controller implemented
        IO_XIRQ OFFSET(28) NUMBITS(1) [],
        /// General purpose timer implemented
        IO_GPTMR OFFSET(29) NUMBITS(1) [],
        /// Execute-in-place module implemented
        IO_XIP OFFSET(30) NUMBITS(1) [],
        /// One-wire interface controller implemented
        IO_ONEWIRE OFFSET(31) NUMBITS(1) []
    ]
];

pub struct SysInfo {
    registers: StaticRef<SysInfoRegisters>,
}

impl SysInfo {
    pub const fn new(base: StaticRef<SysInfoRegisters>) -> SysInfo {
        SysInfo { registers: base }
    }

    /// Processor clock frequency in Hz.
    pub fn clock_frequency(&self) -> u32 {
        self.registers.clk.get()
    }

    /// User-defined build identifier baked into the bitstream.
    pub fn custom_id(&self) -> u32 {
        self.registers.custom_id.get()
    }

    /// Whether the TRNG was synthesized into this SoC build.
    pub fn has_trng(&self) -> bool {
        self.registers.soc.is_set(SOC::IO_TRNG)
    }
}
