// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! NEORV32 true random number generator (TRNG).
//!
//! A single 32-bit control/status register drives the whole unit: the
//! enable bit, a write-1 pool flush that hardware clears on its own, a
//! simulation-mode flag, and the current data byte guarded by a valid bit.
//! The driver keeps no state of its own; every call reflects the register
//! at that moment.
//!
//! [`Trng::get_byte`] is a single non-blocking poll. It never waits for the
//! entropy core, so callers retry at whatever cadence suits them:
//!
//! ```ignore
//! let sysinfo = SysInfo::new(sysinfo::SYSINFO_BASE);
//! let trng = Trng::new(trng::TRNG_BASE, &sysinfo);
//!
//! if trng.available() {
//!     trng.enable();
//!     let byte = loop {
//!         match trng.get_byte() {
//!             Ok(b) => break b,
//!             Err(trng::Error::NotReady) => continue,
//!         }
//!     };
//! }
//! ```

use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;
use crate::support;
use crate::sysinfo::SysInfo;

pub const TRNG_BASE: StaticRef<TrngRegisters> =
    unsafe { StaticRef::new(0xFFFF_FFB8 as *const TrngRegisters) };

/// Settle time after a CTRL write, in guaranteed-executed nop iterations.
///
/// The hardware needs time to release its internal reset lines and let the
/// entropy core stabilize before the register is meaningful again. The
/// constant counts loop iterations, not wall-clock time; re-derive it when
/// targeting a clock rate it has not been validated on.
pub const SETTLE_DELAY_LOOPS: u32 = 256;

register_structs! {
    pub TrngRegisters {
        (0x000 => ctrl: ReadWrite<u32, CTRL::Register>),
        (0x004 => @END),
    }
}

register_bitfields![u32,
    CTRL [
        /// Random data byte, meaningful only while VALID is set
        DATA OFFSET(0) NUMBITS(8) [],
        /// Flush the entropy pool; set by software, cleared by hardware
        FIFO_CLR OFFSET(28) NUMBITS(1) [],
        /// Entropy source is a PRNG substitute (simulation builds only)
        SIM_MODE OFFSET(29) NUMBITS(1) [],
        /// Enable the unit
        EN OFFSET(30) NUMBITS(1) [],
        /// DATA holds a byte not yet consumed
        VALID OFFSET(31) NUMBITS(1) []
    ]
];

/// Failure modes of [`Trng::get_byte`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// No fresh byte was present at the time of the poll. Recoverable: the
    /// pool refills on its own while the unit is enabled, so retry later.
    NotReady,
}

pub struct Trng<'a> {
    registers: StaticRef<TrngRegisters>,
    sysinfo: &'a SysInfo,
}

impl<'a> Trng<'a> {
    pub const fn new(base: StaticRef<TrngRegisters>, sysinfo: &'a SysInfo) -> Trng<'a> {
        Trng {
            registers: base,
            sysinfo,
        }
    }

    /// Whether the TRNG was synthesized into this SoC build.
    ///
    /// Check this (or know the bitstream configuration) before using the
    /// unit: on builds without the TRNG the control register reads all-zero
    /// and every other operation degrades to a silent no-op.
    pub fn available(&self) -> bool {
        self.sysinfo.has_trng()
    }

    /// Reset the unit, activate entropy generation and flush the pool.
    ///
    /// The final flush discards whatever collected in the pool while the
    /// entropy core was still settling. Safe to call on an already enabled
    /// unit; the sequence simply runs again.
    pub fn enable(&self) {
        // Force a defined all-off state before switching on.
        self.registers.ctrl.set(0);
        support::settle_delay(SETTLE_DELAY_LOOPS);

        self.registers.ctrl.write(CTRL::EN::SET);
        support::settle_delay(SETTLE_DELAY_LOOPS);

        self.clear_pool();
    }

    /// Deactivate the unit.
    pub fn disable(&self) {
        self.registers.ctrl.set(0);
    }

    /// Discard all bytes currently buffered in the hardware entropy pool.
    ///
    /// FIFO_CLR is self-clearing: hardware drops the bit once the flush
    /// completes, so it is never polled or read back here.
    pub fn clear_pool(&self) {
        self.registers.ctrl.modify(CTRL::FIFO_CLR::SET);
    }

    /// Poll for one random byte.
    ///
    /// Reads CTRL exactly once; VALID and DATA are taken from that same
    /// read. Returns [`Error::NotReady`] when no fresh byte is buffered.
    pub fn get_byte(&self) -> Result<u8, Error> {
        let ctrl = self.registers.ctrl.extract();

        if ctrl.is_set(CTRL::VALID) {
            Ok(ctrl.read(CTRL::DATA) as u8)
        } else {
            Err(Error::NotReady)
        }
    }

    /// Whether the entropy source is the simulation-mode PRNG.
    ///
    /// Simulation builds replace the physical noise source with an LFSR of
    /// very poor random quality; treat its output as predictable.
    pub fn is_simulated(&self) -> bool {
        self.registers.ctrl.is_set(CTRL::SIM_MODE)
    }
}
