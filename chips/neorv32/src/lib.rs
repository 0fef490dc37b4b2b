// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Peripheral implementations for the NEORV32 soft-core RISC-V processor.
//!
//! NEORV32 is a configurable SoC: every peripheral can be left out of a
//! build, and software discovers what is actually present through the
//! [`sysinfo`] block before touching a unit's registers.

#![no_std]

#[cfg(test)]
extern crate std;

mod static_ref;

pub mod support;
pub mod sysinfo;
pub mod trng;

pub use static_ref::StaticRef;
