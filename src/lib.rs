//! MEGA65 / Commodore 65 memory decoding and mapping core.
//!
//! Resolves every access issued by the emulated 4510 CPU, the DMA engine
//! and the debugger onto a 28-bit physical address space, faithful to the
//! overlapping C64, C65 and MEGA65 banking mechanisms: the processor port
//! at $00/$01, VIC-III ROM banking, the `MAP` opcode windows with the
//! megabyte extension, and hypervisor mode.

pub mod memory;

pub use memory::Memory;
