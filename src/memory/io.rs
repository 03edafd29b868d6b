//! Legacy I/O trampoline for the 4 KiB aperture at $D000.
//!
//! The core implements no I/O chip itself, it only routes. The I/O
//! subsystem registers one reader and one writer per 256-byte page and per
//! VIC I/O personality, and the logical decoder wires slots $D0-$DF to the
//! trampoline whenever the C64-style layout makes I/O visible there.

use super::Memory;

/// VIC I/O personalities selecting a legacy-I/O handler row.
pub const IO_MODE_C64: u8 = 0;
pub const IO_MODE_C65: u8 = 1;
pub const IO_MODE_M65: u8 = 3;

pub(crate) const IO_MODE_COUNT: usize = 4;
pub(crate) const IO_PAGE_COUNT: usize = 16;

/// Handlers receive the core so they can reach shared state (for example
/// the colour RAM views); writers can additionally pick up
/// [`Memory::rmw_old_data`] during read-modify-write stores.
pub type LegacyIoReader = fn(&mut Memory, u16) -> u8;
pub type LegacyIoWriter = fn(&mut Memory, u16, u8);

/// Unclaimed pages behave as open bus: reads $FF, writes vanish.
fn open_bus_read(_memory: &mut Memory, _addr: u16) -> u8 {
    0xFF
}

fn open_bus_write(_memory: &mut Memory, _addr: u16, _data: u8) {}

/// Per-personality, per-page handler tables for the $D000 aperture.
#[derive(Clone)]
pub(crate) struct IoTables {
    pub readers: [[LegacyIoReader; IO_PAGE_COUNT]; IO_MODE_COUNT],
    pub writers: [[LegacyIoWriter; IO_PAGE_COUNT]; IO_MODE_COUNT],
}

impl Default for IoTables {
    fn default() -> Self {
        Self {
            readers: [[open_bus_read; IO_PAGE_COUNT]; IO_MODE_COUNT],
            writers: [[open_bus_write; IO_PAGE_COUNT]; IO_MODE_COUNT],
        }
    }
}

impl Memory {
    /// Select the VIC I/O personality. Handler lookup happens at dispatch
    /// time, so no slot invalidation is needed here.
    pub fn set_vic_iomode(&mut self, iomode: u8) {
        debug_assert!((iomode as usize) < IO_MODE_COUNT);
        self.runtime.vic_iomode = iomode & 3;
    }

    pub fn vic_iomode(&self) -> u8 {
        self.runtime.vic_iomode
    }

    /// Register the handlers for one 256-byte page of the legacy I/O
    /// aperture under one VIC personality. Called by the I/O subsystem at
    /// machine construction time.
    pub fn set_legacy_io_handler(
        &mut self,
        iomode: u8,
        page: usize,
        reader: LegacyIoReader,
        writer: LegacyIoWriter,
    ) {
        assert!(page < IO_PAGE_COUNT, "legacy I/O page out of range");
        let mode = (iomode & 3) as usize;
        self.runtime.io.readers[mode][page] = reader;
        self.runtime.io.writers[mode][page] = writer;
    }
}
