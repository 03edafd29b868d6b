//! Logical (CPU) address decoding.
//!
//! Combines the C64 processor-port layout, the VIC-III ROM bits, the `MAP`
//! window state and hypervisor mode to pick the physical page behind each
//! CPU slot, then hands the page to the linear decoder. Works per 4 KiB
//! page: `MAP` has 8 KiB granularity but the legacy I/O aperture and the
//! VIC-III $C000 window are 4 KiB.

use super::types::{DataRef, ReadRoutine, SlotEntry, StorageId, WriteRoutine};
use super::Memory;

// C64 processor-port memory layout bits. The three $D000 states share the
// low two bits and nothing else lives there.
pub(crate) const C64_D000_RAM_VISIBLE: u8 = 0;
pub(crate) const C64_D000_CHARGEN_VISIBLE: u8 = 1;
pub(crate) const C64_D000_IO_VISIBLE: u8 = 2;
pub(crate) const C64_D000_MASK: u8 = 3;
pub(crate) const C64_KERNAL_VISIBLE: u8 = 4;
pub(crate) const C64_BASIC_VISIBLE: u8 = 8;

/// C64-style memory configurations indexed by the effective CPU I/O port
/// value (data and direction register both matter). Writes always land in
/// RAM except in the I/O-visible case; that rule lives in the decoder, not
/// here.
pub(crate) const C64_MEMLAYOUT_TABLE: [u8; 8] = [
    C64_D000_RAM_VISIBLE,
    C64_D000_CHARGEN_VISIBLE,
    C64_D000_CHARGEN_VISIBLE | C64_KERNAL_VISIBLE,
    C64_D000_CHARGEN_VISIBLE | C64_KERNAL_VISIBLE | C64_BASIC_VISIBLE,
    C64_D000_RAM_VISIBLE,
    C64_D000_IO_VISIBLE,
    C64_D000_IO_VISIBLE | C64_KERNAL_VISIBLE,
    C64_D000_IO_VISIBLE | C64_KERNAL_VISIBLE | C64_BASIC_VISIBLE,
];

// Bits of VIC-III register $30 selecting the C65 ROM windows.
pub(crate) const VIC3_ROM_8000: u8 = 0x08;
pub(crate) const VIC3_ROM_A000: u8 = 0x10;
pub(crate) const VIC3_ROM_C000: u8 = 0x20;
pub(crate) const VIC3_ROM_E000: u8 = 0x80;
pub(crate) const VIC3_ROM_BITS: u8 = VIC3_ROM_8000 | VIC3_ROM_A000 | VIC3_ROM_C000 | VIC3_ROM_E000;

// Physical homes of the ROM windows inside the C65 ROM image. C64-style
// windows read the C64 compatibility copies and write through to RAM at the
// logical address; C65-style windows honor the ROM write protect.
const C65_ROM_IMAGE: u32 = 0x20000;
const C65_ROM_HIGH: u32 = 0x30000;

type SlotMapper = fn(&mut Memory, usize);

impl Memory {
    fn vic3_rom_enabled(&self, bit: u8) -> bool {
        // VIC-III ROM mapping is disabled in hypervisor mode by design.
        self.vic3_rom_cfg & bit != 0 && !self.runtime.in_hypervisor
    }

    /// Decode which physical page a CPU slot currently represents and
    /// materialise its dispatch entry. Only valid for the 256 CPU slots;
    /// the channel slots are decoded eagerly by their own cache logic.
    pub(crate) fn decode_cpu_slot(&mut self, slot: usize) {
        debug_assert!(slot < 0x100);
        let page4k = slot >> 4;
        match page4k {
            // Low half: a MAP block or plain RAM, nothing else competes.
            0x0..=0x7 => {
                if self.map_mask & (1u8 << (page4k >> 1)) != 0 {
                    self.map_low_window(slot, page4k);
                } else {
                    let first = (page4k & !1) << 4;
                    self.legacy_window(slot, first, first + 0x1F, Memory::map_plain_ram);
                }
            }
            0x8 | 0x9 => {
                if self.vic3_rom_enabled(VIC3_ROM_8000) {
                    self.legacy_window(slot, 0x80, 0x9F, Memory::map_c65_rom_high);
                } else if self.map_mask & 0x10 != 0 {
                    self.map_high_window(slot, page4k);
                } else {
                    self.legacy_window(slot, 0x80, 0x9F, Memory::map_plain_ram);
                }
            }
            0xA | 0xB => {
                if self.vic3_rom_enabled(VIC3_ROM_A000) {
                    self.legacy_window(slot, 0xA0, 0xBF, Memory::map_c65_rom_high);
                } else if self.map_mask & 0x20 != 0 {
                    self.map_high_window(slot, page4k);
                } else if self.c64_memlayout & C64_BASIC_VISIBLE != 0 {
                    self.legacy_window(slot, 0xA0, 0xBF, Memory::map_c64_rom);
                } else {
                    self.legacy_window(slot, 0xA0, 0xBF, Memory::map_plain_ram);
                }
            }
            0xC => {
                // The VIC-III $C000 window is the only 4 KiB one.
                if self.vic3_rom_enabled(VIC3_ROM_C000) {
                    self.legacy_window(slot, 0xC0, 0xCF, Memory::map_c65_rom_c000);
                } else if self.map_mask & 0x40 != 0 {
                    self.map_high_window(slot, page4k);
                } else {
                    self.legacy_window(slot, 0xC0, 0xCF, Memory::map_plain_ram);
                }
            }
            0xD => {
                if self.map_mask & 0x40 != 0 {
                    self.map_high_window(slot, page4k);
                    self.runtime.legacy_io_is_mapped = false;
                } else if self.c64_memlayout & C64_D000_CHARGEN_VISIBLE != 0 {
                    self.legacy_window(slot, 0xD0, 0xDF, Memory::map_c64_rom);
                    self.runtime.legacy_io_is_mapped = false;
                } else if self.c64_memlayout & C64_D000_IO_VISIBLE != 0 {
                    self.legacy_window(slot, 0xD0, 0xDF, Memory::map_legacy_io);
                    self.runtime.legacy_io_is_mapped = true;
                } else {
                    self.legacy_window(slot, 0xD0, 0xDF, Memory::map_plain_ram);
                    self.runtime.legacy_io_is_mapped = false;
                }
            }
            0xE | 0xF => {
                if self.vic3_rom_enabled(VIC3_ROM_E000) {
                    self.legacy_window(slot, 0xE0, 0xFF, Memory::map_c65_rom_high);
                } else if self.map_mask & 0x80 != 0 {
                    self.map_high_window(slot, page4k);
                } else if self.c64_memlayout & C64_KERNAL_VISIBLE != 0 {
                    self.legacy_window(slot, 0xE0, 0xFF, Memory::map_c64_rom);
                } else {
                    self.legacy_window(slot, 0xE0, 0xFF, Memory::map_plain_ram);
                }
            }
            _ => unreachable!(),
        }
    }

    /// Materialise a legacy mapping: the whole window at once, or just the
    /// touched slot when lazy resolution is selected. Both behave the same;
    /// full resolution trades decode work for fewer resolver hits.
    fn legacy_window(&mut self, slot: usize, first: usize, last: usize, mapper: SlotMapper) {
        if self.runtime.full_window_resolve {
            for index in first..=last {
                mapper(self, index);
            }
        } else {
            debug_assert!((first..=last).contains(&slot));
            mapper(self, slot);
        }
    }

    // MAP windows resolve one slot at a time; the window offset can point
    // anywhere in the 28-bit space, so each page goes through the region
    // table with the per-4K-page hint.
    fn map_low_window(&mut self, slot: usize, page4k: usize) {
        let page = self.map_megabyte_low
            + ((self.map_offset_low + ((slot as u32) << 8)) & 0xFFF00);
        let hint = self.runtime.window_hint[page4k];
        self.runtime.window_hint[page4k] = self.resolve_linear(page, slot, hint);
    }

    fn map_high_window(&mut self, slot: usize, page4k: usize) {
        let page = self.map_megabyte_high
            + ((self.map_offset_high + ((slot as u32) << 8)) & 0xFFF00);
        let hint = self.runtime.window_hint[page4k];
        self.runtime.window_hint[page4k] = self.resolve_linear(page, slot, hint);
    }

    /// Legacy RAM: the slot maps its own page of the first 64K of main RAM.
    /// Slot 0 writes go through the CPU I/O port handler.
    fn map_plain_ram(&mut self, slot: usize) {
        let page = (slot as u32) << 8;
        let data = DataRef {
            storage: StorageId::MainRam,
            base: page,
        };
        let (wr_data, wr_fn) = if slot == 0 {
            (None, WriteRoutine::ZeroPage)
        } else {
            (Some(data), WriteRoutine::Resolve)
        };
        self.runtime.slots[slot] = SlotEntry {
            rd_data: Some(data),
            rd_fn: ReadRoutine::Resolve,
            wr_data,
            wr_fn,
            rd_ofs: page,
            wr_ofs: page,
        };
    }

    /// C64-style ROM window: reads come from the C64 copies inside the C65
    /// ROM image, writes fall through to RAM at the logical address.
    fn map_c64_rom(&mut self, slot: usize) {
        let page = (slot as u32) << 8;
        self.runtime.slots[slot] = SlotEntry {
            rd_data: Some(DataRef {
                storage: StorageId::MainRam,
                base: C65_ROM_IMAGE + page,
            }),
            rd_fn: ReadRoutine::Resolve,
            wr_data: Some(DataRef {
                storage: StorageId::MainRam,
                base: page,
            }),
            wr_fn: WriteRoutine::Resolve,
            rd_ofs: C65_ROM_IMAGE + page,
            wr_ofs: page,
        };
    }

    fn map_c65_rom(&mut self, slot: usize, image: u32) {
        let page = image + ((slot as u32) << 8);
        let wr_data = if self.rom_protect {
            DataRef::BLACK_HOLE
        } else {
            DataRef {
                storage: StorageId::MainRam,
                base: page,
            }
        };
        self.runtime.slots[slot] = SlotEntry {
            rd_data: Some(DataRef {
                storage: StorageId::MainRam,
                base: page,
            }),
            rd_fn: ReadRoutine::Resolve,
            wr_data: Some(wr_data),
            wr_fn: WriteRoutine::Resolve,
            rd_ofs: page,
            wr_ofs: page,
        };
    }

    /// C65 ROM windows at $8000/$A000/$E000 map from $30000 upwards.
    fn map_c65_rom_high(&mut self, slot: usize) {
        self.map_c65_rom(slot, C65_ROM_HIGH);
    }

    /// The C65 interface ROM window at $C000 maps from $2C000.
    fn map_c65_rom_c000(&mut self, slot: usize) {
        self.map_c65_rom(slot, C65_ROM_IMAGE);
    }

    fn map_legacy_io(&mut self, slot: usize) {
        let page = (slot as u32) << 8;
        self.runtime.slots[slot] = SlotEntry {
            rd_data: None,
            rd_fn: ReadRoutine::LegacyIo,
            wr_data: None,
            wr_fn: WriteRoutine::LegacyIo,
            rd_ofs: page,
            wr_ofs: page,
        };
    }
}
