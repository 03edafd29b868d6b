//! Physical address decoding: the 28-bit region table and the linear
//! decoder that materialises slot entries from it.
//!
//! The table partitions the whole 28-bit space into contiguous, ordered,
//! page-aligned regions. Every region either carries direct backing (a
//! storage id plus the region's base offset inside that storage) or a
//! callback tag, per direction. Lookups walk from a caller-supplied hint;
//! mappings are strongly local, so the walk is a step or two in practice.

use super::types::{DataRef, ReadRoutine, SlotEntry, StorageId, WriteRoutine};
use super::{Memory, HYPERVISOR_RAM_BASE, MAIN_RAM_SIZE, SLOW_RAM_SIZE};

/// Region page-setup policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Policy {
    /// No special handling.
    Normal,
    /// The C65 ROM image, write protectable from hypervisor mode.
    Rom,
    /// Readable/writable only in hypervisor mode; otherwise reads $FF and
    /// swallows writes.
    Hypervisor,
    /// Declared for the MEGA65 I/O aperture, not yet materialised in the
    /// table. The sanity check rejects it.
    #[allow(dead_code)]
    IoRegion,
}

pub(crate) struct Region {
    pub begin: u32,
    pub end: u32,
    pub rd_data: Option<(StorageId, u32)>,
    pub rd_fn: Option<ReadRoutine>,
    pub wr_data: Option<(StorageId, u32)>,
    pub wr_fn: Option<WriteRoutine>,
    pub policy: Policy,
}

const fn undecoded(begin: u32, end: u32) -> Region {
    Region {
        begin,
        end,
        rd_data: None,
        rd_fn: Some(ReadRoutine::Undecoded),
        wr_data: None,
        wr_fn: Some(WriteRoutine::Undecoded),
        policy: Policy::Normal,
    }
}

const fn backed(begin: u32, end: u32, storage: StorageId, base: u32, policy: Policy) -> Region {
    Region {
        begin,
        end,
        rd_data: Some((storage, base)),
        rd_fn: None,
        wr_data: Some((storage, base)),
        wr_fn: None,
        policy,
    }
}

/// The complete 28-bit decoder table. Must stay ordered, contiguous and
/// page-aligned; `check_decoder_table` verifies this in debug builds.
pub(crate) const DECODER_TABLE: &[Region] = &[
    // The first page of main RAM holds the CPU I/O port at addresses 0/1,
    // so its write side goes through a dedicated handler.
    Region {
        begin: 0x0000000,
        end: 0x00000FF,
        rd_data: Some((StorageId::MainRam, 0)),
        rd_fn: None,
        wr_data: None,
        wr_fn: Some(WriteRoutine::ZeroPage),
        policy: Policy::Normal,
    },
    // Main RAM up to the C65 colour RAM head.
    backed(0x0000100, 0x001F7FF, StorageId::MainRam, 0x100, Policy::Normal),
    // Last 2K of the first 128K: the C65 colour RAM head. Reads are plain
    // main RAM; writes are mirrored into the colour RAM views.
    Region {
        begin: 0x001F800,
        end: 0x001FFFF,
        rd_data: Some((StorageId::MainRam, 0x1F800)),
        rd_fn: None,
        wr_data: None,
        wr_fn: Some(WriteRoutine::ColourRamHead),
        policy: Policy::Normal,
    },
    // 128K C65 "ROM", actually main RAM behind an optional write protect.
    backed(0x0020000, 0x003FFFF, StorageId::MainRam, 0x20000, Policy::Rom),
    // The rest of main RAM.
    backed(
        0x0040000,
        MAIN_RAM_SIZE as u32 - 1,
        StorageId::MainRam,
        0x40000,
        Policy::Normal,
    ),
    undecoded(MAIN_RAM_SIZE as u32, 0x3FFFFFF),
    // Ignored block: reads source $FF, writes vanish, no diagnostics.
    Region {
        begin: 0x4000000,
        end: 0x7FFFFFF,
        rd_data: Some((StorageId::WhiteHoleFf, 0)),
        rd_fn: None,
        wr_data: Some((StorageId::BlackHole, 0)),
        wr_fn: None,
        policy: Policy::Normal,
    },
    backed(
        0x8000000,
        0x8000000 + SLOW_RAM_SIZE as u32 - 1,
        StorageId::SlowRam,
        0,
        Policy::Normal,
    ),
    undecoded(0x8000000 + SLOW_RAM_SIZE as u32, HYPERVISOR_RAM_BASE - 1),
    backed(
        HYPERVISOR_RAM_BASE,
        HYPERVISOR_RAM_BASE + 0x3FFF,
        StorageId::HyperRam,
        0,
        Policy::Hypervisor,
    ),
    undecoded(HYPERVISOR_RAM_BASE + 0x4000, 0xFFFFFFF),
];

/// One-time construction check: the table must cover the whole 28-bit space
/// with ordered, gapless, page-aligned regions and no unsettled policies.
pub(crate) fn check_decoder_table() -> Result<(), &'static str> {
    if DECODER_TABLE[0].begin != 0 {
        return Err("table does not start at 0x0");
    }
    let mut previous_end = None;
    for region in DECODER_TABLE {
        if region.begin >= region.end {
            return Err("a region has zero or negative size");
        }
        if region.begin & 0xFF != 0 {
            return Err("a region begins off a page boundary");
        }
        if region.end & 0xFF != 0xFF {
            return Err("a region ends off a page boundary");
        }
        if let Some(end) = previous_end {
            if region.begin != end + 1 {
                return Err("hole or overlap between regions");
            }
        }
        if region.policy == Policy::IoRegion {
            return Err("IoRegion policy is not materialisable yet");
        }
        previous_end = Some(region.end);
    }
    if previous_end != Some(0xFFFFFFF) {
        return Err("table does not end at 0xFFFFFFF");
    }
    Ok(())
}

/// Find the region covering a page-aligned address, walking from `hint`.
pub(crate) fn find_region(page: u32, hint: usize) -> usize {
    let mut index = hint;
    while page < DECODER_TABLE[index].begin {
        index -= 1;
    }
    while page > DECODER_TABLE[index].end {
        index += 1;
    }
    index
}

fn page_ref(storage: StorageId, region_base: u32, page_offset: u32) -> DataRef {
    let base = if storage.mirrors_per_page() {
        0
    } else {
        region_base + page_offset
    };
    DataRef { storage, base }
}

impl Memory {
    /// Decode one 256-byte physical page into the given slot, honoring the
    /// covering region's policy. `page` must have its low 8 bits clear.
    /// Returns the region index to pass back as the next hint.
    pub(crate) fn resolve_linear(&mut self, page: u32, slot: usize, hint: usize) -> usize {
        debug_assert_eq!(page & 0xFF, 0);
        let index = find_region(page, hint);
        let region = &DECODER_TABLE[index];
        let page_offset = page - region.begin;
        let mut entry = SlotEntry {
            rd_data: region
                .rd_data
                .map(|(storage, base)| page_ref(storage, base, page_offset)),
            rd_fn: region.rd_fn.unwrap_or(ReadRoutine::Undecoded),
            wr_data: region
                .wr_data
                .map(|(storage, base)| page_ref(storage, base, page_offset)),
            wr_fn: region.wr_fn.unwrap_or(WriteRoutine::Undecoded),
            rd_ofs: page,
            wr_ofs: page,
        };
        match region.policy {
            Policy::Normal => {}
            Policy::Rom => {
                if self.rom_protect && region.rd_data.is_some() {
                    entry.wr_data = Some(DataRef::BLACK_HOLE);
                }
            }
            Policy::Hypervisor => {
                if !self.runtime.in_hypervisor {
                    entry.rd_data = Some(DataRef::WHITE_HOLE_FF);
                    entry.wr_data = Some(DataRef::BLACK_HOLE);
                }
            }
            Policy::IoRegion => {
                debug_assert!(false, "IoRegion policy reached the linear decoder");
                entry.rd_data = None;
                entry.rd_fn = ReadRoutine::Undecoded;
                entry.wr_data = None;
                entry.wr_fn = WriteRoutine::Undecoded;
            }
        }
        self.runtime.slots[slot] = entry;
        index
    }
}
