//! Memory decoding and mapping core of a MEGA65 / Commodore 65 emulator.
//!
//! Every access by the emulated 4510 CPU, the DMA engine or the debugger is
//! resolved here onto a 28-bit physical address space populated by RAM,
//! write-protectable ROM, hypervisor RAM, constant sources, discard sinks
//! and the legacy I/O aperture. Four overlapping mechanisms control what
//! the CPU sees: the C64-style processor port at $00/$01, the C65 VIC-III
//! ROM bits, the C65 `MAP` opcode windows (with the MEGA65 megabyte
//! extension) and hypervisor mode.
//!
//! Dispatch is table driven. The 16-bit CPU space is split into 256 slots
//! of 256 bytes; each slot holds either a direct reference into a backing
//! store or a routine tag. Changing any mapping input only invalidates the
//! affected slots; the next access through an invalidated slot re-decodes
//! it on demand. Bus masters use five separate lanes with one-page caches
//! instead of the slot table.

use std::error::Error;

mod channels;
mod env;
mod io;
mod mapping;
mod regions;
mod types;


pub use io::{LegacyIoReader, LegacyIoWriter, IO_MODE_C64, IO_MODE_C65, IO_MODE_M65};
pub use types::{Channel, UnhandledMem};

use mapping::{C64_MEMLAYOUT_TABLE, VIC3_ROM_8000, VIC3_ROM_A000, VIC3_ROM_BITS, VIC3_ROM_C000, VIC3_ROM_E000};
use mapping::{C64_BASIC_VISIBLE, C64_D000_MASK, C64_KERNAL_VISIBLE};
use types::{DataRef, ReadRoutine, RuntimeState, SlotEntry, StorageId, WriteRoutine};

pub(crate) const MAIN_RAM_SIZE: usize = (256 + 128) << 10;
pub(crate) const SLOW_RAM_SIZE: usize = 8 << 20;
pub(crate) const COLOUR_RAM_SIZE: usize = 0x8000;
pub(crate) const HYPERVISOR_RAM_SIZE: usize = 0x4000;
/// C64-view shadow of the colour RAM head. 2K even though the VIC-II only
/// sees 1K, so the head writer never needs a bounds check.
pub(crate) const C64_COLOUR_RAM_SIZE: usize = 0x800;
/// Physical home of the colour RAM head inside main RAM.
pub(crate) const COLOUR_HEAD_BASE: u32 = 0x1F800;
/// Physical home of the hypervisor RAM.
pub(crate) const HYPERVISOR_RAM_BASE: u32 = 0xFFF8000;

const BRAM_INIT_PATTERN: u8 = 0x00;
const CRAM_INIT_PATTERN: u8 = 0x00;
const SLOWRAM_INIT_PATTERN: u8 = 0x00;
/// What reads of undecoded space return, regardless of the policy outcome.
pub const MEMORY_UNDECODED_PATTERN: u8 = 0xFF;

/// The memory core. Owns all storage and mapping state; multiple
/// independent instances are fine. Snapshot serialization covers the
/// canonical machine state only; every derived table is rebuilt after
/// [`Memory::load_state`].
#[derive(Clone, bincode::Encode, bincode::Decode)]
pub struct Memory {
    main_ram: Vec<u8>,
    slow_ram: Vec<u8>,
    colour_ram: Vec<u8>,
    hypervisor_ram: Vec<u8>,
    /// C64-style CPU I/O port: direction register at $00, data at $01.
    cpu_io_port: [u8; 2],
    // MAP opcode state: 20-bit window offsets plus the MEGA65 megabyte
    // slices (multiples of 1 MiB), and the per-8K-block mask.
    map_offset_low: u32,
    map_offset_high: u32,
    map_megabyte_low: u32,
    map_megabyte_high: u32,
    map_mask: u8,
    /// Write protect for the 128K C65 ROM image, hypervisor controlled.
    rom_protect: bool,
    /// Speed override toggled by writing 64/65 to address 0.
    force_fast: bool,
    /// Current C64-style layout, one entry of `C64_MEMLAYOUT_TABLE`.
    c64_memlayout: u8,
    /// Cached ROM bits of VIC-III register $30.
    vic3_rom_cfg: u8,
    runtime: RuntimeState,
}

impl Memory {
    pub fn new() -> Memory {
        #[cfg(debug_assertions)]
        if let Err(problem) = regions::check_decoder_table() {
            panic!("memory decoder table is malformed: {problem}");
        }
        let mut memory = Memory {
            main_ram: vec![BRAM_INIT_PATTERN; MAIN_RAM_SIZE],
            slow_ram: vec![SLOWRAM_INIT_PATTERN; SLOW_RAM_SIZE],
            colour_ram: vec![CRAM_INIT_PATTERN; COLOUR_RAM_SIZE],
            hypervisor_ram: vec![0x00; HYPERVISOR_RAM_SIZE],
            cpu_io_port: [0x00, 0x00],
            map_offset_low: 0,
            map_offset_high: 0,
            map_megabyte_low: 0,
            map_megabyte_high: 0,
            map_mask: 0,
            rom_protect: false,
            force_fast: false,
            c64_memlayout: C64_MEMLAYOUT_TABLE[0],
            vic3_rom_cfg: 0,
            runtime: RuntimeState::default(),
        };
        memory.seed_colour_shadows();
        memory.invalidate_mapper_all();
        memory
    }

    /// Keep the three colour RAM views consistent: main RAM head, canonical
    /// colour RAM and the nibble-masked C64 view.
    fn seed_colour_shadows(&mut self) {
        for index in 0..C64_COLOUR_RAM_SIZE {
            self.main_ram[COLOUR_HEAD_BASE as usize + index] = self.colour_ram[index];
            self.runtime.c64_colour_ram[index] = (self.colour_ram[index] & 0x0F) | 0xF0;
        }
    }

    // ── CPU dispatch ─────────────────────────────────────────────────────

    #[inline]
    pub fn cpu_read(&mut self, addr: u16) -> u8 {
        let slot = (addr >> 8) as usize;
        let entry = self.runtime.slots[slot];
        match entry.rd_data {
            Some(data) => self.load_byte(data, addr as u32),
            None => self.read_routine(entry.rd_fn, slot, addr as u32),
        }
    }

    #[inline]
    pub fn cpu_write(&mut self, addr: u16, data: u8) {
        let slot = (addr >> 8) as usize;
        let entry = self.runtime.slots[slot];
        match entry.wr_data {
            Some(target) => self.store_byte(target, addr as u32, data),
            None => self.write_routine(entry.wr_fn, slot, addr as u32, data),
        }
    }

    /// Read-modify-write store. Original 65xx CPUs wrote the old byte and
    /// then the new one; the C65 dropped that, the MEGA65 brought it back.
    /// Plain memory never notices, but an I/O callback can pick the old
    /// byte up through [`Memory::rmw_old_data`] for the duration of the
    /// call.
    pub fn cpu_write_rmw(&mut self, addr: u16, old_data: u8, new_data: u8) {
        let slot = (addr >> 8) as usize;
        let entry = self.runtime.slots[slot];
        match entry.wr_data {
            Some(target) => self.store_byte(target, addr as u32, new_data),
            None => {
                self.runtime.rmw_old_data = Some(old_data);
                self.write_routine(entry.wr_fn, slot, addr as u32, new_data);
                self.runtime.rmw_old_data = None;
            }
        }
    }

    /// Four-byte little-endian read. The slot is re-derived per byte, so
    /// crossing a page (or wrapping at $FFFF) dispatches correctly.
    pub fn cpu_read_qbyte(&mut self, addr: u16) -> u32 {
        let mut value = 0u32;
        for index in 0..4 {
            let byte = self.cpu_read(addr.wrapping_add(index));
            value |= (byte as u32) << (index * 8);
        }
        value
    }

    pub fn cpu_write_qbyte(&mut self, addr: u16, value: u32) {
        for index in 0..4 {
            self.cpu_write(addr.wrapping_add(index), (value >> (index * 8)) as u8);
        }
    }

    fn load_byte(&self, data: DataRef, addr: u32) -> u8 {
        let index = (data.base + (addr & 0xFF)) as usize;
        match data.storage {
            StorageId::MainRam => self.main_ram[index],
            StorageId::SlowRam => self.slow_ram[index],
            StorageId::HyperRam => self.hypervisor_ram[index],
            StorageId::WhiteHoleFf => self.runtime.white_hole_ff[index],
            StorageId::BlackHole => self.runtime.black_hole[index],
        }
    }

    fn store_byte(&mut self, target: DataRef, addr: u32, data: u8) {
        let index = (target.base + (addr & 0xFF)) as usize;
        match target.storage {
            StorageId::MainRam => self.main_ram[index] = data,
            StorageId::SlowRam => self.slow_ram[index] = data,
            StorageId::HyperRam => self.hypervisor_ram[index] = data,
            // A source page never appears as a write target; the accessor
            // stays total by swallowing anyway.
            StorageId::WhiteHoleFf | StorageId::BlackHole => {
                self.runtime.black_hole[(addr & 0xFF) as usize] = data;
            }
        }
    }

    fn read_routine(&mut self, routine: ReadRoutine, slot: usize, addr: u32) -> u8 {
        match routine {
            ReadRoutine::Resolve => {
                debug_assert!(slot < 0x100, "resolver tag on a channel slot");
                self.decode_cpu_slot(slot);
                self.cpu_read(addr as u16)
            }
            ReadRoutine::Undecoded => {
                let linaddr = self.runtime.slots[slot].rd_ofs + (addr & 0xFF);
                self.unhandled_access(linaddr, "read");
                MEMORY_UNDECODED_PATTERN
            }
            ReadRoutine::LegacyIo => {
                let reader =
                    self.runtime.io.readers[self.runtime.vic_iomode as usize][slot & 0x0F];
                reader(self, addr as u16)
            }
        }
    }

    fn write_routine(&mut self, routine: WriteRoutine, slot: usize, addr: u32, data: u8) {
        match routine {
            WriteRoutine::Resolve => {
                debug_assert!(slot < 0x100, "resolver tag on a channel slot");
                self.decode_cpu_slot(slot);
                self.cpu_write(addr as u16, data);
            }
            WriteRoutine::ZeroPage => self.zero_page_write(addr, data),
            WriteRoutine::ColourRamHead => self.colour_ram_head_write(slot, addr, data),
            WriteRoutine::Undecoded => {
                let linaddr = self.runtime.slots[slot].wr_ofs + (addr & 0xFF);
                self.unhandled_access(linaddr, "write");
            }
            WriteRoutine::LegacyIo => {
                let writer =
                    self.runtime.io.writers[self.runtime.vic_iomode as usize][slot & 0x0F];
                writer(self, addr as u16, data);
            }
        }
    }

    // ── Permanent write handlers ─────────────────────────────────────────

    /// Writes into the lowest page of main RAM. Addresses 0 and 1 are the
    /// CPU I/O port and carry side effects; everything else is plain RAM.
    fn zero_page_write(&mut self, addr: u32, data: u8) {
        if addr & 0xFE != 0 {
            self.main_ram[(addr & 0xFF) as usize] = data;
            return;
        }
        let port = (addr & 1) as usize;
        if port == 0 && (data & 0xFE) == 64 {
            // Writing 64/65 to address 0 toggles force-fast mode instead of
            // touching the port; bit 0 selects the state.
            let fast = data & 1 != 0;
            if self.force_fast != fast {
                self.force_fast = fast;
                if let Some(hook) = self.runtime.speed_hook {
                    hook(fast);
                }
            }
        } else {
            self.cpu_io_port[port] = data;
            self.update_cpu_io_port(true);
        }
    }

    /// The first 2K of colour RAM shadow the top of the first 128K of main
    /// RAM. A write lands in main RAM, the canonical colour RAM and the
    /// nibble-masked C64 view in one go, so no read path ever branches.
    fn colour_ram_head_write(&mut self, slot: usize, addr: u32, data: u8) {
        let phys = self.runtime.slots[slot].wr_ofs + (addr & 0xFF);
        let index = (phys - COLOUR_HEAD_BASE) as usize;
        self.main_ram[phys as usize] = data;
        self.colour_ram[index] = data;
        self.runtime.c64_colour_ram[index] = (data & 0x0F) | 0xF0;
    }

    fn unhandled_access(&mut self, linaddr: u32, operation: &str) {
        if self.runtime.unhandled_mem == UnhandledMem::Silent {
            log::trace!("unhandled memory {operation} at ${linaddr:07X}");
            return;
        }
        // Built up front so the PC probe is consulted on every reported
        // hit, whether or not a logger is listening.
        let message = format!(
            "unhandled memory {operation} at ${linaddr:07X}{}",
            self.pc_suffix()
        );
        match self.runtime.unhandled_mem {
            UnhandledMem::Silent => unreachable!(),
            UnhandledMem::Fatal => {
                log::error!("{message}");
                panic!("{message}");
            }
            UnhandledMem::WarnOnce => {
                log::warn!("{message} (further hits ignored)");
                self.runtime.unhandled_mem = UnhandledMem::Silent;
            }
            UnhandledMem::Warn => log::warn!("{message}"),
        }
    }

    fn pc_suffix(&self) -> String {
        match self.runtime.pc_probe {
            Some(probe) => format!(" (PC=${:04X})", probe()),
            None => String::new(),
        }
    }

    // ── Mapping-state mutators ───────────────────────────────────────────

    /// Recompute the C64-style layout from the effective port value and
    /// invalidate the windows the change can reach. A window whose `MAP`
    /// block is mapped ignores the port, so it is left alone.
    fn update_cpu_io_port(&mut self, update_mapper: bool) {
        let effective = ((self.cpu_io_port[1] | !self.cpu_io_port[0]) & 7) as usize;
        let desired = C64_MEMLAYOUT_TABLE[effective];
        // The port registers read back through the direct slot 0 pointer.
        self.main_ram[0] = self.cpu_io_port[0];
        self.main_ram[1] = self.cpu_io_port[1];
        if desired == self.c64_memlayout {
            return;
        }
        if update_mapper {
            let changed = desired ^ self.c64_memlayout;
            if changed & C64_BASIC_VISIBLE != 0 && self.map_mask & 0x20 == 0 {
                self.invalidate_mapper(0xA0, 0xBF);
            }
            if changed & C64_D000_MASK != 0 && self.map_mask & 0x40 == 0 {
                self.invalidate_mapper(0xD0, 0xDF);
                self.runtime.legacy_io_is_mapped = false;
            }
            if changed & C64_KERNAL_VISIBLE != 0 && self.map_mask & 0x80 == 0 {
                self.invalidate_mapper(0xE0, 0xFF);
            }
        }
        self.c64_memlayout = desired;
    }

    /// Set both CPU port registers at once, bypassing the zero-page write
    /// path. Used by the hypervisor trap return sequence.
    pub fn set_cpu_io_port(&mut self, ddr: u8, data: u8) {
        self.cpu_io_port[0] = ddr;
        self.cpu_io_port[1] = data;
        self.update_cpu_io_port(true);
    }

    /// The 4510 `MAP` opcode (the 65CE02 `AUG`, redefined by the C65).
    /// Loads the window offsets and the per-block mask from the register
    /// snapshot; X or Z equal to $0F additionally latches the MEGA65
    /// megabyte slice from A or Y. Interrupts stay inhibited until the next
    /// `EOM`.
    pub fn on_map_opcode(&mut self, a: u8, x: u8, y: u8, z: u8) {
        let old_low = self.map_megabyte_low + self.map_offset_low;
        let old_high = self.map_megabyte_high + self.map_offset_high;
        let old_mask = self.map_mask;
        self.runtime.inhibit_interrupts = true;
        self.map_offset_low = ((a as u32) << 8) | (((x & 15) as u32) << 16);
        self.map_offset_high = ((y as u32) << 8) | (((z & 15) as u32) << 16);
        self.map_mask = (z & 0xF0) | (x >> 4);
        if x == 0x0F {
            self.map_megabyte_low = (a as u32) << 20;
        }
        if z == 0x0F {
            self.map_megabyte_high = (y as u32) << 20;
        }
        log::debug!(
            "MAP A=${a:02X} X=${x:02X} Y=${y:02X} Z=${z:02X}: low=${:05X}+${:02X}MB high=${:05X}+${:02X}MB mask=${:02X}",
            self.map_offset_low,
            self.map_megabyte_low >> 20,
            self.map_offset_high,
            self.map_megabyte_high >> 20,
            self.map_mask
        );
        if self.runtime.partial_map_invalidation {
            // Over-invalidating is harmless; failing to invalidate a window
            // that changed is not. The full-address comparison can flush a
            // window whose half did not move, which is fine.
            let changed_mask = old_mask ^ self.map_mask;
            let low_moved = self.map_megabyte_low + self.map_offset_low != old_low;
            let high_moved = self.map_megabyte_high + self.map_offset_high != old_high;
            for block in 0usize..8 {
                let bit = 1u8 << block;
                let moved = if block < 4 { low_moved } else { high_moved };
                if (moved && self.map_mask & bit != 0) || changed_mask & bit != 0 {
                    let first = block * 0x20;
                    self.invalidate_mapper(first, first + 0x1F);
                    if block == 6 {
                        self.runtime.legacy_io_is_mapped = false;
                    }
                }
            }
        } else {
            // Channels keep their caches; MAP has no effect on linear lanes.
            self.invalidate_mapper(0x00, 0xFF);
            self.runtime.legacy_io_is_mapped = false;
        }
    }

    /// The `EOM` opcode (a NOP on earlier CPUs): lifts the interrupt
    /// inhibit of a preceding `MAP`. A NOP with no MAP pending does nothing.
    pub fn on_eom_opcode(&mut self) {
        if self.runtime.inhibit_interrupts {
            self.runtime.inhibit_interrupts = false;
            log::trace!("EOM: interrupt inhibit lifted");
        }
    }

    /// Update the VIC-III ROM banking bits from register $30. Only the four
    /// ROM bits matter; the windows whose bit changed are flushed. In
    /// hypervisor mode the effective configuration is forced to zero.
    pub fn set_vic3_rom_mapping(&mut self, cfg: u8) {
        let cfg = cfg & VIC3_ROM_BITS;
        let (old_effective, new_effective) = if self.runtime.in_hypervisor {
            (0, 0)
        } else {
            (self.vic3_rom_cfg, cfg)
        };
        let changed = old_effective ^ new_effective;
        self.vic3_rom_cfg = cfg;
        if changed & VIC3_ROM_8000 != 0 {
            self.invalidate_mapper(0x80, 0x9F);
        }
        if changed & VIC3_ROM_A000 != 0 {
            self.invalidate_mapper(0xA0, 0xBF);
        }
        if changed & VIC3_ROM_C000 != 0 {
            self.invalidate_mapper(0xC0, 0xCF);
        }
        if changed & VIC3_ROM_E000 != 0 {
            self.invalidate_mapper(0xE0, 0xFF);
        }
    }

    /// Enter or leave hypervisor mode. ROM-mask visibility and the
    /// hypervisor RAM region both depend on the mode, so the upper half of
    /// the CPU space and the channel caches are flushed on a change.
    pub fn set_hypervisor_mode(&mut self, active: bool) {
        if self.runtime.in_hypervisor == active {
            return;
        }
        self.runtime.in_hypervisor = active;
        self.invalidate_mapper(0x80, 0xFF);
        self.invalidate_channels();
    }

    /// Change the ROM write protect. Only accepted in hypervisor mode; any
    /// slot or channel may currently point into the ROM image, so
    /// everything is flushed.
    pub fn set_rom_protect(&mut self, protect: bool) {
        if !self.runtime.in_hypervisor {
            log::warn!("rom_protect change ignored outside hypervisor mode");
            return;
        }
        if self.rom_protect != protect {
            self.rom_protect = protect;
            self.invalidate_mapper(0x00, 0xFF);
            self.invalidate_channels();
        }
    }

    // ── Invalidation ─────────────────────────────────────────────────────

    /// Reset a range of CPU slots to the lazy resolver. Cheap; the cost is
    /// paid by whichever access touches the slot next.
    pub fn invalidate_mapper(&mut self, first_slot: usize, last_slot: usize) {
        debug_assert!(first_slot <= last_slot && last_slot < 0x100);
        log::trace!("invalidating CPU slots ${first_slot:02X}-${last_slot:02X}");
        for slot in first_slot..=last_slot {
            self.runtime.slots[slot] = SlotEntry::INVALID;
        }
    }

    pub fn invalidate_mapper_all(&mut self) {
        self.invalidate_mapper(0x00, 0xFF);
        self.invalidate_channels();
        self.runtime.legacy_io_is_mapped = false;
    }

    // ── Snapshot ─────────────────────────────────────────────────────────

    pub fn save_state(&self) -> Result<Vec<u8>, Box<dyn Error>> {
        Ok(bincode::encode_to_vec(self, bincode::config::standard())?)
    }

    pub fn load_state(bytes: &[u8]) -> Result<Memory, Box<dyn Error>> {
        let (mut memory, _): (Memory, usize) =
            bincode::decode_from_slice(bytes, bincode::config::standard())?;
        memory.post_restore()?;
        Ok(memory)
    }

    /// Rebuild everything derived after a state load: storage sizes are
    /// checked, the colour shadows regenerate from the canonical colour RAM
    /// and every slot and channel is invalidated.
    fn post_restore(&mut self) -> Result<(), Box<dyn Error>> {
        if self.main_ram.len() != MAIN_RAM_SIZE {
            return Err("saved state: main RAM size mismatch".into());
        }
        if self.slow_ram.len() != SLOW_RAM_SIZE {
            return Err("saved state: slow RAM size mismatch".into());
        }
        if self.colour_ram.len() != COLOUR_RAM_SIZE {
            return Err("saved state: colour RAM size mismatch".into());
        }
        if self.hypervisor_ram.len() != HYPERVISOR_RAM_SIZE {
            return Err("saved state: hypervisor RAM size mismatch".into());
        }
        self.seed_colour_shadows();
        self.invalidate_mapper_all();
        Ok(())
    }

    // ── Collaborator wiring ──────────────────────────────────────────────

    /// Register the CPU's program counter probe, used to annotate
    /// unhandled-memory diagnostics.
    pub fn set_pc_probe(&mut self, probe: fn() -> u16) {
        self.runtime.pc_probe = Some(probe);
    }

    /// Register the machine-speed governor hook, invoked when force-fast
    /// mode changes.
    pub fn set_speed_hook(&mut self, hook: fn(bool)) {
        self.runtime.speed_hook = Some(hook);
    }

    pub fn set_unhandled_policy(&mut self, policy: UnhandledMem) {
        self.runtime.unhandled_mem = policy;
    }

    pub fn unhandled_policy(&self) -> UnhandledMem {
        self.runtime.unhandled_mem
    }

    /// Resolve whole 8K windows at once (the default) or only the touched
    /// slot. Observable behavior is identical either way.
    pub fn set_full_window_resolve(&mut self, full: bool) {
        self.runtime.full_window_resolve = full;
    }

    /// Invalidate only the windows a `MAP` actually changed (the default)
    /// or all 256 slots. Observable behavior is identical either way.
    pub fn set_partial_map_invalidation(&mut self, partial: bool) {
        self.runtime.partial_map_invalidation = partial;
    }

    // ── Observers ────────────────────────────────────────────────────────

    /// Set by `MAP`, cleared by `EOM`; the CPU holds interrupts while true.
    pub fn cpu_inhibit_interrupts(&self) -> bool {
        self.runtime.inhibit_interrupts
    }

    /// Old byte of an in-flight read-modify-write store; `None` outside a
    /// callback-based RMW write.
    pub fn rmw_old_data(&self) -> Option<u8> {
        self.runtime.rmw_old_data
    }

    pub fn force_fast(&self) -> bool {
        self.force_fast
    }

    pub fn in_hypervisor(&self) -> bool {
        self.runtime.in_hypervisor
    }

    pub fn rom_protect(&self) -> bool {
        self.rom_protect
    }

    /// True while slots $D0-$DF route to the legacy I/O trampoline.
    pub fn legacy_io_is_mapped(&self) -> bool {
        self.runtime.legacy_io_is_mapped
    }

    pub fn c64_memlayout(&self) -> u8 {
        self.c64_memlayout
    }

    // ── Storage access for collaborators ─────────────────────────────────

    /// Copy data into main RAM without going through decode, for ROM
    /// loading and test setup.
    pub fn load_main_ram(&mut self, offset: usize, data: &[u8]) {
        let end = (offset + data.len()).min(self.main_ram.len());
        if end > offset {
            self.main_ram[offset..end].copy_from_slice(&data[..end - offset]);
        }
    }

    pub fn main_ram(&self) -> &[u8] {
        &self.main_ram
    }

    pub fn slow_ram(&self) -> &[u8] {
        &self.slow_ram
    }

    pub fn colour_ram(&self) -> &[u8] {
        &self.colour_ram
    }

    /// The 4-bit masked colour RAM view served in C64 I/O mode.
    pub fn c64_colour_ram(&self) -> &[u8] {
        &self.runtime.c64_colour_ram
    }

    pub fn hypervisor_ram(&self) -> &[u8] {
        &self.hypervisor_ram
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
