use super::io::IoTables;
use super::Memory;

/// Linear-address access lanes that bypass the CPU slot table. Each lane
/// keeps its own one-page decode cache so DMA traffic does not evict CPU
/// mappings (and vice versa).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    DmaList = 0,
    DmaSource = 1,
    DmaTarget = 2,
    CpuLinear = 3,
    Debugger = 4,
}

pub(crate) const CHANNEL_COUNT: usize = 5;

/// CPU slots (256 pages of the 16-bit space) followed by the channel slots.
pub(crate) const SLOT_TABLE_SIZE: usize = 0x100 + CHANNEL_COUNT;

/// What to do when an access lands in undecoded space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnhandledMem {
    /// Log an error and panic.
    Fatal = 0,
    /// Warn on the first hit, then fall silent.
    WarnOnce = 1,
    /// Warn on every hit.
    Warn = 2,
    Silent = 3,
}

impl UnhandledMem {
    pub fn from_level(level: u8) -> Option<UnhandledMem> {
        match level {
            0 => Some(UnhandledMem::Fatal),
            1 => Some(UnhandledMem::WarnOnce),
            2 => Some(UnhandledMem::Warn),
            3 => Some(UnhandledMem::Silent),
            _ => None,
        }
    }
}

/// Backing storage selector for direct slot access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StorageId {
    MainRam,
    SlowRam,
    HyperRam,
    /// Constant source page, reads $FF.
    WhiteHoleFf,
    /// Discard sink, swallows writes.
    BlackHole,
}

impl StorageId {
    /// The hole pages are 256 bytes and repeat over their whole region.
    pub(crate) fn mirrors_per_page(self) -> bool {
        matches!(self, StorageId::WhiteHoleFf | StorageId::BlackHole)
    }
}

/// Direct reference to one 256-byte page of backing storage. `base` is the
/// byte offset of the page start inside the storage; accessors add
/// `addr & 0xFF`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DataRef {
    pub storage: StorageId,
    pub base: u32,
}

impl DataRef {
    pub(crate) const WHITE_HOLE_FF: DataRef = DataRef {
        storage: StorageId::WhiteHoleFf,
        base: 0,
    };
    pub(crate) const BLACK_HOLE: DataRef = DataRef {
        storage: StorageId::BlackHole,
        base: 0,
    };
}

/// Read dispatch tag, consulted only when a slot has no direct read ref.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ReadRoutine {
    /// Lazy resolver: decode the slot, then retry the access.
    Resolve,
    Undecoded,
    LegacyIo,
}

/// Write dispatch tag, consulted only when a slot has no direct write ref.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum WriteRoutine {
    Resolve,
    /// Lowest page of main RAM; addresses 0/1 are the CPU I/O port.
    ZeroPage,
    /// C65 colour RAM head, triple-written (main RAM + colour RAM + C64 view).
    ColourRamHead,
    Undecoded,
    LegacyIo,
}

/// One dispatch entry: a 256-byte page of the CPU address space, or the
/// decode cache of a bus-master channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SlotEntry {
    pub rd_data: Option<DataRef>,
    pub rd_fn: ReadRoutine,
    pub wr_data: Option<DataRef>,
    pub wr_fn: WriteRoutine,
    /// Full 28-bit physical address of the page currently behind the slot.
    pub rd_ofs: u32,
    pub wr_ofs: u32,
}

impl SlotEntry {
    pub(crate) const INVALID: SlotEntry = SlotEntry {
        rd_data: None,
        rd_fn: ReadRoutine::Resolve,
        wr_data: None,
        wr_fn: WriteRoutine::Resolve,
        rd_ofs: 0,
        wr_ofs: 0,
    };
}

/// Channel page caches hold 256-byte-aligned addresses; an unaligned value
/// marks "nothing decoded yet".
pub(crate) const CHANNEL_PAGE_INVALID: u32 = 1;

/// Everything outside the snapshot: resolved dispatch tables, channel
/// caches, decoder hints, registered collaborator callbacks, the fixed hole
/// pages and the debug knobs. Encodes as zero bytes and decodes to the
/// all-invalidated default; `Memory::load_state` rebuilds what is needed.
#[derive(Clone)]
pub(crate) struct RuntimeState {
    pub slots: [SlotEntry; SLOT_TABLE_SIZE],
    pub channel_last_page: [u32; CHANNEL_COUNT],
    pub channel_hint: [usize; CHANNEL_COUNT],
    /// Per-4K-page region hints for the logical decoder.
    pub window_hint: [usize; 16],
    pub io: IoTables,
    pub vic_iomode: u8,
    pub in_hypervisor: bool,
    pub legacy_io_is_mapped: bool,
    pub inhibit_interrupts: bool,
    /// Old byte of an in-flight read-modify-write store, sentinel otherwise.
    pub rmw_old_data: Option<u8>,
    /// 4-bit colour RAM view for C64 I/O mode, high nibble forced to 1s.
    pub c64_colour_ram: [u8; super::C64_COLOUR_RAM_SIZE],
    pub white_hole_ff: [u8; 0x100],
    /// Kept filled alongside its $FF sibling; no decoder entry sources it
    /// today.
    #[allow(dead_code)]
    pub white_hole_00: [u8; 0x100],
    pub black_hole: [u8; 0x100],
    pub pc_probe: Option<fn() -> u16>,
    pub speed_hook: Option<fn(bool)>,
    pub unhandled_mem: UnhandledMem,
    pub full_window_resolve: bool,
    pub partial_map_invalidation: bool,
}

impl Default for RuntimeState {
    fn default() -> Self {
        Self {
            slots: [SlotEntry::INVALID; SLOT_TABLE_SIZE],
            channel_last_page: [CHANNEL_PAGE_INVALID; CHANNEL_COUNT],
            channel_hint: [0; CHANNEL_COUNT],
            window_hint: [0; 16],
            io: IoTables::default(),
            vic_iomode: 0,
            in_hypervisor: false,
            legacy_io_is_mapped: false,
            inhibit_interrupts: false,
            rmw_old_data: None,
            c64_colour_ram: [0xF0; super::C64_COLOUR_RAM_SIZE],
            white_hole_ff: [0xFF; 0x100],
            white_hole_00: [0x00; 0x100],
            black_hole: [0x00; 0x100],
            pc_probe: None,
            speed_hook: None,
            unhandled_mem: Memory::env_unhandled_mem().unwrap_or(UnhandledMem::WarnOnce),
            full_window_resolve: !Memory::env_lazy_slot_resolve(),
            partial_map_invalidation: !Memory::env_full_map_invalidate(),
        }
    }
}

impl bincode::Encode for RuntimeState {
    fn encode<E: bincode::enc::Encoder>(
        &self,
        _encoder: &mut E,
    ) -> Result<(), bincode::error::EncodeError> {
        Ok(()) // write nothing
    }
}

impl<Context> bincode::Decode<Context> for RuntimeState {
    fn decode<D: bincode::de::Decoder>(
        _decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        Ok(Self::default())
    }
}

impl<'de, Context> bincode::BorrowDecode<'de, Context> for RuntimeState {
    fn borrow_decode<D: bincode::de::BorrowDecoder<'de>>(
        _decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        Ok(Self::default())
    }
}
