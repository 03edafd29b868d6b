//! Bus-master memory channels.
//!
//! The DMA engine, the CPU's linear-addressing opcodes and the debugger
//! address the full 28-bit space directly, bypassing the CPU slot table.
//! Each lane caches its last decoded page; touching a different page
//! re-decodes through the region table before dispatching.

use super::types::{Channel, CHANNEL_COUNT, CHANNEL_PAGE_INVALID};
use super::Memory;

impl Memory {
    pub fn channel_read(&mut self, channel: Channel, linaddr: u32) -> u8 {
        let lane = channel as usize;
        let linaddr = linaddr & 0xFFFFFFF;
        let page = linaddr & 0xFFFFF00;
        if page != self.runtime.channel_last_page[lane] {
            self.runtime.channel_last_page[lane] = page;
            let hint = self.runtime.channel_hint[lane];
            self.runtime.channel_hint[lane] = self.resolve_linear(page, 0x100 + lane, hint);
        }
        let entry = self.runtime.slots[0x100 + lane];
        match entry.rd_data {
            Some(data) => self.load_byte(data, linaddr),
            None => self.read_routine(entry.rd_fn, 0x100 + lane, linaddr),
        }
    }

    pub fn channel_write(&mut self, channel: Channel, linaddr: u32, data: u8) {
        let lane = channel as usize;
        let linaddr = linaddr & 0xFFFFFFF;
        let page = linaddr & 0xFFFFF00;
        if page != self.runtime.channel_last_page[lane] {
            self.runtime.channel_last_page[lane] = page;
            let hint = self.runtime.channel_hint[lane];
            self.runtime.channel_hint[lane] = self.resolve_linear(page, 0x100 + lane, hint);
        }
        let entry = self.runtime.slots[0x100 + lane];
        match entry.wr_data {
            Some(target) => self.store_byte(target, linaddr, data),
            None => self.write_routine(entry.wr_fn, 0x100 + lane, linaddr, data),
        }
    }

    /// Drop every channel's decode cache. CPU-side invalidation never
    /// touches the channels; this is their only flush point.
    pub fn invalidate_channels(&mut self) {
        log::trace!("invalidating memory channels");
        for lane in 0..CHANNEL_COUNT {
            self.runtime.channel_last_page[lane] = CHANNEL_PAGE_INVALID;
            self.runtime.channel_hint[lane] = 0;
        }
    }
}
