//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the memory it
//! runs against. The CPU reaches RAM, ROM and memory-mapped registers only through it.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors: every 16-bit address is valid, reads and writes always succeed
//! - 16-bit reads are assembled from two byte reads, low byte first
//! - Multi-byte accesses wrap modulo 65536
//!
//! `FlatMemory` is the plain 64KB store. The bus is implemented for `&mut M` as well, so a
//! CPU can borrow memory that is owned elsewhere:
//!
//! ```
//! use nes6502::{FlatMemory, MemoryBus, CPU};
//!
//! let mut memory = FlatMemory::new();
//! {
//!     let mut cpu = CPU::new(&mut memory);
//!     cpu.load_program(0x0600, &[0xA9, 0x42, 0x85, 0x10]);
//!     cpu.run(100).unwrap();
//! }
//! assert_eq!(memory.read(0x0010), 0x42);
//! ```

use std::fmt::Write as _;
use std::ops::{Bound, Range, RangeBounds};

/// Memory bus trait for CPU to read/write bytes.
///
/// Only `read` and `write` are required; the wider accessors are assembled from them.
///
/// # Examples
///
/// ```
/// use nes6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must never panic. Unmapped addresses may return any value.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must never panic. Writes to read-only or unmapped addresses may be ignored.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word. The high byte comes from `addr + 1` modulo 65536.
    ///
    /// ```
    /// use nes6502::{MemoryBus, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFF, 0x34);
    /// mem.write(0x0000, 0x12);
    /// assert_eq!(mem.read_u16(0xFFFF), 0x1234);
    /// ```
    fn read_u16(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian word whose high byte never leaves the page of `addr`.
    ///
    /// Reading at 0x30FF takes the low byte from 0x30FF and the high byte from 0x3000.
    /// This is how the 6502 fetches indirect JMP targets and zero-page pointers.
    ///
    /// ```
    /// use nes6502::{MemoryBus, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0x30FF, 0x80);
    /// mem.write(0x3000, 0x50);
    /// mem.write(0x3100, 0x40);
    /// assert_eq!(mem.read_u16_in_page(0x30FF), 0x5080);
    /// ```
    fn read_u16_in_page(&self, addr: u16) -> u16 {
        let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
        let lo = self.read(addr) as u16;
        let hi = self.read(hi_addr) as u16;
        (hi << 8) | lo
    }

    /// Writes a little-endian word, low byte at `addr`.
    fn write_u16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write(addr, lo);
        self.write(addr.wrapping_add(1), hi);
    }

    /// Writes zero to every address in `range`.
    fn zero_fill(&mut self, range: Range<u16>) {
        for addr in range {
            self.write(addr, 0);
        }
    }

    /// Writes zero to all 65536 addresses.
    fn zero_fill_all(&mut self) {
        for addr in 0..=u16::MAX {
            self.write(addr, 0);
        }
    }

    /// Copies `bytes` into memory starting at `base`, wrapping past 0xFFFF.
    fn load(&mut self, base: u16, bytes: &[u8]) {
        let mut addr = base;
        for &byte in bytes {
            self.write(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }

    /// Checks if the IRQ line is active.
    ///
    /// The line is level-sensitive: the CPU polls it after every instruction and services
    /// it while the I flag is clear. Plain memory has nothing attached, so the default is
    /// `false`.
    fn irq_active(&self) -> bool {
        false
    }
}

impl<M: MemoryBus + ?Sized> MemoryBus for &mut M {
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value);
    }

    fn read_u16(&self, addr: u16) -> u16 {
        (**self).read_u16(addr)
    }

    fn read_u16_in_page(&self, addr: u16) -> u16 {
        (**self).read_u16_in_page(addr)
    }

    fn zero_fill(&mut self, range: Range<u16>) {
        (**self).zero_fill(range);
    }

    fn zero_fill_all(&mut self) {
        (**self).zero_fill_all();
    }

    fn load(&mut self, base: u16, bytes: &[u8]) {
        (**self).load(base, bytes);
    }

    fn irq_active(&self) -> bool {
        (**self).irq_active()
    }
}

const MEMORY_SIZE: usize = 0x10000;

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses map to a single contiguous array initialized to 0x00.
///
/// # Examples
///
/// ```
/// use nes6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    data: Box<[u8; MEMORY_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Read-only view of the whole address space.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }

    /// Formats `range` as rows of `row_width` bytes: `|0200: 01 05 08 ...|`.
    ///
    /// Any `u16` range is accepted; use an inclusive range such as `0xFFF0..=0xFFFF` to reach
    /// the last address. A zero `row_width` is treated as 16.
    ///
    /// ```
    /// use nes6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0x0201, 0xAB);
    /// let dump = mem.hex_dump(0x0200..0x0204, 4);
    /// assert_eq!(dump, "|0200: 00 AB 00 00|\n");
    /// ```
    pub fn hex_dump(&self, range: impl RangeBounds<u16>, row_width: usize) -> String {
        let row_width = if row_width == 0 { 16 } else { row_width };
        let start = match range.start_bound() {
            Bound::Included(&addr) => addr as usize,
            Bound::Excluded(&addr) => addr as usize + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&addr) => addr as usize + 1,
            Bound::Excluded(&addr) => addr as usize,
            Bound::Unbounded => MEMORY_SIZE,
        };
        let start = start.min(MEMORY_SIZE);
        let bytes = &self.data[start..end.clamp(start, MEMORY_SIZE)];
        let mut out = String::new();

        for (row, chunk) in bytes.chunks(row_width).enumerate() {
            let offset = start + row * row_width;
            let _ = write!(out, "|{:04X}:", offset);
            for byte in chunk {
                let _ = write!(out, " {:02X}", byte);
            }
            out.push_str("|\n");
        }

        out
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn zero_fill(&mut self, range: Range<u16>) {
        if range.start < range.end {
            self.data[range.start as usize..range.end as usize].fill(0);
        }
    }

    fn zero_fill_all(&mut self) {
        self.data.fill(0);
    }

    fn load(&mut self, base: u16, bytes: &[u8]) {
        let start = base as usize;
        let direct = bytes.len().min(self.data.len() - start);
        self.data[start..start + direct].copy_from_slice(&bytes[..direct]);

        // Whatever did not fit before 0xFFFF continues at 0x0000.
        let mut addr = 0u16;
        for &byte in &bytes[direct..] {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }
}
