//! # Power, Reset and Interrupts
//!
//! Power-up establishes the documented NES power-on state. Reset is the warm variant: it
//! leaves A, X, Y and RAM alone, moves SP down by three without writing, sets I and
//! silences the APU.
//!
//! BRK, IRQ and NMI share one entry sequence:
//!
//! 1. Push PC (high byte, then low byte)
//! 2. Push P (B set only for BRK, bit 5 always set)
//! 3. Set I
//! 4. Load PC from the vector (0xFFFE for BRK/IRQ, 0xFFFA for NMI)

use log::debug;

use crate::config::{
    APU_CHANNEL_REGISTERS, APU_FRAME_COUNTER, APU_STATUS, INTERRUPT_CYCLES, IRQ_VECTOR,
    NMI_VECTOR, POWER_ON_SP, POWER_ON_STATUS, RESET_VECTOR,
};
use crate::status::Status;
use crate::{MemoryBus, CPU};

impl<M: MemoryBus> CPU<M> {
    /// Puts the CPU in its power-on state.
    ///
    /// - P = 0x34 (I, B and bit 5 set)
    /// - A = X = Y = 0, SP = 0xFD
    /// - APU frame counter and channel enables written 0, channel registers 0x4000-0x400F cleared
    /// - PC loaded from the reset vector
    ///
    /// The cycle counter is not touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write_u16(0xFFFC, 0xC000);
    /// let mut cpu = CPU::new(mem);
    /// cpu.set_a(0x42);
    ///
    /// cpu.power_up();
    /// assert_eq!(cpu.a(), 0);
    /// assert_eq!(cpu.pc(), 0xC000);
    /// assert_eq!(cpu.status(), 0x34);
    /// ```
    pub fn power_up(&mut self) {
        self.regs.p = Status::from_byte(POWER_ON_STATUS);
        self.regs.a = 0;
        self.regs.x = 0;
        self.regs.y = 0;
        self.regs.sp = POWER_ON_SP;

        self.memory.write(APU_FRAME_COUNTER, 0x00);
        self.silence_apu();
        self.memory.zero_fill(APU_CHANNEL_REGISTERS);

        self.regs.pc = self.memory.read_u16(RESET_VECTOR);
        debug!("power-up: PC={:04X}", self.regs.pc);
    }

    /// Warm reset: SP -= 3 without writing the stack, I set, APU silenced, PC reloaded
    /// from the reset vector. A, X, Y and the rest of memory are unchanged.
    pub fn reset(&mut self) {
        self.regs.sp = self.regs.sp.wrapping_sub(3);
        self.regs.p.set_interrupt_disable(true);
        self.silence_apu();

        self.regs.pc = self.memory.read_u16(RESET_VECTOR);
        debug!("reset: PC={:04X} SP={:02X}", self.regs.pc, self.regs.sp);
    }

    /// Requests a maskable interrupt.
    ///
    /// Ignored while the I flag is set. Returns whether the interrupt was taken.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write_u16(0xFFFE, 0x9000);
    /// let mut cpu = CPU::new(mem);
    ///
    /// // I is set at power-up
    /// assert!(!cpu.irq());
    ///
    /// cpu.set_flag_i(false);
    /// assert!(cpu.irq());
    /// assert_eq!(cpu.pc(), 0x9000);
    /// assert!(cpu.flag_i());
    /// ```
    pub fn irq(&mut self) -> bool {
        if self.regs.p.interrupt_disable() {
            return false;
        }
        let status = self.regs.p.pushed_by_hardware();
        self.enter_interrupt(self.regs.pc, IRQ_VECTOR, status);
        self.cycles += INTERRUPT_CYCLES as u64;
        true
    }

    /// Triggers a non-maskable interrupt. Always taken.
    pub fn nmi(&mut self) {
        let status = self.regs.p.pushed_by_hardware();
        self.enter_interrupt(self.regs.pc, NMI_VECTOR, status);
        self.cycles += INTERRUPT_CYCLES as u64;
    }

    /// BRK entry. Cycles are charged by the opcode table.
    pub(crate) fn break_interrupt(&mut self, return_address: u16) {
        let status = self.regs.p.pushed_by_software();
        self.enter_interrupt(return_address, IRQ_VECTOR, status);
    }

    fn enter_interrupt(&mut self, return_address: u16, vector: u16, pushed_status: u8) {
        self.push(return_address);
        self.push(pushed_status);
        self.regs.p.set_interrupt_disable(true);
        self.regs.pc = self.memory.read_u16(vector);

        debug!(
            "interrupt via {:04X}: return={:04X} P={:08b} -> PC={:04X}",
            vector, return_address, pushed_status, self.regs.pc
        );
    }

    fn silence_apu(&mut self) {
        self.memory.write(APU_STATUS, 0x00);
    }
}

#[cfg(test)]
mod tests {
    use crate::{FlatMemory, MemoryBus, CPU};

    fn cpu_with_vectors() -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.write_u16(0xFFFC, 0x8000);
        mem.write_u16(0xFFFE, 0x9000);
        mem.write_u16(0xFFFA, 0xA000);
        CPU::new(mem)
    }

    #[test]
    fn test_power_up_state() {
        let mut mem = FlatMemory::new();
        mem.write_u16(0xFFFC, 0x8000);
        mem.write(0x4000, 0xFF);
        mem.write(0x400F, 0xFF);
        mem.write(0x4010, 0xAA);
        mem.write(0x4015, 0x1F);
        mem.write(0x4017, 0x40);

        let cpu = CPU::new(mem);
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.status(), 0b0011_0100);
        assert_eq!((cpu.a(), cpu.x(), cpu.y()), (0, 0, 0));
        assert_eq!(cpu.memory().read(0x4000), 0x00);
        assert_eq!(cpu.memory().read(0x400F), 0x00);
        assert_eq!(cpu.memory().read(0x4010), 0xAA);
        assert_eq!(cpu.memory().read(0x4015), 0x00);
        assert_eq!(cpu.memory().read(0x4017), 0x00);
    }

    #[test]
    fn test_reset_keeps_registers_and_memory() {
        let mut cpu = cpu_with_vectors();
        cpu.set_a(0x11);
        cpu.set_x(0x22);
        cpu.set_y(0x33);
        cpu.set_pc(0x1234);
        cpu.set_flag_i(false);
        cpu.memory_mut().write(0x0200, 0x99);
        cpu.memory_mut().write(0x4015, 0x0F);
        cpu.memory_mut().write(0x4017, 0x40);
        cpu.memory_mut().write(0x01FD, 0x77);

        cpu.reset();

        assert_eq!((cpu.a(), cpu.x(), cpu.y()), (0x11, 0x22, 0x33));
        assert_eq!(cpu.sp(), 0xFA);
        assert!(cpu.flag_i());
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.memory().read(0x0200), 0x99);
        assert_eq!(cpu.memory().read(0x01FD), 0x77);
        assert_eq!(cpu.memory().read(0x4015), 0x00);
        assert_eq!(cpu.memory().read(0x4017), 0x40);
    }

    #[test]
    fn test_nmi_pushes_state_with_break_clear() {
        let mut cpu = cpu_with_vectors();
        cpu.set_pc(0x1234);
        cpu.set_flag_c(true);

        cpu.nmi();

        assert_eq!(cpu.pc(), 0xA000);
        assert_eq!(cpu.sp(), 0xFA);
        assert_eq!(cpu.memory().read(0x01FD), 0x12);
        assert_eq!(cpu.memory().read(0x01FC), 0x34);
        let pushed = cpu.memory().read(0x01FB);
        assert_eq!(pushed & 0x10, 0);
        assert_eq!(pushed & 0x20, 0x20);
        assert_eq!(pushed & 0x01, 0x01);
        assert_eq!(cpu.cycles(), 7);
    }

    #[test]
    fn test_irq_masked_by_interrupt_disable() {
        let mut cpu = cpu_with_vectors();
        cpu.set_pc(0x1234);
        assert!(!cpu.irq());
        assert_eq!(cpu.pc(), 0x1234);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.cycles(), 0);
    }
}
