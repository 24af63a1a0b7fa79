//! WASM API for the NES CPU core.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection and
//! disassembly.

use crate::disassembler::{decode_at, format_instruction};
use crate::{ExecutionError, FlatMemory, MemoryBus, StopReason, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
    address: u16,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Address of the faulting opcode.
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }
}

impl From<ExecutionError> for JsError {
    fn from(err: ExecutionError) -> Self {
        let ExecutionError::UnknownOpcode { address, .. } = err;
        JsError {
            message: err.to_string(),
            address,
        }
    }
}

/// One disassembled instruction
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Assembly text, e.g. `LDA #$01`.
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Totals of a `run` call
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct RunResult {
    cycles: f64,
    instructions: f64,
    stop: StopReason,
}

#[wasm_bindgen]
impl RunResult {
    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cycles
    }

    #[wasm_bindgen(getter)]
    pub fn instructions(&self) -> f64 {
        self.instructions
    }

    /// `"left-code-segment"`, `"break"`, `"budget-exhausted"` or `"no-program"`.
    #[wasm_bindgen(getter)]
    pub fn stop(&self) -> String {
        match self.stop {
            StopReason::LeftCodeSegment => "left-code-segment",
            StopReason::Break => "break",
            StopReason::BudgetExhausted => "budget-exhausted",
            StopReason::NoProgram => "no-program",
        }
        .to_string()
    }
}

/// NES CPU on a flat 64KB memory, for JavaScript
#[wasm_bindgen]
pub struct NesCpu {
    cpu: CPU<FlatMemory>,
}

#[wasm_bindgen]
impl NesCpu {
    /// Create a CPU on zeroed memory in its power-on state
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        NesCpu {
            cpu: CPU::new(FlatMemory::new()),
        }
    }

    pub fn power_up(&mut self) {
        self.cpu.power_up();
    }

    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Trigger an IRQ; returns whether it was taken
    pub fn irq(&mut self) -> bool {
        self.cpu.irq()
    }

    pub fn nmi(&mut self) {
        self.cpu.nmi();
    }

    /// Execute a single instruction and return the cycles it took
    pub fn step(&mut self) -> Result<u8, JsError> {
        Ok(self.cpu.step()?.cycles)
    }

    /// Execute multiple cycles and return actual cycles executed
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<u32, JsError> {
        Ok(self.cpu.run_for_cycles(cycles as u64)? as u32)
    }

    /// Run the loaded program from its start address
    pub fn run(&mut self, cycle_budget: u32) -> Result<RunResult, JsError> {
        let summary = self.cpu.run(cycle_budget as u64)?;
        Ok(RunResult {
            cycles: summary.cycles as f64,
            instructions: summary.instructions as f64,
            stop: summary.stop,
        })
    }

    /// Copy a program into memory and make it the code segment
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        self.cpu.load_program(start_addr, program);
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    /// Multi-line register dump
    pub fn dump_registers(&self) -> String {
        self.cpu.registers().to_string()
    }

    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Copy of `len` bytes starting at `start`, clamped to the end of memory
    pub fn memory_view(&self, start: u16, len: u32) -> js_sys::Uint8Array {
        let bytes = self.cpu.memory().as_slice();
        let start = start as usize;
        let end = (start + len as usize).min(bytes.len());
        js_sys::Uint8Array::from(&bytes[start..end])
    }

    pub fn hex_dump(&self, start: u16, end: u16, row_width: usize) -> String {
        self.cpu.memory().hex_dump(start..end, row_width)
    }

    /// Disassemble `count` instructions from memory starting at `start_addr`
    pub fn disassemble(&self, start_addr: u16, count: u32) -> Vec<JsValue> {
        let mut address = start_addr;
        (0..count)
            .map(|_| {
                let instr = decode_at(self.cpu.memory(), address);
                address = address.wrapping_add(instr.size_bytes as u16);

                let mut bytes = vec![instr.opcode];
                bytes.extend_from_slice(&instr.operand_bytes);
                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    bytes,
                    text: format_instruction(&instr),
                })
            })
            .collect()
    }
}

impl Default for NesCpu {
    fn default() -> Self {
        Self::new()
    }
}
