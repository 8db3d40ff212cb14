//! Machine architecture constants.
//!
//! Mirrors `<sys/machine.h>` for AIX on POWER/PowerPC: byte-order markers and
//! the bit layouts of the MSR, CR, XER, DSISR and SRR registers. Everything
//! here is a plain constant or a pure function of one register value.

// ---------------------------------------------------------------------------
// Byte order
// ---------------------------------------------------------------------------

/// Least significant byte first.
pub const LITTLE_ENDIAN: i32 = 1234;
/// Most significant byte first (network order).
pub const BIG_ENDIAN: i32 = 4321;
/// PDP-11 mixed order.
pub const PDP_ENDIAN: i32 = 3412;
/// Byte order of this platform.
pub const BYTE_ORDER: i32 = BIG_ENDIAN;

/// Poison value loaded into general purpose registers of a fresh context.
pub const DEFAULT_GPR: u32 = 0xDEAD_BEEF;

/// Typed view of the `*_ENDIAN` markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
    Pdp,
}

impl ByteOrder {
    /// Maps a `*_ENDIAN` marker value to its byte order.
    #[must_use]
    pub const fn from_marker(marker: i32) -> Option<Self> {
        match marker {
            LITTLE_ENDIAN => Some(Self::Little),
            BIG_ENDIAN => Some(Self::Big),
            PDP_ENDIAN => Some(Self::Pdp),
            _ => None,
        }
    }

    /// The `*_ENDIAN` marker for this byte order.
    #[must_use]
    pub const fn marker(self) -> i32 {
        match self {
            Self::Little => LITTLE_ENDIAN,
            Self::Big => BIG_ENDIAN,
            Self::Pdp => PDP_ENDIAN,
        }
    }
}

/// Byte order the headers were generated for. Always big-endian, regardless
/// of the host this crate is compiled on.
pub const HOST_BYTE_ORDER: ByteOrder = match ByteOrder::from_marker(BYTE_ORDER) {
    Some(order) => order,
    None => ByteOrder::Big,
};

// ---------------------------------------------------------------------------
// Machine State Register (MSR)
// ---------------------------------------------------------------------------

/// External interrupt enable.
pub const MSR_EE: u32 = 0x8000;
/// Problem (user) state.
pub const MSR_PR: u32 = 0x4000;
/// Floating point available.
pub const MSR_FP: u32 = 0x2000;
/// Machine check enable.
pub const MSR_ME: u32 = 0x1000;
/// Floating point exception enable.
pub const MSR_FE: u32 = 0x0800;
/// Floating point exception mode 0.
pub const MSR_FE0: u32 = 0x0800;
/// Single-step trace enable.
pub const MSR_SE: u32 = 0x0400;
/// Branch trace enable.
pub const MSR_BE: u32 = 0x0200;
/// Imprecise interrupt enable.
pub const MSR_IE: u32 = 0x0100;
/// Floating point exception mode 1.
pub const MSR_FE1: u32 = 0x0100;
/// Alignment check enable.
pub const MSR_AL: u32 = 0x0080;
/// Interrupt prefix.
pub const MSR_IP: u32 = 0x0040;
/// Instruction address relocation.
pub const MSR_IR: u32 = 0x0020;
/// Data address relocation.
pub const MSR_DR: u32 = 0x0010;
/// Performance monitor mark.
pub const MSR_PM: u32 = 0x0004;

/// MSR of a freshly created kernel context.
pub const DEFAULT_MSR: u32 = MSR_EE | MSR_ME | MSR_AL | MSR_IR | MSR_DR;
/// MSR of a freshly created user context.
pub const DEFAULT_USER_MSR: u32 = DEFAULT_MSR | MSR_PR;

/// Returns true if `msr` describes problem (user) state.
#[inline]
#[must_use]
pub const fn msr_is_user(msr: u32) -> bool {
    msr & MSR_PR != 0
}

/// Returns true if both instruction and data relocation are on.
#[inline]
#[must_use]
pub const fn msr_translation_enabled(msr: u32) -> bool {
    msr & (MSR_IR | MSR_DR) == (MSR_IR | MSR_DR)
}

// ---------------------------------------------------------------------------
// Condition Register (CR), field 0
// ---------------------------------------------------------------------------

pub const CR_LT: u32 = 0x8000_0000;
pub const CR_GT: u32 = 0x4000_0000;
pub const CR_EQ: u32 = 0x2000_0000;
pub const CR_SO: u32 = 0x1000_0000;
/// Floating point exception summary (CR field 1).
pub const CR_FX: u32 = 0x0800_0000;
/// Floating point enabled exception summary.
pub const CR_FEX: u32 = 0x0400_0000;
/// Floating point invalid operation exception summary.
pub const CR_VX: u32 = 0x0200_0000;
/// Floating point overflow exception.
pub const CR_OX: u32 = 0x0100_0000;

// ---------------------------------------------------------------------------
// Fixed-point Exception Register (XER)
// ---------------------------------------------------------------------------

/// Summary overflow.
pub const XER_SO: u32 = 0x8000_0000;
/// Overflow.
pub const XER_OV: u32 = 0x4000_0000;
/// Carry.
pub const XER_CA: u32 = 0x2000_0000;

/// Extracts the compare byte used by `lscbx` (bits 16..24).
///
/// Equivalent to the `XER_COMP_BYTE` macro.
#[inline]
#[must_use]
pub const fn xer_comp_byte(xer: u32) -> u32 {
    (xer >> 8) & 0x0000_00FF
}

/// Extracts the string-instruction byte count (low 7 bits).
///
/// Equivalent to the `XER_LENGTH` macro.
#[inline]
#[must_use]
pub const fn xer_length(xer: u32) -> u32 {
    xer & 0x0000_007F
}

// ---------------------------------------------------------------------------
// Data Storage Interrupt Status Register (DSISR)
// ---------------------------------------------------------------------------

/// Direct-store (I/O) segment access.
pub const DSISR_IO: u32 = 0x8000_0000;
/// No translation found (page fault).
pub const DSISR_PFT: u32 = 0x4000_0000;
/// Data lock violation.
pub const DSISR_LOCK: u32 = 0x2000_0000;
/// Floating point load/store to I/O segment.
pub const DSISR_FPIO: u32 = 0x1000_0000;
/// Protection violation.
pub const DSISR_PROT: u32 = 0x0800_0000;
/// Loop in the page table.
pub const DSISR_LOOP: u32 = 0x0400_0000;
/// Shares its bit with `DSISR_LOOP` on this hardware.
pub const DSISR_DRST: u32 = 0x0400_0000;
/// Faulting access was a store.
pub const DSISR_ST: u32 = 0x0200_0000;
/// Segment boundary crossed.
pub const DSISR_SEGB: u32 = 0x0100_0000;
/// Data address breakpoint match.
pub const DSISR_DABR: u32 = 0x0040_0000;
/// `eciwx`/`ecowx` with EAR disabled.
pub const DSISR_EAR: u32 = 0x0010_0000;

// ---------------------------------------------------------------------------
// Save/Restore Register 1 (SRR1) status bits
// ---------------------------------------------------------------------------

// Instruction storage interrupt.
pub const SRR_IS_PFT: u32 = 0x4000_0000;
pub const SRR_IS_ISPEC: u32 = 0x2000_0000;
pub const SRR_IS_IIO: u32 = 0x1000_0000;
pub const SRR_IS_PROT: u32 = 0x0800_0000;
pub const SRR_IS_LOOP: u32 = 0x0400_0000;

// Program interrupt.
pub const SRR_PR_FPEN: u32 = 0x0010_0000;
pub const SRR_PR_INVAL: u32 = 0x0008_0000;
pub const SRR_PR_PRIV: u32 = 0x0004_0000;
pub const SRR_PR_TRAP: u32 = 0x0002_0000;
pub const SRR_PR_IMPRE: u32 = 0x0001_0000;
