//! # 🌀 State — Estado MSC
//!
//! Unidade de estado do modelo: o registrador de 8 bits.
//!
//! ## Estrutura
//!
//! - [`Register`]: Unidade fundamental (C, V, T) — 8 bits
//!
//! ## Princípio
//!
//! > *"Estado é sagrado — nunca modifique in-place, sempre crie novo."*

mod register;

pub use register::Register;

/// Índices nomeados dos campos do registrador
pub mod fields {
    //! Posição (bit menos significativo) e largura de cada campo

    /// C — carry/flag
    pub const CARRY_SHIFT: u32 = 7;
    /// Largura de C
    pub const CARRY_WIDTH: u32 = 1;

    /// V — variance
    pub const VARIANCE_SHIFT: u32 = 4;
    /// Largura de V
    pub const VARIANCE_WIDTH: u32 = 3;

    /// T — tag
    pub const TAG_SHIFT: u32 = 0;
    /// Largura de T
    pub const TAG_WIDTH: u32 = 4;
}
