//! # Register — Unidade Fundamental do Modelo MSC
//!
//! Registrador de 8 bits com três sub-campos nomeados.
//!
//! ## Layout de Bits
//!
//! ```text
//! ┌──────┬──────┬──────┬──────┬──────┬──────┬──────┬──────┐
//! │  C   │  V₂  │  V₁  │  V₀  │  T₃  │  T₂  │  T₁  │  T₀  │
//! └──────┴──────┴──────┴──────┴──────┴──────┴──────┴──────┘
//!   bit 7   bit 6   bit 5   bit 4   bit 3   bit 2   bit 1   bit 0
//!  CARRY ◄──── VARIANCE ─────►◄──────────── TAG ───────────►
//!  C ∈ {0,1}     V ∈ [0, 7]              T ∈ [0, 15]
//! ```
//!
//! ## Decodificação
//!
//! - C (carry): `raw >> 7`
//! - V (variance): `(raw >> 4) & 0x7`
//! - T (tag): `raw & 0xF`

use std::fmt;

use super::fields::{
    CARRY_SHIFT, CARRY_WIDTH, TAG_SHIFT, TAG_WIDTH, VARIANCE_SHIFT, VARIANCE_WIDTH,
};

/// Máscara de `width` bits alinhada ao bit 0
const fn low_bits(width: u32) -> u8 {
    ((1u16 << width) - 1) as u8
}

/// Registrador de campo: valor imutável de 8 bits
///
/// Todo estado vive em `raw`; os campos são vistas derivadas. Nenhuma
/// operação modifica in-place, toda transformação devolve um novo valor.
///
/// # Exemplo
///
/// ```
/// use msc_core::state::Register;
///
/// let r = Register::from_raw(0b1011_0010);
/// assert_eq!(r.carry(), 1);
/// assert_eq!(r.variance(), 0b011);
/// assert_eq!(r.tag(), 0b0010);
///
/// // XOR consigo mesmo colapsa para zero
/// assert_eq!(r.xor(&r), Register::ZERO);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Register {
    raw: u8,
}

impl Register {
    // =========================================================================
    // Constantes
    // =========================================================================

    /// Registrador zero (estado inicial de toda arena)
    pub const ZERO: Self = Self { raw: 0 };

    /// Máscara do bit de carry (bit 7)
    pub const CARRY_MASK: u8 = low_bits(CARRY_WIDTH) << CARRY_SHIFT;

    /// Máscara do campo variance (bits 6-4)
    pub const VARIANCE_MASK: u8 = low_bits(VARIANCE_WIDTH) << VARIANCE_SHIFT;

    /// Máscara do campo tag (bits 3-0)
    pub const TAG_MASK: u8 = low_bits(TAG_WIDTH) << TAG_SHIFT;

    /// Número de bits do registrador
    pub const BITS: u32 = 8;

    // =========================================================================
    // Construtores
    // =========================================================================

    /// Cria registrador a partir de um byte
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        Self { raw }
    }

    /// Cria registrador a partir de qualquer inteiro (mascarado para 8 bits)
    ///
    /// Valores negativos usam complemento de dois: `-1` vira `0xFF`.
    #[inline]
    pub const fn from_int(value: i64) -> Self {
        Self {
            raw: (value & 0xFF) as u8,
        }
    }

    /// Monta registrador a partir dos três campos
    ///
    /// Cada campo é mascarado para sua largura antes do empacotamento.
    #[inline]
    pub const fn from_fields(carry: u8, variance: u8, tag: u8) -> Self {
        Self {
            raw: ((carry & low_bits(CARRY_WIDTH)) << CARRY_SHIFT)
                | ((variance & low_bits(VARIANCE_WIDTH)) << VARIANCE_SHIFT)
                | ((tag & low_bits(TAG_WIDTH)) << TAG_SHIFT),
        }
    }

    // =========================================================================
    // Campos
    // =========================================================================

    /// Byte bruto
    #[inline]
    pub const fn raw(&self) -> u8 {
        self.raw
    }

    /// C: bit de carry/flag (bit 7)
    #[inline]
    pub const fn carry(&self) -> u8 {
        (self.raw & Self::CARRY_MASK) >> CARRY_SHIFT
    }

    /// V: campo variance de 3 bits (bits 6-4)
    #[inline]
    pub const fn variance(&self) -> u8 {
        (self.raw & Self::VARIANCE_MASK) >> VARIANCE_SHIFT
    }

    /// T: campo tag de 4 bits (bits 3-0)
    #[inline]
    pub const fn tag(&self) -> u8 {
        (self.raw & Self::TAG_MASK) >> TAG_SHIFT
    }

    /// Verifica se é o registrador zero
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.raw == 0
    }

    // =========================================================================
    // Operações
    // =========================================================================

    /// XOR bit a bit (comutativo, associativo, auto-inverso)
    #[inline]
    pub const fn xor(&self, other: &Register) -> Register {
        Register::from_raw(self.raw ^ other.raw)
    }

    /// Distância de Hamming: bits diferentes entre os dois registradores
    ///
    /// Sempre em [0, 8].
    #[inline]
    pub const fn hamming(&self, other: &Register) -> u32 {
        (self.raw ^ other.raw).count_ones()
    }

    /// Substitui o campo tag, preservando os demais
    #[inline]
    pub const fn with_tag(&self, tag: u8) -> Register {
        Register::from_fields(self.carry(), self.variance(), tag)
    }

    /// Substitui o campo variance, preservando os demais
    #[inline]
    pub const fn with_variance(&self, variance: u8) -> Register {
        Register::from_fields(self.carry(), variance, self.tag())
    }

    /// Substitui o bit de carry, preservando os demais
    #[inline]
    pub const fn with_carry(&self, carry: u8) -> Register {
        Register::from_fields(carry, self.variance(), self.tag())
    }
}

// =============================================================================
// Traits
// =============================================================================

impl fmt::Debug for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Register(raw={:#010b}, C={}, V={}, T={})",
            self.raw,
            self.carry(),
            self.variance(),
            self.tag()
        )
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<FR C:{} V:{:03b} T:{:04b} raw:{:08b}>",
            self.carry(),
            self.variance(),
            self.tag(),
            self.raw
        )
    }
}

impl fmt::Binary for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.raw, f)
    }
}

impl From<u8> for Register {
    fn from(byte: u8) -> Self {
        Self::from_raw(byte)
    }
}

impl From<Register> for u8 {
    fn from(r: Register) -> Self {
        r.raw
    }
}

impl std::ops::BitXor for Register {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.xor(&rhs)
    }
}

impl std::ops::BitXor<&Register> for Register {
    type Output = Self;

    fn bitxor(self, rhs: &Self) -> Self::Output {
        self.xor(rhs)
    }
}

// =============================================================================
// Serde
// =============================================================================

impl serde::Serialize for Register {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Register", 4)?;
        state.serialize_field("raw", &self.raw)?;
        state.serialize_field("carry", &self.carry())?;
        state.serialize_field("variance", &self.variance())?;
        state.serialize_field("tag", &self.tag())?;
        state.end()
    }
}

impl<'de> serde::Deserialize<'de> for Register {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Campos derivados são ignorados na entrada: só `raw` é estado
        #[derive(serde::Deserialize)]
        struct RegisterData {
            raw: u8,
        }

        let data = RegisterData::deserialize(deserializer)?;
        Ok(Register::from_raw(data.raw))
    }
}

// =============================================================================
// Testes
// =============================================================================
