//! # 🔄 Operator — Transformação de Variância
//!
//! Transformações de registrador acopladas à arena. Diferente de uma
//! transformação pura, cada aplicação **observa** um vizinho na arena e
//! **empurra** o resultado de volta: observar altera o estado futuro.
//!
//! ## Algoritmo
//!
//! ```text
//!   idx      = (raw ⊕ (phase & 0xFF)) mod capacity
//!   d        = popcount(raw ⊕ arena[idx])            ∈ [0, 8]
//!   entropy  = d / 8                                 ∈ [0, 1]
//!   δ        = ⌊|entropy × phase| × 15⌋ & 0xF        ∈ [0, 15]
//!
//!   T' = T ⊕ δ
//!   V' = (V + (phase & 0x3)) & 0x7
//!   C' = C ⊕ [phase < 0]
//! ```
//!
//! ## Regimes
//!
//! - phase > 0: covariante (expansão)
//! - phase < 0: contravariante (contração), inverte o carry
//! - phase = 0: neutro, só o vizinho é consumido

use crate::arena::Arena;
use crate::state::Register;

/// Trait central: transformação de registrador acoplada à arena
///
/// # Exemplo
///
/// ```
/// use msc_core::operator::RegisterTransform;
/// use msc_core::arena::Arena;
/// use msc_core::state::Register;
///
/// struct Echo;
///
/// impl RegisterTransform for Echo {
///     fn apply(&self, register: Register, arena: &mut Arena) -> Register {
///         arena.push(register);
///         register
///     }
/// }
///
/// let mut arena = Arena::new(4).unwrap();
/// let out = Echo.apply(Register::from_raw(3), &mut arena);
/// assert_eq!(arena.raw_view(), vec![out.raw()]);
/// ```
pub trait RegisterTransform: Send + Sync {
    /// Aplica a transformação, retornando novo registrador
    ///
    /// Pode escrever na arena; é o único efeito colateral permitido.
    fn apply(&self, register: Register, arena: &mut Arena) -> Register;

    /// Nome da transformação (para debug/log)
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Operador de variância parametrizado por fase
///
/// Sem estado mutável: pode ser reutilizado e compartilhado entre threads,
/// desde que cada thread tenha a sua própria [`Arena`].
///
/// # Exemplo
///
/// ```
/// use msc_core::prelude::*;
///
/// let mut arena = Arena::seeded(8, [
///     Register::from_raw(0b1011_0010),
///     Register::from_raw(0b0101_1001),
/// ]).unwrap();
///
/// let out = Operator::covariant().apply(Register::from_raw(0b1011_0010), &mut arena);
/// assert_eq!(out.raw(), 0b1100_0101);
/// assert_eq!(arena.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Operator {
    phase: i64,
}

impl Operator {
    /// Cria operador com a fase dada
    #[inline]
    pub const fn new(phase: i64) -> Self {
        Self { phase }
    }

    /// Operador covariante (phase = +1)
    #[inline]
    pub const fn covariant() -> Self {
        Self::new(1)
    }

    /// Operador contravariante (phase = -1)
    #[inline]
    pub const fn contravariant() -> Self {
        Self::new(-1)
    }

    /// Fase
    #[inline]
    pub const fn phase(&self) -> i64 {
        self.phase
    }

    /// Regime de expansão?
    #[inline]
    pub const fn is_covariant(&self) -> bool {
        self.phase > 0
    }

    /// Regime de contração?
    #[inline]
    pub const fn is_contravariant(&self) -> bool {
        self.phase < 0
    }

    // =========================================================================
    // Passos puros
    // =========================================================================

    /// Índice do vizinho na arena
    ///
    /// O "hash" do registrador é a identidade sobre o byte bruto.
    #[inline]
    pub fn neighbor_index(&self, register: Register, capacity: usize) -> usize {
        let mixed = u64::from(register.raw()) ^ (self.phase & 0xFF) as u64;
        (mixed % capacity as u64) as usize
    }

    /// Entropia local: distância de Hamming normalizada ∈ [0, 1]
    #[inline]
    pub fn entropy(register: Register, neighbor: Register) -> f64 {
        f64::from(register.hamming(&neighbor)) / f64::from(Register::BITS)
    }

    /// Bits de delta derivados da entropia e da fase ∈ [0, 15]
    ///
    /// A máscara é sempre aplicada: com |phase| > 1 o produto passa de 15 e
    /// dá a volta módulo 16.
    #[inline]
    pub fn delta_bits(&self, entropy: f64) -> u8 {
        let delta = entropy * self.phase as f64;
        // Redução módulo 16 ainda em f64: `as u64` satura acima de 2^64
        ((delta.abs() * 15.0).floor() % 16.0) as u8
    }

    /// Monta a saída a partir da entrada e dos bits de delta
    #[inline]
    pub fn evolve(&self, register: Register, delta_bits: u8) -> Register {
        let tag = (register.tag() ^ delta_bits) & 0xF;
        let variance = (register.variance() + (self.phase & 0x3) as u8) & 0x7;
        let carry = (register.carry() ^ u8::from(self.phase < 0)) & 0x1;
        Register::from_fields(carry, variance, tag)
    }

    // =========================================================================
    // Aplicação
    // =========================================================================

    /// Aplica o operador e devolve todos os valores intermediários
    ///
    /// Empurra a saída na arena, exatamente como [`apply`](RegisterTransform::apply).
    pub fn trace(&self, register: Register, arena: &mut Arena) -> Application {
        let index = self.neighbor_index(register, arena.capacity());
        let neighbor = arena.get(index as i64);
        let distance = register.hamming(&neighbor);
        let entropy = Self::entropy(register, neighbor);
        let delta_bits = self.delta_bits(entropy);
        let output = self.evolve(register, delta_bits);

        arena.push(output);

        tracing::trace!(
            phase = self.phase,
            index,
            distance,
            delta_bits,
            input = register.raw(),
            output = output.raw(),
            "operator applied"
        );

        Application {
            input: register,
            index,
            neighbor,
            distance,
            entropy,
            delta_bits,
            output,
        }
    }
}

impl RegisterTransform for Operator {
    fn apply(&self, register: Register, arena: &mut Arena) -> Register {
        self.trace(register, arena).output
    }

    fn name(&self) -> &'static str {
        if self.is_covariant() {
            "Covariant"
        } else if self.is_contravariant() {
            "Contravariant"
        } else {
            "Neutral"
        }
    }
}

/// Registro de uma aplicação do operador
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Application {
    /// Registrador de entrada
    pub input: Register,
    /// Índice do vizinho na arena
    pub index: usize,
    /// Vizinho lido
    pub neighbor: Register,
    /// Distância de Hamming entrada ↔ vizinho
    pub distance: u32,
    /// Entropia local
    pub entropy: f64,
    /// Bits de delta aplicados ao tag
    pub delta_bits: u8,
    /// Registrador de saída (já empurrado na arena)
    pub output: Register,
}

// =============================================================================
// Testes
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FR0: Register = Register::from_raw(0b1011_0010);
    const FR1: Register = Register::from_raw(0b0101_1001);

    fn demo_arena() -> Arena {
        Arena::seeded(8, [FR0, FR1]).unwrap()
    }

    #[test]
    fn test_covariant_reference_step() {
        let mut arena = demo_arena();
        let app = Operator::covariant().trace(FR0, &mut arena);

        assert_eq!(app.index, 3);
        assert_eq!(app.neighbor, Register::ZERO);
        assert_eq!(app.distance, 4);
        assert_eq!(app.entropy, 0.5);
        assert_eq!(app.delta_bits, 7);
        assert_eq!(app.output.raw(), 0b1100_0101);
        assert_eq!(arena.raw_view(), vec![178, 89, 197]);
    }

    #[test]
    fn test_contravariant_reference_step() {
        let mut arena = demo_arena();
        Operator::covariant().apply(FR0, &mut arena);
        let app = Operator::contravariant().trace(FR1, &mut arena);

        assert_eq!(app.index, 6);
        assert_eq!(app.delta_bits, 7);
        assert_eq!(app.output.raw(), 0b1000_1110);
        assert_eq!(arena.raw_view(), vec![178, 89, 197, 142]);
    }

    #[test]
    fn test_apply_pushes_exactly_once() {
        let mut arena = demo_arena();
        let out = Operator::new(3).apply(FR1, &mut arena);
        assert_eq!(arena.cursor(), 3);
        assert_eq!(arena.get(2), out);
    }

    #[test]
    fn test_not_idempotent() {
        let mut arena = Arena::new(8).unwrap();
        let op = Operator::covariant();
        let input = Register::from_raw(1);

        // idx = (1 ^ 1) % 8 = 0: a primeira saída cai no próprio vizinho
        let first = op.trace(input, &mut arena);
        let second = op.trace(input, &mut arena);

        assert_eq!(first.index, 0);
        assert_eq!(second.index, 0);
        assert_eq!(second.neighbor, first.output);
        assert_eq!(first.output.raw(), 16);
        assert_eq!(second.output.raw(), 18);
        assert_eq!(arena.raw_view(), vec![16, 18]);
    }

    #[test]
    fn test_neighbor_index_negative_phase() {
        let op = Operator::contravariant();
        // -1 & 0xFF = 255
        assert_eq!(op.neighbor_index(Register::ZERO, 256), 255);
        assert_eq!(op.neighbor_index(Register::from_raw(0xFF), 256), 0);
        assert_eq!(op.neighbor_index(Register::from_raw(89), 8), 6);
    }

    #[test]
    fn test_delta_bits_table() {
        let pos = Operator::covariant();
        assert_eq!(pos.delta_bits(0.0), 0);
        assert_eq!(pos.delta_bits(0.125), 1);
        assert_eq!(pos.delta_bits(0.5), 7);
        assert_eq!(pos.delta_bits(1.0), 15);

        let neg = Operator::contravariant();
        assert_eq!(neg.delta_bits(0.5), 7);
        assert_eq!(neg.delta_bits(1.0), 15);

        // 1.0 × 2 × 15 = 30 → 30 & 0xF = 14
        assert_eq!(Operator::new(2).delta_bits(1.0), 14);
        assert_eq!(Operator::new(0).delta_bits(1.0), 0);
    }

    #[test]
    fn test_delta_bits_extreme_phase() {
        // |phase| × 15 ≥ 2^64: o produto é múltiplo de 16, não satura em 15
        assert_eq!(Operator::new(i64::MAX).delta_bits(1.0), 0);
        assert_eq!(Operator::new(i64::MIN).delta_bits(1.0), 0);
        assert_eq!(Operator::new(1 << 62).delta_bits(0.5), 0);

        let mut arena = Arena::new(8).unwrap();
        let out = Operator::new(i64::MAX).apply(Register::from_raw(0b1011_0010), &mut arena);
        assert_eq!(out.tag(), 0b0010);
    }

    #[test]
    fn test_variance_wraps() {
        let op = Operator::new(3);
        let r = Register::from_fields(0, 0b110, 0);
        // 6 + 3 = 9 → 1
        assert_eq!(op.evolve(r, 0).variance(), 1);

        // -1 & 3 = 3
        let r = Register::from_fields(0, 0b101, 0);
        assert_eq!(Operator::contravariant().evolve(r, 0).variance(), 0);
    }

    #[test]
    fn test_carry_regimes() {
        for raw in [0x00, 0x7F, 0x80, 0xFF] {
            let r = Register::from_raw(raw);
            assert_ne!(Operator::contravariant().evolve(r, 0).carry(), r.carry());
            assert_eq!(Operator::covariant().evolve(r, 0).carry(), r.carry());
            assert_eq!(Operator::new(0).evolve(r, 0).carry(), r.carry());
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Operator::covariant().name(), "Covariant");
        assert_eq!(Operator::contravariant().name(), "Contravariant");
        assert_eq!(Operator::new(0).name(), "Neutral");
    }

    #[test]
    fn test_operator_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Operator>();
    }
}
