//! # Arena — Memória Circular de Registradores
//!
//! Buffer circular de capacidade fixa. A escrita avança um cursor monotônico;
//! a posição física é `cursor % capacity`.
//!
//! ```text
//!   capacity = 4, cursor = 6
//!
//!   slot:    0     1     2     3
//!         ┌─────┬─────┬─────┬─────┐
//!         │ r₄  │ r₅  │ r₂  │ r₃  │
//!         └─────┴─────┴─────┴─────┘
//!                      ▲
//!                 próxima escrita (6 % 4)
//!
//!   view() = [r₂, r₃, r₄, r₅]   (mais antigo → mais novo)
//! ```
//!
//! Slots nunca escritos continuam com [`Register::ZERO`]; leituras não
//! rastreiam se o slot é obsoleto.

use std::num::NonZeroUsize;

use crate::error::{MscError, MscResult};
use crate::state::Register;

/// Capacidade padrão da arena
pub const DEFAULT_CAPACITY: usize = 64;

const DEFAULT_NON_ZERO: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CAPACITY) {
    Some(capacity) => capacity,
    None => panic!("DEFAULT_CAPACITY deve ser positiva"),
};

/// Memória circular de registradores
///
/// # Exemplo
///
/// ```
/// use msc_core::arena::Arena;
/// use msc_core::state::Register;
///
/// let mut arena = Arena::new(3).unwrap();
/// for raw in [1, 2, 3, 4] {
///     arena.push(Register::from_raw(raw));
/// }
///
/// // o mais antigo (1) foi sobrescrito
/// assert_eq!(arena.raw_view(), vec![2, 3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    /// Slots físicos (tamanho fixo = capacity)
    slots: Box<[Register]>,
    /// Total de escritas desde a criação
    cursor: u64,
}

impl Arena {
    /// Cria arena com `capacity` registradores zero
    ///
    /// Falha com [`MscError::InvalidCapacity`] se `capacity == 0`.
    pub fn new(capacity: usize) -> MscResult<Self> {
        NonZeroUsize::new(capacity)
            .map(Self::zeroed)
            .ok_or(MscError::InvalidCapacity(0))
    }

    fn zeroed(capacity: NonZeroUsize) -> Self {
        Self {
            slots: vec![Register::ZERO; capacity.get()].into_boxed_slice(),
            cursor: 0,
        }
    }

    /// Cria arena a partir de capacidade com sinal
    ///
    /// `capacity <= 0` falha com [`MscError::InvalidCapacity`].
    pub fn with_signed_capacity(capacity: i64) -> MscResult<Self> {
        match usize::try_from(capacity) {
            Ok(c) if c > 0 => Self::new(c),
            _ => Err(MscError::InvalidCapacity(capacity)),
        }
    }

    /// Cria arena e empurra cada semente em ordem
    pub fn seeded<I>(capacity: usize, seeds: I) -> MscResult<Self>
    where
        I: IntoIterator<Item = Register>,
    {
        let mut arena = Self::new(capacity)?;
        for seed in seeds {
            arena.push(seed);
        }
        Ok(arena)
    }

    // =========================================================================
    // Escrita
    // =========================================================================

    /// Escreve cópia de `register` em `cursor % capacity` e avança o cursor
    ///
    /// Sobrescreve silenciosamente o mais antigo quando cheia.
    #[inline]
    pub fn push(&mut self, register: Register) {
        let slot = self.write_slot();
        self.slots[slot] = register;
        self.cursor += 1;
    }

    // =========================================================================
    // Leitura
    // =========================================================================

    /// Cópia do registrador em `index % capacity`
    ///
    /// Qualquer inteiro é válido, inclusive negativo (resto euclidiano) e
    /// além da ocupação atual.
    #[inline]
    pub fn get(&self, index: i64) -> Register {
        let slot = index.rem_euclid(self.slots.len() as i64) as usize;
        self.slots[slot]
    }

    /// Registradores ocupados, do mais antigo ao mais novo
    pub fn view(&self) -> Vec<Register> {
        if !self.is_full() {
            return self.slots[..self.len()].to_vec();
        }

        // Cheia: o mais antigo está na próxima posição de escrita
        let start = self.write_slot();
        self.slots[start..]
            .iter()
            .chain(self.slots[..start].iter())
            .copied()
            .collect()
    }

    /// Mesmo que [`view`](Self::view), como bytes brutos
    pub fn raw_view(&self) -> Vec<u8> {
        self.view().iter().map(Register::raw).collect()
    }

    /// Fotografia serializável da arena
    pub fn snapshot(&self) -> ArenaSnapshot {
        ArenaSnapshot {
            capacity: self.capacity(),
            cursor: self.cursor,
            occupied: self.view(),
        }
    }

    // =========================================================================
    // Metadados
    // =========================================================================

    /// Capacidade fixa
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Total de escritas desde a criação
    #[inline]
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Número de slots ocupados: `min(cursor, capacity)`
    #[inline]
    pub fn len(&self) -> usize {
        self.cursor.min(self.capacity() as u64) as usize
    }

    /// Nenhuma escrita ainda?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Todos os slots já foram escritos ao menos uma vez?
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cursor >= self.capacity() as u64
    }

    #[inline]
    fn write_slot(&self) -> usize {
        (self.cursor % self.capacity() as u64) as usize
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::zeroed(DEFAULT_NON_ZERO)
    }
}

impl TryFrom<i64> for Arena {
    type Error = MscError;

    fn try_from(capacity: i64) -> MscResult<Self> {
        Self::with_signed_capacity(capacity)
    }
}

/// Fotografia da arena para diagnóstico
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ArenaSnapshot {
    /// Capacidade fixa
    pub capacity: usize,
    /// Total de escritas
    pub cursor: u64,
    /// Registradores ocupados, do mais antigo ao mais novo
    pub occupied: Vec<Register>,
}

// =============================================================================
// Testes
// =============================================================================
