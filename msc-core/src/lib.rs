//! # 🌀 MSC-Core
//!
//! Modelo mínimo de memória de registradores tipados com regras
//! determinísticas de transformação bit a bit.
//!
//! > *"Observar altera o estado futuro."*
//!
//! ## O Modelo
//!
//! ```text
//!            ┌──────────────┐   apply(r, arena)   ┌──────────────┐
//!   r ──────►│   Operator   │────────────────────►│  r' (novo)   │
//!            │   (phase)    │                     └──────┬───────┘
//!            └──────┬───────┘                            │ push
//!                   │ get(idx)                           ▼
//!            ┌──────▼──────────────────────────────────────────┐
//!            │ Arena: anel de capacidade fixa de Registers     │
//!            └─────────────────────────────────────────────────┘
//! ```
//!
//! 1. Todo estado é um **Register** de 8 bits (C, V, T)
//! 2. A **Arena** é um anel de capacidade fixa, com sobrescrita FIFO
//! 3. O **Operator** lê um vizinho, mede entropia e empurra o resultado
//!
//! ## Computational Complexity
//!
//! - Register: O(1), todas as operações `const fn`
//! - Arena push/get: O(1); view: O(capacity)
//! - Operator apply: O(1)
//!
//! ## Módulos
//!
//! - [`state`]: Register — representação do estado
//! - [`arena`]: Arena — memória circular
//! - [`operator`]: Operator e o trait RegisterTransform
//! - [`cycle`]: Laço de propagação e cenário de referência
//! - [`config`]: Configuração via ambiente / `.env`
//! - [`error`]: MscError
//!
//! ## Quick Start
//!
//! ```
//! use msc_core::prelude::*;
//!
//! let mut arena = Arena::new(8)?;
//! arena.push(Register::from_raw(0b1011_0010));
//!
//! let out = Operator::covariant().apply(Register::from_raw(0b1011_0010), &mut arena);
//! assert_eq!(out.carry(), 1);
//! assert_eq!(arena.len(), 2);
//! # Ok::<(), msc_core::MscError>(())
//! ```
//!
//! ## Concorrência
//!
//! Uma `Arena` não tem sincronização interna e exige `&mut` para escrever.
//! Simulações independentes devem ter cada uma a sua; `Operator` é `Copy`,
//! `Send` e `Sync` e pode ser compartilhado.

pub mod state;
pub mod arena;
pub mod operator;
pub mod cycle;
pub mod config;
pub mod error;
pub mod prelude;

// Re-exportações de nível superior
pub use state::Register;
pub use arena::{Arena, ArenaSnapshot, DEFAULT_CAPACITY};
pub use operator::{Application, Operator, RegisterTransform};
pub use cycle::{
    demo, propagate, propagate_with_config, DemoReport, PropagationConfig,
    PropagationResult, PropagationRunner, StopReason,
};
pub use error::{MscError, MscResult};
