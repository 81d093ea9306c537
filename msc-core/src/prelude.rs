//! # Prelude — Re-exportações Convenientes
//!
//! Importação única para usar o MSC-Core:
//!
//! ```
//! use msc_core::prelude::*;
//! ```

// Estado
pub use crate::state::{fields, Register};

// Memória
pub use crate::arena::{Arena, ArenaSnapshot, DEFAULT_CAPACITY};

// Transformações
pub use crate::operator::{Application, Operator, RegisterTransform};

// Ciclo
pub use crate::cycle::{
    propagate,
    propagate_with_config,
    PropagationConfig,
    PropagationResult,
    PropagationRunner,
    StopReason,
};

// Erros
pub use crate::error::{MscError, MscResult};
