//! Erros do núcleo MSC

use thiserror::Error;

/// Resultado de operações do núcleo
pub type MscResult<T> = Result<T, MscError>;

/// Erros do núcleo MSC
///
/// Só a construção de uma [`Arena`](crate::arena::Arena) pode falhar; todas
/// as outras operações são totais (máscaras e módulo absorvem entradas fora
/// de faixa).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MscError {
    /// Capacidade de arena não positiva
    #[error("capacidade de arena inválida: {0} (deve ser positiva)")]
    InvalidCapacity(i64),
}
