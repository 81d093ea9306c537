//! # 🔄 Cycle — Laços de Propagação
//!
//! Conveniências do lado do chamador construídas sobre a API pública.
//!
//! - [`propagate`]: realimentação saída → entrada
//! - [`demo`]: cenário de referência

mod demo;
mod propagate;

pub use demo::{demo, DemoReport, DEMO_CAPACITY, DEMO_SEEDS};
pub use propagate::{
    propagate, propagate_with_config, PropagationConfig, PropagationResult,
    PropagationRunner, StopReason,
};
