//! # 🔄 propagate — Laço de Propagação
//!
//! Realimenta a saída de cada aplicação como entrada da próxima. O laço é do
//! chamador: os tipos do núcleo não agendam nada sozinhos.

use crate::arena::Arena;
use crate::config;
use crate::operator::RegisterTransform;
use crate::state::Register;

/// Resultado de uma propagação
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PropagationResult {
    /// Registrador final
    pub register: Register,
    /// Número de aplicações executadas (cada uma empurrou na arena)
    pub steps: usize,
    /// Motivo da parada
    pub stop_reason: StopReason,
    /// Entrada inicial seguida de cada saída (se habilitado)
    pub history: Option<Vec<Register>>,
}

/// Motivo de parada da propagação
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum StopReason {
    /// Atingiu máximo de passos
    MaxSteps,
    /// A última aplicação devolveu a própria entrada
    Stable,
}

/// Configuração da propagação
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropagationConfig {
    /// Máximo de aplicações (0 = nenhuma)
    pub max_steps: usize,
    /// Parar quando a saída for igual à entrada
    pub detect_stable: bool,
    /// Manter histórico
    pub keep_history: bool,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            max_steps: config::DEFAULT_MAX_STEPS,
            detect_stable: false,
            keep_history: false,
        }
    }
}

impl PropagationConfig {
    /// Configuração para debug (com histórico)
    pub fn debug() -> Self {
        Self {
            keep_history: true,
            ..Default::default()
        }
    }
}

/// Aplica `transform` `steps` vezes, realimentando a saída
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
/// let last = propagate(Register::from_raw(0b1011_0010), &Operator::covariant(), &mut arena, 5);
/// assert_eq!(last.raw(), 132);
/// assert_eq!(arena.len(), 7);
/// ```
pub fn propagate<T: RegisterTransform + ?Sized>(
    initial: Register,
    transform: &T,
    arena: &mut Arena,
    steps: usize,
) -> Register {
    let config = PropagationConfig {
        max_steps: steps,
        ..Default::default()
    };

    propagate_with_config(initial, transform, arena, &config).register
}

/// Propagação com configuração completa
pub fn propagate_with_config<T: RegisterTransform + ?Sized>(
    initial: Register,
    transform: &T,
    arena: &mut Arena,
    config: &PropagationConfig,
) -> PropagationResult {
    PropagationRunner::new(transform)
        .with_config(config.clone())
        .run(initial, arena)
}

/// Runner de propagação com callbacks
pub struct PropagationRunner<'t, T: RegisterTransform + ?Sized> {
    transform: &'t T,
    config: PropagationConfig,
    on_step: Option<Box<dyn Fn(usize, &Register) + 't>>,
}

impl<'t, T: RegisterTransform + ?Sized> PropagationRunner<'t, T> {
    pub fn new(transform: &'t T) -> Self {
        Self {
            transform,
            config: PropagationConfig::default(),
            on_step: None,
        }
    }

    pub fn with_config(mut self, config: PropagationConfig) -> Self {
        self.config = config;
        self
    }

    /// Chamado após cada aplicação com o número do passo (1-based) e a saída
    pub fn on_step<F: Fn(usize, &Register) + 't>(mut self, callback: F) -> Self {
        self.on_step = Some(Box::new(callback));
        self
    }

    pub fn run(&self, initial: Register, arena: &mut Arena) -> PropagationResult {
        let mut register = initial;
        let mut history = self.config.keep_history.then(|| vec![initial]);
        let mut steps = 0;

        let stop_reason = loop {
            if steps >= self.config.max_steps {
                break StopReason::MaxSteps;
            }

            let next = self.transform.apply(register, arena);
            steps += 1;

            if let Some(ref mut h) = history {
                h.push(next);
            }
            if let Some(ref callback) = self.on_step {
                callback(steps, &next);
            }

            let unchanged = next == register;
            register = next;

            if self.config.detect_stable && unchanged {
                break StopReason::Stable;
            }
        };

        tracing::debug!(
            transform = self.transform.name(),
            steps,
            ?stop_reason,
            output = register.raw(),
            "propagation stopped"
        );

        PropagationResult {
            register,
            steps,
            stop_reason,
            history,
        }
    }
}
