//! Cenário de referência: duas sementes, um passo covariante, um contravariante

use crate::arena::{Arena, ArenaSnapshot};
use crate::error::MscResult;
use crate::operator::{Operator, RegisterTransform};
use crate::state::Register;

/// Capacidade da arena do cenário
pub const DEMO_CAPACITY: usize = 8;

/// Sementes do cenário
pub const DEMO_SEEDS: [Register; 2] = [
    Register::from_raw(0b1011_0010),
    Register::from_raw(0b0101_1001),
];

/// Resultado do cenário de referência
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DemoReport {
    /// Registradores iniciais (também empurrados na arena)
    pub seeds: [Register; 2],
    /// Propagação covariante da primeira semente
    pub covariant: Register,
    /// Propagação contravariante da segunda semente
    pub contravariant: Register,
    /// Arena após as duas propagações
    pub arena: ArenaSnapshot,
}

/// Executa o cenário de referência
///
/// ```
/// let report = msc_core::cycle::demo().unwrap();
/// assert_eq!(report.covariant.raw(), 0b1100_0101);
/// assert_eq!(report.contravariant.raw(), 0b1000_1110);
/// ```
pub fn demo() -> MscResult<DemoReport> {
    let [fr0, fr1] = DEMO_SEEDS;
    let mut arena = Arena::seeded(DEMO_CAPACITY, DEMO_SEEDS)?;

    let covariant = Operator::covariant().apply(fr0, &mut arena);
    let contravariant = Operator::contravariant().apply(fr1, &mut arena);

    Ok(DemoReport {
        seeds: DEMO_SEEDS,
        covariant,
        contravariant,
        arena: arena.snapshot(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_matches_reference() {
        let report = demo().unwrap();
        assert_eq!(report.covariant.to_string(), "<FR C:1 V:100 T:0101 raw:11000101>");
        assert_eq!(report.contravariant.to_string(), "<FR C:1 V:000 T:1110 raw:10001110>");

        let raws: Vec<u8> = report.arena.occupied.iter().map(Register::raw).collect();
        assert_eq!(raws, vec![178, 89, 197, 142]);
        assert_eq!(report.arena.cursor, 4);
    }

    #[test]
    fn test_demo_serializes() {
        let json = serde_json::to_value(demo().unwrap()).unwrap();
        assert_eq!(json["covariant"]["raw"], 197);
        assert_eq!(json["arena"]["capacity"], 8);
    }
}
