//! The scenario catalog.
//!
//! Holds the read-only set of scenarios available for a session. The built-in
//! catalog carries the three business cases the trainer ships with.

use std::collections::HashSet;

use crate::error::ParetoError;
use crate::model::{ProblemRecord, Scenario};

/// An ordered, immutable collection of scenarios keyed by name.
#[derive(Debug, Clone)]
pub struct Catalog {
    scenarios: Vec<Scenario>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate scenario or problem names.
    pub fn new(scenarios: Vec<Scenario>) -> Result<Self, ParetoError> {
        let mut seen = HashSet::new();
        for scenario in &scenarios {
            if !seen.insert(scenario.name.as_str()) {
                return Err(ParetoError::DuplicateScenario(scenario.name.clone()));
            }
            let mut problems = HashSet::new();
            for problem in &scenario.problems {
                if !problems.insert(problem.name.as_str()) {
                    return Err(ParetoError::DuplicateProblem {
                        scenario: scenario.name.clone(),
                        problem: problem.name.clone(),
                    });
                }
            }
        }
        Ok(Self { scenarios })
    }

    /// The catalog bundled with the trainer.
    pub fn builtin() -> Self {
        let scenarios = BUILTIN
            .iter()
            .map(|(name, description, problems)| {
                Scenario::new(
                    *name,
                    *description,
                    problems
                        .iter()
                        .map(|(n, d, count)| ProblemRecord::new(*n, *d, *count))
                        .collect(),
                )
            })
            .collect();
        Self { scenarios }
    }

    /// Scenario names in catalog order.
    pub fn list_scenarios(&self) -> Vec<&str> {
        self.scenarios.iter().map(|s| s.name.as_str()).collect()
    }

    /// Fetch a scenario by its name.
    pub fn get_scenario(&self, name: &str) -> Result<&Scenario, ParetoError> {
        self.scenarios
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ParetoError::NotFound(name.to_string()))
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

type ProblemRow = (&'static str, &'static str, u32);

const BUILTIN: &[(&str, &str, &[ProblemRow])] = &[
    (
        "Fábrica de tazas metálicas",
        "Una empresa de manufactura que produce tazas metálicas antivuelco ha recibido múltiples quejas por defectos de calidad y problemas logísticos.",
        &[
            ("Producto rayado", "Tazas llegan con rayones visibles", 25),
            ("Mal ensamblaje", "La tapa no cierra correctamente", 18),
            ("Demora en entrega", "Los pedidos llegan tarde", 30),
            ("Fuga por válvula", "Las tazas gotean durante su uso", 12),
            ("Atención al cliente", "Respuestas tardías o poco útiles", 9),
            ("Empaque deficiente", "Cajas dañadas o sin instrucciones", 6),
        ],
    ),
    (
        "Clínica privada",
        "Una clínica ha recibido varias quejas de pacientes sobre la atención médica, los procesos administrativos y la limpieza.",
        &[
            ("Retrasos en consultas", "El doctor tarda en atender", 22),
            ("Errores en facturación", "Cobros incorrectos", 16),
            ("Falta de camas", "No hay disponibilidad", 24),
            ("Mal trato del personal", "Falta de empatía", 15),
            ("Errores en recetas", "Medicamentos equivocados", 12),
            ("Poca limpieza", "Quejas por sanitarios", 7),
        ],
    ),
    (
        "Tienda online",
        "Una plataforma de ventas en línea enfrenta quejas constantes relacionadas con el proceso de entrega y postventa.",
        &[
            ("Retraso en entregas", "Llegan después de la fecha", 28),
            ("Producto equivocado", "No coincide con lo comprado", 21),
            ("Falla en pagos", "Problemas con tarjeta o PayPal", 10),
            ("Atención por chat lenta", "Soporte tarda en responder", 12),
            ("Producto dañado", "Empaque o contenido roto", 18),
            ("Dificultad para devolver", "Proceso complicado", 8),
        ],
    ),
];
