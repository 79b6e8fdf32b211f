//! Shared fixtures for Thermorank tests: a builder for one-off materials,
//! a small realistic candidate set, and seeded random material generation.

use chrono::NaiveDate;
use rand::Rng;
use thermorank_common::{Material, MaterialStatus, SynthesisComplexity};

/// Builder with mid-range defaults, so a test only sets what it cares about.
#[derive(Debug, Clone)]
pub struct MaterialBuilder {
    material: Material,
}

impl MaterialBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            material: Material {
                id: id.to_string(),
                name: format!("Candidate {id}"),
                formula: "Bi2Te3".to_string(),
                predicted_zt: 1.0,
                estimated_cost: 2500.0,
                synthesis_complexity: SynthesisComplexity::Medium,
                toxicity_score: 5.0,
                availability_score: 5.0,
                novelty_score: 5.0,
                commercial_viability: 5.0,
                estimated_synthesis_time: 15.0,
                thermal_conductivity: 1.0,
                electrical_conductivity: 1000.0,
                status: MaterialStatus::Queued,
                lab_partner: None,
                generated_date: date(2024, 10, 1),
                notes: None,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self { self.material.name = name.to_string(); self }
    pub fn formula(mut self, formula: &str) -> Self { self.material.formula = formula.to_string(); self }
    pub fn zt(mut self, zt: f64) -> Self { self.material.predicted_zt = zt; self }
    pub fn cost(mut self, cost: f64) -> Self { self.material.estimated_cost = cost; self }
    pub fn complexity(mut self, c: SynthesisComplexity) -> Self { self.material.synthesis_complexity = c; self }
    pub fn toxicity(mut self, v: f64) -> Self { self.material.toxicity_score = v; self }
    pub fn availability(mut self, v: f64) -> Self { self.material.availability_score = v; self }
    pub fn novelty(mut self, v: f64) -> Self { self.material.novelty_score = v; self }
    pub fn viability(mut self, v: f64) -> Self { self.material.commercial_viability = v; self }
    pub fn synthesis_days(mut self, days: f64) -> Self { self.material.estimated_synthesis_time = days; self }
    pub fn status(mut self, status: MaterialStatus) -> Self { self.material.status = status; self }
    pub fn lab_partner(mut self, lab: &str) -> Self { self.material.lab_partner = Some(lab.to_string()); self }
    pub fn notes(mut self, notes: &str) -> Self { self.material.notes = Some(notes.to_string()); self }

    pub fn build(self) -> Material {
        self.material
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

/// A small, plausible candidate pool covering every status and complexity.
pub fn sample_materials() -> Vec<Material> {
    vec![
        MaterialBuilder::new("mat-001")
            .name("Sodium-doped tin selenide")
            .formula("Sn0.98Na0.02Se")
            .zt(2.1).cost(1200.0).complexity(SynthesisComplexity::Low)
            .toxicity(3.0).availability(7.0).novelty(8.0).viability(6.0)
            .synthesis_days(10.0)
            .build(),
        MaterialBuilder::new("mat-002")
            .name("Bismuth antimony telluride")
            .formula("Bi0.5Sb1.5Te3")
            .zt(1.4).cost(2100.0).complexity(SynthesisComplexity::Medium)
            .toxicity(5.0).availability(4.0).novelty(3.0).viability(8.0)
            .synthesis_days(14.0)
            .status(MaterialStatus::Validated)
            .lab_partner("Cambridge")
            .build(),
        MaterialBuilder::new("mat-003")
            .name("Magnesium antimonide")
            .formula("Mg3Sb2")
            .zt(1.6).cost(900.0).complexity(SynthesisComplexity::High)
            .toxicity(2.0).availability(9.0).novelty(6.0).viability(7.0)
            .synthesis_days(21.0)
            .build(),
        MaterialBuilder::new("mat-004")
            .name("Lead telluride nanocomposite")
            .formula("PbTe-SrTe")
            .zt(2.5).cost(3800.0).complexity(SynthesisComplexity::High)
            .toxicity(8.0).availability(5.0).novelty(7.0).viability(4.0)
            .synthesis_days(28.0)
            .status(MaterialStatus::InSynthesis)
            .lab_partner("Imperial")
            .build(),
        MaterialBuilder::new("mat-005")
            .name("Half-Heusler ZrNiSn")
            .formula("ZrNiSn0.99Sb0.01")
            .zt(1.1).cost(1600.0).complexity(SynthesisComplexity::Medium)
            .toxicity(2.0).availability(6.0).novelty(5.0).viability(6.0)
            .synthesis_days(18.0)
            .status(MaterialStatus::Testing)
            .lab_partner("Henry Royce")
            .build(),
        MaterialBuilder::new("mat-006")
            .name("Skutterudite CoSb3")
            .formula("Yb0.2Co4Sb12")
            .zt(1.3).cost(2800.0).complexity(SynthesisComplexity::High)
            .toxicity(4.0).availability(5.0).novelty(4.0).viability(7.0)
            .synthesis_days(25.0)
            .build(),
        MaterialBuilder::new("mat-007")
            .name("Copper selenide liquid-like")
            .formula("Cu2Se")
            .zt(0.9).cost(700.0).complexity(SynthesisComplexity::Low)
            .toxicity(3.0).availability(8.0).novelty(5.0).viability(5.0)
            .synthesis_days(7.0)
            .status(MaterialStatus::Rejected)
            .notes("Phase instability above 400 K")
            .build(),
        MaterialBuilder::new("mat-008")
            .name("Germanium telluride")
            .formula("Ge0.9Bi0.1Te")
            .zt(1.9).cost(4200.0).complexity(SynthesisComplexity::Medium)
            .toxicity(4.0).availability(3.0).novelty(6.0).viability(6.0)
            .synthesis_days(12.0)
            .build(),
    ]
}

/// Random material with every numeric property inside its documented domain.
pub fn random_material<R: Rng>(rng: &mut R, id: &str) -> Material {
    let complexity = match rng.gen_range(0..3) {
        0 => SynthesisComplexity::Low,
        1 => SynthesisComplexity::Medium,
        _ => SynthesisComplexity::High,
    };
    let status = MaterialStatus::ALL[rng.gen_range(0..MaterialStatus::ALL.len())];

    MaterialBuilder::new(id)
        .zt(rng.gen_range(0.0..3.5))
        .cost(rng.gen_range(0.0..6000.0))
        .complexity(complexity)
        .toxicity(rng.gen_range(0.0..=10.0))
        .availability(rng.gen_range(0.0..=10.0))
        .novelty(rng.gen_range(0.0..=10.0))
        .viability(rng.gen_range(0.0..=10.0))
        .synthesis_days(rng.gen_range(0.0..40.0))
        .status(status)
        .build()
}

/// `n` random materials with ids `rnd-0`, `rnd-1`, ...
pub fn random_materials<R: Rng>(rng: &mut R, n: usize) -> Vec<Material> {
    (0..n).map(|i| random_material(rng, &format!("rnd-{i}"))).collect()
}
