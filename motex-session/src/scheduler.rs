use crate::config::SessionConfig;
use motex_core::{AngleRule, ConfigError, PhaseBoundary, TrialPlanEntry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Turns a validated configuration into the full trial plan: for each
/// trial index, the active phase and the target angle to cue. Pure
/// apart from the seeded generator; no I/O, no state beyond the
/// config it was built from.
pub struct PhaseScheduler {
    config: SessionConfig,
}

impl PhaseScheduler {
    /// Validates the configuration once so that every later phase
    /// lookup is total. Malformed boundary tables fail here, before
    /// the session starts.
    pub fn new(config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
        })
    }

    /// The boundary row owning `trial_index`. Total for indices below
    /// `num_trials`; the partition was checked in `new`.
    pub fn phase_for(&self, trial_index: usize) -> &PhaseBoundary {
        self.config
            .phase_boundaries
            .iter()
            .find(|b| b.contains(trial_index))
            .expect("boundary table partitions the trial range")
    }

    /// Produces the ordered plan, one entry per trial. Deterministic:
    /// the same configuration and seed always yield the same plan.
    /// Without a seed the generator comes from OS entropy.
    pub fn generate(&self) -> Vec<TrialPlanEntry> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let angles = &self.config.candidate_angles;
        let mut plan = Vec::with_capacity(self.config.num_trials);
        let mut previous_angle: Option<f64> = None;

        for trial_index in 0..self.config.num_trials {
            let boundary = self.phase_for(trial_index);
            let target_angle = match boundary.rule {
                AngleRule::Fixed { angle } => angle,
                AngleRule::Cyclic => angles[(trial_index - boundary.start) % angles.len()],
                AngleRule::Randomized { no_immediate_repeat } => {
                    let draw = angles[rng.random_range(0..angles.len())];
                    match previous_angle {
                        // Redraw from the remaining candidates. A set
                        // with no other distinct angle (size one, or
                        // all duplicates) cannot satisfy the
                        // constraint and is allowed to repeat.
                        Some(prev) if no_immediate_repeat && draw == prev => {
                            let others: Vec<f64> =
                                angles.iter().copied().filter(|a| *a != prev).collect();
                            if others.is_empty() {
                                draw
                            } else {
                                others[rng.random_range(0..others.len())]
                            }
                        }
                        _ => draw,
                    }
                }
            };
            previous_angle = Some(target_angle);
            plan.push(TrialPlanEntry {
                trial_index,
                phase_label: boundary.label.clone(),
                target_angle,
            });
        }

        plan
    }
}
