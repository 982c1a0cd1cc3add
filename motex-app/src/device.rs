use motex_core::{DeviceReadError, InputDevice};
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;

/// Synthetic joystick for pipeline dry runs: each read ramps the
/// stick a little further out along the currently cued direction,
/// with some axis noise. Resets to center whenever the cue changes,
/// like a participant returning the stick between trials.
pub struct SyntheticStick {
    target_deg: Rc<Cell<f64>>,
    last_target: f64,
    progress: f64,
    rng: StdRng,
}

impl SyntheticStick {
    pub fn new(target_deg: Rc<Cell<f64>>) -> Self {
        Self {
            target_deg,
            last_target: f64::NAN,
            progress: 0.0,
            rng: StdRng::from_os_rng(),
        }
    }
}

impl InputDevice for SyntheticStick {
    fn read(&mut self) -> Result<(f64, f64), DeviceReadError> {
        let target = self.target_deg.get();
        if target != self.last_target {
            self.last_target = target;
            self.progress = 0.0;
        }
        self.progress = (self.progress + 0.08).min(1.0);

        let theta = target.to_radians();
        let noise_x: f64 = self.rng.random_range(-0.02..0.02);
        let noise_y: f64 = self.rng.random_range(-0.02..0.02);
        Ok((
            self.progress * theta.cos() + noise_x,
            self.progress * theta.sin() + noise_y,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramps_toward_the_cued_angle() {
        let target = Rc::new(Cell::new(0.0));
        let mut stick = SyntheticStick::new(target.clone());
        let mut x_last = 0.0;
        for _ in 0..20 {
            let (x, y) = stick.read().unwrap();
            assert!(y.abs() < 0.1);
            x_last = x;
        }
        assert!(x_last > 0.9);
    }

    #[test]
    fn recenters_when_the_cue_changes() {
        let target = Rc::new(Cell::new(0.0));
        let mut stick = SyntheticStick::new(target.clone());
        for _ in 0..20 {
            stick.read().unwrap();
        }
        target.set(90.0);
        let (x, y) = stick.read().unwrap();
        assert!(x.abs() < 0.1);
        assert!(y < 0.2);
    }
}
