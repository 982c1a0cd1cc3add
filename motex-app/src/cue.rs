use motex_core::{Presentation, PresentationError};
use std::cell::Cell;
use std::rc::Rc;

/// Console stand-in for the lab's display: announces the cued angle
/// and publishes it so the synthetic stick can steer toward it.
/// The real presentation layer plugs in behind the same trait.
pub struct TerminalCue {
    target_deg: Rc<Cell<f64>>,
}

impl TerminalCue {
    pub fn new(target_deg: Rc<Cell<f64>>) -> Self {
        Self { target_deg }
    }
}

impl Presentation for TerminalCue {
    fn present(&mut self, angle_deg: f64) -> Result<(), PresentationError> {
        self.target_deg.set(angle_deg);
        println!("  target at {angle_deg:+.1} deg");
        Ok(())
    }
}
