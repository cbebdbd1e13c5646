use serde::{Deserialize, Serialize};
use tracing::debug;

/// Remaining-distance bookkeeping for one trip.
///
/// `initial_distance` is the first distance seen and stays fixed until the trip is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    initial_distance: f64,
    current_distance: f64,
}

impl ProgressState {
    pub fn new(initial_distance: f64) -> Self {
        Self {
            initial_distance,
            current_distance: initial_distance,
        }
    }

    pub fn initial_distance(&self) -> f64 {
        self.initial_distance
    }

    pub fn current_distance(&self) -> f64 {
        self.current_distance
    }

    /// Completion in `[0, 1]`, a zero baseline counts as complete.
    pub fn ratio(&self) -> f64 {
        if self.initial_distance == 0.0 {
            return 1.0;
        }

        let ratio = 1.0 - self.current_distance / self.initial_distance;
        if ratio.is_nan() {
            return 0.0;
        }

        ratio.clamp(0.0, 1.0)
    }
}

/// Applies a remaining-distance update in arrival order.
pub fn apply_update(state: Option<ProgressState>, remaining_distance: f64) -> ProgressState {
    match state {
        None => ProgressState::new(remaining_distance),
        Some(state) => {
            if remaining_distance > state.current_distance {
                debug!(
                    "Remaining distance went up from {} to {}",
                    state.current_distance, remaining_distance
                );
            }

            ProgressState {
                initial_distance: state.initial_distance,
                current_distance: remaining_distance,
            }
        }
    }
}
