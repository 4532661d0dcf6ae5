/// Easing curves mapping normalized time `t ∈ [0, 1]` to progress.
///
/// `CircleOut` is the default for every action except heat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    CircleIn,
    #[default]
    CircleOut,
    CircleInOut,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CircleIn => circle_in(t),
            Easing::CircleOut => 1.0 - circle_in(1.0 - t),
            Easing::CircleInOut => {
                if t < 0.5 {
                    circle_in(t * 2.0) * 0.5
                } else {
                    (1.0 - circle_in((1.0 - t) * 2.0)) * 0.5 + 0.5
                }
            }
        }
    }
}

fn circle_in(t: f32) -> f32 {
    1.0 - (1.0 - t * t).max(0.0).sqrt()
}
