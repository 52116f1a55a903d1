// Particle struct for a single animated circle: position, velocity, radius,
// and a palette color fixed at creation. All movement and growth rules live
// in `advance`, which only transitions state so it can be exercised without
// a canvas.

use crate::color::{self, Color};
use rand::Rng;
use vecmath::Vector2;

pub const MIN_RADIUS: f64 = 2.0;
pub const GROW_RADIUS: f64 = 40.0;
// Half-width of the square region around a circle's center within which the
// pointer triggers growth
pub const GROW_RANGE: f64 = 40.0;

pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new<R: Rng>(
        pos_x: f64,
        pos_y: f64,
        vel_x: f64,
        vel_y: f64,
        radius: f64,
        rng: &mut R,
    ) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color: color::random_palette_color(rng),
        }
    }

    // Advances this particle by one tick. `pointer` is the last known cursor
    // position, or `None` if the cursor has never entered the view.
    pub fn advance(&mut self, pointer: Option<Vector2<f64>>, width: f64, height: f64) {
        // Boundary reflection. The x axis is checked first and exclusively:
        // a corner hit only flips the horizontal velocity on that tick, and
        // the vertical one flips on a later tick once the particle is clear
        // of the x bound.
        if self.pos[0] + self.radius > width || self.pos[0] - self.radius <= 0.0 {
            self.vel[0] = -self.vel[0];
        } else if self.pos[1] + self.radius > height || self.pos[1] - self.radius <= 0.0 {
            self.vel[1] = -self.vel[1];
        }

        // Per-tick displacement, deliberately not scaled by elapsed time.
        self.pos = vecmath::vec2_add(self.pos, self.vel);

        if let Some(p) = pointer {
            let to_pointer = vecmath::vec2_sub(p, self.pos);
            if to_pointer[0] > -GROW_RANGE
                && to_pointer[0] < GROW_RANGE
                && to_pointer[1] > -GROW_RANGE
                && to_pointer[1] < GROW_RANGE
            {
                // Snap straight to full size rather than growing gradually.
                self.radius = GROW_RADIUS;
                return;
            }
        }

        if self.radius > MIN_RADIUS {
            // Decay one unit per tick, never crossing below the floor.
            // Particles spawned smaller than the floor keep their size.
            self.radius = (self.radius - 1.0).max(MIN_RADIUS);
        }
    }
}
