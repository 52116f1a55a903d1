mod utils;

pub mod color;
pub mod particle;

use crate::particle::Particle;
use rand::Rng;
use vecmath::Vector2;
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::console;
use web_sys::CanvasRenderingContext2d;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        #[cfg(target_arch = "wasm32")]
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        console::time_end_with_label(self.name);
    }
}

pub const NUM_PARTICLES: u32 = 900;

// Owns every piece of mutable animation state. The JS host forwards
// mousemove/resize events into it and drives update/render once per
// requestAnimationFrame callback; nothing here is a global.
#[wasm_bindgen]
pub struct Simulation {
    width: f64,
    height: f64,
    pointer: Option<Vector2<f64>>,
    particles: Vec<Particle>,
}

#[wasm_bindgen]
impl Simulation {
    pub fn new(width: f64, height: f64) -> Simulation {
        let particles: Vec<Particle> = Vec::new();
        Simulation {
            width,
            height,
            pointer: None,
            particles,
        }
    }

    // Replaces the whole population with NUM_PARTICLES freshly randomized
    // circles. Each spawns fully inside the viewport on both axes.
    pub fn initialize_particles(&mut self) {
        self.particles.clear();
        self.particles.reserve(NUM_PARTICLES as usize);
        let mut rng = rand::thread_rng();
        for _ in 0..NUM_PARTICLES {
            let radius = rng.gen::<f64>() * 3.0 + 1.0;
            let pos_x = rng.gen::<f64>() * (self.width - radius * 2.0) + radius;
            let pos_y = rng.gen::<f64>() * (self.height - radius * 2.0) + radius;
            let vel_x = (rng.gen::<f64>() - 0.5) * 5.0;
            let vel_y = (rng.gen::<f64>() - 0.5) * 5.0;
            self.particles
                .push(Particle::new(pos_x, pos_y, vel_x, vel_y, radius, &mut rng));
        }
    }

    // One animation tick's worth of state transitions. Every particle in the
    // population advances, the last one included.
    pub fn update(&mut self) {
        let _timer = Timer::new("Simulation::update()");
        let pointer = self.pointer;
        for particle in &mut self.particles {
            particle.advance(pointer, self.width, self.height);
        }
    }

    // Clears the surface and paints each particle as a filled circle.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let _timer = Timer::new("Simulation::render");
        ctx.clear_rect(0.0, 0.0, self.width, self.height);
        for particle in &self.particles {
            ctx.begin_path();
            ctx.arc(
                particle.pos[0],
                particle.pos[1],
                particle.radius,
                0.0,
                std::f64::consts::PI * 2.0,
            )?;
            ctx.set_fill_style(&JsValue::from_str(&particle.color.to_css()));
            ctx.fill();
        }
        Ok(())
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Some([x, y]);
    }

    // Cursor left the view; growth checks short-circuit until it returns.
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    // Resizing restarts the animation: new dimensions, brand new population.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.initialize_particles();
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn num_particles(&self) -> u32 {
        self.particles.len() as u32
    }
}
