mod color;
mod field;
mod frame_loop;
mod gradient;
mod gradient_text;
mod particle;
mod utils;

pub use crate::color::{lerp, lerp_angle, lerp_hsl, Hsl};
pub use crate::field::FieldSim;
pub use crate::gradient::{smoothstep, GradientCycle, GradientFrame, GradientTarget};
pub use crate::gradient_text::GradientCycler;
pub use crate::particle::Particle;

use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent, Window};

use crate::frame_loop::FrameLoop;
use crate::utils::Timer;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

const PARTICLE_RADIUS: f64 = 1.5;
const PARTICLE_FILL: &str = "rgba(99, 102, 241, 0.7)";
const LINK_LINE_WIDTH: f64 = 0.8;
// Links never go fully opaque; they top out at this alpha
const LINK_ALPHA_SCALE: f64 = 0.3;
const BACKDROP_STYLE: &str =
    "position:fixed;top:0;left:0;width:100%;height:100%;pointer-events:none;z-index:0;opacity:0.6";

// Full-bleed particle backdrop. Mounting appends a canvas to the container
// and starts the animation; if the document or the 2d context is missing
// the widget comes up inert instead of throwing into the host page.
#[wasm_bindgen]
pub struct ParticleField {
    canvas: Option<HtmlCanvasElement>,
    frame_loop: FrameLoop,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl ParticleField {
    #[wasm_bindgen(constructor)]
    pub fn new(
        container: &Element,
        particle_count: Option<i32>,
        interaction_radius: Option<f64>,
    ) -> ParticleField {
        let mut widget = ParticleField {
            canvas: None,
            frame_loop: FrameLoop::new(),
            listeners: Vec::new(),
        };
        widget.mount(container, particle_count, interaction_radius);
        widget
    }

    // Cancels the pending frame, drops both window listeners and removes
    // the canvas. Callable any number of times.
    pub fn stop(&mut self) {
        self.frame_loop.stop();
        self.listeners.clear();
        if let Some(canvas) = self.canvas.take() {
            canvas.remove();
        }
    }
}

impl ParticleField {
    fn mount(
        &mut self,
        container: &Element,
        particle_count: Option<i32>,
        interaction_radius: Option<f64>,
    ) {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };
        let document = match window.document() {
            Some(document) => document,
            None => return,
        };
        let canvas = match document
            .create_element("canvas")
            .ok()
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
        {
            Some(canvas) => canvas,
            None => return,
        };
        if canvas.set_attribute("style", BACKDROP_STYLE).is_err() {
            return;
        }
        if container.append_child(&canvas).is_err() {
            return;
        }
        let ctx = match canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
        {
            Some(ctx) => ctx,
            None => {
                canvas.remove();
                return;
            }
        };

        let (width, height) = viewport_size(&window);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let count =
            field::sanitize_count(particle_count.unwrap_or(field::DEFAULT_PARTICLE_COUNT as i32));
        let radius = field::sanitize_radius(
            interaction_radius.unwrap_or(field::DEFAULT_INTERACTION_RADIUS),
        );

        let sim = {
            let _timer = Timer::new("ParticleField::mount");
            let mut rng = rand::thread_rng();
            Rc::new(RefCell::new(FieldSim::new(
                width, height, count, radius, &mut rng,
            )))
        };

        let mouse_sim = sim.clone();
        self.listeners
            .push(EventListener::new(&window, "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    mouse_sim
                        .borrow_mut()
                        .set_cursor(event.client_x() as f64, event.client_y() as f64);
                }
            }));

        let resize_sim = sim.clone();
        let resize_window = window.clone();
        let resize_canvas = canvas.clone();
        self.listeners
            .push(EventListener::new(&window, "resize", move |_| {
                let (width, height) = viewport_size(&resize_window);
                resize_canvas.set_width(width as u32);
                resize_canvas.set_height(height as u32);
                resize_sim.borrow_mut().resize(width, height);
            }));

        self.frame_loop.start(move |_timestamp| {
            let mut sim = sim.borrow_mut();
            let (width, height) = sim.bounds();
            ctx.clear_rect(0.0, 0.0, width, height);
            sim.step();
            draw_field(&ctx, &sim);
        });

        self.canvas = Some(canvas);
    }
}

impl Drop for ParticleField {
    fn drop(&mut self) {
        self.stop();
    }
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
    (width, height)
}

// Discs first, then the link pass, both over this frame's settled positions
fn draw_field(ctx: &CanvasRenderingContext2d, sim: &FieldSim) {
    ctx.set_fill_style_str(PARTICLE_FILL);
    for particle in sim.particles() {
        ctx.begin_path();
        if ctx
            .arc(particle.pos[0], particle.pos[1], PARTICLE_RADIUS, 0.0, 2.0 * PI)
            .is_ok()
        {
            ctx.fill();
        }
    }

    ctx.set_line_width(LINK_LINE_WIDTH);
    sim.for_each_link(|a, b, opacity| {
        ctx.begin_path();
        ctx.move_to(a[0], a[1]);
        ctx.line_to(b[0], b[1]);
        ctx.set_stroke_style_str(&format!(
            "rgba(99, 102, 241, {:.3})",
            opacity * LINK_ALPHA_SCALE
        ));
        ctx.stroke();
    });
}
