// Animated gradient text fill. Drives a GradientCycle every frame and
// writes the sampled gradient to the host element's background-image; the
// host's own CSS is expected to clip the background to the glyphs.

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::frame_loop::FrameLoop;
use crate::gradient::{GradientCycle, DEFAULT_CYCLE_MS};

#[wasm_bindgen]
pub struct GradientCycler {
    frame_loop: FrameLoop,
}

#[wasm_bindgen]
impl GradientCycler {
    // Attaches to `element` and starts cycling. With no performance clock
    // available the widget stays inert and the element keeps whatever
    // static fill the host gave it.
    #[wasm_bindgen(constructor)]
    pub fn new(element: &HtmlElement, cycle_ms: Option<f64>) -> GradientCycler {
        let widget = GradientCycler {
            frame_loop: FrameLoop::new(),
        };
        widget.attach(element, cycle_ms);
        widget
    }

    pub fn stop(&mut self) {
        self.frame_loop.stop();
    }
}

impl GradientCycler {
    fn attach(&self, element: &HtmlElement, cycle_ms: Option<f64>) {
        let now = match web_sys::window().and_then(|w| w.performance()) {
            Some(performance) => performance.now(),
            None => return,
        };

        let mut rng = rand::thread_rng();
        let mut cycle = GradientCycle::new(now, cycle_ms.unwrap_or(DEFAULT_CYCLE_MS), &mut rng);
        let style = element.style();

        // Paint once up front so a static gradient shows even if the frame
        // loop never fires
        let _ = style.set_property("background-image", &cycle.frame(now, &mut rng).to_css());

        self.frame_loop.start(move |timestamp| {
            let css = cycle.frame(timestamp, &mut rng).to_css();
            let _ = style.set_property("background-image", &css);
        });
    }
}

impl Drop for GradientCycler {
    fn drop(&mut self) {
        self.stop();
    }
}
