// requestAnimationFrame loop shared by both widgets. The pending frame is
// held as a gloo AnimationFrame handle; dropping the handle cancels the
// callback outright, so once stop() returns no further tick can run, not
// even one that was already queued.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};

struct LoopState {
    pending: Option<AnimationFrame>,
    running: bool,
}

pub struct FrameLoop {
    state: Rc<RefCell<LoopState>>,
}

impl FrameLoop {
    pub fn new() -> FrameLoop {
        FrameLoop {
            state: Rc::new(RefCell::new(LoopState {
                pending: None,
                running: false,
            })),
        }
    }

    // Begin invoking `tick` once per display refresh, passing the rAF
    // timestamp. Starting an already-running loop is a no-op.
    pub fn start<F: FnMut(f64) + 'static>(&self, tick: F) {
        {
            let mut state = self.state.borrow_mut();
            if state.running {
                return;
            }
            state.running = true;
        }
        let tick: Rc<RefCell<dyn FnMut(f64)>> = Rc::new(RefCell::new(tick));
        schedule(self.state.clone(), tick);
    }

    // Safe to call repeatedly, before start, or never
    pub fn stop(&self) {
        let mut state = self.state.borrow_mut();
        state.running = false;
        state.pending = None;
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(state: Rc<RefCell<LoopState>>, tick: Rc<RefCell<dyn FnMut(f64)>>) {
    let next_state = state.clone();
    let frame = request_animation_frame(move |timestamp| {
        (tick.borrow_mut())(timestamp);
        if next_state.borrow().running {
            schedule(next_state.clone(), tick.clone());
        }
    });
    state.borrow_mut().pending = Some(frame);
}
