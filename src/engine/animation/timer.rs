//! Delayed calls, ticked by the frame loop.

#[derive(Debug)]
struct Pending<A> {
    remaining: f32,
    action: A,
}

#[derive(Debug)]
pub struct Timers<A> {
    pending: Vec<Pending<A>>,
}

impl<A> Default for Timers<A> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<A> Timers<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay: f32, action: A) {
        self.pending.push(Pending {
            remaining: delay.max(0.0),
            action,
        });
    }

    /// Advances every timer by `dt` and returns the actions that came due, in scheduling order.
    pub fn update(&mut self, dt: f32) -> Vec<A> {
        let mut fired = Vec::new();
        let mut waiting = Vec::with_capacity(self.pending.len());
        for mut p in self.pending.drain(..) {
            p.remaining -= dt;
            if p.remaining <= 0.0 {
                fired.push(p.action);
            } else {
                waiting.push(p);
            }
        }
        self.pending = waiting;
        fired
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
