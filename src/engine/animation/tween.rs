//! Timed pose interpolation, advanced once per frame.

use glam::{Quat, Vec3};
use log::debug;

use crate::engine::scene::{ObjectId, Scene};

#[derive(Debug, Clone)]
pub struct Tween {
    pub object: ObjectId,
    from_position: Vec3,
    from_rotation: Quat,
    pub to_position: Vec3,
    pub to_rotation: Quat,
    /// Halfway rotation; pins the turn direction of half-turns.
    pub via_rotation: Option<Quat>,
    pub duration: f32,
    delay: f32,
    elapsed: f32,
    started: bool,
}

impl Tween {
    /// Progress in [0, 1]; 0 while still waiting out the delay.
    pub fn progress(&self) -> f32 {
        if !self.started || self.duration <= 0.0 {
            return if self.started { 1.0 } else { 0.0 };
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    fn is_finished(&self) -> bool {
        self.started && self.elapsed >= self.duration
    }

    fn rotation_at(&self, t: f32) -> Quat {
        match self.via_rotation {
            Some(via) if t < 0.5 => self.from_rotation.slerp(via, t * 2.0),
            Some(via) => via.slerp(self.to_rotation, t * 2.0 - 1.0),
            None => self.from_rotation.slerp(self.to_rotation, t),
        }
    }
}

#[derive(Debug, Default)]
pub struct Tweens {
    active: Vec<Tween>,
}

impl Tweens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Animates `object` from wherever it is when the delay runs out to the given local pose.
    /// A tween already running on the same object is dropped.
    pub fn start(
        &mut self,
        object: ObjectId,
        to_position: Vec3,
        to_rotation: Quat,
        duration: f32,
        delay: f32,
    ) {
        self.push(object, to_position, None, to_rotation, duration, delay);
    }

    /// Like [`Tweens::start`], but the rotation passes through `via_rotation` at the halfway
    /// point. A half-turn has no shortest path, so flips use this to turn a fixed way.
    pub fn start_via(
        &mut self,
        object: ObjectId,
        to_position: Vec3,
        via_rotation: Quat,
        to_rotation: Quat,
        duration: f32,
        delay: f32,
    ) {
        self.push(object, to_position, Some(via_rotation), to_rotation, duration, delay);
    }

    fn push(
        &mut self,
        object: ObjectId,
        to_position: Vec3,
        via_rotation: Option<Quat>,
        to_rotation: Quat,
        duration: f32,
        delay: f32,
    ) {
        if self.cancel(object) {
            debug!("Replacing running tween on {:?}", object);
        }
        self.active.push(Tween {
            object,
            from_position: Vec3::ZERO,
            from_rotation: Quat::IDENTITY,
            to_position,
            to_rotation: to_rotation.normalize(),
            via_rotation: via_rotation.map(Quat::normalize),
            duration: duration.max(0.0),
            delay: delay.max(0.0),
            elapsed: 0.0,
            started: false,
        });
    }

    pub fn cancel(&mut self, object: ObjectId) -> bool {
        let before = self.active.len();
        self.active.retain(|t| t.object != object);
        before != self.active.len()
    }

    pub fn update(&mut self, dt: f32, scene: &mut Scene) {
        for tween in &mut self.active {
            let Some(obj) = scene.get_mut(tween.object) else {
                // Object gone; let the tween expire.
                tween.started = true;
                tween.elapsed = tween.duration;
                continue;
            };

            let mut step = dt;
            if !tween.started {
                if tween.delay > step {
                    tween.delay -= step;
                    continue;
                }
                step -= tween.delay;
                tween.delay = 0.0;
                tween.started = true;
                tween.from_position = obj.transform.position;
                tween.from_rotation = obj.transform.rotation;
            }

            tween.elapsed += step;
            let t = tween.progress();
            obj.transform.position = tween.from_position.lerp(tween.to_position, t);
            obj.transform.rotation = tween.rotation_at(t);
            if tween.is_finished() {
                obj.transform.position = tween.to_position;
                obj.transform.rotation = tween.to_rotation;
            }
        }
        self.active.retain(|t| !t.is_finished());
    }

    pub fn is_animating(&self, object: ObjectId) -> bool {
        self.active.iter().any(|t| t.object == object)
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
