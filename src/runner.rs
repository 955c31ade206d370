//! Frame-loop orchestration
//!
//! [`Simulator`] owns the world and the active preset and exposes the
//! operational surface: lifecycle control, per-frame stepping, the numeric
//! parameter surface, and a serializable snapshot. It never blocks or
//! schedules anything itself; an outer loop calls [`Simulator::frame`] once
//! per animation frame.

use serde::Serialize;

use crate::consts::*;
use crate::render::Canvas;
use crate::sim::{BallFate, Preset, World};
use crate::time::{Clock, FpsCounter};

/// Point-in-time view of the running simulation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot {
    pub ball_count: usize,
    pub simulation_time_s: f64,
    pub fps: u32,
}

/// The simulation driver
#[derive(Debug)]
pub struct Simulator<C: Clock> {
    clock: C,
    world: World,
    preset: Preset,
    running: bool,
    started_at_ms: Option<f64>,
    paused_at_ms: Option<f64>,
    paused_total_ms: f64,
    last_frame_ms: f64,
    simulation_time_s: f64,
    fps: FpsCounter,
}

impl<C: Clock> Simulator<C> {
    /// Entropy-seeded simulator
    pub fn new(clock: C, width: f32, height: f32) -> Self {
        let seed = rand::random::<u64>();
        log::info!("rng seed: {seed}");
        Self::with_seed(clock, width, height, seed)
    }

    /// Fixed seed for reproducible runs
    pub fn with_seed(clock: C, width: f32, height: f32, seed: u64) -> Self {
        let now = clock.now_ms();
        Self {
            clock,
            world: World::new(width, height, seed),
            preset: Preset::ring_split(),
            running: false,
            started_at_ms: None,
            paused_at_ms: None,
            paused_total_ms: 0.0,
            last_frame_ms: now,
            simulation_time_s: 0.0,
            fps: FpsCounter::new(now),
        }
    }

    /// Install a preset and rebuild the world around it
    pub fn initialize(&mut self, preset: Preset) {
        self.preset = preset;
        self.reinit();
        log::info!("initialized preset: {}", self.preset.name());
    }

    fn reinit(&mut self) {
        let now = self.clock.now_ms();
        self.world.pool.clear();
        self.world.now_ms = now;
        self.running = false;
        self.started_at_ms = None;
        self.paused_at_ms = None;
        self.paused_total_ms = 0.0;
        self.simulation_time_s = 0.0;
        self.fps.reset(now);
        self.preset.init(&mut self.world);
    }

    /// Begin or resume stepping. Resuming after a pause keeps the
    /// accumulated simulation time.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        let now = self.clock.now_ms();
        if self.started_at_ms.is_none() {
            self.started_at_ms = Some(now);
        }
        if let Some(paused_at) = self.paused_at_ms.take() {
            self.paused_total_ms += now - paused_at;
        }
        self.last_frame_ms = now;
        self.fps.rearm(now);
        self.running = true;
        log::info!("started");
    }

    /// Suspend stepping at the frame boundary
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.paused_at_ms = Some(self.clock.now_ms());
        log::info!("paused");
    }

    /// Stop and re-run the preset's init. Tuned settings survive.
    pub fn reset(&mut self) {
        self.pause();
        self.reinit();
        log::info!("reset");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One animation frame: timing, physics tick, then drawing.
    /// A no-op while paused.
    pub fn frame(&mut self, canvas: &mut impl Canvas) {
        if !self.running {
            return;
        }
        let now = self.clock.now_ms();
        self.world.viewport.width = canvas.width();
        self.world.viewport.height = canvas.height();
        self.world.now_ms = now;

        let dt = ((now - self.last_frame_ms) / 1000.0) as f32 * self.world.params.time_scale;
        self.last_frame_ms = now;
        self.fps.frame(now);
        if let Some(started_at) = self.started_at_ms {
            self.simulation_time_s = (now - started_at - self.paused_total_ms) / 1000.0;
        }

        self.tick(dt);
        self.render(canvas);
    }

    /// One physics step; `dt` is in seconds.
    ///
    /// Stage order is fixed: integrate the pool, advance the preset's
    /// boundary, collect per-ball verdicts and cull marks, then apply
    /// removals followed by split spawns.
    pub fn tick(&mut self, dt: f32) {
        let params = self.world.params;
        let viewport = self.world.viewport;

        self.world
            .pool
            .integrate(dt, params.gravity, params.friction, viewport.width);
        self.preset.update(viewport, params.time_scale);

        let mut removed: Vec<u32> = Vec::new();
        let mut splits = 0usize;
        for ball in self.world.pool.iter_mut() {
            match self.preset.handle_collisions(ball, params.restitution) {
                BallFate::Split => {
                    removed.push(ball.id);
                    splits += 1;
                }
                BallFate::Keep => {
                    if !crate::is_on_screen(ball.pos, viewport.width, viewport.height) {
                        removed.push(ball.id);
                    }
                }
            }
        }
        self.world.pool.remove_marked(&removed);

        if splits > 0 {
            if let Some((center, inner_radius)) = self.preset.spawn_zone(params.ball_radius) {
                for _ in 0..splits * SPLIT_CHILD_COUNT {
                    let pos = self.world.random_spawn_pos(center, inner_radius);
                    let vel = self.world.random_split_velocity();
                    self.world.spawn_at(pos, vel);
                }
            }
        }
    }

    fn render(&self, canvas: &mut impl Canvas) {
        canvas.clear();
        self.preset.render(canvas);
        for ball in self.world.pool.balls() {
            canvas.fill_circle(ball.pos, ball.radius, ball.color);
        }
    }

    /// Apply a named numeric parameter: the global physics keys first, then
    /// the preset's own settings. Unknown names are rejected.
    pub fn set_parameter(&mut self, name: &str, value: f32) -> bool {
        let params = &mut self.world.params;
        match name {
            "gravity" => params.gravity = value,
            "friction" => params.friction = value,
            "time_scale" => params.time_scale = value,
            "restitution" => params.restitution = value,
            "ball_radius" => params.ball_radius = value,
            "max_balls" => {
                self.world.pool.set_capacity(value.max(0.0) as usize);
            }
            _ => {
                if self.preset.set_setting(name, value) {
                    return true;
                }
                log::warn!("unknown parameter: {name}");
                return false;
            }
        }
        log::debug!("parameter {name} = {value}");
        true
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball_count: self.world.pool.len(),
            simulation_time_s: self.simulation_time_s,
            fps: self.fps.fps(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
