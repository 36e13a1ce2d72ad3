//! FIFO streams of pipes and background clouds
//!
//! Both keep the oldest entity at the front. Entities enter at the back as
//! they spawn on the right and leave from the front as they scroll off the
//! left, so a `VecDeque` gives O(1) at both ends.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::motion::MovingEntity;
use super::pipe::Pipe;
use crate::consts::*;

/// Bounded FIFO of pipes with a spacing-driven spawn policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeStream {
    pipes: VecDeque<Pipe>,
    /// Spawn density: a new pipe enters once the newest one has travelled
    /// `SCREEN_SIZE / density` from the right edge
    density: u32,
    max_len: usize,
}

impl Default for PipeStream {
    fn default() -> Self {
        Self::new(DEFAULT_PIPE_DENSITY)
    }
}

impl PipeStream {
    /// Create an empty stream. A density of zero is clamped to one.
    pub fn new(density: u32) -> Self {
        let density = if density == 0 {
            log::warn!("Pipe density 0 is invalid, using 1");
            1
        } else {
            density
        };
        Self {
            pipes: VecDeque::with_capacity(MAX_PIPES + 1),
            density,
            max_len: MAX_PIPES,
        }
    }

    pub fn density(&self) -> u32 {
        self.density
    }

    /// Advance every pipe, retire the oldest if due, then spawn if due
    ///
    /// Returns how many pipes crossed the scoring line this step.
    pub fn step<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) -> u32 {
        let mut passed = 0;
        for pipe in self.pipes.iter_mut() {
            if pipe.step(dt) {
                passed += 1;
            }
        }

        let retire = self
            .pipes
            .front()
            .is_some_and(|p| p.x < PIPE_RETIRE_X || self.pipes.len() > self.max_len);
        if retire {
            self.pop();
        }

        let spawn = match self.pipes.back() {
            None => true,
            Some(last) => last.x < SCREEN_SIZE - self.spacing(),
        };
        if spawn {
            self.push(Pipe::new(rng.random::<f32>() * PIPE_CLEAR_RANGE));
        }

        // A spawn can push past the cap at high densities; drop the oldest now
        while self.pipes.len() > self.max_len {
            self.pop();
        }

        passed
    }

    /// Horizontal distance between consecutive spawns
    #[inline]
    pub fn spacing(&self) -> f32 {
        SCREEN_SIZE / self.density as f32
    }

    pub fn push(&mut self, pipe: Pipe) {
        log::debug!("Pipe spawned, clear position {:.1}", pipe.clear_pos);
        self.pipes.push_back(pipe);
    }

    pub fn pop(&mut self) -> Option<Pipe> {
        let pipe = self.pipes.pop_front();
        if let Some(p) = &pipe {
            log::debug!("Pipe retired at x {:.1}", p.x);
        }
        pipe
    }

    /// Oldest pipe (the one the duck meets next or is passing)
    pub fn first(&self) -> Option<&Pipe> {
        self.pipes.front()
    }

    pub fn first_mut(&mut self) -> Option<&mut Pipe> {
        self.pipes.front_mut()
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    pub fn clear(&mut self) {
        self.pipes.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pipe> {
        self.pipes.iter()
    }
}

/// Opaque image identity handed through to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteId(pub u32);

impl SpriteId {
    pub const DUCK: SpriteId = SpriteId(0);
    pub const PIPE: SpriteId = SpriteId(1);
    pub const CLOUD: SpriteId = SpriteId(2);
}

/// A purely decorative background element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cloud {
    pub body: MovingEntity,
    pub sprite: SpriteId,
}

impl Cloud {
    /// A cloud entering past the right edge at height `y`
    pub fn spawn(y: f32) -> Self {
        Self {
            body: MovingEntity::new(Vec2::new(CLOUD_SPAWN_X, y), Vec2::new(CLOUD_SPEED, 0.0)),
            sprite: SpriteId::CLOUD,
        }
    }
}

/// Unbounded FIFO of clouds; spawning and retiring are driven by the session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloudStream {
    clouds: VecDeque<Cloud>,
}

impl CloudStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&mut self, dt: f32) {
        for cloud in self.clouds.iter_mut() {
            cloud.body.step(dt);
        }
    }

    pub fn push(&mut self, cloud: Cloud) {
        self.clouds.push_back(cloud);
    }

    pub fn pop(&mut self) -> Option<Cloud> {
        self.clouds.pop_front()
    }

    pub fn first(&self) -> Option<&Cloud> {
        self.clouds.front()
    }

    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }

    pub fn clear(&mut self) {
        self.clouds.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cloud> {
        self.clouds.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_first_step_spawns_one_pipe() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut stream = PipeStream::default();
        stream.step(1.0, &mut rng);
        assert_eq!(stream.len(), 1);
        let pipe = stream.first().unwrap();
        assert_eq!(pipe.x, SCREEN_SIZE);
        assert!((0.0..PIPE_CLEAR_RANGE).contains(&pipe.clear_pos));
    }

    #[test]
    fn test_spawn_follows_spacing() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut stream = PipeStream::new(2);
        stream.step(1.0, &mut rng);

        // Newest pipe must drop below 256 before the next spawn: 128 more frames
        for _ in 0..128 {
            stream.step(1.0, &mut rng);
            assert_eq!(stream.len(), 1);
        }
        stream.step(1.0, &mut rng);
        assert_eq!(stream.len(), 2);
    }

    #[test]
    fn test_offscreen_pipe_is_retired() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut stream = PipeStream::new(1);
        let mut pipe = Pipe::new(100.0);
        pipe.x = PIPE_RETIRE_X + 1.0;
        stream.push(pipe);

        // -127 -> -129: retired, then the empty stream spawns a fresh pipe
        stream.step(1.0, &mut rng);
        assert_eq!(stream.len(), 1);
        assert_eq!(stream.first().unwrap().x, SCREEN_SIZE);
    }

    #[test]
    fn test_passes_are_counted() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut stream = PipeStream::default();
        let mut pipe = Pipe::new(100.0);
        pipe.x = 12.0;
        stream.push(pipe);

        // 12 -> 10 is not yet past the line, 10 -> 8 is
        assert_eq!(stream.step(1.0, &mut rng), 0);
        assert_eq!(stream.step(1.0, &mut rng), 1);
        assert_eq!(stream.step(1.0, &mut rng), 0);
    }

    #[test]
    fn test_full_stream_drops_oldest() {
        let mut rng = Pcg32::seed_from_u64(6);
        let mut stream = PipeStream::new(2);
        for (x, clear) in [(100.0, 10.0), (200.0, 20.0), (250.0, 30.0)] {
            let mut pipe = Pipe::new(clear);
            pipe.x = x;
            stream.push(pipe);
        }

        // Newest ends at 248, under the 256 spawn line, so a fourth pipe
        // enters and the oldest leaves while still on screen
        stream.step(1.0, &mut rng);
        let pipes: Vec<(f32, f32)> = stream.iter().map(|p| (p.x, p.clear_pos)).collect();
        assert_eq!(pipes.len(), MAX_PIPES);
        assert_eq!(pipes[0], (198.0, 20.0));
        assert_eq!(pipes[1], (248.0, 30.0));
        assert_eq!(pipes[2].0, SCREEN_SIZE);
    }

    #[test]
    fn test_zero_density_is_clamped() {
        assert_eq!(PipeStream::new(0).density(), 1);
    }

    #[test]
    fn test_clear_empties_stream() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut stream = PipeStream::default();
        stream.step(1.0, &mut rng);
        stream.clear();
        assert!(stream.is_empty());
        assert!(stream.first().is_none());
    }

    #[test]
    fn test_clouds_move_in_fifo_order() {
        let mut clouds = CloudStream::new();
        clouds.push(Cloud::spawn(10.0));
        clouds.push(Cloud::spawn(20.0));
        clouds.step(2.0);

        assert_eq!(clouds.len(), 2);
        let first = clouds.pop().unwrap();
        assert_eq!(first.body.pos, Vec2::new(CLOUD_SPAWN_X - 3.0, 10.0));
        assert_eq!(first.sprite, SpriteId::CLOUD);
        assert_eq!(clouds.first().unwrap().body.pos.y, 20.0);
    }

    proptest! {
        #[test]
        fn prop_stream_never_exceeds_cap(
            seed in any::<u64>(),
            density in 0u32..40,
            dts in proptest::collection::vec(0.0f32..20.0, 1..400),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut stream = PipeStream::new(density);
            for dt in dts {
                stream.step(dt, &mut rng);
                prop_assert!(stream.len() <= MAX_PIPES);
                prop_assert!(!stream.is_empty());
            }
        }
    }
}
