use crate::settings::SnowSettings;
use glam::Vec3;

/// Deterministic random stream for flake placement.
///
/// Splitmix64: given the same seed, the same flakes fall in the same places on
/// every platform.
#[derive(Debug, Clone, PartialEq)]
struct FlakeRng {
    state: u64,
}

impl FlakeRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn next_unit(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    fn between(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_unit()
    }
}

/// A pool of falling snowflakes.
#[derive(Debug, Clone, PartialEq)]
pub struct Snowfall {
    settings: SnowSettings,
    rng: FlakeRng,
    flakes: Vec<Vec3>,
    active: bool,
}

impl Snowfall {
    pub fn new(settings: &SnowSettings, seed: u64) -> Self {
        Self {
            settings: settings.clone(),
            rng: FlakeRng::new(seed),
            flakes: Vec::new(),
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn flakes(&self) -> &[Vec3] {
        &self.flakes
    }

    /// Start or stop the snow. Starting fills the pool anywhere in the spawn
    /// box; stopping clears it.
    pub fn set_active(&mut self, active: bool) {
        if active == self.active {
            return;
        }
        self.active = active;
        if active {
            let (min, max) = (self.settings.spawn_min, self.settings.spawn_max);
            self.flakes = (0..self.settings.flake_count)
                .map(|_| {
                    Vec3::new(
                        self.rng.between(min.x, max.x),
                        self.rng.between(min.y, max.y),
                        self.rng.between(min.z, max.z),
                    )
                })
                .collect();
        } else {
            self.flakes.clear();
        }
        tracing::debug!(active, flakes = self.flakes.len(), "snowfall toggled");
    }

    /// Let every flake fall; flakes that pass the floor respawn at the top of
    /// the box at a fresh spot.
    pub fn advance(&mut self, dt: f32) {
        let drop = self.settings.fall_speed * dt;
        let (min, max) = (self.settings.spawn_min, self.settings.spawn_max);
        let floor = self.settings.floor_y;
        for flake in &mut self.flakes {
            flake.y -= drop;
            if flake.y < floor {
                *flake = Vec3::new(
                    self.rng.between(min.x, max.x),
                    max.y,
                    self.rng.between(min.z, max.z),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_box(p: Vec3, s: &SnowSettings) -> bool {
        p.cmpge(s.spawn_min).all() && p.cmple(s.spawn_max).all()
    }

    #[test]
    fn starts_inactive_and_empty() {
        let snow = Snowfall::new(&SnowSettings::default(), 1);
        assert!(!snow.is_active());
        assert!(snow.flakes().is_empty());
    }

    #[test]
    fn activation_fills_the_spawn_box() {
        let settings = SnowSettings::default();
        let mut snow = Snowfall::new(&settings, 9);
        snow.set_active(true);
        assert_eq!(snow.flakes().len(), settings.flake_count);
        assert!(snow.flakes().iter().all(|f| in_box(*f, &settings)));
        snow.set_active(false);
        assert!(snow.flakes().is_empty());
    }

    #[test]
    fn same_seed_same_flakes() {
        let settings = SnowSettings::default();
        let mut a = Snowfall::new(&settings, 1234);
        let mut b = Snowfall::new(&settings, 1234);
        a.set_active(true);
        b.set_active(true);
        for _ in 0..50 {
            a.advance(0.5);
            b.advance(0.5);
        }
        assert_eq!(a.flakes(), b.flakes());
    }

    #[test]
    fn flakes_fall_and_respawn_above_floor() {
        let settings = SnowSettings::default();
        let mut snow = Snowfall::new(&settings, 5);
        snow.set_active(true);
        let before: Vec<f32> = snow.flakes().iter().map(|f| f.y).collect();
        snow.advance(0.1);
        for (old, new) in before.iter().zip(snow.flakes()) {
            assert!((old - new.y - 1.5).abs() < 1e-3);
        }
        for _ in 0..1000 {
            snow.advance(0.1);
            assert!(snow.flakes().iter().all(|f| f.y >= settings.floor_y));
        }
    }

    #[test]
    fn unit_samples_stay_below_one() {
        let mut rng = FlakeRng::new(0);
        for _ in 0..10_000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
