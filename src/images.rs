//! Image categories, random image naming and asset lookup.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Categories cycled through by successive taps.
pub const TAP_CYCLE: [&str; 3] = ["car", "motorcycle", "train"];
pub const SWIPE_UP_CATEGORY: &str = "airplane";
pub const SWIPE_DOWN_CATEGORY: &str = "ship";
pub const LONG_PRESS_CATEGORY: &str = "bicycle";
/// Every category ships `<basename>00.jpg` through `<basename>09.jpg`.
pub const IMAGES_PER_CATEGORY: u32 = 10;
pub const IMAGE_EXTENSION: &str = "jpg";

pub const ALL_CATEGORIES: [&str; 6] = [
    TAP_CYCLE[0],
    TAP_CYCLE[1],
    TAP_CYCLE[2],
    SWIPE_UP_CATEGORY,
    SWIPE_DOWN_CATEGORY,
    LONG_PRESS_CATEGORY,
];

pub fn tap_category(counter: u64) -> &'static str {
    TAP_CYCLE[(counter % TAP_CYCLE.len() as u64) as usize]
}

/// Source of uniform random indices.
pub trait RandomSource {
    /// Uniform value in `0..bound`. `bound` is never zero.
    fn next_below(&mut self, bound: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

/// Browser `Math.random()`. Only usable on wasm32 targets.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        let r = (js_sys::Math::random() * bound as f64).floor() as u32;
        r.min(bound.saturating_sub(1))
    }
}

/// Seeded generator for reproducible sessions and tests.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.rng.gen_range(0..bound)
    }
}

/// `<basename>0<digit>.jpg` with a uniformly chosen digit. Repeats are allowed.
pub fn image_filename<R: RandomSource + ?Sized>(basename: &str, rng: &mut R) -> String {
    let idx = rng.next_below(IMAGES_PER_CATEGORY);
    format!("{}0{}.{}", basename, idx, IMAGE_EXTENSION)
}

/// Maps image filenames to URLs for the bundled assets.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetCatalog {
    base_path: String,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::new("assets/")
    }
}

impl AssetCatalog {
    pub fn new(base_path: impl Into<String>) -> Self {
        let mut base_path = base_path.into();
        if !base_path.is_empty() && !base_path.ends_with('/') {
            base_path.push('/');
        }
        Self { base_path }
    }

    pub fn contains(&self, filename: &str) -> bool {
        let Some(stem) = filename.strip_suffix(IMAGE_EXTENSION).and_then(|s| s.strip_suffix('.'))
        else {
            return false;
        };
        ALL_CATEGORIES.iter().any(|category| {
            stem.strip_prefix(category)
                .and_then(|digits| digits.strip_prefix('0'))
                .and_then(|d| d.parse::<u32>().ok().filter(|_| d.len() == 1))
                .is_some_and(|idx| idx < IMAGES_PER_CATEGORY)
        })
    }

    /// URL for a known filename; unknown names resolve to nothing.
    pub fn resolve(&self, filename: &str) -> Option<String> {
        self.contains(filename)
            .then(|| format!("{}{}", self.base_path, filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of indices.
    struct Scripted(Vec<u32>, usize);

    impl RandomSource for Scripted {
        fn next_below(&mut self, bound: u32) -> u32 {
            let v = self.0[self.1 % self.0.len()] % bound;
            self.1 += 1;
            v
        }
    }

    #[test]
    fn tap_category_cycles_with_period_three() {
        for n in 0..30u64 {
            assert_eq!(tap_category(n), TAP_CYCLE[(n % 3) as usize]);
            assert_eq!(tap_category(n), tap_category(n + 3));
        }
        let seq: Vec<_> = (1..=5).map(tap_category).collect();
        assert_eq!(seq, ["motorcycle", "train", "car", "motorcycle", "train"]);
    }

    #[test]
    fn filename_is_basename_zero_digit_extension() {
        let mut rng = Scripted(vec![7], 0);
        assert_eq!(image_filename("ship", &mut rng), "ship07.jpg");
    }

    #[test]
    fn seeded_random_is_deterministic() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        let xs: Vec<_> = (0..20).map(|_| image_filename("car", &mut a)).collect();
        let ys: Vec<_> = (0..20).map(|_| image_filename("car", &mut b)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn seeded_random_covers_all_ten_indices() {
        let mut rng = SeededRandom::new(7);
        let mut seen = [0u32; IMAGES_PER_CATEGORY as usize];
        for _ in 0..2000 {
            let i = rng.next_below(IMAGES_PER_CATEGORY);
            assert!(i < IMAGES_PER_CATEGORY);
            seen[i as usize] += 1;
        }
        // Roughly uniform: every bucket near 200.
        for count in seen {
            assert!(count > 120 && count < 280, "bucket count {count}");
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeededRandom::new(0);
        let mut b = SeededRandom::new(1);
        let xs: Vec<_> = (0..32).map(|_| a.next_below(1000)).collect();
        let ys: Vec<_> = (0..32).map(|_| b.next_below(1000)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn catalog_resolves_known_names_only() {
        let catalog = AssetCatalog::new("img");
        assert_eq!(catalog.resolve("car03.jpg").as_deref(), Some("img/car03.jpg"));
        assert_eq!(
            AssetCatalog::default().resolve("bicycle09.jpg").as_deref(),
            Some("assets/bicycle09.jpg")
        );
        assert_eq!(catalog.resolve("car10.jpg"), None);
        assert_eq!(catalog.resolve("car3.jpg"), None);
        assert_eq!(catalog.resolve("truck01.jpg"), None);
        assert_eq!(catalog.resolve("car01.png"), None);
        assert_eq!(catalog.resolve(""), None);
    }

    #[test]
    fn every_generated_name_resolves() {
        let catalog = AssetCatalog::default();
        let mut rng = SeededRandom::new(3);
        for category in ALL_CATEGORIES {
            for _ in 0..20 {
                let name = image_filename(category, &mut rng);
                assert!(catalog.resolve(&name).is_some(), "{name}");
            }
        }
    }
}
