//! Browser random source

use garfield_vibes::content::RandomSource;

/// Draws from `Math.random`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use garfield_vibes::content::{pick_index, MEMES};
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_browser_random_in_unit_range() {
        let mut rng = BrowserRandom;
        for _ in 0..100 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[wasm_bindgen_test]
    fn test_browser_random_picks_valid_index() {
        let index = pick_index(&mut BrowserRandom, MEMES.len()).unwrap();
        assert!(index < MEMES.len());
    }
}
