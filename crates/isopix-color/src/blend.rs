use hashbrown::HashMap;

use crate::color::Color;

/// Lightens, darkens or blends colors by `ratio`.
///
/// With `target` set, moves `base` toward `target` by `|ratio|`. Without it,
/// a negative ratio darkens toward black and a positive ratio lightens toward
/// white. Channels are rounded half-up and clamped to `0..=255`.
pub fn shade_blend(ratio: f32, base: Color, target: Option<Color>) -> Color {
    let n = ratio.abs();
    let t = target.unwrap_or(if ratio < 0.0 {
        Color::BLACK
    } else {
        Color::WHITE
    });
    let [r0, g0, b0] = base.channels();
    let [r1, g1, b1] = t.channels();
    Color::rgb(
        mix_channel(r0, r1, n),
        mix_channel(g0, g1, n),
        mix_channel(b0, b1, n),
    )
}

#[inline]
fn mix_channel(from: u8, to: u8, n: f32) -> u8 {
    let delta = (to as f32 - from as f32) * n;
    // Round half toward +inf, so -2.5 becomes -2.
    let v = (delta + 0.5).floor() + from as f32;
    v.clamp(0.0, 255.0) as u8
}

type ShadeKey = (u32, Color, Option<Color>);

/// Memoizes [`shade_blend`] results keyed by `(ratio, base, target)`.
#[derive(Default, Debug, Clone)]
pub struct ShadeBlender {
    cache: HashMap<ShadeKey, Color>,
}

impl ShadeBlender {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub fn blend(&mut self, ratio: f32, base: Color, target: Option<Color>) -> Color {
        *self
            .cache
            .entry((ratio.to_bits(), base, target))
            .or_insert_with(|| shade_blend(ratio, base, target))
    }

    /// Number of memoized entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ratio_is_identity() {
        let c = Color::rgb(10, 20, 30);
        assert_eq!(shade_blend(0.0, c, None), c);
        assert_eq!(shade_blend(-0.0, c, None), c);
    }

    #[test]
    fn negative_ratio_darkens_toward_black() {
        let c = Color::rgb(200, 100, 50);
        assert_eq!(shade_blend(-0.5, c, None), Color::rgb(100, 50, 25));
        assert_eq!(shade_blend(-1.0, c, None), Color::BLACK);
    }

    #[test]
    fn positive_ratio_lightens_toward_white() {
        let c = Color::rgb(55, 155, 255);
        assert_eq!(shade_blend(0.5, c, None), Color::rgb(155, 205, 255));
        assert_eq!(shade_blend(1.0, c, None), Color::WHITE);
    }

    #[test]
    fn explicit_target_blends_between_colors() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(100, 200, 50);
        assert_eq!(shade_blend(0.5, a, Some(b)), Color::rgb(50, 100, 25));
        // Sign is ignored once a target is given.
        assert_eq!(shade_blend(-0.5, a, Some(b)), Color::rgb(50, 100, 25));
    }

    #[test]
    fn rounds_half_up() {
        // (0 - 5) * 0.5 = -2.5 rounds to -2
        assert_eq!(shade_blend(-0.5, Color::rgb(5, 5, 5), None), Color::rgb(3, 3, 3));
        // (255 - 250) * 0.5 = 2.5 rounds to 3
        assert_eq!(
            shade_blend(0.5, Color::rgb(250, 250, 250), None),
            Color::rgb(253, 253, 253)
        );
    }

    #[test]
    fn out_of_range_ratio_is_clamped() {
        let c = Color::rgb(100, 100, 100);
        assert_eq!(shade_blend(-3.0, c, None), Color::BLACK);
        assert_eq!(shade_blend(3.0, c, None), Color::WHITE);
    }

    #[test]
    fn blender_memoizes_by_key() {
        let mut bl = ShadeBlender::new();
        let c = Color::rgb(40, 80, 120);
        let first = bl.blend(-0.2, c, None);
        let again = bl.blend(-0.2, c, None);
        assert_eq!(first, again);
        assert_eq!(bl.len(), 1);
        bl.blend(-0.3, c, None);
        bl.blend(-0.2, c, Some(Color::WHITE));
        assert_eq!(bl.len(), 3);
        bl.clear();
        assert!(bl.is_empty());
    }
}
