//! Stable display colors for person names.

const SEED: u64 = 131;
const SEED2: u64 = 137;
const MAX_SAFE: u64 = 9_007_199_254_740_991 / SEED2;

const SATURATION: [f64; 3] = [0.35, 0.5, 0.65];
const LIGHTNESS: [f64; 3] = [0.35, 0.5, 0.65];

/// Maps a name onto a `#rrggbb` color. The same name always yields the same color.
pub fn color_hex(name: &str) -> String {
    let (r, g, b) = color_rgb(name);
    format!("#{r:02x}{g:02x}{b:02x}")
}

pub fn color_rgb(name: &str) -> (u8, u8, u8) {
    let mut hash = bkdr_hash(name);

    let hue = (hash % 359) as f64 / 360.0;
    hash /= 360;
    let saturation = SATURATION[(hash % 3) as usize];
    hash /= 3;
    let lightness = LIGHTNESS[(hash % 3) as usize];

    hsl_to_rgb(hue, saturation, lightness)
}

fn bkdr_hash(name: &str) -> u64 {
    name.chars().chain(['x']).fold(0, |hash, ch| {
        let hash = if hash > MAX_SAFE { hash / SEED2 } else { hash };
        hash * SEED + u64::from(ch)
    })
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    let channel = |offset: f64| {
        let mut t = hue + offset;
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }

        let value = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };

        (value * 255.0).round() as u8
    };

    (channel(1.0 / 3.0), channel(0.0), channel(-1.0 / 3.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_deterministic() {
        assert_eq!(color_hex("alice"), color_hex("alice"));
    }

    #[test]
    fn differs_between_names() {
        assert_ne!(color_hex("alice"), color_hex("bob"));
    }

    #[test]
    fn formats_as_hex() {
        let hex = color_hex("ee");
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
        assert!(hex[1..].chars().all(|ch| ch.is_ascii_hexdigit()));
    }

    #[test]
    fn grey_without_saturation() {
        assert_eq!(hsl_to_rgb(0.3, 0.0, 0.5), (128, 128, 128));
    }

    #[test]
    fn primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
        assert_eq!(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), (0, 255, 0));
    }

    #[test]
    fn long_names_do_not_overflow() {
        let name = "a".repeat(500);
        color_hex(&name);
    }
}
