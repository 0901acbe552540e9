// src/internal/color/contrast.rs

use super::palette::Rgb;

const CONTRAST_THRESHOLD: f64 = 4.5;
const LUMINANCE_OFFSET: f64 = 0.05;

/// sRGB channel (0-255) to linear light.
fn linearize(channel: u8) -> f64 {
    let value = f64::from(channel) / 255.0;
    if value < 0.03928 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Weighted relative luminance in `[0, 1]`.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// True when white text reads better than black on `rgb`.
///
/// The ratio compares the background against a fixed 0.05 denominator rather
/// than against white, which differs from the WCAG contrast ratio. Existing
/// channel colors depend on this exact threshold.
pub fn is_dark(rgb: Rgb) -> bool {
    (relative_luminance(rgb) + LUMINANCE_OFFSET) / LUMINANCE_OFFSET < CONTRAST_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_is_not_dark() {
        assert!(!is_dark(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_black_is_dark() {
        assert!(is_dark(Rgb::new(0, 0, 0)));
    }

    #[test]
    fn test_luminance_bounds() {
        assert_eq!(relative_luminance(Rgb::new(0, 0, 0)), 0.0);
        assert!((relative_luminance(Rgb::new(255, 255, 255)) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_mid_grey_is_light() {
        // luminance ~0.216, above the 0.175 cut-off
        assert!(!is_dark(Rgb::new(128, 128, 128)));
        assert!(is_dark(Rgb::new(10, 10, 10)));
    }

    #[test]
    fn test_green_weighs_more_than_blue() {
        let green = relative_luminance(Rgb::new(0, 255, 0));
        let blue = relative_luminance(Rgb::new(0, 0, 255));
        assert!(green > blue);
        assert!(!is_dark(Rgb::new(0, 255, 0)));
        assert!(is_dark(Rgb::new(0, 0, 255)));
    }
}
