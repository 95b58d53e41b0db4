//! Look of the viewer: floor, light, camera placement and the cycling
//! background color.
//!
//! Colors given as hex are sRGB; the GPU surface expects linear values, so
//! convert with [`srgb_to_linear`] before upload.

use glam::Vec3;

/// Center height of the floor slab.
pub const FLOOR_CENTER_Y: f32 = -10.0;
/// Floor slab thickness.
pub const FLOOR_THICKNESS: f32 = 1.0;
/// Floor side length (square, centered on the origin).
pub const FLOOR_SIZE: f32 = 500.0;
pub const FLOOR_COLOR: u32 = 0xDDDDDD;

pub const LIGHT_COLOR: u32 = 0x839FF9;
pub const LIGHT_POSITION: Vec3 = Vec3::new(0.0, 10.0, 5.0);
pub const LIGHT_TARGET: Vec3 = Vec3::new(-5.0, -2.0, -5.0);

pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 20.0, 50.0);
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Height of the visible top face of the floor.
pub fn floor_top() -> f32 {
    FLOOR_CENTER_Y + FLOOR_THICKNESS * 0.5
}

/// Unit vector pointing from the lit surface towards the light.
pub fn light_direction() -> Vec3 {
    (LIGHT_POSITION - LIGHT_TARGET).normalize()
}

/// `0xRRGGBB` to sRGB components in 0-1.
pub fn hex_color(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}

/// sRGB to linear, per channel.
pub fn srgb_to_linear(c: Vec3) -> Vec3 {
    fn channel(v: f32) -> f32 {
        if v <= 0.04045 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    }
    Vec3::new(channel(c.x), channel(c.y), channel(c.z))
}

/// Background color (sRGB, 0-1) after `elapsed` seconds.
///
/// Each channel is `128 + 128 sin(2t + phase)` with phases 0, 2 and 4,
/// floored to an integer and clamped to 255.
pub fn background_color(elapsed: f32) -> Vec3 {
    let t = elapsed * 2.0;
    let channel = |phase: f32| (128.0 + 128.0 * (t + phase).sin()).floor().clamp(0.0, 255.0) / 255.0;
    Vec3::new(channel(0.0), channel(2.0), channel(4.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        let c = hex_color(0x839FF9);
        assert!((c.x - 131.0 / 255.0).abs() < 1e-6);
        assert!((c.y - 159.0 / 255.0).abs() < 1e-6);
        assert!((c.z - 249.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_background_at_zero() {
        let c = background_color(0.0);
        // r = 128, g = floor(128 + 128 sin 2) = 244, b = floor(128 + 128 sin 4) = 31
        assert!((c.x - 128.0 / 255.0).abs() < 1e-6);
        assert!((c.y - 244.0 / 255.0).abs() < 1e-6);
        assert!((c.z - 31.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_background_stays_in_range() {
        for i in 0..1000 {
            let c = background_color(i as f32 * 0.037);
            assert!(c.min_element() >= 0.0);
            assert!(c.max_element() <= 1.0);
        }
    }

    #[test]
    fn test_srgb_to_linear_endpoints() {
        assert_eq!(srgb_to_linear(Vec3::ZERO), Vec3::ZERO);
        let one = srgb_to_linear(Vec3::ONE);
        assert!((one - Vec3::ONE).abs().max_element() < 1e-5);
    }

    #[test]
    fn test_floor_top_and_light() {
        assert_eq!(floor_top(), -9.5);
        assert!(light_direction().is_normalized());
    }
}
