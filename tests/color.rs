mod tests {
    use strip_scenes::color::{OFF, Rgb};
    use strip_scenes::wheel;

    #[test]
    fn test_wheel_is_cyclic() {
        assert_eq!(wheel(0), wheel(255));
    }

    #[test]
    fn test_wheel_band_anchors() {
        assert_eq!(wheel(0), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(wheel(85), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(wheel(170), Rgb { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_wheel_blends_two_channels() {
        // Full saturation: one channel is always dark, and the output is
        // never fully off.
        for pos in 0..=255u8 {
            let color = wheel(pos);
            assert!(color.r == 0 || color.g == 0 || color.b == 0);
            assert_ne!(color, OFF);
        }
    }
}
