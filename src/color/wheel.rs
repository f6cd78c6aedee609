use crate::color::Rgb;

/// Cyclic hue ramp over the 0-255 domain.
///
/// Partitions the input into three 85-wide bands producing a
/// red -> green -> blue -> red transition at full saturation.
/// `wheel(0)` and `wheel(255)` land on the same color.
pub const fn wheel(pos: u8) -> Rgb {
    let pos = 255 - pos;
    if pos < 85 {
        return Rgb {
            r: 255 - pos * 3,
            g: 0,
            b: pos * 3,
        };
    }
    if pos < 170 {
        let pos = pos - 85;
        return Rgb {
            r: 0,
            g: pos * 3,
            b: 255 - pos * 3,
        };
    }
    let pos = pos - 170;
    Rgb {
        r: pos * 3,
        g: 255 - pos * 3,
        b: 0,
    }
}
