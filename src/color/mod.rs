mod wheel;

pub use wheel::wheel;
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All channels off.
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };
