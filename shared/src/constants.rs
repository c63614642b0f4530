// Wheel geometry (SVG user units)
pub const WHEEL_RADIUS: f64 = 200.0;
pub const WHEEL_CENTER: (f64, f64) = (WHEEL_RADIUS, WHEEL_RADIUS);
pub const LABEL_RADIUS_RATIO: f64 = 0.7;

// The segment group is drawn turned by this much so wheel angle 0 sits
// under the pointer at the top.
pub const POINTER_FRAME_OFFSET_DEG: f64 = -90.0;

// Segment colours are hsl(start_angle, SATURATION%, LIGHTNESS%)
pub const SEGMENT_SATURATION: u32 = 70;
pub const SEGMENT_LIGHTNESS: u32 = 60;

// Landing position inside the winning segment
pub const LANDING_BUFFER_DEG: f64 = 2.5;
pub const MAX_BUFFER_FRACTION: f64 = 0.25;

// Spin animation
pub const MIN_FULL_SPINS: u32 = 10;
pub const SPIN_DURATION_MS: u32 = 5000;
