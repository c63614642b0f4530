pub mod spinning_wheel;

pub use spinning_wheel::SpinningWheel;
