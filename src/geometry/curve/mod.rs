mod circle;
mod line;

pub use circle::Circle3D;
pub use line::Line3D;
