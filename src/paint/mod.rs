pub mod background;
pub mod composite;
pub mod glow;
pub mod tint;
