pub mod normalize;
pub mod punch;
pub mod validate;
pub mod window;
