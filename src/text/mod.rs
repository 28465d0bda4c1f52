pub mod bitmap;
pub mod font;
pub mod raster;
