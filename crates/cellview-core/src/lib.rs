pub mod bubble;
pub mod color_mapper;
pub mod config;
pub mod consts;
pub mod discovery;
pub mod error;
pub mod export;
pub mod layout;
pub mod linked;
pub mod palette;
pub mod panel;
pub mod raster;
pub mod renderer;
pub mod segmentation;
pub mod table;
pub mod viewport;
pub mod well;
