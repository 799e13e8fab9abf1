pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod feedback;
pub mod geometry;
pub mod input;
pub mod scorer;
pub mod session;
pub mod shapes;
pub mod storage;
pub mod stroke;
