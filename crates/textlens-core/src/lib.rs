pub mod crop;
pub mod state;
