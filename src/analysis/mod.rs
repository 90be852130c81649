// Revenue-loss estimation
pub mod attribution;

pub use attribution::compute;
