mod report;
mod runner;

pub use report::{render_results, render_stored, render_tables};
pub use runner::{build_session, run};
