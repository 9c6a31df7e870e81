pub mod editor;
pub mod state;
pub mod update;

pub use state::App;
pub use update::run;
