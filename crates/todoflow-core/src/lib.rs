pub mod actions;
pub mod model;
pub mod reducer;
pub mod selectors;
pub mod state;

pub use actions::*;
pub use model::*;
pub use reducer::*;
pub use selectors::*;
pub use state::*;
