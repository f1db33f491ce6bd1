pub mod activity;
pub mod company;
pub mod health;
pub mod offer;
pub mod project;

pub use activity::*;
pub use company::*;
pub use health::*;
pub use offer::*;
pub use project::*;
