pub mod activity;
pub mod badge;
pub mod number;
pub mod offer_list;
pub mod project_list;
pub mod summary;
pub mod text;
pub mod time;
