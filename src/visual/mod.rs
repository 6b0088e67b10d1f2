pub mod effects;
pub mod interactions;
pub mod nodes;
pub mod plugin;
pub mod roads;
pub mod scene;
pub mod ui;
pub mod verdict;
