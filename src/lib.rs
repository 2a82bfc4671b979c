pub mod collision;
pub mod compute;
pub mod display;
pub mod entities;
pub mod pool;
pub mod spawn;
pub mod update;
