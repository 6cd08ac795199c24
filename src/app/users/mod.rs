//! 用户（customer 表）的增删改查

pub mod handler;
pub mod model;
pub mod routes;
pub mod store;

pub use model::{NewUser, User, UserUpdate};
pub use store::UserStore;
