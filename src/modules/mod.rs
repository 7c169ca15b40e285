pub mod auth;
pub mod category;
pub mod comment;
pub mod delivery;
pub mod like;
pub mod post;
pub mod restaurant;
pub mod subscription;
pub mod user;

mod router;
pub use router::get_router;
