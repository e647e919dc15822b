pub mod blog;
pub mod category;
pub mod tag;
pub mod user;

pub use blog::Blog;
pub use category::Category;
pub use tag::Tag;
pub use user::User;
