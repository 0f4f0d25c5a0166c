pub mod author;
pub mod blog_post;
pub mod blog_post_tag;
pub mod core_store;
pub mod media;
pub mod permission;
pub mod role;
pub mod tag;
