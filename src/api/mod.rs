//! API endpoint façade
//!
//! Typed methods for the remote endpoints, grouped by area:
//!
//! - `items` - listings (one-shot and streamed), details, votes
//! - `tags` - adding, voting and removing tags
//! - `comments` - posting, voting, editing and removing comments
//! - `profile` - public profiles and following
//! - `user` - login, logout and account management
//! - `contact` - contact form

mod client;
mod comments;
mod contact;
mod items;
mod profile;
mod tags;
mod types;
mod user;

pub use client::Pr0grammClient;
pub use comments::CommentsService;
pub use contact::ContactService;
pub use items::{ItemsFetcher, ItemsService};
pub use profile::ProfileService;
pub use tags::TagsService;
pub use types::{
    Captcha, CaptchaAnswer, Comment, Item, ItemInfo, ItemsQuery, ItemsResponse, LoginResponse,
    Tag,
};
pub use user::UserService;
