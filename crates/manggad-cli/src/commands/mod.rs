pub mod dispatch;
pub mod facets;
pub mod get;
pub mod list;
pub mod recommend;
pub mod search;
pub mod seed;
pub mod shared;
pub mod submit;
