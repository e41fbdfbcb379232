//! Request types

mod method;
mod options;

pub use method::HttpMethod;
pub use options::{
    AUTHORIZATION, CONTENT_TYPE, JSON_CONTENT_TYPE, RequestDescriptor, RequestOptions,
};
