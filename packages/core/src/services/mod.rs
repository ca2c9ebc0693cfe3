//! Business Services
//!
//! - `resolver` - pure date resolution: raw value lookup, parsing under
//!   format/timezone/delay rules, three-way result
//! - `publish_service` - classification and orchestration over the host graph
//!
//! Services coordinate between the host abstraction and the date logic;
//! all graph mutations and diagnostics flow through the traits in [`crate::graph`].

pub mod publish_service;
pub mod resolver;

pub use publish_service::{
    PublishService, NO_PUBLISH_DATE_PROVIDED, PUBLISHED_FIELD, PUBLISH_GROUP_FIELD,
};
pub use resolver::{resolve_publish_date, Resolution, INVALID_DATE_MESSAGE};
