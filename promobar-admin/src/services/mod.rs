//! Settings flows and external integrations for promobar-admin
//!
//! - `metafield_client`: platform Admin GraphQL store client
//! - `settings_loader`: one store read per page view
//! - `settings_submitter`: sequential per-key writes with one outcome

pub mod metafield_client;
pub mod settings_loader;
pub mod settings_submitter;
