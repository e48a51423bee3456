pub mod highlight;
pub mod output;

pub use output::{
    display_api_error, display_error, display_identity, display_json, display_session,
    display_success,
};
