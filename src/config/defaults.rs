use crate::api::DEFAULT_BASE_URL;

pub fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub const EXAMPLE_CONFIG: &str = r#"# folio-admin configuration
api:
  # ${VAR} references are expanded from the environment
  base_url: "http://localhost:5000/api/v1"
  # Per-request timeout in seconds (0 disables)
  timeout: 30

# session:
#   file: "~/.cache/folio-admin/session.json"

log:
  # Debug logging to stderr; RUST_LOG takes precedence
  verbose: false
"#;
