//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> String {
    r##"# ekip client configuration
# Only override what you want to change -- missing fields use defaults.

[server]
# base_url = "http://localhost:8000/api"
# connect_timeout_secs = 10    # 1-120
# request_timeout_secs = 120   # 1-600

[search]
# department_filter = "HR"     # restrict searches to one department

[logging]
# level = "info"               # trace, debug, info, warn, error
"##
    .to_string()
}
