//! Server and search section validation.

use crate::schema::EkipConfig;

use super::helpers::validate_range;

pub(crate) fn validate_server(errors: &mut Vec<String>, config: &EkipConfig) {
    let url = config.server.base_url.trim();
    if url.is_empty() {
        errors.push("server.base_url is empty".into());
    } else if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(format!(
            "server.base_url = {url:?} must start with http:// or https://"
        ));
    }

    validate_range(
        errors,
        "server.connect_timeout_secs",
        config.server.connect_timeout_secs,
        1,
        120,
    );
    validate_range(
        errors,
        "server.request_timeout_secs",
        config.server.request_timeout_secs,
        1,
        600,
    );
}

pub(crate) fn validate_search(errors: &mut Vec<String>, config: &EkipConfig) {
    if let Some(ref dept) = config.search.department_filter {
        if dept.trim().is_empty() {
            errors.push("search.department_filter is blank (omit it instead)".into());
        }
    }
}
