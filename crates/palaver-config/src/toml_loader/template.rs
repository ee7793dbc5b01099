//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Palaver Configuration
# Only override what you want to change -- missing fields use defaults.

[backend]
# The PALAVER_API_URL environment variable takes precedence over this value.
# base_url = "http://localhost:8000"
# probe_on_startup = true

[chat]
# title = "Claude Search Assistant"
# prompt = "> "
# show_timestamps = true

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
}
