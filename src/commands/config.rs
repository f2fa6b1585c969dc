use crate::config::{self, Config};

/// Resolved configuration and where it is read from
pub fn render(cfg: &Config, path: Option<&std::path::Path>) -> String {
    let (path_str, exists) = match path {
        Some(path) => (path.display().to_string(), path.exists()),
        None => ("Unable to determine config path".to_string(), false),
    };

    let mut output = String::new();
    output.push_str(&format!(
        "Configuration File: {} (Exists: {})\n\n",
        path_str,
        if exists { "yes" } else { "no" }
    ));
    output.push_str("Current Configuration:\n");
    output.push_str("=====================\n");
    output.push_str(&format!("log_level: {}\n", cfg.log_level));
    output.push_str(&format!("log_file: {}\n", cfg.log_file));
    output.push_str(&format!("locale: {}\n", cfg.locale.code()));
    output.push_str(&format!("home_country: {}\n", cfg.home_country));
    output.push_str(&format!("own_countries: {}\n", cfg.own_countries.join(", ")));
    output.push_str(&format!("api_url: {}\n", cfg.api_url));
    output.push('\n');
    output.push_str("[display]\n");
    output.push_str(&format!("use_unicode: {}\n", cfg.display.use_unicode));
    output.push_str(&format!("selection_fg: {:?}\n", cfg.display.selection_fg));
    output.push_str(&format!(
        "unfocused_selection_fg: {:?} (auto: 50% darker)\n",
        cfg.display.unfocused_selection_fg()
    ));
    output.push_str(&format!("error_fg: {:?}\n", cfg.display.error_fg));
    output
}

pub fn run() {
    let cfg = config::read();
    let path = config::get_config_path();
    print!("{}", render(&cfg, path.as_deref()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults() {
        let output = render(&Config::default(), None);
        assert!(output.starts_with("Configuration File: Unable to determine config path (Exists: no)\n"));
        assert!(output.contains("locale: hu\n"));
        assert!(output.contains("home_country: Hungary\n"));
        assert!(output.contains("own_countries: Hungary\n"));
        assert!(output.contains("use_unicode: true\n"));
    }
}
