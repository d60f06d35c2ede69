use log::Level;

/// Options handed to the viewport observer of every section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserveOptions {
    /// Fraction of the section that must be on screen before it reveals.
    pub threshold: f64,
    /// Detach the observer after the first qualifying entry.
    pub trigger_once: bool,
    /// Reveal anyway after this many milliseconds without an observation.
    pub fallback_ms: Option<u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub observe: ObserveOptions,
    pub background_image: &'static str,
    pub log_level: Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            observe: ObserveOptions {
                threshold: 0.1,
                trigger_once: true,
                fallback_ms: None,
            },
            background_image: "backart2.jpg",
            log_level: default_log_level(),
        }
    }
}

#[cfg(debug_assertions)]
fn default_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
fn default_log_level() -> Level {
    Level::Info
}

pub fn site_config() -> SiteConfig {
    SiteConfig::default()
}

pub fn observe_options() -> ObserveOptions {
    site_config().observe
}

/// Images are served by the host's static file server under `/images`.
pub fn asset_url(name: &str) -> String {
    if name.starts_with("http://") || name.starts_with("https://") || name.starts_with('/') {
        return name.to_string();
    }
    format!("/images/{}", name)
}

pub fn background_url() -> String {
    asset_url(site_config().background_image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_names_resolve_under_images() {
        assert_eq!(asset_url("crm.png"), "/images/crm.png");
        assert_eq!(background_url(), "/images/backart2.jpg");
    }

    #[test]
    fn absolute_paths_are_left_alone() {
        assert_eq!(asset_url("/images/don.png"), "/images/don.png");
        assert_eq!(asset_url("https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
    }

    #[test]
    fn sections_trigger_once_at_ten_percent_without_fallback() {
        let options = observe_options();
        assert_eq!(options.threshold, 0.1);
        assert!(options.trigger_once);
        assert_eq!(options.fallback_ms, None);
    }
}
