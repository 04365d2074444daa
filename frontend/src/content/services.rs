/// A service offering with its own detail page under `/services/<slug>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub slug: &'static str,
    /// Font Awesome class.
    pub icon: &'static str,
}

impl Service {
    pub fn title_key(&self) -> String {
        format!("service.{}.title", self.slug)
    }

    pub fn summary_key(&self) -> String {
        format!("service.{}.summary", self.slug)
    }

    pub fn description_key(&self) -> String {
        format!("service.{}.description", self.slug)
    }

    pub fn feature_keys(&self) -> [String; 3] {
        [1, 2, 3].map(|n| format!("service.{}.feature{}", self.slug, n))
    }
}

pub const SERVICES: [Service; 6] = [
    Service { slug: "ocean", icon: "fas fa-ship" },
    Service { slug: "air", icon: "fas fa-plane" },
    Service { slug: "road", icon: "fas fa-truck" },
    Service { slug: "warehousing", icon: "fas fa-warehouse" },
    Service { slug: "customs", icon: "fas fa-file-contract" },
    Service { slug: "project", icon: "fas fa-hard-hat" },
];

pub fn find_service(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::translations::has_key;
    use crate::i18n::SUPPORTED_LANGUAGES;

    #[test]
    fn every_service_is_translated() {
        for service in &SERVICES {
            let mut keys = vec![service.title_key(), service.summary_key(), service.description_key()];
            keys.extend(service.feature_keys());
            for key in keys {
                for lang in SUPPORTED_LANGUAGES {
                    assert!(has_key(*lang, &key), "{key} missing for {lang}");
                }
            }
        }
    }

    #[test]
    fn find_service_by_slug() {
        assert_eq!(find_service("air").map(|s| s.icon), Some("fas fa-plane"));
        assert!(find_service("rail").is_none());
    }
}
