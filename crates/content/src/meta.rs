//! Page metadata: document title, description, and canonical URL, plus the
//! outbound phone contact.

use serde::{Deserialize, Serialize};

/// Page-level metadata, serializable for the `meta` CLI subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMeta {
    /// Brand name shown in the bar
    pub brand: String,
    /// Trade line shown beside the brand
    pub tagline: String,
    /// Document title
    pub title: String,
    /// Meta description
    pub description: String,
    /// Canonical URL
    pub canonical: String,
    /// Contact phone in dialable form (the `tel:` affordance)
    pub phone: String,
    /// Contact phone as displayed in the bar and menu
    pub phone_display: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            brand: "Benedetto Di Lorenzo".into(),
            tagline: "Tappezzeria Nautica".into(),
            title: "Benedetto Di Lorenzo | Tappezzeria Nautica Napoli - Interni & Esterni Yacht"
                .into(),
            description: "Tappezzeria nautica artigianale a Napoli dal 1985. Benedetto Di Lorenzo \
                          realizza interni ed esterni per yacht e barche: cuscineria, tendalini, \
                          coperture su misura. Preventivo gratuito!"
                .into(),
            canonical: "https://benedettodilorenzo.it/".into(),
            phone: "+393482418145".into(),
            phone_display: "348 241 8145".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_serializes_with_stable_keys() {
        let json = serde_json::to_value(SiteMeta::default()).expect("serialize SiteMeta");
        assert!(json.get("title").is_some());
        assert!(json.get("canonical").is_some());
        assert_eq!(json["phone"], "+393482418145");
    }
}
