//! The five page sections and the navigation list that mirrors them.
//!
//! Anchors are the stable identifiers the navigation scrolls to; they must
//! stay unique and in top-to-bottom page order.

use navetta_types::NavLink;

use crate::meta::SiteMeta;

/// A named region of the single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Stable identifier the navigation targets (e.g. "about")
    pub anchor: String,
    /// Heading shown at the top of the section
    pub title: String,
    /// Lead paragraphs, wrapped to the viewport width at render time
    pub lead: Vec<String>,
    /// Bullet entries (services, portfolio items, contact lines)
    pub bullets: Vec<String>,
}

impl Section {
    fn new(anchor: &str, title: &str, lead: &[&str], bullets: &[&str]) -> Self {
        Self {
            anchor: anchor.into(),
            title: title.into(),
            lead: lead.iter().map(|s| s.to_string()).collect(),
            bullets: bullets.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Everything the TUI needs from the content side, bundled.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub meta: SiteMeta,
    pub links: Vec<NavLink>,
    pub sections: Vec<Section>,
    pub footer: Vec<String>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            meta: SiteMeta::default(),
            links: nav_links(),
            sections: sections(),
            footer: footer_lines(),
        }
    }
}

/// The configured navigation list, in exact page order.
pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "home"),
        NavLink::new("Chi Siamo", "about"),
        NavLink::new("Servizi", "services"),
        NavLink::new("Lavori", "works"),
        NavLink::new("Contatti", "contact"),
    ]
}

/// The page sections, top to bottom. Every navigation anchor resolves to
/// exactly one of these.
pub fn sections() -> Vec<Section> {
    vec![
        Section::new(
            "home",
            "Benedetto Di Lorenzo · Tappezzeria Nautica",
            &[
                "Interni ed esterni per yacht e barche, realizzati a mano a Napoli dal 1985.",
                "Cuscineria, tendalini e coperture su misura: ogni lavoro nasce in laboratorio, \
                 prende le misure a bordo e torna in banchina finito a regola d'arte.",
                "Preventivo gratuito, senza impegno.",
            ],
            &[],
        ),
        Section::new(
            "about",
            "Chi Siamo",
            &[
                "La tappezzeria nasce nel 1985 come laboratorio artigiano al porto di Napoli. \
                 Da allora Benedetto Di Lorenzo veste imbarcazioni di ogni metratura, dal gozzo \
                 al flybridge, curando personalmente taglio, cucitura e posa.",
                "Lavoriamo solo tessuti tecnici certificati per l'ambiente marino: resistenti a \
                 salsedine, raggi UV e muffe, garantiti negli anni.",
            ],
            &[],
        ),
        Section::new(
            "services",
            "Servizi",
            &["Ogni intervento è su misura, dalla singola seduta al refit completo."],
            &[
                "Cuscineria interna ed esterna",
                "Tendalini, bimini e capote",
                "Coperture invernali su misura",
                "Rivestimenti di pannelli e cielini",
                "Selleria e piani di prendisole",
                "Riparazioni e sostituzione cerniere",
            ],
        ),
        Section::new(
            "works",
            "Lavori",
            &["Una selezione dei refit usciti dal laboratorio."],
            &[
                "Flybridge 42' — cuscineria esterna completa in ecopelle nautica",
                "Gozzo sorrentino — tendalino invernale e capote avvolgibile",
                "Open 28' — prendisole di poppa e rivestimento consolle",
                "Vela 36' — cielini cabina e materassi su misura",
            ],
        ),
        Section::new(
            "contact",
            "Contatti",
            &["Il laboratorio riceve su appuntamento, il sopralluogo a bordo è gratuito."],
            &[
                "Telefono: 348 241 8145",
                "Porto di Napoli — Molo San Vincenzo",
                "Lun–Sab, 8:30–18:00",
            ],
        ),
    ]
}

/// Footer copy appended after the last section. Not a navigation anchor.
pub fn footer_lines() -> Vec<String> {
    vec![
        "Benedetto Di Lorenzo — Tappezzeria Nautica".into(),
        "Napoli · dal 1985".into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_follow_page_order() {
        let links = nav_links();
        let pairs: Vec<(&str, &str)> = links
            .iter()
            .map(|l| (l.label.as_str(), l.anchor.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Home", "home"),
                ("Chi Siamo", "about"),
                ("Servizi", "services"),
                ("Lavori", "works"),
                ("Contatti", "contact"),
            ]
        );
    }

    #[test]
    fn every_link_resolves_to_one_section() {
        let sections = sections();
        for link in nav_links() {
            let hits = sections.iter().filter(|s| s.anchor == link.anchor).count();
            assert_eq!(hits, 1, "anchor {} must match exactly one section", link.anchor);
        }
    }

    #[test]
    fn sections_follow_link_order() {
        let anchors: Vec<String> = sections().into_iter().map(|s| s.anchor).collect();
        let link_anchors: Vec<String> = nav_links().into_iter().map(|l| l.anchor).collect();
        assert_eq!(anchors, link_anchors);
    }
}
