//! The six in-demand job sectors shown as tabs in the opportunities section.

/// Outbound job-board searches for one sector.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SectorLinks {
    /// Seek search filtered to Invercargill and this sector
    pub seek: &'static str,
    /// Trade Me Jobs search filtered to Invercargill and this sector
    pub trade_me: &'static str,
}

/// One entry of the sector catalog.
///
/// Entries are static and keyed by `id`; the tab row and the detail panel
/// both read from the same record.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SectorEntry {
    /// Catalog key (e.g. "trades")
    pub id: &'static str,
    /// Short tab label
    pub name: &'static str,
    /// Emoji shown on the tab
    pub icon: &'static str,
    /// Heading of the detail panel
    pub title: &'static str,
    pub description: &'static str,
    /// Skills employers are short of, in display order
    pub shortages: &'static [&'static str],
    /// In-demand roles, in display order
    pub roles: &'static [&'static str],
    pub links: SectorLinks,
}

/// Sector shown before the user clicks any tab.
pub const DEFAULT_SECTOR: &str = "trades";

pub static SECTORS: [SectorEntry; 6] = [
    SectorEntry {
        id: "trades",
        name: "Trades & Services",
        icon: "🛠️",
        title: "Skilled Trades & Services",
        description: "This is the biggest sector for jobs in Invercargill. Your hands-on skills are in extremely high demand.",
        shortages: &[
            "Electricians",
            "Plumbers",
            "Diesel Mechanics (especially with computer skills)",
            "Heavy Machinery Operators",
        ],
        roles: &[
            "Electrician",
            "Plumber",
            "Diesel Motor Mechanic",
            "Automotive Electrician",
            "Drainlayer",
            "Gasfitter",
        ],
        links: SectorLinks {
            seek: "https://www.seek.co.nz/jobs/in-southland-invercargill/in-trades-services",
            trade_me: "https://www.trademe.co.nz/a/jobs/trades-services/southland/invercargill",
        },
    },
    SectorEntry {
        id: "healthcare",
        name: "Healthcare",
        icon: "❤️",
        title: "Healthcare & Social Services",
        description: "A critical sector with consistent demand due to a growing population. Many roles are on the immigration Green List.",
        shortages: &[
            "Experienced Nurses to mentor graduates",
            "General Practitioners (GPs)",
        ],
        roles: &[
            "Registered Nurse (Aged Care, Mental Health)",
            "Support Worker",
            "General Practitioner",
            "Midwife",
            "Clinical Psychologist",
        ],
        links: SectorLinks {
            seek: "https://www.seek.co.nz/jobs/in-southland-invercargill/in-healthcare-medical",
            trade_me: "https://www.trademe.co.nz/a/jobs/healthcare/southland/invercargill",
        },
    },
    SectorEntry {
        id: "construction",
        name: "Construction",
        icon: "🏗️",
        title: "Engineering & Construction",
        description: "With ongoing development, engineers and construction professionals are vital to the city's growth.",
        shortages: &[
            "Engineers of all types",
            "Qualified staff with 3-5 years experience",
        ],
        roles: &[
            "Construction Project Manager",
            "Quantity Surveyor",
            "Civil Engineer",
            "Labourer",
            "Surveyor",
        ],
        links: SectorLinks {
            seek: "https://www.seek.co.nz/jobs/in-southland-invercargill/in-construction",
            trade_me: "https://www.trademe.co.nz/a/jobs/construction-roading/southland/invercargill",
        },
    },
    SectorEntry {
        id: "agri",
        name: "Agriculture",
        icon: "🌱",
        title: "Agriculture",
        description: "The backbone of the Southland economy. Opportunities range from on-farm roles to support industries.",
        shortages: &[
            "Diesel mechanics for computerized equipment",
            "Dairy Farm Managers",
        ],
        roles: &[
            "Dairy Farm Manager",
            "Heavy Machinery Operator",
            "Farm Hand",
            "Livestock Agent",
        ],
        links: SectorLinks {
            seek: "https://www.seek.co.nz/jobs/in-southland-invercargill/in-farming-animals-conservation",
            trade_me: "https://www.trademe.co.nz/a/jobs/agriculture-fishing-forestry/southland/invercargill",
        },
    },
    SectorEntry {
        id: "mfg",
        name: "Manufacturing & Logistics",
        icon: "📦",
        title: "Manufacturing, Transport & Logistics",
        description: "Invercargill is a hub for processing and transport, with major local employers like Alliance and HWR Group.",
        shortages: &["Staff for shift work and weekends", "Entry-level employees"],
        roles: &[
            "Production Operator",
            "Warehouse Person",
            "Class 5 Truck Driver",
            "Qualified Heavy Fabricator",
            "Butcher/Boner",
        ],
        links: SectorLinks {
            seek: "https://www.seek.co.nz/jobs/in-southland-invercargill/in-manufacturing-transport-logistics",
            trade_me: "https://www.trademe.co.nz/a/jobs/manufacturing-operations/southland/invercargill",
        },
    },
    SectorEntry {
        id: "retail",
        name: "Retail",
        icon: "🛒",
        title: "Retail & Hospitality",
        description: "Customer-facing roles are always available, offering a great way to connect with the community.",
        shortages: &[
            "Hospitality staff (chefs, baristas)",
            "Staff willing to work weekends/evenings",
        ],
        roles: &[
            "Retail Sales Assistant",
            "Store Manager",
            "Deli Assistant",
            "Hospitality Team Member",
            "Receptionist",
        ],
        links: SectorLinks {
            seek: "https://www.seek.co.nz/jobs/in-southland-invercargill/in-retail-consumer-products",
            trade_me: "https://www.trademe.co.nz/a/jobs/retail/southland/invercargill",
        },
    },
];

/// Look up a sector by its catalog key.
pub fn find(id: &str) -> Option<&'static SectorEntry> {
    SECTORS.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_order() {
        let ids: Vec<&str> = SECTORS.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec!["trades", "healthcare", "construction", "agri", "mfg", "retail"]
        );
        assert_eq!(SECTORS[0].id, DEFAULT_SECTOR);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = SECTORS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SECTORS.len());
    }

    #[test]
    fn test_find() {
        let agri = find("agri").unwrap();
        assert_eq!(agri.title, "Agriculture");
        assert_eq!(agri.roles.len(), 4);
        assert!(find("fishing").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_entries_are_complete() {
        for sector in SECTORS.iter() {
            assert!(!sector.title.is_empty(), "{} has no title", sector.id);
            assert!(!sector.description.is_empty());
            assert!(!sector.roles.is_empty(), "{} has no roles", sector.id);
            assert!(!sector.shortages.is_empty(), "{} has no shortages", sector.id);
            assert!(sector.links.seek.starts_with("https://www.seek.co.nz/"));
            assert!(sector.links.trade_me.starts_with("https://www.trademe.co.nz/"));
        }
    }
}
