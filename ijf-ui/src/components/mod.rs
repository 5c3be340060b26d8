//! Reusable Dioxus RSX components for the job finder page.

mod chart_container;
mod chart_header;
mod error_display;
mod external_link;
mod nav_bar;
mod resource_card;
mod section_header;
mod sector_detail;
mod sector_tabs;
mod site_footer;
mod tip_list;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use external_link::ExternalLink;
pub use nav_bar::NavBar;
pub use resource_card::ResourceCard;
pub use section_header::SectionHeader;
pub use sector_detail::SectorDetail;
pub use sector_tabs::SectorTabs;
pub use site_footer::SiteFooter;
pub use tip_list::TipList;
