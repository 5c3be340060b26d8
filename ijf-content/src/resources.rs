//! Static text for the welcome, toolkit, workplace, action-plan and footer
//! sections.

/// An outbound link with a one-line description.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ResourceLink {
    pub name: &'static str,
    pub url: &'static str,
    pub blurb: &'static str,
}

/// One toolkit card.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ResourceGroup {
    pub icon: &'static str,
    pub title: &'static str,
    /// Paragraph shown between the title and the links, if any
    pub intro: Option<&'static str>,
    pub links: &'static [ResourceLink],
}

/// A bold heading followed by a sentence, with a leading emoji.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Tip {
    pub icon: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Highlight {
    pub icon: &'static str,
    pub label: &'static str,
}

/// Footer link to a support service.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Contact {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SITE_TITLE: &str = "Invercargill Job Finder";

pub const WELCOME_INTRO: &str = "You've made a great choice moving here. As a hardworking person looking to support your family, you'll find promising opportunities. The city's job market is set for strong growth, and your dedication is exactly what local employers are looking for. This guide is designed to help you every step of the way.";

pub static WELCOME_HIGHLIGHTS: [Highlight; 3] = [
    Highlight { icon: "📈", label: "Positive Job Growth" },
    Highlight { icon: "🤝", label: "Strong Community" },
    Highlight { icon: "🏡", label: "Great Work-Life Balance" },
];

pub const OPPORTUNITIES_INTRO: &str = "Invercargill's economy is diverse. While farming is a cornerstone, sectors like construction, real estate, and professional services have many businesses. This creates opportunities in a wide range of roles. Let's explore the key areas of demand.";

pub static TOOLKIT: [ResourceGroup; 3] = [
    ResourceGroup {
        icon: "💻",
        title: "Online Job Boards",
        intro: None,
        links: &[
            ResourceLink {
                name: "Seek.co.nz",
                url: "https://www.seek.co.nz/jobs/in-southland/in-invercargill",
                blurb: "The leading job site in NZ. Essential for any search.",
            },
            ResourceLink {
                name: "Trade Me Jobs",
                url: "https://www.trademe.co.nz/a/jobs/southland/invercargill",
                blurb: "Very popular, especially for trades and operations roles.",
            },
            ResourceLink {
                name: "Careers.govt.nz",
                url: "https://www.careers.govt.nz/",
                blurb: "Government site with great tools for CV building and career planning.",
            },
        ],
    },
    ResourceGroup {
        icon: "🤝",
        title: "Local Recruitment Agencies",
        intro: Some("These agencies have direct connections with local employers. Contacting them can give you a significant advantage."),
        links: &[
            ResourceLink {
                name: "OneStaff Invercargill",
                url: "https://www.onestaff.co.nz/branches/invercargill",
                blurb: "Specializes in agriculture, manufacturing, and construction.",
            },
            ResourceLink {
                name: "Advanced Personnel",
                url: "https://www.advancedpersonnel.co.nz/immigration",
                blurb: "Focuses on construction and industrial roles; great for newcomers.",
            },
            ResourceLink {
                name: "Enterprise Recruitment",
                url: "https://www.enterprise.co.nz/contact-us",
                blurb: "Offers general recruitment services in the area.",
            },
        ],
    },
    ResourceGroup {
        icon: "🌐",
        title: "Networking & Community",
        intro: Some("Many jobs are found through connections. Getting involved in the community is key."),
        links: &[
            ResourceLink {
                name: "Southland Business Chamber",
                url: "https://www.southlandchamber.co.nz/events-training/",
                blurb: "Attend their events to meet local business people.",
            },
            ResourceLink {
                name: "Welcoming Communities",
                url: "https://www.invercargillnz.com/newcomers/",
                blurb: "City program to help new residents settle in.",
            },
            ResourceLink {
                name: "Southland Multicultural Trust",
                url: "https://www.southlandmulticultural.co.nz/",
                blurb: "Provides support and social events for newcomers.",
            },
        ],
    },
];

pub static WORKPLACE_CULTURE: [Tip; 4] = [
    Tip {
        icon: "⚖️",
        heading: "Work-Life Balance:",
        body: "Kiwis work hard but value their personal time. Flexible hours to support family are common.",
    },
    Tip {
        icon: "👥",
        heading: "Teamwork is Key:",
        body: "Hierarchies are flat. Your ideas are welcome, no matter your role. Be ready to collaborate.",
    },
    Tip {
        icon: "🗣️",
        heading: "Direct & Polite:",
        body: "Communication is honest and straightforward, but always polite.",
    },
    Tip {
        icon: "⏰",
        heading: "Punctuality Matters:",
        body: "Being on time for work and meetings is seen as a sign of respect.",
    },
];

pub const RIGHTS_INTRO: &str =
    "New Zealand has strong laws to protect workers. Know your basic rights.";

pub static EMPLOYEE_RIGHTS: [Tip; 4] = [
    Tip {
        icon: "📄",
        heading: "Written Agreement:",
        body: "You must receive a written employment agreement. Read it carefully.",
    },
    Tip {
        icon: "💰",
        heading: "Minimum Wage:",
        body: "You must be paid at least the legal minimum wage.",
    },
    Tip {
        icon: "🌴",
        heading: "Leave Entitlements:",
        body: "You are entitled to paid annual holidays, sick leave, and public holidays.",
    },
    Tip {
        icon: "⛑️",
        heading: "Health & Safety:",
        body: "Your employer has a legal duty to provide a safe workplace.",
    },
];

pub static ACTION_PLAN: [Tip; 6] = [
    Tip {
        icon: "✅",
        heading: "Target In-Demand Sectors:",
        body: "Focus your search on Healthcare, Trades, and Construction where your hard work is needed most.",
    },
    Tip {
        icon: "✅",
        heading: "Create a NZ-style CV:",
        body: "Use the tools on careers.govt.nz to adapt your CV for local employers.",
    },
    Tip {
        icon: "✅",
        heading: "Set Up Job Alerts:",
        body: "Create daily alerts on Seek and Trade Me for roles in Invercargill.",
    },
    Tip {
        icon: "✅",
        heading: "Contact a Recruitment Agency:",
        body: "Call or email OneStaff or Advanced Personnel to introduce yourself.",
    },
    Tip {
        icon: "✅",
        heading: "Attend a Community Event:",
        body: "Check the Southland Chamber or Multicultural Trust for networking opportunities.",
    },
    Tip {
        icon: "✅",
        heading: "Connect with Support Services:",
        body: "Contact Work and Income for job search help and financial support information.",
    },
];

pub static SUPPORT_CONTACTS: [Contact; 3] = [
    Contact { label: "Work and Income NZ", url: "https://workandincome.govt.nz" },
    Contact { label: "Immigration New Zealand", url: "https://www.immigration.govt.nz" },
    Contact { label: "Southland Multicultural Trust", url: "https://www.southlandmulticultural.co.nz/" },
];

pub const FOOTER_NOTE: &str = "This interactive guide was created to help you succeed in your new home. Best of luck with your job search!";
