//! Static site copy: services, projects, FAQ, testimonials and clients.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    Electrical,
    Mechanical,
    Automation,
    Maintenance,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 4] = [
        ServiceCategory::Electrical,
        ServiceCategory::Mechanical,
        ServiceCategory::Automation,
        ServiceCategory::Maintenance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Electrical => "Electrical",
            ServiceCategory::Mechanical => "Mechanical",
            ServiceCategory::Automation => "Automation",
            ServiceCategory::Maintenance => "Maintenance",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Service {
    pub slug: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub category: ServiceCategory,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        slug: "power-distribution",
        icon: "⚡",
        title: "Power Distribution",
        category: ServiceCategory::Electrical,
        summary: "Design and installation of LV/MV switchboards, busways and sub-distribution for plants and commercial buildings.",
        highlights: &["Switchgear", "Load studies", "Busbar trunking"],
    },
    Service {
        slug: "hvac",
        icon: "❄️",
        title: "HVAC Systems",
        category: ServiceCategory::Mechanical,
        summary: "Chillers, air handling units and ventilation sized to the load, commissioned and balanced on site.",
        highlights: &["Chilled water", "Air balancing", "Ductwork"],
    },
    Service {
        slug: "plc-automation",
        icon: "🤖",
        title: "PLC & SCADA Automation",
        category: ServiceCategory::Automation,
        summary: "Control panels, PLC programming and SCADA dashboards that tie motors, sensors and valves into one system.",
        highlights: &["Siemens / Allen-Bradley", "HMI screens", "Remote monitoring"],
    },
    Service {
        slug: "motor-control",
        icon: "⚙️",
        title: "Motor Control Centres",
        category: ServiceCategory::Electrical,
        summary: "MCC assembly, VFD retrofits and soft starters that cut energy use on pumps, fans and conveyors.",
        highlights: &["VFD retrofit", "Soft starters", "Energy savings"],
    },
    Service {
        slug: "piping",
        icon: "🔧",
        title: "Process Piping & Pumps",
        category: ServiceCategory::Mechanical,
        summary: "Fabrication and installation of process piping, pump skids and pressure testing to code.",
        highlights: &["Pump skids", "Pressure testing", "Stainless welding"],
    },
    Service {
        slug: "fire-protection",
        icon: "🔥",
        title: "Fire Protection",
        category: ServiceCategory::Mechanical,
        summary: "Sprinkler, hydrant and fire alarm systems integrated with building management.",
        highlights: &["Sprinklers", "Fire alarm", "BMS integration"],
    },
    Service {
        slug: "preventive-maintenance",
        icon: "🛠️",
        title: "Preventive Maintenance",
        category: ServiceCategory::Maintenance,
        summary: "Scheduled inspections, thermography and vibration analysis that catch failures before they stop the line.",
        highlights: &["Thermography", "Vibration analysis", "Annual contracts"],
    },
    Service {
        slug: "emergency-response",
        icon: "🚨",
        title: "24/7 Emergency Response",
        category: ServiceCategory::Maintenance,
        summary: "On-call technicians for breakdowns, power outages and critical equipment failures, any hour.",
        highlights: &["Two-hour call-out", "Generator hire", "Fault finding"],
    },
];

/// Services matching `query` (case-insensitive, against title, summary and
/// highlights) within `category`, in declaration order. A blank query
/// matches everything.
pub fn search_services(query: &str, category: Option<ServiceCategory>) -> Vec<&'static Service> {
    let needle = query.trim().to_lowercase();
    SERVICES
        .iter()
        .filter(|service| category.map_or(true, |c| service.category == c))
        .filter(|service| {
            needle.is_empty()
                || service.title.to_lowercase().contains(&needle)
                || service.summary.to_lowercase().contains(&needle)
                || service
                    .highlights
                    .iter()
                    .any(|h| h.to_lowercase().contains(&needle))
        })
        .collect()
}

#[derive(Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub client: &'static str,
    pub location: &'static str,
    pub year: u16,
    pub category: ServiceCategory,
    pub summary: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Bottling Plant Electrical Upgrade",
        client: "Northbay Beverages",
        location: "Port Hadley",
        year: 2024,
        category: ServiceCategory::Electrical,
        summary: "Replaced 1970s switchgear with a 3,200 A main board and redistributed loads across four new MCCs without a single unplanned shutdown.",
    },
    Project {
        title: "Hospital Chiller Replacement",
        client: "St. Aldric Medical Centre",
        location: "Greywater",
        year: 2023,
        category: ServiceCategory::Mechanical,
        summary: "Swapped two 600 TR chillers during live operation with temporary cooling and staged cut-overs.",
    },
    Project {
        title: "Water Treatment SCADA",
        client: "Greywater Municipal Utility",
        location: "Greywater",
        year: 2023,
        category: ServiceCategory::Automation,
        summary: "Unified twelve pump stations under one SCADA system with remote alarms and historian reporting.",
    },
    Project {
        title: "Cold Store Refrigeration Piping",
        client: "Meridian Logistics",
        location: "Ashford Quay",
        year: 2022,
        category: ServiceCategory::Mechanical,
        summary: "Installed 2 km of insulated refrigerant piping and pump skids for a 20,000 m² cold store.",
    },
    Project {
        title: "Conveyor VFD Retrofit",
        client: "Kessel Aggregates",
        location: "Brannock",
        year: 2024,
        category: ServiceCategory::Automation,
        summary: "Fitted variable frequency drives to eighteen conveyors, cutting energy use by 31%.",
    },
    Project {
        title: "Mall Maintenance Contract",
        client: "Harbourgate Shopping Centre",
        location: "Port Hadley",
        year: 2021,
        category: ServiceCategory::Maintenance,
        summary: "Five-year preventive maintenance of HVAC, lifts power and fire systems with 99.8% uptime.",
    },
];

pub fn projects_in(category: Option<ServiceCategory>) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|project| category.map_or(true, |c| project.category == c))
        .collect()
}

#[derive(Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Which areas do you cover?",
        answer: "We work across the region from our Riverside workshop. Emergency call-outs are guaranteed within two hours inside a 60 km radius.",
    },
    Faq {
        question: "Do you handle both design and installation?",
        answer: "Yes. Our engineers design, our crews install, and the same team commissions and hands over, so there is one point of contact from survey to sign-off.",
    },
    Faq {
        question: "Are your technicians certified?",
        answer: "All electricians are licensed, and our mechanical team holds refrigerant handling and pressure vessel certifications. Certificates are available on request.",
    },
    Faq {
        question: "Can you work while our facility stays open?",
        answer: "Most of our projects happen in live environments. We plan staged shutdowns, night shifts and temporary supplies around your operations.",
    },
    Faq {
        question: "Do you offer maintenance contracts?",
        answer: "We offer monthly, quarterly and annual preventive maintenance plans with priority response and detailed reports after every visit.",
    },
];

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "They replaced our main switchboard over a single weekend and we were producing again on Monday morning. Clean work and clear communication.",
        name: "Leena Marsh",
        role: "Plant Manager, Northbay Beverages",
    },
    Testimonial {
        quote: "The chiller swap happened while the wards stayed occupied. Nobody on the floor even noticed.",
        name: "Dr. Omar Haddad",
        role: "Facilities Director, St. Aldric Medical Centre",
    },
    Testimonial {
        quote: "Our pump stations used to be a box of mysteries. Now I see every alarm on my phone.",
        name: "Tomasz Rybak",
        role: "Operations Lead, Greywater Utility",
    },
];

pub const CLIENTS: &[&str] = &[
    "Northbay Beverages",
    "St. Aldric Medical",
    "Greywater Utility",
    "Meridian Logistics",
    "Kessel Aggregates",
    "Harbourgate",
    "Orrin Steelworks",
    "Vantage Data Centres",
];

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: 25,
        suffix: "+",
        label: "Years in the trade",
    },
    Stat {
        value: 850,
        suffix: "+",
        label: "Projects delivered",
    },
    Stat {
        value: 120,
        suffix: "",
        label: "Engineers & technicians",
    },
    Stat {
        value: 98,
        suffix: "%",
        label: "Repeat clients",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_matches_all_services() {
        assert_eq!(search_services("", None).len(), SERVICES.len());
        assert_eq!(search_services("   ", None).len(), SERVICES.len());
    }

    #[test]
    fn search_is_case_insensitive_and_ordered() {
        let titles: Vec<_> = search_services("VFD", None)
            .iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["Motor Control Centres"]);

        let titles: Vec<_> = search_services("system", None)
            .iter()
            .map(|s| s.slug)
            .collect();
        assert_eq!(titles, vec!["hvac", "plc-automation", "fire-protection"]);
    }

    #[test]
    fn search_respects_category() {
        let found = search_services("", Some(ServiceCategory::Maintenance));
        assert!(found.iter().all(|s| s.category == ServiceCategory::Maintenance));
        assert_eq!(found.len(), 2);
        assert!(search_services("chilled", Some(ServiceCategory::Electrical)).is_empty());
    }

    #[test]
    fn project_filter() {
        assert_eq!(projects_in(None).len(), PROJECTS.len());
        let automation = projects_in(Some(ServiceCategory::Automation));
        assert_eq!(automation.len(), 2);
        assert_eq!(automation[0].title, "Water Treatment SCADA");
    }
}
