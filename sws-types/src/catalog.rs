/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Static display content for the about, gallery, team and pricing sections.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutItem {
    pub title: &'static str,
    pub content: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkItem {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

impl TeamMember {
    /// Up to two uppercase initials for the avatar placeholder.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

impl Plan {
    /// Custom-quoted plans carry no fixed price and no "one-time" suffix.
    pub fn is_custom(&self) -> bool {
        self.price == "Custom"
    }

    /// Contact form text prefilled by the plan's button.
    pub fn inquiry_message(&self) -> String {
        format!(
            "Hi! I'm interested in the {} plan ({}). I'd like to discuss my project.",
            self.name, self.price
        )
    }
}

pub const ABOUT_ITEMS: &[AboutItem] = &[
    AboutItem {
        title: "Why Sous Web Studio?",
        content: "We combine clean design, thoughtful strategy, and technical excellence to create digital experiences that inspire, engage, and convert. Your vision deserves precision and purpose.",
    },
    AboutItem {
        title: "What We Offer",
        content: "Web design & development, branding & visual identity, e-commerce solutions, UI/UX design, SEO optimization, and ongoing support. Full-spectrum digital services tailored to your needs.",
    },
    AboutItem {
        title: "Our Approach",
        content: "We work closely with clients to understand their vision. Through collaboration, creativity, and innovation, we deliver solutions that communicate value and drive growth.",
    },
];

pub const WORK_ITEMS: &[WorkItem] = &[
    WorkItem {
        id: "1",
        title: "E-Commerce Platform",
        category: "Web Development",
        image: "/images/modern-ecommerce-interface.svg",
    },
    WorkItem {
        id: "2",
        title: "Brand Identity",
        category: "Branding",
        image: "/images/modern-brand-identity.svg",
    },
    WorkItem {
        id: "3",
        title: "Mobile App Design",
        category: "UI/UX Design",
        image: "/images/mobile-app-ui.svg",
    },
    WorkItem {
        id: "4",
        title: "SaaS Dashboard",
        category: "Web Development",
        image: "/images/saas-dashboard-analytics-interface.svg",
    },
    WorkItem {
        id: "5",
        title: "Marketing Website",
        category: "Web Design",
        image: "/images/modern-marketing-website-design.svg",
    },
    WorkItem {
        id: "6",
        title: "Visual System",
        category: "Design System",
        image: "/images/design-system-components.svg",
    },
];

pub const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember {
        name: "Development Team",
        role: "Web & E-commerce Engineering",
        bio: "Turns product ideas into fast, maintainable websites and keeps every project on schedule.",
    },
    TeamMember {
        name: "Design Team",
        role: "UI/UX & Branding",
        bio: "Visual identities, design systems and interfaces built around how your customers actually browse.",
    },
    TeamMember {
        name: "Growth Team",
        role: "SEO & Analytics",
        bio: "Search visibility, tracking and reporting so you can see what the new site is doing for you.",
    },
];

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "$2,999",
        description: "Perfect for small projects and startups",
        features: &[
            "Up to 5 pages",
            "Responsive design",
            "Basic SEO optimization",
            "Contact form",
            "2 weeks delivery",
            "Email support",
        ],
        highlighted: false,
    },
    Plan {
        name: "Professional",
        price: "$7,999",
        description: "Ideal for growing businesses",
        features: &[
            "Up to 15 pages",
            "Advanced SEO",
            "E-commerce integration",
            "Analytics setup",
            "CMS integration",
            "4 weeks delivery",
            "Priority support",
            "Monthly maintenance",
        ],
        highlighted: true,
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        description: "For complex, large-scale projects",
        features: &[
            "Unlimited pages",
            "Custom development",
            "API integrations",
            "Advanced security",
            "Performance optimization",
            "Custom timeline",
            "24/7 support",
            "Ongoing optimization",
        ],
        highlighted: false,
    },
];
