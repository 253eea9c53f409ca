//! Static recommendation templates.

use crate::domain::foundation::{DomainId, Priority};

/// Text of a recommendation, independent of where it is applied.
#[derive(Debug)]
pub struct RecommendationTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub actions: &'static [&'static str],
    pub timeline: &'static str,
    pub resources: &'static [&'static str],
}

/// A template that applies up to and including `max_level`.
#[derive(Debug)]
pub struct StageTemplate {
    pub max_level: u8,
    pub base_priority: Priority,
    pub template: &'static RecommendationTemplate,
}

/// Stage templates for a domain, ordered by ascending `max_level`.
pub fn domain_stages(domain: DomainId) -> &'static [StageTemplate] {
    match domain {
        DomainId::Strategy => &STRATEGY_STAGES,
        DomainId::Governance => &GOVERNANCE_STAGES,
        DomainId::Pedagogy => &PEDAGOGY_STAGES,
        DomainId::Technology => &TECHNOLOGY_STAGES,
        DomainId::Culture => &CULTURE_STAGES,
        DomainId::Alignment => &ALIGNMENT_STAGES,
    }
}

static STRATEGY_STAGES: [StageTemplate; 2] = [
    StageTemplate {
        max_level: 2,
        base_priority: Priority::High,
        template: &RecommendationTemplate {
            title: "Establish AI Governance and Strategic Planning Framework",
            description: "The institution needs an AI strategy aligned with its quality enhancement plan and strategic initiatives.",
            actions: &[
                "Form an AI steering committee with representation from academics, IT and leadership",
                "Develop an AI strategic plan integrated with the institutional strategic plan",
                "Allocate dedicated multi-year budget for AI initiatives",
                "Define success metrics tied to student success and operational efficiency",
                "Create a communication plan to build campus-wide AI awareness",
            ],
            timeline: "3-6 months",
            resources: &[
                "AI strategic planning toolkit",
                "Peer institution governance frameworks",
                "Executive time commitment",
            ],
        },
    },
    StageTemplate {
        max_level: 3,
        base_priority: Priority::Medium,
        template: &RecommendationTemplate {
            title: "Strengthen AI Strategy Implementation and Measurement",
            description: "Build on the existing strategy with implementation planning and success measurement.",
            actions: &[
                "Develop implementation roadmaps with quarterly milestones",
                "Establish an AI ROI framework tied to institutional KPIs",
                "Create a faculty and staff engagement strategy for AI adoption",
                "Align AI initiatives with accreditation requirements",
                "Build partnerships with peer institutions for shared learning",
            ],
            timeline: "2-4 months",
            resources: &[
                "AI ROI measurement framework",
                "Peer partnership opportunities",
                "Analytics platform",
            ],
        },
    },
];

static GOVERNANCE_STAGES: [StageTemplate; 1] = [StageTemplate {
    max_level: 2,
    base_priority: Priority::High,
    template: &RecommendationTemplate {
        title: "Develop Comprehensive AI Ethics and Policy Framework",
        description: "Establish governance structures and policies for responsible AI use across the institution.",
        actions: &[
            "Create an AI ethics committee with faculty, student and community representation",
            "Develop acceptable use policies for students, faculty and staff",
            "Establish data privacy and security protocols for AI applications",
            "Update academic integrity policies to address AI in coursework and research",
            "Create incident response procedures for AI-related issues",
            "Schedule regular policy review",
        ],
        timeline: "4-8 months",
        resources: &[
            "AI ethics framework template",
            "FERPA compliance guidance for AI",
            "Legal counsel",
            "Policy development team",
        ],
    },
}];

static PEDAGOGY_STAGES: [StageTemplate; 2] = [
    StageTemplate {
        max_level: 2,
        base_priority: Priority::High,
        template: &RecommendationTemplate {
            title: "Launch Faculty AI Integration Program",
            description: "Build a faculty support system for meaningful AI integration in teaching and learning.",
            actions: &[
                "Create an AI pedagogy professional development program",
                "Establish an AI teaching and learning resource center",
                "Develop discipline-specific AI integration guides",
                "Pilot AI-enhanced courses in several departments",
                "Add AI literacy components to the student curriculum",
                "Establish a peer mentoring network for AI in teaching",
            ],
            timeline: "6-12 months",
            resources: &[
                "Faculty AI integration toolkit",
                "Discipline-specific pedagogy examples",
                "Faculty development funds",
                "Instructional design support",
            ],
        },
    },
    StageTemplate {
        max_level: 3,
        base_priority: Priority::Medium,
        template: &RecommendationTemplate {
            title: "Scale AI Integration and Measure Learning Impact",
            description: "Expand successful pedagogy pilots and measure their impact on learning.",
            actions: &[
                "Scale successful pilots across more departments",
                "Use learning analytics to measure AI impact on student outcomes",
                "Create AI-enhanced advising, tutoring and career services",
                "Develop an advanced faculty AI competency certification",
                "Establish research partnerships on AI and learning",
            ],
            timeline: "3-6 months",
            resources: &[
                "Learning analytics implementation guide",
                "AI student services practices",
                "Research partnership funding",
            ],
        },
    },
];

static TECHNOLOGY_STAGES: [StageTemplate; 1] = [StageTemplate {
    max_level: 2,
    base_priority: Priority::High,
    template: &RecommendationTemplate {
        title: "Upgrade Infrastructure for AI Readiness",
        description: "Invest in infrastructure capable of supporting institution-wide AI initiatives.",
        actions: &[
            "Assess infrastructure for AI capabilities",
            "Upgrade network capacity and cloud computing resources",
            "Implement a data integration platform for cross-system analytics",
            "Establish AI-capable security and privacy infrastructure",
            "Create a vendor evaluation framework for AI tools",
            "Train IT staff in AI technologies and support",
        ],
        timeline: "6-18 months",
        resources: &[
            "IT infrastructure assessment tool",
            "AI vendor evaluation rubric",
            "IT infrastructure budget",
            "Cloud services",
        ],
    },
}];

static CULTURE_STAGES: [StageTemplate; 1] = [StageTemplate {
    max_level: 2,
    base_priority: Priority::Medium,
    template: &RecommendationTemplate {
        title: "Build AI-Positive Campus Culture",
        description: "Address resistance and build enthusiasm for AI adoption through deliberate change management.",
        actions: &[
            "Run a campus-wide AI awareness and education campaign",
            "Create a program for sharing and recognizing AI success stories",
            "Provide support and training for AI-related anxiety among faculty and staff",
            "Develop student AI literacy and ethics requirements",
            "Communicate openly about AI decisions and their impact",
            "Include diverse stakeholders in AI governance",
        ],
        timeline: "6-12 months",
        resources: &[
            "Change management toolkit",
            "Campus communication templates",
            "Communications team",
        ],
    },
}];

static ALIGNMENT_STAGES: [StageTemplate; 1] = [StageTemplate {
    max_level: 2,
    base_priority: Priority::High,
    template: &RecommendationTemplate {
        title: "Align AI Initiatives with Institutional Mission and Student Success",
        description: "Make sure AI investments support the mission, strategic priorities and student success outcomes.",
        actions: &[
            "Map current AI projects to strategic plan objectives and student success metrics",
            "Assess AI opportunities against institutional mission and values",
            "Require strategic alignment justification in AI project approval",
            "Define AI KPIs for persistence, equity and learning outcomes",
            "Engage academic affairs leadership in AI planning",
            "Reflect institutional values and accreditation standards in the AI ethics framework",
        ],
        timeline: "3-6 months",
        resources: &[
            "Strategic alignment assessment tool",
            "AI project evaluation framework",
            "Student success KPI templates",
        ],
    },
}];

/// Overall recommendation for institutions at maturity level 2 or below.
pub static FOUNDATION: RecommendationTemplate = RecommendationTemplate {
    title: "Establish AI Foundation and Quick Wins",
    description: "The institution is early in AI adoption. Build the foundation while demonstrating value through targeted pilots.",
    actions: &[
        "Start with a low-risk, high-visibility AI pilot in one department",
        "Invest in AI literacy for leadership and key faculty",
        "Establish a basic AI governance structure and ethical guidelines",
        "Name an AI lead or small team",
        "Begin systematic evaluation of institutional AI tools",
        "Document and share early successes",
    ],
    timeline: "3-6 months",
    resources: &[
        "AI pilot program template",
        "AI quick wins guide",
        "Vendor evaluation framework",
    ],
};

/// Overall recommendation for institutions at maturity level 3.
pub static SCALING: RecommendationTemplate = RecommendationTemplate {
    title: "Scale AI Initiatives and Measure Impact",
    description: "The institution has solid AI foundations. Scale what works and measure the impact.",
    actions: &[
        "Expand successful pilots to institution-wide implementation",
        "Implement impact measurement and ROI analysis",
        "Develop advanced AI capabilities in priority areas",
        "Create an institution-wide AI professional development program",
        "Establish external partnerships for AI innovation and research",
        "Plan for next-generation AI capabilities",
    ],
    timeline: "6-12 months",
    resources: &[
        "AI scaling playbook",
        "ROI measurement framework",
        "Partnership development guide",
    ],
};

/// Appended whenever overall maturity is at or below level 3.
pub static EXPERT_GUIDANCE: RecommendationTemplate = RecommendationTemplate {
    title: "Accelerate Progress with Expert Guidance",
    description: "External expertise shortens strategic planning and helps avoid common implementation pitfalls.",
    actions: &[
        "Engage external AI implementation experts for a custom roadmap",
        "Join higher education AI consortiums for shared learning and benchmarking",
        "Adopt implementation frameworks designed for higher education",
        "Commission a detailed analysis of institution-specific opportunities",
        "Secure advisory support through critical implementation phases",
    ],
    timeline: "1-3 months to engage, ongoing support available",
    resources: &[
        "External advisory options",
        "Higher education AI consortiums",
        "Implementation advisory services",
    ],
};
