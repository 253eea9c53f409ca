//! Policy document outlines, one per [`PolicyType`].

use serde::{Deserialize, Serialize};

use super::{PolicyTrigger, PolicyType};
use crate::domain::foundation::Priority;

/// One numbered section of a policy outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySection {
    pub title: String,
    pub content: String,
}

/// A fully elaborated policy recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRecommendation {
    pub policy_type: PolicyType,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub sections: Vec<PolicySection>,
    pub stakeholders: Vec<String>,
    pub implementation_steps: Vec<String>,
    pub timeline: String,
}

impl PolicyRecommendation {
    /// Expands a fired trigger into its outline. The trigger's priority wins
    /// over the catalog's.
    pub fn from_trigger(trigger: &PolicyTrigger) -> Self {
        let template = PolicyTemplate::for_type(trigger.policy_type);
        Self {
            policy_type: trigger.policy_type,
            title: template.title.to_string(),
            description: template.description.to_string(),
            priority: trigger.priority,
            sections: template
                .sections
                .iter()
                .map(|(title, content)| PolicySection {
                    title: title.to_string(),
                    content: content.to_string(),
                })
                .collect(),
            stakeholders: to_strings(template.stakeholders),
            implementation_steps: to_strings(template.implementation_steps),
            timeline: template.timeline.to_string(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

struct PolicyTemplate {
    title: &'static str,
    description: &'static str,
    sections: &'static [(&'static str, &'static str)],
    stakeholders: &'static [&'static str],
    implementation_steps: &'static [&'static str],
    timeline: &'static str,
}

impl PolicyTemplate {
    fn for_type(policy_type: PolicyType) -> &'static PolicyTemplate {
        match policy_type {
            PolicyType::Governance => &GOVERNANCE,
            PolicyType::Pedagogy => &FACULTY,
            PolicyType::StudentPolicy => &STUDENT,
            PolicyType::EmployeePolicy => &EMPLOYEE,
        }
    }
}

static GOVERNANCE: PolicyTemplate = PolicyTemplate {
    title: "Comprehensive AI Governance Framework",
    description: "Establish institutional governance structure and policies for responsible AI implementation",
    sections: &[
        (
            "1. AI Governance Structure",
            "Establish an AI ethics committee or review board with representation from faculty, administration, IT and student affairs to oversee all AI initiatives.",
        ),
        (
            "2. AI Ethics and Principles",
            "Define institutional principles for ethical AI use covering transparency, accountability, fairness, privacy protection and human oversight.",
        ),
        (
            "3. Risk Management",
            "Identify, assess and mitigate risks of AI deployment, including bias detection, security vulnerabilities and compliance issues.",
        ),
        (
            "4. Vendor Management",
            "Set criteria for AI vendor selection, contract requirements for data protection and ongoing monitoring of third-party AI services.",
        ),
        (
            "5. Intellectual Property",
            "Define ownership and usage rights for AI-generated content, including faculty materials, student work and institutional outputs.",
        ),
        (
            "6. Compliance and Monitoring",
            "Create procedures for compliance monitoring, incident reporting and regular policy review as regulations evolve.",
        ),
    ],
    stakeholders: &["Senior Leadership", "Faculty Senate", "IT Department", "Legal Counsel", "Student Affairs"],
    implementation_steps: &[
        "Form AI ethics committee with diverse representation",
        "Conduct institutional AI risk assessment",
        "Draft comprehensive governance framework",
        "Gather stakeholder feedback and revise policies",
        "Implement approval and oversight procedures",
        "Establish monitoring and evaluation processes",
    ],
    timeline: "3-6 months",
};

static FACULTY: PolicyTemplate = PolicyTemplate {
    title: "Faculty AI Use in Teaching and Learning Policy",
    description: "Guidelines for appropriate faculty use of AI tools in course development, delivery and assessment",
    sections: &[
        (
            "1. Permitted AI Uses",
            "Define approved faculty AI applications such as content creation, assessment development, grading assistance and research support.",
        ),
        (
            "2. Quality Assurance",
            "Require faculty oversight of AI-generated content, accuracy verification and maintenance of academic standards.",
        ),
        (
            "3. Student Disclosure",
            "Require faculty to communicate AI use in their courses through syllabi, assignments and ongoing transparency.",
        ),
        (
            "4. Assessment and Grading",
            "Define appropriate AI use in student assessment, with human oversight and procedures ensuring fairness in AI-assisted grading.",
        ),
        (
            "5. Professional Development",
            "Outline institutional support for faculty AI training and resources for current pedagogical practice.",
        ),
        (
            "6. Intellectual Property",
            "Clarify faculty rights and institutional policy on ownership of AI-enhanced course materials.",
        ),
    ],
    stakeholders: &[
        "Faculty",
        "Academic Affairs",
        "Faculty Development",
        "Academic Technology",
        "Faculty Senate",
    ],
    implementation_steps: &[
        "Survey current faculty AI use and needs",
        "Develop draft policy with faculty input",
        "Pilot policy with volunteer faculty",
        "Revise based on pilot feedback",
        "Provide faculty training and resources",
        "Implement policy with ongoing support",
    ],
    timeline: "2-4 months",
};

static STUDENT: PolicyTemplate = PolicyTemplate {
    title: "Student AI Use and Academic Integrity Policy",
    description: "Clear guidelines for acceptable student use of AI tools and academic integrity standards",
    sections: &[
        (
            "1. Acceptable AI Use",
            "Define permitted student uses of AI such as research assistance, brainstorming, editing support and accessibility accommodations.",
        ),
        (
            "2. Academic Integrity Standards",
            "Set expectations for original work, attribution of AI assistance and consequences for unauthorized AI use.",
        ),
        (
            "3. Course-Specific Guidelines",
            "Let faculty set course-level AI rules on top of an institutional baseline for academic honesty.",
        ),
        (
            "4. Assessment Integrity",
            "Restrict AI use in high-stakes assessments so evaluations reflect authentic student learning.",
        ),
        (
            "5. Digital Citizenship",
            "Educate students on responsible AI use, bias awareness and critical thinking alongside AI tools.",
        ),
        (
            "6. Violation Procedures",
            "Establish procedures for investigating AI-related integrity violations with educational and disciplinary responses.",
        ),
    ],
    stakeholders: &[
        "Students",
        "Faculty",
        "Academic Affairs",
        "Student Affairs",
        "Academic Success Center",
    ],
    implementation_steps: &[
        "Review and update academic integrity code",
        "Develop student AI literacy curriculum",
        "Create clear communication materials",
        "Train faculty and staff on new policies",
        "Implement detection and review procedures",
        "Monitor and adjust policies based on outcomes",
    ],
    timeline: "2-3 months",
};

static EMPLOYEE: PolicyTemplate = PolicyTemplate {
    title: "Employee AI Use and Workplace Integration Policy",
    description: "Guidelines for staff and administrative use of AI tools in workplace functions",
    sections: &[
        (
            "1. Approved AI Tools",
            "Define approved AI tools per job function, their security requirements and how to request new applications.",
        ),
        (
            "2. Data Protection",
            "Protect institutional and personal data in AI tools, restricting uploads of sensitive information to external services.",
        ),
        (
            "3. Professional Development",
            "Provide training so employees build AI literacy and integrate tools effectively into their work.",
        ),
        (
            "4. Quality and Accountability",
            "Require human oversight of AI outputs and clear accountability for decisions made with AI assistance.",
        ),
        (
            "5. Personal AI Use",
            "Define acceptable use of personal AI tools for work and the boundary between personal and professional use.",
        ),
        (
            "6. Job Impact Communication",
            "Communicate openly how AI affects job roles, reskilling opportunities and the institution's commitment to staff development.",
        ),
    ],
    stakeholders: &[
        "All Staff",
        "Human Resources",
        "IT Department",
        "Department Heads",
        "Union Representatives",
    ],
    implementation_steps: &[
        "Assess current employee AI use patterns",
        "Develop role-specific AI guidelines",
        "Create employee training programs",
        "Implement secure AI tool access",
        "Establish monitoring and support systems",
        "Review and update the policy regularly",
    ],
    timeline: "3-4 months",
};
