// Static vocabularies for sector detection, skill extraction, role requirements
// and learning resources. Pure data; matching logic lives in `analysis`.

use crate::analysis::sector::Sector;

/// Skill vocabulary per sector, in match order. Extraction output follows this order.
pub const SECTOR_SKILLS: &[(Sector, &[&str])] = &[
    (
        Sector::Tech,
        &[
            "Python",
            "Java",
            "JavaScript",
            "React",
            "Node.js",
            "SQL",
            "AWS",
            "Docker",
            "Machine Learning",
            "Data Analysis",
            "HTML",
            "CSS",
            "Git",
            "Agile",
            "Scrum",
            "TypeScript",
            "Angular",
            "Vue",
            "Django",
            "Flask",
            "TensorFlow",
            "Kubernetes",
            "CI/CD",
            "Linux",
            "Azure",
            "MongoDB",
            "PostgreSQL",
            "REST API",
            "GraphQL",
        ],
    ),
    (
        Sector::Medical,
        &[
            "Patient Care",
            "Clinical Skills",
            "Medical Diagnosis",
            "Treatment Planning",
            "EMR/EHR",
            "HIPAA Compliance",
            "Medical Terminology",
            "Pharmacology",
            "Anatomy",
            "Physiology",
            "CPR Certified",
            "BLS",
            "ACLS",
            "First Aid",
            "Infection Control",
            "Vital Signs",
            "Patient Assessment",
            "Documentation",
            "Medical Ethics",
            "Healthcare Management",
            "Telemedicine",
            "Surgery Assist",
        ],
    ),
    (
        Sector::Nursing,
        &[
            "Patient Care",
            "Medication Administration",
            "IV Therapy",
            "Wound Care",
            "Patient Education",
            "Care Planning",
            "Nursing Assessment",
            "Critical Care",
            "Pediatric Care",
            "Geriatric Care",
            "Mental Health",
            "Emergency Care",
            "Hospice Care",
            "Rehabilitation",
            "Nursing Documentation",
            "Team Coordination",
        ],
    ),
    (
        Sector::Physio,
        &[
            "Physical Assessment",
            "Therapeutic Exercise",
            "Manual Therapy",
            "Electrotherapy",
            "Rehabilitation",
            "Pain Management",
            "Sports Injury",
            "Orthopedic Care",
            "Neurological Rehab",
            "Cardiopulmonary Rehab",
            "Patient Education",
            "Treatment Planning",
            "Mobility Training",
            "Posture Correction",
        ],
    ),
    (
        Sector::Business,
        &[
            "Project Management",
            "Leadership",
            "Communication",
            "Strategic Planning",
            "Financial Analysis",
            "Marketing",
            "Sales",
            "Business Development",
            "Negotiation",
            "Presentation",
            "Excel",
            "PowerPoint",
            "Data Analysis",
            "Budget Management",
            "Team Management",
            "Problem Solving",
            "CRM",
        ],
    ),
    (
        Sector::Education,
        &[
            "Teaching",
            "Curriculum Development",
            "Lesson Planning",
            "Classroom Management",
            "Student Assessment",
            "Educational Technology",
            "Special Education",
            "Communication",
            "Mentoring",
            "Research",
            "Subject Expertise",
        ],
    ),
    (
        Sector::General,
        &[
            "Communication",
            "Teamwork",
            "Problem Solving",
            "Leadership",
            "Time Management",
            "Critical Thinking",
            "Adaptability",
            "Attention to Detail",
            "Organization",
            "Interpersonal Skills",
            "Research",
            "Documentation",
            "Presentation",
        ],
    ),
];

/// Returned by skill extraction when nothing in the vocabulary matches.
pub const FALLBACK_SKILLS: [&str; 3] = ["Communication", "Teamwork", "Problem Solving"];

/// Role key (lowercase substring of the target role) → required skills.
/// Declaration order is match order: the first key contained in the role wins.
pub const ROLE_REQUIREMENTS: &[(&str, &[&str])] = &[
    // Medical
    (
        "doctor",
        &["Clinical Skills", "Medical Diagnosis", "Patient Care", "Treatment Planning", "Medical Ethics"],
    ),
    (
        "physician",
        &["Clinical Skills", "Medical Diagnosis", "Patient Care", "Treatment Planning", "Research"],
    ),
    (
        "mbbs",
        &["Clinical Skills", "Medical Diagnosis", "Anatomy", "Physiology", "Pharmacology"],
    ),
    (
        "surgeon",
        &["Surgery Assist", "Clinical Skills", "Patient Care", "Precision", "Decision Making"],
    ),
    // Nursing
    (
        "nurse",
        &["Patient Care", "Medication Administration", "Nursing Assessment", "Documentation", "Team Coordination"],
    ),
    (
        "registered nurse",
        &["Patient Care", "Critical Care", "IV Therapy", "Care Planning", "Emergency Care"],
    ),
    (
        "nursing",
        &["Patient Care", "Wound Care", "Vital Signs", "Patient Education", "Healthcare Management"],
    ),
    // Physiotherapy
    (
        "physiotherapist",
        &["Physical Assessment", "Therapeutic Exercise", "Manual Therapy", "Rehabilitation", "Patient Education"],
    ),
    (
        "physio",
        &["Physical Assessment", "Therapeutic Exercise", "Pain Management", "Mobility Training", "Treatment Planning"],
    ),
    (
        "physical therapist",
        &["Physical Assessment", "Manual Therapy", "Sports Injury", "Neurological Rehab", "Patient Care"],
    ),
    // Technology
    (
        "software engineer",
        &["Python", "Java", "Git", "Docker", "AWS", "Problem Solving"],
    ),
    (
        "data scientist",
        &["Python", "Machine Learning", "TensorFlow", "SQL", "Data Analysis"],
    ),
    (
        "data analyst",
        &["Python", "SQL", "Excel", "Data Analysis", "Visualization"],
    ),
    (
        "frontend developer",
        &["JavaScript", "React", "HTML", "CSS", "TypeScript"],
    ),
    (
        "backend developer",
        &["Python", "Node.js", "SQL", "REST API", "Docker"],
    ),
    (
        "full stack developer",
        &["JavaScript", "React", "Node.js", "SQL", "Docker"],
    ),
    (
        "devops engineer",
        &["Docker", "Kubernetes", "CI/CD", "AWS", "Linux"],
    ),
    (
        "web developer",
        &["HTML", "CSS", "JavaScript", "React", "Git"],
    ),
    // Business
    (
        "product manager",
        &["Agile", "Scrum", "Communication", "Leadership", "Data Analysis"],
    ),
    (
        "business analyst",
        &["Data Analysis", "Excel", "Communication", "Problem Solving", "Documentation"],
    ),
    (
        "project manager",
        &["Project Management", "Leadership", "Communication", "Agile", "Budget Management"],
    ),
    (
        "marketing manager",
        &["Marketing", "Communication", "Data Analysis", "Strategy", "Leadership"],
    ),
    // Education
    (
        "teacher",
        &["Teaching", "Lesson Planning", "Classroom Management", "Communication", "Student Assessment"],
    ),
    (
        "professor",
        &["Teaching", "Research", "Curriculum Development", "Subject Expertise", "Mentoring"],
    ),
];

/// Requirement list used when no role key matches.
pub const DEFAULT_REQUIREMENTS: &[&str] = &[
    "Communication",
    "Problem Solving",
    "Teamwork",
    "Leadership",
    "Time Management",
];

/// Learning resources keyed by exact skill label.
pub const SKILL_RESOURCES: &[(&str, &[&str])] = &[
    // Medical
    ("Patient Care", &["Clinical Training", "Patient Communication Course", "Healthcare Ethics"]),
    ("Clinical Skills", &["Clinical Practice", "Medical Simulations", "Hospital Internship"]),
    ("Medical Diagnosis", &["Diagnostic Training", "Case Studies", "Clinical Rotations"]),
    // Nursing
    ("Medication Administration", &["Pharmacology Course", "Clinical Practice", "Safety Training"]),
    ("Nursing Assessment", &["Assessment Techniques", "Patient Evaluation", "Documentation Training"]),
    // Physiotherapy
    ("Physical Assessment", &["Assessment Courses", "Anatomy Study", "Practice Sessions"]),
    ("Therapeutic Exercise", &["Exercise Therapy Course", "Rehabilitation Training", "Sports Medicine"]),
    ("Manual Therapy", &["Hands-on Training", "Technique Workshops", "Clinical Practice"]),
    // Technology
    ("Python", &["Python.org Tutorial", "Codecademy Python", "Automate the Boring Stuff"]),
    ("JavaScript", &["MDN Web Docs", "freeCodeCamp JS", "JavaScript.info"]),
    ("React", &["React Official Docs", "Scrimba React", "Build Projects"]),
    ("SQL", &["SQLZoo", "Mode Analytics", "LeetCode SQL"]),
    ("Machine Learning", &["Andrew Ng ML Course", "Kaggle Learn", "Fast.ai"]),
    // Business
    ("Project Management", &["PMP Certification", "Agile Training", "Project Simulations"]),
    ("Leadership", &["Leadership Courses", "Management Training", "Team Building"]),
];

pub const DEFAULT_RESOURCES: &[&str] = &["Online Courses", "Practical Training", "Industry Certification"];

/// Resources attached to a week added through the "add skill" chat command.
pub const ADDED_WEEK_RESOURCES: &[&str] = &["Online courses", "Documentation", "Practice projects"];

/// Resources attached to weeks appended by the "extend roadmap" chat command.
pub const EXTENDED_WEEK_RESOURCES: &[&str] = &["Advanced courses", "Real projects", "Mentorship"];

/// Skill vocabulary for a sector. Every sector has an entry.
pub fn sector_skills(sector: Sector) -> &'static [&'static str] {
    SECTOR_SKILLS
        .iter()
        .find(|(s, _)| *s == sector)
        .map(|(_, skills)| *skills)
        .unwrap_or(&[])
}

/// Learning resources for an exact skill label, or the generic fallback.
pub fn resources_for(skill: &str) -> &'static [&'static str] {
    SKILL_RESOURCES
        .iter()
        .find(|(label, _)| *label == skill)
        .map(|(_, resources)| *resources)
        .unwrap_or(DEFAULT_RESOURCES)
}
