//! The static semantic dictionary: curated topical categories and the flat
//! term → category lookup built from them.
//!
//! Every word in a category list is registered twice, once literally and once
//! by its [`stem`]. Registration walks [`Category::ALL`] in order and later
//! entries overwrite earlier ones, so when two lists share a term (or a stem)
//! the category registered last wins.

use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};

use super::normalize::stem;

/// A human-facing topical label backed by a curated word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    SoftwareDevelopment,
    DataScience,
    DesignCreative,
    MarketingSales,
    Healthcare,
    FinanceAccounting,
    EducationTraining,
    ConstructionTrades,
    CustomerService,
    HumanResources,
    OperationsLogistics,
    Legal,
    Administrative,
    ProjectManagement,
    WritingContent,
    Engineering,
    Hospitality,
    Security,
    Transportation,
    RealEstate,
    ScienceResearch,
    GeneralSkills,
}

impl Category {
    /// Every category, in dictionary registration order.
    pub const ALL: [Category; 22] = [
        Self::SoftwareDevelopment,
        Self::DataScience,
        Self::DesignCreative,
        Self::MarketingSales,
        Self::Healthcare,
        Self::FinanceAccounting,
        Self::EducationTraining,
        Self::ConstructionTrades,
        Self::CustomerService,
        Self::HumanResources,
        Self::OperationsLogistics,
        Self::Legal,
        Self::Administrative,
        Self::ProjectManagement,
        Self::WritingContent,
        Self::Engineering,
        Self::Hospitality,
        Self::Security,
        Self::Transportation,
        Self::RealEstate,
        Self::ScienceResearch,
        Self::GeneralSkills,
    ];

    /// The label used as a cluster name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SoftwareDevelopment => "Software Development",
            Self::DataScience => "Data Science",
            Self::DesignCreative => "Design & Creative",
            Self::MarketingSales => "Marketing & Sales",
            Self::Healthcare => "Healthcare",
            Self::FinanceAccounting => "Finance & Accounting",
            Self::EducationTraining => "Education & Training",
            Self::ConstructionTrades => "Construction & Trades",
            Self::CustomerService => "Customer Service",
            Self::HumanResources => "Human Resources",
            Self::OperationsLogistics => "Operations & Logistics",
            Self::Legal => "Legal",
            Self::Administrative => "Administrative",
            Self::ProjectManagement => "Project Management",
            Self::WritingContent => "Writing & Content",
            Self::Engineering => "Engineering",
            Self::Hospitality => "Hospitality",
            Self::Security => "Security",
            Self::Transportation => "Transportation",
            Self::RealEstate => "Real Estate",
            Self::ScienceResearch => "Science & Research",
            Self::GeneralSkills => "General Skills",
        }
    }

    /// The curated word list for this category.
    pub fn words(&self) -> &'static [&'static str] {
        match self {
            Self::SoftwareDevelopment => SOFTWARE_DEVELOPMENT,
            Self::DataScience => DATA_SCIENCE,
            Self::DesignCreative => DESIGN_CREATIVE,
            Self::MarketingSales => MARKETING_SALES,
            Self::Healthcare => HEALTHCARE,
            Self::FinanceAccounting => FINANCE_ACCOUNTING,
            Self::EducationTraining => EDUCATION_TRAINING,
            Self::ConstructionTrades => CONSTRUCTION_TRADES,
            Self::CustomerService => CUSTOMER_SERVICE,
            Self::HumanResources => HUMAN_RESOURCES,
            Self::OperationsLogistics => OPERATIONS_LOGISTICS,
            Self::Legal => LEGAL,
            Self::Administrative => ADMINISTRATIVE,
            Self::ProjectManagement => PROJECT_MANAGEMENT,
            Self::WritingContent => WRITING_CONTENT,
            Self::Engineering => ENGINEERING,
            Self::Hospitality => HOSPITALITY,
            Self::Security => SECURITY,
            Self::Transportation => TRANSPORTATION,
            Self::RealEstate => REAL_ESTATE,
            Self::ScienceResearch => SCIENCE_RESEARCH,
            Self::GeneralSkills => GENERAL_SKILLS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Flat lookup from term (or stem) to category. Read-only once built.
#[derive(Debug, Clone)]
pub struct SemanticDictionary {
    entries: HashMap<String, Category>,
}

impl SemanticDictionary {
    /// Build the table from every category's word list.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        for category in Category::ALL {
            for word in category.words() {
                entries.insert((*word).to_string(), category);
                entries.insert(stem(word), category);
            }
        }
        Self { entries }
    }

    /// Category for `term`: literal match first, then its stem.
    pub fn category_of(&self, term: &str) -> Option<Category> {
        let lower = term.to_lowercase();
        self.entries
            .get(&lower)
            .or_else(|| self.entries.get(&stem(&lower)))
            .copied()
    }

    /// Number of distinct keys (terms plus stems).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SemanticDictionary {
    fn default() -> Self {
        Self::new()
    }
}

const SOFTWARE_DEVELOPMENT: &[&str] = &[
    "programming", "coding", "developer", "software", "engineer", "code", "python", "javascript",
    "java", "csharp", "c++", "ruby", "php", "swift", "kotlin", "golang", "rust", "typescript",
    "react", "angular", "vue", "node", "nodejs", "django", "flask", "rails", "spring", "dotnet",
    "frontend", "backend", "fullstack", "web", "mobile", "app", "application", "api", "rest",
    "graphql", "microservices", "database", "sql", "nosql", "mongodb", "postgresql", "mysql",
    "redis", "elasticsearch", "git", "github", "gitlab", "agile", "scrum", "devops", "cicd",
    "docker", "kubernetes", "aws", "azure", "gcp", "cloud", "linux", "unix", "bash", "scripting",
    "automation", "testing", "debugging", "algorithms", "oop", "functional", "architecture",
    "scalable", "performance", "optimization", "security", "encryption", "authentication", "sdk",
    "framework", "library", "npm", "pip", "maven", "gradle", "webpack", "vite", "compiler", "ide",
    "vscode", "intellij", "xcode", "android", "ios", "flutter", "reactnative", "electron", "saas",
    "serverless", "lambda", "terraform", "ansible", "jenkins", "jira",
];

const DATA_SCIENCE: &[&str] = &[
    "data", "analytics", "analysis", "analyst", "statistics", "statistical", "machine", "learning",
    "ml", "ai", "artificial", "intelligence", "deep", "neural", "network", "tensorflow", "pytorch",
    "pandas", "numpy", "scipy", "sklearn", "jupyter", "notebook", "visualization", "tableau",
    "powerbi", "looker", "dashboards", "metrics", "kpi", "forecasting", "predictive", "modeling",
    "regression", "classification", "clustering", "nlp", "computer", "vision", "bigdata", "hadoop",
    "spark", "databricks", "snowflake", "etl", "pipeline", "warehouse", "mining", "insights",
    "reporting", "excel", "spreadsheet", "pivot", "vlookup", "quantitative", "qualitative",
    "research", "hypothesis", "experiment", "ab", "segmentation", "cohort",
];

const DESIGN_CREATIVE: &[&str] = &[
    "design", "designer", "graphic", "visual", "ui", "ux", "user", "experience", "interface",
    "figma", "sketch", "adobe", "photoshop", "illustrator", "indesign", "xd", "creative",
    "creativity", "art", "artistic", "illustration", "branding", "brand", "logo", "typography",
    "layout", "composition", "color", "palette", "mockup", "wireframe", "prototype", "prototyping",
    "animation", "motion", "video", "editing", "premiere", "aftereffects", "cinema4d", "blender",
    "3d", "rendering", "photography", "photographer", "lightroom", "retouching", "print",
    "packaging", "responsive", "interaction", "usability", "accessibility", "portfolio",
    "aesthetic", "style", "trend", "concept", "storyboard", "drawing", "paint",
];

const MARKETING_SALES: &[&str] = &[
    "marketing", "marketer", "sales", "selling", "salesperson", "advertising", "ads", "campaign",
    "digital", "social", "media", "content", "seo", "sem", "ppc", "google", "facebook",
    "instagram", "linkedin", "twitter", "tiktok", "influencer", "email", "newsletter", "hubspot",
    "salesforce", "crm", "lead", "leads", "generation", "conversion", "funnel", "prospect",
    "prospecting", "cold", "calling", "outreach", "pitch", "presentation", "demo", "negotiation",
    "closing", "quota", "target", "revenue", "growth", "acquisition", "retention", "loyalty",
    "awareness", "engagement", "roi", "budget", "strategy", "planning", "market", "competitor",
    "pricing", "promotion", "pr", "public", "relations", "communications", "copywriting", "copy",
    "headline", "cta", "affiliate", "partnership", "b2b", "b2c", "ecommerce", "retail",
];

const HEALTHCARE: &[&str] = &[
    "healthcare", "health", "medical", "medicine", "clinical", "patient", "care", "nursing",
    "nurse", "rn", "lpn", "cna", "doctor", "physician", "surgeon", "surgery", "diagnosis",
    "treatment", "therapy", "therapist", "physical", "occupational", "speech", "respiratory",
    "pharmacy", "pharmacist", "pharmaceutical", "drug", "medication", "prescription", "hospital",
    "clinic", "emergency", "icu", "lab", "laboratory", "technician", "radiology", "xray", "mri",
    "ultrasound", "imaging", "pathology", "anatomy", "physiology", "cardiology", "neurology",
    "oncology", "pediatrics", "geriatrics", "psychiatry", "psychology", "mental", "dental",
    "dentist", "hygienist", "orthodontist", "optometry", "optometrist", "hearing", "audiology",
    "emt", "paramedic", "firstaid", "cpr", "hipaa", "ehr", "emr", "epic", "charting", "vitals",
    "insurance", "billing", "icd", "cpt",
];

const FINANCE_ACCOUNTING: &[&str] = &[
    "finance", "financial", "accounting", "accountant", "cpa", "bookkeeping", "bookkeeper",
    "audit", "auditor", "tax", "taxes", "taxation", "budget", "budgeting", "forecast",
    "investment", "investing", "investor", "banking", "bank", "loan", "credit", "debt", "equity",
    "stock", "stocks", "bond", "bonds", "portfolio", "asset", "liability", "balance", "sheet",
    "income", "statement", "cashflow", "expense", "profit", "loss", "margin", "gaap", "ifrs",
    "quickbooks", "sage", "sap", "oracle", "erp", "payroll", "ap", "ar", "receivable", "payable",
    "reconciliation", "journal", "ledger", "entries", "depreciation", "amortization", "accrual",
    "compliance", "regulatory", "sec", "sox", "risk", "underwriting", "actuary", "wealth",
    "management", "advisory", "cfp", "cfa", "series", "trading", "trader", "fintech", "blockchain",
    "crypto",
];

const EDUCATION_TRAINING: &[&str] = &[
    "education", "teaching", "teacher", "instructor", "professor", "tutor", "tutoring",
    "curriculum", "lesson", "plan", "classroom", "student", "students", "learning", "training",
    "trainer", "development", "instructional", "elearning", "online", "course", "courses",
    "workshop", "seminar", "lecture", "assessment", "grading", "evaluation", "feedback",
    "coaching", "coach", "mentoring", "mentor", "counseling", "counselor", "guidance", "academic",
    "school", "college", "university", "k12", "elementary", "middle", "high", "preschool", "early",
    "childhood", "special", "needs", "esl", "english", "language", "math", "science", "history",
    "reading", "writing", "literacy", "stem", "steam", "certification", "credential", "degree",
    "masters", "phd", "scholarship", "grant", "lms", "canvas", "blackboard", "moodle", "zoom",
    "virtual", "hybrid", "remote",
];

const CONSTRUCTION_TRADES: &[&str] = &[
    "construction", "building", "builder", "contractor", "subcontractor", "carpenter", "carpentry",
    "electrician", "electrical", "plumber", "plumbing", "hvac", "heating", "cooling",
    "ventilation", "welding", "welder", "masonry", "mason", "concrete", "roofing", "roofer",
    "framing", "drywall", "painting", "painter", "flooring", "tile", "cabinet", "millwork",
    "renovation", "remodel", "remodeling", "repair", "maintenance", "handyman", "inspector",
    "inspection", "blueprint", "plans", "permits", "code", "safety", "osha", "tools", "power",
    "hand", "equipment", "heavy", "machinery", "crane", "forklift", "excavator", "bulldozer",
    "commercial", "residential", "industrial", "infrastructure", "civil", "structural",
    "mechanical", "project", "estimating", "estimator", "bidding", "scheduling", "site",
    "supervisor", "foreman", "apprentice", "journeyman", "master", "licensed", "bonded", "insured",
    "union", "trade", "skilled", "labor",
];

const CUSTOMER_SERVICE: &[&str] = &[
    "customer", "service", "support", "representative", "rep", "agent", "specialist", "associate",
    "help", "desk", "helpdesk", "call", "center", "phone", "chat", "ticket", "tickets",
    "ticketing", "zendesk", "freshdesk", "intercom", "communication", "communicating", "listening",
    "empathy", "patience", "problem", "solving", "resolution", "escalation", "complaint",
    "complaints", "satisfaction", "nps", "csat", "relationship", "client", "clients", "account",
    "onboarding", "documentation", "knowledge", "base", "faq", "troubleshooting", "technical",
    "returns", "refunds", "shipping", "order", "orders", "inquiry", "inquiries", "followup",
    "response", "time", "quality", "assurance", "qa", "monitoring", "performance",
];

const HUMAN_RESOURCES: &[&str] = &[
    "hr", "human", "resources", "recruiting", "recruiter", "recruitment", "talent", "hiring",
    "interview", "interviewing", "screening", "sourcing", "candidate", "candidates", "applicant",
    "ats", "workday", "greenhouse", "lever", "job", "posting", "description", "offer",
    "orientation", "performance", "review", "compensation", "benefits", "salary", "bonus",
    "insurance", "retirement", "401k", "pto", "leave", "policy", "policies", "handbook", "labor",
    "law", "eeoc", "ada", "fmla", "employee", "engagement", "culture", "diversity", "inclusion",
    "dei", "wellness", "workers", "comp", "termination", "offboarding", "exit", "hris",
    "organizational", "change",
];

const OPERATIONS_LOGISTICS: &[&str] = &[
    "operations", "logistics", "supply", "chain", "procurement", "purchasing", "vendor",
    "supplier", "inventory", "warehouse", "warehousing", "distribution", "fulfillment", "shipping",
    "receiving", "freight", "transportation", "trucking", "driver", "cdl", "delivery", "routing",
    "tracking", "customs", "import", "export", "international", "global", "manufacturing",
    "production", "assembly", "quality", "control", "qc", "lean", "six", "sigma", "kaizen",
    "continuous", "improvement", "efficiency", "optimization", "capacity", "demand", "scheduling",
    "coordination", "wms", "tms", "rfid", "barcode", "scanning", "picking", "packing", "loading",
    "unloading", "pallet", "dock", "fleet", "cost", "reduction",
];

const LEGAL: &[&str] = &[
    "legal", "law", "lawyer", "attorney", "paralegal", "litigation", "litigator", "corporate",
    "contract", "contracts", "agreement", "negotiation", "drafting", "regulatory", "regulation",
    "governance", "audit", "investigation", "discovery", "brief", "filing", "court", "trial",
    "deposition", "settlement", "mediation", "arbitration", "intellectual", "property", "ip",
    "patent", "trademark", "copyright", "employment", "immigration", "bankruptcy", "criminal",
    "family", "environmental", "privacy", "gdpr", "ccpa", "aml", "kyc", "ethics", "responsibility",
    "bar", "jd", "llm", "westlaw", "lexisnexis", "clio", "document", "timekeeping",
];

const ADMINISTRATIVE: &[&str] = &[
    "administrative", "admin", "assistant", "secretary", "receptionist", "office", "manager",
    "coordinator", "executive", "ea", "calendar", "meeting", "meetings", "travel", "arrangements",
    "booking", "reports", "invoicing", "organization", "organizing", "correspondence", "phone",
    "calls", "greeting", "visitors", "supplies", "ordering", "facilities", "data", "entry",
    "typing", "word", "processing", "microsoft", "excel", "powerpoint", "outlook", "docs",
    "sheets", "slides", "teams", "slack", "multitasking", "prioritization", "time", "detail",
    "oriented", "professional", "confidential", "discretion", "clerical", "records",
];

const PROJECT_MANAGEMENT: &[&str] = &[
    "project", "manager", "pm", "pmp", "kanban", "waterfall", "methodology", "sprint", "backlog",
    "roadmap", "execution", "controlling", "scope", "timeline", "schedule", "resource",
    "allocation", "mitigation", "stakeholder", "status", "milestone", "deliverable", "dependency",
    "critical", "path", "gantt", "chart", "asana", "trello", "monday", "basecamp", "smartsheet",
    "ms", "product", "owner", "po", "requirements", "story", "stories", "acceptance", "criteria",
    "mvp", "launch", "release", "iteration", "retrospective", "standup", "daily", "cross",
    "leadership",
];

const WRITING_CONTENT: &[&str] = &[
    "writing", "writer", "content", "copywriting", "copywriter", "editor", "proofreading",
    "proofreader", "author", "journalist", "journalism", "reporter", "blog", "blogger", "blogging",
    "article", "articles", "post", "posts", "caption", "script", "scriptwriting", "screenplay",
    "documentation", "manual", "instructions", "proposal", "academic", "essay", "paper", "thesis",
    "dissertation", "fiction", "nonfiction", "storytelling", "narrative", "ghostwriting",
    "ghostwriter", "keywords", "cms", "wordpress", "drupal", "medium", "substack", "grammar", "ap",
    "chicago", "mla", "apa", "tone", "voice", "audience", "publishing", "publication", "magazine",
    "newspaper", "book", "ebook", "press",
];

const ENGINEERING: &[&str] = &[
    "mechanical", "civil", "structural", "chemical", "aerospace", "automotive", "biomedical",
    "petroleum", "nuclear", "materials", "cad", "autocad", "solidworks", "catia", "inventor",
    "revit", "bim", "simulation", "fea", "cfd", "matlab", "ansys", "prototype", "process",
    "standards", "specifications", "regulations", "codes", "technical", "drawing", "schematic",
    "circuit", "pcb", "plc", "robotics", "controls", "instrumentation", "reliability", "pe", "eit",
    "fe", "physics", "calculus", "thermodynamics", "mechanics", "dynamics", "statics", "fluids",
];

const HOSPITALITY: &[&str] = &[
    "hospitality", "hotel", "resort", "lodging", "front", "concierge", "guest", "services",
    "housekeeping", "housekeeper", "bellhop", "valet", "restaurant", "food", "server", "waiter",
    "waitress", "bartender", "barista", "host", "hostess", "busser", "dishwasher", "cook", "chef",
    "sous", "line", "prep", "kitchen", "culinary", "catering", "caterer", "banquet", "event",
    "events", "planner", "venue", "wedding", "conference", "casino", "gaming", "cruise", "airline",
    "flight", "attendant", "tourism", "tour", "reservation", "menu", "wine", "sommelier",
    "mixology", "cocktail", "servsafe", "sanitation", "pos", "toast", "opentable", "tips",
    "gratuity",
];

const SECURITY: &[&str] = &[
    "security", "guard", "officer", "patrol", "surveillance", "cctv", "camera", "alarm", "access",
    "badge", "checkpoint", "investigator", "detective", "forensic", "evidence", "incident",
    "emergency", "crisis", "protection", "loss", "prevention", "lp", "assessment", "threat",
    "vulnerability", "cybersecurity", "cyber", "infosec", "firewall", "penetration", "soc", "siem",
    "police", "sheriff", "deputy", "corrections", "correctional", "probation", "parole", "federal",
    "fbi", "dea", "atf", "tsa", "border", "military", "veteran", "armed", "unarmed", "cpl",
    "first", "aid",
];

const TRANSPORTATION: &[&str] = &[
    "transportation", "transport", "truck", "trucker", "courier", "dispatch", "dispatcher",
    "route", "navigation", "gps", "vehicle", "dot", "fmcsa", "hours", "hos", "eld", "logbook",
    "hazmat", "tanker", "flatbed", "reefer", "ltl", "ftl", "jack", "bus", "transit", "passenger",
    "uber", "lyft", "rideshare", "taxi", "limousine", "chauffeur", "pilot", "aviation", "captain",
    "copilot", "ground", "crew", "mechanic", "railroad", "train", "conductor", "maritime", "ship",
    "deckhand", "regulations", "endorsement", "clean", "record", "background",
];

const REAL_ESTATE: &[&str] = &[
    "real", "realtor", "broker", "brokerage", "property", "properties", "residential",
    "commercial", "land", "buying", "listing", "mls", "showing", "open", "house", "escrow",
    "title", "deed", "mortgage", "financing", "preapproval", "appraisal", "appraiser", "home",
    "condo", "townhouse", "apartment", "rental", "lease", "leasing", "tenant", "landlord", "flip",
    "flipping", "cap", "rate", "cash", "flow", "appreciation", "cma", "zoning", "staging",
    "networking", "referral", "commission", "continuing",
];

const SCIENCE_RESEARCH: &[&str] = &[
    "scientist", "researcher", "experiment", "experimental", "theory", "collection", "methodology",
    "protocol", "procedure", "observation", "measurement", "instrument", "sample", "specimen",
    "culture", "cell", "molecular", "biology", "biologist", "chemistry", "chemist", "physicist",
    "biochemistry", "microbiology", "genetics", "genomics", "biotechnology", "clinical", "fda",
    "gmp", "glp", "journal", "peer", "funding", "nih", "nsf", "postdoc", "computational",
    "environmental", "ecology", "conservation", "marine", "geology", "astronomy", "space",
    "nanotechnology",
];

const GENERAL_SKILLS: &[&str] = &[
    "verbal", "interpersonal", "teamwork", "collaboration", "collaborative", "leader", "leading",
    "supervising", "delegation", "motivating", "thinking", "strategic", "adaptability",
    "flexibility", "resilience", "stress", "attention", "accuracy", "precision", "initiative",
    "proactive", "self", "starter", "motivated", "independent", "autonomous", "reliable",
    "dependable", "punctual", "professionalism", "ethical", "integrity", "honest", "trustworthy",
    "discrete", "innovative", "resourceful", "bilingual", "multilingual", "spanish", "french",
    "chinese", "mandarin", "german", "japanese", "korean", "arabic", "portuguese", "russian",
    "hindi",
];
