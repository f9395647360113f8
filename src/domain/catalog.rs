//! Fixed option lists offered by the wizard steps.
//!
//! Records store the `id` of the chosen entry; the titles are what the terminal
//! menus show and what the prompt assembler renders.

use super::record::Complexity;

/// A selectable option with a stable identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const fn entry(id: &'static str, title: &'static str, description: &'static str) -> CatalogEntry {
    CatalogEntry {
        id,
        title,
        description,
    }
}

/// Project types carry the complexity and effort estimate applied on selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectType {
    pub entry: CatalogEntry,
    pub complexity: Complexity,
    pub estimated_hours: &'static str,
}

/// Named palettes; choosing one overwrites the primary and secondary colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub entry: CatalogEntry,
    pub primary: &'static str,
    pub secondary: &'static str,
}

pub const PROJECT_TYPES: &[ProjectType] = &[
    ProjectType {
        entry: entry(
            "web-app",
            "Web Application",
            "Interactive web-based applications with modern UI/UX",
        ),
        complexity: Complexity::Moderate,
        estimated_hours: "200-500",
    },
    ProjectType {
        entry: entry(
            "mobile-app",
            "Mobile Application",
            "Native or cross-platform mobile applications",
        ),
        complexity: Complexity::Complex,
        estimated_hours: "300-800",
    },
    ProjectType {
        entry: entry(
            "api-service",
            "API Service",
            "Backend services, REST APIs, and microservices",
        ),
        complexity: Complexity::Moderate,
        estimated_hours: "150-400",
    },
    ProjectType {
        entry: entry(
            "landing-page",
            "Landing Page",
            "Marketing pages, portfolios, and static websites",
        ),
        complexity: Complexity::Simple,
        estimated_hours: "40-120",
    },
    ProjectType {
        entry: entry(
            "dashboard",
            "Dashboard",
            "Admin panels, analytics dashboards, and data visualization",
        ),
        complexity: Complexity::Complex,
        estimated_hours: "250-600",
    },
    ProjectType {
        entry: entry(
            "ecommerce",
            "E-commerce Store",
            "Online stores with payment processing and inventory",
        ),
        complexity: Complexity::Complex,
        estimated_hours: "400-1000",
    },
    ProjectType {
        entry: entry("other", "Other", "Custom projects and unique requirements"),
        complexity: Complexity::Moderate,
        estimated_hours: "Variable",
    },
];

pub const TIMELINES: &[CatalogEntry] = &[
    entry("1-2 weeks", "1-2 weeks", ""),
    entry("1 month", "1 month", ""),
    entry("2-3 months", "2-3 months", ""),
    entry("3-6 months", "3-6 months", ""),
    entry("6+ months", "6+ months", ""),
    entry("flexible", "Flexible", ""),
];

pub const BUDGETS: &[CatalogEntry] = &[
    entry("under-5k", "Under $5,000", ""),
    entry("5k-15k", "$5,000 - $15,000", ""),
    entry("15k-50k", "$15,000 - $50,000", ""),
    entry("50k-100k", "$50,000 - $100,000", ""),
    entry("100k+", "$100,000+", ""),
    entry("not-specified", "Not specified", ""),
];

pub const COMPLEXITY_LEVELS: &[CatalogEntry] = &[
    entry("simple", "Simple", "1-2 developers"),
    entry("moderate", "Moderate", "2-4 developers"),
    entry("complex", "Complex", "4-8 developers"),
    entry("enterprise", "Enterprise", "4-8 developers"),
];

pub const TECH_STACKS: &[CatalogEntry] = &[
    entry(
        "react-node",
        "React + Node.js",
        "Modern full-stack JavaScript with React frontend and Node.js backend",
    ),
    entry(
        "nextjs",
        "Next.js",
        "Full-stack React framework with SSR, API routes, and deployment optimization",
    ),
    entry(
        "vue-nuxt",
        "Vue.js + Nuxt",
        "Progressive Vue.js framework with server-side rendering",
    ),
    entry(
        "python-django",
        "Python + Django",
        "Robust backend framework with admin interface and ORM",
    ),
    entry(
        "python-fastapi",
        "Python + FastAPI",
        "Modern, fast API framework with automatic documentation",
    ),
    entry(
        "php-laravel",
        "PHP + Laravel",
        "Elegant PHP framework with built-in features and ecosystem",
    ),
    entry(
        "ruby-rails",
        "Ruby on Rails",
        "Convention over configuration web framework",
    ),
    entry(
        "custom",
        "Custom Stack",
        "Specify your own technology preferences",
    ),
];

pub const DEPLOYMENTS: &[CatalogEntry] = &[
    entry(
        "vercel",
        "Vercel",
        "Optimized for frontend frameworks with global CDN",
    ),
    entry(
        "netlify",
        "Netlify",
        "JAMstack platform with continuous deployment",
    ),
    entry(
        "aws",
        "AWS",
        "Comprehensive cloud platform with scalable services",
    ),
    entry(
        "gcp",
        "Google Cloud",
        "Google's cloud platform with AI/ML capabilities",
    ),
    entry("azure", "Microsoft Azure", "Enterprise-grade cloud platform"),
    entry(
        "heroku",
        "Heroku",
        "Simple platform-as-a-service for quick deployment",
    ),
];

pub const DESIGN_STYLES: &[CatalogEntry] = &[
    entry(
        "modern",
        "Modern & Clean",
        "Minimalist design with clean lines and plenty of whitespace",
    ),
    entry(
        "glassmorphism",
        "Glassmorphism",
        "Frosted glass effect with transparency and blur",
    ),
    entry(
        "neumorphism",
        "Neumorphism",
        "Soft, extruded plastic look with subtle shadows",
    ),
    entry("dark", "Dark Theme", "Dark backgrounds with bright accents"),
    entry(
        "colorful",
        "Colorful & Vibrant",
        "Bold colors and gradients with high energy",
    ),
    entry(
        "professional",
        "Professional",
        "Corporate and business-focused design",
    ),
];

pub const COLOR_SCHEMES: &[ColorScheme] = &[
    ColorScheme {
        entry: entry("blue-purple", "Blue & Purple", ""),
        primary: "#3b82f6",
        secondary: "#8b5cf6",
    },
    ColorScheme {
        entry: entry("green-teal", "Green & Teal", ""),
        primary: "#10b981",
        secondary: "#06b6d4",
    },
    ColorScheme {
        entry: entry("orange-red", "Orange & Red", ""),
        primary: "#f97316",
        secondary: "#ef4444",
    },
    ColorScheme {
        entry: entry("pink-purple", "Pink & Purple", ""),
        primary: "#ec4899",
        secondary: "#a855f7",
    },
    ColorScheme {
        entry: entry("indigo-blue", "Indigo & Blue", ""),
        primary: "#6366f1",
        secondary: "#3b82f6",
    },
    ColorScheme {
        entry: entry("custom", "Custom Colors", "Pick your own hex values"),
        primary: "#3b82f6",
        secondary: "#8b5cf6",
    },
];

pub const TYPOGRAPHY: &[CatalogEntry] = &[
    entry("inter", "Inter", "Modern, clean sans-serif"),
    entry("roboto", "Roboto", "Google's friendly sans-serif"),
    entry("poppins", "Poppins", "Geometric sans-serif"),
    entry("montserrat", "Montserrat", "Urban inspired font"),
    entry("playfair", "Playfair Display", "Elegant serif font"),
    entry("custom", "Custom Font", "Specify your own font"),
];

pub const ANIMATION_STYLES: &[CatalogEntry] = &[
    entry("subtle", "Subtle", "Minimal animations and transitions"),
    entry(
        "smooth",
        "Smooth",
        "Fluid transitions and micro-interactions",
    ),
    entry("dynamic", "Dynamic", "Engaging animations and effects"),
    entry("none", "No Animations", "Static design without animations"),
];

pub const TONES: &[CatalogEntry] = &[
    entry(
        "professional",
        "Professional",
        "Formal, authoritative, and business-focused",
    ),
    entry(
        "friendly",
        "Friendly",
        "Warm, approachable, and conversational",
    ),
    entry("casual", "Casual", "Relaxed, informal, and easy-going"),
    entry(
        "authoritative",
        "Authoritative",
        "Expert, confident, and trustworthy",
    ),
    entry("playful", "Playful", "Fun, creative, and engaging"),
    entry("minimalist", "Minimalist", "Clean, simple, and to-the-point"),
];

pub const VOICES: &[CatalogEntry] = &[
    entry(
        "brand-focused",
        "Brand-Focused",
        "Emphasizes brand values and personality",
    ),
    entry(
        "user-centric",
        "User-Centric",
        "Focuses on user needs and benefits",
    ),
    entry(
        "solution-oriented",
        "Solution-Oriented",
        "Problem-solving and results-driven",
    ),
    entry(
        "educational",
        "Educational",
        "Informative and knowledge-sharing",
    ),
    entry("inspirational", "Inspirational", "Motivating and empowering"),
    entry("technical", "Technical", "Detailed and specification-focused"),
];

pub const CONTENT_TYPES: &[CatalogEntry] = &[
    entry("landing-pages", "Landing Pages", ""),
    entry("product-descriptions", "Product Descriptions", ""),
    entry("blog-posts", "Blog Posts", ""),
    entry("user-guides", "User Guides", ""),
    entry("marketing-copy", "Marketing Copy", ""),
    entry("technical-docs", "Technical Documentation", ""),
    entry("social-media", "Social Media Content", ""),
    entry("email-templates", "Email Templates", ""),
];

pub const EMAIL_PROVIDERS: &[CatalogEntry] = &[
    entry("sendgrid", "SendGrid", ""),
    entry("mailgun", "Mailgun", ""),
    entry("ses", "Amazon SES", ""),
    entry("gmail", "Gmail SMTP", ""),
    entry("outlook", "Outlook SMTP", ""),
];

pub const AUTORESPONDER_PROVIDERS: &[CatalogEntry] = &[
    entry("mailchimp", "Mailchimp", ""),
    entry("convertkit", "ConvertKit", ""),
    entry("activecampaign", "ActiveCampaign", ""),
    entry("aweber", "AWeber", ""),
    entry("getresponse", "GetResponse", ""),
];

pub const CURRENCIES: &[CatalogEntry] = &[
    entry("USD", "USD - US Dollar", ""),
    entry("EUR", "EUR - Euro", ""),
    entry("GBP", "GBP - British Pound", ""),
    entry("CAD", "CAD - Canadian Dollar", ""),
    entry("AUD", "AUD - Australian Dollar", ""),
];

pub fn project_type(id: &str) -> Option<&'static ProjectType> {
    PROJECT_TYPES.iter().find(|candidate| candidate.entry.id == id)
}

pub fn color_scheme(id: &str) -> Option<&'static ColorScheme> {
    COLOR_SCHEMES.iter().find(|candidate| candidate.entry.id == id)
}

pub fn project_type_entries() -> Vec<CatalogEntry> {
    PROJECT_TYPES.iter().map(|kind| kind.entry).collect()
}

pub fn color_scheme_entries() -> Vec<CatalogEntry> {
    COLOR_SCHEMES.iter().map(|scheme| scheme.entry).collect()
}

/// Title for `id` within `entries`, if the id is known.
pub fn title_for(entries: &[CatalogEntry], id: &str) -> Option<&'static str> {
    entries
        .iter()
        .find(|candidate| candidate.id == id)
        .map(|candidate| candidate.title)
}

/// Title for `id`, falling back to the raw id so imported values still render.
pub fn display_title(entries: &[CatalogEntry], id: &str) -> String {
    title_for(entries, id)
        .map(str::to_string)
        .unwrap_or_else(|| id.to_string())
}
