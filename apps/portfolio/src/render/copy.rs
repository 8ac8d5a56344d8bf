//! Fixed marketing copy. Not data-driven: the hero, stat tiles, About tab and
//! footer read the same on every render.

pub struct StatTile {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Hero {
    pub kicker: &'static str,
    pub title: &'static str,
    pub title_accent: &'static str,
    pub body: &'static str,
    pub tags: [&'static str; 5],
}

pub struct Interest {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub struct About {
    pub paragraphs: [&'static str; 4],
    pub career_focus: &'static str,
    pub interests: [Interest; 4],
}

pub struct Footer {
    pub heading: &'static str,
    pub body: &'static str,
}

pub static HERO: Hero = Hero {
    kicker: "SENIOR DATA ANALYST • FULL-STACK DEVELOPER",
    title: "Building Intelligent",
    title_accent: "Data Solutions.",
    body: "Transforming complex data into actionable insights with 8+ years of expertise in \
        analytics, machine learning, and full-stack development. Specialized in creating \
        production-grade AI-enabled solutions that drive measurable business value.",
    tags: ["Python", "SQL", "Machine Learning", "Power BI", "PHP"],
};

pub static STATS: [StatTile; 4] = [
    StatTile {
        value: "8+",
        label: "YEARS EXPERIENCE",
    },
    StatTile {
        value: "5",
        label: "COMPANIES",
    },
    StatTile {
        value: "15+",
        label: "TECH SKILLS",
    },
    StatTile {
        value: "100%",
        label: "DEDICATION",
    },
];

pub static ABOUT: About = About {
    paragraphs: [
        "I am a Senior Data Analyst and Full-Stack Web Developer with over 8 years of hands-on \
         experience delivering production-grade analytics platforms and ML/AI-enabled solutions. I \
         have deep expertise in Python, SQL, PHP, Power BI, Excel, and JavaScript, with a strong \
         background in data modeling, feature engineering, dashboarding, and automation.",
        "Throughout my career, I have proven my ability to translate business requirements into \
         scalable data products and intelligent web applications, leading projects end-to-end from \
         architecture to deployment. I have worked across various industries and roles, including \
         Data Analytics & Business Intelligence, Web Development, and Operations.",
        "Currently, I am pursuing a Professional Master's Program in Artificial Intelligence, where \
         I am strengthening my expertise in machine learning, feature engineering, and applied AI \
         systems. My recent projects include fraud detection and supply chain performance \
         prediction, where I applied classification models and evaluation techniques to solve \
         real-world business problems.",
        "What sets me apart is my ability to take ownership of projects end-to-end, from \
         understanding business requirements and designing data architectures to implementing \
         analytical models and deploying usable solutions. I am highly analytical, detail-oriented, \
         and driven by continuous learning, with a strong interest in building intelligent systems \
         that create tangible value.",
    ],
    career_focus: "Actively pursuing roles in AI Engineering, Data Science, and \
        Machine Learning Engineering where I can leverage my unique combination of analytics \
        expertise and full-stack development skills to build intelligent, production-ready solutions.",
    interests: [
        Interest {
            icon: "📚",
            title: "Reading & Self-Learning",
            text: "Technology, Business, Personal Development",
        },
        Interest {
            icon: "🤖",
            title: "AI & ML Research",
            text: "Staying updated with latest trends",
        },
        Interest {
            icon: "💻",
            title: "Coding Projects",
            text: "Building practical solutions",
        },
        Interest {
            icon: "🌍",
            title: "Languages",
            text: "Learning Italian (currently B2 level)",
        },
    ],
};

pub static FOOTER: Footer = Footer {
    heading: "Let's Connect",
    body: "I'm always open to discussing new opportunities, collaborations, or innovative projects",
};
