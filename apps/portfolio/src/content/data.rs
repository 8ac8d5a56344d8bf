//! Built-in portfolio dataset. Entries are listed most-recent-first by convention;
//! nothing downstream sorts them.

use super::models::{
    Content, CurrentStudy, EducationEntry, ExperienceEntry, LanguageSkill, Profile, ProjectEntry,
    SkillCategory,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn builtin_content() -> Content {
    Content {
        profile: profile(),
        experience: experience(),
        education: education(),
        skills: skills(),
        projects: projects(),
    }
}

fn profile() -> Profile {
    let languages = [("English", "Fluent"), ("Italian", "B2"), ("Hindi", "Native")]
        .into_iter()
        .map(|(language, level)| LanguageSkill {
            language: language.to_string(),
            level: level.to_string(),
        })
        .collect();

    Profile {
        name: "Raja Roy".to_string(),
        role_title: "AI Engineer & Data Scientist".to_string(),
        email: "rajaroybca6@gmail.com".to_string(),
        phone: "+39 388 381 8145".to_string(),
        location: "Torino, Italy".to_string(),
        languages,
        current_study: Some(CurrentStudy {
            title: "AI Specialist Master's".to_string(),
            institution: "INFOR ELEA Academy".to_string(),
            period: "Oct 2025 - Present".to_string(),
        }),
    }
}

fn experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            company: "Elwood".to_string(),
            location: "Torino, Italy".to_string(),
            role: "Web Developer".to_string(),
            period: "Jun 2025 - Oct 2025".to_string(),
            description: "Developed and maintained full-stack web applications, customized \
                WordPress themes and plugins, built responsive websites using PHP, HTML, CSS, \
                Bootstrap, and JavaScript. Collaborated with designers and clients to deliver \
                high-quality digital solutions."
                .to_string(),
            skills: strings(&["PHP", "WordPress", "JavaScript", "HTML/CSS", "Bootstrap"]),
        },
        ExperienceEntry {
            company: "NETWAY INDIA PVT. LTD".to_string(),
            location: "New Delhi, India".to_string(),
            role: "Data Analytics & Business Intelligence".to_string(),
            period: "May 2019 - May 2023".to_string(),
            description: "Conducted data cleaning, mining, and analysis. Developed interactive \
                dashboards and automated reports using Power BI, Python, SQL, and Excel to enable \
                data-driven business decisions. Led end-to-end analytics projects from \
                requirements gathering to deployment."
                .to_string(),
            skills: strings(&["Python", "SQL", "Power BI", "Excel", "Data Analysis"]),
        },
        ExperienceEntry {
            company: "Global Digital Baba".to_string(),
            location: "Torino, Italy".to_string(),
            role: "Customer Support & Store Operations".to_string(),
            period: "Apr 2024 - Jan 2025".to_string(),
            description: "Assisted customers with product selection, troubleshooting, and \
                after-sales support while managing billing, merchandising, and stock control."
                .to_string(),
            skills: strings(&["Customer Service", "Operations", "Inventory Management"]),
        },
        ExperienceEntry {
            company: "AUTHENZA MEDIA INFOTECH PVT. LTD".to_string(),
            location: "Kolkata, India".to_string(),
            role: "Data Analyst".to_string(),
            period: "Sep 2016 - Feb 2019".to_string(),
            description: "Performed data analysis, visualization, and reporting for business \
                operations while ensuring data integrity and developing dashboards to support \
                management insights."
                .to_string(),
            skills: strings(&["Data Analysis", "SQL", "Excel", "Reporting"]),
        },
    ]
}

fn education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            institution: "INFOR ELEA Smart Business Academy".to_string(),
            title: "Professional Master's in AI (AI Specialist)".to_string(),
            location: "Torino, Italy".to_string(),
            period: "Oct 2025 - Present".to_string(),
            grade: None,
            syllabus: None,
        },
        EducationEntry {
            institution: "Forte Chance ETS".to_string(),
            title: "Web Development Specialization".to_string(),
            location: "Torino, Italy".to_string(),
            period: "Feb 2025 - Aug 2025".to_string(),
            grade: Some("A".to_string()),
            syllabus: Some(
                "PHP, HTML, CSS, Bootstrap, JavaScript, WordPress, SQL, Apache, Cyber Security, \
                 Prompt Engineering"
                    .to_string(),
            ),
        },
        EducationEntry {
            institution: "IGNOU (Indira Gandhi National Open University)".to_string(),
            title: "Bachelor of Computer Application".to_string(),
            location: "New Delhi, India".to_string(),
            period: "2012 - 2015".to_string(),
            grade: Some("B".to_string()),
            syllabus: Some(
                "Information Technology, Data Structures, DBMS, System Analysis, Computer \
                 Networks, Programming"
                    .to_string(),
            ),
        },
    ]
}

fn skills() -> Vec<SkillCategory> {
    let table: [(&str, &[&str]); 6] = [
        (
            "Data Science & AI",
            &["Python", "Machine Learning", "Pandas", "NumPy", "Scikit-learn", "Feature Engineering"],
        ),
        (
            "Data Analytics",
            &["SQL", "Power BI", "Excel (Advanced)", "Data Visualization", "Statistical Analysis"],
        ),
        (
            "Web Development",
            &["PHP", "JavaScript", "HTML/CSS", "Bootstrap", "WordPress", "Django"],
        ),
        ("Databases", &["MySQL", "SQL Server", "Database Design"]),
        ("Tools & DevOps", &["Git", "Apache", "Streamlit", "VS Code", "Linux"]),
        (
            "Soft Skills",
            &["Problem Solving", "Team Collaboration", "Project Management", "Analytical Thinking"],
        ),
    ];

    table
        .into_iter()
        .map(|(name, items)| SkillCategory {
            name: name.to_string(),
            skills: strings(items),
        })
        .collect()
}

fn projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry {
            title: "Fraud Detection & Supply Chain Analytics".to_string(),
            description: "Designed and implemented machine learning models to detect fraudulent \
                transactions and predict on-time versus delayed shipments. Leveraged data \
                preprocessing, feature engineering, and classification techniques (Random Forest, \
                Logistic Regression, XGBoost) to support operational decision-making with 90%+ \
                accuracy."
                .to_string(),
            tags: strings(&["Python", "Scikit-learn", "Pandas", "Feature Engineering"]),
            url: Some("https://logisticmanagement.streamlit.app/".to_string()),
            featured: true,
            highlights: strings(&[
                "Built classification models",
                "Data preprocessing & cleaning",
                "Feature engineering pipeline",
                "Model evaluation & tuning",
                "Business-ready insights",
            ]),
        },
        ProjectEntry {
            title: "Amazon Clone (E-Commerce)".to_string(),
            description: "Full-stack e-commerce platform with user authentication, shopping cart \
                functionality, and payment integration. Built with modern web technologies and \
                responsive design."
                .to_string(),
            tags: strings(&["HTML", "CSS", "JavaScript", "PHP", "SQL"]),
            url: None,
            featured: false,
            highlights: Vec::new(),
        },
        ProjectEntry {
            title: "West Bengal Tourism Portal".to_string(),
            description: "Informational tourism website featuring regional attractions, \
                interactive maps, and booking capabilities. Optimized for performance and SEO."
                .to_string(),
            tags: strings(&["PHP", "Bootstrap", "MySQL", "JavaScript"]),
            url: None,
            featured: false,
            highlights: Vec::new(),
        },
    ]
}
