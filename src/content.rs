//! Content datasets.
//!
//! Every list here is rendered in array order: insertion order is display
//! order and nothing downstream sorts. Edit these constants to change the
//! site; `portfolio check` verifies the invariants (unique ids and paths,
//! referenced assets present).

use crate::types::{
    Cover, Education, ExperienceRecord, Interest, NavIcon, NavItem, ProfileLinks, ProjectRecord,
    SkillCategory, SkillGroup, SkillRecord, SkillSnapshot,
};

pub const PROFILE: ProfileLinks = ProfileLinks {
    name: "Sansar Sharma",
    initials: "SS",
    headline: "Computer Engineering Student",
    tagline: "Toronto Metropolitan University | Expected Graduation April 2028",
    email: "sansar.sharmaa@gmail.com",
    github: "https://github.com/SansarSharma",
    linkedin: "https://www.linkedin.com/in/sansar-sharma-62299929b/",
    resume: "https://drive.google.com/file/d/13TD_p_4hm-SvztrZv0B3H4zGVwUjscCt/view?usp=sharing",
};

pub static NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        id: "home",
        path: "/",
        icon: NavIcon::Home,
        label: "Home",
    },
    NavItem {
        id: "about",
        path: "/about",
        icon: NavIcon::User,
        label: "About",
    },
    NavItem {
        id: "projects",
        path: "/projects",
        icon: NavIcon::Briefcase,
        label: "Projects",
    },
    NavItem {
        id: "experience",
        path: "/experience",
        icon: NavIcon::Trophy,
        label: "Experience",
    },
    NavItem {
        id: "skills",
        path: "/skills",
        icon: NavIcon::Code,
        label: "Skills",
    },
    NavItem {
        id: "contact",
        path: "/contact",
        icon: NavIcon::Envelope,
        label: "Contact",
    },
];

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: 1,
        title: "Statistical Website for Soccer Players",
        description: "Built a Spring Boot + MongoDB web application that analyzed stats for 50+ \
            professional soccer players, scraping data on goals, assists, and trophies. \
            Implemented a custom ranking formula to generate instant player comparisons and \
            performance insights.",
        tech_stack: &[
            "Java",
            "Spring Boot",
            "MongoDB",
            "AWS",
            "JSoup",
            "Maven",
            "OOP",
            "HTML",
            "CSS",
            "MVC",
        ],
        github_link: Some("https://github.com/SansarSharma/SoccerStats"),
        demo_link: None,
        cover: Cover::Emoji("⚽"),
        in_progress: false,
    },
    ProjectRecord {
        id: 2,
        title: "Bookstore Application",
        description: "Built a JavaFX bookstore application with two roles: admin (manage \
            books/customers) and customer (shop, cart, purchases), applying OOP and the State \
            Design Pattern for account status, loyalty points, and access control. Migrated \
            storage from files to MySQL + JDBC architecture.",
        tech_stack: &[
            "Java",
            "JavaFX",
            "MySQL",
            "Maven",
            "JDBC",
            "OOP",
            "Design Patterns",
            "MVC",
            "Inventory Management System",
            "GUI",
            "Refactored Project",
        ],
        github_link: Some("https://github.com/SansarSharma/BookstoreApplication"),
        demo_link: None,
        cover: Cover::Emoji("📚"),
        in_progress: false,
    },
    ProjectRecord {
        id: 3,
        title: "Interactive Rock Paper Scissors Game",
        description: "Refactored a legacy single-file Rock-Paper-Scissors game into a React + \
            Phaser.js application, applying OOP to build 15+ components. Designed a custom \
            Insane Mode featuring trivia mechanics, adaptive sound effects, and real-time HUD \
            animations.",
        tech_stack: &[
            "JavaScript",
            "React.js",
            "Phaser.js",
            "OOP",
            "MVC",
            "GUI",
            "Refactored Project",
        ],
        github_link: Some("https://github.com/SansarSharma/RPS_Remastered"),
        demo_link: None,
        cover: Cover::Emoji("✊📄✂️"),
        in_progress: false,
    },
    ProjectRecord {
        id: 4,
        title: "Money Manager Application",
        description: "Built a Python + PyQt6 personal finance tool supporting Excel file \
            upload/editing and manual expense entry, with categorized budgets (Housing, Food, \
            Subscriptions, etc.), real-time charts, and automatic Excel export on exit. Applied \
            advanced OOP and design patterns for scalability.",
        tech_stack: &[
            "Python",
            "PyQt6",
            "Excel",
            "Pandas",
            "OOP",
            "MVC",
            "GUI",
            "Design Patterns",
        ],
        github_link: Some("https://github.com/SansarSharma/MoneyManager"),
        demo_link: None,
        cover: Cover::Image("/assets/images/moneymanager.png"),
        in_progress: false,
    },
    ProjectRecord {
        id: 5,
        title: "Blackjack",
        description: "Refactored a Java Blackjack game by migrating legacy lab code to a Maven + \
            IntelliJ project, restructuring with OOP principles to mirror real-world Blackjack \
            rules and enable cleaner, maintainable architecture.",
        tech_stack: &["Java", "Maven", "OOP"],
        github_link: Some("https://github.com/SansarSharma/Blackjack"),
        demo_link: None,
        cover: Cover::Emoji("🃏"),
        in_progress: false,
    },
    ProjectRecord {
        id: 6,
        title: "IdeaBoard",
        description: "A full-stack task management application for organizing ideas and \
            projects. Built with Spring Boot backend and React frontend, featuring user \
            authentication, real-time updates, and collaborative features.",
        tech_stack: &["Javascript", "Typescript", "React", "Angular.js"],
        github_link: None,
        demo_link: None,
        cover: Cover::Emoji("💡"),
        in_progress: true,
    },
];

pub const EXPERIENCES: &[ExperienceRecord] = &[
    ExperienceRecord {
        id: 1,
        logo: "/assets/images/BECU.jpg",
        title: "University Competition",
        organization: "Biomedical Engineering Course Union (BECU) Arduino Competition",
        location: "Toronto, Ontario",
        duration: "November 2024",
        description: "Built a CPR feedback system in C with Arduino, programming pressure \
            sensors, buzzer alerts, LCD output, and BPM calculations while rapidly self-learning \
            and applying new libraries.",
        key_points: &[
            "Programmed pressure sensors, buzzer alerts, and LCD output for real-time feedback",
            "Implemented BPM calculations to measure compression rate accuracy",
            "Rapidly self-learned and applied new C libraries during the competition",
            "Taught teammates C and Arduino basics, balancing coding tasks with mentoring",
            "Demonstrated adaptability under time constraints in a competition setting",
        ],
        tech_stack: &[
            "C",
            "Arduino",
            "Embedded Systems",
            "Embedded C",
            "Pressure Sensors",
            "OLED Display",
            "Real Time Feedback",
            "Team Competition",
        ],
        github_link: Some("https://github.com/SansarSharma/Arduino_Competiton"),
        demo_link: Some("https://youtu.be/LKiS1EZJe0A?si=qgP7JQ5hgEGfooj-"),
    },
    ExperienceRecord {
        id: 2,
        logo: "/assets/images/FormulaOneRacing.jpg",
        title: "Electric Powertrain General Member",
        organization: "Toronto Metropolitan Formula Racing Team",
        location: "Toronto, Ontario",
        duration: "September 2023 - December 2023",
        description: "Gained foundational exposure to electric powertrain systems by studying \
            design, testing, and integration processes under team mentorship.",
        key_points: &[
            "Studied electric powertrain system design and architecture",
            "Learned about testing and integration processes for electric vehicles",
            "Collaborated with experienced team members on powertrain development",
            "Gained hands-on exposure to Formula Racing engineering practices",
            "Developed understanding of team-based engineering workflows",
        ],
        tech_stack: &[],
        github_link: None,
        demo_link: None,
    },
];

const PROGRAMMING_LANGUAGES: &[SkillRecord] = &[
    SkillRecord {
        name: "Java",
        years: "4 years",
        context: "Started during highschool, continued through university",
    },
    SkillRecord {
        name: "Python",
        years: "2 years",
        context: "Learned in university for coursework and projects",
    },
    SkillRecord {
        name: "TypeScript",
        years: "1 year",
        context: "Self-taught for full-stack web development",
    },
    SkillRecord {
        name: "JavaScript",
        years: "2 years",
        context: "Learned for web development and interactive projects",
    },
    SkillRecord {
        name: "C",
        years: "2 years",
        context: "University coursework and Arduino projects",
    },
    SkillRecord {
        name: "HTML",
        years: "3 years",
        context: "Self-taught for web development",
    },
    SkillRecord {
        name: "CSS",
        years: "3 years",
        context: "Self-taught for styling web applications",
    },
    SkillRecord {
        name: "VHDL",
        years: "1 year",
        context: "University coursework in digital systems",
    },
];

const FRAMEWORKS: &[SkillRecord] = &[
    SkillRecord {
        name: "Spring Boot",
        years: "1 year",
        context: "Self-taught for building web applications",
    },
    SkillRecord {
        name: "JavaFX",
        years: "1 year",
        context: "University coursework and personal projects",
    },
    SkillRecord {
        name: "React.js",
        years: "1 year",
        context: "Self-taught for modern front-end development",
    },
    SkillRecord {
        name: "Angular.js",
        years: "6 months",
        context: "Explored for front-end development",
    },
    SkillRecord {
        name: "Node.js",
        years: "1 year",
        context: "Self-taught for backend JavaScript development",
    },
    SkillRecord {
        name: "Phaser.js",
        years: "1 year",
        context: "Used for game development projects",
    },
];

const TOOLS: &[SkillRecord] = &[
    SkillRecord {
        name: "GitHub",
        years: "3 years",
        context: "Version control for all projects and collaboration",
    },
    SkillRecord {
        name: "MongoDB",
        years: "1 year",
        context: "NoSQL database for web applications",
    },
    SkillRecord {
        name: "IntelliJ",
        years: "3 years",
        context: "Primary IDE for Java development",
    },
    SkillRecord {
        name: "PyCharm",
        years: "3 years",
        context: "Primary IDE for Python development",
    },
    SkillRecord {
        name: "Visual Studio Code",
        years: "2 years",
        context: "Primary editor for web development",
    },
    SkillRecord {
        name: "MySQL",
        years: "1 year",
        context: "Relational database management and design",
    },
    SkillRecord {
        name: "Microsoft 365",
        years: "3 years",
        context: "Used for university course documentation and productivity",
    },
    SkillRecord {
        name: "MATLAB",
        years: "3 year",
        context: "University coursework for engineering analysis",
    },
];

const DESIGN: &[SkillRecord] = &[
    SkillRecord {
        name: "OOP",
        years: "4 years",
        context: "Started during highschool, continued through university",
    },
    SkillRecord {
        name: "Design Patterns",
        years: "1 year",
        context: "Learned through university, and applied to passion projects",
    },
    SkillRecord {
        name: "MVC",
        years: "3 years",
        context: "Applied across multiple projects to separate concerns and improve scalability \
            and maintainability",
    },
    SkillRecord {
        name: "Database Architecture",
        years: "2 months",
        context: "Learn through university",
    },
];

pub static SKILLS: [SkillGroup; 4] = [
    SkillGroup {
        category: SkillCategory::ProgrammingLanguages,
        skills: PROGRAMMING_LANGUAGES,
    },
    SkillGroup {
        category: SkillCategory::Frameworks,
        skills: FRAMEWORKS,
    },
    SkillGroup {
        category: SkillCategory::Tools,
        skills: TOOLS,
    },
    SkillGroup {
        category: SkillCategory::Design,
        skills: DESIGN,
    },
];

/// Skills of one category, in display order.
pub fn skills_in(category: SkillCategory) -> &'static [SkillRecord] {
    SKILLS
        .iter()
        .find(|g| g.category == category)
        .map(|g| g.skills)
        .unwrap_or(&[])
}

/// About page bio, as markdown.
pub const ABOUT_BIO: &str = "\
## Hi, I'm Sansar! 👋

I'm a Computer Engineering student at Toronto Metropolitan University, pursuing the \
Software Engineering option. I'm passionate about programming, especially when it comes \
to developing creative applications, data-driven software solutions, and exploring how \
technology can make complex systems more efficient and user-friendly.

I chose Computer Engineering because I've always been curious about how hardware and \
software interact to bring ideas to life. From embedded systems to fullstack and \
cloud-based applications I enjoy learning and turning technical concepts into practical \
projects that solve real problems.
";

pub const EDUCATION: Education = Education {
    school: "Toronto Metropolitan University",
    degree: "Bachelor of Engineering – Computer Engineering (Software Option)",
    graduation: "Expected Graduation: April 2028",
    coursework: &[
        "Algorithms and Data Structures",
        "Object-Oriented Analysis and Design",
        "Database Systems I",
        "Software Systems",
        "Digital Systems",
        "Discrete Mathematics for Engineers",
    ],
};

pub const SKILL_SNAPSHOT: &[SkillSnapshot] = &[
    SkillSnapshot {
        title: "Programming Languages",
        tags: &["Java", "Python", "TypeScript", "JavaScript", "C"],
    },
    SkillSnapshot {
        title: "Frameworks & Tools",
        tags: &["Spring Boot", "React.js", "Node.js", "MongoDB", "MySQL"],
    },
    SkillSnapshot {
        title: "Specializations",
        tags: &[
            "Full-Stack Development",
            "Cloud Computing (AWS)",
            "Design Patterns",
        ],
    },
];

pub const INTERESTS: &[Interest] = &[
    Interest {
        icon: "⚽",
        title: "Soccer",
        blurb: "Passionate fan and player. Built a stats website to analyze players across eras!",
    },
    Interest {
        icon: "🌌",
        title: "Astronomy",
        blurb: "Fascinated by space exploration and the cosmos.",
    },
    Interest {
        icon: "🎮",
        title: "Gaming",
        blurb: "Enjoy strategic and creative games. Built a Rock-Paper-Scissors game with custom \
            modes!",
    },
];
