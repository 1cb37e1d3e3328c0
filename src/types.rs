//! Record types behind every page.
//!
//! All records borrow `'static` data: the datasets in [`crate::content`] are
//! constants compiled into the binary and never change for the process
//! lifetime, so there is nothing to own or clone.

/// Symbolic icon for a navigation entry.
///
/// Each icon renders as a single glyph; pages load no icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    User,
    Briefcase,
    Trophy,
    Code,
    Envelope,
}

impl NavIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            NavIcon::Home => "⌂",
            NavIcon::User => "☺",
            NavIcon::Briefcase => "▣",
            NavIcon::Trophy => "★",
            NavIcon::Code => "‹›",
            NavIcon::Envelope => "✉",
        }
    }
}

/// One entry of the sidebar navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
    pub label: &'static str,
}

/// How a project card's cover is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cover {
    /// One or more emoji glyphs shown large.
    Emoji(&'static str),
    /// URL path of an image under the asset root (`/assets/...`).
    Image(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Display order is array order.
    pub tech_stack: &'static [&'static str],
    pub github_link: Option<&'static str>,
    pub demo_link: Option<&'static str>,
    pub cover: Cover,
    /// In-progress projects never render active links, even when the link
    /// fields are populated.
    pub in_progress: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceRecord {
    pub id: u32,
    /// URL path of the organization logo under the asset root.
    pub logo: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    /// Free text, not machine-ordered ("November 2024").
    pub duration: &'static str,
    pub description: &'static str,
    /// Never empty.
    pub key_points: &'static [&'static str],
    /// May be empty, in which case no tag row is rendered.
    pub tech_stack: &'static [&'static str],
    pub github_link: Option<&'static str>,
    /// Only rendered alongside a GitHub link.
    pub demo_link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillRecord {
    pub name: &'static str,
    /// Free text ("4 years", "6 months").
    pub years: &'static str,
    pub context: &'static str,
}

/// The four fixed skill groupings, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    ProgrammingLanguages,
    Frameworks,
    Tools,
    Design,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::ProgrammingLanguages,
        SkillCategory::Frameworks,
        SkillCategory::Tools,
        SkillCategory::Design,
    ];

    /// Stable key, used as the `data-category` attribute.
    pub fn key(self) -> &'static str {
        match self {
            SkillCategory::ProgrammingLanguages => "programmingLanguages",
            SkillCategory::Frameworks => "frameworks",
            SkillCategory::Tools => "tools",
            SkillCategory::Design => "design",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SkillCategory::ProgrammingLanguages => "Programming Languages",
            SkillCategory::Frameworks => "Frameworks & Libraries",
            SkillCategory::Tools => "Tools & Technologies",
            SkillCategory::Design => "Software Design & Architecture",
        }
    }
}

/// A category and its ordered skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: &'static [SkillRecord],
}

/// Fixed outbound links shown in the sidebar and on the contact page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileLinks {
    pub name: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub resume: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub graduation: &'static str,
    pub coursework: &'static [&'static str],
}

/// A titled tag row in the About page's skills snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillSnapshot {
    pub title: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interest {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}
