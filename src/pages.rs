//! Page renderers.
//!
//! Each content route has one renderer, a pure function from its dataset to
//! [`Markup`]. [`Site::render`] is the router shell: it resolves the path,
//! wraps the selected page in the document and navigation shell, and returns
//! the route it picked so callers can set the HTTP status or output file.
//!
//! Lists are folds over the datasets in array order. Records with several
//! presentation branches (project actions, experience links) go through a
//! small view model first so the branching is testable without parsing HTML.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: layout, cards, flip animation (colors injected from config)
//! - `static/contact.js`: disables the submit button while a message is sending

use crate::config::{self, SiteConfig};
use crate::contact::{ContactFlow, Field, SubmissionStatus};
use crate::content::{
    ABOUT_BIO, EDUCATION, EXPERIENCES, INTERESTS, PROFILE, PROJECTS, SKILL_SNAPSHOT, SKILLS,
};
use crate::nav::{NavShell, render_nav};
use crate::route::Route;
use crate::types::{Cover, ExperienceRecord, ProjectRecord, SkillGroup, SkillRecord};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

const CSS_STATIC: &str = include_str!("../static/style.css");
const CONTACT_JS: &str = include_str!("../static/contact.js");

/// Delay between consecutive skill cards in a category.
pub const CARD_STAGGER_MS: u32 = 100;
/// Delay between consecutive skill categories.
pub const CATEGORY_STAGGER_MS: u32 = 200;

/// Everything the renderers need from configuration, prepared once.
#[derive(Debug, Clone)]
pub struct Site {
    title: String,
    css: String,
}

impl Site {
    pub fn new(config: &SiteConfig) -> Self {
        let color_css = config::generate_color_css(&config.colors);
        Self {
            title: config.site.title.clone(),
            css: format!("{}\n\n{}", color_css, CSS_STATIC),
        }
    }

    /// Render the page for `path` with a fresh navigation shell.
    pub fn render(&self, path: &str, contact: &ContactFlow) -> (Route, Markup) {
        let shell = NavShell::new(path);
        let route = Route::resolve(shell.current_path());
        (route, self.render_route(route, &shell, contact))
    }

    pub fn render_route(&self, route: Route, shell: &NavShell, contact: &ContactFlow) -> Markup {
        let content = match route {
            Route::Home => render_home(),
            Route::About => render_about(),
            Route::Projects => render_projects(),
            Route::Experience => render_experience(),
            Route::Skills => render_skills(),
            Route::Contact => render_contact(contact),
            Route::NotFound => render_not_found(shell.current_path()),
        };
        let title = match route {
            Route::Home => self.title.clone(),
            other => format!("{} | {}", other.title(), self.title),
        };
        let script = (route == Route::Contact).then_some(CONTACT_JS);
        base_document(&title, &self.css, script, shell, content)
    }
}

// ============================================================================
// Document shell
// ============================================================================

fn base_document(
    title: &str,
    css: &str,
    script: Option<&str>,
    shell: &NavShell,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                div.app {
                    (render_nav(shell))
                    main.main-content {
                        (content)
                    }
                }
                @if let Some(js) = script {
                    script { (PreEscaped(js)) }
                }
            }
        }
    }
}

fn tech_tags(tags: &[&str]) -> Markup {
    html! {
        div.tech-stack {
            @for tag in tags {
                span.tech-tag { (tag) }
            }
        }
    }
}

// ============================================================================
// Home / About
// ============================================================================

pub fn render_home() -> Markup {
    html! {
        div.page.home-page {
            div.content {
                h1 { "Hi, I'm " (PROFILE.name) }
                h2 { (PROFILE.headline) }
                p { (PROFILE.tagline) }
                div.cta-buttons {
                    a.btn-primary href="/projects" { "View Projects" }
                    a.btn-secondary href="/contact" { "Contact Me" }
                }
            }
        }
    }
}

pub fn render_about() -> Markup {
    let mut bio_html = String::new();
    md_html::push_html(&mut bio_html, Parser::new(ABOUT_BIO));

    html! {
        div.page.about-page {
            div.content {
                h1 { "About Me" }
                div.profile-section {
                    div.profile-image {
                        div.placeholder-avatar { (PROFILE.initials) }
                    }
                    div.profile-bio {
                        (PreEscaped(bio_html))
                    }
                }
                div.section.education-section {
                    h2 { "🎓 Education" }
                    div.education-card {
                        h3 { (EDUCATION.school) }
                        p.degree { (EDUCATION.degree) }
                        p.graduation { (EDUCATION.graduation) }
                        p.coursework {
                            strong { "Relevant Coursework:" }
                            " " (EDUCATION.coursework.join(", "))
                        }
                    }
                }
                div.section.skills-highlight-section {
                    h2 { "💻 Technical Skills Snapshot" }
                    div.skills-grid {
                        @for group in SKILL_SNAPSHOT {
                            div.skill-category {
                                h3 { (group.title) }
                                div.skill-tags {
                                    @for tag in group.tags {
                                        span.skill-tag { (tag) }
                                    }
                                }
                            }
                        }
                    }
                    p.skills-note {
                        "Visit my " a href="/skills" { "Skills page" } " for a complete breakdown!"
                    }
                }
                div.section.interests-section {
                    h2 { "Beyond the Code" }
                    div.interests-grid {
                        @for interest in INTERESTS {
                            div.interest-card {
                                div.interest-icon { (interest.icon) }
                                h3 { (interest.title) }
                                p { (interest.blurb) }
                            }
                        }
                    }
                }
                div.cta-section {
                    p { "Want to see what I've built?" }
                    a.cta-button href="/projects" { "View My Projects" }
                }
            }
        }
    }
}

// ============================================================================
// Projects
// ============================================================================

/// What the action row of a project card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectActions {
    /// A disabled control and no links.
    ComingSoon,
    /// Code and demo buttons; a missing URL renders an inert button.
    Links {
        github: Option<&'static str>,
        demo: Option<&'static str>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: &'static str,
    pub description: &'static str,
    pub cover: Cover,
    pub in_progress: bool,
    pub tags: &'static [&'static str],
    pub actions: ProjectActions,
}

impl From<&ProjectRecord> for ProjectCard {
    fn from(project: &ProjectRecord) -> Self {
        let actions = if project.in_progress {
            ProjectActions::ComingSoon
        } else {
            ProjectActions::Links {
                github: project.github_link,
                demo: project.demo_link,
            }
        };
        Self {
            title: project.title,
            description: project.description,
            cover: project.cover,
            in_progress: project.in_progress,
            tags: project.tech_stack,
            actions,
        }
    }
}

pub fn project_cards(projects: &[ProjectRecord]) -> Vec<ProjectCard> {
    projects.iter().map(ProjectCard::from).collect()
}

pub fn render_project_card(card: &ProjectCard) -> Markup {
    html! {
        div.project-card {
            div.project-cover {
                @match card.cover {
                    Cover::Emoji(glyph) => {
                        div.emoji-cover { (glyph) }
                    }
                    Cover::Image(src) => {
                        img.image-cover src=(src) alt=(card.title) loading="lazy";
                    }
                }
                @if card.in_progress {
                    div.progress-badge { span { "IN PROGRESS" } }
                }
            }
            div.project-info {
                h3.project-title { (card.title) }
                p.project-description { (card.description) }
                (tech_tags(card.tags))
                div.project-actions {
                    @match card.actions {
                        ProjectActions::ComingSoon => {
                            button.btn-disabled type="button" disabled { "Coming Soon" }
                        }
                        ProjectActions::Links { github, demo } => {
                            a.btn-github href=[github] target="_blank" rel="noopener noreferrer"
                                aria-disabled=[github.is_none().then_some("true")] { "View Code" }
                            a.btn-demo href=[demo] target="_blank" rel="noopener noreferrer"
                                aria-disabled=[demo.is_none().then_some("true")] { "Demo (soon)" }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_projects() -> Markup {
    html! {
        div.page.projects-page {
            div.content {
                h1 { "My Projects" }
                div.projects-grid {
                    @for card in project_cards(PROJECTS) {
                        (render_project_card(&card))
                    }
                }
            }
        }
    }
}

// ============================================================================
// Experience
// ============================================================================

/// Links shown under an experience card: none without a GitHub link, and a
/// demo link only next to one.
pub fn experience_links(exp: &ExperienceRecord) -> Option<(&'static str, Option<&'static str>)> {
    exp.github_link.map(|github| (github, exp.demo_link))
}

pub fn render_experience_card(exp: &ExperienceRecord) -> Markup {
    html! {
        div.experience-card {
            div.experience-logo {
                img src=(exp.logo) alt=(exp.organization) loading="lazy";
            }
            div.experience-content {
                div.experience-header {
                    h3.experience-title { (exp.organization) }
                    p.experience-role { (exp.title) }
                    p.experience-duration { (exp.location) " | " (exp.duration) }
                }
                p.experience-description { (exp.description) }
                div.key-points {
                    h4 { "Key Contributions:" }
                    ul {
                        @for point in exp.key_points {
                            li { (point) }
                        }
                    }
                }
                @if !exp.tech_stack.is_empty() {
                    (tech_tags(exp.tech_stack))
                }
                @if let Some((github, demo)) = experience_links(exp) {
                    div.experience-actions {
                        a.btn-github href=(github) target="_blank" rel="noopener noreferrer" { "View Code" }
                        @if let Some(demo) = demo {
                            a.btn-demo href=(demo) target="_blank" rel="noopener noreferrer" { "Demo Video" }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_experience() -> Markup {
    html! {
        div.page.experience-page {
            div.content {
                h1 { "Experience & Activities" }
                div.experiences-container {
                    @for exp in EXPERIENCES {
                        (render_experience_card(exp))
                    }
                }
            }
        }
    }
}

// ============================================================================
// Skills
// ============================================================================

/// Entrance delay of the `index`th card within its category.
pub fn card_delay_ms(index: usize) -> u32 {
    index as u32 * CARD_STAGGER_MS
}

/// Entrance delay of the `index`th category on the page.
pub fn category_delay_ms(index: usize) -> u32 {
    (index as u32 + 1) * CATEGORY_STAGGER_MS
}

fn render_skill_card(skill: &SkillRecord, index: usize) -> Markup {
    html! {
        div.skill-card style={ "animation-delay: " (card_delay_ms(index)) "ms" } tabindex="0" {
            div.card-inner {
                div.card-front {
                    h3 { (skill.name) }
                }
                div.card-back {
                    p.years { (skill.years) }
                    p.context { (skill.context) }
                }
            }
        }
    }
}

fn render_skill_category(group: &SkillGroup, index: usize) -> Markup {
    html! {
        div.skill-category data-category=(group.category.key())
            style={ "animation-delay: " (category_delay_ms(index)) "ms" } {
            h2 { (group.category.title()) }
            div.skills-grid {
                @for (i, skill) in group.skills.iter().enumerate() {
                    (render_skill_card(skill, i))
                }
            }
        }
    }
}

pub fn render_skills() -> Markup {
    html! {
        div.page.skills-page {
            div.content {
                h1 { "Technical Skills" }
                @for (i, group) in SKILLS.iter().enumerate() {
                    (render_skill_category(group, i))
                }
            }
        }
    }
}

// ============================================================================
// Contact
// ============================================================================

fn form_input(field: Field, label: &str, kind: &str, placeholder: &str, flow: &ContactFlow) -> Markup {
    let required = field.is_required();
    html! {
        div.form-group {
            label for=(field.key()) {
                (label) @if required { " *" }
            }
            input type=(kind) id=(field.key()) name=(field.key())
                value=(flow.form.get(field)) placeholder=(placeholder) required[required];
        }
    }
}

pub fn render_contact(flow: &ContactFlow) -> Markup {
    let submitting = flow.is_submitting();
    html! {
        div.page.contact-page {
            div.content {
                h1 { "Get In Touch" }
                div.contact-container {
                    div.contact-info {
                        h2 { "Contact Information" }
                        div.info-item {
                            span.info-icon aria-hidden="true" { "✉" }
                            div {
                                h3 { "Email" }
                                a href={ "mailto:" (PROFILE.email) } { (PROFILE.email) }
                            }
                        }
                        div.social-links {
                            h3 { "Connect With Me" }
                            div.social-icons {
                                a.social-link href=(PROFILE.github) target="_blank" rel="noopener noreferrer" aria-label="GitHub" {
                                    span { "GitHub" }
                                }
                                a.social-link href=(PROFILE.linkedin) target="_blank" rel="noopener noreferrer" aria-label="LinkedIn" {
                                    span { "LinkedIn" }
                                }
                            }
                        }
                        div.resume-download {
                            a.download-btn href=(PROFILE.resume) {
                                span { "Download Resume" }
                            }
                        }
                    }
                    div.contact-form {
                        h2 { "Send Me a Message" }
                        form #contact-form method="post" action="/contact" {
                            div.form-row {
                                (form_input(Field::Name, "Name", "text", "Your Name", flow))
                                (form_input(Field::Email, "Email", "email", "your.email@example.com", flow))
                            }
                            (form_input(Field::Subject, "Subject", "text", "What's this about?", flow))
                            div.form-group {
                                label for="message" { "Message *" }
                                textarea id="message" name="message" placeholder="Your message here..."
                                    rows="6" required { (flow.form.message) }
                            }
                            @match flow.status() {
                                SubmissionStatus::Success => {
                                    div.status-message.success role="status" {
                                        "✓ Message sent successfully! I'll get back to you soon."
                                    }
                                }
                                SubmissionStatus::Error => {
                                    div.status-message.error role="alert" {
                                        "✗ Failed to send message. Please try again or email me directly."
                                    }
                                }
                                SubmissionStatus::Idle => {}
                            }
                            button.submit-btn type="submit" disabled[submitting] {
                                @if submitting { "Sending..." } @else { "Send Message" }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Not found
// ============================================================================

pub fn render_not_found(path: &str) -> Markup {
    html! {
        div.page.not-found-page {
            div.content {
                h1 { "Page Not Found" }
                p { "Nothing lives at " code { (path) } "." }
                div.cta-buttons {
                    a.btn-primary href="/" { "Back Home" }
                }
            }
        }
    }
}
