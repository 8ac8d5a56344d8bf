//! Page Renderer: one synchronous pass from (content, theme, assets, settings)
//! to HTML. Markup lives in askama templates under templates/; this module only
//! assembles the typed view the templates consume.

pub mod copy;

use askama::Template;
use tracing::debug;

use crate::assets::{data_uri, encode_inline, load_pdf, AssetSource};
use crate::config::{PageSettings, SidebarState};
use crate::content::models::{EducationEntry, ExperienceEntry, ProjectEntry, SkillCategory};
use crate::content::Content;
use crate::theme::{Palette, ThemeState};

use self::copy::{About, Footer, Hero, StatTile};

// ────────────────────────────────────────────────────────────────────────────
// Tabs
// ────────────────────────────────────────────────────────────────────────────

/// The four fixed sections, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Projects,
    Experience,
    Education,
    About,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Projects, Tab::Experience, Tab::Education, Tab::About];

    pub fn key(self) -> &'static str {
        match self {
            Tab::Projects => "projects",
            Tab::Experience => "experience",
            Tab::Education => "education",
            Tab::About => "about",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Projects => "🚀 Projects",
            Tab::Experience => "💼 Experience",
            Tab::Education => "🎓 Education & Skills",
            Tab::About => "👤 About Me",
        }
    }

    /// Lenient lookup used for the `tab` query parameter; unknown keys fall back
    /// to the first tab.
    pub fn from_key(key: Option<&str>) -> Tab {
        key.and_then(|k| Tab::ALL.into_iter().find(|t| t.key() == k.trim()))
            .unwrap_or_default()
    }
}

pub struct TabLink {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// View models
// ────────────────────────────────────────────────────────────────────────────

/// Inline SVG favicon wrapping the configured glyph.
#[derive(Template)]
#[template(path = "favicon.svg", escape = "html")]
struct FaviconSvg<'a> {
    glyph: &'a str,
}

/// Profile photo slot: an inline image or a visible notice, never nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoView {
    Inline { data_uri: String },
    Missing { notice: String },
}

/// CV download affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvView {
    Available {
        filename: String,
        mime: &'static str,
        size_bytes: usize,
    },
    Missing {
        notice: String,
    },
}

impl PhotoView {
    pub fn is_inline(&self) -> bool {
        matches!(self, PhotoView::Inline { .. })
    }

    /// The data URI when inline, the notice otherwise.
    pub fn text(&self) -> &str {
        match self {
            PhotoView::Inline { data_uri } => data_uri,
            PhotoView::Missing { notice } => notice,
        }
    }
}

impl CvView {
    pub fn is_available(&self) -> bool {
        matches!(self, CvView::Available { .. })
    }

    pub fn mime(&self) -> &'static str {
        match self {
            CvView::Available { mime, .. } => *mime,
            CvView::Missing { .. } => "",
        }
    }

    pub fn size_bytes(&self) -> usize {
        match self {
            CvView::Available { size_bytes, .. } => *size_bytes,
            CvView::Missing { .. } => 0,
        }
    }

    /// Human-readable size for the download button.
    pub fn size_label(&self) -> String {
        let bytes = self.size_bytes();
        if bytes >= 1024 * 1024 {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        } else {
            format!("{:.0} KB", (bytes as f64 / 1024.0).ceil())
        }
    }

    pub fn text(&self) -> &str {
        match self {
            CvView::Available { filename, .. } => filename,
            CvView::Missing { notice } => notice,
        }
    }
}

/// Theme radio control state.
pub struct ThemeOption {
    pub value: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub title: &'a str,
    pub icon_href: String,
    pub theme: ThemeState,
    pub palette: Palette,
    pub layout_class: &'static str,
    pub sidebar_open: bool,
    pub content: &'a Content,
    pub photo: PhotoView,
    pub cv: CvView,
    pub theme_options: [ThemeOption; 2],
    pub active_tab: Tab,
    pub tabs: Vec<TabLink>,
    pub hero: &'static Hero,
    pub stats: &'static [StatTile],
    pub about: &'static About,
    pub footer: &'static Footer,
    pub year: i32,
}

impl<'a> PageTemplate<'a> {
    pub fn experience(&self) -> &'a [ExperienceEntry] {
        &self.content.experience
    }

    pub fn education(&self) -> &'a [EducationEntry] {
        &self.content.education
    }

    pub fn skills(&self) -> &'a [SkillCategory] {
        &self.content.skills
    }

    pub fn projects(&self) -> &'a [ProjectEntry] {
        &self.content.projects
    }

    fn panel_class(&self, tab: &str) -> &'static str {
        if self.active_tab.key() == tab {
            "tab-panel active"
        } else {
            "tab-panel"
        }
    }
}

fn photo_view(assets: &dyn AssetSource, filename: &str) -> PhotoView {
    match assets.load(filename) {
        Ok(bytes) => PhotoView::Inline {
            data_uri: data_uri(filename, &bytes),
        },
        Err(_) => PhotoView::Missing {
            notice: format!(
                "⚠️ Place '{filename}' in the same folder as the application to show the profile photo"
            ),
        },
    }
}

fn cv_view(assets: &dyn AssetSource, filename: &str) -> CvView {
    match load_pdf(assets, filename) {
        Ok(download) => CvView::Available {
            filename: download.filename.clone(),
            mime: download.mime,
            size_bytes: download.size_bytes(),
        },
        Err(_) => CvView::Missing {
            notice: format!("⚠️ CV file '{filename}' not found. Place it in the application folder."),
        },
    }
}

fn theme_options(theme: ThemeState) -> [ThemeOption; 2] {
    [
        ThemeOption {
            value: ThemeState::Light.as_str(),
            label: "☀️ Light",
            checked: theme == ThemeState::Light,
        },
        ThemeOption {
            value: ThemeState::Dark.as_str(),
            label: "🌙 Dark",
            checked: theme == ThemeState::Dark,
        },
    ]
}

/// Assembles the page view. Reads the photo and CV once each; nothing is cached.
pub fn build_page<'a>(
    content: &'a Content,
    theme: ThemeState,
    assets: &dyn AssetSource,
    settings: &'a PageSettings,
    active_tab: Tab,
) -> askama::Result<PageTemplate<'a>> {
    let icon_href = format!(
        "data:image/svg+xml;base64,{}",
        encode_inline(
            FaviconSvg {
                glyph: &settings.icon
            }
            .render()?
            .as_bytes()
        )
    );

    let photo = photo_view(assets, &settings.profile_photo);
    let cv = cv_view(assets, &settings.cv_filename);
    debug!(
        "Render pass: theme={theme}, tab={}, photo={}, cv={}",
        active_tab.key(),
        photo.is_inline(),
        cv.is_available()
    );

    Ok(PageTemplate {
        title: &settings.title,
        icon_href,
        theme,
        palette: theme.palette(),
        layout_class: settings.layout.as_str(),
        sidebar_open: settings.sidebar == SidebarState::Expanded,
        content,
        photo,
        cv,
        theme_options: theme_options(theme),
        active_tab,
        tabs: Tab::ALL
            .into_iter()
            .map(|t| TabLink {
                key: t.key(),
                label: t.label(),
                active: t == active_tab,
            })
            .collect(),
        hero: &copy::HERO,
        stats: &copy::STATS,
        about: &copy::ABOUT,
        footer: &copy::FOOTER,
        year: settings.year,
    })
}

/// Runs one complete render pass and returns the HTML document.
pub fn render_page(
    content: &Content,
    theme: ThemeState,
    assets: &dyn AssetSource,
    settings: &PageSettings,
    active_tab: Tab,
) -> askama::Result<String> {
    build_page(content, theme, assets, settings, active_tab)?.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::testing::MemoryAssets;
    use crate::content::builtin_content;

    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3];

    fn settings() -> PageSettings {
        PageSettings {
            year: 2026,
            ..PageSettings::default()
        }
    }

    fn render(content: &Content, theme: ThemeState, assets: &MemoryAssets) -> String {
        render_page(content, theme, assets, &settings(), Tab::Projects).unwrap()
    }

    #[test]
    fn test_tab_from_key_is_lenient() {
        assert_eq!(Tab::from_key(Some("experience")), Tab::Experience);
        assert_eq!(Tab::from_key(Some("about")), Tab::About);
        assert_eq!(Tab::from_key(Some("bogus")), Tab::Projects);
        assert_eq!(Tab::from_key(None), Tab::Projects);
    }

    #[test]
    fn test_missing_photo_shows_notice_naming_file() {
        let content = builtin_content();
        let html = render(&content, ThemeState::Light, &MemoryAssets::default());
        assert!(html.contains("profile_photo.png"));
        assert!(html.contains("photo-missing"));
        assert!(!html.contains("data:image/png;base64,"));
    }

    #[test]
    fn test_present_photo_is_inlined() {
        let content = builtin_content();
        let assets = MemoryAssets::default().with("profile_photo.png", PNG);
        let html = render(&content, ThemeState::Light, &assets);
        let expected = format!("data:image/png;base64,{}", encode_inline(PNG));
        assert!(html.contains(&expected));
        assert!(!html.contains("photo-missing"));
    }

    #[test]
    fn test_cv_present_exposes_exact_size_and_pdf_mime() {
        let content = builtin_content();
        let pdf = vec![b'%'; 1234];
        let assets = MemoryAssets::default().with("Raja_Roy_CV.pdf", &pdf);
        let settings = settings();
        let page =
            build_page(&content, ThemeState::Light, &assets, &settings, Tab::Projects).unwrap();
        assert_eq!(
            page.cv,
            CvView::Available {
                filename: "Raja_Roy_CV.pdf".to_string(),
                mime: "application/pdf",
                size_bytes: 1234,
            }
        );
        let html = page.render().unwrap();
        assert!(html.contains("data-size=\"1234\""));
        assert!(html.contains("type=\"application"));
    }

    #[test]
    fn test_cv_missing_warns_with_filename() {
        let content = builtin_content();
        let assets = MemoryAssets::default();
        let settings = settings();
        let page =
            build_page(&content, ThemeState::Light, &assets, &settings, Tab::Projects).unwrap();
        match &page.cv {
            CvView::Missing { notice } => assert!(notice.contains("Raja_Roy_CV.pdf")),
            other => panic!("expected missing CV, got {other:?}"),
        }
        let html = page.render().unwrap();
        assert!(html.contains("cv-missing"));
    }

    #[test]
    fn test_experience_rendered_in_input_order_with_tags() {
        let content = builtin_content();
        let assets = MemoryAssets::default();
        let settings = settings();
        let page =
            build_page(&content, ThemeState::Light, &assets, &settings, Tab::Experience).unwrap();

        let companies: Vec<_> = page.experience().iter().map(|e| e.company.as_str()).collect();
        assert_eq!(
            companies,
            vec![
                "Elwood",
                "NETWAY INDIA PVT. LTD",
                "Global Digital Baba",
                "AUTHENZA MEDIA INFOTECH PVT. LTD",
            ]
        );
        assert_eq!(page.experience()[2].skills, content.experience[2].skills);

        let html = page.render().unwrap();
        assert_eq!(html.matches("class=\"experience-card\"").count(), 4);
        let positions: Vec<usize> = ["Elwood", "NETWAY", "Global Digital Baba", "AUTHENZA"]
            .iter()
            .map(|name| html.find(name).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");

        let start = html.find("Global Digital Baba").unwrap();
        let block = &html[start..html[start..].find("</article>").unwrap() + start];
        for tag in ["Customer Service", "Operations", "Inventory Management"] {
            assert!(block.contains(tag), "missing tag {tag}");
        }
    }

    #[test]
    fn test_empty_experience_renders_empty_section() {
        let mut content = builtin_content();
        content.experience.clear();
        let html = render(&content, ThemeState::Light, &MemoryAssets::default());
        assert!(html.contains("id=\"panel-experience\""));
        assert_eq!(html.matches("class=\"experience-card\"").count(), 0);
        assert!(html.contains("</html>"));
    }

    #[test]
    fn test_everything_empty_still_renders() {
        let mut content = builtin_content();
        content.experience.clear();
        content.education.clear();
        content.skills.clear();
        content.projects.clear();
        content.profile.languages.clear();
        content.profile.current_study = None;
        let html = render(&content, ThemeState::Dark, &MemoryAssets::default());
        assert!(html.contains("id=\"panel-projects\""));
        assert!(html.contains("id=\"panel-about\""));
    }

    #[test]
    fn test_theme_round_trip_is_identical() {
        let content = builtin_content();
        let assets = MemoryAssets::default();
        let light = render(&content, ThemeState::Light, &assets);
        let dark = render(&content, ThemeState::Dark, &assets);
        let back = render(&content, ThemeState::Light.toggled().toggled(), &assets);

        assert_ne!(light, dark);
        assert_eq!(light, back);
        assert!(dark.contains(ThemeState::Dark.palette().background));
    }

    #[test]
    fn test_palette_emitted_once() {
        let content = builtin_content();
        let html = render(&content, ThemeState::Light, &MemoryAssets::default());
        assert_eq!(html.matches("--bg:").count(), 1);
        assert!(html.contains("--bg: #F8FAFC"));
    }

    #[test]
    fn test_content_is_escaped() {
        let mut content = builtin_content();
        content.projects[1].title = "<script>alert(1)</script>".to_string();
        let html = render(&content, ThemeState::Light, &MemoryAssets::default());
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_active_tab_is_marked() {
        let content = builtin_content();
        let html = render_page(
            &content,
            ThemeState::Light,
            &MemoryAssets::default(),
            &settings(),
            Tab::About,
        )
        .unwrap();
        assert!(html.contains("id=\"panel-about\" class=\"tab-panel active\""));
        assert!(html.contains("id=\"panel-projects\" class=\"tab-panel\""));
    }

    #[test]
    fn test_projects_keep_order_and_link() {
        let content = builtin_content();
        let html = render(&content, ThemeState::Light, &MemoryAssets::default());
        let featured = html.find("Fraud Detection").unwrap();
        let clone = html.find("Amazon Clone").unwrap();
        let tourism = html.find("West Bengal Tourism Portal").unwrap();
        assert!(featured < clone && clone < tourism);
        assert_eq!(html.matches("class=\"project-card featured\"").count(), 1);
        assert!(html.contains("target=\"_blank\""));
    }
}
