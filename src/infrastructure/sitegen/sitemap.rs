use chrono::{DateTime, Utc};

use crate::constants::SITE_BASE_URL;
use crate::entities::project::Project;

struct StaticPage {
    path: &'static str,
    priority: &'static str,
    changefreq: &'static str,
}

const STATIC_PAGES: [StaticPage; 5] = [
    StaticPage { path: "/", priority: "1.0", changefreq: "weekly" },
    StaticPage { path: "/about", priority: "0.8", changefreq: "monthly" },
    StaticPage { path: "/projects", priority: "0.9", changefreq: "weekly" },
    StaticPage { path: "/services", priority: "0.8", changefreq: "monthly" },
    StaticPage { path: "/courses", priority: "0.9", changefreq: "weekly" },
];

/// Renders the sitemap for the static pages plus one entry per project.
/// Projects are expected in display order (priority desc, then newest first).
pub fn render_sitemap(projects: &[Project], now: DateTime<Utc>) -> String {
    let today = now.format("%Y-%m-%d").to_string();

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\"\n\
         \x20       xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\"\n\
         \x20       xsi:schemaLocation=\"http://www.sitemaps.org/schemas/sitemap/0.9\n\
         \x20       http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd\">\n",
    );

    for page in &STATIC_PAGES {
        xml.push_str(&format!(
            "  <url>\n    <loc>{SITE_BASE_URL}{}</loc>\n    <lastmod>{today}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
            page.path, page.changefreq, page.priority,
        ));
    }

    for project in projects {
        let lastmod = project
            .updated_at
            .unwrap_or(project.created_at)
            .format("%Y-%m-%d");

        xml.push_str(&format!(
            "  <url>\n    <loc>{SITE_BASE_URL}/projects/{}</loc>\n    <lastmod>{lastmod}</lastmod>\n    <changefreq>monthly</changefreq>\n    <priority>0.7</priority>\n  </url>\n",
            project.id,
        ));
    }

    xml.push_str("</urlset>\n");
    xml
}
