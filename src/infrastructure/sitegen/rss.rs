use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{SITE_BASE_URL, SITE_CONTACT_EMAIL, SITE_DESCRIPTION, SITE_TITLE};
use crate::entities::project::Project;

/// The feed carries the most recent projects only.
pub const RSS_ITEM_LIMIT: i64 = 20;

const DESCRIPTION_MAX_CHARS: usize = 300;

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Strips HTML tags, collapses whitespace and truncates to the feed's
/// description limit.
pub fn clean_description(text: &str) -> String {
    let without_tags = HTML_TAG_RE.replace_all(text, "");
    let collapsed = WHITESPACE_RE.replace_all(&without_tags, " ");
    let trimmed = collapsed.trim();

    if trimmed.chars().count() > DESCRIPTION_MAX_CHARS {
        let truncated: String = trimmed.chars().take(DESCRIPTION_MAX_CHARS).collect();
        format!("{truncated}...")
    } else {
        trimmed.to_string()
    }
}

fn project_type_label(project_type: &str) -> &str {
    match project_type {
        "web" => "Web",
        "mobile" => "Mobile",
        "desktop" => "Desktop",
        "fullstack" => "Full-stack",
        "backend" => "Backend",
        "frontend" => "Frontend",
        other => other,
    }
}

fn item_description(project: &Project) -> String {
    let mut description = match &project.subtitle {
        Some(subtitle) => format!("{subtitle} - {}", project.description),
        None => project.description.clone(),
    };

    let mut extra = Vec::new();

    if let Some(tags) = &project.tags {
        if !tags.0.is_empty() {
            let shown = tags.0.iter().take(5).cloned().collect::<Vec<_>>().join(", ");
            extra.push(format!("Tags: {shown}"));
        }
    }

    let tech: Vec<&str> = project
        .technologies
        .0
        .iter()
        .flat_map(|group| group.items.iter().take(3))
        .map(String::as_str)
        .take(10)
        .collect();
    if !tech.is_empty() {
        extra.push(format!("Tech stack: {}", tech.join(", ")));
    }

    extra.push(format!(
        "Project type: {}",
        project_type_label(&project.project_type)
    ));

    description.push_str("\n\n");
    description.push_str(&extra.join("\n"));
    description
}

/// Renders the RSS 2.0 feed. Projects are expected newest-first and already
/// limited to [`RSS_ITEM_LIMIT`].
pub fn render_rss(projects: &[Project], now: DateTime<Utc>) -> String {
    let build_date = now.to_rfc2822();

    let mut xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\">\n\
         \x20 <channel>\n\
         \x20   <title>{title}</title>\n\
         \x20   <link>{SITE_BASE_URL}</link>\n\
         \x20   <description>{description}</description>\n\
         \x20   <language>en-US</language>\n\
         \x20   <managingEditor>{SITE_CONTACT_EMAIL}</managingEditor>\n\
         \x20   <webMaster>{SITE_CONTACT_EMAIL}</webMaster>\n\
         \x20   <lastBuildDate>{build_date}</lastBuildDate>\n\
         \x20   <pubDate>{build_date}</pubDate>\n\
         \x20   <ttl>60</ttl>\n\
         \x20   <atom:link href=\"{SITE_BASE_URL}/feed.xml\" rel=\"self\" type=\"application/rss+xml\"/>\n",
        title = escape_xml(SITE_TITLE),
        description = escape_xml(SITE_DESCRIPTION),
    );

    for project in projects {
        let project_url = format!("{SITE_BASE_URL}/projects/{}", project.id);
        let pub_date = project.updated_at.unwrap_or(project.created_at).to_rfc2822();
        let description = escape_xml(&clean_description(&item_description(project)));

        xml.push_str(&format!(
            "    <item>\n      <title>{title}</title>\n      <link>{project_url}</link>\n      <guid isPermaLink=\"true\">{project_url}</guid>\n      <description>{description}</description>\n      <pubDate>{pub_date}</pubDate>\n      <category>{category}</category>\n    </item>\n",
            title = escape_xml(&project.title),
            category = escape_xml(project_type_label(&project.project_type)),
        ));
    }

    xml.push_str("  </channel>\n</rss>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::project::test_fixtures::sample_project;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn empty_project_table_still_yields_a_well_formed_channel() {
        let xml = render_rss(&[], fixed_now());

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<channel>"));
        assert!(xml.contains("<atom:link href=\"https://www.kimppop.site/feed.xml\""));
        assert!(!xml.contains("<item>"));
        assert!(xml.ends_with("  </channel>\n</rss>\n"));
    }

    #[test]
    fn special_characters_in_titles_are_escaped() {
        let mut project = sample_project();
        project.title = "R&D <\"quoted\"> tool".to_string();

        let xml = render_rss(std::slice::from_ref(&project), fixed_now());
        assert!(xml.contains("<title>R&amp;D &lt;&quot;quoted&quot;&gt; tool</title>"));
    }

    #[test]
    fn item_descriptions_carry_tags_tech_stack_and_type() {
        let project = sample_project();
        let xml = render_rss(std::slice::from_ref(&project), fixed_now());

        assert!(xml.contains("Tags: rust, portfolio"));
        assert!(xml.contains("Tech stack: Rust, Actix Web, PostgreSQL"));
        assert!(xml.contains("Project type: Web"));
        assert_eq!(xml.matches("<item>").count(), 1);
    }

    #[test]
    fn clean_description_strips_tags_and_truncates() {
        let long = format!("<p>intro</p> {}", "word ".repeat(100));
        let cleaned = clean_description(&long);

        assert!(!cleaned.contains('<'));
        assert!(cleaned.starts_with("intro word"));
        assert!(cleaned.ends_with("..."));
        assert_eq!(cleaned.chars().count(), DESCRIPTION_MAX_CHARS + 3);
    }

    #[test]
    fn short_descriptions_are_left_alone() {
        assert_eq!(clean_description("  plain   text  "), "plain text");
    }
}
