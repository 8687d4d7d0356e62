use std::fmt::Write;

use crate::services::taxonomy::Taxonomy;

/// Static pages listed ahead of the generated use-case pages
const STATIC_PAGES: [&str; 6] = ["", "about/", "contact/", "privacy/", "disclosure/", "terms/"];

fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Render an XML sitemap covering the static pages, every use-case hub and
/// every use-case x state page for the given states.
pub fn render_sitemap(base_url: &str, taxonomy: &Taxonomy, states: &[String]) -> String {
    let base = base_url.trim_end_matches('/');
    let mut urls: Vec<String> = STATIC_PAGES
        .iter()
        .map(|page| format!("{}/{}", base, page))
        .collect();

    for category in taxonomy.categories() {
        urls.push(format!("{}/use-cases/{}/", base, category.slug));
        for state in states {
            urls.push(format!("{}/use-cases/{}/{}/", base, category.slug, state));
        }
    }

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for url in &urls {
        // Writing to a String cannot fail
        let _ = writeln!(xml, "  <url><loc>{}</loc></url>", escape_xml(url));
    }
    xml.push_str("</urlset>\n");
    xml
}
