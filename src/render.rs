use crate::config::PageConfig;

/// The two tokens the template may contain. Substitution is a fixed,
/// closed set, not a generic key/value engine.
pub const TITLE_TOKEN: &str = "{{TITLE}}";
pub const ELEMENT_ID_TOKEN: &str = "{{ELEMENT_ID}}";

// ###################################################### //
//                 Rendered Page Struct                   //
// ###################################################### //

/// The expanded HTML for a single page, ready to be written to disk.
#[derive(Debug)]
pub struct RenderedPage {
    pub filename: String,
    pub html: String,
}

impl RenderedPage {
    /// Replaces every occurrence of `{{TITLE}}` and `{{ELEMENT_ID}}` in the
    /// template with the page's values. Literal, global and case-sensitive;
    /// substitution runs once over the original template and is never
    /// reapplied to its own output.
    pub fn new(template: &str, page: &PageConfig) -> RenderedPage {
        let html = template
            .replace(TITLE_TOKEN, &page.title)
            .replace(ELEMENT_ID_TOKEN, &page.element_id);

        RenderedPage {
            filename: page.filename.clone(),
            html,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(filename: &str, title: &str, element_id: &str) -> PageConfig {
        PageConfig {
            filename: filename.to_string(),
            title: title.to_string(),
            element_id: element_id.to_string(),
        }
    }

    #[test]
    fn substitutes_both_tokens() {
        let template = "<h1>{{TITLE}}</h1><div id=\"{{ELEMENT_ID}}\"></div>";
        let rendered = RenderedPage::new(template, &page("a.html", "Home", "home-el"));

        assert_eq!(rendered.filename, "a.html");
        assert_eq!(rendered.html, "<h1>Home</h1><div id=\"home-el\"></div>");
    }

    #[test]
    fn replaces_every_occurrence() {
        let template = "<title>{{TITLE}}</title><h1>{{TITLE}}</h1>";
        let rendered = RenderedPage::new(template, &page("a.html", "Home", "home-el"));

        assert_eq!(rendered.html, "<title>Home</title><h1>Home</h1>");
        assert!(!rendered.html.contains(TITLE_TOKEN));
    }

    #[test]
    fn token_valued_title_is_not_resubstituted() {
        let template = "<h1>{{TITLE}}</h1>";
        let rendered = RenderedPage::new(template, &page("a.html", "{{TITLE}}", "home-el"));

        assert_eq!(rendered.html, "<h1>{{TITLE}}</h1>");
    }

    #[test]
    fn unknown_tokens_pass_through() {
        let template = "<h1>{{TITLE}}</h1>{{SUBTITLE}}";
        let rendered = RenderedPage::new(template, &page("a.html", "Home", "home-el"));

        assert_eq!(rendered.html, "<h1>Home</h1>{{SUBTITLE}}");
    }

    #[test]
    fn substitution_is_case_sensitive() {
        let template = "{{title}}{{TITLE}}";
        let rendered = RenderedPage::new(template, &page("a.html", "Home", "home-el"));

        assert_eq!(rendered.html, "{{title}}Home");
    }

    #[test]
    fn template_without_tokens_is_unchanged() {
        let template = "<p>static</p>";
        let rendered = RenderedPage::new(template, &page("a.html", "Home", "home-el"));

        assert_eq!(rendered.html, template);
    }
}
