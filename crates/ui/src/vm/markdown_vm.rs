use std::collections::HashSet;

/// Render formula text (CommonMark plus inline `<sup>`/`<sub>`) to sanitized HTML.
#[must_use]
pub fn formula_text_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(input.trim(), options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "span", "br", "em", "strong", "b", "i", "code", "sup", "sub", "del", "ul", "ol",
        "li", "table", "thead", "tbody", "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    ammonia::Builder::new()
        .tags(tags)
        .clean(html)
        .to_string()
}
