use crate::types::CatalogEntry;

pub const EMPTY_MESSAGE: &str = "Сыры не найдены.";
pub const LOAD_FAILED_MESSAGE: &str = "Не удалось загрузить каталог.";

/// The element cards are rendered into. Holds its top-level children as HTML
/// fragments, one element each.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Container {
    children: Vec<String>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element after the existing content.
    pub fn append_html(&mut self, element: String) {
        self.children.push(element);
    }

    /// Discards the existing content and leaves `element` as the only child.
    pub fn replace_html(&mut self, element: String) {
        self.children.clear();
        self.children.push(element);
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn inner_html(&self) -> String {
        self.children.concat()
    }
}

/// Card markup for one entry. Values are interpolated unescaped.
pub fn card_html(entry: &CatalogEntry) -> String {
    format!(
        r#"<div class="col-md-6 col-lg-4">
    <div class="card h-100 shadow-sm">
        <img src="{image_url}" class="card-img-top" alt="{name}">
        <div class="card-body text-center">
            <h5 class="card-title">{name}</h5>
            <p class="card-text">{category}</p>
            <p class="card-text">{description}</p>
            <p class="card-text">{price}</p>
        </div>
    </div>
</div>"#,
        image_url = entry.image_url,
        name = entry.name,
        category = entry.category,
        description = entry.description,
        price = entry.price,
    )
}

pub fn empty_html() -> String {
    format!(r#"<p class="text-center">{EMPTY_MESSAGE}</p>"#)
}

pub fn load_failed_html() -> String {
    format!(r#"<p class="text-center text-danger">{LOAD_FAILED_MESSAGE}</p>"#)
}

/// Fills `container` from a successful response.
pub fn render_entries(container: &mut Container, entries: &[CatalogEntry]) {
    if entries.is_empty() {
        container.replace_html(empty_html());
        return;
    }
    for entry in entries {
        container.append_html(card_html(entry));
    }
}

pub fn render_load_failed(container: &mut Container) {
    container.replace_html(load_failed_html());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, price: f64) -> CatalogEntry {
        CatalogEntry {
            id: 1,
            name: name.to_string(),
            origin: "France".to_string(),
            price,
            image_url: "/images/brie.jpg".to_string(),
            description: "Soft white mold cheese.".to_string(),
            category: "soft".to_string(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn card_contains_every_displayed_field() {
        let html = card_html(&entry("Brie", 19.5));
        assert!(html.starts_with(r#"<div class="col-md-6 col-lg-4">"#));
        assert!(html.contains(r#"<img src="/images/brie.jpg" class="card-img-top" alt="Brie">"#));
        assert!(html.contains(r#"<h5 class="card-title">Brie</h5>"#));
        assert!(html.contains(r#"<p class="card-text">soft</p>"#));
        assert!(html.contains(r#"<p class="card-text">Soft white mold cheese.</p>"#));
        assert!(html.contains(r#"<p class="card-text">19.5</p>"#));
        assert!(!html.contains("France"));
    }

    #[test]
    fn prices_use_shortest_decimal_form() {
        assert!(card_html(&entry("a", 15.0)).contains(">15<"));
        assert!(card_html(&entry("b", 25.99)).contains(">25.99<"));
        assert!(card_html(&entry("c", 18.75)).contains(">18.75<"));
    }

    #[test]
    fn card_interpolates_markup_verbatim() {
        let html = card_html(&entry("<b>Brie</b>", 1.0));
        assert!(html.contains(r#"<h5 class="card-title"><b>Brie</b></h5>"#));
    }

    #[test]
    fn render_entries_appends_after_existing_content() {
        let mut container = Container::new();
        container.append_html("<span>header</span>".to_string());
        render_entries(&mut container, &[entry("Brie", 1.0)]);
        assert_eq!(container.children().len(), 2);
        assert_eq!(container.children()[0], "<span>header</span>");
    }

    #[test]
    fn render_empty_replaces_existing_content() {
        let mut container = Container::new();
        container.append_html("<span>stale</span>".to_string());
        render_entries(&mut container, &[]);
        assert_eq!(container.children(), [empty_html()]);
    }

    #[test]
    fn render_load_failed_replaces_existing_content() {
        let mut container = Container::new();
        container.append_html("<span>stale</span>".to_string());
        container.append_html("<span>stale</span>".to_string());
        render_load_failed(&mut container);
        assert_eq!(
            container.inner_html(),
            r#"<p class="text-center text-danger">Не удалось загрузить каталог.</p>"#
        );
    }
}
