/// Products added during this page visit, in click order.
#[derive(Clone, Debug, Default)]
pub struct Cart {
    items: Vec<String>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product and return the new item count.
    pub fn add(&mut self, product: impl Into<String>) -> usize {
        self.items.push(product.into());
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

pub fn added_message(product: &str) -> String {
    format!("{} added to cart!", product)
}

/// Escape text for interpolation into markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inner markup of the quick-view modal for a product title.
pub fn quick_view_html(title: &str) -> String {
    format!(
        "<div class=\"modal-content\">\
         <button class=\"close-modal\">&times;</button>\
         <h3>{}</h3>\
         <p>Product details coming soon...</p>\
         <button class=\"btn btn-primary\">Order Now</button>\
         </div>",
        escape_html(title)
    )
}
