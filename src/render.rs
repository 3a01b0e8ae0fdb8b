use std::collections::BTreeMap;

use crate::formats::{Book, Catalog};
use crate::slug::slugify;
use crate::theme::{CategoryColors, DEFAULT_COLORS};

/// Per-page inputs shared by every renderer: which nav entry is active and
/// how to get back to the site root from this page's directory.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub site_title: &'a str,
    pub base_path: &'a str,
}

pub fn render_index(
    catalog: &Catalog,
    colors: &BTreeMap<String, CategoryColors>,
    ctx: PageContext<'_>,
) -> String {
    let mut body = String::new();

    body.push_str("    <section class=\"search-section\">\n");
    body.push_str("      <div class=\"search-box\">\n");
    body.push_str(
        "        <input type=\"text\" id=\"searchInput\" placeholder=\"Search books by title, author, or category...\">\n",
    );
    body.push_str("      </div>\n");
    body.push_str("      <div class=\"filters\">\n");
    body.push_str(&render_filter(
        "categoryFilter",
        "Category",
        "All Categories",
        &catalog.categories,
    ));
    body.push_str(&render_filter(
        "locationFilter",
        "Location",
        "All Locations",
        &catalog.locations,
    ));
    body.push_str(&render_filter("typeFilter", "Type", "All Types", &catalog.types));
    body.push_str("        <div class=\"filter-group\">\n");
    body.push_str("          <label for=\"sortBy\">Sort by:</label>\n");
    body.push_str("          <select id=\"sortBy\">\n");
    body.push_str("            <option value=\"title\">Title</option>\n");
    body.push_str("            <option value=\"author\">Author</option>\n");
    body.push_str("          </select>\n");
    body.push_str("        </div>\n");
    body.push_str("      </div>\n");
    body.push_str("    </section>\n");

    body.push_str(&format!(
        "    <p class=\"stats\">Total: {} books<span id=\"filteredCount\"></span></p>\n",
        catalog.books.len()
    ));

    body.push_str("    <div class=\"books-grid\" id=\"booksGrid\">\n");
    for book in &catalog.books {
        body.push_str(&render_book_card(book, colors, ctx.base_path));
    }
    body.push_str("    </div>\n");
    body.push_str(
        "    <div id=\"noResults\" class=\"no-results\" style=\"display: none;\"><p>No books found matching your criteria.</p></div>\n",
    );

    page_shell("All Books", &body, ctx, true)
}

pub fn render_categories_overview(
    catalog: &Catalog,
    colors: &BTreeMap<String, CategoryColors>,
    ctx: PageContext<'_>,
) -> String {
    let mut body = String::new();
    body.push_str("    <div class=\"tile-grid\">\n");
    for (name, count) in count_ordered(&catalog.category_counts) {
        let palette = colors.get(name).copied().unwrap_or(DEFAULT_COLORS);
        body.push_str(&format!(
            "      <a class=\"tile\" style=\"background: {bg}; border-color: {border}; color: {text};\" href=\"categories/{slug}.html\">\n        <h3>{name}</h3>\n        <p>{count} {noun}</p>\n      </a>\n",
            bg = palette.bg,
            border = palette.border,
            text = palette.text,
            slug = slugify(name),
            name = escape_html(name),
            noun = plural_books(*count),
        ));
    }
    body.push_str("    </div>\n");

    page_shell("By Category", &body, ctx, false)
}

pub fn render_authors_overview(catalog: &Catalog, ctx: PageContext<'_>) -> String {
    let mut body = String::new();
    body.push_str("    <div class=\"tile-grid\">\n");
    for (name, count) in count_ordered(&catalog.author_counts) {
        body.push_str(&format!(
            "      <a class=\"tile\" href=\"authors/{slug}.html\">\n        <h3>{name}</h3>\n        <p>{count} {noun}</p>\n      </a>\n",
            slug = slugify(name),
            name = escape_html(name),
            noun = plural_books(*count),
        ));
    }
    body.push_str("    </div>\n");

    page_shell("By Author", &body, ctx, false)
}

pub fn render_category_page(
    category: &str,
    catalog: &Catalog,
    colors: &BTreeMap<String, CategoryColors>,
    ctx: PageContext<'_>,
) -> String {
    let palette = colors.get(category).copied().unwrap_or(DEFAULT_COLORS);
    let books: Vec<&Book> = catalog
        .books
        .iter()
        .filter(|b| b.category == category)
        .collect();

    let mut body = String::new();
    body.push_str(&format!(
        "    <div class=\"page-banner\" style=\"background: {bg}; border-color: {border}; color: {text};\">\n      <h2>{name}</h2>\n      <p>{count} {noun}</p>\n    </div>\n",
        bg = palette.bg,
        border = palette.border,
        text = palette.text,
        name = escape_html(category),
        count = books.len(),
        noun = plural_books(books.len()),
    ));
    body.push_str("    <div class=\"books-grid\">\n");
    for book in books {
        body.push_str(&render_book_card(book, colors, ctx.base_path));
    }
    body.push_str("    </div>\n");

    page_shell(category, &body, ctx, false)
}

pub fn render_author_page(
    author: &str,
    catalog: &Catalog,
    colors: &BTreeMap<String, CategoryColors>,
    ctx: PageContext<'_>,
) -> String {
    let books: Vec<&Book> = catalog
        .books
        .iter()
        .filter(|b| b.author() == author)
        .collect();

    let mut body = String::new();
    body.push_str(&format!(
        "    <div class=\"page-banner\">\n      <h2>{name}</h2>\n      <p>{count} {noun}</p>\n    </div>\n",
        name = escape_html(author),
        count = books.len(),
        noun = plural_books(books.len()),
    ));
    body.push_str("    <div class=\"books-grid\">\n");
    for book in books {
        body.push_str(&render_book_card(book, colors, ctx.base_path));
    }
    body.push_str("    </div>\n");

    page_shell(author, &body, ctx, false)
}

fn render_book_card(
    book: &Book,
    colors: &BTreeMap<String, CategoryColors>,
    base_path: &str,
) -> String {
    let palette = colors.get(&book.category).copied().unwrap_or(DEFAULT_COLORS);
    let author = book.author();
    format!(
        "      <div class=\"book-card\" data-category=\"{category_attr}\" data-location=\"{location_attr}\" data-type=\"{type_attr}\">\n        <div class=\"book-header\">\n          <span class=\"book-type\">{kind}</span>\n          <span class=\"book-location\">{location}</span>\n        </div>\n        <div class=\"book-info\">\n          <h3 class=\"book-title\">{title}</h3>\n          <p class=\"book-author\">by <a href=\"{base}authors/{author_slug}.html\">{author}</a></p>\n          <div class=\"book-meta\">\n            <a class=\"meta-item category\" style=\"background: {accent}; border-color: {border};\" href=\"{base}categories/{category_slug}.html\">{category}</a>\n            <span class=\"meta-item language\">{language}</span>\n          </div>\n        </div>\n      </div>\n",
        category_attr = escape_html(&book.category),
        location_attr = escape_html(&book.location),
        type_attr = escape_html(&book.kind),
        kind = escape_html(&book.kind),
        location = escape_html(&book.location),
        title = escape_html(&book.title),
        author = escape_html(&author),
        author_slug = slugify(&author),
        category = escape_html(&book.category),
        category_slug = slugify(&book.category),
        language = escape_html(&book.language),
        accent = palette.accent,
        border = palette.border,
        base = base_path,
    )
}

fn render_filter(id: &str, label: &str, all_label: &str, values: &[String]) -> String {
    let mut html = String::new();
    html.push_str("        <div class=\"filter-group\">\n");
    html.push_str(&format!("          <label for=\"{id}\">{label}:</label>\n"));
    html.push_str(&format!("          <select id=\"{id}\">\n"));
    html.push_str(&format!("            <option value=\"\">{all_label}</option>\n"));
    for value in values {
        let value = escape_html(value);
        html.push_str(&format!("            <option value=\"{value}\">{value}</option>\n"));
    }
    html.push_str("          </select>\n");
    html.push_str("        </div>\n");
    html
}

fn page_shell(title: &str, body: &str, ctx: PageContext<'_>, include_scripts: bool) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!(
        "  <title>{} - {}</title>\n",
        escape_html(title),
        escape_html(ctx.site_title)
    ));
    html.push_str(&format!(
        "  <link rel=\"stylesheet\" href=\"{}style.css\">\n",
        ctx.base_path
    ));
    html.push_str("</head>\n<body>\n");
    html.push_str("  <header>\n    <div class=\"container\">\n");
    html.push_str(&format!(
        "      <h1>\u{1F4DA} {}</h1>\n",
        escape_html(ctx.site_title)
    ));
    html.push_str("      <nav>\n");
    html.push_str(&format!(
        "        <a href=\"{base}index.html\">All Books</a>\n        <a href=\"{base}categories.html\">Categories</a>\n        <a href=\"{base}authors.html\">Authors</a>\n",
        base = ctx.base_path
    ));
    html.push_str("      </nav>\n    </div>\n  </header>\n");
    html.push_str("  <main class=\"container\">\n");
    html.push_str(body);
    html.push_str("  </main>\n");
    html.push_str("  <footer>\n    <div class=\"container\">\n      <p>Built for book lovers.</p>\n    </div>\n  </footer>\n");
    if include_scripts {
        html.push_str(&format!(
            "  <script src=\"{}script.js\"></script>\n",
            ctx.base_path
        ));
    }
    html.push_str("</body>\n</html>\n");
    html
}

/// Author/category tiles ordered by descending count, name as tie-break.
fn count_ordered(counts: &BTreeMap<String, usize>) -> Vec<(&String, &usize)> {
    let mut ordered: Vec<_> = counts.iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    ordered
}

fn plural_books(count: usize) -> &'static str {
    if count == 1 { "book" } else { "books" }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Client-side search, filter, and sort over the cards already in the DOM.
pub fn render_script() -> String {
    r#"function displayBooks() {
  const searchTerm = document.getElementById('searchInput').value.toLowerCase();
  const category = document.getElementById('categoryFilter').value;
  const location = document.getElementById('locationFilter').value;
  const type = document.getElementById('typeFilter').value;

  let visibleCount = 0;
  document.querySelectorAll('[data-category]').forEach(card => {
    const title = card.querySelector('h3').textContent.toLowerCase();
    const author = card.querySelector('p').textContent.toLowerCase();

    const matchesSearch = !searchTerm
      || title.includes(searchTerm)
      || author.includes(searchTerm)
      || card.dataset.category.toLowerCase().includes(searchTerm);
    const matchesCategory = !category || card.dataset.category === category;
    const matchesLocation = !location || card.dataset.location === location;
    const matchesType = !type || card.dataset.type === type;

    const shouldShow = matchesSearch && matchesCategory && matchesLocation && matchesType;
    card.style.display = shouldShow ? 'block' : 'none';
    if (shouldShow) visibleCount++;
  });

  const filteredCount = document.getElementById('filteredCount');
  const total = document.querySelectorAll('[data-category]').length;
  filteredCount.textContent = visibleCount === total ? '' : ' | Showing: ' + visibleCount + ' books';

  const noResults = document.getElementById('noResults');
  if (noResults) noResults.style.display = visibleCount === 0 ? 'block' : 'none';
}

function sortBooks() {
  const sortBy = document.getElementById('sortBy').value;
  const grid = document.getElementById('booksGrid');
  const cards = Array.from(document.querySelectorAll('[data-category]'));

  cards.sort((a, b) => {
    if (sortBy === 'author') {
      const authorOf = card => card.querySelector('p').textContent.replace('by ', '').trim();
      const [aFirst, ...aRest] = authorOf(a).split(' ');
      const [bFirst, ...bRest] = authorOf(b).split(' ');
      const byLast = aRest.join(' ').toLowerCase().localeCompare(bRest.join(' ').toLowerCase());
      if (byLast !== 0) return byLast;
      return aFirst.toLowerCase().localeCompare(bFirst.toLowerCase());
    }
    const titleOf = card => card.querySelector('h3').textContent.toLowerCase();
    return titleOf(a).localeCompare(titleOf(b));
  });

  cards.forEach(card => grid.appendChild(card));
}

document.addEventListener('DOMContentLoaded', () => {
  const hook = (id, event, handler) => {
    const el = document.getElementById(id);
    if (el) el.addEventListener(event, handler);
  };
  hook('searchInput', 'input', displayBooks);
  hook('categoryFilter', 'change', displayBooks);
  hook('locationFilter', 'change', displayBooks);
  hook('typeFilter', 'change', displayBooks);
  hook('sortBy', 'change', sortBooks);
  displayBooks();
});
"#
    .to_owned()
}

pub fn render_stylesheet() -> String {
    r#"* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  line-height: 1.6;
  color: #333;
  background-color: #f8f9fa;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 20px;
}

header {
  background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
  color: white;
  padding: 2.5rem 0;
  text-align: center;
  margin-bottom: 2rem;
}

header h1 {
  font-size: 2.5rem;
  margin-bottom: 0.75rem;
  font-weight: 700;
}

header nav a {
  color: white;
  margin: 0 0.75rem;
  text-decoration: none;
  font-weight: 500;
  opacity: 0.9;
}

header nav a:hover {
  opacity: 1;
  text-decoration: underline;
}

.search-section {
  background: white;
  padding: 2rem;
  border-radius: 12px;
  box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
  margin-bottom: 2rem;
}

.search-box input {
  width: 100%;
  padding: 12px 16px;
  border: 2px solid #e1e5e9;
  border-radius: 8px;
  font-size: 16px;
  margin-bottom: 1.5rem;
}

.search-box input:focus {
  outline: none;
  border-color: #667eea;
}

.filters {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  align-items: center;
}

.filter-group {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.filter-group label {
  font-weight: 600;
  font-size: 14px;
  color: #555;
}

.filter-group select {
  padding: 8px 12px;
  border: 1px solid #e1e5e9;
  border-radius: 6px;
  font-size: 14px;
  background: white;
}

.stats {
  margin-bottom: 2rem;
  font-size: 14px;
  color: #666;
}

.books-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1.5rem;
  margin-bottom: 3rem;
}

.book-card {
  background: white;
  border-radius: 8px;
  box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08);
  transition: all 0.3s ease;
  overflow: hidden;
  border: 1px solid #f0f0f0;
}

.book-card:hover {
  transform: translateY(-4px);
  box-shadow: 0 8px 30px rgba(0, 0, 0, 0.12);
}

.book-header {
  background: linear-gradient(135deg, #f8f9fa 0%, #e9ecef 100%);
  padding: 1rem 1.5rem;
  border-bottom: 1px solid #f0f0f0;
  display: flex;
  justify-content: space-between;
  font-size: 12px;
  font-weight: 500;
  color: #6c757d;
  text-transform: uppercase;
  letter-spacing: 0.5px;
}

.book-info {
  padding: 1.5rem;
}

.book-title {
  font-size: 1.3rem;
  font-weight: 700;
  margin-bottom: 0.75rem;
  color: #1a1a1a;
  line-height: 1.3;
}

.book-author {
  font-size: 1rem;
  margin-bottom: 1rem;
}

.book-author a {
  color: #667eea;
  font-weight: 500;
  text-decoration: none;
}

.book-author a:hover {
  text-decoration: underline;
}

.book-meta {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.meta-item {
  padding: 4px 10px;
  border-radius: 20px;
  font-size: 12px;
  font-weight: 500;
  text-transform: uppercase;
  letter-spacing: 0.5px;
}

.meta-item.category {
  color: white;
  text-decoration: none;
  border: 1px solid transparent;
}

.meta-item.language {
  background: #f8f9fa;
  color: #6c757d;
  border: 1px solid #e9ecef;
}

.tile-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1rem;
  margin-bottom: 3rem;
}

.tile {
  display: block;
  background: white;
  border: 1px solid #e9ecef;
  border-radius: 8px;
  padding: 1.5rem;
  text-decoration: none;
  color: #333;
  transition: all 0.2s ease;
}

.tile:hover {
  transform: translateY(-2px);
  box-shadow: 0 4px 16px rgba(0, 0, 0, 0.1);
}

.tile p {
  font-size: 14px;
  opacity: 0.8;
}

.page-banner {
  background: white;
  border: 1px solid #e9ecef;
  border-radius: 12px;
  padding: 2rem;
  margin-bottom: 2rem;
}

.no-results {
  text-align: center;
  padding: 3rem;
  color: #666;
}

footer {
  background: #2c3e50;
  color: white;
  text-align: center;
  padding: 2rem 0;
  margin-top: 3rem;
}

@media (max-width: 768px) {
  .container {
    padding: 0 15px;
  }

  header h1 {
    font-size: 2rem;
  }

  .filters {
    flex-direction: column;
    align-items: stretch;
  }

  .books-grid {
    grid-template-columns: 1fr;
  }
}
"#
    .to_owned()
}
