use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::formats::{Book, Catalog};
use crate::normalize::normalize_row;
use crate::tokenize::split_fields;

/// Lists the `.csv` files of a directory in sorted filename order, so the
/// ingest order (and therefore the record order) is deterministic.
pub fn discover_sources(books_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for entry in std::fs::read_dir(books_dir)
        .with_context(|| format!("read books dir: {}", books_dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some("csv") {
            sources.push(path);
        }
    }
    sources.sort();
    Ok(sources)
}

/// Ingests every source file in order and derives the aggregates the page
/// renderers need. A file that cannot be read is skipped with a warning and
/// contributes zero records; per-row failures are silent discards. Nothing
/// here aborts the build.
pub fn build_catalog(sources: &[PathBuf]) -> Catalog {
    let mut books = Vec::new();
    let mut discarded = 0_usize;

    for path in sources {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "skipping unreadable source");
                continue;
            }
        };

        let (file_books, file_discarded) = ingest_file(&text);
        tracing::info!(
            path = %path.display(),
            records = file_books.len(),
            discarded = file_discarded,
            "ingested source"
        );
        books.extend(file_books);
        discarded += file_discarded;
    }

    let mut catalog = aggregate(books);
    catalog.discarded_rows = discarded;
    catalog
}

/// One file: line 1 is the header, everything after is data. Blank lines are
/// filtered before tokenizing.
fn ingest_file(text: &str) -> (Vec<Book>, usize) {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let Some(header_line) = lines.next() else {
        return (Vec::new(), 0);
    };
    let header = split_fields(header_line);

    let mut books = Vec::new();
    let mut discarded = 0_usize;
    for line in lines {
        let row = split_fields(line);
        match normalize_row(&header, &row) {
            Some(book) => books.push(book),
            None => {
                tracing::debug!(line, "discarded row");
                discarded += 1;
            }
        }
    }
    (books, discarded)
}

fn aggregate(books: Vec<Book>) -> Catalog {
    let mut catalog = Catalog {
        books,
        ..Catalog::default()
    };

    let mut categories = BTreeSet::new();
    let mut types = BTreeSet::new();
    let mut locations = BTreeSet::new();

    for book in &catalog.books {
        categories.insert(book.category.clone());
        if !book.kind.is_empty() {
            types.insert(book.kind.clone());
        }
        if !book.location.is_empty() {
            locations.insert(book.location.clone());
        }
        *catalog
            .category_counts
            .entry(book.category.clone())
            .or_default() += 1;
        *catalog.author_counts.entry(book.author()).or_default() += 1;
    }

    catalog.categories = categories.into_iter().collect();
    catalog.types = types.into_iter().collect();
    catalog.locations = locations.into_iter().collect();
    catalog
}
