use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::catalog::{build_catalog, discover_sources};
use crate::cli::{BuildArgs, CatalogArgs};
use crate::render::{
    PageContext, render_author_page, render_authors_overview, render_categories_overview,
    render_category_page, render_index, render_script, render_stylesheet,
};
use crate::slug::slugify;
use crate::theme::assign_colors;

pub fn run(args: BuildArgs) -> anyhow::Result<()> {
    let books_dir = PathBuf::from(&args.books);
    let out_dir = PathBuf::from(&args.out);

    if out_dir.exists() && !args.force {
        anyhow::bail!("site output directory already exists: {}", out_dir.display());
    }

    let sources = discover_sources(&books_dir).context("discover sources")?;
    tracing::info!(sources = sources.len(), books = %books_dir.display(), "build: ingest");
    let catalog = build_catalog(&sources);
    tracing::info!(
        records = catalog.books.len(),
        discarded = catalog.discarded_rows,
        categories = catalog.categories.len(),
        "build: catalog ready"
    );

    let colors = assign_colors(&catalog.category_counts);

    std::fs::create_dir_all(out_dir.join("categories"))
        .with_context(|| format!("create categories dir: {}", out_dir.display()))?;
    std::fs::create_dir_all(out_dir.join("authors"))
        .with_context(|| format!("create authors dir: {}", out_dir.display()))?;

    tracing::info!("build: render pages");
    let root_ctx = PageContext {
        site_title: &args.title,
        base_path: "./",
    };
    let nested_ctx = PageContext {
        site_title: &args.title,
        base_path: "../",
    };

    write_page(
        &out_dir.join("index.html"),
        &render_index(&catalog, &colors, root_ctx),
    )?;
    write_page(
        &out_dir.join("categories.html"),
        &render_categories_overview(&catalog, &colors, root_ctx),
    )?;
    write_page(
        &out_dir.join("authors.html"),
        &render_authors_overview(&catalog, root_ctx),
    )?;

    for category in &catalog.categories {
        let path = out_dir
            .join("categories")
            .join(format!("{}.html", slugify(category)));
        write_page(
            &path,
            &render_category_page(category, &catalog, &colors, nested_ctx),
        )?;
    }
    for author in catalog.author_counts.keys() {
        let path = out_dir
            .join("authors")
            .join(format!("{}.html", slugify(author)));
        write_page(
            &path,
            &render_author_page(author, &catalog, &colors, nested_ctx),
        )?;
    }

    write_page(&out_dir.join("style.css"), &render_stylesheet())?;
    write_page(&out_dir.join("script.js"), &render_script())?;

    let data = serde_json::to_string_pretty(&catalog.books).context("serialize book records")?;
    write_page(&out_dir.join("books-data.json"), &data)?;

    tracing::info!(out = %out_dir.display(), "build: done");
    Ok(())
}

pub fn run_catalog(args: CatalogArgs) -> anyhow::Result<()> {
    let books_dir = PathBuf::from(&args.books);
    let out_path = PathBuf::from(&args.out);

    if out_path.exists() && !args.force {
        anyhow::bail!("catalog output already exists: {}", out_path.display());
    }

    let sources = discover_sources(&books_dir).context("discover sources")?;
    let catalog = build_catalog(&sources);
    tracing::info!(
        records = catalog.books.len(),
        discarded = catalog.discarded_rows,
        "catalog ready"
    );

    if let Some(parent) = out_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create catalog dir: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(&catalog.books).context("serialize book records")?;

    let mut options = OpenOptions::new();
    options.write(true);
    if args.force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut out = options
        .open(&out_path)
        .with_context(|| format!("open catalog output: {}", out_path.display()))?;
    out.write_all(json.as_bytes())
        .with_context(|| format!("write catalog: {}", out_path.display()))?;
    out.write_all(b"\n").context("write catalog newline")?;
    out.flush().context("flush catalog")?;

    Ok(())
}

fn write_page(path: &Path, contents: &str) -> anyhow::Result<()> {
    std::fs::write(path, contents).with_context(|| format!("write: {}", path.display()))
}
