//! Server-rendered translator page

use tera::{Context, Tera};

use crate::core::errors::Result;
use crate::core::languages::{LanguageCatalog, LanguageEntry, AUTO_DETECT_NAME};
use crate::core::models::AUTO_DETECT;

const PAGE_TEMPLATE: &str = include_str!("../../templates/index.html.tera");

/// Render the page from the two selector lists, in the order given.
///
/// An explicit auto-detect option leads the source list unless `source`
/// already carries one. Codes and names are HTML-escaped.
pub fn render_page<'a, S, T>(source: S, targets: T, powered_by: &str) -> Result<String>
where
    S: IntoIterator<Item = &'a LanguageEntry>,
    T: IntoIterator<Item = &'a LanguageEntry>,
{
    let source: Vec<&LanguageEntry> = source.into_iter().collect();
    let targets: Vec<&LanguageEntry> = targets.into_iter().collect();

    let mut context = Context::new();
    context.insert("prepend_auto", &!source.iter().any(|e| e.code == AUTO_DETECT));
    context.insert("auto_code", AUTO_DETECT);
    context.insert("auto_name", AUTO_DETECT_NAME);
    context.insert("source", &source);
    context.insert("targets", &targets);
    context.insert("powered_by", powered_by);

    Ok(Tera::one_off(PAGE_TEMPLATE, &context, true)?)
}

/// Render both views of `catalog`
pub fn render_catalog(catalog: &LanguageCatalog, powered_by: &str) -> Result<String> {
    render_page(catalog.entries(), catalog.target_entries(), powered_by)
}
