/// Declarative listing configuration consumed by the administrative
/// presentation layer: which fields a list shows, which ones free-text
/// search covers, which ones are offered as filters.
///
/// Names follow the column names of the model; `parent__field` denotes a
/// field reached through the owning record.
pub trait AdminListing {
    /// Stable entity name used by the presentation layer
    const ENTITY: &'static str;

    const DISPLAY_FIELDS: &'static [&'static str];

    const SEARCH_FIELDS: &'static [&'static str] = &[];

    const FILTER_FIELDS: &'static [&'static str] = &[];

    /// Date field used for drill-down navigation, if any
    const DATE_HIERARCHY: Option<&'static str> = None;
}
