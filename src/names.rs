//! Conversions between catalog names (`NOT_FOUND`) and display names (`Not Found`).

/// Turns user input into the form stored in the catalog.
///
/// Uppercases, trims and collapses each run of whitespace into a single `_`,
/// so `"not   found"`, `"Not Found"` and `"NOT_FOUND"` all become `NOT_FOUND`.
pub fn to_lookup_form(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_uppercase()
}

/// Turns a catalog name into something fit for humans, `IM_A_TEAPOT` becomes `Im A Teapot`.
pub fn to_display_form(name: &str) -> String {
    let mut pretty = String::with_capacity(name.len());
    let mut word_start = true;
    for c in name.replace('_', " ").to_lowercase().chars() {
        if word_start {
            pretty.extend(c.to_uppercase());
        } else {
            pretty.push(c);
        }
        word_start = !c.is_alphabetic();
    }
    pretty
}
