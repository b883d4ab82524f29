//! Field name normalization.

/// Converts a declared field identifier into a lowercase-leading camel-case
/// external name.
///
/// Leading acronyms are folded into lower case except for the capital that
/// starts the following word (`ACTTest` becomes `actTest`, `ID` becomes `id`).
/// Snake-case identifiers are joined into upper-camel segments first, so
/// `first_name` and `FirstName` both become `firstName`.
pub fn normalize(identifier: &str) -> String {
    let identifier = identifier.strip_prefix("r#").unwrap_or(identifier);
    let mut chars: Vec<char> = if identifier.contains('_') {
        join_segments(identifier).chars().collect()
    } else {
        identifier.chars().collect()
    };

    let len = chars.len();
    let mut last_uppercase = false;
    for i in 0..len {
        let mut lower = true;
        if i > 0 {
            if let Some(next) = chars.get(i + 1) {
                // Keep only the final capital of a leading run.
                lower = next.is_uppercase();
            }
            if len == i + 2 && last_uppercase {
                lower = true;
            }
        }
        last_uppercase = chars[i].is_uppercase();

        if lower {
            chars[i] = chars[i].to_lowercase().next().unwrap_or(chars[i]);
        }
    }
    chars.into_iter().collect()
}

fn join_segments(identifier: &str) -> String {
    identifier
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(capitalize_first)
        .collect()
}

/// Capitalizes the first character of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
