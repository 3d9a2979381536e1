use std::collections::BTreeMap;

use super::{PropValue, PropertyKey};

/// Keys shorter than this get an extra tab so the `=` signs line up.
const SHORT_KEY_LEN: usize = 7;

/// Renders a `GetAll` result as aligned `key = value` lines.
///
/// Player properties come first, sorted by name and without `Metadata`.
/// After a blank line the metadata entries follow, sorted by their full key
/// but printed under the second `:`-separated segment (`xesam:title`
/// becomes `title`, `a:b:c` becomes `b`). Only the first artist is shown.
pub fn format_report(properties: &BTreeMap<String, PropValue>) -> String {
    let mut output = String::new();
    let metadata_key = PropertyKey::Metadata.as_str();

    for (key, value) in properties.iter().filter(|(key, _)| *key != metadata_key) {
        push_line(&mut output, key, &value.to_string());
    }

    output.push('\n');

    if let Some(PropValue::Map(metadata)) = properties.get(metadata_key) {
        for (key, value) in metadata {
            let name = key.split(':').nth(1).unwrap_or(key);
            let shown = match (name, value) {
                ("artist", PropValue::List(artists)) => artists
                    .first()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
                _ => value.to_string(),
            };
            push_line(&mut output, name, &shown);
        }
    }

    output
}

fn push_line(output: &mut String, key: &str, value: &str) {
    let separator = if key.len() < SHORT_KEY_LEN {
        " \t\t=  "
    } else {
        " \t=  "
    };
    output.push_str(key);
    output.push_str(separator);
    output.push_str(value);
    output.push('\n');
}
