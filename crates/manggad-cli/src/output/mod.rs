use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Columns shown for thesis rows in table mode, as (field, header).
const THESIS_COLUMNS: &[(&str, &str)] = &[
    ("id", "id"),
    ("title", "title"),
    ("year_of_submission", "year"),
    ("program", "program"),
    ("recommendation_count", "recs"),
];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(&serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Fields rendered as the row set of a response, in preference order.
const ROW_FIELDS: &[&str] = &["results", "theses"];

/// Arrays become one row per item. Responses holding a row set (search
/// results, thesis listings) show the rows followed by their other fields.
/// Other objects show each list of objects as its own section.
fn render_table(value: &Value) -> String {
    match value {
        Value::Array(items) => render_rows(items),
        Value::Object(map) => {
            if let Some((field, items)) = ROW_FIELDS
                .iter()
                .find_map(|f| map.get(*f).and_then(Value::as_array).map(|items| (*f, items)))
            {
                let mut out = render_rows(items);
                let summary = summary_line(map, field);
                if !summary.is_empty() {
                    out.push_str("\n\n");
                    out.push_str(&summary);
                }
                return out;
            }

            let sections: Vec<String> = map
                .iter()
                .filter_map(|(key, v)| {
                    v.as_array()
                        .filter(|items| !items.is_empty() && items.iter().all(Value::is_object))
                        .map(|items| format!("{key}:\n{}", render_rows(items)))
                })
                .collect();
            if sections.is_empty() {
                render_key_values(map)
            } else {
                sections.join("\n\n")
            }
        }
        scalar => table::render_table(&["value"], &[vec![cell(scalar)]], options()),
    }
}

fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no theses)");
    }
    let objects: Vec<&Map<String, Value>> = items.iter().filter_map(Value::as_object).collect();

    let thesis_rows = objects.iter().all(|o| o.contains_key("title"));
    let columns: Vec<(String, String)> = if thesis_rows {
        THESIS_COLUMNS
            .iter()
            .map(|(field, header)| ((*field).to_string(), (*header).to_string()))
            .collect()
    } else {
        let mut keys: Vec<String> = Vec::new();
        for object in &objects {
            for key in object.keys() {
                if !keys.contains(key) {
                    keys.push(key.clone());
                }
            }
        }
        keys.into_iter().map(|k| (k.clone(), k)).collect()
    };

    let headers: Vec<&str> = columns.iter().map(|(_, h)| h.as_str()).collect();
    let rows: Vec<Vec<String>> = objects
        .iter()
        .map(|object| {
            columns
                .iter()
                .map(|(field, _)| object.get(field).map_or_else(|| "-".to_string(), cell))
                .collect()
        })
        .collect();
    table::render_table(&headers, &rows, options())
}

fn render_key_values(map: &Map<String, Value>) -> String {
    let rows: Vec<Vec<String>> = map
        .iter()
        .map(|(key, value)| vec![key.clone(), cell(value)])
        .collect();
    table::render_table(&["field", "value"], &rows, options())
}

fn summary_line(map: &Map<String, Value>, rows_field: &str) -> String {
    map.iter()
        .filter(|(k, v)| {
            k.as_str() != rows_field
                && !v.is_null()
                && !v.as_array().is_some_and(Vec::is_empty)
        })
        .map(|(k, v)| format!("{k}: {}", cell(v)))
        .collect::<Vec<_>>()
        .join("  ")
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        Value::Array(items) => items.iter().map(cell).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::{cell, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn plain_object_renders_as_key_values() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("field")));
        assert!(out.contains("value"));
    }

    #[test]
    fn listing_renders_thesis_columns_and_summary() {
        let value = json!({
            "theses": [{
                "id": "ths-00000001",
                "title": "Sustainable Tourism Practices",
                "abstract_text": null,
                "year_of_submission": 2024,
                "program": "BS in Tourism Management",
                "recommendation_count": 8
            }],
            "total": 1
        });
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().unwrap();
        assert!(header.starts_with("id"));
        assert!(header.contains("recs"));
        assert!(!header.contains("abstract"));
        assert!(out.contains("Sustainable Tourism Practices"));
        assert!(out.ends_with("total: 1"));
    }

    #[test]
    fn search_response_summarizes_filters() {
        let value = json!({
            "query": "tourism",
            "year": null,
            "departments": ["School of Hospitality and Tourism Management (SHTM)"],
            "programs": [],
            "results": [{"id": "ths-2", "title": "Sustainable Tourism Practices"}],
            "total_results": 1
        });
        let out = render(&value, OutputFormat::Table).unwrap();
        assert!(out.contains("Sustainable Tourism Practices"));
        assert!(out.contains("departments: School of Hospitality"));
        assert!(!out.contains("programs:"));
        assert!(out.contains("total_results: 1"));
    }

    #[test]
    fn vocabularies_render_as_sections() {
        let value = json!({
            "departments": [{"code": "sbit", "label": "SBIT"}],
            "programs": [{"code": "psychology", "label": "BS in Psychology"}]
        });
        let out = render(&value, OutputFormat::Table).unwrap();
        assert!(out.starts_with("departments:"));
        assert!(out.contains("programs:"));
        assert!(out.contains("BS in Psychology"));
    }

    #[test]
    fn empty_listing_is_marked() {
        let out = render(&json!({"theses": [], "total": 0}), OutputFormat::Table).unwrap();
        assert!(out.starts_with("(no theses)"));
    }

    #[test]
    fn list_cells_are_joined() {
        assert_eq!(cell(&json!(["ai", "ethics"])), "ai, ethics");
        assert_eq!(cell(&json!(null)), "-");
    }
}
