use rocket_dyn_templates::tera::{self, Filter, Tera, Value};
use std::collections::HashMap;
use time::format_description::BorrowedFormatItem as FormatItem;
use time::macros::format_description;
use time::Date;

pub(super) fn register_custom_filters(tera: &mut Tera) {
    tera.register_filter("markdown", string_filter("markdown", |input| Ok(markdown(input))));
    tera.register_filter("long_date", string_filter("long_date", long_date));
}

/// Adapts a function over a string to a Tera filter without arguments.
fn string_filter(
    name: &'static str,
    filter: fn(&str) -> tera::Result<String>,
) -> impl Filter {
    move |value: &Value, _args: &HashMap<String, Value>| -> tera::Result<Value> {
        let input = value.as_str().ok_or_else(|| {
            tera::Error::msg(format!("Filter `{name}` received value {value}, expected a string"))
        })?;
        filter(input).map(Value::from)
    }
}

/// Renders user-supplied markdown. Raw HTML is escaped instead of passed through.
fn markdown(input: &str) -> String {
    use pulldown_cmark::{html, Event, Options, Parser};

    const OPTIONS: Options = Options::empty()
        .union(Options::ENABLE_TABLES)
        .union(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(input, OPTIONS).map(|event| match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        event => event,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

fn long_date(input: &str) -> tera::Result<String> {
    const INPUT_FORMAT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");
    const OUTPUT_FORMAT: &[FormatItem<'_>] =
        format_description!("[weekday repr:long], [day padding:none] [month repr:long] [year]");
    let date = Date::parse(input, INPUT_FORMAT)
        .map_err(|e| tera::Error::msg(format!("Invalid date {input}: {e}")))?;
    date.format(OUTPUT_FORMAT)
        .map_err(|e| tera::Error::msg(format!("Error formatting date {date}: {e}")))
}
