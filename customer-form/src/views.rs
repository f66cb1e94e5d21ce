//! HTML rendering helpers. The pages are small enough that a template
//! engine would outweigh them; everything user-supplied goes through
//! `escape`.

use crate::models::Customer;

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

pub fn index_page(customers: &[Customer]) -> String {
    let mut rows = String::new();
    for c in customers {
        rows.push_str(&format!("<li>{}</li>\n", escape(&c.name)));
    }
    layout(
        "Customers",
        &format!(
            "<h1>Customers</h1>\n<ul>\n{}</ul>\n<p><a href=\"/customers/create\">Create new</a></p>",
            rows
        ),
    )
}

/// The create form, optionally redisplayed with the rejected value and its
/// validation messages.
pub fn create_page(name: &str, errors: &[String]) -> String {
    let mut error_list = String::new();
    if !errors.is_empty() {
        error_list.push_str("<ul class=\"validation-errors\">\n");
        for e in errors {
            error_list.push_str(&format!("<li>{}</li>\n", escape(e)));
        }
        error_list.push_str("</ul>\n");
    }
    layout(
        "Create customer",
        &format!(
            "<h1>Create customer</h1>\n{}<form method=\"post\" action=\"/customers/create\">\n<label>Name <input type=\"text\" name=\"name\" value=\"{}\"></label>\n<button type=\"submit\">Save</button>\n</form>\n<p><a href=\"/\">Back to list</a></p>",
            error_list,
            escape(name)
        ),
    )
}

pub fn error_page(message: &str) -> String {
    layout(
        "Error",
        &format!("<h1>An error occurred</h1>\n<p>{}</p>", escape(message)),
    )
}
