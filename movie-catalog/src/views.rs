//! HTML rendering helpers. The pages are small enough that a template
//! engine would outweigh them; everything user-supplied goes through
//! `escape`.

use crate::models::Movie;
use axum::http::StatusCode;

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

pub fn home_page() -> String {
    layout(
        "Movie catalog",
        "<h1>Movie catalog</h1>\n<ul>\n<li><a href=\"/movies\">Movies</a></li>\n<li><a href=\"/hello\">Hello demo</a></li>\n</ul>",
    )
}

pub fn list_page(movies: &[Movie], title_filter: &str) -> String {
    let mut rows = String::new();
    for m in movies {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td>\
             <td><a href=\"/movies/{id}\">Details</a> \
             <a href=\"/movies/{id}/edit\">Edit</a> \
             <a href=\"/movies/{id}/delete\">Delete</a></td></tr>\n",
            escape(&m.title),
            m.release_date.format("%Y-%m-%d"),
            escape(&m.genre),
            m.price,
            id = m.id,
        ));
    }
    layout(
        "Movies",
        &format!(
            "<h1>Movies</h1>\n\
             <form method=\"get\" action=\"/movies\">\n\
             <label>Title <input type=\"text\" name=\"title\" value=\"{}\"></label>\n\
             <button type=\"submit\">Filter</button>\n\
             </form>\n\
             <p><a href=\"/movies/create\">Create new</a></p>\n\
             <table>\n\
             <tr><th>Title</th><th>Release date</th><th>Genre</th><th>Price</th><th></th></tr>\n\
             {}</table>",
            escape(title_filter),
            rows
        ),
    )
}

pub fn details_page(movie: &Movie) -> String {
    layout(
        "Movie details",
        &format!(
            "<h1>{}</h1>\n<dl>\n\
             <dt>Release date</dt><dd>{}</dd>\n\
             <dt>Genre</dt><dd>{}</dd>\n\
             <dt>Price</dt><dd>{:.2}</dd>\n\
             </dl>\n\
             <p><a href=\"/movies/{id}/edit\">Edit</a> <a href=\"/movies\">Back to list</a></p>",
            escape(&movie.title),
            movie.release_date.format("%Y-%m-%d"),
            escape(&movie.genre),
            movie.price,
            id = movie.id,
        ),
    )
}

fn movie_fields(movie: Option<&Movie>) -> String {
    let (title, date, genre, price) = match movie {
        Some(m) => (
            escape(&m.title),
            m.release_date.format("%Y-%m-%d").to_string(),
            escape(&m.genre),
            format!("{:.2}", m.price),
        ),
        None => (String::new(), String::new(), String::new(), String::new()),
    };
    format!(
        "<label>Title <input type=\"text\" name=\"title\" value=\"{}\"></label><br>\n\
         <label>Release date <input type=\"date\" name=\"release_date\" value=\"{}\"></label><br>\n\
         <label>Genre <input type=\"text\" name=\"genre\" value=\"{}\"></label><br>\n\
         <label>Price <input type=\"number\" step=\"0.01\" name=\"price\" value=\"{}\"></label><br>\n",
        title, date, genre, price
    )
}

pub fn create_page() -> String {
    layout(
        "Create movie",
        &format!(
            "<h1>Create movie</h1>\n<form method=\"post\" action=\"/movies/create\">\n{}\
             <button type=\"submit\">Save</button>\n</form>\n\
             <p><a href=\"/movies\">Back to list</a></p>",
            movie_fields(None)
        ),
    )
}

pub fn edit_page(movie: &Movie) -> String {
    layout(
        "Edit movie",
        &format!(
            "<h1>Edit movie</h1>\n<form method=\"post\" action=\"/movies/{}/edit\">\n{}\
             <button type=\"submit\">Save</button>\n</form>\n\
             <p><a href=\"/movies\">Back to list</a></p>",
            movie.id,
            movie_fields(Some(movie))
        ),
    )
}

pub fn delete_page(movie: &Movie) -> String {
    layout(
        "Delete movie",
        &format!(
            "<h1>Delete movie</h1>\n<p>Are you sure you want to delete {}?</p>\n\
             <form method=\"post\" action=\"/movies/{}/delete\">\n\
             <button type=\"submit\">Delete</button>\n</form>\n\
             <p><a href=\"/movies\">Back to list</a></p>",
            escape(&movie.title),
            movie.id,
        ),
    )
}

pub fn hello_page() -> String {
    layout(
        "Hello",
        "<h1>Hello</h1>\n<p>Try <a href=\"/hello/welcome?name=Rick&amp;num_times=4\">/hello/welcome?name=Rick&amp;num_times=4</a>.</p>",
    )
}

pub fn welcome_page(name: &str, num_times: u32) -> String {
    let mut items = String::new();
    for _ in 0..num_times {
        items.push_str(&format!("<li>Hello {}</li>\n", escape(name)));
    }
    layout(
        "Welcome",
        &format!("<h1>Welcome</h1>\n<ul>\n{}</ul>", items),
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    layout(
        "Error",
        &format!(
            "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/movies\">Back to list</a></p>",
            status,
            escape(message)
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<b a="1">&'</b>"#),
            "&lt;b a=&quot;1&quot;&gt;&amp;&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn welcome_page_repeats_and_escapes() {
        let page = welcome_page("<Rick>", 3);
        assert_eq!(page.matches("Hello &lt;Rick&gt;").count(), 3);
        assert!(!page.contains("<Rick>"));
    }
}
