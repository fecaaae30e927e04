//! HTML pages for the notes UI.
//!
//! Pages are plain strings; every user-supplied value passes through
//! [`escape_html`] before it reaches a page.

use jotter_core::form::FormErrors;
use jotter_core::note::{Note, NoteDraft};

const STYLE: &str = "body{font-family:sans-serif;max-width:40rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:1rem}\
input,textarea{width:100%;padding:.4rem;margin-top:.25rem}\
button{margin-top:1rem;padding:.4rem 1.2rem}\
time{color:#666;font-size:.85rem}\
.error{color:#b00;margin:.25rem 0 0}\
.empty{color:#666}";

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, content: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} - jotter</title>\n<style>{style}</style>\n</head>\n<body>\n\
         <main>\n{content}</main>\n</body>\n</html>\n",
        title = escape_html(title),
        style = STYLE,
    )
}

pub fn note_list(notes: &[Note]) -> String {
    let mut content = String::from("<h1>Notes</h1>\n");
    if notes.is_empty() {
        content.push_str("<p class=\"empty\">No notes yet.</p>\n");
    } else {
        content.push_str("<ul class=\"notes\">\n");
        for note in notes {
            content.push_str(&format!(
                "<li><a href=\"/{id}\">{title}</a> <time>{created}</time></li>\n",
                id = note.id,
                title = escape_html(&note.title),
                created = note.created_at.format("%Y-%m-%d %H:%M"),
            ));
        }
        content.push_str("</ul>\n");
    }
    content.push_str("<p><a href=\"/new\">Add a note</a></p>\n");
    layout("Notes", &content)
}

pub fn note_detail(note: &Note) -> String {
    let body = escape_html(&note.body).replace('\n', "<br>\n");
    let content = format!(
        "<h1>{title}</h1>\n<time>{created}</time>\n<p>{body}</p>\n\
         <p><a href=\"/\">Back to notes</a></p>\n",
        title = escape_html(&note.title),
        created = note.created_at.format("%Y-%m-%d %H:%M"),
    );
    layout(&note.title, &content)
}

/// The create form, empty on first display or carrying the submitted
/// values and field messages after a failed validation.
pub fn note_form(draft: &NoteDraft, errors: &FormErrors) -> String {
    let mut content =
        String::from("<h1>New note</h1>\n<form method=\"post\" action=\"/new\">\n");

    content.push_str("<label for=\"title\">Title</label>\n");
    if let Some(msg) = &errors.title {
        content.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(msg)));
    }
    content.push_str(&format!(
        "<input id=\"title\" name=\"title\" type=\"text\" value=\"{}\">\n",
        escape_html(&draft.title)
    ));

    content.push_str("<label for=\"body\">Body</label>\n");
    if let Some(msg) = &errors.body {
        content.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(msg)));
    }
    content.push_str(&format!(
        "<textarea id=\"body\" name=\"body\" rows=\"8\">{}</textarea>\n",
        escape_html(&draft.body)
    ));

    content.push_str("<button type=\"submit\">Save</button>\n</form>\n");
    content.push_str("<p><a href=\"/\">Back to notes</a></p>\n");
    layout("New note", &content)
}

pub fn not_found(what: &str) -> String {
    layout(
        "Not found",
        &format!(
            "<h1>Not found</h1>\n<p>No such {}.</p>\n<p><a href=\"/\">Back to notes</a></p>\n",
            escape_html(what)
        ),
    )
}

pub fn server_error() -> String {
    layout(
        "Server error",
        "<h1>Server error</h1>\n<p>Something went wrong. Try again later.</p>\n",
    )
}
