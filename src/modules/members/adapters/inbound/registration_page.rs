// The single registration page: form on top, registered members below.
//
// Rendered by hand; every interpolated value goes through `escape`.

use axum::{extract::State, response::Html};

use crate::modules::members::core::member::Member;
use crate::modules::members::core::validation::{Field, ValidationResult};
use crate::modules::members::use_cases::register_member::command::RegisterMember;
use crate::shell::state::AppState;

pub async fn show(State(state): State<AppState>) -> Html<String> {
    let members = state.members.list_all().await;
    Html(render(
        &RegisterMember::default(),
        &ValidationResult::new(),
        &members,
    ))
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

fn field_value(form: &RegisterMember, field: Field) -> &str {
    match field {
        Field::Name => &form.name,
        Field::Email => &form.email,
        Field::Phone => &form.phone,
    }
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name:",
        Field::Email => "Email:",
        Field::Phone => "Phone #:",
    }
}

/// Element id of the input for `field`; its error span is `{id}.errors`.
pub fn element_id(field: Field) -> &'static str {
    match field {
        Field::Name => "name",
        Field::Email => "email",
        Field::Phone => "phoneNumber",
    }
}

/// Table order: by name, then by id.
pub fn sorted_for_display(members: &[Member]) -> Vec<&Member> {
    let mut rows: Vec<&Member> = members.iter().collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    rows
}

/// Renders the page with the submitted `form` values and their `errors`.
pub fn render(form: &RegisterMember, errors: &ValidationResult, members: &[Member]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\"/>\n<title>kitchensink</title>\n</head>\n<body>\n",
    );
    html.push_str("<h1>Welcome to kitchensink!</h1>\n");
    html.push_str("<form id=\"reg\" method=\"post\" action=\"/\">\n<h2>Member Registration</h2>\n<table>\n");
    for field in Field::ALL {
        let id = element_id(field);
        html.push_str(&format!(
            "<tr><td><label for=\"{id}\">{}</label></td><td><input type=\"text\" id=\"{id}\" name=\"{}\" value=\"{}\"/></td><td>",
            field_label(field),
            field.as_str(),
            escape(field_value(form, field)),
        ));
        if let Some(error) = errors.get(field) {
            html.push_str(&format!(
                "<span id=\"{id}.errors\" class=\"invalid\">{}</span>",
                escape(&error.to_string())
            ));
        }
        html.push_str("</td></tr>\n");
    }
    html.push_str("</table>\n<input type=\"submit\" class=\"register\" value=\"Register\"/>\n</form>\n");

    html.push_str("<h2>Members</h2>\n");
    if members.is_empty() {
        html.push_str("<em>No registered members.</em>\n");
    } else {
        html.push_str(
            "<table class=\"simpletablestyle\">\n<thead><tr><th>Id</th><th>Name</th><th>Email</th><th>Phone #</th><th>REST URL</th></tr></thead>\n<tbody>\n",
        );
        for member in sorted_for_display(members) {
            html.push_str(&format!(
                "<tr><td>{id}</td><td>{}</td><td>{}</td><td>{}</td><td><a href=\"/rest/members/{id}\">/rest/members/{id}</a></td></tr>\n",
                escape(&member.name),
                escape(&member.email),
                escape(&member.phone),
                id = member.id,
            ));
        }
        html.push_str("</tbody>\n</table>\n");
        html.push_str("<p>REST URL for all members: <a href=\"/rest/members\">/rest/members</a></p>\n");
    }
    html.push_str("</body>\n</html>\n");
    html
}
