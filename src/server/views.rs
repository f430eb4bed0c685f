//! HTML pages.
//!
//! Every user-supplied value goes through [`escape`] before it lands in
//! markup, and through `urlencoding` before it lands in a link.

use std::fmt::Write as _;

use axum::http::StatusCode;
use axum::response::Html;
use urlencoding::encode;

use crate::types::{Activity, BucketList};

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Bucketlist</title>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
    ))
}

fn nav() -> &'static str {
    r#"<nav><a href="/back_to_bucketlists">My bucket lists</a> | <a href="/logout">Log out</a></nav>"#
}

pub fn login_page() -> Html<String> {
    layout(
        "Log in",
        r#"<h1>Log in</h1>
<form method="post" action="/login">
<label>Username <input type="text" name="username" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Log in</button>
</form>
<p>No account yet? <a href="/signup">Sign up</a></p>"#,
    )
}

pub fn signup_page() -> Html<String> {
    layout(
        "Sign up",
        r#"<h1>Sign up</h1>
<form method="post" action="/signup">
<label>Username <input type="text" name="username" required></label>
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" required></label>
<label>Confirm password <input type="password" name="confirm_password" required></label>
<button type="submit">Create account</button>
</form>
<p>Already registered? <a href="/login">Log in</a></p>"#,
    )
}

/// The index of a user's bucket lists, with a form to add another.
pub fn bucket_lists_page(username: &str, lists: &[BucketList]) -> Html<String> {
    let mut body = format!("{}\n<h1>{}'s bucket lists</h1>\n", nav(), escape(username));

    if lists.is_empty() {
        body.push_str("<p>No bucket lists yet.</p>\n");
    } else {
        body.push_str("<ul class=\"bucketlists\">\n");
        for list in lists {
            let name = encode(&list.name);
            let _ = writeln!(
                body,
                r#"<li><a href="/add_activity?name={name}">{title}</a> {description} <a href="/update_bucketlist/{name}/{desc_seg}">Edit</a> <a href="/delete_bucketlist/{name}">Delete</a></li>"#,
                title = escape(&list.name),
                description = escape(&list.description),
                desc_seg = encode(&list.description),
            );
        }
        body.push_str("</ul>\n");
    }

    body.push_str(
        r#"<h2>New bucket list</h2>
<form method="post" action="/add_bucketlist">
<label>Title <input type="text" name="title" required></label>
<label>Description <input type="text" name="description" required></label>
<button type="submit">Add</button>
</form>"#,
    );

    layout("Bucket lists", &body)
}

/// A single bucket list with its activities.
pub fn bucket_list_page(name: &str, activities: &[Activity]) -> Html<String> {
    let list_seg = encode(name);
    let mut body = format!("{}\n<h1>{}</h1>\n", nav(), escape(name));

    if activities.is_empty() {
        body.push_str("<p>No activities yet.</p>\n");
    } else {
        body.push_str("<ul class=\"activities\">\n");
        for activity in activities {
            let title_seg = encode(&activity.title);
            let _ = writeln!(
                body,
                r#"<li><strong>{title}</strong> {description} <a href="/update_activity/{list_seg}/{title_seg}/{desc_seg}">Edit</a> <a href="/delete_activity/{list_seg}/{title_seg}">Delete</a></li>"#,
                title = escape(&activity.title),
                description = escape(&activity.description),
                desc_seg = encode(&activity.description),
            );
        }
        body.push_str("</ul>\n");
    }

    let _ = write!(
        body,
        r#"<h2>New activity</h2>
<form method="post" action="/add_activity?name={list_seg}">
<label>Title <input type="text" name="title" required></label>
<label>Description <input type="text" name="description" required></label>
<button type="submit">Add</button>
</form>"#
    );

    layout(name, &body)
}

pub fn update_bucket_page(name: &str, description: &str) -> Html<String> {
    let body = format!(
        r#"{nav}
<h1>Edit bucket list</h1>
<form method="post" action="/update_bucket">
<label>Name <input type="text" name="name" value="{name}" required></label>
<label>Description <input type="text" name="description" value="{description}" required></label>
<button type="submit">Save</button>
</form>"#,
        nav = nav(),
        name = escape(name),
        description = escape(description),
    );
    layout("Edit bucket list", &body)
}

pub fn update_activity_page(name: &str, title: &str, description: &str) -> Html<String> {
    let body = format!(
        r#"{nav}
<h1>Edit activity in {heading}</h1>
<form method="post" action="/updt_act">
<input type="hidden" name="name" value="{name}">
<label>Title <input type="text" name="title" value="{title}" required></label>
<label>Description <input type="text" name="description" value="{description}" required></label>
<button type="submit">Save</button>
</form>"#,
        nav = nav(),
        heading = escape(name),
        name = escape(name),
        title = escape(title),
        description = escape(description),
    );
    layout("Edit activity", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        r#"<h1>{code} {reason}</h1>
<p>{message}</p>
<p><a href="/login">Log in</a> | <a href="/back_to_bucketlists">My bucket lists</a></p>"#,
        code = status.as_u16(),
        message = escape(message),
    );
    layout(reason, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_bucket_lists_page_escapes_and_encodes() {
        let lists = vec![BucketList::new("Road <trip>", "Coast to coast")];
        let Html(page) = bucket_lists_page("alice", &lists);

        assert!(page.contains("Road &lt;trip&gt;"));
        assert!(page.contains("/delete_bucketlist/Road%20%3Ctrip%3E"));
        assert!(page.contains("/update_bucketlist/Road%20%3Ctrip%3E/Coast%20to%20coast"));
        assert!(!page.contains("<trip>"));
    }

    #[test]
    fn test_bucket_list_page_links_activities() {
        let activities = vec![Activity::new("Skydive", "Jump")];
        let Html(page) = bucket_list_page("Travel", &activities);

        assert!(page.contains("<strong>Skydive</strong>"));
        assert!(page.contains("/delete_activity/Travel/Skydive"));
        assert!(page.contains("/update_activity/Travel/Skydive/Jump"));
        assert!(page.contains(r#"action="/add_activity?name=Travel""#));
    }

    #[test]
    fn test_empty_pages() {
        let Html(page) = bucket_lists_page("alice", &[]);
        assert!(page.contains("No bucket lists yet."));

        let Html(page) = bucket_list_page("Travel", &[]);
        assert!(page.contains("No activities yet."));
    }
}
