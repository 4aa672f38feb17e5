//! Server-rendered pages for the public site.
//!
//! The site is small enough that pages are inline markup behind one shared
//! shell; there is no template engine.

use axum::response::Html;

/// Wrap page content in the shared document shell.
pub(crate) fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} &mdash; The Old Garrison Inn</title>
</head>
<body>
<nav>
<a href="/">Home</a>
<a href="/about">About</a>
<a href="/generals-quarters">General's Quarters</a>
<a href="/majors-suite">Major's Suite</a>
<a href="/search-availability">Book Now</a>
<a href="/contact">Contact</a>
</nav>
<main>
{body}
</main>
</body>
</html>"#
    ))
}

pub async fn home() -> Html<String> {
    layout(
        "Welcome",
        r#"<h1>The Old Garrison Inn</h1>
<p>Two quiet rooms above the harbour, open all year. Check availability and
book your stay online.</p>
<p><a href="/search-availability">Search availability</a></p>"#,
    )
}

pub async fn about() -> Html<String> {
    layout(
        "About",
        r#"<h1>About the Inn</h1>
<p>The Old Garrison Inn has hosted travellers since the barracks were
converted in 1946. Breakfast is served from seven; the bar closes when the
last guest does.</p>"#,
    )
}

pub async fn generals_quarters() -> Html<String> {
    layout(
        "General's Quarters",
        r#"<h1>General's Quarters</h1>
<p>Our largest room: king bed, sea view, writing desk by the window.</p>
<p><a href="/search-availability">Check availability</a></p>"#,
    )
}

pub async fn majors_suite() -> Html<String> {
    layout(
        "Major's Suite",
        r#"<h1>Major's Suite</h1>
<p>A snug suite under the eaves with a queen bed and a private sitting
corner.</p>
<p><a href="/search-availability">Check availability</a></p>"#,
    )
}

pub async fn contact() -> Html<String> {
    layout(
        "Contact",
        r#"<h1>Contact Us</h1>
<p>The Old Garrison Inn<br>
14 Battery Lane<br>
Phone: 555-555-5555<br>
Email: stay@oldgarrisoninn.example</p>"#,
    )
}
