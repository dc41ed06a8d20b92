//! HTML pages.

use chrono::{Datelike, NaiveDate};

use crate::calendar::{month_name, month_weeks};
use crate::view::View;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 1em 2em; }
nav a { margin-right: 0.5em; }
table.month { border-collapse: collapse; margin-bottom: 2em; }
table.month th, table.month td { border: 1px solid #ddd; padding: 2px 4px; text-align: center; min-width: 1.6em; }
table.month th.name, table.month td.name { text-align: left; white-space: nowrap; }
table.month .other { color: #aaa; }
table.month .weekend { background: #f4f4f4; }
table.month .today { outline: 2px solid #d33; }
table.month tr.project th { background: #eee; text-align: left; }
textarea { width: 100%; height: 70vh; font-family: monospace; }
";

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        escape(title)
    )
}

fn navigation(view: &View) -> String {
    let selection = view.selection;
    let mut nav = String::from("<nav>\n");

    if let Some(previous) = selection.previous() {
        nav.push_str(&format!("<a href=\"{}\">&laquo;</a>\n", previous.path()));
    }
    nav.push_str(&format!(
        "<strong>{}</strong>\n",
        escape(&selection.title())
    ));
    if let Some(next) = selection.next() {
        nav.push_str(&format!("<a href=\"{}\">&raquo;</a>\n", next.path()));
    }

    nav.push_str(&format!(
        "| <a href=\"/{year}/\">{year}</a>\n\
         | <a href=\"/\">today</a>\n\
         | <a href=\"/edit\">edit</a>\n\
         | <a href=\"/plan.ics\">ics</a>\n</nav>\n",
        year = selection.year()
    ));

    nav
}

fn day_classes(day: NaiveDate, month: u32, today: NaiveDate) -> String {
    let mut classes = Vec::new();
    if day.month() != month {
        classes.push("other");
    }
    if day.weekday().number_from_monday() > 5 {
        classes.push("weekend");
    }
    if day == today {
        classes.push("today");
    }
    classes.join(" ")
}

fn month_table(view: &View, year: i32, month: u32, today: NaiveDate) -> String {
    let (Some(weeks), Some(name)) = (month_weeks(year, month), month_name(month)) else {
        return String::new();
    };
    let days = weeks.iter().flatten().copied().collect::<Vec<_>>();

    let mut table = format!(
        "<h2>{name} {year}</h2>\n<table class=\"month\">\n<tr><th class=\"name\"></th>"
    );
    for day in &days {
        table.push_str(&format!(
            "<th class=\"{}\">{}</th>",
            day_classes(*day, month, today),
            day.day()
        ));
    }
    table.push_str("</tr>\n");

    for project in &view.projects {
        table.push_str(&format!(
            "<tr class=\"project\"><th colspan=\"{}\">{}</th></tr>\n",
            days.len() + 1,
            escape(&project.project)
        ));

        for row in &project.people {
            table.push_str(&format!(
                "<tr><td class=\"name\" style=\"color: {color}\">{}</td>",
                escape(&row.person),
                color = row.color
            ));
            for day in &days {
                let classes = day_classes(*day, month, today);
                if row.covers(*day) {
                    table.push_str(&format!(
                        "<td class=\"{classes}\" style=\"background: {}\" title=\"{} {}\"></td>",
                        row.color,
                        escape(&row.person),
                        day.format("%Y-%m-%d")
                    ));
                } else {
                    table.push_str(&format!("<td class=\"{classes}\"></td>"));
                }
            }
            table.push_str("</tr>\n");
        }
    }

    table.push_str("</table>\n");
    table
}

pub fn calendar_page(view: &View, today: NaiveDate) -> String {
    let mut body = navigation(view);

    if view.is_empty() {
        body.push_str("<p>Nothing planned.</p>\n");
    }

    for month in view.selection.months() {
        body.push_str(&month_table(view, view.selection.year(), month, today));
    }

    page(&format!("managenplot - {}", view.selection.title()), &body)
}

pub fn edit_page(text: &str) -> String {
    let body = format!(
        "<nav>\n<a href=\"/\">back</a>\n| <a href=\"/testdata\">add test data</a>\n</nav>\n\
         <p>One line per assignment: <code>from 2024-03-01 to 2024-03-05 alice does proj1.</code></p>\n\
         <form method=\"post\" action=\"/save\">\n\
         <textarea name=\"text\">{}</textarea>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n",
        escape(text)
    );

    page("managenplot - edit", &body)
}
