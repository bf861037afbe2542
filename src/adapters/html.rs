use crate::domain::model::{CardPage, Grid, LeaderboardEntry};
use std::fmt::Write;

pub const EMPTY_LEADERBOARD: &str = "No bingo used for now";

/// Escapes text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

fn card_table(grid: &Grid) -> String {
    let mut table = String::new();
    for row in grid {
        table.push_str("<tr>");
        for cell in row {
            let _ = write!(table, "<td>{}</td>", escape(cell));
        }
        table.push_str("</tr>");
    }
    table
}

pub fn card_page(page: &CardPage, resource_path: &str) -> String {
    let res = escape(resource_path.trim_end_matches('/'));
    let title = escape(&page.title);
    let shout = escape(&page.shout);
    let table = card_table(&page.grid);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta http-equiv="Content-Type" content="text/html; charset=utf-8"/>
    <meta name="apple-mobile-web-app-capable" content="yes" />
    <meta name="description" content="Randomly generated buzzword bingo cards" />
    <meta name="keywords" content="bingo" />
    <meta name="viewport" content="width=750">
    <title>{title}</title>
    <link type="text/plain" rel="author" href="{res}/humans.txt" />
    <link rel="shortcut icon" href="{res}/favicon.ico" type="image/ico" />
    <link rel="icon" href="{res}/favicon.ico" />
    <link rel="apple-touch-icon" href="{res}/img/bsbingo.png" type="image/png" />
    <link rel="stylesheet" type="text/css" href="{res}/css/style.css" />
    <link rel="image_src" href="{res}/img/bsbingo.png" />
    <script type="text/javascript" src="{res}/js/game.js" async></script>
  </head>
  <body>
    <h1>{title}</h1>
    <center><h3>Shout <b>«{shout}»</b> when you complete a row or a column!</h3></center>
    <br/>
    <table class="card" id="card0" border="1" cellspacing="0">
      {table}
    </table>
    <br/>
    <br/>
    <center><small>Layout borrowed from <a href="https://www.buzzwordbingogame.com">buzzwordbingogame.com</a></small></center>
  </body>
</html>
"#
    )
}

pub fn leaderboard_page(entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_LEADERBOARD.to_string();
    }

    let mut html = String::from("<table> <tr> <th>bingo</th> <th>cards generated</th> </tr>\n");
    for entry in entries {
        let id = escape(&entry.identifier);
        let _ = writeln!(
            html,
            " <tr> <td><a href=\"/{id}\">{id}</a></td> <td>{}</td> </tr>",
            entry.hits
        );
    }
    html.push_str("</table>");
    html
}
